//! Site-order generator and benchmark utilities for percolation grids.
//!
//! This crate provides deterministic, seeded open sequences for
//! benchmarking and property-based testing of `percolation-core`, plus
//! invariant checkers that cross-check the union-find answers.

pub mod correctness;
pub mod generator;

pub use generator::{GeneratorConfig, SizeTier, build_grid, site_order};
