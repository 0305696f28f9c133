#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod error;
pub mod grid;
pub mod site;
pub mod union_find;

pub use error::PercolationError;
pub use grid::ConnectivityGrid;
pub use site::{Site, SiteIndexer, VIRTUAL_TOP};
pub use union_find::UnionFind;
