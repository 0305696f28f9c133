//! Open/blocked site table with incremental top-to-bottom connectivity.
//!
//! [`ConnectivityGrid`] keeps two [`UnionFind`] structures over the same node
//! ordinals (see [`crate::site`]):
//!
//! - `percolation` has `n² + 2` nodes. Open row-1 sites are joined to the
//!   virtual top and open row-`n` sites to the virtual bottom, so the grid
//!   percolates exactly when the two anchors share a root.
//! - `fullness` has `n² + 1` nodes and only the virtual top. A site is full
//!   exactly when it shares a root with the virtual top here.
//!
//! The second structure exists because of backwash. Once the grid percolates,
//! the virtual bottom is connected to the virtual top in `percolation`, and
//! every open bottom-row site would appear full through it even with no open
//! path of its own to row 1.

use crate::error::PercolationError;
use crate::site::{Site, SiteIndexer, VIRTUAL_TOP};
use crate::union_find::UnionFind;

/// An `n`-by-`n` percolation grid whose sites only ever go from blocked to
/// open.
///
/// `percolates`, `is_full`, and `is_open` are monotone: once true they stay
/// true for every later state reachable through [`ConnectivityGrid::open`].
#[derive(Debug, Clone)]
pub struct ConnectivityGrid {
    indexer: SiteIndexer,
    open: Vec<bool>,
    open_count: usize,
    percolation: UnionFind,
    fullness: UnionFind,
}

impl ConnectivityGrid {
    /// Creates an `n`-by-`n` grid with every site blocked.
    ///
    /// # Errors
    ///
    /// Returns [`PercolationError::InvalidSize`] when `n == 0` or the node
    /// space would overflow `usize`.
    pub fn new(n: usize) -> Result<Self, PercolationError> {
        let indexer = SiteIndexer::new(n)?;
        let sites = indexer.site_count();
        Ok(Self {
            indexer,
            open: vec![false; sites],
            open_count: 0,
            percolation: UnionFind::new(sites + 2),
            fullness: UnionFind::new(sites + 1),
        })
    }

    /// Grid dimension `n`.
    pub fn size(&self) -> usize {
        self.indexer.n()
    }

    /// Opens the site at `(row, col)` if it is not open already.
    ///
    /// The site is joined with every open orthogonal neighbour in both
    /// structures, with the virtual top in both when on row 1, and with the
    /// virtual bottom in the percolation structure only when on row `n`.
    /// Opening an already open site changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`PercolationError::InvalidSite`] if either coordinate is
    /// outside `1..=n`; the grid is left untouched.
    pub fn open(&mut self, row: usize, col: usize) -> Result<(), PercolationError> {
        let site = self.indexer.validate(row, col)?;
        let cell = self.indexer.cell(site);
        if self.open[cell] {
            return Ok(());
        }
        self.open[cell] = true;
        self.open_count += 1;

        let node = self.indexer.node(site);
        if self.indexer.is_top(site) {
            self.percolation.union(node, VIRTUAL_TOP);
            self.fullness.union(node, VIRTUAL_TOP);
        }
        if self.indexer.is_bottom(site) {
            self.percolation.union(node, self.indexer.virtual_bottom());
        }
        for neighbor in self.indexer.neighbors(site) {
            if self.open[self.indexer.cell(neighbor)] {
                let other = self.indexer.node(neighbor);
                self.percolation.union(node, other);
                self.fullness.union(node, other);
            }
        }
        Ok(())
    }

    /// Returns whether the site at `(row, col)` is open.
    ///
    /// # Errors
    ///
    /// Returns [`PercolationError::InvalidSite`] on out-of-range input.
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool, PercolationError> {
        let site = self.indexer.validate(row, col)?;
        Ok(self.open[self.indexer.cell(site)])
    }

    /// Returns whether the site at `(row, col)` is connected to row 1
    /// through open sites.
    ///
    /// Blocked sites are never unioned with anything, so they always answer
    /// `false` here without a separate open check.
    ///
    /// # Errors
    ///
    /// Returns [`PercolationError::InvalidSite`] on out-of-range input.
    pub fn is_full(&self, row: usize, col: usize) -> Result<bool, PercolationError> {
        let site = self.indexer.validate(row, col)?;
        Ok(self
            .fullness
            .connected(self.indexer.node(site), VIRTUAL_TOP))
    }

    /// Number of distinct sites opened so far.
    pub fn number_of_open_sites(&self) -> usize {
        self.open_count
    }

    /// Returns whether some open path joins row 1 to row `n`.
    pub fn percolates(&self) -> bool {
        self.percolation
            .connected(VIRTUAL_TOP, self.indexer.virtual_bottom())
    }

    /// Iterates over the open sites in row-major order.
    pub fn open_sites(&self) -> impl Iterator<Item = Site> + '_ {
        self.open
            .iter()
            .enumerate()
            .filter(|&(_, &is_open)| is_open)
            .map(|(cell, _)| self.indexer.site_at(cell))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    fn grid(n: usize) -> ConnectivityGrid {
        ConnectivityGrid::new(n).expect("valid dimension")
    }

    fn open_all(g: &mut ConnectivityGrid, sites: &[(usize, usize)]) {
        for &(row, col) in sites {
            g.open(row, col).expect("in range");
        }
    }

    #[test]
    fn new_grid_is_fully_blocked() {
        let g = grid(4);
        assert_eq!(g.size(), 4);
        assert_eq!(g.number_of_open_sites(), 0);
        assert!(!g.percolates());
        for row in 1..=4 {
            for col in 1..=4 {
                assert!(!g.is_open(row, col).expect("in range"));
                assert!(!g.is_full(row, col).expect("in range"));
            }
        }
    }

    #[test]
    fn zero_dimension_is_rejected() {
        let err = ConnectivityGrid::new(0).expect_err("n = 0 must fail");
        assert_eq!(err, PercolationError::InvalidSize { n: 0 });
    }

    #[test]
    fn open_marks_site_and_counts_once() {
        let mut g = grid(3);
        g.open(2, 2).expect("in range");
        assert!(g.is_open(2, 2).expect("in range"));
        assert_eq!(g.number_of_open_sites(), 1);

        g.open(2, 2).expect("in range");
        assert_eq!(g.number_of_open_sites(), 1, "reopening must not count");
    }

    #[test]
    fn top_row_site_is_full_once_open() {
        let mut g = grid(3);
        assert!(!g.is_full(1, 2).expect("in range"));
        g.open(1, 2).expect("in range");
        assert!(g.is_full(1, 2).expect("in range"));
        assert!(!g.percolates());
    }

    #[test]
    fn isolated_interior_site_is_not_full() {
        let mut g = grid(3);
        g.open(2, 2).expect("in range");
        assert!(!g.is_full(2, 2).expect("in range"));
    }

    #[test]
    fn fullness_spreads_through_neighbors_opened_later() {
        let mut g = grid(3);
        g.open(2, 2).expect("in range");
        g.open(3, 2).expect("in range");
        assert!(!g.is_full(3, 2).expect("in range"));

        g.open(1, 2).expect("in range");
        assert!(g.is_full(2, 2).expect("in range"));
        assert!(g.is_full(3, 2).expect("in range"));
        assert!(g.percolates());
    }

    #[test]
    fn no_backwash_into_disconnected_bottom_site() {
        let mut g = grid(3);
        open_all(&mut g, &[(1, 1), (2, 1), (3, 1), (3, 3)]);

        assert!(g.percolates());
        assert!(g.is_full(3, 1).expect("in range"));
        assert!(
            !g.is_full(3, 3).expect("in range"),
            "bottom site reachable only through the virtual bottom must not be full"
        );
    }

    #[test]
    fn bottom_row_alone_does_not_percolate() {
        let mut g = grid(3);
        open_all(&mut g, &[(3, 1), (3, 2), (3, 3)]);
        assert!(!g.percolates());
        assert!(!g.is_full(3, 2).expect("in range"));
    }

    #[test]
    fn diagonal_sites_do_not_connect() {
        let mut g = grid(3);
        open_all(&mut g, &[(1, 1), (2, 2), (3, 3)]);
        assert!(!g.percolates());
        assert!(!g.is_full(2, 2).expect("in range"));
    }

    #[test]
    fn single_site_grid_percolates_after_open() {
        let mut g = grid(1);
        assert!(!g.percolates());
        g.open(1, 1).expect("in range");
        assert!(g.percolates());
        assert!(g.is_full(1, 1).expect("in range"));
    }

    #[test]
    fn full_vertical_line_percolates() {
        let mut g = grid(5);
        for row in 1..=5 {
            g.open(row, 1).expect("in range");
        }
        assert!(g.percolates());
        for row in 1..=5 {
            assert!(g.is_full(row, 1).expect("in range"), "row {row} not full");
        }
        assert_eq!(g.number_of_open_sites(), 5);
    }

    #[test]
    fn winding_path_percolates() {
        let mut g = grid(5);
        open_all(
            &mut g,
            &[
                (1, 1),
                (1, 2),
                (1, 3),
                (2, 3),
                (3, 3),
                (3, 2),
                (4, 2),
                (5, 2),
            ],
        );
        assert!(g.percolates());
        assert!(g.is_full(5, 2).expect("in range"));
        assert!(!g.is_full(5, 1).expect("in range"));
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        let mut g = grid(5);
        for (row, col) in [(0, 3), (6, 3), (3, 0), (3, 6)] {
            let expected = PercolationError::InvalidSite { row, col, n: 5 };
            assert_eq!(g.open(row, col), Err(expected.clone()));
            assert_eq!(g.is_open(row, col), Err(expected.clone()));
            assert_eq!(g.is_full(row, col), Err(expected));
        }
        assert_eq!(g.number_of_open_sites(), 0, "failed calls must not mutate");
    }

    #[test]
    fn open_sites_lists_row_major() {
        let mut g = grid(3);
        open_all(&mut g, &[(3, 1), (1, 2), (2, 3)]);
        let sites: Vec<Site> = g.open_sites().collect();
        assert_eq!(
            sites,
            vec![Site::new(1, 2), Site::new(2, 3), Site::new(3, 1)]
        );
    }
}
