//! Grid coordinates and their mapping onto union-find node ordinals.
//!
//! The public contract is 1-indexed: rows and columns run over `1..=n`. Node
//! ordinals place the virtual top at `0`, sites at `1..=n²` in row-major
//! order, and the virtual bottom at `n² + 1`. Every translation between
//! those spaces, including the 0-indexed cell offset into the open-site
//! table, lives in [`SiteIndexer`].

use std::fmt;

use crate::error::PercolationError;

/// Node ordinal of the virtual top anchor in both union-find structures.
pub const VIRTUAL_TOP: usize = 0;

/// A 1-indexed `(row, col)` grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Site {
    /// Row, counted from the top starting at 1.
    pub row: usize,
    /// Column, counted from the left starting at 1.
    pub col: usize,
}

impl Site {
    /// Creates a coordinate. No range check happens here; see
    /// [`SiteIndexer::validate`].
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Validates coordinates for an `n`-by-`n` grid and maps them to node and
/// cell indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteIndexer {
    n: usize,
}

impl SiteIndexer {
    /// Creates an indexer for an `n`-by-`n` grid.
    ///
    /// # Errors
    ///
    /// Returns [`PercolationError::InvalidSize`] when `n == 0` or when
    /// `n * n + 2` overflows `usize`.
    pub fn new(n: usize) -> Result<Self, PercolationError> {
        let addressable = n
            .checked_mul(n)
            .and_then(|sites| sites.checked_add(2))
            .is_some();
        if n == 0 || !addressable {
            return Err(PercolationError::InvalidSize { n });
        }
        Ok(Self { n })
    }

    /// Grid dimension.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of real sites, `n²`.
    pub fn site_count(&self) -> usize {
        self.n * self.n
    }

    /// Node ordinal of the virtual bottom anchor, `n² + 1`.
    pub fn virtual_bottom(&self) -> usize {
        self.site_count() + 1
    }

    /// Checks that both coordinates lie in `1..=n`.
    ///
    /// # Errors
    ///
    /// Returns [`PercolationError::InvalidSite`] otherwise.
    pub fn validate(&self, row: usize, col: usize) -> Result<Site, PercolationError> {
        let range = 1..=self.n;
        if range.contains(&row) && range.contains(&col) {
            Ok(Site::new(row, col))
        } else {
            Err(PercolationError::InvalidSite {
                row,
                col,
                n: self.n,
            })
        }
    }

    /// Union-find node ordinal of a validated site, in `1..=n²`.
    pub fn node(&self, site: Site) -> usize {
        (site.row - 1) * self.n + site.col
    }

    /// Offset of a validated site in row-major 0-indexed storage.
    pub fn cell(&self, site: Site) -> usize {
        self.node(site) - 1
    }

    /// Inverse of [`SiteIndexer::cell`].
    pub fn site_at(&self, cell: usize) -> Site {
        Site::new(cell / self.n + 1, cell % self.n + 1)
    }

    /// `true` for sites on row 1.
    pub fn is_top(&self, site: Site) -> bool {
        site.row == 1
    }

    /// `true` for sites on row `n`.
    pub fn is_bottom(&self, site: Site) -> bool {
        site.row == self.n
    }

    /// Orthogonal neighbours of a validated site that lie inside the grid.
    pub fn neighbors(&self, site: Site) -> impl Iterator<Item = Site> + use<> {
        let Site { row, col } = site;
        let n = self.n;
        [
            (row > 1).then(|| Site::new(row - 1, col)),
            (row < n).then(|| Site::new(row + 1, col)),
            (col > 1).then(|| Site::new(row, col - 1)),
            (col < n).then(|| Site::new(row, col + 1)),
        ]
        .into_iter()
        .flatten()
    }
}
