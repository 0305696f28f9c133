/// Errors produced by [`crate::ConnectivityGrid`] when a caller breaks the
/// argument contract.
use std::fmt;

/// Invalid-argument conditions raised by grid construction and site access.
///
/// Both variants are raised before any state is touched, so a failed call
/// leaves the grid exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PercolationError {
    /// The grid dimension was zero, or so large that `n * n + 2` node
    /// indices cannot be addressed.
    InvalidSize {
        /// The rejected dimension.
        n: usize,
    },

    /// A row or column fell outside `1..=n`.
    InvalidSite {
        /// Requested row (1-indexed).
        row: usize,
        /// Requested column (1-indexed).
        col: usize,
        /// Dimension of the grid that rejected the coordinate.
        n: usize,
    },
}

impl fmt::Display for PercolationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { n } => write!(f, "illegal value of n: {n}"),
            Self::InvalidSite { row, col, n } => write!(
                f,
                "illegal value of row or column: ({row}, {col}) is outside 1..={n}"
            ),
        }
    }
}

impl std::error::Error for PercolationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_size() {
        let err = PercolationError::InvalidSize { n: 0 };
        assert_eq!(err.to_string(), "illegal value of n: 0");
    }

    #[test]
    fn display_invalid_site_names_coordinates() {
        let err = PercolationError::InvalidSite {
            row: 6,
            col: 2,
            n: 5,
        };
        let msg = err.to_string();
        assert!(msg.starts_with("illegal value of row or column"), "{msg}");
        assert!(msg.contains("(6, 2)"), "{msg}");
        assert!(msg.contains("1..=5"), "{msg}");
    }
}
