//! Error types for hexlos-grid.

use thiserror::Error;

use crate::GridPoint;

/// Result type for grid operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while classifying or naming grid points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The point's parity pattern is not produced by any grid construction.
    #[error("invalid grid point {0}: not a hexagon center or canonical edge")]
    InvalidPoint(GridPoint),

    /// A hexagon center was required.
    #[error("grid point {0} is not a hexagon center")]
    NotAHexagon(GridPoint),

    /// The label could not be parsed as a hexagon name.
    #[error("invalid hexagon name {name:?}: {reason}")]
    InvalidName {
        name: String,
        reason: &'static str,
    },

    /// The hexagon lies outside the range covered by the labelling scheme.
    #[error("hexagon {0} has no name: column and row must be in range")]
    Unnameable(GridPoint),
}
