//! Error types for hexlos-sight.

use std::fmt;

use hexlos_grid::GridPoint;
use thiserror::Error;

/// Result type for line-of-sight operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Which end of a line-of-sight query an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Endpoint {
    Origin,
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Origin => f.write_str("origin"),
            Self::Destination => f.write_str("destination"),
        }
    }
}

/// Errors that can occur while tracing line of sight.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An endpoint is not a hexagon center.
    #[error("invalid {endpoint} {point}: line of sight runs between hexagon centers")]
    InvalidInput { endpoint: Endpoint, point: GridPoint },

    /// A bearing number outside 0..24.
    #[error("invalid bearing {0}: expected 0..=23")]
    InvalidBearing(u8),

    /// Grid classification or naming failed.
    #[error("grid error: {0}")]
    Grid(#[from] hexlos_grid::Error),
}
