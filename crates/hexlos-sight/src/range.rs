//! Range between hexagons.

use hexlos_grid::GridPoint;

use crate::error::{Endpoint, Result};
use crate::sight::require_endpoint;

/// Distance between two hexagon centers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LosRange {
    /// Hexagon steps between the centers.
    pub hexagons: u64,
    /// Doubled-coordinate steps between the centers, twice `hexagons`.
    pub grid: u64,
}

impl LosRange {
    pub const ZERO: Self = Self { hexagons: 0, grid: 0 };

    /// Range between two points already known to be hexagon centers.
    ///
    /// Moving mostly sideways costs one hexagon per 4 units of combined
    /// displacement; moving mostly vertically costs one per 2 units of y.
    pub(crate) fn measure(origin: GridPoint, destination: GridPoint) -> Self {
        let delta = destination - origin;
        let ax = delta.x_halves().unsigned_abs();
        let ay = delta.y_halves().unsigned_abs();
        if ax > ay {
            Self {
                hexagons: (ax + ay) / 8,
                grid: (ax + ay) / 4,
            }
        } else {
            Self {
                hexagons: ay / 4,
                grid: ay / 2,
            }
        }
    }
}

/// Range between two hexagon centers without tracing a path.
///
/// # Errors
///
/// [`crate::Error::InvalidInput`] if either point is not a hexagon center.
pub fn range_between(origin: GridPoint, destination: GridPoint) -> Result<LosRange> {
    require_endpoint(origin, Endpoint::Origin)?;
    require_endpoint(destination, Endpoint::Destination)?;
    Ok(LosRange::measure(origin, destination))
}
