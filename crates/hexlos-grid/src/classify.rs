//! Grid point classification.
//!
//! A point's role depends only on its coordinates modulo 4. The sixteen
//! residue pairs split into eight valid patterns (two per role) and eight
//! mixed-parity patterns that are rejected. Remainders are Euclidean, so a
//! point with negative coordinates classifies like its positive translate.

use crate::direction::{Direction, Distance};
use crate::error::{Error, Result};
use crate::role::GridPointRole;
use crate::GridPoint;

/// Period of the role pattern along both axes.
pub const ROLE_PERIOD: i64 = 4;

/// The role of a grid point together with the hexagon that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Classification {
    point: GridPoint,
    role: GridPointRole,
    hexagon: GridPoint,
}

impl Classification {
    /// The classified point.
    pub const fn point(&self) -> GridPoint {
        self.point
    }

    /// Structural role of the point.
    pub const fn role(&self) -> GridPointRole {
        self.role
    }

    /// Canonical owning hexagon; the point itself for centers.
    pub const fn hexagon(&self) -> GridPoint {
        self.hexagon
    }

    pub const fn is_center(&self) -> bool {
        self.role.is_center()
    }

    pub const fn is_edge(&self) -> bool {
        self.role.is_edge()
    }

    /// Neighbor of the classified point.
    pub const fn neighbor(&self, direction: Direction, distance: Distance) -> GridPoint {
        self.point.neighbor(direction, distance)
    }
}

/// Classify a point as a hexagon center or canonical hexside.
///
/// # Errors
///
/// [`Error::InvalidPoint`] for half-integer points and for the eight
/// mixed-parity residue patterns.
///
/// # Examples
///
/// ```
/// use hexlos_grid::{classify, GridPoint, GridPointRole};
///
/// let edge = classify(GridPoint::new(2, 0)).unwrap();
/// assert_eq!(edge.role(), GridPointRole::EdgeLeft);
/// assert_eq!(edge.hexagon(), GridPoint::new(4, 0));
/// ```
pub fn classify(point: GridPoint) -> Result<Classification> {
    let (x, y) = point.integral().ok_or(Error::InvalidPoint(point))?;
    let role = GridPointRole::from_residues(x.rem_euclid(ROLE_PERIOD), y.rem_euclid(ROLE_PERIOD))
        .ok_or(Error::InvalidPoint(point))?;
    let (ox, oy) = role.owner_offset();
    Ok(Classification {
        point,
        role,
        hexagon: point + GridPoint::new(ox, oy),
    })
}

/// Role of a point.
pub fn role(point: GridPoint) -> Result<GridPointRole> {
    classify(point).map(|c| c.role())
}

/// Canonical owning hexagon of a center or hexside.
pub fn canonical_hexagon(point: GridPoint) -> Result<GridPoint> {
    classify(point).map(|c| c.hexagon())
}

/// Whether the point is a hexagon center. Invalid points are not.
pub fn is_center(point: GridPoint) -> bool {
    classify(point).is_ok_and(|c| c.is_center())
}

/// Whether the point is a hexside midpoint. Invalid points are not.
pub fn is_edge(point: GridPoint) -> bool {
    classify(point).is_ok_and(|c| c.is_edge())
}

/// Ensure a point is a hexagon center.
pub fn require_center(point: GridPoint) -> Result<GridPoint> {
    if classify(point)?.is_center() {
        Ok(point)
    } else {
        Err(Error::NotAHexagon(point))
    }
}
