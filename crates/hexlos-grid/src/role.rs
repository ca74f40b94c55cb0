//! Structural roles of grid points.

use std::fmt;

use crate::direction::Direction;

/// What a grid point represents on the board.
///
/// Every hexside is shared by two hexagons and is named from the hexagon
/// that owns it, which always lies to its right. The mirrored roles (right,
/// upper-right, lower-right) therefore never appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridPointRole {
    /// A hexagon center.
    Center,
    /// The West hexside of its owning hexagon.
    EdgeLeft,
    /// The NorthWest hexside of its owning hexagon.
    EdgeUpperLeft,
    /// The SouthWest hexside of its owning hexagon.
    EdgeLowerLeft,
}

impl GridPointRole {
    /// All roles.
    pub const ALL: [Self; 4] = [
        Self::Center,
        Self::EdgeLeft,
        Self::EdgeUpperLeft,
        Self::EdgeLowerLeft,
    ];

    /// Role for a `(x mod 4, y mod 4)` residue pair, `None` for the eight
    /// mixed-parity pairs no grid construction produces.
    pub const fn from_residues(x_mod: i64, y_mod: i64) -> Option<Self> {
        match (x_mod, y_mod) {
            (0, 0) | (2, 2) => Some(Self::Center),
            (0, 2) | (2, 0) => Some(Self::EdgeLeft),
            (1, 1) | (3, 3) => Some(Self::EdgeUpperLeft),
            (1, 3) | (3, 1) => Some(Self::EdgeLowerLeft),
            _ => None,
        }
    }

    /// Whole-unit offset from a point with this role to its owning hexagon.
    pub const fn owner_offset(self) -> (i64, i64) {
        match self {
            Self::Center => (0, 0),
            Self::EdgeLeft => (2, 0),
            Self::EdgeUpperLeft => (1, 1),
            Self::EdgeLowerLeft => (1, -1),
        }
    }

    /// Side of the owning hexagon this hexside lies on; `None` for centers.
    pub const fn owner_side(self) -> Option<Direction> {
        match self {
            Self::Center => None,
            Self::EdgeLeft => Some(Direction::West),
            Self::EdgeUpperLeft => Some(Direction::NorthWest),
            Self::EdgeLowerLeft => Some(Direction::SouthWest),
        }
    }

    pub const fn is_center(self) -> bool {
        matches!(self, Self::Center)
    }

    pub const fn is_edge(self) -> bool {
        !self.is_center()
    }

    /// Lower camel case name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::EdgeLeft => "left",
            Self::EdgeUpperLeft => "upperLeft",
            Self::EdgeLowerLeft => "lowerLeft",
        }
    }
}

impl fmt::Display for GridPointRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_valid_residues() {
        let mut valid = 0;
        for x in 0..4 {
            for y in 0..4 {
                if GridPointRole::from_residues(x, y).is_some() {
                    valid += 1;
                    // valid residues always share parity
                    assert_eq!(x % 2, y % 2, "({}, {})", x, y);
                }
            }
        }
        assert_eq!(valid, 8);
    }

    #[test]
    fn owner_side_matches_owner_offset() {
        // stepping from the owner toward its side lands back on the edge
        for role in GridPointRole::ALL {
            let (ox, oy) = role.owner_offset();
            match role.owner_side() {
                None => assert_eq!((ox, oy), (0, 0)),
                Some(side) => {
                    let (sx, sy) = side.edge_offset();
                    assert_eq!((ox + sx, oy + sy), (0, 0), "{}", role);
                }
            }
        }
    }

    #[test]
    fn center_is_not_edge() {
        assert!(GridPointRole::Center.is_center());
        assert!(!GridPointRole::Center.is_edge());
        assert!(GridPointRole::EdgeLowerLeft.is_edge());
    }
}
