//! The 24-sector bearing between two points.
//!
//! Bearings are numbered clockwise from due West (0). Even bearings follow
//! a hex-adjacency direction or pass exactly through a vertex; odd bearings
//! fall between them and zigzag across two candidate hexagons.

use std::fmt;

use hexlos_grid::{Direction, GridPoint};

use crate::error::Error;

/// Number of distinct bearings.
pub const BEARINGS: u8 = 24;

/// Bearing by `(quadrant - 1) * 7 + (sector - 1)`.
///
/// Quadrants 1..4 are NW, NE, SE, SW of the origin (screen y grows
/// downward). Sectors 1..7 split a quadrant by slope, from horizontal (1)
/// to vertical (7).
const BEARING_LOOKUP: [u8; 28] = [
    0, 1, 2, 3, 4, 5, 6, //
    0, 11, 10, 9, 8, 7, 0, //
    12, 13, 14, 15, 16, 17, 18, //
    0, 23, 22, 21, 20, 19, 0,
];

// Every bearing appears in the lookup table
const _: () = {
    let mut b = 0;
    while b < BEARINGS {
        let mut found = false;
        let mut i = 0;
        while i < BEARING_LOOKUP.len() {
            if BEARING_LOOKUP[i] == b {
                found = true;
            }
            i += 1;
        }
        assert!(found);
        b += 1;
    }
};

/// Shape of the hexagon sequence along a bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BearingKind {
    /// Along a hex-adjacency direction: one hexagon per hop.
    Straight,
    /// Through a vertex: two flanking hexagons per hop.
    Corner,
    /// Between the two: alternating candidates chosen by offset.
    Zigzag,
}

/// A bearing in `0..24`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Bearing(u8);

impl Bearing {
    pub const WEST: Self = Self(0);
    pub const NORTH: Self = Self(6);
    pub const EAST: Self = Self(12);
    pub const SOUTH: Self = Self(18);

    /// Bearing with the given number, or `None` outside `0..24`.
    pub const fn new(number: u8) -> Option<Self> {
        if number < BEARINGS {
            Some(Self(number))
        } else {
            None
        }
    }

    pub const fn number(self) -> u8 {
        self.0
    }

    /// Bearing from `origin` toward `destination`, `None` if they coincide.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexlos_grid::GridPoint;
    /// use hexlos_sight::Bearing;
    ///
    /// let east = Bearing::between(GridPoint::new(0, 0), GridPoint::new(4, 0));
    /// assert_eq!(east, Some(Bearing::EAST));
    /// assert_eq!(Bearing::between(GridPoint::ORIGIN, GridPoint::ORIGIN), None);
    /// ```
    pub fn between(origin: GridPoint, destination: GridPoint) -> Option<Self> {
        let delta = destination - origin;
        let (dx, dy) = (delta.x_halves(), delta.y_halves());
        if dx == 0 && dy == 0 {
            return None;
        }

        let quadrant = match (dx, dy) {
            (dx, dy) if dy >= 0 && dx < 0 => 4,
            (_, dy) if dy >= 0 => 3,
            (dx, _) if dx > 0 => 2,
            _ => 1,
        };

        let (ax, ay) = (dx.unsigned_abs(), dy.unsigned_abs());
        let sector = if ay == 0 {
            1
        } else if ax == 0 {
            7
        } else if ay == ax {
            5
        } else if ay > ax {
            6
        } else if 3 * ay == ax {
            3
        } else if 3 * ay < ax {
            2
        } else {
            4
        };

        Some(Self(BEARING_LOOKUP[(quadrant - 1) * 7 + (sector - 1)]))
    }

    pub const fn kind(self) -> BearingKind {
        match self.0 % 4 {
            0 => BearingKind::Straight,
            2 => BearingKind::Corner,
            _ => BearingKind::Zigzag,
        }
    }

    /// The facing a unit takes when looking along this bearing.
    ///
    /// Each facing covers four bearings centered on its straight bearing,
    /// so bearing 23 wraps around to West.
    pub const fn facing(self) -> Direction {
        match self.0 {
            0..=2 | 23 => Direction::West,
            3..=6 => Direction::NorthWest,
            7..=10 => Direction::NorthEast,
            11..=14 => Direction::East,
            15..=18 => Direction::SouthEast,
            _ => Direction::SouthWest,
        }
    }

    /// The bearing pointing back toward the origin.
    pub const fn reversed(self) -> Self {
        Self((self.0 + BEARINGS / 2) % BEARINGS)
    }
}

impl TryFrom<u8> for Bearing {
    type Error = Error;

    fn try_from(number: u8) -> Result<Self, Error> {
        Self::new(number).ok_or(Error::InvalidBearing(number))
    }
}

impl From<Bearing> for u8 {
    fn from(bearing: Bearing) -> Self {
        bearing.0
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
