//! The six hex-adjacency directions of a pointy-top grid.
//!
//! Directions are numbered 1..6 starting at West and turning clockwise.
//! The same numbering names the six facings a unit can take.

use std::fmt;

/// A hex-adjacency direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Direction {
    West = 1,
    NorthWest = 2,
    NorthEast = 3,
    East = 4,
    SouthEast = 5,
    SouthWest = 6,
}

impl Direction {
    /// All six directions in numbering order.
    pub const ALL: [Self; 6] = [
        Self::West,
        Self::NorthWest,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::SouthWest,
    ];

    /// The sides whose hexsides a hexagon canonically owns.
    pub const OWNED_SIDES: [Self; 3] = [Self::West, Self::NorthWest, Self::SouthWest];

    /// Direction with the given number (1 = West .. 6 = SouthWest).
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::West),
            2 => Some(Self::NorthWest),
            3 => Some(Self::NorthEast),
            4 => Some(Self::East),
            5 => Some(Self::SouthEast),
            6 => Some(Self::SouthWest),
            _ => None,
        }
    }

    /// Number of this direction (1..6).
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Whole-unit offset to the adjacent hexside midpoint.
    pub const fn edge_offset(self) -> (i64, i64) {
        match self {
            Self::West => (-2, 0),
            Self::NorthWest => (-1, -1),
            Self::NorthEast => (1, -1),
            Self::East => (2, 0),
            Self::SouthEast => (1, 1),
            Self::SouthWest => (-1, 1),
        }
    }

    /// Whole-unit offset to the adjacent hexagon center.
    pub const fn hexagon_offset(self) -> (i64, i64) {
        let (dx, dy) = self.edge_offset();
        let scale = Distance::Hexagon.multiplier();
        (dx * scale, dy * scale)
    }

    /// The direction pointing the other way.
    pub const fn opposite(self) -> Self {
        match self {
            Self::West => Self::East,
            Self::NorthWest => Self::SouthEast,
            Self::NorthEast => Self::SouthWest,
            Self::East => Self::West,
            Self::SouthEast => Self::NorthWest,
            Self::SouthWest => Self::NorthEast,
        }
    }

    /// Short compass label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::West => "W",
            Self::NorthWest => "NW",
            Self::NorthEast => "NE",
            Self::East => "E",
            Self::SouthEast => "SE",
            Self::SouthWest => "SW",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How far a neighbor lookup reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Distance {
    /// To the hexside midpoint.
    Edge,
    /// To the next hexagon center, across the hexside.
    Hexagon,
}

impl Distance {
    /// Scale applied to the edge offset table.
    pub const fn multiplier(self) -> i64 {
        match self {
            Self::Edge => 1,
            Self::Hexagon => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbering_round_trips() {
        for d in Direction::ALL {
            assert_eq!(Direction::from_number(d.number()), Some(d));
        }
        assert_eq!(Direction::from_number(0), None);
        assert_eq!(Direction::from_number(7), None);
    }

    #[test]
    fn numbering_starts_west() {
        assert_eq!(Direction::West.number(), 1);
        assert_eq!(Direction::SouthWest.number(), 6);
    }

    #[test]
    fn opposite_negates_offset() {
        for d in Direction::ALL {
            let (dx, dy) = d.edge_offset();
            assert_eq!(d.opposite().edge_offset(), (-dx, -dy));
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn offsets_are_unique() {
        let offsets = Direction::ALL.map(|d| d.edge_offset());
        for i in 0..offsets.len() {
            for j in (i + 1)..offsets.len() {
                assert_ne!(offsets[i], offsets[j], "duplicate offset at {} and {}", i, j);
            }
        }
    }

    #[test]
    fn hexagon_offset_doubles_edge_offset() {
        assert_eq!(Direction::West.hexagon_offset(), (-4, 0));
        assert_eq!(Direction::NorthEast.hexagon_offset(), (2, -2));
        assert_eq!(Direction::SouthEast.hexagon_offset(), (2, 2));
    }

    #[test]
    fn labels() {
        assert_eq!(Direction::NorthWest.to_string(), "NW");
        assert_eq!(Direction::East.to_string(), "E");
    }
}
