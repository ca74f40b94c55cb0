//! Points in doubled-coordinate space.
//!
//! Hexagon centers, hexside midpoints and hexagon vertices share a single
//! lattice. Centers and edges sit on integer coordinates; vertices between
//! edges need half-integer precision. Each component is therefore stored as
//! a count of half units, which keeps every comparison exact.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::direction::{Direction, Distance};
use crate::error::Result;
use crate::name::HexagonName;

/// A position in doubled-coordinate space.
///
/// Vertical spacing between hexagon rows is three times the horizontal
/// unit, so adjacent hexagons along a row are 4 apart in x while diagonal
/// neighbors are 2 apart in both x and y.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    /// Horizontal coordinate in half units
    hx: i64,
    /// Vertical coordinate in half units
    hy: i64,
}

impl GridPoint {
    /// Origin of the coordinate system, a hexagon center.
    pub const ORIGIN: Self = Self { hx: 0, hy: 0 };

    /// Create a point from whole doubled coordinates.
    pub const fn new(x: i64, y: i64) -> Self {
        Self {
            hx: x * 2,
            hy: y * 2,
        }
    }

    /// Create a point from half units, so `from_halves(1, -3)` is `(0.5, -1.5)`.
    pub const fn from_halves(hx: i64, hy: i64) -> Self {
        Self { hx, hy }
    }

    /// Parse a hexagon label such as `"0102"` into its center point.
    pub fn from_name(name: &str) -> Result<Self> {
        name.parse::<HexagonName>().map(|name| name.to_point())
    }

    /// Horizontal coordinate in half units.
    pub const fn x_halves(&self) -> i64 {
        self.hx
    }

    /// Vertical coordinate in half units.
    pub const fn y_halves(&self) -> i64 {
        self.hy
    }

    /// Whether both components are whole numbers.
    pub const fn is_integral(&self) -> bool {
        self.hx % 2 == 0 && self.hy % 2 == 0
    }

    /// Whole doubled coordinates, or `None` for points with a half component.
    pub const fn integral(&self) -> Option<(i64, i64)> {
        if self.is_integral() {
            Some((self.hx / 2, self.hy / 2))
        } else {
            None
        }
    }

    /// Horizontal coordinate as a float, for display and pixel mapping.
    pub fn x(&self) -> f64 {
        self.hx as f64 / 2.0
    }

    /// Vertical coordinate as a float, for display and pixel mapping.
    pub fn y(&self) -> f64 {
        self.hy as f64 / 2.0
    }

    /// Point halfway between `self` and `other`.
    ///
    /// Exact whenever the midpoint lies on the half-unit lattice, which
    /// holds for any two hexagon centers. Otherwise rounds toward negative
    /// infinity.
    pub const fn midpoint(self, other: Self) -> Self {
        Self {
            hx: (self.hx + other.hx).div_euclid(2),
            hy: (self.hy + other.hy).div_euclid(2),
        }
    }

    /// The point `distance` away in `direction`.
    pub const fn neighbor(self, direction: Direction, distance: Distance) -> Self {
        let (dx, dy) = direction.edge_offset();
        let scale = distance.multiplier();
        Self {
            hx: self.hx + dx * scale * 2,
            hy: self.hy + dy * scale * 2,
        }
    }

    /// Adjacent hexagon center in `direction`.
    pub const fn adjacent_hexagon(self, direction: Direction) -> Self {
        self.neighbor(direction, Distance::Hexagon)
    }

    /// Midpoint of the hexside in `direction`.
    pub const fn adjacent_edge(self, direction: Direction) -> Self {
        self.neighbor(direction, Distance::Edge)
    }

    /// The six hexside midpoints around this point, in [`Direction::ALL`] order.
    pub fn edges(&self) -> [Self; 6] {
        Direction::ALL.map(|d| self.adjacent_edge(d))
    }

    /// The three hexsides a hexagon canonically owns: West, NorthWest and SouthWest.
    ///
    /// Every hexside on a board belongs to exactly one hexagon, so iterating
    /// owned edges over all hexagons visits each hexside once.
    pub fn owned_edges(&self) -> [Self; 3] {
        Direction::OWNED_SIDES.map(|d| self.adjacent_edge(d))
    }
}

impl From<(i64, i64)> for GridPoint {
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl Add for GridPoint {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            hx: self.hx + other.hx,
            hy: self.hy + other.hy,
        }
    }
}

impl Sub for GridPoint {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            hx: self.hx - other.hx,
            hy: self.hy - other.hy,
        }
    }
}

impl Neg for GridPoint {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            hx: -self.hx,
            hy: -self.hy,
        }
    }
}

impl Mul<i64> for GridPoint {
    type Output = Self;

    #[inline]
    fn mul(self, factor: i64) -> Self {
        Self {
            hx: self.hx * factor,
            hy: self.hy * factor,
        }
    }
}

fn write_halves(f: &mut fmt::Formatter<'_>, halves: i64) -> fmt::Result {
    if halves % 2 == 0 {
        write!(f, "{}", halves / 2)
    } else {
        let sign = if halves < 0 { "-" } else { "" };
        write!(f, "{}{}.5", sign, halves.unsigned_abs() / 2)
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        write_halves(f, self.hx)?;
        write!(f, ", ")?;
        write_halves(f, self.hy)?;
        write!(f, ")")
    }
}

// Debug in whole units; raw half units make assertion failures hard to read.
impl fmt::Debug for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GridPoint{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_zero() {
        assert_eq!(GridPoint::ORIGIN, GridPoint::new(0, 0));
        assert_eq!(GridPoint::ORIGIN.integral(), Some((0, 0)));
    }

    #[test]
    fn whole_and_half_constructors_agree() {
        assert_eq!(GridPoint::new(3, -2), GridPoint::from_halves(6, -4));
        assert_eq!(GridPoint::from((3, -2)), GridPoint::new(3, -2));
    }

    #[test]
    fn half_points_are_not_integral() {
        let vertex = GridPoint::from_halves(1, 2);
        assert!(!vertex.is_integral());
        assert_eq!(vertex.integral(), None);
        assert_eq!(vertex.x(), 0.5);
        assert_eq!(vertex.y(), 1.0);
    }

    #[test]
    fn display_formats_halves() {
        assert_eq!(GridPoint::new(4, -2).to_string(), "(4, -2)");
        assert_eq!(GridPoint::from_halves(1, -3).to_string(), "(0.5, -1.5)");
        assert_eq!(GridPoint::from_halves(-1, 0).to_string(), "(-0.5, 0)");
        assert_eq!(format!("{:?}", GridPoint::new(2, 0)), "GridPoint(2, 0)");
    }

    #[test]
    fn west_neighbor_literal() {
        let origin = GridPoint::ORIGIN;
        assert_eq!(
            origin.neighbor(Direction::West, Distance::Edge),
            GridPoint::new(-2, 0)
        );
        assert_eq!(
            origin.neighbor(Direction::West, Distance::Hexagon),
            GridPoint::new(-4, 0)
        );
    }

    #[test]
    fn neighbor_offsets_match_table() {
        let p = GridPoint::new(6, 2);
        assert_eq!(p.adjacent_edge(Direction::West), GridPoint::new(4, 2));
        assert_eq!(p.adjacent_edge(Direction::NorthWest), GridPoint::new(5, 1));
        assert_eq!(p.adjacent_edge(Direction::NorthEast), GridPoint::new(7, 1));
        assert_eq!(p.adjacent_edge(Direction::East), GridPoint::new(8, 2));
        assert_eq!(p.adjacent_edge(Direction::SouthEast), GridPoint::new(7, 3));
        assert_eq!(p.adjacent_edge(Direction::SouthWest), GridPoint::new(5, 3));
    }

    #[test]
    fn hexagon_step_is_two_edge_steps() {
        let p = GridPoint::new(-6, 10);
        for d in Direction::ALL {
            assert_eq!(
                p.adjacent_hexagon(d),
                p.adjacent_edge(d).adjacent_edge(d),
                "direction {:?}",
                d
            );
        }
    }

    #[test]
    fn midpoint_of_hexagons_is_their_shared_edge() {
        let a = GridPoint::new(0, 0);
        let b = GridPoint::new(4, 0);
        assert_eq!(a.midpoint(b), GridPoint::new(2, 0));
        assert_eq!(b.midpoint(a), GridPoint::new(2, 0));
        assert_eq!(
            GridPoint::new(-2, -2).midpoint(GridPoint::new(0, 0)),
            GridPoint::new(-1, -1)
        );
    }

    #[test]
    fn six_distinct_edges() {
        let edges = GridPoint::new(2, 2).edges();
        for i in 0..edges.len() {
            for j in (i + 1)..edges.len() {
                assert_ne!(edges[i], edges[j], "duplicate edge at {} and {}", i, j);
            }
        }
    }

    #[test]
    fn owned_edges_are_left_side() {
        let owned = GridPoint::new(4, 0).owned_edges();
        assert_eq!(
            owned,
            [
                GridPoint::new(2, 0),
                GridPoint::new(3, -1),
                GridPoint::new(3, 1)
            ]
        );
    }

    #[test]
    fn addition_subtraction() {
        let a = GridPoint::new(1, 2);
        let b = GridPoint::new(4, -1);

        assert_eq!(a + b, GridPoint::new(5, 1));
        assert_eq!(a - b, GridPoint::new(-3, 3));
        assert_eq!(a + (-b), a - b);
        assert_eq!(b * 3, GridPoint::new(12, -3));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_keeps_half_units() {
        let vertex = GridPoint::from_halves(1, -3);
        let json = serde_json::to_string(&vertex).unwrap();
        assert_eq!(json, r#"{"hx":1,"hy":-3}"#);
        assert_eq!(serde_json::from_str::<GridPoint>(&json).unwrap(), vertex);
    }

    #[test]
    fn from_name_parses_label() {
        assert_eq!(GridPoint::from_name("0102").unwrap(), GridPoint::new(6, 6));
        assert!(GridPoint::from_name("x1").is_err());
    }
}
