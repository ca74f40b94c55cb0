//! Hexlos Grid
//!
//! Doubled-coordinate addressing for pointy-top hexagon boards.
//!
//! # Coordinate Scheme
//!
//! One integer lattice addresses hexagon centers and the hexsides between
//! them:
//! - hexagon centers where `(x mod 4, y mod 4)` is `(0, 0)` or `(2, 2)`
//! - hexside midpoints on the remaining matching-parity residues
//! - vertices on half-integer positions between hexsides
//!
//! Adjacent hexagons in a row are 4 apart in x; diagonal neighbors are 2
//! apart on both axes. Vertical spacing is three times the horizontal unit,
//! so hex-adjacency directions fall on a 1:3 slope.
//!
//! # Canonical Hexsides
//!
//! Each hexside is shared by two hexagons and classified from the hexagon
//! that owns it: [`GridPointRole::EdgeLeft`], [`GridPointRole::EdgeUpperLeft`]
//! or [`GridPointRole::EdgeLowerLeft`]. Enumerating [`GridPoint::owned_edges`]
//! over a board therefore visits every hexside exactly once.

mod classify;
mod direction;
mod error;
mod name;
mod point;
mod role;

pub use classify::{
    canonical_hexagon, classify, is_center, is_edge, require_center, role, Classification,
    ROLE_PERIOD,
};
pub use direction::{Direction, Distance};
pub use error::{Error, Result};
pub use name::{HexagonName, MAX_ROW};
pub use point::GridPoint;
pub use role::GridPointRole;

/// Number of hex-adjacency directions.
pub const DIRECTIONS: usize = 6;

/// Number of hexsides each hexagon canonically owns.
pub const OWNED_EDGES_PER_HEXAGON: usize = 3;

// Compile-time assertion that every hexagon step is two edge steps
const _: () = {
    let mut i = 0;
    while i < DIRECTIONS {
        let d = Direction::ALL[i];
        let (ex, ey) = d.edge_offset();
        let (hx, hy) = d.hexagon_offset();
        assert!(hx == 2 * ex && hy == 2 * ey);
        i += 1;
    }
};

// Each hexagon owns half of its six hexsides
const _: () = assert!(OWNED_EDGES_PER_HEXAGON * 2 == DIRECTIONS);
