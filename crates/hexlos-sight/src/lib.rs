//! Hexlos Sight
//!
//! Line of sight between hexagons on a doubled-coordinate board.
//!
//! # Tracing
//!
//! A query between two hexagon centers yields:
//! - the [`Bearing`], one of 24 sectors numbered clockwise from West
//! - the facing, the [`hexlos_grid::Direction`] covering that bearing
//! - the [`LosRange`] in hexagons and in grid units
//! - the [`LosPath`], every hexagon and hexside the line touches in order
//!
//! ```
//! use hexlos_grid::GridPoint;
//! use hexlos_sight::{LineOfSight, LosConfig};
//!
//! let tracer = LineOfSight::new(LosConfig::hexagons_only());
//! let los = tracer.trace(GridPoint::new(2, 2), GridPoint::new(2, -10)).unwrap();
//! assert_eq!(los.hexagon_range(), 6);
//! assert_eq!(los.path().len(), 4);
//! ```
//!
//! # Corners
//!
//! Six bearings run exactly along hexagon vertices. [`LosConfig`] decides
//! whether the hexagons flanking such a line are part of the path.

mod bearing;
mod config;
mod error;
mod path;
mod range;
mod sight;

pub use bearing::{Bearing, BearingKind, BEARINGS};
pub use config::LosConfig;
pub use error::{Endpoint, Error, Result};
pub use path::LosPath;
pub use range::{range_between, LosRange};
pub use sight::{trace, LineOfSight, LosResult};
