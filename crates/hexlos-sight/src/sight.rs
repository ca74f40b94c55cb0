//! Line-of-sight queries.

use hexlos_grid::{classify, Direction, GridPoint};
use tracing::debug;

use crate::bearing::{Bearing, BearingKind};
use crate::config::LosConfig;
use crate::error::{Endpoint, Error, Result};
use crate::path::{walk, LosPath};
use crate::range::LosRange;

/// Reject endpoints that are not hexagon centers.
pub(crate) fn require_endpoint(point: GridPoint, endpoint: Endpoint) -> Result<GridPoint> {
    match classify(point) {
        Ok(c) if c.is_center() => Ok(point),
        _ => Err(Error::InvalidInput { endpoint, point }),
    }
}

/// The complete answer to a line-of-sight query.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LosResult {
    origin: GridPoint,
    destination: GridPoint,
    bearing: Option<Bearing>,
    range: LosRange,
    path: LosPath,
}

impl LosResult {
    pub fn origin(&self) -> GridPoint {
        self.origin
    }

    pub fn destination(&self) -> GridPoint {
        self.destination
    }

    /// Bearing toward the destination, `None` when it is the origin.
    pub fn bearing(&self) -> Option<Bearing> {
        self.bearing
    }

    /// Bearing number, or -1 when origin and destination coincide.
    pub fn bearing_number(&self) -> i8 {
        self.bearing.map_or(-1, |b| b.number() as i8)
    }

    pub fn kind(&self) -> Option<BearingKind> {
        self.bearing.map(Bearing::kind)
    }

    /// Facing toward the destination.
    pub fn facing(&self) -> Option<Direction> {
        self.bearing.map(Bearing::facing)
    }

    pub fn range(&self) -> LosRange {
        self.range
    }

    pub fn hexagon_range(&self) -> u64 {
        self.range.hexagons
    }

    pub fn grid_range(&self) -> u64 {
        self.range.grid
    }

    /// Every hexagon and hexside the line touches, in order.
    pub fn path(&self) -> &LosPath {
        &self.path
    }

    /// Only the hexagons the line touches, in order.
    pub fn hexagon_path(&self) -> LosPath {
        self.path.hexagon_path()
    }

    pub fn into_path(self) -> LosPath {
        self.path
    }
}

/// Line-of-sight tracer.
///
/// Holds only configuration, so a single tracer can serve any number of
/// queries, from any number of threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineOfSight {
    config: LosConfig,
}

impl LineOfSight {
    pub fn new(config: LosConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> LosConfig {
        self.config
    }

    pub fn set_config(&mut self, config: LosConfig) {
        self.config = config;
    }

    pub fn set_corner_expanded(&mut self, expanded: bool) {
        self.config.corner_expanded = expanded;
    }

    pub fn set_middle_edge_on_corner(&mut self, include: bool) {
        self.config.include_middle_edge_on_corner = include;
    }

    /// Trace the line between two hexagon centers.
    ///
    /// Coincident endpoints yield no bearing, an empty path and zero range.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] naming the first endpoint that is not a
    /// hexagon center.
    ///
    /// # Examples
    ///
    /// ```
    /// use hexlos_grid::GridPoint;
    /// use hexlos_sight::LineOfSight;
    ///
    /// let los = LineOfSight::default()
    ///     .trace(GridPoint::new(0, 0), GridPoint::new(4, 0))
    ///     .unwrap();
    /// assert_eq!(los.bearing_number(), 12);
    /// assert_eq!(
    ///     los.path().as_slice(),
    ///     &[GridPoint::new(0, 0), GridPoint::new(2, 0), GridPoint::new(4, 0)]
    /// );
    /// ```
    pub fn trace(&self, origin: GridPoint, destination: GridPoint) -> Result<LosResult> {
        require_endpoint(origin, Endpoint::Origin)?;
        require_endpoint(destination, Endpoint::Destination)?;

        let bearing = Bearing::between(origin, destination);
        let (range, path) = match bearing {
            Some(bearing) => (
                LosRange::measure(origin, destination),
                walk(origin, destination, bearing, self.config),
            ),
            None => (LosRange::ZERO, LosPath::default()),
        };

        debug!(
            origin = %origin,
            destination = %destination,
            bearing = ?bearing.map(Bearing::number),
            hexagons = range.hexagons,
            points = path.len(),
            "Traced line of sight"
        );

        Ok(LosResult {
            origin,
            destination,
            bearing,
            range,
            path,
        })
    }

    /// Trace between two labelled hexagons such as `"0101"` and `"0504"`.
    ///
    /// # Errors
    ///
    /// [`Error::Grid`] if either label does not parse.
    pub fn trace_names(&self, origin: &str, destination: &str) -> Result<LosResult> {
        let origin = GridPoint::from_name(origin)?;
        let destination = GridPoint::from_name(destination)?;
        self.trace(origin, destination)
    }
}

/// Trace with the default configuration.
pub fn trace(origin: GridPoint, destination: GridPoint) -> Result<LosResult> {
    LineOfSight::default().trace(origin, destination)
}
