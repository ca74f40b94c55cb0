//! Path enumeration along a bearing.
//!
//! A path alternates hexagon centers with the hexside midpoints the line
//! crosses between them. Straight and corner bearings advance by a fixed
//! step; zigzag bearings choose between two candidate steps, taking the
//! hexagon closer to the line.

use hexlos_grid::{is_center, is_edge, GridPoint};
use tracing::trace;

use crate::bearing::{Bearing, BearingKind};
use crate::config::LosConfig;

/// Steps between hexagon centers, indexed by half a bearing.
///
/// Entry `i` points along bearing `2 * i`, so even entries are straight
/// hexagon steps and odd entries jump across a vertex. Entry 12 repeats
/// entry 0 so zigzag bearing 23 can look one step ahead.
const STEPS: [GridPoint; 13] = [
    GridPoint::new(-4, 0),
    GridPoint::new(-6, -2),
    GridPoint::new(-2, -2),
    GridPoint::new(0, -4),
    GridPoint::new(2, -2),
    GridPoint::new(6, -2),
    GridPoint::new(4, 0),
    GridPoint::new(6, 2),
    GridPoint::new(2, 2),
    GridPoint::new(0, 4),
    GridPoint::new(-2, 2),
    GridPoint::new(-6, 2),
    GridPoint::new(-4, 0),
];

/// The ordered points a line of sight touches, from origin to destination.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LosPath(Vec<GridPoint>);

impl LosPath {
    pub fn as_slice(&self) -> &[GridPoint] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GridPoint> {
        self.0.iter()
    }

    pub fn first(&self) -> Option<GridPoint> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<GridPoint> {
        self.0.last().copied()
    }

    pub fn contains(&self, point: GridPoint) -> bool {
        self.0.contains(&point)
    }

    /// Hexagon centers in traversal order.
    pub fn hexagons(&self) -> impl Iterator<Item = GridPoint> + '_ {
        self.0.iter().copied().filter(|&p| is_center(p))
    }

    /// Hexside midpoints in traversal order.
    pub fn edges(&self) -> impl Iterator<Item = GridPoint> + '_ {
        self.0.iter().copied().filter(|&p| is_edge(p))
    }

    /// The path with its hexsides removed.
    pub fn hexagon_path(&self) -> LosPath {
        LosPath(self.hexagons().collect())
    }

    pub fn into_vec(self) -> Vec<GridPoint> {
        self.0
    }
}

impl From<LosPath> for Vec<GridPoint> {
    fn from(path: LosPath) -> Self {
        path.0
    }
}

impl IntoIterator for LosPath {
    type Item = GridPoint;
    type IntoIter = std::vec::IntoIter<GridPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a LosPath {
    type Item = &'a GridPoint;
    type IntoIter = std::slice::Iter<'a, GridPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Walk from `origin` to `destination`, two distinct hexagon centers.
pub(crate) fn walk(
    origin: GridPoint,
    destination: GridPoint,
    bearing: Bearing,
    config: LosConfig,
) -> LosPath {
    let mut walker = Walker {
        origin,
        destination,
        points: vec![origin],
    };
    match bearing.kind() {
        BearingKind::Straight => walker.straight(bearing, false, config),
        BearingKind::Corner => walker.straight(bearing, true, config),
        BearingKind::Zigzag => walker.zigzag(bearing),
    }
    LosPath(walker.points)
}

struct Walker {
    origin: GridPoint,
    destination: GridPoint,
    points: Vec<GridPoint>,
}

impl Walker {
    fn straight(&mut self, bearing: Bearing, corner: bool, config: LosConfig) {
        let i = usize::from(bearing.number() / 2);
        let step = STEPS[i];
        let expand = corner && config.corner_expanded;
        let middle = !corner || config.emits_corner_middle();

        let mut current = self.origin;
        while current != self.destination {
            let next = current + step;
            if expand {
                let (left, right) = (STEPS[i - 1], STEPS[i + 1]);
                self.points.extend([
                    current.midpoint(current + left),
                    current.midpoint(current + right),
                    current + left,
                ]);
                if middle {
                    self.points.push(current.midpoint(next));
                }
                self.points.extend([
                    current + right,
                    current.midpoint(next + left),
                    current.midpoint(next + right),
                ]);
            } else if middle {
                self.points.push(current.midpoint(next));
            }
            self.points.push(next);
            current = next;
        }
    }

    fn zigzag(&mut self, bearing: Bearing) {
        let i = usize::from(bearing.number() / 4) * 2;
        let (left, right) = (STEPS[i], STEPS[i + 2]);

        let mut current = self.origin;
        while current != self.destination {
            let (c1, c2) = (current + left, current + right);
            let (o1, o2) = (self.offset(c1), self.offset(c2));
            if o1 != o2 {
                let next = if o1 < o2 { c1 } else { c2 };
                self.points.extend([current.midpoint(next), next]);
                current = next;
                continue;
            }

            // The line passes exactly between both candidates, crossing
            // the hexside they share. Take both and land two steps ahead.
            let end = c1 + right;
            let near = self.nearer(current.midpoint(c1), current.midpoint(c2));
            let far = self.nearer(end.midpoint(c1), end.midpoint(c2));
            trace!(current = %current, left = %c1, right = %c2, "zigzag tie");
            self.points.extend([near, c1, current.midpoint(end), c2, far, end]);
            current = end;
        }
    }

    /// Twice the area of the triangle origin, destination, `point`.
    fn offset(&self, point: GridPoint) -> i128 {
        let line = self.destination - self.origin;
        let to_point = point - self.origin;
        let cross = i128::from(line.x_halves()) * i128::from(to_point.y_halves())
            - i128::from(line.y_halves()) * i128::from(to_point.x_halves());
        cross.abs()
    }

    /// The point closer to the line, preferring `right` when level.
    fn nearer(&self, left: GridPoint, right: GridPoint) -> GridPoint {
        if self.offset(left) < self.offset(right) {
            left
        } else {
            right
        }
    }
}
