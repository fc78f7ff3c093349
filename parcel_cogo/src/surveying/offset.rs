//! Perpendicular offsets from a direction line.

use log::debug;
use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::distance::Distance;
use super::features::{FeatureId, PointLookup};
use crate::geometry::{basic, TINY};

/// An offset given as a distance to the left or right of the direction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OffsetDistance {
    distance: Distance,
    left: bool,
}

impl OffsetDistance {
    pub fn new(distance: Distance, is_left: bool) -> Self {
        Self {
            distance,
            left: is_left,
        }
    }

    pub fn distance(&self) -> &Distance {
        &self.distance
    }

    pub fn set_distance(&mut self, distance: Distance) {
        self.distance = distance;
    }

    pub fn is_left(&self) -> bool {
        self.left
    }

    pub fn is_right(&self) -> bool {
        !self.left
    }

    pub fn set_left(&mut self) {
        self.left = true;
    }

    pub fn set_right(&mut self) {
        self.left = false;
    }

    /// Signed offset in meters: negative to the left, positive to the right.
    pub fn metric(&self) -> f64 {
        if self.left {
            -self.distance.meters()
        } else {
            self.distance.meters()
        }
    }
}

impl PartialEq for OffsetDistance {
    fn eq(&self, other: &Self) -> bool {
        self.left == other.left && (self.distance.meters() - other.distance.meters()).abs() < TINY
    }
}

/// An offset implied by a point that lies on the offset line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffsetPoint {
    point: Option<FeatureId>,
}

impl OffsetPoint {
    pub fn new(point: FeatureId) -> Self {
        Self { point: Some(point) }
    }

    pub fn point(&self) -> Option<FeatureId> {
        self.point
    }

    pub fn set_point(&mut self, point: Option<FeatureId>) {
        self.point = point;
    }

    /// Signed perpendicular distance from `dir` to the offset point.
    ///
    /// Zero if either the offset point or the start of the direction is
    /// undefined.
    pub fn metric(&self, dir: &Direction, points: &dyn PointLookup) -> f64 {
        let Some(p) = self.point.and_then(|id| points.position(id)) else {
            debug!("offset point is undefined");
            return 0.0;
        };
        let Some(from) = points.position(dir.from_point()) else {
            debug!("direction origin {} is undefined", dir.from_point());
            return 0.0;
        };
        let bearing = dir.bearing(points).radians();
        basic::signed_distance(from.x, from.y, bearing, p.x, p.y)
    }
}

/// Offset attached to a direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Offset {
    Distance(OffsetDistance),
    Point(OffsetPoint),
}

impl Offset {
    /// Signed offset in meters from `dir` (left < 0 < right). An offset
    /// distance does not depend on the direction.
    pub fn metric(&self, dir: &Direction, points: &dyn PointLookup) -> f64 {
        match self {
            Offset::Distance(d) => d.metric(),
            Offset::Point(p) => p.metric(dir, points),
        }
    }

    /// The offset point, if this offset is defined by one.
    pub fn point(&self) -> Option<FeatureId> {
        match self {
            Offset::Distance(_) => None,
            Offset::Point(p) => p.point(),
        }
    }

    pub fn references(&self) -> Vec<FeatureId> {
        self.point().into_iter().collect()
    }

    pub fn has_reference(&self, id: FeatureId) -> bool {
        self.point() == Some(id)
    }
}

impl From<OffsetDistance> for Offset {
    fn from(d: OffsetDistance) -> Self {
        Offset::Distance(d)
    }
}

impl From<OffsetPoint> for Offset {
    fn from(p: OffsetPoint) -> Self {
        Offset::Point(p)
    }
}
