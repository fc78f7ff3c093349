//! Directions observed from a point.
//!
//! A direction is a ray: it starts at an occupied point (possibly shifted
//! sideways by an offset) and runs along a bearing that is resolved from
//! the observation each time it is asked for. Referenced points are looked
//! up through a [`PointLookup`], and a point that cannot be found degrades
//! to a zero bearing rather than an error.

use std::f64::consts::FRAC_PI_2;
use std::mem::discriminant;

use log::debug;
use serde::{Deserialize, Serialize};

use super::features::{FeatureId, PointLookup};
use super::offset::Offset;
use crate::geometry::{basic, Position, QuadVertex, TINY};
use crate::units::{normalize, RadianValue};

/// Bearing between two referenced points, or zero if either is undefined.
fn bearing_between(points: &dyn PointLookup, from: FeatureId, to: FeatureId) -> f64 {
    match (points.position(from), points.position(to)) {
        (Some(a), Some(b)) => QuadVertex::new(a, b).bearing_in_radians(),
        _ => {
            debug!("bearing from {} to {} involves an undefined point", from, to);
            0.0
        }
    }
}

/// An angle turned clockwise from a backsight, measured at the occupied
/// point. Negative angles are counter-clockwise.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AngleDirection {
    backsight: FeatureId,
    from: FeatureId,
    observation: f64,
}

impl AngleDirection {
    pub fn new(backsight: FeatureId, from: FeatureId, observation: RadianValue) -> Self {
        Self {
            backsight,
            from,
            observation: observation.radians(),
        }
    }

    pub fn backsight(&self) -> FeatureId {
        self.backsight
    }

    pub fn from_point(&self) -> FeatureId {
        self.from
    }

    pub fn observation_in_radians(&self) -> f64 {
        self.observation
    }

    pub fn set_observation_in_radians(&mut self, value: f64) {
        self.observation = value;
    }

    pub fn bearing(&self, points: &dyn PointLookup) -> RadianValue {
        let bb = bearing_between(points, self.from, self.backsight);
        RadianValue(normalize(bb + self.observation))
    }
}

impl PartialEq for AngleDirection {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from
            && self.backsight == other.backsight
            && (self.observation - other.observation).abs() < TINY
    }
}

/// An angle turned clockwise from the prolongation of the backsight line
/// through the occupied point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DeflectionDirection {
    backsight: FeatureId,
    from: FeatureId,
    observation: f64,
}

impl DeflectionDirection {
    pub fn new(backsight: FeatureId, from: FeatureId, observation: RadianValue) -> Self {
        Self {
            backsight,
            from,
            observation: observation.radians(),
        }
    }

    pub fn backsight(&self) -> FeatureId {
        self.backsight
    }

    pub fn from_point(&self) -> FeatureId {
        self.from
    }

    pub fn observation_in_radians(&self) -> f64 {
        self.observation
    }

    pub fn set_observation_in_radians(&mut self, value: f64) {
        self.observation = value;
    }

    pub fn bearing(&self, points: &dyn PointLookup) -> RadianValue {
        let ahead = bearing_between(points, self.backsight, self.from);
        RadianValue(normalize(ahead + self.observation))
    }
}

impl PartialEq for DeflectionDirection {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from
            && self.backsight == other.backsight
            && (self.observation - other.observation).abs() < TINY
    }
}

/// A direction with an absolute bearing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BearingDirection {
    from: FeatureId,
    observation: f64,
}

impl BearingDirection {
    /// The bearing is normalized into `[0, 2π)`.
    pub fn new(from: FeatureId, bearing: RadianValue) -> Self {
        Self {
            from,
            observation: normalize(bearing.radians()),
        }
    }

    pub fn from_point(&self) -> FeatureId {
        self.from
    }

    pub fn observation_in_radians(&self) -> f64 {
        self.observation
    }

    pub fn set_observation_in_radians(&mut self, value: f64) {
        self.observation = normalize(value);
    }

    pub fn bearing(&self) -> RadianValue {
        RadianValue(self.observation)
    }
}

impl PartialEq for BearingDirection {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && (self.observation - other.observation).abs() < TINY
    }
}

/// A direction parallel to the line between two other points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParallelDirection {
    from: FeatureId,
    par1: FeatureId,
    par2: FeatureId,
}

impl ParallelDirection {
    pub fn new(from: FeatureId, par1: FeatureId, par2: FeatureId) -> Self {
        Self { from, par1, par2 }
    }

    pub fn from_point(&self) -> FeatureId {
        self.from
    }

    pub fn start(&self) -> FeatureId {
        self.par1
    }

    pub fn end(&self) -> FeatureId {
        self.par2
    }

    /// Bearing from the first parallel point to the second. Zero if either
    /// of them is undefined.
    pub fn bearing(&self, points: &dyn PointLookup) -> RadianValue {
        RadianValue(bearing_between(points, self.par1, self.par2))
    }
}

/// The ways a direction can be observed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DirectionKind {
    Angle(AngleDirection),
    Deflection(DeflectionDirection),
    Bearing(BearingDirection),
    Parallel(ParallelDirection),
}

impl DirectionKind {
    pub fn from_point(&self) -> FeatureId {
        match self {
            DirectionKind::Angle(d) => d.from_point(),
            DirectionKind::Deflection(d) => d.from_point(),
            DirectionKind::Bearing(d) => d.from_point(),
            DirectionKind::Parallel(d) => d.from_point(),
        }
    }

    pub fn bearing(&self, points: &dyn PointLookup) -> RadianValue {
        match self {
            DirectionKind::Angle(d) => d.bearing(points),
            DirectionKind::Deflection(d) => d.bearing(points),
            DirectionKind::Bearing(d) => d.bearing(),
            DirectionKind::Parallel(d) => d.bearing(points),
        }
    }

    fn references(&self) -> Vec<FeatureId> {
        match self {
            DirectionKind::Angle(d) => vec![d.from_point(), d.backsight()],
            DirectionKind::Deflection(d) => vec![d.from_point(), d.backsight()],
            DirectionKind::Bearing(d) => vec![d.from_point()],
            DirectionKind::Parallel(d) => vec![d.from_point(), d.start(), d.end()],
        }
    }
}

/// Where a direction line meets a circle.
#[derive(Debug, Clone, Copy)]
pub enum CircleIntersection {
    None,
    One(Position),
    /// Two intersections, nearest the start of the direction first.
    Two(Position, Position),
}

impl CircleIntersection {
    pub fn count(&self) -> usize {
        match self {
            CircleIntersection::None => 0,
            CircleIntersection::One(_) => 1,
            CircleIntersection::Two(_, _) => 2,
        }
    }
}

/// A direction observation, optionally offset to one side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Direction {
    kind: DirectionKind,
    offset: Option<Offset>,
}

impl Direction {
    pub fn new(kind: DirectionKind) -> Self {
        Self { kind, offset: None }
    }

    pub fn with_offset(mut self, offset: impl Into<Offset>) -> Self {
        self.offset = Some(offset.into());
        self
    }

    pub fn kind(&self) -> &DirectionKind {
        &self.kind
    }

    /// Mutable access for correcting the observation in place.
    pub fn kind_mut(&mut self) -> &mut DirectionKind {
        &mut self.kind
    }

    pub fn offset(&self) -> Option<&Offset> {
        self.offset.as_ref()
    }

    pub fn set_offset(&mut self, offset: Option<Offset>) {
        self.offset = offset;
    }

    /// The point the direction was observed from.
    pub fn from_point(&self) -> FeatureId {
        self.kind.from_point()
    }

    /// The stored observation. A parallel direction has none, so its
    /// bearing is reported instead.
    pub fn observation_in_radians(&self, points: &dyn PointLookup) -> f64 {
        match &self.kind {
            DirectionKind::Angle(d) => d.observation_in_radians(),
            DirectionKind::Deflection(d) => d.observation_in_radians(),
            DirectionKind::Bearing(d) => d.observation_in_radians(),
            DirectionKind::Parallel(d) => d.bearing(points).radians(),
        }
    }

    pub fn bearing(&self, points: &dyn PointLookup) -> RadianValue {
        self.kind.bearing(points)
    }

    /// Signed offset in meters (left < 0 < right), zero with no offset.
    pub fn metric_offset(&self, points: &dyn PointLookup) -> f64 {
        self.offset.map_or(0.0, |o| o.metric(self, points))
    }

    /// Where the direction line starts.
    ///
    /// Without an offset that is the occupied point. An offset point is
    /// used as is, and an offset distance is measured square off the
    /// bearing (to the right for positive values). `None` if the relevant
    /// point is undefined.
    pub fn start_position(&self, points: &dyn PointLookup) -> Option<Position> {
        match &self.offset {
            None => points.position(self.from_point()),
            Some(Offset::Point(p)) => p.point().and_then(|id| points.position(id)),
            Some(Offset::Distance(d)) => {
                let from = points.position(self.from_point())?;
                let bearing = self.bearing(points).radians() + FRAC_PI_2;
                Some(basic::polar(&from, bearing, d.metric()))
            }
        }
    }

    /// Position `distance` meters along the direction line.
    pub fn position_at(&self, distance: f64, points: &dyn PointLookup) -> Option<Position> {
        let start = self.start_position(points)?;
        Some(basic::polar(&start, self.bearing(points).radians(), distance))
    }

    /// Intersection of the infinite lines through two directions. `None` if
    /// they are parallel or either start position is undefined.
    pub fn intersect(&self, other: &Direction, points: &dyn PointLookup) -> Option<Position> {
        let from1 = self.start_position(points)?;
        let from2 = other.start_position(points)?;
        let b1 = self.bearing(points).radians();
        let b2 = other.bearing(points).radians();

        // each line is x = xo + sin(b)*r, y = yo + cos(b)*r
        let (sinb1, cosb1) = b1.sin_cos();
        let (sinb2, cosb2) = b2.sin_cos();
        let det = sinb2 * cosb1 - sinb1 * cosb2;
        if det.abs() < TINY {
            debug!("directions are parallel");
            return None;
        }

        let dx = from2.x - from1.x;
        let dy = from2.y - from1.y;
        let prat = (sinb2 * dy - cosb2 * dx) / det;
        Some(Position::new(from1.x + sinb1 * prat, from1.y + cosb1 * prat))
    }

    /// Intersections of the direction with a circle. Only points at or
    /// beyond the start of the direction count.
    pub fn intersect_circle(
        &self,
        centre: &Position,
        radius: f64,
        points: &dyn PointLookup,
    ) -> CircleIntersection {
        let Some(start) = self.start_position(points) else {
            debug!("direction start is undefined");
            return CircleIntersection::None;
        };
        let (f, g) = self.bearing(points).radians().sin_cos();
        let fgsq = f * f + g * g;

        let dx = centre.x - start.x;
        let dy = centre.y - start.y;
        let fygx = f * dy - g * dx;
        let root = radius * radius * fgsq - fygx * fygx;
        if root < -TINY {
            debug!("direction misses circle of radius {radius}");
            return CircleIntersection::None;
        }

        let at = |prat: f64| Position::new(start.x + f * prat, start.y + g * prat);
        let fxgy = f * dx + g * dy;

        // tangent, unless it falls behind the start
        if root < TINY {
            let prat = fxgy / fgsq;
            return if prat < 0.0 {
                CircleIntersection::None
            } else {
                CircleIntersection::One(at(prat))
            };
        }

        let root = root.sqrt();
        let prat1 = (fxgy - root) / fgsq;
        let prat2 = (fxgy + root) / fgsq;
        let (near, far) = (prat1.min(prat2), prat1.max(prat2));
        if far < 0.0 {
            CircleIntersection::None
        } else if near >= 0.0 {
            CircleIntersection::Two(at(near), at(far))
        } else {
            CircleIntersection::One(at(far))
        }
    }

    /// Checks whether two directions describe the same observation,
    /// including any offset.
    pub fn is_equivalent(&self, other: &Direction, points: &dyn PointLookup) -> bool {
        if discriminant(&self.kind) != discriminant(&other.kind) {
            return false;
        }

        match (&self.offset, &other.offset) {
            (None, None) => {}
            (Some(a), Some(b)) => {
                let off_this = a.metric(self, points);
                let off_that = b.metric(other, points);
                if (off_this < 0.0) != (off_that < 0.0) {
                    return false;
                }
                if (off_this - off_that).abs() > TINY {
                    return false;
                }
            }
            _ => return false,
        }

        self.kind == other.kind
    }

    /// Every point the direction refers to, offset point included.
    pub fn references(&self) -> Vec<FeatureId> {
        let mut refs = self.kind.references();
        if let Some(o) = &self.offset {
            refs.extend(o.references());
        }
        refs
    }

    pub fn has_reference(&self, id: FeatureId) -> bool {
        self.references().contains(&id)
    }
}

impl From<DirectionKind> for Direction {
    fn from(kind: DirectionKind) -> Self {
        Direction::new(kind)
    }
}

impl From<AngleDirection> for Direction {
    fn from(d: AngleDirection) -> Self {
        Direction::new(DirectionKind::Angle(d))
    }
}

impl From<DeflectionDirection> for Direction {
    fn from(d: DeflectionDirection) -> Self {
        Direction::new(DirectionKind::Deflection(d))
    }
}

impl From<BearingDirection> for Direction {
    fn from(d: BearingDirection) -> Self {
        Direction::new(DirectionKind::Bearing(d))
    }
}

impl From<ParallelDirection> for Direction {
    fn from(d: ParallelDirection) -> Self {
        Direction::new(DirectionKind::Parallel(d))
    }
}
