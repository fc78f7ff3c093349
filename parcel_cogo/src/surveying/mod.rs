//! Survey observations and the point features they refer to.

pub mod direction;
pub use direction::{
    AngleDirection, BearingDirection, CircleIntersection, DeflectionDirection, Direction,
    DirectionKind, ParallelDirection,
};

pub mod distance;
pub use distance::Distance;

pub mod features;
pub use features::{FeatureId, PointFeature, PointLookup, PointStore};

pub mod observation;
pub use observation::{Observation, Resolution};

pub mod offset;
pub use offset::{Offset, OffsetDistance, OffsetPoint};
