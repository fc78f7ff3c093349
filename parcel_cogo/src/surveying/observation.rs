//! The common face of every observation kind.

use log::debug;
use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::distance::Distance;
use super::features::{FeatureId, PointLookup};
use super::offset::Offset;
use crate::units::RadianValue;

/// What an observation resolves to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    Bearing(RadianValue),
    /// A signed length in meters.
    Metric(f64),
}

impl Resolution {
    pub fn bearing(self) -> Option<RadianValue> {
        match self {
            Resolution::Bearing(b) => Some(b),
            Resolution::Metric(_) => None,
        }
    }

    pub fn metric(self) -> Option<f64> {
        match self {
            Resolution::Bearing(_) => None,
            Resolution::Metric(m) => Some(m),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Observation {
    Direction(Direction),
    Offset(Offset),
    Distance(Distance),
}

impl Observation {
    /// Resolves the observation against the current point positions.
    ///
    /// Directions give a bearing. Offsets give a signed metric relative to
    /// `reference`; an offset point with no reference direction resolves
    /// to zero. Distances give their length in meters.
    pub fn resolve(&self, points: &dyn PointLookup, reference: Option<&Direction>) -> Resolution {
        match self {
            Observation::Direction(d) => Resolution::Bearing(d.bearing(points)),
            Observation::Offset(o) => {
                let metric = match (o, reference) {
                    (_, Some(dir)) => o.metric(dir, points),
                    (Offset::Distance(d), None) => d.metric(),
                    (Offset::Point(_), None) => {
                        debug!("offset point resolved without a reference direction");
                        0.0
                    }
                };
                Resolution::Metric(metric)
            }
            Observation::Distance(d) => Resolution::Metric(d.meters()),
        }
    }

    /// Points this observation refers to.
    pub fn references(&self) -> Vec<FeatureId> {
        match self {
            Observation::Direction(d) => d.references(),
            Observation::Offset(o) => o.references(),
            Observation::Distance(_) => Vec::new(),
        }
    }

    pub fn has_reference(&self, id: FeatureId) -> bool {
        match self {
            Observation::Direction(d) => d.has_reference(id),
            Observation::Offset(o) => o.has_reference(id),
            Observation::Distance(_) => false,
        }
    }
}

impl From<Direction> for Observation {
    fn from(d: Direction) -> Self {
        Observation::Direction(d)
    }
}

impl From<Offset> for Observation {
    fn from(o: Offset) -> Self {
        Observation::Offset(o)
    }
}

impl From<Distance> for Observation {
    fn from(d: Distance) -> Self {
        Observation::Distance(d)
    }
}
