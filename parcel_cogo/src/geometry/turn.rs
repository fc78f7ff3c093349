//! Clockwise angles measured from a reference bearing.

use std::f64::consts::TAU;

use super::{basic, Position, TINY};
use crate::units::RadianValue;

/// A reference direction through an origin. Angles to other bearings or
/// positions are reckoned clockwise from it.
#[derive(Debug, Clone, Copy)]
pub struct Turn {
    origin: Position,
    bearing: f64,
}

impl Turn {
    /// Creates a turn whose reference runs from `origin` towards `reference`.
    pub fn new(origin: Position, reference: Position) -> Self {
        Self {
            origin,
            bearing: basic::bearing(&origin, &reference).radians(),
        }
    }

    /// Creates a turn from a known reference bearing.
    pub fn from_bearing(origin: Position, bearing: RadianValue) -> Self {
        Self {
            origin,
            bearing: bearing.normalized().radians(),
        }
    }

    pub fn origin(&self) -> Position {
        self.origin
    }

    pub fn bearing(&self) -> RadianValue {
        RadianValue(self.bearing)
    }

    /// Clockwise angle from the reference bearing to `target` (a bearing
    /// in `[0, 2π)`), in `[0, 2π)`.
    ///
    /// With a positive `ang_tol`, results within that tolerance of either
    /// end of the range are returned as zero.
    pub fn angle_to_bearing(&self, target: f64, ang_tol: f64) -> RadianValue {
        let mut angle = if target < self.bearing {
            target + TAU - self.bearing
        } else {
            target - self.bearing
        };

        // a target just below the reference can round up to a full circle
        if angle >= TAU {
            angle = 0.0;
        }
        if angle < TINY {
            angle = 0.0;
        }

        if ang_tol > 0.0 && (angle < ang_tol || (angle - TAU).abs() < ang_tol) {
            angle = 0.0;
        }

        RadianValue(angle)
    }

    /// Clockwise angle from the reference bearing to the direction of
    /// `pos` as seen from the origin.
    pub fn angle_to_position(&self, pos: &Position, ang_tol: f64) -> RadianValue {
        let target = basic::bearing(&self.origin, pos).radians();
        self.angle_to_bearing(target, ang_tol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn clockwise_from_reference() {
        let turn = Turn::new(Position::new(0.0, 0.0), Position::new(0.0, 10.0));
        assert_eq!(turn.bearing().radians(), 0.0);
        let east = turn.angle_to_position(&Position::new(5.0, 0.0), 0.0);
        assert!((east.radians() - FRAC_PI_2).abs() < 1e-12);
        let west = turn.angle_to_position(&Position::new(-5.0, 0.0), 0.0);
        assert!((west.radians() - 1.5 * PI).abs() < 1e-12);
    }

    #[test]
    fn wraps_through_north() {
        let turn = Turn::from_bearing(Position::new(0.0, 0.0), RadianValue::from_degrees(350.0));
        let a = turn.angle_to_bearing(10f64.to_radians(), 0.0);
        assert!((a.degrees() - 20.0).abs() < 1e-9);
        let b = turn.angle_to_bearing(340f64.to_radians(), 0.0);
        assert!((b.degrees() - 350.0).abs() < 1e-9);
    }

    #[test]
    fn tolerance_snaps_near_reference() {
        let turn = Turn::from_bearing(Position::new(0.0, 0.0), RadianValue::from_degrees(90.0));
        let tol = 1e-3;
        let just_before = turn.angle_to_bearing(FRAC_PI_2 - 1e-4, tol);
        assert_eq!(just_before.radians(), 0.0);
        let just_after = turn.angle_to_bearing(FRAC_PI_2 + 1e-4, tol);
        assert_eq!(just_after.radians(), 0.0);
        let without = turn.angle_to_bearing(FRAC_PI_2 - 1e-4, 0.0);
        assert!(without.radians() > 6.0);
    }

    #[test]
    fn target_just_below_reference_stays_below_full_circle() {
        let turn = Turn::from_bearing(Position::new(0.0, 0.0), RadianValue(1.0));
        let below = f64::from_bits(1.0f64.to_bits() - 1);
        let a = turn.angle_to_bearing(below, 0.0);
        assert!(a.radians() >= 0.0 && a.radians() < TAU);
    }
}
