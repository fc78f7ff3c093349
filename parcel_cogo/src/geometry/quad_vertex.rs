//! Positions expressed relative to an origin as a quadrant plus IJ deltas.
//!
//! Quadrants start in the north-east and work round clockwise. Within a
//! quadrant the I axis is the axis at the start of the quadrant and the J
//! axis the one at its end, so both deltas are non-negative and `J/I` is the
//! tangent of the clockwise angle from the start of the quadrant. This keeps
//! trigonometric ratios well behaved near the coordinate axes.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use serde::{Deserialize, Serialize};

use super::{Position, TINY};
use crate::units::RadianValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    NE,
    SE,
    SW,
    NW,
    /// Undefined; only produced when the vertex coincides with the origin.
    All,
}

impl Quadrant {
    /// The next quadrant reckoned clockwise.
    pub fn next(self) -> Self {
        match self {
            Quadrant::NE => Quadrant::SE,
            Quadrant::SE => Quadrant::SW,
            Quadrant::SW => Quadrant::NW,
            Quadrant::NW => Quadrant::NE,
            Quadrant::All => Quadrant::All,
        }
    }

    /// Bearing of the axis at the start of the quadrant.
    pub fn base_bearing(self) -> f64 {
        match self {
            Quadrant::NE | Quadrant::All => 0.0,
            Quadrant::SE => FRAC_PI_2,
            Quadrant::SW => PI,
            Quadrant::NW => 1.5 * PI,
        }
    }

    /// Each quadrant includes its initial axis but not the one that follows.
    fn classify(dx: f64, dy: f64) -> Self {
        if dx >= 0.0 && dy > 0.0 {
            Quadrant::NE
        } else if dx > 0.0 && dy <= 0.0 {
            Quadrant::SE
        } else if dx <= 0.0 && dy < 0.0 {
            Quadrant::SW
        } else if dx < 0.0 && dy >= 0.0 {
            Quadrant::NW
        } else {
            Quadrant::All
        }
    }
}

impl std::fmt::Display for Quadrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Quadrant::NE => "NE",
            Quadrant::SE => "SE",
            Quadrant::SW => "SW",
            Quadrant::NW => "NW",
            Quadrant::All => "All",
        };
        f.write_str(s)
    }
}

/// A vertex expressed relative to an origin.
#[derive(Debug, Clone, Copy)]
pub struct QuadVertex {
    origin: Position,
    di: f64,
    dj: f64,
    quadrant: Quadrant,
    /// Length of the vector from the origin; zero if the deltas are raw.
    length: f64,
}

impl QuadVertex {
    pub fn new(origin: Position, vertex: Position) -> Self {
        Self::with_length(origin, vertex, 0.0)
    }

    /// Builds a vertex whose deltas are normalized by `length` (the distance
    /// from `origin` to `vertex`). Pass zero to keep the raw deltas.
    ///
    /// Deltas below [`TINY`] snap to zero. The threshold is absolute, so with
    /// raw deltas two distinct positions closer than that on both axes give
    /// [`Quadrant::All`] and a bearing of zero.
    pub fn with_length(origin: Position, vertex: Position, length: f64) -> Self {
        let mut dx = vertex.x - origin.x;
        let mut dy = vertex.y - origin.y;

        if length > TINY {
            let inv = 1.0 / length;
            dx = (dx * inv).clamp(-1.0, 1.0);
            dy = (dy * inv).clamp(-1.0, 1.0);
        }

        if dx.abs() < TINY {
            dx = 0.0;
        }
        if dy.abs() < TINY {
            dy = 0.0;
        }

        let quadrant = Quadrant::classify(dx, dy);
        let (di, dj) = match quadrant {
            Quadrant::NE => (dy, dx),
            Quadrant::SE => (dx, -dy),
            Quadrant::SW => (-dy, -dx),
            Quadrant::NW => (-dx, dy),
            Quadrant::All => (0.0, 0.0),
        };

        Self {
            origin,
            di,
            dj,
            quadrant,
            length: if length > TINY { length } else { 0.0 },
        }
    }

    pub fn origin(&self) -> Position {
        self.origin
    }

    pub fn quadrant(&self) -> Quadrant {
        self.quadrant
    }

    /// The `(I, J)` deltas in the quadrant's local frame.
    pub fn deltas(&self) -> (f64, f64) {
        (self.di, self.dj)
    }

    /// Tangent of the clockwise angle from the start of the quadrant.
    pub fn tan_angle(&self) -> f64 {
        self.dj / self.di
    }

    pub fn is_valid(&self) -> bool {
        self.quadrant != Quadrant::All
    }

    /// Bearing from the origin to the vertex, in `[0, 2π)`. Zero if the
    /// vertex coincides with the origin.
    pub fn bearing_in_radians(&self) -> f64 {
        if !self.is_valid() {
            return 0.0;
        }
        let mut ang = (self.dj / self.di).atan();
        if ang < TINY {
            ang = 0.0;
        }
        let bearing = ang + self.quadrant.base_bearing();
        // an angle that rounds onto 2π is due north
        if bearing >= TAU {
            0.0
        } else {
            bearing
        }
    }

    pub fn bearing(&self) -> RadianValue {
        RadianValue(self.bearing_in_radians())
    }

    /// Area of the region to the left of a circular arc running from the
    /// start of the quadrant to this vertex, extending to the Y axis. The
    /// origin is the centre of the circle.
    ///
    /// Areas in the south-west and north-west quadrants are returned
    /// negated. Raw deltas are normalized on a copy; the vertex itself is
    /// left unchanged.
    pub fn curve_area(&self) -> f64 {
        if !self.is_valid() {
            return 0.0;
        }

        let (di, dj, r) = if self.length < TINY {
            let r = self.di.hypot(self.dj);
            let inv = 1.0 / r;
            (
                (self.di * inv).clamp(-1.0, 1.0),
                (self.dj * inv).clamp(-1.0, 1.0),
                r,
            )
        } else {
            (self.di, self.dj, self.length)
        };

        let ang = dj.asin();
        let xc = self.origin.x;
        let rsq = r * r;

        match self.quadrant {
            Quadrant::NE => rsq * 0.5 * (ang - di * dj) + r * xc * (1.0 - di),
            Quadrant::SE => rsq * 0.5 * (ang + di * dj) + r * xc * dj,
            Quadrant::SW => -(rsq * -0.5 * (ang - di * dj) + r * xc * (1.0 - di)),
            Quadrant::NW => -(rsq * -0.5 * (ang + di * dj) + r * xc * dj),
            Quadrant::All => 0.0,
        }
    }
}

/// Checks whether positions along a circular arc run clockwise about
/// `centre`.
///
/// Looks for the first pair of successive positions in the same quadrant
/// and compares their angles. Returns `None` if there are fewer than two
/// positions or no such pair exists.
pub fn is_clockwise(points: &[Position], centre: &Position) -> Option<bool> {
    let (first, rest) = points.split_first()?;
    let mut start = QuadVertex::new(*centre, *first);
    for p in rest {
        let end = QuadVertex::new(*centre, *p);
        if start.quadrant() == end.quadrant() {
            return Some(start.tan_angle() < end.tan_angle());
        }
        start = end;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_4};

    fn origin() -> Position {
        Position::new(0.0, 0.0)
    }

    #[test]
    fn axes_belong_to_the_quadrant_they_start() {
        let cases = [
            ((0.0, 10.0), Quadrant::NE, 0.0),
            ((10.0, 0.0), Quadrant::SE, FRAC_PI_2),
            ((0.0, -10.0), Quadrant::SW, PI),
            ((-10.0, 0.0), Quadrant::NW, 1.5 * PI),
        ];
        for ((x, y), quadrant, bearing) in cases {
            let qv = QuadVertex::new(origin(), Position::new(x, y));
            assert_eq!(qv.quadrant(), quadrant);
            assert_eq!(qv.deltas(), (10.0, 0.0));
            assert!((qv.bearing_in_radians() - bearing).abs() < 1e-12);
        }
    }

    #[test]
    fn diagonal_bearings() {
        let qv = QuadVertex::new(origin(), Position::new(1.0, 1.0));
        assert_eq!(qv.quadrant(), Quadrant::NE);
        assert!((qv.bearing_in_radians() - FRAC_PI_4).abs() < 1e-12);
        let qv = QuadVertex::new(origin(), Position::new(-1.0, 1.0));
        assert_eq!(qv.quadrant(), Quadrant::NW);
        assert!((qv.bearing_in_radians() - 1.75 * PI).abs() < 1e-12);
    }

    #[test]
    fn coincident_vertex_is_undefined() {
        let qv = QuadVertex::new(Position::new(5.0, 5.0), Position::new(5.0, 5.0));
        assert_eq!(qv.quadrant(), Quadrant::All);
        assert!(!qv.is_valid());
        assert_eq!(qv.bearing_in_radians(), 0.0);
        assert_eq!(qv.curve_area(), 0.0);
    }

    #[test]
    fn normalized_deltas_are_clamped() {
        // a length hint slightly short of the true distance
        let qv = QuadVertex::with_length(origin(), Position::new(0.0, 10.0), 9.999999);
        let (di, dj) = qv.deltas();
        assert_eq!(di, 1.0);
        assert_eq!(dj, 0.0);
    }

    #[test]
    fn next_quadrant_cycles() {
        assert_eq!(Quadrant::NE.next(), Quadrant::SE);
        assert_eq!(Quadrant::NW.next(), Quadrant::NE);
        assert_eq!(Quadrant::All.next(), Quadrant::All);
    }

    #[test]
    fn curve_area_north_east() {
        let r = 2.0;
        let p = Position::new(r * FRAC_1_SQRT_2, r * FRAC_1_SQRT_2);
        let expected = r * r * 0.5 * (FRAC_PI_4 - 0.5);
        assert!((QuadVertex::new(origin(), p).curve_area() - expected).abs() < 1e-9);
        let known = QuadVertex::with_length(origin(), p, r);
        assert!((known.curve_area() - expected).abs() < 1e-9);

        // moving the centre east adds the strip between the Y axis and circle
        let c = Position::new(10.0, 0.0);
        let q = Position::new(c.x + p.x, p.y);
        let strip = r * c.x * (1.0 - FRAC_1_SQRT_2);
        assert!((QuadVertex::new(c, q).curve_area() - (expected + strip)).abs() < 1e-9);
    }

    #[test]
    fn curve_area_western_quadrants_are_negated() {
        let r = 2.0;
        let p = Position::new(-r * FRAC_1_SQRT_2, -r * FRAC_1_SQRT_2);
        let qv = QuadVertex::new(origin(), p);
        assert_eq!(qv.quadrant(), Quadrant::SW);
        let expected = -(r * r * -0.5 * (FRAC_PI_4 - 0.5));
        assert!((qv.curve_area() - expected).abs() < 1e-9);
    }

    #[test]
    fn curve_area_south_east_and_north_west() {
        let r = 2.0;
        let expected = r * r * 0.5 * (FRAC_PI_4 + 0.5);

        let se = QuadVertex::new(origin(), Position::new(r * FRAC_1_SQRT_2, -r * FRAC_1_SQRT_2));
        assert_eq!(se.quadrant(), Quadrant::SE);
        assert!((se.curve_area() - expected).abs() < 1e-9);

        let nw = QuadVertex::new(origin(), Position::new(-r * FRAC_1_SQRT_2, r * FRAC_1_SQRT_2));
        assert_eq!(nw.quadrant(), Quadrant::NW);
        assert!((nw.curve_area() - expected).abs() < 1e-9);
    }

    #[test]
    fn clockwise_detection() {
        let c = origin();
        let cw = [
            Position::new(0.0, 10.0),
            Position::new(5.0, 8.0),
            Position::new(8.0, 5.0),
        ];
        assert_eq!(is_clockwise(&cw, &c), Some(true));
        let ccw: Vec<Position> = cw.iter().rev().copied().collect();
        assert_eq!(is_clockwise(&ccw, &c), Some(false));
        assert_eq!(is_clockwise(&cw[..1], &c), None);
        let split = [Position::new(1.0, 1.0), Position::new(1.0, -1.0)];
        assert_eq!(is_clockwise(&split, &c), None);
    }
}
