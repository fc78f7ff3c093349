//! Basic geometric calculations that you can seldom do without.
//!
//! Everything here is stateless. Bearings are clockwise from north.

use std::f64::consts::TAU;

use super::{Position, QuadVertex, Turn, TINY};
use crate::units::RadianValue;

/// Euclidean distance between two positions.
pub fn distance(a: &Position, b: &Position) -> f64 {
    distance_squared(a, b).sqrt()
}

pub fn distance_squared(a: &Position, b: &Position) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx * dx + dy * dy
}

/// Smallest distance (squared) from `point` to a polyline.
///
/// Returns `f64::INFINITY` for an empty polyline, and zero as soon as a
/// segment passes through the point.
pub fn min_distance_squared(line: &[Position], point: &Position) -> f64 {
    let Some(first) = line.first() else {
        return f64::INFINITY;
    };
    let mut mind = distance_squared(first, point);

    for seg in line.windows(2) {
        let (s, e) = (seg[0], seg[1]);
        let dist = distance_squared_to_segment(point.x, point.y, s.x, s.y, e.x, e.y);
        if dist < mind {
            mind = dist;
            if mind < TINY {
                return 0.0;
            }
        }
    }
    mind
}

/// Position ratio of the perpendicular from `(x, y)` onto the line through
/// `(xs, ys)` and `(xe, ye)`: 0 at the start, 1 at the end, unclamped.
pub fn position_ratio(x: f64, y: f64, xs: f64, ys: f64, xe: f64, ye: f64) -> f64 {
    let dxseg = xe - xs;
    let dyseg = ye - ys;
    let lensq = dxseg * dxseg + dyseg * dyseg;
    ((dxseg * (x - xs)) + (dyseg * (y - ys))) / lensq
}

/// Foot of the perpendicular from `(x, y)` to a segment.
///
/// If the foot lies beyond either end, the closer end point is returned
/// instead. A zero-length segment returns its start.
pub fn get_perpendicular(x: f64, y: f64, xs: f64, ys: f64, xe: f64, ye: f64) -> Position {
    let dxseg = xe - xs;
    let dyseg = ye - ys;
    if dxseg * dxseg + dyseg * dyseg < TINY {
        return Position::new(xs, ys);
    }

    let posrat = position_ratio(x, y, xs, ys, xe, ye);
    if (0.0..=1.0).contains(&posrat) {
        Position::new(xs + posrat * dxseg, ys + posrat * dyseg)
    } else if posrat < 0.0 {
        Position::new(xs, ys)
    } else {
        Position::new(xe, ye)
    }
}

/// Distance (squared) from `(x, y)` to the closest point of a segment.
pub fn distance_squared_to_segment(x: f64, y: f64, xs: f64, ys: f64, xe: f64, ye: f64) -> f64 {
    let p = get_perpendicular(x, y, xs, ys, xe, ye);
    let dx = x - p.x;
    let dy = y - p.y;
    dx * dx + dy * dy
}

/// Signed perpendicular distance from `(xoff, yoff)` to the infinite line
/// through `(x, y)` with the given bearing. Negative values are to the
/// left of the line's direction of travel, positive to the right.
pub fn signed_distance(x: f64, y: f64, bearing: f64, xoff: f64, yoff: f64) -> f64 {
    // With (x,y) as origin and the line as a unit vector (sin b, cos b),
    // the implicit form reduces to cos(b)*dx - sin(b)*dy.
    bearing.cos() * (xoff - x) - bearing.sin() * (yoff - y)
}

/// Bearing from `origin` to `pos`. Zero if the two coincide.
pub fn bearing(origin: &Position, pos: &Position) -> RadianValue {
    QuadVertex::new(*origin, *pos).bearing()
}

/// Checks whether `pos` falls in the sector of a clockwise circular arc
/// running from `start` to `end` about `centre`. Only the bearing matters;
/// `pos` need not lie on the arc.
///
/// A positive `ang_tol` also accepts positions up to that angle beyond
/// either end of the arc.
pub fn is_in_sector(
    pos: &Position,
    centre: &Position,
    start: &Position,
    end: &Position,
    ang_tol: f64,
) -> bool {
    let turn = Turn::new(*centre, *start);
    let a_this = turn.angle_to_position(pos, 0.0).radians();
    let a_end = turn.angle_to_position(end, 0.0).radians();
    if a_this <= a_end {
        return true;
    }

    debug_assert!((0.0..=TAU).contains(&a_this));
    debug_assert!((0.0..=TAU).contains(&a_end));

    if ang_tol > TINY {
        // close to the start of the arc
        if a_this < ang_tol || (a_this - TAU).abs() < ang_tol {
            return true;
        }
        // close to the end
        if (a_this - a_end).abs() < ang_tol {
            return true;
        }
    }
    false
}

/// Position at `distance` along `bearing` from `origin`.
pub fn polar(origin: &Position, bearing: f64, distance: f64) -> Position {
    Position::new(
        origin.x + distance * bearing.sin(),
        origin.y + distance * bearing.cos(),
    )
}

/// Rotates `point` about `origin` by a clockwise angle (negative for
/// counter-clockwise).
pub fn rotate(origin: &Position, point: &Position, rotation: RadianValue) -> Position {
    let dist = distance(origin, point);
    let newbearing = bearing(origin, point).radians() + rotation.radians();
    polar(origin, newbearing, dist)
}

/// Midpoint of two positions.
pub fn mid_point(p: &Position, q: &Position) -> Position {
    Position::new(p.x + (q.x - p.x) * 0.5, p.y + (q.y - p.y) * 0.5)
}

/// Checks whether `pt` lies strictly to the right of the directed line from
/// `p1` to `p2`. Always false if `p1` and `p2` coincide.
pub fn is_right_of(p1: &Position, p2: &Position, pt: &Position) -> bool {
    let mut dx = p2.x - p1.x;
    if dx.abs() < TINY {
        dx = 0.0;
    }
    let mut dy = p2.y - p1.y;
    if dy.abs() < TINY {
        dy = 0.0;
    }
    let d = dx.hypot(dy);
    if d < TINY {
        return false;
    }
    ((dy / d) * (pt.x - p1.x) - (dx / d) * (pt.y - p1.y)) > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn distances() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert_eq!(distance(&a, &b), 5.0);
        assert_eq!(distance_squared(&a, &b), 25.0);
    }

    #[test]
    fn perpendicular_inside_segment() {
        let p = get_perpendicular(5.0, 3.0, 0.0, 0.0, 10.0, 0.0);
        assert!((p.x - 5.0).abs() < 1e-12 && p.y.abs() < 1e-12);
        let d = distance_squared_to_segment(5.0, 3.0, 0.0, 0.0, 10.0, 0.0);
        assert!((d - 9.0).abs() < 1e-12);
    }

    #[test]
    fn perpendicular_past_end_snaps_to_end() {
        let p = get_perpendicular(15.0, 3.0, 0.0, 0.0, 10.0, 0.0);
        assert_eq!((p.x, p.y), (10.0, 0.0));
        assert!((position_ratio(15.0, 3.0, 0.0, 0.0, 10.0, 0.0) - 1.5).abs() < 1e-12);
    }

    #[test]
    fn perpendicular_on_zero_length_segment() {
        let p = get_perpendicular(5.0, 5.0, 1.0, 1.0, 1.0, 1.0);
        assert_eq!((p.x, p.y), (1.0, 1.0));
    }

    #[test]
    fn min_distance_to_polyline() {
        let line = [
            Position::new(0.0, 0.0),
            Position::new(10.0, 0.0),
            Position::new(10.0, 10.0),
        ];
        assert!((min_distance_squared(&line, &Position::new(12.0, 5.0)) - 4.0).abs() < 1e-12);
        assert_eq!(min_distance_squared(&line, &Position::new(5.0, 0.0)), 0.0);
        assert!((min_distance_squared(&line[..1], &Position::new(3.0, 4.0)) - 25.0).abs() < 1e-12);
        assert_eq!(min_distance_squared(&[], &Position::new(0.0, 0.0)), f64::INFINITY);
    }

    #[test]
    fn polar_uses_north_based_bearings() {
        let o = Position::new(100.0, 200.0);
        let north = polar(&o, 0.0, 10.0);
        assert!((north.x - 100.0).abs() < 1e-12 && (north.y - 210.0).abs() < 1e-12);
        let east = polar(&o, FRAC_PI_2, 10.0);
        assert!((east.x - 110.0).abs() < 1e-12 && (east.y - 200.0).abs() < 1e-12);
    }

    #[test]
    fn rotate_about_origin() {
        let o = Position::new(0.0, 0.0);
        let p = Position::new(0.0, 10.0);
        let cw = rotate(&o, &p, RadianValue(FRAC_PI_2));
        assert!((cw.x - 10.0).abs() < 1e-9 && cw.y.abs() < 1e-9);
        let ccw = rotate(&o, &p, RadianValue(-FRAC_PI_2));
        assert!((ccw.x + 10.0).abs() < 1e-9 && ccw.y.abs() < 1e-9);
        let half = rotate(&o, &p, RadianValue(PI));
        assert!(half.x.abs() < 1e-9 && (half.y + 10.0).abs() < 1e-9);
    }

    #[test]
    fn mid_point_and_side() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(0.0, 10.0);
        let m = mid_point(&a, &b);
        assert_eq!((m.x, m.y), (0.0, 5.0));
        assert!(is_right_of(&a, &b, &Position::new(1.0, 5.0)));
        assert!(!is_right_of(&a, &b, &Position::new(-1.0, 5.0)));
        assert!(!is_right_of(&a, &a, &Position::new(1.0, 5.0)));
    }
}
