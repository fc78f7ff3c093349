use std::f64::consts::TAU;

use parcel_cogo::geometry::{basic, Position, QuadVertex, Quadrant, Window};
use parcel_cogo::surveying::{
    BearingDirection, Direction, Distance, FeatureId, Offset, OffsetDistance, PointStore,
};
use parcel_cogo::units::{normalize, to_meters, to_microns, RadianValue};

fn sample_positions() -> Vec<Position> {
    let mut pts = Vec::new();
    for i in -3..=3 {
        for j in -3..=3 {
            pts.push(Position::new(i as f64 * 17.3 + 0.25, j as f64 * 11.9 - 4.0));
        }
    }
    pts.push(Position::new(1e-13, 5.0));
    pts.push(Position::new(-250_000.0, 4_999_000.0));
    pts
}

#[test]
fn polar_inverts_bearing_and_distance() {
    let pts = sample_positions();
    for p in &pts {
        for q in &pts {
            if p.is_at(q, 1e-9) {
                continue;
            }
            let b = basic::bearing(p, q).radians();
            let d = basic::distance(p, q);
            let r = basic::polar(p, b, d);
            assert!(r.is_at(q, 1e-6), "{p} -> {q} gave {r}");
        }
    }
}

#[test]
fn every_direction_has_one_quadrant() {
    let origin = Position::new(10.0, -20.0);
    for k in 0..720 {
        let ang = k as f64 * TAU / 720.0;
        let target = basic::polar(&origin, ang, 3.5);
        let qv = QuadVertex::new(origin, target);
        assert_ne!(qv.quadrant(), Quadrant::All);
        let b = qv.bearing_in_radians();
        assert!((0.0..TAU).contains(&b), "bearing {b} out of range");
    }
    for (dx, dy) in [(0.0, 1.0), (1.0, 0.0), (0.0, -1.0), (-1.0, 0.0), (3.0, -4.0)] {
        let qv = QuadVertex::new(Position::new(0.0, 0.0), Position::new(dx, dy));
        assert!(qv.is_valid());
    }
}

#[test]
fn normalize_twice_is_normalize_once() {
    let mut a = -50.0;
    while a < 50.0 {
        let once = normalize(a);
        assert!((0.0..TAU).contains(&once));
        assert_eq!(normalize(once), once);
        a += 0.37;
    }
}

#[test]
fn union_never_shrinks_a_window() {
    let pts = sample_positions();
    let mut w = Window::from_positions(&Position::new(0.0, 0.0), &Position::new(1.0, 1.0));
    for p in &pts {
        let before = w;
        w.union_position(p);
        assert!(w.is_overlap_position(p));
        assert!(before.is_enclosed_by(&w));
    }

    let mut empty = Window::new();
    empty.union(3.0, 4.0);
    assert!(empty.is_overlap_position(&Position::new(3.0, 4.0)));
}

#[test]
fn perpendicular_clamps_to_segment_start() {
    let p = basic::get_perpendicular(-5.0, 3.0, 0.0, 0.0, 10.0, 0.0);
    assert_eq!((p.x, p.y), (0.0, 0.0));
}

#[test]
fn signed_distance_is_positive_right_of_travel() {
    // the line runs north, so a point to the east is on the right
    assert!((basic::signed_distance(0.0, 0.0, 0.0, 1.0, 0.0) - 1.0).abs() < 1e-9);
    assert!((basic::signed_distance(0.0, 0.0, 0.0, -1.0, 0.0) + 1.0).abs() < 1e-9);
    // heading east, a point to the north is on the left
    let east = RadianValue::from_degrees(90.0).radians();
    assert!((basic::signed_distance(0.0, 0.0, east, 0.0, 2.0) + 2.0).abs() < 1e-9);
}

#[test]
fn sector_wraps_through_north() {
    let c = Position::new(0.0, 0.0);
    let start = basic::polar(&c, RadianValue::from_degrees(350.0).radians(), 10.0);
    let end = basic::polar(&c, RadianValue::from_degrees(10.0).radians(), 10.0);
    let north = Position::new(0.0, 25.0);
    assert!(basic::is_in_sector(&north, &c, &start, &end, 0.0));
}

#[test]
fn offset_distance_sign_depends_only_on_side() {
    let store = PointStore::new();
    let any = Direction::from(BearingDirection::new(FeatureId(0), RadianValue(1.234)));
    let left = Offset::from(OffsetDistance::new(Distance::from_meters(5.0), true));
    let right = Offset::from(OffsetDistance::new(Distance::from_meters(5.0), false));
    assert_eq!(left.metric(&any, &store), -5.0);
    assert_eq!(right.metric(&any, &store), 5.0);
}

#[test]
fn microns_round_trip() {
    for microns in [-5_000_001i64, -1, 0, 1, 999_999, 123_456_789_012] {
        let v = microns as f64 / 1_000_000.0;
        assert_eq!(to_meters(to_microns(v)), v);
    }
    let mut v = -3.3;
    while v < 3.3 {
        assert!((to_meters(to_microns(v)) - v).abs() < 0.5e-6);
        v += 0.0123457;
    }
}
