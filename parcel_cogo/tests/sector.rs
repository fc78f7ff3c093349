use parcel_cogo::geometry::{basic, Position};

fn at(centre: &Position, degrees: f64, dist: f64) -> Position {
    basic::polar(centre, degrees.to_radians(), dist)
}

#[test]
fn arc_starting_due_north() {
    let c = Position::new(500.0, 500.0);
    let start = Position::new(500.0, 510.0);
    let end = at(&c, 90.0, 10.0);

    assert!(basic::is_in_sector(&Position::new(500.0, 530.0), &c, &start, &end, 0.0));
    assert!(basic::is_in_sector(&at(&c, 45.0, 3.0), &c, &start, &end, 0.0));
    assert!(!basic::is_in_sector(&at(&c, 180.0, 10.0), &c, &start, &end, 0.0));
    assert!(!basic::is_in_sector(&at(&c, 359.9, 10.0), &c, &start, &end, 0.0));
}

#[test]
fn arc_ending_due_north() {
    let c = Position::new(0.0, 0.0);
    let start = Position::new(-10.0, 0.0);
    let end = Position::new(0.0, 10.0);

    assert!(basic::is_in_sector(&Position::new(0.0, 25.0), &c, &start, &end, 0.0));
    assert!(basic::is_in_sector(&at(&c, 300.0, 1.0), &c, &start, &end, 0.0));
    assert!(!basic::is_in_sector(&at(&c, 0.1, 10.0), &c, &start, &end, 0.0));
    assert!(!basic::is_in_sector(&at(&c, 269.9, 10.0), &c, &start, &end, 0.0));
}

#[test]
fn tolerance_accepts_positions_just_outside_either_end() {
    let c = Position::new(0.0, 0.0);
    let start = Position::new(0.0, 10.0);
    let end = at(&c, 90.0, 10.0);
    let tol = 0.2f64.to_radians();

    let before_start = at(&c, 359.9, 10.0);
    assert!(!basic::is_in_sector(&before_start, &c, &start, &end, 0.0));
    assert!(basic::is_in_sector(&before_start, &c, &start, &end, tol));

    let past_end = at(&c, 90.1, 10.0);
    assert!(!basic::is_in_sector(&past_end, &c, &start, &end, 0.0));
    assert!(basic::is_in_sector(&past_end, &c, &start, &end, tol));

    let far_outside = at(&c, 180.0, 10.0);
    assert!(!basic::is_in_sector(&far_outside, &c, &start, &end, tol));
}

#[test]
fn arc_wrapping_through_north() {
    let c = Position::new(100.0, -40.0);
    let start = at(&c, 350.0, 8.0);
    let end = at(&c, 10.0, 8.0);

    for deg in [350.0, 355.0, 0.0, 5.0, 10.0] {
        let p = at(&c, deg, 2.0);
        assert!(basic::is_in_sector(&p, &c, &start, &end, 1e-9), "{deg} should be inside");
    }
    for deg in [11.0, 90.0, 180.0, 349.0] {
        let p = at(&c, deg, 2.0);
        assert!(!basic::is_in_sector(&p, &c, &start, &end, 0.0), "{deg} should be outside");
    }
}
