#![allow(clippy::float_cmp)]

use super::*;

fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
    Segment::new(x1, y1, x2, y2)
}

fn ua_ub(a: &Segment, b: &Segment) -> (f64, f64) {
    let d = (b.y2 - b.y1) * (a.x2 - a.x1) - (b.x2 - b.x1) * (a.y2 - a.y1);
    let ua = ((b.x2 - b.x1) * (a.y1 - b.y1) - (b.y2 - b.y1) * (a.x1 - b.x1)) / d;
    let ub = ((a.x2 - a.x1) * (a.y1 - b.y1) - (a.y2 - a.y1) * (a.x1 - b.x1)) / d;
    (ua, ub)
}

// --- Point / Segment ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn segment_between_keeps_direction() {
    let s = Segment::between(Point::new(1.0, 2.0), Point::new(3.0, 4.0));
    assert_eq!(s, seg(1.0, 2.0, 3.0, 4.0));
    assert_eq!(s.start(), Point::new(1.0, 2.0));
    assert_eq!(s.end(), Point::new(3.0, 4.0));
}

#[test]
fn segment_serializes_with_endpoint_names() {
    let json = serde_json::to_value(seg(0.0, 1.0, 2.0, 3.0)).unwrap();
    assert_eq!(json, serde_json::json!({ "x1": 0.0, "y1": 1.0, "x2": 2.0, "y2": 3.0 }));
}

// --- intersect: hits ---

#[test]
fn crossing_diagonals_meet_in_the_middle() {
    let hit = intersect(&seg(0.0, 0.0, 10.0, 10.0), &seg(0.0, 10.0, 10.0, 0.0));
    assert_eq!(hit, Some(Point::new(5.0, 5.0)));
}

#[test]
fn plus_sign_crossing() {
    let hit = intersect(&seg(0.0, 5.0, 10.0, 5.0), &seg(3.0, 0.0, 3.0, 10.0));
    assert_eq!(hit, Some(Point::new(3.0, 5.0)));
}

#[test]
fn touching_at_endpoint_counts() {
    // ua = 1 and ub = 0 are inside the closed interval.
    let hit = intersect(&seg(0.0, 0.0, 10.0, 0.0), &seg(10.0, 0.0, 10.0, 10.0));
    assert_eq!(hit, Some(Point::new(10.0, 0.0)));
}

#[test]
fn t_junction_counts() {
    let hit = intersect(&seg(0.0, 0.0, 10.0, 0.0), &seg(4.0, 0.0, 4.0, 8.0));
    assert_eq!(hit, Some(Point::new(4.0, 0.0)));
}

#[test]
fn result_is_rounded_to_integers() {
    // Lines cross at (10/3, 10/3).
    let hit = intersect(&seg(0.0, 0.0, 10.0, 10.0), &seg(0.0, 5.0, 10.0, 0.0)).unwrap();
    assert_eq!(hit, Point::new(3.0, 3.0));
    assert_eq!(hit.x.fract(), 0.0);
    assert_eq!(hit.y.fract(), 0.0);
}

#[test]
fn halves_round_toward_positive_infinity() {
    // Crossing at (2.5, -2.5).
    let hit = intersect(&seg(0.0, 0.0, 5.0, -5.0), &seg(0.0, -5.0, 5.0, 0.0)).unwrap();
    assert_eq!(hit, Point::new(3.0, -2.0));
}

#[test]
fn fractional_endpoints_still_intersect() {
    let hit = intersect(&seg(0.5, 0.5, 9.5, 9.5), &seg(0.5, 9.5, 9.5, 0.5));
    assert_eq!(hit, Some(Point::new(5.0, 5.0)));
}

// --- intersect: misses ---

#[test]
fn parallel_horizontal_segments_never_intersect() {
    let a = seg(0.0, 0.0, 10.0, 0.0);
    let b = seg(0.0, 5.0, 10.0, 5.0);
    assert_eq!(intersect(&a, &b), None);
    assert_eq!(intersect(&b, &a), None);
}

#[test]
fn collinear_overlap_is_not_reported() {
    let a = seg(0.0, 0.0, 10.0, 10.0);
    let b = seg(5.0, 5.0, 15.0, 15.0);
    assert_eq!(intersect(&a, &b), None);
}

#[test]
fn identical_segments_are_not_reported() {
    let a = seg(1.0, 2.0, 30.0, 40.0);
    assert_eq!(intersect(&a, &a), None);
}

#[test]
fn zero_length_segment_never_intersects() {
    let dot = seg(5.0, 5.0, 5.0, 5.0);
    let line = seg(0.0, 0.0, 10.0, 10.0);
    assert_eq!(intersect(&dot, &line), None);
    assert_eq!(intersect(&line, &dot), None);
}

#[test]
fn lines_crossing_beyond_a_segment_end_miss() {
    // The infinite lines meet at (15, 15), past the end of `a`.
    let a = seg(0.0, 0.0, 10.0, 10.0);
    let b = seg(15.0, 0.0, 15.0, 30.0);
    assert_eq!(intersect(&a, &b), None);
}

#[test]
fn lines_crossing_before_b_starts_miss() {
    let a = seg(0.0, 5.0, 20.0, 5.0);
    let b = seg(10.0, 6.0, 10.0, 20.0);
    assert_eq!(intersect(&a, &b), None);
}

// --- properties ---

#[test]
fn hit_iff_parameters_in_unit_interval() {
    let a = seg(0.0, 0.0, 40.0, 10.0);
    let others = [
        seg(10.0, -10.0, 10.0, 30.0),
        seg(50.0, -10.0, 50.0, 30.0),
        seg(-5.0, 20.0, 30.0, -5.0),
        seg(20.0, 6.0, 20.0, 30.0),
        seg(35.0, 0.0, 45.0, 20.0),
    ];
    for b in &others {
        let (ua, ub) = ua_ub(&a, b);
        let inside = (0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub);
        assert_eq!(intersect(&a, b).is_some(), inside, "a={a:?} b={b:?} ua={ua} ub={ub}");
    }
}

#[test]
fn swapping_arguments_gives_the_same_point() {
    let pairs = [
        (seg(0.0, 0.0, 10.0, 10.0), seg(0.0, 10.0, 10.0, 0.0)),
        (seg(3.0, 7.0, 91.0, 44.0), seg(12.0, 80.0, 70.0, 2.0)),
        (seg(100.0, 0.0, 0.0, 100.0), seg(0.0, 20.0, 100.0, 30.0)),
    ];
    for (a, b) in &pairs {
        let ab = intersect(a, b).unwrap();
        let ba = intersect(b, a).unwrap();
        assert!((ab.x - ba.x).abs() <= 1.0, "{ab:?} vs {ba:?}");
        assert!((ab.y - ba.y).abs() <= 1.0, "{ab:?} vs {ba:?}");
    }
}

#[test]
fn round_half_up_matches_browser_rounding() {
    assert_eq!(round_half_up(2.5), 3.0);
    assert_eq!(round_half_up(-2.5), -2.0);
    assert_eq!(round_half_up(2.49), 2.0);
    assert_eq!(round_half_up(-0.2), 0.0);
}
