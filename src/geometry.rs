//! Points, segments, and finite segment intersection.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

/// A point in canvas space (CSS pixels, origin at the canvas top-left).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A finite straight segment between `(x1, y1)` and `(x2, y2)`.
///
/// Intersection treats it as undirected; the clear animation shrinks each
/// endpoint toward the other, so endpoint order is preserved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Segment {
    #[must_use]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Segment from `start` to `end`.
    #[must_use]
    pub fn between(start: Point, end: Point) -> Self {
        Self { x1: start.x, y1: start.y, x2: end.x, y2: end.y }
    }

    #[must_use]
    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    #[must_use]
    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }
}

/// Intersection point of segments `a` and `b`, if they cross.
///
/// Parallel and collinear pairs (zero denominator) never intersect, even when
/// they overlap. The result is `a`'s start plus `ua` times `a`'s direction,
/// with each coordinate rounded to the nearest integer.
#[must_use]
pub fn intersect(a: &Segment, b: &Segment) -> Option<Point> {
    let denominator = (b.y2 - b.y1) * (a.x2 - a.x1) - (b.x2 - b.x1) * (a.y2 - a.y1);
    if denominator == 0.0 {
        return None;
    }

    let ua = ((b.x2 - b.x1) * (a.y1 - b.y1) - (b.y2 - b.y1) * (a.x1 - b.x1)) / denominator;
    let ub = ((a.x2 - a.x1) * (a.y1 - b.y1) - (a.y2 - a.y1) * (a.x1 - b.x1)) / denominator;
    if !(0.0..=1.0).contains(&ua) || !(0.0..=1.0).contains(&ub) {
        return None;
    }

    Some(Point {
        x: round_half_up(a.x1 + ua * (a.x2 - a.x1)),
        y: round_half_up(a.y1 + ua * (a.y2 - a.y1)),
    })
}

/// Round to the nearest integer, halves toward positive infinity (`-2.5` → `-2`).
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}
