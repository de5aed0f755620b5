//! Scene store: the segments on the canvas and their intersection markers.
//!
//! Segments are kept in insertion order, which is also draw order, and are
//! never reordered. Markers are kept in insertion order too, but that order
//! carries no meaning and duplicates are allowed. The interaction controller
//! appends to both on commit; the clear animation replaces segments in place
//! and flushes markers once per tick. The renderer reads both via
//! [`Scene::segments`] and [`Scene::points`].

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use crate::geometry::{Point, Segment, intersect};

/// In-memory store of segments and intersection points.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    segments: Vec<Segment>,
    points: Vec<Point>,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a segment to the end of the draw order.
    pub fn add_segment(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Append an intersection marker.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Replace the segment at `index` in place. Returns false if there is no such segment.
    pub fn replace_segment_at(&mut self, index: usize, segment: Segment) -> bool {
        let Some(slot) = self.segments.get_mut(index) else {
            return false;
        };
        *slot = segment;
        true
    }

    /// Remove every segment and every point.
    pub fn clear_all(&mut self) {
        self.segments.clear();
        self.points.clear();
    }

    /// Remove every point, keeping segments.
    pub fn clear_points(&mut self) {
        self.points.clear();
    }

    /// Intersections of `candidate` with each stored segment, in store order.
    #[must_use]
    pub fn intersections_with(&self, candidate: &Segment) -> Vec<Point> {
        self.segments
            .iter()
            .filter_map(|stored| intersect(stored, candidate))
            .collect()
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the scene holds no segments and no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty() && self.points.is_empty()
    }
}
