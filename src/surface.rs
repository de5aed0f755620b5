//! Drawing surface abstraction.
//!
//! The engine only ever needs three primitives: wipe the surface, stroke a
//! straight segment, and draw a filled, outlined marker disc. [`Surface`]
//! captures exactly those so that the browser canvas
//! ([`crate::render::CanvasSurface`]) and the headless [`RecordingSurface`]
//! are interchangeable. Each implementation picks its own error type; the
//! renderer, the interaction handlers, and the clear animation all propagate
//! it with `?`.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use std::convert::Infallible;

use crate::config::Style;
use crate::geometry::{Point, Segment};

/// An immediate-mode 2D drawing target.
pub trait Surface {
    /// Error produced by a failed drawing call.
    type Error;

    /// Clear the entire surface.
    ///
    /// # Errors
    ///
    /// Returns the surface's error if the backend rejects the call.
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Stroke a straight segment.
    ///
    /// # Errors
    ///
    /// Returns the surface's error if the backend rejects the call.
    fn stroke_segment(&mut self, segment: &Segment, style: &Style) -> Result<(), Self::Error>;

    /// Fill and outline a marker disc centered at `center`.
    ///
    /// # Errors
    ///
    /// Returns the surface's error if the backend rejects the call.
    fn fill_marker(&mut self, center: Point, style: &Style) -> Result<(), Self::Error>;
}

/// One primitive issued to a [`RecordingSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCall {
    Clear,
    Segment(Segment),
    Marker { center: Point, radius: f64 },
}

/// A surface that records every draw call instead of producing pixels.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call recorded so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Calls issued after the most recent clear (the visible frame).
    #[must_use]
    pub fn frame(&self) -> &[DrawCall] {
        let start = self
            .calls
            .iter()
            .rposition(|c| matches!(c, DrawCall::Clear))
            .map_or(0, |i| i + 1);
        &self.calls[start..]
    }

    /// Segments stroked in the visible frame.
    #[must_use]
    pub fn frame_segments(&self) -> Vec<Segment> {
        self.frame()
            .iter()
            .filter_map(|c| match c {
                DrawCall::Segment(s) => Some(*s),
                _ => None,
            })
            .collect()
    }

    /// Marker centers drawn in the visible frame.
    #[must_use]
    pub fn frame_markers(&self) -> Vec<Point> {
        self.frame()
            .iter()
            .filter_map(|c| match c {
                DrawCall::Marker { center, .. } => Some(*center),
                _ => None,
            })
            .collect()
    }

    /// Drain and return the recorded calls.
    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }
}

impl Surface for RecordingSurface {
    type Error = Infallible;

    fn clear(&mut self) -> Result<(), Infallible> {
        self.calls.push(DrawCall::Clear);
        Ok(())
    }

    fn stroke_segment(&mut self, segment: &Segment, _style: &Style) -> Result<(), Infallible> {
        self.calls.push(DrawCall::Segment(*segment));
        Ok(())
    }

    fn fill_marker(&mut self, center: Point, style: &Style) -> Result<(), Infallible> {
        self.calls.push(DrawCall::Marker { center, radius: style.marker_radius });
        Ok(())
    }
}
