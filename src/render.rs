//! Rendering: repaints the full scene onto a drawing surface.
//!
//! The renderer is stateless. Every call wipes the surface and draws the
//! stored segments in store order followed by the intersection markers.
//!
//! This module is also the only place that touches
//! [`web_sys::CanvasRenderingContext2d`], through [`CanvasSurface`]. All
//! fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::config::Style;
use crate::geometry::{Point, Segment};
use crate::scene::Scene;
use crate::surface::Surface;

/// Clear the surface, then draw every segment and then every marker, in store order.
///
/// # Errors
///
/// Returns the surface's error if any drawing call fails.
pub fn redraw<S: Surface>(scene: &Scene, style: &Style, surface: &mut S) -> Result<(), S::Error> {
    surface.clear()?;
    for segment in scene.segments() {
        draw_segment(segment, style, surface)?;
    }
    for point in scene.points() {
        draw_marker(*point, style, surface)?;
    }
    Ok(())
}

/// Stroke one segment.
///
/// # Errors
///
/// Returns the surface's error if the stroke fails.
pub fn draw_segment<S: Surface>(segment: &Segment, style: &Style, surface: &mut S) -> Result<(), S::Error> {
    surface.stroke_segment(segment, style)
}

/// Draw one intersection marker.
///
/// # Errors
///
/// Returns the surface's error if the fill or outline fails.
pub fn draw_marker<S: Surface>(center: Point, style: &Style, surface: &mut S) -> Result<(), S::Error> {
    surface.fill_marker(center, style)
}

// =============================================================
// Canvas backend
// =============================================================

/// [`Surface`] over a browser 2D context covering a `width` × `height` canvas.
pub struct CanvasSurface<'a> {
    ctx: &'a CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl<'a> CanvasSurface<'a> {
    #[must_use]
    pub fn new(ctx: &'a CanvasRenderingContext2d, width: f64, height: f64) -> Self {
        Self { ctx, width, height }
    }
}

impl Surface for CanvasSurface<'_> {
    type Error = JsValue;

    fn clear(&mut self) -> Result<(), JsValue> {
        self.ctx.clear_rect(0.0, 0.0, self.width, self.height);
        Ok(())
    }

    fn stroke_segment(&mut self, segment: &Segment, style: &Style) -> Result<(), JsValue> {
        apply_stroke_style(self.ctx, style);
        self.ctx.begin_path();
        self.ctx.move_to(segment.x1, segment.y1);
        self.ctx.line_to(segment.x2, segment.y2);
        self.ctx.stroke();
        Ok(())
    }

    fn fill_marker(&mut self, center: Point, style: &Style) -> Result<(), JsValue> {
        apply_stroke_style(self.ctx, style);
        self.ctx.set_fill_style_str(&style.marker_fill);
        self.ctx.begin_path();
        self.ctx
            .arc_with_anticlockwise(center.x, center.y, style.marker_radius, 0.0, 2.0 * PI, true)?;
        self.ctx.fill();
        self.ctx.stroke();
        Ok(())
    }
}

fn apply_stroke_style(ctx: &CanvasRenderingContext2d, style: &Style) {
    ctx.set_stroke_style_str(&style.stroke_color);
    ctx.set_line_width(style.stroke_width);
}
