//! Shared numeric constants for the engine.

// ── Style ───────────────────────────────────────────────────────

/// Radius of an intersection marker disc, in canvas pixels.
pub const MARKER_RADIUS_PX: f64 = 5.0;

/// Fill color of intersection markers.
pub const MARKER_FILL: &str = "red";

/// Stroke color for segments and marker outlines (the 2D context default).
pub const STROKE_COLOR: &str = "#000000";

/// Stroke width for segments and marker outlines (the 2D context default).
pub const STROKE_WIDTH_PX: f64 = 1.0;

// ── Clear animation ─────────────────────────────────────────────

/// Interval between clear-animation ticks.
pub const CLEAR_TICK_MS: u32 = 100;

/// Total clear-animation duration; the scene is emptied when it elapses.
pub const CLEAR_DURATION_MS: u32 = 3000;

/// Each tick moves both endpoints by `1 / SHRINK_DIVISOR` of the segment's extent per axis.
pub const SHRINK_DIVISOR: f64 = 20.0;

/// A segment whose per-axis shrink step is at most this on both axes counts as collapsed.
pub const COLLAPSE_THRESHOLD_PX: f64 = 1.0;
