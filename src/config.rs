//! Engine configuration: drawing style and clear-animation timing.
//!
//! Every field has a default taken from [`crate::consts`], so an empty JSON
//! object (or no config at all) yields the stock look: black one-pixel
//! strokes, red five-pixel markers, and a three-second clear animation ticking
//! every 100 ms. Hosts can override any subset:
//!
//! ```json
//! { "style": { "marker_radius": 8.0 }, "clear": { "duration_ms": 1500 } }
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    CLEAR_DURATION_MS, CLEAR_TICK_MS, COLLAPSE_THRESHOLD_PX, MARKER_FILL, MARKER_RADIUS_PX, SHRINK_DIVISOR,
    STROKE_COLOR, STROKE_WIDTH_PX,
};
use crate::error::Error;

/// Top-level engine configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Colors and sizes used for segments and markers.
    pub style: Style,
    /// Timing and shrink rate of the clear animation.
    pub clear: ClearConfig,
    /// Preview the pending segment on every move while armed, not only while
    /// the primary button is held.
    pub preview_on_hover: bool,
}

/// Fixed visual style for segments and intersection markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Style {
    /// CSS color for segment strokes and marker outlines.
    pub stroke_color: String,
    /// Stroke width in canvas pixels.
    pub stroke_width: f64,
    /// Marker disc radius in canvas pixels.
    pub marker_radius: f64,
    /// CSS color for marker fills.
    pub marker_fill: String,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            stroke_color: STROKE_COLOR.to_owned(),
            stroke_width: STROKE_WIDTH_PX,
            marker_radius: MARKER_RADIUS_PX,
            marker_fill: MARKER_FILL.to_owned(),
        }
    }
}

/// Clear-animation timing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClearConfig {
    /// Milliseconds between shrink ticks.
    pub tick_ms: u32,
    /// Milliseconds until the scene is force-emptied and the animation stops.
    pub duration_ms: u32,
    /// Per-tick shrink step is the segment's per-axis extent divided by this.
    pub shrink_divisor: f64,
    /// A tick stops at the first segment whose steps are at most this on both axes.
    pub collapse_threshold: f64,
}

impl Default for ClearConfig {
    fn default() -> Self {
        Self {
            tick_ms: CLEAR_TICK_MS,
            duration_ms: CLEAR_DURATION_MS,
            shrink_divisor: SHRINK_DIVISOR,
            collapse_threshold: COLLAPSE_THRESHOLD_PX,
        }
    }
}

impl Config {
    /// Parse a JSON config and validate it. Omitted fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParse`] for malformed JSON or unknown fields, and
    /// [`Error::InvalidConfig`] when a value is out of range.
    pub fn from_json(raw: &str) -> Result<Self, Error> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that sizes are positive and the clear timing is usable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<(), Error> {
        if !is_positive(self.style.stroke_width) {
            return Err(invalid("style.stroke_width must be positive"));
        }
        if !is_positive(self.style.marker_radius) {
            return Err(invalid("style.marker_radius must be positive"));
        }
        if self.clear.tick_ms == 0 {
            return Err(invalid("clear.tick_ms must be non-zero"));
        }
        if self.clear.duration_ms < self.clear.tick_ms {
            return Err(invalid("clear.duration_ms must be at least one tick"));
        }
        if !is_positive(self.clear.shrink_divisor) {
            return Err(invalid("clear.shrink_divisor must be positive"));
        }
        if self.clear.collapse_threshold.is_nan() || self.clear.collapse_threshold < 0.0 {
            return Err(invalid("clear.collapse_threshold must not be negative"));
        }
        Ok(())
    }
}

/// False for zero, negatives, and NaN.
fn is_positive(v: f64) -> bool {
    v > 0.0
}

fn invalid(msg: &str) -> Error {
    Error::InvalidConfig(msg.to_owned())
}
