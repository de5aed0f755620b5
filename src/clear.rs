//! Clear animation: shrink every segment toward its midpoint, then empty the scene.
//!
//! A run has two clocks. A repeating tick (every [`ClearConfig::tick_ms`])
//! shrinks the segments and repaints. A deadline (after
//! [`ClearConfig::duration_ms`]) empties the scene and ends the run with one
//! last repaint, whether or not the segments have collapsed. Both are
//! modeled by one [`ClearAnimator`] with an explicit phase, so a second start
//! request during a run is refused instead of stacking timers.
//!
//! [`ClearAnimator::advance`] drives [`ClearAnimator::tick`] and
//! [`ClearAnimator::finish`] from a caller-supplied clock. The browser engine
//! advances it by one tick interval per firing of its repeating timer, so a
//! real run and a simulated one execute the same ticks.
//!
//! Tick semantics worth knowing:
//!
//! - Each axis moves by `extent / shrink_divisor` per endpoint per tick.
//! - The first segment whose steps are both at most `collapse_threshold`
//!   stops the whole tick. Later segments are neither shrunk nor drawn for
//!   that tick.
//! - Markers are recomputed per tick from the shrunk segments, drawn once,
//!   and flushed; they never carry over to the next tick.

#[cfg(test)]
#[path = "clear_test.rs"]
mod clear_test;

use crate::config::{ClearConfig, Style};
use crate::geometry::{Segment, intersect};
use crate::render::{draw_marker, draw_segment, redraw};
use crate::scene::Scene;
use crate::surface::Surface;

/// Where the animator is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClearPhase {
    /// No run in progress.
    #[default]
    Idle,
    /// A run is in progress.
    Running {
        /// Time elapsed since start, as reported to [`ClearAnimator::advance`].
        elapsed_ms: u32,
        /// Ticks executed so far.
        ticks: u32,
    },
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// Segments shrunk and redrawn.
    pub shrunk: usize,
    /// Index of the collapsed segment that stopped the tick, if any.
    pub collapsed_at: Option<usize>,
    /// Markers drawn (and then flushed) at the end of the tick.
    pub markers: usize,
}

/// Result of [`ClearAnimator::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearProgress {
    /// No run was in progress; nothing happened.
    Idle,
    /// The run continues.
    Running,
    /// The deadline passed during this call; the scene is empty.
    Finished,
}

/// Owns the phase of the clear animation.
#[derive(Debug, Clone)]
pub struct ClearAnimator {
    config: ClearConfig,
    phase: ClearPhase,
}

impl ClearAnimator {
    #[must_use]
    pub fn new(config: ClearConfig) -> Self {
        Self { config, phase: ClearPhase::Idle }
    }

    #[must_use]
    pub fn config(&self) -> &ClearConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> ClearPhase {
        self.phase
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.phase, ClearPhase::Running { .. })
    }

    /// Begin a run. Returns false, changing nothing, if one is already in progress.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            tracing::debug!("clear already running; ignoring start");
            return false;
        }
        tracing::info!(
            tick_ms = self.config.tick_ms,
            duration_ms = self.config.duration_ms,
            "clear animation started"
        );
        self.phase = ClearPhase::Running { elapsed_ms: 0, ticks: 0 };
        true
    }

    /// Run one shrink tick if a run is in progress.
    ///
    /// # Errors
    ///
    /// Returns the surface's error if drawing fails. The scene may then be
    /// partially shrunk for this tick.
    pub fn tick<S: Surface>(&mut self, scene: &mut Scene, style: &Style, surface: &mut S) -> Result<TickReport, S::Error> {
        let ClearPhase::Running { elapsed_ms, ticks } = self.phase else {
            return Ok(TickReport::default());
        };
        self.phase = ClearPhase::Running { elapsed_ms, ticks: ticks.saturating_add(1) };
        shrink_tick(scene, &self.config, style, surface)
    }

    /// End the run: empty the scene and repaint. Returns whether a run was in progress.
    ///
    /// The scene is emptied even when no run is active.
    ///
    /// # Errors
    ///
    /// Returns the surface's error if the final repaint fails. The scene is
    /// already empty and the animator idle by then.
    pub fn finish<S: Surface>(&mut self, scene: &mut Scene, style: &Style, surface: &mut S) -> Result<bool, S::Error> {
        let was_running = self.is_running();
        if let ClearPhase::Running { ticks, .. } = self.phase {
            tracing::info!(ticks, segments = scene.segment_count(), "clear animation finished");
        }
        self.phase = ClearPhase::Idle;
        scene.clear_all();
        redraw(scene, style, surface)?;
        Ok(was_running)
    }

    /// Advance the run's clock by `dt_ms`.
    ///
    /// Fires a tick at every multiple of the tick interval passed, strictly
    /// before the deadline; a tick due exactly at the deadline is superseded
    /// by [`ClearAnimator::finish`].
    ///
    /// # Errors
    ///
    /// Returns the surface's error if a tick or the final repaint fails.
    pub fn advance<S: Surface>(
        &mut self,
        dt_ms: u32,
        scene: &mut Scene,
        style: &Style,
        surface: &mut S,
    ) -> Result<ClearProgress, S::Error> {
        let ClearPhase::Running { elapsed_ms, .. } = self.phase else {
            return Ok(ClearProgress::Idle);
        };
        let tick_ms = self.config.tick_ms.max(1);
        let deadline = self.config.duration_ms;
        let target = elapsed_ms.saturating_add(dt_ms);

        let mut next_tick = (elapsed_ms / tick_ms + 1).saturating_mul(tick_ms);
        while next_tick <= target && next_tick < deadline {
            self.tick(scene, style, surface)?;
            next_tick = next_tick.saturating_add(tick_ms);
        }

        if target >= deadline {
            self.finish(scene, style, surface)?;
            return Ok(ClearProgress::Finished);
        }
        if let ClearPhase::Running { ticks, .. } = self.phase {
            self.phase = ClearPhase::Running { elapsed_ms: target, ticks };
        }
        Ok(ClearProgress::Running)
    }
}

/// One shrink pass over the scene.
///
/// Clears the surface, then for each segment in store order: shrink it, draw
/// it, store it, and append its intersections with every stored segment
/// (itself included). Stops at the first collapsed segment. Finally draws the
/// accumulated markers and flushes them from the scene.
///
/// # Errors
///
/// Returns the surface's error if any drawing call fails.
pub fn shrink_tick<S: Surface>(
    scene: &mut Scene,
    config: &ClearConfig,
    style: &Style,
    surface: &mut S,
) -> Result<TickReport, S::Error> {
    surface.clear()?;
    let mut report = TickReport::default();

    for i in 0..scene.segment_count() {
        let Some(&current) = scene.segments().get(i) else {
            break;
        };
        let Some(shrunk) = shrink_segment(&current, config) else {
            tracing::debug!(index = i, "collapsed segment stops clear tick");
            report.collapsed_at = Some(i);
            break;
        };

        draw_segment(&shrunk, style, surface)?;
        scene.replace_segment_at(i, shrunk);

        let hits: Vec<_> = scene
            .segments()
            .iter()
            .filter_map(|other| intersect(&shrunk, other))
            .collect();
        for hit in hits {
            scene.add_point(hit);
        }
        report.shrunk += 1;
    }

    for point in scene.points() {
        draw_marker(*point, style, surface)?;
    }
    report.markers = scene.point_count();
    scene.clear_points();
    Ok(report)
}

/// Move each endpoint of `segment` one step toward the other.
///
/// Returns `None` when both per-axis steps are at most the collapse threshold.
#[must_use]
pub fn shrink_segment(segment: &Segment, config: &ClearConfig) -> Option<Segment> {
    let dx = (segment.x1 - segment.x2).abs() / config.shrink_divisor;
    let dy = (segment.y1 - segment.y2).abs() / config.shrink_divisor;
    if dx <= config.collapse_threshold && dy <= config.collapse_threshold {
        return None;
    }

    Some(Segment {
        x1: step_toward(segment.x1, segment.x2, dx),
        y1: step_toward(segment.y1, segment.y2, dy),
        x2: step_toward(segment.x2, segment.x1, dx),
        y2: step_toward(segment.y2, segment.y1, dy),
    })
}

fn step_toward(from: f64, other: f64, step: f64) -> f64 {
    if from > other { from - step } else { from + step }
}
