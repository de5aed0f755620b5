use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::clear::{ClearAnimator, ClearProgress, TickReport};
use crate::config::Config;
use crate::error::Error;
use crate::geometry::{Point, Segment};
use crate::input::{Button, HeldButtons, InputState};
use crate::render::{self, CanvasSurface};
use crate::scene::Scene;
use crate::surface::Surface;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// What an input handler or clear operation did, for the host to observe.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The first endpoint was captured.
    Armed { start: Point },
    /// An intersection marker was stored.
    PointAdded(Point),
    /// A segment was stored.
    SegmentAdded(Segment),
    /// A transient preview was drawn; nothing was stored.
    Previewed { segment: Segment, hits: Vec<Point> },
    ClearStarted,
    /// A clear was requested while one was already running.
    ClearIgnored,
    ClearFinished,
}

/// Owned copy of what the engine currently shows, for host inspection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    pub segments: Vec<Segment>,
    pub points: Vec<Point>,
    /// A segment start is captured and waiting for its second press.
    pub armed: bool,
    pub clearing: bool,
}

/// Core engine state: everything that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
/// Every handler that changes what is visible draws to the surface it is given.
pub struct EngineCore {
    pub scene: Scene,
    pub input: InputState,
    pub clear: ClearAnimator,
    pub config: Config,
    /// Client-space position of the surface's top-left corner, fixed for the session.
    pub offset: Point,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self {
            scene: Scene::new(),
            input: InputState::Idle,
            clear: ClearAnimator::new(config.clear),
            config,
            offset: Point::new(0.0, 0.0),
        }
    }

    /// Set the fixed client-to-surface offset.
    #[must_use]
    pub fn with_offset(mut self, offset: Point) -> Self {
        self.offset = offset;
        self
    }

    /// Translate client coordinates into surface coordinates.
    #[must_use]
    pub fn to_local(&self, client: Point) -> Point {
        Point::new(client.x - self.offset.x, client.y - self.offset.y)
    }

    // --- Input events ---

    /// Handle a button press at client position `client`.
    ///
    /// Idle: a primary press arms with the start point; other buttons are ignored.
    /// Armed: any press commits the pending segment.
    ///
    /// # Errors
    ///
    /// Returns the surface's error if the redraw after a commit fails.
    pub fn on_pointer_down<S: Surface>(
        &mut self,
        client: Point,
        button: Button,
        surface: &mut S,
    ) -> Result<Vec<Action>, S::Error> {
        let local = self.to_local(client);
        match self.input {
            InputState::Idle => {
                if button != Button::Primary {
                    return Ok(Vec::new());
                }
                tracing::debug!(x = local.x, y = local.y, "segment start captured");
                self.input = InputState::Armed { start: local };
                Ok(vec![Action::Armed { start: local }])
            }
            InputState::Armed { start } => self.commit(start, local, button, surface),
        }
    }

    /// Handle pointer movement. While armed, draws the pending segment and the
    /// markers it would create on top of a full redraw. Nothing is stored.
    ///
    /// The preview needs the primary button held unless
    /// [`Config::preview_on_hover`] is set.
    ///
    /// # Errors
    ///
    /// Returns the surface's error if drawing the preview fails.
    pub fn on_pointer_move<S: Surface>(
        &mut self,
        client: Point,
        held: HeldButtons,
        surface: &mut S,
    ) -> Result<Vec<Action>, S::Error> {
        let InputState::Armed { start } = self.input else {
            return Ok(Vec::new());
        };
        if !held.primary && !self.config.preview_on_hover {
            return Ok(Vec::new());
        }

        let segment = Segment::between(start, self.to_local(client));
        let style = &self.config.style;
        render::redraw(&self.scene, style, surface)?;
        render::draw_segment(&segment, style, surface)?;
        let hits = self.scene.intersections_with(&segment);
        for hit in &hits {
            render::draw_marker(*hit, style, surface)?;
        }
        Ok(vec![Action::Previewed { segment, hits }])
    }

    /// Handle the pointer leaving the surface. While armed, this commits the
    /// pending segment at the leave position as a primary press would.
    ///
    /// # Errors
    ///
    /// Returns the surface's error if the redraw after the commit fails.
    pub fn on_pointer_leave<S: Surface>(&mut self, client: Point, surface: &mut S) -> Result<Vec<Action>, S::Error> {
        let InputState::Armed { start } = self.input else {
            return Ok(Vec::new());
        };
        let local = self.to_local(client);
        self.commit(start, local, Button::Primary, surface)
    }

    fn commit<S: Surface>(
        &mut self,
        start: Point,
        end: Point,
        button: Button,
        surface: &mut S,
    ) -> Result<Vec<Action>, S::Error> {
        let candidate = Segment::between(start, end);
        let hits = self.scene.intersections_with(&candidate);
        let mut actions = Vec::with_capacity(hits.len() + 1);

        if button.marks_points() {
            for hit in &hits {
                self.scene.add_point(*hit);
                actions.push(Action::PointAdded(*hit));
            }
        }
        if button.stores_segment() {
            self.scene.add_segment(candidate);
            actions.push(Action::SegmentAdded(candidate));
        }
        self.input = InputState::Idle;

        tracing::debug!(
            ?button,
            hits = hits.len(),
            segments = self.scene.segment_count(),
            points = self.scene.point_count(),
            "segment committed"
        );
        render::redraw(&self.scene, &self.config.style, surface)?;
        Ok(actions)
    }

    // --- Clear animation ---

    /// Request the clear animation. Ignored while a run is in progress.
    pub fn start_clear(&mut self) -> Vec<Action> {
        if self.clear.start() {
            vec![Action::ClearStarted]
        } else {
            vec![Action::ClearIgnored]
        }
    }

    /// Run one clear tick.
    ///
    /// # Errors
    ///
    /// Returns the surface's error if drawing fails.
    pub fn clear_tick<S: Surface>(&mut self, surface: &mut S) -> Result<TickReport, S::Error> {
        self.clear.tick(&mut self.scene, &self.config.style, surface)
    }

    /// End the clear animation: empty the scene and repaint.
    ///
    /// # Errors
    ///
    /// Returns the surface's error if the final repaint fails.
    pub fn finish_clear<S: Surface>(&mut self, surface: &mut S) -> Result<Vec<Action>, S::Error> {
        if self.clear.finish(&mut self.scene, &self.config.style, surface)? {
            Ok(vec![Action::ClearFinished])
        } else {
            Ok(Vec::new())
        }
    }

    /// Drive the clear animation from a caller-supplied clock.
    ///
    /// # Errors
    ///
    /// Returns the surface's error if a tick or the final repaint fails.
    pub fn advance_clear<S: Surface>(&mut self, dt_ms: u32, surface: &mut S) -> Result<Vec<Action>, S::Error> {
        match self.clear.advance(dt_ms, &mut self.scene, &self.config.style, surface)? {
            ClearProgress::Finished => Ok(vec![Action::ClearFinished]),
            ClearProgress::Idle | ClearProgress::Running => Ok(Vec::new()),
        }
    }

    /// One firing of the repeating clear timer: advance the clock by one tick interval.
    ///
    /// Ticks due at or after the deadline never run; the firing that reaches
    /// the deadline finishes the run instead.
    ///
    /// # Errors
    ///
    /// Returns the surface's error if the tick or the final repaint fails.
    pub fn on_clear_interval<S: Surface>(&mut self, surface: &mut S) -> Result<Vec<Action>, S::Error> {
        let tick_ms = self.clear.config().tick_ms;
        self.advance_clear(tick_ms, surface)
    }

    /// The clear deadline elapsed. Finishes the run unless the interval already has.
    ///
    /// # Errors
    ///
    /// Returns the surface's error if the final repaint fails.
    pub fn on_clear_deadline<S: Surface>(&mut self, surface: &mut S) -> Result<Vec<Action>, S::Error> {
        if !self.is_clearing() {
            return Ok(Vec::new());
        }
        self.finish_clear(surface)
    }

    #[must_use]
    pub fn is_clearing(&self) -> bool {
        self.clear.is_running()
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            segments: self.scene.segments().to_vec(),
            points: self.scene.points().to_vec(),
            armed: self.input.is_armed(),
            clearing: self.is_clearing(),
        }
    }

    // --- Render ---

    /// Repaint the whole scene.
    ///
    /// # Errors
    ///
    /// Returns the surface's error if drawing fails.
    pub fn redraw<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        render::redraw(&self.scene, &self.config.style, surface)
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
///
/// The core is shared with the clear animation's timer callbacks; each
/// callback and each handler borrows it only for its own duration. No borrow
/// escapes the engine: hosts inspect state through [`Engine::snapshot`].
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    core: Rc<RefCell<EngineCore>>,
    clear_tick: Rc<RefCell<Option<Interval>>>,
}

impl Engine {
    /// Create an engine bound to `canvas` with the default config.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Canvas`] if the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, Error> {
        Self::with_config(canvas, Config::default())
    }

    /// Create an engine bound to `canvas`. The canvas offset is read once here.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for an out-of-range config and
    /// [`Error::Canvas`] if the canvas has no 2D context.
    pub fn with_config(canvas: HtmlCanvasElement, config: Config) -> Result<Self, Error> {
        config.validate()?;
        let ctx = canvas
            .get_context("2d")
            .map_err(js_error)?
            .ok_or_else(|| Error::Canvas("2d context unavailable".to_owned()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_: js_sys::Object| Error::Canvas("context is not a CanvasRenderingContext2d".to_owned()))?;
        let offset = Point::new(f64::from(canvas.offset_left()), f64::from(canvas.offset_top()));
        tracing::info!(x = offset.x, y = offset.y, "engine attached to canvas");

        let core = EngineCore::with_config(config).with_offset(offset);
        Ok(Self {
            canvas,
            ctx,
            core: Rc::new(RefCell::new(core)),
            clear_tick: Rc::new(RefCell::new(None)),
        })
    }

    fn surface_size(&self) -> (f64, f64) {
        (f64::from(self.canvas.width()), f64::from(self.canvas.height()))
    }

    // --- Input events ---

    /// Forward a DOM `mousedown` (`clientX`, `clientY`, `button`).
    ///
    /// # Errors
    ///
    /// Returns the canvas error if redrawing fails.
    pub fn on_pointer_down(&mut self, client_x: f64, client_y: f64, button: i16) -> Result<Vec<Action>, JsValue> {
        let (w, h) = self.surface_size();
        let mut surface = CanvasSurface::new(&self.ctx, w, h);
        self.core
            .borrow_mut()
            .on_pointer_down(Point::new(client_x, client_y), Button::from_dom(button), &mut surface)
    }

    /// Forward a DOM `mousemove` (`clientX`, `clientY`, `buttons`).
    ///
    /// # Errors
    ///
    /// Returns the canvas error if drawing the preview fails.
    pub fn on_pointer_move(&mut self, client_x: f64, client_y: f64, buttons: u16) -> Result<Vec<Action>, JsValue> {
        let (w, h) = self.surface_size();
        let mut surface = CanvasSurface::new(&self.ctx, w, h);
        self.core.borrow_mut().on_pointer_move(
            Point::new(client_x, client_y),
            HeldButtons::from_dom_mask(buttons),
            &mut surface,
        )
    }

    /// Forward a DOM `mouseout` (`clientX`, `clientY`).
    ///
    /// # Errors
    ///
    /// Returns the canvas error if redrawing fails.
    pub fn on_pointer_leave(&mut self, client_x: f64, client_y: f64) -> Result<Vec<Action>, JsValue> {
        let (w, h) = self.surface_size();
        let mut surface = CanvasSurface::new(&self.ctx, w, h);
        self.core
            .borrow_mut()
            .on_pointer_leave(Point::new(client_x, client_y), &mut surface)
    }

    // --- Clear animation ---

    /// Start the clear animation on browser timers. Ignored while one is running.
    pub fn start_clear(&mut self) -> Vec<Action> {
        let actions = self.core.borrow_mut().start_clear();
        if actions != [Action::ClearStarted] {
            return actions;
        }

        let (tick_ms, duration_ms) = {
            let core = self.core.borrow();
            (core.config.clear.tick_ms, core.config.clear.duration_ms)
        };
        let (w, h) = self.surface_size();

        let core = Rc::clone(&self.core);
        let ctx = self.ctx.clone();
        let tick = Interval::new(tick_ms, move || {
            let mut surface = CanvasSurface::new(&ctx, w, h);
            if let Err(err) = core.borrow_mut().on_clear_interval(&mut surface) {
                tracing::warn!(error = ?err, "clear tick failed to draw");
            }
        });
        *self.clear_tick.borrow_mut() = Some(tick);

        let core = Rc::clone(&self.core);
        let ctx = self.ctx.clone();
        let clear_tick = Rc::clone(&self.clear_tick);
        Timeout::new(duration_ms, move || {
            // Dropping the interval cancels the remaining ticks.
            clear_tick.borrow_mut().take();
            let mut surface = CanvasSurface::new(&ctx, w, h);
            if let Err(err) = core.borrow_mut().on_clear_deadline(&mut surface) {
                tracing::warn!(error = ?err, "final clear repaint failed");
            }
        })
        .forget();

        actions
    }

    // --- Render ---

    /// Draw the current scene to the canvas.
    ///
    /// # Errors
    ///
    /// Returns the canvas error if drawing fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let (w, h) = self.surface_size();
        let mut surface = CanvasSurface::new(&self.ctx, w, h);
        self.core.borrow().redraw(&mut surface)
    }

    // --- Queries ---

    /// Copy of the current scene and input state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.core.borrow().snapshot()
    }

    #[must_use]
    pub fn is_clearing(&self) -> bool {
        self.core.borrow().is_clearing()
    }
}

fn js_error(err: JsValue) -> Error {
    Error::Canvas(format!("{err:?}"))
}
