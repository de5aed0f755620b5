//! Segment drawing and intersection engine for a 2D canvas.
//!
//! The user places straight segments with two presses; every new segment is
//! checked against the ones already on the canvas and each crossing is marked
//! with a disc. A clear control shrinks every segment toward its midpoint over
//! a bounded animation and then empties the scene. The host page only wires
//! DOM events to [`engine::Engine`]; everything else lives here and is
//! testable natively through [`engine::EngineCore`] and
//! [`surface::RecordingSurface`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Browser engine and testable [`engine::EngineCore`] |
//! | [`geometry`] | Points, segments, and segment intersection |
//! | [`scene`] | In-memory store of segments and intersection markers |
//! | [`input`] | Mouse buttons and the two-state placement machine |
//! | [`render`] | Full-scene repaint and the canvas-backed surface |
//! | [`surface`] | Drawing surface trait and a recording implementation |
//! | [`clear`] | Shrink-to-empty clear animation |
//! | [`config`] | Visual style and clear-animation timing |
//! | [`error`] | Crate error type |
//! | [`consts`] | Shared numeric constants (marker radius, timings, etc.) |

pub mod clear;
pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod input;
pub mod render;
pub mod scene;
pub mod surface;
