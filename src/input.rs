//! Input model: mouse buttons and the segment placement state machine.
//!
//! A segment is placed with two presses. The first primary press arms the
//! machine with a start point; the next press of any button commits the
//! segment and returns to idle. `InputState` carries the start point between
//! the two presses so the engine can preview and commit without any other
//! bookkeeping.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geometry::Point;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
    /// Any other DOM button code (back, forward, ...). Commits like middle.
    Other(i16),
}

impl Button {
    /// Map a DOM `MouseEvent.button` code. Only `0` is primary.
    #[must_use]
    pub fn from_dom(button: i16) -> Self {
        match button {
            0 => Self::Primary,
            1 => Self::Middle,
            2 => Self::Secondary,
            other => Self::Other(other),
        }
    }

    /// Whether a commit with this button records its intersection markers.
    #[must_use]
    pub fn marks_points(self) -> bool {
        !matches!(self, Self::Secondary)
    }

    /// Whether a commit with this button stores the segment itself.
    #[must_use]
    pub fn stores_segment(self) -> bool {
        matches!(self, Self::Primary)
    }
}

/// Buttons held down during a pointer move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeldButtons {
    pub primary: bool,
    pub secondary: bool,
    pub middle: bool,
}

impl HeldButtons {
    /// Decode a DOM `MouseEvent.buttons` bitmask (1 = primary, 2 = secondary, 4 = middle).
    #[must_use]
    pub fn from_dom_mask(mask: u16) -> Self {
        Self {
            primary: mask & 1 != 0,
            secondary: mask & 2 != 0,
            middle: mask & 4 != 0,
        }
    }

    /// Only the primary button is held.
    #[must_use]
    pub fn primary() -> Self {
        Self { primary: true, ..Self::default() }
    }
}

/// Segment placement state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputState {
    /// No segment is being placed; waiting for a primary press.
    #[default]
    Idle,
    /// The first endpoint is captured; the next press commits the segment.
    Armed {
        /// Canvas-space start point of the pending segment.
        start: Point,
    },
}

impl InputState {
    #[must_use]
    pub fn is_armed(&self) -> bool {
        matches!(self, Self::Armed { .. })
    }

    /// Start point of the pending segment, if armed.
    #[must_use]
    pub fn start(&self) -> Option<Point> {
        match self {
            Self::Idle => None,
            Self::Armed { start } => Some(*start),
        }
    }
}
