//! Input handling
//!
//! Platform input is drained once per frame into a list of `InputEvent`s
//! (see `poll`), which the drag tracker then applies to the player. Keeping
//! the events as plain data lets the game step run without a window.

mod drag;
mod poll;

pub use drag::{DragStatus, DragTracker};
pub use poll::InputPoller;

use macroquad::math::Vec2;

/// One input event, in the order it happened within a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Left button pressed, screen pixels
    PointerDown(Vec2),
    /// Left button released
    PointerUp,
    /// Pointer moved, screen pixels
    PointerMoved(Vec2),
    /// Finger down, normalized [0, 1]
    TouchDown(Vec2),
    /// Finger lifted
    TouchUp,
    /// Finger moved, normalized [0, 1]
    TouchMoved(Vec2),
    /// Escape pressed
    Quit,
    /// Window close requested
    Close,
}
