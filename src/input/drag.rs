//! Drag tracking
//!
//! Chompy only moves while being dragged. A press inside the sprite starts a
//! drag session, motion moves the sprite, a release ends the session. Mouse
//! and touch drive the same session; touch coordinates arrive normalized and
//! are scaled to the screen here.

use macroquad::math::Vec2;
use crate::config::Metrics;
use crate::game::Player;
use super::InputEvent;

/// The status of a drag session after handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragStatus {
    /// No drag in progress
    Idle,
    /// Drag started this event
    Started,
    /// Drag continues
    Continue,
    /// Drag ended this event
    Ended,
}

/// Turns pointer/touch events into player movement
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    /// Last pointer/touch position seen during the current session
    current: Option<Vec2>,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one input event to the player
    pub fn handle(&mut self, event: &InputEvent, player: &mut Player, metrics: &Metrics) -> DragStatus {
        match *event {
            InputEvent::PointerDown(pos) => self.press(pos, player),
            InputEvent::TouchDown(norm) => self.press(to_screen(norm, metrics), player),
            InputEvent::PointerMoved(pos) => self.motion(pos, player, metrics),
            InputEvent::TouchMoved(norm) => self.motion(to_screen(norm, metrics), player, metrics),
            InputEvent::PointerUp | InputEvent::TouchUp => self.release(player),
            InputEvent::Quit | InputEvent::Close => self.status(player),
        }
    }

    /// Per-frame follow: keep the player under the drag position
    pub fn follow(&self, player: &mut Player, metrics: &Metrics) {
        if !player.dragging {
            return;
        }
        if let Some(pos) = self.current {
            player.move_to(pos, metrics);
        }
    }

    fn press(&mut self, pos: Vec2, player: &mut Player) -> DragStatus {
        if player.contains(pos) {
            player.dragging = true;
            self.current = Some(pos);
            DragStatus::Started
        } else {
            self.status(player)
        }
    }

    fn motion(&mut self, pos: Vec2, player: &mut Player, metrics: &Metrics) -> DragStatus {
        if !player.dragging {
            return DragStatus::Idle;
        }
        self.current = Some(pos);
        player.move_to(pos, metrics);
        DragStatus::Continue
    }

    fn release(&mut self, player: &mut Player) -> DragStatus {
        let was_dragging = player.dragging;
        player.dragging = false;
        self.current = None;
        if was_dragging {
            DragStatus::Ended
        } else {
            DragStatus::Idle
        }
    }

    fn status(&self, player: &Player) -> DragStatus {
        if player.dragging {
            DragStatus::Continue
        } else {
            DragStatus::Idle
        }
    }
}

/// Scale a normalized [0, 1] touch position to screen pixels
fn to_screen(norm: Vec2, metrics: &Metrics) -> Vec2 {
    Vec2::new(norm.x * metrics.screen_width, norm.y * metrics.screen_height)
}
