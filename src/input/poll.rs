//! macroquad input polling
//!
//! Reads macroquad's per-frame input state and reports it as `InputEvent`s.
//! Only the left mouse button and the first finger are tracked.

use macroquad::prelude::*;
use super::InputEvent;

pub struct InputPoller {
    last_mouse: Vec2,
    /// Finger that owns the touch channel
    touch_id: Option<u64>,
}

impl InputPoller {
    /// Call once after the window is up
    pub fn new() -> Self {
        // One gesture, one channel: don't echo touches as mouse events
        simulate_mouse_with_touch(false);
        // Route the close button through `Close` instead of exiting mid-frame
        prevent_quit();
        let (x, y) = mouse_position();
        Self {
            last_mouse: Vec2::new(x, y),
            touch_id: None,
        }
    }

    /// Drain this frame's input
    pub fn poll(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if is_key_pressed(KeyCode::Escape) {
            events.push(InputEvent::Quit);
        }
        if is_quit_requested() {
            events.push(InputEvent::Close);
        }

        let (x, y) = mouse_position();
        let mouse = Vec2::new(x, y);
        if is_mouse_button_pressed(MouseButton::Left) {
            events.push(InputEvent::PointerDown(mouse));
        }
        if mouse != self.last_mouse {
            events.push(InputEvent::PointerMoved(mouse));
            self.last_mouse = mouse;
        }
        if is_mouse_button_released(MouseButton::Left) {
            events.push(InputEvent::PointerUp);
        }

        let screen = Vec2::new(screen_width().max(1.0), screen_height().max(1.0));
        for touch in touches() {
            if self.touch_id.is_none() && matches!(touch.phase, TouchPhase::Started) {
                self.touch_id = Some(touch.id);
            }
            if self.touch_id != Some(touch.id) {
                continue;
            }

            let norm = touch.position / screen;
            match touch.phase {
                TouchPhase::Started => events.push(InputEvent::TouchDown(norm)),
                TouchPhase::Moved => events.push(InputEvent::TouchMoved(norm)),
                TouchPhase::Ended | TouchPhase::Cancelled => {
                    events.push(InputEvent::TouchUp);
                    self.touch_id = None;
                }
                TouchPhase::Stationary => {}
            }
        }

        events
    }
}
