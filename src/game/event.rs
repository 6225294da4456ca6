//! Event System
//!
//! The update step reports what happened to the food pool through per-frame
//! queues instead of calling into logging or rendering directly. The game
//! loop drains them after each tick.

use macroquad::math::Vec2;
use super::food::FoodSprite;

/// A queue for events of a single type.
/// Events are collected during the frame and drained at specific points.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Vec<T>,
}

impl<T> EventQueue<T> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Send an event (add to queue)
    pub fn send(&mut self, event: T) {
        self.events.push(event);
    }

    /// Iterate over events without clearing
    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.events.iter()
    }

    /// Drain all events (returns iterator and clears queue)
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.events.drain(..)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Container for all game events
#[derive(Debug, Default)]
pub struct Events {
    /// Player ate a food item
    pub eaten: EventQueue<FoodEaten>,

    /// A food item timed out uneaten
    pub expired: EventQueue<FoodExpired>,

    /// The spawner brought a slot back
    pub spawned: EventQueue<FoodSpawned>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all event queues (call at end of frame)
    pub fn clear_all(&mut self) {
        self.eaten.clear();
        self.expired.clear();
        self.spawned.clear();
    }
}

/// Player ate a food item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoodEaten {
    pub slot: usize,
    pub sprite: FoodSprite,
    /// Score change (negative for bad food)
    pub score_delta: i32,
    /// Player size after eating
    pub player_size: f32,
}

/// A food item timed out uneaten
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoodExpired {
    pub slot: usize,
    pub sprite: FoodSprite,
}

/// The spawner brought a slot back
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoodSpawned {
    pub slot: usize,
    pub sprite: FoodSprite,
    pub position: Vec2,
}
