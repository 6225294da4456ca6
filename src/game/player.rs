//! Chompy, the player character
//!
//! Position is the sprite center. `size` is the half-extent of the square
//! sprite and doubles as the hit radius.

use macroquad::math::Vec2;
use crate::config::Metrics;
use super::food::Food;

#[derive(Debug, Clone)]
pub struct Player {
    /// Sprite center in screen pixels
    pub position: Vec2,
    /// Half the sprite side; grows and shrinks with food
    pub size: f32,
    /// Inside a drag session
    pub dragging: bool,
    /// Which chomp frame is showing
    pub mouth_open: bool,
    /// Seconds since the last chomp frame switch
    chomp_timer: f32,
    start_size: f32,
    growth: f32,
    shrink_amount: f32,
}

impl Player {
    /// Starting-size player centered on screen
    pub fn new(metrics: &Metrics) -> Self {
        Self {
            position: Vec2::new(
                (metrics.screen_width / 2.0).floor(),
                (metrics.screen_height / 2.0).floor(),
            ),
            size: metrics.player_start_size,
            dragging: false,
            mouth_open: false,
            chomp_timer: 0.0,
            start_size: metrics.player_start_size,
            growth: metrics.growth,
            shrink_amount: metrics.shrink,
        }
    }

    #[cfg(test)]
    pub fn start_size(&self) -> f32 {
        self.start_size
    }

    /// Full sprite side length
    pub fn extent(&self) -> f32 {
        self.size * 2.0
    }

    /// Move to `target`, keeping the whole sprite on screen
    pub fn move_to(&mut self, target: Vec2, metrics: &Metrics) {
        let half = self.size;
        // max last: a player wider than the screen sticks to the top-left margin
        self.position.x = target.x.min(metrics.screen_width - half).max(half);
        self.position.y = target.y.min(metrics.screen_height - half).max(half);
    }

    pub fn grow(&mut self) {
        self.size += self.growth;
    }

    /// Never drops below the starting size
    pub fn shrink(&mut self) {
        self.size = (self.size - self.shrink_amount).max(self.start_size);
    }

    /// Circle test with `size` as the player's radius and half the food
    /// sprite as the food's
    pub fn collides_with(&self, food: &Food, metrics: &Metrics) -> bool {
        self.position.distance(food.position) < self.size + metrics.food_half()
    }

    /// Is `point` inside the sprite's bounding box?
    pub fn contains(&self, point: Vec2) -> bool {
        let left = self.position.x.trunc() - self.size;
        let top = self.position.y.trunc() - self.size;
        point.x >= left
            && point.x < left + self.extent()
            && point.y >= top
            && point.y < top + self.extent()
    }

    /// Advance the chomp animation; purely time driven
    pub fn animate(&mut self, delta_time: f32, interval: f32) {
        self.chomp_timer += delta_time;
        if self.chomp_timer > interval {
            self.mouth_open = !self.mouth_open;
            self.chomp_timer = 0.0;
        }
    }
}
