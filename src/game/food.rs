//! Food items and the fixed food pool
//!
//! There are always exactly `FOOD_POOL_SIZE` food records. Eaten or expired
//! food is switched off in place and later switched back on by the spawner,
//! so nothing is allocated after startup.

use macroquad::math::Vec2;
use rand::Rng;
use crate::config::Metrics;

/// Number of food slots (and the cap on food on screen)
pub const FOOD_POOL_SIZE: usize = 3;

/// Whether eating the item helps or hurts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodKind {
    Good,
    Bad,
}

/// Which picture a food item uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodSprite {
    Banana,
    Grape,
    Kiwi,
    Pineapple,
    Strawberry,
    Watermelon,
    Poop,
}

impl FoodSprite {
    pub const GOOD: [FoodSprite; 6] = [
        FoodSprite::Banana,
        FoodSprite::Grape,
        FoodSprite::Kiwi,
        FoodSprite::Pineapple,
        FoodSprite::Strawberry,
        FoodSprite::Watermelon,
    ];

    pub const BAD: [FoodSprite; 1] = [FoodSprite::Poop];

    pub const ALL: [FoodSprite; 7] = [
        FoodSprite::Banana,
        FoodSprite::Grape,
        FoodSprite::Kiwi,
        FoodSprite::Pineapple,
        FoodSprite::Strawberry,
        FoodSprite::Watermelon,
        FoodSprite::Poop,
    ];

    /// Sprites available for a category
    pub fn choices(kind: FoodKind) -> &'static [FoodSprite] {
        match kind {
            FoodKind::Good => &Self::GOOD,
            FoodKind::Bad => &Self::BAD,
        }
    }

    #[cfg(test)]
    pub fn kind(&self) -> FoodKind {
        match self {
            FoodSprite::Poop => FoodKind::Bad,
            _ => FoodKind::Good,
        }
    }

    /// Image file under `assets/sprites/`
    pub fn file_name(&self) -> &'static str {
        match self {
            FoodSprite::Banana => "Banana.png",
            FoodSprite::Grape => "Grape.png",
            FoodSprite::Kiwi => "Kiwi fruit.png",
            FoodSprite::Pineapple => "pineapple.png",
            FoodSprite::Strawberry => "Strawberry.png",
            FoodSprite::Watermelon => "watermelon.png",
            FoodSprite::Poop => "poop.png",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FoodSprite::Banana => "banana",
            FoodSprite::Grape => "grape",
            FoodSprite::Kiwi => "kiwi",
            FoodSprite::Pineapple => "pineapple",
            FoodSprite::Strawberry => "strawberry",
            FoodSprite::Watermelon => "watermelon",
            FoodSprite::Poop => "poop",
        }
    }

    /// Position in `ALL`, for texture lookup
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// A single food slot
#[derive(Debug, Clone, Copy)]
pub struct Food {
    /// Sprite center in screen pixels
    pub position: Vec2,
    pub kind: FoodKind,
    pub sprite: FoodSprite,
    /// Seconds since the last reset
    pub age: f32,
    /// Is this slot on screen?
    pub active: bool,
}

impl Food {
    /// A switched-off slot
    pub fn inactive() -> Self {
        Self {
            position: Vec2::ZERO,
            kind: FoodKind::Good,
            sprite: FoodSprite::Banana,
            age: 0.0,
            active: false,
        }
    }

    /// Bring the slot back at a random spot at least one food size away from
    /// every edge, with a random sprite of the given kind
    pub fn reset<R: Rng>(&mut self, kind: FoodKind, metrics: &Metrics, rng: &mut R) {
        let margin = metrics.food_size as i32;
        let max_x = (metrics.screen_width as i32 - margin).max(margin);
        let max_y = (metrics.screen_height as i32 - margin).max(margin);
        self.position = Vec2::new(
            rng.gen_range(margin..=max_x) as f32,
            rng.gen_range(margin..=max_y) as f32,
        );

        let choices = FoodSprite::choices(kind);
        self.sprite = choices[rng.gen_range(0..choices.len())];
        self.kind = kind;
        self.age = 0.0;
        self.active = true;
    }

    /// Bring the slot back at an exact spot
    #[cfg(test)]
    pub fn reset_at(&mut self, sprite: FoodSprite, position: Vec2) {
        self.position = position;
        self.kind = sprite.kind();
        self.sprite = sprite;
        self.age = 0.0;
        self.active = true;
    }

    pub fn is_good(&self) -> bool {
        self.kind == FoodKind::Good
    }

    /// Age the item. Returns true on the frame it runs out of time.
    pub fn update(&mut self, delta_time: f32, lifetime: f32) -> bool {
        if !self.active {
            return false;
        }
        self.age += delta_time;
        if self.age > lifetime {
            self.active = false;
            return true;
        }
        false
    }

    /// Opacity: 1 when fresh, 0 at the end of its life
    pub fn fade(&self, lifetime: f32) -> f32 {
        (1.0 - self.age / lifetime).max(0.0)
    }
}

impl Default for Food {
    fn default() -> Self {
        Self::inactive()
    }
}

/// The fixed set of food slots
#[derive(Debug, Clone)]
pub struct FoodPool {
    slots: [Food; FOOD_POOL_SIZE],
}

impl FoodPool {
    /// Every slot starts on screen with good food
    pub fn new<R: Rng>(metrics: &Metrics, rng: &mut R) -> Self {
        let mut pool = Self::empty();
        for food in &mut pool.slots {
            food.reset(FoodKind::Good, metrics, rng);
        }
        pool
    }

    /// Every slot switched off
    pub fn empty() -> Self {
        Self {
            slots: [Food::inactive(); FOOD_POOL_SIZE],
        }
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|f| f.active).count()
    }

    /// First switched-off slot
    pub fn first_inactive(&self) -> Option<usize> {
        self.slots.iter().position(|f| !f.active)
    }

    pub fn get(&self, index: usize) -> Option<&Food> {
        self.slots.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Food> {
        self.slots.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Food> {
        self.slots.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Food> {
        self.slots.iter_mut()
    }

    /// Switch every slot off
    #[cfg(test)]
    pub fn clear(&mut self) {
        for food in &mut self.slots {
            food.active = false;
        }
    }
}
