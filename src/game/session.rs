//! Game session
//!
//! One timed round: the player, the food pool, score and the countdown.
//! `tick` is the whole per-frame update (clock, input, collisions, expiry,
//! spawning) and takes the frame's delta time explicitly, so a session runs
//! the same with or without a window.

use rand::rngs::StdRng;
use rand::Rng;
use crate::config::{GameConfig, Metrics};
use crate::input::{DragStatus, DragTracker, InputEvent};
use super::event::{Events, FoodEaten, FoodExpired, FoodSpawned};
use super::food::FoodPool;
use super::player::Player;
use super::spawner::Spawner;

/// Backdrop, picked once per session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    Beach,
    Playground,
}

impl Background {
    /// Image file under `assets/backgrounds/`
    pub fn file_name(&self) -> &'static str {
        match self {
            Background::Beach => "beach_bg.png",
            Background::Playground => "playground_bg.png",
        }
    }
}

/// Session state machine: Running -> Ended, once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Ended,
}

/// What a tick did to the phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still playing
    Running,
    /// The clock ran out on this tick
    JustEnded,
    /// Already over; nothing happened
    Ended,
}

pub struct Session {
    config: GameConfig,
    metrics: Metrics,
    pub player: Player,
    pub foods: FoodPool,
    spawner: Spawner,
    drag: DragTracker,
    /// Food events from the last tick
    pub events: Events,
    score: i32,
    /// Seconds played
    elapsed: f32,
    background: Background,
    phase: Phase,
    rng: StdRng,
}

impl Session {
    /// Start a round: centered player, a full pool of good food, random backdrop
    pub fn new(config: GameConfig, metrics: Metrics, mut rng: StdRng) -> Self {
        let background = if rng.gen::<f32>() < 0.5 {
            Background::Beach
        } else {
            Background::Playground
        };
        let foods = FoodPool::new(&metrics, &mut rng);

        Self {
            spawner: Spawner::from_config(&config),
            player: Player::new(&metrics),
            foods,
            drag: DragTracker::new(),
            events: Events::new(),
            score: 0,
            elapsed: 0.0,
            background,
            phase: Phase::Running,
            config,
            metrics,
            rng,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn background(&self) -> Background {
        self.background
    }

    /// Seconds left on the clock, never negative
    pub fn time_remaining(&self) -> f32 {
        (self.config.game_duration - self.elapsed).max(0.0)
    }

    /// Run one frame: clock, then input, then the food pass, then spawning
    pub fn tick(&mut self, delta_time: f32, input: &[InputEvent]) -> TickOutcome {
        if self.phase == Phase::Ended {
            return TickOutcome::Ended;
        }

        self.events.clear_all();

        self.elapsed += delta_time.max(0.0);
        if self.time_remaining() <= 0.0 {
            self.phase = Phase::Ended;
            self.player.dragging = false;
            return TickOutcome::JustEnded;
        }

        for event in input {
            match self.drag.handle(event, &mut self.player, &self.metrics) {
                DragStatus::Started => log::debug!(
                    "Drag started at ({}, {})",
                    self.player.position.x,
                    self.player.position.y
                ),
                DragStatus::Ended => log::debug!(
                    "Drag ended at ({}, {})",
                    self.player.position.x,
                    self.player.position.y
                ),
                DragStatus::Idle | DragStatus::Continue => {}
            }
        }
        self.drag.follow(&mut self.player, &self.metrics);

        self.player.animate(delta_time, self.config.chomp_interval);
        self.update_foods(delta_time);

        if let Some(slot) = self.spawner.maybe_spawn(&mut self.foods, &self.metrics, &mut self.rng) {
            if let Some(food) = self.foods.get(slot) {
                self.events.spawned.send(FoodSpawned {
                    slot,
                    sprite: food.sprite,
                    position: food.position,
                });
            }
        }

        TickOutcome::Running
    }

    /// Collisions first, then expiry, slot by slot. Food eaten this frame is
    /// already inactive when its expiry check runs, so it only counts once.
    fn update_foods(&mut self, delta_time: f32) {
        let lifetime = self.config.food_lifetime;
        for (slot, food) in self.foods.iter_mut().enumerate() {
            if food.active && self.player.collides_with(food, &self.metrics) {
                let score_delta = if food.is_good() {
                    self.player.grow();
                    self.config.good_score
                } else {
                    self.player.shrink();
                    self.config.bad_score
                };
                self.score += score_delta;
                food.active = false;
                self.events.eaten.send(FoodEaten {
                    slot,
                    sprite: food.sprite,
                    score_delta,
                    player_size: self.player.size,
                });
            }

            if food.update(delta_time, lifetime) {
                self.events.expired.send(FoodExpired { slot, sprite: food.sprite });
            }
        }
    }

    /// Drop a food item at an exact spot (first free slot). Returns the slot.
    #[cfg(test)]
    pub fn place_food(
        &mut self,
        sprite: super::food::FoodSprite,
        position: macroquad::math::Vec2,
    ) -> Option<usize> {
        let slot = self.foods.first_inactive()?;
        self.foods.get_mut(slot)?.reset_at(sprite, position);
        Some(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::food::{FoodSprite, FOOD_POOL_SIZE};
    use macroquad::math::Vec2;
    use rand::SeedableRng;

    const FRAME: f32 = 1.0 / 60.0;

    /// Session with no random spawns and an empty pool
    fn quiet_session() -> Session {
        let config = GameConfig {
            spawn_chance: 0.0,
            ..GameConfig::default()
        };
        let metrics = Metrics::from_screen(&config, 800.0, 600.0);
        let mut session = Session::new(config, metrics, StdRng::seed_from_u64(42));
        session.foods.clear();
        session
    }

    fn far_corner(session: &Session) -> Vec2 {
        Vec2::new(
            session.metrics().screen_width - session.metrics().food_size,
            session.metrics().screen_height - session.metrics().food_size,
        )
    }

    #[test]
    fn test_new_session() {
        let config = GameConfig::default();
        let metrics = Metrics::from_screen(&config, 800.0, 600.0);
        let session = Session::new(config, metrics, StdRng::seed_from_u64(1));
        assert_eq!(session.score(), 0);
        assert_eq!(session.phase(), Phase::Running);
        assert_eq!(session.foods.active_count(), FOOD_POOL_SIZE);
        assert_eq!(session.time_remaining(), 390.0);
        assert_eq!(session.player.size, metrics.player_start_size);
    }

    #[test]
    fn test_good_food_at_player_is_eaten_next_tick() {
        let mut session = quiet_session();
        let start = session.player.size;
        let pos = session.player.position;
        let slot = session.place_food(FoodSprite::Watermelon, pos).unwrap();

        assert_eq!(session.tick(FRAME, &[]), TickOutcome::Running);

        assert_eq!(session.player.size, start + session.metrics().growth);
        assert_eq!(session.score(), 10);
        assert!(!session.foods.get(slot).unwrap().active);
        assert_eq!(session.events.eaten.len(), 1);
        assert!(session.events.expired.is_empty());
    }

    #[test]
    fn test_bad_food_shrinks_and_costs_score() {
        let mut session = quiet_session();
        session.player.grow();
        session.player.grow();
        let before = session.player.size;
        session.place_food(FoodSprite::Poop, session.player.position);

        session.tick(FRAME, &[]);

        assert_eq!(session.score(), -5);
        assert_eq!(session.player.size, (before - session.metrics().shrink).max(session.player.start_size()));
    }

    #[test]
    fn test_size_never_below_start_after_many_bad_foods() {
        let mut session = quiet_session();
        for _ in 0..25 {
            session.place_food(FoodSprite::Poop, session.player.position);
            session.tick(FRAME, &[]);
            assert!(session.player.size >= session.player.start_size());
        }
        assert_eq!(session.score(), -125);
    }

    #[test]
    fn test_score_is_order_independent() {
        let orders: [&[FoodSprite]; 3] = [
            &[FoodSprite::Banana, FoodSprite::Banana, FoodSprite::Poop, FoodSprite::Kiwi, FoodSprite::Poop],
            &[FoodSprite::Poop, FoodSprite::Poop, FoodSprite::Banana, FoodSprite::Kiwi, FoodSprite::Banana],
            &[FoodSprite::Kiwi, FoodSprite::Poop, FoodSprite::Banana, FoodSprite::Poop, FoodSprite::Banana],
        ];
        for order in orders {
            let mut session = quiet_session();
            for sprite in order {
                session.place_food(*sprite, session.player.position);
                session.tick(FRAME, &[]);
            }
            // 3 good, 2 bad
            assert_eq!(session.score(), 10 * 3 - 5 * 2);
        }
    }

    #[test]
    fn test_untouched_food_expires_without_effect() {
        let mut session = quiet_session();
        let corner = far_corner(&session);
        let slot = session.place_food(FoodSprite::Strawberry, corner).unwrap();
        let size = session.player.size;

        let mut expired = 0;
        for _ in 0..235 {
            session.tick(FRAME, &[]);
            expired += session.events.expired.len();
        }
        assert!(session.foods.get(slot).unwrap().active, "still within its 4 seconds");

        for _ in 0..20 {
            session.tick(FRAME, &[]);
            expired += session.events.expired.len();
        }
        assert!(!session.foods.get(slot).unwrap().active);
        assert_eq!(expired, 1);
        assert_eq!(session.score(), 0);
        assert_eq!(session.player.size, size);
    }

    #[test]
    fn test_eaten_and_expired_same_frame_counts_as_eaten() {
        let mut session = quiet_session();
        let pos = session.player.position;
        let slot = session.place_food(FoodSprite::Grape, pos).unwrap();
        session.foods.get_mut(slot).unwrap().age = 3.999;

        session.tick(0.5, &[]);

        assert_eq!(session.events.eaten.len(), 1);
        assert!(session.events.expired.is_empty());
        assert_eq!(session.score(), 10);
    }

    #[test]
    fn test_each_life_ends_exactly_once() {
        let config = GameConfig {
            spawn_chance: 0.2,
            ..GameConfig::default()
        };
        let metrics = Metrics::from_screen(&config, 800.0, 600.0);
        let mut session = Session::new(config, metrics, StdRng::seed_from_u64(8));

        // Sweep the player around so some food is eaten and some expires
        let mut was_active = [true; FOOD_POOL_SIZE];
        let mut ends = 0;
        let mut spawns = 0;
        for frame in 0..6000 {
            let input = if frame == 0 {
                InputEvent::PointerDown(session.player.position)
            } else {
                let t = frame as f32 * 0.01;
                InputEvent::PointerMoved(Vec2::new(400.0 + 300.0 * t.cos(), 300.0 + 200.0 * (1.7 * t).sin()))
            };
            session.tick(FRAME, &[input]);

            let eaten: Vec<usize> = session.events.eaten.iter().map(|e| e.slot).collect();
            let expired: Vec<usize> = session.events.expired.iter().map(|e| e.slot).collect();
            for slot in &eaten {
                assert!(!expired.contains(slot), "slot {} ended twice", slot);
            }
            ends += eaten.len() + expired.len();
            spawns += session.events.spawned.len();

            for (slot, food) in session.foods.iter().enumerate() {
                let ended = eaten.contains(&slot) || expired.contains(&slot);
                let respawned = session.events.spawned.iter().any(|e| e.slot == slot);
                if was_active[slot] && !food.active {
                    assert!(ended);
                }
                if ended && !respawned {
                    assert!(!food.active);
                }
                was_active[slot] = food.active;
            }
            assert!(session.foods.active_count() <= FOOD_POOL_SIZE);
        }
        // Three initial lives plus every respawn, minus the ones still running
        assert_eq!(ends + session.foods.active_count(), FOOD_POOL_SIZE + spawns);
    }

    #[test]
    fn test_never_more_than_pool_size_active() {
        let config = GameConfig {
            spawn_chance: 1.0,
            ..GameConfig::default()
        };
        let metrics = Metrics::from_screen(&config, 800.0, 600.0);
        let mut session = Session::new(config, metrics, StdRng::seed_from_u64(3));
        for _ in 0..2000 {
            session.tick(FRAME, &[]);
            assert!(session.foods.active_count() <= FOOD_POOL_SIZE);
            assert!(session.events.spawned.len() <= 1);
        }
    }

    #[test]
    fn test_spawner_refills_free_slots() {
        let config = GameConfig {
            spawn_chance: 1.0,
            ..GameConfig::default()
        };
        let metrics = Metrics::from_screen(&config, 800.0, 600.0);
        let mut session = Session::new(config, metrics, StdRng::seed_from_u64(4));
        session.foods.clear();
        session.tick(FRAME, &[]);
        assert_eq!(session.foods.active_count(), 1);
        assert_eq!(session.events.spawned.len(), 1);
    }

    #[test]
    fn test_dragging_moves_player() {
        let mut session = quiet_session();
        let start = session.player.position;
        session.tick(FRAME, &[InputEvent::PointerDown(start), InputEvent::PointerMoved(Vec2::new(100.0, 120.0))]);
        assert_eq!(session.player.position, Vec2::new(100.0, 120.0));
        assert!(session.player.dragging);

        session.tick(FRAME, &[InputEvent::PointerUp, InputEvent::PointerMoved(Vec2::new(700.0, 500.0))]);
        assert_eq!(session.player.position, Vec2::new(100.0, 120.0));
        assert!(!session.player.dragging);
    }

    #[test]
    fn test_timer_ends_session_once() {
        let config = GameConfig {
            game_duration: 1.0,
            spawn_chance: 1.0,
            ..GameConfig::default()
        };
        let metrics = Metrics::from_screen(&config, 800.0, 600.0);
        let mut session = Session::new(config, metrics, StdRng::seed_from_u64(6));
        session.foods.clear();

        let mut just_ended = 0;
        for _ in 0..59 {
            assert_eq!(session.tick(FRAME, &[]), TickOutcome::Running);
        }
        for _ in 0..10 {
            if session.tick(FRAME, &[]) == TickOutcome::JustEnded {
                just_ended += 1;
            }
        }
        assert_eq!(just_ended, 1);
        assert_eq!(session.phase(), Phase::Ended);
        assert_eq!(session.time_remaining(), 0.0);

        // Frozen: no score, size, position or pool changes
        let position = session.player.position;
        let size = session.player.size;
        let score = session.score();
        session.place_food(FoodSprite::Banana, position);
        let active = session.foods.active_count();
        for _ in 0..120 {
            let outcome = session.tick(
                FRAME,
                &[InputEvent::PointerDown(position), InputEvent::PointerMoved(Vec2::new(50.0, 50.0))],
            );
            assert_eq!(outcome, TickOutcome::Ended);
        }
        assert_eq!(session.player.position, position);
        assert_eq!(session.player.size, size);
        assert_eq!(session.score(), score);
        assert_eq!(session.foods.active_count(), active);
    }

    #[test]
    fn test_remaining_time_never_increases() {
        let mut session = quiet_session();
        let mut last = session.time_remaining();
        for dt in [0.016, 0.0, 0.033, -1.0, 0.5, 0.016] {
            session.tick(dt, &[]);
            assert!(session.time_remaining() <= last);
            last = session.time_remaining();
        }
    }
}
