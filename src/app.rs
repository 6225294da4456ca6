//! Application: startup, the frame loop and the game-over hold
//!
//! `App` owns everything with a lifetime tied to the window (textures, input
//! polling, frame pacing) plus the one game session. It is built once at
//! startup and consumed by `run`.

use macroquad::prelude::*;
use ::rand::rngs::StdRng;
use ::rand::SeedableRng;
use crate::config::{ConfigError, GameConfig, Metrics};
use crate::game::{Phase, Session};
use crate::input::{InputEvent, InputPoller};
use crate::render::{self, AssetError, Assets};

/// Anything that stops the game from starting
#[derive(Debug)]
pub enum StartupError {
    Config(ConfigError),
    Asset(AssetError),
}

impl From<ConfigError> for StartupError {
    fn from(e: ConfigError) -> Self {
        StartupError::Config(e)
    }
}

impl From<AssetError> for StartupError {
    fn from(e: AssetError) -> Self {
        StartupError::Asset(e)
    }
}

impl std::fmt::Display for StartupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartupError::Config(e) => write!(f, "bad tuning file: {}", e),
            StartupError::Asset(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for StartupError {}

/// Caps the frame rate by waiting out the rest of each frame
#[derive(Debug, Clone, Copy)]
pub struct FrameLimiter {
    /// Target frame time in seconds (None = unlocked)
    target_frame_time: Option<f64>,
    frame_start: f64,
}

impl FrameLimiter {
    pub fn new(target_frame_time: Option<f64>) -> Self {
        Self {
            target_frame_time,
            frame_start: 0.0,
        }
    }

    /// Mark the start of a frame
    pub fn begin(&mut self) {
        self.frame_start = get_time();
    }

    /// Block until the frame has taken its full target time
    pub fn wait(&self) {
        let Some(target_frame_time) = self.target_frame_time else { return };
        if get_time() - self.frame_start >= target_frame_time {
            return;
        }

        // Native: use sleep for bulk, then spin-wait for precision
        #[cfg(not(target_arch = "wasm32"))]
        {
            let spin_margin = 0.002; // 2ms
            while get_time() - self.frame_start + spin_margin < target_frame_time {
                std::thread::sleep(std::time::Duration::from_millis(1));
            }
            while get_time() - self.frame_start < target_frame_time {
                std::hint::spin_loop();
            }
        }
        // WASM: the browser paces frames; nothing to do
    }
}

/// How the player asked to leave, if at all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExitRequest {
    None,
    /// Escape: leave right away
    Immediate,
    /// Window closed: show the final score first
    AfterGameOver,
}

fn exit_request(input: &[InputEvent]) -> ExitRequest {
    if input.contains(&InputEvent::Quit) {
        ExitRequest::Immediate
    } else if input.contains(&InputEvent::Close) {
        ExitRequest::AfterGameOver
    } else {
        ExitRequest::None
    }
}

pub struct App {
    session: Session,
    assets: Assets,
    input: InputPoller,
    limiter: FrameLimiter,
}

impl App {
    /// Load tuning and textures, then start a session sized to the screen
    pub async fn start() -> Result<Self, StartupError> {
        #[cfg(not(target_arch = "wasm32"))]
        let config = GameConfig::load_or_default(std::path::Path::new(crate::config::TUNING_PATH))?;
        #[cfg(target_arch = "wasm32")]
        let config = GameConfig::default();

        let assets = Assets::load().await?;

        let metrics = Metrics::from_screen(&config, screen_width(), screen_height());
        log::info!(
            "Screen {}x{}: player {}px, food {}px, {}s round",
            metrics.screen_width,
            metrics.screen_height,
            metrics.player_start_size,
            metrics.food_size,
            config.game_duration
        );

        let seed = (miniquad::date::now() * 1000.0) as u64;
        let limiter = FrameLimiter::new(config.frame_time());
        let session = Session::new(config, metrics, StdRng::seed_from_u64(seed));

        Ok(Self {
            session,
            assets,
            input: InputPoller::new(),
            limiter,
        })
    }

    /// Play until the clock runs out (then show the score) or the player quits
    pub async fn run(mut self) {
        log::info!("Session started on the {:?} background", self.session.background());

        loop {
            self.limiter.begin();

            let input = self.input.poll();
            match exit_request(&input) {
                ExitRequest::Immediate => {
                    log::info!("Quit with score {}", self.session.score());
                    return;
                }
                ExitRequest::AfterGameOver => {
                    log::info!("Window closed");
                    break;
                }
                ExitRequest::None => {}
            }

            self.session.tick(get_frame_time(), &input);
            self.log_events();
            if self.session.phase() == Phase::Ended {
                break;
            }

            render::draw_session(&self.session, &self.assets);

            self.limiter.wait();
            next_frame().await;
        }

        log::info!("Game over, final score {}", self.session.score());
        self.hold_game_over().await;
    }

    /// Keep the final score up for a few seconds
    async fn hold_game_over(&mut self) {
        let hold = self.session.config().game_over_hold as f64;
        let ended_at = get_time();
        while get_time() - ended_at < hold {
            self.limiter.begin();
            // A second close or Escape skips the rest of the hold
            if exit_request(&self.input.poll()) != ExitRequest::None {
                return;
            }
            render::draw_game_over(&self.session);
            self.limiter.wait();
            next_frame().await;
        }
    }

    fn log_events(&mut self) {
        let events = &mut self.session.events;
        for e in events.eaten.drain() {
            log::debug!(
                "Ate {} in slot {} ({:+}), size now {}",
                e.sprite.label(),
                e.slot,
                e.score_delta,
                e.player_size
            );
        }
        for e in events.expired.drain() {
            log::debug!("{} in slot {} expired", e.sprite.label(), e.slot);
        }
        for e in events.spawned.drain() {
            log::debug!(
                "Spawned {} in slot {} at ({}, {})",
                e.sprite.label(),
                e.slot,
                e.position.x,
                e.position.y
            );
        }
    }
}
