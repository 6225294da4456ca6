//! Game tuning
//!
//! Every gameplay constant lives in `GameConfig`. Native builds may override
//! the defaults from a RON file next to the assets. Pixel sizes are derived
//! from the screen height once at startup (`Metrics`) and truncated to whole
//! pixels.

use serde::{Deserialize, Serialize};
#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;

/// Where the optional tuning override lives
pub const TUNING_PATH: &str = "assets/config/tuning.ron";

/// Error type for loading the tuning file
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Gameplay constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Player starting size as a fraction of screen height
    pub player_start_fraction: f64,
    /// Food sprite size as a fraction of screen height
    pub food_size_fraction: f64,
    /// Growth per good food, as a fraction of the starting size
    pub growth_fraction: f64,
    /// Shrink per bad food, as a fraction of the starting size
    pub shrink_fraction: f64,
    /// Seconds a food item stays on screen before vanishing
    pub food_lifetime: f32,
    /// Session length in seconds
    pub game_duration: f32,
    /// Target frame rate
    pub fps: u32,
    /// Per-frame chance that a free slot gets refilled
    pub spawn_chance: f32,
    /// Chance that a spawned food is good
    pub good_chance: f32,
    /// Score for eating good food
    pub good_score: i32,
    /// Score for eating bad food (negative)
    pub bad_score: i32,
    /// Seconds between mouth open/closed frames
    pub chomp_interval: f32,
    /// Seconds the game-over screen stays up
    pub game_over_hold: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_start_fraction: 0.05,
            food_size_fraction: 0.06,
            growth_fraction: 0.2,
            shrink_fraction: 0.3,
            food_lifetime: 4.0,
            game_duration: 390.0,
            fps: 60,
            spawn_chance: 0.02,
            good_chance: 0.9,
            good_score: 10,
            bad_score: -5,
            chomp_interval: 0.5,
            game_over_hold: 3.0,
        }
    }
}

impl GameConfig {
    /// Parse a RON tuning file. Missing fields keep their defaults.
    pub fn from_ron(source: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the tuning file at `path`, or the defaults if it doesn't exist
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let source = std::fs::read_to_string(path)?;
        Self::from_ron(&source)
    }

    /// Target frame time in seconds (None = unlocked)
    pub fn frame_time(&self) -> Option<f64> {
        if self.fps == 0 {
            None
        } else {
            Some(1.0 / self.fps as f64)
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let fractions: [(&str, f64); 4] = [
            ("player_start_fraction", self.player_start_fraction),
            ("food_size_fraction", self.food_size_fraction),
            ("growth_fraction", self.growth_fraction),
            ("shrink_fraction", self.shrink_fraction),
        ];
        for (name, value) in fractions {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be in (0, 1], got {}",
                    name, value
                )));
            }
        }

        let durations = [
            ("food_lifetime", self.food_lifetime),
            ("game_duration", self.game_duration),
            ("chomp_interval", self.chomp_interval),
        ];
        for (name, value) in durations {
            if !(value > 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        if self.game_over_hold < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "game_over_hold must not be negative, got {}",
                self.game_over_hold
            )));
        }

        let chances = [("spawn_chance", self.spawn_chance), ("good_chance", self.good_chance)];
        for (name, value) in chances {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be in [0, 1], got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

/// Pixel sizes derived from the screen, fixed for the whole session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Starting (and minimum) player size
    pub player_start_size: f32,
    /// Food sprite side length
    pub food_size: f32,
    pub growth: f32,
    pub shrink: f32,
    /// HUD font size in pixels
    pub font_size: f32,
}

impl Metrics {
    pub fn from_screen(config: &GameConfig, screen_width: f32, screen_height: f32) -> Self {
        // f64 so that e.g. 600 * 0.06 truncates to 36, not 35
        let height = screen_height as f64;
        let player_start_size = (height * config.player_start_fraction).floor();
        Self {
            screen_width,
            screen_height,
            player_start_size: player_start_size as f32,
            food_size: (height * config.food_size_fraction).floor() as f32,
            growth: (player_start_size * config.growth_fraction).floor() as f32,
            shrink: (player_start_size * config.shrink_fraction).floor() as f32,
            font_size: (height * 0.05).floor() as f32,
        }
    }

    /// Half the food size, in whole pixels (used as the food's hit radius)
    pub fn food_half(&self) -> f32 {
        (self.food_size / 2.0).floor()
    }
}
