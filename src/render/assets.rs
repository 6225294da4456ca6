//! Texture loading
//!
//! Every image is loaded once at startup. A missing or broken file is fatal:
//! there is no placeholder art.

use macroquad::prelude::*;
use crate::game::{Background, FoodSprite};

const SPRITE_DIR: &str = "assets/sprites";
const BACKGROUND_DIR: &str = "assets/backgrounds";

/// Error type for asset loading
#[derive(Debug)]
pub enum AssetError {
    /// Texture file missing or undecodable
    Texture { path: String, message: String },
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::Texture { path, message } => {
                write!(f, "failed to load texture {}: {}", path, message)
            }
        }
    }
}

impl std::error::Error for AssetError {}

/// All textures the game draws
pub struct Assets {
    pub chompy_open: Texture2D,
    pub chompy_closed: Texture2D,
    /// Indexed by `FoodSprite::index`
    pub foods: Vec<Texture2D>,
    pub beach: Texture2D,
    pub playground: Texture2D,
}

impl Assets {
    pub async fn load() -> Result<Self, AssetError> {
        let chompy_open = load(&format!("{}/Chompy_mouth_open.png", SPRITE_DIR)).await?;
        let chompy_closed = load(&format!("{}/Chompy_mouth_closed.png", SPRITE_DIR)).await?;

        let mut foods = Vec::with_capacity(FoodSprite::ALL.len());
        for sprite in FoodSprite::ALL {
            foods.push(load(&format!("{}/{}", SPRITE_DIR, sprite.file_name())).await?);
        }

        let beach = load(&format!("{}/{}", BACKGROUND_DIR, Background::Beach.file_name())).await?;
        let playground =
            load(&format!("{}/{}", BACKGROUND_DIR, Background::Playground.file_name())).await?;

        log::info!("Loaded {} textures", foods.len() + 4);

        Ok(Self {
            chompy_open,
            chompy_closed,
            foods,
            beach,
            playground,
        })
    }

    pub fn food(&self, sprite: FoodSprite) -> &Texture2D {
        &self.foods[sprite.index()]
    }

    pub fn background(&self, background: Background) -> &Texture2D {
        match background {
            Background::Beach => &self.beach,
            Background::Playground => &self.playground,
        }
    }

    pub fn chompy(&self, mouth_open: bool) -> &Texture2D {
        if mouth_open {
            &self.chompy_open
        } else {
            &self.chompy_closed
        }
    }
}

async fn load(path: &str) -> Result<Texture2D, AssetError> {
    match load_texture(path).await {
        Ok(tex) => {
            tex.set_filter(FilterMode::Linear);
            Ok(tex)
        }
        Err(e) => Err(AssetError::Texture {
            path: path.to_string(),
            message: e.to_string(),
        }),
    }
}
