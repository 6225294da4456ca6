//! Chompy: the Growth Game
//!
//! Drag Chompy around the screen to eat fruit before it fades away. Fruit
//! makes Chompy bigger and scores points; poop shrinks it and costs points.
//! The round ends when the countdown hits zero.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod config;
mod game;
mod input;
mod logging;
mod render;

use macroquad::prelude::*;
use app::App;

fn window_conf() -> Conf {
    Conf {
        window_title: "Growth Game".to_owned(),
        fullscreen: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    logging::init();
    log::info!("=== Chompy v{} ===", VERSION);

    let app = match App::start().await {
        Ok(app) => app,
        Err(e) => {
            log::error!("Startup failed: {}", e);
            eprintln!("chompy: {}", e);
            std::process::exit(1);
        }
    };

    app.run().await;
}
