//! Drawing
//!
//! Immediate-mode drawing of a session with macroquad. Nothing here mutates
//! game state; the chomp frame and food fade are read off the session.

mod assets;

pub use assets::{AssetError, Assets};

use macroquad::prelude::*;
use crate::game::Session;

const HUD_MARGIN: f32 = 10.0;

/// Background, food, player, then the HUD on top
pub fn draw_session(session: &Session, assets: &Assets) {
    let metrics = session.metrics();

    draw_texture_ex(
        assets.background(session.background()),
        0.0,
        0.0,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(metrics.screen_width, metrics.screen_height)),
            ..Default::default()
        },
    );

    let lifetime = session.config().food_lifetime;
    let half = metrics.food_half();
    for food in session.foods.iter().filter(|f| f.active) {
        let tint = Color::new(1.0, 1.0, 1.0, food.fade(lifetime));
        draw_texture_ex(
            assets.food(food.sprite),
            (food.position.x - half).trunc(),
            (food.position.y - half).trunc(),
            tint,
            DrawTextureParams {
                dest_size: Some(vec2(metrics.food_size, metrics.food_size)),
                ..Default::default()
            },
        );
    }

    let player = &session.player;
    let extent = player.extent();
    draw_texture_ex(
        assets.chompy(player.mouth_open),
        player.position.x.trunc() - player.size,
        player.position.y.trunc() - player.size,
        WHITE,
        DrawTextureParams {
            dest_size: Some(vec2(extent, extent)),
            ..Default::default()
        },
    );

    draw_hud(session);
}

/// Score and countdown, top-left
fn draw_hud(session: &Session) {
    let font_size = session.metrics().font_size;
    let score = format!("Score: {}", session.score());
    let time = format!("Time: {}s", session.time_remaining() as i32);
    // draw_text takes the baseline
    draw_text(&score, HUD_MARGIN, HUD_MARGIN + font_size * 0.75, font_size, BLACK);
    draw_text(&time, HUD_MARGIN, HUD_MARGIN + font_size * 1.75, font_size, BLACK);
}

/// White screen with the final score centered
pub fn draw_game_over(session: &Session) {
    let metrics = session.metrics();
    clear_background(WHITE);

    let text = format!("Game Over! Final Score: {}", session.score());
    let dims = measure_text(&text, None, metrics.font_size as u16, 1.0);
    draw_text(
        &text,
        (metrics.screen_width / 2.0 - dims.width / 2.0).trunc(),
        (metrics.screen_height / 2.0 - dims.height / 2.0 + dims.offset_y).trunc(),
        metrics.font_size,
        BLACK,
    );
}
