//! Game state and the per-frame update
//!
//! Everything in here is plain data plus the rules that mutate it; nothing
//! touches the window, so the whole game step runs under `cargo test`.
//!
//! Key pieces:
//! - Player: the draggable character that grows and shrinks
//! - Food: fixed pool of recycled food slots
//! - Spawner: random refill of free slots
//! - Session: one timed round and its `tick`
//! - Event: per-frame record of what happened to the food

pub mod player;
pub mod food;
pub mod spawner;
pub mod event;
pub mod session;

// Re-export main types
pub use player::Player;
pub use food::FoodSprite;
pub use session::{Background, Phase, Session};
