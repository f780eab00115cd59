//! Embassy async tasks
//!
//! The encoder task publishes the wrapped position through an atomic; the
//! game task reads it once per poll.

pub mod encoder;
pub mod game;

pub use encoder::{encoder_task, POSITION};
pub use game::game_task;
