//! Board-agnostic core logic for the Ophis rotary snake
//!
//! This crate contains all game logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (display adapter, input source)
//! - Toroidal grid, snake body and food placement
//! - Rotary input interpretation
//! - Collision resolution and per-tick game state
//! - Incremental renderer
//! - Game loop state machine
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod direction;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod render;
pub mod runner;
pub mod snake;
pub mod state;
pub mod traits;

#[cfg(test)]
mod testing;

pub use config::{ConfigError, GameConfig};
pub use direction::Direction;
pub use game::{GameState, TickOutcome};
pub use grid::{Cell, Grid};
pub use input::{interpret, RotaryTracker, Turn};
pub use runner::{GameLoop, Step};
pub use state::{Event, Phase};
