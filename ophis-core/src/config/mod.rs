//! Configuration types
//!
//! Board-agnostic game configuration. The firmware fills these in at build
//! time from `game.toml`.

pub mod types;

pub use types::*;
