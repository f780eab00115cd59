//! Build-time game configuration
//!
//! `build.rs` parses and validates `game.toml`, then generates the constant
//! included here. Edit game.toml and rebuild to customize.

use ophis_core::GameConfig;

include!(concat!(env!("OUT_DIR"), "/game_config.rs"));
