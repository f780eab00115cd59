//! Build script for ophis-firmware
//!
//! - Sets up linker search paths and scripts for memory.x
//! - Validates game.toml at compile time and generates `GAME_CONFIG`

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use ophis_core::config::{ConfigError, GameConfig};

/// Panel the firmware drives
const DISPLAY_WIDTH: u16 = 128;
const DISPLAY_HEIGHT: u16 = 64;

fn main() {
    setup_linker();
    let config = load_config();
    write_config(&config);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Parse and validate game.toml
fn load_config() -> GameConfig {
    println!("cargo:rerun-if-changed=game.toml");

    let config_path = Path::new("game.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: game.toml not found!                                     ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a game.toml configuration file.           ║\n\
            ║  Please create one in the ophis-firmware directory.              ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read game.toml                                 ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: GameConfig = match toml::from_str(&config_content) {
        Ok(config) => config,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid game.toml                                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    if let Err(e) = config.validate(DISPLAY_WIDTH, DISPLAY_HEIGHT) {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid game configuration                               ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            ║  • {:<62} ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            describe(e)
        );
    }

    println!("cargo:warning=game.toml validated successfully");
    config
}

fn describe(error: ConfigError) -> &'static str {
    match error {
        ConfigError::InvalidGrid => "grid must be 1-128 wide and 1-64 high",
        ConfigError::InvalidCellSize => "cell_size must be at least 1",
        ConfigError::LayoutTooLarge => "grid (plus scoreboard) does not fit the 128x64 panel",
        ConfigError::InvalidEncoderStep => "encoder_step must be at least 2",
        ConfigError::InvalidInitialLength => "initial_length must be 1..grid_height",
        ConfigError::InvalidBody => "invalid initial snake body",
        ConfigError::InvalidFood => "invalid food cell",
    }
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.chars().count() > 64 {
                format!("{}...", line.chars().take(61).collect::<String>())
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Emit the validated config as a Rust constant
fn write_config(config: &GameConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let source = format!(
        "/// Game configuration from game.toml, validated at build time\n\
         pub const GAME_CONFIG: GameConfig = GameConfig {{\n    \
             grid_width: {},\n    \
             grid_height: {},\n    \
             cell_size: {},\n    \
             tick_ms: {},\n    \
             scoreboard: {},\n    \
             encoder_step: {},\n    \
             restart_debounce_ms: {},\n    \
             restart_poll_ms: {},\n    \
             initial_length: {},\n\
         }};\n",
        config.grid_width,
        config.grid_height,
        config.cell_size,
        config.tick_ms,
        config.scoreboard,
        config.encoder_step,
        config.restart_debounce_ms,
        config.restart_poll_ms,
        config.initial_length,
    );
    fs::write(out_dir.join("game_config.rs"), source).unwrap();
}
