//! Configuration type definitions

use crate::grid::Grid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Width of the side scoreboard in cells: border, gap and the 5-cell "HI" glyph
pub const SCOREBOARD_CELLS: u16 = 7;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Grid dimension is zero or larger than supported
    InvalidGrid,
    /// Cell size must be at least one pixel
    InvalidCellSize,
    /// Grid (plus scoreboard) does not fit on the display
    LayoutTooLarge,
    /// Encoder range must have at least two positions
    InvalidEncoderStep,
    /// Initial snake must fit in one grid column with a free cell ahead of it
    InvalidInitialLength,
    /// Explicit snake body has a duplicate or out-of-grid cell
    InvalidBody,
    /// Explicit food cell is off the grid or on the snake
    InvalidFood,
}

/// Game configuration
///
/// The bordered and full-screen layouts are presets of the same structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Grid width in cells
    pub grid_width: u8,
    /// Grid height in cells
    pub grid_height: u8,
    /// Edge length of one cell in display pixels
    pub cell_size: u8,
    /// Delay between ticks while playing (ms)
    pub tick_ms: u32,
    /// Draw a border and score readout right of the grid
    pub scoreboard: bool,
    /// Modulus of the encoder position
    pub encoder_step: u16,
    /// Pause after the game-over screen before watching for restart input (ms)
    pub restart_debounce_ms: u32,
    /// Delay between encoder polls while waiting for restart (ms)
    pub restart_poll_ms: u32,
    /// Snake length at game start
    pub initial_length: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::bordered()
    }
}

impl GameConfig {
    /// 54x32 grid of 2x2 pixel cells with a side scoreboard
    pub const fn bordered() -> Self {
        Self {
            grid_width: 54,
            grid_height: 32,
            cell_size: 2,
            tick_ms: 80,
            scoreboard: true,
            encoder_step: 100,
            restart_debounce_ms: 1500,
            restart_poll_ms: 1,
            initial_length: 5,
        }
    }

    /// 128x64 grid of single pixels, no scoreboard
    pub const fn full_screen() -> Self {
        Self {
            grid_width: 128,
            grid_height: 64,
            cell_size: 1,
            tick_ms: 2,
            scoreboard: false,
            encoder_step: 100,
            restart_debounce_ms: 0,
            restart_poll_ms: 1,
            initial_length: 5,
        }
    }

    /// Grid described by this configuration
    pub fn grid(&self) -> Result<Grid, ConfigError> {
        Grid::new(self.grid_width, self.grid_height).ok_or(ConfigError::InvalidGrid)
    }

    /// Check the configuration against a display of `width` x `height` pixels
    pub fn validate(&self, width: u16, height: u16) -> Result<(), ConfigError> {
        let grid = self.grid()?;

        if self.cell_size == 0 {
            return Err(ConfigError::InvalidCellSize);
        }

        let size = u16::from(self.cell_size);
        let mut cells_wide = u16::from(grid.width());
        if self.scoreboard {
            cells_wide += SCOREBOARD_CELLS;
        }
        if cells_wide * size > width || u16::from(grid.height()) * size > height {
            return Err(ConfigError::LayoutTooLarge);
        }

        if self.encoder_step < 2 {
            return Err(ConfigError::InvalidEncoderStep);
        }

        if self.initial_length == 0 || self.initial_length >= grid.height() {
            return Err(ConfigError::InvalidInitialLength);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_fit_128x64() {
        assert_eq!(GameConfig::bordered().validate(128, 64), Ok(()));
        assert_eq!(GameConfig::full_screen().validate(128, 64), Ok(()));
    }

    #[test]
    fn test_default_is_bordered() {
        assert_eq!(GameConfig::default(), GameConfig::bordered());
    }

    #[test]
    fn test_invalid_grid() {
        let config = GameConfig {
            grid_width: 0,
            ..GameConfig::bordered()
        };
        assert_eq!(config.validate(128, 64), Err(ConfigError::InvalidGrid));
    }

    #[test]
    fn test_zero_cell_size() {
        let config = GameConfig {
            cell_size: 0,
            ..GameConfig::bordered()
        };
        assert_eq!(config.validate(128, 64), Err(ConfigError::InvalidCellSize));
    }

    #[test]
    fn test_scoreboard_needs_room() {
        // Full-screen grid leaves no room for the scoreboard
        let config = GameConfig {
            scoreboard: true,
            ..GameConfig::full_screen()
        };
        assert_eq!(config.validate(128, 64), Err(ConfigError::LayoutTooLarge));

        let config = GameConfig {
            cell_size: 3,
            ..GameConfig::bordered()
        };
        assert_eq!(config.validate(128, 64), Err(ConfigError::LayoutTooLarge));
    }

    #[test]
    fn test_encoder_step() {
        let config = GameConfig {
            encoder_step: 1,
            ..GameConfig::bordered()
        };
        assert_eq!(config.validate(128, 64), Err(ConfigError::InvalidEncoderStep));
    }

    #[test]
    fn test_initial_length() {
        let too_long = GameConfig {
            initial_length: 32,
            ..GameConfig::bordered()
        };
        assert_eq!(too_long.validate(128, 64), Err(ConfigError::InvalidInitialLength));

        let empty = GameConfig {
            initial_length: 0,
            ..GameConfig::bordered()
        };
        assert_eq!(empty.validate(128, 64), Err(ConfigError::InvalidInitialLength));

        let column = GameConfig {
            grid_width: 1,
            grid_height: 3,
            scoreboard: false,
            initial_length: 3,
            ..GameConfig::bordered()
        };
        assert_eq!(column.validate(128, 64), Err(ConfigError::InvalidInitialLength));
    }
}
