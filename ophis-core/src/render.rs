//! Incremental renderer
//!
//! Maps grid cells onto square pixel blocks and draws the side scoreboard
//! and the end screen. Only changed cells are drawn during play; the caller
//! flushes once per tick.

use core::fmt::Write;

use heapless::String;

use crate::config::{ConfigError, GameConfig};
use crate::game::GameState;
use crate::grid::{Cell, Grid};
use crate::traits::{DisplayAdapter, DisplayExt};

/// "HI" glyph drawn in cells right of the border
const HI_GLYPH: [[u8; 5]; 3] = [
    [1, 0, 1, 0, 1],
    [1, 1, 1, 0, 1],
    [1, 0, 1, 0, 1],
];

/// Glyph offset from the border, in cells
const HI_OFFSET: (u16, u16) = (2, 2);

/// Top pixel row of the score readout
const SCORE_Y: u16 = 13;

/// Draws game state onto a [`DisplayAdapter`]
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    grid: Grid,
    cell_size: u16,
    scoreboard: bool,
}

impl Renderer {
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        if config.cell_size == 0 {
            return Err(ConfigError::InvalidCellSize);
        }
        Ok(Self {
            grid: config.grid()?,
            cell_size: u16::from(config.cell_size),
            scoreboard: config.scoreboard,
        })
    }

    /// Set or clear one grid cell
    pub fn draw_cell<D: DisplayAdapter>(&self, display: &mut D, cell: Cell, on: bool) {
        self.fill_block(display, u16::from(cell.x), u16::from(cell.y), on);
    }

    fn fill_block<D: DisplayAdapter>(&self, display: &mut D, col: u16, row: u16, on: bool) {
        let size = self.cell_size;
        display.fill_rect(col * size, row * size, size, size, on);
    }

    /// Draw the static parts of the layout: border and "HI" glyph
    pub fn draw_frame<D: DisplayAdapter>(&self, display: &mut D) {
        if !self.scoreboard {
            return;
        }

        let border = u16::from(self.grid.width());
        for row in 0..u16::from(self.grid.height()) {
            self.fill_block(display, border, row, true);
        }

        for (dy, line) in HI_GLYPH.iter().enumerate() {
            for (dx, &bit) in line.iter().enumerate() {
                self.fill_block(
                    display,
                    border + HI_OFFSET.0 + dx as u16,
                    HI_OFFSET.1 + dy as u16,
                    bit != 0,
                );
            }
        }
    }

    /// Draw every snake cell and the food
    pub fn draw_board<D: DisplayAdapter>(&self, display: &mut D, state: &GameState) {
        for &cell in state.snake().iter() {
            self.draw_cell(display, cell, true);
        }
        self.draw_cell(display, state.food(), true);
    }

    /// Redraw the score readout next to the grid
    pub fn render_scoreboard<D: DisplayAdapter>(&self, display: &mut D, score: u16) {
        if !self.scoreboard {
            return;
        }

        let x = (u16::from(self.grid.width()) + 1) * self.cell_size + 1;
        let (width, _) = display.dimensions();
        let (_, glyph_height) = display.glyph_size();
        display.fill_rect(x, SCORE_Y, width.saturating_sub(x), glyph_height, false);

        let mut digits: String<8> = String::new();
        let _ = write!(digits, "{}", score);
        display.draw_text(&digits, x, SCORE_Y, true);
    }

    /// Clear the screen and draw the end-of-game message
    pub fn render_game_over<D: DisplayAdapter>(&self, display: &mut D, score: u16) {
        display.fill(false);

        let (_, height) = display.dimensions();
        let (_, glyph_height) = display.glyph_size();
        let top = height / 8;
        let bottom = height / 2 + 2;

        let mut hi: String<16> = String::new();
        let _ = write!(hi, "HI: {}", score);

        display.draw_text_centered("YOU LOST", top, true);
        display.draw_text_centered(&hi, top + glyph_height + 2, true);
        display.draw_text_centered("Spin to", bottom, true);
        display.draw_text_centered("try again", bottom + glyph_height + 2, true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;
    use crate::testing::MockDisplay;

    fn bordered() -> Renderer {
        Renderer::new(&GameConfig::bordered()).unwrap()
    }

    #[test]
    fn test_cell_maps_to_block() {
        let mut display = MockDisplay::new();
        bordered().draw_cell(&mut display, Cell::new(3, 4), true);

        assert!(display.pixel(6, 8));
        assert!(display.pixel(7, 8));
        assert!(display.pixel(6, 9));
        assert!(display.pixel(7, 9));
        assert_eq!(display.lit_count(), 4);

        bordered().draw_cell(&mut display, Cell::new(3, 4), false);
        assert_eq!(display.lit_count(), 0);
    }

    #[test]
    fn test_full_screen_cell_is_one_pixel() {
        let renderer = Renderer::new(&GameConfig::full_screen()).unwrap();
        let mut display = MockDisplay::new();
        renderer.draw_cell(&mut display, Cell::new(127, 63), true);
        assert!(display.pixel(127, 63));
        assert_eq!(display.lit_count(), 1);
    }

    #[test]
    fn test_frame_border_and_glyph() {
        let mut display = MockDisplay::new();
        bordered().draw_frame(&mut display);

        // Border column at cell x = 54 -> pixels 108..110
        for y in 0..64 {
            assert!(display.pixel(108, y));
            assert!(display.pixel(109, y));
        }
        // Top-left of the "HI" glyph at cell (56, 2)
        assert!(display.pixel(112, 4));
        // Gap in the glyph at cell (57, 2)
        assert!(!display.pixel(114, 4));
        // Nothing inside the playfield
        assert!(!display.pixel(0, 0));
        assert!(!display.pixel(107, 63));
    }

    #[test]
    fn test_full_screen_has_no_frame() {
        let renderer = Renderer::new(&GameConfig::full_screen()).unwrap();
        let mut display = MockDisplay::new();
        renderer.draw_frame(&mut display);
        renderer.render_scoreboard(&mut display, 12);
        assert_eq!(display.lit_count(), 0);
        assert!(display.texts.is_empty());
    }

    #[test]
    fn test_scoreboard_clears_previous_digits() {
        let mut display = MockDisplay::new();
        // Stale pixel inside the score box
        display.set_pixel(120, 15, true);

        bordered().render_scoreboard(&mut display, 42);

        assert!(!display.pixel(120, 15));
        let call = display.text("42").unwrap();
        assert_eq!((call.x, call.y), (111, 13));
    }

    #[test]
    fn test_scoreboard_keeps_frame() {
        let mut display = MockDisplay::new();
        let renderer = bordered();
        renderer.draw_frame(&mut display);
        let lit = display.lit_count();
        renderer.render_scoreboard(&mut display, 0);
        assert_eq!(display.lit_count(), lit);
    }

    #[test]
    fn test_game_over_screen() {
        let mut display = MockDisplay::new();
        display.fill(true);

        bordered().render_game_over(&mut display, 7);

        assert_eq!(display.lit_count(), 0);
        assert!(display.has_text("YOU LOST"));
        assert!(display.has_text("HI: 7"));
        assert!(display.has_text("Spin to"));
        assert!(display.has_text("try again"));

        // 8 glyphs of 6 px centred on 128 px
        let call = display.text("YOU LOST").unwrap();
        assert_eq!(call.x, 40);
        assert_eq!(call.y, 8);
    }

    #[test]
    fn test_draw_board() {
        let grid = Grid::new(54, 32).unwrap();
        let state = GameState::from_parts(
            grid,
            &[Cell::new(0, 0), Cell::new(1, 0)],
            Direction::Right,
            Cell::new(10, 10),
            2,
        )
        .unwrap();
        let mut display = MockDisplay::new();
        bordered().draw_board(&mut display, &state);
        assert_eq!(display.lit_count(), 3 * 4);
        assert!(display.pixel(20, 20));
    }
}
