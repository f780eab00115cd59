//! Mock hardware shared by the unit tests

use core::fmt::Write;

use heapless::{String, Vec};

use crate::traits::{DisplayAdapter, DisplayError, InputSource};

pub const WIDTH: usize = 128;
pub const HEIGHT: usize = 64;
pub const GLYPH: (u16, u16) = (6, 10);

/// Text drawn on the mock display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextCall {
    pub text: String<24>,
    pub x: u16,
    pub y: u16,
}

/// In-memory 128x64 display that records text calls
pub struct MockDisplay {
    pixels: [[bool; WIDTH]; HEIGHT],
    pub texts: Vec<TextCall, 32>,
    pub flushes: u32,
    pub fail_flush: bool,
}

impl MockDisplay {
    pub fn new() -> Self {
        Self {
            pixels: [[false; WIDTH]; HEIGHT],
            texts: Vec::new(),
            flushes: 0,
            fail_flush: false,
        }
    }

    pub fn lit_count(&self) -> usize {
        self.pixels
            .iter()
            .map(|row| row.iter().filter(|p| **p).count())
            .sum()
    }

    pub fn has_text(&self, text: &str) -> bool {
        self.texts.iter().any(|call| call.text.as_str() == text)
    }

    pub fn text(&self, text: &str) -> Option<&TextCall> {
        self.texts.iter().find(|call| call.text.as_str() == text)
    }
}

impl DisplayAdapter for MockDisplay {
    fn set_pixel(&mut self, x: u16, y: u16, on: bool) {
        if (x as usize) < WIDTH && (y as usize) < HEIGHT {
            self.pixels[y as usize][x as usize] = on;
        }
    }

    fn pixel(&self, x: u16, y: u16) -> bool {
        (x as usize) < WIDTH && (y as usize) < HEIGHT && self.pixels[y as usize][x as usize]
    }

    fn fill(&mut self, on: bool) {
        self.pixels = [[on; WIDTH]; HEIGHT];
        if !on {
            self.texts.clear();
        }
    }

    fn draw_text(&mut self, text: &str, x: u16, y: u16, _on: bool) {
        let mut owned = String::new();
        let _ = write!(owned, "{}", text);
        let _ = self.texts.push(TextCall { text: owned, x, y });
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        if self.fail_flush {
            return Err(DisplayError::Bus);
        }
        self.flushes += 1;
        Ok(())
    }

    fn dimensions(&self) -> (u16, u16) {
        (WIDTH as u16, HEIGHT as u16)
    }

    fn glyph_size(&self) -> (u16, u16) {
        GLYPH
    }
}

/// Encoder that returns a settable value
pub struct MockInput {
    pub value: u16,
    pub reads: u32,
}

impl MockInput {
    pub fn new(value: u16) -> Self {
        Self { value, reads: 0 }
    }
}

impl InputSource for MockInput {
    fn read(&mut self) -> u16 {
        self.reads += 1;
        self.value
    }
}
