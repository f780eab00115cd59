//! Page-organised monochrome framebuffer
//!
//! Pixels are stored the way SSD1306-class controllers expect them: eight
//! pages of 8 rows each, one byte per column with bit 0 at the top row of the
//! page. Every page that changes since the last flush is marked dirty so the
//! driver only has to resend those.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::{DrawTarget, OriginDimensions, Pixel, Size};

/// Display width in pixels
pub const WIDTH: usize = 128;
/// Display height in pixels
pub const HEIGHT: usize = 64;
/// Number of 8-row pages
pub const PAGES: usize = HEIGHT / 8;

pub struct FrameBuffer {
    pages: [[u8; WIDTH]; PAGES],
    /// Bit n set when page n differs from the panel
    dirty: u8,
}

impl FrameBuffer {
    /// Create a blank buffer with every page dirty
    pub const fn new() -> Self {
        Self {
            pages: [[0; WIDTH]; PAGES],
            dirty: 0xFF,
        }
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) {
        if x >= WIDTH || y >= HEIGHT {
            return;
        }
        let page = y / 8;
        let mask = 1u8 << (y % 8);
        let byte = &mut self.pages[page][x];
        let updated = if on { *byte | mask } else { *byte & !mask };
        if updated != *byte {
            *byte = updated;
            self.dirty |= 1 << page;
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> bool {
        x < WIDTH && y < HEIGHT && self.pages[y / 8][x] & (1 << (y % 8)) != 0
    }

    /// Set every pixel; only pages whose contents change become dirty
    pub fn fill(&mut self, on: bool) {
        let value = if on { 0xFF } else { 0x00 };
        for (index, page) in self.pages.iter_mut().enumerate() {
            if page.iter().any(|&b| b != value) {
                page.fill(value);
                self.dirty |= 1 << index;
            }
        }
    }

    /// Raw column bytes of one page
    pub fn page(&self, page: usize) -> &[u8; WIDTH] {
        &self.pages[page.min(PAGES - 1)]
    }

    pub fn is_dirty(&self, page: usize) -> bool {
        page < PAGES && self.dirty & (1 << page) != 0
    }

    /// Mark every page as needing a resend
    pub fn mark_all_dirty(&mut self) {
        self.dirty = 0xFF;
    }

    pub fn mark_clean(&mut self, page: usize) {
        if page < PAGES {
            self.dirty &= !(1 << page);
        }
    }

    /// Iterate over the indices of dirty pages, top to bottom
    pub fn dirty_pages(&self) -> impl Iterator<Item = usize> + '_ {
        (0..PAGES).filter(move |&page| self.is_dirty(page))
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x < 0 || point.y < 0 {
                continue;
            }
            self.set_pixel(point.x as usize, point.y as usize, color.is_on());
        }
        Ok(())
    }
}
