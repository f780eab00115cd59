//! `DisplayAdapter` implementation for an SSD1306 panel

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::{Drawable, Point};
use embedded_graphics::text::{Baseline, Text};
use ophis_core::traits::{DisplayAdapter, DisplayError};

use crate::framebuffer::{FrameBuffer, HEIGHT, WIDTH};
use crate::ssd1306::Ssd1306;

/// Buffered SSD1306 display
///
/// Drawing only touches the framebuffer; [`DisplayAdapter::flush`] sends the
/// pages that changed since the previous flush.
pub struct Oled<I2C> {
    driver: Ssd1306<I2C>,
    buffer: FrameBuffer,
    initialized: bool,
}

impl<I2C> Oled<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    pub fn new(i2c: I2C) -> Self {
        Self {
            driver: Ssd1306::new(i2c),
            buffer: FrameBuffer::new(),
            initialized: false,
        }
    }

    /// Initialize the panel. The whole buffer is resent on the next flush.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.driver.init().map_err(|_| DisplayError::Bus)?;
        self.buffer.mark_all_dirty();
        self.initialized = true;
        Ok(())
    }

    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    pub fn release(self) -> I2C {
        self.driver.release()
    }
}

impl<I2C> DisplayAdapter for Oled<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn set_pixel(&mut self, x: u16, y: u16, on: bool) {
        self.buffer.set_pixel(usize::from(x), usize::from(y), on);
    }

    fn pixel(&self, x: u16, y: u16) -> bool {
        self.buffer.pixel(usize::from(x), usize::from(y))
    }

    fn fill(&mut self, on: bool) {
        self.buffer.fill(on);
    }

    fn draw_text(&mut self, text: &str, x: u16, y: u16, on: bool) {
        let color = if on { BinaryColor::On } else { BinaryColor::Off };
        let style = MonoTextStyle::new(&FONT_6X10, color);
        let position = Point::new(i32::from(x), i32::from(y));
        let _ = Text::with_baseline(text, position, style, Baseline::Top).draw(&mut self.buffer);
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }

        let mut pages = [0usize; 8];
        let mut count = 0;
        for page in self.buffer.dirty_pages() {
            pages[count] = page;
            count += 1;
        }

        for &page in &pages[..count] {
            self.driver
                .write_page(page, self.buffer.page(page))
                .map_err(|_| DisplayError::Bus)?;
            self.buffer.mark_clean(page);
        }
        Ok(())
    }

    fn dimensions(&self) -> (u16, u16) {
        (WIDTH as u16, HEIGHT as u16)
    }

    fn glyph_size(&self) -> (u16, u16) {
        let size = FONT_6X10.character_size;
        (size.width as u16, size.height as u16)
    }
}
