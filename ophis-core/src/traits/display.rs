//! Display adapter trait for monochrome pixel displays

/// Errors that can occur pushing pixels to the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus transfer failed
    Bus,
    /// Display not initialized
    NotInitialized,
}

/// Trait for a buffered monochrome display
///
/// Drawing operations only touch the buffer and cannot fail; `flush` pushes
/// the buffer to the device. The game never reads pixels back for its own
/// logic.
pub trait DisplayAdapter {
    /// Set a single pixel. Out-of-range coordinates are ignored.
    fn set_pixel(&mut self, x: u16, y: u16, on: bool);

    /// Read a pixel from the buffer. Out-of-range coordinates read as off.
    fn pixel(&self, x: u16, y: u16) -> bool;

    /// Set every pixel
    fn fill(&mut self, on: bool);

    /// Draw text with its top-left corner at (x, y)
    fn draw_text(&mut self, text: &str, x: u16, y: u16, on: bool);

    /// Push the buffer to the physical device
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Display size in pixels (width, height)
    fn dimensions(&self) -> (u16, u16);

    /// Size of one character cell of the text font in pixels (width, height)
    fn glyph_size(&self) -> (u16, u16);
}

/// Helper trait for drawing common shapes
pub trait DisplayExt: DisplayAdapter {
    /// Set every pixel of a rectangle
    fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, on: bool) {
        for py in y..y.saturating_add(height) {
            for px in x..x.saturating_add(width) {
                self.set_pixel(px, py, on);
            }
        }
    }

    /// Width of `text` in pixels
    fn text_width(&self, text: &str) -> u16 {
        let (glyph_width, _) = self.glyph_size();
        (text.chars().count() as u16).saturating_mul(glyph_width)
    }

    /// Draw text horizontally centred on the display at row `y`
    fn draw_text_centered(&mut self, text: &str, y: u16, on: bool) {
        let (width, _) = self.dimensions();
        let x = width.saturating_sub(self.text_width(text)) / 2;
        self.draw_text(text, x, y, on);
    }
}

// Blanket implementation for all DisplayAdapter types
impl<T: DisplayAdapter + ?Sized> DisplayExt for T {}
