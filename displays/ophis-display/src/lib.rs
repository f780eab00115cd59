//! Display support for the Ophis rotary snake
//!
//! - [`FrameBuffer`]: page-organised 128x64 monochrome buffer with dirty
//!   page tracking, usable as an `embedded-graphics` draw target
//! - [`Ssd1306`]: blocking I2C driver for SSD1306 panels
//! - [`Oled`]: the two combined behind `ophis_core::traits::DisplayAdapter`

#![cfg_attr(not(test), no_std)]

pub mod framebuffer;
pub mod oled;
pub mod ssd1306;

pub use framebuffer::FrameBuffer;
pub use oled::Oled;
pub use ssd1306::Ssd1306;
