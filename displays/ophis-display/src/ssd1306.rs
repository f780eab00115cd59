//! SSD1306 OLED Display Driver
//!
//! Blocking driver for 128x64 SSD1306-based OLED displays via I2C, using
//! page addressing mode. The driver owns no pixels; callers push whole pages.

use crate::framebuffer::{PAGES, WIDTH};

/// SSD1306 I2C address (typically 0x3C or 0x3D)
pub const SSD1306_ADDR: u8 = 0x3C;

/// Control byte: the following bytes are commands
const CONTROL_COMMAND: u8 = 0x00;
/// Control byte: the following bytes are display RAM data
const CONTROL_DATA: u8 = 0x40;

/// SSD1306 commands
#[allow(dead_code)]
pub(crate) mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const DISPLAY_RAM: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const SET_MEMORY_MODE: u8 = 0x20;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// Initialization sequence for a 128x64 panel with internal charge pump
const INIT_SEQUENCE: &[u8] = &[
    cmd::DISPLAY_OFF,
    cmd::SET_CLOCK_DIV,
    0x80, // Default clock
    cmd::SET_MUX_RATIO,
    0x3F, // 64 lines
    cmd::SET_DISPLAY_OFFSET,
    0x00,
    cmd::SET_START_LINE,
    cmd::SET_CHARGE_PUMP,
    0x14, // Enable charge pump
    cmd::SET_MEMORY_MODE,
    0x02,                  // Page addressing
    cmd::SET_SEG_REMAP,    // Flip horizontally
    cmd::SET_COM_SCAN_DEC, // Flip vertically
    cmd::SET_COM_PINS,
    0x12, // Alternative COM config
    cmd::SET_CONTRAST,
    0xCF, // High contrast
    cmd::SET_PRECHARGE,
    0xF1,
    cmd::SET_VCOM_DETECT,
    0x40,
    cmd::DISPLAY_RAM,
    cmd::SET_NORMAL,
    cmd::DISPLAY_ON,
];

/// SSD1306 OLED driver
pub struct Ssd1306<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> Ssd1306<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Create a new driver at the default address
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, SSD1306_ADDR)
    }

    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Initialize the display
    pub fn init(&mut self) -> Result<(), I2C::Error> {
        for &c in INIT_SEQUENCE {
            self.command(c)?;
        }
        Ok(())
    }

    /// Send a command to the display
    fn command(&mut self, cmd: u8) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, &[CONTROL_COMMAND, cmd])
    }

    /// Write one page of column data
    pub fn write_page(&mut self, page: usize, data: &[u8; WIDTH]) -> Result<(), I2C::Error> {
        let page = page.min(PAGES - 1) as u8;
        self.command(cmd::SET_PAGE_ADDR | page)?;
        self.command(cmd::SET_LOW_COLUMN)?;
        self.command(cmd::SET_HIGH_COLUMN)?;

        let mut buf = [0u8; WIDTH + 1];
        buf[0] = CONTROL_DATA;
        buf[1..].copy_from_slice(data);
        self.i2c.write(self.address, &buf)
    }

    /// Set display contrast (0-255)
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), I2C::Error> {
        self.command(cmd::SET_CONTRAST)?;
        self.command(contrast)
    }

    /// Turn display on/off
    pub fn set_display_on(&mut self, on: bool) -> Result<(), I2C::Error> {
        if on {
            self.command(cmd::DISPLAY_ON)
        } else {
            self.command(cmd::DISPLAY_OFF)
        }
    }

    /// Invert display colors
    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), I2C::Error> {
        if inverted {
            self.command(cmd::SET_INVERSE)
        } else {
            self.command(cmd::SET_NORMAL)
        }
    }

    /// Give back the bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct MockError;

    impl embedded_hal::i2c::Error for MockError {
        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    /// I2C bus that records every write
    #[derive(Default)]
    pub struct RecordingI2c {
        pub writes: Vec<(u8, Vec<u8>)>,
        /// Fail once this many writes have succeeded
        pub fail_after: Option<usize>,
    }

    impl RecordingI2c {
        /// Single command bytes sent, in order
        pub fn commands(&self) -> Vec<u8> {
            self.writes
                .iter()
                .filter(|(_, bytes)| bytes.len() == 2 && bytes[0] == 0x00)
                .map(|(_, bytes)| bytes[1])
                .collect()
        }

        /// Data payloads sent, without the control byte
        pub fn data(&self) -> Vec<&[u8]> {
            self.writes
                .iter()
                .filter(|(_, bytes)| bytes.first() == Some(&0x40))
                .map(|(_, bytes)| &bytes[1..])
                .collect()
        }
    }

    impl ErrorType for RecordingI2c {
        type Error = MockError;
    }

    impl I2c for RecordingI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            for op in operations {
                match op {
                    Operation::Write(bytes) => {
                        if self.fail_after == Some(self.writes.len()) {
                            return Err(MockError);
                        }
                        self.writes.push((address, bytes.to_vec()));
                    }
                    Operation::Read(buf) => buf.fill(0),
                }
            }
            Ok(())
        }
    }
}
