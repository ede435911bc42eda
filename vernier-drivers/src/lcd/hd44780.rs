//! HD44780 character LCD on a PCF8574 I2C backpack
//!
//! The backpack maps the expander's 8 output bits onto the LCD bus:
//!
//! | Bit | Signal |
//! |-----|--------|
//! | 7-4 | D7-D4 |
//! | 3 | Backlight |
//! | 2 | EN |
//! | 1 | RW (held low) |
//! | 0 | RS |
//!
//! The controller runs in 4-bit mode, so every byte goes out as two
//! nibbles, each latched by a pulse on EN.

use embedded_hal::delay::DelayNs;
use vernier_display::backend::check_origin;
use vernier_display::{CharDisplay, DisplayError};
use vernier_hal::I2cBus;

/// Usual address of a PCF8574 backpack with all address pads open
pub const DEFAULT_ADDRESS: u8 = 0x27;

/// Expander bits
pub mod bits {
    /// Backlight on
    pub const BACKLIGHT: u8 = 0x08;
    /// Enable strobe
    pub const ENABLE: u8 = 0x04;
    /// Register select: set for data, clear for commands
    pub const RS: u8 = 0x01;
}

/// Controller commands
pub mod cmd {
    /// Clear display, cursor home
    pub const CLEAR: u8 = 0x01;
    /// Increment address, no shift
    pub const ENTRY_MODE: u8 = 0x06;
    /// Display on, cursor off, blink off
    pub const DISPLAY_ON: u8 = 0x0C;
    /// Cursor bit for `DISPLAY_ON`
    pub const CURSOR_ON: u8 = 0x02;
    /// 4-bit bus, two lines, 5x8 font
    pub const FUNCTION_SET: u8 = 0x28;
    /// Set DDRAM address
    pub const SET_DDRAM: u8 = 0x80;
}

/// DDRAM address of the first cell of each row
const ROW_OFFSETS: [u8; 2] = [0x00, 0x40];

const COLS: u8 = 16;
const ROWS: u8 = 2;

const POWER_ON_DELAY_MS: u32 = 50;
const INIT_NIBBLE_DELAY_MS: u32 = 5;
const COMMAND_DELAY_US: u32 = 50;
const CLEAR_DELAY_MS: u32 = 2;

/// 16x2 HD44780 LCD
pub struct Hd44780<B, D> {
    bus: B,
    delay: D,
    address: u8,
    initialized: bool,
}

impl<B: I2cBus, D: DelayNs> Hd44780<B, D> {
    /// Create a driver; call [`init`](Self::init) before use
    pub fn new(bus: B, delay: D, address: u8) -> Self {
        Self {
            bus,
            delay,
            address,
            initialized: false,
        }
    }

    /// Run the 4-bit initialization sequence
    ///
    /// Leaves the display on, cleared, with the cursor hidden.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.delay.delay_ms(POWER_ON_DELAY_MS);

        // Three times 8-bit mode, whatever state the controller woke up in
        for _ in 0..3 {
            self.pulse(0x30 | bits::BACKLIGHT)?;
            self.delay.delay_ms(INIT_NIBBLE_DELAY_MS);
        }

        // Switch to 4-bit mode
        self.pulse(0x20 | bits::BACKLIGHT)?;
        self.delay.delay_ms(INIT_NIBBLE_DELAY_MS);

        self.command(cmd::FUNCTION_SET)?;
        self.command(cmd::DISPLAY_ON)?;
        self.command(cmd::ENTRY_MODE)?;
        self.command(cmd::CLEAR)?;
        self.delay.delay_ms(CLEAR_DELAY_MS);

        self.initialized = true;
        Ok(())
    }

    /// Check if `init` has completed
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Release the bus and delay
    pub fn release(self) -> (B, D) {
        (self.bus, self.delay)
    }

    fn ready(&self) -> Result<(), DisplayError> {
        if self.initialized {
            Ok(())
        } else {
            Err(DisplayError::NotInitialized)
        }
    }

    /// Latch one expander value with an EN pulse
    fn pulse(&mut self, value: u8) -> Result<(), DisplayError> {
        self.bus
            .write(self.address, &[value | bits::ENABLE])
            .map_err(|_| DisplayError::Communication)?;
        self.delay.delay_us(1);
        self.bus
            .write(self.address, &[value & !bits::ENABLE])
            .map_err(|_| DisplayError::Communication)
    }

    fn write_byte(&mut self, byte: u8, rs: u8) -> Result<(), DisplayError> {
        let high = byte & 0xF0;
        let low = (byte << 4) & 0xF0;
        for nibble in [high, low] {
            self.pulse(nibble | bits::BACKLIGHT | rs)?;
        }
        self.delay.delay_us(COMMAND_DELAY_US);
        Ok(())
    }

    fn command(&mut self, command: u8) -> Result<(), DisplayError> {
        self.write_byte(command, 0)
    }

    fn data(&mut self, byte: u8) -> Result<(), DisplayError> {
        self.write_byte(byte, bits::RS)
    }

    fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), DisplayError> {
        let offset = ROW_OFFSETS
            .get(row as usize)
            .ok_or(DisplayError::InvalidCoordinates)?;
        self.command(cmd::SET_DDRAM | (col + offset))
    }
}

impl<B: I2cBus, D: DelayNs> CharDisplay for Hd44780<B, D> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.ready()?;
        self.command(cmd::CLEAR)?;
        self.delay.delay_ms(CLEAR_DELAY_MS);
        Ok(())
    }

    fn write_str(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        self.ready()?;
        check_origin(self.dimensions(), row, col)?;
        self.set_cursor(row, col)?;

        for ch in text.chars().take(usize::from(COLS - col)) {
            // The character ROM only covers ASCII reliably
            let byte = if ch.is_ascii() { ch as u8 } else { b'?' };
            self.data(byte)?;
        }
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> Result<(), DisplayError> {
        self.ready()?;
        let cursor = if visible { cmd::CURSOR_ON } else { 0 };
        self.command(cmd::DISPLAY_ON | cursor)
    }

    fn dimensions(&self) -> (u8, u8) {
        (COLS, ROWS)
    }
}
