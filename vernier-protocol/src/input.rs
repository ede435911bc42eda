//! Inbound console bytes

/// Terminator for a badge entry
pub const CARRIAGE_RETURN: u8 = 0x0D;

/// Character echoed in place of each accepted badge digit
pub const MASK_CHAR: u8 = b'*';

/// Classification of a byte received on the console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConsoleInput {
    /// Decimal digit, carried as its ASCII byte
    Digit(u8),
    /// Carriage return, ends the current entry
    Enter,
    /// Anything else (line feeds, letters, control bytes)
    Other(u8),
}

impl ConsoleInput {
    /// Classify a received byte
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            b'0'..=b'9' => ConsoleInput::Digit(byte),
            CARRIAGE_RETURN => ConsoleInput::Enter,
            other => ConsoleInput::Other(other),
        }
    }
}
