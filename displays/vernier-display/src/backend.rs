//! Display backend trait
//!
//! Defines the interface for character-cell displays.

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with the display controller
    Communication,
    /// Row or column outside the grid
    InvalidCoordinates,
    /// Display not initialized
    NotInitialized,
}

/// Character display trait
///
/// A fixed grid of character cells addressed by (row, column).
pub trait CharDisplay {
    /// Clear every cell and home the cursor
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Write text starting at the given cell
    ///
    /// - `row`: Row number (0-based)
    /// - `col`: Column number (0-based)
    /// - `text`: ASCII text; anything past the end of the row is dropped
    fn write_str(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError>;

    /// Write a single character at the given cell
    fn write_char(&mut self, row: u8, col: u8, ch: char) -> Result<(), DisplayError> {
        let mut buf = [0u8; 4];
        self.write_str(row, col, ch.encode_utf8(&mut buf))
    }

    /// Show or hide the hardware cursor
    fn set_cursor_visible(&mut self, visible: bool) -> Result<(), DisplayError>;

    /// Get the display dimensions
    ///
    /// Returns (columns, rows) in character units
    fn dimensions(&self) -> (u8, u8);
}

/// Check that a write starting at (row, col) lands inside the grid
pub fn check_origin(dimensions: (u8, u8), row: u8, col: u8) -> Result<(), DisplayError> {
    let (cols, rows) = dimensions;
    if row >= rows || col >= cols {
        return Err(DisplayError::InvalidCoordinates);
    }
    Ok(())
}
