//! Screen buffer types
//!
//! Provides a character-cell buffer the size of the workstation LCD.

use crate::backend::{check_origin, CharDisplay, DisplayError};

/// Number of character rows on the station display
pub const SCREEN_ROWS: usize = 2;

/// Number of character columns on the station display
pub const SCREEN_COLS: usize = 16;

/// In-memory 16x2 character display
///
/// Behaves like the LCD as far as the workstation can tell: writes clip
/// at the end of the row and `clear` blanks every cell. Non-ASCII
/// characters are stored as `?`, matching what the HD44780 ROM can show.
#[derive(Clone)]
pub struct Screen {
    /// Cell contents, one ASCII byte per cell
    cells: [[u8; SCREEN_COLS]; SCREEN_ROWS],
    /// Hardware cursor visibility
    cursor_visible: bool,
    /// Number of clear commands received
    clears: u32,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Create a blank screen
    pub const fn new() -> Self {
        Self {
            cells: [[b' '; SCREEN_COLS]; SCREEN_ROWS],
            cursor_visible: true,
            clears: 0,
        }
    }

    /// Get the full content of a row
    pub fn line(&self, row: usize) -> &str {
        match self.cells.get(row) {
            // Cells only ever hold ASCII
            Some(cells) => core::str::from_utf8(cells).unwrap_or(""),
            None => "",
        }
    }

    /// Get `len` characters starting at (row, col)
    pub fn text_at(&self, row: usize, col: usize, len: usize) -> &str {
        let line = self.line(row);
        let start = col.min(line.len());
        let end = (col + len).min(line.len());
        &line[start..end]
    }

    /// Check whether every cell is blank
    pub fn is_blank(&self) -> bool {
        self.cells.iter().flatten().all(|&c| c == b' ')
    }

    /// Number of times the screen has been cleared
    pub fn clear_count(&self) -> u32 {
        self.clears
    }

    /// Check whether the hardware cursor is shown
    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }
}

impl CharDisplay for Screen {
    fn clear(&mut self) -> Result<(), DisplayError> {
        for row in &mut self.cells {
            row.fill(b' ');
        }
        self.clears = self.clears.wrapping_add(1);
        Ok(())
    }

    fn write_str(&mut self, row: u8, col: u8, text: &str) -> Result<(), DisplayError> {
        check_origin(self.dimensions(), row, col)?;

        let cells = &mut self.cells[row as usize][col as usize..];
        for (cell, ch) in cells.iter_mut().zip(text.chars()) {
            *cell = if ch.is_ascii() { ch as u8 } else { b'?' };
        }
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> Result<(), DisplayError> {
        self.cursor_visible = visible;
        Ok(())
    }

    fn dimensions(&self) -> (u8, u8) {
        (SCREEN_COLS as u8, SCREEN_ROWS as u8)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Screen {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Screen[{}|{}]", self.line(0), self.line(1));
    }
}
