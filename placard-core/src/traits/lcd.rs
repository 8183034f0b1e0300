//! Character LCD abstraction
//!
//! A cursor-addressed character grid with a clear-and-rewrite render
//! model. Implementations handle the specifics of the panel interface.

/// Errors that can occur when driving the LCD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LcdError {
    /// Communication error with the panel
    Communication,
    /// Cursor position outside the character grid
    InvalidPosition,
}

/// A character-cell display addressed by (column, row)
pub trait CharacterLcd {
    /// Blank the entire display and return the cursor to (0, 0)
    fn clear(&mut self) -> Result<(), LcdError>;

    /// Move the cursor to the given column and row (both zero-based)
    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), LcdError>;

    /// Write raw bytes at the cursor, advancing it one cell per byte.
    ///
    /// Bytes are passed through untranslated; what a non-ASCII value
    /// looks like is up to the panel's character ROM.
    fn write_bytes(&mut self, data: &[u8]) -> Result<(), LcdError>;

    /// Display dimensions as (columns, rows)
    fn dimensions(&self) -> (u8, u8);
}
