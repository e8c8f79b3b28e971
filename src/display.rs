//! Character display abstraction.
//!
//! The menu renders through [`CharDisplay`]; the firmware implements it on
//! the HD44780 LCD, host code and tests use [`TextDisplay`], an in-memory
//! 16x2 frame that mirrors what the panel would show.

use crate::config::{DISPLAY_COLUMNS, DISPLAY_ROWS};
use crate::error::Error;

const COLS: usize = DISPLAY_COLUMNS as usize;
const ROWS: usize = DISPLAY_ROWS as usize;

/// Write-only character display addressed by (column, row).
///
/// Writes are immediate and order-preserving; the menu treats every call
/// as succeeding.
pub trait CharDisplay {
    /// Move the write position to `column`, `row` (0-based).
    fn set_cursor(&mut self, column: u8, row: u8);
    /// Write `text` starting at the current position.
    fn write_text(&mut self, text: &str);
    /// Blank the whole display and home the cursor.
    fn clear(&mut self);
}

impl<T: CharDisplay + ?Sized> CharDisplay for &mut T {
    fn set_cursor(&mut self, column: u8, row: u8) {
        (**self).set_cursor(column, row)
    }

    fn write_text(&mut self, text: &str) {
        (**self).write_text(text)
    }

    fn clear(&mut self) {
        (**self).clear()
    }
}

/// Check that a cursor position lies on the display.
pub fn check_cursor(column: u8, row: u8) -> Result<(), Error> {
    if column < DISPLAY_COLUMNS && row < DISPLAY_ROWS {
        Ok(())
    } else {
        Err(Error::CursorOutOfRange { column, row })
    }
}

/// In-memory character frame with the same geometry as the LCD.
///
/// Text running past the last column is clipped, like the visible window
/// of the panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextDisplay {
    cells: [[u8; COLS]; ROWS],
    column: usize,
    row: usize,
    clears: u32,
}

impl TextDisplay {
    pub const fn new() -> Self {
        Self {
            cells: [[b' '; COLS]; ROWS],
            column: 0,
            row: 0,
            clears: 0,
        }
    }

    /// Move the cursor, rejecting positions outside the grid.
    pub fn try_set_cursor(&mut self, column: u8, row: u8) -> Result<(), Error> {
        check_cursor(column, row)?;
        self.column = column as usize;
        self.row = row as usize;
        Ok(())
    }

    /// Contents of one row, padded with spaces. Empty for a missing row.
    pub fn row(&self, row: usize) -> &str {
        self.cells
            .get(row)
            .and_then(|cells| core::str::from_utf8(cells).ok())
            .unwrap_or("")
    }

    /// Number of times the display has been cleared.
    pub fn clear_count(&self) -> u32 {
        self.clears
    }

    fn put(&mut self, byte: u8) {
        if self.row < ROWS && self.column < COLS {
            self.cells[self.row][self.column] = byte;
        }
        self.column = self.column.saturating_add(1);
    }
}

impl Default for TextDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl CharDisplay for TextDisplay {
    fn set_cursor(&mut self, column: u8, row: u8) {
        if let Err(e) = self.try_set_cursor(column, row) {
            warn!("TextDisplay: {}", e);
            // Park off-screen so following writes are discarded.
            self.column = COLS;
            self.row = ROWS;
        }
    }

    fn write_text(&mut self, text: &str) {
        for byte in text.bytes() {
            // The LCD character ROM only covers printable ASCII.
            let byte = if byte.is_ascii_graphic() || byte == b' ' {
                byte
            } else {
                b'?'
            };
            self.put(byte);
        }
    }

    fn clear(&mut self) {
        self.cells = [[b' '; COLS]; ROWS];
        self.column = 0;
        self.row = 0;
        self.clears = self.clears.wrapping_add(1);
    }
}
