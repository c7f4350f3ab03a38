// src/cursor.rs - Cursor position and the remembered column

/// A position in the buffer, ordered by (row, col) so selection ranges
/// normalize with a plain comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// The buffer cursor. `wish_col` is the last explicitly chosen column:
/// vertical moves clamp the real column to the target line but leave the
/// wish untouched, so crossing a short line and coming back restores the
/// original column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
    pub wish_col: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self {
            row: 0,
            col: 0,
            wish_col: 0,
        }
    }

    pub fn pos(&self) -> Position {
        Position::new(self.row, self.col)
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}
