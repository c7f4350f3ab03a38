// src/viewport.rs - The visible sub-rectangle of the document

/// Scroll offsets plus viewport dimensions. `track` is the one place the
/// offsets change in response to cursor motion; its boolean result tells
/// the caller whether a full repaint is needed or a single-line repaint
/// suffices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub h_scroll: usize,
    pub v_scroll: usize,
    pub width: usize,
    pub height: usize,
}

impl Viewport {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            h_scroll: 0,
            v_scroll: 0,
            width: width.max(1),
            height: height.max(1),
        }
    }

    /// Clamp the scroll offsets so `(row, col)` stays inside the visible
    /// window. Returns true when either offset actually moved.
    pub fn track(&mut self, row: usize, col: usize) -> bool {
        let (old_h, old_v) = (self.h_scroll, self.v_scroll);

        if row < self.v_scroll {
            self.v_scroll = row;
        } else if row >= self.v_scroll + self.height {
            self.v_scroll = row + 1 - self.height;
        }

        if col < self.h_scroll {
            self.h_scroll = col;
        } else if col >= self.h_scroll + self.width {
            self.h_scroll = col + 1 - self.width;
        }

        (self.h_scroll, self.v_scroll) != (old_h, old_v)
    }

    /// Place `row` in the middle of the window (the recenter command).
    pub fn center_on(&mut self, row: usize) {
        self.v_scroll = row.saturating_sub(self.height / 2);
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width.max(1);
        self.height = height.max(1);
    }

    /// Terminal cell for a buffer position currently in view.
    pub fn screen_pos(&self, row: usize, col: usize) -> (usize, usize) {
        (col - self.h_scroll, row - self.v_scroll)
    }

    pub fn contains_row(&self, row: usize) -> bool {
        row >= self.v_scroll && row < self.v_scroll + self.height
    }
}
