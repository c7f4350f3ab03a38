// src/search.rs - Incremental search state

use crate::cursor::Position;
use crate::line::Line;

/// Find every case-sensitive occurrence of `query` across `lines`, in
/// document order. Columns are character indices. An empty query matches
/// nothing.
pub fn scan(lines: &[Line], query: &str) -> Vec<Position> {
    let mut matches = Vec::new();
    if query.is_empty() {
        return matches;
    }
    for (row, line) in lines.iter().enumerate() {
        let content = line.content();
        for (byte_idx, _) in content.match_indices(query) {
            let col = content[..byte_idx].chars().count();
            matches.push(Position::new(row, col));
        }
    }
    matches
}

/// State for one incremental search session. The session inherits the
/// buffer's previous query so C-s C-s repeats the last search, but the
/// first character typed discards the inherited query and starts fresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    pub matches: Vec<Position>,
    /// Index of the active match within `matches`, clamped to its bounds.
    pub step: usize,
    /// Cursor position when the search began; restored on abort.
    pub saved: Position,
    fresh: bool,
}

impl SearchState {
    pub fn begin(inherited: String, at: Position, lines: &[Line]) -> Self {
        let mut state = Self {
            query: inherited,
            matches: Vec::new(),
            step: 0,
            saved: at,
            fresh: true,
        };
        state.rescan(lines);
        state
    }

    /// The match the cursor should sit on, if any.
    pub fn active(&self) -> Option<Position> {
        self.matches.get(self.step).copied()
    }

    /// Append one query character and rebuild the match list. Wipes the
    /// inherited query on the first keystroke of the session.
    pub fn push_char(&mut self, ch: char, lines: &[Line]) {
        if self.fresh {
            self.query.clear();
        }
        self.fresh = false;
        self.query.push(ch);
        self.rescan(lines);
    }

    /// Drop the last query character and rebuild the match list.
    pub fn pop_char(&mut self, lines: &[Line]) {
        self.fresh = false;
        self.query.pop();
        self.rescan(lines);
    }

    pub fn next(&mut self) {
        if self.step + 1 < self.matches.len() {
            self.step += 1;
        }
        self.fresh = false;
    }

    pub fn prev(&mut self) {
        self.step = self.step.saturating_sub(1);
        self.fresh = false;
    }

    /// Re-run the scan and point `step` at the first match at or after
    /// the position where the search started, so the session walks
    /// forward from the pre-search cursor.
    pub fn rescan(&mut self, lines: &[Line]) {
        self.matches = scan(lines, &self.query);
        self.step = self
            .matches
            .iter()
            .position(|&m| m >= self.saved)
            .unwrap_or(self.matches.len().saturating_sub(1));
    }
}
