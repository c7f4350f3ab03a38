// src/line.rs - A single line of text, terminator included

/// One line of buffer text. The trailing newline is stored as the line's
/// last character, so a line is never empty: the shortest possible line
/// is `"\n"` and every column operation is bounds-checked against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    text: String,
}

impl Line {
    /// A line holding nothing but its terminator.
    pub fn empty() -> Self {
        Self {
            text: String::from("\n"),
        }
    }

    /// Build a line from raw text, appending the terminator if the input
    /// lacks one. The input must not contain an interior newline.
    pub fn from_text(text: &str) -> Self {
        debug_assert!(!text[..text.len().saturating_sub(1)].contains('\n'));
        let mut text = text.to_string();
        if !text.ends_with('\n') {
            text.push('\n');
        }
        Self { text }
    }

    /// Full text of the line, terminator included.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The line's text without its terminator.
    pub fn content(&self) -> &str {
        &self.text[..self.text.len() - 1]
    }

    /// Number of characters in the line, terminator included. Always >= 1.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        false // The terminator is always present.
    }

    /// True when the line holds no printing characters.
    pub fn is_blank(&self) -> bool {
        self.content().trim().is_empty()
    }

    pub fn char_at(&self, col: usize) -> Option<char> {
        self.text.chars().nth(col)
    }

    /// Byte offset of the character at `col`.
    fn byte_of(&self, col: usize) -> usize {
        self.text
            .char_indices()
            .nth(col)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// Insert a single character at `col`, shifting the rest right.
    pub fn insert(&mut self, col: usize, ch: char) {
        debug_assert!(col < self.len());
        debug_assert_ne!(ch, '\n');
        let at = self.byte_of(col);
        self.text.insert(at, ch);
    }

    /// Remove and return the character at `col`. The terminator itself is
    /// never removed through this path; line joins go through `join`.
    pub fn remove(&mut self, col: usize) -> char {
        debug_assert!(col + 1 < self.len());
        let at = self.byte_of(col);
        self.text.remove(at)
    }

    /// Remove the half-open column range `[start, end)` and return the
    /// removed text. `end` is clamped so the terminator survives.
    pub fn remove_range(&mut self, start: usize, end: usize) -> String {
        let end = end.min(self.len() - 1);
        if start >= end {
            return String::new();
        }
        let (a, b) = (self.byte_of(start), self.byte_of(end));
        let removed = self.text[a..b].to_string();
        self.text.replace_range(a..b, "");
        removed
    }

    /// Append raw text (no newlines) before the terminator.
    pub fn push_str(&mut self, s: &str) {
        debug_assert!(!s.contains('\n'));
        let at = self.text.len() - 1;
        self.text.insert_str(at, s);
    }

    /// Split the line at `col`: everything from `col` onward, including
    /// the old terminator, moves into the returned line; this line gets a
    /// fresh terminator. This is the newline-insertion primitive.
    pub fn split_off(&mut self, col: usize) -> Line {
        let at = self.byte_of(col);
        let tail = self.text.split_off(at);
        self.text.push('\n');
        Line { text: tail }
    }

    /// Join `next` onto this line, dropping this line's terminator. The
    /// caller removes `next` from the store.
    pub fn join(&mut self, next: Line) {
        self.text.pop();
        self.text.push_str(&next.text);
    }
}
