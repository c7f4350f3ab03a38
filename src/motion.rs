// src/motion.rs - Position calculations for cursor movement

use crate::buffer::Buffer;
use crate::cursor::Position;

/// Character classes for word motion and word deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharKind {
    /// Alphanumeric or underscore.
    Word,
    Space,
    Other,
}

pub fn kind_of(c: char) -> CharKind {
    if c.is_alphanumeric() || c == '_' {
        CharKind::Word
    } else if c.is_whitespace() {
        CharKind::Space
    } else {
        CharKind::Other
    }
}

fn is_word(c: char) -> bool {
    kind_of(c) == CharKind::Word
}

/// One column left; wraps to the end of the previous line at column 0.
pub fn left(buf: &Buffer, pos: Position) -> Position {
    if pos.col > 0 {
        Position::new(pos.row, pos.col - 1)
    } else if pos.row > 0 {
        Position::new(pos.row - 1, buf.line_len(pos.row - 1) - 1)
    } else {
        pos
    }
}

/// One column right; wraps to column 0 of the next line from the
/// end-of-line terminator.
pub fn right(buf: &Buffer, pos: Position) -> Position {
    if pos.col + 1 < buf.line_len(pos.row) {
        Position::new(pos.row, pos.col + 1)
    } else if pos.row < buf.last_row() {
        Position::new(pos.row + 1, 0)
    } else {
        pos
    }
}

/// Move `delta` rows, clamped to the document; the column is the wish
/// column clamped to the target line.
pub fn vertical(buf: &Buffer, pos: Position, wish_col: usize, delta: isize) -> Position {
    let row = pos
        .row
        .saturating_add_signed(delta)
        .min(buf.last_row());
    Position::new(row, wish_col.min(buf.line_len(row) - 1))
}

pub fn line_start(pos: Position) -> Position {
    Position::new(pos.row, 0)
}

/// End of line means the terminator position, one past the last
/// printing character.
pub fn line_end(buf: &Buffer, pos: Position) -> Position {
    Position::new(pos.row, buf.line_len(pos.row) - 1)
}

pub fn first_non_blank(buf: &Buffer, pos: Position) -> Position {
    let col = buf
        .line(pos.row)
        .content()
        .chars()
        .position(|c| !c.is_whitespace())
        .unwrap_or(0);
    Position::new(pos.row, col)
}

pub fn doc_start(_pos: Position) -> Position {
    Position::new(0, 0)
}

pub fn doc_end(buf: &Buffer) -> Position {
    let row = buf.last_row();
    Position::new(row, buf.line_len(row) - 1)
}

/// Move by a full viewport of rows.
pub fn page(buf: &Buffer, pos: Position, wish_col: usize, height: usize, down: bool) -> Position {
    let delta = if down {
        height as isize
    } else {
        -(height as isize)
    };
    vertical(buf, pos, wish_col, delta)
}

/// Forward to the next word start: skip the alphanumeric run under the
/// cursor, then the separators after it. Stops at the end of the line
/// rather than wrapping.
pub fn word_forward(buf: &Buffer, pos: Position) -> Position {
    let chars: Vec<char> = buf.line(pos.row).content().chars().collect();
    let mut col = pos.col;
    while col < chars.len() && is_word(chars[col]) {
        col += 1;
    }
    while col < chars.len() && !is_word(chars[col]) {
        col += 1;
    }
    Position::new(pos.row, col)
}

/// Backward to the previous word start: skip separators behind the
/// cursor, then the alphanumeric run before them. Stops at column 0.
pub fn word_backward(buf: &Buffer, pos: Position) -> Position {
    let chars: Vec<char> = buf.line(pos.row).content().chars().collect();
    let mut col = pos.col.min(chars.len());
    while col > 0 && !is_word(chars[col - 1]) {
        col -= 1;
    }
    while col > 0 && is_word(chars[col - 1]) {
        col -= 1;
    }
    Position::new(pos.row, col)
}

/// Down to the blank line following the current paragraph, skipping any
/// blank run the cursor starts on.
pub fn paragraph_forward(buf: &Buffer, pos: Position) -> Position {
    let last = buf.last_row();
    if pos.row == last {
        return Position::new(last, 0);
    }
    let mut row = pos.row + 1;
    while row < last && buf.line(row).is_blank() {
        row += 1;
    }
    while row < last && !buf.line(row).is_blank() {
        row += 1;
    }
    Position::new(row, 0)
}

/// Up to the blank line preceding the current paragraph.
pub fn paragraph_backward(buf: &Buffer, pos: Position) -> Position {
    if pos.row == 0 {
        return Position::new(0, 0);
    }
    let mut row = pos.row - 1;
    while row > 0 && buf.line(row).is_blank() {
        row -= 1;
    }
    while row > 0 && !buf.line(row).is_blank() {
        row -= 1;
    }
    Position::new(row, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::line::Line;

    fn buffer(texts: &[&str]) -> Buffer {
        let mut buf = Buffer::empty("test");
        buf.lines = texts.iter().map(|t| Line::from_text(t)).collect();
        buf
    }

    #[test]
    fn test_left_wraps_to_previous_line_end() {
        let buf = buffer(&["ab", "cd"]);
        assert_eq!(left(&buf, Position::new(1, 0)), Position::new(0, 2));
        assert_eq!(left(&buf, Position::new(0, 0)), Position::new(0, 0));
    }

    #[test]
    fn test_right_wraps_to_next_line_start() {
        let buf = buffer(&["ab", "cd"]);
        // Column 2 sits on the terminator of "ab\n".
        assert_eq!(right(&buf, Position::new(0, 2)), Position::new(1, 0));
        assert_eq!(right(&buf, Position::new(1, 2)), Position::new(1, 2));
    }

    #[test]
    fn test_vertical_clamps_col_to_short_line() {
        let buf = buffer(&["abcdefghij", "abc", "abcdefghij"]);
        let pos = vertical(&buf, Position::new(0, 10), 10, 1);
        assert_eq!(pos, Position::new(1, 3));
        let back = vertical(&buf, pos, 10, 1);
        assert_eq!(back, Position::new(2, 10));
    }

    #[test]
    fn test_vertical_clamps_to_document() {
        let buf = buffer(&["a", "b"]);
        assert_eq!(vertical(&buf, Position::new(0, 0), 0, -3), Position::new(0, 0));
        assert_eq!(vertical(&buf, Position::new(1, 0), 0, 5), Position::new(1, 0));
    }

    #[test]
    fn test_word_forward_spec_example() {
        let buf = buffer(&["  hello world"]);
        let pos = word_forward(&buf, Position::new(0, 0));
        assert_eq!(pos.col, 2);
        let pos = word_forward(&buf, pos);
        assert_eq!(pos.col, 8);
    }

    #[test]
    fn test_word_forward_stops_at_line_end() {
        let buf = buffer(&["word", "next"]);
        let pos = word_forward(&buf, Position::new(0, 0));
        assert_eq!(pos, Position::new(0, 4));
        assert_eq!(word_forward(&buf, pos), Position::new(0, 4));
    }

    #[test]
    fn test_word_backward() {
        let buf = buffer(&["  hello world"]);
        let pos = word_backward(&buf, Position::new(0, 13));
        assert_eq!(pos.col, 8);
        let pos = word_backward(&buf, pos);
        assert_eq!(pos.col, 2);
        let pos = word_backward(&buf, pos);
        assert_eq!(pos.col, 0);
    }

    #[test]
    fn test_line_end_is_terminator_position() {
        let buf = buffer(&["abc"]);
        assert_eq!(line_end(&buf, Position::new(0, 0)), Position::new(0, 3));
    }

    #[test]
    fn test_first_non_blank() {
        let buf = buffer(&["   abc", "   "]);
        assert_eq!(first_non_blank(&buf, Position::new(0, 5)).col, 3);
        // All-blank line falls back to column 0.
        assert_eq!(first_non_blank(&buf, Position::new(1, 2)).col, 0);
    }

    #[test]
    fn test_paragraph_forward_lands_on_blank() {
        let buf = buffer(&["one", "two", "", "three", "four"]);
        assert_eq!(paragraph_forward(&buf, Position::new(0, 2)), Position::new(2, 0));
        // From the blank line, skip it and run to the document end.
        assert_eq!(paragraph_forward(&buf, Position::new(2, 0)), Position::new(4, 0));
    }

    #[test]
    fn test_paragraph_backward_lands_on_blank() {
        let buf = buffer(&["one", "two", "", "three", "four"]);
        assert_eq!(paragraph_backward(&buf, Position::new(4, 0)), Position::new(2, 0));
        assert_eq!(paragraph_backward(&buf, Position::new(2, 0)), Position::new(0, 0));
    }

    #[test]
    fn test_doc_bounds() {
        let buf = buffer(&["abc", "de"]);
        assert_eq!(doc_start(Position::new(1, 1)), Position::new(0, 0));
        assert_eq!(doc_end(&buf), Position::new(1, 2));
    }

    #[test]
    fn test_page_motion() {
        let mut texts = Vec::new();
        for _ in 0..50 {
            texts.push("line");
        }
        let buf = buffer(&texts);
        assert_eq!(page(&buf, Position::new(0, 0), 0, 20, true).row, 20);
        assert_eq!(page(&buf, Position::new(45, 0), 0, 20, true).row, 49);
        assert_eq!(page(&buf, Position::new(25, 0), 0, 20, false).row, 5);
    }
}
