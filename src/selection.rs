// src/selection.rs - Range operations between the anchor and the cursor

use crate::buffer::Buffer;
use crate::cursor::Position;

/// Order an (anchor, cursor) pair into a half-open (start, end) range.
/// Position's derived ordering is (row, col) lexicographic.
pub fn normalize(a: Position, b: Position) -> (Position, Position) {
    (a.min(b), a.max(b))
}

fn char_slice(s: &str, from: usize, to: usize) -> String {
    s.chars().skip(from).take(to.saturating_sub(from)).collect()
}

/// Collect the text of `[start, end)` in document order: partial first
/// line (terminator included), full middle lines, partial last line.
pub fn collect(buf: &Buffer, start: Position, end: Position) -> String {
    if start.row == end.row {
        return char_slice(buf.line(start.row).text(), start.col, end.col);
    }
    let mut text = String::new();
    text.push_str(&char_slice(
        buf.line(start.row).text(),
        start.col,
        buf.line_len(start.row),
    ));
    for row in start.row + 1..end.row {
        text.push_str(buf.line(row).text());
    }
    text.push_str(&char_slice(buf.line(end.row).text(), 0, end.col));
    text
}

/// Delete `[start, end)` and leave the cursor at the join point. For a
/// multi-line range: truncate the start line from `start.col`, truncate
/// the end line up to `end.col`, drop the lines strictly between, then
/// join the two remnants. Removing lines shifts every later row index,
/// so all the index arithmetic happens right here against `start.row`.
pub fn delete(buf: &mut Buffer, start: Position, end: Position) {
    if start == end {
        buf.move_to(start, true);
        return;
    }
    if start.row == end.row {
        buf.line_mut(start.row).remove_range(start.col, end.col);
    } else {
        buf.line_mut(end.row).remove_range(0, end.col);
        let len = buf.line_len(start.row);
        buf.line_mut(start.row).remove_range(start.col, len - 1);
        // Everything below start.row shifts up as rows disappear; the
        // end-line remnant is always at start.row + 1.
        for _ in start.row + 1..end.row {
            buf.lines.remove(start.row + 1);
        }
        let remnant = buf.lines.remove(start.row + 1);
        buf.line_mut(start.row).join(remnant);
    }
    buf.tab_run = 0;
    buf.dirty = true;
    buf.move_to(start, true);
}

/// Replace every occurrence of `needle` that falls entirely inside the
/// range, line by line. Returns how many were replaced.
pub fn replace(
    buf: &mut Buffer,
    start: Position,
    end: Position,
    needle: &str,
    replacement: &str,
) -> usize {
    if needle.is_empty() {
        return 0;
    }
    let mut count = 0;
    for row in start.row..=end.row.min(buf.last_row()) {
        let content = buf.line(row).content().to_string();
        let content_len = content.chars().count();
        let lo = if row == start.row { start.col } else { 0 };
        let hi = if row == end.row { end.col } else { content_len };
        let hi = hi.min(content_len);
        if lo >= hi {
            continue;
        }
        let window = char_slice(&content, lo, hi);
        let hits = window.matches(needle).count();
        if hits == 0 {
            continue;
        }
        count += hits;
        let mut rebuilt = char_slice(&content, 0, lo);
        rebuilt.push_str(&window.replace(needle, replacement));
        rebuilt.push_str(&char_slice(&content, hi, content_len));
        *buf.line_mut(row) = crate::line::Line::from_text(&rebuilt);
    }
    if count > 0 {
        buf.tab_run = 0;
        buf.dirty = true;
    }
    buf.move_to(start, true);
    count
}
