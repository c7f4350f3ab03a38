// src/edit.rs - The edit engine: character and line mutations

use crate::buffer::Buffer;
use crate::clipboard::Clipboard;
use crate::config::Config;
use crate::cursor::Position;
use crate::motion::{CharKind, kind_of};

/// Insert one character at the cursor and advance a column. A newline
/// splits the line: everything after the cursor moves into a freshly
/// inserted line below. `advance_on_newline` distinguishes Enter (cursor
/// follows onto the new line) from open-line (cursor stays put).
pub fn insert_char(buf: &mut Buffer, ch: char, advance_on_newline: bool) {
    buf.tab_run = 0;
    buf.dirty = true;
    let Position { row, col } = buf.cursor.pos();
    if ch == '\n' {
        let tail = buf.line_mut(row).split_off(col);
        buf.lines.insert(row + 1, tail);
        if advance_on_newline {
            buf.move_to(Position::new(row + 1, 0), true);
        }
    } else {
        buf.line_mut(row).insert(col, ch);
        buf.move_to(Position::new(row, col + 1), true);
    }
}

/// Remove the character under the cursor. On the terminator this merges
/// the next line into the current one; at the very last position of the
/// document it is a no-op.
pub fn delete_forward(buf: &mut Buffer) {
    let Position { row, col } = buf.cursor.pos();
    if col + 1 == buf.line_len(row) {
        if row == buf.last_row() {
            return;
        }
        let next = buf.lines.remove(row + 1);
        buf.line_mut(row).join(next);
    } else {
        buf.line_mut(row).remove(col);
    }
    buf.tab_run = 0;
    buf.dirty = true;
}

/// Remove one character to the left. At column 0 the current line merges
/// into the previous one with the cursor at the join point; at the very
/// start of the document it is a no-op. If the immediately preceding
/// edit was a tab expansion, the whole run of inserted spaces comes out
/// atomically.
pub fn backspace(buf: &mut Buffer) {
    let Position { row, col } = buf.cursor.pos();
    if buf.tab_run > 0 && col >= buf.tab_run {
        let run = buf.tab_run;
        buf.line_mut(row).remove_range(col - run, col);
        buf.move_to(Position::new(row, col - run), true);
        buf.tab_run = 0;
        buf.dirty = true;
        return;
    }
    buf.tab_run = 0;
    if col == 0 {
        if row == 0 {
            return;
        }
        let current = buf.lines.remove(row);
        let join_col = buf.line_len(row - 1) - 1;
        buf.line_mut(row - 1).join(current);
        buf.move_to(Position::new(row - 1, join_col), true);
    } else {
        buf.line_mut(row).remove(col - 1);
        buf.move_to(Position::new(row, col - 1), true);
    }
    buf.dirty = true;
}

/// Smart backspace: the run of whitespace behind the cursor plus the
/// token before it come out in one step. Stops at the line boundary.
pub fn backspace_word(buf: &mut Buffer) {
    buf.tab_run = 0;
    let Position { row, col } = buf.cursor.pos();
    if col == 0 {
        return;
    }
    let chars: Vec<char> = buf.line(row).content().chars().collect();
    let mut c = col.min(chars.len());
    while c > 0 && kind_of(chars[c - 1]) == CharKind::Space {
        c -= 1;
    }
    if c > 0 {
        let kind = kind_of(chars[c - 1]);
        while c > 0 && kind_of(chars[c - 1]) == kind {
            c -= 1;
        }
    }
    if c == col {
        return;
    }
    buf.line_mut(row).remove_range(c, col);
    buf.move_to(Position::new(row, c), true);
    buf.dirty = true;
}

/// Forward word deletion: the whitespace run under the cursor plus the
/// token after it. Stops at the line boundary.
pub fn delete_word(buf: &mut Buffer) {
    buf.tab_run = 0;
    let Position { row, col } = buf.cursor.pos();
    let chars: Vec<char> = buf.line(row).content().chars().collect();
    let mut c = col;
    while c < chars.len() && kind_of(chars[c]) == CharKind::Space {
        c += 1;
    }
    if c < chars.len() {
        let kind = kind_of(chars[c]);
        while c < chars.len() && kind_of(chars[c]) == kind {
            c += 1;
        }
    }
    if c == col {
        return;
    }
    buf.line_mut(row).remove_range(col, c);
    buf.dirty = true;
}

/// Insert a tab: a literal tab character, or the configured number of
/// spaces. A space expansion records its width so the next backspace can
/// retract it as a unit.
pub fn insert_tab(buf: &mut Buffer, config: &Config) {
    if config.spaces_are_tabs {
        insert_char(buf, '\t', true);
        return;
    }
    let Position { row, col } = buf.cursor.pos();
    for i in 0..config.space_amt {
        buf.line_mut(row).insert(col + i, ' ');
    }
    buf.move_to(Position::new(row, col + config.space_amt), true);
    buf.tab_run = config.space_amt;
    buf.dirty = true;
}

/// Cut from the cursor to the end of the line into the clipboard. On an
/// already-empty remainder the newline itself is killed and the next
/// line merges up, Emacs style.
pub fn kill_line(buf: &mut Buffer, clipboard: &mut Clipboard) {
    let Position { row, col } = buf.cursor.pos();
    let len = buf.line_len(row);
    if col + 1 == len {
        if row == buf.last_row() {
            return;
        }
        clipboard.set("\n".to_string());
        let next = buf.lines.remove(row + 1);
        buf.line_mut(row).join(next);
    } else {
        let cut = buf.line_mut(row).remove_range(col, len - 1);
        clipboard.set(cut);
    }
    buf.tab_run = 0;
    buf.dirty = true;
}

/// Merge the next line onto the end of the current one.
pub fn join_lines(buf: &mut Buffer) {
    let row = buf.cursor.row;
    if row == buf.last_row() {
        return;
    }
    let next = buf.lines.remove(row + 1);
    buf.line_mut(row).join(next);
    buf.tab_run = 0;
    buf.dirty = true;
}

/// Insert the clipboard at the cursor, one character at a time through
/// `insert_char` so embedded newlines re-split lines exactly as they
/// were captured. Empty clipboard: no-op.
pub fn paste(buf: &mut Buffer, clipboard: &Clipboard) {
    for ch in clipboard.text().chars() {
        insert_char(buf, ch, true);
    }
}
