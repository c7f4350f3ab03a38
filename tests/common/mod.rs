// Common test utilities

use wren::buffer::Buffer;
use wren::config::Config;
use wren::editor::Editor;
use wren::key::Key;
use wren::line::Line;

/// Editor with one writable buffer holding the given lines.
#[allow(dead_code)]
pub fn editor_with(texts: &[&str]) -> Editor {
    let mut editor = Editor::new(Config::default());
    editor.add_buffer(buffer_with(texts), true);
    editor.resize(80, 24);
    editor
}

/// Buffer built directly from line texts, terminators added.
#[allow(dead_code)]
pub fn buffer_with(texts: &[&str]) -> Buffer {
    let mut buffer = Buffer::empty("test");
    buffer.lines = texts.iter().map(|t| Line::from_text(t)).collect();
    buffer
}

/// Feed a string one character at a time.
#[allow(dead_code)]
pub fn type_text(editor: &mut Editor, text: &str) {
    for c in text.chars() {
        if c == '\n' {
            editor.handle_key(Key::Enter);
        } else {
            editor.handle_key(Key::Char(c));
        }
    }
}

/// Every boundary position of the buffer: document corners plus the
/// start, last column and terminator column of each line.
#[allow(dead_code)]
pub fn boundary_positions(buffer: &Buffer) -> Vec<(usize, usize)> {
    let mut positions = vec![(0, 0)];
    for row in 0..buffer.line_count() {
        let len = buffer.line_len(row);
        positions.push((row, 0));
        if len > 1 {
            positions.push((row, len - 2));
        }
        positions.push((row, len - 1));
    }
    positions
}
