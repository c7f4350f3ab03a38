// src/buffer.rs - One open document and its editing state

use crate::cursor::{Cursor, Position};
use crate::line::Line;
use crate::mode::Mode;
use crate::viewport::Viewport;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BufferError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("buffer has no file path")]
    NoPath,
}

/// Split raw file bytes into lines at every newline; each line keeps its
/// terminator and a final unterminated chunk gets one. An empty input is
/// a single terminator-only line.
fn lines_of_text(text: &str) -> Vec<Line> {
    let lines: Vec<Line> = text.split_inclusive('\n').map(Line::from_text).collect();
    if lines.is_empty() {
        vec![Line::empty()]
    } else {
        lines
    }
}

/// An in-memory document: the line store plus cursor, viewport, mode and
/// identity. Invariants maintained by every public operation:
///
/// - every line ends with exactly one `\n`; the store is never empty;
/// - `cursor.row < lines.len()` and `cursor.col < lines[cursor.row].len()`;
/// - the viewport offsets keep the cursor framed after `scroll_to_cursor`.
#[derive(Debug, Clone)]
pub struct Buffer {
    pub name: String,
    pub path: Option<PathBuf>,
    pub lines: Vec<Line>,
    pub cursor: Cursor,
    pub viewport: Viewport,
    pub mode: Mode,
    /// Query carried between search sessions so repeat-search works.
    pub last_query: String,
    pub writable: bool,
    pub dirty: bool,
    /// Width of the space run the last tab expansion inserted; reset by
    /// any other edit or by cursor movement so backspace can retract the
    /// whole tab atomically, and only the tab.
    pub(crate) tab_run: usize,
}

impl Buffer {
    pub fn empty(name: &str) -> Self {
        Self {
            name: name.to_string(),
            path: None,
            lines: vec![Line::empty()],
            cursor: Cursor::new(),
            viewport: Viewport::new(80, 24),
            mode: Mode::Normal,
            last_query: String::new(),
            writable: true,
            dirty: false,
            tab_run: 0,
        }
    }

    /// Open a file. A path that does not exist yet yields an empty
    /// buffer bound to that path, created on first save.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, BufferError> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        let mut buffer = Self::empty(&name);
        buffer.path = Some(path.to_path_buf());
        if path.exists() {
            let text = fs::read_to_string(path)?;
            buffer.lines = lines_of_text(&text);
        }
        log::info!("opened {} ({} lines)", name, buffer.lines.len());
        Ok(buffer)
    }

    /// A generated view that rejects every mutation (the help buffer).
    pub fn read_only(name: &str, text: &str) -> Self {
        let mut buffer = Self::empty(name);
        buffer.lines = lines_of_text(text);
        buffer.writable = false;
        buffer
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn last_row(&self) -> usize {
        self.lines.len() - 1
    }

    pub fn line(&self, row: usize) -> &Line {
        &self.lines[row]
    }

    pub fn line_mut(&mut self, row: usize) -> &mut Line {
        &mut self.lines[row]
    }

    pub fn line_len(&self, row: usize) -> usize {
        self.lines[row].len()
    }

    /// Whole document text, lines concatenated verbatim.
    pub fn text(&self) -> String {
        self.lines.iter().map(|l| l.text()).collect()
    }

    /// Reposition the cursor, clamping to the store bounds. This is the
    /// single site that writes `cursor.row`/`cursor.col`, so the bounds
    /// invariant is auditable here. Horizontal repositioning updates the
    /// wish column; vertical moves pass `update_wish = false` to keep
    /// the remembered column. Leaving the current position also ends any
    /// pending tab retraction: backspace may only retract the expansion
    /// while the cursor still sits at its end.
    pub fn move_to(&mut self, pos: Position, update_wish: bool) {
        let row = pos.row.min(self.last_row());
        let col = pos.col.min(self.line_len(row) - 1);
        if (row, col) != (self.cursor.row, self.cursor.col) {
            self.tab_run = 0;
        }
        self.cursor.row = row;
        self.cursor.col = col;
        if update_wish {
            self.cursor.wish_col = self.cursor.col;
        }
    }

    /// Re-frame the viewport around the cursor. Returns true when either
    /// scroll offset moved, in which case the caller must repaint fully
    /// instead of redrawing just the active line.
    pub fn scroll_to_cursor(&mut self) -> bool {
        self.viewport.track(self.cursor.row, self.cursor.col)
    }

    /// Cursor position in terminal cells.
    pub fn screen_cursor(&self) -> (usize, usize) {
        self.viewport.screen_pos(self.cursor.row, self.cursor.col)
    }

    pub fn save(&mut self) -> Result<(), BufferError> {
        let path = self.path.clone().ok_or(BufferError::NoPath)?;
        self.save_to(&path)
    }

    pub fn save_to(&mut self, path: &Path) -> Result<(), BufferError> {
        fs::write(path, self.text())?;
        self.path = Some(path.to_path_buf());
        self.dirty = false;
        log::info!("wrote {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_buffer_is_one_terminator_line() {
        let buffer = Buffer::empty("scratch");
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.line(0).text(), "\n");
        assert_eq!(buffer.text(), "\n");
    }

    #[test]
    fn test_lines_of_text_keeps_terminators() {
        let lines = lines_of_text("ab\ncd\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text(), "ab\n");
        assert_eq!(lines[1].text(), "cd\n");
    }

    #[test]
    fn test_unterminated_final_line_gains_terminator() {
        let lines = lines_of_text("ab\ncd");
        assert_eq!(lines[1].text(), "cd\n");
    }

    #[test]
    fn test_move_to_clamps_to_bounds() {
        let mut buffer = Buffer::empty("scratch");
        buffer.lines = lines_of_text("abc\nx\n");
        buffer.move_to(Position::new(9, 9), true);
        assert_eq!(buffer.cursor.pos(), Position::new(1, 1));
        assert_eq!(buffer.cursor.wish_col, 1);
    }

    #[test]
    fn test_vertical_move_keeps_wish_col() {
        let mut buffer = Buffer::empty("scratch");
        buffer.lines = lines_of_text("abcdefghij\nab\n");
        buffer.move_to(Position::new(0, 8), true);
        buffer.move_to(Position::new(1, buffer.cursor.wish_col), false);
        assert_eq!(buffer.cursor.col, 2);
        assert_eq!(buffer.cursor.wish_col, 8);
    }

    #[test]
    fn test_read_only_buffer() {
        let buffer = Buffer::read_only("help", "some text\n");
        assert!(!buffer.writable);
        assert_eq!(buffer.line(0).content(), "some text");
    }

    #[test]
    fn test_load_and_save_round_trip() {
        use tempfile::NamedTempFile;
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "hello\nworld\n").unwrap();

        let mut buffer = Buffer::from_file(file.path()).unwrap();
        assert_eq!(buffer.line_count(), 2);
        assert_eq!(buffer.line(0).content(), "hello");

        let out = NamedTempFile::new().unwrap();
        buffer.save_to(out.path()).unwrap();
        assert_eq!(fs::read_to_string(out.path()).unwrap(), "hello\nworld\n");
        assert!(!buffer.dirty);
    }

    #[test]
    fn test_missing_file_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new.txt");
        let buffer = Buffer::from_file(&path).unwrap();
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.path, Some(path));
    }
}
