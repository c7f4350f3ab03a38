// src/editor.rs - Keystroke dispatch and buffer management

use crate::buffer::{Buffer, BufferError};
use crate::clipboard::Clipboard;
use crate::config::Config;
use crate::cursor::Position;
use crate::edit;
use crate::key::{Arrow, Key};
use crate::mode::Mode;
use crate::motion;
use crate::search::SearchState;
use crate::selection;

/// How much of the screen one keystroke invalidated. `CursorLine` covers
/// edits confined to the active line; anything that changes the line
/// count, the selection highlight or the scroll offsets reports `Full`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    None,
    CursorLine,
    StatusLine,
    Full,
}

const HELP_TEXT: &str = "*** wren help ***

wren is a small terminal text editor with Emacs-style controls.
C = Control, M = Meta (alt). This buffer is read-only; feel free
to move around in it for practice.

Navigation:

  LEFT  | C-b   move cursor left          C-a   beginning of line
  RIGHT | C-f   move cursor right         C-e   end of line
  DOWN  | C-n   move cursor down          M-m   first non-blank character
  UP    | C-p   move cursor up            M-<   top of buffer
  M-f           forward word              M->   bottom of buffer
  M-b           backward word             C-v   page down
  M-{           previous paragraph        M-v   page up
  M-}           next paragraph            C-l   center view
  C-s           search forward            C-r   search backward
  M-g           go to line number

Text manipulation:

  BACKSPC | C-h backspace                 M-BACKSPC  backspace word
  ENTER   | C-j insert newline            C-o   insert newline at cursor
  C-d           delete char under cursor  M-d   delete word
  C-SPC | C-c   begin/end selection       M-j   join lines
  M-w           copy selection            C-w   cut selection
  C-k           cut to end of line        C-y   paste
  C-g           cancel selection/search

Buffer manipulation:

  C-x s         save buffer
  C-x b         switch to previous buffer
  C-x k         kill current buffer
  C-x C-q       quit wren
";

/// The single foreground coordinator: owns the open buffers, the shared
/// clipboard and the config; routes one classified key to one operation
/// and reports how much must be redrawn.
pub struct Editor {
    pub buffers: Vec<Buffer>,
    pub active: usize,
    pub previous: usize,
    pub clipboard: Clipboard,
    pub config: Config,
    pub status: Option<String>,
    pub running: bool,
    pending_ctrl_x: bool,
    /// Digits typed so far at the goto-line prompt.
    pending_goto: Option<String>,
}

impl Editor {
    pub fn new(config: Config) -> Self {
        Self {
            buffers: Vec::new(),
            active: 0,
            previous: 0,
            clipboard: Clipboard::new(),
            config,
            status: None,
            running: true,
            pending_ctrl_x: false,
            pending_goto: None,
        }
    }

    pub fn add_buffer(&mut self, buffer: Buffer, make_current: bool) {
        self.buffers.push(buffer);
        if make_current {
            self.previous = self.active;
            self.active = self.buffers.len() - 1;
        }
    }

    pub fn active_buffer(&self) -> &Buffer {
        &self.buffers[self.active]
    }

    pub fn active_buffer_mut(&mut self) -> &mut Buffer {
        &mut self.buffers[self.active]
    }

    pub fn buffer_by_name(&self, name: &str) -> Option<&Buffer> {
        self.buffers.iter().find(|b| b.name == name)
    }

    pub fn buffer_by_name_mut(&mut self, name: &str) -> Option<&mut Buffer> {
        self.buffers.iter_mut().find(|b| b.name == name)
    }

    pub fn open_help(&mut self) {
        self.add_buffer(Buffer::read_only("*help*", HELP_TEXT), true);
    }

    /// Swap back to the previously active buffer.
    pub fn switch_buffer(&mut self) {
        std::mem::swap(&mut self.active, &mut self.previous);
    }

    /// Close the active buffer; closing the last one ends the session.
    pub fn kill_buffer(&mut self) {
        self.buffers.remove(self.active);
        if self.buffers.is_empty() {
            self.running = false;
            return;
        }
        if self.active > self.buffers.len() - 1 {
            self.active -= 1;
        }
        self.previous = self.previous.min(self.buffers.len() - 1);
    }

    /// Propagate a terminal resize to every buffer's viewport.
    pub fn resize(&mut self, width: usize, height: usize) {
        for buffer in &mut self.buffers {
            buffer.viewport.resize(width, height);
        }
    }

    /// Entry point: put the active buffer into incremental-search mode,
    /// inheriting the previous query.
    pub fn open_search(&mut self) {
        let buf = self.active_buffer_mut();
        let state = SearchState::begin(buf.last_query.clone(), buf.cursor.pos(), &buf.lines);
        buf.mode = Mode::Search(state);
    }

    /// Entry point: start a selection anchored at the cursor.
    pub fn open_selection(&mut self) {
        let buf = self.active_buffer_mut();
        buf.mode = Mode::Select {
            anchor: buf.cursor.pos(),
        };
    }

    /// Entry point: replace `needle` with `replacement` inside the
    /// active selection. Consumes the selection; returns the hit count.
    pub fn replace_in_selection(&mut self, needle: &str, replacement: &str) -> usize {
        if !self.active_buffer().writable {
            self.reject_read_only();
            return 0;
        }
        let buf = &mut self.buffers[self.active];
        let Mode::Select { anchor } = buf.mode else {
            self.status = Some("No selection".to_string());
            return 0;
        };
        let (start, end) = selection::normalize(anchor, buf.cursor.pos());
        buf.mode = Mode::Normal;
        let count = selection::replace(buf, start, end, needle, replacement);
        self.status = Some(format!("Replaced {} occurrence(s)", count));
        count
    }

    fn reject_read_only(&mut self) {
        self.status = Some(format!(
            "Buffer {} is read-only",
            self.active_buffer().name
        ));
    }

    /// Dispatch one classified keystroke. Exactly one operation runs to
    /// completion, the viewport is re-framed, and the redraw granularity
    /// comes back; a scroll always upgrades it to a full repaint.
    pub fn handle_key(&mut self, key: Key) -> Redraw {
        if self.buffers.is_empty() {
            self.running = false;
            return Redraw::None;
        }
        self.status = None;

        let redraw = if self.pending_ctrl_x {
            self.pending_ctrl_x = false;
            self.handle_ctrl_x(key)
        } else if self.pending_goto.is_some() {
            self.handle_goto(key)
        } else if key == Key::Ctrl('x') {
            self.pending_ctrl_x = true;
            self.status = Some("C-x -".to_string());
            return Redraw::StatusLine;
        } else if self.active_buffer().mode.is_search() {
            Self::dispatch_search(&mut self.buffers[self.active], key)
        } else {
            self.dispatch_buffer(key)
        };

        if self.buffers.is_empty() {
            return redraw;
        }
        if self.active_buffer_mut().scroll_to_cursor() {
            Redraw::Full
        } else {
            redraw
        }
    }

    /// Keys following the C-x prefix.
    fn handle_ctrl_x(&mut self, key: Key) -> Redraw {
        match key {
            Key::Char('s') | Key::Ctrl('s') => {
                if !self.active_buffer().writable {
                    self.reject_read_only();
                    return Redraw::StatusLine;
                }
                let buf = &mut self.buffers[self.active];
                self.status = Some(match buf.save() {
                    Ok(()) => format!("Wrote {}", buf.name),
                    Err(BufferError::NoPath) => "Buffer has no file to save to".to_string(),
                    Err(e) => format!("Save failed: {}", e),
                });
                Redraw::StatusLine
            }
            Key::Char('b') => {
                self.switch_buffer();
                Redraw::Full
            }
            Key::Char('k') => {
                self.kill_buffer();
                Redraw::Full
            }
            Key::Char('q') | Key::Ctrl('q') => {
                self.running = false;
                Redraw::None
            }
            _ => {
                self.status = Some("C-x is undefined for that key".to_string());
                Redraw::StatusLine
            }
        }
    }

    /// Keys at the goto-line prompt: digits accumulate, Enter jumps to
    /// that one-based line (clamped to the document), anything else
    /// cancels.
    fn handle_goto(&mut self, key: Key) -> Redraw {
        let mut entry = self.pending_goto.take().unwrap_or_default();
        match key {
            Key::Char(c) if c.is_ascii_digit() => {
                entry.push(c);
                self.status = Some(format!("Goto line: {}", entry));
                self.pending_goto = Some(entry);
                Redraw::StatusLine
            }
            Key::Backspace => {
                entry.pop();
                self.status = Some(format!("Goto line: {}", entry));
                self.pending_goto = Some(entry);
                Redraw::StatusLine
            }
            Key::Enter => {
                if let Ok(n) = entry.parse::<usize>() {
                    let buf = self.active_buffer_mut();
                    buf.move_to(Position::new(n.saturating_sub(1), 0), true);
                }
                Redraw::Full
            }
            _ => {
                self.status = Some("Quit".to_string());
                Redraw::StatusLine
            }
        }
    }

    /// Normal- and Select-mode keys. Movement in Select mode repaints
    /// fully so the highlight tracks the cursor.
    fn dispatch_buffer(&mut self, key: Key) -> Redraw {
        let writable = self.active_buffer().writable;
        let selecting = self.active_buffer().mode.is_select();
        let move_redraw = if selecting {
            Redraw::Full
        } else {
            Redraw::None
        };

        match key {
            // Horizontal movement updates the wish column.
            Key::Arrow(Arrow::Left) | Key::Ctrl('b') => {
                let buf = self.active_buffer_mut();
                let pos = motion::left(buf, buf.cursor.pos());
                buf.move_to(pos, true);
                move_redraw
            }
            Key::Arrow(Arrow::Right) | Key::Ctrl('f') => {
                let buf = self.active_buffer_mut();
                let pos = motion::right(buf, buf.cursor.pos());
                buf.move_to(pos, true);
                move_redraw
            }
            // Vertical movement keeps the remembered column.
            Key::Arrow(Arrow::Up) | Key::Ctrl('p') => {
                self.move_vertical(-1);
                move_redraw
            }
            Key::Arrow(Arrow::Down) | Key::Ctrl('n') => {
                self.move_vertical(1);
                move_redraw
            }
            Key::ShiftArrow(arrow) => {
                if !selecting {
                    self.open_selection();
                }
                match arrow {
                    Arrow::Left => {
                        let buf = self.active_buffer_mut();
                        let pos = motion::left(buf, buf.cursor.pos());
                        buf.move_to(pos, true);
                    }
                    Arrow::Right => {
                        let buf = self.active_buffer_mut();
                        let pos = motion::right(buf, buf.cursor.pos());
                        buf.move_to(pos, true);
                    }
                    Arrow::Up => self.move_vertical(-1),
                    Arrow::Down => self.move_vertical(1),
                }
                Redraw::Full
            }
            Key::Ctrl('a') => {
                let buf = self.active_buffer_mut();
                buf.move_to(motion::line_start(buf.cursor.pos()), true);
                move_redraw
            }
            Key::Ctrl('e') => {
                let buf = self.active_buffer_mut();
                let pos = motion::line_end(buf, buf.cursor.pos());
                buf.move_to(pos, true);
                move_redraw
            }
            Key::Alt('m') => {
                let buf = self.active_buffer_mut();
                let pos = motion::first_non_blank(buf, buf.cursor.pos());
                buf.move_to(pos, true);
                move_redraw
            }
            Key::Alt('f') => {
                let buf = self.active_buffer_mut();
                let pos = motion::word_forward(buf, buf.cursor.pos());
                buf.move_to(pos, true);
                move_redraw
            }
            Key::Alt('b') => {
                let buf = self.active_buffer_mut();
                let pos = motion::word_backward(buf, buf.cursor.pos());
                buf.move_to(pos, true);
                move_redraw
            }
            Key::Alt('{') => {
                let buf = self.active_buffer_mut();
                let pos = motion::paragraph_backward(buf, buf.cursor.pos());
                buf.move_to(pos, true);
                move_redraw
            }
            Key::Alt('}') => {
                let buf = self.active_buffer_mut();
                let pos = motion::paragraph_forward(buf, buf.cursor.pos());
                buf.move_to(pos, true);
                move_redraw
            }
            Key::Alt('<') => {
                let buf = self.active_buffer_mut();
                buf.move_to(motion::doc_start(buf.cursor.pos()), true);
                move_redraw
            }
            Key::Alt('>') => {
                let buf = self.active_buffer_mut();
                let pos = motion::doc_end(buf);
                buf.move_to(pos, true);
                move_redraw
            }
            Key::Ctrl('v') => {
                self.move_page(true);
                move_redraw
            }
            Key::Alt('v') => {
                self.move_page(false);
                move_redraw
            }
            Key::Ctrl('l') => {
                let buf = self.active_buffer_mut();
                let row = buf.cursor.row;
                buf.viewport.center_on(row);
                Redraw::Full
            }

            Key::Ctrl(' ') | Key::Ctrl('c') => {
                if selecting {
                    self.active_buffer_mut().mode = Mode::Normal;
                } else {
                    self.open_selection();
                }
                Redraw::Full
            }
            Key::Ctrl('g') => {
                if selecting {
                    self.active_buffer_mut().mode = Mode::Normal;
                    self.status = Some("Quit".to_string());
                    Redraw::Full
                } else {
                    Redraw::None
                }
            }
            Key::Alt('w') => self.copy_selection(),
            Key::Ctrl('w') => {
                if !writable {
                    self.reject_read_only();
                    return Redraw::StatusLine;
                }
                self.cut_selection()
            }
            Key::Ctrl('s') | Key::Ctrl('r') => {
                self.open_search();
                Redraw::StatusLine
            }
            Key::Alt('g') => {
                self.pending_goto = Some(String::new());
                self.status = Some("Goto line: ".to_string());
                Redraw::StatusLine
            }

            // Pasting over a selection replaces it. An empty clipboard
            // pastes nothing, so it must not consume the selection.
            Key::Ctrl('y') => {
                if !writable {
                    self.reject_read_only();
                    return Redraw::StatusLine;
                }
                if self.clipboard.is_empty() {
                    return Redraw::None;
                }
                let buf = &mut self.buffers[self.active];
                if let Mode::Select { anchor } = buf.mode {
                    let (start, end) = selection::normalize(anchor, buf.cursor.pos());
                    buf.mode = Mode::Normal;
                    selection::delete(buf, start, end);
                }
                self.dispatch_edit(Key::Ctrl('y'))
            }

            // Everything from here on mutates the buffer.
            _ => {
                if !writable {
                    if Self::is_mutating(key) {
                        self.reject_read_only();
                        return Redraw::StatusLine;
                    }
                    return Redraw::None;
                }
                // A plain edit while a selection is active drops the
                // selection, so no anchor can go stale under a removal.
                if selecting && Self::is_mutating(key) {
                    self.active_buffer_mut().mode = Mode::Normal;
                }
                self.dispatch_edit(key)
            }
        }
    }

    fn is_mutating(key: Key) -> bool {
        matches!(
            key,
            Key::Char(_)
                | Key::Enter
                | Key::Tab
                | Key::Backspace
                | Key::AltBackspace
                | Key::Ctrl('d' | 'k' | 'o' | 'y' | 'j' | 'h')
                | Key::Alt('d' | 'j')
        )
    }

    fn dispatch_edit(&mut self, key: Key) -> Redraw {
        let Editor {
            buffers,
            active,
            clipboard,
            config,
            ..
        } = self;
        let buf = &mut buffers[*active];
        let lines_before = buf.line_count();

        let redraw = match key {
            Key::Char(c) => {
                edit::insert_char(buf, c, true);
                Redraw::CursorLine
            }
            Key::Enter | Key::Ctrl('j') => {
                edit::insert_char(buf, '\n', true);
                Redraw::Full
            }
            Key::Ctrl('o') => {
                edit::insert_char(buf, '\n', false);
                Redraw::Full
            }
            Key::Tab => {
                edit::insert_tab(buf, config);
                Redraw::CursorLine
            }
            Key::Backspace | Key::Ctrl('h') => {
                edit::backspace(buf);
                Redraw::CursorLine
            }
            Key::AltBackspace => {
                edit::backspace_word(buf);
                Redraw::CursorLine
            }
            Key::Ctrl('d') => {
                edit::delete_forward(buf);
                Redraw::CursorLine
            }
            Key::Alt('d') => {
                edit::delete_word(buf);
                Redraw::CursorLine
            }
            Key::Ctrl('k') => {
                edit::kill_line(buf, clipboard);
                Redraw::CursorLine
            }
            Key::Alt('j') => {
                edit::join_lines(buf);
                Redraw::Full
            }
            Key::Ctrl('y') => {
                edit::paste(buf, clipboard);
                Redraw::Full
            }
            _ => Redraw::None,
        };

        if buf.line_count() != lines_before {
            Redraw::Full
        } else {
            redraw
        }
    }

    fn move_vertical(&mut self, delta: isize) {
        let buf = self.active_buffer_mut();
        let pos = motion::vertical(buf, buf.cursor.pos(), buf.cursor.wish_col, delta);
        buf.move_to(pos, false);
    }

    fn move_page(&mut self, down: bool) {
        let buf = self.active_buffer_mut();
        let height = buf.viewport.height;
        let pos = motion::page(buf, buf.cursor.pos(), buf.cursor.wish_col, height, down);
        buf.move_to(pos, false);
    }

    fn copy_selection(&mut self) -> Redraw {
        let buf = &mut self.buffers[self.active];
        let Mode::Select { anchor } = buf.mode else {
            self.status = Some("No selection".to_string());
            return Redraw::StatusLine;
        };
        let (start, end) = selection::normalize(anchor, buf.cursor.pos());
        self.clipboard.set(selection::collect(buf, start, end));
        buf.mode = Mode::Normal;
        Redraw::Full
    }

    fn cut_selection(&mut self) -> Redraw {
        let buf = &mut self.buffers[self.active];
        let Mode::Select { anchor } = buf.mode else {
            self.status = Some("No selection".to_string());
            return Redraw::StatusLine;
        };
        let (start, end) = selection::normalize(anchor, buf.cursor.pos());
        self.clipboard.set(selection::collect(buf, start, end));
        buf.mode = Mode::Normal;
        selection::delete(buf, start, end);
        Redraw::Full
    }

    /// Search-mode keys. The cursor follows the active match while the
    /// query changes; commit keeps it there, abort restores the saved
    /// position.
    fn dispatch_search(buf: &mut Buffer, key: Key) -> Redraw {
        let Mode::Search(ref mut state) = buf.mode else {
            return Redraw::None;
        };
        match key {
            Key::Char(c) => state.push_char(c, &buf.lines),
            Key::Backspace => state.pop_char(&buf.lines),
            Key::Ctrl('s') => state.next(),
            Key::Ctrl('r') => state.prev(),
            Key::Enter => {
                buf.last_query = state.query.clone();
                let target = state.active();
                buf.mode = Mode::Normal;
                if let Some(pos) = target {
                    buf.move_to(pos, true);
                }
                return Redraw::Full;
            }
            Key::Ctrl('g') => {
                buf.last_query = state.query.clone();
                let saved = state.saved;
                buf.mode = Mode::Normal;
                buf.move_to(saved, true);
                return Redraw::Full;
            }
            _ => {}
        }
        let target = match &buf.mode {
            Mode::Search(state) => state.active(),
            _ => None,
        };
        if let Some(pos) = target {
            buf.move_to(pos, false);
        }
        Redraw::Full
    }
}
