// src/ui.rs - Terminal painting

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Print, SetAttribute},
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

use crate::buffer::Buffer;
use crate::cursor::Position;
use crate::editor::{Editor, Redraw};
use crate::mode::Mode;
use crate::selection;

/// Paint whatever the last keystroke invalidated, then park the terminal
/// cursor on the buffer cursor and flush. The status line is cheap and
/// carries the cursor position, so it repaints on every call; the text
/// area honors the requested granularity.
pub fn paint(out: &mut impl Write, editor: &Editor, redraw: Redraw) -> io::Result<()> {
    if editor.buffers.is_empty() {
        return Ok(());
    }
    let buf = editor.active_buffer();
    match redraw {
        Redraw::Full => {
            queue!(out, Clear(ClearType::All))?;
            let last = (buf.viewport.v_scroll + buf.viewport.height).min(buf.line_count());
            for row in buf.viewport.v_scroll..last {
                draw_row(out, editor, row)?;
            }
        }
        Redraw::CursorLine => draw_row(out, editor, buf.cursor.row)?,
        Redraw::StatusLine | Redraw::None => {}
    }
    draw_status(out, editor)?;
    let (x, y) = buf.screen_cursor();
    queue!(out, MoveTo(x as u16, y as u16))?;
    out.flush()
}

fn selection_range(buf: &Buffer) -> Option<(Position, Position)> {
    match buf.mode {
        Mode::Select { anchor } => Some(selection::normalize(anchor, buf.cursor.pos())),
        _ => None,
    }
}

/// One text row at its viewport position: the visible horizontal slice,
/// selection shown in reverse video, trailing whitespace marked when
/// `show-trails` is on.
fn draw_row(out: &mut impl Write, editor: &Editor, row: usize) -> io::Result<()> {
    let buf = editor.active_buffer();
    let vp = &buf.viewport;
    if !vp.contains_row(row) {
        return Ok(());
    }
    let y = (row - vp.v_scroll) as u16;
    queue!(out, MoveTo(0, y), Clear(ClearType::CurrentLine))?;

    let content = buf.line(row).content();
    let trail_start = if editor.config.show_trails {
        content.trim_end().chars().count()
    } else {
        content.chars().count()
    };
    let selection = selection_range(buf);

    for (col, ch) in content
        .chars()
        .enumerate()
        .skip(vp.h_scroll)
        .take(vp.width)
    {
        let pos = Position::new(row, col);
        let selected = selection.is_some_and(|(start, end)| start <= pos && pos < end);
        if selected {
            queue!(out, SetAttribute(Attribute::Reverse))?;
        }
        let shown = if col >= trail_start { '·' } else { ch };
        queue!(out, Print(shown))?;
        if selected {
            queue!(out, SetAttribute(Attribute::Reset))?;
        }
    }
    Ok(())
}

/// The line below the text area: a transient message or search prompt on
/// the left, buffer identity and cursor position on the right.
fn draw_status(out: &mut impl Write, editor: &Editor) -> io::Result<()> {
    let buf = editor.active_buffer();
    let y = buf.viewport.height as u16;
    queue!(out, MoveTo(0, y), Clear(ClearType::CurrentLine))?;

    let left = match &buf.mode {
        Mode::Search(state) => {
            if state.matches.is_empty() && !state.query.is_empty() {
                format!("Failing I-search: {}", state.query)
            } else {
                format!("I-search: {}", state.query)
            }
        }
        _ => match &editor.status {
            Some(message) => message.clone(),
            None => format!(
                "{}{}",
                buf.name,
                if buf.dirty { " [modified]" } else { "" }
            ),
        },
    };
    let right = format!("{}:{}", buf.cursor.row + 1, buf.cursor.col + 1);

    let width = buf.viewport.width;
    let left_width = left.chars().count().min(width);
    let shown: String = left.chars().take(left_width).collect();
    queue!(out, SetAttribute(Attribute::Reverse), Print(&shown))?;
    let pad = width.saturating_sub(left_width + right.chars().count());
    queue!(
        out,
        Print(" ".repeat(pad)),
        Print(&right),
        SetAttribute(Attribute::Reset)
    )?;
    Ok(())
}
