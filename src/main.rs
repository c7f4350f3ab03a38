// src/main.rs - Terminal session entry point

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{Write, stdin, stdout};

use wren::buffer::Buffer;
use wren::cli;
use wren::config::Config;
use wren::editor::{Editor, Redraw};
use wren::key;
use wren::ui;

fn main() -> Result<()> {
    let args = cli::parse_args();

    // Set RUST_LOG to control verbosity; goes to stderr.
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    if args.is_directory() {
        anyhow::bail!(
            "{} is a directory",
            args.file.as_ref().unwrap().display()
        );
    }

    let mut editor = Editor::new(Config::load());
    match &args.file {
        Some(path) => editor.add_buffer(Buffer::from_file(path)?, true),
        None => editor.open_help(),
    }

    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen)?;
    let result = run(&mut editor, &mut out);
    execute!(out, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    result
}

/// The event loop: block on one keystroke, dispatch it, repaint only
/// what the dispatch reported as invalidated.
fn run(editor: &mut Editor, out: &mut impl Write) -> Result<()> {
    let mut input = stdin().lock();
    let (mut width, mut height) = crossterm::terminal::size()?;
    editor.resize(width as usize, height.saturating_sub(1) as usize);
    ui::paint(out, editor, Redraw::Full)?;

    while editor.running {
        let key = key::read_key(&mut input)?;
        let mut redraw = editor.handle_key(key);

        let (w, h) = crossterm::terminal::size()?;
        if (w, h) != (width, height) {
            (width, height) = (w, h);
            editor.resize(w as usize, h.saturating_sub(1) as usize);
            redraw = Redraw::Full;
        }

        if editor.running {
            ui::paint(out, editor, redraw)?;
        }
    }
    Ok(())
}
