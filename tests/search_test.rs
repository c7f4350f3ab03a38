// Incremental search sessions driven through the dispatcher.

mod common;

use common::{editor_with, type_text};
use wren::cursor::Position;
use wren::key::Key;

fn search_for(editor: &mut wren::editor::Editor, query: &str) {
    editor.handle_key(Key::Ctrl('s'));
    type_text(editor, query);
}

#[test]
fn test_cursor_follows_query_as_it_grows() {
    let mut editor = editor_with(&["cat", "car", "card"]);
    search_for(&mut editor, "car");
    assert_eq!(editor.active_buffer().cursor.pos(), Position::new(1, 0));
    editor.handle_key(Key::Char('d'));
    assert_eq!(editor.active_buffer().cursor.pos(), Position::new(2, 0));
}

#[test]
fn test_backspace_widens_the_query() {
    let mut editor = editor_with(&["cat", "car"]);
    search_for(&mut editor, "card");
    // No match for "card": the cursor stays where the last match left it.
    editor.handle_key(Key::Backspace);
    assert_eq!(editor.active_buffer().cursor.pos(), Position::new(1, 0));
}

#[test]
fn test_next_and_prev_walk_matches() {
    let mut editor = editor_with(&["a b a", "a"]);
    search_for(&mut editor, "a");
    assert_eq!(editor.active_buffer().cursor.pos(), Position::new(0, 0));
    editor.handle_key(Key::Ctrl('s'));
    assert_eq!(editor.active_buffer().cursor.pos(), Position::new(0, 4));
    editor.handle_key(Key::Ctrl('s'));
    assert_eq!(editor.active_buffer().cursor.pos(), Position::new(1, 0));
    editor.handle_key(Key::Ctrl('r'));
    assert_eq!(editor.active_buffer().cursor.pos(), Position::new(0, 4));
}

#[test]
fn test_session_starts_at_first_match_after_cursor() {
    let mut editor = editor_with(&["target", "middle", "target"]);
    editor.handle_key(Key::Ctrl('n'));
    search_for(&mut editor, "target");
    assert_eq!(editor.active_buffer().cursor.pos(), Position::new(2, 0));
}

#[test]
fn test_commit_keeps_position_and_stores_query() {
    let mut editor = editor_with(&["alpha beta"]);
    search_for(&mut editor, "beta");
    editor.handle_key(Key::Enter);
    let buf = editor.active_buffer();
    assert!(buf.mode.is_normal());
    assert_eq!(buf.cursor.pos(), Position::new(0, 6));
    assert_eq!(buf.last_query, "beta");
}

#[test]
fn test_abort_restores_position_but_stores_query() {
    let mut editor = editor_with(&["alpha", "beta"]);
    editor.handle_key(Key::Ctrl('f'));
    search_for(&mut editor, "beta");
    editor.handle_key(Key::Ctrl('g'));
    let buf = editor.active_buffer();
    assert!(buf.mode.is_normal());
    assert_eq!(buf.cursor.pos(), Position::new(0, 1));
    assert_eq!(buf.last_query, "beta");
}

#[test]
fn test_repeat_search_inherits_last_query() {
    let mut editor = editor_with(&["one two", "two"]);
    search_for(&mut editor, "two");
    editor.handle_key(Key::Enter);
    // Reopen and step without retyping the query.
    editor.handle_key(Key::Ctrl('s'));
    editor.handle_key(Key::Ctrl('s'));
    editor.handle_key(Key::Enter);
    assert_eq!(editor.active_buffer().cursor.pos(), Position::new(1, 0));
}

#[test]
fn test_typing_replaces_inherited_query() {
    let mut editor = editor_with(&["one two"]);
    search_for(&mut editor, "two");
    editor.handle_key(Key::Enter);
    editor.handle_key(Key::Alt('<'));
    editor.handle_key(Key::Ctrl('s'));
    editor.handle_key(Key::Char('o'));
    editor.handle_key(Key::Enter);
    assert_eq!(editor.active_buffer().cursor.pos(), Position::new(0, 0));
    assert_eq!(editor.active_buffer().last_query, "o");
}

#[test]
fn test_search_is_case_sensitive() {
    let mut editor = editor_with(&["Word word"]);
    search_for(&mut editor, "word");
    assert_eq!(editor.active_buffer().cursor.pos(), Position::new(0, 5));
}

#[test]
fn test_search_works_on_read_only_buffer() {
    let mut editor = editor_with(&["findable text"]);
    editor.active_buffer_mut().writable = false;
    search_for(&mut editor, "text");
    editor.handle_key(Key::Enter);
    assert_eq!(editor.active_buffer().cursor.pos(), Position::new(0, 9));
}

#[test]
fn test_search_scrolls_viewport_to_match() {
    let mut texts: Vec<String> = (0..100).map(|i| format!("filler {}", i)).collect();
    texts.push("needle".to_string());
    let refs: Vec<&str> = texts.iter().map(|s| s.as_str()).collect();
    let mut editor = editor_with(&refs);
    editor.resize(40, 10);
    search_for(&mut editor, "needle");
    let buf = editor.active_buffer();
    assert_eq!(buf.cursor.row, 100);
    assert!(buf.viewport.contains_row(100));
}
