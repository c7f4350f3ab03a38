// src/lib.rs - wren: a small Emacs-flavored terminal text editor

pub mod buffer;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod cursor;
pub mod edit;
pub mod editor;
pub mod key;
pub mod line;
pub mod mode;
pub mod motion;
pub mod search;
pub mod selection;
pub mod ui;
pub mod viewport;
