// src/mode.rs - The buffer's input-interpretation state machine

use crate::cursor::Position;
use crate::search::SearchState;

/// Normal / Select / Search as a tagged variant, so the selection anchor
/// and the search session only exist while their mode is active.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Normal,
    Select { anchor: Position },
    Search(SearchState),
}

impl Mode {
    pub fn is_normal(&self) -> bool {
        matches!(self, Mode::Normal)
    }

    pub fn is_select(&self) -> bool {
        matches!(self, Mode::Select { .. })
    }

    pub fn is_search(&self) -> bool {
        matches!(self, Mode::Search(_))
    }
}
