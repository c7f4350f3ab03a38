// src/clipboard.rs - The shared kill buffer

/// One process-wide text buffer shared by every open buffer. Copy, cut,
/// kill-line and delete-to-end-of-line overwrite it; paste reads it. It
/// is owned by the editor and passed explicitly to the operations that
/// need it, never reached through a global.
#[derive(Debug, Clone, Default)]
pub struct Clipboard {
    text: String,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the clipboard contents wholesale.
    pub fn set(&mut self, text: String) {
        self.text = text;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}
