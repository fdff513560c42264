//! State owned by the chat overlay.
//!
//! The overlay is the single handler behind the chat overlay bus; this is what
//! that handler mutates. Nothing here is persisted.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::ChatTarget;

/// Which conversation, if any, the overlay is showing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatOverlayState {
    pub active: Option<ChatTarget>,
    pub minimized: bool,
}

impl ChatOverlayState {
    /// Show `target`, replacing whatever was open and restoring a minimized
    /// overlay.
    pub fn open(&mut self, target: ChatTarget) {
        self.active = Some(target);
        self.minimized = false;
    }

    pub fn close(&mut self) {
        self.active = None;
        self.minimized = false;
    }

    /// No-op when nothing is open.
    pub fn toggle_minimized(&mut self) {
        if self.active.is_some() {
            self.minimized = !self.minimized;
        }
    }
}
