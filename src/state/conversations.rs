//! Conversation list shown on the feed and messages pages.

#[cfg(test)]
#[path = "conversations_test.rs"]
mod conversations_test;

use crate::net::types::{ChatTarget, ChatUser};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConversationsState {
    pub items: Vec<ChatTarget>,
    pub loading: bool,
    /// Set when the last fetch failed; cleared by the next success.
    pub failed: bool,
}

impl ConversationsState {
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Apply a fetch result. `None` keeps the previous items.
    pub fn finish_load(&mut self, result: Option<Vec<ChatTarget>>) {
        self.loading = false;
        match result {
            Some(items) => {
                self.items = items;
                self.failed = false;
            }
            None => self.failed = true,
        }
    }

    /// Saturates rather than overflowing on absurd backend counts.
    #[must_use]
    pub fn total_unread(&self) -> u32 {
        self.items.iter().filter_map(|t| t.unread_count).fold(0u32, u32::saturating_add)
    }

    /// Online people from the conversation list, at most `limit`, unread first.
    #[must_use]
    pub fn suggested_contacts(&self, limit: usize) -> Vec<ChatUser> {
        let mut online: Vec<&ChatTarget> = self.items.iter().filter(|t| t.display_user.online).collect();
        online.sort_by_key(|t| std::cmp::Reverse(t.unread_count.unwrap_or(0)));
        online.into_iter().take(limit).map(|t| t.display_user.clone()).collect()
    }
}
