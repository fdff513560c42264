//! DTOs exchanged with the identity and messaging backend.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON so serde round-trips stay
//! lossless. Optional fields default when absent.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Signed-in user as reported by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub handle: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Person shown in a chat row or overlay header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatUser {
    pub id: String,
    pub name: String,
    pub handle: String,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub online: bool,
}

/// A conversation some component wants opened in the chat overlay.
///
/// Constructed by whoever initiates the chat; the overlay bus forwards it
/// untouched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatTarget {
    pub id: String,
    /// Backend user id when it differs from the display user's id.
    #[serde(default)]
    pub backend_user_id: Option<String>,
    pub display_user: ChatUser,
    #[serde(default)]
    pub preview_text: Option<String>,
    #[serde(default)]
    pub last_message_text: Option<String>,
    /// Pre-formatted, e.g. `"2m"` or `"Yesterday"`.
    #[serde(default)]
    pub timestamp_label: Option<String>,
    #[serde(default)]
    pub unread_count: Option<u32>,
}

impl ChatTarget {
    /// Start a fresh conversation with `user`, with no history attached.
    #[must_use]
    pub fn with_user(user: ChatUser) -> Self {
        Self {
            id: format!("dm:{}", user.id),
            backend_user_id: Some(user.id.clone()),
            display_user: user,
            preview_text: None,
            last_message_text: None,
            timestamp_label: None,
            unread_count: None,
        }
    }

    /// Text for a conversation list row: last message, then preview, then empty.
    #[must_use]
    pub fn summary_text(&self) -> &str {
        self.last_message_text
            .as_deref()
            .or(self.preview_text.as_deref())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn has_unread(&self) -> bool {
        self.unread_count.is_some_and(|n| n > 0)
    }
}
