//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written only by the session provider (`app::provide_session`) and read by
//! the auth gate and user-aware components. The gate never mutates it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Session status reported by the session provider.
///
/// Starts with `loading = true`; once resolved, `user` stays put until a
/// sign-in or sign-out restarts the cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthSession {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthSession {
    fn default() -> Self {
        Self::pending()
    }
}

impl AuthSession {
    #[must_use]
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    /// A resolved session, signed in or not.
    #[must_use]
    pub fn resolved(user: Option<User>) -> Self {
        Self { user, loading: false }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self::resolved(None)
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        !self.loading && self.user.is_some()
    }

    /// Next session after a `/api/auth/me` lookup.
    ///
    /// A failed lookup says nothing about who is signed in, so the current
    /// session is kept as is. A session that never resolved stays pending.
    #[must_use]
    pub fn after_fetch(&self, outcome: Result<Option<User>, String>) -> Self {
        match outcome {
            Ok(user) => Self::resolved(user),
            Err(e) => {
                log::warn!("session lookup failed, keeping current session: {e}");
                self.clone()
            }
        }
    }

    /// Display name for header chrome, if signed in.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.name.as_str())
    }
}
