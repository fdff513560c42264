//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Protected pages are wrapped in `AuthGate` by the router.

pub mod feed;
pub mod login;
pub mod messages;

use leptos::prelude::*;

use crate::state::conversations::ConversationsState;

/// Fetch the conversation list into `state` once on mount (browser only).
pub(crate) fn load_conversations(state: RwSignal<ConversationsState>) {
    state.update(ConversationsState::begin_load);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_conversations().await;
        state.try_update(|s| s.finish_load(result));
    });
}
