//! Chat overlay bus: one shared "open this conversation" callback.
//!
//! SYSTEM CONTEXT
//! ==============
//! The overlay provider installs a single handler and exposes a
//! [`ChatOverlayBus`] to its subtree through Leptos context. Any descendant
//! (feed cards, profile headers, the messages list) calls
//! [`ChatOverlayBus::open_chat`] without knowing who renders the chat.
//!
//! There is no queueing, fan-out, or history. Looking the bus up outside a
//! provider is an integration bug and surfaces as [`ChatBusError`].

#[cfg(test)]
#[path = "chat_bus_test.rs"]
mod chat_bus_test;

use std::fmt;
use std::sync::Arc;

use leptos::prelude::*;

use crate::net::types::ChatTarget;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ChatBusError {
    #[error("open_chat used outside a mounted ChatOverlayProvider")]
    ProviderNotMounted,
}

type Handler = Arc<dyn Fn(ChatTarget) + Send + Sync>;

/// Handle to the installed overlay handler.
#[derive(Clone)]
pub struct ChatOverlayBus {
    handler: Handler,
}

impl fmt::Debug for ChatOverlayBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatOverlayBus").finish_non_exhaustive()
    }
}

impl ChatOverlayBus {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(ChatTarget) + Send + Sync + 'static,
    {
        Self { handler: Arc::new(handler) }
    }

    /// Forward `target` to the handler, synchronously and exactly once.
    pub fn open_chat(&self, target: ChatTarget) {
        log::debug!("chat overlay: open {}", target.id);
        (self.handler)(target);
    }
}

/// Install `handler` as the bus for the current owner's subtree.
pub fn provide_chat_overlay<F>(handler: F) -> ChatOverlayBus
where
    F: Fn(ChatTarget) + Send + Sync + 'static,
{
    let bus = ChatOverlayBus::new(handler);
    provide_context(bus.clone());
    bus
}

/// Look up the bus installed by the nearest provider.
///
/// # Errors
///
/// Returns [`ChatBusError::ProviderNotMounted`] when no provider is above the
/// caller.
pub fn use_chat_overlay() -> Result<ChatOverlayBus, ChatBusError> {
    use_context::<ChatOverlayBus>().ok_or(ChatBusError::ProviderNotMounted)
}

/// Component-facing lookup that fails loudly, like `expect_context`.
///
/// # Panics
///
/// Panics when called outside a mounted provider.
pub fn expect_chat_overlay() -> ChatOverlayBus {
    match use_chat_overlay() {
        Ok(bus) => bus,
        Err(e) => panic!("{e}"),
    }
}
