//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state from Leptos context providers. Presentational
//! pieces stay thin; the decisions they depend on live in `util`.

pub mod app_header;
pub mod auth_gate;
pub mod avatar;
pub mod chat_overlay;
pub mod contact_card;
pub mod conversation_row;
pub mod pwa_head;
