//! Client state models provided through Leptos context.
//!
//! DESIGN
//! ======
//! Plain data structs wrapped in `RwSignal`s by `app::App`. Keeping them
//! signal-free lets tests exercise transitions without a reactive runtime.

pub mod auth;
pub mod chat;
pub mod conversations;
