//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The cross-cutting pieces every page depends on live here, isolated from
//! markup so they can be tested without a browser: asset URL resolution, the
//! auth gate's state machine, and the chat overlay bus.

pub mod asset_path;
pub mod auth;
pub mod chat_bus;
