//! Backend networking.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` mirrors the backend's JSON payloads; `api` wraps the handful of
//! HTTP calls the client makes.

pub mod api;
pub mod types;
