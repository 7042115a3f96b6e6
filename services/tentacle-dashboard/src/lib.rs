//! # Tentacle Dashboard
//!
//! Serves the projected dashboard view and keeps it fresh from the
//! configured snapshot feed.

pub mod api;
pub mod config;

pub use api::{render, router, AppState};
pub use config::Config;
