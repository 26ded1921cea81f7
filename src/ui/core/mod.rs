//! Core UI functionality for the showcase.
//!
//! - [`actions`] - Action definitions triggered by key bindings
//! - [`event_handler`] - Terminal event polling with a tick fallback

pub mod actions;
pub mod event_handler;

pub use actions::Action;
pub use event_handler::{EventHandler, EventType};
