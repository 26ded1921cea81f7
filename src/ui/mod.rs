//! UI module for the bongtoast showcase
//!
//! This module handles the terminal rendering of the toast stack and the
//! showcase's own chrome and key bindings.

pub mod app;
pub mod components;
pub mod core;
pub mod events;
pub mod layout;
pub mod renderer;

pub use app::App;
pub use events::{handle_event, handle_key, key_to_action};
pub use layout::LayoutManager;
pub use renderer::run_app;
