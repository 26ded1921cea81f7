//! Reusable UI components

pub mod log_panel;
pub mod showcase_panel;
pub mod status_bar;
pub mod toast_stack;

pub use log_panel::LogPanel;
pub use showcase_panel::ShowcasePanel;
pub use status_bar::StatusBar;
pub use toast_stack::ToastStack;
