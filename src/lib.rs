//! bongtoast - toast notifications for terminal and web front ends
//!
//! The library provides an observable toast store, a presenter that caps,
//! resolves, and times the toasts it shows, a terminal showcase built with
//! Ratatui, and an installer that copies the web component into a project.
//!
//! # Modules
//!
//! * [`toast`] - Toast store, presenter, and dismiss timers
//! * [`config`] - Application configuration management
//! * [`ui`] - Terminal showcase
//! * [`installer`] - Web component installer
//! * [`utils`] - Utility functions and helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Web component installer
pub mod installer;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Toast store, presenter, and timers
pub mod toast;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for colour handling and other helpers
pub mod utils;

pub use toast::{dismiss_toast, toast, ToastId, ToastOptions, ToastPresenter, ToastStore};
