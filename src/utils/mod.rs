//! Utility modules for the bongtoast application.
//!
//! - [`color`] - CSS colour parsing and variant palettes for terminal rendering

pub mod color;
