//! Icon service for managing different icon themes
//!
//! Toast variants and showcase chrome draw their glyphs from here so that the
//! whole UI can switch between emoji, Unicode, and ASCII renderings.

use crate::toast::Variant;
use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    #[default]
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Leading glyph of a toast. The default variant has none.
    #[must_use]
    pub fn variant(&self, variant: Variant) -> Option<&'static str> {
        let icon = match (self.current_theme, variant) {
            (_, Variant::Default) => return None,
            (IconTheme::Emoji, Variant::Success) => "✅",
            (IconTheme::Emoji, Variant::Error) => "❌",
            (IconTheme::Emoji, Variant::Warning) => "⚠️",
            (IconTheme::Emoji, Variant::Info) => "ℹ️",
            (IconTheme::Unicode, Variant::Success) => "✔",
            (IconTheme::Unicode, Variant::Error) => "✘",
            (IconTheme::Unicode, Variant::Warning) => "▲",
            (IconTheme::Unicode, Variant::Info) => "ⓘ",
            (IconTheme::Ascii, Variant::Success) => "[ok]",
            (IconTheme::Ascii, Variant::Error) => "[x]",
            (IconTheme::Ascii, Variant::Warning) => "[!]",
            (IconTheme::Ascii, Variant::Info) => "[i]",
        };
        Some(icon)
    }

    /// Marker shown next to the title when a description can be hovered open
    #[must_use]
    pub fn expand_hint(&self, expanded: bool) -> &'static str {
        match (self.current_theme, expanded) {
            (IconTheme::Ascii, false) => "v",
            (IconTheme::Ascii, true) => "^",
            (_, false) => "▾",
            (_, true) => "▴",
        }
    }

    /// Marker for toasts that never auto-dismiss
    #[must_use]
    pub fn sticky(&self) -> &'static str {
        match self.current_theme {
            IconTheme::Emoji => "📌",
            IconTheme::Unicode => "•",
            IconTheme::Ascii => "*",
        }
    }
}
