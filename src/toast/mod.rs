//! Toast notifications.
//!
//! The toast subsystem is split in three layers:
//!
//! * [`store`] - the canonical, observable list of active toasts
//! * [`presenter`] - the capped, resolved view of that list plus per-toast
//!   auto-dismiss timers and presentation lifecycle
//! * [`timers`] - cancellable dismiss timers keyed by toast id
//!
//! Records are stored exactly as requested. Optional fields are resolved
//! against presenter defaults only when presenting, see
//! [`EffectiveConfig::resolve`](presenter::EffectiveConfig::resolve).

pub mod presenter;
pub mod store;
pub mod timers;

pub use presenter::{EffectiveConfig, Phase, PresentedToast, PresenterConfig, ResolvedSpring, ToastPresenter};
pub use store::{dismiss_toast, toast, Snapshot, Subscription, ToastStore};
pub use timers::DismissTimers;

use crate::constants::TOAST_ID_PREFIX;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a toast, unique for the lifetime of its store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl ToastId {
    pub(crate) fn new(sequence: u64) -> Self {
        Self(sequence)
    }

    /// Raw sequence number backing this id
    #[must_use]
    pub fn sequence(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", TOAST_ID_PREFIX, self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Default,
    Success,
    Error,
    Warning,
    Info,
}

impl Variant {
    pub const ALL: [Variant; 5] = [
        Variant::Default,
        Variant::Success,
        Variant::Error,
        Variant::Warning,
        Variant::Info,
    ];

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Default => "default",
            Variant::Success => "success",
            Variant::Error => "error",
            Variant::Warning => "warning",
            Variant::Info => "info",
        }
    }
}

/// Toast size, affects width and padding when rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ToastSize {
    #[serde(rename = "sm", alias = "small")]
    Small,
    #[default]
    #[serde(rename = "md", alias = "medium")]
    Medium,
    #[serde(rename = "lg", alias = "large")]
    Large,
}

impl ToastSize {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            ToastSize::Small => "sm",
            ToastSize::Medium => "md",
            ToastSize::Large => "lg",
        }
    }
}

/// Visual template used for a toast. Never affects ordering or selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastLayout {
    #[default]
    Default,
    Tab,
}

/// Whether the description is always shown or only while hovered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpandDescription {
    Open,
    #[default]
    Hover,
}

/// Colour and radius overrides. Every field is an independent overlay.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastStyle {
    /// Background colour (CSS colour string)
    pub bg: Option<String>,
    /// Text colour
    pub fg: Option<String>,
    pub border_color: Option<String>,
    /// Border radius in px
    pub border_radius: Option<u16>,
}

impl ToastStyle {
    /// Overlay `other` on top of `self`, field by field.
    #[must_use]
    pub fn overlay(&self, other: &ToastStyle) -> ToastStyle {
        ToastStyle {
            bg: other.bg.clone().or_else(|| self.bg.clone()),
            fg: other.fg.clone().or_else(|| self.fg.clone()),
            border_color: other.border_color.clone().or_else(|| self.border_color.clone()),
            border_radius: other.border_radius.or(self.border_radius),
        }
    }
}

/// Spring animation tuning. Presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastSpring {
    pub stiffness: Option<f32>,
    pub damping: Option<f32>,
    pub mass: Option<f32>,
}

impl ToastSpring {
    #[must_use]
    pub fn overlay(&self, other: &ToastSpring) -> ToastSpring {
        ToastSpring {
            stiffness: other.stiffness.or(self.stiffness),
            damping: other.damping.or(self.damping),
            mass: other.mass.or(self.mass),
        }
    }
}

/// Options accepted by [`ToastStore::add`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ToastOptions {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub variant: Option<Variant>,
    /// Auto-dismiss duration in ms, `0` disables auto-dismiss
    #[serde(default)]
    pub duration: Option<u64>,
    #[serde(default)]
    pub size: Option<ToastSize>,
    #[serde(default)]
    pub layout: Option<ToastLayout>,
    #[serde(default)]
    pub expand_description: Option<ExpandDescription>,
    #[serde(default)]
    pub style: Option<ToastStyle>,
    #[serde(default)]
    pub spring: Option<ToastSpring>,
}

impl ToastOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    #[must_use]
    pub fn duration(mut self, millis: u64) -> Self {
        self.duration = Some(millis);
        self
    }

    #[must_use]
    pub fn size(mut self, size: ToastSize) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub fn layout(mut self, layout: ToastLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    #[must_use]
    pub fn expand_description(mut self, expand: ExpandDescription) -> Self {
        self.expand_description = Some(expand);
        self
    }

    #[must_use]
    pub fn style(mut self, style: ToastStyle) -> Self {
        self.style = Some(style);
        self
    }

    #[must_use]
    pub fn spring(mut self, spring: ToastSpring) -> Self {
        self.spring = Some(spring);
        self
    }
}

/// One active notification as held by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastRecord {
    pub id: ToastId,
    pub title: String,
    pub description: Option<String>,
    pub variant: Variant,
    pub duration: Option<u64>,
    pub size: Option<ToastSize>,
    pub layout: Option<ToastLayout>,
    pub expand_description: Option<ExpandDescription>,
    pub style: Option<ToastStyle>,
    pub spring: Option<ToastSpring>,
}

impl ToastRecord {
    pub(crate) fn from_options(id: ToastId, options: ToastOptions) -> Self {
        Self {
            id,
            title: options.title,
            description: options.description,
            variant: options.variant.unwrap_or_default(),
            duration: options.duration,
            size: options.size,
            layout: options.layout,
            expand_description: options.expand_description,
            style: options.style,
            spring: options.spring,
        }
    }

    #[must_use]
    pub fn has_description(&self) -> bool {
        self.description.as_deref().is_some_and(|d| !d.is_empty())
    }
}
