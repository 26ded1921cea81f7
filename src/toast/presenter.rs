//! Presentation of the toast store.
//!
//! A [`ToastPresenter`] watches a [`ToastStore`], keeps the newest
//! `max_visible` toasts on screen with their settings resolved against the
//! presenter defaults, and runs one auto-dismiss timer per visible toast.

use super::store::{Snapshot, Subscription, ToastStore};
use super::timers::DismissTimers;
use super::{ExpandDescription, ToastId, ToastLayout, ToastRecord, ToastSize, ToastSpring, ToastStyle, Variant};
use crate::constants::{
    DEFAULT_BORDER_RADIUS, DEFAULT_DURATION_MS, DEFAULT_MAX_VISIBLE, DEFAULT_SPRING_DAMPING, DEFAULT_SPRING_MASS,
    DEFAULT_SPRING_STIFFNESS,
};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Corner the toast stack is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

impl Position {
    #[must_use]
    pub fn is_top(&self) -> bool {
        matches!(self, Position::TopLeft | Position::TopRight)
    }

    #[must_use]
    pub fn is_left(&self) -> bool {
        matches!(self, Position::TopLeft | Position::BottomLeft)
    }

    /// Next corner, clockwise
    #[must_use]
    pub fn next(&self) -> Position {
        match self {
            Position::TopLeft => Position::TopRight,
            Position::TopRight => Position::BottomRight,
            Position::BottomRight => Position::BottomLeft,
            Position::BottomLeft => Position::TopLeft,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopRight => "top-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomRight => "bottom-right",
        }
    }
}

/// Presenter-level defaults. Every toast may override each of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenterConfig {
    pub position: Position,
    /// Maximum number of toasts shown at once
    pub max_visible: usize,
    /// Default auto-dismiss duration in ms (0 disables auto-dismiss)
    pub duration: Option<u64>,
    pub size: Option<ToastSize>,
    pub layout: Option<ToastLayout>,
    pub expand_description: Option<ExpandDescription>,
    pub style: Option<ToastStyle>,
    pub spring: Option<ToastSpring>,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            position: Position::default(),
            max_visible: DEFAULT_MAX_VISIBLE,
            duration: None,
            size: None,
            layout: None,
            expand_description: None,
            style: None,
            spring: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedSpring {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl ResolvedSpring {
    fn from_overlay(spring: &ToastSpring) -> Self {
        Self {
            stiffness: spring.stiffness.unwrap_or(DEFAULT_SPRING_STIFFNESS),
            damping: spring.damping.unwrap_or(DEFAULT_SPRING_DAMPING),
            mass: spring.mass.unwrap_or(DEFAULT_SPRING_MASS),
        }
    }
}

/// Fully resolved display settings of one toast.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectiveConfig {
    pub variant: Variant,
    /// `None` means the toast never auto-dismisses
    pub duration: Option<Duration>,
    pub size: ToastSize,
    pub layout: ToastLayout,
    pub expand_description: ExpandDescription,
    pub style: ToastStyle,
    pub border_radius: u16,
    pub spring: ResolvedSpring,
}

impl EffectiveConfig {
    /// Resolve each field as toast value, then presenter default, then fallback.
    #[must_use]
    pub fn resolve(record: &ToastRecord, config: &PresenterConfig) -> Self {
        let duration_ms = record.duration.or(config.duration).unwrap_or(DEFAULT_DURATION_MS);

        let global_style = config.style.clone().unwrap_or_default();
        let style = match &record.style {
            Some(own) => global_style.overlay(own),
            None => global_style,
        };

        let global_spring = config.spring.unwrap_or_default();
        let spring = match &record.spring {
            Some(own) => global_spring.overlay(own),
            None => global_spring,
        };

        Self {
            variant: record.variant,
            duration: (duration_ms > 0).then(|| Duration::from_millis(duration_ms)),
            size: record.size.or(config.size).unwrap_or_default(),
            layout: record.layout.or(config.layout).unwrap_or_default(),
            expand_description: record
                .expand_description
                .or(config.expand_description)
                .unwrap_or_default(),
            border_radius: style.border_radius.unwrap_or(DEFAULT_BORDER_RADIUS),
            style,
            spring: ResolvedSpring::from_overlay(&spring),
        }
    }
}

/// Presentation lifecycle of a visible toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Entering,
    Idle,
    Expanded,
    Exiting,
}

#[derive(Debug, Clone)]
pub struct PresentedToast {
    pub record: ToastRecord,
    pub effective: EffectiveConfig,
    pub phase: Phase,
    pub hovered: bool,
}

impl PresentedToast {
    fn entering(record: ToastRecord, effective: EffectiveConfig) -> Self {
        Self {
            record,
            effective,
            phase: Phase::Entering,
            hovered: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.record.id
    }

    /// Whether the description is currently shown
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.record.has_description()
            && match self.effective.expand_description {
                ExpandDescription::Open => true,
                ExpandDescription::Hover => self.hovered,
            }
    }

    fn settled_phase(&self) -> Phase {
        if self.is_expanded() {
            Phase::Expanded
        } else {
            Phase::Idle
        }
    }

    fn is_settled(&self) -> bool {
        matches!(self.phase, Phase::Idle | Phase::Expanded)
    }
}

/// Capped, resolved view of a [`ToastStore`].
///
/// Call [`sync`](Self::sync) (or [`poll_changes`](Self::poll_changes)) after
/// store changes and [`advance`](Self::advance) once per frame. Toasts that
/// left the visible set wait in [`exiting`](Self::exiting) until the next
/// `advance`; at most `max_visible` of them are kept.
pub struct ToastPresenter {
    store: ToastStore,
    config: PresenterConfig,
    subscription: Option<Subscription>,
    changes: mpsc::UnboundedReceiver<()>,
    last_snapshot: Option<Snapshot>,
    config_dirty: bool,
    visible: Vec<PresentedToast>,
    exiting: Vec<PresentedToast>,
    queued: usize,
    timers: DismissTimers,
}

impl ToastPresenter {
    /// Create a presenter subscribed to `store`. Must be called inside a tokio runtime
    /// before the first [`sync`](Self::sync) arms any timer.
    pub fn new(store: ToastStore, config: PresenterConfig) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let subscription = store.subscribe(move || {
            let _ = tx.send(());
        });

        Self {
            timers: DismissTimers::new(store.clone()),
            store,
            config,
            subscription: Some(subscription),
            changes: rx,
            last_snapshot: None,
            config_dirty: true,
            visible: Vec::new(),
            exiting: Vec::new(),
            queued: 0,
        }
    }

    /// Re-evaluate the visible set against the current store contents.
    ///
    /// Returns `false` when neither the store nor the config changed since the
    /// last call.
    pub fn sync(&mut self) -> bool {
        let snapshot = self.store.snapshot();
        let unchanged = self
            .last_snapshot
            .as_ref()
            .is_some_and(|last| Arc::ptr_eq(last, &snapshot));
        if unchanged && !self.config_dirty {
            return false;
        }
        self.config_dirty = false;

        let mut previous: HashMap<ToastId, PresentedToast> =
            self.visible.drain(..).map(|t| (t.record.id, t)).collect();
        let mut next = Vec::with_capacity(self.config.max_visible.min(snapshot.len()));

        for record in snapshot.iter().take(self.config.max_visible) {
            let effective = EffectiveConfig::resolve(record, &self.config);
            let presented = match previous.remove(&record.id) {
                Some(mut existing) => {
                    existing.effective = effective;
                    if existing.is_settled() {
                        existing.phase = existing.settled_phase();
                    }
                    existing
                }
                None => PresentedToast::entering(record.clone(), effective),
            };

            match presented.effective.duration {
                Some(duration) => self.timers.arm(record.id, duration),
                None => self.timers.cancel(record.id),
            }
            next.push(presented);
        }

        // Dismissed, cleared, or pushed beyond the cap
        let mut gone: Vec<PresentedToast> = previous.into_values().collect();
        gone.sort_by(|a, b| b.record.id.cmp(&a.record.id));
        for mut toast in gone {
            log::debug!("presenter: {} leaves the visible set", toast.record.id);
            toast.phase = Phase::Exiting;
            toast.hovered = false;
            self.exiting.push(toast);
        }

        let visible_ids: HashSet<ToastId> = next.iter().map(|t| t.record.id).collect();
        self.timers.retain(|id| visible_ids.contains(&id));
        self.exiting.retain(|t| !visible_ids.contains(&t.record.id));
        // Without `advance` the oldest departures are dropped first
        let cap = self.config.max_visible.max(1);
        if self.exiting.len() > cap {
            let overflow = self.exiting.len() - cap;
            self.exiting.drain(..overflow);
        }

        self.queued = snapshot.len().saturating_sub(next.len());
        self.visible = next;
        self.last_snapshot = Some(snapshot);
        true
    }

    /// Drain pending store notifications and sync if there were any
    pub fn poll_changes(&mut self) -> bool {
        let mut notified = false;
        while self.changes.try_recv().is_ok() {
            notified = true;
        }
        notified && self.sync()
    }

    /// Wait for the next store notification
    pub async fn changed(&mut self) {
        if self.changes.recv().await.is_none() {
            // The store keeps the sender alive for as long as we are subscribed
            std::future::pending::<()>().await;
        }
    }

    /// Finish entering transitions and drop toasts that finished exiting
    pub fn advance(&mut self) -> bool {
        let mut changed = !self.exiting.is_empty();
        self.exiting.clear();

        for toast in &mut self.visible {
            if toast.phase == Phase::Entering {
                toast.phase = toast.settled_phase();
                changed = true;
            }
        }
        changed
    }

    /// Move the pointer over `id`, or away from every toast with `None`
    pub fn hover(&mut self, id: Option<ToastId>) {
        for toast in &mut self.visible {
            toast.hovered = Some(toast.record.id) == id;
            if toast.is_settled() {
                toast.phase = toast.settled_phase();
            }
        }
    }

    /// Dismiss a toast on behalf of the user
    pub fn dismiss(&mut self, id: ToastId) {
        self.store.dismiss(id);
        self.sync();
    }

    /// Replace presenter defaults. Stored toasts are untouched.
    pub fn set_config(&mut self, config: PresenterConfig) {
        self.config = config;
        self.config_dirty = true;
    }

    #[must_use]
    pub fn config(&self) -> &PresenterConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &ToastStore {
        &self.store
    }

    /// Visible toasts, newest first
    #[must_use]
    pub fn visible(&self) -> &[PresentedToast] {
        &self.visible
    }

    /// Toasts that left the visible set since the last `advance`, in departure order
    #[must_use]
    pub fn exiting(&self) -> &[PresentedToast] {
        &self.exiting
    }

    /// Toasts held by the store but hidden by the cap
    #[must_use]
    pub fn queued(&self) -> usize {
        self.queued
    }

    #[must_use]
    pub fn timers(&self) -> &DismissTimers {
        &self.timers
    }

    /// Unsubscribe from the store and cancel every timer
    pub fn detach(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
        self.timers.cancel_all();
    }
}

impl Drop for ToastPresenter {
    fn drop(&mut self) {
        self.detach();
    }
}
