//! Showcase application state

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position as CellPosition, Rect};

use crate::config::Config;
use crate::constants::MAX_VISIBLE_LIMIT;
use crate::icons::IconService;
use crate::logger::Logger;
use crate::toast::{
    ExpandDescription, PresenterConfig, ToastId, ToastLayout, ToastOptions, ToastPresenter, ToastSize, ToastStore,
    Variant,
};
use crate::ui::core::Action;

/// Sample title and description for each variant
fn demo_content(variant: Variant) -> (&'static str, &'static str) {
    match variant {
        Variant::Default => ("Event created", "Sunday, December 03 at 9:00 AM"),
        Variant::Success => ("Changes saved", "Your profile has been updated."),
        Variant::Error => ("Upload failed", "The file exceeds the 10 MB limit."),
        Variant::Warning => ("Storage almost full", "You have used 90% of your quota."),
        Variant::Info => ("New version available", "Restart to apply the update."),
    }
}

/// Application state
pub struct App {
    pub store: ToastStore,
    pub presenter: ToastPresenter,
    pub logger: Logger,
    pub icons: IconService,
    pub mouse_enabled: bool,
    pub show_logs: bool,
    pub should_quit: bool,
    /// Screen areas of the toasts drawn last frame
    pub hit_areas: Vec<(ToastId, Rect)>,
}

impl App {
    pub fn new(store: ToastStore, config: &Config, logger: Logger) -> Self {
        let mut presenter = ToastPresenter::new(store.clone(), config.toaster.clone());
        presenter.sync();

        Self {
            store,
            presenter,
            logger,
            icons: IconService::new(config.ui.icon_theme),
            mouse_enabled: config.ui.mouse_enabled,
            show_logs: false,
            should_quit: false,
            hit_areas: Vec::new(),
        }
    }

    /// Apply an action, returns whether the screen needs a redraw
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::AddToast(variant) => {
                let (title, description) = demo_content(variant);
                let id = self
                    .store
                    .add(ToastOptions::new(title).description(description).variant(variant));
                self.logger.log(format!("Added {} toast {}", variant.name(), id));
            }
            Action::AddSticky => {
                let id = self.store.add(
                    ToastOptions::new("Saved")
                        .description("This toast stays until you dismiss it.")
                        .variant(Variant::Success)
                        .duration(0),
                );
                self.logger.log(format!("Added sticky toast {}", id));
            }
            Action::DismissNewest => {
                if let Some(newest) = self.presenter.visible().first().map(|t| t.id()) {
                    self.presenter.dismiss(newest);
                    self.logger.log(format!("Dismissed {}", newest));
                }
            }
            Action::ClearToasts => {
                self.store.clear();
                self.logger.log("Cleared all toasts".to_string());
            }
            Action::ToggleLayout => self.update_defaults(|config| {
                config.layout = match config.layout.unwrap_or_default() {
                    ToastLayout::Default => Some(ToastLayout::Tab),
                    ToastLayout::Tab => Some(ToastLayout::Default),
                };
            }),
            Action::ToggleExpand => self.update_defaults(|config| {
                config.expand_description = match config.expand_description.unwrap_or_default() {
                    ExpandDescription::Hover => Some(ExpandDescription::Open),
                    ExpandDescription::Open => Some(ExpandDescription::Hover),
                };
            }),
            Action::CyclePosition => self.update_defaults(|config| config.position = config.position.next()),
            Action::CycleSize => self.update_defaults(|config| {
                config.size = match config.size.unwrap_or_default() {
                    ToastSize::Small => Some(ToastSize::Medium),
                    ToastSize::Medium => Some(ToastSize::Large),
                    ToastSize::Large => Some(ToastSize::Small),
                };
            }),
            Action::IncreaseCap => self.update_defaults(|config| {
                config.max_visible = (config.max_visible + 1).min(MAX_VISIBLE_LIMIT);
            }),
            Action::DecreaseCap => self.update_defaults(|config| {
                config.max_visible = config.max_visible.saturating_sub(1).max(1);
            }),
            Action::ToggleLogs => self.show_logs = !self.show_logs,
            Action::CycleIcons => self.icons.cycle_icon_theme(),
            Action::Quit => {
                self.logger.log("Quitting showcase".to_string());
                self.should_quit = true;
            }
            Action::None => return false,
        }
        // Store notifications are queued on the presenter's channel, pick them up now
        self.presenter.poll_changes();
        true
    }

    fn update_defaults(&mut self, change: impl FnOnce(&mut PresenterConfig)) {
        let mut config = self.presenter.config().clone();
        change(&mut config);
        self.logger.log(format!(
            "Presenter defaults: position={} max_visible={} layout={:?} expand={:?} size={:?}",
            config.position.name(),
            config.max_visible,
            config.layout.unwrap_or_default(),
            config.expand_description.unwrap_or_default(),
            config.size.unwrap_or_default(),
        ));
        self.presenter.set_config(config);
        self.presenter.sync();
    }

    /// Hover expands, left click dismisses
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        if !self.mouse_enabled {
            return false;
        }

        let target = self.toast_at(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved => {
                self.presenter.hover(target);
                true
            }
            MouseEventKind::Down(MouseButton::Left) => match target {
                Some(id) => {
                    self.presenter.dismiss(id);
                    self.logger.log(format!("Dismissed {} by click", id));
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    fn toast_at(&self, column: u16, row: u16) -> Option<ToastId> {
        self.hit_areas
            .iter()
            .find(|(_, rect)| rect.contains(CellPosition::new(column, row)))
            .map(|(id, _)| *id)
    }

    /// Store changed, possibly from a dismiss timer
    pub fn on_store_change(&mut self) {
        self.presenter.sync();
        self.presenter.poll_changes();
    }

    /// Advance presentation transitions
    pub fn on_tick(&mut self) -> bool {
        self.presenter.advance()
    }
}
