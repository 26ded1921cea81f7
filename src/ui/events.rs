//! Event handling and key bindings

use super::app::App;
use super::core::{Action, EventType};
use crate::toast::Variant;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to a showcase action
#[must_use]
pub fn key_to_action(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('1') => Action::AddToast(Variant::Default),
        KeyCode::Char('2') => Action::AddToast(Variant::Success),
        KeyCode::Char('3') => Action::AddToast(Variant::Error),
        KeyCode::Char('4') => Action::AddToast(Variant::Warning),
        KeyCode::Char('5') => Action::AddToast(Variant::Info),
        KeyCode::Char('s') => Action::AddSticky,
        KeyCode::Char('x') | KeyCode::Backspace => Action::DismissNewest,
        KeyCode::Char('c') => Action::ClearToasts,
        KeyCode::Char('t') => Action::ToggleLayout,
        KeyCode::Char('o') => Action::ToggleExpand,
        KeyCode::Char('p') => Action::CyclePosition,
        KeyCode::Char('z') => Action::CycleSize,
        KeyCode::Char('+' | '=') => Action::IncreaseCap,
        KeyCode::Char('-') => Action::DecreaseCap,
        KeyCode::Char('l') => Action::ToggleLogs,
        KeyCode::Char('i') => Action::CycleIcons,
        _ => Action::None,
    }
}

/// Handle a key press, returns whether the screen needs a redraw
pub fn handle_key(key: KeyEvent, app: &mut App) -> bool {
    app.apply(key_to_action(key))
}

/// Handle a terminal event, returns whether the screen needs a redraw
pub fn handle_event(event: EventType, app: &mut App) -> bool {
    match event {
        EventType::Key(key) => handle_key(key, app),
        EventType::Mouse(mouse) => app.handle_mouse(mouse),
        EventType::Resize(_, _) => true,
        // Tick also refreshes the countdowns shown in the body
        EventType::Tick => {
            app.on_tick();
            true
        }
        EventType::Other => false,
    }
}
