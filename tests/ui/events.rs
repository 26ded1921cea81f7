use bongtoast::config::Config;
use bongtoast::logger::Logger;
use bongtoast::toast::{Phase, ToastOptions, ToastStore, Variant};
use bongtoast::ui::core::{Action, EventType};
use bongtoast::ui::{handle_event, key_to_action, App};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_variant_keys() {
    let expected = ['1', '2', '3', '4', '5'].into_iter().zip(Variant::ALL);
    for (c, variant) in expected {
        assert_eq!(key_to_action(key(KeyCode::Char(c))), Action::AddToast(variant));
    }
}

#[test]
fn test_ctrl_c_quits_but_c_clears() {
    assert_eq!(
        key_to_action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Action::Quit
    );
    assert_eq!(key_to_action(key(KeyCode::Char('c'))), Action::ClearToasts);
}

#[test]
fn test_showcase_bindings() {
    let bindings = [
        (KeyCode::Char('q'), Action::Quit),
        (KeyCode::Esc, Action::Quit),
        (KeyCode::Char('s'), Action::AddSticky),
        (KeyCode::Char('x'), Action::DismissNewest),
        (KeyCode::Backspace, Action::DismissNewest),
        (KeyCode::Char('t'), Action::ToggleLayout),
        (KeyCode::Char('o'), Action::ToggleExpand),
        (KeyCode::Char('p'), Action::CyclePosition),
        (KeyCode::Char('z'), Action::CycleSize),
        (KeyCode::Char('+'), Action::IncreaseCap),
        (KeyCode::Char('='), Action::IncreaseCap),
        (KeyCode::Char('-'), Action::DecreaseCap),
        (KeyCode::Char('l'), Action::ToggleLogs),
        (KeyCode::Char('i'), Action::CycleIcons),
        (KeyCode::Char('?'), Action::None),
    ];
    for (code, action) in bindings {
        assert_eq!(key_to_action(key(code)), action, "{code:?}");
    }
}

#[tokio::test]
async fn test_event_redraw_decisions() {
    let store = ToastStore::new();
    let mut app = App::new(store.clone(), &Config::default(), Logger::new());

    assert!(!handle_event(EventType::Other, &mut app));
    assert!(handle_event(EventType::Resize(80, 24), &mut app));
    assert!(!handle_event(EventType::Key(key(KeyCode::Char('?'))), &mut app));

    store.add(ToastOptions::new("tick me"));
    app.on_store_change();
    assert!(handle_event(EventType::Tick, &mut app));
    assert_eq!(app.presenter.visible()[0].phase, Phase::Idle);

    assert!(handle_event(EventType::Key(key(KeyCode::Char('q'))), &mut app));
    assert!(app.should_quit);
}
