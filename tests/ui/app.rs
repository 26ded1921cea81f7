use bongtoast::config::Config;
use bongtoast::logger::Logger;
use bongtoast::toast::presenter::Position;
use bongtoast::toast::{ExpandDescription, ToastLayout, ToastSize, ToastStore, Variant};
use bongtoast::ui::core::Action;
use bongtoast::ui::App;

fn app() -> (App, ToastStore) {
    let store = ToastStore::new();
    let app = App::new(store.clone(), &Config::default(), Logger::new());
    (app, store)
}

#[tokio::test]
async fn test_add_and_dismiss_newest() {
    let (mut app, store) = app();

    assert!(app.apply(Action::AddToast(Variant::Error)));
    assert!(app.apply(Action::AddToast(Variant::Success)));
    assert_eq!(app.presenter.visible().len(), 2);
    assert_eq!(app.presenter.visible()[0].effective.variant, Variant::Success);

    app.apply(Action::DismissNewest);
    assert_eq!(store.len(), 1);
    assert_eq!(store.snapshot()[0].variant, Variant::Error);
    assert_eq!(app.presenter.visible().len(), 1);
}

#[tokio::test]
async fn test_sticky_toast_is_not_timed() {
    let (mut app, store) = app();

    app.apply(Action::AddSticky);
    let id = store.snapshot()[0].id;
    assert_eq!(app.presenter.visible()[0].effective.duration, None);
    assert!(!app.presenter.timers().is_armed(id));
}

#[tokio::test]
async fn test_clear_empties_store() {
    let (mut app, store) = app();
    app.apply(Action::AddToast(Variant::Info));
    app.apply(Action::AddToast(Variant::Info));

    app.apply(Action::ClearToasts);
    assert!(store.is_empty());
    assert!(app.presenter.visible().is_empty());
    assert_eq!(app.presenter.exiting().len(), 2);
}

#[tokio::test]
async fn test_presenter_defaults_toggle() {
    let (mut app, _store) = app();

    app.apply(Action::ToggleLayout);
    assert_eq!(app.presenter.config().layout, Some(ToastLayout::Tab));
    app.apply(Action::ToggleLayout);
    assert_eq!(app.presenter.config().layout, Some(ToastLayout::Default));

    app.apply(Action::ToggleExpand);
    assert_eq!(app.presenter.config().expand_description, Some(ExpandDescription::Open));

    app.apply(Action::CycleSize);
    assert_eq!(app.presenter.config().size, Some(ToastSize::Large));

    app.apply(Action::CyclePosition);
    assert_eq!(app.presenter.config().position, Position::BottomLeft);
}

#[tokio::test]
async fn test_cap_is_bounded() {
    let (mut app, _store) = app();

    for _ in 0..10 {
        app.apply(Action::DecreaseCap);
    }
    assert_eq!(app.presenter.config().max_visible, 1);

    for _ in 0..30 {
        app.apply(Action::IncreaseCap);
    }
    assert_eq!(app.presenter.config().max_visible, 20);
}

#[tokio::test]
async fn test_lowering_cap_queues_toasts() {
    let (mut app, store) = app();
    for variant in Variant::ALL {
        app.apply(Action::AddToast(variant));
    }
    assert_eq!(app.presenter.queued(), 0);

    app.apply(Action::DecreaseCap);
    app.apply(Action::DecreaseCap);
    assert_eq!(app.presenter.visible().len(), 3);
    assert_eq!(app.presenter.queued(), 2);
    assert_eq!(store.len(), 5);
}

#[tokio::test]
async fn test_quit_and_noop() {
    let (mut app, _store) = app();

    assert!(!app.apply(Action::None));
    assert!(!app.should_quit);

    app.apply(Action::Quit);
    assert!(app.should_quit);
}

#[tokio::test]
async fn test_actions_are_logged() {
    let (mut app, _store) = app();
    app.apply(Action::AddToast(Variant::Warning));

    let logs = app.logger.get_logs();
    assert!(logs[0].contains("Added warning toast bong-toast-"));
}
