use bongtoast::toast::{
    EffectiveConfig, ExpandDescription, Phase, PresenterConfig, ToastId, ToastLayout, ToastOptions, ToastPresenter,
    ToastSize, ToastSpring, ToastStore, ToastStyle,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn capped(max_visible: usize) -> PresenterConfig {
    PresenterConfig {
        max_visible,
        ..Default::default()
    }
}

fn visible_titles(presenter: &ToastPresenter) -> Vec<String> {
    presenter.visible().iter().map(|t| t.record.title.clone()).collect()
}

fn resolve(options: ToastOptions, config: &PresenterConfig) -> EffectiveConfig {
    let store = ToastStore::new();
    store.add(options);
    EffectiveConfig::resolve(&store.snapshot()[0], config)
}

#[tokio::test]
async fn test_cap_shows_newest_and_reveals_queued() {
    let store = ToastStore::new();
    let mut presenter = ToastPresenter::new(store.clone(), capped(2));

    store.add(ToastOptions::new("A"));
    store.add(ToastOptions::new("B"));
    let c = store.add(ToastOptions::new("C"));
    presenter.poll_changes();

    assert_eq!(visible_titles(&presenter), vec!["C", "B"]);
    assert_eq!(presenter.queued(), 1);

    presenter.dismiss(c);
    assert_eq!(visible_titles(&presenter), vec!["B", "A"]);
    assert_eq!(presenter.queued(), 0);
}

#[tokio::test]
async fn test_cap_larger_than_store() {
    let store = ToastStore::new();
    let mut presenter = ToastPresenter::new(store.clone(), capped(5));

    store.add(ToastOptions::new("only"));
    presenter.poll_changes();
    assert_eq!(presenter.visible().len(), 1);
    assert_eq!(presenter.queued(), 0);
}

#[test]
fn test_size_precedence() {
    let global_large = PresenterConfig {
        size: Some(ToastSize::Large),
        ..Default::default()
    };

    assert_eq!(resolve(ToastOptions::new("r"), &PresenterConfig::default()).size, ToastSize::Medium);
    assert_eq!(resolve(ToastOptions::new("r"), &global_large).size, ToastSize::Large);
    assert_eq!(
        resolve(ToastOptions::new("r").size(ToastSize::Small), &global_large).size,
        ToastSize::Small
    );
}

#[test]
fn test_duration_resolution() {
    let defaults = PresenterConfig::default();
    let global = PresenterConfig {
        duration: Some(1000),
        ..Default::default()
    };
    let global_never = PresenterConfig {
        duration: Some(0),
        ..Default::default()
    };

    assert_eq!(resolve(ToastOptions::new("d"), &defaults).duration, Some(ms(4000)));
    assert_eq!(resolve(ToastOptions::new("d"), &global).duration, Some(ms(1000)));
    assert_eq!(resolve(ToastOptions::new("d").duration(250), &global).duration, Some(ms(250)));
    assert_eq!(resolve(ToastOptions::new("d").duration(0), &global).duration, None);
    assert_eq!(resolve(ToastOptions::new("d"), &global_never).duration, None);
}

#[test]
fn test_layout_and_expand_fallbacks() {
    let effective = resolve(ToastOptions::new("f"), &PresenterConfig::default());
    assert_eq!(effective.layout, ToastLayout::Default);
    assert_eq!(effective.expand_description, ExpandDescription::Hover);

    let global = PresenterConfig {
        layout: Some(ToastLayout::Tab),
        expand_description: Some(ExpandDescription::Open),
        ..Default::default()
    };
    let effective = resolve(ToastOptions::new("f").expand_description(ExpandDescription::Hover), &global);
    assert_eq!(effective.layout, ToastLayout::Tab);
    assert_eq!(effective.expand_description, ExpandDescription::Hover);
}

#[test]
fn test_style_overlays_per_field() {
    let global = PresenterConfig {
        style: Some(ToastStyle {
            bg: Some("#000000".to_string()),
            fg: Some("#ffffff".to_string()),
            border_color: None,
            border_radius: None,
        }),
        ..Default::default()
    };
    let own = ToastStyle {
        fg: Some("red".to_string()),
        ..Default::default()
    };

    let effective = resolve(ToastOptions::new("s").style(own), &global);
    assert_eq!(effective.style.bg.as_deref(), Some("#000000"));
    assert_eq!(effective.style.fg.as_deref(), Some("red"));
    assert_eq!(effective.border_radius, 14);
}

#[test]
fn test_spring_overlays_per_field() {
    let global = PresenterConfig {
        spring: Some(ToastSpring {
            stiffness: Some(300.0),
            ..Default::default()
        }),
        ..Default::default()
    };
    let own = ToastSpring {
        mass: Some(1.5),
        ..Default::default()
    };

    let spring = resolve(ToastOptions::new("s").spring(own), &global).spring;
    assert_eq!(spring.stiffness, 300.0);
    assert_eq!(spring.damping, 25.0);
    assert_eq!(spring.mass, 1.5);
}

#[tokio::test(start_paused = true)]
async fn test_user_dismiss_cancels_timer() {
    let store = ToastStore::new();
    let notifications = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&notifications);
    let _subscription = store.subscribe(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    let mut presenter = ToastPresenter::new(store.clone(), PresenterConfig::default());

    let id = store.add(ToastOptions::new("Short").duration(50));
    presenter.poll_changes();
    assert!(presenter.timers().is_armed(id));

    tokio::time::sleep(ms(10)).await;
    presenter.dismiss(id);
    assert!(!presenter.timers().is_armed(id));

    tokio::time::sleep(ms(100)).await;
    assert_eq!(notifications.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn test_auto_dismiss_moves_toast_to_exiting() {
    let store = ToastStore::new();
    let mut presenter = ToastPresenter::new(store.clone(), PresenterConfig::default());

    let id = store.add(ToastOptions::new("Fleeting").duration(100));
    presenter.poll_changes();

    tokio::time::sleep(ms(150)).await;
    assert!(!store.contains(id));

    assert!(presenter.poll_changes());
    assert!(presenter.visible().is_empty());
    assert_eq!(presenter.exiting().len(), 1);
    assert_eq!(presenter.exiting()[0].phase, Phase::Exiting);

    assert!(presenter.advance());
    assert!(presenter.exiting().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_sticky_toast_has_no_timer() {
    let store = ToastStore::new();
    let mut presenter = ToastPresenter::new(store.clone(), PresenterConfig::default());

    let id = store.add(ToastOptions::new("Saved").duration(0));
    presenter.poll_changes();
    assert!(!presenter.timers().is_armed(id));

    tokio::time::sleep(ms(60_000)).await;
    assert!(store.contains(id));
}

#[tokio::test(start_paused = true)]
async fn test_hidden_toast_starts_timer_when_revealed() {
    let store = ToastStore::new();
    let mut presenter = ToastPresenter::new(store.clone(), capped(1));

    let a = store.add(ToastOptions::new("A").duration(100));
    let b = store.add(ToastOptions::new("B").duration(1000));
    presenter.poll_changes();
    assert!(!presenter.timers().is_armed(a));

    // Longer than A's duration, but A is not on screen
    tokio::time::sleep(ms(500)).await;
    assert!(store.contains(a));

    presenter.dismiss(b);
    assert!(presenter.timers().is_armed(a));

    tokio::time::sleep(ms(50)).await;
    assert!(store.contains(a));
    tokio::time::sleep(ms(60)).await;
    assert!(!store.contains(a));
}

#[tokio::test(start_paused = true)]
async fn test_eviction_by_cap_cancels_timer() {
    let store = ToastStore::new();
    let mut presenter = ToastPresenter::new(store.clone(), capped(1));

    let a = store.add(ToastOptions::new("A").duration(100));
    presenter.poll_changes();
    assert!(presenter.timers().is_armed(a));

    store.add(ToastOptions::new("B").duration(0));
    presenter.poll_changes();
    assert!(!presenter.timers().is_armed(a));
    assert_eq!(presenter.exiting()[0].id(), a);

    tokio::time::sleep(ms(200)).await;
    assert!(store.contains(a));
}

#[tokio::test]
async fn test_clear_moves_every_visible_toast_to_exiting() {
    let store = ToastStore::new();
    let mut presenter = ToastPresenter::new(store.clone(), PresenterConfig::default());

    store.add(ToastOptions::new("A"));
    store.add(ToastOptions::new("B"));
    presenter.poll_changes();
    assert_eq!(presenter.timers().len(), 2);

    store.clear();
    presenter.poll_changes();
    assert!(presenter.visible().is_empty());
    assert_eq!(presenter.exiting().len(), 2);
    assert!(presenter.timers().is_empty());
}

#[tokio::test]
async fn test_exiting_is_bounded_without_advance() {
    let store = ToastStore::new();
    let mut presenter = ToastPresenter::new(store.clone(), capped(2));

    let mut last = None;
    for i in 0..50 {
        let id = store.add(ToastOptions::new(format!("t{i}")));
        presenter.poll_changes();
        presenter.dismiss(id);
        last = Some(id);
    }

    assert_eq!(presenter.exiting().len(), 2);
    assert_eq!(presenter.exiting().last().map(|t| t.id()), last);
}

#[tokio::test]
async fn test_lifecycle_with_hover() {
    let store = ToastStore::new();
    let mut presenter = ToastPresenter::new(store.clone(), PresenterConfig::default());

    let id = store.add(ToastOptions::new("Details").description("More text"));
    presenter.poll_changes();
    assert_eq!(presenter.visible()[0].phase, Phase::Entering);

    presenter.advance();
    assert_eq!(presenter.visible()[0].phase, Phase::Idle);

    presenter.hover(Some(id));
    assert_eq!(presenter.visible()[0].phase, Phase::Expanded);
    assert!(presenter.visible()[0].is_expanded());

    presenter.hover(None);
    assert_eq!(presenter.visible()[0].phase, Phase::Idle);
}

#[tokio::test]
async fn test_hover_without_description_stays_idle() {
    let store = ToastStore::new();
    let mut presenter = ToastPresenter::new(store.clone(), PresenterConfig::default());

    let id = store.add(ToastOptions::new("Plain"));
    presenter.poll_changes();
    presenter.advance();

    presenter.hover(Some(id));
    assert_eq!(presenter.visible()[0].phase, Phase::Idle);
    assert!(presenter.visible()[0].hovered);
}

#[tokio::test]
async fn test_open_mode_pins_expanded() {
    let store = ToastStore::new();
    let mut presenter = ToastPresenter::new(store.clone(), PresenterConfig::default());

    let id = store.add(
        ToastOptions::new("Pinned")
            .description("Always visible")
            .expand_description(ExpandDescription::Open),
    );
    presenter.poll_changes();
    presenter.advance();
    assert_eq!(presenter.visible()[0].phase, Phase::Expanded);

    presenter.hover(Some(id));
    presenter.hover(None);
    assert_eq!(presenter.visible()[0].phase, Phase::Expanded);
}

#[tokio::test]
async fn test_sync_skips_when_nothing_changed() {
    let store = ToastStore::new();
    let mut presenter = ToastPresenter::new(store.clone(), PresenterConfig::default());

    assert!(presenter.sync());
    assert!(!presenter.sync());

    store.add(ToastOptions::new("new"));
    assert!(presenter.sync());
    assert!(!presenter.sync());
    // Notification was already handled by the explicit sync
    assert!(!presenter.poll_changes());
}

#[tokio::test]
async fn test_changed_wakes_on_store_notification() {
    let store = ToastStore::new();
    let mut presenter = ToastPresenter::new(store.clone(), PresenterConfig::default());

    store.add(ToastOptions::new("ping"));
    tokio::time::timeout(ms(100), presenter.changed())
        .await
        .expect("notification should be pending");
}

#[tokio::test]
async fn test_set_config_re_resolves_without_touching_store() {
    let store = ToastStore::new();
    let mut presenter = ToastPresenter::new(store.clone(), PresenterConfig::default());

    store.add(ToastOptions::new("resize me"));
    presenter.poll_changes();
    assert_eq!(presenter.visible()[0].effective.size, ToastSize::Medium);

    presenter.set_config(PresenterConfig {
        size: Some(ToastSize::Large),
        ..Default::default()
    });
    assert!(presenter.sync());
    assert_eq!(presenter.visible()[0].effective.size, ToastSize::Large);
    assert_eq!(store.snapshot()[0].size, None);
}

#[tokio::test]
async fn test_lowering_cap_hides_oldest() {
    let store = ToastStore::new();
    let mut presenter = ToastPresenter::new(store.clone(), capped(3));

    let ids: Vec<ToastId> = ["A", "B", "C"].iter().map(|t| store.add(ToastOptions::new(*t))).collect();
    presenter.poll_changes();

    presenter.set_config(capped(1));
    presenter.sync();
    assert_eq!(visible_titles(&presenter), vec!["C"]);
    assert_eq!(presenter.queued(), 2);
    assert!(!presenter.timers().is_armed(ids[0]));
    assert_eq!(store.len(), 3);
}

#[tokio::test]
async fn test_drop_unsubscribes() {
    let store = ToastStore::new();
    {
        let mut presenter = ToastPresenter::new(store.clone(), PresenterConfig::default());
        store.add(ToastOptions::new("armed"));
        presenter.poll_changes();
        assert_eq!(store.subscriber_count(), 1);
    }
    assert_eq!(store.subscriber_count(), 0);
}
