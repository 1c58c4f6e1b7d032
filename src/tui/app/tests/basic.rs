use super::*;

#[test]
fn test_for_deck_starts_on_requested_slide() {
    let app = App::for_deck(make_deck(5), 3).expect("non-empty deck");
    assert_eq!(app.presentation.active_index(), 2);
    assert_eq!(app.active_slide().map(Slide::title), Some("Slide 3"));
    assert!(!app.should_quit);
    assert!(!app.presentation.is_modal_open());
}

#[test]
fn test_for_deck_wraps_out_of_range_start() {
    let app = App::for_deck(make_deck(5), 0).expect("non-empty deck");
    assert_eq!(app.presentation.active_index(), 4, "0 opens the last slide");

    let app = App::for_deck(make_deck(5), 7).expect("non-empty deck");
    assert_eq!(app.presentation.active_index(), 1);

    let app = App::for_deck(make_deck(5), usize::MAX).expect("non-empty deck");
    assert!(app.presentation.active_index() < 5);
}

#[test]
fn test_for_deck_rejects_empty_deck() {
    assert!(App::for_deck(Deck::default(), 1).is_none());
}

#[test]
fn test_defaults() {
    let app = sample_app();
    assert!(app.show_progress);
    assert!(app.mouse_enabled);
    assert_eq!(app.tick_rate, Duration::from_millis(250));
    assert_eq!(app.tick_count, 0);
    assert!(app.status_message.is_none());
    assert!(app.listeners.is_empty());
    assert!(!app.presented_on.is_empty());
}

#[test]
fn test_apply_navigation_actions() {
    let mut app = App::for_deck(make_deck(4), 1).expect("non-empty deck");
    app.apply(Action::Next);
    assert_eq!(app.presentation.active_index(), 1);
    app.apply(Action::Last);
    assert_eq!(app.presentation.active_index(), 3);
    app.apply(Action::Next);
    assert_eq!(app.presentation.active_index(), 0, "next wraps to first");
    app.apply(Action::Previous);
    assert_eq!(app.presentation.active_index(), 3, "previous wraps to last");
    app.apply(Action::First);
    assert_eq!(app.presentation.active_index(), 0);
    app.apply(Action::GoTo(2));
    assert_eq!(app.presentation.active_index(), 2);
    app.apply(Action::None);
    assert_eq!(app.presentation.active_index(), 2);
}

#[test]
fn test_apply_goto_past_end_keeps_slide_and_sets_status() {
    let mut app = App::for_deck(make_deck(4), 2).expect("non-empty deck");
    app.apply(Action::GoTo(8));
    assert_eq!(app.presentation.active_index(), 1);
    let (message, _) = app.status_message.as_ref().expect("status set");
    assert_eq!(message, "Deck has 4 slides");
}

#[test]
fn test_apply_quit() {
    let mut app = sample_app();
    app.apply(Action::Quit);
    assert!(app.should_quit);
}

#[test]
fn test_expire_status_message() {
    let mut app = sample_app();
    app.set_status("fresh".to_string());
    app.expire_status_message();
    assert!(app.status_message.is_some(), "unexpired message stays");

    app.status_message = Some(("stale".to_string(), Instant::now()));
    app.expire_status_message();
    assert!(app.status_message.is_none());
}

#[test]
fn test_mount_and_unmount_balance_listeners() {
    let app = sample_app();
    for _ in 0..3 {
        let guard = app.mount();
        assert_eq!(app.listeners.len(), 1);
        drop(guard);
        assert!(app.listeners.is_empty());
    }
}

#[test]
fn test_sample_deck_matches_app_deck() {
    let app = sample_app();
    assert_eq!(app.deck, sample_deck());
}

#[test]
#[serial_test::serial]
fn test_panic_hook_guard_restores_previous_hook() {
    use std::sync::atomic::{AtomicUsize, Ordering};

    static CALLS: AtomicUsize = AtomicUsize::new(0);
    std::panic::set_hook(Box::new(|_| {
        CALLS.fetch_add(1, Ordering::SeqCst);
    }));

    for _ in 0..3 {
        let _guard = PanicHookGuard::install(false);
    }
    let result = std::panic::catch_unwind(|| panic!("after presenting"));
    assert!(result.is_err());
    assert_eq!(CALLS.load(Ordering::SeqCst), 1);

    drop(std::panic::take_hook());
}
