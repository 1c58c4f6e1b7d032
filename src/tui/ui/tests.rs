use super::*;
use crate::tui::event::Action;
use crate::tui::test_utils::{buffer_text, find_row_with_text, render_to_buffer, row_text, sample_app};
use ratatui::buffer::Cell;

/// Filled gauge cells are either a full block or a swapped-color blank.
fn is_filled(cell: &Cell) -> bool {
    cell.symbol() == "█" || cell.bg == Color::Cyan
}

#[test]
fn test_hit_inside_and_outside() {
    let target = Some(Rect::new(2, 3, 4, 2));
    assert!(ClickTargets::hit(target, 2, 3));
    assert!(ClickTargets::hit(target, 5, 4));
    assert!(!ClickTargets::hit(target, 6, 4), "right edge is exclusive");
    assert!(!ClickTargets::hit(target, 2, 5), "bottom edge is exclusive");
    assert!(!ClickTargets::hit(None, 2, 3));
}

#[test]
fn test_first_slide_shows_counter_and_title() {
    let app = sample_app();
    let (buffer, _) = render_to_buffer(&app, 100, 30);
    assert!(row_text(&buffer, 27).contains("1 / 6"));
    assert!(find_row_with_text(&buffer, "A Partnership in Precision").is_some());
}

#[test]
fn test_title_slide_shows_presentation_date() {
    let mut app = sample_app();
    app.presented_on = "October 18, 2026".to_string();
    let (buffer, _) = render_to_buffer(&app, 100, 30);
    assert!(find_row_with_text(&buffer, "October 18, 2026").is_some());
}

#[test]
fn test_last_slide_counter() {
    let mut app = sample_app();
    app.apply(Action::Previous);
    let (buffer, _) = render_to_buffer(&app, 100, 30);
    assert!(row_text(&buffer, 27).contains("6 / 6"));
    assert!(find_row_with_text(&buffer, "Our Commitment").is_some());
}

#[test]
fn test_footer_shows_label_and_key_hints() {
    let app = sample_app();
    let (buffer, _) = render_to_buffer(&app, 100, 30);
    let footer = row_text(&buffer, 28);
    assert!(footer.starts_with("Sargent & McGrory Glass Partnership"));
    assert!(footer.contains("[q] Quit"));
}

#[test]
fn test_footer_status_message_replaces_hints() {
    let mut app = sample_app();
    app.set_status("Deck has 6 slides".to_string());
    let (buffer, _) = render_to_buffer(&app, 100, 30);
    let footer = row_text(&buffer, 28);
    assert!(footer.contains("Deck has 6 slides"));
    assert!(!footer.contains("[q] Quit"));
}

#[test]
fn test_arrow_targets_cover_side_columns() {
    let app = sample_app();
    let (buffer, targets) = render_to_buffer(&app, 100, 30);
    assert_eq!(targets.previous, Some(Rect::new(0, 0, ARROW_WIDTH, 28)));
    assert_eq!(targets.next, Some(Rect::new(100 - ARROW_WIDTH, 0, ARROW_WIDTH, 28)));
    let middle = row_text(&buffer, 14);
    assert!(middle.contains(PREV_ARROW));
    assert!(middle.contains(NEXT_ARROW));
}

#[test]
fn test_progress_gauge_tracks_position() {
    let mut app = sample_app();
    let (buffer, _) = render_to_buffer(&app, 100, 30);
    assert!(is_filled(buffer.cell((0, 29)).expect("cell")));
    assert!(!is_filled(buffer.cell((99, 29)).expect("cell")));

    app.apply(Action::Last);
    let (buffer, _) = render_to_buffer(&app, 100, 30);
    assert!(is_filled(buffer.cell((0, 29)).expect("cell")));
    assert!(is_filled(buffer.cell((99, 29)).expect("cell")));
}

#[test]
fn test_hidden_progress_moves_footer_to_last_row() {
    let mut app = sample_app();
    app.show_progress = false;
    let (buffer, targets) = render_to_buffer(&app, 100, 30);
    assert!(row_text(&buffer, 29).contains("[q] Quit"));
    assert!(row_text(&buffer, 28).contains("1 / 6"));
    assert_eq!(targets.previous, Some(Rect::new(0, 0, ARROW_WIDTH, 29)));
}

#[test]
fn test_slide_without_image_has_no_image_target() {
    let app = sample_app();
    let (buffer, targets) = render_to_buffer(&app, 100, 30);
    assert_eq!(targets.image, None);
    assert!(find_row_with_text(&buffer, "View image").is_none());
}

#[test]
fn test_image_hint_sits_on_last_inner_row() {
    let mut app = sample_app();
    app.apply(Action::GoTo(2));
    let (buffer, targets) = render_to_buffer(&app, 100, 30);
    assert_eq!(targets.image, Some(Rect::new(ARROW_WIDTH + 1, 26, 88, 1)));
    assert!(row_text(&buffer, 26).contains("[i] View image: Custom dimensional check jig"));
}

#[test]
fn test_open_modal_is_drawn_over_slide() {
    let mut app = sample_app();
    app.apply(Action::GoTo(2));
    app.apply(Action::ToggleModal);
    assert!(app.presentation.is_modal_open());
    let (buffer, _) = render_to_buffer(&app, 100, 30);
    assert!(find_row_with_text(&buffer, "[Esc] or click to close").is_some());
    assert!(find_row_with_text(&buffer, "assets/qc-jig.png").is_some());
}

#[test]
fn test_every_slide_renders_its_title() {
    let mut app = sample_app();
    for _ in 0..app.presentation.slide_count() {
        let title = app.active_slide().expect("slide").title().to_string();
        let (buffer, _) = render_to_buffer(&app, 120, 40);
        assert!(
            find_row_with_text(&buffer, &title).is_some(),
            "slide {} should show {title:?}:\n{}",
            app.presentation.slide_number(),
            buffer_text(&buffer)
        );
        app.apply(Action::Next);
    }
    assert_eq!(app.presentation.active_index(), 0);
}

#[test]
fn test_feature_cards_are_drawn() {
    let mut app = sample_app();
    app.apply(Action::GoTo(2));
    let (buffer, _) = render_to_buffer(&app, 100, 30);
    assert!(find_row_with_text(&buffer, "Dedicated Production Cell").is_some());
}

#[test]
fn test_parts_tables_are_drawn() {
    let mut app = sample_app();
    app.apply(Action::GoTo(4));
    let (buffer, _) = render_to_buffer(&app, 160, 40);
    assert!(find_row_with_text(&buffer, "Thick Doors").is_some());
    assert!(find_row_with_text(&buffer, "Part Number").is_some());
}

#[test]
fn test_tiny_terminals_do_not_panic() {
    let mut app = sample_app();
    for (width, height) in [(1, 1), (5, 2), (20, 5), (30, 8)] {
        for _ in 0..app.presentation.slide_count() {
            let _ = render_to_buffer(&app, width, height);
            app.apply(Action::Next);
        }
    }
    app.apply(Action::GoTo(2));
    app.apply(Action::ToggleModal);
    let _ = render_to_buffer(&app, 10, 4);
}
