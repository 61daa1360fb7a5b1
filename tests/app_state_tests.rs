//! Application state tests
//!
//! Tests for page navigation, the forum and expert pages, the career
//! predictor flow, the contact form and theme cycling.

use foundry::carousel::CarouselController;
use foundry::content::{default_slides, Page, EXPERTS, FORUM_CATEGORIES};
use foundry::predictor::{PredictionStatus, Predictor, ProfileField, DEFAULT_DELAY};
use foundry::ui::app::StatusKind;
use foundry::ui::theme::Theme;
use foundry::ui::App;
use ratatui::layout::Rect;
use std::time::Duration;
use tempfile::TempDir;

/// Helper to create a test app with the built-in slides
fn create_test_app() -> App {
    App::new(
        CarouselController::new(default_slides()),
        Predictor::default(),
        Theme::default_theme().clone(),
    )
}

fn status_kind(app: &App) -> Option<StatusKind> {
    app.status.as_ref().map(|s| s.kind)
}

#[test]
fn test_app_starts_on_home() {
    let app = create_test_app();
    assert_eq!(app.page, Page::Home);
    assert!(!app.should_quit);
    assert!(!app.show_help);
    assert!(app.status.is_none());
    assert_eq!(app.carousel.ring().len(), 5);
}

#[test]
fn test_page_navigation_wraps() {
    let mut app = create_test_app();
    app.previous_page();
    assert_eq!(app.page, Page::Contact);
    app.next_page();
    assert_eq!(app.page, Page::Home);

    for _ in 0..Page::ALL.len() {
        app.next_page();
    }
    assert_eq!(app.page, Page::Home);
}

#[test]
fn test_changing_page_clears_status() {
    let mut app = create_test_app();
    app.info("hello");
    app.set_page(Page::About);
    assert!(app.status.is_none());
}

#[test]
fn test_forum_category_cycles_and_filters() {
    let mut app = create_test_app();
    assert_eq!(app.forum_category_name(), "All Topics");
    assert_eq!(app.filtered_posts().len(), 3);

    app.next_forum_category();
    assert_eq!(app.forum_category_name(), "Career Transition");
    let posts = app.filtered_posts();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].category, "Career Transition");

    app.previous_forum_category();
    app.previous_forum_category();
    assert_eq!(app.forum_category_name(), FORUM_CATEGORIES[FORUM_CATEGORIES.len() - 1]);
}

#[test]
fn test_expert_selection_wraps() {
    let mut app = create_test_app();
    app.previous_expert();
    assert_eq!(app.selected_expert, EXPERTS.len() - 1);
    app.next_expert();
    assert_eq!(app.selected_expert, 0);
}

#[test]
fn test_editing_text_depends_on_page_and_field() {
    let mut app = create_test_app();
    assert!(!app.editing_text());

    app.set_page(Page::Contact);
    assert!(app.editing_text());

    app.set_page(Page::CareerPredictor);
    assert!(!app.editing_text());
    while app.predictor.selected_field() != ProfileField::InterestedSubjects {
        app.predictor.next_field();
    }
    assert!(app.editing_text());
}

#[test]
fn test_click_outside_home_is_ignored() {
    let mut app = create_test_app();
    app.set_carousel_area(Some(Rect::new(0, 5, 80, 8)));
    app.set_page(Page::Forum);
    assert!(!app.click_at(2, 6));
    assert_eq!(app.carousel.ring().start_item(), 1);
}

#[test]
fn test_click_slots_rotates_carousel() {
    let mut app = create_test_app();
    app.set_carousel_area(Some(Rect::new(0, 5, 80, 8)));

    // Right slot advances.
    assert!(app.click_at(70, 8));
    assert_eq!(app.carousel.ring().start_item(), 2);
    assert!(app.carousel_is_manual());

    // Left slot rewinds.
    assert!(app.click_at(3, 8));
    assert_eq!(app.carousel.ring().start_item(), 1);

    // Center slot advances like the right one.
    assert!(app.click_at(40, 8));
    assert_eq!(app.carousel.ring().start_item(), 2);

    // Clicks below the slides miss.
    assert!(!app.click_at(40, 30));
    assert_eq!(app.carousel.ring().start_item(), 2);
}

#[test]
fn test_click_without_drawn_carousel_is_ignored() {
    let mut app = create_test_app();
    assert!(!app.click_at(3, 8));
    assert!(!app.carousel_is_manual());
}

#[tokio::test(start_paused = true)]
async fn test_tick_applies_auto_advance() {
    let mut app = App::new(
        CarouselController::with_auto_advance(default_slides(), Duration::from_millis(3500))
            .expect("start timer"),
        Predictor::default(),
        Theme::default_theme().clone(),
    );

    tokio::time::sleep(Duration::from_millis(3600)).await;
    app.tick();
    assert_eq!(app.carousel.ring().start_item(), 2);
    assert!(!app.carousel_is_manual());
}

#[tokio::test(start_paused = true)]
async fn test_prediction_flow() {
    let mut app = create_test_app();
    app.set_page(Page::CareerPredictor);

    app.submit_prediction();
    assert!(app.predictor.is_loading());
    assert_eq!(status_kind(&app), Some(StatusKind::Info));

    // A second submit while loading is ignored.
    app.submit_prediction();
    assert!(app.predictor.is_loading());

    tokio::time::sleep(DEFAULT_DELAY + Duration::from_millis(10)).await;
    app.tick();

    let predictions = app.predictor.predictions().expect("predictions ready");
    assert_eq!(predictions.len(), 3);
    assert_eq!(predictions[0].career, "Data Scientist");
    assert_eq!(
        app.status.as_ref().map(|s| s.text.as_str()),
        Some("Predictions ready")
    );
}

#[tokio::test(start_paused = true)]
async fn test_reset_abandons_pending_prediction() {
    let mut app = create_test_app();
    app.submit_prediction();
    app.reset_prediction();
    assert_eq!(app.predictor.status(), &PredictionStatus::Idle);

    tokio::time::sleep(DEFAULT_DELAY * 2).await;
    app.tick();
    assert_eq!(app.predictor.status(), &PredictionStatus::Idle);
}

#[test]
fn test_submit_prediction_without_runtime_reports_error() {
    let mut app = create_test_app();
    app.submit_prediction();
    assert_eq!(status_kind(&app), Some(StatusKind::Error));
    assert!(!app.predictor.is_loading());
}

#[test]
fn test_save_report_without_predictions_reports_error() {
    let mut app = create_test_app();
    let temp_dir = TempDir::new().expect("create temp dir");
    app.report_dir = temp_dir.path().to_path_buf();

    app.save_report();
    assert_eq!(status_kind(&app), Some(StatusKind::Error));
    assert_eq!(
        std::fs::read_dir(temp_dir.path()).expect("read dir").count(),
        0
    );
}

#[tokio::test(start_paused = true)]
async fn test_save_report_writes_json() {
    let mut app = create_test_app();
    let temp_dir = TempDir::new().expect("create temp dir");
    app.report_dir = temp_dir.path().join("reports");

    app.submit_prediction();
    tokio::time::sleep(DEFAULT_DELAY + Duration::from_millis(10)).await;
    app.tick();
    app.save_report();

    assert_eq!(status_kind(&app), Some(StatusKind::Info));
    let entries: Vec<_> = std::fs::read_dir(&app.report_dir)
        .expect("report dir created")
        .collect::<Result<_, _>>()
        .expect("read entries");
    assert_eq!(entries.len(), 1);

    let contents = std::fs::read_to_string(entries[0].path()).expect("read report");
    let json: serde_json::Value = serde_json::from_str(&contents).expect("valid json");
    assert_eq!(json["predictions"].as_array().map(Vec::len), Some(3));
    assert!(json["generated_at"].is_string());
}

#[test]
fn test_contact_submission() {
    let mut app = create_test_app();
    app.set_page(Page::Contact);

    app.submit_contact();
    assert_eq!(status_kind(&app), Some(StatusKind::Error));

    app.contact.name = "Ada Lovelace".to_string();
    app.contact.email = "ada@example.com".to_string();
    app.contact.subject = "Mentoring".to_string();
    app.contact.message = "Looking for guidance".to_string();
    app.submit_contact();

    assert_eq!(status_kind(&app), Some(StatusKind::Info));
    assert!(app.contact.name.is_empty());
}

#[test]
fn test_cycle_theme_marks_change_once() {
    let mut app = create_test_app();
    let first = app.theme.name;

    app.cycle_theme();
    assert_ne!(app.theme.name, first);
    assert!(app.take_theme_change());
    assert!(!app.take_theme_change());

    for _ in 1..Theme::all().len() {
        app.cycle_theme();
    }
    assert_eq!(app.theme.name, first);
}
