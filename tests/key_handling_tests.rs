//! Keyboard and mouse event handling tests
//!
//! Feeds crossterm events through the input layer and checks the resulting
//! app state: quitting, page switching, carousel control, form editing and
//! the help overlay.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use foundry::carousel::CarouselController;
use foundry::content::{default_slides, Page};
use foundry::predictor::{Predictor, ProfileField};
use foundry::ui::theme::Theme;
use foundry::ui::{input, App};
use ratatui::layout::Rect;

/// Helper to create a key event
fn key_event(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
}

fn ctrl_key(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::empty(),
    })
}

fn create_test_app() -> App {
    App::new(
        CarouselController::new(default_slides()),
        Predictor::default(),
        Theme::default_theme().clone(),
    )
}

fn send(app: &mut App, events: &[Event]) {
    for event in events {
        input::handle_event(app, event);
    }
}

fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        input::handle_event(app, &key_event(KeyCode::Char(c)));
    }
}

#[test]
fn test_quit_with_q_key() {
    let mut app = create_test_app();
    send(&mut app, &[key_event(KeyCode::Char('q'))]);
    assert!(app.should_quit);
}

#[test]
fn test_quit_with_esc_and_ctrl_c() {
    let mut app = create_test_app();
    send(&mut app, &[key_event(KeyCode::Esc)]);
    assert!(app.should_quit);

    let mut app = create_test_app();
    app.set_page(Page::Contact);
    send(&mut app, &[ctrl_key('c')]);
    assert!(app.should_quit);
}

#[test]
fn test_key_release_is_ignored() {
    let mut app = create_test_app();
    let release = Event::Key(KeyEvent {
        code: KeyCode::Char('q'),
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    });
    send(&mut app, &[release]);
    assert!(!app.should_quit);
}

#[test]
fn test_tab_and_digits_switch_pages() {
    let mut app = create_test_app();
    send(&mut app, &[key_event(KeyCode::Tab)]);
    assert_eq!(app.page, Page::CareerPredictor);

    send(&mut app, &[key_event(KeyCode::BackTab), key_event(KeyCode::BackTab)]);
    assert_eq!(app.page, Page::Contact);

    // Digits type into the contact form instead of jumping.
    send(&mut app, &[key_event(KeyCode::Char('3'))]);
    assert_eq!(app.page, Page::Contact);
    assert_eq!(app.contact.name, "3");

    send(&mut app, &[key_event(KeyCode::Tab), key_event(KeyCode::Char('5'))]);
    assert_eq!(app.page, Page::About);

    send(&mut app, &[key_event(KeyCode::Char('9'))]);
    assert_eq!(app.page, Page::About);
}

#[test]
fn test_arrow_keys_rotate_carousel_and_take_control() {
    let mut app = create_test_app();
    assert!(!app.carousel_is_manual());

    send(&mut app, &[key_event(KeyCode::Right)]);
    assert_eq!(app.carousel.ring().start_item(), 2);
    assert!(app.carousel_is_manual());

    send(
        &mut app,
        &[
            key_event(KeyCode::Left),
            key_event(KeyCode::Char('h')),
        ],
    );
    assert_eq!(app.carousel.ring().start_item(), 5);

    send(&mut app, &[key_event(KeyCode::Char('l'))]);
    assert_eq!(app.carousel.ring().start_item(), 1);
}

#[test]
fn test_arrow_keys_off_home_leave_carousel_alone() {
    let mut app = create_test_app();
    app.set_page(Page::About);
    send(&mut app, &[key_event(KeyCode::Right)]);
    assert_eq!(app.carousel.ring().start_item(), 1);
    assert!(!app.carousel_is_manual());
}

#[test]
fn test_mouse_click_on_slides() {
    let mut app = create_test_app();
    app.set_carousel_area(Some(Rect::new(2, 6, 100, 8)));

    send(&mut app, &[click(95, 9)]);
    assert_eq!(app.carousel.ring().start_item(), 2);

    send(&mut app, &[click(5, 9)]);
    assert_eq!(app.carousel.ring().start_item(), 1);

    send(&mut app, &[click(50, 9)]);
    assert_eq!(app.carousel.ring().start_item(), 2);
    assert!(app.carousel_is_manual());
}

#[test]
fn test_help_overlay_swallows_keys() {
    let mut app = create_test_app();
    send(&mut app, &[key_event(KeyCode::Char('?'))]);
    assert!(app.show_help);

    send(&mut app, &[key_event(KeyCode::Char('q')), key_event(KeyCode::Right)]);
    assert!(!app.should_quit);
    assert_eq!(app.carousel.ring().start_item(), 1);

    send(&mut app, &[key_event(KeyCode::Esc)]);
    assert!(!app.show_help);
    assert!(!app.should_quit);
}

#[test]
fn test_typing_q_in_contact_field_does_not_quit() {
    let mut app = create_test_app();
    app.set_page(Page::Contact);

    type_str(&mut app, "quinn");
    assert!(!app.should_quit);
    assert_eq!(app.contact.name, "quinn");

    send(&mut app, &[key_event(KeyCode::Backspace)]);
    assert_eq!(app.contact.name, "quin");

    send(&mut app, &[key_event(KeyCode::Down)]);
    type_str(&mut app, "quin@example.com");
    assert_eq!(app.contact.email, "quin@example.com");
}

#[test]
fn test_contact_enter_submits() {
    let mut app = create_test_app();
    app.set_page(Page::Contact);
    type_str(&mut app, "Sam");
    send(&mut app, &[key_event(KeyCode::Down)]);
    type_str(&mut app, "sam@example.com");
    send(&mut app, &[key_event(KeyCode::Down)]);
    type_str(&mut app, "Hello");
    send(&mut app, &[key_event(KeyCode::Down)]);
    type_str(&mut app, "Tell me more");

    send(&mut app, &[key_event(KeyCode::Enter)]);
    assert!(app.contact.name.is_empty());
    assert!(app
        .status
        .as_ref()
        .is_some_and(|s| s.text.contains("sam@example.com")));
}

#[test]
fn test_predictor_field_navigation_and_adjust() {
    let mut app = create_test_app();
    app.set_page(Page::CareerPredictor);
    assert_eq!(app.predictor.selected_field(), ProfileField::LogicalQuotient);
    assert_eq!(app.predictor.profile.logical_quotient_rating, 7);

    send(&mut app, &[key_event(KeyCode::Right), key_event(KeyCode::Right)]);
    assert_eq!(app.predictor.profile.logical_quotient_rating, 9);

    send(&mut app, &[key_event(KeyCode::Char('j'))]);
    assert_eq!(app.predictor.selected_field(), ProfileField::Hackathons);
    send(&mut app, &[key_event(KeyCode::Left)]);
    assert_eq!(app.predictor.profile.hackathons, 1);

    send(&mut app, &[key_event(KeyCode::Up)]);
    assert_eq!(app.predictor.selected_field(), ProfileField::LogicalQuotient);
}

#[test]
fn test_predictor_text_field_takes_letters() {
    let mut app = create_test_app();
    app.set_page(Page::CareerPredictor);
    while app.predictor.selected_field() != ProfileField::InterestedSubjects {
        send(&mut app, &[key_event(KeyCode::Down)]);
    }

    type_str(&mut app, "math, physics");
    assert_eq!(app.predictor.profile.interested_subjects, "math, physics");
    assert!(!app.should_quit);

    send(&mut app, &[key_event(KeyCode::Backspace)]);
    assert_eq!(app.predictor.profile.interested_subjects, "math, physic");
}

#[test]
fn test_predictor_ctrl_r_resets_form() {
    let mut app = create_test_app();
    app.set_page(Page::CareerPredictor);
    send(&mut app, &[key_event(KeyCode::Right)]);
    assert_eq!(app.predictor.profile.logical_quotient_rating, 8);

    send(&mut app, &[ctrl_key('r')]);
    assert_eq!(app.predictor.profile.logical_quotient_rating, 7);
}

#[test]
fn test_forum_and_expert_keys() {
    let mut app = create_test_app();
    app.set_page(Page::Forum);
    send(&mut app, &[key_event(KeyCode::Right)]);
    assert_eq!(app.forum_category, 1);
    send(&mut app, &[key_event(KeyCode::Left), key_event(KeyCode::Left)]);
    assert_eq!(app.forum_category_name(), "Entrepreneurship");

    app.set_page(Page::Expert);
    send(&mut app, &[key_event(KeyCode::Down), key_event(KeyCode::Char('j'))]);
    assert_eq!(app.selected_expert, 2);
    send(&mut app, &[key_event(KeyCode::Char('k'))]);
    assert_eq!(app.selected_expert, 1);
}

#[test]
fn test_t_cycles_theme() {
    let mut app = create_test_app();
    let before = app.theme.name;
    send(&mut app, &[key_event(KeyCode::Char('t'))]);
    assert_ne!(app.theme.name, before);
    assert!(app.take_theme_change());
}
