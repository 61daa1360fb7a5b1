//! # Input Handling
//!
//! Maps crossterm key and mouse events onto [`App`] actions.
//!
//! ## Key Bindings
//!
//! ### Everywhere
//! - `Tab` / `Shift+Tab` - Next / previous page
//! - `Esc` / `Ctrl+c` - Quit
//!
//! ### Outside text fields
//! - `1`-`6` - Jump to page
//! - `q` - Quit
//! - `?` - Toggle help
//! - `t` - Cycle theme
//!
//! ### Home
//! - `←` / `h` - Previous slide
//! - `→` / `l` - Next slide
//! - Click the left slide - Previous slide
//! - Click any other slide - Next slide
//!
//! ### Career Predictor
//! - `↑` / `↓` - Select field
//! - `←` / `→` - Adjust value
//! - `Enter` - Get prediction
//! - `Ctrl+r` - Reset form
//! - `Ctrl+s` - Save report
//!
//! ### Forum / Expert / Contact
//! - `←` / `→` - Change forum topic
//! - `↑` / `↓` - Select expert or contact field
//! - `Enter` - Send contact message

use crate::content::Page;
use crate::ui::app::App;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

pub fn handle_event(app: &mut App, event: &Event) {
    match event {
        Event::Key(key) => handle_key(app, *key),
        Event::Mouse(mouse) => handle_mouse(app, *mouse),
        _ => {}
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.toggle_help();
        }
        return;
    }

    match key.code {
        KeyCode::Esc => {
            app.should_quit = true;
            return;
        }
        KeyCode::Tab => {
            app.next_page();
            return;
        }
        KeyCode::BackTab => {
            app.previous_page();
            return;
        }
        _ => {}
    }

    if let KeyCode::Char(c) = key.code {
        if !ctrl && app.editing_text() {
            type_char(app, c);
            return;
        }
        if !ctrl && handle_global_char(app, c) {
            return;
        }
    }

    match app.page {
        Page::Home => handle_home_key(app, key),
        Page::CareerPredictor => handle_predictor_key(app, key, ctrl),
        Page::Forum => handle_forum_key(app, key),
        Page::Expert => handle_expert_key(app, key),
        Page::Contact => handle_contact_key(app, key),
        Page::About => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        app.click_at(mouse.column, mouse.row);
    }
}

fn type_char(app: &mut App, c: char) {
    match app.page {
        Page::CareerPredictor => {
            app.predictor.push_char(c);
        }
        Page::Contact => app.contact.push_char(c),
        _ => {}
    }
}

/// Returns `true` if the character was a global shortcut.
fn handle_global_char(app: &mut App, c: char) -> bool {
    match c {
        'q' | 'Q' => app.should_quit = true,
        '?' => app.toggle_help(),
        't' => app.cycle_theme(),
        _ => match c.to_digit(10).and_then(|d| Page::from_number(d as usize)) {
            Some(page) => app.set_page(page),
            None => return false,
        },
    }
    true
}

fn handle_home_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.carousel.previous(),
        KeyCode::Right | KeyCode::Char('l') => app.carousel.next(),
        _ => {}
    }
}

fn handle_predictor_key(app: &mut App, key: KeyEvent, ctrl: bool) {
    match key.code {
        KeyCode::Char('r') if ctrl => app.reset_prediction(),
        KeyCode::Char('s') if ctrl => app.save_report(),
        KeyCode::Up | KeyCode::Char('k') => app.predictor.previous_field(),
        KeyCode::Down | KeyCode::Char('j') => app.predictor.next_field(),
        KeyCode::Left => app.predictor.adjust_selected(false),
        KeyCode::Right => app.predictor.adjust_selected(true),
        KeyCode::Backspace => app.predictor.pop_char(),
        KeyCode::Enter => app.submit_prediction(),
        _ => {}
    }
}

fn handle_forum_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.previous_forum_category(),
        KeyCode::Right | KeyCode::Char('l') => app.next_forum_category(),
        _ => {}
    }
}

fn handle_expert_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.previous_expert(),
        KeyCode::Down | KeyCode::Char('j') => app.next_expert(),
        _ => {}
    }
}

fn handle_contact_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.contact.previous_field(),
        KeyCode::Down => app.contact.next_field(),
        KeyCode::Backspace => app.contact.pop_char(),
        KeyCode::Enter => app.submit_contact(),
        _ => {}
    }
}
