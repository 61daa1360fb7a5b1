use crate::carousel::{AdvanceMode, CarouselController};
use crate::contact::ContactForm;
use crate::content::{ForumPost, Page, Slide, EXPERTS, FORUM_CATEGORIES, FORUM_POSTS};
use crate::predictor::Predictor;
use crate::ui::placement::slot_at;
use crate::ui::theme::Theme;
use ratatui::layout::Rect;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// One-line message shown above the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

#[derive(Debug)]
pub struct App {
    pub page: Page,
    pub carousel: CarouselController<Slide>,
    pub predictor: Predictor,
    pub contact: ContactForm,
    pub forum_category: usize,
    pub selected_expert: usize,
    pub theme: Theme,
    pub report_dir: PathBuf,
    pub status: Option<StatusMessage>,
    pub show_help: bool,
    pub should_quit: bool,
    carousel_area: Option<Rect>,
    theme_changed: bool,
}

impl App {
    pub fn new(carousel: CarouselController<Slide>, predictor: Predictor, theme: Theme) -> Self {
        Self {
            page: Page::Home,
            carousel,
            predictor,
            contact: ContactForm::new(),
            forum_category: 0,
            selected_expert: 0,
            theme,
            report_dir: PathBuf::from("."),
            status: None,
            show_help: false,
            should_quit: false,
            carousel_area: None,
            theme_changed: false,
        }
    }

    pub fn set_page(&mut self, page: Page) {
        if self.page != page {
            log::debug!("Navigating to {}", page.label());
            self.page = page;
            self.status = None;
        }
    }

    pub fn next_page(&mut self) {
        self.set_page(self.page.next());
    }

    pub fn previous_page(&mut self) {
        self.set_page(self.page.previous());
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Run background work: apply carousel ticks and collect predictions.
    pub fn tick(&mut self) {
        self.carousel.drain_ticks();
        if self.predictor.poll() {
            self.info("Predictions ready");
        }
    }

    /// Whether printable keys should go into a form field.
    pub fn editing_text(&self) -> bool {
        match self.page {
            Page::CareerPredictor => self.predictor.selected_field().is_text(),
            Page::Contact => true,
            _ => false,
        }
    }

    // -- Carousel --

    /// Remember where the carousel was drawn so clicks can be mapped back.
    pub fn set_carousel_area(&mut self, area: Option<Rect>) {
        self.carousel_area = area;
    }

    pub fn carousel_area(&self) -> Option<Rect> {
        self.carousel_area
    }

    /// Handle a left click at a terminal cell. Returns `true` when it hit a
    /// slide and rotated the carousel.
    pub fn click_at(&mut self, column: u16, row: u16) -> bool {
        if self.page != Page::Home {
            return false;
        }
        let Some(area) = self.carousel_area else {
            return false;
        };
        let Some(slot) = slot_at(area, column, row) else {
            return false;
        };
        match self.carousel.ring().index_of(slot.role()) {
            Some(index) => self.carousel.click(index),
            None => false,
        }
    }

    pub fn carousel_is_manual(&self) -> bool {
        self.carousel.mode() == AdvanceMode::Manual
    }

    // -- Forum --

    pub fn forum_category_name(&self) -> &'static str {
        FORUM_CATEGORIES[self.forum_category]
    }

    pub fn next_forum_category(&mut self) {
        self.forum_category = (self.forum_category + 1) % FORUM_CATEGORIES.len();
    }

    pub fn previous_forum_category(&mut self) {
        let len = FORUM_CATEGORIES.len();
        self.forum_category = (self.forum_category + len - 1) % len;
    }

    /// Posts matching the selected topic. The first topic matches all.
    pub fn filtered_posts(&self) -> Vec<&'static ForumPost> {
        let category = self.forum_category_name();
        FORUM_POSTS
            .iter()
            .filter(|post| self.forum_category == 0 || post.category == category)
            .collect()
    }

    // -- Experts --

    pub fn next_expert(&mut self) {
        self.selected_expert = (self.selected_expert + 1) % EXPERTS.len();
    }

    pub fn previous_expert(&mut self) {
        let len = EXPERTS.len();
        self.selected_expert = (self.selected_expert + len - 1) % len;
    }

    // -- Forms --

    pub fn submit_prediction(&mut self) {
        match self.predictor.submit() {
            Ok(true) => self.info("Analyzing your profile..."),
            Ok(false) => {}
            Err(e) => self.error(format!("{:#}", e)),
        }
    }

    pub fn reset_prediction(&mut self) {
        self.predictor.reset();
        self.info("Form reset");
    }

    pub fn save_report(&mut self) {
        match self.predictor.save_report(&self.report_dir) {
            Ok(path) => self.info(format!("Report saved to {}", path.display())),
            Err(e) => self.error(format!("{:#}", e)),
        }
    }

    pub fn submit_contact(&mut self) {
        match self.contact.submit() {
            Ok(submission) => self.info(format!(
                "Thanks {}, we'll get back to you at {}",
                submission.name, submission.email
            )),
            Err(e) => self.error(format!("{:#}", e)),
        }
    }

    // -- Theme --

    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next().clone();
        self.theme_changed = true;
        self.info(format!("Theme: {}", self.theme.name));
    }

    /// Returns `true` once after the theme was changed.
    pub fn take_theme_change(&mut self) -> bool {
        std::mem::take(&mut self.theme_changed)
    }

    // -- Status line --

    pub fn info(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind: StatusKind::Info,
        });
    }

    pub fn error(&mut self, text: impl Into<String>) {
        let text = text.into();
        log::warn!("{}", text);
        self.status = Some(StatusMessage {
            text,
            kind: StatusKind::Error,
        });
    }
}
