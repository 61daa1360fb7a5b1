//! # Content Module
//!
//! Static page content for the Future Foundry site and the page list used
//! for navigation.
//!
//! Everything here is fixed data. The only state that pages hold (form
//! fields, filters, selections) lives in the UI [`App`](crate::ui::App).

mod data;

pub use data::{
    default_slides, ContactDetail, Expert, Feature, ForumPost, Stat, TeamMember, Testimonial,
    ABOUT_FEATURES, CONTACT_DETAILS, EXPERTS, FORUM_CATEGORIES, FORUM_POSTS, HOME_FEATURES,
    STATS, TEAM, TESTIMONIALS,
};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Product name shown in the header.
pub const BRAND: &str = "Future Foundry";

/// A single carousel slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Slide {
    pub title: String,
    pub caption: String,
}

impl Slide {
    pub fn new(title: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            caption: caption.into(),
        }
    }
}

/// Site pages in navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    #[default]
    Home,
    CareerPredictor,
    Forum,
    Expert,
    About,
    Contact,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::CareerPredictor,
        Page::Forum,
        Page::Expert,
        Page::About,
        Page::Contact,
    ];

    /// Label used in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::CareerPredictor => "Career Predictor",
            Page::Forum => "Forum",
            Page::Expert => "Expert",
            Page::About => "About",
            Page::Contact => "Contact",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Page::Home => "🏠",
            Page::CareerPredictor => "🧠",
            Page::Forum => "💬",
            Page::Expert => "👥",
            Page::About => "ℹ️",
            Page::Contact => "📞",
        }
    }

    /// Page heading and tagline.
    pub fn heading(self) -> (&'static str, &'static str) {
        match self {
            Page::Home => (
                "Discover Your Perfect Career Path",
                "Unlock your potential with AI-powered career predictions, expert guidance, \
                 and a supportive community. Start your journey to professional success today.",
            ),
            Page::CareerPredictor => (
                "AI Career Predictor",
                "Discover your ideal career path. Fill out the form below to get \
                 personalized career recommendations.",
            ),
            Page::Forum => (
                "Community Forum",
                "Connect, share experiences and learn from others on the same journey",
            ),
            Page::Expert => (
                "Expert Consultation",
                "Book one-on-one sessions with industry experts and career counselors",
            ),
            Page::About => (
                "About Future Foundry",
                "Empowering careers through AI-driven guidance and expert mentorship",
            ),
            Page::Contact => (
                "Contact Us",
                "Get in touch with our team for support, feedback, or partnerships",
            ),
        }
    }

    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|page| *page == self)
            .unwrap_or_default()
    }

    /// Page for a 1-based navigation number.
    pub fn from_number(number: usize) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index).copied())
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}
