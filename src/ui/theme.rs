//! # Theme System
//!
//! Colors used by the Future Foundry TUI, grouped by semantic role.
//!
//! Render code never hardcodes a `ratatui::style::Color`; it reads theme
//! fields instead. The active theme comes from the config file or the
//! `--theme` flag and can be cycled at runtime with `t`.
//!
//! ## Built-in Themes
//!
//! - **Catppuccin Mocha** (default)
//! - **Dracula**
//! - **Nord**
//! - **Tokyo Night**
//! - **Gruvbox Dark**

use ratatui::style::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Human-readable name, also the value stored in the config file.
    pub name: &'static str,

    /// Background for panels.
    pub bg: Color,
    /// Primary text.
    pub fg: Color,
    /// Hints, separators, hidden carousel slides.
    pub fg_dim: Color,

    /// Brand color: active tab, focused borders, main slide.
    pub accent: Color,
    /// Highlighted values: ratings, side slides, match badges.
    pub secondary: Color,

    pub success: Color,
    pub error: Color,

    /// Background of the selected form field.
    pub highlight_bg: Color,
}

impl Theme {
    /// All built-in themes in cycling order.
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }

    /// The theme after this one, wrapping around.
    pub fn next(&self) -> &'static Theme {
        let index = BUILT_IN_THEMES
            .iter()
            .position(|t| t.name == self.name)
            .unwrap_or_default();
        &BUILT_IN_THEMES[(index + 1) % BUILT_IN_THEMES.len()]
    }
}

static BUILT_IN_THEMES: [Theme; 5] = [
    Theme {
        name: "Catppuccin Mocha",
        bg: Color::Rgb(30, 30, 46),
        fg: Color::Rgb(205, 214, 244),
        fg_dim: Color::Rgb(108, 112, 134),
        accent: Color::Rgb(137, 180, 250),
        secondary: Color::Rgb(249, 226, 175),
        success: Color::Rgb(166, 227, 161),
        error: Color::Rgb(243, 139, 168),
        highlight_bg: Color::Rgb(69, 71, 90),
    },
    Theme {
        name: "Dracula",
        bg: Color::Rgb(40, 42, 54),
        fg: Color::Rgb(248, 248, 242),
        fg_dim: Color::Rgb(98, 114, 164),
        accent: Color::Rgb(189, 147, 249), // purple
        secondary: Color::Rgb(241, 250, 140),
        success: Color::Rgb(80, 250, 123),
        error: Color::Rgb(255, 85, 85),
        highlight_bg: Color::Rgb(68, 71, 90),
    },
    Theme {
        name: "Nord",
        bg: Color::Rgb(46, 52, 64),
        fg: Color::Rgb(216, 222, 233),
        fg_dim: Color::Rgb(76, 86, 106),
        accent: Color::Rgb(136, 192, 208),
        secondary: Color::Rgb(235, 203, 139),
        success: Color::Rgb(163, 190, 140),
        error: Color::Rgb(191, 97, 106),
        highlight_bg: Color::Rgb(67, 76, 94),
    },
    Theme {
        name: "Tokyo Night",
        bg: Color::Rgb(26, 27, 38),
        fg: Color::Rgb(169, 177, 214),
        fg_dim: Color::Rgb(86, 95, 137),
        accent: Color::Rgb(122, 162, 247),
        secondary: Color::Rgb(224, 175, 104),
        success: Color::Rgb(115, 218, 202),
        error: Color::Rgb(247, 118, 142),
        highlight_bg: Color::Rgb(41, 46, 66),
    },
    Theme {
        name: "Gruvbox Dark",
        bg: Color::Rgb(40, 40, 40),
        fg: Color::Rgb(235, 219, 178),
        fg_dim: Color::Rgb(146, 131, 116),
        accent: Color::Rgb(254, 128, 25), // orange
        secondary: Color::Rgb(250, 189, 47),
        success: Color::Rgb(184, 187, 38),
        error: Color::Rgb(251, 73, 52),
        highlight_bg: Color::Rgb(80, 73, 69),
    },
];
