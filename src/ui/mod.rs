//! # UI Module
//!
//! Terminal user interface for Future Foundry.
//!
//! ## Components
//!
//! - [`App`] - Application state (current page, carousel, forms, theme)
//! - [`input`] - Key and mouse handling
//! - [`mod@render`] - Drawing every page with ratatui
//! - [`placement`] - Maps carousel roles to screen slots
//! - [`theme`] - Built-in color themes
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────┬──────────────────────────────────┐
//! │ Brand        │ 1 Home │ 2 Predictor │ ...       │
//! ├──────────────┴──────────────────────────────────┤
//! │                                                 │
//! │                  Page body                      │
//! │                                                 │
//! ├─────────────────────────────────────────────────┤
//! │ Status line                                     │
//! │ Key hints                                       │
//! └─────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod input;
pub mod placement;
pub mod render;
pub mod theme;

pub use app::App;
pub use render::render;
