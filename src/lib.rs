//! Future Foundry - a terminal career guidance hub
//!
//! The home page leads with a three-up slide carousel that advances on its
//! own until the user takes control. The other pages offer a mock career
//! predictor, a discussion forum, expert profiles and a contact form.

pub mod carousel;
pub mod config;
pub mod contact;
pub mod content;
pub mod logging;
pub mod predictor;
pub mod ui;
