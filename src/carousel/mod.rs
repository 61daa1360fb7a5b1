//! # Carousel Module
//!
//! A rotating three-slot slide carousel.
//!
//! ## Components
//!
//! - [`SlideRing`] - fixed-size ring of slides with `left`/`main`/`right` role tags
//! - [`CarouselController`] - owns a ring plus the auto-advance timer and
//!   maps user interaction onto rotations
//!
//! The ring holds state only. Anything visual (columns, colors, borders) is
//! derived from the [`Role`] tags by the UI layer.

pub mod controller;
pub mod ring;

pub use controller::{AdvanceMode, CarouselController, DEFAULT_INTERVAL};
pub use ring::{Direction, RingItem, Role, SlideRing, Window};
