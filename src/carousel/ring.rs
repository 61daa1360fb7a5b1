//! # Slide Ring
//!
//! A fixed-size circular list of slides with a three-slot visible window.
//!
//! ## Window
//!
//! `start_item` is 1-indexed and always lies in `[1, N]`. For a ring of
//! `N >= 1` slides the window is:
//!
//! ```text
//! main  = (start_item - 1) mod N
//! left  = (start_item - 2) mod N
//! right =  start_item      mod N
//! ```
//!
//! With `N = 5` and `start_item = 1` this puts index 0 in the middle,
//! index 4 on the left and index 1 on the right.
//!
//! Rings with fewer than three slides have overlapping window slots. Roles
//! are resolved with `Main > Right > Left` precedence so that every slide
//! carries at most one role.

use serde::{Deserialize, Serialize};

/// Visual role of a slide within the carousel window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Role {
    /// Not visible.
    #[default]
    None,
    Left,
    Main,
    Right,
}

/// Rotation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Moves the window forward: the slide right of `main` becomes `main`.
    Clockwise,
    /// Moves the window backward: the slide left of `main` becomes `main`.
    CounterClockwise,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// A ring entry: the slide payload plus its current role tag.
#[derive(Debug, Clone, PartialEq)]
pub struct RingItem<T> {
    pub slide: T,
    pub role: Role,
}

/// Indices of the three visible slots for one `start_item` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub left: usize,
    pub main: usize,
    pub right: usize,
}

impl Window {
    /// Compute the window for `start_item` on a ring of `len` slides.
    ///
    /// Returns `None` for an empty ring or a `start_item` outside `[1, len]`.
    pub fn at(start_item: usize, len: usize) -> Option<Self> {
        if !(1..=len).contains(&start_item) {
            return None;
        }
        Some(Self {
            main: (start_item - 1) % len,
            left: (start_item + len - 2) % len,
            right: start_item % len,
        })
    }
}

/// Fixed-size ring of slides with role bookkeeping.
#[derive(Debug, Clone)]
pub struct SlideRing<T> {
    items: Vec<RingItem<T>>,
    start_item: usize,
}

impl<T> SlideRing<T> {
    /// Build a ring from the slide list, with `start_item = 1` and the
    /// initial window already tagged.
    pub fn new(slides: Vec<T>) -> Self {
        let items = slides
            .into_iter()
            .map(|slide| RingItem {
                slide,
                role: Role::None,
            })
            .collect();

        let mut ring = Self {
            items,
            start_item: 1,
        };
        if let Some(window) = ring.window() {
            ring.assign(window);
        }
        ring
    }

    /// Advance (clockwise) or rewind (counter-clockwise) the window by one
    /// slide. A no-op on an empty ring.
    pub fn rotate(&mut self, direction: Direction) {
        let len = self.items.len();
        let Some(outgoing) = self.window() else {
            return;
        };

        self.clear(outgoing);

        self.start_item = match direction {
            Direction::Clockwise => {
                if self.start_item >= len {
                    1
                } else {
                    self.start_item + 1
                }
            }
            Direction::CounterClockwise => {
                if self.start_item <= 1 {
                    len
                } else {
                    self.start_item - 1
                }
            }
        };

        if let Some(incoming) = self.window() {
            self.assign(incoming);
        }
    }

    /// The current window, or `None` when the ring is empty.
    pub fn window(&self) -> Option<Window> {
        Window::at(self.start_item, self.items.len())
    }

    pub fn start_item(&self) -> usize {
        self.start_item
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn role(&self, index: usize) -> Option<Role> {
        self.items.get(index).map(|item| item.role)
    }

    pub fn roles(&self) -> Vec<Role> {
        self.items.iter().map(|item| item.role).collect()
    }

    /// Index of the slide currently holding `role`.
    pub fn index_of(&self, role: Role) -> Option<usize> {
        if role == Role::None {
            return None;
        }
        self.items.iter().position(|item| item.role == role)
    }

    pub fn slide(&self, index: usize) -> Option<&T> {
        self.items.get(index).map(|item| &item.slide)
    }

    /// The slide holding `role`, if any.
    pub fn slide_with(&self, role: Role) -> Option<&T> {
        self.index_of(role).and_then(|index| self.slide(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &RingItem<T>> {
        self.items.iter()
    }

    fn clear(&mut self, window: Window) {
        for index in [window.left, window.main, window.right] {
            self.items[index].role = Role::None;
        }
    }

    // Lowest precedence first so Main wins when slots overlap.
    fn assign(&mut self, window: Window) {
        self.items[window.left].role = Role::Left;
        self.items[window.right].role = Role::Right;
        self.items[window.main].role = Role::Main;
    }
}
