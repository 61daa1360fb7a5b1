//! # Slide Placement
//!
//! Maps carousel roles onto screen slots and back. The carousel itself only
//! knows about [`Role`] tags; this is the one place that turns them into
//! positions.
//!
//! ```text
//! ┌──────────┬────────────────────┬──────────┐
//! │   Left   │       Center       │  Right   │
//! │  (left)  │       (main)       │ (right)  │
//! └──────────┴────────────────────┴──────────┘
//! ```

use crate::carousel::Role;
use ratatui::layout::{Constraint, Layout, Position, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Left,
    Center,
    Right,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::Left, Slot::Center, Slot::Right];

    /// Role of the slide drawn in this slot.
    pub fn role(self) -> Role {
        match self {
            Slot::Left => Role::Left,
            Slot::Center => Role::Main,
            Slot::Right => Role::Right,
        }
    }

    /// Slot a slide with `role` is drawn in. Hidden slides have none.
    pub fn for_role(role: Role) -> Option<Self> {
        match role {
            Role::Left => Some(Slot::Left),
            Role::Main => Some(Slot::Center),
            Role::Right => Some(Slot::Right),
            Role::None => None,
        }
    }
}

/// Split the carousel area into its three slots, left to right.
pub fn slot_areas(area: Rect) -> [Rect; 3] {
    Layout::horizontal([
        Constraint::Percentage(25),
        Constraint::Percentage(50),
        Constraint::Percentage(25),
    ])
    .areas(area)
}

/// Slot under a terminal cell, if any.
pub fn slot_at(area: Rect, column: u16, row: u16) -> Option<Slot> {
    let position = Position::new(column, row);
    slot_areas(area)
        .iter()
        .position(|rect| rect.contains(position))
        .map(|index| Slot::ALL[index])
}
