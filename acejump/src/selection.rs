//! Pane selections.
//!
//! A [`Selection`] is a character-offset range with a direction: the anchor stays put
//! while the cursor (head) moves. A collapsed selection is a plain cursor.

use std::cmp::{max, min};

/// A text selection range with directional information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
    /// Whether the cursor sits at `start` rather than `end`.
    pub reversed: bool,
}

impl Selection {
    /// Create a selection from `anchor` to `cursor`, in either direction.
    pub fn new(anchor: usize, cursor: usize) -> Self {
        Self {
            start: min(anchor, cursor),
            end: max(anchor, cursor),
            reversed: cursor < anchor,
        }
    }

    /// Create a collapsed selection (cursor) at the given offset.
    pub fn cursor(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
            reversed: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Active end of the selection.
    pub fn cursor_position(&self) -> usize {
        if self.reversed {
            self.start
        } else {
            self.end
        }
    }

    /// Inactive end of the selection.
    pub fn anchor_position(&self) -> usize {
        if self.reversed {
            self.end
        } else {
            self.start
        }
    }
}
