//! The editor surface the engine drives.
//!
//! acejump never owns text. Everything it needs from the host editor (pane enumeration,
//! search, transient edits, highlight groups, selections and per-pane settings) goes
//! through [`Editor`] and [`Pane`]. [`crate::memory`] provides an in-memory implementation.
//!
//! All positions are character offsets. A label glyph is a single `char`, so swapping a
//! character for its label never moves any other offset.

use crate::selection::Selection;
use std::{fmt, ops::Range};

/// Pane setting holding the syntax grammar identifier.
pub const SYNTAX_SETTING: &str = "syntax";

/// Identifies one visible pane, stable for the life of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PaneId(pub usize);

impl fmt::Display for PaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pane#{}", self.0)
    }
}

/// Identifies the buffer behind a pane. Several panes may share one buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// One visible editing surface.
pub trait Pane {
    fn buffer_id(&self) -> BufferId;

    /// Buffer length in characters.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn char_at(&self, offset: usize) -> Option<char>;

    fn selections(&self) -> Vec<Selection>;

    fn set_selections(&mut self, selections: Vec<Selection>);

    fn setting(&self, name: &str) -> Option<SettingValue>;

    /// Set a named setting; `None` erases it.
    fn set_setting(&mut self, name: &str, value: Option<SettingValue>);

    /// First match of the regex `pattern` starting at or after `from`.
    fn find(&self, pattern: &str, from: usize, case_sensitive: bool) -> Option<Range<usize>>;

    fn visible_region(&self) -> Range<usize>;

    /// The line containing `offset`, without its trailing newline.
    fn line(&self, offset: usize) -> Range<usize>;

    /// Replace single characters in one undoable edit.
    fn replace(&mut self, edits: &[(usize, char)]);

    /// Revert the last edit made through [`Pane::replace`].
    fn undo(&mut self);

    fn add_regions(&mut self, key: &str, regions: &[Range<usize>], scope: &str);

    fn erase_regions(&mut self, key: &str);

    /// Scroll `offset` into view.
    fn show(&mut self, offset: usize);
}

/// The host window: an ordered set of panes, one per group.
pub trait Editor {
    type Pane: Pane;

    /// Visible panes in group order.
    fn panes(&self) -> Vec<PaneId>;

    fn active_pane(&self) -> Option<PaneId>;

    fn pane(&self, id: PaneId) -> Option<&Self::Pane>;

    fn pane_mut(&mut self, id: PaneId) -> Option<&mut Self::Pane>;

    fn focus(&mut self, id: PaneId);
}
