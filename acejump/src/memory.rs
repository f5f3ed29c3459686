//! In-memory editor host.
//!
//! [`MemoryEditor`] implements [`Editor`] over plain strings so the engine can run
//! headless: from tests, and from the `acejump` CLI. Panes created with
//! [`MemoryEditor::add_view`] share a buffer, like two editor groups showing the
//! same file.

use crate::{
    host::{BufferId, Editor, Pane, PaneId, SettingValue},
    selection::Selection,
};
use regex::{Regex, RegexBuilder};
use std::{cell::RefCell, collections::HashMap, ops::Range, rc::Rc};

#[derive(Debug)]
struct MemoryBuffer {
    id: BufferId,
    text: String,
    /// Byte index of every char, plus `text.len()` as the last entry.
    boundaries: Vec<usize>,
    /// Text before each [`Pane::replace`], newest last.
    history: Vec<String>,
}

impl MemoryBuffer {
    fn new(id: BufferId, text: String) -> Self {
        let mut buffer = Self {
            id,
            text: String::new(),
            boundaries: Vec::new(),
            history: Vec::new(),
        };
        buffer.set_text(text);
        buffer
    }

    /// Swap in new text, returning the old one.
    fn set_text(&mut self, text: String) -> String {
        self.boundaries = text
            .char_indices()
            .map(|(index, _)| index)
            .chain(std::iter::once(text.len()))
            .collect();
        std::mem::replace(&mut self.text, text)
    }

    fn len(&self) -> usize {
        self.boundaries.len() - 1
    }

    fn byte_offset(&self, offset: usize) -> usize {
        self.boundaries
            .get(offset)
            .copied()
            .unwrap_or(self.text.len())
    }

    fn char_offset(&self, byte: usize) -> usize {
        self.boundaries.partition_point(|&index| index < byte)
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        self.text.get(self.byte_offset(offset)..)?.chars().next()
    }
}

/// Last search regex, reused while the pattern and case flag stay the same.
#[derive(Debug)]
struct CachedSearch {
    pattern: String,
    case_sensitive: bool,
    regex: Regex,
}

/// A highlighted region group added with [`Pane::add_regions`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Regions {
    pub ranges: Vec<Range<usize>>,
    pub scope: String,
}

#[derive(Debug)]
pub struct MemoryPane {
    buffer: Rc<RefCell<MemoryBuffer>>,
    selections: Vec<Selection>,
    settings: HashMap<String, SettingValue>,
    regions: HashMap<String, Regions>,
    visible: Option<Range<usize>>,
    shown: Option<usize>,
    search: RefCell<Option<CachedSearch>>,
}

impl MemoryPane {
    fn new(buffer: Rc<RefCell<MemoryBuffer>>) -> Self {
        Self {
            buffer,
            selections: vec![Selection::cursor(0)],
            settings: HashMap::new(),
            regions: HashMap::new(),
            visible: None,
            shown: None,
            search: RefCell::new(None),
        }
    }

    pub fn text(&self) -> String {
        self.buffer.borrow().text.clone()
    }

    /// Limit the visible region; the whole buffer is visible by default.
    pub fn set_visible_region(&mut self, region: Range<usize>) {
        self.visible = Some(region);
    }

    pub fn regions(&self, key: &str) -> Option<&Regions> {
        self.regions.get(key)
    }

    /// Last offset scrolled into view with [`Pane::show`].
    pub fn shown(&self) -> Option<usize> {
        self.shown
    }

    /// Number of edits that can still be undone.
    pub fn undo_depth(&self) -> usize {
        self.buffer.borrow().history.len()
    }

    fn search_regex(&self, pattern: &str, case_sensitive: bool) -> Option<Regex> {
        let mut cached = self.search.borrow_mut();
        if let Some(search) = cached.as_ref() {
            if search.pattern == pattern && search.case_sensitive == case_sensitive {
                return Some(search.regex.clone());
            }
        }

        let regex = match RegexBuilder::new(pattern)
            .case_insensitive(!case_sensitive)
            .build()
        {
            Ok(regex) => regex,
            Err(err) => {
                tracing::warn!("Invalid search pattern {pattern:?}: {err}");
                return None;
            },
        };
        tracing::trace!("Compiled search pattern {pattern:?}");
        *cached = Some(CachedSearch {
            pattern: pattern.to_string(),
            case_sensitive,
            regex: regex.clone(),
        });
        Some(regex)
    }
}

impl Pane for MemoryPane {
    fn buffer_id(&self) -> BufferId {
        self.buffer.borrow().id
    }

    fn len(&self) -> usize {
        self.buffer.borrow().len()
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        self.buffer.borrow().char_at(offset)
    }

    fn selections(&self) -> Vec<Selection> {
        self.selections.clone()
    }

    fn set_selections(&mut self, selections: Vec<Selection>) {
        self.selections = selections;
    }

    fn setting(&self, name: &str) -> Option<SettingValue> {
        self.settings.get(name).cloned()
    }

    fn set_setting(&mut self, name: &str, value: Option<SettingValue>) {
        match value {
            Some(value) => {
                self.settings.insert(name.to_string(), value);
            },
            None => {
                self.settings.remove(name);
            },
        }
    }

    fn find(&self, pattern: &str, from: usize, case_sensitive: bool) -> Option<Range<usize>> {
        let regex = self.search_regex(pattern, case_sensitive)?;
        let buffer = self.buffer.borrow();
        let found = regex.find_at(&buffer.text, buffer.byte_offset(from))?;
        Some(buffer.char_offset(found.start())..buffer.char_offset(found.end()))
    }

    fn visible_region(&self) -> Range<usize> {
        let len = self.len();
        match &self.visible {
            Some(region) => region.start.min(len)..region.end.min(len),
            None => 0..len,
        }
    }

    fn line(&self, offset: usize) -> Range<usize> {
        let buffer = self.buffer.borrow();
        let chars: Vec<char> = buffer.text.chars().collect();
        let offset = offset.min(chars.len());

        let start = chars[..offset]
            .iter()
            .rposition(|&ch| ch == '\n')
            .map_or(0, |index| index + 1);
        let end = chars[offset..]
            .iter()
            .position(|&ch| ch == '\n')
            .map_or(chars.len(), |index| offset + index);

        start..end
    }

    fn replace(&mut self, edits: &[(usize, char)]) {
        let mut buffer = self.buffer.borrow_mut();
        let mut chars: Vec<char> = buffer.text.chars().collect();
        for &(offset, glyph) in edits {
            if let Some(slot) = chars.get_mut(offset) {
                *slot = glyph;
            }
        }

        let previous = buffer.set_text(chars.into_iter().collect());
        buffer.history.push(previous);
    }

    fn undo(&mut self) {
        let mut buffer = self.buffer.borrow_mut();
        match buffer.history.pop() {
            Some(previous) => {
                buffer.set_text(previous);
            },
            None => tracing::warn!("Undo requested with an empty edit history"),
        }
    }

    fn add_regions(&mut self, key: &str, regions: &[Range<usize>], scope: &str) {
        self.regions.insert(
            key.to_string(),
            Regions {
                ranges: regions.to_vec(),
                scope: scope.to_string(),
            },
        );
    }

    fn erase_regions(&mut self, key: &str) {
        self.regions.remove(key);
    }

    fn show(&mut self, offset: usize) {
        self.shown = Some(offset);
    }
}

/// A window of in-memory panes.
#[derive(Debug, Default)]
pub struct MemoryEditor {
    panes: Vec<MemoryPane>,
    active: Option<PaneId>,
    focused: Option<PaneId>,
    next_buffer: u64,
}

impl MemoryEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `text` in a new buffer and a new pane. The first pane becomes active.
    pub fn add_pane(&mut self, text: &str) -> PaneId {
        let buffer = MemoryBuffer::new(BufferId(self.next_buffer), text.to_string());
        self.next_buffer += 1;
        self.push(MemoryPane::new(Rc::new(RefCell::new(buffer))))
    }

    /// Open another pane onto the buffer shown by `of`.
    pub fn add_view(&mut self, of: PaneId) -> Option<PaneId> {
        let buffer = Rc::clone(&self.panes.get(of.0)?.buffer);
        Some(self.push(MemoryPane::new(buffer)))
    }

    fn push(&mut self, pane: MemoryPane) -> PaneId {
        let id = PaneId(self.panes.len());
        self.panes.push(pane);
        self.active.get_or_insert(id);
        id
    }

    pub fn set_active(&mut self, id: PaneId) {
        if id.0 < self.panes.len() {
            self.active = Some(id);
        }
    }

    /// Pane most recently focused through [`Editor::focus`].
    pub fn focused(&self) -> Option<PaneId> {
        self.focused
    }

    pub fn text(&self, id: PaneId) -> Option<String> {
        self.panes.get(id.0).map(MemoryPane::text)
    }
}

impl Editor for MemoryEditor {
    type Pane = MemoryPane;

    fn panes(&self) -> Vec<PaneId> {
        (0..self.panes.len()).map(PaneId).collect()
    }

    fn active_pane(&self) -> Option<PaneId> {
        self.active
    }

    fn pane(&self, id: PaneId) -> Option<&MemoryPane> {
        self.panes.get(id.0)
    }

    fn pane_mut(&mut self, id: PaneId) -> Option<&mut MemoryPane> {
        self.panes.get_mut(id.0)
    }

    fn focus(&mut self, id: PaneId) {
        if id.0 < self.panes.len() {
            self.focused = Some(id);
            self.active = Some(id);
        }
    }
}
