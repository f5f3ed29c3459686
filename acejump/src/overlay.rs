//! Label overlay.
//!
//! Labels are shown by overwriting the candidate character itself with its glyph, in a
//! single undoable edit, and marking the overwritten positions as one highlighted region
//! group. [`restore`] erases the group and undoes the edit, which leaves the buffer
//! byte-identical to what it was before [`apply`].

use crate::host::{Pane, PaneId};
use std::ops::Range;

/// Region group key holding the labeled positions.
pub const LABEL_REGIONS: &str = "acejump_labels";

/// What [`apply`] changed in one pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayRecord {
    pub pane: PaneId,
    /// Labeled offsets, in label order.
    pub offsets: Vec<usize>,
    /// Whether an edit was made and must be undone.
    edited: bool,
}

impl OverlayRecord {
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    pub fn regions(&self) -> Vec<Range<usize>> {
        self.offsets.iter().map(|&offset| offset..offset + 1).collect()
    }
}

/// Show `labels[i]` in place of the character at `offsets[i]`.
///
/// `labels` must be at least as long as `offsets`; extra offsets are left unlabeled.
pub fn apply<P: Pane + ?Sized>(
    pane_id: PaneId,
    pane: &mut P,
    mut offsets: Vec<usize>,
    labels: &[char],
    scope: &str,
) -> OverlayRecord {
    offsets.truncate(labels.len());

    let mut record = OverlayRecord {
        pane: pane_id,
        offsets,
        edited: false,
    };
    if record.is_empty() {
        return record;
    }

    let edits: Vec<(usize, char)> = record
        .offsets
        .iter()
        .copied()
        .zip(labels.iter().copied())
        .collect();
    pane.replace(&edits);
    pane.add_regions(LABEL_REGIONS, &record.regions(), scope);
    record.edited = true;

    tracing::debug!("Labeled {} positions in {pane_id}", record.len());
    record
}

/// Undo what [`apply`] did. Restoring the same record twice is a no-op.
pub fn restore<P: Pane + ?Sized>(pane: &mut P, record: &mut OverlayRecord) {
    if !record.edited {
        return;
    }
    pane.erase_regions(LABEL_REGIONS);
    pane.undo();
    record.edited = false;
    tracing::debug!("Removed labels from {}", record.pane);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{host::Editor, memory::MemoryEditor};
    use insta::assert_snapshot;

    #[test]
    fn apply_swaps_characters_for_labels() {
        let mut editor = MemoryEditor::new();
        let id = editor.add_pane("cat bat hat");
        let pane = editor.pane_mut(id).unwrap();

        let record = apply(id, pane, vec![1, 5, 9], &['a', 'b', 'c'], "invalid");
        assert_snapshot!(pane.text(), @"cat bbt hct");

        let regions = pane.regions(LABEL_REGIONS).unwrap();
        assert_eq!(regions.ranges, vec![1..2, 5..6, 9..10]);
        assert_eq!(regions.scope, "invalid");
        assert_eq!(record.offsets, vec![1, 5, 9]);
    }

    #[test]
    fn restore_round_trips_content() {
        let mut editor = MemoryEditor::new();
        let id = editor.add_pane("fn main() {}\n");
        let pane = editor.pane_mut(id).unwrap();

        let mut record = apply(id, pane, vec![0, 3, 8], &['x', 'y', 'z'], "invalid");
        assert_ne!(pane.text(), "fn main() {}\n");

        restore(pane, &mut record);
        assert_eq!(pane.text(), "fn main() {}\n");
        assert!(pane.regions(LABEL_REGIONS).is_none());
        assert_eq!(pane.undo_depth(), 0);
    }

    #[test]
    fn restore_twice_changes_nothing() {
        let mut editor = MemoryEditor::new();
        let id = editor.add_pane("abc");
        let pane = editor.pane_mut(id).unwrap();
        pane.replace(&[(0, 'A')]);

        let mut record = apply(id, pane, vec![1], &['z'], "invalid");
        restore(pane, &mut record);
        restore(pane, &mut record);
        assert_eq!(pane.text(), "Abc");
    }

    #[test]
    fn empty_overlay_makes_no_edit() {
        let mut editor = MemoryEditor::new();
        let id = editor.add_pane("abc");
        let pane = editor.pane_mut(id).unwrap();

        let mut record = apply(id, pane, Vec::new(), &['a'], "invalid");
        assert_eq!(pane.undo_depth(), 0);
        restore(pane, &mut record);
        assert_eq!(pane.text(), "abc");
    }

    #[test]
    fn offsets_beyond_labels_are_dropped() {
        let mut editor = MemoryEditor::new();
        let id = editor.add_pane("aaa");
        let pane = editor.pane_mut(id).unwrap();

        let record = apply(id, pane, vec![0, 1, 2], &['x', 'y'], "invalid");
        assert_eq!(record.offsets, vec![0, 1]);
        assert_eq!(pane.text(), "xya");
    }
}
