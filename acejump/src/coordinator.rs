//! Multi-pane batches.
//!
//! A batch labels candidates across the working panes, in snapshot order, until either
//! every pane is scanned or the alphabet runs out. Labels are a flat index over the
//! batch; the [`Breakpoints`] table maps that index back to the pane that owns it.
//!
//! When the alphabet runs out mid-pane, [`ScanCursor`] remembers the pane and the offset
//! so the next batch picks up exactly there. Panes finished in an earlier batch are not
//! labeled again until every working pane has had its turn.

use crate::{
    host::{BufferId, Editor, Pane, PaneId},
    kind::SearchRegion,
    labels::Alphabet,
    overlay::{self, OverlayRecord},
    scanner::{self, Candidate},
    snapshot::Snapshot,
};
use std::collections::VecDeque;

/// Cumulative candidate counts, one entry per pane scanned in the batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breakpoints {
    entries: Vec<(PaneId, usize)>,
}

impl Breakpoints {
    /// Close the entry for `pane` at `cumulative` total labels.
    pub fn push(&mut self, pane: PaneId, cumulative: usize) {
        debug_assert!(cumulative >= self.last(), "breakpoints must not decrease");
        self.entries.push((pane, cumulative));
    }

    /// Total labels issued so far.
    pub fn last(&self) -> usize {
        self.entries.last().map_or(0, |&(_, end)| end)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Owning pane of the label at `index`, and the index within that pane.
    pub fn lookup(&self, index: usize) -> Option<(PaneId, usize)> {
        let slot = self.entries.partition_point(|&(_, end)| end <= index);
        let &(pane, _) = self.entries.get(slot)?;
        let start = match slot {
            0 => 0,
            _ => self.entries[slot - 1].1,
        };
        Some((pane, index - start))
    }
}

/// Candidates labeled in one batch, and how to take the labels down again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch {
    pub candidates: Vec<Candidate>,
    pub breakpoints: Breakpoints,
    pub overlays: Vec<OverlayRecord>,
}

impl Batch {
    pub fn issued(&self) -> usize {
        self.breakpoints.last()
    }

    /// The candidate labeled at `index`, located through the breakpoint table.
    pub fn candidate(&self, index: usize) -> Option<Candidate> {
        let (pane, local) = self.breakpoints.lookup(index)?;
        let record = self.overlays.iter().find(|record| record.pane == pane)?;
        let offset = *record.offsets.get(local)?;
        Some(Candidate { pane, offset })
    }

    /// Take every label of this batch down, newest pane first.
    pub fn restore<E: Editor>(&mut self, editor: &mut E) {
        for record in self.overlays.iter_mut().rev() {
            match editor.pane_mut(record.pane) {
                Some(pane) => overlay::restore(pane, record),
                None => tracing::warn!("Cannot remove labels from missing {}", record.pane),
            }
        }
    }
}

/// Where the next batch resumes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanCursor {
    /// Working panes not yet fully labeled, in scan order.
    pub pending: VecDeque<PaneId>,
    /// Resume offset inside `pending.front()`; `None` starts at its region start.
    pub offset: Option<usize>,
}

impl ScanCursor {
    pub fn reset(&mut self) {
        self.pending.clear();
        self.offset = None;
    }
}

/// Panes a session scans, in snapshot order.
///
/// `single` restricts the set to that pane. Otherwise each buffer is scanned through
/// the first pane showing it; later views of the same buffer would display the same
/// labels and are skipped.
pub fn working_panes<E: Editor>(
    editor: &E,
    panes: &[PaneId],
    single: Option<PaneId>,
) -> Vec<PaneId> {
    if let Some(id) = single {
        return panes.iter().copied().filter(|&pane| pane == id).collect();
    }

    let mut seen: Vec<BufferId> = Vec::new();
    let mut working = Vec::with_capacity(panes.len());
    for &id in panes {
        let Some(pane) = editor.pane(id) else {
            continue;
        };
        let buffer = pane.buffer_id();
        if seen.contains(&buffer) {
            tracing::debug!("Skipping {id}: buffer already labeled through another pane");
            continue;
        }
        seen.push(buffer);
        working.push(id);
    }
    working
}

/// Inputs shared by every pane of a batch.
#[derive(Debug, Clone, Copy)]
pub struct BatchRequest<'a> {
    pub pattern: &'a str,
    pub region: SearchRegion,
    pub case_sensitive: bool,
    pub alphabet: &'a Alphabet,
    pub scope: &'a str,
    pub snapshot: &'a Snapshot,
}

/// Scan and label the next batch.
///
/// With nothing pending, starts over from the first working pane.
pub fn run_batch<E: Editor>(
    editor: &mut E,
    cursor: &mut ScanCursor,
    working: &[PaneId],
    request: &BatchRequest<'_>,
) -> Batch {
    if cursor.pending.is_empty() {
        cursor.pending.extend(working.iter().copied());
        cursor.offset = None;
    }

    let mut batch = Batch::default();
    let mut issued = 0;

    while let Some(&pane_id) = cursor.pending.front() {
        let Some(pane) = editor.pane_mut(pane_id) else {
            tracing::warn!("Working {pane_id} disappeared, skipping");
            cursor.pending.pop_front();
            cursor.offset = None;
            continue;
        };

        let caret = request.snapshot.caret(pane_id);
        let region = request.region.resolve(pane, caret);
        let start = cursor.offset.take().unwrap_or(region.start);
        let remaining = request.alphabet.len() - issued;

        let scan = scanner::scan(
            pane,
            request.pattern,
            region,
            start,
            remaining,
            request.case_sensitive,
        );

        let labels = request.alphabet.allocate(issued, scan.candidates.len());
        let record = overlay::apply(pane_id, pane, scan.candidates, &labels, request.scope);

        batch.candidates.extend(record.offsets.iter().map(|&offset| Candidate {
            pane: pane_id,
            offset,
        }));
        issued += record.len();
        batch.breakpoints.push(pane_id, issued);
        batch.overlays.push(record);

        if let Some(next) = scan.next {
            tracing::debug!("Alphabet exhausted in {pane_id}, resuming at {next} next batch");
            cursor.offset = Some(next);
            break;
        }
        cursor.pending.pop_front();
    }

    tracing::debug!(
        "Batch labeled {issued} candidates across {} panes",
        batch.breakpoints.len()
    );
    batch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{kind::JumpKind, memory::MemoryEditor};

    fn request<'a>(
        pattern: &'a str,
        alphabet: &'a Alphabet,
        snapshot: &'a Snapshot,
    ) -> BatchRequest<'a> {
        BatchRequest {
            pattern,
            region: SearchRegion::Visible,
            case_sensitive: true,
            alphabet,
            scope: "invalid",
            snapshot,
        }
    }

    #[test]
    fn lookup_finds_owning_pane() {
        let mut breakpoints = Breakpoints::default();
        breakpoints.push(PaneId(0), 2);
        breakpoints.push(PaneId(1), 2);
        breakpoints.push(PaneId(2), 5);

        assert_eq!(breakpoints.lookup(0), Some((PaneId(0), 0)));
        assert_eq!(breakpoints.lookup(1), Some((PaneId(0), 1)));
        assert_eq!(breakpoints.lookup(2), Some((PaneId(2), 0)));
        assert_eq!(breakpoints.lookup(4), Some((PaneId(2), 2)));
        assert_eq!(breakpoints.lookup(5), None);
        assert_eq!(breakpoints.last(), 5);
    }

    #[test]
    fn lookup_is_monotonic_in_scan_order() {
        let mut breakpoints = Breakpoints::default();
        breakpoints.push(PaneId(3), 1);
        breakpoints.push(PaneId(1), 4);
        breakpoints.push(PaneId(2), 6);

        let owners: Vec<PaneId> = (0..6)
            .filter_map(|index| breakpoints.lookup(index))
            .map(|(pane, _)| pane)
            .collect();
        assert_eq!(
            owners,
            vec![PaneId(3), PaneId(1), PaneId(1), PaneId(1), PaneId(2), PaneId(2)]
        );
    }

    #[test]
    fn batch_spans_panes_in_order() {
        let mut editor = MemoryEditor::new();
        let first = editor.add_pane("xax");
        let second = editor.add_pane("aa");
        let panes = [first, second];
        let alphabet = Alphabet::default();
        let snapshot = Snapshot::capture(&editor, &panes, &[]);
        let mut cursor = ScanCursor::default();

        let req = request("a", &alphabet, &snapshot);
        let batch = run_batch(&mut editor, &mut cursor, &panes, &req);

        assert_eq!(editor.text(first).unwrap(), "xax");
        assert_eq!(editor.text(second).unwrap(), "bc");
        assert_eq!(batch.issued(), 3);
        assert_eq!(batch.candidates.len(), batch.breakpoints.last());
        assert_eq!(
            batch.candidate(2),
            Some(Candidate {
                pane: second,
                offset: 1
            })
        );
        assert!(cursor.pending.is_empty());
    }

    #[test]
    fn exhaustion_stops_the_batch_and_resumes() {
        let mut editor = MemoryEditor::new();
        let first = editor.add_pane("aaa");
        let second = editor.add_pane("a");
        let panes = [first, second];
        let alphabet = Alphabet::new("xy");
        let snapshot = Snapshot::capture(&editor, &panes, &[]);
        let mut cursor = ScanCursor::default();
        let req = request("a", &alphabet, &snapshot);

        let mut batch = run_batch(&mut editor, &mut cursor, &panes, &req);
        assert_eq!(editor.text(first).unwrap(), "xya");
        assert_eq!(editor.text(second).unwrap(), "a");
        assert_eq!(cursor.offset, Some(2));
        assert_eq!(cursor.pending, VecDeque::from([first, second]));
        batch.restore(&mut editor);

        let mut batch = run_batch(&mut editor, &mut cursor, &panes, &req);
        assert_eq!(editor.text(first).unwrap(), "aax");
        assert_eq!(editor.text(second).unwrap(), "y");
        assert!(cursor.pending.is_empty());
        batch.restore(&mut editor);

        // Everything labeled once: the next page wraps around.
        run_batch(&mut editor, &mut cursor, &panes, &req);
        assert_eq!(editor.text(first).unwrap(), "xya");
    }

    #[test]
    fn restore_returns_every_pane_to_original() {
        let mut editor = MemoryEditor::new();
        let first = editor.add_pane("cat bat");
        let second = editor.add_pane("hat");
        let panes = [first, second];
        let alphabet = Alphabet::default();
        let snapshot = Snapshot::capture(&editor, &panes, &[]);
        let mut cursor = ScanCursor::default();

        let pattern = JumpKind::Char.pattern('a');
        let mut batch = run_batch(
            &mut editor,
            &mut cursor,
            &panes,
            &request(&pattern, &alphabet, &snapshot),
        );
        batch.restore(&mut editor);
        batch.restore(&mut editor);

        assert_eq!(editor.text(first).unwrap(), "cat bat");
        assert_eq!(editor.text(second).unwrap(), "hat");
    }

    #[test]
    fn shared_buffers_are_scanned_once() {
        let mut editor = MemoryEditor::new();
        let first = editor.add_pane("abc");
        let other = editor.add_pane("xyz");
        let view = editor.add_view(first).unwrap();

        let working = working_panes(&editor, &[first, other, view], None);
        assert_eq!(working, vec![first, other]);
    }

    #[test]
    fn single_pane_restriction() {
        let mut editor = MemoryEditor::new();
        let first = editor.add_pane("abc");
        let second = editor.add_pane("xyz");

        assert_eq!(
            working_panes(&editor, &[first, second], Some(second)),
            vec![second]
        );
    }
}
