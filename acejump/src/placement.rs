//! Target resolution and cursor placement.

use crate::{
    coordinator::Batch, labels::Alphabet, mode::Mode, scanner::Candidate, selection::Selection,
};

/// Map a typed label to the candidate it marks in `batch`.
///
/// `None` covers every invalid input: no label typed, a glyph outside the alphabet, or
/// a glyph past the last label of the batch.
pub fn resolve(alphabet: &Alphabet, batch: &Batch, label: Option<char>) -> Option<Candidate> {
    let label = label?;
    let Some(index) = alphabet.index_of(label) else {
        tracing::debug!("{label:?} is not a label");
        return None;
    };
    if index >= batch.issued() {
        tracing::debug!("{label:?} was not issued in this batch");
        return None;
    }
    batch.candidate(index)
}

/// New selections for the target pane after jumping to `target`.
///
/// `existing` are the pane's selections from before the session started.
pub fn apply_placement(mode: Mode, existing: &[Selection], target: usize) -> Vec<Selection> {
    match mode {
        Mode::Normal | Mode::JumpAfter => vec![Selection::cursor(target)],
        Mode::Select if existing.is_empty() => vec![Selection::cursor(target)],
        Mode::Select => existing
            .iter()
            .map(|selection| Selection::new(selection.anchor_position(), target))
            .collect(),
        Mode::AddCursor => {
            let cursor = Selection::cursor(target);
            let mut selections = existing.to_vec();
            if !selections.contains(&cursor) {
                selections.push(cursor);
            }
            selections
        },
    }
}
