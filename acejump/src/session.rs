use crate::{
    coordinator::{Batch, ScanCursor},
    host::{Editor, PaneId},
    kind::JumpKind,
    snapshot::Snapshot,
};

/// State of one invocation-to-resolution cycle.
///
/// Created by [`crate::JumpEngine::invoke`] and dropped when the prompt closes; the
/// engine holds at most one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub kind: JumpKind,
    /// First keystroke, the character candidates are searched for.
    pub head: Option<char>,
    /// Second keystroke, the label picked by the user.
    pub label: Option<char>,
    /// Panes this session scans, in snapshot order.
    pub working: Vec<PaneId>,
    pub cursor: ScanCursor,
    /// Labels currently on screen.
    pub batch: Batch,
    pub snapshot: Snapshot,
}

impl Session {
    pub fn new(kind: JumpKind, working: Vec<PaneId>, snapshot: Snapshot) -> Self {
        Self {
            kind,
            head: None,
            label: None,
            working,
            cursor: ScanCursor::default(),
            batch: Batch::default(),
            snapshot,
        }
    }

    /// Take the current labels down and forget them.
    pub fn clear_batch<E: Editor>(&mut self, editor: &mut E) {
        self.batch.restore(editor);
        self.batch = Batch::default();
    }
}
