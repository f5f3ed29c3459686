//! Jump engine: the prompt-driven lifecycle of a session.
//!
//! The host opens a modal prompt when a jump command runs and forwards the prompt's three
//! callbacks to the engine:
//!
//! 1. [`JumpEngine::invoke`] snapshots every pane and returns the prompt to show.
//! 2. [`JumpEngine::on_change`] receives the prompt text. The first character is the head
//!    char and labels a batch; the second is the label, and the prompt should close.
//! 3. [`JumpEngine::on_enter`] pages to the next batch when the wanted target has no label
//!    yet. The prompt is reopened holding just the head char.
//! 4. [`JumpEngine::on_close`] takes the labels down, jumps if the label was valid, and
//!    restores every pane. It runs on every exit path, including cancel.
//!
//! Only one session exists at a time: [`JumpEngine::invoke`] refuses while one is active.

use crate::{
    coordinator::{self, BatchRequest},
    error::{Error, Result},
    host::{Editor, Pane, PaneId},
    kind::JumpKind,
    labels::Alphabet,
    mode::Mode,
    placement,
    scanner::Candidate,
    session::Session,
    snapshot::Snapshot,
};
use acejump_config::Config;

/// Which panes a jump command covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scope {
    #[default]
    AllPanes,
    /// Only the active pane.
    CurrentBuffer,
}

/// Prompt the host should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub title: &'static str,
    pub text: String,
}

/// What the host should do with its prompt after a callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAction {
    Keep,
    /// Close the prompt; the host then calls [`JumpEngine::on_close`].
    Close,
    /// Replace the prompt with a new one.
    Reopen(Prompt),
}

/// A completed jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jump {
    pub pane: PaneId,
    /// Offset of the labeled candidate.
    pub target: usize,
    /// Where the cursor landed; past `target` in [`Mode::JumpAfter`].
    pub cursor: usize,
    pub mode: Mode,
}

#[derive(Debug)]
pub struct JumpEngine {
    config: Config,
    alphabet: Alphabet,
    mode: Mode,
    session: Option<Session>,
}

impl JumpEngine {
    pub fn new(config: Config) -> Self {
        let alphabet = Alphabet::new(&config.labels);
        Self {
            config,
            alphabet,
            mode: Mode::Normal,
            session: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Placement mode the next resolution will use.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Toggle a modifier mode; returns the resulting mode.
    pub fn toggle(&mut self, mode: Mode) -> Mode {
        self.mode = self.mode.toggled(mode);
        tracing::debug!("Jump mode is now {}", self.mode);
        self.mode
    }

    /// Whether a jump command may start now.
    pub fn is_enabled(&self) -> bool {
        self.session.is_none()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Start a session and return the prompt to show.
    ///
    /// Kinds that need no head char label their first batch right away.
    pub fn invoke<E: Editor>(
        &mut self,
        editor: &mut E,
        kind: JumpKind,
        scope: Scope,
    ) -> Result<Prompt> {
        if self.session.is_some() {
            tracing::warn!("Ignoring {kind} jump: a session is already active");
            return Err(Error::SessionActive);
        }

        let panes = editor.panes();
        if panes.is_empty() {
            return Err(Error::NoPanes);
        }

        let single = if scope == Scope::CurrentBuffer || self.mode.is_single_pane() {
            Some(editor.active_pane().ok_or(Error::NoPanes)?)
        } else {
            None
        };

        let working = coordinator::working_panes(editor, &panes, single);
        let snapshot = Snapshot::capture(editor, &panes, &self.config.view_settings);
        snapshot.suspend(editor, &self.config.overlay_syntax);

        tracing::info!(
            "Starting {kind} jump over {} of {} panes in {} mode",
            working.len(),
            panes.len(),
            self.mode
        );
        self.session = Some(Session::new(kind, working, snapshot));

        let text = kind.initial_text();
        if !text.is_empty() {
            self.on_change(editor, text);
        }

        Ok(Prompt {
            title: kind.prompt(),
            text: text.to_string(),
        })
    }

    /// Prompt text changed.
    pub fn on_change<E: Editor>(&mut self, editor: &mut E, text: &str) -> PromptAction {
        let Self {
            config,
            alphabet,
            session,
            ..
        } = self;
        let Some(session) = session.as_mut() else {
            return PromptAction::Close;
        };

        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (None, _) => {
                session.clear_batch(editor);
                session.cursor.reset();
                session.head = None;
                PromptAction::Keep
            },
            (Some(head), None) => {
                session.clear_batch(editor);
                session.cursor.reset();
                session.head = Some(head);
                label_batch(editor, session, config, alphabet);
                PromptAction::Keep
            },
            (Some(_), Some(label)) => {
                session.label = Some(label);
                PromptAction::Close
            },
        }
    }

    /// Enter pressed without a label: show the next batch.
    pub fn on_enter<E: Editor>(&mut self, editor: &mut E) -> PromptAction {
        let Self {
            config,
            alphabet,
            session,
            ..
        } = self;
        let Some(session) = session.as_mut() else {
            return PromptAction::Close;
        };
        let Some(head) = session.head else {
            return PromptAction::Close;
        };

        session.clear_batch(editor);
        label_batch(editor, session, config, alphabet);

        PromptAction::Reopen(Prompt {
            title: session.kind.prompt(),
            text: head.to_string(),
        })
    }

    /// Prompt closed: end the session, jumping if a valid label was typed.
    ///
    /// Every pane is returned to its pre-invocation state apart from the target pane's
    /// selection. Calling this without an active session does nothing.
    pub fn on_close<E: Editor>(&mut self, editor: &mut E) -> Option<Jump> {
        let mut session = self.session.take()?;
        session.batch.restore(editor);

        let jump = placement::resolve(&self.alphabet, &session.batch, session.label)
            .and_then(|candidate| self.place(editor, &session, candidate));
        session.snapshot.restore(editor, jump.map(|jump| jump.pane));

        match &jump {
            Some(jump) => tracing::info!(
                "Jumped to {} in {} ({} mode)",
                jump.cursor,
                jump.pane,
                jump.mode
            ),
            None => tracing::debug!("Jump session closed without a target"),
        }

        self.mode = Mode::Normal;
        jump
    }

    /// Abandon the session without jumping.
    pub fn cancel<E: Editor>(&mut self, editor: &mut E) {
        if let Some(session) = self.session.as_mut() {
            session.label = None;
        }
        self.on_close(editor);
    }

    fn place<E: Editor>(
        &self,
        editor: &mut E,
        session: &Session,
        candidate: Candidate,
    ) -> Option<Jump> {
        let Some(pane) = editor.pane_mut(candidate.pane) else {
            tracing::warn!("Target {} disappeared", candidate.pane);
            return None;
        };

        // A char right before a line end is jumped behind: onto the start of the next line.
        let behind_line_end = session.kind == JumpKind::Char
            && self.config.jump_behind_last_characters
            && pane.char_at(candidate.offset + 1) == Some('\n');

        let (mode, cursor) = if behind_line_end {
            (Mode::JumpAfter, (candidate.offset + 2).min(pane.len()))
        } else {
            let cursor = match self.mode {
                Mode::JumpAfter => session.kind.advance(pane, candidate.offset),
                _ => candidate.offset,
            };
            (self.mode, cursor)
        };

        let existing = session.snapshot.selections(candidate.pane);
        pane.set_selections(placement::apply_placement(mode, existing, cursor));
        pane.show(cursor);
        editor.focus(candidate.pane);

        Some(Jump {
            pane: candidate.pane,
            target: candidate.offset,
            cursor,
            mode,
        })
    }
}

impl Default for JumpEngine {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

fn label_batch<E: Editor>(
    editor: &mut E,
    session: &mut Session,
    config: &Config,
    alphabet: &Alphabet,
) {
    let Some(head) = session.head else {
        return;
    };

    let pattern = session.kind.pattern(head);
    let request = BatchRequest {
        pattern: &pattern,
        region: session.kind.search_region(),
        case_sensitive: config.search_case_sensitivity,
        alphabet,
        scope: &config.labels_scope,
        snapshot: &session.snapshot,
    };
    session.batch = coordinator::run_batch(editor, &mut session.cursor, &session.working, &request);
}
