//! Fluent test harness for jump sessions.
//!
//! [`TestJump`] drives a [`JumpEngine`] against a [`MemoryEditor`] the way a host would:
//! it holds the open prompt, forwards keystrokes as prompt edits, and runs the close
//! callback when the engine asks for it. Panes are addressed by the order they were
//! added.
//!
//! ```rust,ignore
//! JumpEngine::test()
//!     .with_pane("foo bar baz")
//!     .invoke(JumpKind::Char)
//!     .type_keys("b")
//!     .assert_text(0, "foo aar bbz")
//!     .type_keys("b")
//!     .assert_cursor(0, 8);
//! ```

use crate::{
    engine::{Jump, JumpEngine, Prompt, PromptAction, Scope},
    host::{Editor, Pane, PaneId, SettingValue},
    keys::{parse_keys, Key},
    kind::JumpKind,
    memory::MemoryEditor,
    mode::Mode,
    overlay::LABEL_REGIONS,
    selection::Selection,
};
use acejump_config::Config;

impl JumpEngine {
    pub fn test() -> TestJump {
        TestJump::new()
    }
}

pub struct TestJump {
    engine: JumpEngine,
    editor: MemoryEditor,
    panes: Vec<PaneId>,
    prompt: Option<Prompt>,
    last_jump: Option<Jump>,
}

impl TestJump {
    pub fn new() -> Self {
        Self {
            engine: JumpEngine::default(),
            editor: MemoryEditor::new(),
            panes: Vec::new(),
            prompt: None,
            last_jump: None,
        }
    }

    pub fn with_pane(mut self, text: &str) -> Self {
        let id = self.editor.add_pane(text);
        self.panes.push(id);
        self
    }

    /// Add a second pane onto the buffer of pane `of`.
    #[track_caller]
    pub fn with_view(mut self, of: usize) -> Self {
        let of = self.id(of);
        let id = self.editor.add_view(of).expect("view of an existing pane");
        self.panes.push(id);
        self
    }

    pub fn config(mut self, config: Config) -> Self {
        self.engine = JumpEngine::new(config);
        self
    }

    pub fn labels(self, labels: &str) -> Self {
        let config = Config {
            labels: labels.to_string(),
            ..Config::default()
        };
        self.config(config)
    }

    #[track_caller]
    pub fn visible(mut self, pane: usize, start: usize, end: usize) -> Self {
        self.pane_mut(pane).set_visible_region(start..end);
        self
    }

    #[track_caller]
    pub fn cursor(self, pane: usize, offset: usize) -> Self {
        self.selections(pane, vec![Selection::cursor(offset)])
    }

    #[track_caller]
    pub fn selections(mut self, pane: usize, selections: Vec<Selection>) -> Self {
        self.pane_mut(pane).set_selections(selections);
        self
    }

    #[track_caller]
    pub fn setting(mut self, pane: usize, name: &str, value: impl Into<SettingValue>) -> Self {
        self.pane_mut(pane).set_setting(name, Some(value.into()));
        self
    }

    #[track_caller]
    pub fn active(mut self, pane: usize) -> Self {
        let id = self.id(pane);
        self.editor.set_active(id);
        self
    }

    pub fn toggle(mut self, mode: Mode) -> Self {
        self.engine.toggle(mode);
        self
    }

    /// Start a session over all panes and open its prompt.
    #[track_caller]
    pub fn invoke(self, kind: JumpKind) -> Self {
        self.invoke_scoped(kind, Scope::AllPanes)
    }

    /// Start a session limited to the active pane.
    #[track_caller]
    pub fn invoke_current(self, kind: JumpKind) -> Self {
        self.invoke_scoped(kind, Scope::CurrentBuffer)
    }

    #[track_caller]
    fn invoke_scoped(mut self, kind: JumpKind, scope: Scope) -> Self {
        let prompt = self
            .engine
            .invoke(&mut self.editor, kind, scope)
            .expect("session should start");
        self.prompt = Some(prompt);
        self.last_jump = None;
        self
    }

    /// Type into the open prompt, in [`parse_keys`] notation.
    ///
    /// `<Enter>` pages, `<Esc>` cancels and `<BS>` deletes the last prompt character.
    #[track_caller]
    pub fn type_keys(mut self, keys: &str) -> Self {
        for key in parse_keys(keys).expect("valid key notation") {
            self = match key {
                Key::Char(ch) => {
                    self.edit_prompt(|text| text.push(ch));
                    self
                },
                Key::Enter => self.enter(),
                Key::Esc => self.cancel(),
                Key::Backspace => {
                    self.edit_prompt(|text| {
                        text.pop();
                    });
                    self
                },
            };
        }
        self
    }

    #[track_caller]
    fn edit_prompt(&mut self, edit: impl FnOnce(&mut String)) {
        let prompt = self.prompt.as_mut().expect("no prompt is open");
        edit(&mut prompt.text);
        let text = prompt.text.clone();
        let action = self.engine.on_change(&mut self.editor, &text);
        self.apply(action);
    }

    fn apply(&mut self, action: PromptAction) {
        match action {
            PromptAction::Keep => {},
            PromptAction::Close => self.close_prompt(),
            PromptAction::Reopen(prompt) => self.prompt = Some(prompt),
        }
    }

    fn close_prompt(&mut self) {
        self.prompt = None;
        self.last_jump = self.engine.on_close(&mut self.editor);
    }

    pub fn enter(mut self) -> Self {
        let action = self.engine.on_enter(&mut self.editor);
        self.apply(action);
        self
    }

    pub fn cancel(mut self) -> Self {
        self.prompt = None;
        self.engine.cancel(&mut self.editor);
        self.last_jump = None;
        self
    }

    /// Close the prompt without typing a label, as if it lost focus.
    pub fn close(mut self) -> Self {
        self.close_prompt();
        self
    }

    #[track_caller]
    fn id(&self, pane: usize) -> PaneId {
        *self.panes.get(pane).expect("pane index out of range")
    }

    #[track_caller]
    fn pane_mut(&mut self, pane: usize) -> &mut crate::memory::MemoryPane {
        let id = self.id(pane);
        self.editor.pane_mut(id).expect("pane exists")
    }

    #[track_caller]
    fn pane(&self, pane: usize) -> &crate::memory::MemoryPane {
        self.editor.pane(self.id(pane)).expect("pane exists")
    }

    #[track_caller]
    pub fn assert_text(self, pane: usize, expected: &str) -> Self {
        assert_eq!(self.pane(pane).text(), expected, "text of pane {pane}");
        self
    }

    #[track_caller]
    pub fn assert_selections(self, pane: usize, expected: Vec<Selection>) -> Self {
        assert_eq!(
            self.pane(pane).selections(),
            expected,
            "selections of pane {pane}"
        );
        self
    }

    #[track_caller]
    pub fn assert_cursor(self, pane: usize, offset: usize) -> Self {
        self.assert_selections(pane, vec![Selection::cursor(offset)])
    }

    /// Offsets currently covered by labels in `pane`.
    #[track_caller]
    pub fn assert_labeled(self, pane: usize, offsets: &[usize]) -> Self {
        let labeled: Vec<usize> = self
            .pane(pane)
            .regions(LABEL_REGIONS)
            .map(|regions| regions.ranges.iter().map(|range| range.start).collect())
            .unwrap_or_default();
        assert_eq!(labeled, offsets, "labels in pane {pane}");
        self
    }

    #[track_caller]
    pub fn assert_prompt(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.prompt.as_ref().map(|prompt| prompt.text.as_str()),
            expected
        );
        self
    }

    /// The last session ended on `(pane, cursor)`, or without a jump.
    #[track_caller]
    pub fn assert_jump(self, expected: Option<(usize, usize)>) -> Self {
        let expected = expected.map(|(pane, cursor)| (self.id(pane), cursor));
        assert_eq!(
            self.last_jump.map(|jump| (jump.pane, jump.cursor)),
            expected
        );
        self
    }

    #[track_caller]
    pub fn assert_active(self, active: bool) -> Self {
        assert_eq!(self.engine.session().is_some(), active, "session active");
        self
    }

    #[track_caller]
    pub fn assert_mode(self, mode: Mode) -> Self {
        assert_eq!(self.engine.mode(), mode);
        self
    }

    #[track_caller]
    pub fn assert_focused(self, pane: usize) -> Self {
        assert_eq!(self.editor.focused(), Some(self.id(pane)));
        self
    }

    #[track_caller]
    pub fn assert_setting(self, pane: usize, name: &str, expected: Option<SettingValue>) -> Self {
        assert_eq!(self.pane(pane).setting(name), expected, "{name} of pane {pane}");
        self
    }
}

impl Default for TestJump {
    fn default() -> Self {
        Self::new()
    }
}
