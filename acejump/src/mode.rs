use std::fmt;

/// How the cursor is placed once a label resolves to a target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Collapse the selection to a cursor on the target.
    #[default]
    Normal,
    /// Extend every existing selection to the target.
    Select,
    /// Keep existing selections and add a cursor on the target.
    AddCursor,
    /// Like [`Mode::Normal`], then advance past the matched unit.
    JumpAfter,
}

impl Mode {
    /// Switch to `mode`, or back to [`Mode::Normal`] if it is already engaged.
    pub fn toggled(self, mode: Mode) -> Mode {
        if self == mode {
            Mode::Normal
        } else {
            mode
        }
    }

    /// Modifier modes only make sense in the pane the user is working in.
    pub fn is_single_pane(self) -> bool {
        self != Mode::Normal
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Normal => "normal",
            Mode::Select => "select",
            Mode::AddCursor => "add-cursor",
            Mode::JumpAfter => "jump-after",
        };
        f.write_str(name)
    }
}
