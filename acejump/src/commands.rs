//! Host command entry points.
//!
//! Each command is a thin dispatch onto [`JumpEngine`]. Hosts bind their command names
//! through [`Command::from_name`].

use crate::{
    engine::{JumpEngine, Prompt, Scope},
    error::{Error, Result},
    host::Editor,
    kind::JumpKind,
    mode::Mode,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    JumpWord(Scope),
    JumpChar(Scope),
    JumpLine(Scope),
    JumpWithinLine(Scope),
    ToggleSelect,
    ToggleAddCursor,
    ToggleJumpAfter,
}

impl Command {
    /// Parse a host command name such as `ace_jump_word`.
    ///
    /// `current_buffer_only` narrows jump commands to the active pane and is ignored by
    /// the mode toggles.
    pub fn from_name(name: &str, current_buffer_only: bool) -> Result<Self> {
        let scope = if current_buffer_only {
            Scope::CurrentBuffer
        } else {
            Scope::AllPanes
        };

        let command = match name {
            "ace_jump_word" => Command::JumpWord(scope),
            "ace_jump_char" => Command::JumpChar(scope),
            "ace_jump_line" => Command::JumpLine(scope),
            "ace_jump_within_line" => Command::JumpWithinLine(scope),
            "ace_jump_select" => Command::ToggleSelect,
            "ace_jump_add_cursor" => Command::ToggleAddCursor,
            "ace_jump_after" => Command::ToggleJumpAfter,
            _ => return Err(Error::UnknownCommand(name.to_string())),
        };
        Ok(command)
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::JumpWord(_) => "ace_jump_word",
            Command::JumpChar(_) => "ace_jump_char",
            Command::JumpLine(_) => "ace_jump_line",
            Command::JumpWithinLine(_) => "ace_jump_within_line",
            Command::ToggleSelect => "ace_jump_select",
            Command::ToggleAddCursor => "ace_jump_add_cursor",
            Command::ToggleJumpAfter => "ace_jump_after",
        }
    }

    /// Whether the host should offer this command right now.
    pub fn is_enabled(self, engine: &JumpEngine) -> bool {
        match self {
            Command::JumpWord(_)
            | Command::JumpChar(_)
            | Command::JumpLine(_)
            | Command::JumpWithinLine(_) => engine.is_enabled(),
            Command::ToggleSelect | Command::ToggleAddCursor | Command::ToggleJumpAfter => true,
        }
    }
}

/// Run `command`. Jump commands return the prompt the host should open.
pub fn dispatch<E: Editor>(
    engine: &mut JumpEngine,
    editor: &mut E,
    command: Command,
) -> Result<Option<Prompt>> {
    tracing::debug!("Dispatching {}", command.name());

    let (kind, scope) = match command {
        Command::JumpWord(scope) => (JumpKind::Word, scope),
        Command::JumpChar(scope) => (JumpKind::Char, scope),
        Command::JumpLine(scope) => (JumpKind::Line, scope),
        Command::JumpWithinLine(scope) => (JumpKind::WithinLine, scope),
        Command::ToggleSelect => {
            engine.toggle(Mode::Select);
            return Ok(None);
        },
        Command::ToggleAddCursor => {
            engine.toggle(Mode::AddCursor);
            return Ok(None);
        },
        Command::ToggleJumpAfter => {
            engine.toggle(Mode::JumpAfter);
            return Ok(None);
        },
    };

    engine.invoke(editor, kind, scope).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryEditor;

    #[test]
    fn names_parse_back() {
        for command in [
            Command::JumpWord(Scope::AllPanes),
            Command::JumpChar(Scope::AllPanes),
            Command::JumpLine(Scope::AllPanes),
            Command::JumpWithinLine(Scope::AllPanes),
            Command::ToggleSelect,
            Command::ToggleAddCursor,
            Command::ToggleJumpAfter,
        ] {
            assert_eq!(Command::from_name(command.name(), false), Ok(command));
        }
    }

    #[test]
    fn current_buffer_only_scopes_jumps() {
        assert_eq!(
            Command::from_name("ace_jump_char", true),
            Ok(Command::JumpChar(Scope::CurrentBuffer))
        );
        assert_eq!(
            Command::from_name("ace_jump_select", true),
            Ok(Command::ToggleSelect)
        );
    }

    #[test]
    fn unknown_name_is_an_error() {
        assert_eq!(
            Command::from_name("ace_jump_sideways", false),
            Err(Error::UnknownCommand("ace_jump_sideways".to_string()))
        );
    }

    #[test]
    fn toggles_do_not_open_a_prompt() {
        let mut engine = JumpEngine::default();
        let mut editor = MemoryEditor::new();
        editor.add_pane("text");

        let prompt = dispatch(&mut engine, &mut editor, Command::ToggleAddCursor).unwrap();
        assert_eq!(prompt, None);
        assert_eq!(engine.mode(), Mode::AddCursor);
    }

    #[test]
    fn jump_commands_disabled_during_a_session() {
        let mut engine = JumpEngine::default();
        let mut editor = MemoryEditor::new();
        editor.add_pane("text");

        let command = Command::JumpWord(Scope::AllPanes);
        let prompt = dispatch(&mut engine, &mut editor, command).unwrap();
        assert_eq!(prompt.map(|prompt| prompt.title), Some("Head char"));
        assert!(!command.is_enabled(&engine));
        assert!(Command::ToggleSelect.is_enabled(&engine));
        assert_eq!(
            dispatch(&mut engine, &mut editor, command),
            Err(Error::SessionActive)
        );
    }
}
