//! Label-based cursor jumps across every visible pane of an editor.
//!
//! A jump command opens a prompt. The first keystroke picks the head char; every
//! matching position in every visible pane is then overwritten in place by a one-glyph
//! label. Typing a label moves the cursor there, Enter pages to the next batch when the
//! alphabet runs out, and closing the prompt by any route puts every pane back the way
//! it was.
//!
//! The engine talks to the editor only through [`Editor`] and [`Pane`];
//! [`memory::MemoryEditor`] hosts it in memory.

pub mod char_classifier;
pub mod commands;
pub mod coordinator;
pub mod engine;
pub mod error;
pub mod host;
pub mod keys;
pub mod kind;
pub mod labels;
pub mod memory;
pub mod mode;
pub mod overlay;
pub mod placement;
pub mod scanner;
pub mod selection;
pub mod session;
pub mod snapshot;

pub use commands::{dispatch, Command};
pub use engine::{Jump, JumpEngine, Prompt, PromptAction, Scope};
pub use error::{Error, Result};
pub use host::{BufferId, Editor, Pane, PaneId, SettingValue};
pub use keys::{parse_keys, Key};
pub use kind::JumpKind;
pub use labels::Alphabet;
pub use mode::Mode;
pub use scanner::Candidate;
pub use selection::Selection;

#[cfg(test)]
mod test_jump;
