//! Jump kinds.
//!
//! Each [`JumpKind`] decides what the user types first, which positions become
//! candidates, and where [`crate::Mode::JumpAfter`] lands relative to the matched unit.
//!
//! | kind          | head char | candidates                                  | jump-after lands |
//! |---------------|-----------|---------------------------------------------|------------------|
//! | `Word`        | yes       | word heads starting with the head char      | end of the word  |
//! | `Char`        | yes       | every occurrence of the head char           | after the char   |
//! | `Line`        | no        | start of every non-blank line               | end of the line  |
//! | `WithinLine`  | no        | every word head on the current line         | end of the word  |

use crate::{char_classifier::CharClassifier, host::Pane};
use std::{fmt, ops::Range};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JumpKind {
    Word,
    Char,
    Line,
    WithinLine,
}

/// Where a kind looks for candidates in each pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchRegion {
    Visible,
    /// The line holding the pane's cursor.
    CurrentLine,
}

impl SearchRegion {
    pub fn resolve<P: Pane + ?Sized>(self, pane: &P, caret: usize) -> Range<usize> {
        match self {
            SearchRegion::Visible => pane.visible_region(),
            SearchRegion::CurrentLine => pane.line(caret),
        }
    }
}

impl JumpKind {
    pub fn prompt(self) -> &'static str {
        match self {
            JumpKind::Word => "Head char",
            JumpKind::Char => "Char",
            JumpKind::Line | JumpKind::WithinLine => "",
        }
    }

    /// Text the prompt opens with. Kinds that need no head char start with a
    /// placeholder so the first keystroke is already a label.
    pub fn initial_text(self) -> &'static str {
        match self {
            JumpKind::Word | JumpKind::Char => "",
            JumpKind::Line | JumpKind::WithinLine => " ",
        }
    }

    pub fn search_region(self) -> SearchRegion {
        match self {
            JumpKind::WithinLine => SearchRegion::CurrentLine,
            _ => SearchRegion::Visible,
        }
    }

    /// Regex locating candidates; each match labels its first character.
    pub fn pattern(self, head: char) -> String {
        let literal = regex::escape(head.encode_utf8(&mut [0; 4]));
        match self {
            JumpKind::Word => format!(r"\b{literal}"),
            JumpKind::Char => literal,
            JumpKind::Line => r"(?m)^.*\S.*$".to_string(),
            JumpKind::WithinLine => r"\b\w".to_string(),
        }
    }

    /// Offset one matched unit past `offset`.
    pub fn advance<P: Pane + ?Sized>(self, pane: &P, offset: usize) -> usize {
        match self {
            JumpKind::Word | JumpKind::WithinLine => CharClassifier::next_word_end(pane, offset),
            JumpKind::Char => (offset + 1).min(pane.len()),
            // Down one line and back one character: the end of the matched line.
            JumpKind::Line => pane.line(offset).end,
        }
    }
}

impl fmt::Display for JumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JumpKind::Word => "word",
            JumpKind::Char => "char",
            JumpKind::Line => "line",
            JumpKind::WithinLine => "within-line",
        };
        f.write_str(name)
    }
}
