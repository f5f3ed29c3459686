//! Prompt key notation.
//!
//! Plain characters are typed into the prompt as-is. Named keys go in angle brackets:
//! `<Enter>` pages, `<Esc>` cancels, `<BS>` deletes the last prompt character and
//! `<lt>` types a literal `<`.

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Esc,
    Backspace,
}

/// Parse key notation such as `"x<Enter>a"` into keys.
pub fn parse_keys(notation: &str) -> Result<Vec<Key>> {
    let mut keys = Vec::new();
    let mut chars = notation.chars();

    while let Some(ch) = chars.next() {
        if ch != '<' {
            keys.push(Key::Char(ch));
            continue;
        }

        let mut special = String::new();
        let mut found_closing = false;
        for ch in chars.by_ref() {
            if ch == '>' {
                found_closing = true;
                break;
            }
            special.push(ch);
        }
        if !found_closing {
            return Err(Error::UnclosedKey(special));
        }
        keys.push(parse_special(&special)?);
    }

    Ok(keys)
}

fn parse_special(name: &str) -> Result<Key> {
    match name {
        "Enter" | "Return" | "CR" => Ok(Key::Enter),
        "Esc" | "Escape" => Ok(Key::Esc),
        "BS" | "Backspace" => Ok(Key::Backspace),
        "lt" => Ok(Key::Char('<')),
        _ => Err(Error::UnknownKey(name.to_string())),
    }
}
