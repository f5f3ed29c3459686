use crate::host::Pane;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharKind {
    Word,
    Punctuation,
    Whitespace,
}

/// Classifies characters for word-end motion after a jump.
pub struct CharClassifier;

impl CharClassifier {
    pub fn kind(ch: char) -> CharKind {
        if ch.is_alphanumeric() || ch == '_' {
            CharKind::Word
        } else if ch.is_whitespace() {
            CharKind::Whitespace
        } else {
            CharKind::Punctuation
        }
    }

    /// Move forward to end of current/next word group.
    ///
    /// If on a Word or Punctuation char, skips to end of that group.
    /// If on Whitespace, skips whitespace then skips the next non-whitespace group.
    pub fn next_word_end<P: Pane + ?Sized>(pane: &P, offset: usize) -> usize {
        let Some(first) = pane.char_at(offset) else {
            return offset;
        };

        let mut pos = offset + 1;
        let mut kind = Self::kind(first);

        if kind == CharKind::Whitespace {
            loop {
                let Some(ch) = pane.char_at(pos) else {
                    return pos;
                };
                pos += 1;
                if Self::kind(ch) != CharKind::Whitespace {
                    kind = Self::kind(ch);
                    break;
                }
            }
        }

        while let Some(ch) = pane.char_at(pos) {
            if Self::kind(ch) != kind {
                break;
            }
            pos += 1;
        }
        pos
    }
}
