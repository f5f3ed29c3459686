//! Label alphabet and allocation.
//!
//! Labels are handed out in alphabet order: the i-th candidate of a batch gets the i-th
//! glyph. Running out of glyphs is not an error; the coordinator stops the batch and the
//! user pages to the next one.

use acejump_config::DEFAULT_LABELS;

/// Ordered set of distinct label glyphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    glyphs: Vec<char>,
}

impl Alphabet {
    /// Build an alphabet from configured labels.
    ///
    /// Repeated glyphs are dropped, keeping the first occurrence. An empty label string
    /// falls back to [`DEFAULT_LABELS`].
    pub fn new(labels: &str) -> Self {
        let mut glyphs: Vec<char> = Vec::with_capacity(labels.len());
        for glyph in labels.chars() {
            if glyphs.contains(&glyph) {
                tracing::warn!("Ignoring repeated label glyph {glyph:?}");
                continue;
            }
            glyphs.push(glyph);
        }

        if glyphs.is_empty() {
            tracing::warn!("No label glyphs configured, using defaults");
            glyphs = DEFAULT_LABELS.chars().collect();
        }

        Self { glyphs }
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false: an alphabet has at least one glyph.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// The label for the next candidate, or `None` once `issued` exhausts the alphabet.
    pub fn next(&self, issued: usize) -> Option<char> {
        self.glyphs.get(issued).copied()
    }

    /// Labels for `count` more candidates after `issued`, truncated at exhaustion.
    pub fn allocate(&self, issued: usize, count: usize) -> Vec<char> {
        (issued..issued.saturating_add(count))
            .map_while(|index| self.next(index))
            .collect()
    }

    /// Position of `glyph` in the alphabet, i.e. the batch index it labels.
    pub fn index_of(&self, glyph: char) -> Option<usize> {
        self.glyphs.iter().position(|&g| g == glyph)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new(DEFAULT_LABELS)
    }
}
