// crates/domain/src/model.rs
use std::fmt;

use serde::{Deserialize, Serialize};
use wordtally_shared_kernel::{CharCount, LineCount, WordCount};

/// Final tallies of a `wc` pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextCounts {
    pub lines: LineCount,
    pub words: WordCount,
    pub chars: CharCount,
}

impl TextCounts {
    pub const fn new(lines: LineCount, words: WordCount, chars: CharCount) -> Self {
        Self { lines, words, chars }
    }
}

/// `<lines> <words> <chars>`
impl fmt::Display for TextCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.lines, self.words, self.chars)
    }
}

/// One row of the frequency table.
///
/// Only [`crate::FrequencyTable`] creates or bumps entries, so `count` is
/// always at least one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordFrequency {
    word: String,
    count: usize,
}

impl WordFrequency {
    pub(crate) fn first_sighting(word: String) -> Self {
        Self { word, count: 1 }
    }

    pub(crate) fn bump(&mut self) {
        self.count = self.count.saturating_add(1);
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

/// `<count>\t<word>`
impl fmt::Display for WordFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.count, self.word)
    }
}
