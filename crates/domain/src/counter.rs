// crates/domain/src/counter.rs
use wordtally_shared_kernel::{CharCount, LineCount, WordCount};

use crate::{
    classify::{WordBoundary, is_newline},
    model::TextCounts,
};

/// Counts maximal runs of word bytes under a [`WordBoundary`] rule.
///
/// Feed it bytes in order; chunk boundaries do not matter because the
/// "inside a word" flag is carried between calls.
#[derive(Debug, Clone, Default)]
pub struct RunCounter {
    boundary: WordBoundary,
    in_word: bool,
    words: WordCount,
}

impl RunCounter {
    pub fn new(boundary: WordBoundary) -> Self {
        Self {
            boundary,
            in_word: false,
            words: WordCount::ZERO,
        }
    }

    #[inline]
    pub fn push(&mut self, byte: u8) {
        if self.boundary.is_word_byte(byte) {
            if !self.in_word {
                self.in_word = true;
                self.words.increment();
            }
        } else {
            self.in_word = false;
        }
    }

    pub fn feed(&mut self, bytes: &[u8]) {
        bytes.iter().for_each(|&b| self.push(b));
    }

    pub fn words(&self) -> WordCount {
        self.words
    }
}

/// The three `wc` counters: newline bytes, whitespace-delimited words, bytes.
#[derive(Debug, Clone, Default)]
pub struct TextCounter {
    lines: LineCount,
    chars: CharCount,
    runs: RunCounter,
}

impl TextCounter {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, byte: u8) {
        self.chars.increment();
        if is_newline(byte) {
            self.lines.increment();
        }
        self.runs.push(byte);
    }

    pub fn feed(&mut self, bytes: &[u8]) {
        // Lines and chars don't depend on neighbours; only words need the byte loop.
        self.chars += bytes.len();
        self.lines += bytecount::count(bytes, b'\n');
        self.runs.feed(bytes);
    }

    pub fn counts(&self) -> TextCounts {
        TextCounts::new(self.lines, self.runs.words(), self.chars)
    }
}
