// crates/domain/src/analytics/sort.rs
use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::model::WordFrequency;

/// How a frequency table is ordered before printing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Most frequent first; equal counts fall back to alphabetical order.
    #[default]
    Count,
    /// Alphabetical by word.
    Word,
    /// Keep insertion order (most recently inserted word first).
    Insertion,
}

impl SortKey {
    #[inline]
    pub fn compare(self, a: &WordFrequency, b: &WordFrequency) -> Ordering {
        match self {
            Self::Count => by_frequency(a, b),
            Self::Word => a.word().cmp(b.word()),
            Self::Insertion => Ordering::Equal,
        }
    }
}

/// Count descending, then word ascending. Total on distinct words.
pub fn by_frequency(a: &WordFrequency, b: &WordFrequency) -> Ordering {
    b.count()
        .cmp(&a.count())
        .then_with(|| a.word().cmp(b.word()))
}
