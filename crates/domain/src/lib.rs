// crates/domain/src/lib.rs
//! Pure, I/O-free building blocks for wordtally.
//!
//! - [`classify`]: byte classes and the two word-boundary rules
//! - [`counter`]: the `wc` counters and the alphabetic run counter
//! - [`tokenizer`]: turns bytes into lowercase, length-bounded words
//! - [`frequency`]: the insert-or-increment word table
//! - [`analytics`]: ordering policies for the table
#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod classify;
pub mod counter;
pub mod frequency;
pub mod model;
pub mod tokenizer;

pub use analytics::sort::SortKey;
pub use classify::WordBoundary;
pub use counter::{RunCounter, TextCounter};
pub use frequency::{FrequencyTable, TableObserver};
pub use model::{TextCounts, WordFrequency};
pub use tokenizer::{MAX_WORD_LEN, TokenizerConfig, WordScanner};

pub use wordtally_shared_kernel::{CharCount, DomainError, DomainResult, LineCount, WordCount};
