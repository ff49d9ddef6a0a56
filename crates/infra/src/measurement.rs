// crates/infra/src/measurement.rs
pub mod scan;

pub use scan::{count_words, measure, num_words, tokenize};
