// crates/domain/src/analytics.rs
pub mod sort;

pub use sort::{SortKey, by_frequency};
