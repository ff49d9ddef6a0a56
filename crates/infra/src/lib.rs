// crates/infra/src/lib.rs
//! Adapters between the pure domain scanners and the outside world:
//! seekable input sources, stream drivers, logging hooks and OS limits.
#![allow(clippy::multiple_crate_versions)]

pub mod measurement;
pub mod observer;
pub mod persistence;
pub mod platform;

pub use measurement::{count_words, measure, num_words, tokenize};
pub use observer::TracingObserver;
pub use persistence::InputSource;
