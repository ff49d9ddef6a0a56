// src/lib.rs
//! `wc` and `words`: a byte-level line/word/character counter and a
//! word-frequency counter built on the `wordtally_*` crates.
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod presentation;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
