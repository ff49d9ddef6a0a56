// src/config.rs
use std::path::PathBuf;

use wordtally_domain::{SortKey, TokenizerConfig};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// What `words` prints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// `The total number of words is: <n>`
    #[default]
    Count,
    /// Header line plus one `<count>\t<word>` row per distinct word.
    Frequency,
}

impl Mode {
    /// Resolves the two override flags. Neither set means count mode.
    pub fn from_flags(count: bool, frequency: bool) -> Self {
        if frequency && !count { Self::Frequency } else { Self::Count }
    }
}

#[derive(Debug, Clone, Default)]
pub struct WcConfig {
    pub input: Option<PathBuf>,
    pub format: OutputFormat,
    pub verbose: bool,
}

#[derive(Debug, Clone, Default)]
pub struct WordsConfig {
    pub input: Option<PathBuf>,
    pub mode: Mode,
    pub sort: SortKey,
    pub tokenizer: TokenizerConfig,
    pub limits: bool,
    pub format: OutputFormat,
    pub verbose: bool,
}
