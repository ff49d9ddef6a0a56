// src/cli/mod.rs
mod args;
mod value_enum;

pub use args::{WcArgs, WordsArgs};
pub use value_enum::{CliOutputFormat, CliSortKey};
use wordtally_domain::TokenizerConfig;
use wordtally_shared_kernel::{PresentationError, Result};

use crate::config::{Mode, WcConfig, WordsConfig};

impl From<WcArgs> for WcConfig {
    fn from(args: WcArgs) -> Self {
        Self {
            input: args.file,
            format: args.format.into(),
            verbose: args.verbose,
        }
    }
}

fn tokenizer_config(flag: &str, max_len: usize) -> Result<TokenizerConfig> {
    TokenizerConfig::new(max_len).map_err(|e| {
        PresentationError::InvalidValue {
            flag: flag.to_string(),
            value: max_len.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

/// Convert parsed `words` arguments into a [`WordsConfig`].
///
/// # Errors
///
/// Returns `Err` when `--max-word-len` is zero.
pub fn build_words_config(args: WordsArgs) -> Result<WordsConfig> {
    let tokenizer = tokenizer_config("--max-word-len", args.max_word_len)?;
    Ok(WordsConfig {
        input: args.file,
        mode: Mode::from_flags(args.count, args.frequency),
        sort: args.sort.into(),
        tokenizer,
        limits: args.limits,
        format: args.format.into(),
        verbose: args.verbose,
    })
}
