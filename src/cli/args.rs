// src/cli/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};
use wordtally_domain::MAX_WORD_LEN;

use super::value_enum::{CliOutputFormat, CliSortKey};

/// Arguments of the `wc` binary.
#[derive(Parser, Debug)]
#[command(
    name = "wc",
    version = crate::VERSION,
    about = "Print newline, word and byte counts of FILE (or standard input)"
)]
pub struct WcArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: CliOutputFormat,

    /// Log debug events to stderr (overrides RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,

    /// File to read; standard input when omitted
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,
}

/// Arguments of the `words` binary.
///
/// `--count` and `--frequency` override each other and themselves, so they
/// may repeat and the last one given wins. With neither, count mode runs.
#[derive(Parser, Debug)]
#[command(
    name = "words",
    version = crate::VERSION,
    about = "Count the words of FILE (or standard input), in total or per word",
    args_override_self = true
)]
pub struct WordsArgs {
    /// Count the total amount of words in the file, or STDIN if a file is not
    /// specified. This is default behavior if no flag is specified.
    #[arg(short = 'c', long, overrides_with = "frequency")]
    pub count: bool,

    /// Count the frequency of each word in the file, or STDIN if a file is not
    /// specified.
    #[arg(short = 'f', long, overrides_with = "count")]
    pub frequency: bool,

    /// Ordering of the frequency table
    #[arg(long, value_enum, default_value = "count")]
    pub sort: CliSortKey,

    /// Longest word kept, in bytes; longer words are truncated
    #[arg(long, default_value_t = MAX_WORD_LEN)]
    pub max_word_len: usize,

    /// Print stack, process and open-file limits before the result
    #[arg(long)]
    pub limits: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: CliOutputFormat,

    /// Log debug events to stderr (overrides RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,

    /// File to read; standard input when omitted
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,
}
