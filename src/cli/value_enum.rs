// src/cli/value_enum.rs
use clap::ValueEnum;
use wordtally_domain::SortKey;

use crate::config::OutputFormat;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    Text,
    Json,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Text => OutputFormat::Text,
            CliOutputFormat::Json => OutputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliSortKey {
    /// Most frequent first, ties alphabetical
    Count,
    /// Alphabetical
    Word,
    /// Most recently first-seen word first
    Insertion,
}

impl From<CliSortKey> for SortKey {
    fn from(value: CliSortKey) -> Self {
        match value {
            CliSortKey::Count => SortKey::Count,
            CliSortKey::Word => SortKey::Word,
            CliSortKey::Insertion => SortKey::Insertion,
        }
    }
}
