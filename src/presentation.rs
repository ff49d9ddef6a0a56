// src/presentation.rs
use std::io::Write;

use serde::Serialize;
use wordtally_domain::{FrequencyTable, TextCounts, WordCount, WordFrequency};
use wordtally_infra::platform::ResourceLimit;
use wordtally_shared_kernel::{InfraResult, Result};

use crate::config::OutputFormat;

pub const TOTAL_PREFIX: &str = "The total number of words is: ";
pub const FREQUENCY_HEADER: &str = "The frequencies of each word are: ";

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// `<lines> <words> <chars>`
pub fn write_counts<W: Write>(out: &mut W, counts: &TextCounts, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{counts}")?,
        OutputFormat::Json => write_json(out, counts)?,
    }
    Ok(())
}

pub fn write_total<W: Write>(out: &mut W, total: WordCount, format: OutputFormat) -> Result<()> {
    #[derive(Serialize)]
    struct Total {
        total_words: WordCount,
    }

    match format {
        OutputFormat::Text => writeln!(out, "{TOTAL_PREFIX}{total}")?,
        OutputFormat::Json => write_json(out, &Total { total_words: total })?,
    }
    Ok(())
}

pub fn write_table<W: Write>(out: &mut W, table: &FrequencyTable, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "{FREQUENCY_HEADER}")?;
            table.write_to(out)?;
        }
        OutputFormat::Json => {
            let entries: Vec<&WordFrequency> = table.iter().collect();
            write_json(out, &entries)?;
        }
    }
    Ok(())
}

/// One line per limit on `out`; failed queries go to `diag` like `perror`.
pub fn write_limits<W: Write, E: Write>(
    out: &mut W,
    diag: &mut E,
    limits: &[InfraResult<ResourceLimit>],
) -> Result<()> {
    for limit in limits {
        match limit {
            Ok(limit) => writeln!(out, "{limit}")?,
            Err(e) => writeln!(diag, "{e}")?,
        }
    }
    Ok(())
}
