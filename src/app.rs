// src/app.rs
use std::io::Write;

use anyhow::Result;
use wordtally_domain::FrequencyTable;
use wordtally_infra::{InputSource, TracingObserver, count_words, measure, num_words, platform};
use wordtally_shared_kernel::ErrorContext;

use crate::{
    config::{Mode, OutputFormat, WcConfig, WordsConfig},
    presentation,
};

/// Counts the configured input and prints `<lines> <words> <chars>`.
///
/// # Errors
///
/// Fails when the input cannot be opened or read, or `out` cannot be written.
pub fn run_wc<W: Write>(config: &WcConfig, out: &mut W) -> Result<()> {
    let mut input = InputSource::open(config.input.as_deref())?;
    let counts = measure(&mut input).with_context(|| input.label())?;
    tracing::debug!(input = %input.label(), %counts, "measured");
    presentation::write_counts(out, &counts, config.format)?;
    Ok(())
}

/// Runs `words` in the configured mode.
///
/// Limits, when requested, go to `out` in text mode and to `diag` in JSON
/// mode so that `out` stays a single JSON document.
///
/// # Errors
///
/// Fails when the input cannot be opened or read, the table cannot grow,
/// or output cannot be written.
pub fn run_words<W: Write, E: Write>(config: &WordsConfig, out: &mut W, diag: &mut E) -> Result<()> {
    let mut input = InputSource::open(config.input.as_deref())?;

    if config.limits {
        let limits = platform::query_all();
        match config.format {
            OutputFormat::Text => presentation::write_limits(out, diag, &limits)?,
            OutputFormat::Json => {
                let mut failures = Vec::new();
                presentation::write_limits(diag, &mut failures, &limits)?;
                diag.write_all(&failures)?;
            }
        }
    }

    match config.mode {
        Mode::Count => {
            let total = num_words(&mut input).with_context(|| input.label())?;
            presentation::write_total(out, total, config.format)?;
        }
        Mode::Frequency => {
            let mut table = FrequencyTable::with_observer(TracingObserver);
            count_words(&mut table, &mut input, config.tokenizer)
                .with_context(|| input.label())?;
            table.sort(config.sort);
            presentation::write_table(out, &table, config.format)?;
        }
    }
    Ok(())
}
