// crates/infra/src/measurement/scan.rs
//! Drive the domain scanners over a byte stream.
//!
//! Everything except [`measure`] rewinds the stream when done, so the same
//! input can be scanned again (e.g. `num_words` followed by `count_words`).

use std::io::{BufRead, ErrorKind, Seek};

use wordtally_domain::{
    FrequencyTable, RunCounter, TextCounter, TextCounts, TokenizerConfig, WordBoundary, WordCount,
    WordScanner,
};
use wordtally_shared_kernel::{InfrastructureError, Result};

/// Hands each buffered chunk of `reader` to `f` until end of stream.
fn for_each_chunk<R, F>(reader: &mut R, mut f: F) -> Result<()>
where
    R: BufRead + ?Sized,
    F: FnMut(&[u8]) -> Result<()>,
{
    loop {
        let chunk = match reader.fill_buf() {
            Ok(chunk) => chunk,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(source) => return Err(InfrastructureError::Read { source }.into()),
        };
        if chunk.is_empty() {
            return Ok(());
        }
        let len = chunk.len();
        f(chunk)?;
        reader.consume(len);
    }
}

fn rewind<R: Seek + ?Sized>(reader: &mut R) -> Result<()> {
    reader
        .rewind()
        .map_err(|source| InfrastructureError::Seek { source })?;
    tracing::debug!("rewound input");
    Ok(())
}

/// Lines, whitespace-delimited words and bytes of the whole stream.
pub fn measure<R: BufRead + ?Sized>(reader: &mut R) -> Result<TextCounts> {
    let mut counter = TextCounter::new();
    for_each_chunk(reader, |chunk| {
        counter.feed(chunk);
        Ok(())
    })?;
    Ok(counter.counts())
}

/// Number of maximal alphabetic runs. No lowercasing or truncation.
pub fn num_words<R: BufRead + Seek + ?Sized>(reader: &mut R) -> Result<WordCount> {
    let mut runs = RunCounter::new(WordBoundary::Alphabetic);
    for_each_chunk(reader, |chunk| {
        runs.feed(chunk);
        Ok(())
    })?;
    rewind(reader)?;
    Ok(runs.words())
}

/// Tokenizes the stream into `table`. Returns how many tokens were inserted.
///
/// # Errors
///
/// Read/seek failures, or `OutOfMemory` from the table. Tokens inserted
/// before the failure stay in the table.
pub fn count_words<R: BufRead + Seek + ?Sized>(
    table: &mut FrequencyTable,
    reader: &mut R,
    config: TokenizerConfig,
) -> Result<WordCount> {
    let mut scanner = WordScanner::new(config);
    let mut inserted = WordCount::ZERO;
    let mut insert = |word: String| -> Result<()> {
        tracing::trace!(%word, "token");
        table.insert(&word)?;
        inserted.increment();
        Ok(())
    };

    for_each_chunk(reader, |chunk| {
        chunk
            .iter()
            .filter_map(|&b| scanner.push(b))
            .try_for_each(&mut insert)
    })?;
    if let Some(word) = scanner.finish() {
        insert(word)?;
    }
    rewind(reader)?;

    tracing::debug!(tokens = %inserted, distinct = table.len(), "tokenized input");
    Ok(inserted)
}

/// The token sequence of the stream.
pub fn tokenize<R: BufRead + Seek + ?Sized>(
    reader: &mut R,
    config: TokenizerConfig,
) -> Result<Vec<String>> {
    let mut scanner = WordScanner::new(config);
    let mut words = Vec::new();
    for_each_chunk(reader, |chunk| {
        words.extend(chunk.iter().filter_map(|&b| scanner.push(b)));
        Ok(())
    })?;
    words.extend(scanner.finish());
    rewind(reader)?;
    Ok(words)
}
