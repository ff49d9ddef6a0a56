// crates/domain/src/tokenizer.rs
use wordtally_shared_kernel::{DomainError, DomainResult};

use crate::classify::is_alpha;

/// Longest token the tokenizer emits, in bytes. Longer runs are cut here.
pub const MAX_WORD_LEN: usize = 63;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerConfig {
    max_len: usize,
}

impl TokenizerConfig {
    /// # Errors
    ///
    /// A zero bound would make every word vanish, so it is rejected.
    pub fn new(max_len: usize) -> DomainResult<Self> {
        if max_len == 0 {
            return Err(DomainError::InvalidConfiguration {
                reason: "maximum word length must be at least 1".to_string(),
            });
        }
        Ok(Self { max_len })
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Buffer size to preallocate; large bounds grow on demand instead.
    fn initial_capacity(&self) -> usize {
        self.max_len.min(MAX_WORD_LEN)
    }
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self { max_len: MAX_WORD_LEN }
    }
}

/// Incremental tokenizer.
///
/// A word is a maximal run of ASCII letters, lowercased. Once a run reaches
/// `max_len` bytes the remaining letters of that run are consumed but not
/// stored, so a 100-letter run yields one 63-byte token, never two.
#[derive(Debug, Clone, Default)]
pub struct WordScanner {
    config: TokenizerConfig,
    buf: String,
}

impl WordScanner {
    pub fn new(config: TokenizerConfig) -> Self {
        Self {
            config,
            buf: String::with_capacity(config.initial_capacity()),
        }
    }

    /// Feeds one byte. Returns the finished word when `byte` ends one.
    #[inline]
    pub fn push(&mut self, byte: u8) -> Option<String> {
        if is_alpha(byte) {
            if self.buf.len() < self.config.max_len() {
                self.buf.push(char::from(byte.to_ascii_lowercase()));
            }
            None
        } else {
            self.take_word()
        }
    }

    /// Flushes the word in progress at end of input.
    pub fn finish(&mut self) -> Option<String> {
        self.take_word()
    }

    fn take_word(&mut self) -> Option<String> {
        if self.buf.is_empty() {
            None
        } else {
            Some(std::mem::replace(
                &mut self.buf,
                String::with_capacity(self.config.initial_capacity()),
            ))
        }
    }

    /// Tokenizes a complete buffer in one go.
    pub fn tokenize(config: TokenizerConfig, bytes: &[u8]) -> Vec<String> {
        let mut scanner = Self::new(config);
        let mut words: Vec<String> = bytes.iter().filter_map(|&b| scanner.push(b)).collect();
        words.extend(scanner.finish());
        words
    }
}
