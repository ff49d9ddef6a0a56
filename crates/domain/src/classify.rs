// crates/domain/src/classify.rs
//! Byte classes used by the counters and the tokenizer.
//!
//! Classification is byte-wise and locale-free: it matches the C library's
//! `isspace`/`isalpha` in the default "C" locale. Bytes >= 0x80 are neither
//! space nor alphabetic.

/// `isspace` in the "C" locale: space, `\t`, `\n`, `\v`, `\f`, `\r`.
#[inline]
pub const fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// `isalpha` in the "C" locale.
#[inline]
pub const fn is_alpha(byte: u8) -> bool {
    byte.is_ascii_alphabetic()
}

#[inline]
pub const fn is_newline(byte: u8) -> bool {
    byte == b'\n'
}

/// Which bytes make up a word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WordBoundary {
    /// Any run of non-space bytes is a word (the `wc` rule).
    #[default]
    Whitespace,
    /// Only runs of alphabetic bytes are words; everything else delimits.
    Alphabetic,
}

impl WordBoundary {
    #[inline]
    pub const fn is_word_byte(self, byte: u8) -> bool {
        match self {
            Self::Whitespace => !is_space(byte),
            Self::Alphabetic => is_alpha(byte),
        }
    }
}
