//! Splits document text into bounded, word-aligned chunks.
//!
//! Chunks never split a word: tokens are taken whole from whitespace
//! boundaries and accumulated greedily up to the word limit. Rejoining
//! all chunk texts with single spaces reproduces the document's word
//! sequence exactly.

use crate::error::{LectorError, Result};

/// A bounded-size, word-aligned slice of the input document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Position in the chunk sequence, starting at 0.
    pub index: usize,
    /// The chunk text, words joined by single spaces.
    pub text: String,
    /// Number of words in `text`, at most the configured maximum.
    pub word_count: usize,
}

impl Chunk {
    fn from_words(index: usize, words: &[&str]) -> Self {
        Self {
            index,
            text: words.join(" "),
            word_count: words.len(),
        }
    }
}

/// Splits `text` into ordered chunks of at most `max_words` words each.
///
/// Empty (or whitespace-only) input yields zero chunks. `max_words` must
/// be at least 1.
pub fn segment(text: &str, max_words: usize) -> Result<Vec<Chunk>> {
    if max_words == 0 {
        return Err(LectorError::ConfigInvalidValue {
            key: "max_words_per_chunk".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    let mut chunks = Vec::with_capacity(words.len().div_ceil(max_words));

    for (index, window) in words.chunks(max_words).enumerate() {
        chunks.push(Chunk::from_words(index, window));
    }

    Ok(chunks)
}
