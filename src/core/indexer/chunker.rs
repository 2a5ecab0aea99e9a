//! Paragraph-aware, UTF-8 safe text chunking.
//!
//! Text is normalized, split on blank lines into paragraphs and
//! greedily packed into chunks of at most `max_len` characters.
//! A paragraph that cannot fit on its own is hard-split with a
//! sliding window that repeats `overlap` characters between
//! consecutive windows.
//!
//! All lengths are measured in **characters**, not bytes, and
//! every slice is cut on a `char_indices()` boundary, so text
//! with accents, emoji or CJK never panics.
//!
//! # Example
//!
//! ```
//! use chatbot_indexer::core::indexer::Chunker;
//!
//! let chunker = Chunker::new(1200, 120).unwrap();
//! let chunks = chunker.chunk_text("Premier paragraphe.\n\nSecond paragraphe.");
//!
//! assert_eq!(chunks, vec!["Premier paragraphe.\n\nSecond paragraphe."]);
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::error::{IndexerError, Result};
use crate::core::indexer::normalizer::normalize;

/// Separator used when packing paragraphs into one chunk
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Two or more consecutive newlines
static BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());

/// Paragraph-packing text chunker.
#[derive(Debug, Clone)]
pub struct Chunker {
    /// Maximum number of characters per chunk
    max_len: usize,

    /// Characters repeated between consecutive hard-split windows
    overlap: usize,
}

impl Chunker {
    /// Create a new chunker.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `max_len` is 0 or if
    /// `overlap >= max_len` (the hard-split window would never
    /// advance).
    pub fn new(max_len: usize, overlap: usize) -> Result<Self> {
        if max_len == 0 {
            return Err(IndexerError::ConfigError(
                "max_len must be > 0".to_string(),
            ));
        }
        if overlap >= max_len {
            return Err(IndexerError::ConfigError(format!(
                "overlap ({overlap}) must be < max_len ({max_len})"
            )));
        }

        Ok(Self { max_len, overlap })
    }

    /// Get the maximum chunk length in characters.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Get the overlap in characters.
    pub fn overlap(&self) -> usize {
        self.overlap
    }

    /// Split text into ordered chunk texts.
    ///
    /// Consecutive paragraphs are joined with
    /// [`PARAGRAPH_SEPARATOR`] while the running chunk stays
    /// within `max_len`. A paragraph of exactly `max_len`
    /// characters fits without being split.
    pub fn chunk_text(&self, text: &str) -> Vec<String> {
        let normalized = normalize(text);
        if normalized.is_empty() {
            return Vec::new();
        }

        let separator_len = PARAGRAPH_SEPARATOR.chars().count();
        let mut chunks = Vec::new();
        let mut buffer = String::new();
        let mut buffer_len = 0;

        for block in split_paragraphs(&normalized) {
            let block_len = block.chars().count();
            let candidate_len = if buffer.is_empty() {
                block_len
            } else {
                buffer_len + separator_len + block_len
            };

            if candidate_len <= self.max_len {
                if !buffer.is_empty() {
                    buffer.push_str(PARAGRAPH_SEPARATOR);
                }
                buffer.push_str(block);
                buffer_len = candidate_len;
                continue;
            }

            if !buffer.is_empty() {
                chunks.push(std::mem::take(&mut buffer));
                buffer_len = 0;
            }

            if block_len <= self.max_len {
                buffer.push_str(block);
                buffer_len = block_len;
            } else {
                self.hard_split(block, &mut chunks);
            }
        }

        if !buffer.is_empty() {
            chunks.push(buffer);
        }

        chunks
    }

    /// Slide a `max_len` window over an oversized paragraph.
    ///
    /// The window advances by `max_len - overlap` characters and
    /// stops once it reaches the end of the paragraph.
    fn hard_split(&self, block: &str, chunks: &mut Vec<String>) {
        let char_indices: Vec<(usize, char)> = block.char_indices().collect();
        let total = char_indices.len();
        let step = self.max_len - self.overlap;
        let mut start = 0;

        while start < total {
            let end = (start + self.max_len).min(total);

            let byte_start = char_indices[start].0;
            let byte_end = if end < total {
                char_indices[end].0
            } else {
                block.len()
            };

            let window = block[byte_start..byte_end].trim();
            if !window.is_empty() {
                chunks.push(window.to_string());
            }

            if start + self.max_len >= total {
                break;
            }
            start += step;
        }
    }
}

/// Split normalized text into trimmed, non-empty paragraphs.
pub fn split_paragraphs(text: &str) -> impl Iterator<Item = &str> {
    BLANK_LINES
        .split(text)
        .map(str::trim)
        .filter(|block| !block.is_empty())
}
