//! Term statistics: per-chunk TF and corpus-wide DF.
//!
//! Raw counts only. Any weighting (IDF, BM25) is left to the
//! retrieval step that consumes the index.

use std::collections::BTreeSet;

use crate::core::types::{Chunk, TermCounts};

/// Count occurrences of each token within one chunk.
pub fn term_frequencies(tokens: &[String]) -> TermCounts {
    let mut tf = TermCounts::new();
    for token in tokens {
        *tf.entry(token.clone()).or_insert(0) += 1;
    }
    tf
}

/// Count, for each token, the number of chunks containing it.
///
/// A chunk contributes at most 1 per token regardless of how
/// often the token repeats inside it.
pub fn document_frequencies(chunks: &[Chunk]) -> TermCounts {
    let mut df = TermCounts::new();
    for chunk in chunks {
        let distinct: BTreeSet<&String> = chunk.tokens.iter().collect();
        for token in distinct {
            *df.entry(token.clone()).or_insert(0) += 1;
        }
    }
    df
}
