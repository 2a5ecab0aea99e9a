//! Consuming builder that threads index state through the stages.
//!
//! Each call takes the builder by value and returns the next
//! state, so no stage mutates shared data behind the caller's
//! back. Document frequency is computed once, in [`IndexBuilder::build`].

use crate::core::indexer::stats::{document_frequencies, term_frequencies};
use crate::core::indexer::Tokenizer;
use crate::core::types::{
    Chunk, ChunkingParams, CorpusStats, Document, IndexPayload, INDEX_VERSION,
};

/// Accumulates documents and chunks for one index build
#[derive(Debug, Clone)]
pub struct IndexBuilder {
    chunking: ChunkingParams,
    docs: Vec<Document>,
    chunks: Vec<Chunk>,
}

impl IndexBuilder {
    /// Start an empty index with the given chunking parameters
    pub fn new(chunking: ChunkingParams) -> Self {
        Self {
            chunking,
            docs: Vec::new(),
            chunks: Vec::new(),
        }
    }

    /// Add one document's chunk texts, tokenizing each chunk.
    ///
    /// Chunk indexes start at 0 for every document.
    pub fn with_document(
        mut self,
        name: impl Into<String>,
        source_path: impl Into<String>,
        chunk_texts: Vec<String>,
        tokenizer: &Tokenizer,
    ) -> Self {
        let name = name.into();
        let chunk_count = chunk_texts.len();

        self.chunks
            .extend(chunk_texts.into_iter().enumerate().map(|(chunk_index, text)| {
                let tokens = tokenizer.tokenize(&text);
                Chunk {
                    doc_name: name.clone(),
                    chunk_index,
                    tf: term_frequencies(&tokens),
                    text,
                    tokens,
                }
            }));

        self.docs.push(Document {
            name,
            source_path: source_path.into(),
            chunk_count,
        });

        self
    }

    /// Number of documents added so far
    pub fn doc_count(&self) -> usize {
        self.docs.len()
    }

    /// Number of chunks added so far
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Finish the index, computing corpus statistics
    pub fn build(self, generated_at: impl Into<String>) -> IndexPayload {
        let df = document_frequencies(&self.chunks);

        IndexPayload {
            version: INDEX_VERSION,
            generated_at: generated_at.into(),
            chunking: self.chunking,
            stats: CorpusStats {
                total_docs: self.docs.len(),
                total_chunks: self.chunks.len(),
            },
            docs: self.docs,
            df,
            chunks: self.chunks,
        }
    }
}
