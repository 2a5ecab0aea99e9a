//! Indexing pipeline orchestration.
//!
//! Runs the build stages for each source file in order:
//! 1. Read file contents
//! 2. Normalize and chunk text
//! 3. Tokenize chunks and count terms
//! 4. Fold into the index builder
//!
//! Files are processed one at a time. Any unreadable source is
//! fatal: a partial index is never produced.

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{SecondsFormat, Utc};

use crate::core::config::IndexingConfig;
use crate::core::error::{IndexerError, Result};
use crate::core::indexer::{Chunker, IndexBuilder, Tokenizer};
use crate::core::types::{ChunkingParams, IndexPayload};

/// Orchestrates the indexing pipeline
pub struct IndexingPipeline {
    chunker: Chunker,
    tokenizer: Tokenizer,
    source_root: PathBuf,
}

impl IndexingPipeline {
    /// Create a new indexing pipeline from indexing settings
    ///
    /// Fails if the chunking parameters are invalid.
    pub fn new(config: &IndexingConfig) -> Result<Self> {
        let chunker = Chunker::new(config.chunk_size, config.overlap)?;
        let tokenizer = Tokenizer::with_extra_stop_words(&config.extra_stop_words);

        Ok(Self {
            chunker,
            tokenizer,
            source_root: PathBuf::new(),
        })
    }

    /// Resolve relative source paths against `root` when reading.
    ///
    /// `sourcePath` in the index keeps the path as located.
    pub fn with_source_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.source_root = root.into();
        self
    }

    /// Chunking parameters recorded in the index
    pub fn chunking_params(&self) -> ChunkingParams {
        ChunkingParams {
            max_len: self.chunker.max_len(),
            overlap: self.chunker.overlap(),
        }
    }

    /// Build an index from the given files, stamped with the
    /// current time.
    pub async fn build(&self, files: &[PathBuf]) -> Result<IndexPayload> {
        let generated_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        self.build_at(files, generated_at).await
    }

    /// Build an index with an explicit `generatedAt` value.
    ///
    /// Two calls with the same files and timestamp produce
    /// identical payloads.
    pub async fn build_at(
        &self,
        files: &[PathBuf],
        generated_at: impl Into<String>,
    ) -> Result<IndexPayload> {
        let start = Instant::now();
        let mut builder = IndexBuilder::new(self.chunking_params());

        tracing::info!("Indexing {} document(s)", files.len());

        for path in files {
            let contents = read_source(&self.source_root.join(path)).await?;
            let chunk_texts = self.chunker.chunk_text(&contents);

            tracing::debug!("Chunked {:?} ({} chunks)", path, chunk_texts.len());

            builder = builder.with_document(
                document_name(path),
                path.to_string_lossy(),
                chunk_texts,
                &self.tokenizer,
            );
        }

        let payload = builder.build(generated_at);

        tracing::info!(
            "Indexing complete: {} docs, {} chunks, {} distinct tokens in {}ms",
            payload.stats.total_docs,
            payload.stats.total_chunks,
            payload.df.len(),
            start.elapsed().as_millis()
        );

        Ok(payload)
    }
}

/// Base name of a source path, falling back to the full path
fn document_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

async fn read_source(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| IndexerError::ReadFailed {
            path: path.display().to_string(),
            message: if e.kind() == std::io::ErrorKind::InvalidData {
                "not valid UTF-8".to_string()
            } else {
                e.to_string()
            },
        })
}
