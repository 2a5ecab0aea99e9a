//! Core data types for the chatbot index.
//!
//! These records are the on-disk contract consumed by the
//! retrieval step. Field names are serialized in camelCase and
//! must not change without bumping [`INDEX_VERSION`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Schema version written to every index
pub const INDEX_VERSION: u32 = 1;

/// Token -> count mapping (term or document frequency)
///
/// Ordered so serialization is deterministic across runs.
pub type TermCounts = BTreeMap<String, usize>;

/// One source document that contributed chunks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Base name of the source file
    pub name: String,

    /// Path as given on the command line or found by discovery
    pub source_path: String,

    /// Number of chunks produced from this document
    pub chunk_count: usize,
}

/// A bounded slice of a document's normalized text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chunk {
    /// Name of the owning document
    pub doc_name: String,

    /// Zero-based position within the document
    pub chunk_index: usize,

    /// The chunk text
    pub text: String,

    /// Tokens in original order, duplicates kept
    pub tokens: Vec<String>,

    /// Term frequency within this chunk
    pub tf: TermCounts,
}

/// Chunking parameters recorded in the index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkingParams {
    /// Maximum chunk length in characters
    pub max_len: usize,

    /// Characters repeated between hard-split windows
    pub overlap: usize,
}

/// Corpus-level counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpusStats {
    pub total_docs: usize,
    pub total_chunks: usize,
}

/// Root artifact written to the output file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexPayload {
    /// Schema version (always [`INDEX_VERSION`])
    pub version: u32,

    /// Build timestamp (RFC 3339, UTC)
    pub generated_at: String,

    pub chunking: ChunkingParams,

    pub docs: Vec<Document>,

    pub stats: CorpusStats,

    /// Number of chunks containing each token at least once
    pub df: TermCounts,

    pub chunks: Vec<Chunk>,
}

/// Summary of a completed build, reported by the CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildSummary {
    /// Output file path
    pub output: String,

    /// Number of documents indexed
    pub docs: usize,

    /// Total chunks created
    pub chunks: usize,

    /// Distinct tokens in the document-frequency table
    pub vocabulary: usize,

    /// Bytes written to the output file
    pub bytes_written: u64,

    /// Build duration in milliseconds
    pub duration_ms: u64,
}
