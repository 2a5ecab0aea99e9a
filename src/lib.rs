//! Chatbot Indexer - offline lexical index builder
//!
//! Turns a set of Markdown knowledge-base documents into one
//! compact JSON index (documents, chunks, per-chunk term
//! frequency and corpus document frequency) consumed by a
//! retrieval step. Ranking is left to that consumer.
//!
//! # Architecture
//!
//! The codebase is organized into two modules:
//!
//! - **core**: Domain logic
//!   - config, error, types
//!   - indexer (locator, normalizer, chunker, tokenizer, stats,
//!     builder, pipeline)
//!   - storage (validation, atomic write)
//!
//! - **cli**: clap adapter (depends on core)
//!
//! # Key Features
//!
//! - Paragraph-aware chunking with overlapping hard splits
//! - UTF-8 safe (character-based lengths, never panics)
//! - French + English stop words, accented Latin letters kept
//! - Deterministic output (sorted term maps)
//! - All-or-nothing writes (temp file + rename)

// Core domain logic
pub mod core;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::error::{IndexerError, Result};
pub use core::types::*;
