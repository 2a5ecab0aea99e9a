//! Document indexing module.
//!
//! Turns Markdown knowledge-base documents into index records.
//! Stages run strictly left to right:
//!
//! - **locator**: resolve the source files
//! - **normalizer**: canonicalize whitespace and line endings
//! - **chunker**: paragraph-packing, overlap-aware chunking
//! - **tokenizer**: French/English lexical tokens
//! - **stats**: term and document frequency
//! - **builder**: thread documents into an [`IndexPayload`](crate::core::types::IndexPayload)
//! - **pipeline**: read files and drive the stages
//!
//! # Safety
//!
//! The chunker measures and slices text by characters via
//! `char_indices()`, so multi-byte input never panics.

pub mod builder;
pub mod chunker;
pub mod locator;
pub mod normalizer;
pub mod pipeline;
pub mod stats;
pub mod tokenizer;

pub use builder::IndexBuilder;
pub use chunker::Chunker;
pub use locator::DocumentLocator;
pub use normalizer::normalize;
pub use pipeline::IndexingPipeline;
pub use tokenizer::Tokenizer;
