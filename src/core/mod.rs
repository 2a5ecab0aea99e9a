//! Core domain logic (interface-agnostic)
//!
//! This module contains the whole index build, independent of
//! how it is invoked.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Index records (documents, chunks, payload)
//! - **indexer**: Locate, normalize, chunk, tokenize, count
//! - **storage**: Payload validation and atomic file output

pub mod config;
pub mod error;
pub mod indexer;
pub mod storage;
pub mod types;

// Re-export key types for convenience
pub use config::Config;
pub use error::{IndexerError, Result};
