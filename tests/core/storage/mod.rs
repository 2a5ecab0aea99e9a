//! Storage layer tests
//!
//! Payload validation and index file output.
