//! Schema and consistency checks for index payloads.
//!
//! Run before every write and by the `verify` command on an
//! existing index file. A payload that fails here is never
//! written to disk.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use crate::core::error::{IndexerError, Result};
use crate::core::indexer::stats::term_frequencies;
use crate::core::types::{IndexPayload, INDEX_VERSION};

/// Payload validation report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub total_docs: usize,
    pub total_chunks: usize,
    pub vocabulary: usize,

    /// Human-readable description of each violated invariant
    pub problems: Vec<String>,

    pub is_consistent: bool,
}

/// Check every structural invariant of a payload.
///
/// Collects all problems instead of stopping at the first one.
pub fn check_payload(payload: &IndexPayload) -> ValidationReport {
    let mut problems = Vec::new();

    if payload.version != INDEX_VERSION {
        problems.push(format!(
            "version is {}, expected {INDEX_VERSION}",
            payload.version
        ));
    }

    if payload.chunking.overlap >= payload.chunking.max_len {
        problems.push(format!(
            "chunking.overlap ({}) must be < chunking.maxLen ({})",
            payload.chunking.overlap, payload.chunking.max_len
        ));
    }

    if payload.stats.total_docs != payload.docs.len() {
        problems.push(format!(
            "stats.totalDocs is {} but docs has {} entries",
            payload.stats.total_docs,
            payload.docs.len()
        ));
    }

    if payload.stats.total_chunks != payload.chunks.len() {
        problems.push(format!(
            "stats.totalChunks is {} but chunks has {} entries",
            payload.stats.total_chunks,
            payload.chunks.len()
        ));
    }

    let declared: usize = payload.docs.iter().map(|d| d.chunk_count).sum();
    if declared != payload.chunks.len() {
        problems.push(format!(
            "documents declare {declared} chunks but chunks has {} entries",
            payload.chunks.len()
        ));
    }

    check_chunks(payload, &mut problems);
    check_document_frequencies(payload, &mut problems);

    ValidationReport {
        total_docs: payload.docs.len(),
        total_chunks: payload.chunks.len(),
        vocabulary: payload.df.len(),
        is_consistent: problems.is_empty(),
        problems,
    }
}

/// Validate a payload, failing with `InvalidIndex` that lists
/// every problem found.
pub fn validate_payload(payload: &IndexPayload) -> Result<()> {
    let report = check_payload(payload);
    if report.is_consistent {
        Ok(())
    } else {
        Err(IndexerError::InvalidIndex(report.problems.join("; ")))
    }
}

/// Chunk ownership, index contiguity and tf consistency.
///
/// Chunks are laid out document by document in `docs` order,
/// so the same base name may appear twice (explicit duplicates).
fn check_chunks(payload: &IndexPayload, problems: &mut Vec<String>) {
    let max_len = payload.chunking.max_len;
    let owners: Vec<(&str, usize)> = payload
        .docs
        .iter()
        .flat_map(|doc| (0..doc.chunk_count).map(move |index| (doc.name.as_str(), index)))
        .collect();

    for (position, chunk) in payload.chunks.iter().enumerate() {
        let id = format!("{}#{}", chunk.doc_name, chunk.chunk_index);

        match owners.get(position) {
            Some(&(name, index)) => {
                if chunk.doc_name != name {
                    problems.push(format!("chunk {id}: expected document {name}"));
                }
                if chunk.chunk_index != index {
                    problems.push(format!("chunk {id}: expected chunkIndex {index}"));
                }
            }
            None => problems.push(format!("chunk {id}: not owned by any document")),
        }

        if chunk.text.chars().count() > max_len {
            problems.push(format!("chunk {id}: text longer than maxLen ({max_len})"));
        }

        if term_frequencies(&chunk.tokens) != chunk.tf {
            problems.push(format!("chunk {id}: tf does not match tokens"));
        }
    }
}

/// df keys must equal the union of chunk tokens, each within
/// `1..=totalChunks` and equal to the number of chunks holding it
fn check_document_frequencies(payload: &IndexPayload, problems: &mut Vec<String>) {
    let mut counted: HashMap<&str, usize> = HashMap::new();
    for chunk in &payload.chunks {
        let distinct: BTreeSet<&str> = chunk.tokens.iter().map(String::as_str).collect();
        for token in distinct {
            *counted.entry(token).or_insert(0) += 1;
        }
    }

    for (token, df) in &payload.df {
        if *df == 0 || *df > payload.chunks.len() {
            problems.push(format!(
                "df[{token}] = {df} is outside 1..={}",
                payload.chunks.len()
            ));
        }
        match counted.get(token.as_str()) {
            Some(actual) if actual == df => {}
            Some(actual) => problems.push(format!(
                "df[{token}] = {df} but {actual} chunk(s) contain it"
            )),
            None => problems.push(format!("df[{token}] has no chunk containing it")),
        }
    }

    let mut missing: Vec<&str> = counted
        .keys()
        .filter(|token| !payload.df.contains_key(**token))
        .copied()
        .collect();
    missing.sort_unstable();
    for token in missing {
        problems.push(format!("token '{token}' missing from df"));
    }
}
