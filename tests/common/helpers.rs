// Test helper functions

use chatbot_indexer::core::config::IndexingConfig;
use chatbot_indexer::core::indexer::IndexingPipeline;
use chatbot_indexer::core::types::IndexPayload;
use std::path::{Path, PathBuf};

/// Fixed build timestamp for reproducible payloads
#[allow(dead_code)] // Used in integration tests
pub const STAMP: &str = "2025-06-01T12:00:00.000Z";

/// Run the pipeline over `files` with the given chunking
#[allow(dead_code)] // Used in integration tests
pub async fn build_payload(files: &[PathBuf], chunk_size: usize, overlap: usize) -> IndexPayload {
    let pipeline = IndexingPipeline::new(&IndexingConfig {
        chunk_size,
        overlap,
        extra_stop_words: vec![],
    })
    .expect("Failed to create indexing pipeline");

    pipeline
        .build_at(files, STAMP)
        .await
        .expect("Failed to build index")
}

/// Parse an index file written by the CLI
#[allow(dead_code)] // Used in integration tests
pub fn read_payload(path: &Path) -> IndexPayload {
    let contents = std::fs::read_to_string(path).expect("Failed to read index file");
    serde_json::from_str(&contents).expect("Index file is not a valid payload")
}

/// Assert the structural invariants every index must satisfy
#[allow(dead_code)] // Used in integration tests
pub fn assert_payload_invariants(payload: &IndexPayload) {
    assert_eq!(payload.version, 1);
    assert_eq!(
        payload.stats.total_docs,
        payload.docs.len(),
        "stats.totalDocs != docs.length"
    );
    assert_eq!(
        payload.stats.total_chunks,
        payload.chunks.len(),
        "stats.totalChunks != chunks.length"
    );

    let declared: usize = payload.docs.iter().map(|d| d.chunk_count).sum();
    assert_eq!(declared, payload.chunks.len(), "sum(chunkCount) != chunks.length");

    // chunkIndex is 0..N-1 per document, in document order
    let mut chunks = payload.chunks.iter();
    for doc in &payload.docs {
        for expected in 0..doc.chunk_count {
            let chunk = chunks.next().expect("missing chunk");
            assert_eq!(chunk.doc_name, doc.name);
            assert_eq!(chunk.chunk_index, expected);
        }
    }

    for chunk in &payload.chunks {
        assert!(
            chunk.text.chars().count() <= payload.chunking.max_len,
            "chunk {}#{} exceeds maxLen",
            chunk.doc_name,
            chunk.chunk_index
        );
        for token in &chunk.tokens {
            assert!(payload.df.contains_key(token), "token {token} missing from df");
        }
    }

    for (token, df) in &payload.df {
        assert!(*df >= 1, "df[{token}] < 1");
        assert!(*df <= payload.stats.total_chunks, "df[{token}] > totalChunks");
        assert!(
            payload.chunks.iter().any(|c| c.tokens.contains(token)),
            "df key {token} not in any chunk"
        );
    }
}
