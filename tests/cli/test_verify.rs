// Tests for the verify command

use crate::common::{build_payload, DocsRepo};
use chatbot_indexer::cli::commands::verify::{execute, VerifyArgs};
use chatbot_indexer::cli::OutputFormat;
use chatbot_indexer::core::error::IndexerError;
use chatbot_indexer::core::storage::write_index;

#[tokio::test]
async fn test_verify_accepts_built_index() {
    let repo = DocsRepo::product_docs();
    let out = repo.path().join("index.json");
    let payload = build_payload(&repo.files[..3], 200, 20).await;
    write_index(&payload, &out).await.unwrap();

    let result = execute(VerifyArgs { path: out }, OutputFormat::Json).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_verify_rejects_hand_edited_index() {
    let repo = DocsRepo::with_files(&[("doc.md", "Relance automatique des impayés.")]);
    let out = repo.path().join("index.json");
    let payload = build_payload(&repo.files, 1200, 120).await;
    write_index(&payload, &out).await.unwrap();

    // Bump a stat behind the writer's back
    let mut raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    raw["stats"]["totalChunks"] = serde_json::json!(5);
    std::fs::write(&out, serde_json::to_vec(&raw).unwrap()).unwrap();

    let err = execute(VerifyArgs { path: out }, OutputFormat::Json)
        .await
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<IndexerError>(),
        Some(IndexerError::InvalidIndex(_))
    ));
}

#[tokio::test]
async fn test_verify_missing_file() {
    let repo = DocsRepo::empty();

    let result = execute(
        VerifyArgs {
            path: repo.path().join("missing.json"),
        },
        OutputFormat::Human,
    )
    .await;
    assert!(result.is_err());
}
