// End-to-end tests for the build command

use crate::common::{assert_payload_invariants, paragraph, read_payload, DocsRepo};
use chatbot_indexer::cli::commands::build::{execute, BuildArgs};
use chatbot_indexer::cli::OutputFormat;
use chatbot_indexer::core::config::Config;
use chatbot_indexer::core::error::IndexerError;
use std::path::PathBuf;

fn args_for(files: &[PathBuf], out: PathBuf) -> BuildArgs {
    BuildArgs {
        files: files.to_vec(),
        out: Some(out),
        quiet: true,
        ..Default::default()
    }
}

fn as_indexer_error<'a>(err: &'a (dyn std::error::Error + 'static)) -> &'a IndexerError {
    err.downcast_ref::<IndexerError>()
        .expect("error should be an IndexerError")
}

#[tokio::test]
async fn test_single_short_paragraph() {
    let text = paragraph(50);
    let repo = DocsRepo::with_files(&[("short.md", text.as_str())]);
    let out = repo.path().join("index.json");

    execute(args_for(&repo.files, out.clone()), Config::default(), repo.path(), OutputFormat::Json)
        .await
        .unwrap();

    let payload = read_payload(&out);
    assert_eq!(payload.docs.len(), 1);
    assert_eq!(payload.chunks.len(), 1);
    assert_eq!(payload.chunks[0].chunk_index, 0);
    assert_eq!(payload.chunks[0].text, text);
    assert_payload_invariants(&payload);
}

#[tokio::test]
async fn test_two_paragraphs_merge_into_one_chunk() {
    let first = paragraph(48);
    let second = paragraph(50);
    let content = format!("{first}\n\n{second}");
    let repo = DocsRepo::with_files(&[("two.md", content.as_str())]);
    let out = repo.path().join("index.json");

    execute(args_for(&repo.files, out.clone()), Config::default(), repo.path(), OutputFormat::Json)
        .await
        .unwrap();

    let payload = read_payload(&out);
    assert_eq!(payload.chunks.len(), 1);
    assert_eq!(payload.chunks[0].text, content);
}

#[tokio::test]
async fn test_long_paragraph_is_windowed() {
    let text = paragraph(3000);
    let repo = DocsRepo::with_files(&[("long.md", text.as_str())]);
    let out = repo.path().join("index.json");

    execute(args_for(&repo.files, out.clone()), Config::default(), repo.path(), OutputFormat::Json)
        .await
        .unwrap();

    let payload = read_payload(&out);
    assert!(payload.chunks.len() >= 3);
    assert_eq!(payload.docs[0].chunk_count, payload.chunks.len());
    for chunk in &payload.chunks {
        assert!(chunk.text.chars().count() <= 1200);
    }
    assert_payload_invariants(&payload);
}

#[tokio::test]
async fn test_two_explicit_files() {
    let repo = DocsRepo::with_files(&[
        ("a.md", "Loyer payé en avance"),
        ("b.md", "Bail signé par email"),
    ]);
    let out = repo.path().join("index.json");

    execute(args_for(&repo.files, out.clone()), Config::default(), repo.path(), OutputFormat::Json)
        .await
        .unwrap();

    let payload = read_payload(&out);
    assert_eq!(payload.docs.len(), 2);
    assert_eq!(payload.chunks.len(), 2);
    assert_eq!(payload.stats.total_docs, 2);
    assert_eq!(payload.stats.total_chunks, 2);
    assert_eq!(payload.docs[0].name, "a.md");
    assert_eq!(payload.docs[1].name, "b.md");
}

#[tokio::test]
async fn test_stop_words_dropped_from_tokens() {
    let repo = DocsRepo::with_files(&[("chat.md", "Le chat mange la souris")]);
    let out = repo.path().join("index.json");

    execute(args_for(&repo.files, out.clone()), Config::default(), repo.path(), OutputFormat::Json)
        .await
        .unwrap();

    let payload = read_payload(&out);
    assert_eq!(payload.chunks[0].tokens, vec!["chat", "mange", "souris"]);
}

#[tokio::test]
async fn test_no_inputs_fails_without_writing() {
    let repo = DocsRepo::with_files(&[("README.md", "# Not a product doc")]);
    let out = repo.path().join("index.json");

    let err = execute(args_for(&[], out.clone()), Config::default(), repo.path(), OutputFormat::Json)
        .await
        .unwrap_err();

    assert!(matches!(as_indexer_error(err.as_ref()), IndexerError::NoInputFiles(_)));
    assert!(err.to_string().to_lowercase().contains("no input files"));
    assert!(!out.exists());
}

#[tokio::test]
async fn test_no_inputs_keeps_previous_index() {
    let repo = DocsRepo::with_files(&[("index.json", "previous")]);
    let out = repo.files[0].clone();

    let result =
        execute(args_for(&[], out.clone()), Config::default(), repo.path(), OutputFormat::Json).await;

    assert!(result.is_err());
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "previous");
}

#[tokio::test]
async fn test_discovery_finds_product_docs_sorted() {
    let repo = DocsRepo::product_docs();
    let out = repo.path().join("index.json");

    execute(args_for(&[], out.clone()), Config::default(), repo.path(), OutputFormat::Json)
        .await
        .unwrap();

    let payload = read_payload(&out);
    let names: Vec<&str> = payload.docs.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "PRODUCT_DOC_RENTAL-billing.md",
            "PRODUCT_DOC_RENTAL-overview.md",
            "product_doc_rental-leases.MD",
        ]
    );
    assert_payload_invariants(&payload);
}

#[tokio::test]
async fn test_discovered_source_paths_are_root_relative() {
    let repo = DocsRepo::product_docs();
    let out = repo.path().join("index.json");

    execute(args_for(&[], out.clone()), Config::default(), repo.path(), OutputFormat::Json)
        .await
        .unwrap();

    let payload = read_payload(&out);
    let sources: Vec<PathBuf> = payload
        .docs
        .iter()
        .map(|d| PathBuf::from(&d.source_path))
        .collect();
    assert_eq!(
        sources,
        vec![
            PathBuf::from("Docs/product/PRODUCT_DOC_RENTAL-billing.md"),
            PathBuf::from("PRODUCT_DOC_RENTAL-overview.md"),
            PathBuf::from("Docs/product/product_doc_rental-leases.MD"),
        ]
    );
}

#[tokio::test]
async fn test_project_filter_narrows_discovery() {
    let repo = DocsRepo::with_files(&[
        ("PRODUCT_DOC_RENTAL-a.md", "Gestion des baux"),
        ("PRODUCT_DOC_SHOP-b.md", "Catalogue produits"),
    ]);
    let out = repo.path().join("index.json");
    let args = BuildArgs {
        project: Some("SHOP".to_string()),
        ..args_for(&[], out.clone())
    };

    execute(args, Config::default(), repo.path(), OutputFormat::Json)
        .await
        .unwrap();

    let payload = read_payload(&out);
    assert_eq!(payload.docs.len(), 1);
    assert_eq!(payload.docs[0].name, "PRODUCT_DOC_SHOP-b.md");
}

#[tokio::test]
async fn test_relative_output_resolved_against_root() {
    let repo = DocsRepo::with_files(&[("a.md", "Quittance de loyer")]);

    execute(
        args_for(&repo.files, PathBuf::from("public/chatbot.index.json")),
        Config::default(),
        repo.path(),
        OutputFormat::Json,
    )
    .await
    .unwrap();

    assert!(repo.path().join("public/chatbot.index.json").exists());
}

#[tokio::test]
async fn test_default_output_location() {
    let repo = DocsRepo::with_files(&[("a.md", "Quittance de loyer")]);
    let args = BuildArgs {
        files: repo.files.clone(),
        quiet: true,
        ..Default::default()
    };

    execute(args, Config::default(), repo.path(), OutputFormat::Json)
        .await
        .unwrap();

    let payload = read_payload(&repo.path().join("src/assets/chatbot/chatbot.index.json"));
    assert_eq!(payload.chunking.max_len, 1200);
    assert_eq!(payload.chunking.overlap, 120);
}

#[tokio::test]
async fn test_overlap_not_below_chunk_rejected() {
    let repo = DocsRepo::with_files(&[("a.md", "Quittance de loyer")]);
    let out = repo.path().join("index.json");
    let args = BuildArgs {
        chunk: Some(100),
        overlap: Some(100),
        ..args_for(&repo.files, out.clone())
    };

    let err = execute(args, Config::default(), repo.path(), OutputFormat::Json)
        .await
        .unwrap_err();

    assert!(matches!(as_indexer_error(err.as_ref()), IndexerError::ConfigError(_)));
    assert!(!out.exists());
}

#[tokio::test]
async fn test_missing_explicit_file_reports_path() {
    let repo = DocsRepo::empty();
    let missing = repo.path().join("absent.md");
    let out = repo.path().join("index.json");

    let err = execute(
        args_for(&[missing.clone()], out.clone()),
        Config::default(),
        repo.path(),
        OutputFormat::Json,
    )
    .await
    .unwrap_err();

    match as_indexer_error(err.as_ref()) {
        IndexerError::ReadFailed { path, .. } => assert!(path.ends_with("absent.md")),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!out.exists());
}

#[tokio::test]
async fn test_custom_chunking_recorded() {
    let text = paragraph(900);
    let repo = DocsRepo::with_files(&[("doc.md", text.as_str())]);
    let out = repo.path().join("index.json");
    let args = BuildArgs {
        chunk: Some(400),
        overlap: Some(40),
        ..args_for(&repo.files, out.clone())
    };

    execute(args, Config::default(), repo.path(), OutputFormat::Json)
        .await
        .unwrap();

    let payload = read_payload(&out);
    assert_eq!(payload.chunking.max_len, 400);
    assert_eq!(payload.chunking.overlap, 40);
    assert!(payload.chunks.len() >= 3);
    assert_payload_invariants(&payload);
}
