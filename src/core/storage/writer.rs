//! Index file persistence.
//!
//! The payload is validated, serialized as compact JSON and
//! written to a sibling temporary file that is then renamed over
//! the destination. The destination therefore holds either the
//! previous index or the complete new one.

use std::path::{Path, PathBuf};

use crate::core::error::{IndexerError, Result};
use crate::core::storage::validator::validate_payload;
use crate::core::types::IndexPayload;

/// Write a validated payload to `out`, creating parent
/// directories as needed.
///
/// # Returns
///
/// The number of bytes written.
pub async fn write_index(payload: &IndexPayload, out: &Path) -> Result<u64> {
    validate_payload(payload)?;

    let bytes = serde_json::to_vec(payload)?;

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| write_failed(parent, e))?;
    }

    let tmp = temp_path(out);
    if let Err(e) = tokio::fs::write(&tmp, &bytes).await {
        let _ = tokio::fs::remove_file(&tmp).await;
        return Err(write_failed(out, e));
    }

    if let Err(e) = tokio::fs::rename(&tmp, out).await {
        let _ = tokio::fs::remove_file(&tmp).await;
        return Err(write_failed(out, e));
    }

    tracing::info!("Wrote {} bytes to {:?}", bytes.len(), out);
    Ok(bytes.len() as u64)
}

/// Load an index file written by [`write_index`].
pub async fn read_index(path: &Path) -> Result<IndexPayload> {
    let contents = tokio::fs::read(path)
        .await
        .map_err(|e| IndexerError::ReadFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    Ok(serde_json::from_slice(&contents)?)
}

/// Sibling temporary path: `dir/.name.tmp`
fn temp_path(out: &Path) -> PathBuf {
    let name = out
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "index.json".to_string());
    out.with_file_name(format!(".{name}.tmp"))
}

fn write_failed(path: &Path, e: std::io::Error) -> IndexerError {
    IndexerError::WriteFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    }
}
