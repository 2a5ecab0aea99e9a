//! Verify command - check an existing index file

use crate::cli::output::print_report;
use crate::cli::OutputFormat;
use crate::core::error::IndexerError;
use crate::core::storage::{check_payload, read_index};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the verify command
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Index file to check
    #[arg(value_name = "INDEX")]
    pub path: PathBuf,
}

/// Execute the verify command
///
/// Fails with `InvalidIndex` when any invariant is violated.
pub async fn execute(
    args: VerifyArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let payload = read_index(&args.path).await?;
    let report = check_payload(&payload);

    print_report(&args.path, &payload.generated_at, &report, format)?;

    if report.is_consistent {
        Ok(())
    } else {
        Err(IndexerError::InvalidIndex(format!(
            "{} problem(s) in {}",
            report.problems.len(),
            args.path.display()
        ))
        .into())
    }
}
