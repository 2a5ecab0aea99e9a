//! Output formatting for CLI commands
//!
//! Build summaries and verification reports go to stdout, either
//! as colored lines or as pretty JSON. Warnings and errors go to
//! stderr. Colors respect the NO_COLOR env var.

use crate::cli::OutputFormat;
use crate::core::storage::ValidationReport;
use crate::core::types::BuildSummary;
use serde::Serialize;
use std::path::Path;

/// Color scheme for CLI output
pub mod colors {
    use colored::{ColoredString, Colorize};

    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    pub fn file_path(s: &str) -> ColoredString {
        s.blue()
    }

    pub fn count(n: usize) -> ColoredString {
        n.to_string().yellow()
    }

    pub fn ok(s: &str) -> ColoredString {
        s.green()
    }

    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    pub fn error(s: &str) -> ColoredString {
        s.red().bold()
    }

    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }
}

/// Format bytes into human-readable size
pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    match bytes {
        b if b >= MB => format!("{:.1} MB", b as f64 / MB as f64),
        b if b >= KB => format!("{:.1} KB", b as f64 / KB as f64),
        b => format!("{b} B"),
    }
}

/// Format a build duration given in milliseconds
pub fn format_duration(millis: u64) -> String {
    let secs = millis as f64 / 1000.0;
    if secs >= 60.0 {
        let mins = (secs / 60.0).floor();
        format!("{mins:.0}m {:.1}s", secs - mins * 60.0)
    } else if millis >= 1000 {
        format!("{secs:.2}s")
    } else {
        format!("{millis}ms")
    }
}

/// Pretty JSON on stdout
pub fn print_json<T: Serialize>(data: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Print the outcome of a build
pub fn print_summary(summary: &BuildSummary, format: OutputFormat) -> Result<(), serde_json::Error> {
    match format {
        OutputFormat::Json => print_json(summary),
        OutputFormat::Human => {
            println!(
                "{} {} docs ({} chunks, {} tokens) in {}",
                colors::ok("Indexed"),
                colors::count(summary.docs),
                colors::count(summary.chunks),
                colors::count(summary.vocabulary),
                format_duration(summary.duration_ms)
            );
            println!(
                "Wrote {} to {}",
                format_bytes(summary.bytes_written),
                colors::file_path(&summary.output)
            );
            Ok(())
        }
    }
}

/// Print a verification report for the index at `path`
pub fn print_report(
    path: &Path,
    generated_at: &str,
    report: &ValidationReport,
    format: OutputFormat,
) -> Result<(), serde_json::Error> {
    match format {
        OutputFormat::Json => print_json(report),
        OutputFormat::Human => {
            println!("{}", colors::label(&path.display().to_string()));
            println!(
                "  docs: {}  chunks: {}  tokens: {}",
                colors::count(report.total_docs),
                colors::count(report.total_chunks),
                colors::count(report.vocabulary)
            );
            println!("  generated: {}", colors::dim(generated_at));
            for problem in &report.problems {
                println!("  {} {}", colors::error("x"), problem);
            }
            if report.is_consistent {
                println!("  {}", colors::ok("consistent"));
            }
            Ok(())
        }
    }
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", colors::warning("Warning"), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}: {}", colors::error("Error"), message);
}
