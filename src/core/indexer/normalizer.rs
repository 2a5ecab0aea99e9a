//! Text canonicalization applied before chunking and tokenizing.
//!
//! Line endings become `\n`, tabs become single spaces and runs
//! of plain spaces collapse to one. Newlines are never merged,
//! so blank-line paragraph breaks survive for the chunker.

use once_cell::sync::Lazy;
use regex::Regex;

/// CRLF or a lone CR
static LINE_ENDING: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n?").unwrap());

/// Two or more plain spaces
static SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r" {2,}").unwrap());

/// Canonicalize raw Markdown text.
///
/// Idempotent: `normalize(&normalize(s)) == normalize(s)`.
///
/// # Example
///
/// ```
/// use chatbot_indexer::core::indexer::normalize;
///
/// assert_eq!(normalize("  a\t\tb\r\n\r\nc  "), "a b\n\nc");
/// ```
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let unix = LINE_ENDING.replace_all(text, "\n");
    let untabbed = unix.replace('\t', " ");
    let collapsed = SPACE_RUN.replace_all(&untabbed, " ");

    collapsed.trim().to_string()
}
