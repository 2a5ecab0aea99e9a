//! Source document resolution.
//!
//! Explicit paths are used verbatim. Without them, the working
//! directory and the configured search directories are scanned
//! (immediate files only) for `PRODUCT_DOC_<PROJECT>-*.md`,
//! matched case-insensitively. Scan errors such as a missing
//! directory count as zero candidates and are not fatal.

use glob::{MatchOptions, Pattern};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::error::{IndexerError, Result};

/// Prefix of discoverable knowledge-base documents
pub const DOC_PREFIX: &str = "PRODUCT_DOC_";

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Resolves the ordered list of Markdown files to index
#[derive(Debug, Clone)]
pub struct DocumentLocator {
    /// Compiled file-name pattern
    pattern: Pattern,

    /// Directories scanned after the root, relative to it
    search_dirs: Vec<PathBuf>,
}

impl DocumentLocator {
    /// Create a locator for the given project name.
    ///
    /// `project` fills the `<PROJECT>` slot and may itself be a
    /// glob (`*` matches any project).
    pub fn new(project: &str, search_dirs: Vec<PathBuf>) -> Result<Self> {
        let raw = format!("{DOC_PREFIX}{project}-*.md");
        let pattern = Pattern::new(&raw).map_err(|e| {
            IndexerError::ConfigError(format!("Invalid discovery pattern '{raw}': {e}"))
        })?;

        Ok(Self {
            pattern,
            search_dirs,
        })
    }

    /// The discovery pattern as text
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Check whether a file name matches the discovery pattern
    pub fn matches(&self, file_name: &str) -> bool {
        self.pattern.matches_with(file_name, MATCH_OPTIONS)
    }

    /// Resolve input files.
    ///
    /// # Arguments
    ///
    /// * `explicit` - Paths from the command line (order and
    ///   duplicates preserved)
    /// * `root` - Directory to discover from when `explicit` is
    ///   empty (normally the working directory)
    ///
    /// Discovered paths are returned relative to `root`.
    ///
    /// # Errors
    ///
    /// `NoInputFiles` when nothing was given and nothing was
    /// discovered.
    pub fn locate(&self, explicit: &[PathBuf], root: &Path) -> Result<Vec<PathBuf>> {
        if !explicit.is_empty() {
            tracing::debug!("Using {} explicit input file(s)", explicit.len());
            return Ok(explicit.to_vec());
        }

        let mut found = self.scan_dir(root);
        for dir in &self.search_dirs {
            found.extend(self.scan_dir(&root.join(dir)));
        }

        // Discovered paths are relative to root
        let mut candidates: Vec<PathBuf> = found
            .into_iter()
            .map(|path| {
                let relative = path.strip_prefix(root).map(Path::to_path_buf);
                relative.unwrap_or(path)
            })
            .collect();

        candidates.sort_by(|a, b| a.file_name().cmp(&b.file_name()).then_with(|| a.cmp(b)));

        if candidates.is_empty() {
            let mut searched = vec![root.display().to_string()];
            searched.extend(
                self.search_dirs
                    .iter()
                    .map(|d| root.join(d).display().to_string()),
            );
            return Err(IndexerError::NoInputFiles(format!(
                "pass .md paths as arguments or add files matching {} to {}",
                self.pattern(),
                searched.join(", ")
            )));
        }

        tracing::info!("Discovered {} document(s)", candidates.len());
        Ok(candidates)
    }

    /// List matching files directly inside `dir`.
    ///
    /// Errors are logged and yield no candidates.
    fn scan_dir(&self, dir: &Path) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            match entry {
                Ok(entry) => {
                    if !entry.file_type().is_file() {
                        continue;
                    }

                    let matched = entry
                        .file_name()
                        .to_str()
                        .map(|name| self.matches(name))
                        .unwrap_or(false);

                    if matched {
                        files.push(entry.path().to_path_buf());
                    }
                }
                Err(e) => {
                    tracing::debug!("Skipping unreadable discovery location {:?}: {}", dir, e);
                }
            }
        }

        files
    }
}
