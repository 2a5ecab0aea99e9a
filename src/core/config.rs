//! Configuration management for the chatbot indexer.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with defaults matching the historical
//! behaviour of the index build.

use crate::core::error::{IndexerError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Application name used for the XDG config directory
pub const APP_NAME: &str = "chatbot-index";

/// Legacy config file looked up in the working directory
pub const LEGACY_CONFIG_FILE: &str = "chatbot-index.toml";

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub indexing: IndexingConfig,
    #[serde(default)]
    pub discovery: DiscoveryConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Indexing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IndexingConfig {
    /// Maximum characters per chunk (not bytes!)
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Characters repeated between hard-split windows
    #[serde(default = "default_overlap")]
    pub overlap: usize,

    /// Stop words added on top of the built-in table
    #[serde(default)]
    pub extra_stop_words: Vec<String>,
}

/// Document discovery configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DiscoveryConfig {
    /// Project slot of the `PRODUCT_DOC_<PROJECT>-*.md` pattern
    #[serde(default = "default_project")]
    pub project: String,

    /// Directories scanned after the working directory
    #[serde(default = "default_search_dirs")]
    pub search_dirs: Vec<PathBuf>,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Index file path
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

// Default value functions
fn default_chunk_size() -> usize {
    1200
}

fn default_overlap() -> usize {
    120
}

fn default_project() -> String {
    "*".to_string()
}

fn default_search_dirs() -> Vec<PathBuf> {
    vec![PathBuf::from("Docs/product")]
}

fn default_output_path() -> PathBuf {
    PathBuf::from("src/assets/chatbot/chatbot.index.json")
}

impl Default for IndexingConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            overlap: default_overlap(),
            extra_stop_words: Vec::new(),
        }
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            project: default_project(),
            search_dirs: default_search_dirs(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| IndexerError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Path of the per-user config file, if a config dir exists
    pub fn xdg_config_file() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join("config.toml"))
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// File lookup order:
    /// 1. `explicit` path (from `--config`)
    /// 2. CHATBOT_INDEX_CONFIG env var
    /// 3. XDG config file (~/.config/chatbot-index/config.toml)
    /// 4. Legacy ./chatbot-index.toml
    /// 5. Defaults
    ///
    /// The result is not validated: CLI flags are applied on top
    /// first, then the caller runs [`Config::validate`].
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = if let Some(path) = explicit {
            Self::from_file(path)?
        } else if let Ok(config_path) = env::var("CHATBOT_INDEX_CONFIG") {
            Self::from_file(config_path)?
        } else {
            match Self::xdg_config_file() {
                Some(xdg_config) if xdg_config.exists() => Self::from_file(xdg_config)?,
                _ if Path::new(LEGACY_CONFIG_FILE).exists() => {
                    Self::from_file(LEGACY_CONFIG_FILE)?
                }
                _ => Self::default(),
            }
        };

        config.merge_env();

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(chunk_size) = env::var("CHATBOT_INDEX_CHUNK_SIZE") {
            if let Ok(size) = chunk_size.parse() {
                self.indexing.chunk_size = size;
            }
        }
        if let Ok(overlap) = env::var("CHATBOT_INDEX_OVERLAP") {
            if let Ok(o) = overlap.parse() {
                self.indexing.overlap = o;
            }
        }
        if let Ok(project) = env::var("CHATBOT_INDEX_PROJECT") {
            self.discovery.project = project;
        }
        if let Ok(out) = env::var("CHATBOT_INDEX_OUT") {
            self.output.path = PathBuf::from(out);
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.indexing.chunk_size == 0 {
            return Err(IndexerError::ConfigError(
                "Chunk size must be non-zero".to_string(),
            ));
        }

        // A hard-split window advances by chunk_size - overlap
        if self.indexing.overlap >= self.indexing.chunk_size {
            return Err(IndexerError::ConfigError(format!(
                "Overlap ({}) must be less than chunk size ({})",
                self.indexing.overlap, self.indexing.chunk_size
            )));
        }

        if self.discovery.project.trim().is_empty() {
            return Err(IndexerError::ConfigError(
                "Discovery project name must be non-empty".to_string(),
            ));
        }

        if self.output.path.as_os_str().is_empty() {
            return Err(IndexerError::ConfigError(
                "Output path must be non-empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Log the effective configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Chunk size: {} chars", self.indexing.chunk_size);
        tracing::info!("  Overlap: {} chars", self.indexing.overlap);
        tracing::info!(
            "  Extra stop words: {}",
            self.indexing.extra_stop_words.len()
        );
        tracing::info!("  Discovery project: {}", self.discovery.project);
        tracing::info!("  Search dirs: {:?}", self.discovery.search_dirs);
        tracing::info!("  Output: {:?}", self.output.path);
    }
}
