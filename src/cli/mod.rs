//! CLI adapter for the chatbot indexer
//!
//! Running the binary without a subcommand builds the index;
//! subcommands cover inspection and shell integration.
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!                       v
//!              +------------------+
//!              |      cli/        |
//!              | (clap adapter)   |
//!              +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Chatbot Indexer - Markdown knowledge base to lexical index
///
/// Builds a single JSON index (chunks, term and document
/// frequencies) from Markdown documents. With no FILES, documents
/// named PRODUCT_DOC_<PROJECT>-*.md are discovered in the working
/// directory and in Docs/product.
#[derive(Parser, Debug)]
#[command(name = "chatbot-index")]
#[command(version)]
#[command(about = "Build the chatbot lexical index from Markdown docs", long_about = None)]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Output format for the command summary
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Configuration file (TOML)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log progress (info level) to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Log line format on stderr
    #[arg(long, global = true, default_value = "text")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub build: commands::BuildArgs,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact text lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Available CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check an existing index file for consistency
    Verify(commands::VerifyArgs),

    /// Show the effective configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  chatbot-index completions bash > ~/.local/share/bash-completion/completions/chatbot-index
    ///   zsh:   chatbot-index completions zsh > ~/.zfunc/_chatbot-index
    ///   fish:  chatbot-index completions fish > ~/.config/fish/completions/chatbot-index.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;

    match cli.command {
        Some(Commands::Completions(args)) => commands::completions::execute(args),
        Some(Commands::Verify(args)) => commands::verify::execute(args, cli.format).await,
        Some(Commands::ShowConfig(args)) => {
            let config = Config::load(cli.config.as_deref())?;
            commands::config::execute(args, &config, cli.format)
        }
        None => {
            let config = Config::load(cli.config.as_deref())?;
            let root = std::env::current_dir()?;
            commands::build::execute(cli.build, config, &root, cli.format).await
        }
    }
}
