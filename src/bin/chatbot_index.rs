//! chatbot-index - build the chatbot lexical index
//!
//! # Examples
//!
//! ```bash
//! # Discover PRODUCT_DOC_*-*.md in . and Docs/product
//! chatbot-index
//!
//! # Index explicit files with custom chunking
//! chatbot-index docs/a.md docs/b.md --chunk 800 --overlap 80 --out public/index.json
//!
//! # Check an existing index
//! chatbot-index verify src/assets/chatbot/chatbot.index.json
//! ```

use clap::Parser;
use chatbot_indexer::cli::output::print_error;
use chatbot_indexer::cli::{run, Cli, LogFormat};
use tracing_subscriber::EnvFilter;

fn init_logging(cli: &Cli) {
    let default_level = if cli.verbose {
        "chatbot_indexer=info"
    } else {
        "chatbot_indexer=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into());

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr) // stdout carries the summary
        .with_target(false);

    match cli.log_format {
        LogFormat::Text => builder.compact().init(),
        LogFormat::Json => builder.json().init(),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    if let Err(e) = run(cli).await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
