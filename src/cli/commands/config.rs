//! Config command - show the effective configuration

use crate::cli::OutputFormat;
use crate::core::config::Config;
use clap::Args;
use serde::Serialize;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also show where configuration files are looked up
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub config: Config,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<String>,
}

/// Execute the config command
pub fn execute(
    args: ConfigArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config_file = if args.all {
        Config::xdg_config_file().map(|p| p.display().to_string())
    } else {
        None
    };

    let response = ConfigResponse {
        config: config.clone(),
        config_file,
    };

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  indexing:");
            println!("    chunk_size: {}", config.indexing.chunk_size);
            println!("    overlap: {}", config.indexing.overlap);
            println!(
                "    extra_stop_words: {:?}",
                config.indexing.extra_stop_words
            );
            println!("  discovery:");
            println!("    project: {}", config.discovery.project);
            println!("    search_dirs: {:?}", config.discovery.search_dirs);
            println!("  output:");
            println!("    path: {}", config.output.path.display());
            if let Some(file) = &response.config_file {
                println!("  config_file: {file}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
