//! Build command - locate documents and write the index

use crate::cli::output::{print_summary, print_warning};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::indexer::{DocumentLocator, IndexingPipeline};
use crate::core::storage::write_index;
use crate::core::types::BuildSummary;
use clap::Args;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Arguments for building the index
#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Markdown files to index (discovered when omitted)
    ///
    /// A file named like a subcommand (verify, show-config,
    /// completions) must be written with a path prefix, e.g. ./verify
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Output file [default: src/assets/chatbot/chatbot.index.json]
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Maximum chunk length in characters [default: 1200]
    #[arg(long, value_name = "CHARS")]
    pub chunk: Option<usize>,

    /// Characters repeated between split windows [default: 120]
    #[arg(long, value_name = "CHARS")]
    pub overlap: Option<usize>,

    /// Project name in the PRODUCT_DOC_<PROJECT>-*.md pattern
    #[arg(long, value_name = "NAME")]
    pub project: Option<String>,

    /// Suppress the summary output
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl BuildArgs {
    /// Apply command-line overrides on top of loaded config
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(out) = &self.out {
            config.output.path = out.clone();
        }
        if let Some(chunk) = self.chunk {
            config.indexing.chunk_size = chunk;
        }
        if let Some(overlap) = self.overlap {
            config.indexing.overlap = overlap;
        }
        if let Some(project) = &self.project {
            config.discovery.project = project.clone();
        }
    }
}

/// Execute the build
///
/// `root` is the directory discovery starts from and the base
/// for a relative output path.
pub async fn execute(
    args: BuildArgs,
    mut config: Config,
    root: &Path,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();

    args.apply_to(&mut config);
    config.validate()?;
    config.log_config();

    for file in &args.files {
        let is_markdown = file
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("md"))
            .unwrap_or(false);
        if !is_markdown && !args.quiet {
            print_warning(&format!("{} is not a .md file", file.display()));
        }
    }

    let locator = DocumentLocator::new(
        &config.discovery.project,
        config.discovery.search_dirs.clone(),
    )?;
    let files = locator.locate(&args.files, root)?;

    let pipeline = IndexingPipeline::new(&config.indexing)?.with_source_root(root);
    let payload = pipeline.build(&files).await?;

    let out = if config.output.path.is_absolute() {
        config.output.path.clone()
    } else {
        root.join(&config.output.path)
    };
    let bytes_written = write_index(&payload, &out).await?;

    let summary = BuildSummary {
        output: out.display().to_string(),
        docs: payload.stats.total_docs,
        chunks: payload.stats.total_chunks,
        vocabulary: payload.df.len(),
        bytes_written,
        duration_ms: start.elapsed().as_millis() as u64,
    };

    if args.quiet {
        return Ok(());
    }

    print_summary(&summary, format)?;

    Ok(())
}
