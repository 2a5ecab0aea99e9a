//! Completions command - shell completion scripts for chatbot-index

use crate::cli::Cli;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io::{self, Write};

/// Arguments for the completions command
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Write the completion script for `shell` into `out`
pub fn render(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, out);
}

/// Execute the completions command (script goes to stdout)
pub fn execute(args: CompletionsArgs) -> Result<(), Box<dyn std::error::Error>> {
    render(args.shell, &mut io::stdout());
    Ok(())
}
