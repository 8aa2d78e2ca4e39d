//! Shell completions command implementation.

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use super::Result;
use crate::cli::Cli;

/// Executes the completions command, writing the script to stdout.
pub fn execute(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
