//! Shell completions handler

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;

use seekctl::cli::Cli;

/// Write completions for `shell` to stdout.
pub fn handle(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "seekctl", &mut std::io::stdout());
    Ok(())
}
