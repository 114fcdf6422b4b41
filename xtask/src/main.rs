//! Development tasks for seekctl
//!
//! Usage: `cargo run -p xtask -- man [--out-dir DIR]`

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

use seekctl::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for seekctl and its subcommands
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out_dir: PathBuf,
    },
}

/// Render one page per command, recursing into subcommands.
fn write_pages(cmd: &clap::Command, prefix: &str, out_dir: &Path) -> Result<usize> {
    let name = if prefix.is_empty() {
        cmd.get_name().to_string()
    } else {
        format!("{}-{}", prefix, cmd.get_name())
    };

    let page = clap_mangen::Man::new(cmd.clone()).title(name.clone());
    let mut buf = Vec::new();
    page.render(&mut buf)?;
    let path = out_dir.join(format!("{}.1", name));
    fs::write(&path, buf).with_context(|| format!("Failed to write {}", path.display()))?;

    let mut count = 1;
    for sub in cmd.get_subcommands().filter(|s| s.get_name() != "help") {
        count += write_pages(sub, &name, out_dir)?;
    }
    Ok(count)
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out_dir } => {
            fs::create_dir_all(&out_dir)?;
            let mut cmd = Cli::command();
            cmd.build();
            let count = write_pages(&cmd, "", &out_dir)?;
            println!("Wrote {} man pages to {}", count, out_dir.display());
        }
    }
    Ok(())
}
