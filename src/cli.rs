//! CLI definitions for seekctl
//!
//! Kept in the library so the xtask can generate man pages from them.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Media transport controller - tap/hold seeking with safe end-of-media handling
#[derive(Parser, Debug)]
#[command(name = "seekctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (defaults to <config dir>/seekctl/config.toml)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log transport decisions to stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute where playback of an item should start
    #[command(long_about = "Compute where playback of an item should start.\n\n\
        Prints the stored position when it lies inside the item, and 0 when \
        nothing is stored, the duration is unknown (NaN), or the stored \
        position is at or past the end.")]
    Resume {
        /// Total length of the item in seconds (NaN if unknown)
        #[arg(long, allow_hyphen_values = true)]
        duration: f64,

        /// Previously saved position in seconds
        #[arg(long, allow_hyphen_values = true)]
        stored: Option<f64>,
    },

    /// Run a gesture script against a simulated surface
    #[command(long_about = "Run a gesture script against a simulated surface.\n\n\
        Steps: tap:fwd, tap:back, hold:fwd, hold:back, release, tick[:N], \
        play[:SECS], pause, detach, attach. Steps may be separated by spaces \
        or commas. One line is printed per step.")]
    Simulate {
        /// Total length of the simulated media in seconds
        #[arg(long, allow_hyphen_values = true)]
        duration: f64,

        /// Starting position in seconds
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        start: f64,

        /// Print step reports as JSON
        #[arg(long)]
        json: bool,

        /// Script steps
        #[arg(required = true, value_name = "STEP")]
        script: Vec<String>,
    },

    /// Drive a simulated surface interactively with the arrow keys
    #[command(long_about = "Drive a simulated surface interactively.\n\n\
        Left/Right: tap to seek, hold to scan (needs a terminal that reports \
        key releases; otherwise every repeat is a tap)\n\
        Space: play/pause\n\
        q/Esc: quit")]
    Play {
        /// Total length of the simulated media in seconds
        #[arg(long, default_value_t = 120.0)]
        duration: f64,

        /// Starting position in seconds
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        start: f64,
    },

    /// Show configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration as TOML
    Show,
    /// Write a config file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the default config file path
    Path,
}
