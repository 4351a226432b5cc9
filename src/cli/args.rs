//! Command-line argument definitions using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;

/// UPSC paper asset tools CLI.
#[derive(Parser, Debug)]
#[command(
    name = "paper-tools",
    version,
    about = "Rename and index UPSC exam-paper PDF assets",
    long_about = "Offline tools for a directory tree of exam-paper PDFs.\n\n\
                  `rename` makes every PDF filename filesystem-safe in place;\n\
                  `index` walks the year/type/category hierarchy and writes the\n\
                  JSON index files the app consumes."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Root of the papers tree.
    #[arg(short, long, global = true, env = "PAPER_TOOLS_ROOT")]
    pub root: Option<PathBuf>,

    /// Directory to write JSON index files into (index only).
    #[arg(short, long, global = true, env = "PAPER_TOOLS_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Path to configuration file.
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    /// Only print the final summary, not per-file output.
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Rename PDFs under the papers root to filesystem-safe names.
    Rename,
    /// Generate the JSON index files from the papers tree.
    Index,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(root) = &self.root {
            config.paths.papers_dir = root.clone();
        }

        if let Some(output) = &self.output {
            config.paths.config_dir = output.clone();
        }

        if self.quiet {
            config.options.show_renames = false;
        }
    }
}
