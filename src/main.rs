//! UPSC Paper Tools - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use upsc_paper_tools::{
    catalog::PaperIndex,
    cli::{Args, Command},
    config::Config,
    error::{exit_codes, Error, Result},
    output::{
        print_error, print_index_stats, print_info, print_rename, print_rename_stats,
        print_warning,
    },
    rename::rename_pdfs,
};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::MissingRoot(_) => ExitCode::from(exit_codes::MISSING_ROOT as u8),
                Error::Config(_) | Error::TomlParse(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Load configuration; a missing file just means defaults
    let mut config = if args.config.exists() {
        Config::load(&args.config)?
    } else {
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    match args.command {
        Command::Rename => run_rename(&config),
        Command::Index => run_index(&config),
    }
}

/// Rename every unsafe PDF name under the papers root.
///
/// A missing root is fatal here: the error propagates and the process exits
/// non-zero.
fn run_rename(config: &Config) -> Result<()> {
    let root = &config.paths.papers_dir;
    print_info(&format!("Renaming PDFs under {}", root.display()));

    let renamed = rename_pdfs(root)?;

    if config.options.show_renames {
        for record in &renamed {
            print_rename(
                &record.from.display().to_string(),
                &record.to.display().to_string(),
            );
        }
    }

    print_rename_stats(renamed.len());
    Ok(())
}

/// Scan the papers tree and write the JSON index files.
///
/// Unlike `rename`, a missing root is a graceful no-op: nothing is written
/// and the process still exits zero.
fn run_index(config: &Config) -> Result<()> {
    let root = &config.paths.papers_dir;
    print_info(&format!("Indexing papers under {}", root.display()));

    let index = match PaperIndex::scan(root) {
        Ok(index) => index,
        Err(Error::MissingRoot(path)) => {
            print_warning(&format!(
                "Papers directory not found: {}. Nothing to index.",
                path.display()
            ));
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    index.write_to(&config.paths.config_dir)?;

    print_index_stats(&index.summary());
    print_info(&format!(
        "Wrote index files to {}",
        config.paths.config_dir.display()
    ));
    Ok(())
}
