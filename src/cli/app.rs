//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use lintmute::output::OutputMode;

/// lintmute - Bulk-suppress ESLint errors with file-level disable directives
#[derive(Parser, Debug)]
#[command(
    name = "lintmute",
    version,
    about = "Bulk-suppress ESLint errors with file-level disable directives",
    long_about = "Adopt a stricter lint config without fixing everything at once.\n\n\
                  `ignore` runs ESLint and adds a `/* eslint-disable ... */` first line to\n\
                  every file with errors. `list` shows which files disable which rules."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run ESLint and disable every rule with errors at the top of each file
    #[command(visible_alias = "suppress")]
    Ignore {
        /// Project root (default: current directory)
        path: Option<PathBuf>,

        /// Command used to run ESLint, e.g. "npx eslint"
        #[arg(long)]
        eslint: Option<String>,

        /// Comma-separated source extensions, e.g. "js,ts"
        #[arg(long)]
        ext: Option<String>,
    },

    /// List files with whole-file disable directives, grouped by rule
    List {
        /// Project root (default: current directory)
        path: Option<PathBuf>,

        /// Comma-separated source extensions, e.g. "js,ts"
        #[arg(long)]
        ext: Option<String>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Ignore { path, eslint, ext }) => {
            commands::ignore(&resolve_root(path)?, eslint.as_deref(), ext.as_deref(), output_mode)
        },
        Some(Command::List { path, ext }) => {
            commands::list(&resolve_root(path)?, ext.as_deref(), output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("lintmute v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("lintmute v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'lintmute --help' for usage");
                println!("Run 'lintmute ignore' to suppress current lint errors");
            }
            Ok(())
        },
    }
}

/// The project root: the given path, or the working directory
fn resolve_root(path: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    match path {
        Some(path) => Ok(path),
        None => Ok(std::env::current_dir()?),
    }
}
