//! Folio CLI - the `folio` binary.
//!
//! Commands:
//! - `translate` — render both narrative frames and their layer files
//! - `split`     — re-split a rendered frame document into its layers
//! - `scan`      — naive claim/negation scan of a text
//! - `config`    — print the effective configuration as TOML

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "folio",
    about = "Folio translator — narrative frames from decoded operator sequences",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the twelve-key and seven-step frames
    Translate(commands::translate::TranslateArgs),

    /// Split a rendered frame document into lab, spirit and merged layers
    Split {
        /// Rendered frame document
        #[arg(short, long)]
        file: PathBuf,

        /// Which frame the document is (long/short)
        #[arg(long)]
        frame: String,

        /// Write the layers next to the document instead of printing them
        #[arg(long)]
        write: bool,
    },

    /// Scan a text for operator symbols, claims and negations
    Scan {
        /// Read the text from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Scan this text directly
        #[arg(short, long)]
        text: Option<String>,
    },

    /// Print the effective configuration
    Config {
        /// Configuration file
        #[arg(short, long, default_value = "folio.toml")]
        config: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Translate(args) => commands::translate::run(args),
        Commands::Split { file, frame, write } => commands::split::run(&file, &frame, write),
        Commands::Scan { file, text } => commands::scan::run(file, text),
        Commands::Config { config } => commands::config::run(&config),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
