//! lexc - command-line driver for the lexc lexical analyzer.
//!
//! Reads one source file, scans it, and prints the tokens, the symbol
//! table and any diagnostics.
//!
//! Exit status:
//! - `0` the file scanned cleanly
//! - `1` the scan recorded diagnostics
//! - `2` the file or configuration could not be read, or output failed

mod config;
mod error;
mod output;

use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use lexc_util::SourceFile;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use config::{Config, Emit, Format};
use error::{DriverError, Result};

/// Exit status when the scan recorded diagnostics.
const EXIT_DIAGNOSTICS: u8 = 1;

/// Exit status when the driver itself failed.
const EXIT_FAILURE: u8 = 2;

/// lexc - scan a source file into tokens
///
/// Prints the token sequence, the symbol table of first identifier
/// occurrences, and positioned diagnostics for malformed input.
#[derive(Parser, Debug)]
#[command(name = "lexc")]
#[command(author = "Lexc Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan a source file into tokens, symbols and diagnostics", long_about = None)]
struct Cli {
    /// Source file to scan
    file: PathBuf,

    /// Outputs to print (default: from config, else all)
    #[arg(short, long, value_enum)]
    emit: Option<Emit>,

    /// Output format (default: from config, else text)
    #[arg(short = 'F', long, value_enum)]
    format: Option<Format>,

    /// Print text diagnostics without the quoted source line
    #[arg(long)]
    no_snippets: bool,

    /// Enable verbose output
    #[arg(short, long, env = "LEXC_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "LEXC_CONFIG")]
    config: Option<PathBuf>,
}

/// Settings for one run, after CLI flags are applied over the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Settings {
    emit: Emit,
    format: Format,
    show_snippets: bool,
    verbose: bool,
}

impl Settings {
    fn resolve(cli: &Cli, config: &Config) -> Self {
        Self {
            emit: cli.emit.unwrap_or(config.emit),
            format: cli.format.unwrap_or(config.format),
            show_snippets: config.show_snippets && !cli.no_snippets,
            verbose: cli.verbose || config.verbose,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

/// Scans the requested file and prints the results.
fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let config = load_config(cli.config.as_deref()).context("failed to load configuration")?;
    let settings = Settings::resolve(cli, &config);

    init_logging(settings.verbose)?;
    debug!(?settings, "resolved settings");

    let file = SourceFile::load(&cli.file).map_err(DriverError::from)?;
    info!(file = file.name(), bytes = file.content().len(), "scanning");

    let scan = lexc_lex::scan(file.content());

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    match settings.format {
        Format::Text => output::write_text(
            &mut out,
            &mut err,
            &file,
            &scan,
            settings.emit,
            settings.show_snippets,
        )?,
        Format::Json => output::write_json(&mut out, &scan, settings.emit)?,
    }
    out.flush()?;

    if scan.has_errors() {
        Ok(ExitCode::from(EXIT_DIAGNOSTICS))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Initialize the logging system.
///
/// Logs go to stderr so they never mix with JSON on stdout. `RUST_LOG`
/// picks the filter unless `verbose` forces `debug`; the fallback is
/// `warn`.
fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DriverError::Logging(e.to_string()))
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}
