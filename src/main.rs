//! Prints the preformatted results embedded in an HTML meet results document.

mod error;

use std::fmt::{Debug, Display};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use exn::ResultExt;
use swimr_config::Config;
use swimr_extract::Extractor;
use tracing::instrument;
use tracing_subscriber::EnvFilter;

use crate::error::{ErrorKind, Result};

/// Parse a swim results file.
#[derive(Debug, Parser)]
#[command(name = "swimr", version, about)]
struct Cli {
    /// Name of the HTML file to parse
    htmlfile: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => return report(&err),
    };
    init_logging(&config.log_level);
    match run(&cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

fn report(err: &(impl Display + Debug)) -> ExitCode {
    tracing::debug!("{err:?}");
    eprintln!("Error: {err}");
    ExitCode::FAILURE
}

/// Logs go to stderr so they never mix with extracted text. `RUST_LOG`
/// takes precedence over the configured level.
fn init_logging(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

#[instrument(skip_all, fields(path = %cli.htmlfile.display(), capture = %config.capture))]
fn run(cli: &Cli, config: &Config) -> Result<()> {
    let html = std::fs::read(&cli.htmlfile).or_raise(|| ErrorKind::Read(cli.htmlfile.clone()))?;
    let blocks = Extractor::new(config.capture).blocks_from_bytes(&html);
    if blocks.is_empty() {
        tracing::warn!("no preformatted results found");
        return Ok(());
    }
    tracing::info!(blocks = blocks.len(), "extracted preformatted results");
    let mut stdout = std::io::stdout().lock();
    for (index, block) in blocks.iter().enumerate() {
        if index > 0 {
            writeln!(stdout).or_raise(|| ErrorKind::Write)?;
        }
        writeln!(stdout, "{block}").or_raise(|| ErrorKind::Write)?;
    }
    stdout.flush().or_raise(|| ErrorKind::Write)
}
