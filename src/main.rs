//! `pdfslabs` command line: split a PDF and print its chunks as JSON.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use pdfslabs::output::{to_json, ChunksOutput, ErrorOutput, MISSING_PATH};
use pdfslabs::{parse_pdf, ChunkingConfig};

/// Split a PDF into page-scoped text chunks and print them as JSON.
#[derive(Debug, Parser)]
#[command(name = "pdfslabs", version, about)]
struct Cli {
    /// PDF file to split.
    #[arg(allow_hyphen_values = true)]
    pdf_path: Option<PathBuf>,

    /// Further positional arguments, accepted and ignored.
    #[arg(hide = true, allow_hyphen_values = true)]
    ignored: Vec<OsString>,

    /// Maximum chunk length in characters.
    #[arg(long, env = "PDFSLABS_CHUNK_SIZE", default_value_t = ChunkingConfig::DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,

    /// Characters shared by adjacent chunks of a page.
    #[arg(long, env = "PDFSLABS_CHUNK_OVERLAP", default_value_t = 0)]
    chunk_overlap: usize,

    /// Drop chunks shorter than this many characters.
    #[arg(long, env = "PDFSLABS_MIN_CHUNK_CHARS", default_value_t = 0)]
    min_chunk_chars: usize,

    /// Clean page text (NULs, line endings, repeated blanks) before splitting.
    #[arg(long, env = "PDFSLABS_SANITIZE")]
    sanitize: bool,
}

impl Cli {
    fn config(&self) -> ChunkingConfig {
        ChunkingConfig {
            chunk_size: self.chunk_size,
            chunk_overlap: self.chunk_overlap,
            min_chunk_chars: self.min_chunk_chars,
            sanitize: self.sanitize,
        }
    }
}

fn main() -> ExitCode {
    // stdout carries the JSON, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if !cli.ignored.is_empty() {
        warn!(count = cli.ignored.len(), "ignoring extra arguments");
    }

    let Some(pdf_path) = cli.pdf_path.as_ref() else {
        let missing = to_json(&ErrorOutput { error: MISSING_PATH })
            .map_err(anyhow::Error::from)
            .and_then(|json| emit(&json));
        return match missing {
            Ok(()) => ExitCode::FAILURE,
            Err(err) => report(&err),
        };
    };

    match run(pdf_path, &cli.config()).and_then(|json| emit(&json)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

fn run(pdf_path: &Path, config: &ChunkingConfig) -> Result<String> {
    info!(path = %pdf_path.display(), ?config, "splitting pdf");

    let chunks = parse_pdf(pdf_path, config)
        .with_context(|| format!("could not split {}", pdf_path.display()))?;
    let json = to_json(&ChunksOutput { chunks: &chunks }).context("could not encode chunks")?;
    Ok(json)
}

/// Write one line of JSON to stdout.
fn emit(json: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}")
        .and_then(|()| stdout.flush())
        .context("could not write output")
}

fn report(err: &anyhow::Error) -> ExitCode {
    eprintln!("Error: {err:#}");
    ExitCode::FAILURE
}
