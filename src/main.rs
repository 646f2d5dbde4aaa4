//! # Main — CLI Entry Point
//!
//! The shell around the numeric core: obtains candidate integers (positional
//! arguments, or whitespace-separated stdin when none are given), hands them
//! to `cli::run_classify`, and renders one verdict line per candidate.
//!
//! ## Global Options
//!
//! - `--json`: one serialized record per candidate instead of text.
//! - `--threads` / `PRIMECHECK_THREADS`: rayon pool size (0 = all cores).
//! - `--quiet`: suppress the startup and summary log lines.
//! - `LOG_FORMAT=json`: structured JSON logs instead of human-readable.

mod cli;

use anyhow::Result;
use clap::Parser;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(
    name = "primecheck",
    about = "Deterministic primality verdicts for 64-bit integers",
    version
)]
struct Cli {
    /// Candidate integers to classify; reads whitespace-separated candidates
    /// from stdin when none are given
    #[arg(value_name = "CANDIDATE", allow_negative_numbers = true)]
    candidates: Vec<i64>,

    /// Emit one JSON record per candidate instead of text
    #[arg(long)]
    json: bool,

    /// Number of rayon worker threads (0 = all logical cores)
    #[arg(long, env = "PRIMECHECK_THREADS", default_value_t = 0)]
    threads: usize,

    /// Suppress startup and summary log lines
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    // Initialize structured logging: LOG_FORMAT=json for machine ingestion,
    // human-readable to stderr otherwise
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt().json().with_target(false).init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    let cli = Cli::parse();
    cli::configure_rayon(cli.threads);
    cli::run_classify(&cli)
}
