//! # CLI Execution Functions
//!
//! Extracted from `main.rs` to keep the entry point slim. Collects candidate
//! integers from argv or stdin, classifies them (in parallel for batches),
//! and renders text or line-oriented JSON verdicts.

use std::io::{Read, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use primecheck::{classify, Verdict};

use super::Cli;

/// One classification result, emitted per line in `--json` mode.
#[derive(Serialize)]
struct Report {
    candidate: i64,
    verdict: Verdict,
}

/// Classify every candidate and render verdicts in input order.
pub fn run_classify(cli: &Cli) -> Result<()> {
    let candidates = if cli.candidates.is_empty() {
        read_candidates_stdin()?
    } else {
        cli.candidates.clone()
    };

    if candidates.is_empty() {
        warn!("no candidates supplied");
        return Ok(());
    }

    if !cli.quiet {
        info!(
            count = candidates.len(),
            threads = rayon::current_num_threads(),
            "classifying candidates"
        );
    }

    let start = Instant::now();
    let verdicts: Vec<Verdict> = candidates.par_iter().map(|&n| classify(n)).collect();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for (&candidate, &verdict) in candidates.iter().zip(&verdicts) {
        if cli.json {
            serde_json::to_writer(&mut out, &Report { candidate, verdict })?;
            writeln!(out)?;
        } else {
            writeln!(out, "{} is {}", candidate, verdict)?;
        }
    }

    if !cli.quiet {
        let primes = verdicts.iter().filter(|v| v.is_prime()).count();
        info!(
            tested = candidates.len(),
            primes,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "classification complete"
        );
    }
    Ok(())
}

/// Read whitespace-separated candidates from stdin (the no-argument mode).
fn read_candidates_stdin() -> Result<Vec<i64>> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("reading candidates from stdin")?;
    input
        .split_whitespace()
        .map(|tok| {
            tok.parse::<i64>()
                .with_context(|| format!("invalid candidate {:?}", tok))
        })
        .collect()
}

/// Configure the global rayon thread pool. 0 means all logical cores.
pub fn configure_rayon(threads: usize) {
    let result = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global();
    if let Err(e) = result {
        warn!(error = %e, "could not configure rayon thread pool");
    }
}
