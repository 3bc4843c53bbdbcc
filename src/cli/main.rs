// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/**
 * Pilvi - Cloud Storage Exposure Scanner
 * Standalone CLI for bucket discovery across 10 storage providers
 *
 * (c) 2026 Bountyy Oy
 */

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};

use pilvi_scanner::config::{EngineConfig, MAX_DOMAINS_FROM_FILE};
use pilvi_scanner::engine::DiscoveryEngine;
use pilvi_scanner::errors::DiscoveryError;
use pilvi_scanner::prober::HttpProber;

/// Pilvi - Cloud Storage Exposure Scanner
#[derive(Parser)]
#[command(name = "pilvi")]
#[command(author = "Bountyy Oy <info@bountyy.fi>")]
#[command(version = "1.2.0")]
#[command(about = "Finds exposed cloud storage buckets from domain names. Fast, unauthenticated, Rust.", long_about = None)]
struct Cli {
    /// Domain(s) to derive bucket candidates from
    domains: Vec<String>,

    /// Newline-delimited domain list, used when no domains are given
    /// (first 50 entries)
    #[arg(short, long, default_value = "domains.txt")]
    input_file: PathBuf,

    /// Maximum concurrent probes
    #[arg(long, default_value = "10")]
    concurrency: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "5")]
    timeout: u64,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Quiet mode - only show the final report
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

#[derive(Clone, Copy, PartialEq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Resolve the domain list: positional arguments win; otherwise fall back
/// to the input file, capped at the first 50 usable lines.
fn resolve_domains(cli: &Cli) -> Result<Vec<String>, DiscoveryError> {
    if !cli.domains.is_empty() {
        return Ok(cli.domains.clone());
    }

    let path = cli.input_file.display().to_string();
    let content = std::fs::read_to_string(&cli.input_file)
        .map_err(|source| DiscoveryError::MissingInput { path: path.clone(), source })?;

    let domains: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(MAX_DOMAINS_FROM_FILE)
        .map(str::to_string)
        .collect();

    if domains.is_empty() {
        return Err(DiscoveryError::EmptyInput { path });
    }

    Ok(domains)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.debug {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    let domains = match resolve_domains(&cli) {
        Ok(domains) => domains,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("Usage: pilvi <domain1> <domain2> ...");
            eprintln!("Or provide a domain list file via --input-file (default: domains.txt)");
            std::process::exit(1);
        }
    };

    eprintln!("[*] Starting cloud asset discovery for {} domains", domains.len());

    let config = EngineConfig {
        max_concurrency: cli.concurrency,
        timeout_secs: cli.timeout,
    };
    let prober = Arc::new(HttpProber::new(config.timeout_secs)?);
    let engine = DiscoveryEngine::new(prober, config);

    let report = engine.run(&domains).await;
    info!(
        "Scan finished: {} findings, {} printable",
        report.entries().len(),
        report.printable_entries().len()
    );

    let rendered = match cli.format {
        OutputFormat::Text => report.render_text(),
        OutputFormat::Json => report.render_json()?,
    };

    match cli.output {
        Some(path) => {
            std::fs::write(&path, rendered)?;
            eprintln!("[*] Report written to {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
