//! cssrebase CLI
//!
//! Reads one complete CSS document, rewrites region-scoped relative URLs,
//! and writes the result. The whole input is buffered before transforming;
//! the core does not accept fragments split mid-rule.

use anyhow::{Context, Result};
use clap::Parser;
use rebase_core::Rebaser;
use rebase_css::ScannerEngine;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(
    name = "cssrebase",
    version,
    about = "Rewrite region-scoped relative URLs in CSS stylesheets"
)]
struct Args {
    /// Input CSS file (reads stdin when omitted).
    input: Option<PathBuf>,

    /// Output file (writes stdout when omitted).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Marker format token; the trailing colon is part of the token.
    #[arg(long, default_value = rebase_core::DEFAULT_FORMAT)]
    format: String,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();

    let css = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            let _ = io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };

    let rebaser = Rebaser::with_format(ScannerEngine, &args.format)?;
    let output = rebaser.transform_with_observer(&css, |path| {
        tracing::info!(path, "rebased");
    })?;

    match &args.output {
        Some(path) => fs::write(path, output)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => io::stdout()
            .write_all(output.as_bytes())
            .context("failed to write stdout")?,
    }

    Ok(())
}
