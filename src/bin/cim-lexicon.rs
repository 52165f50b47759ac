// Copyright 2025 Cowboy AI, LLC.

//! Command-line front end for phrase classification
//!
//! ```bash
//! # classify against the bundled taxonomy at depth 2
//! cim-lexicon --depth 2 "I love tigers, horses and gorillas"
//!
//! # another taxonomy, JSON output, timing diagnostics
//! cim-lexicon --taxonomy my.json --depth 3 --format json --verbose "..."
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use cim_lexicon::pipeline::{self, RunOutcome};
use cim_lexicon::{Depth, JsonFileSource, DEFAULT_TAXONOMY_PATH};

#[derive(Parser)]
#[command(name = "cim-lexicon")]
#[command(version)]
#[command(about = "Classify the words of a phrase against a nested taxonomy")]
struct Cli {
    /// Phrase to classify
    phrase: String,

    /// Taxonomy level to match at (1 = top-level categories)
    #[arg(long)]
    depth: Depth,

    /// Taxonomy JSON file; a relative path is tried under the working
    /// directory first, then next to this executable
    #[arg(long, env = "CIM_LEXICON_TAXONOMY", default_value = DEFAULT_TAXONOMY_PATH)]
    taxonomy: PathBuf,

    /// Output format
    #[arg(long, short = 'o', default_value = "text", value_enum)]
    format: OutputFormat,

    /// Print timing diagnostics and enable debug logging
    #[arg(long, short)]
    verbose: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_outcome(cli: &Cli, outcome: &RunOutcome) -> anyhow::Result<()> {
    let report = &outcome.report;
    match cli.format {
        OutputFormat::Json => {
            println!("{}", report.to_json_pretty().context("rendering JSON report")?);
        }
        OutputFormat::Text => {
            println!("Phrase: {}", report.phrase);
            println!("Depth: {}", report.depth);
            println!("{}", report.render_text());
        }
    }

    if cli.verbose {
        println!("Taxonomy load time: {}ms", outcome.timings.load.as_millis());
        println!("Classification time: {}ms", outcome.timings.classify.as_millis());
    }
    Ok(())
}

async fn execute(cli: &Cli) -> anyhow::Result<()> {
    let source = JsonFileSource::located(&cli.taxonomy);
    let outcome = pipeline::run(&source, &cli.phrase, cli.depth)
        .await
        .with_context(|| format!("classifying against {}", cli.taxonomy.display()))?;
    print_outcome(cli, &outcome)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match execute(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
