//! `stackmeans` - cluster a Stack Overflow postings dump and print a report.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use stackmeans::{Params, Pipeline, Report};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Command-line arguments for stackmeans
#[derive(Parser, Debug)]
#[command(name = "stackmeans")]
#[command(about = "Cluster Stack Overflow questions by language and answer score")]
#[command(version)]
struct Args {
    /// Headerless CSV postings file
    input: PathBuf,

    /// Distance between languages along the x axis
    #[arg(long, default_value_t = 50_000)]
    spread: i32,

    /// Number of cluster centers (multiple of the language count)
    #[arg(long, default_value_t = 45)]
    kernels: usize,

    /// Convergence threshold on total center movement
    #[arg(long, default_value_t = 20.0)]
    eta: f64,

    /// Iteration cap for k-means
    #[arg(long, default_value_t = 120)]
    max_iterations: usize,

    /// Comma-separated tracked languages, in index order
    #[arg(long, value_delimiter = ',', env = "STACKMEANS_LANGUAGES")]
    languages: Option<Vec<String>>,

    /// Seed for uniform sampling when spread is small
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

impl Args {
    fn params(&self) -> Params {
        let mut params = Params::new()
            .with_spread(self.spread)
            .with_kernels(self.kernels)
            .with_eta(self.eta)
            .with_max_iterations(self.max_iterations)
            .with_seed(self.seed);
        if let Some(languages) = &self.languages {
            params = params.with_languages(languages.iter().cloned());
        }
        params
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stackmeans=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let params = args.params();
    params.validate().context("Invalid parameters")?;

    info!("Reading postings from {}", args.input.display());
    let file = File::open(&args.input)
        .with_context(|| format!("Failed to open {}", args.input.display()))?;

    let summaries = Pipeline::new(params)
        .run_reader(BufReader::new(file))
        .context("Clustering failed")?;

    match args.format {
        Format::Text => print!("{}", Report(&summaries)),
        Format::Json => println!(
            "{}",
            serde_json::to_string_pretty(&summaries).context("Failed to encode summaries")?
        ),
    }
    Ok(())
}
