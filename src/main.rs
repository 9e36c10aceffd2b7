use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use detection_eval::{evaluate_directories, EvalConfig};
use tracing_subscriber::{fmt, EnvFilter};

/// Score detection predictions against ground truth annotations
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML file with an [evaluation] table
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding ground truth annotation files
    #[arg(long)]
    annotations: Option<PathBuf>,

    /// Directory holding prediction files
    #[arg(long)]
    predictions: Option<PathBuf>,

    /// Minimum IoU (exclusive) for a prediction to count as a match
    #[arg(long)]
    iou_threshold: Option<f64>,

    /// Prefix prepended to a ground truth file name to find its predictions
    #[arg(long)]
    prefix: Option<String>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = build_config(&cli)?;
    let report = evaluate_directories(&config).with_context(|| {
        format!("evaluating {}", config.annotations_dir.display())
    })?;

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}

fn build_config(cli: &Cli) -> Result<EvalConfig> {
    let mut config = match &cli.config {
        Some(path) => EvalConfig::from_toml_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EvalConfig::default(),
    };

    if let Some(dir) = &cli.annotations {
        config.annotations_dir = dir.clone();
    }
    if let Some(dir) = &cli.predictions {
        config.predictions_dir = dir.clone();
    }
    if let Some(threshold) = cli.iou_threshold {
        config.iou_threshold = threshold;
    }
    if let Some(prefix) = &cli.prefix {
        config.prediction_prefix = prefix.clone();
    }

    config.validate()?;
    Ok(config)
}
