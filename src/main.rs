//! `exticon` CLI - Generate browser-extension icons from a logo.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use exticon::{Config, IconReport, IconResizer};

/// Generate 16x16, 48x48 and 128x128 PNG icons for a browser extension.
#[derive(Parser, Debug)]
#[command(name = "exticon")]
#[command(version, about, long_about = None)]
struct Args {
    /// Source logo image.
    #[arg(value_name = "SOURCE", default_value = exticon::pipeline::DEFAULT_SOURCE)]
    source: PathBuf,

    /// Directory the icons are written to.
    #[arg(
        short,
        long,
        default_value = exticon::pipeline::DEFAULT_OUTPUT_DIR,
        value_name = "DIR"
    )]
    output_dir: PathBuf,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("exticon={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match run(&args) {
        Ok(report) => {
            print_summary(&args, &report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("{err:#}");
            eprintln!("Icon generation failed");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<IconReport> {
    let config = Config {
        source: args.source.clone(),
        output_dir: args.output_dir.clone(),
        ..Config::default()
    };

    let resizer = IconResizer::new(config).context("Invalid configuration")?;

    resizer
        .run()
        .with_context(|| format!("Failed to generate icons from {}", args.source.display()))
}

fn print_summary(args: &Args, report: &IconReport) {
    let output_dir =
        std::fs::canonicalize(&args.output_dir).unwrap_or_else(|_| args.output_dir.clone());

    println!("All icons saved in: {}", output_dir.display());
    println!("Generated files:");
    for icon in &report.icons {
        let name = icon.path.file_name().map_or_else(
            || icon.path.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        );
        println!("  {name} ({size}x{size}) - {bytes} bytes", size = icon.size, bytes = icon.bytes);
    }

    if !report.advisories.is_empty() {
        println!("Warnings:");
        for advisory in &report.advisories {
            println!("  {advisory}");
        }
    }

    println!("Tips for best results:");
    for tip in exticon::pipeline::source_tips(exticon::pipeline::RECOMMENDED_MIN_EDGE) {
        println!("  - {tip}");
    }
}
