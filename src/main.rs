use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use slic_superpixels::GridLayout;
use superpix::codec::ppm;
use superpix::models::{AppConfig, CONFIG_ENV};
use superpix::services::{write_report, SegmentPipeline};

#[derive(Parser)]
#[command(name = "superpix")]
#[command(about = "SLIC superpixel segmentation for binary PPM images")]
#[command(version)]
struct Cli {
    /// YAML config file (falls back to $SUPERPIX_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Segment an image and write it recolored with superpixel mean colors
    Segment {
        /// Input P6 PPM file
        input: PathBuf,

        /// Output P6 PPM file
        output: PathBuf,

        /// Requested number of superpixels
        #[arg(short = 'k', long = "superpixels")]
        superpixels: Option<u32>,

        /// Compactness weight of the color term
        #[arg(short = 'm', long)]
        compactness: Option<f32>,

        /// Maximum number of sweeps (0 or negative for no limit)
        #[arg(long, allow_hyphen_values = true)]
        max_iterations: Option<i64>,

        /// Write segmentation metadata as JSON to this path
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Show image dimensions and the superpixel grid for K
    Info {
        /// Input P6 PPM file
        input: PathBuf,

        /// Requested number of superpixels
        #[arg(short = 'k', long = "superpixels")]
        superpixels: Option<u32>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "superpix=info,slic_superpixels=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config_path = AppConfig::locate(cli.config);
    let config = AppConfig::load_or_default(config_path.as_deref()).with_context(|| {
        format!(
            "Failed to load configuration from {}",
            config_path
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_default()
        )
    })?;

    match cli.command {
        Some(Commands::Segment {
            input,
            output,
            superpixels,
            compactness,
            max_iterations,
            report,
        }) => {
            let settings = config
                .segmentation
                .with_overrides(superpixels, compactness, max_iterations);
            run_segment_command(
                &SegmentPipeline::from_config(&settings),
                &input,
                &output,
                report.as_deref(),
            )
        }
        Some(Commands::Info { input, superpixels }) => run_info_command(
            &input,
            superpixels.unwrap_or(config.segmentation.num_superpixels),
        ),
        None => run_status_command(&config, config_path.as_deref()),
    }
}

/// Segment one file, optionally writing the JSON report
fn run_segment_command(
    pipeline: &SegmentPipeline,
    input: &Path,
    output: &Path,
    report: Option<&Path>,
) -> anyhow::Result<()> {
    let outcome = pipeline.run(input, output)?;
    let segmentation = &outcome.segmentation;

    let termination = if segmentation.converged() {
        "converged"
    } else {
        "iteration limit"
    };
    println!(
        "{} -> {}: {} superpixels, {} iterations ({termination})",
        input.display(),
        output.display(),
        segmentation.centroids().len(),
        segmentation.iterations(),
    );
    println!("Elapsed: {:.3} ms", outcome.elapsed.as_secs_f64() * 1000.0);

    if let Some(path) = report {
        write_report(&outcome, path)?;
        println!("Report:  {}", path.display());
    }

    Ok(())
}

/// Print image dimensions and the grid the requested K produces
fn run_info_command(input: &Path, num_superpixels: u32) -> anyhow::Result<()> {
    let image =
        ppm::load(input).with_context(|| format!("Failed to load {}", input.display()))?;
    let layout = GridLayout::new(image.width(), image.height(), num_superpixels)?;

    println!("Image:       {}", input.display());
    println!(
        "Dimensions:  {}x{} ({} pixels)",
        image.width(),
        image.height(),
        image.len()
    );
    println!("Requested:   {num_superpixels} superpixels");
    println!(
        "Grid:        {} x {} cells ({} superpixels)",
        layout.cells_across_width(),
        layout.cells_across_height(),
        layout.len()
    );
    println!(
        "Cell size:   {:.2} x {:.2} px",
        layout.cell_width(),
        layout.cell_height()
    );

    Ok(())
}

/// Print the effective configuration
fn run_status_command(config: &AppConfig, config_path: Option<&Path>) -> anyhow::Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Superpix v{VERSION} - SLIC superpixel segmentation\n");

    let source = match config_path {
        Some(path) => path.display().to_string(),
        None => format!("built-in defaults (set --config or {CONFIG_ENV})"),
    };
    println!("Configuration: {source}");
    print!("{}", serde_yaml::to_string(config)?);

    println!("\nUsage:");
    println!("  superpix segment <INPUT> <OUTPUT> [-k N] [-m M] [--max-iterations N]");
    println!("  superpix info <INPUT> [-k N]");
    println!("  superpix --help");

    Ok(())
}
