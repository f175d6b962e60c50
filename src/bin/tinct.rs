//! tinct - apply a grayscale, invert, or sepia filter to an image file
//!
//! Logging goes through `tracing`; set `RUST_LOG` to override the level.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tinct::Filter;
use tracing::{debug, error, info};

#[derive(Parser)]
#[command(name = "tinct")]
#[command(author, version, about = "Grayscale, invert, and sepia filters for image files")]
#[command(long_about = "
Decode an image, apply one color filter, and write the result.

Examples:
  tinct apply sepia photo.jpg                 # writes photo-sepia.png
  tinct apply grayscale in.png -o gray.png
  tinct -j 4 apply invert scan.png -o negative.png
  tinct filters                               # list available filters
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a filter to an image file
    #[command(visible_alias = "a")]
    Apply(ApplyArgs),

    /// List available filters
    Filters,
}

#[derive(Args)]
struct ApplyArgs {
    /// Filter: grayscale, invert, sepia
    #[arg(value_parser = parse_filter)]
    filter: Filter,

    /// Input image
    input: PathBuf,

    /// Output image (default: <input stem>-<filter>.png next to the input)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn parse_filter(s: &str) -> Result<Filter, tinct::UnknownFilter> {
    s.parse()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::Apply(args) => apply(args),
        Commands::Filters => {
            for f in Filter::ALL {
                println!("{:<10} {}", f.name(), f.description());
            }
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback)),
        )
        .init();
}

fn apply(args: ApplyArgs) -> Result<()> {
    let name = display_name(&args.input);

    let source = match tinct::io::load(&args.input) {
        Ok(bitmap) => {
            info!("Image loaded: {name}");
            bitmap
        }
        Err(e) => {
            error!("Failed to load image file: {name}");
            return Err(e).with_context(|| format!("Failed to load: {}", args.input.display()));
        }
    };
    debug!(width = source.width(), height = source.height(), "decoded");

    let processed = tinct::img::par_apply(args.filter, source.as_ref());
    info!("Image processed: {}", args.filter);

    let output = args
        .output
        .unwrap_or_else(|| default_output(&args.input, args.filter));
    tinct::io::save(&output, processed.as_ref())
        .with_context(|| format!("Failed to save: {}", output.display()))?;
    info!("Saved: {}", output.display());

    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn default_output(input: &Path, filter: Filter) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".into());
    input.with_file_name(format!("{stem}-{filter}.png"))
}
