//! tileblur - serial vs. tiled-parallel Gaussian blur
//!
//! Blurs a random RGB image once on the calling thread and once split into
//! one tile per worker, then checks the two results are identical.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

/// Default image width.
pub const DEFAULT_WIDTH: usize = 3123;
/// Default image height.
pub const DEFAULT_HEIGHT: usize = 4967;
/// Default kernel radius.
pub const DEFAULT_RADIUS: usize = 1;
/// Default kernel sigma.
pub const DEFAULT_SIGMA: f32 = 6.0;
/// Default worker count.
pub const DEFAULT_WORKERS: usize = 4;

#[derive(Parser)]
#[command(name = "tileblur")]
#[command(author, version, about = "Serial vs. tiled-parallel Gaussian blur")]
#[command(long_about = "
Blurs a randomly generated RGB image with a normalized Gaussian kernel,
once serially and once with the image split into one rectangular tile per
worker, and reports both timings and whether the outputs are identical.

Runs `compare` with default settings when no subcommand is given.

Examples:
  tileblur                                  # 3123x4967, radius 1, sigma 6, 4 workers
  tileblur compare -W 1920 -H 1080 -j 8     # custom size and worker count
  tileblur compare -r 3 -s 2.5 --seed 42    # reproducible source image
  tileblur compare --strict                 # exit non-zero on mismatch
  tileblur tiles -W 10 -H 10 -j 4           # show the 2x2 decomposition
  tileblur kernel -r 2 -s 1.5               # print kernel weights
")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbose output (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the serial and parallel blur and compare them
    #[command(visible_alias = "c")]
    Compare(CompareArgs),

    /// Print the work decomposition for an image size and worker count
    #[command(visible_alias = "t")]
    Tiles(TilesArgs),

    /// Print the normalized Gaussian kernel
    #[command(visible_alias = "k")]
    Kernel(KernelArgs),
}

/// Arguments for the `compare` command.
#[derive(Args, Debug, Clone)]
struct CompareArgs {
    /// Image width
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Image height
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Kernel radius (window side = 2 * radius + 1)
    #[arg(short, long, default_value_t = DEFAULT_RADIUS)]
    radius: usize,

    /// Kernel sigma (must be > 0)
    #[arg(short, long, default_value_t = DEFAULT_SIGMA)]
    sigma: f32,

    /// Number of workers (one tile each)
    #[arg(short = 'j', long, default_value_t = DEFAULT_WORKERS)]
    workers: usize,

    /// Seed for the random source image (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Repeat each timed run and report the fastest
    #[arg(long, default_value_t = 1)]
    runs: usize,

    /// Exit with an error if the results differ
    #[arg(long)]
    strict: bool,
}

impl Default for CompareArgs {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            radius: DEFAULT_RADIUS,
            sigma: DEFAULT_SIGMA,
            workers: DEFAULT_WORKERS,
            seed: None,
            runs: 1,
            strict: false,
        }
    }
}

/// Arguments for the `tiles` command.
#[derive(Args, Debug, Clone)]
struct TilesArgs {
    /// Image width
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Image height
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Number of workers
    #[arg(short = 'j', long, default_value_t = DEFAULT_WORKERS)]
    workers: usize,
}

/// Arguments for the `kernel` command.
#[derive(Args, Debug, Clone)]
struct KernelArgs {
    /// Kernel radius
    #[arg(short, long, default_value_t = DEFAULT_RADIUS)]
    radius: usize,

    /// Kernel sigma (must be > 0)
    #[arg(short, long, default_value_t = DEFAULT_SIGMA)]
    sigma: f32,
}

fn init_logging(verbose: u8) -> Result<()> {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .context("Invalid log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{e}"))
        .context("Failed to install logger")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match cli.command {
        None => commands::compare::run(CompareArgs::default(), cli.verbose),
        Some(Commands::Compare(args)) => commands::compare::run(args, cli.verbose),
        Some(Commands::Tiles(args)) => commands::tiles::run(args, cli.verbose),
        Some(Commands::Kernel(args)) => commands::kernel::run(args, cli.verbose),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_compare_matches_flags() {
        let cli = Cli::try_parse_from(["tileblur", "compare"]).unwrap();
        let Some(Commands::Compare(args)) = cli.command else {
            panic!("expected compare");
        };
        let defaults = CompareArgs::default();
        assert_eq!(args.width, defaults.width);
        assert_eq!(args.height, defaults.height);
        assert_eq!(args.radius, defaults.radius);
        assert_eq!(args.sigma, defaults.sigma);
        assert_eq!(args.workers, defaults.workers);
        assert_eq!(args.runs, defaults.runs);
        assert!(!args.strict);
    }

    #[test]
    fn test_parse_compare_flags() {
        let cli = Cli::try_parse_from([
            "tileblur", "-vv", "compare", "-W", "64", "-H", "32", "-r", "2", "-s", "1.5", "-j", "6",
            "--seed", "9", "--strict",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Some(Commands::Compare(args)) = cli.command else {
            panic!("expected compare");
        };
        assert_eq!((args.width, args.height, args.radius, args.workers), (64, 32, 2, 6));
        assert_eq!(args.sigma, 1.5);
        assert_eq!(args.seed, Some(9));
        assert!(args.strict);
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["tileblur"]).unwrap();
        assert!(cli.command.is_none());
    }
}
