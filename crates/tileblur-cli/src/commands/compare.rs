//! Compare command
//!
//! Blurs a random image serially and with one tile per worker, reports both
//! timings and checks that the outputs are identical.

use crate::CompareArgs;
use anyhow::{Context, Result};
use rand::Rng;
#[allow(unused_imports)]
use tracing::{debug, info, trace, warn};
use tileblur_ops::{blur_serial, ensure_equal, first_mismatch, run_parallel, Decomposition, GaussianKernel};

pub fn run(args: CompareArgs, verbose: u8) -> Result<()> {
    trace!(?args, "compare::run");

    let kernel = GaussianKernel::new(args.radius, args.sigma)
        .context("Invalid kernel parameters")?;
    let decomposition = Decomposition::new(args.width, args.height, args.workers)
        .context("Invalid work decomposition")?;

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    info!(seed, width = args.width, height = args.height, "Generating source image");
    let src = super::random_image(args.width, args.height, seed)?;

    info!(radius = args.radius, sigma = args.sigma, runs = args.runs, "Serial blur");
    let (serial, serial_time) = super::time_best(args.runs, || Ok(blur_serial(&src, &kernel)))?;

    info!(workers = args.workers, grid = %format!("{}x{}", decomposition.row_groups(), decomposition.col_groups()), "Parallel blur");
    let (parallel, parallel_time) = super::time_best(args.runs, || {
        run_parallel(&src, &decomposition, &kernel).context("Parallel blur failed")
    })?;

    println!("(width, height) = ({}, {})", args.width, args.height);
    println!("workers =          {} ({}x{} tiles)", args.workers, decomposition.row_groups(), decomposition.col_groups());
    println!("Kernel radius =    {} (sigma {})", args.radius, args.sigma);
    if verbose > 0 {
        println!("Seed =             {seed}");
        for (i, region) in decomposition.iter().enumerate() {
            println!("  tile {i:>3}: {region}");
        }
    }
    println!("Filtering (non-parallel):       {}", super::format_ms(serial_time));
    println!("Filtering (parallel-block):     {}", super::format_ms(parallel_time));
    println!(
        "Acceleration (block):           {:.3}",
        serial_time.as_secs_f64() / parallel_time.as_secs_f64().max(f64::MIN_POSITIVE)
    );

    match ensure_equal(&serial, &parallel) {
        Ok(()) => {
            println!("Serial and parallel results are identical.");
            Ok(())
        }
        Err(e) => {
            if let Some(m) = first_mismatch(&serial, &parallel) {
                warn!(%m, "Serial and parallel results differ");
            }
            println!("WARNING: The results of serial and parallel algorithms are NOT identical ({e}).");
            if args.strict {
                return Err(e).context("Serial and parallel results differ");
            }
            Ok(())
        }
    }
}
