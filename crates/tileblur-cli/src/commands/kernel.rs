//! Kernel command
//!
//! Prints the normalized Gaussian kernel and the sum of its weights.

use crate::KernelArgs;
use anyhow::{Context, Result};
#[allow(unused_imports)]
use tracing::{debug, info, trace};
use tileblur_ops::GaussianKernel;

pub fn run(args: KernelArgs, verbose: u8) -> Result<()> {
    trace!(?args, "kernel::run");

    let kernel = GaussianKernel::new(args.radius, args.sigma)
        .context("Invalid kernel parameters")?;

    println!("Gaussian kernel {0}x{0} (radius {1}, sigma {2})", kernel.side(), kernel.radius(), kernel.sigma());
    for row in kernel.weights().chunks_exact(kernel.side()) {
        let line: Vec<String> = row.iter().map(|w| format!("{w:.6}")).collect();
        println!("  {}", line.join(" "));
    }
    println!("sum = {:.8}", kernel.sum());

    if verbose > 0 {
        println!("center weight = {:.8}", kernel.weight(0, 0));
    }

    Ok(())
}
