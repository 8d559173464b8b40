//! Tiles command
//!
//! Prints the work decomposition without blurring anything.

use crate::TilesArgs;
use anyhow::{Context, Result};
#[allow(unused_imports)]
use tracing::{debug, info, trace};
use tileblur_ops::Decomposition;

pub fn run(args: TilesArgs, verbose: u8) -> Result<()> {
    trace!(?args, "tiles::run");

    let d = Decomposition::new(args.width, args.height, args.workers)
        .context("Invalid work decomposition")?;

    println!("Image {}x{}, {} workers -> {}x{} grid", args.width, args.height, args.workers, d.row_groups(), d.col_groups());
    println!("  row lengths:    {:?}", d.row_lengths());
    println!("  column lengths: {:?}", d.col_lengths());
    for (i, region) in d.iter().enumerate() {
        if region.is_empty() {
            println!("  tile {i:>3}: {region} (empty)");
        } else {
            println!("  tile {i:>3}: {region}");
        }
    }

    if verbose > 0 {
        let largest = d.iter().map(|r| r.area()).max().unwrap_or(0);
        let smallest = d.iter().map(|r| r.area()).min().unwrap_or(0);
        println!("  area range:     {smallest}..={largest} pixels");
        println!("  exact cover:    {}", d.covers_exactly());
    }

    Ok(())
}
