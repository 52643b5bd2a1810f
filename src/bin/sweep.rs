//! Times blocked multiplication across matrix and block sizes and writes a CSV.
//!
//! Usage: `sweep --matrix-sizes 64,128,256 --block-sizes 4,8,16 [--output runtimes.csv]`

use std::fs::File;
use std::io::BufWriter;

use anyhow::Context;
use clap::Parser;
use matmul_cache::cli::SweepArgs;
use matmul_cache::driver::{SweepConfig, run_block_sweep};
use matmul_cache::logging;

fn main() -> anyhow::Result<()> {
    logging::init_tracing(logging::TracingConfig::default())?;

    let args = SweepArgs::parse();
    let file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;

    let config = SweepConfig {
        matrix_sizes: args.matrix_sizes,
        block_sizes: args.block_sizes,
    };
    let rows = run_block_sweep(&config, BufWriter::new(file))?;
    println!("wrote {} cases to {}", rows.len(), args.output.display());
    Ok(())
}
