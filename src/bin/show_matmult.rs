//! Prints the result of every multiplication variant for a sequential n × n input.
//!
//! Build with `--features short-circuit` to see a partial blocked product.

use std::io;

use matmul_cache::driver::{RunConfig, show_matmult};
use matmul_cache::{cli, logging};

fn main() -> anyhow::Result<()> {
    logging::init_tracing(logging::TracingConfig::default())?;

    let Some(n) = cli::dimension_from_env() else {
        return Ok(());
    };

    show_matmult(&mut RunConfig::new(n), &mut io::stdout().lock())?;
    Ok(())
}
