//! Times naive, blocked and loop-interchanged transposes of an n × n matrix.
//!
//! Usage: `transpose <dimension>`

use std::io;

use matmul_cache::driver::{RunConfig, run_transpose_benchmark};
use matmul_cache::{cli, logging};

fn main() -> anyhow::Result<()> {
    logging::init_tracing(logging::TracingConfig::default())?;

    let Some(n) = cli::dimension_from_env() else {
        return Ok(());
    };

    let mut config = RunConfig::new(n);
    run_transpose_benchmark(&mut config, &mut io::stdout().lock())?;
    Ok(())
}
