//! Times the four multiplication variants on n × n matrices.
//!
//! Usage: `matmult <dimension>`

use std::io;

use matmul_cache::driver::{RunConfig, run_matmult_benchmark};
use matmul_cache::{cli, logging};

fn main() -> anyhow::Result<()> {
    logging::init_tracing(logging::TracingConfig::default())?;

    let Some(n) = cli::dimension_from_env() else {
        return Ok(());
    };

    let mut config = RunConfig::new(n);
    run_matmult_benchmark(&mut config, &mut io::stdout().lock())?;
    Ok(())
}
