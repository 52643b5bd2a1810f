//! Prints a sequential n × n matrix next to its naive and blocked transposes.

use std::io;

use matmul_cache::driver::{RunConfig, show_transpose};
use matmul_cache::{cli, logging};

fn main() -> anyhow::Result<()> {
    logging::init_tracing(logging::TracingConfig::default())?;

    let Some(n) = cli::dimension_from_env() else {
        return Ok(());
    };

    show_transpose(&mut RunConfig::new(n), &mut io::stdout().lock())?;
    Ok(())
}
