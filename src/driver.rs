//! Benchmark and inspection drivers behind the binaries.
//!
//! Every driver writes its report to a caller-supplied `io::Write`, which is
//! stdout in the binaries and a `Vec<u8>` in tests.

use std::io::Write;

use tracing::{debug, info};

use crate::blocked::{BLOCK_SIZE, ShortCircuit, matmult_tiled, transpose_tiled};
use crate::display::{
    format_grid, format_matmult_results, format_product, format_transpose_results,
};
use crate::error::Result;
use crate::matrix::naive_ijk::{matmult, matmult_cm};
use crate::matrix::naive_ikj::matmult_li;
use crate::matrix::transpose::{transpose, transpose_li};
use crate::matrix::{Layout, Matrix};
use crate::timing::{MatmulTimings, TransposeTimings, time_millis};

/// Largest `n` for which the multiplication benchmark prints A * B = C.
pub const MATMULT_VERBOSE_LIMIT: usize = 8;
/// Largest `n` for which the transpose benchmark prints M and M_t.
pub const TRANSPOSE_VERBOSE_LIMIT: usize = 16;

const RULE_TEST: &str = "----------------------------";
const RULE_BLOCK: &str = "--------------------------------------------------------";
const RULE_SECTION: &str = "----------------------------------------------------------";
const RULE_SHORT: &str = "-------------------------------------";

/// Parameters of one driver run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Matrix dimension
    pub n: usize,
    /// Tile edge for the blocked variants
    pub block: usize,
    /// Probe handed to the blocked variants
    pub probe: ShortCircuit,
}

impl RunConfig {
    /// `n × n` run with the build-time block size and short-circuit setting.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            block: BLOCK_SIZE,
            probe: ShortCircuit::default(),
        }
    }

    pub fn with_block(mut self, block: usize) -> Self {
        self.block = block;
        self
    }

    pub fn with_probe(mut self, probe: ShortCircuit) -> Self {
        self.probe = probe;
        self
    }

    fn shortcircuit_label(&self) -> &'static str {
        if self.probe.is_enabled() { "" } else { "no " }
    }
}

/// Times `f` and logs the result under `variant`.
fn timed<F>(variant: &'static str, f: F) -> Result<u64>
where
    F: FnOnce() -> Result<()>,
{
    let (res, ms) = time_millis(f);
    res?;
    debug!(variant, elapsed_ms = ms, "variant finished");
    Ok(ms)
}

/// The storage of `m` drawn as if it were row-major.
///
/// For a transposed buffer this shows the transposed grid, which is what the
/// drivers want to display.
fn storage_grid(m: &Matrix) -> String {
    format_grid(m.n(), m.as_slice(), Layout::RowMajor)
}

/// Times all four multiplication variants on sequential `n × n` inputs.
///
/// C is zeroed before each variant. B is transposed for the realigned run
/// before its clock starts.
pub fn run_matmult_benchmark<W: Write>(
    config: &mut RunConfig,
    out: &mut W,
) -> Result<MatmulTimings> {
    let n = config.n;
    info!(
        n,
        block = config.block,
        short_circuit = config.probe.is_enabled(),
        "matmult benchmark"
    );

    write!(out, "\n(creating test matrices ...")?;
    out.flush()?;
    let a = Matrix::sequential(n)?;
    let b = Matrix::sequential(n)?;
    let mut c = Matrix::sequential(n)?;

    write!(out, " performing benchmark ...")?;
    out.flush()?;

    let mut timings = MatmulTimings::default();

    c.zero();
    timings.naive = timed("naive", || matmult(&a, &b, &mut c))?;

    c.zero();
    timings.interchange = timed("interchange", || matmult_li(&a, &b, &mut c))?;

    let mut b_t = Matrix::sequential(n)?;
    b_t.zero();
    transpose(&b, &mut b_t)?;

    c.zero();
    timings.realigned = timed("realigned", || matmult_cm(&a, &b_t, &mut c))?;

    c.zero();
    let block = config.block;
    let probe = &mut config.probe;
    timings.blocked = timed("blocked", || matmult_tiled(&a, &b, &mut c, block, probe))?;

    write!(out, " done)\n\n")?;

    writeln!(out, "Time to calculate A*B = C, for {} x {} matrices A and B", n, n)?;
    if n <= MATMULT_VERBOSE_LIMIT {
        writeln!(out)?;
        write!(out, "{}", format_product(&a, &b, &c))?;
        writeln!(out)?;
    }

    write!(out, "{}", format_matmult_results(config.block, &timings))?;
    Ok(timings)
}

/// Times naive, blocked and loop-interchanged transposes of a sequential matrix.
pub fn run_transpose_benchmark<W: Write>(
    config: &mut RunConfig,
    out: &mut W,
) -> Result<TransposeTimings> {
    let n = config.n;
    let verbose = n <= TRANSPOSE_VERBOSE_LIMIT;
    info!(
        n,
        block = config.block,
        short_circuit = config.probe.is_enabled(),
        "transpose benchmark"
    );

    write!(out, "\n(creating test matrices ...")?;
    out.flush()?;
    let m = Matrix::sequential(n)?;
    let mut m_t = Matrix::sequential(n)?;

    write!(out, " performing benchmark ...")?;
    out.flush()?;

    let mut timings = TransposeTimings::default();
    timings.naive = timed("naive", || transpose(&m, &mut m_t))?;

    let block = config.block;
    let probe = &mut config.probe;
    timings.blocked = timed("blocked", || transpose_tiled(&m, &mut m_t, block, probe))?;

    write!(out, " done)\n\n")?;

    if verbose {
        write!(out, "\nM:\n{}", storage_grid(&m))?;
        write!(out, "\nM_t:\n{}", storage_grid(&m_t))?;
    }

    writeln!(out, "Time to calculate the transpose of a {} x {} matrix", n, n)?;
    write!(out, "{}", format_transpose_results(n, config.block, &timings))?;

    write!(out, "\n{}\n", RULE_SECTION)?;
    writeln!(out, "   (results with loop interchange version)")?;
    writeln!(out, "{}", RULE_SHORT)?;
    timings.interchange = timed("interchange", || transpose_li(&m, &mut m_t))?;
    if verbose {
        write!(out, "\nM_t:\n{}", storage_grid(&m_t))?;
    }
    write!(out, "  TIME TO COMPLETION = {} msec.\n\n\n", timings.interchange)?;

    Ok(timings)
}

/// Prints the product from every multiplication variant for inspection.
///
/// Returns the blocked result, which is partial when the probe is enabled.
pub fn show_matmult<W: Write>(config: &mut RunConfig, out: &mut W) -> Result<Matrix> {
    let n = config.n;
    let a = Matrix::sequential(n)?;
    let b = Matrix::sequential(n)?;
    let mut c = Matrix::sequential(n)?;

    let mut b_t = Matrix::sequential(n)?;
    b_t.zero();
    transpose(&b, &mut b_t)?;

    c.zero();
    matmult(&a, &b, &mut c)?;
    writeln!(out, "Testing calculation of A*B = C, for {} x {} matrices A and B", n, n)?;
    write!(out, "{}", format_product(&a, &b, &c))?;

    write!(out, "\n{}\n", RULE_TEST)?;
    writeln!(out, "With column-major realignment (no blocking):")?;
    c.zero();
    matmult_cm(&a, &b_t, &mut c)?;
    write!(out, "{}", c)?;

    write!(out, "\n{}\n", RULE_TEST)?;
    writeln!(out, "With loop interchange (no blocking):")?;
    c.zero();
    matmult_li(&a, &b, &mut c)?;
    write!(out, "{}", c)?;

    write!(out, "\n{}\n", RULE_BLOCK)?;
    writeln!(out, "BLOCK SIZE = {}", config.block)?;
    write!(out, "\n{}\n", RULE_TEST)?;
    writeln!(out, "With blocking ({}shortcircuit):", config.shortcircuit_label())?;
    c.zero();
    matmult_tiled(&a, &b, &mut c, config.block, &mut config.probe)?;
    write!(out, "{}", c)?;

    Ok(c)
}

/// Prints M, its naive transpose and its blocked transpose for inspection.
///
/// Returns the blocked result, which is partial when the probe is enabled.
pub fn show_transpose<W: Write>(config: &mut RunConfig, out: &mut W) -> Result<Matrix> {
    let n = config.n;
    let m = Matrix::sequential(n)?;
    let mut m_t = Matrix::sequential(n)?;

    writeln!(out, "Testing transpose of  {} x {} matrix M:", n, n)?;
    write!(out, "{}", storage_grid(&m))?;

    transpose(&m, &mut m_t)?;
    write!(out, "\nM_t:\n{}", storage_grid(&m_t))?;

    write!(out, "\n{}\n", RULE_TEST)?;
    writeln!(
        out,
        "With blocking (block size={},{}shortcircuit):",
        config.block,
        config.shortcircuit_label()
    )?;
    m_t.zero();
    transpose_tiled(&m, &mut m_t, config.block, &mut config.probe)?;
    write!(out, "{}", storage_grid(&m_t))?;

    Ok(m_t)
}

/// Column names of the sweep CSV.
pub const SWEEP_HEADER: [&str; 3] = ["matrix size", "block size", "time"];

/// Matrix and block sizes to cross in [`run_block_sweep`].
#[derive(Debug, Clone, Default)]
pub struct SweepConfig {
    pub matrix_sizes: Vec<usize>,
    pub block_sizes: Vec<usize>,
}

/// One measured (matrix size, block size) case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepRow {
    pub matrix_size: usize,
    pub block_size: usize,
    /// Blocked multiplication time in milliseconds
    pub time_ms: u64,
}

/// Times blocked multiplication for every block size against every matrix
/// size and writes one CSV row per case to `out`.
///
/// Block sizes form the outer loop. Cases whose block is larger than the
/// matrix are skipped. The probe is always disabled so every case runs to
/// completion.
pub fn run_block_sweep<W: Write>(config: &SweepConfig, out: W) -> Result<Vec<SweepRow>> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(SWEEP_HEADER)?;

    let mut rows = Vec::new();
    for &block in &config.block_sizes {
        for &n in &config.matrix_sizes {
            if n < block {
                debug!(n, block, "skipping case, block larger than matrix");
                continue;
            }
            let a = Matrix::sequential(n)?;
            let b = Matrix::sequential(n)?;
            let mut c = Matrix::zeros(n, Layout::RowMajor)?;
            let mut probe = ShortCircuit::disabled();
            let time_ms = timed("blocked", || matmult_tiled(&a, &b, &mut c, block, &mut probe))?;
            info!(n, block, elapsed_ms = time_ms, "sweep case");

            let row = SweepRow {
                matrix_size: n,
                block_size: block,
                time_ms,
            };
            writer.write_record([
                row.matrix_size.to_string(),
                row.block_size.to_string(),
                row.time_ms.to_string(),
            ])?;
            rows.push(row);
        }
    }

    writer.flush()?;
    Ok(rows)
}
