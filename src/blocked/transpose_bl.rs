//! Blocked transpose.

use super::{BLOCK_SIZE, ShortCircuit, Tiling};
use crate::error::Result;
use crate::matrix::Matrix;
use crate::matrix::transpose::{prepare, transpose_tile};

/// Transpose `m` into `m_t` one `BLOCK_SIZE × BLOCK_SIZE` tile at a time.
///
/// See [`transpose_tiled`].
pub fn transpose_bl(m: &Matrix, m_t: &mut Matrix, probe: &mut ShortCircuit) -> Result<()> {
    transpose_tiled(m, m_t, BLOCK_SIZE, probe)
}

/// Blocked transpose with an explicit tile edge.
///
/// Tiles are visited tile-row by tile-row; inside each tile the naive
/// transpose body runs over the clipped bounds. `block == 1` is the naive
/// transpose. Blocking can't remove the stride-n access on one side, it only
/// keeps the touched lines of both buffers in cache for the duration of a
/// tile.
///
/// `probe` is consulted once per tile. If it fires, the function returns
/// `Ok(())` with the remaining tiles unwritten, so `m_t` should hold valid
/// data (zeros, say) beforehand when a short-circuiting probe is used.
pub fn transpose_tiled(
    m: &Matrix,
    m_t: &mut Matrix,
    block: usize,
    probe: &mut ShortCircuit,
) -> Result<()> {
    let tiling = Tiling::new(m.n(), block)?;
    let n = prepare(m, m_t)?;
    let (src, dst) = (m.as_slice(), m_t.data_mut());

    for rows in tiling.tiles() {
        for cols in tiling.tiles() {
            if probe.check() {
                tracing::trace!(n, block, ?rows, ?cols, "transpose short-circuited");
                return Ok(());
            }
            transpose_tile(src, dst, n, rows.clone(), cols);
        }
    }
    Ok(())
}
