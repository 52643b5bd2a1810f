//! Blocked i-j-k matrix multiplication.

use super::{BLOCK_SIZE, ShortCircuit, Tiling};
use crate::error::Result;
use crate::matrix::{Layout, Matrix, check_product};

/// Cache-blocked C += A * B using `BLOCK_SIZE` tiles.
///
/// See [`matmult_tiled`].
pub fn matmult_bl(a: &Matrix, b: &Matrix, c: &mut Matrix, probe: &mut ShortCircuit) -> Result<()> {
    matmult_tiled(a, b, c, BLOCK_SIZE, probe)
}

/// Cache-blocked C += A * B with an explicit tile edge.
///
/// The block loops run `ii` (rows of C), `jj` (columns of C), `kk` (the
/// shared dimension), outermost to innermost. Each `(ii, jj, kk)` tile runs
/// the naive i-j-k nest over its clipped ranges, summing into a local and
/// adding to `C[i][j]` once per k-tile, so C sees one read-modify-write per
/// tile instead of one per k.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, zeroed by the caller
/// * `block` - Tile edge; 1 degenerates to the naive loop
/// * `probe` - Consulted once per tile; when it fires the function returns
///   `Ok(())` with C holding only the tiles applied so far
pub fn matmult_tiled(
    a: &Matrix,
    b: &Matrix,
    c: &mut Matrix,
    block: usize,
    probe: &mut ShortCircuit,
) -> Result<()> {
    let tiling = Tiling::new(a.n(), block)?;
    let n = check_product(a, b, Layout::RowMajor, c)?;
    let (a, b, c) = (a.as_slice(), b.as_slice(), c.data_mut());

    for ii in tiling.tiles() {
        for jj in tiling.tiles() {
            for kk in tiling.tiles() {
                if probe.check() {
                    tracing::trace!(n, block, ?ii, ?jj, ?kk, "matmult short-circuited");
                    return Ok(());
                }
                for i in ii.clone() {
                    for j in jj.clone() {
                        let mut sum = 0.0;
                        for k in kk.clone() {
                            sum += a[i * n + k] * b[k * n + j];
                        }
                        c[i * n + j] += sum;
                    }
                }
            }
        }
    }
    Ok(())
}
