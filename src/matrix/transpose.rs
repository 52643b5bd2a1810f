use std::ops::Range;

use super::Matrix;
use crate::error::Result;

/// Transpose `m` into `m_t`: `m_t[j][i] = m[i][j]`.
///
/// Walks `m` row by row (sequential reads) and scatters into `m_t` with
/// stride `n`. The bytes written are the same whichever layout `m` is in;
/// only the meaning changes, so `m_t` comes out tagged with the opposite
/// layout. A row-major `B` turns into the column-major operand that
/// [`matmult_cm`](super::naive_ijk::matmult_cm) expects.
///
/// `m_t` does not need to be zeroed first; every cell is overwritten.
///
/// # Example
///
/// ```
/// use matmul_cache::{Layout, Matrix};
/// use matmul_cache::matrix::transpose::transpose;
///
/// let m = Matrix::sequential(3).unwrap();
/// let mut m_t = Matrix::zeros(3, Layout::RowMajor).unwrap();
///
/// transpose(&m, &mut m_t).unwrap();
///
/// assert_eq!(m_t.as_slice(), &[1.0, 4.0, 7.0,
///                              2.0, 5.0, 8.0,
///                              3.0, 6.0, 9.0]);
/// assert_eq!(m_t.layout(), Layout::ColumnMajor);
/// ```
pub fn transpose(m: &Matrix, m_t: &mut Matrix) -> Result<()> {
    let n = prepare(m, m_t)?;
    transpose_tile(m.as_slice(), m_t.data_mut(), n, 0..n, 0..n);
    Ok(())
}

/// Same as [`transpose`] with the `i` and `j` loops swapped.
///
/// Writes to `m_t` become sequential and reads from `m` take the stride-n
/// hit instead. The output is identical.
pub fn transpose_li(m: &Matrix, m_t: &mut Matrix) -> Result<()> {
    let n = prepare(m, m_t)?;
    let src = m.as_slice();
    let dst = m_t.data_mut();
    for j in 0..n {
        for i in 0..n {
            dst[j * n + i] = src[i * n + j];
        }
    }
    Ok(())
}

/// Validates the operand pair and re-tags `m_t`. Returns `n`.
pub(crate) fn prepare(m: &Matrix, m_t: &mut Matrix) -> Result<usize> {
    let n = m.n();
    m_t.expect_dim("M_t", n)?;
    m_t.set_layout(m.layout().transposed());
    Ok(n)
}

/// Naive transpose body restricted to `rows × cols` of an `n × n` buffer.
#[inline]
pub(crate) fn transpose_tile(
    src: &[f64],
    dst: &mut [f64],
    n: usize,
    rows: Range<usize>,
    cols: Range<usize>,
) {
    for i in rows {
        for j in cols.clone() {
            dst[j * n + i] = src[i * n + j];
        }
    }
}
