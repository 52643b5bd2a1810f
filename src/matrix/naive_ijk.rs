use super::{Layout, Matrix, check_product};
use crate::error::Result;

/// Naive matrix multiplication using i-j-k loop order: C += A * B.
///
/// This is the textbook triple loop. The innermost loop walks B down a
/// column, i.e. with stride `n`, so every iteration can miss in cache.
///
/// Use this as the correctness baseline, not for performance.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, zeroed by the caller
///
/// # Example
///
/// ```
/// use matmul_cache::{Layout, Matrix};
/// use matmul_cache::matrix::naive_ijk::matmult;
///
/// let a = Matrix::sequential(3).unwrap();
/// let b = Matrix::sequential(3).unwrap();
/// let mut c = Matrix::zeros(3, Layout::RowMajor).unwrap();
///
/// matmult(&a, &b, &mut c).unwrap();
///
/// assert_eq!(c.as_slice(), &[30.0, 36.0, 42.0,
///                            66.0, 81.0, 96.0,
///                            102.0, 126.0, 150.0]);
/// ```
pub fn matmult(a: &Matrix, b: &Matrix, c: &mut Matrix) -> Result<()> {
    let n = check_product(a, b, Layout::RowMajor, c)?;
    let (a, b, c) = (a.as_slice(), b.as_slice(), c.data_mut());
    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                c[i * n + j] += a[i * n + k] * b[k * n + j];
            }
        }
    }
    Ok(())
}

/// i-j-k multiplication with B realigned to column-major storage.
///
/// Same loop nest as [`matmult`], but column `j` of B is now contiguous,
/// so `b[j * n + k]` is read sequentially in the inner loop. Produce the
/// realigned B with [`transpose`](super::transpose::transpose) beforehand.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), column-major
/// * `c` - Matrix C (n × n), row-major, zeroed by the caller
pub fn matmult_cm(a: &Matrix, b: &Matrix, c: &mut Matrix) -> Result<()> {
    let n = check_product(a, b, Layout::ColumnMajor, c)?;
    let (a, b, c) = (a.as_slice(), b.as_slice(), c.data_mut());
    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                c[i * n + j] += a[i * n + k] * b[j * n + k];
            }
        }
    }
    Ok(())
}
