use super::{Layout, Matrix, check_product};
use crate::error::Result;

/// Cache-friendly matrix multiplication using i-k-j loop order.
///
/// Swapping the j and k loops makes the innermost loop walk both B and C
/// along a row (stride 1) while `a[i][k]` stays fixed. The price is that
/// C[i][j] is no longer finished in one sweep: it picks up one term per
/// pass of the k loop.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, zeroed by the caller
pub fn matmult_li(a: &Matrix, b: &Matrix, c: &mut Matrix) -> Result<()> {
    let n = check_product(a, b, Layout::RowMajor, c)?;
    let (a, b, c) = (a.as_slice(), b.as_slice(), c.data_mut());
    for i in 0..n {
        for k in 0..n {
            let a_ik = a[i * n + k];
            for j in 0..n {
                c[i * n + j] += a_ik * b[k * n + j];
            }
        }
    }
    Ok(())
}
