//! Property-based tests for the transpose and multiplication variants.
//!
//! Inputs are small integers so every product is exact and the variants can
//! be compared with `==` whatever order they sum in.

use matmul_cache::{
    Layout, Matrix, ShortCircuit, matmult, matmult_cm, matmult_li, matmult_tiled, transpose,
    transpose_li, transpose_tiled,
};
use proptest::prelude::*;

/// Strategy for an `n × n` row-major matrix of small integers, `n` in 1..=12.
fn small_matrix() -> impl Strategy<Value = Matrix> {
    (1usize..=12).prop_flat_map(|n| {
        prop::collection::vec(-20i32..=20, n * n).prop_map(move |values| {
            let data = values.into_iter().map(f64::from).collect();
            Matrix::from_vec(n, Layout::RowMajor, data).unwrap()
        })
    })
}

fn small_pair() -> impl Strategy<Value = (Matrix, Matrix)> {
    (1usize..=10).prop_flat_map(|n| {
        let cells = || prop::collection::vec(-20i32..=20, n * n);
        (cells(), cells()).prop_map(move |(a, b)| {
            let wrap = |v: Vec<i32>| {
                Matrix::from_vec(n, Layout::RowMajor, v.into_iter().map(f64::from).collect()).unwrap()
            };
            (wrap(a), wrap(b))
        })
    })
}

fn zeros(n: usize) -> Matrix {
    Matrix::zeros(n, Layout::RowMajor).unwrap()
}

proptest! {
    /// Transposing twice gives back the original, bit for bit.
    #[test]
    fn test_transpose_involution(m in small_matrix()) {
        let n = m.n();
        let mut once = zeros(n);
        let mut twice = zeros(n);
        transpose(&m, &mut once).unwrap();
        transpose(&once, &mut twice).unwrap();
        prop_assert_eq!(twice, m);
    }

    /// All transpose variants write the same buffer for any block size.
    #[test]
    fn test_transpose_variants_agree(m in small_matrix(), block in 1usize..=14) {
        let n = m.n();
        let mut naive = zeros(n);
        let mut interchange = zeros(n);
        let mut blocked = zeros(n);
        transpose(&m, &mut naive).unwrap();
        transpose_li(&m, &mut interchange).unwrap();
        transpose_tiled(&m, &mut blocked, block, &mut ShortCircuit::disabled()).unwrap();
        prop_assert_eq!(&naive, &interchange);
        prop_assert_eq!(&naive, &blocked);
    }

    /// All multiplication variants agree with a reference triple loop.
    #[test]
    fn test_matmult_variants_agree((a, b) in small_pair(), block in 1usize..=12) {
        let n = a.n();
        let reference: Vec<f64> = (0..n * n)
            .map(|idx| {
                let (i, j) = (idx / n, idx % n);
                (0..n).map(|k| a.get(i, k) * b.get(k, j)).sum()
            })
            .collect();

        let mut b_t = zeros(n);
        transpose(&b, &mut b_t).unwrap();

        let mut c = zeros(n);
        matmult(&a, &b, &mut c).unwrap();
        prop_assert_eq!(c.as_slice(), reference.as_slice());

        c.zero();
        matmult_cm(&a, &b_t, &mut c).unwrap();
        prop_assert_eq!(c.as_slice(), reference.as_slice());

        c.zero();
        matmult_li(&a, &b, &mut c).unwrap();
        prop_assert_eq!(c.as_slice(), reference.as_slice());

        c.zero();
        matmult_tiled(&a, &b, &mut c, block, &mut ShortCircuit::disabled()).unwrap();
        prop_assert_eq!(c.as_slice(), reference.as_slice());
    }

    /// An enabled probe stops a blocked run after exactly two tiles.
    #[test]
    fn test_short_circuit_applies_two_tiles((a, b) in small_pair(), block in 1usize..=4) {
        let n = a.n();
        let tiles = n.div_ceil(block);
        let mut c = zeros(n);
        matmult_tiled(&a, &b, &mut c, block, &mut ShortCircuit::enabled()).unwrap();

        // The first two (ii, jj, kk) tiles in loop order.
        let mut applied = Vec::new();
        'outer: for ii in 0..tiles {
            for jj in 0..tiles {
                for kk in 0..tiles {
                    if applied.len() == 2 {
                        break 'outer;
                    }
                    applied.push((ii, jj, kk));
                }
            }
        }

        let clip = |t: usize| t * block..((t + 1) * block).min(n);
        let mut expected = vec![0.0; n * n];
        for &(ii, jj, kk) in &applied {
            for i in clip(ii) {
                for j in clip(jj) {
                    for k in clip(kk) {
                        expected[i * n + j] += a.get(i, k) * b.get(k, j);
                    }
                }
            }
        }
        prop_assert_eq!(c.as_slice(), expected.as_slice());
    }
}
