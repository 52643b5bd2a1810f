//! Cache-behaviour benchmarks for square matrix multiplication and transpose.
//!
//! Every variant here computes the same thing. What changes is the order in
//! which memory is touched, and on a cached machine that order decides how
//! fast it runs:
//!
//! - [`transpose`] / [`transpose_li`] / [`transpose_bl`]: row-major reads vs
//!   row-major writes vs tiles
//! - [`matmult`]: textbook i-j-k, stride-n walk down B
//! - [`matmult_cm`]: same nest, B realigned to column-major first
//! - [`matmult_li`]: i-k-j, unit stride on both A and B
//! - [`matmult_bl`]: i-j-k over `BLOCK_SIZE` tiles
//!
//! ## Usage
//!
//! ```
//! use matmul_cache::{Layout, Matrix, ShortCircuit, matmult_bl, transpose, matmult_cm};
//!
//! let a = Matrix::sequential(3).unwrap();
//! let b = Matrix::sequential(3).unwrap();
//!
//! // B realigned to column-major for matmult_cm.
//! let mut b_t = Matrix::zeros(3, Layout::RowMajor).unwrap();
//! transpose(&b, &mut b_t).unwrap();
//!
//! let mut c = Matrix::zeros(3, Layout::RowMajor).unwrap();
//! matmult_cm(&a, &b_t, &mut c).unwrap();
//! assert_eq!(c.get(2, 2), 150.0);
//!
//! c.zero();
//! matmult_bl(&a, &b, &mut c, &mut ShortCircuit::disabled()).unwrap();
//! assert_eq!(c.get(2, 2), 150.0);
//! ```
//!
//! ## Build-time knobs
//!
//! - `MATMUL_BLOCKSZ=<n>` sets [`BLOCK_SIZE`] (default 1, i.e. no blocking)
//! - `--features short-circuit` makes [`ShortCircuit::default`] stop blocked
//!   routines after every second tile

pub mod blocked;
pub mod cli;
pub mod display;
pub mod driver;
pub mod error;
pub mod logging;
pub mod matrix;
pub mod timing;

pub use blocked::{
    BLOCK_SIZE, MAX_SHORTCIRCUIT, ShortCircuit, Tiling, matmult_bl, matmult_tiled, transpose_bl,
    transpose_tiled,
};
pub use error::{Error, Result};
pub use matrix::naive_ijk::{matmult, matmult_cm};
pub use matrix::naive_ikj::matmult_li;
pub use matrix::transpose::{transpose, transpose_li};
pub use matrix::{Layout, Matrix};
