//! Cache-blocked transpose and multiplication.
//!
//! Both routines cut the iteration space into `BLOCK_SIZE`-wide tiles and
//! run the naive loop body inside each tile. The last tile in a dimension
//! is clipped to `n` when the block size doesn't divide it.
//!
//! Contents:
//! - `tiling`: tile count and clipped tile ranges
//! - `short_circuit`: the probe that stops a blocked run after a few tiles
//! - `transpose_bl`: blocked transpose
//! - `matmult_bl`: blocked i-j-k multiplication

pub mod matmult_bl;
pub mod short_circuit;
pub mod tiling;
pub mod transpose_bl;

include!(concat!(env!("OUT_DIR"), "/block_size.rs"));

pub use matmult_bl::{matmult_bl, matmult_tiled};
pub use short_circuit::{MAX_SHORTCIRCUIT, ShortCircuit};
pub use tiling::Tiling;
pub use transpose_bl::{transpose_bl, transpose_tiled};
