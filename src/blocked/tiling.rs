use std::ops::Range;

use crate::error::{Error, Result};

/// Partition of `0..n` into `block`-wide tiles.
///
/// There are `⌈n / block⌉` tiles; tile `t` covers
/// `t * block .. min((t + 1) * block, n)`, so only the last one can be short.
///
/// ```
/// use matmul_cache::blocked::Tiling;
///
/// let tiling = Tiling::new(10, 3).unwrap();
/// assert_eq!(tiling.count(), 4);
/// assert_eq!(tiling.range(3), 9..10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tiling {
    n: usize,
    block: usize,
}

impl Tiling {
    pub fn new(n: usize, block: usize) -> Result<Self> {
        if block == 0 {
            return Err(Error::InvalidBlockSize(block));
        }
        Ok(Self { n, block })
    }

    /// Number of tiles along one dimension.
    pub fn count(&self) -> usize {
        self.n.div_ceil(self.block)
    }

    /// Element range of tile `t`, clipped to `n`.
    #[inline]
    pub fn range(&self, t: usize) -> Range<usize> {
        let start = t * self.block;
        start..((t + 1) * self.block).min(self.n)
    }

    /// Ranges of every tile, in order.
    pub fn tiles(&self) -> impl Iterator<Item = Range<usize>> + use<> {
        let tiling = *self;
        (0..tiling.count()).map(move |t| tiling.range(t))
    }
}
