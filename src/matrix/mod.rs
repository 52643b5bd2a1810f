//! Square matrix storage and the non-blocked engines.
//!
//! A [`Matrix`] is a flat buffer of `n * n` doubles plus a [`Layout`] tag.
//! The tag is what lets every engine reject an operand stored the wrong
//! way round instead of silently computing garbage.

use std::fmt;

use crate::error::{Error, Result};

pub mod naive_ijk;
pub mod naive_ikj;
pub mod transpose;

/// Addressing convention of a flat `n * n` buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Element (r, c) lives at `r * n + c`.
    RowMajor,
    /// Element (r, c) lives at `r + c * n`.
    ColumnMajor,
}

impl Layout {
    /// Flat index of element (`row`, `col`) in an `n * n` buffer.
    #[inline(always)]
    pub fn index(self, n: usize, row: usize, col: usize) -> usize {
        match self {
            Layout::RowMajor => row * n + col,
            Layout::ColumnMajor => row + col * n,
        }
    }

    /// The layout a buffer ends up in after a physical transpose.
    pub fn transposed(self) -> Self {
        match self {
            Layout::RowMajor => Layout::ColumnMajor,
            Layout::ColumnMajor => Layout::RowMajor,
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::RowMajor => f.write_str("row-major"),
            Layout::ColumnMajor => f.write_str("column-major"),
        }
    }
}

/// An `n × n` grid of `f64` values stored as one flat buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    n: usize,
    layout: Layout,
    data: Vec<f64>,
}

impl Matrix {
    /// Matrix holding 1, 2, ..., n² in row-major order.
    ///
    /// ```
    /// use matmul_cache::Matrix;
    ///
    /// let m = Matrix::sequential(3).unwrap();
    /// assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    /// ```
    pub fn sequential(n: usize) -> Result<Self> {
        let mut data = allocate(n)?;
        let mut ct = 1.0;
        for _ in 0..n * n {
            data.push(ct);
            ct += 1.0;
        }
        Ok(Self {
            n,
            layout: Layout::RowMajor,
            data,
        })
    }

    /// All-zero matrix in the given layout.
    pub fn zeros(n: usize, layout: Layout) -> Result<Self> {
        let mut data = allocate(n)?;
        data.resize(n * n, 0.0);
        Ok(Self { n, layout, data })
    }

    /// Wraps an existing buffer. `data.len()` must be `n * n`.
    pub fn from_vec(n: usize, layout: Layout, data: Vec<f64>) -> Result<Self> {
        let expected = element_count(n)?;
        if data.len() != expected {
            return Err(Error::BufferLength {
                n,
                expected,
                found: data.len(),
            });
        }
        Ok(Self { n, layout, data })
    }

    /// Builds a matrix whose logical element (r, c) is `f(r, c)`.
    pub fn from_fn<F>(n: usize, layout: Layout, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut m = Self::zeros(n, layout)?;
        for row in 0..n {
            for col in 0..n {
                m.data[layout.index(n, row, col)] = f(row, col);
            }
        }
        Ok(m)
    }

    /// Sets every cell to 0.0. Every multiplication variant needs this on C first.
    pub fn zero(&mut self) {
        self.data.fill(0.0);
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Raw storage, in whatever order [`Matrix::layout`] says.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Logical element (`row`, `col`), independent of storage order.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[self.layout.index(self.n, row, col)]
    }

    pub(crate) fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub(crate) fn set_layout(&mut self, layout: Layout) {
        self.layout = layout;
    }

    pub(crate) fn expect_layout(&self, operand: &'static str, expected: Layout) -> Result<()> {
        if self.layout != expected {
            return Err(Error::LayoutMismatch {
                operand,
                expected,
                found: self.layout,
            });
        }
        Ok(())
    }

    pub(crate) fn expect_dim(&self, operand: &'static str, expected: usize) -> Result<()> {
        if self.n != expected {
            return Err(Error::DimensionMismatch {
                operand,
                expected,
                found: self.n,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::display::format_grid(
            self.n,
            &self.data,
            self.layout,
        ))
    }
}

/// Checks operands shared by all multiplication variants: A and C row-major,
/// B in `b_layout`, all three the same size as A.
pub(crate) fn check_product(
    a: &Matrix,
    b: &Matrix,
    b_layout: Layout,
    c: &Matrix,
) -> Result<usize> {
    let n = a.n();
    a.expect_layout("A", Layout::RowMajor)?;
    b.expect_dim("B", n)?;
    b.expect_layout("B", b_layout)?;
    c.expect_dim("C", n)?;
    c.expect_layout("C", Layout::RowMajor)?;
    Ok(n)
}

fn element_count(n: usize) -> Result<usize> {
    if n == 0 {
        return Err(Error::InvalidDimension(n));
    }
    n.checked_mul(n).ok_or(Error::Allocation { n })
}

fn allocate(n: usize) -> Result<Vec<f64>> {
    let len = element_count(n)?;
    let mut data = Vec::new();
    data.try_reserve_exact(len).map_err(|_| Error::Allocation { n })?;
    Ok(data)
}
