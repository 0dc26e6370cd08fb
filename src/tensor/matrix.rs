use crate::error::{Error, Result};
use crate::tensor::{alloc_zeroed, kernels, to_len, Len, Vector};

/// Dense row-major f32 matrix: `width` columns, `height` rows,
/// element `(row, col)` at `row * width + col`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    w: usize,
    h: usize,
    data: Vec<f32>,
}

impl Matrix {
    /// Allocates a zeroed `width` x `height` matrix.
    /// Negative dimensions or an overflowing `width * height` fail with `Error::Allocation`.
    pub fn zeros<L: Len>(width: L, height: L) -> Result<Self> {
        let w = to_len(width)?;
        let h = to_len(height)?;
        let n = w.checked_mul(h).ok_or_else(|| Error::alloc_product(w, h))?;
        Ok(Self { w, h, data: alloc_zeroed(n)? })
    }

    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::zeros(n, n)?;
        for i in 0..n { m.data[i * n + i] = 1.0; }
        Ok(m)
    }

    /// Wraps a row-major buffer; `data.len()` must equal `width * height`.
    pub fn from_vec(width: usize, height: usize, data: Vec<f32>) -> Result<Self> {
        let n = width.checked_mul(height).ok_or_else(|| Error::alloc_product(width, height))?;
        if data.len() != n {
            return Err(Error::mismatch("from_vec", n, data.len()));
        }
        Ok(Self { w: width, h: height, data })
    }

    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> f32,
    {
        let mut m = Self::zeros(width, height)?;
        for r in 0..height {
            for c in 0..width { m.data[r * width + c] = f(r, c); }
        }
        Ok(m)
    }

    /// Consumes the matrix and frees its buffer.
    pub fn release(self) {}

    pub fn width(&self) -> usize { self.w }

    pub fn height(&self) -> usize { self.h }

    pub fn as_slice(&self) -> &[f32] { &self.data }

    pub fn as_mut_slice(&mut self) -> &mut [f32] { &mut self.data }

    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.h {
            return Err(Error::IndexOutOfBounds { index: row, len: self.h });
        }
        if col >= self.w {
            return Err(Error::IndexOutOfBounds { index: col, len: self.w });
        }
        Ok(row * self.w + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f32> {
        let i = self.offset(row, col)?;
        Ok(self.data[i])
    }

    pub fn set(&mut self, row: usize, col: usize, value: f32) -> Result<()> {
        let i = self.offset(row, col)?;
        self.data[i] = value;
        Ok(())
    }

    pub fn row(&self, i: usize) -> &[f32] {
        &self.data[i * self.w..(i + 1) * self.w]
    }

    pub fn fill_zero(&mut self) {
        for v in &mut self.data { *v = 0.0; }
    }

    /// Matrix-vector product into a freshly allocated vector of length `height`.
    pub fn mul_vec(&self, v: &Vector) -> Result<Vector> {
        if v.len() != self.w {
            return Err(Error::mismatch("multiply", self.w, v.len()));
        }
        let mut out = Vector::zeros(self.h)?;
        self.gemv(v, &mut out);
        Ok(out)
    }

    /// Matrix-vector product into a caller-sized `out`; `out` is untouched on error.
    pub fn mul_vec_into(&self, v: &Vector, out: &mut Vector) -> Result<()> {
        if v.len() != self.w {
            return Err(Error::mismatch("multiply", self.w, v.len()));
        }
        if out.len() != self.h {
            return Err(Error::mismatch("multiply output", self.h, out.len()));
        }
        self.gemv(v, out);
        Ok(())
    }

    // shapes already checked by the callers
    fn gemv(&self, v: &Vector, out: &mut Vector) {
        for (i, o) in out.as_mut_slice().iter_mut().enumerate() {
            *o = kernels::dot_f32(self.row(i), v.as_slice());
        }
    }
}

/// Free-function form of `Matrix::mul_vec`.
pub fn multiply(m: &Matrix, v: &Vector) -> Result<Vector> { m.mul_vec(v) }
