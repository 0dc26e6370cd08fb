use crate::error::{Error, Result};
use crate::tensor::{alloc_zeroed, kernels, to_len, Len};
use std::ops::{Index, IndexMut};

/// Fixed-length f32 vector. The buffer is released when the vector is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    data: Vec<f32>,
}

impl Vector {
    /// Allocates `len` zeroed elements. Negative lengths fail with `Error::Allocation`.
    pub fn zeros<L: Len>(len: L) -> Result<Self> {
        let n = to_len(len)?;
        Ok(Self { data: alloc_zeroed(n)? })
    }

    pub fn from_vec(data: Vec<f32>) -> Self { Self { data } }

    /// Consumes the vector and frees its buffer.
    pub fn release(self) {}

    pub fn into_vec(self) -> Vec<f32> { self.data }

    pub fn len(&self) -> usize { self.data.len() }

    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    pub fn as_slice(&self) -> &[f32] { &self.data }

    pub fn as_mut_slice(&mut self) -> &mut [f32] { &mut self.data }

    pub fn get(&self, i: usize) -> Result<f32> {
        self.data.get(i).copied().ok_or(Error::IndexOutOfBounds { index: i, len: self.len() })
    }

    pub fn set(&mut self, i: usize, value: f32) -> Result<()> {
        let len = self.len();
        let slot = self.data.get_mut(i).ok_or(Error::IndexOutOfBounds { index: i, len })?;
        *slot = value;
        Ok(())
    }

    pub fn fill_zero(&mut self) {
        for v in &mut self.data { *v = 0.0; }
    }

    /// Sum of element-wise products.
    pub fn dot(&self, other: &Vector) -> Result<f32> {
        if self.len() != other.len() {
            return Err(Error::mismatch("dot", self.len(), other.len()));
        }
        Ok(kernels::dot_f32(&self.data, &other.data))
    }

    /// self[i] += other[i]
    pub fn add_assign(&mut self, other: &Vector) -> Result<()> {
        if self.len() != other.len() {
            return Err(Error::mismatch("add", self.len(), other.len()));
        }
        for (a, b) in self.data.iter_mut().zip(&other.data) { *a += *b; }
        Ok(())
    }

    pub fn map_inplace<F: FnMut(f32) -> f32>(&mut self, mut f: F) {
        for v in &mut self.data { *v = f(*v); }
    }
}

/// Free-function form of `Vector::dot`.
pub fn dot(a: &Vector, b: &Vector) -> Result<f32> { a.dot(b) }

impl From<Vec<f32>> for Vector {
    fn from(data: Vec<f32>) -> Self { Self { data } }
}

impl Index<usize> for Vector {
    type Output = f32;
    fn index(&self, i: usize) -> &f32 { &self.data[i] }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, i: usize) -> &mut f32 { &mut self.data[i] }
}
