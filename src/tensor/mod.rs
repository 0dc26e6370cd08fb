pub mod kernels;
pub mod matrix;
pub mod vector;

pub use matrix::Matrix;
pub use vector::Vector;

use crate::error::{Error, Result};

/// Caller-supplied length: any integer type, negatives rejected.
pub trait Len: TryInto<usize> + TryInto<i128> + Copy {}

impl<T: TryInto<usize> + TryInto<i128> + Copy> Len for T {}

/// Converts a caller-supplied length, rejecting negatives and values that do not fit `usize`.
pub(crate) fn to_len<L: Len>(len: L) -> Result<usize> {
    TryInto::<usize>::try_into(len).map_err(|_| Error::Allocation {
        requested: TryInto::<i128>::try_into(len).unwrap_or(i128::MIN),
    })
}

/// Zeroed buffer of `n` elements; allocator failure is reported instead of aborting.
pub(crate) fn alloc_zeroed(n: usize) -> Result<Vec<f32>> {
    let mut buf: Vec<f32> = Vec::new();
    buf.try_reserve_exact(n).map_err(|_| Error::alloc(n))?;
    buf.resize(n, 0.0);
    Ok(buf)
}
