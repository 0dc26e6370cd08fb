use thiserror::Error;

/// Errors produced by the tensor kernels and the RNN step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Negative or overflowing size, or the allocator refused the request.
    /// `requested` saturates at `i128::MAX` for products too large to represent.
    #[error("cannot allocate buffer of {requested} elements")]
    Allocation { requested: i128 },

    #[error("{op}: dimension mismatch (expected {expected}, got {actual})")]
    DimensionMismatch {
        op: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("unknown activation: {0}")]
    UnknownActivation(String),
}

impl Error {
    pub(crate) fn mismatch(op: &'static str, expected: usize, actual: usize) -> Self {
        Error::DimensionMismatch { op, expected, actual }
    }

    pub(crate) fn alloc(requested: usize) -> Self {
        Error::Allocation { requested: requested as i128 }
    }

    pub(crate) fn alloc_product(w: usize, h: usize) -> Self {
        Error::Allocation { requested: (w as i128).saturating_mul(h as i128) }
    }

    pub fn is_allocation(&self) -> bool {
        matches!(self, Error::Allocation { .. })
    }

    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(self, Error::DimensionMismatch { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
