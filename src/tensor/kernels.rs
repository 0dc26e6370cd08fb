//! Scalar f32 kernels shared by `Vector` and `Matrix`.
//!
//! Callers check shapes; these functions only see equal-length slices.

#[inline]
pub fn dot_f32(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    let mut acc = 0f32;
    for i in 0..a.len() { acc += a[i] * b[i]; }
    acc
}
