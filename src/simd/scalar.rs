//! Scalar fallback for architectures without a SIMD specialization.

/// AXPY: y[i] += alpha * x[i].
#[inline]
#[allow(dead_code)]
pub fn axpy(y: &mut [f64], alpha: f64, x: &[f64]) {
    debug_assert_eq!(y.len(), x.len());
    for i in 0..y.len() {
        y[i] += alpha * x[i];
    }
}
