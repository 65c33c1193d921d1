//! Pure-Rust backend on top of `nalgebra`.

use nalgebra::{DVectorView, DVectorViewMut};

/// `y += alpha * x` through `Matrix::axpy` on borrowed views.
///
/// Lengths are checked by the dispatcher.
#[inline]
pub(super) fn daxpy(alpha: f64, x: &[f64], y: &mut [f64]) {
    let n = x.len();
    let xv = DVectorView::from_slice(x, n);
    let mut yv = DVectorViewMut::from_slice(y, n);
    // axpy computes self = alpha * x + beta * self.
    yv.axpy(alpha, &xv, 1.0);
}
