//! Foreign-compiled backend: `cblas_daxpy` from a system OpenBLAS.

// Pulls in the link directives for libopenblas.
extern crate openblas_src as _;

use super::BlasError;

/// `y += alpha * x` through `cblas_daxpy` with unit strides.
pub(super) fn daxpy(alpha: f64, x: &[f64], y: &mut [f64]) -> Result<(), BlasError> {
    let n = i32::try_from(x.len()).map_err(|_| BlasError::LengthOverflow { n: x.len() })?;
    // Safety: the dispatcher sliced both operands to exactly `n` elements
    // and `n >= 1`; unit strides keep every access in bounds.
    unsafe { ::cblas::daxpy(n, alpha, x, 1, y, 1) };
    Ok(())
}
