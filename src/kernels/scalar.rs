//! Plain-loop kernels.
//!
//! All three compute the same thing and differ only in how the loop is
//! written, which is the whole point of comparing them.

/// Index loop with the bound read once before the loop.
///
/// # Panics
/// Panics on out-of-bounds access if `y` is shorter than `x`.
#[inline]
pub fn axpy_indexed(a: f64, x: &[f64], y: &mut [f64]) {
    let n = x.len();
    for i in 0..n {
        y[i] += a * x[i];
    }
}

/// Index loop that re-reads `x.len()` on every step.
///
/// `for i in 0..x.len()` evaluates the range once, so the re-query is
/// spelled out as a `while`.
///
/// # Panics
/// Panics on out-of-bounds access if `y` is shorter than `x`.
#[inline]
pub fn axpy_indexed_len(a: f64, x: &[f64], y: &mut [f64]) {
    let mut i = 0;
    while i < x.len() {
        y[i] += a * x[i];
        i += 1;
    }
}

/// Iterator loop: value and index come from `enumerate`.
///
/// # Panics
/// Panics on out-of-bounds access if `y` is shorter than `x`.
#[inline]
pub fn axpy_iter(a: f64, x: &[f64], y: &mut [f64]) {
    for (i, &v) in x.iter().enumerate() {
        y[i] += a * v;
    }
}

/// Aliased AXPY where `x` and `y` are the same storage: xy[i] += a * xy[i].
///
/// Each index is read once and written once, so the result is
/// `(a + 1) * xy[i]` up to rounding.
#[inline]
pub fn axpy_in_place(a: f64, xy: &mut [f64]) {
    for v in xy.iter_mut() {
        *v += a * *v;
    }
}
