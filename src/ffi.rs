//! Foreign AXPY kernels compiled from `csrc/axpy.c`.
//!
//! `build.rs` compiles the C file at `-O3` with `-march=native` and
//! `-fopenmp-simd` when the C compiler accepts them. Two entry points exist:
//!
//! - `do_axpy`: plain loop, vectorized only if the optimizer decides to.
//! - `do_simd_axpy`: the same loop under `#pragma omp simd`.
//!
//! The raw functions here take pointers and may alias. The slice wrappers
//! check lengths and skip the call for empty input, since `&x[0]` of an
//! empty slice has no valid address to hand across.
//!
//! The C compiler may contract `y + a * x` into a fused multiply-add, so
//! these kernels can differ from the Rust loops in the last bit for inputs
//! that are not exactly representable after multiplication.

use std::os::raw::{c_double, c_int};

mod sys {
    use std::os::raw::{c_double, c_int};

    extern "C" {
        pub fn do_axpy(n: c_int, a: c_double, x: *const c_double, y: *mut c_double);
        pub fn do_simd_axpy(n: c_int, a: c_double, x: *const c_double, y: *mut c_double);
    }
}

/// Calls `do_axpy` directly.
///
/// # Safety
/// `x` must be valid for `n` reads and `y` for `n` reads and writes of
/// `f64`, and `n >= 1`. `x` and `y` may be equal; partial overlap at an
/// offset is not supported.
#[inline]
pub unsafe fn axpy_c_raw(n: c_int, a: c_double, x: *const c_double, y: *mut c_double) {
    sys::do_axpy(n, a, x, y);
}

/// Calls `do_simd_axpy` directly.
///
/// # Safety
/// Same contract as [`axpy_c_raw`].
#[inline]
pub unsafe fn axpy_c_simd_raw(n: c_int, a: c_double, x: *const c_double, y: *mut c_double) {
    sys::do_simd_axpy(n, a, x, y);
}

/// Converts a slice length into the C `int` the kernels take.
///
/// # Panics
/// Panics if the lengths differ or if `n` exceeds `c_int::MAX`.
#[inline]
fn checked_len(x: &[f64], y: &[f64]) -> c_int {
    assert_eq!(x.len(), y.len(), "x/y length mismatch");
    match c_int::try_from(x.len()) {
        Ok(n) => n,
        Err(_) => panic!("length {} does not fit a C int", x.len()),
    }
}

/// Safe wrapper over `do_axpy`. Empty input returns without crossing the
/// boundary.
///
/// # Panics
/// Panics if `x.len() != y.len()` or the length exceeds `c_int::MAX`.
pub fn axpy_c(a: f64, x: &[f64], y: &mut [f64]) {
    let n = checked_len(x, y);
    if n == 0 {
        return;
    }
    // Safety: both slices hold `n >= 1` elements and cannot overlap.
    unsafe { axpy_c_raw(n, a, x.as_ptr(), y.as_mut_ptr()) }
}

/// Safe wrapper over `do_simd_axpy`. Empty input returns without crossing
/// the boundary.
///
/// # Panics
/// Panics if `x.len() != y.len()` or the length exceeds `c_int::MAX`.
pub fn axpy_c_simd(a: f64, x: &[f64], y: &mut [f64]) {
    let n = checked_len(x, y);
    if n == 0 {
        return;
    }
    // Safety: as in `axpy_c`.
    unsafe { axpy_c_simd_raw(n, a, x.as_ptr(), y.as_mut_ptr()) }
}
