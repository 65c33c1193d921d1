//! The AXPY kernel set: y[i] += a * x[i] for every index.
//!
//! Every kernel has the same contract and differs only in how it iterates
//! or where it dispatches:
//!
//! - `x` and `y` have equal length; `n == 0` is a no-op.
//! - `y` is updated in place, `x` is left unchanged.
//! - Nothing is returned and no buffers are allocated. (The task kernel
//!   boxes one rayon job per element; that overhead is what it measures.)
//! - None of them validate input beyond what keeps safe code sound. A
//!   length mismatch panics (index out of bounds or an explicit assert).
//!
//! [`Kernel`] names each variant so benches and tests can iterate over the
//! whole set.
//!
//! ```
//! use axpyspeed::Kernel;
//!
//! let x = [1.0, 2.0];
//! let y = [1.0, 2.0];
//! for kernel in Kernel::all() {
//!     let mut y = y;
//!     kernel.apply(-1.0, &x, &mut y);
//!     assert_eq!(y, [0.0, 0.0], "{}", kernel.name());
//! }
//! ```

mod scalar;
mod task;


pub use scalar::{axpy_in_place, axpy_indexed, axpy_indexed_len, axpy_iter};
pub use task::axpy_task_per_element;

use crate::blas::{Backend, Blas};

/// Explicit SIMD intrinsics, widest instruction set enabled at compile time.
///
/// # Panics
/// Panics if `x.len() != y.len()`.
#[inline]
pub fn axpy_intrinsics(a: f64, x: &[f64], y: &mut [f64]) {
    assert_eq!(x.len(), y.len(), "x/y length mismatch");
    crate::simd::axpy_dispatch(y, a, x);
}

/// External BLAS `daxpy` (unit strides) through the given backend.
///
/// # Panics
/// Panics if `y` is shorter than `x`; the message carries the
/// [`BlasError`](crate::blas::BlasError).
#[inline]
pub fn axpy_blas(blas: &Blas, a: f64, x: &[f64], y: &mut [f64]) {
    if let Err(err) = blas.daxpy(x.len(), a, x, 1, y, 1) {
        panic!("daxpy precondition violated: {err}");
    }
}

/// One AXPY strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kernel {
    /// Index loop, bound cached in a local.
    Native,
    /// Index loop, bound re-read every step.
    NativeLen,
    /// `iter().enumerate()` loop.
    NativeRange,
    /// One rayon task per element, joined on a scope.
    TaskPerElement,
    /// Hand-written SIMD intrinsics.
    Intrinsics,
    /// C loop behind FFI.
    #[cfg(feature = "ffi")]
    C,
    /// C loop under `#pragma omp simd` behind FFI.
    #[cfg(feature = "ffi")]
    CSimd,
    /// External BLAS through the given backend.
    Blas(Backend),
}

impl Kernel {
    /// Every kernel compiled into this build, one `Blas` entry per backend.
    pub fn all() -> Vec<Kernel> {
        let mut kernels = vec![
            Kernel::Native,
            Kernel::NativeLen,
            Kernel::NativeRange,
            Kernel::TaskPerElement,
            Kernel::Intrinsics,
        ];
        #[cfg(feature = "ffi")]
        kernels.extend([Kernel::C, Kernel::CSimd]);
        kernels.extend(Backend::available().iter().map(|&b| Kernel::Blas(b)));
        kernels
    }

    /// Stable snake_case label.
    pub fn name(&self) -> &'static str {
        match self {
            Kernel::Native => "native",
            Kernel::NativeLen => "native_len",
            Kernel::NativeRange => "native_range",
            Kernel::TaskPerElement => "task_per_element",
            Kernel::Intrinsics => crate::simd::kernel_name(),
            #[cfg(feature = "ffi")]
            Kernel::C => "c",
            #[cfg(feature = "ffi")]
            Kernel::CSimd => "c_simd",
            Kernel::Blas(backend) => match backend {
                Backend::Native => "blas_native",
                #[cfg(feature = "cblas")]
                Backend::Cblas => "blas_cblas",
            },
        }
    }

    /// Whether the kernel crosses into foreign-compiled code.
    ///
    /// Foreign kernels may contract `y + a * x` into an FMA, so their
    /// results are only guaranteed to match the Rust loops when every
    /// product is exact.
    pub fn is_foreign(&self) -> bool {
        match self {
            #[cfg(feature = "ffi")]
            Kernel::C | Kernel::CSimd => true,
            Kernel::Blas(backend) => backend.is_foreign(),
            _ => false,
        }
    }

    /// Run the kernel: y[i] += a * x[i].
    #[inline]
    pub fn apply(&self, a: f64, x: &[f64], y: &mut [f64]) {
        match self {
            Kernel::Native => axpy_indexed(a, x, y),
            Kernel::NativeLen => axpy_indexed_len(a, x, y),
            Kernel::NativeRange => axpy_iter(a, x, y),
            Kernel::TaskPerElement => axpy_task_per_element(a, x, y),
            Kernel::Intrinsics => axpy_intrinsics(a, x, y),
            #[cfg(feature = "ffi")]
            Kernel::C => crate::ffi::axpy_c(a, x, y),
            #[cfg(feature = "ffi")]
            Kernel::CSimd => crate::ffi::axpy_c_simd(a, x, y),
            Kernel::Blas(backend) => axpy_blas(&Blas::new(*backend), a, x, y),
        }
    }
}

impl core::fmt::Display for Kernel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
