//! # axpyspeed
//!
//! Side-by-side AXPY kernels (`y = a*x + y` over `f64` slices) and the
//! harness that checks and times them. The kernels all compute the same
//! thing; they differ in how the loop is written or where it runs.
//!
//! ## Quick start
//!
//! ```
//! use axpyspeed::{harness, Kernel};
//!
//! let (x, mut y) = harness::make_data(harness::N);
//! Kernel::NativeRange.apply(harness::A, &x, &mut y);
//! harness::verify_ramp(harness::A, harness::N, &x, &y).unwrap();
//! assert_eq!(y[9999], 109_989.0); // 11 * 9999
//! ```
//!
//! ## Modules
//!
//! - [`kernels`]: the kernel set and the [`Kernel`] enum that names it.
//!   There are three loop shapes (cached bound, re-read bound, iterator),
//!   one rayon task per element, and explicit SIMD intrinsics.
//!
//! - [`ffi`]: the same loop in C, compiled by `build.rs` at `-O3` with
//!   `-march=native`, once plain and once under `#pragma omp simd`.
//!   Requires the `ffi` feature (on by default).
//!
//! - [`blas`]: BLAS `daxpy` behind a [`Blas`] dispatcher whose backend is
//!   chosen up front. Either pure Rust (`nalgebra`) or, with the `cblas`
//!   feature, OpenBLAS.
//!
//! - [`harness`]: ramp inputs, result verification, harness configuration,
//!   and the [`Sink`](harness::Sink) that keeps timed calls from being
//!   optimized out.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `ffi`   | yes     | Build `csrc/axpy.c` and enable [`Kernel::C`] / [`Kernel::CSimd`] |
//! | `cblas` | no      | Add `Backend::Cblas`, linking a system OpenBLAS |
//!
//! ## Performance
//!
//! Enable target-specific SIMD for the intrinsics kernel:
//!
//! ```toml
//! # .cargo/config.toml
//! [build]
//! rustflags = ["-C", "target-cpu=native"]
//! ```
//!
//! Set `AXPY_NATIVE=0` at build time to compile the C kernels without
//! `-march=native`.

pub mod blas;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod harness;
pub mod kernels;

mod simd;

pub use blas::{Backend, Blas, BlasError};
pub use harness::{HarnessConfig, VerifyError};
pub use kernels::Kernel;
