//! Explicit-intrinsics AXPY with compile-time architecture dispatch.
//!
//! This module is private. It backs [`crate::kernels::axpy_intrinsics`],
//! which is the hand-vectorized counterpart to the C kernel compiled with
//! `#pragma omp simd`.
//!
//! On x86_64, the widest available instruction set is selected at compile
//! time: AVX-512 > AVX > SSE2. Enable via `-C target-cpu=native` or
//! `-C target-feature=+avx2` etc.
//!
//! Every path computes `y + alpha * x` with a separate multiply and add,
//! so all of them agree bit for bit with the scalar loop.
//!
//! | Arch      | ISA       | f64 lanes | f64 per iteration |
//! |-----------|-----------|-----------|-------------------|
//! | `aarch64` | NEON      | 2         | 2                 |
//! | `x86_64`  | SSE2      | 2         | 4                 |
//! | `x86_64`  | AVX       | 4         | 8                 |
//! | `x86_64`  | AVX-512   | 8         | 8                 |
//! | other     | scalar    | 1         | 1                 |

pub(crate) mod scalar;

#[cfg(target_arch = "aarch64")]
pub(crate) mod f64_neon;

#[cfg(target_arch = "x86_64")]
pub(crate) mod f64_sse2;

#[cfg(all(target_arch = "x86_64", target_feature = "avx"))]
pub(crate) mod f64_avx;

#[cfg(all(target_arch = "x86_64", target_feature = "avx512f"))]
pub(crate) mod f64_avx512;

/// Dispatch AXPY: y[i] += alpha * x[i].
///
/// For short slices (< 8 elements), uses a scalar loop to avoid the overhead
/// of SIMD dispatch and register setup, which dominates at small sizes.
#[inline]
pub(crate) fn axpy_dispatch(y: &mut [f64], alpha: f64, x: &[f64]) {
    let n = y.len();
    if n < 8 {
        for i in 0..n {
            y[i] += alpha * x[i];
        }
        return;
    }
    #[cfg(target_arch = "aarch64")]
    {
        f64_neon::axpy(y, alpha, x);
        return;
    }
    #[cfg(target_arch = "x86_64")]
    {
        #[cfg(target_feature = "avx512f")]
        f64_avx512::axpy(y, alpha, x);
        #[cfg(all(target_feature = "avx", not(target_feature = "avx512f")))]
        f64_avx::axpy(y, alpha, x);
        #[cfg(not(target_feature = "avx"))]
        f64_sse2::axpy(y, alpha, x);
        return;
    }
    #[allow(unreachable_code)]
    scalar::axpy(y, alpha, x);
}

/// Kernel label naming the instruction set [`axpy_dispatch`] uses for
/// long slices.
pub(crate) const fn kernel_name() -> &'static str {
    if cfg!(target_arch = "aarch64") {
        "intrinsics_neon"
    } else if cfg!(all(target_arch = "x86_64", target_feature = "avx512f")) {
        "intrinsics_avx512"
    } else if cfg!(all(target_arch = "x86_64", target_feature = "avx")) {
        "intrinsics_avx"
    } else if cfg!(target_arch = "x86_64") {
        "intrinsics_sse2"
    } else {
        "intrinsics_scalar"
    }
}
