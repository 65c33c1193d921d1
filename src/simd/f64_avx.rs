//! AVX-accelerated f64 AXPY for x86_64.
//!
//! AVX provides 256-bit registers → 4×f64 lanes.
//! Only compiled when `target_feature = "avx"` is enabled
//! (e.g. via `-C target-cpu=native` on Haswell+).

#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// AXPY: y[i] += alpha * x[i].
///
/// Multiply and add stay separate instructions; an FMA would round once
/// and drift from the scalar loop in the last bit.
#[inline]
pub fn axpy(y: &mut [f64], alpha: f64, x: &[f64]) {
    debug_assert_eq!(y.len(), x.len());
    let n = y.len();
    let chunks = n / 8;

    unsafe {
        let va = _mm256_set1_pd(alpha);
        let xp = x.as_ptr();
        let yp = y.as_mut_ptr();
        for i in 0..chunks {
            let off = i * 8;
            let vx0 = _mm256_loadu_pd(xp.add(off));
            let vx1 = _mm256_loadu_pd(xp.add(off + 4));
            let vy0 = _mm256_loadu_pd(yp.add(off));
            let vy1 = _mm256_loadu_pd(yp.add(off + 4));
            _mm256_storeu_pd(yp.add(off), _mm256_add_pd(vy0, _mm256_mul_pd(va, vx0)));
            _mm256_storeu_pd(yp.add(off + 4), _mm256_add_pd(vy1, _mm256_mul_pd(va, vx1)));
        }
    }

    let tail = chunks * 8;
    for i in tail..n {
        y[i] += alpha * x[i];
    }
}
