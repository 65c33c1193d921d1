//! SSE2-accelerated f64 AXPY for x86_64.
//!
//! SSE2 provides 128-bit registers → 2×f64 lanes.
//! SSE2 is baseline on x86_64 (always available).

#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// AXPY: y[i] += alpha * x[i].
///
/// Two independent 2-lane streams per iteration (4 f64) so loads of the
/// second pair overlap the multiply of the first.
#[inline]
pub fn axpy(y: &mut [f64], alpha: f64, x: &[f64]) {
    debug_assert_eq!(y.len(), x.len());
    let n = y.len();
    let chunks = n / 4;

    unsafe {
        let va = _mm_set1_pd(alpha);
        let xp = x.as_ptr();
        let yp = y.as_mut_ptr();
        for i in 0..chunks {
            let off = i * 4;
            let vx0 = _mm_loadu_pd(xp.add(off));
            let vx1 = _mm_loadu_pd(xp.add(off + 2));
            let vy0 = _mm_loadu_pd(yp.add(off));
            let vy1 = _mm_loadu_pd(yp.add(off + 2));
            _mm_storeu_pd(yp.add(off), _mm_add_pd(vy0, _mm_mul_pd(va, vx0)));
            _mm_storeu_pd(yp.add(off + 2), _mm_add_pd(vy1, _mm_mul_pd(va, vx1)));
        }
    }

    let tail = chunks * 4;
    for i in tail..n {
        y[i] += alpha * x[i];
    }
}
