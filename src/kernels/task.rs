//! One task per element.
//!
//! This is a performance anti-pattern kept for comparison: at one
//! multiply-add per task, scheduling overhead dwarfs the arithmetic.

/// Spawns one rayon task per index and blocks until all of them finish.
///
/// Each task owns a distinct `&mut f64` taken from `y`, so no lock guards
/// `y`. [`rayon::scope`] is the completion barrier: it does not return
/// until every spawned task has run. Tasks run in no particular order.
///
/// # Panics
/// Panics if `x.len() != y.len()`.
pub fn axpy_task_per_element(a: f64, x: &[f64], y: &mut [f64]) {
    assert_eq!(x.len(), y.len(), "x/y length mismatch");
    rayon::scope(|s| {
        for (yi, &xi) in y.iter_mut().zip(x) {
            s.spawn(move |_| *yi += a * xi);
        }
    });
}
