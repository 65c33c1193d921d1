//! Data generation, result checking, and benchmark plumbing.
//!
//! Inputs are the ramp `x[i] = y[i] = i`, so a correct kernel leaves
//! `y[i] = (a + 1) * i`. Vectors are allocated fresh for every call so
//! repeated runs never accumulate.
//!
//! ```
//! use axpyspeed::harness::{self, HarnessConfig};
//! use axpyspeed::Kernel;
//!
//! let config = HarnessConfig::default();
//! let y = harness::run_checked(Kernel::Native, &config).unwrap();
//! assert_eq!(y[9999], 109_989.0);
//! ```

mod sink;

#[cfg(test)]
mod tests;

pub use sink::Sink;

use crate::Kernel;

/// Default vector length.
pub const N: usize = 10_000;

/// Default AXPY coefficient.
pub const A: f64 = 10.0;

/// `[0.0, 1.0, ..., (n - 1) as f64]`.
pub fn ramp(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64).collect()
}

/// Fresh `(x, y)` pair, both the ramp of length `n`.
pub fn make_data(n: usize) -> (Vec<f64>, Vec<f64>) {
    (ramp(n), ramp(n))
}

/// Which vector a [`VerifyError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vector {
    X,
    Y,
}

impl core::fmt::Display for Vector {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Vector::X => write!(f, "x"),
            Vector::Y => write!(f, "y"),
        }
    }
}

/// First violated invariant found by [`check_axpy`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VerifyError {
    /// A vector has the wrong length.
    Length { vector: Vector, expected: usize, actual: usize },
    /// `x` was modified.
    XChanged { index: usize, expected: f64, actual: f64 },
    /// `y[index]` is not `y0[index] + a * x0[index]`.
    YMismatch { index: usize, expected: f64, actual: f64 },
}

impl core::fmt::Display for VerifyError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            VerifyError::Length { vector, expected, actual } => {
                write!(f, "len({vector}) is {actual}, expected {expected}")
            }
            VerifyError::XChanged { index, expected, actual } => {
                write!(f, "x is not unchanged: x[{index}] = {actual}, expected {expected}")
            }
            VerifyError::YMismatch { index, expected, actual } => {
                write!(f, "y is not a*x+y: y[{index}] = {actual}, expected {expected}")
            }
        }
    }
}

impl std::error::Error for VerifyError {}

/// How closely `y` must match the reference value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Tolerance {
    /// Bit-identical.
    #[default]
    Exact,
    /// `|got - want| <= eps * max(1, |y0[i]|, |a * x0[i]|)`.
    ///
    /// Scaled by the operands rather than the result so that cancellation
    /// between `y0` and `a * x0` does not shrink the bound.
    Relative(f64),
}

impl Tolerance {
    /// Tolerance for kernels that may contract to FMA.
    pub const FOREIGN: Tolerance = Tolerance::Relative(4.0 * f64::EPSILON);

    /// Tolerance appropriate for `kernel` on arbitrary inputs.
    pub fn for_kernel(kernel: Kernel) -> Self {
        if kernel.is_foreign() {
            Self::FOREIGN
        } else {
            Self::Exact
        }
    }

    fn accepts(self, got: f64, want: f64, scale: f64) -> bool {
        match self {
            Tolerance::Exact => got.to_bits() == want.to_bits(),
            Tolerance::Relative(eps) => (got - want).abs() <= eps * scale.max(1.0),
        }
    }
}

/// Check one AXPY result against its inputs.
///
/// `x0`/`y0` are the inputs before the call, `x`/`y` the vectors after.
/// Checks, in order: both lengths, `x` bit-identical to `x0`, then
/// `y[i] == y0[i] + a * x0[i]` under `tolerance`. Stops at the first
/// violation.
pub fn check_axpy(
    a: f64,
    x0: &[f64],
    y0: &[f64],
    x: &[f64],
    y: &[f64],
    tolerance: Tolerance,
) -> Result<(), VerifyError> {
    let n = x0.len();
    if x.len() != n {
        return Err(VerifyError::Length { vector: Vector::X, expected: n, actual: x.len() });
    }
    if y.len() != n || y0.len() != n {
        let actual = if y.len() != n { y.len() } else { y0.len() };
        return Err(VerifyError::Length { vector: Vector::Y, expected: n, actual });
    }
    for (i, (&got, &want)) in x.iter().zip(x0).enumerate() {
        if got.to_bits() != want.to_bits() {
            return Err(VerifyError::XChanged { index: i, expected: want, actual: got });
        }
    }
    for i in 0..n {
        let ax = a * x0[i];
        let want = y0[i] + ax;
        if !tolerance.accepts(y[i], want, y0[i].abs().max(ax.abs())) {
            return Err(VerifyError::YMismatch { index: i, expected: want, actual: y[i] });
        }
    }
    Ok(())
}

/// [`check_axpy`] against ramp inputs of length `n`, exact comparison.
pub fn verify_ramp(a: f64, n: usize, x: &[f64], y: &[f64]) -> Result<(), VerifyError> {
    let r = ramp(n);
    check_axpy(a, &r, &r, x, y, Tolerance::Exact)
}

/// Harness parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarnessConfig {
    /// Vector length.
    pub len: usize,
    /// AXPY coefficient.
    pub coefficient: f64,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self { len: N, coefficient: A }
    }
}

impl HarnessConfig {
    /// Env var overriding [`HarnessConfig::len`].
    pub const LEN_VAR: &'static str = "AXPY_LEN";
    /// Env var overriding [`HarnessConfig::coefficient`].
    pub const COEFFICIENT_VAR: &'static str = "AXPY_COEFFICIENT";

    /// Defaults, overridden by `AXPY_LEN` / `AXPY_COEFFICIENT` when set.
    ///
    /// A value that does not parse, or a non-finite coefficient, is logged
    /// and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a caller-supplied lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(raw) = lookup(Self::LEN_VAR) {
            match raw.trim().parse::<usize>() {
                Ok(len) => config.len = len,
                Err(err) => log::warn!("ignoring {}={raw:?}: {err}", Self::LEN_VAR),
            }
        }
        if let Some(raw) = lookup(Self::COEFFICIENT_VAR) {
            match raw.trim().parse::<f64>() {
                Ok(a) if a.is_finite() => config.coefficient = a,
                Ok(a) => log::warn!("ignoring {}={a}: not finite", Self::COEFFICIENT_VAR),
                Err(err) => log::warn!("ignoring {}={raw:?}: {err}", Self::COEFFICIENT_VAR),
            }
        }
        config
    }

    /// Fresh ramp pair of length [`len`](Self::len).
    pub fn make_data(&self) -> (Vec<f64>, Vec<f64>) {
        make_data(self.len)
    }

    /// [`verify_ramp`] with this config's length and coefficient.
    pub fn verify(&self, x: &[f64], y: &[f64]) -> Result<(), VerifyError> {
        verify_ramp(self.coefficient, self.len, x, y)
    }
}

/// Fresh data, one kernel call, then verification. Returns `y`.
///
/// With an integral coefficient every ramp product and sum is an exact
/// integer below 2^53, so foreign kernels are held to
/// [`Tolerance::Exact`] as well. Otherwise [`Tolerance::for_kernel`].
pub fn run_checked(kernel: Kernel, config: &HarnessConfig) -> Result<Vec<f64>, VerifyError> {
    let (x, mut y) = config.make_data();
    kernel.apply(config.coefficient, &x, &mut y);

    let tolerance = if ramp_is_exact(config) {
        Tolerance::Exact
    } else {
        Tolerance::for_kernel(kernel)
    };
    let r = ramp(config.len);
    match check_axpy(config.coefficient, &r, &r, &x, &y, tolerance) {
        Ok(()) => {
            log::debug!("{kernel}: n={} a={} ok", config.len, config.coefficient);
            Ok(y)
        }
        Err(err) => {
            log::error!("{kernel}: {err}");
            Err(err)
        }
    }
}

fn ramp_is_exact(config: &HarnessConfig) -> bool {
    const EXACT_LIMIT: f64 = 9_007_199_254_740_992.0; // 2^53
    let a = config.coefficient;
    a.fract() == 0.0 && (a.abs() + 1.0) * (config.len as f64) < EXACT_LIMIT
}
