//! External BLAS `daxpy` behind a backend switch.
//!
//! [`Blas`] is the dispatcher: it carries the selected [`Backend`] and
//! forwards every [`Blas::daxpy`] call to it. The harness builds one per
//! benchmark group and picks the backend up front, so there is no global
//! state to reset between groups.
//!
//! ## Backends
//!
//! - [`Backend::Native`]: pure Rust, `nalgebra`'s `Matrix::axpy` over
//!   borrowed vector views (no copy, no allocation).
//! - `Backend::Cblas` (feature `cblas`): `cblas_daxpy` from a system
//!   OpenBLAS, reached through the `cblas` crate.
//!
//! ```
//! use axpyspeed::blas::{Backend, Blas};
//!
//! let blas = Blas::new(Backend::Native);
//! let x = [1.0, 2.0, 3.0];
//! let mut y = [1.0, 1.0, 1.0];
//! blas.daxpy(3, 2.0, &x, 1, &mut y, 1).unwrap();
//! assert_eq!(y, [3.0, 5.0, 7.0]);
//! ```

mod native;

#[cfg(feature = "cblas")]
mod openblas;


/// Which operand a [`BlasError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    X,
    Y,
}

impl core::fmt::Display for Operand {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Operand::X => write!(f, "x"),
            Operand::Y => write!(f, "y"),
        }
    }
}

/// Errors from [`Blas::daxpy`] argument checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlasError {
    /// Only unit stride is supported.
    UnsupportedIncrement { operand: Operand, inc: isize },
    /// Operand holds fewer than `n` elements.
    TooShort { operand: Operand, n: usize, len: usize },
    /// `n` does not fit the backend's integer type.
    LengthOverflow { n: usize },
}

impl core::fmt::Display for BlasError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BlasError::UnsupportedIncrement { operand, inc } => {
                write!(f, "inc{operand} = {inc}: only unit stride is supported")
            }
            BlasError::TooShort { operand, n, len } => {
                write!(f, "{operand} has {len} elements, need at least n = {n}")
            }
            BlasError::LengthOverflow { n } => {
                write!(f, "n = {n} exceeds the backend's integer range")
            }
        }
    }
}

impl std::error::Error for BlasError {}

/// Concrete implementation a [`Blas`] dispatcher forwards to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// Pure-Rust fallback built on `nalgebra`.
    #[default]
    Native,
    /// Foreign-compiled `cblas_daxpy` (OpenBLAS).
    #[cfg(feature = "cblas")]
    Cblas,
}

impl Backend {
    /// Every backend compiled into this build.
    pub fn available() -> &'static [Backend] {
        #[cfg(feature = "cblas")]
        const AVAILABLE: &[Backend] = &[Backend::Native, Backend::Cblas];
        #[cfg(not(feature = "cblas"))]
        const AVAILABLE: &[Backend] = &[Backend::Native];
        AVAILABLE
    }

    /// Short label used in benchmark and kernel names.
    pub const fn name(self) -> &'static str {
        match self {
            Backend::Native => "native",
            #[cfg(feature = "cblas")]
            Backend::Cblas => "cblas",
        }
    }

    /// Whether calls leave Rust for foreign-compiled code.
    pub const fn is_foreign(self) -> bool {
        match self {
            Backend::Native => false,
            #[cfg(feature = "cblas")]
            Backend::Cblas => true,
        }
    }
}

/// BLAS level-1 dispatcher with a switchable backend.
#[derive(Debug, Clone, Default)]
pub struct Blas {
    backend: Backend,
}

impl Blas {
    pub const fn new(backend: Backend) -> Self {
        Self { backend }
    }

    /// The backend subsequent calls go to.
    pub const fn backend(&self) -> Backend {
        self.backend
    }

    /// Switch the backend for all subsequent calls on this dispatcher.
    pub fn use_backend(&mut self, backend: Backend) {
        if self.backend != backend {
            log::debug!("blas backend: {} -> {}", self.backend.name(), backend.name());
        }
        self.backend = backend;
    }

    /// `y[i] += alpha * x[i]` for `i` in `0..n`, standard `daxpy` contract.
    ///
    /// Only the first `n` elements of each operand are touched. `n == 0` is
    /// a no-op and never reaches the backend.
    pub fn daxpy(
        &self,
        n: usize,
        alpha: f64,
        x: &[f64],
        incx: isize,
        y: &mut [f64],
        incy: isize,
    ) -> Result<(), BlasError> {
        if incx != 1 {
            return Err(BlasError::UnsupportedIncrement { operand: Operand::X, inc: incx });
        }
        if incy != 1 {
            return Err(BlasError::UnsupportedIncrement { operand: Operand::Y, inc: incy });
        }
        if x.len() < n {
            return Err(BlasError::TooShort { operand: Operand::X, n, len: x.len() });
        }
        if y.len() < n {
            return Err(BlasError::TooShort { operand: Operand::Y, n, len: y.len() });
        }
        if n == 0 {
            return Ok(());
        }

        let (x, y) = (&x[..n], &mut y[..n]);
        match self.backend {
            Backend::Native => native::daxpy(alpha, x, y),
            #[cfg(feature = "cblas")]
            Backend::Cblas => openblas::daxpy(alpha, x, y)?,
        }
        Ok(())
    }
}
