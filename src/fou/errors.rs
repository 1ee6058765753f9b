//! fou::errors — shared error types and Python bridges.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for the fractional
//! Ornstein–Uhlenbeck integral evaluators, together with a conversion
//! layer to Python exceptions for PyO3-based bindings. Validation and
//! selector failures are localized here while exposing a clean error
//! surface to both Rust and Python.
//!
//! Key behaviors
//! -------------
//! - Define [`IntegralResult`] and [`IntegralError`] as the canonical
//!   result and error types for the evaluator entry points and their
//!   validation helpers.
//! - Attach human-readable `Display` messages to each variant so that
//!   diagnostics are meaningful without additional context.
//! - Implement `From<IntegralError> for PyErr` to surface Rust-side
//!   failures as `ValueError` to Python callers.
//!
//! Invariants & assumptions
//! ------------------------
//! - Evaluator entry points validate inputs and return
//!   [`IntegralResult<T>`] instead of panicking; a panic indicates a
//!   programming error, not a user-facing condition.
//! - Numerical-domain failures (zero decay rates, the removable
//!   singularity at H_i + H_j = 1, quadrature non-convergence) are NOT
//!   represented here: they propagate to the caller as non-finite
//!   floats, reflecting the contract that inputs are trusted to lie in
//!   the well-posed region.
//!
//! Conventions
//! -----------
//! - Error messages are phrased in terms of domain constraints (e.g.,
//!   "must lie in (0, 2]") rather than implementation details.
//! - At the Python boundary every variant maps to a single exception
//!   class (`ValueError`) with the `Display` message preserved.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type IntegralResult<T> = Result<T, IntegralError>;

/// IntegralError — invalid-input conditions for the integral evaluators.
///
/// Variants
/// --------
/// - `InvalidHurstSum(h_ij)`
///   The combined Hurst exponent `H_i + H_j` lies outside the admissible
///   interval (0, 2].
/// - `InvalidUpperLimit(h)`
///   An upper integration limit is negative or non-finite; the integrals
///   are defined over `[0, h]` with `h ≥ 0`.
/// - `InvalidMethod(name)`
///   A method selector string does not name one of the recognized
///   evaluation paths.
///
/// Invariants
/// ----------
/// - Each variant carries the offending value so callers can log or
///   report it without retaining the full input set.
///
/// Notes
/// -----
/// - Implements [`std::error::Error`] and [`std::fmt::Display`] for
///   idiomatic `?`-based propagation, plus a feature-gated conversion to
///   `PyErr` for the binding layer.
#[derive(Debug, Clone, PartialEq)]
pub enum IntegralError {
    //------ Input validation errors ------
    InvalidHurstSum(f64),
    InvalidUpperLimit(f64),
    InvalidMethod(String),
}

impl std::error::Error for IntegralError {}

impl std::fmt::Display for IntegralError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntegralError::InvalidHurstSum(h_ij) => {
                write!(f, "Invalid Hurst sum H_i + H_j = {h_ij}. Must lie in (0, 2].")
            }
            IntegralError::InvalidUpperLimit(h) => {
                write!(f, "Invalid upper limit h = {h}. Must be finite and non-negative.")
            }
            IntegralError::InvalidMethod(name) => {
                write!(
                    f,
                    "Invalid method {name:?}. Expected 'closed_form' or 'single_integral'."
                )
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<IntegralError> for PyErr {
    fn from(err: IntegralError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
