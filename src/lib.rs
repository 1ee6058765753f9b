//! fou_integrals — fractional OU covariance integrals with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the integral evaluators to Python via the `_fou_integrals`
//! extension module. The crate evaluates the definite integral
//!
//!   I(h) = ∫₀ʰ ∫₋∞⁰ exp(aᵢu + aⱼv)·(u − v)^(Hᵢ+Hⱼ−2) dv du
//!
//! arising in the correlation structure of Ornstein–Uhlenbeck-type
//! processes driven by fractional Brownian motion, by three
//! interchangeable methods that are validated against each other.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`fou` and `numerics`) as the
//!   public crate surface.
//! - When the `python-bindings` feature is enabled, define the
//!   `#[pyfunction]` wrappers and the `#[pymodule]` initializer for the
//!   `_fou_integrals` Python extension, including string-based method
//!   selection and array-valued upper limits.
//!
//! Invariants & assumptions
//! ------------------------
//! - All heavy numerical work is implemented in the inner Rust modules;
//!   this file performs only FFI glue, input conversion, and error
//!   mapping.
//! - The Python-visible functions mirror the signatures and invariants
//!   of their Rust counterparts; on successful conversion from Python
//!   objects, the invariants documented in `fou::integral` hold.
//!
//! Conventions
//! -----------
//! - The library is pure: no I/O, no logging, no shared mutable state.
//!   Invalid inputs surface as `ValueError` in Python and as
//!   [`fou::IntegralError`] in Rust; numerical-domain violations
//!   propagate as non-finite floats in both surfaces.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend directly on [`fou`] (see the
//!   `fou::prelude`) and can ignore the PyO3 items guarded by the
//!   `python-bindings` feature.
//! - External Python users interact with the `_fou_integrals` module,
//!   typically wrapped by a thin pure-Python facade.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner
//!   modules and by the cross-method integration suite under `tests/`.
//! - Binding smoke tests belong at the Python level and are not part of
//!   this crate's test suite.

pub mod fou;
pub mod numerics;
pub mod utils;

#[cfg(feature = "python-bindings")]
use std::str::FromStr;

#[cfg(feature = "python-bindings")]
use ndarray::Array1;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    fou::{
        Method, integral, integral_elementwise, integral_h2, integral_h2_elementwise,
        integral_quad,
    },
    utils::extract_f64_array,
};

/// Python-facing wrapper for the degenerate-case formula (Hᵢ+Hⱼ = 2).
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "integral_h2", text_signature = "(h, a_i, a_j, /)")]
fn py_integral_h2(h: f64, a_i: f64, a_j: f64) -> f64 {
    integral_h2(h, a_i, a_j)
}

/// Elementwise degenerate-case formula over a 1-D array of upper limits.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "integral_h2_elementwise", text_signature = "(h, a_i, a_j, /)")]
fn py_integral_h2_elementwise<'py>(
    py: Python<'py>, h: &Bound<'py, PyAny>, a_i: f64, a_j: f64,
) -> PyResult<Vec<f64>> {
    let arr = extract_f64_array(py, h)?;
    let slice = arr.as_slice().map_err(|_| {
        PyValueError::new_err("h must be a 1-D contiguous float64 array or sequence")
    })?;
    let hs = Array1::from(slice.to_vec());
    Ok(integral_h2_elementwise(&hs, a_i, a_j).to_vec())
}

/// Python-facing wrapper for the general-case evaluator.
///
/// Accepts the method selector as a string (`'closed_form'` or
/// `'single_integral'`, defaulting to the former) and raises
/// `ValueError` for invalid Hurst sums, upper limits, or selectors.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "integral",
    signature = (h, a_i, a_j, h_i, h_j, method = None),
    text_signature = "(h, a_i, a_j, h_i, h_j, /, method='closed_form')"
)]
fn py_integral(
    h: f64, a_i: f64, a_j: f64, h_i: f64, h_j: f64, method: Option<&str>,
) -> PyResult<f64> {
    let method = match method {
        Some(name) => Method::from_str(name)?,
        None => Method::ClosedForm,
    };
    Ok(integral(h, a_i, a_j, h_i, h_j, method)?)
}

/// Elementwise general-case evaluation over a 1-D array of upper limits.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    name = "integral_elementwise",
    signature = (h, a_i, a_j, h_i, h_j, method = None),
    text_signature = "(h, a_i, a_j, h_i, h_j, /, method='closed_form')"
)]
fn py_integral_elementwise<'py>(
    py: Python<'py>, h: &Bound<'py, PyAny>, a_i: f64, a_j: f64, h_i: f64, h_j: f64,
    method: Option<&str>,
) -> PyResult<Vec<f64>> {
    let method = match method {
        Some(name) => Method::from_str(name)?,
        None => Method::ClosedForm,
    };
    let arr = extract_f64_array(py, h)?;
    let slice = arr.as_slice().map_err(|_| {
        PyValueError::new_err("h must be a 1-D contiguous float64 array or sequence")
    })?;
    let hs = Array1::from(slice.to_vec());
    Ok(integral_elementwise(&hs, a_i, a_j, h_i, h_j, method)?.to_vec())
}

/// Python-facing wrapper for the double-quadrature reference oracle.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(name = "integral_quad", text_signature = "(h, a_i, a_j, h_i, h_j, /)")]
fn py_integral_quad(h: f64, a_i: f64, a_j: f64, h_i: f64, h_j: f64) -> f64 {
    integral_quad(h, a_i, a_j, h_i, h_j)
}

/// _fou_integrals — PyO3 module initializer for the Python extension.
///
/// Registers the evaluator functions on the `_fou_integrals` module; a
/// thin pure-Python package is expected to wrap this surface. Invoked
/// automatically by Python when importing the compiled extension.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _fou_integrals<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_integral_h2, m)?)?;
    m.add_function(wrap_pyfunction!(py_integral_h2_elementwise, m)?)?;
    m.add_function(wrap_pyfunction!(py_integral, m)?)?;
    m.add_function(wrap_pyfunction!(py_integral_elementwise, m)?)?;
    m.add_function(wrap_pyfunction!(py_integral_quad, m)?)?;
    Ok(())
}
