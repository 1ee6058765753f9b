//! Conversion helpers for the PyO3 binding surface.
//!
//! Purpose
//! -------
//! Normalize Python array-like inputs (numpy arrays, pandas Series,
//! plain sequences of floats) into contiguous read-only `f64` views for
//! the elementwise evaluator entry points. Everything here is gated on
//! the `python-bindings` feature; native Rust callers pass
//! `ndarray::Array1<f64>` directly and never touch this module.

#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

#[cfg(feature = "python-bindings")]
use pyo3::types::PyAny;

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

/// Extract a 1-D contiguous `f64` array from a numpy array, a pandas
/// Series (via `to_numpy`), or any sequence of floats, copying only
/// when the input is not already a contiguous float64 buffer.
#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64",
        )
    })?;
    Ok(vec.into_pyarray(py).readonly())
}
