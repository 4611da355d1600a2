//! Python bindings for the circstat circular-statistics library.
//!
//! This module exposes the array API to Python via PyO3, accepting and
//! returning numpy arrays of float64.

use numpy::{IntoPyArray, PyArray1, PyArrayDyn, PyReadonlyArray1, PyReadonlyArrayDyn};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use circstat::{BinGrid, CircStatError};

/// Convert a CircStatError to a Python exception.
fn to_py_err(err: CircStatError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Build a bin grid from optional explicit edges.
///
/// Defaults to the one-degree [0, 360] grid of the library.
fn make_grid(bin_edges: Option<PyReadonlyArray1<'_, f64>>) -> PyResult<BinGrid> {
    match bin_edges {
        Some(edges) => BinGrid::new(edges.as_array().to_vec()).map_err(to_py_err),
        None => Ok(BinGrid::degrees()),
    }
}

/// Elementwise tangent of an angle array in degrees.
#[pyfunction]
fn tand<'py>(py: Python<'py>, x: PyReadonlyArrayDyn<'py, f64>) -> Bound<'py, PyArrayDyn<f64>> {
    circstat::tand(&x.as_array()).into_pyarray(py)
}

/// Elementwise sine of an angle array in degrees.
#[pyfunction]
fn sind<'py>(py: Python<'py>, x: PyReadonlyArrayDyn<'py, f64>) -> Bound<'py, PyArrayDyn<f64>> {
    circstat::sind(&x.as_array()).into_pyarray(py)
}

/// Elementwise cosine of an angle array in degrees.
#[pyfunction]
fn cosd<'py>(py: Python<'py>, x: PyReadonlyArrayDyn<'py, f64>) -> Bound<'py, PyArrayDyn<f64>> {
    circstat::cosd(&x.as_array()).into_pyarray(py)
}

/// Elementwise inverse tangent, result in degrees.
#[pyfunction]
fn arctand<'py>(py: Python<'py>, x: PyReadonlyArrayDyn<'py, f64>) -> Bound<'py, PyArrayDyn<f64>> {
    circstat::arctand(&x.as_array()).into_pyarray(py)
}

/// Elementwise inverse sine, result in degrees.
#[pyfunction]
fn arcsind<'py>(py: Python<'py>, x: PyReadonlyArrayDyn<'py, f64>) -> Bound<'py, PyArrayDyn<f64>> {
    circstat::arcsind(&x.as_array()).into_pyarray(py)
}

/// Quadrant-aware arctangent of x1/x2 in degrees, in [-180, 180].
#[pyfunction]
fn arctan2d<'py>(
    py: Python<'py>,
    x1: PyReadonlyArrayDyn<'py, f64>,
    x2: PyReadonlyArrayDyn<'py, f64>,
) -> PyResult<Bound<'py, PyArrayDyn<f64>>> {
    let angles = circstat::arctan2d(&x1.as_array(), &x2.as_array()).map_err(to_py_err)?;
    Ok(angles.into_pyarray(py))
}

/// Cartesian to polar conversion: returns (r, theta) with theta in [0, 360).
#[pyfunction]
fn cartesian_to_polar<'py>(
    py: Python<'py>,
    x: PyReadonlyArrayDyn<'py, f64>,
    y: PyReadonlyArrayDyn<'py, f64>,
) -> PyResult<(Bound<'py, PyArrayDyn<f64>>, Bound<'py, PyArrayDyn<f64>>)> {
    let (radius, theta) =
        circstat::cartesian_to_polar(&x.as_array(), &y.as_array()).map_err(to_py_err)?;
    Ok((radius.into_pyarray(py), theta.into_pyarray(py)))
}

/// Circular average of (angle, norm) vectors along an axis.
///
/// Returns (mean_angle, mean_norm) with the axis removed.
#[pyfunction]
#[pyo3(signature = (angles, norm, axis = -1))]
fn vector_average<'py>(
    py: Python<'py>,
    angles: PyReadonlyArrayDyn<'py, f64>,
    norm: PyReadonlyArrayDyn<'py, f64>,
    axis: isize,
) -> PyResult<(Bound<'py, PyArrayDyn<f64>>, Bound<'py, PyArrayDyn<f64>>)> {
    let (mean_angle, mean_norm) =
        circstat::vector_average(&angles.as_array(), &norm.as_array(), axis).map_err(to_py_err)?;
    Ok((mean_angle.into_pyarray(py), mean_norm.into_pyarray(py)))
}

/// Circular average of (angle, norm) vectors over the flattened input.
#[pyfunction]
fn vector_average_flat(
    angles: PyReadonlyArrayDyn<'_, f64>,
    norm: PyReadonlyArrayDyn<'_, f64>,
) -> PyResult<(f64, f64)> {
    circstat::vector_average_flat(&angles.as_array(), &norm.as_array()).map_err(to_py_err)
}

/// Weighted angular probability density, binned along an axis.
///
/// Returns (density, bin_centers). `bin_edges` defaults to 360
/// one-degree bins spanning [0, 360].
#[pyfunction]
#[pyo3(signature = (angles, weight, bin_edges = None, axis = -1))]
fn angular_pdf<'py>(
    py: Python<'py>,
    angles: PyReadonlyArrayDyn<'py, f64>,
    weight: PyReadonlyArrayDyn<'py, f64>,
    bin_edges: Option<PyReadonlyArray1<'py, f64>>,
    axis: isize,
) -> PyResult<(Bound<'py, PyArrayDyn<f64>>, Bound<'py, PyArray1<f64>>)> {
    let grid = make_grid(bin_edges)?;
    let (density, centers) =
        circstat::angular_pdf(&angles.as_array(), &weight.as_array(), &grid, axis)
            .map_err(to_py_err)?;
    Ok((density.into_pyarray(py), centers.into_pyarray(py)))
}

/// Per-bin average of weights, binned along an axis.
///
/// Returns (average, bin_centers); empty bins report 1.0.
#[pyfunction]
#[pyo3(signature = (angles, weight, bin_edges = None, axis = -1))]
fn angular_average<'py>(
    py: Python<'py>,
    angles: PyReadonlyArrayDyn<'py, f64>,
    weight: PyReadonlyArrayDyn<'py, f64>,
    bin_edges: Option<PyReadonlyArray1<'py, f64>>,
    axis: isize,
) -> PyResult<(Bound<'py, PyArrayDyn<f64>>, Bound<'py, PyArray1<f64>>)> {
    let grid = make_grid(bin_edges)?;
    let (averages, centers) =
        circstat::angular_average(&angles.as_array(), &weight.as_array(), &grid, axis)
            .map_err(to_py_err)?;
    Ok((averages.into_pyarray(py), centers.into_pyarray(py)))
}

/// Python module for circstat circular statistics.
#[pymodule]
fn _circstat(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(tand, m)?)?;
    m.add_function(wrap_pyfunction!(sind, m)?)?;
    m.add_function(wrap_pyfunction!(cosd, m)?)?;
    m.add_function(wrap_pyfunction!(arctand, m)?)?;
    m.add_function(wrap_pyfunction!(arcsind, m)?)?;
    m.add_function(wrap_pyfunction!(arctan2d, m)?)?;
    m.add_function(wrap_pyfunction!(cartesian_to_polar, m)?)?;
    m.add_function(wrap_pyfunction!(vector_average, m)?)?;
    m.add_function(wrap_pyfunction!(vector_average_flat, m)?)?;
    m.add_function(wrap_pyfunction!(angular_pdf, m)?)?;
    m.add_function(wrap_pyfunction!(angular_average, m)?)?;

    // Add version
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
