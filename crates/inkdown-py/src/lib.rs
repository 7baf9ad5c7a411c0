//! Python bindings for the Inkdown converter and ring buffer.

use inkdown_core::{classify as core_classify, to_html as core_to_html, LineKind};
use inkdown_ring::{RingBuffer as CoreRingBuffer, RingBufferError};
use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;

fn to_py_err(e: RingBufferError) -> PyErr {
    match e {
        RingBufferError::ZeroCapacity => PyValueError::new_err(e.to_string()),
        RingBufferError::Empty | RingBufferError::Full { .. } => {
            PyIndexError::new_err(e.to_string())
        }
    }
}

// ============================================================================
// Converter
// ============================================================================

/// Convert an Inkdown document to HTML.
///
/// Args:
///     text: The whole document
///
/// Returns:
///     str: HTML with no separators between blocks
#[pyfunction]
#[pyo3(text_signature = "(text)")]
fn to_html(py: Python<'_>, text: &str) -> String {
    py.allow_threads(|| core_to_html(text))
}

/// Classify one line.
///
/// Returns:
///     tuple[str, int | None, str]: (kind, header level, raw content)
#[pyfunction]
#[pyo3(text_signature = "(line)")]
fn classify(line: &str) -> (&'static str, Option<usize>, String) {
    let kind = core_classify(line);
    let level = match kind {
        LineKind::Header { level, .. } => Some(level),
        _ => None,
    };
    (kind.name(), level, kind.content().to_string())
}

// ============================================================================
// RingBuffer
// ============================================================================

/// Fixed-capacity FIFO buffer of arbitrary Python objects.
///
/// Args:
///     capacity: Number of slots, must be positive
///
/// Raises:
///     ValueError: If capacity is zero
#[pyclass(name = "RingBuffer")]
pub struct PyRingBuffer {
    inner: CoreRingBuffer<PyObject>,
}

#[pymethods]
impl PyRingBuffer {
    #[new]
    #[pyo3(text_signature = "(capacity)")]
    fn new(capacity: usize) -> PyResult<Self> {
        let inner = CoreRingBuffer::new(capacity).map_err(to_py_err)?;
        Ok(PyRingBuffer { inner })
    }

    /// Append a value. Raises IndexError when full.
    fn write(&mut self, value: PyObject) -> PyResult<()> {
        self.inner.write(value).map_err(to_py_err)
    }

    /// Remove and return the oldest value. Raises IndexError when empty.
    fn read(&mut self) -> PyResult<PyObject> {
        self.inner.read().map_err(to_py_err)
    }

    /// Append a value, evicting and returning the oldest one when full.
    fn overwrite(&mut self, value: PyObject) -> Option<PyObject> {
        self.inner.overwrite(value)
    }

    fn clear(&mut self) {
        self.inner.clear();
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn is_full(&self) -> bool {
        self.inner.is_full()
    }

    #[getter]
    fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "RingBuffer(len={}, capacity={})",
            self.inner.len(),
            self.inner.capacity()
        )
    }
}

// ============================================================================
// Module
// ============================================================================

/// Inkdown - small Markdown dialect to HTML, plus a ring buffer.
#[pymodule]
fn pyink(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyRingBuffer>()?;
    m.add_function(wrap_pyfunction!(to_html, m)?)?;
    m.add_function(wrap_pyfunction!(classify, m)?)?;
    Ok(())
}
