//! FFI surfaces. Only Python via pyo3 for now.
pub mod python;
