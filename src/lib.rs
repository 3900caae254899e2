//! Parameter dependency graph for parametric designs.
//!
//! Tracks named, typed, valued parameters and the directed, labeled
//! relationships between them, and answers the one question a parametric
//! host keeps asking: given that this parameter changed, which parameters
//! must be re-evaluated, and in what order? Re-evaluation itself is the
//! caller's job; the graph only identifies the affected identifiers.
//!
//! The entry point is [`ParameterGraph`]. Grid-alignment helpers for the
//! host live in [`geometry::grid`] and never touch graph state.

pub mod analysis;
pub mod geometry;
pub mod graph;
pub mod store;

#[cfg(feature = "python")]
pub mod bindings;

// Re-export the public surface at the crate root.
pub use graph::{GraphError, ParameterGraph, Relation};
pub use store::{Constraint, ConstraintError, ParamId, Parameter, TypeTag};

// --- Python Module Definition ---
// This defines the `_core` Python module. The name `_core` is chosen to
// indicate it's an internal, compiled component.
#[cfg(feature = "python")]
mod python_module {
    use pyo3::prelude::*;

    use crate::bindings::python::{align_to_grid, validate_grid_alignment, PyParameterGraph};

    #[pymodule]
    fn _core(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_class::<PyParameterGraph>()?;
        m.add_function(wrap_pyfunction!(align_to_grid, m)?)?;
        m.add_function(wrap_pyfunction!(validate_grid_alignment, m)?)?;
        Ok(())
    }
}
