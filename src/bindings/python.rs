use crate::geometry::grid;
use crate::graph::ParameterGraph;
use crate::store::Constraint;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

#[pyclass(name = "_ParameterGraph")]
#[derive(Debug, Clone, Default)]
pub struct PyParameterGraph {
    inner: ParameterGraph,
}

#[pymethods]
impl PyParameterGraph {
    #[new]
    pub fn new() -> Self { Self::default() }

    pub fn add_parameter(&mut self, id: &str, name: &str, data_type: &str, value: f64) -> PyResult<()> {
        self.inner
            .add_parameter(id, name, data_type, value)
            .map(|_| ())
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    pub fn add_dependency(&mut self, from_id: &str, to_id: &str, relationship: &str) -> PyResult<()> {
        self.inner
            .add_dependency(from_id, to_id, relationship)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    pub fn get_affected_parameters(&self, changed_id: &str) -> PyResult<Vec<String>> {
        self.inner
            .affected(changed_id)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    pub fn update_value(&mut self, param_id: &str, value: f64) -> PyResult<()> {
        self.inner
            .set_value(param_id, value)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    pub fn get_parameter_value(&self, param_id: &str) -> PyResult<f64> {
        self.inner
            .lookup(param_id)
            .map(|p| p.value)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    #[pyo3(signature = (param_id, min_value=None, max_value=None, step=None, grid_aligned=false))]
    pub fn set_constraint(
        &mut self,
        param_id: &str,
        min_value: Option<f64>,
        max_value: Option<f64>,
        step: Option<f64>,
        grid_aligned: bool,
    ) -> PyResult<()> {
        let constraint = Constraint { min_value, max_value, step, grid_aligned };
        self.inner
            .set_constraint(param_id, constraint)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    pub fn contains(&self, param_id: &str) -> bool {
        self.inner.contains(param_id)
    }

    pub fn parameter_count(&self) -> usize { self.inner.parameter_count() }

    pub fn edge_count(&self) -> usize { self.inner.edge_count() }
}

/// Convert coordinates to grid-aligned points (Z is passed through).
#[pyfunction]
#[pyo3(signature = (points, grid_size = grid::GRID_SPACING))]
pub fn align_to_grid(points: Vec<[f64; 3]>, grid_size: f64) -> Vec<[f64; 3]> {
    grid::align_to_grid(&points, grid_size)
}

/// Validate grid alignment of X/Y coordinates.
#[pyfunction]
#[pyo3(signature = (points, grid_size = grid::GRID_SPACING))]
pub fn validate_grid_alignment(points: Vec<[f64; 3]>, grid_size: f64) -> bool {
    grid::is_grid_aligned(&points, grid_size)
}
