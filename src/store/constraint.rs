//! Value rules attached to individual parameters.
//!
//! A constraint is checked when the owning parameter's value changes, not
//! during impact traversal. Every rule is optional; an empty constraint
//! accepts everything.

use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::geometry::grid::{self, GRID_SPACING};

/// Tolerance for the step rule. Step sizes are caller-chosen and often
/// sub-millimetre, so this is tighter than the grid tolerance.
const STEP_EPSILON: f64 = 1e-9;

/// The specific rule a value update violated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConstraintError {
    #[error("Value {value} below minimum {min}")]
    BelowMinimum { value: f64, min: f64 },
    #[error("Value {value} above maximum {max}")]
    AboveMaximum { value: f64, max: f64 },
    #[error("Value {value} must be a multiple of step {step}")]
    StepMismatch { value: f64, step: f64 },
    #[error("Value {value} must align with the 25mm grid")]
    GridMisaligned { value: f64 },
}

/// Bounds and alignment rules for a parameter value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    /// Accepted values are whole multiples of this step.
    pub step: Option<f64>,
    /// Accepted values sit on the construction grid (multiples of
    /// [`GRID_SPACING`]).
    pub grid_aligned: bool,
}

impl Constraint {
    /// Checks `value` against every rule, reporting the first violation.
    ///
    /// Rule order is fixed (min, max, step, grid) so callers can rely on
    /// which violation is reported when several apply.
    pub fn check(&self, value: f64) -> Result<(), ConstraintError> {
        if let Some(min) = self.min_value {
            if value < min {
                return Err(ConstraintError::BelowMinimum { value, min });
            }
        }
        if let Some(max) = self.max_value {
            if value > max {
                return Err(ConstraintError::AboveMaximum { value, max });
            }
        }
        if let Some(step) = self.step {
            if !nearest_multiple_within(value, step, STEP_EPSILON) {
                return Err(ConstraintError::StepMismatch { value, step });
            }
        }
        if self.grid_aligned && !grid::is_value_aligned(value, GRID_SPACING) {
            return Err(ConstraintError::GridMisaligned { value });
        }
        Ok(())
    }
}

fn nearest_multiple_within(value: f64, step: f64, tol: f64) -> bool {
    let nearest = (value / step).round() * step;
    (value - nearest).abs() <= tol
}
