//! Defines the error type for graph mutation and query operations.

use thiserror::Error;

use crate::store::ConstraintError;

/// Failure conditions of the public graph surface.
///
/// Every failure is synchronous and local to the single invocation; a
/// rejected operation leaves the graph exactly as it was.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// An operation referenced an identifier that is not registered.
    #[error("Parameter '{id}' not found")]
    UnknownParameter { id: String },

    /// `add_parameter` reused an identifier that is already registered.
    #[error("Parameter '{id}' is already registered")]
    DuplicateParameter { id: String },

    /// A value update or constraint attachment failed the parameter's
    /// constraint.
    #[error("Invalid value for parameter '{id}': {source}")]
    ConstraintViolation {
        id: String,
        #[source]
        source: ConstraintError,
    },
}
