//! The parameter store: records, value constraints, and the arena registry.
pub mod constraint;
pub mod registry;
pub mod types;

// Re-export key types for convenient access
pub use constraint::{Constraint, ConstraintError};
pub use registry::Registry;
pub use types::{ParamId, Parameter, TypeTag};
