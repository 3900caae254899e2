use serde::{Serialize, Deserialize};

use super::constraint::Constraint;

/// A unique, stable handle for a parameter within one graph instance.
///
/// Handles are contiguous positions into the record arena. They are an
/// internal efficiency detail; the public contract stays keyed by the
/// string identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct ParamId(pub u32);

impl ParamId {
    #[inline(always)]
    pub fn index(&self) -> usize { self.0 as usize }
    pub fn new(idx: usize) -> Self { Self(idx as u32) }
}

/// The free-text category of a parameter (e.g. "length", "angle").
///
/// Opaque to the core: it is carried for the host application and never
/// interpreted numerically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeTag(pub String);

/// A single parameter record of a parametric design.
///
/// The record is the "skeleton" entry for one named quantity. The graph
/// tracks which other parameters it influences; recomputing dependent
/// values after a change is the caller's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// The unique string identifier this record is registered under.
    pub id: String,
    /// A human-readable display name (e.g. "Panel Width").
    pub name: String,
    /// The opaque category tag.
    pub type_tag: TypeTag,
    /// The current numeric value.
    pub value: f64,
    /// Optional value rules enforced on updates.
    pub constraint: Option<Constraint>,
}

impl Parameter {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        type_tag: impl Into<String>,
        value: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            type_tag: TypeTag(type_tag.into()),
            value,
            constraint: None,
        }
    }

    /// Builder-style attachment of a constraint at construction time.
    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraint = Some(constraint);
        self
    }
}
