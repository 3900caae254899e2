//! Defines the edge metadata types for the dependency graph.

use serde::{Serialize, Deserialize};

use crate::store::ParamId;

/// The free-text label describing the semantic nature of a dependency
/// (e.g. "derives-from", "constrains").
///
/// Carried as metadata for the host application; traversal never
/// interprets it. Two edges between the same ordered pair of parameters
/// with different labels are distinct edges.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relation(pub String);

/// One stored outgoing edge: the influenced parameter and the label the
/// dependency was registered under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutEdge {
    pub target: ParamId,
    pub relation: Relation,
}
