//! manager.rs
//! Wraps the low-level stores behind the validating public surface.

use serde::{Serialize, Deserialize};

use super::edge::Relation;
use super::error::GraphError;
use super::storage::EdgeStore;
use crate::analysis;
use crate::store::{Constraint, ParamId, Parameter, Registry};

/// A caller-owned parameter dependency graph.
///
/// Owns all parameter and edge data exclusively and keeps the record arena
/// and the adjacency store in lock-step. This is the only mutation and
/// query entry point; it resolves public string identifiers to handles,
/// validates inputs before any state is touched, and reports failures as
/// typed [`GraphError`] outcomes.
///
/// All operations are synchronous in-memory work. The graph has no
/// internal locking; callers that share an instance across threads wrap it
/// in their own exclusive-access discipline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParameterGraph {
    registry: Registry,
    edges: EdgeStore,
}

impl ParameterGraph {
    pub fn new() -> Self { Self::default() }

    /// Registers a new parameter and returns its handle.
    ///
    /// Fails with [`GraphError::DuplicateParameter`] when `id` is already
    /// registered; the existing record, its handle, and its edges are left
    /// untouched. Use [`set_value`](Self::set_value) to change a
    /// registered parameter.
    pub fn add_parameter(
        &mut self,
        id: &str,
        name: &str,
        type_tag: &str,
        value: f64,
    ) -> Result<ParamId, GraphError> {
        let handle = self
            .registry
            .insert(Parameter::new(id, name, type_tag, value))
            .ok_or_else(|| GraphError::DuplicateParameter { id: id.to_string() })?;
        self.edges.push_node();
        Ok(handle)
    }

    /// Looks up the record registered under `id`.
    pub fn lookup(&self, id: &str) -> Result<&Parameter, GraphError> {
        self.resolve(id).map(|h| self.registry.get(h))
    }

    /// Replaces a parameter's current value.
    ///
    /// Enforces the parameter's constraint when one is attached. No
    /// propagation happens here: callers follow up with
    /// [`affected`](Self::affected) and re-evaluate dependents themselves.
    pub fn set_value(&mut self, id: &str, value: f64) -> Result<(), GraphError> {
        let handle = self.resolve(id)?;
        if let Some(constraint) = &self.registry.get(handle).constraint {
            constraint
                .check(value)
                .map_err(|source| GraphError::ConstraintViolation { id: id.to_string(), source })?;
        }
        self.registry.get_mut(handle).value = value;
        Ok(())
    }

    /// Attaches (or replaces) a parameter's value constraint.
    ///
    /// The current value must satisfy the new constraint; otherwise the
    /// attachment is rejected and the old constraint (if any) stays.
    pub fn set_constraint(&mut self, id: &str, constraint: Constraint) -> Result<(), GraphError> {
        let handle = self.resolve(id)?;
        let current = self.registry.get(handle).value;
        constraint
            .check(current)
            .map_err(|source| GraphError::ConstraintViolation { id: id.to_string(), source })?;
        self.registry.get_mut(handle).constraint = Some(constraint);
        Ok(())
    }

    /// Inserts a directed, labeled dependency edge `from -> to`.
    ///
    /// Both endpoints are resolved before the edge set is touched, so a
    /// failure leaves it unchanged. Re-adding an identical
    /// `(from, to, relation)` triple is a successful no-op; the same pair
    /// under a different label is a new parallel edge.
    pub fn add_dependency(&mut self, from: &str, to: &str, relation: &str) -> Result<(), GraphError> {
        let from_handle = self.resolve(from)?;
        let to_handle = self.resolve(to)?;
        self.edges.add_edge(from_handle, to_handle, Relation(relation.to_string()));
        Ok(())
    }

    /// Computes the identifiers of every parameter transitively reachable
    /// from `changed`, in breadth-first level order.
    ///
    /// The changed parameter itself is never part of the result, even when
    /// a cycle leads back to it. An empty sequence means "nothing depends
    /// on this parameter" and is distinct from the [`GraphError`] returned
    /// for an unregistered identifier.
    pub fn affected(&self, changed: &str) -> Result<Vec<String>, GraphError> {
        let root = self.resolve(changed)?;
        let order = analysis::affected_downstream(&self.edges, root);
        Ok(order.into_iter().map(|h| self.registry.get(h).id.clone()).collect())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.registry.contains(id)
    }

    pub fn parameter_count(&self) -> usize {
        self.registry.count()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.edge_count()
    }

    /// Registered records in registration order.
    pub fn parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.registry.iter()
    }

    fn resolve(&self, id: &str) -> Result<ParamId, GraphError> {
        self.registry
            .resolve(id)
            .ok_or_else(|| GraphError::UnknownParameter { id: id.to_string() })
    }
}
