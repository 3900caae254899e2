//! storage.rs
//! Outgoing adjacency for the dependency graph, one slot per parameter.

use serde::{Serialize, Deserialize};
use smallvec::SmallVec;

use super::edge::{OutEdge, Relation};
use crate::store::ParamId;

// Most parameters have a handful of direct dependents; keep those inline.
type EdgeList = SmallVec<[OutEdge; 2]>;

/// Per-handle outgoing edge lists.
///
/// Grows in lock-step with the parameter arena: the facade calls
/// [`push_node`](EdgeStore::push_node) for every registered parameter, so
/// any handle minted by the store indexes a valid slot here. Edges are kept
/// in insertion order; the deterministic ordering of affected-set results
/// depends on that.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EdgeStore {
    out_edges: Vec<EdgeList>,
    edge_count: usize,
}

impl EdgeStore {
    pub fn new() -> Self { Self::default() }

    /// Number of adjacency slots (equals the arena's record count).
    pub fn node_count(&self) -> usize { self.out_edges.len() }

    /// Total stored edges. Parallel edges each count; deduplicated
    /// re-insertions do not.
    pub fn edge_count(&self) -> usize { self.edge_count }

    /// Appends the empty adjacency slot for a newly registered parameter.
    pub fn push_node(&mut self) {
        self.out_edges.push(EdgeList::new());
    }

    /// Inserts a directed edge, deduplicating identical triples.
    ///
    /// Returns `true` when a new edge was stored, `false` when the exact
    /// `(from, to, relation)` triple was already present (no mutation).
    /// The same ordered pair under a different label is a new edge.
    pub fn add_edge(&mut self, from: ParamId, to: ParamId, relation: Relation) -> bool {
        let list = &mut self.out_edges[from.index()];
        if list.iter().any(|e| e.target == to && e.relation == relation) {
            return false;
        }
        list.push(OutEdge { target: to, relation });
        self.edge_count += 1;
        true
    }

    /// Outgoing edges of `from`, in insertion order.
    #[inline(always)]
    pub fn outgoing(&self, from: ParamId) -> &[OutEdge] {
        &self.out_edges[from.index()]
    }
}
