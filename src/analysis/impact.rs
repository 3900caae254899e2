use std::collections::VecDeque;

use crate::graph::storage::EdgeStore;
use crate::store::ParamId;

/// Collects every handle transitively reachable from `changed` through
/// outgoing edges, in breadth-first level order.
///
/// Level order means immediate dependents come first, then their
/// dependents, which is the order a caller re-evaluating values wants to
/// walk. Each reachable handle appears exactly once, at its first
/// (shortest-distance) discovery; ties within a level follow edge
/// insertion order, so repeated calls on an unchanged graph return
/// identical sequences.
///
/// `changed` itself is pre-marked visited and never emitted, so self-loops
/// and cycles leading back to it cannot re-introduce it. Targets are
/// marked at discovery time, which also bounds the walk to one visit per
/// registered parameter on cyclic graphs.
pub fn affected_downstream(edges: &EdgeStore, changed: ParamId) -> Vec<ParamId> {
    let mut visited = vec![false; edges.node_count()];
    let mut order = Vec::new();
    let mut frontier = VecDeque::new();

    visited[changed.index()] = true;
    frontier.push_back(changed);

    while let Some(node) = frontier.pop_front() {
        for edge in edges.outgoing(node) {
            let t = edge.target;
            if !visited[t.index()] {
                visited[t.index()] = true;
                order.push(t);
                frontier.push_back(t);
            }
        }
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::edge::Relation;

    fn rel(s: &str) -> Relation { Relation(s.to_string()) }

    fn store_with_edges(nodes: usize, edges: &[(u32, u32)]) -> EdgeStore {
        let mut s = EdgeStore::new();
        for _ in 0..nodes { s.push_node(); }
        for &(from, to) in edges {
            s.add_edge(ParamId(from), ParamId(to), rel("derives-from"));
        }
        s
    }

    fn ids(v: &[u32]) -> Vec<ParamId> { v.iter().map(|&i| ParamId(i)).collect() }

    #[test]
    fn no_outgoing_edges_yields_empty_sequence() {
        let s = store_with_edges(3, &[]);
        assert!(affected_downstream(&s, ParamId(0)).is_empty());
    }

    #[test]
    fn chain_is_reported_in_distance_order() {
        // 0 -> 1 -> 2 -> 3
        let s = store_with_edges(4, &[(0, 1), (1, 2), (2, 3)]);
        assert_eq!(affected_downstream(&s, ParamId(0)), ids(&[1, 2, 3]));
        assert_eq!(affected_downstream(&s, ParamId(2)), ids(&[3]));
    }

    #[test]
    fn level_order_puts_direct_dependents_before_indirect() {
        // 0 -> 1, 0 -> 2, 1 -> 3, 2 -> 3 (diamond): 3 is only reachable
        // through a longer path and must come after both level-1 nodes.
        let s = store_with_edges(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]);
        assert_eq!(affected_downstream(&s, ParamId(0)), ids(&[1, 2, 3]));
    }

    #[test]
    fn ties_within_a_level_follow_edge_insertion_order() {
        let s = store_with_edges(3, &[(0, 2), (0, 1)]);
        assert_eq!(affected_downstream(&s, ParamId(0)), ids(&[2, 1]));
    }

    #[test]
    fn cycle_back_to_the_root_terminates_and_excludes_it() {
        // 0 -> 1 -> 2 -> 0
        let s = store_with_edges(3, &[(0, 1), (1, 2), (2, 0)]);
        assert_eq!(affected_downstream(&s, ParamId(0)), ids(&[1, 2]));
    }

    #[test]
    fn self_loop_on_the_root_is_ignored() {
        let s = store_with_edges(2, &[(0, 0), (0, 1)]);
        assert_eq!(affected_downstream(&s, ParamId(0)), ids(&[1]));
    }

    #[test]
    fn self_loop_downstream_appears_once() {
        // 0 -> 1, 1 -> 1
        let s = store_with_edges(2, &[(0, 1), (1, 1)]);
        assert_eq!(affected_downstream(&s, ParamId(0)), ids(&[1]));
    }

    #[test]
    fn inner_cycle_visits_each_member_once() {
        // 0 -> 1 -> 2 -> 1
        let s = store_with_edges(3, &[(0, 1), (1, 2), (2, 1)]);
        assert_eq!(affected_downstream(&s, ParamId(0)), ids(&[1, 2]));
    }

    #[test]
    fn parallel_edges_collapse_to_one_membership() {
        let mut s = store_with_edges(2, &[]);
        s.add_edge(ParamId(0), ParamId(1), rel("r1"));
        s.add_edge(ParamId(0), ParamId(1), rel("r2"));
        assert_eq!(affected_downstream(&s, ParamId(0)), ids(&[1]));
    }

    #[test]
    fn repeated_calls_return_identical_sequences() {
        let s = store_with_edges(5, &[(0, 3), (0, 1), (1, 4), (3, 2), (2, 0)]);
        let first = affected_downstream(&s, ParamId(0));
        assert_eq!(affected_downstream(&s, ParamId(0)), first);
    }
}
