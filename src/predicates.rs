//! Structural queries that need no traversal.
//!
//! All queries are implemented for every [LabeledGraph] through the
//! [StructuralPredicates] trait and only read from the store. With the exception of
//! [degree](StructuralPredicates::degree) they are total: an empty graph simply yields
//! `false` or an empty collection (and is considered complete).
//!
//! ```rust
//! use labgraph::graph::*;
//! use labgraph::labelgraph::LabelGraph;
//! use labgraph::predicates::StructuralPredicates;
//!
//! let graph = LabelGraph::from_edges([("a", "A", "B"), ("b", "B", "C"), ("c", "B", "C")]);
//! assert_eq!(graph.degree("B"), Ok(3));
//! assert!(graph.has_parallel_edges());
//! assert!(!graph.has_loop());
//! assert!(!graph.is_complete());
//!
//! let pairs = graph.non_adjacent_pairs();
//! assert_eq!(pairs.len(), 2);
//! assert!(pairs.contains("A-C") && pairs.contains("C-A"));
//! ```
use fxhash::FxHashSet;
use itertools::iproduct;

use crate::error::{GraphError, GraphResult};
use crate::graph::*;
use crate::iterators::*;

pub trait StructuralPredicates {
    /// Returns `"X-Z"` for every ordered pair of distinct vertices `X`, `Z` that are not
    /// joined by an edge. Both `"X-Z"` and `"Z-X"` are part of the result.
    fn non_adjacent_pairs(&self) -> PairSet;

    /// Whether some edge has identical endpoints.
    fn has_loop(&self) -> bool;

    /// Returns the degree of `u`, where a loop counts twice.
    ///
    /// Fails with [GraphError::InvalidVertex] if `u` is not contained in the graph.
    fn degree(&self, u:&str) -> GraphResult<u32>;

    /// Whether two distinct edges join the same (unordered) pair of vertices.
    fn has_parallel_edges(&self) -> bool;

    /// Returns all edges incident to `u` in insertion order. A loop is listed once.
    fn edges_on_vertex<'a>(&'a self, u:&str) -> Vec<&'a Edge>;

    /// Whether some edge joins `u` and `v`.
    fn adjacent(&self, u:&str, v:&str) -> bool;

    /// Whether every vertex is adjacent to all other vertices and to nothing else.
    /// A loop therefore makes a graph incomplete.
    fn is_complete(&self) -> bool;
}

impl<G> StructuralPredicates for G where G: LabeledGraph + ?Sized {
    fn non_adjacent_pairs(&self) -> PairSet {
        let mut adjacent:FxHashSet<(&str, &str)> = FxHashSet::default();
        for e in self.edges() {
            let (u, v) = e.endpoints();
            adjacent.insert((u, v));
            adjacent.insert((v, u));
        }

        let vertices:Vec<_> = self.vertices().collect();
        iproduct!(vertices.iter(), vertices.iter())
            .filter(|(x, z)| x != z && !adjacent.contains(&(**x, **z)))
            .map(|(x, z)| format!("{x}-{z}"))
            .collect()
    }

    fn has_loop(&self) -> bool {
        self.edges().any(|e| e.is_loop())
    }

    fn degree(&self, u:&str) -> GraphResult<u32> {
        if !self.contains(u) {
            return Err(GraphError::invalid_vertex(u))
        }

        let mut deg = 0;
        for e in self.edges() {
            let (v1, v2) = e.endpoints();
            if v1 == u && v2 == u {
                deg += 2;
            } else if v1 == u || v2 == u {
                deg += 1;
            }
        }
        Ok(deg)
    }

    fn has_parallel_edges(&self) -> bool {
        let mut pairs:FxHashSet<(&str, &str)> = FxHashSet::default();
        for e in self.edges() {
            if !pairs.insert(e.pair_key()) {
                return true
            }
        }
        false
    }

    fn edges_on_vertex<'a>(&'a self, u:&str) -> Vec<&'a Edge> {
        self.edges().filter(|e| e.touches(u)).collect()
    }

    fn adjacent(&self, u:&str, v:&str) -> bool {
        self.incident_edges(u).any(|e| e.joins(u, v))
    }

    fn is_complete(&self) -> bool {
        let all:VertexSetRef = self.vertices().collect();

        for (v, N) in self.neighbourhoods() {
            // Sets, not counts: parallel edges must not make up for a missing neighbour.
            let N:VertexSetRef = N.map(|(_, w)| w).collect();
            let expected:VertexSetRef = all.iter().filter(|&&w| w != v).cloned().collect();
            if N != expected {
                tracing::trace!(vertex = v, "neighbourhood does not cover the remaining vertices");
                return false
            }
        }
        true
    }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
