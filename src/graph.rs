//! Basic types and the traits every graph store implements.
//!
//! Vertices are identified by unique string labels. Edges carry a label of their
//! own, which need not be unique, and two endpoints which may coincide (a *loop*).
//! Several edges may join the same pair of vertices (*parallel* edges). All edges
//! are undirected.
use fxhash::{FxHashMap, FxHashSet};

use crate::error::GraphResult;

pub type VertexSet = FxHashSet<String>;
pub type VertexSetRef<'a> = FxHashSet<&'a str>;
pub type VertexMap<T> = FxHashMap<String, T>;

/// A set of `"X-Z"` strings naming ordered vertex pairs.
pub type PairSet = FxHashSet<String>;

/// An undirected, labelled edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    label: String,
    v1: String,
    v2: String
}

impl Edge {
    pub fn new(label:&str, v1:&str, v2:&str) -> Self {
        Edge { label: label.to_string(), v1: v1.to_string(), v2: v2.to_string() }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn v1(&self) -> &str {
        &self.v1
    }

    pub fn v2(&self) -> &str {
        &self.v2
    }

    pub fn endpoints(&self) -> (&str, &str) {
        (&self.v1, &self.v2)
    }

    pub fn is_loop(&self) -> bool {
        self.v1 == self.v2
    }

    /// Whether `u` is one of the endpoints.
    pub fn touches(&self, u:&str) -> bool {
        self.v1 == u || self.v2 == u
    }

    /// Whether this edge joins `u` and `v`, in either direction.
    pub fn joins(&self, u:&str, v:&str) -> bool {
        (self.v1 == u && self.v2 == v) || (self.v1 == v && self.v2 == u)
    }

    /// Returns the endpoint that is not `u`. For a loop this is `u` itself.
    ///
    /// The result is only meaningful if `u` is an endpoint of the edge.
    pub fn opposite(&self, u:&str) -> &str {
        if self.v1 == u { &self.v2 } else { &self.v1 }
    }

    /// The endpoints in sorted order, which identifies the edge up to direction.
    pub fn pair_key(&self) -> (&str, &str) {
        if self.v1 <= self.v2 {
            (&self.v1, &self.v2)
        } else {
            (&self.v2, &self.v1)
        }
    }
}

/// Read-only view of a labelled undirected graph.
pub trait LabeledGraph {
    fn num_vertices(&self) -> usize;
    fn num_edges(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.num_vertices() == 0
    }

    fn contains(&self, u:&str) -> bool;

    /// Iterates over all vertex labels in insertion order.
    fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item=&'a str> + 'a>;

    /// Iterates over all edges in insertion order.
    fn edges<'a>(&'a self) -> Box<dyn Iterator<Item=&'a Edge> + 'a>;

    /// Iterates over all edges that have `u` as an endpoint. Loops are returned
    /// once. Yields nothing if `u` is not contained in the graph.
    fn incident_edges<'a>(&'a self, u:&str) -> Box<dyn Iterator<Item=&'a Edge> + 'a> {
        let u = u.to_string();
        Box::new(self.edges().filter(move |e| e.touches(&u)))
    }
}

pub trait MutableLabeledGraph: LabeledGraph {
    fn new() -> Self;
    fn with_capacity(n_guess:usize) -> Self;

    /// Adds the vertex `u`. Returns `false` if it already existed.
    fn add_vertex(&mut self, u:&str) -> bool;

    /// Adds an edge labelled `label` between `u` and `v`. Both endpoints must
    /// already be contained in the graph.
    fn add_edge(&mut self, label:&str, u:&str, v:&str) -> GraphResult<()>;

    /// Removes the earliest inserted edge carrying `label`.
    fn remove_edge(&mut self, label:&str) -> Option<Edge>;

    /// Removes `u` together with all its incident edges.
    fn remove_vertex(&mut self, u:&str) -> bool;

    fn add_vertices<'a, I>(&mut self, vertices:I) where I: IntoIterator<Item=&'a str> {
        for u in vertices {
            self.add_vertex(u);
        }
    }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn edge_endpoints() {
        let e = Edge::new("a", "B", "A");
        assert_eq!(e.endpoints(), ("B", "A"));
        assert_eq!(e.pair_key(), ("A", "B"));
        assert_eq!(e.opposite("A"), "B");
        assert_eq!(e.opposite("B"), "A");
        assert!(e.joins("A", "B"));
        assert!(e.joins("B", "A"));
        assert!(!e.joins("A", "A"));
        assert!(!e.is_loop());
    }

    #[test]
    fn loop_edge() {
        let e = Edge::new("l", "A", "A");
        assert!(e.is_loop());
        assert!(e.touches("A"));
        assert!(!e.touches("B"));
        assert_eq!(e.opposite("A"), "A");
        assert_eq!(e.pair_key(), ("A", "A"));
    }
}
