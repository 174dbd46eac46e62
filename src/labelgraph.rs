//!
//! The default graph store. Vertices and edges are kept in insertion order and every
//! vertex carries the list of its incident edges, so incidence lookups do not scan
//! the whole edge list. Loops and parallel edges are stored like any other edge.
//!
//! Graphs are built by adding vertices and edges, from an edge list, or with one of
//! the constructors for named graphs. Generated graphs use the vertices `v0`, `v1`, ...
//! and label their edges `e0`, `e1`, ... in the order they are created.
//!
//! ```rust
//! use labgraph::graph::*;
//! use labgraph::labelgraph::LabelGraph;
//!
//! let mut graph = LabelGraph::new();
//! graph.add_vertices(["A", "B", "C"]);
//! graph.add_edge("a", "A", "B").unwrap();
//! graph.add_edge("b", "B", "C").unwrap();
//! assert!(graph.add_edge("c", "C", "D").is_err());
//! assert_eq!(graph.num_edges(), 2);
//!
//! let graph = LabelGraph::from_edges([("a", "A", "B"), ("b", "B", "C"), ("l", "C", "C")]);
//! assert_eq!(graph.vertices().collect::<Vec<_>>(), vec!["A", "B", "C"]);
//! assert_eq!(graph.incident_edges("C").map(|e| e.label()).collect::<Vec<_>>(), vec!["b", "l"]);
//!
//! let graph = LabelGraph::cycle(4);
//! assert_eq!(graph.num_vertices(), 4);
//! assert_eq!(graph.num_edges(), 4);
//! ```

use fxhash::FxHashMap;
use itertools::Itertools;

use crate::error::{GraphError, GraphResult};
use crate::graph::*;

/// An implementation of [MutableLabeledGraph] with constructors for a few named graphs.
#[derive(Debug, Clone)]
pub struct LabelGraph {
    order: Vec<String>,
    incidence: FxHashMap<String, Vec<usize>>,
    edges: Vec<Edge>
}

impl PartialEq for LabelGraph {
    fn eq(&self, other: &Self) -> bool {
        if self.num_vertices() != other.num_vertices() {
            return false
        }
        if self.num_edges() != other.num_edges() {
            return false
        }
        if !self.vertices().all(|u| other.contains(u)) {
            return false
        }
        self.edge_multiset() == other.edge_multiset()
    }
}
impl Eq for LabelGraph {}

impl LabeledGraph for LabelGraph {
    fn num_vertices(&self) -> usize {
        self.order.len()
    }

    fn num_edges(&self) -> usize {
        self.edges.len()
    }

    fn contains(&self, u:&str) -> bool {
        self.incidence.contains_key(u)
    }

    fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item=&'a str> + 'a> {
        Box::new(self.order.iter().map(|u| u.as_str()))
    }

    fn edges<'a>(&'a self) -> Box<dyn Iterator<Item=&'a Edge> + 'a> {
        Box::new(self.edges.iter())
    }

    fn incident_edges<'a>(&'a self, u:&str) -> Box<dyn Iterator<Item=&'a Edge> + 'a> {
        match self.incidence.get(u) {
            Some(ids) => Box::new(ids.iter().map(move |&i| &self.edges[i])),
            None => Box::new(std::iter::empty())
        }
    }
}

impl MutableLabeledGraph for LabelGraph {
    fn new() -> LabelGraph {
        LabelGraph { order: Vec::new(),
                     incidence: FxHashMap::default(),
                     edges: Vec::new() }
    }

    fn with_capacity(n_guess:usize) -> Self {
        LabelGraph {
            order: Vec::with_capacity(n_guess),
            incidence: FxHashMap::with_capacity_and_hasher(n_guess, Default::default()),
            edges: Vec::with_capacity(n_guess)
        }
    }

    fn add_vertex(&mut self, u:&str) -> bool {
        if !self.incidence.contains_key(u) {
            self.incidence.insert(u.to_string(), Vec::new());
            self.order.push(u.to_string());
            true
        } else {
            false
        }
    }

    fn add_edge(&mut self, label:&str, u:&str, v:&str) -> GraphResult<()> {
        if !self.contains(u) {
            return Err(GraphError::invalid_vertex(u))
        }
        if !self.contains(v) {
            return Err(GraphError::invalid_vertex(v))
        }
        self.insert_edge(Edge::new(label, u, v));
        Ok(())
    }

    fn remove_edge(&mut self, label:&str) -> Option<Edge> {
        let pos = self.edges.iter().position(|e| e.label() == label)?;
        let edge = self.edges.remove(pos);
        self.reindex();
        Some(edge)
    }

    fn remove_vertex(&mut self, u:&str) -> bool {
        if self.incidence.remove(u).is_none() {
            return false
        }
        self.order.retain(|x| x != u);
        self.edges.retain(|e| !e.touches(u));
        self.reindex();
        true
    }
}

impl LabelGraph {
    /// Builds a graph from `(label, u, v)` triples. Endpoints are added as needed.
    pub fn from_edges<'a, I>(edges:I) -> LabelGraph where I: IntoIterator<Item=(&'a str, &'a str, &'a str)> {
        let mut res = LabelGraph::new();
        for (label, u, v) in edges {
            res.add_vertex(u);
            res.add_vertex(v);
            res.insert_edge(Edge::new(label, u, v));
        }

        res
    }

    /// Generates a path on `n` vertices.
    pub fn path(n:usize) -> LabelGraph {
        let mut res = LabelGraph::numbered(n);
        for u in 1..n {
            res.push_numbered(u-1, u);
        }

        res
    }

    /// Generates a cycle on `n` vertices. For `n = 1` this is a single loop and
    /// for `n = 2` a pair of parallel edges.
    pub fn cycle(n:usize) -> LabelGraph {
        let mut res = LabelGraph::numbered(n);
        for u in 0..n {
            res.push_numbered(u, (u+1) % n);
        }

        res
    }

    /// Generates a complete graph (clique) on `n` vertices.
    pub fn clique(n:usize) -> LabelGraph {
        let mut res = LabelGraph::numbered(n);
        for (u, v) in (0..n).tuple_combinations() {
            res.push_numbered(u, v);
        }

        res
    }

    /// Generates a star with `n` leaves, so `n+1` vertices total. The centre is `v0`.
    pub fn star(n:usize) -> LabelGraph {
        LabelGraph::biclique(1, n)
    }

    /// Generates a complete bipartite graph (biclique) on `s`+`t` vertices.
    pub fn biclique(s:usize, t:usize) -> LabelGraph {
        let mut res = LabelGraph::numbered(s+t);
        for u in 0..s {
            for v in s..(s+t) {
                res.push_numbered(u, v);
            }
        }

        res
    }

    fn numbered(n:usize) -> LabelGraph {
        let mut res = LabelGraph::with_capacity(n);
        for u in 0..n {
            res.add_vertex(&format!("v{u}"));
        }
        res
    }

    fn push_numbered(&mut self, u:usize, v:usize) {
        let label = format!("e{}", self.edges.len());
        self.insert_edge(Edge::new(&label, &format!("v{u}"), &format!("v{v}")));
    }

    /// Appends `edge`, whose endpoints must already exist.
    fn insert_edge(&mut self, edge:Edge) {
        let id = self.edges.len();
        let (u, v) = edge.endpoints();
        if let Some(ids) = self.incidence.get_mut(u) {
            ids.push(id);
        }
        if u != v {
            if let Some(ids) = self.incidence.get_mut(v) {
                ids.push(id);
            }
        }
        self.edges.push(edge);
    }

    fn reindex(&mut self) {
        for ids in self.incidence.values_mut() {
            ids.clear();
        }
        for (id, edge) in self.edges.iter().enumerate() {
            let (u, v) = edge.endpoints();
            if let Some(ids) = self.incidence.get_mut(u) {
                ids.push(id);
            }
            if u != v {
                if let Some(ids) = self.incidence.get_mut(v) {
                    ids.push(id);
                }
            }
        }
    }

    fn edge_multiset(&self) -> Vec<(&str, &str, &str)> {
        self.edges.iter()
            .map(|e| { let (u, v) = e.pair_key(); (e.label(), u, v) })
            .sorted()
            .collect()
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

    fn labels<'a>(it: impl Iterator<Item=&'a Edge>) -> Vec<&'a str> {
        it.map(|e| e.label()).collect()
    }

    #[test]
    fn basic_operations() {
        let mut G = LabelGraph::new();
        assert!(G.add_vertex("A"));
        assert!(G.add_vertex("B"));
        assert!(G.add_vertex("C"));
        assert!(!G.add_vertex("A"));
        assert_eq!(G.num_vertices(), 3);
        assert_eq!(G.num_edges(), 0);

        G.add_edge("a", "A", "B").unwrap();
        G.add_edge("b", "B", "C").unwrap();
        assert_eq!(G.num_edges(), 2);
        assert_eq!(labels(G.incident_edges("B")), vec!["a", "b"]);
        assert_eq!(labels(G.incident_edges("A")), vec!["a"]);
        assert_eq!(G.incident_edges("Z").count(), 0);

        assert_eq!(G.add_edge("x", "A", "Z"), Err(GraphError::InvalidVertex("Z".into())));
        assert_eq!(G.add_edge("x", "Y", "A"), Err(GraphError::InvalidVertex("Y".into())));
        assert_eq!(G.num_edges(), 2);
    }

    #[test]
    fn loops_and_parallel_edges() {
        let mut G = LabelGraph::new();
        G.add_vertices(["A", "B"]);
        G.add_edge("l", "A", "A").unwrap();
        G.add_edge("p", "A", "B").unwrap();
        G.add_edge("p", "B", "A").unwrap();

        assert_eq!(G.num_edges(), 3);
        // The loop is listed once
        assert_eq!(labels(G.incident_edges("A")), vec!["l", "p", "p"]);
        assert_eq!(labels(G.incident_edges("B")), vec!["p", "p"]);
    }

    #[test]
    fn removal() {
        let mut G = LabelGraph::from_edges([("a", "A", "B"), ("b", "B", "C"), ("c", "C", "A"), ("b", "A", "C")]);

        let e = G.remove_edge("b").unwrap();
        assert_eq!(e.endpoints(), ("B", "C"));
        assert_eq!(G.num_edges(), 3);
        assert_eq!(labels(G.incident_edges("B")), vec!["a"]);
        assert_eq!(labels(G.incident_edges("C")), vec!["c", "b"]);
        assert!(G.remove_edge("z").is_none());

        assert!(G.remove_vertex("A"));
        assert!(!G.remove_vertex("A"));
        assert!(!G.contains("A"));
        assert_eq!(G.vertices().collect::<Vec<_>>(), vec!["B", "C"]);
        assert_eq!(G.num_edges(), 0);
        assert_eq!(G.incident_edges("C").count(), 0);
    }

    #[test]
    fn equality() {
        let G = LabelGraph::from_edges([("a", "A", "B"), ("b", "B", "C")]);
        let H = LabelGraph::from_edges([("b", "C", "B"), ("a", "B", "A")]);
        assert_eq!(G, H);

        let mut H = H.clone();
        H.add_vertex("D");
        assert_ne!(G, H);
        H.remove_vertex("D");
        assert_eq!(G, H);

        let H = LabelGraph::from_edges([("a", "A", "B"), ("c", "B", "C")]);
        assert_ne!(G, H);
    }

    #[test]
    fn named_graphs() {
        let P = LabelGraph::path(4);
        assert_eq!(P.num_vertices(), 4);
        assert_eq!(labels(P.edges()), vec!["e0", "e1", "e2"]);
        assert_eq!(P.edges().next().unwrap().endpoints(), ("v0", "v1"));

        let C = LabelGraph::cycle(5);
        assert_eq!(C.num_edges(), 5);
        assert_eq!(C.edges().last().unwrap().endpoints(), ("v4", "v0"));

        assert_eq!(LabelGraph::cycle(1).edges().next().unwrap().endpoints(), ("v0", "v0"));
        assert_eq!(LabelGraph::path(0).num_vertices(), 0);
        assert_eq!(LabelGraph::path(1).num_edges(), 0);

        let K = LabelGraph::clique(5);
        assert_eq!(K.num_vertices(), 5);
        assert_eq!(K.num_edges(), 10);

        let S = LabelGraph::star(3);
        assert_eq!(S.num_vertices(), 4);
        assert_eq!(S.incident_edges("v0").count(), 3);

        let B = LabelGraph::biclique(2, 3);
        assert_eq!(B.num_edges(), 6);
    }
}
