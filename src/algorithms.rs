//! Traversal-based algorithms, available on every [LabeledGraph] through [GraphAlgorithms].
//!
//! ```rust
//! use labgraph::graph::*;
//! use labgraph::labelgraph::LabelGraph;
//! use labgraph::algorithms::GraphAlgorithms;
//!
//! let graph = LabelGraph::from_edges([("a", "A", "B"), ("b", "B", "C"), ("c", "B", "D")]);
//! assert!(!graph.has_cycle());
//! assert!(graph.is_bipartite());
//! assert_eq!(graph.tree_leaves(), Some(vec!["A".to_string(), "C".to_string(), "D".to_string()]));
//! assert_eq!(graph.dfs("C").unwrap(), vec!["b", "a", "c"]);
//! ```
use std::ops::ControlFlow;

use union_find_rs::prelude::*;

use crate::error::{GraphError, GraphResult};
use crate::graph::*;
use crate::traversal::*;

pub trait GraphAlgorithms {
    /// Builds the depth-first spanning tree of the component containing `root`.
    ///
    /// Incident edges are followed in ascending label order. The returned graph holds
    /// its edges in the order in which the search added them.
    fn dfs_tree(&self, root:&str) -> GraphResult<Self> where Self: MutableLabeledGraph + Sized;

    /// Returns the labels of the edges of [dfs_tree](GraphAlgorithms::dfs_tree) in the
    /// order in which they were added.
    fn dfs(&self, root:&str) -> GraphResult<Vec<String>> where Self: MutableLabeledGraph + Sized;

    /// Whether some component contains a cycle. Loops and parallel edges are cycles.
    fn has_cycle(&self) -> bool;

    /// Returns the leaves (vertices incident to exactly one edge) if the graph is a tree,
    /// and `None` otherwise. The empty graph is not a tree.
    fn tree_leaves(&self) -> Option<Vec<String>>;

    fn is_tree(&self) -> bool {
        self.tree_leaves().is_some()
    }

    /// Computes a proper colouring with two colours, or `None` if none exists.
    fn two_colouring(&self) -> Option<VertexMap<Colour>>;

    fn is_bipartite(&self) -> bool {
        self.two_colouring().is_some()
    }

    /// Returns the vertex sets of all connected components.
    fn components(&self) -> Vec<VertexSet>;

    /// Whether the graph has at most one component.
    fn is_connected(&self) -> bool {
        self.components().len() <= 1
    }
}

impl<G> GraphAlgorithms for G where G: LabeledGraph {
    fn dfs_tree(&self, root:&str) -> GraphResult<Self> where Self: MutableLabeledGraph + Sized {
        if !self.contains(root) {
            return Err(GraphError::invalid_vertex(root))
        }

        let mut builder = SpanningTree::<G>::rooted_at(root);
        if let ControlFlow::Break(()) = walk(self, root, WalkOrder::DepthFirst, &mut WalkContext::new(), &mut builder) {
            tracing::debug!(root, "dfs tree construction stopped early");
        }
        let tree = builder.into_tree()?;

        tracing::debug!(root, vertices = tree.num_vertices(), edges = tree.num_edges(), "built dfs tree");
        Ok(tree)
    }

    fn dfs(&self, root:&str) -> GraphResult<Vec<String>> where Self: MutableLabeledGraph + Sized {
        let tree = self.dfs_tree(root)?;
        Ok(tree.edges().map(|e| e.label().to_string()).collect())
    }

    fn has_cycle(&self) -> bool {
        let mut finder = CycleFinder::default();
        match walk_all(self, WalkOrder::DepthFirst, &mut WalkContext::new(), &mut finder) {
            ControlFlow::Break(()) => {
                tracing::debug!(closing = ?finder.closing_pair(), "found a cycle");
                true
            }
            ControlFlow::Continue(()) => {
                tracing::debug!("graph is acyclic");
                false
            }
        }
    }

    fn tree_leaves(&self) -> Option<Vec<String>> {
        let root = self.vertices().next()?;

        let mut ctx = WalkContext::new();
        let mut finder = CycleFinder::default();
        if let ControlFlow::Break(()) = walk(self, root, WalkOrder::DepthFirst, &mut ctx, &mut finder) {
            tracing::debug!(closing = ?finder.closing_pair(), "not a tree: contains a cycle");
            return None
        }

        if ctx.num_seen() != self.num_vertices() {
            tracing::debug!(reached = ctx.num_seen(), vertices = self.num_vertices(), "not a tree: disconnected");
            return None
        }

        let leaves:Vec<String> = self.vertices()
                                     .filter(|&u| self.incident_edges(u).count() == 1)
                                     .map(|u| u.to_string())
                                     .collect();
        tracing::debug!(leaves = leaves.len(), "graph is a tree");
        Some(leaves)
    }

    fn two_colouring(&self) -> Option<VertexMap<Colour>> {
        let mut colouring = TwoColouring::default();
        if let ControlFlow::Break(()) = walk_all(self, WalkOrder::BreadthFirst, &mut WalkContext::new(), &mut colouring) {
            tracing::debug!(conflict = ?colouring.conflict(), "not bipartite");
            return None
        }

        tracing::debug!("found a two-colouring");
        colouring.into_colouring()
    }

    #[allow(unused_must_use)]
    fn components(&self) -> Vec<VertexSet> {
        let mut dsets:DisjointSets<&str> = DisjointSets::new();

        for v in self.vertices() {
            // This returns a Result<()> but the potential 'error' (adding
            // an element that already exists) will not happen.
            dsets.make_set(v);
        }

        for e in self.edges() {
            // Only join distinct sets: union-find-rs asserts that the
            // roots it links differ.
            let (u, v) = e.endpoints();
            if let (Ok(ru), Ok(rv)) = (dsets.find_set(&u), dsets.find_set(&v)) {
                if ru != rv {
                    dsets.union(&u, &v);
                }
            }
        }

        let mut res = Vec::new();
        for comp in dsets {
            res.push(comp.iter().map(|u| u.to_string()).collect())
        }
        res
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
    use crate::labelgraph::LabelGraph;
    use crate::predicates::StructuralPredicates;

    use rand::prelude::*;
    use rand_chacha::ChaCha8Rng;

    fn strings(labels:&[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    /// A random tree on `n` vertices where vertex `i` hangs off some earlier vertex.
    fn random_tree(n:usize, rng:&mut ChaCha8Rng) -> LabelGraph {
        let mut G = LabelGraph::new();
        G.add_vertex("v0");
        for i in 1..n {
            let p = rng.gen_range(0..i);
            let u = format!("v{i}");
            G.add_vertex(&u);
            G.add_edge(&format!("e{i:04}"), &format!("v{p}"), &u).unwrap();
        }
        G
    }

    // A -a- B -b- C -c- D -d- A
    fn square() -> LabelGraph {
        LabelGraph::from_edges([("a", "A", "B"), ("b", "B", "C"), ("c", "C", "D"), ("d", "D", "A")])
    }

    #[test]
    fn end_to_end() {
        let G = square();
        assert!(G.has_cycle());
        assert!(G.is_bipartite());
        assert!(!G.is_tree());
        assert_eq!(G.degree("A"), Ok(2));
        assert_eq!(G.dfs("A").unwrap(), strings(&["a", "b", "c"]));
    }

    #[test]
    fn dfs() {
        let G = square();
        assert_eq!(G.dfs("C").unwrap(), strings(&["b", "a", "d"]));
        assert_eq!(G.dfs("Z"), Err(GraphError::InvalidVertex("Z".into())));

        // Other components are not part of the tree
        let mut G = square();
        G.add_vertex("E");
        G.add_vertex("F");
        G.add_edge("e", "E", "F").unwrap();
        let T = G.dfs_tree("A").unwrap();
        assert_eq!(T.num_vertices(), 4);
        assert!(!T.contains("E"));
        assert_eq!(G.dfs("E").unwrap(), strings(&["e"]));

        // Isolated root
        let mut G = LabelGraph::new();
        G.add_vertex("A");
        assert!(G.dfs("A").unwrap().is_empty());
        assert_eq!(G.dfs_tree("A").unwrap(), G);
    }

    #[test]
    fn dfs_follows_labels() {
        // The order of the returned labels is the order of the search,
        // which need not be sorted.
        let G = LabelGraph::from_edges([("z", "A", "B"), ("b", "A", "C"), ("y", "C", "D"), ("a", "C", "B")]);
        assert_eq!(G.dfs("A").unwrap(), strings(&["b", "a", "y"]));
    }

    #[test]
    fn dfs_ignores_loops_and_parallel_edges() {
        let G = LabelGraph::from_edges([("l", "A", "A"), ("q", "A", "B"), ("p", "B", "A"), ("r", "B", "C")]);
        let T = G.dfs_tree("A").unwrap();
        assert_eq!(G.dfs("A").unwrap(), strings(&["p", "r"]));
        assert!(!T.has_cycle());
        assert!(T.is_tree());
    }

    #[test]
    fn dfs_spans_component() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..20 {
            let mut G = random_tree(30, &mut rng);
            // Close a few cycles
            for j in 0..5 {
                let u = format!("v{}", rng.gen_range(0..30));
                let v = format!("v{}", rng.gen_range(0..30));
                G.add_edge(&format!("x{j}"), &u, &v).unwrap();
            }

            let root = format!("v{}", rng.gen_range(0..30));
            let labels = G.dfs(&root).unwrap();
            assert_eq!(labels.len(), G.num_vertices() - 1);
            assert_eq!(labels, G.dfs(&root).unwrap());

            let T = G.dfs_tree(&root).unwrap();
            assert_eq!(T.num_vertices(), G.num_vertices());
            assert!(T.is_tree());
        }
    }

    #[test]
    fn cycles() {
        assert!(LabelGraph::cycle(3).has_cycle());
        assert!(!LabelGraph::path(3).has_cycle());
        assert!(LabelGraph::cycle(2).has_cycle());
        assert!(LabelGraph::cycle(1).has_cycle());
        assert!(!LabelGraph::new().has_cycle());
        assert!(!LabelGraph::star(4).has_cycle());

        // Cycle in a later component
        let G = LabelGraph::from_edges([("a", "A", "B"), ("b", "C", "D"), ("c", "D", "E"), ("d", "E", "C")]);
        assert!(G.has_cycle());
    }

    #[test]
    fn trees() {
        let G = LabelGraph::from_edges([("a", "A", "B"), ("b", "B", "C"), ("c", "B", "D"), ("d", "D", "E")]);
        assert_eq!(G.tree_leaves(), Some(strings(&["A", "C", "E"])));

        let mut single = LabelGraph::new();
        single.add_vertex("A");
        assert_eq!(single.tree_leaves(), Some(Vec::new()));

        assert_eq!(LabelGraph::path(2).tree_leaves(), Some(strings(&["v0", "v1"])));
        assert_eq!(LabelGraph::new().tree_leaves(), None);
        assert_eq!(LabelGraph::cycle(4).tree_leaves(), None);
        assert_eq!(LabelGraph::cycle(1).tree_leaves(), None);

        // A forest is not a tree
        let G = LabelGraph::from_edges([("a", "A", "B"), ("b", "C", "D")]);
        assert!(!G.is_tree());

        let mut G = LabelGraph::path(3);
        G.add_vertex("x");
        assert!(!G.is_tree());
    }

    #[test]
    fn random_trees() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for n in 2..40 {
            let G = random_tree(n, &mut rng);
            let leaves = G.tree_leaves().unwrap();
            for u in G.vertices() {
                let is_leaf = G.degree(u).unwrap() == 1;
                assert_eq!(leaves.iter().any(|l| l == u), is_leaf);
            }
            assert!(G.is_bipartite());
            assert!(G.is_connected());
        }
    }

    #[test]
    fn bipartite() {
        assert!(square().is_bipartite());
        assert!(LabelGraph::cycle(4).is_bipartite());
        assert!(!LabelGraph::cycle(3).is_bipartite());
        assert!(!LabelGraph::cycle(1).is_bipartite());
        assert!(LabelGraph::cycle(2).is_bipartite());
        assert!(LabelGraph::biclique(3, 4).is_bipartite());
        assert!(!LabelGraph::clique(3).is_bipartite());
        assert!(LabelGraph::new().is_bipartite());

        // Odd cycle in a second component
        let G = LabelGraph::from_edges([("a", "A", "B"), ("b", "C", "D"), ("c", "D", "E"), ("d", "E", "C")]);
        assert!(!G.is_bipartite());

        let mut G = LabelGraph::path(4);
        G.add_edge("l", "v3", "v3").unwrap();
        assert!(!G.is_bipartite());
    }

    #[test]
    fn colouring() {
        let G = LabelGraph::biclique(2, 3);
        let colours = G.two_colouring().unwrap();
        assert_eq!(colours.len(), 5);
        for e in G.edges() {
            let (u, v) = e.endpoints();
            assert_ne!(colours[u], colours[v]);
        }
        assert_eq!(colours["v0"], Colour::Red);
        assert_eq!(colours["v1"], Colour::Red);
        assert_eq!(colours["v2"], Colour::Blue);
    }

    #[test]
    fn components() {
        let mut G = LabelGraph::new();
        let n = 10;
        for i in 0..n {
            G.add_vertex(&format!("v{i}"));
        }
        for i in 0..(n/2) {
            G.add_edge(&format!("e{i}"), &format!("v{i}"), &format!("v{}", i+5)).unwrap();
        }

        let comps = G.components();
        assert_eq!(comps.len(), G.num_edges());
        for comp in &comps {
            assert_eq!(comp.len(), 2);
        }
        assert!(!G.is_connected());

        assert!(LabelGraph::cycle(5).is_connected());
        assert!(LabelGraph::new().is_connected());
        assert_eq!(LabelGraph::cycle(1).components().len(), 1);
    }

    #[test]
    fn components_with_cycles() {
        // Edges inside an already joined component must not be merged again
        for n in 2..8 {
            assert_eq!(LabelGraph::cycle(n).components().len(), 1);
            assert!(LabelGraph::clique(n).is_connected());
        }

        let G = LabelGraph::from_edges([("a", "A", "B"), ("b", "B", "A"), ("c", "A", "B")]);
        assert_eq!(G.components().len(), 1);

        let G = LabelGraph::from_edges([("l", "A", "A"), ("m", "A", "A"), ("a", "A", "B")]);
        assert!(G.is_connected());

        let mut G = LabelGraph::cycle(4);
        G.add_vertex("x");
        G.add_edge("l", "x", "x").unwrap();
        let mut sizes:Vec<_> = G.components().iter().map(|c| c.len()).collect();
        sizes.sort();
        assert_eq!(sizes, vec![1, 4]);
        assert!(!G.is_connected());
    }
}
