//! Structural analysis of small, labelled, undirected graphs.
//!
//! Vertices are strings, edges carry a label and may form loops or run parallel to
//! other edges. The default store is [LabelGraph](labelgraph::LabelGraph); the analysis
//! is written against the [LabeledGraph](graph::LabeledGraph) trait and is added to
//! every store through two extension traits:
//!
//! - [StructuralPredicates](predicates::StructuralPredicates): degrees, loops, parallel
//!   edges, completeness and non-adjacent pairs.
//! - [GraphAlgorithms](algorithms::GraphAlgorithms): depth-first spanning trees, cycle
//!   detection, tree recognition, bipartiteness and connected components.
//!
//! ```rust
//! use labgraph::graph::*;
//! use labgraph::labelgraph::LabelGraph;
//! use labgraph::predicates::StructuralPredicates;
//! use labgraph::algorithms::GraphAlgorithms;
//!
//! let mut graph = LabelGraph::new();
//! graph.add_vertices(["A", "B", "C", "D"]);
//! graph.add_edge("a", "A", "B").unwrap();
//! graph.add_edge("b", "B", "C").unwrap();
//! graph.add_edge("c", "C", "D").unwrap();
//! graph.add_edge("d", "D", "A").unwrap();
//!
//! assert!(graph.has_cycle());
//! assert!(graph.is_bipartite());
//! assert!(!graph.is_tree());
//! assert_eq!(graph.degree("A"), Ok(2));
//! assert_eq!(graph.dfs("A").unwrap(), vec!["a", "b", "c"]);
//! ```
#![allow(non_snake_case)]

pub mod error;
pub mod graph;
pub mod iterators;
pub mod labelgraph;
pub mod predicates;
pub mod traversal;
pub mod algorithms;
