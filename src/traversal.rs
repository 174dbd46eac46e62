//! A single graph walk shared by all traversal algorithms.
//!
//! A walk starts at a root and repeatedly takes the next incident edge of the current
//! vertex. The neighbour at the other end of the edge is either *discovered* (seen
//! for the first time) or *revisited*. What happens in either case is decided by a
//! [WalkPolicy]; the policy can end the walk early by returning [ControlFlow::Break].
//!
//! Depth-first walks take the incident edges of each vertex in ascending order of their
//! labels (ties keep store order) and run on an explicit stack, so the visiting order is
//! the one of a recursive search without its depth limit. Breadth-first walks keep store
//! order.
//!
//! The set of seen vertices lives in a [WalkContext] owned by the caller. Passing the
//! same context to several walks, as [walk_all] does, visits every component once.
//!
//! ```rust
//! use std::ops::ControlFlow;
//! use labgraph::graph::*;
//! use labgraph::labelgraph::LabelGraph;
//! use labgraph::traversal::*;
//!
//! let graph = LabelGraph::from_edges([("b", "A", "C"), ("a", "A", "B"), ("c", "B", "C")]);
//! let mut ctx = WalkContext::new();
//! let mut finder = CycleFinder::default();
//! let flow = walk(&graph, "A", WalkOrder::DepthFirst, &mut ctx, &mut finder);
//!
//! assert_eq!(flow, ControlFlow::Break(()));
//! // A -a- B -c- C, then edge `b` leads from C back to A
//! assert_eq!(finder.closing_pair(), Some(("C", "A")));
//! ```
use std::collections::VecDeque;
use std::ops::ControlFlow;

use fxhash::{FxHashMap, FxHashSet};
use itertools::Itertools;

use crate::error::{GraphError, GraphResult};
use crate::graph::*;

/// The frontier discipline of a walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkOrder {
    DepthFirst,
    BreadthFirst
}

/// The vertices seen so far by one or more walks over the same graph.
#[derive(Debug, Default)]
pub struct WalkContext<'a> {
    seen: FxHashSet<&'a str>
}

impl<'a> WalkContext<'a> {
    pub fn new() -> Self {
        WalkContext::default()
    }

    pub fn has_seen(&self, u:&str) -> bool {
        self.seen.contains(u)
    }

    pub fn num_seen(&self) -> usize {
        self.seen.len()
    }

    pub fn seen(&self) -> impl Iterator<Item=&'a str> + '_ {
        self.seen.iter().copied()
    }

    /// Marks `u` as seen. Returns `false` if it was seen before.
    fn mark(&mut self, u:&'a str) -> bool {
        self.seen.insert(u)
    }
}

/// Decides what a walk does with each vertex it reaches.
pub trait WalkPolicy<'a> {
    /// Called once per vertex, when it is reached for the first time. `via` holds the
    /// vertex the walk came from and the edge it used; it is `None` for the root.
    fn discover(&mut self, _vertex:&'a str, _via:Option<(&'a str, &'a Edge)>) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    /// Called when the walk at `vertex` follows an edge to the already seen `neighbour`.
    /// `parent` is the vertex from which `vertex` was discovered.
    fn revisit(&mut self, _vertex:&'a str, _neighbour:&'a str, _parent:Option<&'a str>) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

/// Walks the component of `root`. Does nothing if `root` was already seen in `ctx`.
///
/// Returns [ControlFlow::Break] if the policy stopped the walk.
pub fn walk<'a, G, P>(graph:&'a G, root:&'a str, order:WalkOrder, ctx:&mut WalkContext<'a>, policy:&mut P) -> ControlFlow<()>
    where G: LabeledGraph + ?Sized, P: WalkPolicy<'a>
{
    if !ctx.mark(root) {
        return ControlFlow::Continue(())
    }
    tracing::trace!(root, ?order, "starting walk");
    policy.discover(root, None)?;

    match order {
        WalkOrder::DepthFirst => depth_first(graph, root, ctx, policy),
        WalkOrder::BreadthFirst => breadth_first(graph, root, ctx, policy),
    }
}

/// Walks every component, using each vertex not seen yet (in store order) as a new root.
pub fn walk_all<'a, G, P>(graph:&'a G, order:WalkOrder, ctx:&mut WalkContext<'a>, policy:&mut P) -> ControlFlow<()>
    where G: LabeledGraph + ?Sized, P: WalkPolicy<'a>
{
    for root in graph.vertices() {
        walk(graph, root, order, ctx, policy)?;
    }
    ControlFlow::Continue(())
}

/// One pending vertex of a depth-first walk together with the position in its
/// (sorted) incidence list.
struct Frame<'a> {
    vertex: &'a str,
    parent: Option<&'a str>,
    edges: Vec<&'a Edge>,
    next: usize
}

impl<'a> Frame<'a> {
    fn new<G: LabeledGraph + ?Sized>(graph:&'a G, vertex:&'a str, parent:Option<&'a str>) -> Self {
        let edges = graph.incident_edges(vertex)
                         .sorted_by(|a, b| a.label().cmp(b.label()))
                         .collect();
        Frame { vertex, parent, edges, next: 0 }
    }
}

fn depth_first<'a, G, P>(graph:&'a G, root:&'a str, ctx:&mut WalkContext<'a>, policy:&mut P) -> ControlFlow<()>
    where G: LabeledGraph + ?Sized, P: WalkPolicy<'a>
{
    let mut stack = vec![Frame::new(graph, root, None)];

    while let Some(frame) = stack.last_mut() {
        let Some(edge) = frame.edges.get(frame.next).copied() else {
            stack.pop();
            continue;
        };
        frame.next += 1;

        let (vertex, parent) = (frame.vertex, frame.parent);
        let neighbour = edge.opposite(vertex);
        if ctx.mark(neighbour) {
            tracing::trace!(vertex = neighbour, parent = vertex, edge = edge.label(), "discovered");
            policy.discover(neighbour, Some((vertex, edge)))?;
            stack.push(Frame::new(graph, neighbour, Some(vertex)));
        } else {
            policy.revisit(vertex, neighbour, parent)?;
        }
    }

    ControlFlow::Continue(())
}

fn breadth_first<'a, G, P>(graph:&'a G, root:&'a str, ctx:&mut WalkContext<'a>, policy:&mut P) -> ControlFlow<()>
    where G: LabeledGraph + ?Sized, P: WalkPolicy<'a>
{
    let mut queue:VecDeque<(&'a str, Option<&'a str>)> = VecDeque::new();
    queue.push_back((root, None));

    while let Some((vertex, parent)) = queue.pop_front() {
        for edge in graph.incident_edges(vertex) {
            let neighbour = edge.opposite(vertex);
            if ctx.mark(neighbour) {
                tracing::trace!(vertex = neighbour, parent = vertex, edge = edge.label(), "discovered");
                policy.discover(neighbour, Some((vertex, edge)))?;
                queue.push_back((neighbour, Some(vertex)));
            } else {
                policy.revisit(vertex, neighbour, parent)?;
            }
        }
    }

    ControlFlow::Continue(())
}

/// Copies every discovered vertex and the edge used to reach it into a new graph.
///
/// Run on a depth-first walk this builds the DFS tree of the root's component.
pub struct SpanningTree<T> {
    tree: T,
    // `LabelGraph` accepts every tree edge since both endpoints exist by then.
    // Other `MutableLabeledGraph` stores may still refuse an edge; the first
    // refusal ends the walk and is handed back by `into_tree`.
    error: Option<GraphError>
}

impl<T: MutableLabeledGraph> SpanningTree<T> {
    /// Starts an output graph that only contains `root`.
    pub fn rooted_at(root:&str) -> Self {
        let mut tree = T::new();
        tree.add_vertex(root);
        SpanningTree { tree, error: None }
    }

    pub fn tree(&self) -> &T {
        &self.tree
    }

    pub fn into_tree(self) -> GraphResult<T> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.tree)
        }
    }
}

impl<'a, T: MutableLabeledGraph> WalkPolicy<'a> for SpanningTree<T> {
    fn discover(&mut self, vertex:&'a str, via:Option<(&'a str, &'a Edge)>) -> ControlFlow<()> {
        let Some((parent, edge)) = via else {
            return ControlFlow::Continue(())
        };

        self.tree.add_vertex(vertex);
        match self.tree.add_edge(edge.label(), parent, vertex) {
            Ok(()) => ControlFlow::Continue(()),
            Err(err) => {
                self.error = Some(err);
                ControlFlow::Break(())
            }
        }
    }
}

/// Stops at the first edge that leads back to a seen vertex other than the parent.
///
/// The parent is compared as a vertex, not as an edge: a second edge to the parent
/// (a parallel edge) closes a cycle, and so does a loop.
#[derive(Debug, Default)]
pub struct CycleFinder<'a> {
    closing: Option<(&'a str, &'a str)>
}

impl<'a> CycleFinder<'a> {
    pub fn found(&self) -> bool {
        self.closing.is_some()
    }

    /// The endpoints of the edge that closed the cycle, if one was found.
    pub fn closing_pair(&self) -> Option<(&'a str, &'a str)> {
        self.closing
    }
}

impl<'a> WalkPolicy<'a> for CycleFinder<'a> {
    fn revisit(&mut self, vertex:&'a str, neighbour:&'a str, parent:Option<&'a str>) -> ControlFlow<()> {
        if parent == Some(neighbour) {
            return ControlFlow::Continue(())
        }
        tracing::trace!(vertex, neighbour, "back edge closes a cycle");
        self.closing = Some((vertex, neighbour));
        ControlFlow::Break(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colour {
    Red,
    Blue
}

impl Colour {
    pub fn flip(self) -> Colour {
        match self {
            Colour::Red => Colour::Blue,
            Colour::Blue => Colour::Red
        }
    }
}

/// Gives each root [Colour::Red] and every discovered vertex the opposite colour of
/// the vertex it was reached from. Stops at the first edge whose endpoints share a colour.
#[derive(Debug, Default)]
pub struct TwoColouring<'a> {
    colours: FxHashMap<&'a str, Colour>,
    conflict: Option<(&'a str, &'a str)>
}

impl<'a> TwoColouring<'a> {
    pub fn colour(&self, u:&str) -> Option<Colour> {
        self.colours.get(u).copied()
    }

    /// The endpoints of the first monochromatic edge, if any.
    pub fn conflict(&self) -> Option<(&'a str, &'a str)> {
        self.conflict
    }

    /// Returns the colouring, or `None` if a conflict was found.
    pub fn into_colouring(self) -> Option<VertexMap<Colour>> {
        if self.conflict.is_some() {
            return None
        }
        Some(self.colours.into_iter().map(|(u, c)| (u.to_string(), c)).collect())
    }
}

impl<'a> WalkPolicy<'a> for TwoColouring<'a> {
    fn discover(&mut self, vertex:&'a str, via:Option<(&'a str, &'a Edge)>) -> ControlFlow<()> {
        let colour = match via {
            Some((parent, _)) => self.colours.get(parent).map_or(Colour::Red, |c| c.flip()),
            None => Colour::Red
        };
        self.colours.insert(vertex, colour);
        ControlFlow::Continue(())
    }

    fn revisit(&mut self, vertex:&'a str, neighbour:&'a str, _parent:Option<&'a str>) -> ControlFlow<()> {
        if self.colours.get(vertex) == self.colours.get(neighbour) {
            tracing::trace!(vertex, neighbour, "monochromatic edge");
            self.conflict = Some((vertex, neighbour));
            return ControlFlow::Break(())
        }
        ControlFlow::Continue(())
    }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
