use crate::graph::{Edge, LabeledGraph, VertexSetRef};

/*
    Neighbour iterator derived from incidence. At each step, the
    iterator returns a pair (e, w) where e is an edge incident to
    the centre vertex and w is its opposite endpoint. Parallel edges
    repeat w, a loop returns the centre itself.
*/
pub struct NeighbourIterator<'a> {
    centre: &'a str,
    e_it: Box<dyn Iterator<Item=&'a Edge> + 'a>,
}

impl<'a> NeighbourIterator<'a> {
    pub fn new<G: LabeledGraph + ?Sized>(graph: &'a G, centre: &'a str) -> NeighbourIterator<'a> {
        NeighbourIterator {
            centre,
            e_it: graph.incident_edges(centre),
        }
    }
}

impl<'a> Iterator for NeighbourIterator<'a> {
    type Item = (&'a Edge, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let e = self.e_it.next()?;
        Some((e, e.opposite(self.centre)))
    }
}

/*
    Neighbourhood iterator. At each step, the iterator returns
    a pair (v, N(v)) where N(v) is a NeighbourIterator.
*/
pub struct NIterator<'a, G: LabeledGraph + ?Sized> {
    graph: &'a G,
    v_it: Box<dyn Iterator<Item=&'a str> + 'a>,
}

impl<'a, G: LabeledGraph + ?Sized> NIterator<'a, G> {
    pub fn new(graph: &'a G) -> NIterator<'a, G> {
        NIterator {
            graph,
            v_it: graph.vertices(),
        }
    }
}

impl<'a, G: LabeledGraph + ?Sized> Iterator for NIterator<'a, G> {
    type Item = (&'a str, NeighbourIterator<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.v_it.next()?;
        Some((v, NeighbourIterator::new(self.graph, v)))
    }
}

/// Neighbour-based access for every [LabeledGraph].
pub trait NeighbourIterable<G: LabeledGraph + ?Sized> {
    /// Returns the (edge, neighbour) pairs of `u`.
    fn neighbours<'a>(&'a self, u:&'a str) -> NeighbourIterator<'a>;

    /// Returns the distinct neighbours of `u`.
    fn neighbour_set<'a>(&'a self, u:&'a str) -> VertexSetRef<'a> {
        self.neighbours(u).map(|(_, w)| w).collect()
    }

    /// Returns an iterator over all vertices together with their neighbours.
    fn neighbourhoods(&self) -> NIterator<G>;
}

impl<G: LabeledGraph + ?Sized> NeighbourIterable<G> for G {
    fn neighbours<'a>(&'a self, u:&'a str) -> NeighbourIterator<'a> {
        NeighbourIterator::new(self, u)
    }

    fn neighbourhoods(&self) -> NIterator<G> {
        NIterator::new(self)
    }
}


//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
