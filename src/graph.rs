//! Read-only views of a graph as consumed by the shortest-path engines.
//!
//! Vertices (`V`) and edges (`E`) are opaque: the engines only hash and compare
//! vertices and hand edges back to the caller's weight function. The storage
//! itself is up to the implementor; [EditGraph](crate::editgraph::EditGraph) and
//! [EditDigraph](crate::editdigraph::EditDigraph) are simple hash-map backed
//! implementations.

use std::fmt::Debug;
use std::hash::Hash;

use fxhash::{FxHashMap, FxHashSet};

/// Bounds every vertex type has to satisfy.
pub trait VertexId: Clone + Eq + Hash + Debug {}

impl<T> VertexId for T where T: Clone + Eq + Hash + Debug {}

pub type VertexMap<V, T> = FxHashMap<V, T>;
pub type VertexSet<V> = FxHashSet<V>;

pub trait Graph<V, E> where V: VertexId {
    fn num_vertices(&self) -> usize;
    fn num_edges(&self) -> usize;

    fn contains(&self, u:&V) -> bool;

    /// Returns the edge connecting `u` to `v`, if any. For directed graphs
    /// this is the arc $uv$; for undirected graphs the order of `u` and `v`
    /// does not matter.
    fn edge_between(&self, u:&V, v:&V) -> Option<&E>;

    fn is_directed(&self) -> bool;

    fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item=&'a V> + 'a>;

    /// Iterates over all vertices connected to `u` irrespective of direction.
    fn neighbours<'a>(&'a self, u:&V) -> Box<dyn Iterator<Item=&'a V> + 'a>;

    fn adjacent(&self, u:&V, v:&V) -> bool {
        self.edge_between(u, v).is_some()
    }

    fn is_empty(&self) -> bool {
        self.num_vertices() == 0
    }
}

/// A graph which can be traversed along and against the direction of its arcs.
///
/// Backward traversal is a capability of its own: undirected graphs answer both
/// [out_neighbours](Digraph::out_neighbours) and [in_neighbours](Digraph::in_neighbours)
/// with their symmetric adjacency, directed graphs keep a separate in-adjacency.
pub trait Digraph<V, E>: Graph<V, E> where V: VertexId {
    fn out_neighbours<'a>(&'a self, u:&V) -> Box<dyn Iterator<Item=&'a V> + 'a>;
    fn in_neighbours<'a>(&'a self, u:&V) -> Box<dyn Iterator<Item=&'a V> + 'a>;

    fn has_arc(&self, u:&V, v:&V) -> bool {
        self.edge_between(u, v).is_some()
    }

    fn in_degree(&self, u:&V) -> usize {
        self.in_neighbours(u).count()
    }

    fn out_degree(&self, u:&V) -> usize {
        self.out_neighbours(u).count()
    }
}
