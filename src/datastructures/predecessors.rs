use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId, VertexMap};
use crate::path::WeightedPath;
use crate::weight::WeightAlgebra;

/// The direction in which a search explores the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// From the source along outgoing arcs.
    Forward,
    /// From the target against the direction of arcs.
    Backward
}

/// Per-vertex back-pointers recorded while a search relaxes vertices.
///
/// A forward chain forms a tree rooted at the source in which every vertex points
/// to the vertex it was reached from. A backward chain is rooted at the target
/// and every vertex points to the next vertex on its way to the target. The edges
/// are looked up in the graph only when a path is built.
#[derive(Debug, Clone)]
pub struct PredecessorChain<V> {
    links: VertexMap<V, V>,
    direction: Direction
}

impl<V> PredecessorChain<V> where V: VertexId {
    pub fn new(direction:Direction) -> Self {
        PredecessorChain { links: VertexMap::default(), direction }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Records that the cheapest known way to reach `u` goes through `from`.
    pub fn add_predecessor(&mut self, u:V, from:V) {
        self.links.insert(u, from);
    }

    pub fn predecessor(&self, u:&V) -> Option<&V> {
        self.links.get(u)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Builds the path from `source` to `target` recorded in this chain.
    ///
    /// For a forward chain the walk starts at `target` and follows the links back
    /// to `source`; for a backward chain it starts at `source` and follows them to
    /// `target`. Fails with [Error::PathNotFound] if the walk gets stuck or an
    /// edge between two linked vertices is missing from `graph`.
    pub fn build_path<G, E, W, F, A>(&self, graph:&G, source:&V, target:&V, weights:&F, algebra:&A)
        -> Result<WeightedPath<V, E, W>>
        where G: Graph<V, E> + ?Sized, E: Clone, F: Fn(&E) -> W, A: WeightAlgebra<W>
    {
        let mut hops = match self.direction {
            Direction::Forward => self.walk(graph, target, source)?,
            Direction::Backward => self.walk(graph, source, target)?
        };
        if self.direction == Direction::Forward {
            hops.reverse();
        }

        let mut path = WeightedPath::new(source.clone(), algebra.identity());
        for (_, edge, head) in hops {
            let w = weights(edge);
            path.push(edge.clone(), head, &w, algebra);
        }
        Ok(path)
    }

    /// Splices the path `source -> meet` recorded in this forward chain with the path
    /// `meet -> target` recorded in the backward chain `other`.
    pub fn build_path_through<G, E, W, F, A>(&self, graph:&G, source:&V, meet:&V, target:&V,
                                             other:&PredecessorChain<V>, weights:&F, algebra:&A)
        -> Result<WeightedPath<V, E, W>>
        where G: Graph<V, E> + ?Sized, E: Clone, F: Fn(&E) -> W, A: WeightAlgebra<W>
    {
        debug_assert_eq!(self.direction, Direction::Forward);
        debug_assert_eq!(other.direction, Direction::Backward);

        let head = self.build_path(graph, source, meet, weights, algebra)?;
        let tail = other.build_path(graph, meet, target, weights, algebra)?;
        Ok(head.concat(tail, algebra))
    }

    /// Follows the links from `start` until `root` is reached and returns the
    /// traversed arcs as `(tail, edge, head)` in walking order.
    fn walk<'g, G, E>(&self, graph:&'g G, start:&V, root:&V) -> Result<Vec<(V, &'g E, V)>>
        where G: Graph<V, E> + ?Sized, E: 'g
    {
        let mut hops = Vec::new();
        let mut current = start.clone();

        while current != *root {
            // A well-formed chain is a tree, so it never takes more steps than it has links.
            if hops.len() > self.links.len() {
                return Err(Error::path_not_found(source_of(self.direction, start, root), target_of(self.direction, start, root)))
            }

            let next = self.links.get(&current)
                .ok_or_else(|| Error::path_not_found(source_of(self.direction, start, root), target_of(self.direction, start, root)))?
                .clone();
            let (tail, head) = match self.direction {
                Direction::Forward => (next.clone(), current),
                Direction::Backward => (current, next.clone())
            };
            let edge = graph.edge_between(&tail, &head)
                .ok_or_else(|| Error::path_not_found(&tail, &head))?;

            hops.push((tail, edge, head));
            current = next;
        }

        Ok(hops)
    }
}

fn source_of<'a, V>(direction:Direction, start:&'a V, root:&'a V) -> &'a V {
    match direction {
        Direction::Forward => root,
        Direction::Backward => start
    }
}

fn target_of<'a, V>(direction:Direction, start:&'a V, root:&'a V) -> &'a V {
    match direction {
        Direction::Forward => start,
        Direction::Backward => root
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::editdigraph::EditDigraph;
    use crate::weight::*;

    fn weight(e:&f64) -> f64 {
        *e
    }

    #[test]
    fn forward_chain() {
        // 0 -> 1 -> 2 -> 3
        let G = EditDigraph::path(4, |u,_| (u+1) as f64);
        let mut chain = PredecessorChain::new(Direction::Forward);
        chain.add_predecessor(1, 0);
        chain.add_predecessor(2, 1);
        chain.add_predecessor(3, 2);

        let path = chain.build_path(&G, &0, &3, &weight, &F64Weights).unwrap();
        assert_eq!(path.vertices(), &[0,1,2,3]);
        assert_eq!(path.edges(), &[1.0,2.0,3.0]);
        assert_eq!(*path.weight(), 6.0);

        let path = chain.build_path(&G, &1, &3, &weight, &F64Weights).unwrap();
        assert_eq!(path.vertices(), &[1,2,3]);

        let trivial = chain.build_path(&G, &2, &2, &weight, &F64Weights).unwrap();
        assert_eq!(trivial.size(), 0);
        assert_eq!(*trivial.weight(), 0.0);
    }

    #[test]
    fn broken_chains() {
        let mut G = EditDigraph::path(4, |_,_| 1.0);
        let mut chain = PredecessorChain::new(Direction::Forward);
        chain.add_predecessor(3, 2);

        let err = chain.build_path(&G, &0, &3, &weight, &F64Weights).unwrap_err();
        assert!(err.is_path_not_found());

        chain.add_predecessor(2, 1);
        chain.add_predecessor(1, 0);
        G.remove_arc(&1, &2);
        let err = chain.build_path(&G, &0, &3, &weight, &F64Weights).unwrap_err();
        assert_eq!(err, Error::path_not_found(&1, &2));
    }

    #[test]
    fn splice_at_meeting_vertex() {
        // 0 -> 1 -> 2 -> 3 -> 4
        let G = EditDigraph::path(5, |u,_| u as f64);
        let mut forward = PredecessorChain::new(Direction::Forward);
        forward.add_predecessor(1, 0);
        forward.add_predecessor(2, 1);

        let mut backward = PredecessorChain::new(Direction::Backward);
        backward.add_predecessor(3, 4);
        backward.add_predecessor(2, 3);

        let path = forward.build_path_through(&G, &0, &2, &4, &backward, &weight, &F64Weights).unwrap();
        assert_eq!(path.vertices(), &[0,1,2,3,4]);
        assert_eq!(path.edges(), &[0.0,1.0,2.0,3.0]);
        assert_eq!(*path.weight(), 6.0);
    }
}
