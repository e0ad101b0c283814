//! Paths as produced by the shortest-path engines.

use itertools::Itertools;

use crate::weight::WeightAlgebra;

/// A walk $v_0 e_0 v_1 e_1 \dots e_{k-1} v_k$ together with its total weight.
///
/// The edge `edges()[i]` connects `vertices()[i]` to `vertices()[i+1]`, hence
/// a path always holds exactly one vertex more than it holds edges. The weight
/// is the monoid sum of the edge weights in path order.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedPath<V, E, W> {
    vertices: Vec<V>,
    edges: Vec<E>,
    weight: W
}

impl<V, E, W> WeightedPath<V, E, W> {
    /// Creates the path consisting of `source` alone, with weight `identity`.
    pub fn new(source:V, identity:W) -> Self {
        WeightedPath { vertices: vec![source], edges: Vec::new(), weight: identity }
    }

    /// Extends the path at its end by `edge` leading to `vertex`.
    pub fn push<A>(&mut self, edge:E, vertex:V, edge_weight:&W, algebra:&A) where A: WeightAlgebra<W> {
        self.weight = algebra.append(&self.weight, edge_weight);
        self.edges.push(edge);
        self.vertices.push(vertex);
    }

    /// Appends `other`, whose source must equal the target of `self`.
    pub fn concat<A>(mut self, other:WeightedPath<V, E, W>, algebra:&A) -> Self
        where A: WeightAlgebra<W>, V: PartialEq
    {
        debug_assert!(self.vertices.last() == other.vertices.first());
        self.weight = algebra.append(&self.weight, &other.weight);
        self.edges.extend(other.edges);
        self.vertices.extend(other.vertices.into_iter().skip(1));
        self
    }

    pub fn weight(&self) -> &W {
        &self.weight
    }

    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn edges(&self) -> &[E] {
        &self.edges
    }

    /// The number of edges on the path.
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    pub fn source(&self) -> &V {
        &self.vertices[0]
    }

    pub fn target(&self) -> &V {
        &self.vertices[self.vertices.len()-1]
    }

    /// Iterates over the path as `(from, edge, to)` triples.
    pub fn connections(&self) -> impl Iterator<Item=(&V, &E, &V)> + '_ {
        self.vertices.iter().tuple_windows::<(&V, &V)>()
            .zip(self.edges.iter())
            .map(|((u, v), e)| (u, e, v))
    }

    pub fn into_parts(self) -> (Vec<V>, Vec<E>, W) {
        (self.vertices, self.edges, self.weight)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::weight::*;

    #[test]
    fn grow() {
        let A = F64Weights;
        let mut path = WeightedPath::new(0, A.identity());
        assert_eq!(path.size(), 0);
        assert_eq!(path.source(), path.target());
        assert_eq!(path.connections().count(), 0);

        path.push("a", 1, &0.5, &A);
        path.push("b", 2, &2.0, &A);

        assert_eq!(path.vertices(), &[0,1,2]);
        assert_eq!(path.edges(), &["a","b"]);
        assert_eq!(*path.weight(), 2.5);
        assert_eq!(path.connections().collect::<Vec<_>>(), vec![(&0,&"a",&1),(&1,&"b",&2)]);
    }

    #[test]
    fn concat() {
        let A = I32Weights;
        let mut left = WeightedPath::new('x', 0);
        left.push(1, 'y', &1, &A);
        let mut right = WeightedPath::new('y', 0);
        right.push(2, 'z', &4, &A);

        let path = left.concat(right, &A);
        assert_eq!(path.vertices(), &['x','y','z']);
        assert_eq!(path.edges(), &[1,2]);
        assert_eq!(*path.weight(), 5);

        let (vertices, edges, weight) = path.into_parts();
        assert_eq!(vertices.len(), edges.len() + 1);
        assert_eq!(weight, 5);
    }
}
