use std::cmp::Ordering;

use crate::datastructures::Comparator;
use crate::graph::{VertexId, VertexMap};
use crate::weight::WeightAlgebra;

/// Compares two tentative distances where `None` stands for "infinitely far".
pub fn compare_tentative<W, A>(algebra:&A, a:Option<&W>, b:Option<&W>) -> Ordering where A: WeightAlgebra<W> {
    match (a, b) {
        (Some(a), Some(b)) => algebra.compare(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal
    }
}

/// Best known distance per vertex. Vertices without an entry are infinitely far
/// away.
///
/// The table orders vertices by their current distance and serves as the
/// comparator of the search frontier, so it is read at comparison time rather
/// than when a vertex enters the frontier.
#[derive(Debug, Clone)]
pub struct DistanceTable<V, W, A> {
    distances: VertexMap<V, W>,
    algebra: A
}

impl<V, W, A> DistanceTable<V, W, A> where V: VertexId, A: WeightAlgebra<W> {
    pub fn new(algebra:A) -> Self {
        DistanceTable { distances: VertexMap::default(), algebra }
    }

    pub fn algebra(&self) -> &A {
        &self.algebra
    }

    /// Returns the best known distance to `u`, or `None` if `u` was never reached.
    pub fn weight(&self, u:&V) -> Option<&W> {
        self.distances.get(u)
    }

    pub fn set_weight(&mut self, u:V, weight:W) {
        self.distances.insert(u, weight);
    }

    pub fn already_visited(&self, u:&V) -> bool {
        self.distances.contains_key(u)
    }

    /// Returns `true` if `candidate` is strictly shorter than the best known
    /// distance to `u`.
    pub fn improves(&self, u:&V, candidate:&W) -> bool {
        match self.distances.get(u) {
            Some(current) => self.algebra.compare(candidate, current) == Ordering::Less,
            None => true
        }
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn into_map(self) -> VertexMap<V, W> {
        self.distances
    }
}

impl<V, W, A> Comparator<V> for DistanceTable<V, W, A> where V: VertexId, A: WeightAlgebra<W> {
    fn compare(&self, a:&V, b:&V) -> Ordering {
        compare_tentative(&self.algebra, self.weight(a), self.weight(b))
    }
}

/// A frontier order backed by a [DistanceTable]. The relaxation loop updates
/// distances through this trait no matter how the order ranks vertices.
pub trait DistanceOrder<V, W, A>: Comparator<V> {
    fn table(&self) -> &DistanceTable<V, W, A>;
    fn table_mut(&mut self) -> &mut DistanceTable<V, W, A>;
}

impl<V, W, A> DistanceOrder<V, W, A> for DistanceTable<V, W, A> where V: VertexId, A: WeightAlgebra<W> {
    fn table(&self) -> &DistanceTable<V, W, A> {
        self
    }

    fn table_mut(&mut self) -> &mut DistanceTable<V, W, A> {
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::datastructures::FibonacciHeap;
    use crate::weight::*;

    #[test]
    fn sentinel_is_largest() {
        let mut table = DistanceTable::new(F64Weights);
        assert!(!table.already_visited(&'a'));
        assert_eq!(table.weight(&'a'), None);
        assert!(table.improves(&'a', &1e300));

        table.set_weight('a', 3.0);
        table.set_weight('b', 1.0);
        assert!(table.already_visited(&'a'));
        assert_eq!(table.compare(&'a', &'b'), Ordering::Greater);
        assert_eq!(table.compare(&'a', &'z'), Ordering::Less);
        assert_eq!(table.compare(&'y', &'z'), Ordering::Equal);
        assert!(table.improves(&'a', &2.0));
        assert!(!table.improves(&'a', &3.0));
    }

    #[test]
    fn drives_heap() {
        let mut heap = FibonacciHeap::new(DistanceTable::new(I32Weights));
        for (v, w) in [(1, 40), (2, 10), (3, 30)] {
            heap.comparator_mut().set_weight(v, w);
            heap.insert(v);
        }

        // decrease-key by re-insertion
        heap.comparator_mut().set_weight(1, 5);
        heap.insert(1);

        assert_eq!(heap.extract_min(), Ok(1));
        assert_eq!(heap.extract_min(), Ok(1));
        assert_eq!(heap.extract_min(), Ok(2));
        assert_eq!(heap.extract_min(), Ok(3));
    }
}
