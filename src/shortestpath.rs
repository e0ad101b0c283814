//! Weighted shortest paths over arbitrary [weight algebras](crate::weight::WeightAlgebra).
//!
//! Every [Digraph] (and therefore every undirected graph in this crate as well)
//! implements [ShortestPathAlgorithms]. The weight of an edge is supplied by the
//! caller as a function `Fn(&E) -> W`, and the algebra decides how weights add
//! up and compare:
//!
//! ```rust
//! use pathalgebra::editdigraph::EditDigraph;
//! use pathalgebra::shortestpath::*;
//! use pathalgebra::weight::F64Weights;
//!
//! let mut graph = EditDigraph::new();
//! graph.add_arc(&"a", &"b", 2.0);
//! graph.add_arc(&"b", &"c", 4.0);
//! graph.add_arc(&"a", &"c", 7.0);
//!
//! let path = graph.dijkstra(&"a", &"c", |w:&f64| *w, F64Weights).unwrap();
//! assert_eq!(path.vertices(), &["a", "b", "c"]);
//! assert_eq!(*path.weight(), 6.0);
//!
//! let all = graph.floyd_warshall(|w:&f64| *w, F64Weights).unwrap();
//! assert_eq!(all.shortest_distance(&"a", &"c"), Ok(&6.0));
//! assert!(graph.dijkstra(&"c", &"a", |w:&f64| *w, F64Weights).is_err());
//! ```
//!
//! Dijkstra, its bidirectional variant and A* expect every edge weight to be at
//! least the identity of the algebra. This is not checked; negative weights may
//! silently produce wrong answers. Floyd-Warshall and Bellman-Ford accept
//! negative weights and report negative cycles as [Error::NegativeCycle].
//!
//! All engines run to completion on the calling thread. Independent queries only
//! read the graph and the algebra and may run concurrently.

pub mod astar;
pub mod bellman_ford;
pub mod bidirectional;
pub mod dijkstra;
pub mod floyd_warshall;

pub use astar::{Heuristic, HeuristicOrder};
pub use bellman_ford::SingleSourceShortestPaths;
pub use floyd_warshall::AllVertexPairsShortestPath;

use crate::datastructures::*;
use crate::error::{Error, Result};
use crate::graph::*;
use crate::path::WeightedPath;
use crate::weight::WeightAlgebra;

pub trait ShortestPathAlgorithms<V, E> where V: VertexId {
    /// Finds a shortest path from `source` to `target` with Dijkstra's algorithm.
    fn dijkstra<W, F, A>(&self, source:&V, target:&V, weights:F, algebra:A) -> Result<WeightedPath<V, E, W>>
        where E: Clone, F: Fn(&E) -> W, A: WeightAlgebra<W>;

    /// Finds a shortest path from `source` to `target` by searching forward from
    /// `source` and backward from `target` in alternating steps.
    fn bidirectional_dijkstra<W, F, A>(&self, source:&V, target:&V, weights:F, algebra:A) -> Result<WeightedPath<V, E, W>>
        where E: Clone, F: Fn(&E) -> W, A: WeightAlgebra<W>;

    /// Finds a shortest path from `source` to `target` guided by `heuristic`. The
    /// result is optimal if the heuristic never overestimates the remaining distance.
    fn astar<W, F, A, H>(&self, source:&V, target:&V, weights:F, algebra:A, heuristic:H) -> Result<WeightedPath<V, E, W>>
        where E: Clone, F: Fn(&E) -> W, A: WeightAlgebra<W>, H: Heuristic<V, W>;

    /// Computes the distances between all pairs of vertices.
    fn floyd_warshall<W, F, A>(&self, weights:F, algebra:A) -> Result<AllVertexPairsShortestPath<'_, Self, V, E, W, F, A>>
        where Self: Sized, F: Fn(&E) -> W, A: WeightAlgebra<W>;

    /// Computes the distances from `source` to all vertices, tolerating negative weights.
    fn bellman_ford<W, F, A>(&self, source:&V, weights:F, algebra:A) -> Result<SingleSourceShortestPaths<'_, Self, V, E, W, F, A>>
        where Self: Sized, F: Fn(&E) -> W, A: WeightAlgebra<W>;
}

impl<V, E, G> ShortestPathAlgorithms<V, E> for G where G: Digraph<V, E>, V: VertexId {
    fn dijkstra<W, F, A>(&self, source:&V, target:&V, weights:F, algebra:A) -> Result<WeightedPath<V, E, W>>
        where E: Clone, F: Fn(&E) -> W, A: WeightAlgebra<W>
    {
        dijkstra::shortest_path(self, source, target, &weights, &algebra)
    }

    fn bidirectional_dijkstra<W, F, A>(&self, source:&V, target:&V, weights:F, algebra:A) -> Result<WeightedPath<V, E, W>>
        where E: Clone, F: Fn(&E) -> W, A: WeightAlgebra<W>
    {
        bidirectional::shortest_path(self, source, target, &weights, &algebra)
    }

    fn astar<W, F, A, H>(&self, source:&V, target:&V, weights:F, algebra:A, heuristic:H) -> Result<WeightedPath<V, E, W>>
        where E: Clone, F: Fn(&E) -> W, A: WeightAlgebra<W>, H: Heuristic<V, W>
    {
        astar::shortest_path(self, source, target, &weights, &algebra, heuristic)
    }

    fn floyd_warshall<W, F, A>(&self, weights:F, algebra:A) -> Result<AllVertexPairsShortestPath<'_, Self, V, E, W, F, A>>
        where Self: Sized, F: Fn(&E) -> W, A: WeightAlgebra<W>
    {
        floyd_warshall::all_pairs(self, weights, algebra)
    }

    fn bellman_ford<W, F, A>(&self, source:&V, weights:F, algebra:A) -> Result<SingleSourceShortestPaths<'_, Self, V, E, W, F, A>>
        where Self: Sized, F: Fn(&E) -> W, A: WeightAlgebra<W>
    {
        bellman_ford::single_source(self, source, weights, algebra)
    }
}

pub(crate) fn require_vertex<G, V, E>(graph:&G, u:&V) -> Result<()> where G: Graph<V, E> + ?Sized, V: VertexId {
    if graph.contains(u) {
        Ok(())
    } else {
        Err(Error::missing_vertex(u))
    }
}

/// Relaxes all arcs leaving `u` in the given search direction.
///
/// Every neighbour that is not settled yet and whose distance improves gets its
/// new distance, a new predecessor and a fresh entry in `frontier`. The callback
/// `on_improve` sees each improvement before it is recorded.
pub(crate) fn relax<G, V, E, W, F, T, C, I>(graph:&G, u:&V, direction:Direction, settled:&VertexSet<V>,
                                         frontier:&mut FibonacciHeap<V, C>, chain:&mut PredecessorChain<V>,
                                         weights:&F, mut on_improve:I)
    where G: Digraph<V, E> + ?Sized, V: VertexId, F: Fn(&E) -> W, T: WeightAlgebra<W>,
          C: DistanceOrder<V, W, T>, I: FnMut(&V, &W)
{
    let neighbours = match direction {
        Direction::Forward => graph.out_neighbours(u),
        Direction::Backward => graph.in_neighbours(u)
    };

    for v in neighbours {
        if settled.contains(v) {
            continue
        }

        let edge = match direction {
            Direction::Forward => graph.edge_between(u, v),
            Direction::Backward => graph.edge_between(v, u)
        };
        let Some(edge) = edge else {
            continue
        };

        let table = frontier.comparator().table();
        let Some(du) = table.weight(u) else {
            continue
        };
        let w = weights(edge);
        let candidate = match direction {
            Direction::Forward => table.algebra().append(du, &w),
            Direction::Backward => table.algebra().append(&w, du)
        };

        if table.improves(v, &candidate) {
            on_improve(v, &candidate);
            frontier.comparator_mut().table_mut().set_weight(v.clone(), candidate);
            frontier.insert(v.clone());
            chain.add_predecessor(v.clone(), u.clone());
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
    use crate::editdigraph::EditDigraph;
    use crate::editgraph::EditGraph;
    use crate::weight::*;

    use itertools::Itertools;
    use rand::prelude::*;
    use rand_chacha::ChaCha8Rng;

    fn random_digraph(rng:&mut ChaCha8Rng, n:u32, p:f64, max_weight:i64) -> EditDigraph<u32, i64> {
        let mut G = EditDigraph::with_capacity(n as usize);
        for u in 0..n {
            G.add_vertex(&u);
        }
        for u in 0..n {
            for v in 0..n {
                if u != v && rng.gen_bool(p) {
                    G.add_arc(&u, &v, rng.gen_range(0..=max_weight));
                }
            }
        }
        G
    }

    fn assert_well_formed<G>(G:&G, path:&WeightedPath<u32, i64, i64>) where G: Graph<u32, i64> {
        assert_eq!(path.vertices().len(), path.edges().len() + 1);
        for ((u, v), e) in path.vertices().iter().tuple_windows().zip(path.edges()) {
            assert_eq!(G.edge_between(u, v), Some(e));
        }
        assert_eq!(*path.weight(), I64Weights.sum(path.edges().iter()));
    }

    #[test]
    fn single_arc() {
        let mut G = EditDigraph::new();
        G.add_arc(&"V1", &"V2", 5.0);

        let path = G.dijkstra(&"V1", &"V2", |w:&f64| *w, F64Weights).unwrap();
        assert_eq!(path.vertices().len(), 2);
        assert_eq!(path.size(), 1);
        assert_eq!(*path.weight(), 5.0);

        let err = G.dijkstra(&"V2", &"V1", |w:&f64| *w, F64Weights).unwrap_err();
        assert!(err.is_path_not_found());
        let err = G.bidirectional_dijkstra(&"V2", &"V1", |w:&f64| *w, F64Weights).unwrap_err();
        assert!(err.is_path_not_found());
    }

    #[test]
    fn missing_vertices() {
        let G = EditDigraph::path(3, |_,_| 1i64);
        assert_eq!(G.dijkstra(&0, &7, |w:&i64| *w, I64Weights).unwrap_err(), Error::missing_vertex(&7));
        assert_eq!(G.bidirectional_dijkstra(&7, &0, |w:&i64| *w, I64Weights).unwrap_err(), Error::missing_vertex(&7));
        assert_eq!(G.astar(&7, &0, |w:&i64| *w, I64Weights, |_:&u32, _:&u32| 0).unwrap_err(), Error::missing_vertex(&7));
        assert!(G.bellman_ford(&7, |w:&i64| *w, I64Weights).is_err());
    }

    #[test]
    fn isolated_source() {
        // Removing all outbound arcs of a vertex cuts it off for every strategy.
        let mut G = EditDigraph::cycle(5, |u,_| u as i64 + 1);
        G.isolate_outbound(&2);
        let w = |w:&i64| *w;

        for target in [0, 1, 3, 4] {
            assert!(G.dijkstra(&2, &target, w, I64Weights).unwrap_err().is_path_not_found());
            assert!(G.bidirectional_dijkstra(&2, &target, w, I64Weights).unwrap_err().is_path_not_found());
            assert!(G.astar(&2, &target, w, I64Weights, |_:&u32, _:&u32| 0).unwrap_err().is_path_not_found());
            assert!(G.floyd_warshall(w, I64Weights).unwrap().shortest_path(&2, &target).unwrap_err().is_path_not_found());
            assert!(G.bellman_ford(&2, w, I64Weights).unwrap().shortest_path(&target).unwrap_err().is_path_not_found());
        }
    }

    #[test]
    fn trivial_queries() {
        let G = EditDigraph::path(3, |_,_| 2i64);
        let w = |w:&i64| *w;
        for path in [G.dijkstra(&1, &1, w, I64Weights).unwrap(),
                     G.bidirectional_dijkstra(&1, &1, w, I64Weights).unwrap(),
                     G.astar(&1, &1, w, I64Weights, |_:&u32, _:&u32| 0).unwrap(),
                     G.floyd_warshall(w, I64Weights).unwrap().shortest_path(&1, &1).unwrap()] {
            assert_eq!(path.vertices(), &[1]);
            assert_eq!(path.size(), 0);
            assert_eq!(*path.weight(), 0);
        }
    }

    #[test]
    fn undirected_graphs() {
        // 0 - 1 - 2 - 3 with a shortcut 0 - 3 that is too expensive
        let mut G = EditGraph::path(4, |_,_| 1i64);
        G.add_edge(&0, &3, 5);
        let w = |w:&i64| *w;

        let path = G.bidirectional_dijkstra(&3, &0, w, I64Weights).unwrap();
        assert_eq!(path.vertices(), &[3,2,1,0]);
        assert_eq!(*path.weight(), 3);
        assert_eq!(G.dijkstra(&3, &0, w, I64Weights).unwrap().vertices(), path.vertices());
        assert_eq!(G.floyd_warshall(w, I64Weights).unwrap().shortest_distance(&0, &3), Ok(&3));
    }

    #[test]
    fn random_equivalence() {
        let mut rng = ChaCha8Rng::seed_from_u64(4711);
        let w = |w:&i64| *w;

        for round in 0..20 {
            let n = 8 + round;
            let G = random_digraph(&mut rng, n, 0.15, 20);
            let all_pairs = G.floyd_warshall(w, I64Weights).unwrap();

            for s in 0..n {
                let from_s = G.bellman_ford(&s, w, I64Weights).unwrap();
                for t in 0..n {
                    let uni = G.dijkstra(&s, &t, w, I64Weights);
                    let bi = G.bidirectional_dijkstra(&s, &t, w, I64Weights);
                    let star = G.astar(&s, &t, w, I64Weights, |_:&u32, _:&u32| 0);

                    match uni {
                        Ok(path) => {
                            assert_well_formed(&G, &path);
                            let bi = bi.unwrap();
                            assert_well_formed(&G, &bi);
                            assert_eq!(bi.weight(), path.weight(), "bidirectional {s} -> {t}");
                            assert_eq!(star.unwrap().weight(), path.weight());
                            assert_eq!(all_pairs.shortest_distance(&s, &t), Ok(path.weight()));
                            assert_eq!(from_s.shortest_distance(&t), Ok(path.weight()));

                            let fw = all_pairs.shortest_path(&s, &t).unwrap();
                            assert_well_formed(&G, &fw);
                            assert_eq!(fw.weight(), path.weight());
                        },
                        Err(err) => {
                            assert!(err.is_path_not_found());
                            assert!(bi.unwrap_err().is_path_not_found());
                            assert!(star.unwrap_err().is_path_not_found());
                            assert!(!all_pairs.has_path(&s, &t));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn generic_weights() {
        use num_bigint::BigInt;

        let G = EditDigraph::path(40, |_,_| BigInt::from(u64::MAX));
        let path = G.dijkstra(&0, &39, |w:&BigInt| w.clone(), BigIntWeights).unwrap();
        assert_eq!(*path.weight(), BigInt::from(u64::MAX) * BigInt::from(39));

        let path = G.bidirectional_dijkstra(&0, &39, |w:&BigInt| w.clone(), BigIntWeights).unwrap();
        assert_eq!(path.size(), 39);

        // Weights need not be stored on the edges at all
        let G = EditDigraph::grid(3, 3, |_,_| ());
        let path = G.dijkstra(&0, &8, |_:&()| 1i32, I32Weights).unwrap();
        assert_eq!(*path.weight(), 4);
    }
}
