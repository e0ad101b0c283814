use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::datastructures::*;
use crate::error::{Error, Result};
use crate::graph::*;
use crate::path::WeightedPath;
use crate::shortestpath::{relax, require_vertex};
use crate::weight::WeightAlgebra;

/// An estimate of the remaining distance from a vertex to the goal of an A* search.
///
/// Any closure `Fn(&V, &V) -> W` taking the vertex and the goal is a heuristic.
/// The constant heuristic returning the identity turns A* into Dijkstra's algorithm.
pub trait Heuristic<V, W> {
    fn estimate(&self, u:&V, goal:&V) -> W;
}

impl<V, W, F> Heuristic<V, W> for F where F: Fn(&V, &V) -> W {
    fn estimate(&self, u:&V, goal:&V) -> W {
        self(u, goal)
    }
}

/// Orders vertices by their distance plus the estimated distance to `goal`.
///
/// The heuristic is evaluated anew in every comparison.
#[derive(Debug)]
pub struct HeuristicOrder<V, W, A, H> {
    distances: DistanceTable<V, W, A>,
    heuristic: H,
    goal: V
}

impl<V, W, A, H> HeuristicOrder<V, W, A, H> where V: VertexId, A: WeightAlgebra<W>, H: Heuristic<V, W> {
    pub fn new(algebra:A, heuristic:H, goal:V) -> Self {
        HeuristicOrder { distances: DistanceTable::new(algebra), heuristic, goal }
    }

    pub fn goal(&self) -> &V {
        &self.goal
    }

    /// The value `u` is ranked by, or `None` if `u` has not been reached yet.
    pub fn priority(&self, u:&V) -> Option<W> {
        let algebra = self.distances.algebra();
        self.distances.weight(u).map(|g| algebra.append(g, &self.heuristic.estimate(u, &self.goal)))
    }
}

impl<V, W, A, H> Comparator<V> for HeuristicOrder<V, W, A, H> where V: VertexId, A: WeightAlgebra<W>, H: Heuristic<V, W> {
    fn compare(&self, a:&V, b:&V) -> Ordering {
        compare_tentative(self.distances.algebra(), self.priority(a).as_ref(), self.priority(b).as_ref())
    }
}

impl<V, W, A, H> DistanceOrder<V, W, A> for HeuristicOrder<V, W, A, H> where V: VertexId, A: WeightAlgebra<W>, H: Heuristic<V, W> {
    fn table(&self) -> &DistanceTable<V, W, A> {
        &self.distances
    }

    fn table_mut(&mut self) -> &mut DistanceTable<V, W, A> {
        &mut self.distances
    }
}

/// A* search from `source` to `target`. The search loop is Dijkstra's; only the
/// frontier is ordered by [HeuristicOrder] instead of the plain distances.
///
/// The path is optimal as long as `heuristic` never overestimates the remaining
/// distance. This is the caller's responsibility and is not checked.
#[tracing::instrument(level = "debug", skip_all, fields(source = ?source, target = ?target))]
pub fn shortest_path<G, V, E, W, F, A, H>(graph:&G, source:&V, target:&V, weights:&F, algebra:&A, heuristic:H)
    -> Result<WeightedPath<V, E, W>>
    where G: Digraph<V, E> + ?Sized, V: VertexId, E: Clone, F: Fn(&E) -> W, A: WeightAlgebra<W>, H: Heuristic<V, W>
{
    require_vertex(graph, source)?;
    require_vertex(graph, target)?;

    let mut settled = VertexSet::default();
    let mut chain = PredecessorChain::new(Direction::Forward);
    let mut frontier = FibonacciHeap::new(HeuristicOrder::new(algebra, heuristic, target.clone()));

    frontier.comparator_mut().table_mut().set_weight(source.clone(), algebra.identity());
    frontier.insert(source.clone());

    while !frontier.is_empty() {
        let u = frontier.extract_min()?;
        trace!(vertex = ?u, "settled");

        if u == *target {
            let path = chain.build_path(graph, source, target, weights, algebra)?;
            debug!(size = path.size(), settled = settled.len(), "path found");
            return Ok(path)
        }

        settled.insert(u.clone());
        relax(graph, &u, Direction::Forward, &settled, &mut frontier, &mut chain, weights, |_, _| {});
    }

    debug!(settled = settled.len(), "no path");
    Err(Error::path_not_found(source, target))
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
    use crate::shortestpath::dijkstra;
    use crate::weight::*;

    fn manhattan(cols:u32) -> impl Fn(&u32, &u32) -> i64 {
        move |u:&u32, goal:&u32| {
            let (uy, ux) = ((u / cols) as i64, (u % cols) as i64);
            let (gy, gx) = ((goal / cols) as i64, (goal % cols) as i64);
            (uy - gy).abs() + (ux - gx).abs()
        }
    }

    #[test]
    fn order_includes_estimate() {
        let mut order = HeuristicOrder::new(I64Weights, |u:&u32, _:&u32| if *u == 1 { 10i64 } else { 0 }, 9);
        order.table_mut().set_weight(1, 1);
        order.table_mut().set_weight(2, 5);

        assert_eq!(order.goal(), &9);
        assert_eq!(order.priority(&1), Some(11));
        assert_eq!(order.priority(&3), None);
        assert_eq!(order.compare(&1, &2), Ordering::Greater);
        assert_eq!(order.compare(&2, &3), Ordering::Less);
        assert_eq!(order.table().weight(&1), Some(&1));
    }

    #[test]
    fn grid_with_manhattan_distance() {
        let mut G = EditDigraph::grid(6, 7, |_,_| 1i64);
        // Wall off most of column 3 so the search has to go around it.
        for y in 0..5 {
            let u = y * 7 + 3;
            for v in [u - 1, u + 1, u + 7] {
                G.remove_arc(&v, &u);
            }
        }

        let w = |w:&i64| *w;
        let path = shortest_path(&G, &0, &6, &w, &I64Weights, manhattan(7)).unwrap();
        let reference = dijkstra::shortest_path(&G, &0, &6, &w, &I64Weights).unwrap();
        assert_eq!(path.weight(), reference.weight());
        assert_eq!(*path.weight(), 16);
        assert!(!path.vertices().iter().any(|u| u % 7 == 3 && u / 7 < 5));
    }

    #[test]
    fn overestimating_heuristic() {
        // 0 -> 1 -> 3 costs 2, 0 -> 2 -> 3 costs 6
        let G:EditDigraph<u32, i64> = vec![(0,1,1),(1,3,1),(0,2,1),(2,3,5)].into_iter().collect();
        let w = |w:&i64| *w;

        let path = shortest_path(&G, &0, &3, &w, &I64Weights, |_:&u32, _:&u32| 0).unwrap();
        assert_eq!(*path.weight(), 2);

        let misled = shortest_path(&G, &0, &3, &w, &I64Weights, |u:&u32, _:&u32| if *u == 1 { 100 } else { 0 }).unwrap();
        assert_eq!(misled.vertices(), &[0,2,3]);
        assert_eq!(*misled.weight(), 6);
    }

    #[test]
    fn unreachable_goal() {
        let G = EditDigraph::path(4, |_,_| 1.0);
        let err = shortest_path(&G, &3, &0, &|w:&f64| *w, &F64Weights, |_:&u32, _:&u32| 0.0).unwrap_err();
        assert_eq!(err, Error::path_not_found(&3, &0));
    }
}
