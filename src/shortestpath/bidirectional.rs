use std::cmp::Ordering;

use tracing::{debug, trace};

use crate::datastructures::*;
use crate::error::{Error, Result};
use crate::graph::*;
use crate::path::WeightedPath;
use crate::shortestpath::{relax, require_vertex};
use crate::weight::WeightAlgebra;

/// One half of a bidirectional search.
struct Search<'a, V, W, A> {
    frontier: FibonacciHeap<V, DistanceTable<V, W, &'a A>>,
    settled: VertexSet<V>,
    chain: PredecessorChain<V>,
    algebra: &'a A
}

impl<'a, V, W, A> Search<'a, V, W, A> where V: VertexId, A: WeightAlgebra<W> {
    fn new(root:&V, direction:Direction, algebra:&'a A) -> Self {
        let mut frontier = FibonacciHeap::new(DistanceTable::new(algebra));
        frontier.comparator_mut().set_weight(root.clone(), algebra.identity());
        frontier.insert(root.clone());

        Search { frontier, settled: VertexSet::default(), chain: PredecessorChain::new(direction), algebra }
    }

    fn distance(&self, u:&V) -> Option<&W> {
        self.frontier.comparator().weight(u)
    }

    /// Lower bound on the distance of every vertex still in the frontier.
    fn lowest(&self) -> Option<&W> {
        self.frontier.peek_min().ok().and_then(|u| self.distance(u))
    }

    /// Settles the closest frontier vertex and relaxes its arcs. Every improved
    /// distance of a vertex that `other` has already reached is a candidate for
    /// the meeting point.
    fn step<G, E, F>(&mut self, graph:&G, weights:&F, other:&Search<'a, V, W, A>, best:&mut Option<(V, W)>) -> Result<()>
        where G: Digraph<V, E> + ?Sized, F: Fn(&E) -> W
    {
        let u = self.frontier.extract_min()?;
        let direction = self.chain.direction();
        trace!(vertex = ?u, ?direction, "settled");
        self.settled.insert(u.clone());

        let algebra = self.algebra;
        relax(graph, &u, direction, &self.settled, &mut self.frontier, &mut self.chain, weights, |v, dv| {
            let Some(rest) = other.distance(v) else {
                return
            };
            let total = match direction {
                Direction::Forward => algebra.append(dv, rest),
                Direction::Backward => algebra.append(rest, dv)
            };
            let improves = best.as_ref().map_or(true, |(_, mu)| algebra.compare(&total, mu) == Ordering::Less);
            if improves {
                trace!(meeting = ?v, "meeting candidate");
                *best = Some((v.clone(), total));
            }
        });

        Ok(())
    }
}

/// Bidirectional Dijkstra between `source` and `target`.
///
/// A forward search along outgoing arcs from `source` and a backward search along
/// incoming arcs from `target` take turns, one step each per round. Whenever one
/// side improves the distance of a vertex the other side has reached, the sum of
/// both distances is a candidate for the best meeting point $\mu$. The search
/// stops as soon as the two frontier minima add up to at least $\mu$ or one of
/// the frontiers runs dry.
#[tracing::instrument(level = "debug", skip_all, fields(source = ?source, target = ?target))]
pub fn shortest_path<G, V, E, W, F, A>(graph:&G, source:&V, target:&V, weights:&F, algebra:&A) -> Result<WeightedPath<V, E, W>>
    where G: Digraph<V, E> + ?Sized, V: VertexId, E: Clone, F: Fn(&E) -> W, A: WeightAlgebra<W>
{
    require_vertex(graph, source)?;
    require_vertex(graph, target)?;

    if source == target {
        return Ok(WeightedPath::new(source.clone(), algebra.identity()))
    }

    let mut forward = Search::new(source, Direction::Forward, algebra);
    let mut backward = Search::new(target, Direction::Backward, algebra);
    let mut best:Option<(V, W)> = None;
    let mut turn = Direction::Forward;

    while !forward.frontier.is_empty() && !backward.frontier.is_empty() {
        if let (Some((_, mu)), Some(f), Some(b)) = (&best, forward.lowest(), backward.lowest()) {
            if algebra.compare(&algebra.append(f, b), mu) != Ordering::Less {
                break
            }
        }

        turn = match turn {
            Direction::Forward => {
                forward.step(graph, weights, &backward, &mut best)?;
                Direction::Backward
            },
            Direction::Backward => {
                backward.step(graph, weights, &forward, &mut best)?;
                Direction::Forward
            }
        };
    }

    let Some((meet, _)) = best else {
        debug!(forward = forward.settled.len(), backward = backward.settled.len(), "no path");
        return Err(Error::path_not_found(source, target))
    };

    debug!(meeting = ?meet, forward = forward.settled.len(), backward = backward.settled.len(), "searches met");
    forward.chain.build_path_through(graph, source, &meet, target, &backward.chain, weights, algebra)
}

//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
