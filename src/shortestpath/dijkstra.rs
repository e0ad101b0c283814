use tracing::{debug, trace};

use crate::datastructures::*;
use crate::error::{Error, Result};
use crate::graph::*;
use crate::path::WeightedPath;
use crate::shortestpath::{relax, require_vertex};
use crate::weight::WeightAlgebra;

/// Dijkstra's algorithm from `source` to `target`.
///
/// Improved distances are not pushed down in the frontier; the vertex is inserted
/// once more instead. Outdated entries are extracted later and simply relax their
/// neighbours again with the final distance, which changes nothing.
#[tracing::instrument(level = "debug", skip_all, fields(source = ?source, target = ?target))]
pub fn shortest_path<G, V, E, W, F, A>(graph:&G, source:&V, target:&V, weights:&F, algebra:&A) -> Result<WeightedPath<V, E, W>>
    where G: Digraph<V, E> + ?Sized, V: VertexId, E: Clone, F: Fn(&E) -> W, A: WeightAlgebra<W>
{
    require_vertex(graph, source)?;
    require_vertex(graph, target)?;

    let mut settled = VertexSet::default();
    let mut chain = PredecessorChain::new(Direction::Forward);
    let mut frontier = FibonacciHeap::new(DistanceTable::new(algebra));

    frontier.comparator_mut().set_weight(source.clone(), algebra.identity());
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
