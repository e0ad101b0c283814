use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::datastructures::*;
use crate::error::{Error, Result};
use crate::graph::*;
use crate::path::WeightedPath;
use crate::shortestpath::require_vertex;
use crate::weight::WeightAlgebra;

/// Shortest distances from a single source to every vertex, as computed by
/// [single_source].
pub struct SingleSourceShortestPaths<'a, G: ?Sized, V, E, W, F, A> {
    graph: &'a G,
    source: V,
    weights: F,
    distances: DistanceTable<V, W, A>,
    chain: PredecessorChain<V>,
    _edges: PhantomData<E>
}

/// Runs the Bellman-Ford algorithm from `source`.
///
/// Every arc is relaxed in up to $n-1$ rounds, stopping early once a round
/// changes nothing. Negative edge weights are allowed; an improvement in one
/// more round proves a negative cycle reachable from `source` and yields
/// [Error::NegativeCycle]. Negative cycles elsewhere in the graph go unnoticed.
#[tracing::instrument(level = "debug", skip_all, fields(source = ?source))]
pub fn single_source<'a, G, V, E, W, F, A>(graph:&'a G, source:&V, weights:F, algebra:A)
    -> Result<SingleSourceShortestPaths<'a, G, V, E, W, F, A>>
    where G: Digraph<V, E> + ?Sized, V: VertexId, F: Fn(&E) -> W, A: WeightAlgebra<W>
{
    require_vertex(graph, source)?;

    let zero = algebra.identity();
    let mut distances = DistanceTable::new(algebra);
    distances.set_weight(source.clone(), zero);
    let mut chain = PredecessorChain::new(Direction::Forward);

    let rounds = graph.num_vertices().saturating_sub(1);
    for round in 0..rounds {
        if relax_arcs(graph, &mut distances, &mut chain, &weights).is_none() {
            trace!(round, "converged");
            break
        }
    }

    if let Some(v) = relax_arcs(graph, &mut distances, &mut chain, &weights) {
        debug!(vertex = ?v, "negative cycle");
        return Err(Error::negative_cycle(&v))
    }

    debug!(reached = distances.len(), "distances computed");
    Ok(SingleSourceShortestPaths { graph, source: source.clone(), weights, distances, chain, _edges: PhantomData })
}

/// Relaxes every arc of `graph` once and returns the last vertex whose distance
/// improved, if any.
fn relax_arcs<G, V, E, W, F, A>(graph:&G, distances:&mut DistanceTable<V, W, A>, chain:&mut PredecessorChain<V>, weights:&F) -> Option<V>
    where G: Digraph<V, E> + ?Sized, V: VertexId, F: Fn(&E) -> W, A: WeightAlgebra<W>
{
    let mut improved = None;
    for u in graph.vertices() {
        let Some(du) = distances.weight(u) else {
            continue
        };

        let updates:Vec<(V, W)> = graph.out_neighbours(u).filter_map(|v| {
            let edge = graph.edge_between(u, v)?;
            let candidate = distances.algebra().append(du, &weights(edge));
            distances.improves(v, &candidate).then(|| (v.clone(), candidate))
        }).collect();

        for (v, candidate) in updates {
            chain.add_predecessor(v.clone(), u.clone());
            distances.set_weight(v.clone(), candidate);
            improved = Some(v);
        }
    }
    improved
}

impl<'a, G, V, E, W, F, A> SingleSourceShortestPaths<'a, G, V, E, W, F, A>
    where G: Digraph<V, E> + ?Sized, V: VertexId, F: Fn(&E) -> W, A: WeightAlgebra<W>
{
    pub fn source(&self) -> &V {
        &self.source
    }

    pub fn has_path(&self, target:&V) -> bool {
        self.distances.already_visited(target)
    }

    pub fn shortest_distance(&self, target:&V) -> Result<&W> {
        require_vertex(self.graph, target)?;
        self.distances.weight(target).ok_or_else(|| Error::path_not_found(&self.source, target))
    }

    pub fn shortest_path(&self, target:&V) -> Result<WeightedPath<V, E, W>> where E: Clone {
        require_vertex(self.graph, target)?;
        if !self.has_path(target) {
            return Err(Error::path_not_found(&self.source, target))
        }
        self.chain.build_path(self.graph, &self.source, target, &self.weights, self.distances.algebra())
    }
}

//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
