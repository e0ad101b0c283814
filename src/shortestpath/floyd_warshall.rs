use std::cmp::Ordering;
use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::datastructures::compare_tentative;
use crate::error::{Error, Result};
use crate::graph::*;
use crate::path::WeightedPath;
use crate::weight::WeightAlgebra;

/// Shortest distances between all pairs of vertices of a graph, as computed by
/// [all_pairs]. Paths are only materialized when they are asked for.
pub struct AllVertexPairsShortestPath<'a, G: ?Sized, V, E, W, F, A> {
    graph: &'a G,
    weights: F,
    algebra: A,
    vertices: Vec<V>,
    index: VertexMap<V, usize>,
    // Both matrices are stored row by row, row i holds the paths leaving vertices[i].
    costs: Vec<Option<W>>,
    next: Vec<Option<usize>>,
    _edges: PhantomData<E>
}

/// Runs the Floyd-Warshall algorithm on `graph`.
///
/// Negative edge weights are fine. If the relaxation drives the distance from a
/// vertex back to itself below the identity, that vertex lies on a negative cycle
/// and the computation is aborted with [Error::NegativeCycle].
#[tracing::instrument(level = "debug", skip_all, fields(n = graph.num_vertices()))]
pub fn all_pairs<'a, G, V, E, W, F, A>(graph:&'a G, weights:F, algebra:A) -> Result<AllVertexPairsShortestPath<'a, G, V, E, W, F, A>>
    where G: Digraph<V, E> + ?Sized, V: VertexId, F: Fn(&E) -> W, A: WeightAlgebra<W>
{
    let vertices:Vec<V> = graph.vertices().cloned().collect();
    let n = vertices.len();
    let index:VertexMap<V, usize> = vertices.iter().cloned().enumerate().map(|(i, u)| (u, i)).collect();

    let mut costs:Vec<Option<W>> = (0..n*n).map(|_| None).collect();
    let mut next:Vec<Option<usize>> = vec![None; n*n];

    for (i, u) in vertices.iter().enumerate() {
        costs[i*n + i] = Some(algebra.identity());
        for v in graph.out_neighbours(u) {
            let Some(edge) = graph.edge_between(u, v) else {
                continue
            };
            let j = index[v];
            let w = weights(edge);
            if i == j {
                if algebra.is_negative(&w) {
                    debug!(vertex = ?u, "negative loop");
                    return Err(Error::negative_cycle(u))
                }
                continue
            }
            costs[i*n + j] = Some(w);
        }
    }

    for k in 0..n {
        trace!(intermediate = ?vertices[k], "round");
        for i in 0..n {
            if costs[i*n + k].is_none() {
                continue
            }
            for j in 0..n {
                let candidate = match (&costs[i*n + k], &costs[k*n + j]) {
                    (Some(ik), Some(kj)) => algebra.append(ik, kj),
                    _ => continue
                };
                if compare_tentative(&algebra, Some(&candidate), costs[i*n + j].as_ref()) != Ordering::Less {
                    continue
                }
                if i == j {
                    debug!(vertex = ?vertices[i], "negative cycle");
                    return Err(Error::negative_cycle(&vertices[i]))
                }
                costs[i*n + j] = Some(candidate);
                next[i*n + j] = Some(k);
            }
        }
    }

    Ok(AllVertexPairsShortestPath { graph, weights, algebra, vertices, index, costs, next, _edges: PhantomData })
}

impl<'a, G, V, E, W, F, A> AllVertexPairsShortestPath<'a, G, V, E, W, F, A>
    where G: Digraph<V, E> + ?Sized, V: VertexId, F: Fn(&E) -> W, A: WeightAlgebra<W>
{
    /// The vertices of the graph in the order of the distance matrix.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    pub fn has_path(&self, from:&V, to:&V) -> bool {
        match (self.index.get(from), self.index.get(to)) {
            (Some(&i), Some(&j)) => self.cost(i, j).is_some(),
            _ => false
        }
    }

    pub fn shortest_distance(&self, from:&V, to:&V) -> Result<&W> {
        let (i, j) = (self.position(from)?, self.position(to)?);
        self.cost(i, j).ok_or_else(|| Error::path_not_found(from, to))
    }

    /// Rebuilds a shortest path from `from` to `to` by splitting it at the recorded
    /// intermediate vertices until only direct edges remain.
    pub fn shortest_path(&self, from:&V, to:&V) -> Result<WeightedPath<V, E, W>> where E: Clone {
        let (i, j) = (self.position(from)?, self.position(to)?);
        if self.cost(i, j).is_none() {
            return Err(Error::path_not_found(from, to))
        }

        let mut path = WeightedPath::new(from.clone(), self.algebra.identity());
        let mut segments = vec![(i, j)];
        while let Some((a, b)) = segments.pop() {
            if a == b {
                continue
            }
            match self.next[self.entry(a, b)] {
                Some(k) => {
                    segments.push((k, b));
                    segments.push((a, k));
                },
                None => {
                    let (u, v) = (&self.vertices[a], &self.vertices[b]);
                    let edge = self.graph.edge_between(u, v).ok_or_else(|| Error::path_not_found(u, v))?;
                    let w = (self.weights)(edge);
                    path.push(edge.clone(), v.clone(), &w, &self.algebra);
                }
            }
        }

        Ok(path)
    }

    fn position(&self, u:&V) -> Result<usize> {
        self.index.get(u).copied().ok_or_else(|| Error::missing_vertex(u))
    }

    fn entry(&self, i:usize, j:usize) -> usize {
        i * self.vertices.len() + j
    }

    fn cost(&self, i:usize, j:usize) -> Option<&W> {
        self.costs[self.entry(i, j)].as_ref()
    }
}

//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
