//! Undirected graphs with labelled edges.
//!
//! Every edge label is stored once per endpoint, which is why [EditGraph::add_edge]
//! asks for `E: Clone`. As a [Digraph], an undirected graph reports its symmetric
//! adjacency for both arc directions, so every algorithm in
//! [shortestpath](crate::shortestpath) runs on it unchanged.
//!
//! ```rust
//! use pathalgebra::graph::*;
//! use pathalgebra::editgraph::EditGraph;
//!
//! let mut graph = EditGraph::new();
//! graph.add_edge(&0, &1, 2);
//! graph.add_edge(&1, &2, 3);
//!
//! assert_eq!(graph.edge_between(&1, &0), Some(&2));
//! assert_eq!(graph.in_neighbours(&1).count(), 2);
//! assert_eq!(graph.num_edges(), 2);
//! ```

use fxhash::FxHashMap;

use crate::graph::*;

/// A hash-map backed undirected graph with one label of type `E` per edge.
#[derive(Debug, Clone)]
pub struct EditGraph<V, E> where V: VertexId {
    adj: FxHashMap<V, FxHashMap<V, E>>,
    m: usize
}

impl<V, E> Default for EditGraph<V, E> where V: VertexId {
    fn default() -> Self {
        EditGraph::new()
    }
}

impl<V, E> Graph<V, E> for EditGraph<V, E> where V: VertexId {
    fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    fn num_edges(&self) -> usize {
        self.m
    }

    fn contains(&self, u:&V) -> bool {
        self.adj.contains_key(u)
    }

    fn edge_between(&self, u:&V, v:&V) -> Option<&E> {
        self.adj.get(u)?.get(v)
    }

    fn is_directed(&self) -> bool {
        false
    }

    fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item=&'a V> + 'a> {
        Box::new(self.adj.keys())
    }

    fn neighbours<'a>(&'a self, u:&V) -> Box<dyn Iterator<Item=&'a V> + 'a> {
        match self.adj.get(u) {
            Some(N) => Box::new(N.keys()),
            None => Box::new(std::iter::empty())
        }
    }
}

impl<V, E> Digraph<V, E> for EditGraph<V, E> where V: VertexId {
    fn out_neighbours<'a>(&'a self, u:&V) -> Box<dyn Iterator<Item=&'a V> + 'a> {
        self.neighbours(u)
    }

    fn in_neighbours<'a>(&'a self, u:&V) -> Box<dyn Iterator<Item=&'a V> + 'a> {
        self.neighbours(u)
    }

    fn in_degree(&self, u:&V) -> usize {
        self.degree(u)
    }

    fn out_degree(&self, u:&V) -> usize {
        self.degree(u)
    }
}

impl<V, E> FromIterator<(V, V, E)> for EditGraph<V, E> where V: VertexId, E: Clone {
    fn from_iter<T: IntoIterator<Item = (V, V, E)>>(iter: T) -> Self {
        let mut res = EditGraph::new();
        for (u, v, e) in iter {
            res.add_edge(&u, &v, e);
        }
        res
    }
}

impl<V, E> EditGraph<V, E> where V: VertexId {
    pub fn new() -> Self {
        EditGraph {
            adj: FxHashMap::default(),
            m: 0
        }
    }

    pub fn with_capacity(n_guess:usize) -> Self {
        EditGraph {
            adj: FxHashMap::with_capacity_and_hasher(n_guess, Default::default()),
            m: 0
        }
    }

    pub fn degree(&self, u:&V) -> usize {
        self.adj.get(u).map_or(0, |N| N.len())
    }

    pub fn add_vertex(&mut self, u:&V) -> bool {
        if !self.adj.contains_key(u) {
            self.adj.insert(u.clone(), FxHashMap::default());
            true
        } else {
            false
        }
    }

    /// Removes the edge $uv$ and returns its label.
    pub fn remove_edge(&mut self, u:&V, v:&V) -> Option<E> {
        let label = self.adj.get_mut(u)?.remove(v)?;
        if let Some(N) = self.adj.get_mut(v) {
            N.remove(u);
        }
        self.m -= 1;
        Some(label)
    }

    pub fn remove_vertex(&mut self, u:&V) -> bool {
        let N:Vec<V> = match self.adj.get(u) {
            Some(N) => N.keys().cloned().collect(),
            None => return false
        };
        for v in &N {
            self.remove_edge(u, v);
        }
        self.adj.remove(u);
        true
    }
}

impl<V, E> EditGraph<V, E> where V: VertexId, E: Clone {
    /// Adds the edge $uv$ labelled `label`, adding missing endpoints. If the edge
    /// already exists its label is replaced and `false` is returned.
    pub fn add_edge(&mut self, u:&V, v:&V, label:E) -> bool {
        self.add_vertex(u);
        self.add_vertex(v);

        let fresh = match self.adj.get_mut(u) {
            Some(N) => N.insert(v.clone(), label.clone()).is_none(),
            None => false
        };
        if let Some(N) = self.adj.get_mut(v) {
            N.insert(u.clone(), label);
        }
        if fresh {
            self.m += 1;
        }
        fresh
    }
}

impl<E> EditGraph<u32, E> where E: Clone {
    /// Generates a path on `n` vertices, the edge $uv$ is labelled `label(u,v)`.
    pub fn path<F>(n:u32, mut label:F) -> Self where F: FnMut(u32, u32) -> E {
        let mut res = EditGraph::with_capacity(n as usize);
        for u in 0..n {
            res.add_vertex(&u);
        }
        for u in 1..n {
            res.add_edge(&(u-1), &u, label(u-1, u));
        }
        res
    }

    /// Generates a cycle on `n` vertices.
    pub fn cycle<F>(n:u32, mut label:F) -> Self where F: FnMut(u32, u32) -> E {
        let mut res = EditGraph::with_capacity(n as usize);
        for u in 0..n {
            let v = (u+1) % n;
            res.add_edge(&u, &v, label(u, v));
        }
        res
    }

    /// Generates a grid with `s` rows and `t` columns. Cell $(y,x)$ is the
    /// vertex $y \cdot t + x$.
    pub fn grid<F>(s:u32, t:u32, mut label:F) -> Self where F: FnMut(u32, u32) -> E {
        let mut res = EditGraph::with_capacity((s*t) as usize);
        for y in 0..s {
            for x in 0..t {
                let u = y * t + x;
                res.add_vertex(&u);
                if x+1 < t {
                    res.add_edge(&u, &(u+1), label(u, u+1));
                }
                if y+1 < s {
                    res.add_edge(&u, &(u+t), label(u, u+t));
                }
            }
        }
        res
    }
}

//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
