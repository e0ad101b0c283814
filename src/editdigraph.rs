//! Directed graphs with labelled arcs.
//!
//! ```rust
//! use pathalgebra::graph::*;
//! use pathalgebra::editdigraph::EditDigraph;
//!
//! let mut graph = EditDigraph::new();
//! graph.add_arc(&"a", &"b", 5.0);
//! graph.add_arc(&"b", &"c", 1.5);
//!
//! assert_eq!(graph.edge_between(&"a", &"b"), Some(&5.0));
//! assert_eq!(graph.edge_between(&"b", &"a"), None);
//! assert_eq!(graph.in_neighbours(&"c").collect::<Vec<_>>(), vec![&"b"]);
//! ```

use fxhash::FxHashMap;

use crate::graph::*;

/// A hash-map backed implementation of [Digraph] which stores one label of type `E`
/// per arc.
#[derive(Debug, Clone)]
pub struct EditDigraph<V, E> where V: VertexId {
    in_adj: FxHashMap<V, VertexSet<V>>,
    out_adj: FxHashMap<V, FxHashMap<V, E>>,
    m: usize
}

impl<V, E> Default for EditDigraph<V, E> where V: VertexId {
    fn default() -> Self {
        EditDigraph::new()
    }
}

impl<V, E> Graph<V, E> for EditDigraph<V, E> where V: VertexId {
    fn num_vertices(&self) -> usize {
        self.out_adj.len()
    }

    fn num_edges(&self) -> usize {
        self.m
    }

    fn contains(&self, u:&V) -> bool {
        self.out_adj.contains_key(u)
    }

    fn edge_between(&self, u:&V, v:&V) -> Option<&E> {
        self.out_adj.get(u)?.get(v)
    }

    fn is_directed(&self) -> bool {
        true
    }

    fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item=&'a V> + 'a> {
        Box::new(self.out_adj.keys())
    }

    fn neighbours<'a>(&'a self, u:&V) -> Box<dyn Iterator<Item=&'a V> + 'a> {
        match (self.in_adj.get(u), self.out_adj.get(u)) {
            (Some(N_in), Some(N_out)) => {
                Box::new(N_in.iter().chain(N_out.keys().filter(move |v| !N_in.contains(*v))))
            },
            _ => Box::new(std::iter::empty())
        }
    }
}

impl<V, E> Digraph<V, E> for EditDigraph<V, E> where V: VertexId {
    fn out_neighbours<'a>(&'a self, u:&V) -> Box<dyn Iterator<Item=&'a V> + 'a> {
        match self.out_adj.get(u) {
            Some(N) => Box::new(N.keys()),
            None => Box::new(std::iter::empty())
        }
    }

    fn in_neighbours<'a>(&'a self, u:&V) -> Box<dyn Iterator<Item=&'a V> + 'a> {
        match self.in_adj.get(u) {
            Some(N) => Box::new(N.iter()),
            None => Box::new(std::iter::empty())
        }
    }

    fn in_degree(&self, u:&V) -> usize {
        self.in_adj.get(u).map_or(0, |N| N.len())
    }

    fn out_degree(&self, u:&V) -> usize {
        self.out_adj.get(u).map_or(0, |N| N.len())
    }
}

impl<V, E> FromIterator<(V, V, E)> for EditDigraph<V, E> where V: VertexId {
    fn from_iter<T: IntoIterator<Item = (V, V, E)>>(iter: T) -> Self {
        let mut res = EditDigraph::new();
        for (u, v, e) in iter {
            res.add_arc(&u, &v, e);
        }
        res
    }
}

impl<V, E> EditDigraph<V, E> where V: VertexId {
    pub fn new() -> Self {
        EditDigraph {
            in_adj: FxHashMap::default(),
            out_adj: FxHashMap::default(),
            m: 0
        }
    }

    pub fn with_capacity(n_guess:usize) -> Self {
        EditDigraph {
            in_adj: FxHashMap::with_capacity_and_hasher(n_guess, Default::default()),
            out_adj: FxHashMap::with_capacity_and_hasher(n_guess, Default::default()),
            m: 0
        }
    }

    /// Adds `u` as an isolated vertex. Returns `false` if it already existed.
    pub fn add_vertex(&mut self, u:&V) -> bool {
        if !self.out_adj.contains_key(u) {
            self.in_adj.insert(u.clone(), VertexSet::default());
            self.out_adj.insert(u.clone(), FxHashMap::default());
            true
        } else {
            false
        }
    }

    /// Adds the arc $uv$ labelled `label`, adding missing endpoints. If the arc
    /// already exists its label is replaced and `false` is returned.
    pub fn add_arc(&mut self, u:&V, v:&V, label:E) -> bool {
        self.add_vertex(u);
        self.add_vertex(v);

        let fresh = match self.out_adj.get_mut(u) {
            Some(N) => N.insert(v.clone(), label).is_none(),
            None => false
        };
        if fresh {
            if let Some(N) = self.in_adj.get_mut(v) {
                N.insert(u.clone());
            }
            self.m += 1;
        }
        fresh
    }

    /// Removes the arc $uv$ and returns its label.
    pub fn remove_arc(&mut self, u:&V, v:&V) -> Option<E> {
        let label = self.out_adj.get_mut(u)?.remove(v)?;
        if let Some(N) = self.in_adj.get_mut(v) {
            N.remove(u);
        }
        self.m -= 1;
        Some(label)
    }

    /// Removes all outgoing arcs of `u`, leaving it in the graph. Returns the
    /// number of removed arcs.
    pub fn isolate_outbound(&mut self, u:&V) -> usize {
        let N:Vec<V> = self.out_neighbours(u).cloned().collect();
        for v in &N {
            self.remove_arc(u, v);
        }
        N.len()
    }

    pub fn remove_vertex(&mut self, u:&V) -> bool {
        if !self.contains(u) {
            return false
        }
        self.isolate_outbound(u);
        let N:Vec<V> = self.in_neighbours(u).cloned().collect();
        for v in &N {
            self.remove_arc(v, u);
        }

        self.out_adj.remove(u);
        self.in_adj.remove(u);
        true
    }
}

impl<E> EditDigraph<u32, E> {
    /// Generates a directed path $0 \to 1 \to \dots \to n-1$. Each arc $uv$ is
    /// labelled with `label(u,v)`.
    pub fn path<F>(n:u32, mut label:F) -> Self where F: FnMut(u32, u32) -> E {
        let mut res = EditDigraph::with_capacity(n as usize);
        for u in 0..n {
            res.add_vertex(&u);
        }
        for u in 1..n {
            res.add_arc(&(u-1), &u, label(u-1, u));
        }
        res
    }

    /// Generates a directed cycle on `n` vertices.
    pub fn cycle<F>(n:u32, mut label:F) -> Self where F: FnMut(u32, u32) -> E {
        let mut res = EditDigraph::with_capacity(n as usize);
        for u in 0..n {
            let v = (u+1) % n;
            res.add_arc(&u, &v, label(u, v));
        }
        res
    }

    /// Generates a grid with `s` rows and `t` columns in which every pair of
    /// horizontally or vertically adjacent cells is joined by arcs in both
    /// directions. Cell $(y,x)$ is the vertex $y \cdot t + x$.
    pub fn grid<F>(s:u32, t:u32, mut label:F) -> Self where F: FnMut(u32, u32) -> E {
        let mut res = EditDigraph::with_capacity((s*t) as usize);
        for y in 0..s {
            for x in 0..t {
                let u = y * t + x;
                res.add_vertex(&u);
                if x+1 < t {
                    res.add_arc(&u, &(u+1), label(u, u+1));
                    res.add_arc(&(u+1), &u, label(u+1, u));
                }
                if y+1 < s {
                    res.add_arc(&u, &(u+t), label(u, u+t));
                    res.add_arc(&(u+t), &u, label(u+t, u));
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

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn add_remove_arcs() {
        let mut G = EditDigraph::new();
        assert!(G.add_arc(&0, &1, 'a'));
        assert!(G.add_arc(&0, &2, 'b'));
        assert!(G.add_arc(&0, &3, 'c'));
        assert!(!G.add_arc(&0, &3, 'd'));

        assert_eq!(G.out_degree(&0), 3);
        assert_eq!(G.in_degree(&0), 0);
        assert_eq!(G.edge_between(&0, &3), Some(&'d'));
        assert_eq!(G.num_edges(), 3);

        assert_eq!(G.remove_arc(&0, &3), Some('d'));
        assert_eq!(G.remove_arc(&0, &3), None);
        assert_eq!(G.out_degree(&0), 2);
        assert_eq!(G.in_degree(&3), 0);
        assert!(G.contains(&3));
    }

    #[test]
    fn remove_vertex() {
        let mut G:EditDigraph<u32, ()> = vec![(0,1,()),(0,2,()),(0,3,()),(1,0,()),(2,0,()),(3,0,())].into_iter().collect();
        assert_eq!(G.num_edges(), 6);

        assert!(G.remove_vertex(&0));
        assert!(!G.remove_vertex(&0));
        assert_eq!(G.num_edges(), 0);
        assert_eq!(G.num_vertices(), 3);
        assert_eq!(G.in_degree(&1), 0);
    }

    #[test]
    fn neighbourhoods() {
        // 0 --> 1 --> 2 --> 3 --> 4
        let G = EditDigraph::path(5, |_,_| ());

        let mut N:Vec<_> = G.neighbours(&2).cloned().collect();
        N.sort_unstable();
        assert_eq!(N, vec![1,3]);
        assert_eq!(G.in_neighbours(&2).cloned().collect::<Vec<_>>(), vec![1]);
        assert_eq!(G.out_neighbours(&2).cloned().collect::<Vec<_>>(), vec![3]);
        assert_eq!(G.out_neighbours(&4).count(), 0);
        assert_eq!(G.out_neighbours(&17).count(), 0);
    }

    #[test]
    fn generators() {
        let G = EditDigraph::cycle(4, |u,v| u*10 + v);
        assert_eq!(G.num_edges(), 4);
        assert_eq!(G.edge_between(&3, &0), Some(&30));

        let G = EditDigraph::grid(3, 4, |_,_| 1.0);
        assert_eq!(G.num_vertices(), 12);
        // (3*(4-1) + 4*(3-1)) undirected grid edges, each in both directions
        assert_eq!(G.num_edges(), 2*17);
        assert!(G.has_arc(&5, &9) && G.has_arc(&9, &5));
        assert!(!G.has_arc(&3, &4));

        let mut G = EditDigraph::path(3, |_,_| ());
        assert_eq!(G.isolate_outbound(&1), 1);
        assert_eq!(G.num_edges(), 1);
    }
}
