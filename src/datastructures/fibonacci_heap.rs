//! A Fibonacci heap whose order is decided by a *live* comparator.
//!
//! The heap never stores keys. Every ordering decision is delegated to the
//! [Comparator] it owns, and the comparator may be mutated between heap operations
//! through [FibonacciHeap::comparator_mut]. The shortest-path engines use this
//! to emulate decrease-key: they lower the distance of a vertex inside the
//! comparator and insert the vertex once more. The older entry stays in the heap
//! and is later extracted as a harmless duplicate.
//!
//! ```rust
//! use pathalgebra::datastructures::*;
//!
//! let mut heap = FibonacciHeap::new(NaturalOrder);
//! heap.insert(100);
//! heap.insert(50);
//! heap.insert(50);
//! assert_eq!(heap.extract_min(), Ok(50));
//! assert_eq!(heap.extract_min(), Ok(50));
//! assert_eq!(heap.extract_min(), Ok(100));
//! assert!(heap.extract_min().is_err());
//! ```

use std::cmp::Ordering;

use crate::error::{Error, Result};

/// An ordering over `T` that is consulted anew for every comparison.
pub trait Comparator<T> {
    fn compare(&self, a:&T, b:&T) -> Ordering;
}

impl<T, F> Comparator<T> for F where F: Fn(&T, &T) -> Ordering {
    fn compare(&self, a:&T, b:&T) -> Ordering {
        self(a, b)
    }
}

/// Orders items by their [Ord] implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct NaturalOrder;

impl<T> Comparator<T> for NaturalOrder where T: Ord {
    fn compare(&self, a:&T, b:&T) -> Ordering {
        a.cmp(b)
    }
}

#[derive(Debug)]
struct Node<T> {
    // `None` once the node has been extracted and its slot awaits reuse.
    item: Option<T>,
    children: Vec<usize>
}

/// A min-priority multiset with $O(1)$ amortized [insert](FibonacciHeap::insert)
/// and $O(\log n)$ amortized [extract_min](FibonacciHeap::extract_min).
///
/// Nodes live in an arena and refer to their children by index. Inserting only
/// appends a new single-node tree to the root list; the root list is consolidated
/// after every extraction by linking trees of equal degree until all root degrees
/// are distinct.
#[derive(Debug)]
pub struct FibonacciHeap<T, C> {
    nodes: Vec<Node<T>>,
    vacant: Vec<usize>,
    roots: Vec<usize>,
    // Position of the minimum in `roots`, as of the last heap operation.
    min: Option<usize>,
    len: usize,
    comparator: C
}

impl<T, C> FibonacciHeap<T, C> where C: Comparator<T> {
    pub fn new(comparator:C) -> Self {
        FibonacciHeap {
            nodes: Vec::new(),
            vacant: Vec::new(),
            roots: Vec::new(),
            min: None,
            len: 0,
            comparator
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Gives mutable access to the comparator. Lowering the rank of an item that is
    /// already in the heap must be followed by inserting that item again, otherwise
    /// [peek_min](FibonacciHeap::peek_min) keeps reporting the old minimum until the
    /// next extraction.
    pub fn comparator_mut(&mut self) -> &mut C {
        &mut self.comparator
    }

    pub fn into_comparator(self) -> C {
        self.comparator
    }

    /// Inserts `item`. Items equal to ones already contained are kept as
    /// independent entries.
    pub fn insert(&mut self, item:T) {
        let node = Node { item: Some(item), children: Vec::new() };
        let index = match self.vacant.pop() {
            Some(index) => {
                self.nodes[index] = node;
                index
            },
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        };

        self.roots.push(index);
        self.len += 1;

        let pos = self.roots.len() - 1;
        self.min = match self.min {
            Some(m) if self.compare_nodes(self.roots[pos], self.roots[m]) != Ordering::Less => Some(m),
            _ => Some(pos)
        };
    }

    /// Returns the minimum as of the last heap operation without removing it.
    ///
    /// The answer agrees with [extract_min](FibonacciHeap::extract_min) as long as
    /// every lowered item has been inserted again since.
    pub fn peek_min(&self) -> Result<&T> {
        self.min
            .and_then(|pos| self.nodes[self.roots[pos]].item.as_ref())
            .ok_or(Error::EmptyQueue)
    }

    /// Removes and returns the minimum. The root list is re-evaluated against the
    /// comparator first, so changes made through [comparator_mut](FibonacciHeap::comparator_mut)
    /// since the last operation are honoured.
    pub fn extract_min(&mut self) -> Result<T> {
        let pos = self.min_position().ok_or(Error::EmptyQueue)?;
        let index = self.roots.swap_remove(pos);

        let node = &mut self.nodes[index];
        let item = node.item.take();
        let children = std::mem::take(&mut node.children);

        self.roots.extend(children);
        self.vacant.push(index);
        self.len -= 1;

        self.consolidate();
        item.ok_or(Error::EmptyQueue)
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.vacant.clear();
        self.roots.clear();
        self.min = None;
        self.len = 0;
    }

    fn compare_nodes(&self, a:usize, b:usize) -> Ordering {
        match (&self.nodes[a].item, &self.nodes[b].item) {
            (Some(x), Some(y)) => self.comparator.compare(x, y),
            _ => unreachable!("vacant heap node reachable from the root list")
        }
    }

    fn min_position(&self) -> Option<usize> {
        let mut best:Option<usize> = None;
        for pos in 0..self.roots.len() {
            best = match best {
                Some(b) if self.compare_nodes(self.roots[pos], self.roots[b]) != Ordering::Less => Some(b),
                _ => Some(pos)
            };
        }
        best
    }

    /// Makes the larger of the two roots a child of the smaller one and returns
    /// the new root.
    fn link(&mut self, x:usize, y:usize) -> usize {
        let (parent, child) = if self.compare_nodes(y, x) == Ordering::Less { (y, x) } else { (x, y) };
        self.nodes[parent].children.push(child);
        parent
    }

    fn consolidate(&mut self) {
        // Degrees are bounded by log_phi(n), so this table stays small.
        let mut by_degree:Vec<Option<usize>> = Vec::new();

        for mut root in std::mem::take(&mut self.roots) {
            loop {
                let degree = self.nodes[root].children.len();
                if by_degree.len() <= degree {
                    by_degree.resize(degree + 1, None);
                }
                match by_degree[degree].take() {
                    Some(other) => root = self.link(root, other),
                    None => {
                        by_degree[degree] = Some(root);
                        break
                    }
                }
            }
        }

        self.roots = by_degree.into_iter().flatten().collect();
        self.min = self.min_position();
    }

    #[cfg(test)]
    fn num_trees(&self) -> usize {
        self.roots.len()
    }
}

//  #######
//     #    ######  ####  #####  ####
//     #    #      #        #   #
//     #    #####   ####    #    ####
//     #    #           #   #        #
//     #    #      #    #   #   #    #
//     #    ######  ####    #    ####
