//! Errors reported by the shortest-path engines.
//!
//! Vertices are rendered with their `Debug` representation so that [Error] does
//! not need to carry the vertex type around.

use std::fmt::Debug;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No path from `from` to `to` exists in the reachable subgraph. This is an
    /// expected outcome of a query, not a bug.
    #[error("no path from {from} to {to}")]
    PathNotFound { from: String, to: String },

    /// A cycle of negative total weight passes through `vertex`. Any distances
    /// computed up to this point are meaningless.
    #[error("negative cycle detected through vertex {vertex}")]
    NegativeCycle { vertex: String },

    /// The priority queue was asked for a minimum while empty.
    #[error("priority queue is empty")]
    EmptyQueue,

    /// A query named a vertex the graph does not contain.
    #[error("vertex {vertex} is not contained in the graph")]
    MissingVertex { vertex: String },
}

impl Error {
    pub fn path_not_found<V: Debug>(from: &V, to: &V) -> Self {
        Error::PathNotFound { from: format!("{from:?}"), to: format!("{to:?}") }
    }

    pub fn negative_cycle<V: Debug>(vertex: &V) -> Self {
        Error::NegativeCycle { vertex: format!("{vertex:?}") }
    }

    pub fn missing_vertex<V: Debug>(vertex: &V) -> Self {
        Error::MissingVertex { vertex: format!("{vertex:?}") }
    }

    /// Whether this error merely reports that the requested path does not exist.
    pub fn is_path_not_found(&self) -> bool {
        matches!(self, Error::PathNotFound { .. })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn messages() {
        let err = Error::path_not_found(&"a", &"b");
        assert_eq!(err.to_string(), "no path from \"a\" to \"b\"");
        assert!(err.is_path_not_found());

        let err = Error::negative_cycle(&3);
        assert_eq!(err.to_string(), "negative cycle detected through vertex 3");
        assert!(!err.is_path_not_found());

        assert_eq!(Error::missing_vertex(&7u32).to_string(), "vertex 7 is not contained in the graph");
    }
}
