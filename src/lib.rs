//! Shortest paths over graphs whose edge weights live in an arbitrary ordered
//! monoid.
//!
//! The weights of a query are described by a [WeightAlgebra](weight::WeightAlgebra)
//! which knows how to add them up and how to compare them, so the same engines
//! run on `f64`, bounded integers or arbitrary precision numbers. The engines
//! themselves live in [shortestpath] and are available on every graph through
//! [ShortestPathAlgorithms](shortestpath::ShortestPathAlgorithms).

#![allow(non_snake_case)]

pub mod datastructures;
pub mod editdigraph;
pub mod editgraph;
pub mod error;
pub mod graph;
pub mod path;
pub mod shortestpath;
pub mod weight;

pub use error::{Error, Result};
