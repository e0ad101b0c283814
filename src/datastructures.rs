//! The building blocks shared by the shortest-path engines: a priority queue with
//! a live comparator, a table of tentative distances which doubles as that
//! comparator, and predecessor chains from which paths are rebuilt.

mod distances;
mod fibonacci_heap;
mod predecessors;

pub use distances::*;
pub use fibonacci_heap::*;
pub use predecessors::*;
