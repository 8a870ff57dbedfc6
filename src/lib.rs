//! # topo_container
//!
//! Containers ordered by declared precedences.
//!
//! A [`PrecedenceGraph`] records "v before w" constraints separately from any
//! container. Linearizing it yields a topological order, and the adapters in
//! [`adapters`] merge that order with their contents: graph keys come first in
//! topological order (all copies of a key together), followed by everything
//! the graph never mentions in the container's own order.
//!
//! ```
//! use topo_container::SortVec;
//!
//! let mut v: SortVec<&str> = ["A", "B", "C", "A"].into_iter().collect();
//! v.precede("C", "A");
//! assert_eq!(v.sort(), vec!["C", "A", "A", "B"]);
//! ```
pub mod adapters;
mod error;
mod graph;
mod linearize;
mod merge;

pub use adapters::{SortArray, SortMap, SortOrderMap, SortVec, TopologicalSort};
pub use error::{OrderError, OrderResult};
pub use graph::PrecedenceGraph;
pub use linearize::Linearization;
