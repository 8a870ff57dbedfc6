//! Error types for the opt-in checked orderings.
//!
//! The default sort paths are total and never produce these; they are only
//! returned by `checked_topological_sort` and `checked_sort`.

use thiserror::Error;

/// Result type for checked ordering operations over keys of type `K`
pub type OrderResult<T, K> = Result<T, OrderError<K>>;

/// Errors reported by the checked ordering operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum OrderError<K> {
    /// The declared precedences contain a cycle passing through `key`
    #[error("precedence cycle detected through key {key:?}")]
    Cycle {
        /// A key lying on the cycle
        key: K,
    },
}

impl<K> OrderError<K> {
    /// Creates a cycle error for the given key
    pub fn cycle(key: K) -> Self {
        Self::Cycle { key }
    }
}
