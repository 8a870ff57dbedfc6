//! Container adapters.
//!
//! Each adapter owns one container and one [`PrecedenceGraph`]. The container
//! is reachable through `Deref`/`DerefMut` and is never reordered; `sort`
//! returns a fresh sequence ordered by the graph.
//!
//! | adapter         | container            | `sort` output  |
//! |-----------------|----------------------|----------------|
//! | [`SortMap`]     | `BTreeMap<K, V>`     | `Vec<(K, V)>`  |
//! | [`SortOrderMap`]| `OrderMap<K, V>`     | `Vec<(K, V)>`  |
//! | [`SortVec`]     | `Vec<T>`             | `Vec<T>`       |
//! | [`SortArray`]   | `[T; N]`             | `[T; N]`       |

mod array;
mod map;
mod order_map;
mod vec;

pub use array::SortArray;
pub use map::SortMap;
pub use order_map::SortOrderMap;
pub use vec::SortVec;

use crate::error::OrderResult;
use crate::graph::PrecedenceGraph;
use crate::linearize::Linearization;

/// A container that can be ordered by an embedded precedence graph.
///
/// Implementors only provide access to the graph and the merge of a
/// linearization with their contents; sorting is derived from those.
pub trait TopologicalSort {
    type Key: Ord + Clone;
    type Output;

    fn graph(&self) -> &PrecedenceGraph<Self::Key>;

    fn graph_mut(&mut self) -> &mut PrecedenceGraph<Self::Key>;

    /// Combines `order` with the current container contents.
    fn merge(&self, order: Linearization<Self::Key>) -> Self::Output;

    /// Declares that `v` must come before `w`.
    fn precede(&mut self, v: Self::Key, w: Self::Key) {
        self.graph_mut().precede(v, w);
    }

    /// Graph keys first in topological order, then unconstrained elements in
    /// container order. Neither the graph nor the container is modified.
    fn sort(&self) -> Self::Output {
        self.merge(self.graph().topological_sort())
    }

    /// Like [`sort`](Self::sort), but rejects cyclic precedences.
    fn checked_sort(&self) -> OrderResult<Self::Output, Self::Key> {
        let order = self.graph().checked_topological_sort()?;
        Ok(self.merge(order))
    }
}
