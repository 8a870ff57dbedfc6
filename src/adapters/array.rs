use std::ops::{Deref, DerefMut};

use super::TopologicalSort;
use crate::error::OrderResult;
use crate::graph::PrecedenceGraph;
use crate::linearize::Linearization;
use crate::merge::merge_items;

/// A fixed-size array sorted by declared precedences.
///
/// Same merge as [`SortVec`](super::SortVec); the result has the array's own
/// length `N`, so the size match is carried by the type.
#[derive(Debug, Clone)]
pub struct SortArray<T, const N: usize> {
    items: [T; N],
    graph: PrecedenceGraph<T>,
}

impl<T: Ord + Clone, const N: usize> SortArray<T, N> {
    pub fn new(items: [T; N]) -> Self {
        Self::with_graph(items, PrecedenceGraph::new())
    }

    pub fn with_graph(items: [T; N], graph: PrecedenceGraph<T>) -> Self {
        Self { items, graph }
    }

    pub fn precede(&mut self, v: T, w: T) {
        self.graph.precede(v, w);
    }

    pub fn sort(&self) -> [T; N] {
        TopologicalSort::sort(self)
    }

    pub fn checked_sort(&self) -> OrderResult<[T; N], T> {
        TopologicalSort::checked_sort(self)
    }

    pub fn inner(&self) -> &[T; N] {
        &self.items
    }

    pub fn inner_mut(&mut self) -> &mut [T; N] {
        &mut self.items
    }

    pub fn into_inner(self) -> [T; N] {
        self.items
    }

    pub fn into_parts(self) -> ([T; N], PrecedenceGraph<T>) {
        (self.items, self.graph)
    }
}

impl<T: Ord + Clone, const N: usize> TopologicalSort for SortArray<T, N> {
    type Key = T;
    type Output = [T; N];

    fn graph(&self) -> &PrecedenceGraph<T> {
        &self.graph
    }

    fn graph_mut(&mut self) -> &mut PrecedenceGraph<T> {
        &mut self.graph
    }

    fn merge(&self, order: Linearization<T>) -> [T; N] {
        let merged = merge_items(order, &self.items);
        debug_assert_eq!(merged.len(), N);
        // Each slot is overwritten once; zip stops at N.
        let mut out = self.items.clone();
        for (slot, item) in out.iter_mut().zip(merged) {
            *slot = item;
        }
        out
    }
}

impl<T, const N: usize> Deref for SortArray<T, N> {
    type Target = [T; N];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T, const N: usize> DerefMut for SortArray<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.items
    }
}

impl<T, const N: usize> From<[T; N]> for SortArray<T, N> {
    fn from(items: [T; N]) -> Self {
        Self {
            items,
            graph: PrecedenceGraph::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_keeps_length_and_contents() {
        let mut a = SortArray::new([5, 4, 3, 2, 1]);
        a.precede(1, 5);
        a.precede(2, 4);
        let out = a.sort();
        assert_eq!(out, [2, 4, 1, 5, 3]);
        assert_eq!(*a, [5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_array_duplicates() {
        let mut a = SortArray::from(['b', 'a', 'b', 'c', 'a']);
        a.precede('c', 'b');
        assert_eq!(a.sort(), ['c', 'b', 'b', 'a', 'a']);
    }

    #[test]
    fn test_empty_array() {
        let mut a: SortArray<u8, 0> = SortArray::new([]);
        a.precede(1, 2);
        assert!(a.sort().is_empty());
    }
}
