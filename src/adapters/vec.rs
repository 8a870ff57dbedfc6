use std::ops::{Deref, DerefMut};

use super::TopologicalSort;
use crate::error::OrderResult;
use crate::graph::PrecedenceGraph;
use crate::linearize::Linearization;
use crate::merge::merge_items;

/// A `Vec` whose elements double as graph keys.
///
/// Duplicates are allowed: every occurrence of a graph key is emitted together
/// at that key's position in the order. Graph keys that the vector does not
/// hold contribute nothing.
///
/// ```
/// use topo_container::SortVec;
///
/// let mut v = SortVec::from(vec![1, 2, 3, 2]);
/// v.precede(2, 1);
/// assert_eq!(v.sort(), vec![2, 2, 1, 3]);
/// assert_eq!(*v, vec![1, 2, 3, 2]);
/// ```
#[derive(Debug, Clone)]
pub struct SortVec<T> {
    items: Vec<T>,
    graph: PrecedenceGraph<T>,
}

impl<T: Ord + Clone> SortVec<T> {
    pub fn new() -> Self {
        Self::with_graph(Vec::new(), PrecedenceGraph::new())
    }

    pub fn with_graph(items: Vec<T>, graph: PrecedenceGraph<T>) -> Self {
        Self { items, graph }
    }

    pub fn precede(&mut self, v: T, w: T) {
        self.graph.precede(v, w);
    }

    pub fn sort(&self) -> Vec<T> {
        TopologicalSort::sort(self)
    }

    pub fn checked_sort(&self) -> OrderResult<Vec<T>, T> {
        TopologicalSort::checked_sort(self)
    }

    pub fn inner(&self) -> &Vec<T> {
        &self.items
    }

    pub fn inner_mut(&mut self) -> &mut Vec<T> {
        &mut self.items
    }

    pub fn into_inner(self) -> Vec<T> {
        self.items
    }

    pub fn into_parts(self) -> (Vec<T>, PrecedenceGraph<T>) {
        (self.items, self.graph)
    }
}

impl<T: Ord + Clone> TopologicalSort for SortVec<T> {
    type Key = T;
    type Output = Vec<T>;

    fn graph(&self) -> &PrecedenceGraph<T> {
        &self.graph
    }

    fn graph_mut(&mut self) -> &mut PrecedenceGraph<T> {
        &mut self.graph
    }

    fn merge(&self, order: Linearization<T>) -> Vec<T> {
        merge_items(order, &self.items)
    }
}

impl<T> Default for SortVec<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            graph: PrecedenceGraph::default(),
        }
    }
}

impl<T> Deref for SortVec<T> {
    type Target = Vec<T>;

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T> DerefMut for SortVec<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.items
    }
}

impl<T> From<Vec<T>> for SortVec<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items,
            graph: PrecedenceGraph::default(),
        }
    }
}

impl<T> FromIterator<T> for SortVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_does_not_reorder_in_place() {
        let mut v: SortVec<u32> = (0..5).collect();
        v.precede(4, 0);
        assert_eq!(v.sort(), vec![4, 0, 1, 2, 3]);
        assert_eq!(v.inner(), &vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_empty_vec_with_graph() {
        let mut v: SortVec<char> = SortVec::new();
        v.precede('a', 'b');
        assert!(v.sort().is_empty());
    }

    #[test]
    fn test_unconstrained_duplicates_grouped_at_first_occurrence() {
        let v: SortVec<char> = "xyxzy".chars().collect();
        assert_eq!(v.sort(), vec!['x', 'x', 'y', 'y', 'z']);
    }

    #[test]
    fn test_inherent_sort_shadows_slice_sort() {
        let mut v = SortVec::from(vec![3, 1, 2]);
        v.precede(3, 1);
        assert_eq!(v.sort(), vec![3, 1, 2]);
        assert_eq!(*v, vec![3, 1, 2]);
    }
}
