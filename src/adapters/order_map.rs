use std::hash::Hash;
use std::ops::{Deref, DerefMut};

use ordermap::OrderMap;

use super::TopologicalSort;
use crate::error::OrderResult;
use crate::graph::PrecedenceGraph;
use crate::linearize::Linearization;
use crate::merge::merge_entries;

/// A hash map sorted by declared precedences.
///
/// Backed by an insertion-ordered `OrderMap`, so unconstrained entries trail
/// the result in the order they were first inserted.
#[derive(Debug, Clone)]
pub struct SortOrderMap<K, V> {
    map: OrderMap<K, V>,
    graph: PrecedenceGraph<K>,
}

impl<K: Hash + Ord + Clone, V: Clone> SortOrderMap<K, V> {
    pub fn new() -> Self {
        Self::with_graph(OrderMap::new(), PrecedenceGraph::new())
    }

    pub fn with_graph(map: OrderMap<K, V>, graph: PrecedenceGraph<K>) -> Self {
        Self { map, graph }
    }

    pub fn precede(&mut self, v: K, w: K) {
        self.graph.precede(v, w);
    }

    pub fn sort(&self) -> Vec<(K, V)> {
        TopologicalSort::sort(self)
    }

    pub fn checked_sort(&self) -> OrderResult<Vec<(K, V)>, K> {
        TopologicalSort::checked_sort(self)
    }

    pub fn inner(&self) -> &OrderMap<K, V> {
        &self.map
    }

    pub fn inner_mut(&mut self) -> &mut OrderMap<K, V> {
        &mut self.map
    }

    pub fn into_inner(self) -> OrderMap<K, V> {
        self.map
    }

    pub fn into_parts(self) -> (OrderMap<K, V>, PrecedenceGraph<K>) {
        (self.map, self.graph)
    }
}

impl<K: Hash + Ord + Clone, V: Clone> TopologicalSort for SortOrderMap<K, V> {
    type Key = K;
    type Output = Vec<(K, V)>;

    fn graph(&self) -> &PrecedenceGraph<K> {
        &self.graph
    }

    fn graph_mut(&mut self) -> &mut PrecedenceGraph<K> {
        &mut self.graph
    }

    fn merge(&self, order: Linearization<K>) -> Vec<(K, V)> {
        merge_entries(order, &self.map, |k| self.map.get(k))
    }
}

impl<K, V> Default for SortOrderMap<K, V> {
    fn default() -> Self {
        Self {
            map: OrderMap::default(),
            graph: PrecedenceGraph::default(),
        }
    }
}

impl<K, V> Deref for SortOrderMap<K, V> {
    type Target = OrderMap<K, V>;

    fn deref(&self) -> &Self::Target {
        &self.map
    }
}

impl<K, V> DerefMut for SortOrderMap<K, V> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.map
    }
}

impl<K, V> From<OrderMap<K, V>> for SortOrderMap<K, V> {
    fn from(map: OrderMap<K, V>) -> Self {
        Self {
            map,
            graph: PrecedenceGraph::default(),
        }
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for SortOrderMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<OrderMap<K, V>>())
    }
}
