use std::collections::BTreeMap;
use std::ops::{Deref, DerefMut};

use super::TopologicalSort;
use crate::error::OrderResult;
use crate::graph::PrecedenceGraph;
use crate::linearize::Linearization;
use crate::merge::merge_entries;

/// A `BTreeMap` sorted by declared precedences instead of by key.
///
/// Unconstrained entries trail the result in ascending key order.
///
/// ```
/// use topo_container::SortMap;
///
/// let mut m = SortMap::new();
/// m.precede("b", "a");
/// m.insert("a", 1);
/// m.insert("b", 2);
/// m.insert("c", 3);
/// assert_eq!(m.sort(), vec![("b", 2), ("a", 1), ("c", 3)]);
/// ```
#[derive(Debug, Clone)]
pub struct SortMap<K, V> {
    map: BTreeMap<K, V>,
    graph: PrecedenceGraph<K>,
}

impl<K: Ord + Clone, V: Clone> SortMap<K, V> {
    pub fn new() -> Self {
        Self::with_graph(BTreeMap::new(), PrecedenceGraph::new())
    }

    pub fn with_graph(map: BTreeMap<K, V>, graph: PrecedenceGraph<K>) -> Self {
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

    pub fn inner(&self) -> &BTreeMap<K, V> {
        &self.map
    }

    pub fn inner_mut(&mut self) -> &mut BTreeMap<K, V> {
        &mut self.map
    }

    pub fn into_inner(self) -> BTreeMap<K, V> {
        self.map
    }

    pub fn into_parts(self) -> (BTreeMap<K, V>, PrecedenceGraph<K>) {
        (self.map, self.graph)
    }
}

impl<K: Ord + Clone, V: Clone> TopologicalSort for SortMap<K, V> {
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

impl<K, V> Default for SortMap<K, V> {
    fn default() -> Self {
        Self {
            map: BTreeMap::new(),
            graph: PrecedenceGraph::default(),
        }
    }
}

impl<K, V> Deref for SortMap<K, V> {
    type Target = BTreeMap<K, V>;

    fn deref(&self) -> &Self::Target {
        &self.map
    }
}

impl<K, V> DerefMut for SortMap<K, V> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.map
    }
}

impl<K, V> From<BTreeMap<K, V>> for SortMap<K, V> {
    fn from(map: BTreeMap<K, V>) -> Self {
        Self {
            map,
            graph: PrecedenceGraph::default(),
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for SortMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<BTreeMap<K, V>>())
    }
}
