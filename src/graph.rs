use std::collections::{BTreeMap, BTreeSet};

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{OrderError, OrderResult};
use crate::linearize::{linearize, Linearization};

/// Precedence constraints between keys.
///
/// `precede(v, w)` records that `w` must not appear before `v`. The graph is
/// only a constraint set: declaring an edge never inserts anything into a
/// container, and keys may appear here without ever being stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "K: Ord + Deserialize<'de>"))]
pub struct PrecedenceGraph<K> {
    /// Successor lists in declaration order, iterated by ascending key
    edges: BTreeMap<K, Vec<K>>,
}

impl<K> Default for PrecedenceGraph<K> {
    fn default() -> Self {
        Self { edges: BTreeMap::new() }
    }
}

impl<K: Ord + Clone> PrecedenceGraph<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares that `v` must come before `w`.
    ///
    /// Repeated and self edges are kept as declared.
    pub fn precede(&mut self, v: K, w: K) {
        let succ = self.edges.entry(v).or_default();
        succ.push(w);
        trace!(successors = succ.len(), "declared precedence edge");
    }

    pub fn precede_all<I: IntoIterator<Item = (K, K)>>(&mut self, edges: I) {
        for (v, w) in edges {
            self.precede(v, w);
        }
    }

    /// Successors of `key` in declaration order; empty when none were declared.
    pub fn successors(&self, key: &K) -> &[K] {
        self.edges.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Keys holding a successor list, in graph iteration order.
    pub fn sources(&self) -> impl Iterator<Item = &K> {
        self.edges.keys()
    }

    /// Every declared edge as `(before, after)`.
    pub fn edges(&self) -> impl Iterator<Item = (&K, &K)> {
        self.edges
            .iter()
            .flat_map(|(v, ws)| ws.iter().map(move |w| (v, w)))
    }

    /// Keys appearing on either side of an edge, ascending.
    pub fn vertices(&self) -> BTreeSet<&K> {
        let mut out: BTreeSet<&K> = self.edges.keys().collect();
        out.extend(self.edges.values().flatten());
        out
    }

    pub fn contains_vertex(&self, key: &K) -> bool {
        self.edges.contains_key(key) || self.edges.values().any(|ws| ws.contains(key))
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Number of declared edges, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Linearizes the graph into a stack whose pop order respects every edge.
    ///
    /// Cycles are not reported: the traversal still terminates but the
    /// resulting order may break edges on the cycle. Use
    /// [`checked_topological_sort`](Self::checked_topological_sort) to reject
    /// cyclic input instead.
    pub fn topological_sort(&self) -> Linearization<K> {
        linearize(self)
    }

    /// Like [`topological_sort`](Self::topological_sort), but fails when the
    /// declared precedences contain a cycle.
    pub fn checked_topological_sort(&self) -> OrderResult<Linearization<K>, K> {
        match self.find_cycle() {
            Some(key) => Err(OrderError::cycle(key)),
            None => Ok(self.topological_sort()),
        }
    }

    /// Returns a key lying on a cycle, if any. Self edges count as cycles.
    pub fn find_cycle(&self) -> Option<K> {
        if let Some((v, _)) = self.edges().find(|(v, w)| v == w) {
            return Some(v.clone());
        }
        let g = self.to_digraph();
        match toposort(&g, None) {
            Ok(_) => None,
            Err(cycle) => Some(g[cycle.node_id()].clone()),
        }
    }

    /// Builds a petgraph `DiGraph` with one node per vertex and one edge per
    /// declared edge, duplicates included. Node weights are the keys.
    pub fn to_digraph(&self) -> DiGraph<K, ()> {
        let mut g: DiGraph<K, ()> = DiGraph::new();
        let mut nodes: BTreeMap<&K, NodeIndex> = BTreeMap::new();
        for key in self.vertices() {
            nodes.insert(key, g.add_node(key.clone()));
        }
        for (v, w) in self.edges() {
            g.add_edge(nodes[v], nodes[w], ());
        }
        g
    }
}

impl<K: Ord + Clone> Extend<(K, K)> for PrecedenceGraph<K> {
    fn extend<I: IntoIterator<Item = (K, K)>>(&mut self, iter: I) {
        self.precede_all(iter);
    }
}

impl<K: Ord + Clone> FromIterator<(K, K)> for PrecedenceGraph<K> {
    fn from_iter<I: IntoIterator<Item = (K, K)>>(iter: I) -> Self {
        let mut g = Self::new();
        g.precede_all(iter);
        g
    }
}
