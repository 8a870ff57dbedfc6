use std::collections::BTreeSet;
use std::iter::Rev;

use tracing::debug;

use crate::graph::PrecedenceGraph;

/// Result of linearizing a [`PrecedenceGraph`].
///
/// A LIFO stack: the top is the first key of the topological order, so
/// popping until empty yields every vertex with each key ahead of all keys
/// that must follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Linearization<K> {
    /// Post-order of the traversal; the last element is the top
    stack: Vec<K>,
}

impl<K> Linearization<K> {
    pub fn pop(&mut self) -> Option<K> {
        self.stack.pop()
    }

    pub fn peek(&self) -> Option<&K> {
        self.stack.last()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Iterates in pop order without consuming the stack.
    pub fn iter(&self) -> Rev<std::slice::Iter<'_, K>> {
        self.stack.iter().rev()
    }

    /// Keys in pop order.
    pub fn into_vec(mut self) -> Vec<K> {
        self.stack.reverse();
        self.stack
    }

    /// Pops every key, handing each to `f` in order.
    pub fn drain_with<F: FnMut(K)>(&mut self, mut f: F) {
        while let Some(key) = self.stack.pop() {
            f(key);
        }
    }
}

impl<K> IntoIterator for Linearization<K> {
    type Item = K;
    type IntoIter = Rev<std::vec::IntoIter<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.stack.into_iter().rev()
    }
}

impl<'a, K> IntoIterator for &'a Linearization<K> {
    type Item = &'a K;
    type IntoIter = Rev<std::slice::Iter<'a, K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Depth-first post-order over the graph.
///
/// Roots are the keys holding successor lists, in graph iteration order.
/// A key is marked visited before its successors are explored, so cycles and
/// self edges terminate. Each frame is `(key, index of next successor)`; the
/// key is pushed to the output once all its successors are exhausted, which
/// is exactly the recursive post-order without using the call stack.
pub(crate) fn linearize<K: Ord + Clone>(graph: &PrecedenceGraph<K>) -> Linearization<K> {
    let mut visited: BTreeSet<&K> = BTreeSet::new();
    let mut stack: Vec<K> = Vec::new();
    let mut frames: Vec<(&K, usize)> = Vec::new();

    for root in graph.sources() {
        if !visited.insert(root) {
            continue;
        }
        frames.push((root, 0));

        while let Some(frame) = frames.last_mut() {
            let key: &K = frame.0;
            match graph.successors(key).get(frame.1) {
                Some(child) => {
                    frame.1 += 1;
                    if visited.insert(child) {
                        frames.push((child, 0));
                    }
                }
                None => {
                    stack.push(key.clone());
                    frames.pop();
                }
            }
        }
    }

    debug!(
        vertices = stack.len(),
        edges = graph.edge_count(),
        "linearized precedence graph"
    );
    Linearization { stack }
}
