//! Merging a [`Linearization`] with the contents of a container.
//!
//! Both policies run in two phases: the stack is drained first, placing every
//! graph key that the container holds; then the container is swept in its
//! own order to append whatever the stack never claimed. The output always
//! holds exactly as many elements as the container.

use std::collections::{BTreeMap, BTreeSet};
use std::iter;

use tracing::debug;

use crate::linearize::Linearization;

/// Merge for containers with unique keys mapped to values.
///
/// `lookup` resolves a popped key to its value; `entries` yields the
/// container in native order for the sweep.
pub(crate) fn merge_entries<'a, K, V, I, F>(
    mut order: Linearization<K>,
    entries: I,
    lookup: F,
) -> Vec<(K, V)>
where
    K: Ord + Clone + 'a,
    V: Clone + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
    F: Fn(&K) -> Option<&'a V>,
{
    let mut result = Vec::new();
    let mut copied: BTreeSet<K> = BTreeSet::new();

    order.drain_with(|key| {
        if let Some(value) = lookup(&key) {
            result.push((key.clone(), value.clone()));
            copied.insert(key);
        }
    });
    let ordered = result.len();

    for (key, value) in entries {
        if !copied.contains(key) {
            result.push((key.clone(), value.clone()));
        }
    }

    debug!(
        ordered,
        unconstrained = result.len() - ordered,
        "merged entries"
    );
    result
}

/// Merge for sequences that may hold the same key several times.
///
/// Every occurrence of a key is emitted at the point the key is first
/// claimed, so duplicates always end up adjacent.
pub(crate) fn merge_items<K: Ord + Clone>(mut order: Linearization<K>, items: &[K]) -> Vec<K> {
    // Removing a key from `remaining` marks it copied.
    let mut remaining: BTreeMap<&K, usize> = BTreeMap::new();
    for item in items {
        *remaining.entry(item).or_insert(0) += 1;
    }

    let mut result = Vec::with_capacity(items.len());
    order.drain_with(|key| {
        if let Some(n) = remaining.remove(&key) {
            result.extend(iter::repeat(key).take(n));
        }
    });
    let ordered = result.len();

    for item in items {
        if let Some(n) = remaining.remove(item) {
            result.extend(iter::repeat(item).take(n).cloned());
        }
    }

    debug_assert_eq!(result.len(), items.len());
    debug!(
        ordered,
        unconstrained = result.len() - ordered,
        "merged items"
    );
    result
}
