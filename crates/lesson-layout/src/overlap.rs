//! Strict overlap between events and the transitive clusters it induces.
//!
//! Two events overlap when `a.start < b.end && b.start < a.end`. Adjacent
//! events (one ends exactly when another starts) do NOT overlap.
//!
//! Clusters are the connected components of the implicit overlap graph: a
//! chain `A <-> B <-> C` puts `A` and `C` in one cluster even when `A` and `C`
//! never overlap directly.

use std::collections::{BTreeSet, VecDeque};

use crate::event::CalendarEvent;
use crate::ordering::canonical_order;

/// Strict overlap predicate.
///
/// Touching at a boundary (`a.end == b.start`) is not an overlap, so two
/// back-to-back lessons can share a column.
pub fn overlaps<K, L>(a: &CalendarEvent<K>, b: &CalendarEvent<L>) -> bool {
    a.start < b.end && b.start < a.end
}

/// Every index of `events` reachable from `seed` through a chain of pairwise
/// overlaps, `seed` included.
///
/// Breadth-first search over the candidate set. A day holds tens of events,
/// so the quadratic neighbour scan is fine.
pub fn transitive_group<K>(events: &[&CalendarEvent<K>], seed: usize) -> BTreeSet<usize> {
    let mut group = BTreeSet::from([seed]);
    let mut queue = VecDeque::from([seed]);

    while let Some(current) = queue.pop_front() {
        for (candidate, event) in events.iter().enumerate() {
            if !group.contains(&candidate) && overlaps(events[current], event) {
                group.insert(candidate);
                queue.push_back(candidate);
            }
        }
    }

    group
}

/// Partition `events` into transitive overlap clusters.
///
/// Members of each cluster are listed in canonical order, and clusters are
/// listed by their first member, so the result does not depend on the order
/// events were supplied in.
pub fn overlap_clusters<K>(events: &[CalendarEvent<K>]) -> Vec<Vec<K>>
where
    K: Ord + Clone,
{
    let ordered = canonical_order(events);
    let mut assigned = vec![false; ordered.len()];
    let mut clusters = Vec::new();

    for seed in 0..ordered.len() {
        if assigned[seed] {
            continue;
        }
        let group = transitive_group(&ordered, seed);
        for &member in &group {
            assigned[member] = true;
        }
        clusters.push(group.into_iter().map(|i| ordered[i].id.clone()).collect());
    }

    clusters
}
