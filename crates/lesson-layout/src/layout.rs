//! Column selection and cluster-wide width propagation.
//!
//! Events are placed one at a time in canonical order. Each placement:
//!
//! 1. evicts active events that ended at or before the new start,
//! 2. finds the transitive overlap group of the new event,
//! 3. picks the lowest column that is neither held by an active overlapping
//!    event nor claimed by another member of the group,
//! 4. widens `total_columns` of every already placed group member.
//!
//! Step 4 only ever increases values, so an event placed early ends up with
//! the width of the largest group computed for any later member.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::event::CalendarEvent;
use crate::ordering::canonical_order;
use crate::overlap::{overlaps, transitive_group};

/// Where one event sits within its overlap cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayoutSlot {
    /// 0-based column index.
    pub column: usize,
    /// Columns needed by the whole cluster. Always `> column`.
    pub total_columns: usize,
}

impl LayoutSlot {
    /// Share of the track width this event occupies (`1 / total_columns`).
    pub fn width_fraction(&self) -> f64 {
        1.0 / self.total_columns as f64
    }

    /// Left offset as a share of the track width (`column / total_columns`).
    pub fn left_fraction(&self) -> f64 {
        self.column as f64 / self.total_columns as f64
    }
}

/// Layout keyed by event id. A `BTreeMap` so equal layouts compare equal and
/// iterate identically.
pub type Layout<K> = BTreeMap<K, LayoutSlot>;

/// A placed event that may still collide with events starting later.
#[derive(Debug, Clone, Copy)]
pub struct ActiveColumn<'a, K> {
    pub event: &'a CalendarEvent<K>,
    pub column: usize,
}

/// Drop every active entry whose event ended at or before `start`.
///
/// This is what lets back-to-back lessons reuse column 0.
pub fn evict_ended<K>(active: &mut Vec<ActiveColumn<'_, K>>, start: DateTime<Utc>) {
    active.retain(|entry| entry.event.end > start);
}

/// Compute the column layout for the events of a single day.
///
/// Input must be well formed (`start < end`, unique ids); use
/// [`crate::boundary::try_compute_layout`] when that is not guaranteed.
/// The result is identical for every permutation of the same input.
pub fn compute_layout<K>(events: &[CalendarEvent<K>]) -> Layout<K>
where
    K: Ord + Clone,
{
    let ordered = canonical_order(events);
    let mut layout = Layout::new();
    let mut active: Vec<ActiveColumn<'_, K>> = Vec::new();

    for (index, event) in ordered.iter().copied().enumerate() {
        evict_ended(&mut active, event.start);

        let group = transitive_group(&ordered, index);
        let claimed: BTreeSet<usize> = group
            .iter()
            .filter(|&&member| member != index)
            .filter_map(|&member| layout.get(&ordered[member].id))
            .map(|slot: &LayoutSlot| slot.column)
            .collect();

        let column = select_column(&active, event, &claimed);
        let total_columns = claimed.len() + 1;
        layout.insert(
            event.id.clone(),
            LayoutSlot {
                column,
                total_columns,
            },
        );
        active.push(ActiveColumn { event, column });

        widen_group(&mut layout, &ordered, &group, total_columns);
    }

    debug!(
        events = events.len(),
        max_columns = layout.values().map(|s| s.total_columns).max().unwrap_or(0),
        "computed day layout"
    );

    layout
}

/// Lowest column free of both active overlapping events and `claimed`.
fn select_column<K>(
    active: &[ActiveColumn<'_, K>],
    event: &CalendarEvent<K>,
    claimed: &BTreeSet<usize>,
) -> usize {
    let occupied: BTreeSet<usize> = active
        .iter()
        .filter(|entry| overlaps(entry.event, event))
        .map(|entry| entry.column)
        .collect();

    let mut column = 0;
    while occupied.contains(&column) || claimed.contains(&column) {
        column += 1;
    }
    column
}

/// Raise `total_columns` of every placed group member to at least `total_columns`.
fn widen_group<K: Ord>(
    layout: &mut Layout<K>,
    ordered: &[&CalendarEvent<K>],
    group: &BTreeSet<usize>,
    total_columns: usize,
) {
    for &member in group {
        if let Some(slot) = layout.get_mut(&ordered[member].id) {
            slot.total_columns = slot.total_columns.max(total_columns);
        }
    }
}
