//! Canonical processing order for the layout pass.

use std::cmp::Ordering;

use crate::event::CalendarEvent;

/// Compare two events by start ascending, then duration descending, then id.
///
/// The longest of several simultaneous events is the visual anchor and claims
/// the lowest column. The id key makes fully tied events (same start, same
/// duration) sort identically whatever order the caller supplied them in.
pub fn canonical_cmp<K: Ord>(a: &CalendarEvent<K>, b: &CalendarEvent<K>) -> Ordering {
    a.start
        .cmp(&b.start)
        .then_with(|| b.duration().cmp(&a.duration()))
        .then_with(|| a.id.cmp(&b.id))
}

/// Borrow `events` in canonical order.
pub fn canonical_order<K: Ord>(events: &[CalendarEvent<K>]) -> Vec<&CalendarEvent<K>> {
    let mut ordered: Vec<&CalendarEvent<K>> = events.iter().collect();
    ordered.sort_by(|a, b| canonical_cmp(a, b));
    ordered
}
