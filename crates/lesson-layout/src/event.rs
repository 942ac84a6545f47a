//! The time-bounded input record laid out by the engine.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

/// A single calendar entry (lesson, absence, holiday, placeholder) for one day.
///
/// The engine treats every category uniformly as a half-open interval
/// `[start, end)`. Callers guarantee `start < end` and a unique `id` per input
/// set; see [`crate::boundary`] for helpers that enforce this.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarEvent<K> {
    /// Opaque identity, unique within one input set. Also the final tie-break
    /// key of the canonical order.
    pub id: K,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl<K> CalendarEvent<K> {
    pub fn new(id: K, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { id, start, end }
    }

    /// Length of the event. Only used to break ties between equal starts.
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Strict overlap with `other`; see [`crate::overlap::overlaps`].
    pub fn overlaps<L>(&self, other: &CalendarEvent<L>) -> bool {
        crate::overlap::overlaps(self, other)
    }

    /// `true` when the interval is well formed (`start < end`).
    pub fn is_well_formed(&self) -> bool {
        self.start < self.end
    }
}
