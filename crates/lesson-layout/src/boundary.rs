//! Validation boundary in front of the layout engine.
//!
//! [`compute_layout`](crate::layout::compute_layout) assumes every interval is
//! well formed and every id is unique. Callers that cannot guarantee this pick
//! one of two policies:
//!
//! - [`validate`] / [`try_compute_layout`] reject the whole input on the first
//!   problem.
//! - [`sanitize`] drops offending events (first occurrence of an id wins) and
//!   reports what it dropped.

use std::collections::BTreeSet;
use std::fmt::Display;

use tracing::warn;

use crate::error::{LayoutError, Result};
use crate::event::CalendarEvent;
use crate::layout::{compute_layout, Layout};

/// Why [`sanitize`] dropped an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// `end <= start`.
    InvalidInterval,
    /// The id already appeared earlier in the input.
    DuplicateId,
}

impl Rejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rejection::InvalidInterval => "invalid_interval",
            Rejection::DuplicateId => "duplicate_id",
        }
    }
}

/// Result of [`sanitize`]: the events safe to lay out and the ones dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitized<K> {
    pub kept: Vec<CalendarEvent<K>>,
    pub rejected: Vec<(CalendarEvent<K>, Rejection)>,
}

/// Check that every interval is well formed and every id is unique.
///
/// # Errors
/// Returns `LayoutError::InvalidInterval` for the first event with
/// `end <= start`, or `LayoutError::DuplicateId` for the first repeated id.
pub fn validate<K>(events: &[CalendarEvent<K>]) -> Result<()>
where
    K: Ord + Display,
{
    let mut seen = BTreeSet::new();
    for event in events {
        if !event.is_well_formed() {
            return Err(invalid_interval(event));
        }
        if !seen.insert(&event.id) {
            return Err(LayoutError::DuplicateId(event.id.to_string()));
        }
    }
    Ok(())
}

/// Split `events` into well-formed, uniquely identified events and rejects.
///
/// Input order is preserved in both lists. Every rejection is logged.
pub fn sanitize<K, I>(events: I) -> Sanitized<K>
where
    K: Ord + Clone + Display,
    I: IntoIterator<Item = CalendarEvent<K>>,
{
    let mut seen = BTreeSet::new();
    let mut kept = Vec::new();
    let mut rejected = Vec::new();

    for event in events {
        let rejection = if !event.is_well_formed() {
            Some(Rejection::InvalidInterval)
        } else if seen.contains(&event.id) {
            Some(Rejection::DuplicateId)
        } else {
            None
        };

        match rejection {
            Some(reason) => {
                warn!(
                    id = %event.id,
                    start = %event.start,
                    end = %event.end,
                    reason = reason.as_str(),
                    "dropping event before layout"
                );
                rejected.push((event, reason));
            }
            None => {
                seen.insert(event.id.clone());
                kept.push(event);
            }
        }
    }

    Sanitized { kept, rejected }
}

/// [`validate`] the input, then [`compute_layout`] it.
///
/// # Errors
/// Propagates any error from [`validate`].
pub fn try_compute_layout<K>(events: &[CalendarEvent<K>]) -> Result<Layout<K>>
where
    K: Ord + Clone + Display,
{
    validate(events)?;
    Ok(compute_layout(events))
}

fn invalid_interval<K: Display>(event: &CalendarEvent<K>) -> LayoutError {
    LayoutError::InvalidInterval {
        id: event.id.to_string(),
        start: event.start.to_rfc3339(),
        end: event.end.to_rfc3339(),
    }
}
