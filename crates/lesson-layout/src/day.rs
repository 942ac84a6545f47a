//! Bucketing events per calendar day.
//!
//! The engine lays out exactly one day at a time. Days are UTC calendar
//! dates of the event start. An event ending exactly at the next midnight
//! still belongs to its start day; anything running past that is rejected,
//! because events are never split across days.

use std::collections::BTreeMap;
use std::fmt::Display;

use chrono::{NaiveDate, NaiveTime};

use crate::boundary::try_compute_layout;
use crate::error::{LayoutError, Result};
use crate::event::CalendarEvent;
use crate::layout::Layout;

/// Group events by the UTC date of their start, preserving input order
/// within each day.
///
/// # Errors
/// Returns `LayoutError::SpansMultipleDays` for the first event ending after
/// the midnight that follows its start.
pub fn partition_by_day<K, I>(events: I) -> Result<BTreeMap<NaiveDate, Vec<CalendarEvent<K>>>>
where
    K: Display,
    I: IntoIterator<Item = CalendarEvent<K>>,
{
    let mut days: BTreeMap<NaiveDate, Vec<CalendarEvent<K>>> = BTreeMap::new();

    for event in events {
        let day = event.start.date_naive();
        let next_midnight = day
            .succ_opt()
            .map(|next| next.and_time(NaiveTime::MIN).and_utc());

        if let Some(limit) = next_midnight {
            if event.end > limit {
                return Err(LayoutError::SpansMultipleDays {
                    id: event.id.to_string(),
                    start: event.start.to_rfc3339(),
                    end: event.end.to_rfc3339(),
                });
            }
        }

        days.entry(day).or_default().push(event);
    }

    Ok(days)
}

/// Partition `events` by day and lay out each day independently.
///
/// Ids only need to be unique within a day.
///
/// # Errors
/// Propagates errors from [`partition_by_day`] and from validating each day.
pub fn layout_by_day<K, I>(events: I) -> Result<BTreeMap<NaiveDate, Layout<K>>>
where
    K: Ord + Clone + Display,
    I: IntoIterator<Item = CalendarEvent<K>>,
{
    partition_by_day(events)?
        .into_iter()
        .map(|(day, events)| try_compute_layout(&events).map(|layout| (day, layout)))
        .collect()
}
