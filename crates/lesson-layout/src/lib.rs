//! # lesson-layout
//!
//! Deterministic column layout for concurrently scheduled calendar events.
//!
//! Given the events of one calendar day, the engine assigns every event a
//! 0-based column and the number of columns its whole overlap cluster needs,
//! so a renderer can place overlapping lessons side by side. Events that only
//! touch at a boundary (one ends exactly when the next starts) do not overlap
//! and can reuse the same column.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use lesson_layout::{compute_layout, CalendarEvent};
//!
//! let at = |h, m| Utc.with_ymd_and_hms(2026, 3, 16, h, m, 0).unwrap();
//! let events = vec![
//!     CalendarEvent::new("piano", at(9, 0), at(10, 0)),
//!     CalendarEvent::new("violin", at(9, 30), at(10, 30)),
//! ];
//!
//! let layout = compute_layout(&events);
//! assert_eq!(layout["piano"].column, 0);
//! assert_eq!(layout["violin"].column, 1);
//! assert_eq!(layout["violin"].total_columns, 2);
//! ```
//!
//! ## Modules
//!
//! - [`event`] — `CalendarEvent`, the time-bounded input record
//! - [`overlap`] — Strict overlap predicate, transitive groups, clusters
//! - [`ordering`] — Canonical processing order (start, longest first, id)
//! - [`layout`] — Column selection and cluster-wide width propagation
//! - [`boundary`] — Validation and sanitizing of caller-supplied events
//! - [`day`] — Bucketing events per calendar day
//! - [`error`] — Error types

pub mod boundary;
pub mod day;
pub mod error;
pub mod event;
pub mod layout;
pub mod ordering;
pub mod overlap;

pub use boundary::{sanitize, try_compute_layout, validate, Rejection, Sanitized};
pub use day::{layout_by_day, partition_by_day};
pub use error::LayoutError;
pub use event::CalendarEvent;
pub use layout::{compute_layout, Layout, LayoutSlot};
pub use ordering::canonical_order;
pub use overlap::{overlap_clusters, overlaps};
