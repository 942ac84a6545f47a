//! WASM bindings for lesson-layout.
//!
//! Exposes the day layout engine and overlap clustering to the calendar front
//! end via `wasm-bindgen`. All complex types are passed as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p lesson-layout-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir web/pkg/ \
//!   target/wasm32-unknown-unknown/release/lesson_layout_wasm.wasm
//! ```

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use lesson_layout::{CalendarEvent, LayoutSlot};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// Input format for events passed from JavaScript.
#[derive(Deserialize)]
struct EventInput {
    id: String,
    start: String,
    end: String,
}

/// Layout entry as seen by the renderer, with the horizontal placement
/// already expressed as fractions of the day track.
#[derive(Serialize)]
struct SlotDto {
    column: usize,
    total_columns: usize,
    left: f64,
    width: f64,
}

impl From<&LayoutSlot> for SlotDto {
    fn from(slot: &LayoutSlot) -> Self {
        Self {
            column: slot.column,
            total_columns: slot.total_columns,
            left: slot.left_fraction(),
            width: slot.width_fraction(),
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse an ISO 8601 datetime string into `DateTime<Utc>`.
///
/// Accepts both RFC 3339 (with timezone offset, e.g., "2026-03-16T14:00:00+01:00")
/// and naive local time (e.g., "2026-03-16T14:00:00"), which is interpreted as UTC.
fn parse_datetime(s: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|ndt| ndt.and_utc())
        .map_err(|e| format!("Invalid datetime '{}': {}", s, e))
}

/// Convert a JSON array of `{id, start, end}` objects into events.
fn parse_events_json(json: &str) -> Result<Vec<CalendarEvent<String>>, String> {
    let inputs: Vec<EventInput> =
        serde_json::from_str(json).map_err(|e| format!("Invalid events JSON: {}", e))?;

    inputs
        .into_iter()
        .map(|input| {
            let start = parse_datetime(&input.start)?;
            let end = parse_datetime(&input.end)?;
            Ok(CalendarEvent::new(input.id, start, end))
        })
        .collect()
}

fn layout_json(events_json: &str) -> Result<String, String> {
    let events = parse_events_json(events_json)?;
    let layout = lesson_layout::try_compute_layout(&events).map_err(|e| e.to_string())?;

    let dtos: BTreeMap<&str, SlotDto> = layout
        .iter()
        .map(|(id, slot)| (id.as_str(), SlotDto::from(slot)))
        .collect();

    serde_json::to_string(&dtos).map_err(|e| format!("Serialization error: {}", e))
}

fn clusters_json(events_json: &str) -> Result<String, String> {
    let events = parse_events_json(events_json)?;
    lesson_layout::validate(&events).map_err(|e| e.to_string())?;

    serde_json::to_string(&lesson_layout::overlap_clusters(&events))
        .map_err(|e| format!("Serialization error: {}", e))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Compute the column layout for one day of events.
///
/// `events_json` must be a JSON array of `{id, start, end}` objects with ISO
/// 8601 datetime strings. Returns a JSON object keyed by id, each value holding
/// `column`, `total_columns`, `left` and `width` (fractions of the track).
#[wasm_bindgen(js_name = "computeLayout")]
pub fn compute_layout(events_json: &str) -> Result<String, JsValue> {
    layout_json(events_json).map_err(|e| JsValue::from_str(&e))
}

/// Group one day of events into transitive overlap clusters.
///
/// Returns a JSON array of id arrays, in canonical order.
#[wasm_bindgen(js_name = "overlapClusters")]
pub fn overlap_clusters(events_json: &str) -> Result<String, JsValue> {
    clusters_json(events_json).map_err(|e| JsValue::from_str(&e))
}
