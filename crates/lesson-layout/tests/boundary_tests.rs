//! Tests for input validation and sanitizing.

use chrono::{TimeZone, Utc};
use lesson_layout::{sanitize, try_compute_layout, validate, CalendarEvent, LayoutError, Rejection};

fn event(id: u32, start: (u32, u32), end: (u32, u32)) -> CalendarEvent<u32> {
    CalendarEvent::new(
        id,
        Utc.with_ymd_and_hms(2026, 3, 16, start.0, start.1, 0).unwrap(),
        Utc.with_ymd_and_hms(2026, 3, 16, end.0, end.1, 0).unwrap(),
    )
}

#[test]
fn well_formed_input_validates() {
    let events = [event(1, (9, 0), (10, 0)), event(2, (9, 30), (10, 30))];
    assert_eq!(validate(&events), Ok(()));
}

#[test]
fn reversed_interval_is_rejected() {
    let events = [event(1, (9, 0), (10, 0)), event(2, (11, 0), (10, 0))];

    let err = validate(&events).unwrap_err();

    assert_eq!(
        err,
        LayoutError::InvalidInterval {
            id: "2".to_string(),
            start: "2026-03-16T11:00:00+00:00".to_string(),
            end: "2026-03-16T10:00:00+00:00".to_string(),
        }
    );
}

#[test]
fn zero_length_interval_is_rejected() {
    let events = [event(1, (9, 0), (9, 0))];
    assert!(matches!(
        validate(&events),
        Err(LayoutError::InvalidInterval { .. })
    ));
}

#[test]
fn duplicate_id_is_rejected() {
    let events = [event(7, (9, 0), (10, 0)), event(7, (11, 0), (12, 0))];

    let err = validate(&events).unwrap_err();

    assert_eq!(err, LayoutError::DuplicateId("7".to_string()));
    assert_eq!(err.to_string(), "Duplicate event id: 7");
}

#[test]
fn sanitize_keeps_first_occurrence_and_input_order() {
    let events = vec![
        event(3, (12, 0), (13, 0)),
        event(1, (9, 0), (10, 0)),
        event(3, (14, 0), (15, 0)),
        event(2, (10, 0), (9, 0)),
    ];

    let sanitized = sanitize(events);

    let kept: Vec<u32> = sanitized.kept.iter().map(|e| e.id).collect();
    assert_eq!(kept, vec![3, 1]);
    assert_eq!(sanitized.kept[0].start.format("%H:%M").to_string(), "12:00");

    let rejected: Vec<(u32, Rejection)> = sanitized
        .rejected
        .iter()
        .map(|(e, reason)| (e.id, *reason))
        .collect();
    assert_eq!(
        rejected,
        vec![(3, Rejection::DuplicateId), (2, Rejection::InvalidInterval)]
    );
}

#[test]
fn malformed_event_does_not_claim_its_id() {
    // The malformed first copy is dropped, so the valid second copy is kept.
    let events = vec![event(5, (10, 0), (10, 0)), event(5, (10, 0), (11, 0))];

    let sanitized = sanitize(events);

    assert_eq!(sanitized.kept.len(), 1);
    assert_eq!(sanitized.rejected[0].1, Rejection::InvalidInterval);
}

#[test]
fn try_compute_layout_lays_out_valid_input() {
    let events = [event(1, (9, 0), (10, 0)), event(2, (9, 30), (10, 30))];

    let layout = try_compute_layout(&events).unwrap();

    assert_eq!(layout[&1].total_columns, 2);
    assert_eq!(layout[&2].column, 1);
}

#[test]
fn try_compute_layout_surfaces_validation_error() {
    let events = [event(1, (9, 0), (10, 0)), event(1, (9, 30), (10, 30))];
    assert!(matches!(
        try_compute_layout(&events),
        Err(LayoutError::DuplicateId(_))
    ));
}

#[test]
fn rejection_labels_are_stable() {
    assert_eq!(Rejection::InvalidInterval.as_str(), "invalid_interval");
    assert_eq!(Rejection::DuplicateId.as_str(), "duplicate_id");
}
