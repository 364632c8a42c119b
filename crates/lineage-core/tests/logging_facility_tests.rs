#![allow(clippy::unwrap_used, clippy::expect_used)]

use lineage_core::errors::{ExError, ExErrorKind, FamilyError};
use lineage_core::logging_facility::test_capture::init_test_capture;
use lineage_core::{log_op_end, log_op_error, log_op_start};
use lineage_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_ERR_CODE};

#[test]
fn test_start_and_end_are_paired() {
    let capture = init_test_capture();
    let op_name = "test_start_end_pair_unique_1";

    log_op_start!(op_name, person = "Chit");
    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events_for_op(op_name);
    let starts = events
        .iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_START))
        .count();
    let ends: Vec<_> = events
        .iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END))
        .collect();

    assert_eq!(starts, 1);
    assert_eq!(ends.len(), 1);
    assert_eq!(ends[0].fields.get("duration_ms"), Some(&"42".to_string()));
}

#[test]
fn test_start_carries_extra_fields() {
    let capture = init_test_capture();
    let op_name = "test_start_fields_unique_2";

    log_op_start!(op_name, person = "Dritha", relation = "paternal-uncle");

    let start = capture
        .events_for_op(op_name)
        .into_iter()
        .find(|e| e.event.as_deref() == Some(EVENT_START))
        .expect("start event");
    assert_eq!(start.fields.get("person"), Some(&"Dritha".to_string()));
    assert_eq!(
        start.fields.get("relation"),
        Some(&"paternal-uncle".to_string())
    );
}

#[test]
fn test_error_event_includes_code_for_domain_error() {
    let capture = init_test_capture();
    let op_name = "test_error_code_unique_3";

    let err = FamilyError::ChildWithoutSpouse {
        parent: "Ish".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 5);

    capture.assert_event_exists(op_name, EVENT_END_ERROR);
    let event = capture
        .events_for_op(op_name)
        .into_iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .expect("error event");
    assert_eq!(
        event.fields.get(FIELD_ERR_CODE),
        Some(&"ERR_CHILD_REJECTED".to_string())
    );
    assert_eq!(event.level, tracing::Level::WARN);
}

#[test]
fn test_error_event_accepts_ex_error() {
    let capture = init_test_capture();
    let op_name = "test_error_ex_error_unique_4";

    let err = ExError::new(ExErrorKind::InvalidInput).with_message("bad record");
    log_op_error!(op_name, err, duration_ms = 0, line = 3);

    let event = capture
        .events_for_op(op_name)
        .into_iter()
        .find(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .expect("error event");
    assert_eq!(
        event.fields.get(FIELD_ERR_CODE),
        Some(&"ERR_INVALID_INPUT".to_string())
    );
    assert_eq!(event.fields.get("line"), Some(&"3".to_string()));
}

#[test]
#[should_panic(expected = "no event op=nonexistent_op_truly_unique_999 event=start")]
fn test_assert_event_exists_fails_for_missing_op() {
    let capture = init_test_capture();
    capture.assert_event_exists("nonexistent_op_truly_unique_999", EVENT_START);
}

#[test]
fn test_count_events_by_predicate() {
    let capture = init_test_capture();
    let op1 = "test_count_op1_unique_6";
    let op2 = "test_count_op2_unique_6";

    log_op_start!(op1);
    log_op_start!(op2);
    log_op_end!(op1, duration_ms = 1);

    let starts = capture.count_events(|e| {
        e.event.as_deref() == Some(EVENT_START)
            && matches!(e.op.as_deref(), Some(op) if op == op1 || op == op2)
    });
    assert_eq!(starts, 2);
}
