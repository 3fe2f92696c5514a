#![allow(clippy::unwrap_used, clippy::expect_used)]

// Structured log events emitted by arrkit operations, observed through the
// in-memory capture layer. The buffer is shared by every test in this
// binary, so each test filters on something unique to it.

use arrkit_core::hash::{structural_hash, structural_hash_report};
use arrkit_core::logging_facility::{init_test_capture, CapturedEvent};
use arrkit_core::model::{OrderedMap, Value};
use arrkit_core::sample::sample;
use arrkit_core::sort::sort_by_comparator;
use arrkit_core::select::{max_x, min_x};
use arrkit_core::{log_op_end, log_op_error, log_op_start, omap, ArrError};
use arrkit_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, EVENT_UNSUPPORTED_VALUE, FIELD_DURATION_MS,
    FIELD_ERR_CODE, FIELD_ERR_KIND, FIELD_ITEM_COUNT, FIELD_KEY_PATH, FIELD_LIMIT,
    FIELD_ORDERLESS, FIELD_RESULT_LEN, FIELD_VALUE_KIND,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::Level;

fn with_field<'a>(events: &'a [CapturedEvent], name: &str, value: &str) -> Vec<&'a CapturedEvent> {
    events
        .iter()
        .filter(|e| e.field(name) == Some(value))
        .collect()
}

#[test]
fn test_min_x_emits_start_and_end() {
    let capture = init_test_capture();
    let map = OrderedMap::from_values(0..37);

    min_x(&map, 3).unwrap();

    let starts = capture.events_for("min_x", EVENT_START);
    let ours = with_field(&starts, FIELD_ITEM_COUNT, "37");
    assert!(!ours.is_empty());
    assert_eq!(ours[0].field(FIELD_LIMIT), Some("3"));
    assert_eq!(ours[0].level, Level::INFO);
    capture.assert_event_exists("min_x", EVENT_END);
}

#[test]
fn test_zero_limit_logs_end_error_with_code() {
    let capture = init_test_capture();
    let map = OrderedMap::from_values(0..41);

    let err = max_x(&map, 0).unwrap_err();
    assert!(matches!(err, ArrError::InvalidLimit { limit: 0, .. }));

    let errors = capture.events_for("max_x", EVENT_END_ERROR);
    let ours: Vec<_> = errors
        .iter()
        .filter(|e| e.field(FIELD_ERR_CODE) == Some("ERR_INVALID_INPUT"))
        .collect();
    assert!(!ours.is_empty());
    assert_eq!(ours[0].level, Level::ERROR);
    assert_eq!(ours[0].field(FIELD_ERR_KIND), Some("InvalidInput"));
    assert!(ours[0].field(FIELD_DURATION_MS).is_some());
}

#[test]
fn test_opaque_value_logged_as_warning() {
    let capture = init_test_capture();
    let map = omap! {
        "warn_case" => omap! { "inner" => Value::Opaque("socket".into()) },
    };

    let report = structural_hash_report(&map, true);
    assert!(!report.is_complete());

    let warnings = capture.events_for("structural_hash", EVENT_UNSUPPORTED_VALUE);
    let ours = with_field(&warnings, FIELD_KEY_PATH, "warn_case.inner");
    assert_eq!(ours.len(), 1);
    assert_eq!(ours[0].level, Level::WARN);
    assert_eq!(ours[0].field(FIELD_VALUE_KIND), Some("opaque"));
    assert_eq!(ours[0].field(FIELD_ERR_CODE), Some("ERR_UNSUPPORTED_VALUE"));
}

#[test]
fn test_sample_error_logged_with_input_code() {
    let capture = init_test_capture();
    let map = OrderedMap::from_values(0..3);

    sample(&map, 53, &mut StdRng::seed_from_u64(0)).unwrap_err();

    let errors = capture.events_for("sample", EVENT_END_ERROR);
    let ours = with_field(&errors, FIELD_ERR_CODE, "ERR_INVALID_INPUT");
    assert!(!ours.is_empty());
}

#[test]
fn test_macros_usable_from_outside_the_crate() {
    let capture = init_test_capture();

    log_op_start!("external_op", item_count = 5u64);
    log_op_end!("external_op", duration_ms = 1u64, result_len = 2u64);
    log_op_error!(
        "external_op",
        ArrError::EmptySource {
            op: "external_op".to_string()
        },
        duration_ms = 0u64
    );

    let start = capture.events_for("external_op", EVENT_START);
    assert_eq!(start.len(), 1);
    assert_eq!(start[0].field(FIELD_ITEM_COUNT), Some("5"));
    assert!(start[0].component.is_some());

    let end = capture.events_for("external_op", EVENT_END);
    assert_eq!(end.len(), 1);
    assert_eq!(end[0].field(FIELD_RESULT_LEN), Some("2"));

    let failed = capture.events_for("external_op", EVENT_END_ERROR);
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].field(FIELD_ERR_CODE), Some("ERR_EMPTY_SOURCE"));
}

#[test]
fn test_count_events_predicate() {
    let capture = init_test_capture();
    log_op_start!("count_op");
    log_op_start!("count_op");

    let n = capture.count_events(|e| e.op.as_deref() == Some("count_op"));
    assert_eq!(n, 2);
}

#[test]
fn test_structural_hash_logs_orderless_flag() {
    let capture = init_test_capture();
    let map = OrderedMap::from_values(0..43);

    structural_hash(&map, false);

    let starts = capture.events_for("structural_hash", EVENT_START);
    let ours = with_field(&starts, FIELD_ITEM_COUNT, "43");
    assert!(!ours.is_empty());
    assert_eq!(ours[0].field(FIELD_ORDERLESS), Some("false"));
}

#[test]
fn test_comparator_sort_logs_result_len() {
    let capture = init_test_capture();
    let map = OrderedMap::from_values(0..47);
    let by_value = |a: &Value, b: &Value| a.try_cmp(b).unwrap_or(std::cmp::Ordering::Equal);

    sort_by_comparator(&map, &by_value);

    let ends = capture.events_for("sort_by_comparator", EVENT_END);
    let ours = with_field(&ends, FIELD_RESULT_LEN, "47");
    assert_eq!(ours.len(), 1);
    assert!(ours[0].field(FIELD_DURATION_MS).is_some());
}
