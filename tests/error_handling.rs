//! Error handling and edge case tests.

use feature_state::{FeatureStateStore, StateError, TileFeatureState, Value};
use serde_json::json;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

// --- Validation Errors ---

#[test]
fn test_non_object_update_is_ignored() {
    init_tracing();
    let mut store = FeatureStateStore::new();

    for input in [json!(true), json!(1), json!("hover"), json!([1, 2]), json!(null)] {
        store.update_state(Some("poi"), "1", &input);
    }

    assert!(store.get_state(Some("poi"), "1").is_empty());
    assert!(store.pending().is_empty());
}

#[test]
fn test_non_object_update_keeps_prior_state() {
    init_tracing();
    let mut store = FeatureStateStore::new();
    store.update_state(Some("poi"), "1", &json!({"hover": true}));
    store.coalesce_changes(std::iter::empty::<TileFeatureState>());
    store.update_state(Some("poi"), "1", &json!({"selected": true}));

    store.update_state(Some("poi"), "1", &json!(["hover", false]));

    let state = store.get_state(Some("poi"), "1");
    assert_eq!(state.len(), 2);
    assert_eq!(state["hover"], Value::Bool(true));
}

#[test]
fn test_try_update_reports_location() {
    let mut store = FeatureStateStore::new();
    let result = store.try_update_state(Some("poi"), "7", &json!(3));

    match result {
        Err(StateError::NotAnObject {
            source_layer,
            feature_id,
        }) => {
            assert_eq!(source_layer, "poi");
            assert_eq!(feature_id, "7");
        }
        other => panic!("Expected NotAnObject, got {:?}", other),
    }
}

#[test]
fn test_error_messages() {
    let err = StateError::NotAnObject {
        source_layer: String::new(),
        feature_id: "1".to_string(),
    };
    assert!(err.to_string().starts_with("Feature state must be an object"));

    let err: StateError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
    assert!(err.to_string().starts_with("Invalid JSON state"));
}

#[test]
fn test_malformed_json_leaves_store_untouched() {
    init_tracing();
    let mut store = FeatureStateStore::new();
    let result = store.update_state_json(None, "1", r#"{"hover": tru"#);

    assert!(matches!(result, Err(StateError::InvalidJson(_))));
    assert!(store.pending().is_empty());
}

// --- Missing Entries ---

#[test]
fn test_get_unknown_state() {
    let store = FeatureStateStore::new();
    assert!(store.get_state(Some("nope"), "1").is_empty());
    assert!(store.get_state(None, "1").is_empty());
}

#[test]
fn test_remove_unknown_state() {
    init_tracing();
    let mut store = FeatureStateStore::new();
    store.update_state(Some("poi"), "1", &json!({"hover": true}));

    store.remove_state(Some("nope"), None, None);
    store.remove_state(Some("poi"), Some("nope"), None);
    store.remove_state(Some("poi"), Some("1"), Some("nope"));
    assert_eq!(store.get_state(Some("poi"), "1")["hover"], Value::Bool(true));

    // A key with no feature widens to the whole layer.
    store.remove_state(Some("poi"), None, Some("nope"));
    assert!(store.get_state(Some("poi"), "1").is_empty());
}

// --- Conversion Skips ---

#[test]
fn test_deep_nesting_dropped_not_rejected() {
    init_tracing();
    let mut store = FeatureStateStore::new();
    let written = store
        .try_update_state(None, "1", &json!({"a": {"b": {"c": 1}}, "d": 2}))
        .unwrap();

    assert_eq!(written, 1);
    assert_eq!(store.get_state(None, "1")["d"], Value::UInt(2));
}

#[test]
fn test_array_of_only_containers_becomes_empty() {
    init_tracing();
    let mut store = FeatureStateStore::new();
    store.update_state(None, "1", &json!({"list": [[1], {"a": 1}]}));

    assert_eq!(store.get_state(None, "1")["list"], Value::Array(vec![]));
}
