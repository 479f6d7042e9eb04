//! Basic Option Variable Operations Tests
//!
//! Tests for contains, get, set, keys, get_or, pop and remove.

use crate::*;
use optionvars::{OptionVar, Scalar, ScalarKind, Stored, Value};
use std::collections::HashSet;

// =============================================================================
// GET / SET TESTS
// =============================================================================

#[test]
fn test_string_round_trip() {
    let store = create_store();

    store.set("test", "dooder").unwrap();

    let value = store.get("test").unwrap();
    assert_eq!(value, "dooder");
    assert_eq!(value.kind(), Some(ScalarKind::String));
}

#[test]
fn test_int_round_trip() {
    let store = create_store();

    store.set("gridSpacing", 5).unwrap();

    let value = store.get("gridSpacing").unwrap();
    assert_eq!(value, 5i64);
    assert_eq!(value.kind(), Some(ScalarKind::Int));
}

#[test]
fn test_float_round_trip() {
    let store = create_store();

    store.set("frameRate", 23.976).unwrap();

    let value = store.get("frameRate").unwrap();
    assert_eq!(value, 23.976);
    assert_eq!(value.kind(), Some(ScalarKind::Float));
}

#[test]
fn test_numeric_looking_string_stays_string() {
    let (store, backend) = create_store_and_backend();

    store.set("version", "2024").unwrap();
    store.set("ratio", "1.5").unwrap();

    assert_eq!(
        backend.query("version").unwrap(),
        Some(Stored::Scalar(Scalar::from("2024")))
    );
    assert_eq!(store.get("ratio").unwrap().kind(), Some(ScalarKind::String));
}

#[test]
fn test_whole_float_stays_float() {
    let store = create_store();

    store.set("scale", 2.0).unwrap();

    assert_eq!(store.get("scale").unwrap(), OptionVar::Float(2.0));
    assert_ne!(store.get("scale").unwrap(), OptionVar::Int(2));
}

#[test]
fn test_set_overwrites_existing() {
    let store = create_store();

    store.set("key", 1).unwrap();
    store.set("key", 2).unwrap();

    assert_eq!(store.get("key").unwrap(), 2i64);
}

#[test]
fn test_dynamic_json_values() {
    let store = create_store();

    store.set("name", serde_json::json!("shot010")).unwrap();
    store.set("count", serde_json::json!(12)).unwrap();
    store.set("weights", serde_json::json!([0.25, 0.75])).unwrap();

    assert_eq!(store.get("name").unwrap(), "shot010");
    assert_eq!(store.get("count").unwrap(), 12i64);
    assert_eq!(
        store.get("weights").unwrap(),
        Value::from(vec![0.25, 0.75])
    );
}

// =============================================================================
// CONTAINS / KEYS TESTS
// =============================================================================

#[test]
fn test_contains() {
    let store = create_store();

    assert!(!store.contains("key").unwrap());
    store.set("key", "v").unwrap();
    assert!(store.contains("key").unwrap());
}

#[test]
fn test_keys_is_exact_set() {
    let store = create_store();

    store.set("k1", 1).unwrap();
    store.set("k2", "two").unwrap();
    store.set("k3", vec![3.0]).unwrap();

    let keys: HashSet<String> = store.keys().unwrap().into_iter().collect();
    let expected: HashSet<String> = ["k1", "k2", "k3"].iter().map(|s| s.to_string()).collect();
    assert_eq!(keys, expected);
}

#[test]
fn test_keys_empty_store() {
    let store = create_store();
    assert!(store.keys().unwrap().is_empty());
    assert!(store.is_empty().unwrap());
}

// =============================================================================
// DEFAULT LOOKUP TESTS
// =============================================================================

#[test]
fn test_get_or_absent_returns_default() {
    let store = create_store();

    let value = store.get_or("missing", "x").unwrap();
    assert_eq!(value, "x");
}

#[test]
fn test_get_or_present_ignores_default() {
    let store = create_store();
    store.set("present", "stored").unwrap();

    assert_eq!(store.get_or("present", "x").unwrap(), "stored");
}

#[test]
fn test_get_opt_absent_is_none() {
    let store = create_store();
    assert!(store.get_opt("missing").unwrap().is_none());
}

// =============================================================================
// POP / REMOVE TESTS
// =============================================================================

#[test]
fn test_pop_returns_prior_value_and_removes() {
    let store = create_store();
    store.set("key", 42).unwrap();

    let value = store.pop("key").unwrap();

    assert_eq!(value, 42i64);
    assert!(!store.contains("key").unwrap());
}

#[test]
fn test_pop_list_returns_elements() {
    let store = create_store();
    store.set("nums", vec![1, 2, 3]).unwrap();

    let list = store.pop("nums").unwrap().into_list().unwrap();

    assert_eq!(list, vec![Scalar::Int(1), Scalar::Int(2), Scalar::Int(3)]);
    assert!(!store.contains("nums").unwrap());
}

#[test]
fn test_remove_reports_existence() {
    let store = create_store();
    store.set("key", "v").unwrap();

    assert!(store.remove("key").unwrap());
    assert!(!store.remove("key").unwrap());
    assert!(!store.contains("key").unwrap());
}
