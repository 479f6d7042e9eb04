//! Error Handling Tests
//!
//! KeyNotFound, UnsupportedType and HeterogeneousList surface as typed
//! errors and never change stored state.

use crate::*;
use optionvars::{Error, Scalar, ScalarKind, Value};
use std::collections::HashMap;

// =============================================================================
// KEY NOT FOUND
// =============================================================================

#[test]
fn test_get_absent_is_key_not_found() {
    let store = create_store();

    let err = store.get("missing").unwrap_err();

    assert!(err.is_not_found());
    assert!(matches!(err, Error::KeyNotFound { ref key } if key == "missing"));
}

#[test]
fn test_pop_absent_is_key_not_found() {
    let store = create_store();

    assert!(store.pop("missing").unwrap_err().is_not_found());
}

#[test]
fn test_lookups_that_never_raise_not_found() {
    let store = create_store();

    assert!(!store.contains("missing").unwrap());
    assert!(store.get_opt("missing").unwrap().is_none());
    assert_eq!(store.get_or("missing", 0).unwrap(), 0i64);
    assert!(!store.remove("missing").unwrap());
}

// =============================================================================
// UNSUPPORTED TYPE
// =============================================================================

#[test]
fn test_unsupported_values() {
    let store = create_store();
    let mut map = HashMap::new();
    map.insert("x".to_string(), Value::Int(1));

    let values = vec![
        Value::Null,
        Value::Bool(true),
        Value::Bytes(vec![0xFF]),
        Value::Object(map),
        Value::from(vec![vec![1]]),
        Value::from(vec![Value::Null]),
    ];

    for value in values {
        let name = value.type_name();
        let err = store.set("key", value).unwrap_err();
        assert!(
            matches!(err, Error::UnsupportedType { .. }),
            "Expected UnsupportedType for {}, got {:?}",
            name,
            err
        );
    }
    assert!(!store.contains("key").unwrap());
}

#[test]
fn test_unsupported_json_values() {
    let store = create_store();

    for json in [
        serde_json::json!(null),
        serde_json::json!(false),
        serde_json::json!({"a": 1}),
    ] {
        let err = store.set("key", json).unwrap_err();
        assert!(matches!(err, Error::UnsupportedType { .. }));
    }
}

#[test]
fn test_json_integer_beyond_i64_is_not_stored_as_float() {
    let store = create_store();

    let err = store.set("big", serde_json::json!(u64::MAX)).unwrap_err();
    assert!(matches!(
        err,
        Error::UnsupportedType {
            type_name: "UInt",
            expected: None
        }
    ));

    let err = store
        .set("big", serde_json::json!([1, u64::MAX]))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::HeterogeneousList {
            expected: ScalarKind::Int,
            found: "UInt",
            index: 1
        }
    ));
    assert!(!store.contains("big").unwrap());
}

#[test]
fn test_append_wrong_kind_is_unsupported_type() {
    let store = create_store();
    store.set("nums", vec![1, 2]).unwrap();

    let mut list = store.get("nums").unwrap().into_list().unwrap();
    let err = list.append_and_persist("three").unwrap_err();

    assert!(matches!(
        err,
        Error::UnsupportedType {
            type_name: "String",
            expected: Some(ScalarKind::Int)
        }
    ));
    assert_eq!(
        store.get("nums").unwrap().into_list().unwrap(),
        vec![Scalar::Int(1), Scalar::Int(2)]
    );
}

#[test]
fn test_append_int_to_float_list_is_rejected() {
    let store = create_store();
    store.set("weights", vec![1.0]).unwrap();

    let mut list = store.get("weights").unwrap().into_list().unwrap();

    assert!(list.append_and_persist(2).is_err());
    assert!(list.append_and_persist(Value::Null).is_err());
    assert_eq!(list.len(), 1);
}

// =============================================================================
// HETEROGENEOUS LIST
// =============================================================================

#[test]
fn test_mixed_list_is_heterogeneous() {
    let store = create_store();

    let err = store
        .set("key", Value::Array(vec![Value::Int(1), Value::from("a")]))
        .unwrap_err();

    assert!(matches!(
        err,
        Error::HeterogeneousList {
            expected: ScalarKind::Int,
            found: "String",
            index: 1
        }
    ));
}

#[test]
fn test_mixed_list_leaves_prior_value() {
    let store = create_store();
    store.set("key", "before").unwrap();

    let mixed = Value::Array(vec![Value::Float(1.0), Value::Int(2)]);
    assert!(store.set("key", mixed).is_err());

    assert_eq!(store.get("key").unwrap(), "before");
}

#[test]
fn test_mixed_list_on_absent_key_writes_nothing() {
    let store = create_store();

    let mixed = Value::Array(vec![Value::from("a"), Value::from("b"), Value::Int(3)]);
    let err = store.set("key", mixed).unwrap_err();

    assert!(matches!(err, Error::HeterogeneousList { index: 2, .. }));
    assert!(!store.contains("key").unwrap());
}

#[test]
fn test_int_then_float_is_heterogeneous() {
    let store = create_store();

    let err = store
        .set("key", serde_json::json!([1, 2.5]))
        .unwrap_err();

    assert!(matches!(
        err,
        Error::HeterogeneousList {
            expected: ScalarKind::Int,
            found: "Float",
            ..
        }
    ));
}
