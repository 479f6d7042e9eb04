//! Preference File Tests
//!
//! The typed store over FileBackend: values, kinds and appends survive
//! reopening the preference file.

use crate::*;
use optionvars::{Scalar, ScalarKind};
use tempfile::TempDir;

#[test]
fn test_values_survive_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let store = create_file_store(&dir);
        store.set("name", "dooder").unwrap();
        store.set("count", 3).unwrap();
        store.set("scale", 1.0).unwrap();
        store.set("nums", vec![1, 24, 7]).unwrap();
    }

    let store = create_file_store(&dir);
    assert_eq!(store.get("name").unwrap(), "dooder");
    assert_eq!(store.get("count").unwrap(), 3i64);
    assert_eq!(store.get("scale").unwrap().kind(), Some(ScalarKind::Float));
    assert_eq!(
        store.get("nums").unwrap().into_list().unwrap(),
        vec![Scalar::Int(1), Scalar::Int(24), Scalar::Int(7)]
    );
}

#[test]
fn test_infinite_float_does_not_lose_other_keys() {
    let dir = TempDir::new().unwrap();
    {
        let store = create_file_store(&dir);
        store.set("ok", "kept").unwrap();
        store.set("far", f64::INFINITY).unwrap();
        store.set("range", vec![f64::NEG_INFINITY, 0.0]).unwrap();
    }

    let store = create_file_store(&dir);
    assert_eq!(store.get("ok").unwrap(), "kept");
    assert_eq!(store.get("far").unwrap(), f64::INFINITY);
    assert_eq!(
        store.get("range").unwrap().into_list().unwrap(),
        vec![Scalar::Float(f64::NEG_INFINITY), Scalar::Float(0.0)]
    );
}

#[test]
fn test_append_and_persist_survives_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let store = create_file_store(&dir);
        store.set("test", vec![1, 24, 7]).unwrap();
        let mut list = store.get("test").unwrap().into_list().unwrap();
        list.append_and_persist(9).unwrap();
        list.push(Scalar::Int(10));
    }

    let store = create_file_store(&dir);
    assert_eq!(
        store.get("test").unwrap().into_list().unwrap(),
        vec![
            Scalar::Int(1),
            Scalar::Int(24),
            Scalar::Int(7),
            Scalar::Int(9)
        ]
    );
}

#[test]
fn test_clear_and_pop_survive_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let store = create_file_store(&dir);
        store.set("cleared", vec!["a"]).unwrap();
        store.set("popped", 1).unwrap();
        store.set("kept", 2).unwrap();

        store.set("cleared", Vec::<String>::new()).unwrap();
        store.pop("popped").unwrap();
    }

    let store = create_file_store(&dir);
    assert_eq!(store.keys().unwrap(), vec!["kept".to_string()]);
}

#[test]
fn test_failed_set_does_not_touch_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("optionVars.json");
    let store = create_file_store(&dir);
    store.set("key", "v").unwrap();
    let before = std::fs::read_to_string(&path).unwrap();

    assert!(store.set("key", vec![optionvars::Value::Null]).is_err());

    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}
