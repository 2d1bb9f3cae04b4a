#![cfg(feature = "serde")]

//! Integration tests for serde support.
//!
//! Both containers serialize as the sequence of their values, matching
//! `to_array()`. Sets also deserialize from a sequence.

use orderly::prelude::*;
use rstest::rstest;
use serde::Serialize;

// =============================================================================
// OrderedMap Serialization
// =============================================================================

#[rstest]
fn test_map_serializes_values_in_order() {
    let map = OrderedMap::from([("b", 2), ("a", 1), ("c", 3)]);
    let json = serde_json::to_string(&map).unwrap();
    assert_eq!(json, "[2,1,3]");
}

#[rstest]
fn test_map_serialization_matches_to_array() {
    let map = OrderedMap::from([(1, "one".to_string()), (2, "two".to_string())]);

    let from_map = serde_json::to_value(&map).unwrap();
    let from_array = serde_json::to_value(map.to_array()).unwrap();

    assert_eq!(from_map, from_array);
}

#[rstest]
fn test_empty_map_serializes_as_empty_array() {
    let map: OrderedMap<String, i32> = OrderedMap::new();
    assert_eq!(serde_json::to_string(&map).unwrap(), "[]");
}

#[rstest]
fn test_map_reinsert_does_not_reorder_output() {
    let mut map = OrderedMap::new();
    map.insert("x", 1);
    map.insert("y", 2);
    map.insert("x", 10);

    assert_eq!(serde_json::to_string(&map).unwrap(), "[10,2]");
}

// =============================================================================
// OrderedSet Serialization
// =============================================================================

#[rstest]
fn test_set_serializes_in_insertion_order() {
    let set = OrderedSet::from(["gamma", "alpha", "beta"]);
    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, r#"["gamma","alpha","beta"]"#);
}

#[rstest]
fn test_set_json_roundtrip_keeps_order() {
    let set: OrderedSet<i32> = [5, 3, 9, 1].into_iter().collect();

    let json = serde_json::to_string(&set).unwrap();
    let restored: OrderedSet<i32> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.array(), set.array());
}

#[rstest]
fn test_set_deserialize_collapses_duplicates() {
    let restored: OrderedSet<i32> = serde_json::from_str("[4, 2, 4, 8, 2]").unwrap();
    assert_eq!(restored.array(), vec![4, 2, 8]);
}

#[rstest]
fn test_set_deserialize_rejects_non_sequence() {
    let result: Result<OrderedSet<i32>, _> = serde_json::from_str(r#"{"a": 1}"#);
    assert!(result.is_err());
}

#[rstest]
fn test_nested_set_roundtrip() {
    let inner_a: OrderedSet<u8> = [1, 2].into_iter().collect();
    let inner_b: OrderedSet<u8> = [3].into_iter().collect();
    let outer = vec![inner_a, inner_b];

    let json = serde_json::to_string(&outer).unwrap();
    let restored: Vec<OrderedSet<u8>> = serde_json::from_str(&json).unwrap();

    assert_eq!(json, "[[1,2],[3]]");
    assert_eq!(restored, outer);
}

// =============================================================================
// Embedding
// =============================================================================

#[derive(Serialize)]
struct Inventory {
    name: &'static str,
    stock: OrderedMap<&'static str, u32>,
    tags: OrderedSet<&'static str>,
}

#[rstest]
fn test_containers_embed_as_arrays() {
    let inventory = Inventory {
        name: "shelf",
        stock: OrderedMap::from([("bolts", 40), ("nuts", 12)]),
        tags: OrderedSet::from(["metal", "small"]),
    };

    let json = serde_json::to_string(&inventory).unwrap();
    assert_eq!(
        json,
        r#"{"name":"shelf","stock":[40,12],"tags":["metal","small"]}"#
    );
}
