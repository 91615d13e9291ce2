//! Integration tests for Value types
//!
//! Tests Value variants, equality, ordering, display, and conversions.

use std::sync::Arc;

use tabula_foundation::{Seq, Type, Value, record};

// =============================================================================
// Existence and Truthiness
// =============================================================================

#[test]
fn nil_is_absent_and_falsy() {
    assert!(!Value::Nil.is_existy());
    assert!(!Value::Nil.is_truthy());
}

#[test]
fn false_exists_but_is_falsy() {
    let v = Value::Bool(false);
    assert!(v.is_existy());
    assert!(!v.is_truthy());
}

#[test]
fn zero_and_empty_string_are_truthy() {
    assert!(Value::Int(0).is_truthy());
    assert!(Value::Float(0.0).is_truthy());
    assert!(Value::String(Arc::from("")).is_truthy());
}

#[test]
fn empty_collections_are_truthy() {
    assert!(Value::Vec(Seq::new()).is_truthy());
    assert!(Value::Map(record! {}).is_truthy());
}

// =============================================================================
// Value Types
// =============================================================================

#[test]
fn value_types() {
    assert_eq!(Value::Nil.value_type(), Type::Nil);
    assert_eq!(Value::from("x").value_type(), Type::String);
    assert_eq!(Value::from(vec![1, 2]).value_type(), Type::Vec);
    assert_eq!(Value::from(record! { "a" => 1 }).value_type(), Type::Map);
}

// =============================================================================
// Equality and Ordering
// =============================================================================

#[test]
fn nested_records_compare_by_content() {
    let a = Value::from(record! { "x" => 1, "y" => 2 });
    let b = Value::from(record! { "y" => 2, "x" => 1 });
    assert_eq!(a, b);
}

#[test]
fn sequences_order_lexicographically() {
    let a = Value::from(vec![1, 2]);
    let b = Value::from(vec![1, 3]);
    assert!(a < b);
}

#[test]
fn mixed_kinds_are_unordered() {
    assert_eq!(Value::Bool(true).partial_cmp(&Value::Int(1)), None);
    assert!(!(Value::Nil < Value::Int(0)));
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn display_nested() {
    let v = Value::from(record! { "tags" => Value::from(vec!["a", "b"]), "n" => Value::Nil });
    assert_eq!(format!("{v}"), "{tags: [a, b], n: nil}");
}
