//! Integration tests for existence, truthiness, and predicate combinators

use std::cmp::Ordering;

use tabula_combinators::{
    all_of, always_false, always_true, any_of, comparator, complement, existy, less_than,
    three_way, truthy,
};
use tabula_foundation::{Value, record};

// =============================================================================
// existy / truthy
// =============================================================================

#[test]
fn existy_table() {
    assert!(!existy(None));
    assert!(existy(Some(&Value::Int(0))));
    assert!(existy(Some(&Value::Bool(false))));
    assert!(existy(Some(&Value::from(""))));
}

#[test]
fn truthy_table() {
    assert!(!truthy(Some(&Value::Bool(false))));
    assert!(!truthy(None));
    assert!(truthy(Some(&Value::Int(0))));
    assert!(truthy(Some(&Value::from(""))));
}

#[test]
fn missing_field_is_not_existy() {
    let r = record! { "a" => 0 };
    assert!(existy(r.get("a")));
    assert!(!existy(r.get("notHere")));
}

// =============================================================================
// comparator
// =============================================================================

#[test]
fn comparator_orders_mixed_numbers() {
    let mut values = vec![Value::Float(2.5), Value::Int(0), Value::Int(-1), Value::Int(1)];
    values.sort_by(comparator(less_than));
    assert_eq!(
        values,
        vec![Value::Int(-1), Value::Int(0), Value::Int(1), Value::Float(2.5)]
    );
}

#[test]
fn comparator_on_strings() {
    let cmp = comparator(|a: &str, b: &str| a < b);
    assert_eq!(cmp("apple", "banana"), Ordering::Less);
    assert_eq!(three_way(cmp("b", "a")), 1);
    assert_eq!(three_way(cmp("a", "a")), 0);
}

// =============================================================================
// complement / all_of / any_of
// =============================================================================

#[test]
fn complement_filters() {
    let is_even = |n: &i64| n % 2 == 0;
    let odd = complement(is_even);
    let kept: Vec<i64> = (1..=6).filter(|n| odd(n)).collect();
    assert_eq!(kept, vec![1, 3, 5]);
}

#[test]
fn all_of_and_any_of() {
    let t: &dyn Fn() -> bool = &always_true;
    let f: &dyn Fn() -> bool = &always_false;

    assert!(all_of(&[]));
    assert!(!any_of(&[]));
    assert!(!all_of(&[t, t, f]));
    assert!(any_of(&[f, f, t]));
    assert!(all_of(&[t, t, t]));
}
