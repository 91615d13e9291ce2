//! Integration tests for column selection over row-array tables

use tabula_combinators::{last, merge_results, nth, second, select_column, select_column_with};
use tabula_foundation::{Seq, Value};

fn people() -> Seq<Value> {
    Seq::from([
        Value::from(vec!["name", "age", "hair"]),
        Value::from(vec![Value::from("Merble"), Value::Int(35), Value::from("red")]),
        Value::from(vec![Value::from("Bob"), Value::Int(64), Value::from("blonde")]),
    ])
}

#[test]
fn names_with_hair() {
    let names = select_column(&people(), &Value::Int(0)).unwrap();
    let hair = select_column_with(&people(), last).unwrap();
    assert_eq!(
        merge_results(&[names, hair]),
        Seq::from([
            Value::from(vec!["Merble", "red"]),
            Value::from(vec!["Bob", "blonde"]),
        ])
    );
}

#[test]
fn every_selector_agrees_on_the_same_column() {
    let by_nth = select_column_with(&people(), |row| nth(row, &Value::Int(1))).unwrap();
    let by_second = select_column_with(&people(), second).unwrap();
    assert_eq!(by_nth, by_second);
    assert_eq!(by_nth, Seq::from([Value::Int(35), Value::Int(64)]));
}

#[test]
fn bad_index_propagates() {
    let err = select_column(&people(), &Value::from("age")).unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(select_column(&people(), &Value::Int(3)).unwrap_err().is_out_of_bounds());
}
