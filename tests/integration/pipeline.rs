//! Query pipelines built from combinators

use std::cmp::Ordering;

use tabula::combinators::{
    Diagnostics, DiagnosticsConfig, comparator, complement, existy, interpose, less_than, nth,
    truthy,
};
use tabula::foundation::{Record, Renames, Seq, Table, Value, record};
use tabula::query::TableExt;

fn people() -> Table {
    Table::from([
        record! { "name" => "Merble", "age" => 35, "hair" => "red" },
        record! { "name" => "Bob", "age" => 64, "hair" => "blonde" },
        record! { "name" => "Ann", "age" => 0 },
    ])
}

#[test]
fn chained_methods_match_free_functions() {
    let renames = Renames::new().with("hair", "colour");
    let chained = people()
        .as_(&renames)
        .project(&["name", "colour"])
        .restrict(|p| p.get("colour").cloned());

    let free = tabula::query::restrict(
        &tabula::query::project(&tabula::query::as_(&people(), &renames), &["name", "colour"]),
        |p| p.get("colour").cloned(),
    );

    assert_eq!(chained, free);
    assert_eq!(chained.pluck("name"), Seq::from([Value::from("Merble"), Value::from("Bob")]));
}

#[test]
fn existy_keeps_zero_ages() {
    let with_age = people().restrict(|p| existy(p.get("age")));
    assert_eq!(with_age.len(), 3);

    let with_hair = people().restrict(|p| truthy(p.get("hair")));
    assert_eq!(with_hair.len(), 2);
}

#[test]
fn complement_as_row_filter() {
    let is_young = |p: &Record| p.get("age") < Some(&Value::Int(40));
    let old = complement(is_young);
    let result = people().restrict(|p| old(p));
    assert_eq!(result.pluck("name"), Seq::unit(Value::from("Bob")));
}

#[test]
fn sort_plucked_column_with_comparator() {
    let mut ages: Vec<Value> = people().pluck("age").into_iter().collect();
    ages.sort_by(comparator(less_than));
    assert_eq!(ages, vec![Value::Int(0), Value::Int(35), Value::Int(64)]);

    let cmp = comparator(less_than);
    assert_eq!(cmp(&ages[0], &ages[0]), Ordering::Equal);
}

#[test]
fn interpose_names_for_display() {
    let names = people().pluck("name");
    let line: String = interpose(Value::from(", "), &names)
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(line, "Merble, Bob, Ann");
}

#[test]
fn nth_on_plucked_column() {
    let names = Value::from(people().pluck("name"));
    assert_eq!(nth(&names, &Value::Int(2)).unwrap(), Value::from("Ann"));
    assert!(nth(&names, &Value::Int(3)).unwrap_err().is_out_of_bounds());
}

#[test]
fn diagnostics_do_not_affect_results() {
    let diag = Diagnostics::new(DiagnosticsConfig::default());
    let subscriber = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::INFO)
        .finish();

    let kept = tracing::subscriber::with_default(subscriber, || {
        let kept = people().restrict(|p| p.get("hair").cloned());
        if kept.len() < people().len() {
            diag.warn(format!("{} rows without hair", people().len() - kept.len()));
        }
        diag.note(format!("kept {} rows", kept.len()));
        kept
    });

    assert_eq!(kept.len(), 2);
}
