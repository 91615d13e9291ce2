//! Integration tests for nth, second, and last

use tabula_combinators::{fail, is_indexed, last, nth, second};
use tabula_foundation::{ErrorKind, Result, Value};

fn tens() -> Value {
    vec![10, 20, 30].into()
}

#[test]
fn nth_examples() {
    assert_eq!(nth(&tens(), &Value::Int(1)).unwrap(), Value::Int(20));
    assert!(nth(&tens(), &Value::Int(5)).unwrap_err().is_out_of_bounds());
    assert!(nth(&tens(), &Value::from("x")).unwrap_err().is_invalid_argument());
}

#[test]
fn nth_on_records_is_invalid() {
    let data = Value::from(tabula_foundation::record! { "a" => 1 });
    assert!(!is_indexed(&data));
    assert!(nth(&data, &Value::Int(0)).unwrap_err().is_invalid_argument());
}

#[test]
fn second_and_last_of_strings() {
    let word = Value::from("abc");
    assert_eq!(second(&word).unwrap(), Value::from("b"));
    assert_eq!(last(&word).unwrap(), Value::from("c"));
}

#[test]
fn errors_propagate_with_question_mark() {
    fn hair_colour(row: &Value) -> Result<Value> {
        let colour = nth(row, &Value::Int(2))?;
        if colour.as_str() == Some("") {
            return Err(fail("empty hair colour"));
        }
        Ok(colour)
    }

    let row: Value = vec!["Merble", "35", "red"].into();
    assert_eq!(hair_colour(&row).unwrap(), Value::from("red"));

    let short: Value = vec!["Bob", "64"].into();
    assert!(hair_colour(&short).unwrap_err().is_out_of_bounds());

    let blank: Value = vec!["Ann", "20", ""].into();
    assert_eq!(
        hair_colour(&blank).unwrap_err().kind,
        ErrorKind::Failure("empty hair colour".to_string())
    );
}
