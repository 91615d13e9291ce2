//! Checked positional access into sequences and strings.

use tabula_foundation::{Error, ErrorContext, Result, Value};

/// Returns true if `data` can be indexed by position (sequences and strings).
#[must_use]
pub fn is_indexed(data: &Value) -> bool {
    data.value_type().is_indexed()
}

/// Returns the element of `data` at `index`.
///
/// Strings are indexed by character and yield a one-character string.
///
/// # Errors
///
/// - `InvalidArgument` if `index` is not an integral number
/// - `InvalidArgument` if `data` is not a sequence or string
/// - `OutOfBounds` if `index` is outside `[0, len - 1]`
pub fn nth(data: &Value, index: &Value) -> Result<Value> {
    let index = integral_index(index)?;
    match data {
        Value::Vec(items) => lookup(index, items.len(), |i| items.get(i).cloned()),
        Value::String(s) => lookup(index, s.chars().count(), |i| {
            s.chars().nth(i).map(|c| Value::from(c.to_string()))
        }),
        other => Err(Error::unexpected_type("an array or string", other.value_type())),
    }
}

fn lookup(index: i64, length: usize, get: impl FnOnce(usize) -> Option<Value>) -> Result<Value> {
    usize::try_from(index)
        .ok()
        .and_then(get)
        .ok_or_else(|| Error::out_of_bounds(index, length))
}

/// Returns the element at index 1.
///
/// # Errors
///
/// Same as [`nth`].
pub fn second(data: &Value) -> Result<Value> {
    nth(data, &Value::Int(1)).map_err(|e| e.with_context(frame("second")))
}

/// Returns the final element.
///
/// # Errors
///
/// `InvalidArgument` for non-indexable data, `OutOfBounds` when empty.
pub fn last(data: &Value) -> Result<Value> {
    let length = indexed_len(data).map_err(|e| e.with_context(frame("last")))?;
    let index = i64::try_from(length).unwrap_or(i64::MAX) - 1;
    nth(data, &Value::Int(index)).map_err(|e| e.with_context(frame("last")))
}

fn frame(caller: &str) -> ErrorContext {
    ErrorContext::new().with_operation("nth").with_frame(caller)
}

#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn integral_index(index: &Value) -> Result<i64> {
    match index {
        Value::Int(n) => Ok(*n),
        Value::Float(f) if f.fract() == 0.0 && f.abs() < 9.0e18 => Ok(*f as i64),
        other => Err(Error::unexpected_type(
            "an integral number as index",
            other.value_type(),
        )),
    }
}

fn indexed_len(data: &Value) -> Result<usize> {
    match data {
        Value::Vec(items) => Ok(items.len()),
        Value::String(s) => Ok(s.chars().count()),
        other => Err(Error::unexpected_type("an array or string", other.value_type())),
    }
}
