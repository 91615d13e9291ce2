//! Column selection over row-array tables.
//!
//! A row-array table is a sequence of rows, each row a `Vec` value, whose
//! first row is a header naming the columns:
//!
//! ```text
//! [["name", "age", "hair"],
//!  ["Merble", 35, "red"],
//!  ["Bob", 64, "blonde"]]
//! ```

use tabula_foundation::{Result, Seq, Value};

use crate::index::nth;

/// Applies `select` to every row after the header.
///
/// # Errors
///
/// The first error returned by `select`.
pub fn select_column_with<F>(rows: &Seq<Value>, select: F) -> Result<Seq<Value>>
where
    F: Fn(&Value) -> Result<Value>,
{
    let column = rows.iter().skip(1).map(select).collect::<Result<Seq<Value>>>()?;
    tracing::trace!(rows = rows.len(), "select_column");
    Ok(column)
}

/// Returns the column at `index`, header row excluded.
///
/// # Errors
///
/// Whatever [`nth`] reports for the first row it cannot index.
pub fn select_column(rows: &Seq<Value>, index: &Value) -> Result<Seq<Value>> {
    select_column_with(rows, |row| nth(row, index))
}

/// Zips columns into rows.
///
/// The result is as long as the longest column; shorter columns are padded
/// with `Nil`.
#[must_use]
pub fn merge_results(columns: &[Seq<Value>]) -> Seq<Value> {
    let longest = columns.iter().map(Seq::len).max().unwrap_or(0);
    (0..longest)
        .map(|i| {
            Value::Vec(
                columns
                    .iter()
                    .map(|column| column.get(i).cloned().unwrap_or(Value::Nil))
                    .collect(),
            )
        })
        .collect()
}
