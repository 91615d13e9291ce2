//! Row filtering, the table counterpart of SQL's `WHERE`.

use tabula_combinators::truthy;
use tabula_foundation::{Record, Table, Value};

/// Keeps the records for which `pred` returns a truthy value.
///
/// Surviving records keep their relative order. `pred` may return anything
/// convertible to a [`Value`]; `nil` and `false` reject the record, while
/// `0` and `""` keep it.
pub fn restrict<P, R>(table: &Table, pred: P) -> Table
where
    P: Fn(&Record) -> R,
    R: Into<Value>,
{
    let kept: Table = table
        .iter()
        .filter(|&record| truthy(Some(&pred(record).into())))
        .cloned()
        .collect();
    tracing::trace!(rows = table.len(), kept = kept.len(), "restrict");
    kept
}
