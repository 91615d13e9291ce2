//! Column selection: `project` keeps the table shape, `pluck` breaks it.

use tabula_foundation::{Seq, Table, Value};

/// Keeps only the named fields of every record.
///
/// Fields a record lacks are omitted rather than defaulted. The result has
/// the same number of records, in the same order, and each record keeps its
/// own field order.
#[must_use]
pub fn project<S: AsRef<str>>(table: &Table, keys: &[S]) -> Table {
    tracing::trace!(rows = table.len(), keys = keys.len(), "project");
    table.iter().map(|record| record.pick(keys)).collect()
}

/// Pulls a single field out of every record.
///
/// Records without the field contribute `Nil`, so the result lines up with
/// the table row for row.
#[must_use]
pub fn pluck(table: &Table, key: &str) -> Seq<Value> {
    table
        .iter()
        .map(|record| record.get(key).cloned().unwrap_or(Value::Nil))
        .collect()
}
