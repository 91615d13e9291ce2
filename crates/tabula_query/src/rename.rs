//! Field relabelling for single records and whole tables.

use tabula_foundation::{Record, Renames, Table};

/// Relabels the fields of `record` named in `renames`.
///
/// Every old name that appears as a key in `renames` is stripped first.
/// Then, for each `old -> new` pair in order whose `old` field exists on the
/// input, `new` is set to that field's original value. Pairs naming a
/// missing field are ignored, and fields not mentioned pass through. A new
/// name that matches a pass-through field overwrites it in place.
#[must_use]
pub fn rename(record: &Record, renames: &Renames) -> Record {
    let old_names: Vec<&str> = renames.old_names().map(AsRef::as_ref).collect();
    let mut renamed = record.omit(&old_names);
    for (old, new) in renames.iter() {
        if let Some(value) = record.get(old) {
            renamed.insert(new.clone(), value.clone());
        }
    }
    renamed
}

/// Applies [`rename`] to every record of `table`.
///
/// Named `as_` because `as` is reserved in Rust.
#[must_use]
pub fn as_(table: &Table, renames: &Renames) -> Table {
    tracing::trace!(rows = table.len(), renames = renames.len(), "as");
    table.iter().map(|record| rename(record, renames)).collect()
}
