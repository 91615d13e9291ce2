//! Schema-less records and rename maps.
//!
//! A [`Record`] is one row of a table: an insertion-ordered mapping from
//! field name to [`Value`]. Order is visible when iterating or displaying a
//! record, but two records with the same fields and values are equal
//! regardless of field order.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Field name type.
pub type FieldName = Arc<str>;

/// Insertion-ordered mapping from field name to value.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Record {
    fields: IndexMap<FieldName, Value>,
}

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Gets a field value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Returns true if the record has the named field.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Sets a field, returning the previous value.
    ///
    /// Replacing an existing field keeps its position; a new field goes last.
    pub fn insert(&mut self, name: impl Into<FieldName>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(name.into(), value.into())
    }

    /// Removes a field, keeping the order of the remaining fields.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.fields.shift_remove(name)
    }

    /// Builder method to set a field.
    #[must_use]
    pub fn with(mut self, name: impl Into<FieldName>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Returns a new record holding only the named fields that exist here.
    ///
    /// Fields keep this record's order.
    #[must_use]
    pub fn pick<S: AsRef<str>>(&self, names: &[S]) -> Self {
        self.fields
            .iter()
            .filter(|(name, _)| named(names, name))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    /// Returns a new record without the named fields.
    #[must_use]
    pub fn omit<S: AsRef<str>>(&self, names: &[S]) -> Self {
        self.fields
            .iter()
            .filter(|(name, _)| !named(names, name))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    /// Returns an iterator over field names in order.
    pub fn keys(&self) -> impl Iterator<Item = &FieldName> {
        self.fields.keys()
    }

    /// Returns an iterator over `(name, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldName, &Value)> {
        self.fields.iter()
    }
}

fn named<S: AsRef<str>>(names: &[S], name: &str) -> bool {
    names.iter().any(|n| n.as_ref() == name)
}

impl<K: Into<FieldName>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.fields.iter()).finish()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}: {value}")?;
        }
        write!(f, "}}")
    }
}

/// Builds a [`Record`] from `name => value` pairs, in order.
///
/// ```
/// use tabula_foundation::{record, Value};
///
/// let book = record! { "title" => "SICP", "ed" => 1 };
/// assert_eq!(book.get("ed"), Some(&Value::Int(1)));
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::Record::new()
    };
    ($($name:expr => $value:expr),+ $(,)?) => {
        $crate::Record::new()$(.with($name, $value))+
    };
}

/// Ordered mapping from existing field name to new field name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Renames {
    pairs: IndexMap<FieldName, FieldName>,
}

impl Renames {
    /// Creates an empty rename map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to add an `old -> new` pair.
    #[must_use]
    pub fn with(mut self, old: impl Into<FieldName>, new: impl Into<FieldName>) -> Self {
        self.pairs.insert(old.into(), new.into());
        self
    }

    /// Returns the number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if there are no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns the new name for `old`, if it is renamed.
    #[must_use]
    pub fn get(&self, old: &str) -> Option<&FieldName> {
        self.pairs.get(old)
    }

    /// Returns the old names in order.
    pub fn old_names(&self) -> impl Iterator<Item = &FieldName> {
        self.pairs.keys()
    }

    /// Returns an iterator over `(old, new)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldName, &FieldName)> {
        self.pairs.iter()
    }
}

impl<K: Into<FieldName>, V: Into<FieldName>> FromIterator<(K, V)> for Renames {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
