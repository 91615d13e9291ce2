//! Method-call syntax for chaining table operations.

use tabula_foundation::{Record, Renames, Seq, Table, Value};

use crate::{as_, pluck, project, restrict};

/// Chainable forms of the table operations.
///
/// Each method delegates to the free function of the same name, so
/// `table.as_(&renames).project(&keys).restrict(pred)` reads in the order the
/// steps run.
pub trait TableExt {
    /// See [`project()`](crate::project()).
    #[must_use]
    fn project<S: AsRef<str>>(&self, keys: &[S]) -> Table;

    /// See [`as_()`](crate::as_()).
    #[must_use]
    fn as_(&self, renames: &Renames) -> Table;

    /// See [`restrict()`](crate::restrict()).
    #[must_use]
    fn restrict<P, R>(&self, pred: P) -> Table
    where
        P: Fn(&Record) -> R,
        R: Into<Value>;

    /// See [`pluck()`](crate::pluck()).
    #[must_use]
    fn pluck(&self, key: &str) -> Seq<Value>;
}

impl TableExt for Table {
    fn project<S: AsRef<str>>(&self, keys: &[S]) -> Table {
        project(self, keys)
    }

    fn as_(&self, renames: &Renames) -> Table {
        as_(self, renames)
    }

    fn restrict<P, R>(&self, pred: P) -> Table
    where
        P: Fn(&Record) -> R,
        R: Into<Value>,
    {
        restrict(self, pred)
    }

    fn pluck(&self, key: &str) -> Seq<Value> {
        pluck(self, key)
    }
}
