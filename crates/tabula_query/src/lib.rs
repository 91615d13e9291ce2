//! Relational-style operations over in-memory tables.
//!
//! A [`Table`] is an ordered sequence of schema-less [`Record`]s. The
//! operations here each take a table (or record) by reference and return a
//! newly built one, so they chain without shared state:
//!
//! ```
//! use tabula_foundation::{record, Renames, Table, Value};
//! use tabula_query::{as_, project, restrict};
//!
//! let library: Table = [
//!     record! { "title" => "SICP", "isbn" => "0262010771", "ed" => 1 },
//!     record! { "title" => "SICP", "isbn" => "0262510871", "ed" => 2 },
//! ]
//! .into();
//!
//! let renamed = as_(&library, &Renames::new().with("ed", "edition"));
//! let later = restrict(&project(&renamed, &["title", "edition"]), |book| {
//!     book.get("edition") > Some(&Value::Int(1))
//! });
//! assert_eq!(later.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ext;
pub mod project;
pub mod rename;
pub mod restrict;

pub use ext::TableExt;
pub use project::{pluck, project};
pub use rename::{as_, rename};
pub use restrict::restrict;

pub use tabula_foundation::{Record, Renames, Table};
