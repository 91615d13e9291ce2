//! Core values, records, and persistent sequences for Tabula.
//!
//! This crate provides:
//! - [`Value`] - The schema-less value type stored in records
//! - [`Record`] - An insertion-ordered mapping from field name to value
//! - [`Seq`] - A persistent sequence, and [`Table`] as a sequence of records
//! - [`Type`] - Value kind descriptors used in diagnostics
//! - [`Error`] - Error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod record;
pub mod types;
pub mod value;

pub use collections::Seq;
pub use error::{Error, ErrorContext, ErrorKind};
pub use record::{FieldName, Record, Renames};
pub use types::Type;
pub use value::Value;

/// Result type alias using Tabula's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// An ordered sequence of records.
pub type Table = Seq<Record>;
