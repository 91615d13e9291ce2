//! Existence predicates, ordering helpers, and list combinators for Tabula.
//!
//! This crate provides:
//! - [`existy`] / [`truthy`] - Absence and truthiness checks
//! - [`comparator`] - Three-way comparison from a less-than predicate
//! - [`nth`], [`second`], [`last`] - Checked positional access
//! - [`cat`], [`construct`], [`mapcat`], [`interpose`] - Sequence combinators
//! - [`select_column`], [`merge_results`] - Column selection over row-array tables
//! - [`complement`], [`all_of`], [`any_of`] - Predicate combinators
//! - [`Diagnostics`] - `warn` / `note` / `fail` helpers over `tracing`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod columns;
pub mod diagnostics;
pub mod existence;
pub mod index;
pub mod list;
pub mod logic;
pub mod ordering;

pub use columns::{merge_results, select_column, select_column_with};
pub use diagnostics::{Diagnostics, DiagnosticsConfig, fail, note, warn};
pub use existence::{existy, truthy};
pub use index::{is_indexed, last, nth, second};
pub use list::{but_last, cat, construct, interpose, mapcat};
pub use logic::{all_of, always_false, always_true, any_of, complement};
pub use ordering::{comparator, less_or_equal, less_than, three_way};
