//! Tabula - functional combinators and an in-memory relational toolkit
//!
//! This crate re-exports all layers of the Tabula system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: tabula_query        — project, rename, as, restrict over tables
//! Layer 1: tabula_combinators  — existence, ordering, list and predicate helpers
//! Layer 0: tabula_foundation   — Core types (Value, Record, Seq, Error)
//! ```

pub use tabula_combinators as combinators;
pub use tabula_foundation as foundation;
pub use tabula_query as query;
