//! Integration tests for Layer 1: Combinators
//!
//! Tests for existence predicates, ordering, indexing, column selection, and list
//! combinators.

mod columns;
mod indexing;
mod predicates;
