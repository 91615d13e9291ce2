//! Integration tests for Layer 2: Query
//!
//! Tests for project, rename, as, restrict, and their algebraic properties.
