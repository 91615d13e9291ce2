//! Absence and truthiness checks.
//!
//! A missing lookup (`None`) and an explicit `Value::Nil` are the same
//! absent state. These are the guards to use for optional values instead of
//! testing for zero or emptiness, which would treat `0` and `""` as absent.

use tabula_foundation::Value;

/// Returns false exactly when `x` is absent.
///
/// `0`, `false` and `""` all exist.
#[must_use]
pub fn existy(x: Option<&Value>) -> bool {
    x.is_some_and(Value::is_existy)
}

/// Returns false when `x` is absent or `false`; true otherwise.
///
/// `0` and `""` are truthy.
#[must_use]
pub fn truthy(x: Option<&Value>) -> bool {
    x.is_some_and(Value::is_truthy)
}
