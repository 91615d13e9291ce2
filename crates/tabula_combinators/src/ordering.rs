//! Three-way comparison built from less-than predicates.

use std::cmp::Ordering;

use tabula_foundation::Value;

/// Turns a strict less-than predicate into a three-way comparison.
///
/// The result is `Less` when `pred(x, y)` holds, `Greater` when `pred(y, x)`
/// holds, and `Equal` otherwise (equal or incomparable). It can be passed
/// straight to `sort_by`.
///
/// `pred` must be a strict weak ordering for the resulting sort order to be
/// meaningful; with any other predicate the comparison still returns one of
/// the three orderings but the sorted order is unspecified.
pub fn comparator<T, P>(pred: P) -> impl Fn(&T, &T) -> Ordering
where
    T: ?Sized,
    P: Fn(&T, &T) -> bool,
{
    move |x, y| {
        if pred(x, y) {
            Ordering::Less
        } else if pred(y, x) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// Maps an ordering onto `-1`, `0`, `1`.
#[must_use]
pub const fn three_way(ordering: Ordering) -> i8 {
    match ordering {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

/// Strict less-than over values; incomparable pairs are never less.
#[must_use]
pub fn less_than(x: &Value, y: &Value) -> bool {
    x < y
}

/// Less-than-or-equal over values.
///
/// Not a strict ordering: `comparator(less_or_equal)` reports `Less` for
/// equal elements.
#[must_use]
pub fn less_or_equal(x: &Value, y: &Value) -> bool {
    x <= y
}
