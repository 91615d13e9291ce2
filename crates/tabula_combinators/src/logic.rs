//! Predicate combinators.

/// Returns a predicate that negates `pred`.
pub fn complement<A, P>(pred: P) -> impl Fn(&A) -> bool
where
    A: ?Sized,
    P: Fn(&A) -> bool,
{
    move |x| !pred(x)
}

/// Logical AND over zero-argument predicates, folded right to left.
///
/// Every predicate is called, even after the result is decided. No
/// predicates gives `true`.
#[must_use]
pub fn all_of(preds: &[&dyn Fn() -> bool]) -> bool {
    preds.iter().rev().fold(true, |truth, f| f() && truth)
}

/// Logical OR over zero-argument predicates, folded right to left.
///
/// Every predicate is called. No predicates gives `false`.
#[must_use]
pub fn any_of(preds: &[&dyn Fn() -> bool]) -> bool {
    preds.iter().rev().fold(false, |truth, f| f() || truth)
}

/// Always true.
#[must_use]
pub const fn always_true() -> bool {
    true
}

/// Always false.
#[must_use]
pub const fn always_false() -> bool {
    false
}
