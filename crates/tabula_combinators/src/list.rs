//! Sequence combinators.
//!
//! All of these build a new [`Seq`]; their inputs are left untouched.

use tabula_foundation::Seq;

/// Concatenates sequences in order.
///
/// No sequences gives an empty sequence.
#[must_use]
pub fn cat<T: Clone>(seqs: &[Seq<T>]) -> Seq<T> {
    seqs.iter().fold(Seq::new(), |acc, seq| acc.concat(seq))
}

/// Returns `head` followed by every element of `tail`.
#[must_use]
pub fn construct<T: Clone>(head: T, tail: &Seq<T>) -> Seq<T> {
    tail.push_front(head)
}

/// Maps every element to a sequence and concatenates the results in order.
pub fn mapcat<T, U, F>(f: F, coll: &Seq<T>) -> Seq<U>
where
    T: Clone,
    U: Clone,
    F: FnMut(&T) -> Seq<U>,
{
    let parts: Vec<Seq<U>> = coll.iter().map(f).collect();
    cat(&parts)
}

/// Returns every element but the last. Empty stays empty.
#[must_use]
pub fn but_last<T: Clone>(coll: &Seq<T>) -> Seq<T> {
    coll.pop_back().map(|(rest, _)| rest).unwrap_or_default()
}

/// Places `delimiter` between each pair of adjacent elements.
///
/// Nothing is added before the first element or after the last.
#[must_use]
pub fn interpose<T: Clone>(delimiter: T, coll: &Seq<T>) -> Seq<T> {
    let trailing = Seq::unit(delimiter);
    but_last(&mapcat(|e| construct(e.clone(), &trailing), coll))
}
