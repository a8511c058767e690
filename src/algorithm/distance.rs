//! Arithmetic and ordering over optional distances.
//!
//! `None` stands for an infinite distance (no edge, or not reached yet). It
//! compares greater than every finite value and equal to itself, and it
//! absorbs addition.

use std::cmp::Ordering;

use crate::graph::Weight;

/// Total order over optional distances with `None` as positive infinity.
///
/// Incomparable finite values (NaN) are treated as equal.
pub fn compare<W: Weight>(x: &Option<W>, y: &Option<W>) -> Ordering {
    match (x, y) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
    }
}

/// The sum of two finite distances does not fit in the weight type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overflow;

/// Sum of two distances, `None` if either is infinite
pub fn add<W: Weight>(x: Option<W>, y: Option<W>) -> Result<Option<W>, Overflow> {
    match (x, y) {
        (Some(a), Some(b)) => a.checked_sum(b).map(Some).ok_or(Overflow),
        _ => Ok(None),
    }
}

/// True if `candidate` is strictly shorter than `current`
pub fn is_shorter<W: Weight>(candidate: &Option<W>, current: &Option<W>) -> bool {
    compare(candidate, current) == Ordering::Less
}
