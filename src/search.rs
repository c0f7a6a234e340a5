//! Linear search over decoded records.
//!
//! A single forward pass with early exit. The input need not be sorted and
//! no index is built; the first structurally equal element wins.

/// Return the first element equal to `target`, or `None`.
pub fn find<'a, T: PartialEq>(records: &'a [T], target: &T) -> Option<&'a T> {
    records.iter().find(|record| *record == target)
}

/// Return the index of the first element equal to `target`, or `None`.
pub fn position<T: PartialEq>(records: &[T], target: &T) -> Option<usize> {
    records.iter().position(|record| record == target)
}
