use core::cmp::Ordering;

/// Magnitude comparison of two canonical digit vectors.
///
/// Canonical form makes length the first key; equal lengths compare digit
/// by digit from the most significant end.
pub fn cmp(a: &[u32], b: &[u32]) -> Ordering {
    match a.len().cmp(&b.len()) {
        Ordering::Equal => a.iter().rev().cmp(b.iter().rev()),
        unequal => unequal,
    }
}
