//! Schoolbook arithmetic on unsigned base-10^9 digit vectors.
//!
//! A number is a `Vec<u32>` of digits in `[0, BASE)`, least significant
//! first. Canonical form carries no trailing zero digits; the single-element
//! vector `[0]` is zero. Every function here takes canonical inputs and
//! returns canonical outputs. Signs and width caps are the caller's concern.

mod add;
mod cmp;
mod div;
mod mul;
mod sub;

pub use add::add;
pub use cmp::cmp;
pub use div::{div_big, div_small};
pub use mul::mul;
pub use sub::sub;

/// The digit base, the largest power of ten whose square fits a `u64`.
pub const BASE: u64 = 1_000_000_000;

/// Decimal digits packed into one base-10^9 digit.
pub const BASE_DIGITS: usize = 9;

/// Drops trailing (most significant) zero digits down to a minimum length
/// of one, restoring canonical form.
pub fn trim(digits: &mut Vec<u32>) {
    while digits.len() > 1 && digits[digits.len() - 1] == 0 {
        digits.pop();
    }
}

/// Whether a canonical digit vector is zero.
pub fn is_zero(digits: &[u32]) -> bool {
    digits == [0]
}

/// Exact count of decimal digits in a canonical vector; zero counts as one.
pub fn decimal_len(digits: &[u32]) -> u64 {
    let top = match digits.last() {
        Some(&top) => top,
        None => return 0,
    };
    let top_len = if top == 0 { 1 } else { u64::from(top.ilog10()) + 1 };
    (digits.len() as u64 - 1) * BASE_DIGITS as u64 + top_len
}
