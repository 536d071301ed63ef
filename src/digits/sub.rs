use core::cmp::Ordering;

use super::{trim, BASE};

/// Ripple subtraction `a - b`.
///
/// The minuend must be at least as large as the subtrahend; when it is not,
/// the returned digits are unspecified. Signed borrow arithmetic keeps the
/// loop well-defined either way.
pub fn sub(a: &[u32], b: &[u32]) -> Vec<u32> {
    debug_assert!(super::cmp(a, b) != Ordering::Less);
    let mut out = Vec::with_capacity(a.len());
    let mut borrow = 0i64;
    for i in 0..a.len() {
        let mut diff =
            i64::from(a[i]) - i64::from(b.get(i).copied().unwrap_or(0)) - borrow;
        borrow = i64::from(diff < 0);
        diff += borrow * BASE as i64;
        out.push(diff as u32);
    }
    trim(&mut out);
    out
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_subtracts_without_borrow() {
        assert_eq!(sub(&[5], &[3]), vec![2]);
        assert_eq!(sub(&[9, 8], &[4, 3]), vec![5, 5]);
        assert_eq!(sub(&[7], &[7]), vec![0]);
    }

    #[test]
    fn test_borrow_ripples_through_zero_digits() {
        // 1_000_000_000 - 1 = 999_999_999
        assert_eq!(sub(&[0, 1], &[1]), vec![999_999_999]);
        // 10^18 - 1 = 18 nines
        assert_eq!(sub(&[0, 0, 1], &[1]), vec![999_999_999, 999_999_999]);
        assert_eq!(sub(&[3, 0, 2], &[4]), vec![999_999_999, 999_999_999, 1]);
    }

    #[test]
    fn test_result_is_trimmed() {
        // 1_000_000_005 - 1_000_000_000 leaves a single digit.
        assert_eq!(sub(&[5, 1], &[0, 1]), vec![5]);
        assert_eq!(sub(&[0, 2], &[0, 1]), vec![0, 1]);
        assert_eq!(sub(&[1, 1, 1], &[0, 1, 1]), vec![1]);
    }

    #[test]
    fn test_subtracting_zero_is_identity() {
        assert_eq!(sub(&[123, 456], &[0]), vec![123, 456]);
        assert_eq!(sub(&[0], &[0]), vec![0]);
    }
}
