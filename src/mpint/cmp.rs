use core::cmp::Ordering;

use super::{MpInt, Sign};
use crate::digits;

impl PartialEq for MpInt {
    fn eq(&self, other: &MpInt) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MpInt {}

impl PartialOrd for MpInt {
    fn partial_cmp(&self, other: &MpInt) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MpInt {
    /// Sign decides first; equal signs compare magnitudes, flipped when
    /// both are negative. Width caps never participate, so equal values of
    /// different widths are equal.
    fn cmp(&self, other: &MpInt) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Plus, Sign::Minus) => Ordering::Greater,
            (Sign::Minus, Sign::Plus) => Ordering::Less,
            (Sign::Plus, Sign::Plus) => digits::cmp(&self.digits, &other.digits),
            (Sign::Minus, Sign::Minus) => digits::cmp(&other.digits, &self.digits),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::mpint::MpInt;
    use crate::width::Width;

    fn n(literal: &str) -> MpInt {
        MpInt::parse_with_width(literal, Width::Unlimited).unwrap()
    }

    #[test]
    fn test_sign_dominates() {
        assert!(n("1") > n("-1000000000000000000000"));
        assert!(n("-1") < n("0"));
        assert!(n("0") < n("1"));
    }

    #[test]
    fn test_negative_order_is_reversed() {
        assert!(n("-5") < n("-3"));
        assert!(n("-3") > n("-5"));
        assert!(n("-1000000000") < n("-999999999"));
    }

    #[test]
    fn test_magnitude_order_spans_limb_boundaries() {
        assert!(n("999999999") < n("1000000000"));
        assert!(n("123456789012345678") > n("99999999999999999"));
        assert_eq!(n("42"), n("42"));
    }

    #[test]
    fn test_width_does_not_affect_equality() {
        let narrow = MpInt::parse_with_width("42", Width::Fixed(2)).unwrap();
        let wide = MpInt::parse_with_width("42", Width::Fixed(30)).unwrap();
        assert_eq!(narrow, wide);
        assert_eq!(narrow, n("42"));
    }

    #[test]
    fn test_sorting_mixed_signs() {
        let mut values = vec![n("3"), n("-7"), n("0"), n("12"), n("-2")];
        values.sort();
        let rendered: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        assert_eq!(rendered, ["-7", "-2", "0", "3", "12"]);
    }
}
