use core::fmt;
use core::str::FromStr;

use num_traits::{FromPrimitive, One, ToPrimitive, Zero};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{MpInt, Sign};
use crate::digits;
use crate::error::Error;
use crate::width::Width;

impl fmt::Display for MpInt {
    /// Decimal rendering: optional `-`, the top limb unpadded, every lower
    /// limb zero-padded to nine digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign == Sign::Minus {
            write!(f, "-")?;
        }
        let mut limbs = self.digits.iter().rev();
        if let Some(top) = limbs.next() {
            write!(f, "{top}")?;
        }
        for limb in limbs {
            write!(f, "{limb:09}")?;
        }
        Ok(())
    }
}

impl FromStr for MpInt {
    type Err = Error;

    /// Parses at unlimited width; use [`MpInt::parse_with_width`] to bind a
    /// cap.
    fn from_str(literal: &str) -> Result<MpInt, Error> {
        MpInt::parse_with_width(literal, Width::Unlimited)
    }
}

impl From<u64> for MpInt {
    fn from(value: u64) -> MpInt {
        let mut digits = Vec::new();
        let mut rest = value;
        loop {
            digits.push((rest % digits::BASE) as u32);
            rest /= digits::BASE;
            if rest == 0 {
                break;
            }
        }
        MpInt {
            digits,
            sign: Sign::Plus,
            width: Width::Unlimited,
        }
    }
}

impl From<i64> for MpInt {
    fn from(value: i64) -> MpInt {
        let mut out = MpInt::from(value.unsigned_abs());
        if value < 0 {
            out.sign = Sign::Minus;
        }
        out
    }
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for MpInt {
            fn from(value: $t) -> MpInt {
                MpInt::from(u64::from(value))
            }
        }
    )*};
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for MpInt {
            fn from(value: $t) -> MpInt {
                MpInt::from(i64::from(value))
            }
        }
    )*};
}

impl_from_unsigned!(u8, u16, u32);
impl_from_signed!(i8, i16, i32);

impl MpInt {
    /// Narrowing conversion; `None` when the value is negative or does not
    /// fit.
    pub fn to_u64(&self) -> Option<u64> {
        if self.sign == Sign::Minus {
            return None;
        }
        self.magnitude_u64()
    }

    /// Narrowing conversion; `None` when the value is outside `i64`.
    pub fn to_i64(&self) -> Option<i64> {
        let magnitude = self.magnitude_u64()?;
        match self.sign {
            Sign::Plus => i64::try_from(magnitude).ok(),
            Sign::Minus => {
                if magnitude <= i64::MAX as u64 + 1 {
                    Some((magnitude as i64).wrapping_neg())
                } else {
                    None
                }
            }
        }
    }

    fn magnitude_u64(&self) -> Option<u64> {
        let mut acc = 0u64;
        for &limb in self.digits.iter().rev() {
            acc = acc
                .checked_mul(digits::BASE)?
                .checked_add(u64::from(limb))?;
        }
        Some(acc)
    }
}

impl Zero for MpInt {
    fn zero() -> MpInt {
        MpInt::zero()
    }

    fn is_zero(&self) -> bool {
        MpInt::is_zero(self)
    }
}

impl One for MpInt {
    fn one() -> MpInt {
        MpInt::one()
    }
}

impl ToPrimitive for MpInt {
    fn to_i64(&self) -> Option<i64> {
        MpInt::to_i64(self)
    }

    fn to_u64(&self) -> Option<u64> {
        MpInt::to_u64(self)
    }
}

impl FromPrimitive for MpInt {
    fn from_i64(value: i64) -> Option<MpInt> {
        Some(MpInt::from(value))
    }

    fn from_u64(value: u64) -> Option<MpInt> {
        Some(MpInt::from(value))
    }
}

impl Serialize for MpInt {
    /// Serializes as the decimal string form; width caps do not survive the
    /// trip and deserialized values come back unlimited.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MpInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<MpInt, D::Error> {
        let literal = String::deserialize(deserializer)?;
        literal.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use num_traits::{One, Zero};

    use crate::mpint::MpInt;
    use crate::width::Width;

    fn n(literal: &str) -> MpInt {
        literal.parse().unwrap()
    }

    #[test]
    fn test_display_pads_interior_limbs() {
        assert_eq!(n("0").to_string(), "0");
        assert_eq!(n("-1").to_string(), "-1");
        // A limb of value 5 below the top must render as 000000005.
        assert_eq!(n("1000000005").to_string(), "1000000005");
        assert_eq!(n("3000000000000000021").to_string(), "3000000000000000021");
    }

    #[test]
    fn test_display_round_trips_parse() {
        for literal in [
            "0",
            "7",
            "-7",
            "999999999",
            "1000000000",
            "-123456789012345678901234567890",
        ] {
            assert_eq!(n(literal).to_string(), literal);
        }
    }

    #[test]
    fn test_from_machine_integers() {
        assert_eq!(MpInt::from(0u64).to_string(), "0");
        assert_eq!(MpInt::from(u64::MAX).to_string(), "18446744073709551615");
        assert_eq!(MpInt::from(i64::MIN).to_string(), "-9223372036854775808");
        assert_eq!(MpInt::from(-1i32).to_string(), "-1");
        assert_eq!(MpInt::from(255u8).to_string(), "255");
    }

    #[test]
    fn test_narrowing_to_u64() {
        assert_eq!(n("18446744073709551615").to_u64(), Some(u64::MAX));
        assert_eq!(n("18446744073709551616").to_u64(), None);
        assert_eq!(n("-1").to_u64(), None);
        assert_eq!(n("0").to_u64(), Some(0));
    }

    #[test]
    fn test_narrowing_to_i64() {
        assert_eq!(n("9223372036854775807").to_i64(), Some(i64::MAX));
        assert_eq!(n("9223372036854775808").to_i64(), None);
        assert_eq!(n("-9223372036854775808").to_i64(), Some(i64::MIN));
        assert_eq!(n("-9223372036854775809").to_i64(), None);
        assert_eq!(n("-42").to_i64(), Some(-42));
    }

    #[test]
    fn test_zero_and_one_traits() {
        assert!(<MpInt as Zero>::zero().is_zero());
        assert_eq!(<MpInt as One>::one().to_string(), "1");
        assert_eq!(n("12").to_u64(), Some(12));
    }

    #[test]
    fn test_serde_round_trips_the_decimal_string() {
        let value = MpInt::parse_with_width("-12345678901234567890", Width::Fixed(25)).unwrap();
        let encoded = serde_json::to_string(&value).unwrap();
        assert_eq!(encoded, "\"-12345678901234567890\"");

        let decoded: MpInt = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, value);
        assert_eq!(decoded.width(), Width::Unlimited);
    }

    #[test]
    fn test_serde_rejects_malformed_literals() {
        assert!(serde_json::from_str::<MpInt>("\"12a\"").is_err());
        assert!(serde_json::from_str::<MpInt>("\"\"").is_err());
    }
}
