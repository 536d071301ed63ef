//! Signed integers of configurable decimal width over the digit kernel.

mod add;
mod cmp;
mod convert;
mod div;
mod mul;
mod sub;

use crate::digits;
use crate::error::Error;
use crate::width::Width;

/// Sign of an [`MpInt`]. Zero always carries [`Sign::Plus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Plus,
    Minus,
}

impl Sign {
    /// Sign of a product or quotient of operands with these signs.
    pub fn product(self, other: Sign) -> Sign {
        if self == other {
            Sign::Plus
        } else {
            Sign::Minus
        }
    }

    pub fn flip(self) -> Sign {
        match self {
            Sign::Plus => Sign::Minus,
            Sign::Minus => Sign::Plus,
        }
    }
}

/// A signed integer capped at a per-instance number of decimal digits.
///
/// The magnitude is a canonical little-endian base-10^9 digit vector. Each
/// value owns its digits outright and carries the [`Width`] it was
/// constructed under; results of arithmetic are bound by the wider of the
/// operand widths, while compound assignment re-checks against the
/// receiver's own width.
///
/// The `checked_*` methods return [`Error`] on overflow, division by zero
/// and the like; the operator forms panic with the same message.
#[derive(Debug, Clone)]
pub struct MpInt {
    digits: Vec<u32>,
    sign: Sign,
    width: Width,
}

impl MpInt {
    /// Zero at unlimited width.
    pub fn zero() -> MpInt {
        MpInt {
            digits: vec![0],
            sign: Sign::Plus,
            width: Width::Unlimited,
        }
    }

    /// One at unlimited width.
    pub fn one() -> MpInt {
        MpInt {
            digits: vec![1],
            sign: Sign::Plus,
            width: Width::Unlimited,
        }
    }

    /// Parses a decimal literal under the given width cap.
    ///
    /// The literal is an optional leading `-` followed by one or more ASCII
    /// digits; anything else is [`Error::Format`]. Leading zeros are
    /// dropped and `"-0"` collapses to plain zero.
    pub fn parse_with_width(literal: &str, width: Width) -> Result<MpInt, Error> {
        let (sign, body) = match literal.strip_prefix('-') {
            Some(rest) => (Sign::Minus, rest),
            None => (Sign::Plus, literal),
        };
        if body.is_empty() || !body.bytes().all(|c| c.is_ascii_digit()) {
            return Err(Error::Format(literal.to_string()));
        }
        let body = match body.trim_start_matches('0') {
            "" => "0",
            rest => rest,
        };

        // Pack decimal characters into base-10^9 digits, nine at a time
        // from the low end.
        let bytes = body.as_bytes();
        let mut digits = Vec::with_capacity(bytes.len() / digits::BASE_DIGITS + 1);
        let mut end = bytes.len();
        while end > 0 {
            let start = end.saturating_sub(digits::BASE_DIGITS);
            let mut chunk = 0u32;
            for &c in &bytes[start..end] {
                chunk = chunk * 10 + u32::from(c - b'0');
            }
            digits.push(chunk);
            end = start;
        }
        MpInt::from_parts(digits, sign, width)
    }

    /// Assembles a value from raw digits and a sign: trims to canonical
    /// form, collapses negative zero, and enforces the width cap.
    ///
    /// Every constructor and arithmetic result funnels through here.
    pub(crate) fn from_parts(
        mut digits: Vec<u32>,
        sign: Sign,
        width: Width,
    ) -> Result<MpInt, Error> {
        digits::trim(&mut digits);
        let sign = if digits::is_zero(&digits) {
            Sign::Plus
        } else {
            sign
        };
        let value = MpInt {
            digits,
            sign,
            width,
        };
        value.check_width()?;
        Ok(value)
    }

    fn check_width(&self) -> Result<(), Error> {
        if let Width::Fixed(limit) = self.width {
            if !self.width.admits(digits::decimal_len(&self.digits)) {
                return Err(Error::Overflow {
                    value: self.to_string(),
                    limit,
                });
            }
        }
        Ok(())
    }

    /// Re-binds the value to a new width cap, re-checking the magnitude.
    pub fn with_width(mut self, width: Width) -> Result<MpInt, Error> {
        self.width = width;
        self.check_width()?;
        Ok(self)
    }

    /// The width cap this value is bound to.
    pub fn width(&self) -> Width {
        self.width
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn is_zero(&self) -> bool {
        digits::is_zero(&self.digits)
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Minus
    }

    /// Decimal digits in the magnitude; zero counts as one.
    pub fn digit_count(&self) -> u64 {
        digits::decimal_len(&self.digits)
    }

    /// The value with its sign flipped; zero is untouched so it never goes
    /// negative.
    pub(crate) fn negated(mut self) -> MpInt {
        if !self.is_zero() {
            self.sign = self.sign.flip();
        }
        self
    }

    /// Replaces digits and sign from `result` after re-checking it against
    /// this instance's own width. On error the receiver is untouched.
    pub(crate) fn assign_checked(&mut self, result: MpInt) -> Result<(), Error> {
        let rebound = result.with_width(self.width)?;
        self.digits = rebound.digits;
        self.sign = rebound.sign;
        Ok(())
    }
}

/// Funnel for the panicking operator forms.
fn expect_op(result: Result<MpInt, Error>) -> MpInt {
    match result {
        Ok(value) => value,
        Err(err) => panic!("{err}"),
    }
}
