use core::cmp::Ordering;
use std::ops::{Div, DivAssign, Rem, RemAssign};

use super::{expect_op, MpInt, Sign};
use crate::digits;
use crate::error::Error;

impl MpInt {
    /// Truncating division under the combined width.
    ///
    /// The quotient rounds toward zero and its sign is the product of the
    /// operand signs. A smaller dividend magnitude yields plain zero, equal
    /// magnitudes yield a signed one, and unit divisors skip the kernel;
    /// everything else dispatches on the divisor's limb count.
    pub fn checked_div(&self, rhs: &MpInt) -> Result<MpInt, Error> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }
        let width = self.width.combine(rhs.width);
        let sign = self.sign.product(rhs.sign);
        match digits::cmp(&self.digits, &rhs.digits) {
            Ordering::Less => MpInt::from_parts(vec![0], Sign::Plus, width),
            Ordering::Equal => MpInt::from_parts(vec![1], sign, width),
            Ordering::Greater => {
                if rhs.digits == [1] {
                    return MpInt::from_parts(self.digits.clone(), sign, width);
                }
                let quotient = if rhs.digits.len() == 1 {
                    digits::div_small(&self.digits, rhs.digits[0])
                } else {
                    digits::div_big(&self.digits, &rhs.digits)
                };
                MpInt::from_parts(quotient, sign, width)
            }
        }
    }

    /// Remainder of truncating division: `a - (a / b) * b`, so the result
    /// keeps the dividend's sign and `|a % b| < |b|`.
    pub fn checked_rem(&self, rhs: &MpInt) -> Result<MpInt, Error> {
        if rhs.is_zero() {
            return Err(Error::DivisionByZero);
        }
        // A smaller magnitude is its own remainder regardless of signs.
        if digits::cmp(&self.digits, &rhs.digits) == Ordering::Less {
            return self.clone().with_width(self.width.combine(rhs.width));
        }
        let quotient = self.checked_div(rhs)?;
        let product = quotient.checked_mul(rhs)?;
        self.checked_sub(&product)
    }
}

impl Div for MpInt {
    type Output = MpInt;

    fn div(self, rhs: MpInt) -> MpInt {
        &self / &rhs
    }
}

impl Div<&MpInt> for &MpInt {
    type Output = MpInt;

    /// # Panics
    ///
    /// Panics when the divisor is zero.
    fn div(self, rhs: &MpInt) -> MpInt {
        expect_op(self.checked_div(rhs))
    }
}

impl DivAssign<&MpInt> for MpInt {
    fn div_assign(&mut self, rhs: &MpInt) {
        let quotient = expect_op(self.checked_div(rhs));
        if let Err(err) = self.assign_checked(quotient) {
            panic!("{err}");
        }
    }
}

impl DivAssign for MpInt {
    fn div_assign(&mut self, rhs: MpInt) {
        *self /= &rhs;
    }
}

impl Rem for MpInt {
    type Output = MpInt;

    fn rem(self, rhs: MpInt) -> MpInt {
        &self % &rhs
    }
}

impl Rem<&MpInt> for &MpInt {
    type Output = MpInt;

    /// # Panics
    ///
    /// Panics when the divisor is zero.
    fn rem(self, rhs: &MpInt) -> MpInt {
        expect_op(self.checked_rem(rhs))
    }
}

impl RemAssign<&MpInt> for MpInt {
    fn rem_assign(&mut self, rhs: &MpInt) {
        let remainder = expect_op(self.checked_rem(rhs));
        if let Err(err) = self.assign_checked(remainder) {
            panic!("{err}");
        }
    }
}

impl RemAssign for MpInt {
    fn rem_assign(&mut self, rhs: MpInt) {
        *self %= &rhs;
    }
}
