use core::cmp::Ordering;
use std::ops::{Neg, Sub, SubAssign};

use super::{expect_op, MpInt, Sign};
use crate::digits;
use crate::error::Error;

impl MpInt {
    /// Difference of two values under their combined width.
    ///
    /// Zero operands short-circuit and equal magnitudes collapse to plain
    /// zero. Same signs subtract the smaller magnitude from the larger,
    /// flipping the sign when the order swaps; differing signs reduce to
    /// addition of the negated right side.
    pub fn checked_sub(&self, rhs: &MpInt) -> Result<MpInt, Error> {
        let width = self.width.combine(rhs.width);
        if rhs.is_zero() {
            return self.clone().with_width(width);
        }
        if self.is_zero() {
            return rhs.clone().negated().with_width(width);
        }
        if self.sign != rhs.sign {
            return self.checked_add(&rhs.clone().negated());
        }
        match digits::cmp(&self.digits, &rhs.digits) {
            Ordering::Equal => MpInt::from_parts(vec![0], Sign::Plus, width),
            Ordering::Greater => MpInt::from_parts(
                digits::sub(&self.digits, &rhs.digits),
                self.sign,
                width,
            ),
            Ordering::Less => MpInt::from_parts(
                digits::sub(&rhs.digits, &self.digits),
                self.sign.flip(),
                width,
            ),
        }
    }
}

impl Sub for MpInt {
    type Output = MpInt;

    fn sub(self, rhs: MpInt) -> MpInt {
        &self - &rhs
    }
}

impl Sub<&MpInt> for &MpInt {
    type Output = MpInt;

    /// # Panics
    ///
    /// Panics when the difference exceeds the combined width cap.
    fn sub(self, rhs: &MpInt) -> MpInt {
        expect_op(self.checked_sub(rhs))
    }
}

impl SubAssign<&MpInt> for MpInt {
    /// # Panics
    ///
    /// Panics when the difference does not fit this instance's own width.
    fn sub_assign(&mut self, rhs: &MpInt) {
        let difference = expect_op(self.checked_sub(rhs));
        if let Err(err) = self.assign_checked(difference) {
            panic!("{err}");
        }
    }
}

impl SubAssign for MpInt {
    fn sub_assign(&mut self, rhs: MpInt) {
        *self -= &rhs;
    }
}

impl Neg for MpInt {
    type Output = MpInt;

    fn neg(self) -> MpInt {
        self.negated()
    }
}

impl Neg for &MpInt {
    type Output = MpInt;

    fn neg(self) -> MpInt {
        self.clone().negated()
    }
}
