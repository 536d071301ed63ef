use std::ops::{Add, AddAssign};

use super::{expect_op, MpInt};
use crate::digits;
use crate::error::Error;

impl MpInt {
    /// Sum of two values under their combined width.
    ///
    /// Zero operands short-circuit. Same signs add magnitudes and keep the
    /// sign; differing signs reduce to subtraction of the negated right
    /// side.
    pub fn checked_add(&self, rhs: &MpInt) -> Result<MpInt, Error> {
        let width = self.width.combine(rhs.width);
        if self.is_zero() {
            return rhs.clone().with_width(width);
        }
        if rhs.is_zero() {
            return self.clone().with_width(width);
        }
        if self.sign == rhs.sign {
            return MpInt::from_parts(
                digits::add(&self.digits, &rhs.digits),
                self.sign,
                width,
            );
        }
        self.checked_sub(&rhs.clone().negated())
    }
}

impl Add for MpInt {
    type Output = MpInt;

    fn add(self, rhs: MpInt) -> MpInt {
        &self + &rhs
    }
}

impl Add<&MpInt> for &MpInt {
    type Output = MpInt;

    /// # Panics
    ///
    /// Panics when the sum exceeds the combined width cap.
    fn add(self, rhs: &MpInt) -> MpInt {
        expect_op(self.checked_add(rhs))
    }
}

impl AddAssign<&MpInt> for MpInt {
    /// # Panics
    ///
    /// Panics when the sum does not fit this instance's own width.
    fn add_assign(&mut self, rhs: &MpInt) {
        let sum = expect_op(self.checked_add(rhs));
        if let Err(err) = self.assign_checked(sum) {
            panic!("{err}");
        }
    }
}

impl AddAssign for MpInt {
    fn add_assign(&mut self, rhs: MpInt) {
        *self += &rhs;
    }
}
