use std::ops::{Mul, MulAssign};

use super::{expect_op, MpInt, Sign};
use crate::digits;
use crate::error::Error;

impl MpInt {
    /// Product of two values under their combined width. The sign is the
    /// product of the operand signs; unit magnitudes skip the kernel.
    pub fn checked_mul(&self, rhs: &MpInt) -> Result<MpInt, Error> {
        let width = self.width.combine(rhs.width);
        if self.is_zero() || rhs.is_zero() {
            return MpInt::from_parts(vec![0], Sign::Plus, width);
        }
        let sign = self.sign.product(rhs.sign);
        if self.digits == [1] {
            return MpInt::from_parts(rhs.digits.clone(), sign, width);
        }
        if rhs.digits == [1] {
            return MpInt::from_parts(self.digits.clone(), sign, width);
        }
        MpInt::from_parts(digits::mul(&self.digits, &rhs.digits), sign, width)
    }

    /// The running product `2 * 3 * ...`, stopping once the counter passes
    /// this value; zero and one both yield one.
    ///
    /// The product is carried at unlimited width and re-bound to this
    /// value's width at the end, so an intermediate larger than the cap is
    /// fine as long as the final result fits.
    pub fn factorial(&self) -> Result<MpInt, Error> {
        if self.is_negative() {
            return Err(Error::InvalidArgument(self.to_string()));
        }
        let mut product = MpInt::one();
        let mut counter = 2u64;
        loop {
            let step = MpInt::from(counter);
            if step > *self {
                break;
            }
            product = &product * &step;
            counter += 1;
        }
        product.with_width(self.width)
    }
}

impl Mul for MpInt {
    type Output = MpInt;

    fn mul(self, rhs: MpInt) -> MpInt {
        &self * &rhs
    }
}

impl Mul<&MpInt> for &MpInt {
    type Output = MpInt;

    /// # Panics
    ///
    /// Panics when the product exceeds the combined width cap.
    fn mul(self, rhs: &MpInt) -> MpInt {
        expect_op(self.checked_mul(rhs))
    }
}

impl MulAssign<&MpInt> for MpInt {
    /// # Panics
    ///
    /// Panics when the product does not fit this instance's own width.
    fn mul_assign(&mut self, rhs: &MpInt) {
        let product = expect_op(self.checked_mul(rhs));
        if let Err(err) = self.assign_checked(product) {
            panic!("{err}");
        }
    }
}

impl MulAssign for MpInt {
    fn mul_assign(&mut self, rhs: MpInt) {
        *self *= &rhs;
    }
}
