//! Shift-and-subtract long division.
//!
//! The divisor is scaled left so its most significant decimal digit aligns
//! with the dividend's, then repeatedly subtracted and shifted right one
//! decimal digit at a time. Shifts combine whole-limb moves with a sub-limb
//! pass that redistributes decimal digits across limb boundaries, which is
//! what lets limb-based storage support digit-granular alignment.

use std::cmp::Ordering;
use std::ops::{Div, DivAssign, Rem, RemAssign};

use num_traits::{One, Zero};

use crate::error::ArithmeticError;
use crate::integer::{magnitude_add_assign, magnitude_sub_assign, BigInt, LIMB_DIGITS, LIMB_RADIX};
use crate::modular;

/// Shifts left by whole limbs, filling the vacated low limbs with zero.
pub(crate) fn shift_limbs_left(n: &mut BigInt, count: usize) {
    if count == 0 || n.limbs.is_empty() {
        return;
    }
    n.limbs.splice(0..0, std::iter::repeat(0).take(count));
}

/// Shifts right by whole limbs, dropping the low limbs.
pub(crate) fn shift_limbs_right(n: &mut BigInt, count: usize) {
    if count == 0 {
        return;
    }
    if count >= n.limbs.len() {
        n.limbs.clear();
        n.negative = false;
        return;
    }
    n.limbs.drain(..count);
}

/// Multiplies the magnitude by `10^count` via a limb move plus a sub-limb
/// digit redistribution.
pub(crate) fn shift_digits_left(n: &mut BigInt, count: usize) {
    shift_limbs_left(n, count / LIMB_DIGITS);
    let partial = count % LIMB_DIGITS;
    if partial == 0 || n.limbs.is_empty() {
        return;
    }
    let scale = 10u32.pow(partial as u32);
    let split = 10u32.pow((LIMB_DIGITS - partial) as u32);
    let mut carry = 0u32;
    for limb in &mut n.limbs {
        let spill = *limb / split;
        *limb = (*limb % split) * scale + carry;
        carry = spill;
    }
    if carry != 0 {
        n.limbs.push(carry);
    }
}

/// Divides the magnitude by `10^count`, truncating the shifted-off digits.
pub(crate) fn shift_digits_right(n: &mut BigInt, count: usize) {
    shift_limbs_right(n, count / LIMB_DIGITS);
    let partial = count % LIMB_DIGITS;
    if partial == 0 || n.limbs.is_empty() {
        return;
    }
    let split = 10u32.pow(partial as u32);
    let scale = 10u32.pow((LIMB_DIGITS - partial) as u32);
    let mut carry = 0u32;
    for limb in n.limbs.iter_mut().rev() {
        let spill = (*limb % split) * scale;
        *limb = *limb / split + carry;
        carry = spill;
    }
    n.normalize();
}

/// Long division over magnitudes. The caller guarantees a nonzero divisor;
/// both results come back non-negative and normalized.
fn div_rem_magnitude(dividend: &BigInt, divisor: &BigInt) -> (BigInt, BigInt) {
    match dividend.cmp_magnitude(divisor) {
        Ordering::Less => return (BigInt::zero(), dividend.abs()),
        Ordering::Equal => return (BigInt::one(), BigInt::zero()),
        Ordering::Greater => {}
    }

    let align = dividend.decimal_digits() - divisor.decimal_digits();
    let mut scaled = divisor.abs();
    shift_digits_left(&mut scaled, align);

    let mut remainder = dividend.abs();
    let mut quotient = BigInt::zero();
    for _ in 0..=align {
        // At most 9 subtractions fit before the next realignment.
        let mut count = 0u32;
        while remainder.cmp_magnitude(&scaled) != Ordering::Less {
            magnitude_sub_assign(&mut remainder.limbs, &scaled.limbs);
            remainder.normalize();
            count += 1;
        }
        debug_assert!(count <= 9);
        shift_digits_left(&mut quotient, 1);
        if count != 0 {
            magnitude_add_assign(&mut quotient.limbs, &[count]);
        }
        shift_digits_right(&mut scaled, 1);
    }
    (quotient, remainder)
}

impl BigInt {
    /// Quotient and remainder without the ambient-modulus hook.
    ///
    /// Truncates toward zero: the quotient sign is the XOR of the operand
    /// signs and the remainder sign follows the dividend.
    pub(crate) fn div_rem_raw(&self, divisor: &Self) -> (Self, Self) {
        debug_assert!(!divisor.limbs.is_empty(), "divisor is zero");
        let (mut quotient, mut remainder) = div_rem_magnitude(self, divisor);
        if !quotient.limbs.is_empty() {
            quotient.negative = self.negative ^ divisor.negative;
        }
        if !remainder.limbs.is_empty() {
            remainder.negative = self.negative;
        }
        (quotient, remainder)
    }

    /// Computes the quotient and remainder of division.
    ///
    /// The identity `self == quotient * divisor + remainder` holds and the
    /// remainder's magnitude is strictly smaller than the divisor's. When an
    /// ambient modulus is set the quotient is reduced into `[0, m)`; the
    /// remainder is returned as computed.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), ArithmeticError> {
        if divisor.limbs.is_empty() {
            return Err(ArithmeticError::DivisionByZero);
        }
        let (mut quotient, remainder) = self.div_rem_raw(divisor);
        modular::reduce(&mut quotient);
        Ok((quotient, remainder))
    }

    /// Short division by a native scalar in a single most-significant-first
    /// pass, returning the quotient and the remainder's magnitude.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `divisor` is zero.
    #[allow(clippy::cast_possible_truncation)]
    pub fn div_rem_u32(&self, divisor: u32) -> Result<(Self, u32), ArithmeticError> {
        if divisor == 0 {
            return Err(ArithmeticError::DivisionByZero);
        }
        let radix = u64::from(LIMB_RADIX);
        let mut limbs = vec![0u32; self.limbs.len()];
        let mut carry = 0u64;
        for i in (0..self.limbs.len()).rev() {
            let current = carry * radix + u64::from(self.limbs[i]);
            limbs[i] = (current / u64::from(divisor)) as u32;
            carry = current % u64::from(divisor);
        }
        let mut quotient = Self {
            negative: self.negative,
            limbs,
        };
        quotient.normalize();
        Ok((quotient, carry as u32))
    }

    /// Returns `self / divisor`, or `None` for a zero divisor.
    #[must_use]
    pub fn checked_div(&self, divisor: &Self) -> Option<Self> {
        self.div_rem(divisor).ok().map(|(quotient, _)| quotient)
    }

    /// Returns `self % divisor`, or `None` for a zero divisor.
    #[must_use]
    pub fn checked_rem(&self, divisor: &Self) -> Option<Self> {
        if divisor.limbs.is_empty() {
            return None;
        }
        Some(self.div_rem_raw(divisor).1)
    }
}

/// Halves the magnitude in place, truncating. Used by exponent scanning.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn halve_in_place(n: &mut BigInt) {
    let radix = u64::from(LIMB_RADIX);
    let mut carry = 0u64;
    for limb in n.limbs.iter_mut().rev() {
        let current = carry * radix + u64::from(*limb);
        *limb = (current / 2) as u32;
        carry = current % 2;
    }
    n.normalize();
}

impl Div<&BigInt> for &BigInt {
    type Output = BigInt;

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn div(self, rhs: &BigInt) -> BigInt {
        let (quotient, _) = self.div_rem(rhs).expect("division by zero");
        quotient
    }
}

impl Div for BigInt {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        &self / &rhs
    }
}

impl Div<u32> for &BigInt {
    type Output = BigInt;

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn div(self, rhs: u32) -> BigInt {
        let (mut quotient, _) = self.div_rem_u32(rhs).expect("division by zero");
        modular::reduce(&mut quotient);
        quotient
    }
}

impl Div<u32> for BigInt {
    type Output = Self;

    fn div(self, rhs: u32) -> Self::Output {
        &self / rhs
    }
}

impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;

    /// # Panics
    ///
    /// Panics if `rhs` is zero.
    fn rem(self, rhs: &BigInt) -> BigInt {
        self.checked_rem(rhs).expect("division by zero")
    }
}

impl Rem for BigInt {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        &self % &rhs
    }
}

impl DivAssign<&BigInt> for BigInt {
    fn div_assign(&mut self, rhs: &BigInt) {
        *self = &*self / rhs;
    }
}

impl DivAssign for BigInt {
    fn div_assign(&mut self, rhs: Self) {
        *self = &*self / &rhs;
    }
}

impl RemAssign<&BigInt> for BigInt {
    fn rem_assign(&mut self, rhs: &BigInt) {
        *self = &*self % rhs;
    }
}

impl RemAssign for BigInt {
    fn rem_assign(&mut self, rhs: Self) {
        *self = &*self % &rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    #[test]
    fn test_digit_shift_left() {
        let mut n = big("123456789987654321");
        shift_digits_left(&mut n, 3);
        assert_eq!(n.to_string(), "123456789987654321000");
        shift_digits_left(&mut n, 9);
        assert_eq!(n.to_string(), "123456789987654321000000000000");

        let mut zero = BigInt::zero();
        shift_digits_left(&mut zero, 5);
        assert!(zero.is_zero());
    }

    #[test]
    fn test_digit_shift_right() {
        let mut n = big("123456789987654321");
        shift_digits_right(&mut n, 5);
        assert_eq!(n.to_string(), "1234567899876");
        shift_digits_right(&mut n, 13);
        assert!(n.is_zero());

        let mut m = big("1000000000");
        shift_digits_right(&mut m, 9);
        assert_eq!(m.to_string(), "1");
    }

    #[test]
    fn test_shift_round_trip() {
        for shift in [1, 4, 8, 9, 10, 17, 18, 27] {
            let mut n = big("31415926535897932384626433");
            shift_digits_left(&mut n, shift);
            shift_digits_right(&mut n, shift);
            assert_eq!(n.to_string(), "31415926535897932384626433", "shift {shift}");
        }
    }

    #[test]
    fn test_division_by_zero() {
        let x = big("123");
        assert_eq!(
            x.div_rem(&BigInt::zero()),
            Err(ArithmeticError::DivisionByZero)
        );
        assert_eq!(x.div_rem_u32(0), Err(ArithmeticError::DivisionByZero));
        assert_eq!(x.checked_div(&BigInt::zero()), None);
        assert_eq!(x.checked_rem(&BigInt::zero()), None);
        assert_eq!(
            BigInt::zero().div_rem(&BigInt::zero()),
            Err(ArithmeticError::DivisionByZero)
        );
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_div_operator_panics_on_zero() {
        let _ = big("1") / big("0");
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_rem_operator_panics_on_zero() {
        let _ = big("1") % big("0");
    }

    #[test]
    fn test_smaller_dividend() {
        let (q, r) = big("42").div_rem(&big("100")).unwrap();
        assert!(q.is_zero());
        assert_eq!(r.to_string(), "42");

        let (q, r) = big("-42").div_rem(&big("100")).unwrap();
        assert!(q.is_zero());
        assert_eq!(r.to_string(), "-42");
    }

    #[test]
    fn test_equal_magnitudes() {
        let (q, r) = big("-144").div_rem(&big("144")).unwrap();
        assert_eq!(q.to_string(), "-1");
        assert!(r.is_zero());
    }

    #[test]
    fn test_truncation_convention() {
        // Matches native truncating division, remainder sign from dividend.
        for (a, b) in [(7i64, 2i64), (-7, 2), (7, -2), (-7, -2), (100, 9), (-100, 9)] {
            let (q, r) = BigInt::new(a).div_rem(&BigInt::new(b)).unwrap();
            assert_eq!(q.to_i64(), Some(a / b), "{a} / {b}");
            assert_eq!(r.to_i64(), Some(a % b), "{a} % {b}");
        }
    }

    #[test]
    fn test_division_law_large() {
        let pairs = [
            ("123456789012345678901234567890", "987654321"),
            ("100000000000000000000000000000", "99999999999999"),
            ("999999999999999999999999999999", "1000000000"),
            ("314159265358979323846264338327950288419716939937510", "2718281828459045235360287471"),
            ("-314159265358979323846264338327950288419", "2718281828459045235"),
        ];
        for (a, b) in pairs {
            let (a, b) = (big(a), big(b));
            let (q, r) = a.div_rem(&b).unwrap();
            assert_eq!(&q * &b + r.clone(), a, "division law");
            assert!(r.cmp_magnitude(&b) == std::cmp::Ordering::Less);
        }
    }

    #[test]
    fn test_scalar_division() {
        let (q, r) = big("1000000000000000000000").div_rem_u32(7).unwrap();
        assert_eq!(&q * 7u32 + BigInt::from(r), big("1000000000000000000000"));
        assert!(r < 7);

        // Scalar and long division must agree.
        let n = big("987654321987654321987654321");
        let (qs, rs) = n.div_rem_u32(123_456_789).unwrap();
        let (ql, rl) = n.div_rem(&big("123456789")).unwrap();
        assert_eq!(qs, ql);
        assert_eq!(BigInt::from(rs), rl);
    }

    #[test]
    fn test_halve() {
        let mut n = big("1000000001");
        halve_in_place(&mut n);
        assert_eq!(n.to_string(), "500000000");
        let mut one = big("1");
        halve_in_place(&mut one);
        assert!(one.is_zero());
    }

    #[test]
    fn test_div_rem_assign() {
        let mut n = big("1000");
        n /= big("7");
        assert_eq!(n.to_string(), "142");
        let mut m = big("1000");
        m %= big("7");
        assert_eq!(m.to_string(), "6");
    }

    #[test]
    fn test_quotient_digit_alignment() {
        // First alignment position contributes a zero quotient digit.
        let (q, r) = big("100").div_rem(&big("99")).unwrap();
        assert_eq!(q.to_string(), "1");
        assert_eq!(r.to_string(), "1");

        let (q, r) = big("1000000000000").div_rem(&big("999999")).unwrap();
        assert_eq!(&q * &big("999999") + r, big("1000000000000"));
    }
}
