//! Divide-and-conquer multiplication.
//!
//! Both operands are split at half the shorter operand's limb count and the
//! product is assembled from three recursive sub-products (Karatsuba), which
//! beats the schoolbook limb-by-limb product asymptotically. Single-limb
//! operands take a scalar fast path with a 64-bit accumulator.

use std::ops::{Mul, MulAssign};

use num_traits::Zero;

use crate::divide::shift_limbs_left;
use crate::integer::{magnitude_add_assign, signed_sum_assign, BigInt, LIMB_RADIX};
use crate::modular;

/// Multiplies two magnitudes given as limb slices. The result is
/// non-negative and normalized; input slices may carry most-significant
/// zero limbs (they arise from splitting).
pub(crate) fn mul_magnitude(a: &[u32], b: &[u32]) -> BigInt {
    if a.is_empty() || b.is_empty() {
        return BigInt::zero();
    }
    if b.len() == 1 {
        return scalar_mul_magnitude(a, b[0]);
    }
    if a.len() == 1 {
        return scalar_mul_magnitude(b, a[0]);
    }

    let mid = a.len().min(b.len()) / 2;
    let (a_lo, a_hi) = a.split_at(mid);
    let (b_lo, b_hi) = b.split_at(mid);

    let z0 = mul_magnitude(a_lo, b_lo);
    let mut z2 = mul_magnitude(a_hi, b_hi);

    let mut a_sum = a_lo.to_vec();
    magnitude_add_assign(&mut a_sum, a_hi);
    let mut b_sum = b_lo.to_vec();
    magnitude_add_assign(&mut b_sum, b_hi);

    // z1 = (a_lo + a_hi)(b_lo + b_hi) - z2 - z0 is the cross term.
    let mut z1 = mul_magnitude(&a_sum, &b_sum);
    signed_sum_assign(&mut z1, &z2, true);
    signed_sum_assign(&mut z1, &z0, true);

    shift_limbs_left(&mut z2, 2 * mid);
    shift_limbs_left(&mut z1, mid);
    signed_sum_assign(&mut z2, &z1, false);
    signed_sum_assign(&mut z2, &z0, false);
    z2
}

/// Multiplies a magnitude by a native scalar, per-limb with a 64-bit
/// accumulator.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn scalar_mul_magnitude(limbs: &[u32], scalar: u32) -> BigInt {
    if scalar == 0 || limbs.is_empty() {
        return BigInt::zero();
    }
    let radix = u64::from(LIMB_RADIX);
    let mut out = Vec::with_capacity(limbs.len() + 1);
    let mut carry = 0u64;
    for &limb in limbs {
        let product = u64::from(limb) * u64::from(scalar) + carry;
        out.push((product % radix) as u32);
        carry = product / radix;
    }
    while carry > 0 {
        out.push((carry % radix) as u32);
        carry /= radix;
    }
    let mut out = BigInt {
        negative: false,
        limbs: out,
    };
    out.normalize();
    out
}

/// Raw signed product, without the ambient-modulus hook.
pub(crate) fn mul_raw(a: &BigInt, b: &BigInt) -> BigInt {
    let mut out = mul_magnitude(&a.limbs, &b.limbs);
    out.negative = !out.limbs.is_empty() && (a.negative ^ b.negative);
    out
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        let mut out = mul_raw(self, rhs);
        modular::reduce(&mut out);
        out
    }
}

impl Mul for BigInt {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Mul<u32> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: u32) -> BigInt {
        let mut out = scalar_mul_magnitude(&self.limbs, rhs);
        out.negative = !out.limbs.is_empty() && self.negative;
        modular::reduce(&mut out);
        out
    }
}

impl Mul<u32> for BigInt {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self::Output {
        &self * rhs
    }
}

impl Mul<&BigInt> for u32 {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        rhs * self
    }
}

impl Mul<BigInt> for u32 {
    type Output = BigInt;

    fn mul(self, rhs: BigInt) -> BigInt {
        &rhs * self
    }
}

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        *self = &*self * rhs;
    }
}

impl MulAssign for BigInt {
    fn mul_assign(&mut self, rhs: Self) {
        *self = &*self * &rhs;
    }
}
