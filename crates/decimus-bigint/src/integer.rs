//! Arbitrary precision signed integers over decimal limbs.
//!
//! A [`BigInt`] stores its magnitude as base-`10^9` limbs, least significant
//! first, together with a sign flag. The decimal radix makes textual
//! conversion a per-limb operation and lets the division engine work at
//! single-decimal-digit granularity.

use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use num_traits::{One, Zero};

use crate::modular;

/// Number of decimal digits stored per limb.
pub const LIMB_DIGITS: usize = 9;

/// The limb radix, `10^LIMB_DIGITS`.
pub const LIMB_RADIX: u32 = 1_000_000_000;

/// An arbitrary precision signed integer.
///
/// The representation is canonical: the most significant limb is never zero,
/// and zero itself is the empty limb vector with `negative == false`. A
/// "negative zero" is therefore unrepresentable, which makes the derived
/// `PartialEq`/`Hash` agree with numeric equality.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct BigInt {
    pub(crate) negative: bool,
    pub(crate) limbs: Vec<u32>,
}

impl BigInt {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        let mut out = Self::from_magnitude(value.unsigned_abs());
        out.negative = value < 0 && !out.limbs.is_empty();
        out
    }

    /// Creates an integer from an explicit sign and limb vector.
    ///
    /// Limbs are least significant first. The result is normalized, so
    /// most-significant zero limbs are stripped and `from_limbs(true, vec![])`
    /// is canonical zero.
    ///
    /// # Panics
    ///
    /// Panics if any limb is not below [`LIMB_RADIX`].
    #[must_use]
    pub fn from_limbs(negative: bool, limbs: Vec<u32>) -> Self {
        assert!(
            limbs.iter().all(|&limb| limb < LIMB_RADIX),
            "limb out of range"
        );
        let mut out = Self { negative, limbs };
        out.normalize();
        out
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_magnitude(mut value: u64) -> Self {
        let mut limbs = Vec::new();
        while value > 0 {
            limbs.push((value % u64::from(LIMB_RADIX)) as u32);
            value /= u64::from(LIMB_RADIX);
        }
        Self {
            negative: false,
            limbs,
        }
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.limbs.is_empty() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            limbs: self.limbs.clone(),
        }
    }

    /// Returns the limbs of the magnitude, least significant first.
    #[must_use]
    pub fn limbs(&self) -> &[u32] {
        &self.limbs
    }

    /// Returns the number of decimal digits in the magnitude.
    ///
    /// Zero counts as one digit.
    #[must_use]
    pub fn decimal_digits(&self) -> usize {
        match self.limbs.last() {
            None => 1,
            Some(&top) => {
                let mut digits = (self.limbs.len() - 1) * LIMB_DIGITS + 1;
                let mut top = top / 10;
                while top > 0 {
                    digits += 1;
                    top /= 10;
                }
                digits
            }
        }
    }

    /// Converts to an i64 if the value fits.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        if self.limbs.len() > 3 {
            return None;
        }
        let mut value = 0i128;
        for &limb in self.limbs.iter().rev() {
            value = value * i128::from(LIMB_RADIX) + i128::from(limb);
        }
        if self.negative {
            value = -value;
        }
        i64::try_from(value).ok()
    }

    /// Restores the representation invariant after a mutation: strips
    /// most-significant zero limbs and clears the sign of zero.
    pub(crate) fn normalize(&mut self) {
        while self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
        if self.limbs.is_empty() {
            self.negative = false;
        }
    }

    /// Compares magnitudes, ignoring signs.
    ///
    /// More limbs wins; on equal limb counts the first difference from the
    /// most significant end decides.
    #[must_use]
    pub fn cmp_magnitude(&self, other: &Self) -> Ordering {
        match self.limbs.len().cmp(&other.limbs.len()) {
            Ordering::Equal => {}
            ord => return ord,
        }
        for (a, b) in self.limbs.iter().rev().zip(other.limbs.iter().rev()) {
            match a.cmp(b) {
                Ordering::Equal => {}
                ord => return ord,
            }
        }
        Ordering::Equal
    }
}

/// Adds a magnitude into `acc`, limb-wise with carry.
pub(crate) fn magnitude_add_assign(acc: &mut Vec<u32>, rhs: &[u32]) {
    if rhs.len() > acc.len() {
        acc.resize(rhs.len(), 0);
    }
    let mut carry = 0u32;
    for i in 0..acc.len() {
        if i >= rhs.len() && carry == 0 {
            break;
        }
        let mut sum = acc[i] + carry;
        if i < rhs.len() {
            sum += rhs[i];
        }
        if sum >= LIMB_RADIX {
            acc[i] = sum - LIMB_RADIX;
            carry = 1;
        } else {
            acc[i] = sum;
            carry = 0;
        }
    }
    if carry != 0 {
        acc.push(1);
    }
}

/// Subtracts a magnitude from `acc`, limb-wise with borrow.
///
/// The caller must guarantee that `acc` is the larger-or-equal magnitude;
/// the borrow chain runs over the full minuend length. The caller is also
/// responsible for normalizing afterward.
pub(crate) fn magnitude_sub_assign(acc: &mut [u32], rhs: &[u32]) {
    let mut borrow = 0u32;
    for i in 0..acc.len() {
        if i >= rhs.len() && borrow == 0 {
            break;
        }
        let sub = borrow + if i < rhs.len() { rhs[i] } else { 0 };
        if acc[i] < sub {
            acc[i] += LIMB_RADIX - sub;
            borrow = 1;
        } else {
            acc[i] -= sub;
            borrow = 0;
        }
    }
    debug_assert_eq!(borrow, 0, "minuend magnitude was smaller than subtrahend");
}

/// The sign-dispatch table shared by every additive entry point.
///
/// Computes `acc + rhs` where `rhs` carries the overridden sign
/// `rhs_negative` (pass `!rhs.negative` to subtract). Keyed on
/// `(sign_a, sign_b, magnitude comparison)`:
///
/// - equal signs: magnitude add, sign kept;
/// - opposite signs, equal magnitudes: canonical zero;
/// - opposite signs otherwise: larger minus smaller, sign of the larger.
///
/// Does not consult the ambient modulus.
pub(crate) fn signed_sum_assign(acc: &mut BigInt, rhs: &BigInt, rhs_negative: bool) {
    if acc.negative == rhs_negative {
        magnitude_add_assign(&mut acc.limbs, &rhs.limbs);
        return;
    }
    match acc.cmp_magnitude(rhs) {
        Ordering::Equal => {
            acc.limbs.clear();
            acc.negative = false;
        }
        Ordering::Greater => {
            magnitude_sub_assign(&mut acc.limbs, &rhs.limbs);
            acc.normalize();
        }
        Ordering::Less => {
            let mut limbs = rhs.limbs.clone();
            magnitude_sub_assign(&mut limbs, &acc.limbs);
            acc.limbs = limbs;
            acc.negative = rhs_negative;
            acc.normalize();
        }
    }
}

/// Raw signed addition, without the ambient-modulus hook.
pub(crate) fn add_raw(a: &BigInt, b: &BigInt) -> BigInt {
    let mut out = a.clone();
    signed_sum_assign(&mut out, b, b.negative);
    out
}

/// Raw signed subtraction, without the ambient-modulus hook.
pub(crate) fn sub_raw(a: &BigInt, b: &BigInt) -> BigInt {
    let mut out = a.clone();
    signed_sum_assign(&mut out, b, !b.negative);
    out
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, false) => self.cmp_magnitude(other),
            (true, true) => other.cmp_magnitude(self),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        let mut out = add_raw(self, rhs);
        modular::reduce(&mut out);
        out
    }
}

impl Add for BigInt {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        signed_sum_assign(self, rhs, rhs.negative);
        modular::reduce(self);
    }
}

impl AddAssign for BigInt {
    fn add_assign(&mut self, rhs: Self) {
        *self += &rhs;
    }
}

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> BigInt {
        let mut out = sub_raw(self, rhs);
        modular::reduce(&mut out);
        out
    }
}

impl Sub for BigInt {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        signed_sum_assign(self, rhs, !rhs.negative);
        modular::reduce(self);
    }
}

impl SubAssign for BigInt {
    fn sub_assign(&mut self, rhs: Self) {
        *self -= &rhs;
    }
}

impl Neg for BigInt {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        if !self.limbs.is_empty() {
            self.negative = !self.negative;
        }
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        -self.clone()
    }
}

impl Zero for BigInt {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }
}

impl One for BigInt {
    fn one() -> Self {
        Self {
            negative: false,
            limbs: vec![1],
        }
    }

    fn is_one(&self) -> bool {
        !self.negative && self.limbs == [1]
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for BigInt {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<u32> for BigInt {
    fn from(value: u32) -> Self {
        Self::from_magnitude(u64::from(value))
    }
}

impl From<u64> for BigInt {
    fn from(value: u64) -> Self {
        Self::from_magnitude(value)
    }
}
