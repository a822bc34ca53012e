//! Binary exponentiation.

use num_traits::{One, Zero};

use crate::divide::halve_in_place;
use crate::integer::BigInt;
use crate::modular;

impl BigInt {
    /// Raises `self` to a non-negative integer power by binary
    /// exponentiation: multiply the accumulator on set bits, square the
    /// base, halve the exponent.
    ///
    /// `pow(0) == 1` for every base, including zero. Under an ambient
    /// modulus every intermediate product is already reduced, so this
    /// doubles as modular exponentiation.
    ///
    /// # Panics
    ///
    /// Panics if `exponent` is negative.
    #[must_use]
    pub fn pow(&self, exponent: &Self) -> Self {
        assert!(!exponent.is_negative(), "negative exponent");
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = exponent.clone();
        while !exp.is_zero() {
            // The radix is even, so value parity is limb-0 parity.
            if exp.limbs[0] & 1 == 1 {
                result = &result * &base;
            }
            base = &base * &base;
            halve_in_place(&mut exp);
        }
        modular::reduce(&mut result);
        result
    }
}
