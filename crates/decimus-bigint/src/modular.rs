//! The ambient modulus and modular inverses.
//!
//! An ambient modulus, once set, makes every arithmetic operation reduce its
//! result into `[0, m)` before returning. The state is thread-local rather
//! than process-global, so two threads computing in different rings cannot
//! corrupt each other; within a thread the usual scoping tools apply
//! ([`ModulusGuard`], [`with_modulus`]).
//!
//! Reduction itself is built from raw, non-reducing primitives, so the hook
//! never re-enters.

use std::cell::RefCell;

use num_traits::{One, Zero};

use crate::error::ArithmeticError;
use crate::integer::{signed_sum_assign, sub_raw, BigInt};
use crate::multiply::mul_raw;

thread_local! {
    static AMBIENT_MODULUS: RefCell<Option<BigInt>> = const { RefCell::new(None) };
}

fn assert_valid_modulus(modulus: &BigInt) {
    assert!(
        !modulus.is_zero() && !modulus.is_negative(),
        "modulus must be positive"
    );
}

/// Sets the ambient modulus for the current thread.
///
/// Every subsequent addition, subtraction, multiplication, division, and
/// exponentiation on this thread reduces its result into `[0, modulus)`
/// until the modulus is replaced or [cleared](clear_modulus).
///
/// # Panics
///
/// Panics if `modulus` is zero or negative.
pub fn set_modulus(modulus: BigInt) {
    assert_valid_modulus(&modulus);
    AMBIENT_MODULUS.with(|cell| *cell.borrow_mut() = Some(modulus));
}

/// Clears the ambient modulus for the current thread.
pub fn clear_modulus() {
    AMBIENT_MODULUS.with(|cell| *cell.borrow_mut() = None);
}

/// Returns a copy of the current thread's ambient modulus, if any.
#[must_use]
pub fn current_modulus() -> Option<BigInt> {
    AMBIENT_MODULUS.with(|cell| cell.borrow().clone())
}

/// Installs an ambient modulus for the guard's lifetime, restoring whatever
/// modulus (or none) was previously in effect on drop.
pub struct ModulusGuard {
    previous: Option<BigInt>,
}

impl ModulusGuard {
    /// Sets `modulus` as the ambient modulus until the guard is dropped.
    ///
    /// # Panics
    ///
    /// Panics if `modulus` is zero or negative.
    #[must_use]
    pub fn new(modulus: BigInt) -> Self {
        assert_valid_modulus(&modulus);
        let previous = AMBIENT_MODULUS.with(|cell| cell.borrow_mut().replace(modulus));
        Self { previous }
    }
}

impl Drop for ModulusGuard {
    fn drop(&mut self) {
        let previous = self.previous.take();
        AMBIENT_MODULUS.with(|cell| *cell.borrow_mut() = previous);
    }
}

/// Runs `f` with `modulus` as the ambient modulus.
///
/// # Panics
///
/// Panics if `modulus` is zero or negative.
pub fn with_modulus<R>(modulus: BigInt, f: impl FnOnce() -> R) -> R {
    let _guard = ModulusGuard::new(modulus);
    f()
}

/// The post-operation hook: reduces `value` into `[0, m)` when an ambient
/// modulus is set, and leaves it untouched otherwise.
pub(crate) fn reduce(value: &mut BigInt) {
    AMBIENT_MODULUS.with(|cell| {
        if let Some(modulus) = &*cell.borrow() {
            let (_, mut remainder) = value.div_rem_raw(modulus);
            if remainder.is_negative() {
                signed_sum_assign(&mut remainder, modulus, false);
            }
            *value = remainder;
        }
    });
}

impl BigInt {
    /// Computes the multiplicative inverse of `self` modulo the ambient
    /// modulus, via the extended Euclidean algorithm.
    ///
    /// The result lies in `[0, m)` and satisfies
    /// `(self * inverse) % m == 1`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::ModulusNotSet`] when no ambient modulus is
    /// in effect, and [`ArithmeticError::NotInvertible`] when
    /// `gcd(self, m) != 1`.
    pub fn mod_inverse(&self) -> Result<Self, ArithmeticError> {
        let modulus = current_modulus().ok_or(ArithmeticError::ModulusNotSet)?;

        // Work with self reduced into [0, m); the Bezout coefficient is
        // unchanged modulo m.
        let (_, mut value) = self.div_rem_raw(&modulus);
        if value.is_negative() {
            signed_sum_assign(&mut value, &modulus, false);
        }

        let mut old_r = value;
        let mut r = modulus.clone();
        let mut old_s = Self::one();
        let mut s = Self::zero();
        while !r.is_zero() {
            let (q, rem) = old_r.div_rem_raw(&r);
            old_r = r;
            r = rem;

            let next_s = sub_raw(&old_s, &mul_raw(&q, &s));
            old_s = s;
            s = next_s;
        }

        if !old_r.is_one() {
            return Err(ArithmeticError::NotInvertible);
        }

        let (_, mut inverse) = old_s.div_rem_raw(&modulus);
        if inverse.is_negative() {
            signed_sum_assign(&mut inverse, &modulus, false);
        }
        Ok(inverse)
    }
}
