//! # decimus-bigint
//!
//! Arbitrary-precision signed integer arithmetic over decimal limbs.
//!
//! This crate provides:
//! - [`BigInt`], a sign-and-magnitude integer stored as base-`10^9` limbs
//! - Exact addition, subtraction, Karatsuba multiplication, long division,
//!   remainder, and binary exponentiation
//! - An [ambient modulus](modular) that auto-reduces results into `[0, m)`,
//!   plus extended-Euclid modular inverses
//! - Decimal string parsing and formatting that round-trip exactly
//!
//! ## Quick Start
//!
//! ```rust
//! use decimus_bigint::BigInt;
//!
//! let a: BigInt = "123456789012345678901234567890".parse().unwrap();
//! let b = BigInt::new(-42);
//! assert_eq!(
//!     (a * b).to_string(),
//!     "-5185185138518518513851851851380",
//! );
//!
//! let two = BigInt::new(2);
//! assert_eq!(
//!     two.pow(&BigInt::new(100)).to_string(),
//!     "1267650600228229401496703205376",
//! );
//! ```
//!
//! ## Modular arithmetic
//!
//! ```rust
//! use decimus_bigint::{with_modulus, BigInt};
//!
//! let residue = with_modulus("97".parse().unwrap(), || {
//!     let a: BigInt = "1234567".parse().unwrap();
//!     let inv = a.mod_inverse().unwrap();
//!     a * inv
//! });
//! assert_eq!(residue.to_string(), "1");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod integer;
pub mod modular;

mod convert;
mod divide;
mod multiply;
mod pow;

#[cfg(test)]
mod proptests;

pub use error::{ArithmeticError, ParseBigIntError};
pub use integer::{BigInt, LIMB_DIGITS, LIMB_RADIX};
pub use modular::{clear_modulus, current_modulus, set_modulus, with_modulus, ModulusGuard};
