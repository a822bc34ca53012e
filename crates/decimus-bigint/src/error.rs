//! Error types.

use thiserror::Error;

/// Errors from arithmetic operations.
///
/// Every variant is unrecoverable at the point of occurrence; arithmetic is
/// deterministic, so there is no retry semantics anywhere in this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// The divisor of a quotient or remainder was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A modular inverse was requested for an element that is not coprime
    /// with the ambient modulus.
    #[error("element is not invertible modulo the ambient modulus")]
    NotInvertible,

    /// A modulus-scoped operation was called with no ambient modulus set.
    #[error("no ambient modulus is set")]
    ModulusNotSet,
}

/// Errors from parsing a decimal string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ParseBigIntError {
    /// The input was empty (or a bare `-`).
    #[error("cannot parse an integer from an empty string")]
    Empty,

    /// The input contained a character that is not an ASCII decimal digit.
    #[error("invalid character {character:?} at position {position}")]
    InvalidDigit {
        /// The offending character.
        character: char,
        /// Byte offset of the character within the input.
        position: usize,
    },
}
