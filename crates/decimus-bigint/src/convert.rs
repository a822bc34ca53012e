//! Decimal string conversion.
//!
//! Parsing groups decimal digits into width-9 limbs from the least
//! significant end; formatting is the inverse, zero-padding every limb
//! below the most significant one.

use std::fmt;
use std::str::FromStr;

use num_traits::Zero;

use crate::error::ParseBigIntError;
use crate::integer::{BigInt, LIMB_DIGITS};

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if digits.is_empty() {
            return Err(ParseBigIntError::Empty);
        }
        if let Some((position, character)) =
            digits.char_indices().find(|(_, c)| !c.is_ascii_digit())
        {
            return Err(ParseBigIntError::InvalidDigit {
                character,
                position: position + usize::from(negative),
            });
        }

        let digits = digits.trim_start_matches('0');
        if digits.is_empty() {
            // "0", "-0", "000" are all canonical zero.
            return Ok(Self::zero());
        }

        let bytes = digits.as_bytes();
        let mut limbs = Vec::with_capacity(bytes.len().div_ceil(LIMB_DIGITS));
        let mut end = bytes.len();
        while end > 0 {
            let start = end.saturating_sub(LIMB_DIGITS);
            let mut limb = 0u32;
            for &byte in &bytes[start..end] {
                limb = limb * 10 + u32::from(byte - b'0');
            }
            limbs.push(limb);
            end = start;
        }
        Ok(Self { negative, limbs })
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.limbs.is_empty() {
            return f.write_str("0");
        }
        if self.negative {
            f.write_str("-")?;
        }
        let mut limbs = self.limbs.iter().rev();
        if let Some(top) = limbs.next() {
            write!(f, "{top}")?;
        }
        for limb in limbs {
            write!(f, "{limb:09}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}
