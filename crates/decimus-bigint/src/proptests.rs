//! Property-based tests for arbitrary precision arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::BigInt;

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1_000_000i64..1_000_000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1_000_000i64..=-1i64), (1i64..=1_000_000i64)]
    }

    // Strategy for canonical decimal strings spanning many limbs
    fn canonical_decimal() -> impl Strategy<Value = String> {
        proptest::string::string_regex("0|-?[1-9][0-9]{0,45}").unwrap()
    }

    fn non_zero_decimal() -> impl Strategy<Value = String> {
        proptest::string::string_regex("-?[1-9][0-9]{0,30}").unwrap()
    }

    fn big(s: &str) -> BigInt {
        s.parse().unwrap()
    }

    proptest! {
        #[test]
        fn add_commutative(a in canonical_decimal(), b in canonical_decimal()) {
            let a = big(&a);
            let b = big(&b);
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn add_associative(a in canonical_decimal(), b in canonical_decimal(), c in canonical_decimal()) {
            let a = big(&a);
            let b = big(&b);
            let c = big(&c);
            prop_assert_eq!(
                (a.clone() + b.clone()) + c.clone(),
                a + (b + c)
            );
        }

        #[test]
        fn additive_identity_and_inverse(a in canonical_decimal()) {
            let a = big(&a);
            prop_assert_eq!(a.clone() + BigInt::zero(), a.clone());
            prop_assert_eq!(a.clone() + (-a), BigInt::zero());
        }

        #[test]
        fn mul_commutative(a in canonical_decimal(), b in canonical_decimal()) {
            let a = big(&a);
            let b = big(&b);
            prop_assert_eq!(a.clone() * b.clone(), b * a);
        }

        #[test]
        fn mul_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = BigInt::new(a);
            let b = BigInt::new(b);
            let c = BigInt::new(c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn native_arithmetic_agrees(a in small_int(), b in small_int()) {
            prop_assert_eq!((BigInt::new(a) + BigInt::new(b)).to_i64(), Some(a + b));
            prop_assert_eq!((BigInt::new(a) - BigInt::new(b)).to_i64(), Some(a - b));
            prop_assert_eq!(
                (BigInt::new(a) * BigInt::new(b)).to_i64(),
                Some(a * b)
            );
        }

        #[test]
        fn string_round_trip(s in canonical_decimal()) {
            prop_assert_eq!(big(&s).to_string(), s);
        }

        #[test]
        fn division_law(a in canonical_decimal(), b in non_zero_decimal()) {
            let a = big(&a);
            let b = big(&b);
            let (q, r) = a.div_rem(&b).unwrap();
            prop_assert_eq!(q * b.clone() + r.clone(), a);
            prop_assert!(r.cmp_magnitude(&b) == std::cmp::Ordering::Less);
        }

        #[test]
        fn truncating_division_matches_native(a in small_int(), b in non_zero_int()) {
            let (q, r) = BigInt::new(a).div_rem(&BigInt::new(b)).unwrap();
            prop_assert_eq!(q.to_i64(), Some(a / b));
            prop_assert_eq!(r.to_i64(), Some(a % b));
        }

        #[test]
        fn pow_matches_repeated_multiplication(a in -50i64..50i64, n in 0u32..6u32) {
            let base = BigInt::new(a);
            let mut expected = BigInt::new(1);
            for _ in 0..n {
                expected = expected * base.clone();
            }
            prop_assert_eq!(base.pow(&BigInt::from(n)), expected);
        }
    }
}
