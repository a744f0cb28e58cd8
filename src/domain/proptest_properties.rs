//! Property-based tests using `proptest` for arithmetic invariants.
//!
//! Covers the exactness guarantees the engine is built on:
//!
//! 1. **Addition exactness** — `a/b + c/d` equals `(a·d + c·b)/(b·d)`
//!    under cross-multiplied comparison, with operands beyond 64-bit range.
//! 2. **Multiplication exactness** — `(a/b)·(c/d)` equals `(a·c)/(b·d)`.
//! 3. **Invert involution** — inverting twice restores the value.
//! 4. **Floor reconstruction** — `quotient·denominator + remainder`
//!    rebuilds the numerator.
//! 5. **Order consistency** — `a < b` exactly when `a − b` is negative.

use num_bigint::BigInt;
use num_traits::Zero;
use proptest::prelude::*;

use crate::domain::Ratio;

// ---------------------------------------------------------------------------
// Strategies: 192-bit integers, far outside any machine-word range
// ---------------------------------------------------------------------------

fn bigint() -> impl Strategy<Value = BigInt> {
    any::<[u8; 24]>().prop_map(|bytes| BigInt::from_signed_bytes_be(&bytes))
}

fn nonzero_bigint() -> impl Strategy<Value = BigInt> {
    bigint().prop_filter("denominator must be non-zero", |v| !v.is_zero())
}

fn ratio(n: BigInt, d: BigInt) -> Ratio {
    let Ok(r) = Ratio::new(n, d) else {
        panic!("strategy guarantees a non-zero denominator");
    };
    r
}

proptest! {
    #[test]
    fn add_matches_cross_multiplication(
        a in bigint(),
        b in nonzero_bigint(),
        c in bigint(),
        d in nonzero_bigint(),
    ) {
        let sum = ratio(a.clone(), b.clone()).add(&ratio(c.clone(), d.clone()));
        let expected = ratio(&a * &d + &c * &b, &b * &d);
        prop_assert!(sum.equal_to(&expected));
    }

    #[test]
    fn multiply_matches_cross_multiplication(
        a in bigint(),
        b in nonzero_bigint(),
        c in bigint(),
        d in nonzero_bigint(),
    ) {
        let product = ratio(a.clone(), b.clone()).multiply(&ratio(c.clone(), d.clone()));
        let expected = ratio(&a * &c, &b * &d);
        prop_assert!(product.equal_to(&expected));
    }

    #[test]
    fn invert_is_an_involution(
        a in nonzero_bigint(),
        b in nonzero_bigint(),
    ) {
        let value = ratio(a, b);
        let Ok(once) = value.invert() else {
            return Err(TestCaseError::fail("non-zero value must invert"));
        };
        let Ok(twice) = once.invert() else {
            return Err(TestCaseError::fail("inverted value must invert back"));
        };
        prop_assert!(twice.equal_to(&value));
    }

    #[test]
    fn quotient_and_remainder_reconstruct(
        a in bigint(),
        b in nonzero_bigint(),
    ) {
        let value = ratio(a.clone(), b.clone());
        let rebuilt = value.quotient() * &b + value.remainder();
        prop_assert_eq!(rebuilt, a);
    }

    #[test]
    fn ordering_agrees_with_subtraction(
        a in bigint(),
        b in nonzero_bigint(),
        c in bigint(),
        d in nonzero_bigint(),
    ) {
        let lhs = ratio(a, b);
        let rhs = ratio(c, d);
        prop_assert_eq!(lhs.less_than(&rhs), lhs.subtract(&rhs).is_negative());
    }
}
