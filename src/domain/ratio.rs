//! Arbitrary-precision rational number.

use core::cmp::Ordering;
use core::fmt;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use super::Rounding;
use crate::error::{DexError, Result};

/// Returns `10^exp` as a [`BigInt`].
pub(crate) fn pow10(exp: u32) -> BigInt {
    BigInt::from(10u8).pow(exp)
}

/// An exact rational number over arbitrary-precision integers.
///
/// All arithmetic combines numerators and denominators directly and all
/// comparisons cross-multiply, so results are exact regardless of
/// magnitude. Values are **not** reduced to lowest terms between
/// operations; equality and ordering are mathematical, not structural
/// (`1/2 == 2/4`). Because equality ignores representation, `Ratio` does
/// not implement `Hash`.
///
/// Every operation returns a new value; a `Ratio` never mutates.
///
/// # Invariants
///
/// The denominator is never zero. Operations that would produce a zero
/// denominator ([`invert`](Self::invert) of zero, [`divide`](Self::divide)
/// by zero) fail with [`DexError::ZeroDenominator`] instead.
///
/// # Examples
///
/// ```
/// use prism_dex::domain::Ratio;
///
/// let a = Ratio::new(1, 3).expect("non-zero denominator");
/// let b = Ratio::new(1, 6).expect("non-zero denominator");
/// let sum = a.add(&b);
/// assert!(sum.equal_to(&Ratio::new(1, 2).expect("non-zero denominator")));
/// ```
#[derive(Debug, Clone)]
pub struct Ratio {
    numerator: BigInt,
    denominator: BigInt,
}

impl Ratio {
    /// Creates a new `Ratio` from a numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::ZeroDenominator`] if `denominator` is zero.
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Result<Self> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(DexError::ZeroDenominator);
        }
        Ok(Self {
            numerator: numerator.into(),
            denominator,
        })
    }

    /// Internal constructor for denominators already known to be non-zero.
    pub(crate) fn from_parts(numerator: BigInt, denominator: BigInt) -> Self {
        debug_assert!(!denominator.is_zero());
        Self {
            numerator,
            denominator,
        }
    }

    /// Returns the numerator.
    #[must_use]
    pub const fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    /// Returns the denominator.
    #[must_use]
    pub const fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Returns `true` if the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Returns `true` if the value is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative() != self.denominator.is_negative()
            && !self.numerator.is_zero()
    }

    /// Adds two ratios over the common denominator `b·d`.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self::from_parts(
            &self.numerator * &other.denominator + &other.numerator * &self.denominator,
            &self.denominator * &other.denominator,
        )
    }

    /// Subtracts `other` from `self` over the common denominator `b·d`.
    #[must_use]
    pub fn subtract(&self, other: &Self) -> Self {
        Self::from_parts(
            &self.numerator * &other.denominator - &other.numerator * &self.denominator,
            &self.denominator * &other.denominator,
        )
    }

    /// Multiplies two ratios term-by-term.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        Self::from_parts(
            &self.numerator * &other.numerator,
            &self.denominator * &other.denominator,
        )
    }

    /// Divides `self` by `other`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::ZeroDenominator`] if `other` is zero.
    pub fn divide(&self, other: &Self) -> Result<Self> {
        Ok(self.multiply(&other.invert()?))
    }

    /// Returns the reciprocal.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::ZeroDenominator`] if the value is zero.
    pub fn invert(&self) -> Result<Self> {
        if self.numerator.is_zero() {
            return Err(DexError::ZeroDenominator);
        }
        Ok(Self::from_parts(
            self.denominator.clone(),
            self.numerator.clone(),
        ))
    }

    /// Floor division of numerator by denominator.
    ///
    /// This is the single place outside formatting where the engine
    /// truncates: always toward negative infinity, never rounded.
    #[must_use]
    pub fn quotient(&self) -> BigInt {
        self.numerator.div_floor(&self.denominator)
    }

    /// Returns `numerator − quotient·denominator`.
    #[must_use]
    pub fn remainder(&self) -> BigInt {
        self.numerator.mod_floor(&self.denominator)
    }

    /// Returns `true` if `self < other`, by cross-multiplication.
    #[must_use]
    pub fn less_than(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Less
    }

    /// Returns `true` if `self > other`, by cross-multiplication.
    #[must_use]
    pub fn greater_than(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Greater
    }

    /// Returns `true` if the two ratios represent the same value.
    #[must_use]
    pub fn equal_to(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }

    /// Formats the value with the given number of significant digits.
    ///
    /// Trailing zeros after the decimal point are trimmed; the chosen
    /// [`Rounding`] resolves the final retained digit. Zero formats as
    /// `"0"` regardless of `digits`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidDigits`] if `digits` is zero.
    pub fn to_significant(&self, digits: u32, rounding: Rounding) -> Result<String> {
        if digits == 0 {
            return Err(DexError::InvalidDigits);
        }
        if self.numerator.is_zero() {
            return Ok("0".to_string());
        }

        let negative = self.is_negative();
        let n = self.numerator.abs();
        let d = self.denominator.abs();

        // Exponent e with 10^e <= n/d < 10^(e+1). The digit-count estimate
        // is within one; a single comparison settles it.
        let mut e = decimal_digits(&n) as i64 - decimal_digits(&d) as i64;
        let at_least = if e >= 0 {
            n >= &d * pow10(u32::try_from(e).unwrap_or(u32::MAX))
        } else {
            &n * pow10(u32::try_from(-e).unwrap_or(u32::MAX)) >= d
        };
        if !at_least {
            e -= 1;
        }

        // Scale so that floor(n'/d') carries exactly `digits` significant
        // digits (one more if rounding carries into a new leading digit).
        let shift = i64::from(digits) - 1 - e;
        let scaled = if shift >= 0 {
            rounded_div(
                &(&n * pow10(u32::try_from(shift).unwrap_or(u32::MAX))),
                &d,
                rounding,
            )
        } else {
            rounded_div(
                &n,
                &(&d * pow10(u32::try_from(-shift).unwrap_or(u32::MAX))),
                rounding,
            )
        };

        // value = scaled · 10^(e + 1 - digits)
        let mut body = place_point(&scaled.to_str_radix(10), e + 1 - i64::from(digits));
        trim_fraction(&mut body);
        if negative {
            body.insert(0, '-');
        }
        Ok(body)
    }

    /// Formats the value with a fixed number of decimal places.
    ///
    /// The output is zero-padded to exactly `decimal_places` fractional
    /// digits; the chosen [`Rounding`] resolves the final digit.
    #[must_use]
    pub fn to_fixed(&self, decimal_places: u32, rounding: Rounding) -> String {
        let negative = self.is_negative();
        let n = self.numerator.abs();
        let d = self.denominator.abs();

        let scaled = rounded_div(&(&n * pow10(decimal_places)), &d, rounding);
        let digits = scaled.to_str_radix(10);

        let mut out = String::new();
        if negative && !scaled.is_zero() {
            out.push('-');
        }
        let dp = decimal_places as usize;
        if dp == 0 {
            out.push_str(&digits);
        } else if digits.len() > dp {
            out.push_str(&digits[..digits.len() - dp]);
            out.push('.');
            out.push_str(&digits[digits.len() - dp..]);
        } else {
            out.push_str("0.");
            for _ in 0..dp - digits.len() {
                out.push('0');
            }
            out.push_str(&digits);
        }
        out
    }
}

impl From<BigInt> for Ratio {
    fn from(value: BigInt) -> Self {
        Self::from_parts(value, BigInt::one())
    }
}

impl From<i64> for Ratio {
    fn from(value: i64) -> Self {
        Self::from_parts(BigInt::from(value), BigInt::one())
    }
}

impl Ord for Ratio {
    fn cmp(&self, other: &Self) -> Ordering {
        // a/b vs c/d compares a·d vs c·b, reversed when b·d < 0.
        let lhs = &self.numerator * &other.denominator;
        let rhs = &other.numerator * &self.denominator;
        if self.denominator.is_negative() != other.denominator.is_negative() {
            rhs.cmp(&lhs)
        } else {
            lhs.cmp(&rhs)
        }
    }
}

impl PartialOrd for Ratio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Ratio {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ratio {}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Number of decimal digits of a non-negative integer (`0` counts as one).
fn decimal_digits(n: &BigInt) -> usize {
    n.to_str_radix(10).len()
}

/// Divides non-negative `n` by positive `d`, resolving the result with the
/// given rounding policy.
fn rounded_div(n: &BigInt, d: &BigInt, rounding: Rounding) -> BigInt {
    let (q, r) = n.div_mod_floor(d);
    if r.is_zero() {
        return q;
    }
    match rounding {
        Rounding::Down => q,
        Rounding::HalfUp => {
            if &r + &r >= *d {
                q + 1
            } else {
                q
            }
        }
        Rounding::Up => q + 1,
    }
}

/// Renders `digits · 10^k` as a plain decimal string (no exponent form).
fn place_point(digits: &str, k: i64) -> String {
    if k >= 0 {
        let mut s = String::with_capacity(digits.len() + k as usize);
        s.push_str(digits);
        for _ in 0..k {
            s.push('0');
        }
        s
    } else {
        let frac = k.unsigned_abs() as usize;
        if digits.len() > frac {
            let split = digits.len() - frac;
            format!("{}.{}", &digits[..split], &digits[split..])
        } else {
            let mut s = String::from("0.");
            for _ in 0..frac - digits.len() {
                s.push('0');
            }
            s.push_str(digits);
            s
        }
    }
}

/// Strips trailing fractional zeros and a dangling decimal point.
fn trim_fraction(s: &mut String) {
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn ratio(n: i64, d: i64) -> Ratio {
        let Ok(r) = Ratio::new(n, d) else {
            panic!("non-zero denominator in test");
        };
        r
    }

    fn big(s: &str) -> BigInt {
        let Ok(v) = s.parse::<BigInt>() else {
            panic!("valid integer literal in test");
        };
        v
    }

    // -- Construction -------------------------------------------------------

    #[test]
    fn new_valid() {
        let r = ratio(3, 4);
        assert_eq!(r.numerator(), &BigInt::from(3));
        assert_eq!(r.denominator(), &BigInt::from(4));
    }

    #[test]
    fn new_zero_denominator_rejected() {
        assert_eq!(Ratio::new(1, 0), Err(DexError::ZeroDenominator));
    }

    #[test]
    fn from_integer() {
        let r = Ratio::from(7);
        assert_eq!(r.quotient(), BigInt::from(7));
        assert_eq!(r.denominator(), &BigInt::one());
    }

    // -- Arithmetic ---------------------------------------------------------

    #[test]
    fn add_cross_multiplies() {
        // 1/3 + 1/6 = (1*6 + 1*3) / 18 = 9/18 = 1/2
        let sum = ratio(1, 3).add(&ratio(1, 6));
        assert_eq!(sum.numerator(), &BigInt::from(9));
        assert_eq!(sum.denominator(), &BigInt::from(18));
        assert!(sum.equal_to(&ratio(1, 2)));
    }

    #[test]
    fn subtract_can_go_negative() {
        let diff = ratio(1, 4).subtract(&ratio(1, 2));
        assert!(diff.is_negative());
        assert!(diff.equal_to(&ratio(-1, 4)));
    }

    #[test]
    fn multiply_term_by_term() {
        let prod = ratio(2, 3).multiply(&ratio(9, 4));
        assert!(prod.equal_to(&ratio(3, 2)));
    }

    #[test]
    fn divide_by_nonzero() {
        let Ok(q) = ratio(1, 2).divide(&ratio(1, 4)) else {
            panic!("expected Ok");
        };
        assert!(q.equal_to(&ratio(2, 1)));
    }

    #[test]
    fn divide_by_zero_rejected() {
        assert_eq!(
            ratio(1, 2).divide(&ratio(0, 5)),
            Err(DexError::ZeroDenominator)
        );
    }

    #[test]
    fn invert_swaps_terms() {
        let Ok(inv) = ratio(3, 7).invert() else {
            panic!("expected Ok");
        };
        assert_eq!(inv.numerator(), &BigInt::from(7));
        assert_eq!(inv.denominator(), &BigInt::from(3));
    }

    #[test]
    fn invert_zero_rejected() {
        assert_eq!(ratio(0, 7).invert(), Err(DexError::ZeroDenominator));
    }

    #[test]
    fn exactness_beyond_64_bits() {
        // (2^100 / 3) * 3 reproduces 2^100 exactly.
        let huge = big("1267650600228229401496703205376"); // 2^100
        let Ok(third) = Ratio::new(huge.clone(), BigInt::from(3)) else {
            panic!("expected Ok");
        };
        let back = third.multiply(&Ratio::from(3));
        assert!(back.equal_to(&Ratio::from(huge)));
    }

    // -- quotient / remainder ----------------------------------------------

    #[test]
    fn quotient_floors_positive() {
        assert_eq!(ratio(7, 2).quotient(), BigInt::from(3));
    }

    #[test]
    fn quotient_floors_toward_negative_infinity() {
        assert_eq!(ratio(-7, 2).quotient(), BigInt::from(-4));
    }

    #[test]
    fn remainder_reconstructs_numerator() {
        for (n, d) in [(7i64, 2i64), (-7, 2), (9, 3), (-1, 4)] {
            let r = ratio(n, d);
            let rebuilt = r.quotient() * r.denominator() + r.remainder();
            assert_eq!(rebuilt, BigInt::from(n));
        }
    }

    // -- Comparison ---------------------------------------------------------

    #[test]
    fn equality_ignores_representation() {
        assert_eq!(ratio(1, 2), ratio(2, 4));
        assert!(ratio(1, 2).equal_to(&ratio(3, 6)));
    }

    #[test]
    fn ordering_cross_multiplied() {
        assert!(ratio(1, 3).less_than(&ratio(1, 2)));
        assert!(ratio(5, 4).greater_than(&ratio(6, 5)));
        assert!(!ratio(1, 2).less_than(&ratio(1, 2)));
    }

    #[test]
    fn ordering_handles_negative_denominators() {
        // 1/-2 = -1/2 < 1/4
        let r = ratio(1, -2);
        assert!(r.less_than(&ratio(1, 4)));
        assert!(r.equal_to(&ratio(-1, 2)));
    }

    #[test]
    fn is_negative_sign_aware() {
        assert!(ratio(-1, 2).is_negative());
        assert!(ratio(1, -2).is_negative());
        assert!(!ratio(-1, -2).is_negative());
        assert!(!ratio(0, 5).is_negative());
    }

    // -- to_fixed -----------------------------------------------------------

    #[test]
    fn to_fixed_pads_and_truncates() {
        assert_eq!(ratio(1, 3).to_fixed(4, Rounding::Down), "0.3333");
        assert_eq!(ratio(1, 3).to_fixed(4, Rounding::Up), "0.3334");
        assert_eq!(ratio(1, 2).to_fixed(3, Rounding::Down), "0.500");
    }

    #[test]
    fn to_fixed_half_up() {
        assert_eq!(ratio(5, 1000).to_fixed(2, Rounding::HalfUp), "0.01");
        assert_eq!(ratio(4, 1000).to_fixed(2, Rounding::HalfUp), "0.00");
        assert_eq!(ratio(15, 10).to_fixed(0, Rounding::HalfUp), "2");
    }

    #[test]
    fn to_fixed_integer_part() {
        assert_eq!(ratio(1234, 10).to_fixed(2, Rounding::Down), "123.40");
        assert_eq!(ratio(7, 1).to_fixed(0, Rounding::Down), "7");
    }

    #[test]
    fn to_fixed_negative() {
        assert_eq!(ratio(-1, 3).to_fixed(2, Rounding::Down), "-0.33");
        // magnitude rounds toward zero, so a vanishing value has no sign
        assert_eq!(ratio(-1, 1000).to_fixed(2, Rounding::Down), "0.00");
    }

    // -- to_significant -----------------------------------------------------

    #[test]
    fn to_significant_zero_digits_rejected() {
        assert_eq!(
            ratio(1, 2).to_significant(0, Rounding::Down),
            Err(DexError::InvalidDigits)
        );
    }

    #[test]
    fn to_significant_basic() {
        let Ok(s) = ratio(1, 3).to_significant(5, Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(s, "0.33333");
    }

    #[test]
    fn to_significant_trims_trailing_zeros() {
        let Ok(s) = ratio(1, 2).to_significant(6, Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(s, "0.5");
    }

    #[test]
    fn to_significant_integer_keeps_magnitude() {
        // 123456 to 4 significant digits rounds the tail, not the magnitude
        let Ok(down) = ratio(123_456, 1).to_significant(4, Rounding::Down) else {
            panic!("expected Ok");
        };
        let Ok(half) = ratio(123_456, 1).to_significant(4, Rounding::HalfUp) else {
            panic!("expected Ok");
        };
        assert_eq!(down, "123400");
        assert_eq!(half, "123500");
    }

    #[test]
    fn to_significant_rounding_carry() {
        // 999.96 with 4 significant digits carries into a new leading digit
        let Ok(s) = ratio(99_996, 100).to_significant(4, Rounding::HalfUp) else {
            panic!("expected Ok");
        };
        assert_eq!(s, "1000");
    }

    #[test]
    fn to_significant_small_magnitude() {
        let Ok(s) = ratio(1, 8000).to_significant(3, Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(s, "0.000125");
    }

    #[test]
    fn to_significant_zero_value() {
        let Ok(s) = ratio(0, 5).to_significant(3, Rounding::Up) else {
            panic!("expected Ok");
        };
        assert_eq!(s, "0");
    }

    #[test]
    fn to_significant_negative() {
        let Ok(s) = ratio(-1, 3).to_significant(3, Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(s, "-0.333");
    }

    #[test]
    fn to_significant_huge_value() {
        let Ok(r) = Ratio::new(big("340282366920938463463374607431768211456"), 1) else {
            panic!("expected Ok"); // 2^128
        };
        let Ok(s) = r.to_significant(4, Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(s, "340200000000000000000000000000000000000");
    }

    // -- Display ------------------------------------------------------------

    #[test]
    fn display_shows_terms() {
        assert_eq!(format!("{}", ratio(3, 4)), "3/4");
    }
}
