//! Percentage values built on [`Ratio`].

use core::fmt;

use crate::error::Result;

use super::ratio::Ratio;
use super::Rounding;

/// Basis-point denominator (10 000 = 100%).
const BPS_DENOMINATOR: u32 = 10_000;

/// A [`Ratio`] interpreted as a fraction of one: `Percent::new(1, 2)` is
/// fifty percent.
///
/// Used for branch weights, slippage tolerances, and price impact.
/// Formatting multiplies by one hundred, so fifty percent renders as
/// `"50"`, not `"0.5"`.
///
/// # Examples
///
/// ```
/// use prism_dex::domain::{Percent, Rounding};
///
/// let half = Percent::new(1, 2).expect("non-zero denominator");
/// assert_eq!(half.to_fixed(1, Rounding::Down), "50.0");
///
/// // 30 basis points
/// let fee = Percent::from_bps(30);
/// assert_eq!(fee.to_fixed(2, Rounding::Down), "0.30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Percent(Ratio);

impl Percent {
    /// Zero percent.
    #[must_use]
    pub fn zero() -> Self {
        Self(Ratio::from(0))
    }

    /// One hundred percent.
    #[must_use]
    pub fn one_hundred() -> Self {
        Self(Ratio::from(1))
    }

    /// Creates a percent from a fraction of one.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::ZeroDenominator`](crate::error::DexError::ZeroDenominator)
    /// if `denominator` is zero.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self> {
        Ok(Self(Ratio::new(numerator, denominator)?))
    }

    /// Creates a percent from basis points (1 bp = 0.01%).
    #[must_use]
    pub fn from_bps(bps: u32) -> Self {
        Self(Ratio::from_parts(bps.into(), BPS_DENOMINATOR.into()))
    }

    /// Wraps an existing ratio as a percent.
    #[must_use]
    pub fn from_ratio(ratio: Ratio) -> Self {
        Self(ratio)
    }

    /// Returns the underlying fraction-of-one ratio.
    #[must_use]
    pub const fn as_ratio(&self) -> &Ratio {
        &self.0
    }

    /// Returns `true` if the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` if the value is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Returns `true` if `self < other`.
    #[must_use]
    pub fn less_than(&self, other: &Self) -> bool {
        self.0.less_than(&other.0)
    }

    /// Returns `true` if `self > other`.
    #[must_use]
    pub fn greater_than(&self, other: &Self) -> bool {
        self.0.greater_than(&other.0)
    }

    /// Returns `true` if the two percents represent the same value.
    #[must_use]
    pub fn equal_to(&self, other: &Self) -> bool {
        self.0.equal_to(&other.0)
    }

    /// Formats the value scaled to percent with significant digits.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidDigits`](crate::error::DexError::InvalidDigits)
    /// if `digits` is zero.
    pub fn to_significant(&self, digits: u32, rounding: Rounding) -> Result<String> {
        self.scaled_to_hundred().to_significant(digits, rounding)
    }

    /// Formats the value scaled to percent with fixed decimal places.
    #[must_use]
    pub fn to_fixed(&self, decimal_places: u32, rounding: Rounding) -> String {
        self.scaled_to_hundred().to_fixed(decimal_places, rounding)
    }

    fn scaled_to_hundred(&self) -> Ratio {
        self.0.multiply(&Ratio::from(100))
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.to_fixed(2, Rounding::Down))
    }
}
