//! A raw token amount bound to its currency.

use core::fmt;

use num_bigint::BigInt;

use super::currency::Currency;
use super::ratio::Ratio;
use super::Rounding;
use crate::error::{DexError, Result};

/// An amount of exactly one [`Currency`], held as an exact [`Ratio`] whose
/// numerator is the raw integer amount and whose denominator is the
/// currency's `10^decimals`.
///
/// Arithmetic and comparison require both operands to reference the same
/// currency; mixing currencies is a precondition violation and fails with
/// [`DexError::CurrencyMismatch`].
///
/// # Examples
///
/// ```
/// use prism_dex::domain::{ChainId, Currency, CurrencyAmount, Rounding};
///
/// let usdc = Currency::new(
///     ChainId::new(1),
///     "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
///     6,
///     Some("USDC"),
///     None,
/// )
/// .expect("valid address");
///
/// // 1.5 USDC in raw units
/// let amount = CurrencyAmount::new(usdc, 1_500_000);
/// assert_eq!(amount.to_exact(), "1.5");
/// assert_eq!(amount.to_fixed(2, Rounding::Down), "1.50");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyAmount {
    currency: Currency,
    ratio: Ratio,
}

impl CurrencyAmount {
    /// Creates an amount of `raw` base units of `currency`.
    #[must_use]
    pub fn new(currency: Currency, raw: impl Into<BigInt>) -> Self {
        let ratio = Ratio::from_parts(raw.into(), currency.scale_factor());
        Self { currency, ratio }
    }

    /// Returns the currency this amount is denominated in.
    #[must_use]
    pub const fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Returns the raw integer amount in base units.
    #[must_use]
    pub const fn raw(&self) -> &BigInt {
        self.ratio.numerator()
    }

    /// Returns the underlying decimal-adjusted ratio (`raw / 10^decimals`).
    #[must_use]
    pub const fn as_ratio(&self) -> &Ratio {
        &self.ratio
    }

    /// Returns `true` if the raw amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.ratio.is_zero()
    }

    /// Adds two amounts of the same currency.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::CurrencyMismatch`] if the currencies differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.require_same_currency(other)?;
        Ok(Self::new(self.currency.clone(), self.raw() + other.raw()))
    }

    /// Subtracts `other` from `self`, same currency required.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::CurrencyMismatch`] if the currencies differ.
    pub fn subtract(&self, other: &Self) -> Result<Self> {
        self.require_same_currency(other)?;
        Ok(Self::new(self.currency.clone(), self.raw() - other.raw()))
    }

    /// Returns `true` if `self < other`, same currency required.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::CurrencyMismatch`] if the currencies differ.
    pub fn less_than(&self, other: &Self) -> Result<bool> {
        self.require_same_currency(other)?;
        Ok(self.ratio.less_than(&other.ratio))
    }

    /// Returns `true` if `self > other`, same currency required.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::CurrencyMismatch`] if the currencies differ.
    pub fn greater_than(&self, other: &Self) -> Result<bool> {
        self.require_same_currency(other)?;
        Ok(self.ratio.greater_than(&other.ratio))
    }

    /// Returns `true` if both amounts are equal, same currency required.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::CurrencyMismatch`] if the currencies differ.
    pub fn equal_to(&self, other: &Self) -> Result<bool> {
        self.require_same_currency(other)?;
        Ok(self.ratio.equal_to(&other.ratio))
    }

    /// Formats the decimal-adjusted value with significant digits.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidDigits`] if `digits` is zero.
    pub fn to_significant(&self, digits: u32, rounding: Rounding) -> Result<String> {
        self.ratio.to_significant(digits, rounding)
    }

    /// Formats the decimal-adjusted value with fixed decimal places.
    #[must_use]
    pub fn to_fixed(&self, decimal_places: u32, rounding: Rounding) -> String {
        self.ratio.to_fixed(decimal_places, rounding)
    }

    /// Formats the full-precision decimal value with no padding.
    ///
    /// The raw amount over `10^decimals` always terminates, so no
    /// rounding is involved.
    #[must_use]
    pub fn to_exact(&self) -> String {
        let mut s = self.ratio.to_fixed(u32::from(self.currency.decimals()), Rounding::Down);
        if s.contains('.') {
            while s.ends_with('0') {
                s.pop();
            }
            if s.ends_with('.') {
                s.pop();
            }
        }
        s
    }

    fn require_same_currency(&self, other: &Self) -> Result<()> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(DexError::CurrencyMismatch)
        }
    }
}

impl fmt::Display for CurrencyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.to_exact(), self.currency)
    }
}
