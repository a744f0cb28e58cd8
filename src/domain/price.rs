//! Directed exchange rate between two currencies.

use core::fmt;

use num_bigint::BigInt;

use super::currency::Currency;
use super::currency_amount::CurrencyAmount;
use super::percent::Percent;
use super::ratio::Ratio;
use super::Rounding;
use crate::error::{DexError, Result};
use crate::route::WeightedPath;
use crate::traits::Pair;

/// An exchange rate quoting `quote_currency` units per `base_currency`
/// unit.
///
/// The [`raw`](Self::raw) ratio is held in un-adjusted integer reserve
/// units; [`scalar`](Self::scalar) (`10^base_decimals / 10^quote_decimals`)
/// exists purely to convert it into the human-scale
/// [`adjusted`](Self::adjusted) value. Direction matters: a price for
/// (WETH, USDC) is not a price for (USDC, WETH) — [`invert`](Self::invert)
/// converts between the two.
///
/// # Examples
///
/// ```
/// use prism_dex::domain::{ChainId, Currency, PricePoint, Rounding};
///
/// let chain = ChainId::new(1);
/// let weth = Currency::new(chain, "0x0000000000000000000000000000000000000001", 18, None, None)
///     .expect("valid address");
/// let usdc = Currency::new(chain, "0x0000000000000000000000000000000000000002", 6, None, None)
///     .expect("valid address");
///
/// // 2000 USDC (raw 2_000e6) per 1 WETH (raw 1e18)
/// let price = PricePoint::new(weth, usdc, 1_000_000_000_000_000_000_u64, 2_000_000_000_u64)
///     .expect("non-zero base amount");
/// assert_eq!(price.to_fixed(2, Rounding::Down), "2000.00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricePoint {
    base_currency: Currency,
    quote_currency: Currency,
    raw: Ratio,
    scalar: Ratio,
}

impl PricePoint {
    /// Creates a price from raw integer amounts on each side:
    /// `quote_amount / base_amount` in base units.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::ZeroDenominator`] if `base_amount` is zero.
    pub fn new(
        base_currency: Currency,
        quote_currency: Currency,
        base_amount: impl Into<BigInt>,
        quote_amount: impl Into<BigInt>,
    ) -> Result<Self> {
        let raw = Ratio::new(quote_amount, base_amount)?;
        Ok(Self::with_ratio(base_currency, quote_currency, raw))
    }

    /// Builds a price from an already-formed raw ratio.
    fn with_ratio(base_currency: Currency, quote_currency: Currency, raw: Ratio) -> Self {
        let scalar = Ratio::from_parts(
            base_currency.scale_factor(),
            quote_currency.scale_factor(),
        );
        Self {
            base_currency,
            quote_currency,
            raw,
            scalar,
        }
    }

    /// Price of one hop through `pair`, entered on the `input` side:
    /// output-reserve over input-reserve.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::CurrencyMismatch`] if `input` is not one of the
    /// pair's currencies, or [`DexError::ZeroDenominator`] if the input
    /// reserve is zero.
    pub fn from_hop<P: Pair>(pair: &P, input: &Currency) -> Result<Self> {
        let (reserve_in, reserve_out) = if input == pair.token0() {
            (pair.reserve0(), pair.reserve1())
        } else if input == pair.token1() {
            (pair.reserve1(), pair.reserve0())
        } else {
            return Err(DexError::CurrencyMismatch);
        };
        Self::new(
            reserve_in.currency().clone(),
            reserve_out.currency().clone(),
            reserve_in.raw().clone(),
            reserve_out.raw().clone(),
        )
    }

    /// Fast mid price of a path: the first hop of the first branch.
    ///
    /// This is the latency-favoring shortcut — it ignores later hops and
    /// branch weights entirely. Use
    /// [`from_path_composed`](Self::from_path_composed) for the full
    /// composition.
    ///
    /// # Errors
    ///
    /// Propagates [`from_hop`](Self::from_hop) failures.
    pub fn from_path<P: Pair>(path: &WeightedPath<P>) -> Result<Self> {
        let branch = &path.branches()[0];
        let entry = &path.currency_paths()[0][0];
        Self::from_hop(&branch.pairs()[0], entry)
    }

    /// Fully composed mid price of a path: each branch's hop prices are
    /// chain-multiplied, then the branch prices are blended into one
    /// effective price weighted by branch percent.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::CurrencyMismatch`] if a branch's composed
    /// price does not run from the path input to the path output;
    /// propagates hop-price failures.
    pub fn from_path_composed<P: Pair>(path: &WeightedPath<P>) -> Result<Self> {
        let mut blended: Option<Ratio> = None;

        for (branch, tokens) in path.branches().iter().zip(path.currency_paths()) {
            let mut price = Self::from_hop(&branch.pairs()[0], &tokens[0])?;
            for (i, pair) in branch.pairs().iter().enumerate().skip(1) {
                price = price.multiply(&Self::from_hop(pair, &tokens[i])?)?;
            }
            if price.base_currency() != path.input() || price.quote_currency() != path.output() {
                return Err(DexError::CurrencyMismatch);
            }
            let weighted = price.raw.multiply(branch.weight().as_ratio());
            blended = Some(match blended {
                Some(acc) => acc.add(&weighted),
                None => weighted,
            });
        }

        let raw = blended.ok_or(DexError::EmptyPath)?;
        Ok(Self::with_ratio(
            path.input().clone(),
            path.output().clone(),
            raw,
        ))
    }

    /// Returns the base (denominator-side) currency.
    #[must_use]
    pub const fn base_currency(&self) -> &Currency {
        &self.base_currency
    }

    /// Returns the quote (numerator-side) currency.
    #[must_use]
    pub const fn quote_currency(&self) -> &Currency {
        &self.quote_currency
    }

    /// Returns the raw ratio in un-adjusted integer units.
    #[must_use]
    pub const fn raw(&self) -> &Ratio {
        &self.raw
    }

    /// Returns the decimal-scaling factor.
    #[must_use]
    pub const fn scalar(&self) -> &Ratio {
        &self.scalar
    }

    /// Returns the human-scale price: `raw · scalar`.
    #[must_use]
    pub fn adjusted(&self) -> Ratio {
        self.raw.multiply(&self.scalar)
    }

    /// Swaps base and quote; inverting twice restores the original.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::ZeroDenominator`] if the price is zero.
    pub fn invert(&self) -> Result<Self> {
        Ok(Self::with_ratio(
            self.quote_currency.clone(),
            self.base_currency.clone(),
            self.raw.invert()?,
        ))
    }

    /// Chains this price with the next one: `(A→B) · (B→C) = A→C`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::CurrencyMismatch`] unless `self.quote_currency`
    /// equals `other.base_currency`.
    pub fn multiply(&self, other: &Self) -> Result<Self> {
        if self.quote_currency != other.base_currency {
            return Err(DexError::CurrencyMismatch);
        }
        Ok(Self::with_ratio(
            self.base_currency.clone(),
            other.quote_currency.clone(),
            self.raw.multiply(&other.raw),
        ))
    }

    /// As [`multiply`](Self::multiply), then scales the resulting ratio by
    /// a percent weight. Used when blending prices across parallel path
    /// branches.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::CurrencyMismatch`] unless `self.quote_currency`
    /// equals `other.base_currency`.
    pub fn multiply_with_percent(&self, other: &Self, percent: &Percent) -> Result<Self> {
        let chained = self.multiply(other)?;
        Ok(Self::with_ratio(
            chained.base_currency,
            chained.quote_currency,
            chained.raw.multiply(percent.as_ratio()),
        ))
    }

    /// Converts an amount of the base currency into the quote currency,
    /// flooring to a raw integer amount.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::CurrencyMismatch`] if `amount` is not
    /// denominated in the base currency.
    pub fn quote(&self, amount: &CurrencyAmount) -> Result<CurrencyAmount> {
        if amount.currency() != &self.base_currency {
            return Err(DexError::CurrencyMismatch);
        }
        let scaled = self.raw.multiply(&Ratio::from(amount.raw().clone()));
        Ok(CurrencyAmount::new(
            self.quote_currency.clone(),
            scaled.quotient(),
        ))
    }

    /// Formats the adjusted value with significant digits.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidDigits`](crate::error::DexError::InvalidDigits)
    /// if `digits` is zero.
    pub fn to_significant(&self, digits: u32, rounding: Rounding) -> Result<String> {
        self.adjusted().to_significant(digits, rounding)
    }

    /// Formats the adjusted value with fixed decimal places.
    #[must_use]
    pub fn to_fixed(&self, decimal_places: u32, rounding: Rounding) -> String {
        self.adjusted().to_fixed(decimal_places, rounding)
    }
}

impl fmt::Display for PricePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}/{}",
            self.to_fixed(6, Rounding::Down),
            self.quote_currency,
            self.base_currency
        )
    }
}
