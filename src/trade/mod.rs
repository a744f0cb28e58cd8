//! Trade execution over a weighted path.
//!
//! [`TradeExecution`] realizes a hypothetical trade: it threads the
//! requested amount through a [`WeightedPath`]'s pairs, derives the
//! execution price, the post-trade mid price, and the price impact, and
//! exposes slippage-bounded guards plus comparators for ranking competing
//! trades. Everything is derived once at construction; the value is
//! immutable afterwards.

use core::cmp::Ordering;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::domain::{CurrencyAmount, Percent, PricePoint, Ratio};
use crate::error::{DexError, Result};
use crate::route::{PathBranch, WeightedPath};
use crate::traits::Pair;

/// The closed set of trade directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TradeDirection {
    /// The given amount fixes the input; the output is computed.
    ExactIn,
    /// The given amount fixes the output; the input is computed.
    ///
    /// Not implemented yet: requesting it fails with
    /// [`DexError::UnsupportedDirection`] before any computation.
    ExactOut,
}

impl TradeDirection {
    /// Returns `true` if this is [`TradeDirection::ExactIn`].
    #[must_use]
    pub const fn is_exact_in(&self) -> bool {
        matches!(self, Self::ExactIn)
    }

    /// Returns `true` if this is [`TradeDirection::ExactOut`].
    #[must_use]
    pub const fn is_exact_out(&self) -> bool {
        matches!(self, Self::ExactOut)
    }
}

impl fmt::Display for TradeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExactIn => write!(f, "ExactIn"),
            Self::ExactOut => write!(f, "ExactOut"),
        }
    }
}

/// The realized outcome of executing a [`WeightedPath`] with a requested
/// amount.
///
/// All fields are derived at construction and never mutated:
///
/// - `input_amount` / `output_amount` — the filled amounts;
/// - `execution_price` — the realized raw in/out ratio of this fill,
///   independent of the route's pre-trade mid price;
/// - `next_mid_price` — the path's mid price recomputed from post-trade
///   reserves, so repeated trades see compounding price movement;
/// - `price_impact` — how much worse the fill is than the pre-trade
///   quoted price.
///
/// Only the primary (first) branch is threaded through the pairs;
/// multi-branch output aggregation is not performed end-to-end, and
/// secondary branches pass through unexecuted.
#[derive(Debug, Clone)]
pub struct TradeExecution<P> {
    path: WeightedPath<P>,
    direction: TradeDirection,
    input_amount: CurrencyAmount,
    output_amount: CurrencyAmount,
    execution_price: PricePoint,
    next_mid_price: PricePoint,
    price_impact: Percent,
}

impl<P: Pair> TradeExecution<P> {
    /// Builds a trade from a path, a requested amount, and a direction.
    ///
    /// # Errors
    ///
    /// - [`DexError::UnsupportedDirection`] for
    ///   [`TradeDirection::ExactOut`] — a missing feature, not a misuse;
    ///   no partial trade is produced.
    /// - [`DexError::CurrencyMismatch`] if the amount's currency is not
    ///   the path's input currency.
    /// - Any failure surfaced by the pairs' output computation.
    pub fn new(
        path: WeightedPath<P>,
        amount: CurrencyAmount,
        direction: TradeDirection,
    ) -> Result<Self> {
        if direction.is_exact_out() {
            return Err(DexError::UnsupportedDirection);
        }
        if amount.currency() != path.input() {
            return Err(DexError::CurrencyMismatch);
        }

        // Thread the primary branch, keeping each post-swap pair.
        let primary = &path.branches()[0];
        let mut current = amount.clone();
        let mut updated_pairs = Vec::with_capacity(primary.pairs().len());
        for pair in primary.pairs() {
            let (output, next_pair) = pair.get_output_amount(&current)?;
            current = output;
            updated_pairs.push(next_pair);
        }
        let output_amount = current;

        // Rebuild the path over post-trade pair state; unexecuted
        // branches carry over unchanged.
        let mut next_branches = Vec::with_capacity(path.branches().len());
        next_branches.push(PathBranch::new(updated_pairs, primary.weight().clone()));
        next_branches.extend(path.branches()[1..].iter().cloned());
        let next_path = WeightedPath::new(
            next_branches,
            path.input().clone(),
            Some(path.output().clone()),
        )?;
        let next_mid_price = next_path.mid_price().clone();

        let execution_price = PricePoint::new(
            amount.currency().clone(),
            output_amount.currency().clone(),
            amount.raw().clone(),
            output_amount.raw().clone(),
        )?;

        let price_impact = compute_price_impact(path.mid_price(), &amount, &output_amount)?;

        Ok(Self {
            path,
            direction,
            input_amount: amount,
            output_amount,
            execution_price,
            next_mid_price,
            price_impact,
        })
    }

    /// Builds an exact-in trade: `amount` fixes the input.
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new).
    pub fn exact_in(path: WeightedPath<P>, amount: CurrencyAmount) -> Result<Self> {
        Self::new(path, amount, TradeDirection::ExactIn)
    }

    /// Builds an exact-out trade: `amount` fixes the output.
    ///
    /// # Errors
    ///
    /// Always fails with [`DexError::UnsupportedDirection`] until the
    /// direction is implemented.
    pub fn exact_out(path: WeightedPath<P>, amount: CurrencyAmount) -> Result<Self> {
        Self::new(path, amount, TradeDirection::ExactOut)
    }

    /// Returns the executed path.
    #[must_use]
    pub const fn path(&self) -> &WeightedPath<P> {
        &self.path
    }

    /// Returns the trade direction.
    #[must_use]
    pub const fn direction(&self) -> TradeDirection {
        self.direction
    }

    /// Returns the realized input amount.
    #[must_use]
    pub const fn input_amount(&self) -> &CurrencyAmount {
        &self.input_amount
    }

    /// Returns the realized output amount.
    #[must_use]
    pub const fn output_amount(&self) -> &CurrencyAmount {
        &self.output_amount
    }

    /// Returns the realized in/out price of this fill.
    #[must_use]
    pub const fn execution_price(&self) -> &PricePoint {
        &self.execution_price
    }

    /// Returns the path's mid price over post-trade reserves.
    #[must_use]
    pub const fn next_mid_price(&self) -> &PricePoint {
        &self.next_mid_price
    }

    /// Returns the price impact of this trade's own size.
    #[must_use]
    pub const fn price_impact(&self) -> &Percent {
        &self.price_impact
    }

    /// The minimum output guaranteed under the given slippage tolerance.
    ///
    /// For an exact-in trade the realized output is already exact, so it
    /// is returned unchanged for any non-negative tolerance; the
    /// `1/(1+tol)` deflation applies only to the exact-out direction.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::NegativeSlippageTolerance`] if the tolerance
    /// is below zero.
    pub fn minimum_amount_out(&self, slippage_tolerance: &Percent) -> Result<CurrencyAmount> {
        if slippage_tolerance.is_negative() {
            return Err(DexError::NegativeSlippageTolerance);
        }
        match self.direction {
            TradeDirection::ExactIn => Ok(self.output_amount.clone()),
            TradeDirection::ExactOut => {
                let deflated = Ratio::from(1)
                    .add(slippage_tolerance.as_ratio())
                    .invert()?
                    .multiply(&Ratio::from(self.output_amount.raw().clone()));
                Ok(CurrencyAmount::new(
                    self.output_amount.currency().clone(),
                    deflated.quotient(),
                ))
            }
        }
    }

    /// The maximum input spendable under the given slippage tolerance.
    ///
    /// For an exact-in trade the input is fixed by construction, so it is
    /// returned unchanged for any non-negative tolerance; the `1+tol`
    /// inflation applies only to the exact-out direction.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::NegativeSlippageTolerance`] if the tolerance
    /// is below zero.
    pub fn maximum_amount_in(&self, slippage_tolerance: &Percent) -> Result<CurrencyAmount> {
        if slippage_tolerance.is_negative() {
            return Err(DexError::NegativeSlippageTolerance);
        }
        match self.direction {
            TradeDirection::ExactIn => Ok(self.input_amount.clone()),
            TradeDirection::ExactOut => {
                let inflated = Ratio::from(1)
                    .add(slippage_tolerance.as_ratio())
                    .multiply(&Ratio::from(self.input_amount.raw().clone()));
                Ok(CurrencyAmount::new(
                    self.input_amount.currency().clone(),
                    inflated.quotient(),
                ))
            }
        }
    }
}

/// Price impact: `(exact_quote − output) / exact_quote` where
/// `exact_quote = mid_price.raw · input.raw`.
///
/// Computed on raw ratios only; decimal-adjusted values would double the
/// scaling.
fn compute_price_impact(
    mid_price: &PricePoint,
    input_amount: &CurrencyAmount,
    output_amount: &CurrencyAmount,
) -> Result<Percent> {
    let exact_quote = mid_price
        .raw()
        .multiply(&Ratio::from(input_amount.raw().clone()));
    let shortfall = exact_quote.subtract(&Ratio::from(output_amount.raw().clone()));
    Ok(Percent::from_ratio(shortfall.divide(&exact_quote)?))
}

/// Orders trades by most output first, then least input first.
///
/// Both trades must share one input currency and one output currency;
/// comparing trades on different currency pairs is a precondition
/// violation.
///
/// # Errors
///
/// Returns [`DexError::CurrencyMismatch`] if the trades' input or output
/// currencies differ.
pub fn input_output_comparator<P: Pair>(
    a: &TradeExecution<P>,
    b: &TradeExecution<P>,
) -> Result<Ordering> {
    if a.input_amount().currency() != b.input_amount().currency()
        || a.output_amount().currency() != b.output_amount().currency()
    {
        return Err(DexError::CurrencyMismatch);
    }
    // more output ranks earlier; on a tie, less input ranks earlier
    let by_output = b
        .output_amount()
        .as_ratio()
        .cmp(a.output_amount().as_ratio());
    if by_output != Ordering::Equal {
        return Ok(by_output);
    }
    Ok(a.input_amount().as_ratio().cmp(b.input_amount().as_ratio()))
}

/// Extends [`input_output_comparator`] with two tie-breaks: lower price
/// impact first, then fewer hops (a proxy for transaction cost).
///
/// # Errors
///
/// Returns [`DexError::CurrencyMismatch`] if the trades' input or output
/// currencies differ.
pub fn trade_comparator<P: Pair>(
    a: &TradeExecution<P>,
    b: &TradeExecution<P>,
) -> Result<Ordering> {
    let io = input_output_comparator(a, b)?;
    if io != Ordering::Equal {
        return Ok(io);
    }
    let by_impact = a.price_impact().as_ratio().cmp(b.price_impact().as_ratio());
    if by_impact != Ordering::Equal {
        return Ok(by_impact);
    }
    Ok(a.path().hops().cmp(&b.path().hops()))
}
