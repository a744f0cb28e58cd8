//! The opaque liquidity-pair capability consumed by the engine.
//!
//! [`Pair`] is the single seam between this crate and the swap-formula
//! layer. The engine never computes a swap itself: it asks the pair what
//! a given input yields, and the pair answers with both the output amount
//! and a **new** pair value carrying the post-swap reserves. Everything
//! the engine derives — hop prices, route outputs, post-trade mid prices —
//! flows through this contract.
//!
//! # Purity Invariant
//!
//! [`Pair::get_output_amount`] must not mutate the queried pair. Each
//! call returns a fresh value representing reserves after that swap, so
//! arbitrarily many callers can evaluate the engine concurrently on
//! shared pairs, and a trade can recompute its mid price from post-trade
//! state without touching the pre-trade inputs.
//!
//! # Dispatch Model
//!
//! Paths and trades are generic over `P: Pair` — static dispatch, no
//! `dyn` objects. The `Clone` supertrait lets routes carry unexecuted
//! pairs forward unchanged.

use crate::domain::{ChainId, Currency, CurrencyAmount};
use crate::error::{DexError, Result};

/// A liquidity pair between two currencies on one chain.
///
/// Implementations live outside this crate (constant-product pools,
/// test fixtures, remote quoters). The engine relies only on the
/// identity accessors, the reserve accessors, and the pure swap query.
///
/// # Errors
///
/// [`get_output_amount`](Self::get_output_amount) fails with
/// [`DexError::CurrencyMismatch`] when the input amount's currency is not
/// one of the pair's two currencies; implementations may surface their
/// own precondition violations through the same error set.
pub trait Pair: Clone {
    /// Returns the chain this pair lives on.
    fn chain_id(&self) -> ChainId;

    /// Returns the first of the pair's two currencies.
    fn token0(&self) -> &Currency;

    /// Returns the second of the pair's two currencies.
    fn token1(&self) -> &Currency;

    /// Returns the current reserve on the [`token0`](Self::token0) side.
    fn reserve0(&self) -> &CurrencyAmount;

    /// Returns the current reserve on the [`token1`](Self::token1) side.
    fn reserve1(&self) -> &CurrencyAmount;

    /// Computes the output obtainable for `input` against this pair's
    /// swap invariant, plus a new pair value with post-swap reserves.
    ///
    /// Must be pure: the receiver is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::CurrencyMismatch`] if `input` is not
    /// denominated in one of the pair's currencies.
    fn get_output_amount(&self, input: &CurrencyAmount) -> Result<(CurrencyAmount, Self)>
    where
        Self: Sized;

    /// Returns `true` if `currency` is one of the pair's two currencies.
    fn involves(&self, currency: &Currency) -> bool {
        self.token0() == currency || self.token1() == currency
    }

    /// Returns the counterpart of `currency` in this pair.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::CurrencyMismatch`] if `currency` is not in the
    /// pair.
    fn other(&self, currency: &Currency) -> Result<&Currency> {
        if currency == self.token0() {
            Ok(self.token1())
        } else if currency == self.token1() {
            Ok(self.token0())
        } else {
            Err(DexError::CurrencyMismatch)
        }
    }

    /// Returns the reserve denominated in `currency`.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::CurrencyMismatch`] if `currency` is not in the
    /// pair.
    fn reserve_of(&self, currency: &Currency) -> Result<&CurrencyAmount> {
        if currency == self.token0() {
            Ok(self.reserve0())
        } else if currency == self.token1() {
            Ok(self.reserve1())
        } else {
            Err(DexError::CurrencyMismatch)
        }
    }
}
