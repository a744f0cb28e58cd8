//! Deterministic [`Pair`] fixture for unit tests.
//!
//! `MockPair` converts amounts by a fixed rational rate instead of a real
//! swap formula, so route and trade tests can pin exact expected numbers.
//! Reserves still move on every query, which lets post-trade mid-price
//! tests observe compounding movement.

use num_bigint::BigInt;
use num_integer::Integer;

use crate::domain::{ChainId, Currency, CurrencyAmount};
use crate::error::{DexError, Result};
use crate::traits::Pair;

/// Builds a throwaway currency whose address ends in `last_byte`.
pub(crate) fn test_currency(last_byte: u8, decimals: u8) -> Currency {
    let address = format!("0x{:038x}{last_byte:02x}", 0);
    match Currency::new(ChainId::new(1), address, decimals, None, None) {
        Ok(c) => c,
        Err(_) => unreachable!("test address is well-formed"),
    }
}

/// A pair that converts token0→token1 by `rate.0 / rate.1` (and the
/// reverse direction by the inverted rate), flooring the result.
#[derive(Debug, Clone)]
pub(crate) struct MockPair {
    chain: ChainId,
    reserve0: CurrencyAmount,
    reserve1: CurrencyAmount,
    rate: (u64, u64),
}

impl MockPair {
    pub(crate) fn with_rate(
        token0: Currency,
        token1: Currency,
        reserve0: u64,
        reserve1: u64,
        rate: (u64, u64),
    ) -> Self {
        let chain = token0.chain_id();
        Self {
            chain,
            reserve0: CurrencyAmount::new(token0, reserve0),
            reserve1: CurrencyAmount::new(token1, reserve1),
            rate,
        }
    }

    /// Overrides the reported chain id, for chain-mismatch tests.
    pub(crate) fn on_chain(mut self, chain: ChainId) -> Self {
        self.chain = chain;
        self
    }
}

impl Pair for MockPair {
    fn chain_id(&self) -> ChainId {
        self.chain
    }

    fn token0(&self) -> &Currency {
        self.reserve0.currency()
    }

    fn token1(&self) -> &Currency {
        self.reserve1.currency()
    }

    fn reserve0(&self) -> &CurrencyAmount {
        &self.reserve0
    }

    fn reserve1(&self) -> &CurrencyAmount {
        &self.reserve1
    }

    fn get_output_amount(&self, input: &CurrencyAmount) -> Result<(CurrencyAmount, Self)> {
        let (num, den, zero_to_one) = if input.currency() == self.token0() {
            (self.rate.0, self.rate.1, true)
        } else if input.currency() == self.token1() {
            (self.rate.1, self.rate.0, false)
        } else {
            return Err(DexError::CurrencyMismatch);
        };

        let out_raw = (input.raw() * num).div_floor(&BigInt::from(den));
        let (out_currency, reserve_in, reserve_out) = if zero_to_one {
            (self.token1().clone(), &self.reserve0, &self.reserve1)
        } else {
            (self.token0().clone(), &self.reserve1, &self.reserve0)
        };

        let new_in = CurrencyAmount::new(
            reserve_in.currency().clone(),
            reserve_in.raw() + input.raw(),
        );
        let new_out = CurrencyAmount::new(reserve_out.currency().clone(), reserve_out.raw() - &out_raw);
        let updated = if zero_to_one {
            Self {
                chain: self.chain,
                reserve0: new_in,
                reserve1: new_out,
                rate: self.rate,
            }
        } else {
            Self {
                chain: self.chain,
                reserve0: new_out,
                reserve1: new_in,
                rate: self.rate,
            }
        };

        Ok((CurrencyAmount::new(out_currency, out_raw), updated))
    }
}
