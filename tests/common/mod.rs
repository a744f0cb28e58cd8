//! Shared fixtures for integration tests.
//!
//! [`FixedRatePair`] converts amounts by a pinned rational rate instead
//! of an AMM curve, so tests can assert exact numbers. Reserves still
//! move on every query, which makes post-trade mid-price movement
//! observable.

use num_bigint::BigInt;
use num_integer::Integer;

use prism_dex::domain::{ChainId, Currency, CurrencyAmount};
use prism_dex::error::{DexError, Result};
use prism_dex::traits::Pair;

/// Builds a test currency on `chain` whose address ends in `last_byte`.
pub fn currency_on(chain: ChainId, last_byte: u8, decimals: u8, symbol: &str) -> Currency {
    let address = format!("0x{:038x}{last_byte:02x}", 0);
    Currency::new(chain, address, decimals, Some(symbol), None)
        .unwrap_or_else(|_| unreachable!("test address is well-formed"))
}

/// Builds a test currency on chain 1.
pub fn currency(last_byte: u8, decimals: u8, symbol: &str) -> Currency {
    currency_on(ChainId::new(1), last_byte, decimals, symbol)
}

/// A pair converting token0→token1 by `rate.0 / rate.1` (the reverse
/// direction inverts the rate), flooring the output.
#[derive(Debug, Clone)]
pub struct FixedRatePair {
    chain: ChainId,
    reserve0: CurrencyAmount,
    reserve1: CurrencyAmount,
    rate: (u64, u64),
}

impl FixedRatePair {
    pub fn new(
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

    /// Overrides the reported chain id, for chain-mismatch scenarios.
    pub fn on_chain(mut self, chain: ChainId) -> Self {
        self.chain = chain;
        self
    }
}

impl Pair for FixedRatePair {
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
        let new_out =
            CurrencyAmount::new(reserve_out.currency().clone(), reserve_out.raw() - &out_raw);
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
