//! Fundamental domain value types used throughout the pricing engine.
//!
//! This module contains the exact-arithmetic value types the engine is
//! built from: rational numbers, currencies, amounts, percents, and
//! prices. All types are immutable once constructed; every operation
//! allocates a new value, so shared inputs can be evaluated concurrently
//! without coordination.

mod chain;
mod currency;
mod currency_amount;
mod percent;
mod price;
mod ratio;
mod rounding;

#[cfg(test)]
mod proptest_properties;

pub use chain::ChainId;
pub use currency::{Currency, NATIVE_ADDRESS};
pub use currency_amount::CurrencyAmount;
pub use percent::Percent;
pub use price::PricePoint;
pub use ratio::Ratio;
pub use rounding::Rounding;
