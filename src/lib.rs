//! # Prism DEX
//!
//! Pricing and routing core for a decentralized-exchange SDK: compute
//! exact exchange rates, compose multi-hop/multi-split trade routes, and
//! derive the realized outcome of a hypothetical trade — amounts, price,
//! slippage bounds, price impact — entirely with exact rational
//! arithmetic over arbitrary-precision integers. Floating point appears
//! nowhere: one ULP of error can misprice a financial instrument, so
//! rounding exists only at the decimal-string formatting boundary.
//!
//! # What Lives Here
//!
//! - [`Ratio`](domain::Ratio) — arbitrary-precision rational, the
//!   algebraic base type
//! - [`PricePoint`](domain::PricePoint) — a ratio specialized to an
//!   ordered currency pair, with decimal scaling
//! - [`WeightedPath`](route::WeightedPath) — an ordered, possibly
//!   branching path of liquidity pairs with per-branch weights
//! - [`TradeExecution`](trade::TradeExecution) — realized trade outcome,
//!   slippage guards, and ranking comparators
//!
//! On-chain data fetching, token metadata resolution, transport, and the
//! swap formula itself are collaborator concerns: the engine consumes
//! pairs only through the [`Pair`](traits::Pair) capability trait.
//!
//! # Quick Start
//!
//! ```rust
//! use prism_dex::domain::{ChainId, Currency, CurrencyAmount, PricePoint, Rounding};
//!
//! let chain = ChainId::new(1);
//! let weth = Currency::new(
//!     chain,
//!     "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2",
//!     18,
//!     Some("WETH"),
//!     Some("Wrapped Ether"),
//! )
//! .expect("valid address");
//! let usdc = Currency::new(
//!     chain,
//!     "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
//!     6,
//!     Some("USDC"),
//!     Some("USD Coin"),
//! )
//! .expect("valid address");
//!
//! // 2000 USDC per WETH, quoted from raw reserve units
//! let price = PricePoint::new(
//!     weth.clone(),
//!     usdc,
//!     1_000_000_000_000_000_000_u64,
//!     2_000_000_000_u64,
//! )
//! .expect("non-zero base amount");
//!
//! assert_eq!(price.to_significant(5, Rounding::Down).expect("digits > 0"), "2000");
//!
//! // convert 0.5 WETH into USDC, flooring to raw units
//! let half_weth = CurrencyAmount::new(weth, 500_000_000_000_000_000_u64);
//! let quoted = price.quote(&half_weth).expect("currency matches");
//! assert_eq!(quoted.to_exact(), "1000");
//! ```
//!
//! Routes and trades build on an externally supplied [`Pair`](traits::Pair)
//! implementation; see the `tests/` directory for a complete end-to-end
//! flow against a deterministic fixture.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Consumer    │  supplies Pair implementations + currencies
//! └──────┬───────┘
//!        │ WeightedPath::new(branches, input, output)
//!        ▼
//! ┌──────────────┐
//! │    Route      │  validates chain/membership, infers hop currencies
//! └──────┬───────┘
//!        │ TradeExecution::exact_in(path, amount)
//!        ▼
//! ┌──────────────┐
//! │    Trade      │  threads pairs, derives prices/impact/guards
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │    Domain     │  Ratio, PricePoint, CurrencyAmount, Percent, …
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Exact-arithmetic value types: [`Ratio`](domain::Ratio), [`PricePoint`](domain::PricePoint), [`Currency`](domain::Currency), etc. |
//! | [`traits`] | The opaque [`Pair`](traits::Pair) capability consumed by the engine |
//! | [`route`]  | [`WeightedPath`](route::WeightedPath) construction and validation |
//! | [`trade`]  | [`TradeExecution`](trade::TradeExecution), directions, comparators |
//! | [`error`]  | [`DexError`](error::DexError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types |
//!
//! # Concurrency
//!
//! Every value is immutable once constructed and every operation
//! allocates new values, so shared inputs can be evaluated from any
//! number of threads without coordination. The one discipline imposed on
//! collaborators: a [`Pair`](traits::Pair) query must return post-swap
//! state as a new value rather than mutating in place.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `serde` | no | `Serialize`/`Deserialize` on the plain-data types |

pub mod domain;
pub mod error;
pub mod prelude;
pub mod route;
pub mod trade;
pub mod traits;
