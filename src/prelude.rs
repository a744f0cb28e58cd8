//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring the frequently used
//! items into scope:
//!
//! ```rust
//! use prism_dex::prelude::*;
//! ```

// Re-export domain types
pub use crate::domain::{
    ChainId, Currency, CurrencyAmount, Percent, PricePoint, Ratio, Rounding,
};

// Re-export the pair capability
pub use crate::traits::Pair;

// Re-export route and trade types
pub use crate::route::{PathBranch, WeightedPath};
pub use crate::trade::{
    input_output_comparator, trade_comparator, TradeDirection, TradeExecution,
};

// Re-export error types
pub use crate::error::{DexError, Result};
