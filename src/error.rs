//! Unified error types for the prism-dex engine.
//!
//! Every fallible operation across the crate returns [`DexError`] as its
//! error type. All failures are precondition violations: the engine never
//! retries, logs, or produces a partial result — construction either fully
//! succeeds or fails with one of the variants below.
//!
//! Each variant carries a short stable code (see [`DexError::code`]) so
//! callers can branch on the failure kind without matching display text.

use thiserror::Error;

/// Convenience alias used by all fallible operations in this crate.
pub type Result<T> = core::result::Result<T, DexError>;

/// The closed set of precondition violations raised by the engine.
///
/// [`DexError::UnsupportedDirection`] is deliberately distinct from the
/// rest: it signals a missing feature (the exact-out trade direction),
/// not a misuse of the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum DexError {
    /// A route was constructed with zero branches, or a branch with zero pairs.
    #[error("path has no branches")]
    EmptyPath,

    /// Pairs within one path span more than one chain identifier.
    #[error("pairs span more than one chain identifier")]
    ChainMismatch,

    /// An operation required two currency-bearing values to reference the
    /// same currency and they did not.
    #[error("operation requires matching currencies")]
    CurrencyMismatch,

    /// A slippage tolerance below zero was supplied.
    #[error("slippage tolerance must be non-negative")]
    NegativeSlippageTolerance,

    /// The exact-out trade direction was requested; it is not implemented.
    #[error("trade direction is not supported")]
    UnsupportedDirection,

    /// A rational operation produced or required a zero denominator.
    #[error("ratio denominator must be non-zero")]
    ZeroDenominator,

    /// A currency address is not `0x` followed by 40 hex digits.
    #[error("currency address is malformed")]
    InvalidAddress,

    /// Zero significant digits were requested from a formatting operation.
    #[error("significant digits must be at least one")]
    InvalidDigits,
}

impl DexError {
    /// Returns the short stable code identifying this failure kind.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyPath => "EMPTY_PATH",
            Self::ChainMismatch => "CHAIN_MISMATCH",
            Self::CurrencyMismatch => "CURRENCY_MISMATCH",
            Self::NegativeSlippageTolerance => "NEGATIVE_SLIPPAGE",
            Self::UnsupportedDirection => "UNSUPPORTED_DIRECTION",
            Self::ZeroDenominator => "ZERO_DENOMINATOR",
            Self::InvalidAddress => "INVALID_ADDRESS",
            Self::InvalidDigits => "INVALID_DIGITS",
        }
    }

    /// Returns `true` if this error signals a missing feature rather than
    /// a precondition violation.
    #[must_use]
    pub const fn is_unimplemented(&self) -> bool {
        matches!(self, Self::UnsupportedDirection)
    }
}
