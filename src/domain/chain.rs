//! Chain identifier type.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifies the chain a currency or pair lives on.
///
/// Every pair in a path must share one `ChainId`; the engine never mixes
/// chains within a single route. There is no built-in registry of known
/// chains — callers construct whichever identifiers their deployment
/// needs, so multiple chain configurations can coexist.
///
/// # Examples
///
/// ```
/// use prism_dex::domain::ChainId;
///
/// let mainnet = ChainId::new(1);
/// assert_eq!(mainnet.get(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChainId(u64);

impl ChainId {
    /// Creates a new `ChainId` from a raw identifier.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_get() {
        assert_eq!(ChainId::new(137).get(), 137);
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(ChainId::default().get(), 0);
    }

    #[test]
    fn equality() {
        assert_eq!(ChainId::new(1), ChainId::new(1));
        assert_ne!(ChainId::new(1), ChainId::new(56));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", ChainId::new(42161)), "42161");
    }

    #[test]
    fn ordering() {
        assert!(ChainId::new(1) < ChainId::new(10));
    }
}
