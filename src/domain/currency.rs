//! Currency identity type.

use core::fmt;
use core::hash::{Hash, Hasher};

use num_bigint::BigInt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::chain::ChainId;
use super::ratio::pow10;
use crate::error::{DexError, Result};

/// The conventional address of a chain's native currency.
pub const NATIVE_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// A token identity scoped to one chain.
///
/// Identity is the pair `(chain_id, address)` with the address compared
/// case-insensitively; `decimals`, `symbol`, and `name` are metadata and
/// never participate in equality. Two separately constructed values with
/// the same identity are fully interchangeable — equality is structural,
/// never referential, and nothing in the engine requires a shared
/// instance.
///
/// A `Currency` is immutable once constructed.
///
/// # Examples
///
/// ```
/// use prism_dex::domain::{ChainId, Currency};
///
/// let usdc = Currency::new(
///     ChainId::new(1),
///     "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
///     6,
///     Some("USDC"),
///     Some("USD Coin"),
/// )
/// .expect("valid address");
///
/// // identity ignores address casing and metadata
/// let same = Currency::new(
///     ChainId::new(1),
///     "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48",
///     6,
///     None,
///     None,
/// )
/// .expect("valid address");
/// assert_eq!(usdc, same);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Currency {
    chain_id: ChainId,
    address: String,
    decimals: u8,
    symbol: Option<String>,
    name: Option<String>,
}

impl Currency {
    /// Creates a new `Currency` after validating the address shape.
    ///
    /// The address must be `0x` followed by exactly 40 hex digits. It is
    /// stored as given; comparison and hashing ignore case.
    ///
    /// # Errors
    ///
    /// Returns [`DexError::InvalidAddress`] on a malformed address.
    pub fn new(
        chain_id: ChainId,
        address: impl Into<String>,
        decimals: u8,
        symbol: Option<&str>,
        name: Option<&str>,
    ) -> Result<Self> {
        let address = address.into();
        if !is_valid_address(&address) {
            return Err(DexError::InvalidAddress);
        }
        Ok(Self {
            chain_id,
            address,
            decimals,
            symbol: symbol.map(str::to_string),
            name: name.map(str::to_string),
        })
    }

    /// Builds the chain-native currency (18 decimals at the zero address).
    ///
    /// This is an ordinary value, not a singleton: any other `Currency`
    /// with the same chain id and address is equal to it.
    #[must_use]
    pub fn native(chain_id: ChainId) -> Self {
        Self {
            chain_id,
            address: NATIVE_ADDRESS.to_string(),
            decimals: 18,
            symbol: Some("ETH".to_string()),
            name: Some("Ether".to_string()),
        }
    }

    /// Returns the chain this currency lives on.
    #[must_use]
    pub const fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    /// Returns the address as originally supplied.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the number of decimal places of the raw unit.
    #[must_use]
    pub const fn decimals(&self) -> u8 {
        self.decimals
    }

    /// Returns the ticker symbol, if any.
    #[must_use]
    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    /// Returns the display name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns `true` if this is the conventional native-currency address.
    #[must_use]
    pub fn is_native(&self) -> bool {
        self.address.eq_ignore_ascii_case(NATIVE_ADDRESS)
    }

    /// Returns `10^decimals`, the raw units per whole currency unit.
    #[must_use]
    pub fn scale_factor(&self) -> BigInt {
        pow10(u32::from(self.decimals))
    }
}

/// `0x` followed by exactly 40 hex digits.
fn is_valid_address(address: &str) -> bool {
    let Some(hex) = address.strip_prefix("0x") else {
        return false;
    };
    hex.len() == 40 && hex.bytes().all(|b| b.is_ascii_hexdigit())
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id && self.address.eq_ignore_ascii_case(&other.address)
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
        for b in self.address.bytes() {
            state.write_u8(b.to_ascii_lowercase());
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.symbol {
            Some(symbol) => f.write_str(symbol),
            None => f.write_str(&self.address),
        }
    }
}
