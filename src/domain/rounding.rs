//! Explicit rounding policy for the formatting boundary.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Specifies how the final digit is resolved when a [`Ratio`](super::Ratio)
/// is rendered as a decimal string.
///
/// Rounding exists **only** at the formatting boundary. Intermediate
/// arithmetic is exact and never rounds; the single non-formatting
/// truncation in the engine is [`Ratio::quotient`](super::Ratio::quotient),
/// which floors.
///
/// # Examples
///
/// ```
/// use prism_dex::domain::Rounding;
///
/// let r = Rounding::HalfUp;
/// assert!(r.is_half_up());
/// assert!(!r.is_down());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rounding {
    /// Truncate toward zero.
    Down,
    /// Round to nearest; ties away from zero.
    HalfUp,
    /// Round away from zero whenever any fractional part remains.
    Up,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }

    /// Returns `true` if this is [`Rounding::HalfUp`].
    #[must_use]
    pub const fn is_half_up(&self) -> bool {
        matches!(self, Self::HalfUp)
    }

    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns a human-readable description of the rounding policy.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Down => "truncate toward zero",
            Self::HalfUp => "round half away from zero",
            Self::Up => "round away from zero",
        }
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
