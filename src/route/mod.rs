//! Trade routes: ordered, possibly branching paths of liquidity pairs.
//!
//! A [`WeightedPath`] connects an input currency to an output currency
//! through one or more [`PathBranch`] values, each an ordered pair
//! sequence carrying a percent weight of the total trade. The path is
//! validated and its per-branch currency sequence inferred once, at
//! construction; the value is immutable afterwards.

use crate::domain::{ChainId, Currency, Percent, PricePoint};
use crate::error::{DexError, Result};
use crate::traits::Pair;

/// One parallel sub-path of a route: an ordered pair sequence plus the
/// percent of the total trade it carries.
#[derive(Debug, Clone)]
pub struct PathBranch<P> {
    pairs: Vec<P>,
    weight: Percent,
}

impl<P: Pair> PathBranch<P> {
    /// Creates a branch from its pair sequence and weight.
    #[must_use]
    pub fn new(pairs: Vec<P>, weight: Percent) -> Self {
        Self { pairs, weight }
    }

    /// Returns the ordered pairs traversed by this branch.
    #[must_use]
    pub fn pairs(&self) -> &[P] {
        &self.pairs
    }

    /// Returns the percent of the total trade carried by this branch.
    #[must_use]
    pub const fn weight(&self) -> &Percent {
        &self.weight
    }

    /// Returns the number of hops in this branch.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.pairs.len()
    }
}

/// An immutable route from an input currency to an output currency.
///
/// Construction validates, in order:
///
/// 1. at least one branch, each with at least one pair
///    ([`DexError::EmptyPath`]);
/// 2. every pair across every branch shares one [`ChainId`]
///    ([`DexError::ChainMismatch`]);
/// 3. the first pair of every branch involves the input currency, and —
///    when an output currency is declared — the last pair of every branch
///    involves it ([`DexError::CurrencyMismatch`]);
/// 4. each branch's hop sequence is connected: every pair contains the
///    currency reached by the previous hop ([`DexError::CurrencyMismatch`]).
///
/// The per-branch currency sequence is inferred during validation and
/// exposed via [`currency_paths`](Self::currency_paths). When no output
/// currency is declared, it defaults to the last currency reached by the
/// last branch.
///
/// [`mid_price`](Self::mid_price) stores the fast first-hop price
/// ([`PricePoint::from_path`]); the fully weighted composition is
/// available on demand via [`mid_price_composed`](Self::mid_price_composed).
#[derive(Debug, Clone)]
pub struct WeightedPath<P> {
    branches: Vec<PathBranch<P>>,
    currency_paths: Vec<Vec<Currency>>,
    input: Currency,
    output: Currency,
    mid_price: PricePoint,
}

impl<P: Pair> WeightedPath<P> {
    /// Builds and validates a path.
    ///
    /// # Errors
    ///
    /// See the type-level validation list.
    pub fn new(
        branches: Vec<PathBranch<P>>,
        input: Currency,
        output: Option<Currency>,
    ) -> Result<Self> {
        if branches.is_empty() || branches.iter().any(|b| b.pairs.is_empty()) {
            return Err(DexError::EmptyPath);
        }

        let chain_id = branches[0].pairs[0].chain_id();
        let single_chain = branches
            .iter()
            .all(|b| b.pairs.iter().all(|p| p.chain_id() == chain_id));
        if !single_chain {
            return Err(DexError::ChainMismatch);
        }

        for branch in &branches {
            if !branch.pairs[0].involves(&input) {
                return Err(DexError::CurrencyMismatch);
            }
        }

        let mut currency_paths = Vec::with_capacity(branches.len());
        for branch in &branches {
            let mut tokens = Vec::with_capacity(branch.pairs.len() + 1);
            let mut current = input.clone();
            tokens.push(current.clone());
            for pair in &branch.pairs {
                let next = pair.other(&current)?.clone();
                tokens.push(next.clone());
                current = next;
            }
            currency_paths.push(tokens);
        }

        let output = match output {
            Some(declared) => {
                for branch in &branches {
                    if !branch.pairs[branch.pairs.len() - 1].involves(&declared) {
                        return Err(DexError::CurrencyMismatch);
                    }
                }
                declared
            }
            None => {
                let last_tokens = &currency_paths[currency_paths.len() - 1];
                last_tokens[last_tokens.len() - 1].clone()
            }
        };

        let mid_price = PricePoint::from_hop(&branches[0].pairs[0], &input)?;

        Ok(Self {
            branches,
            currency_paths,
            input,
            output,
            mid_price,
        })
    }

    /// Returns the branches of this path.
    #[must_use]
    pub fn branches(&self) -> &[PathBranch<P>] {
        &self.branches
    }

    /// Returns the inferred currency sequence of each branch, starting at
    /// the input currency.
    #[must_use]
    pub fn currency_paths(&self) -> &[Vec<Currency>] {
        &self.currency_paths
    }

    /// Returns the input currency.
    #[must_use]
    pub const fn input(&self) -> &Currency {
        &self.input
    }

    /// Returns the output currency.
    #[must_use]
    pub const fn output(&self) -> &Currency {
        &self.output
    }

    /// Returns the chain every pair in this path lives on.
    #[must_use]
    pub fn chain_id(&self) -> ChainId {
        self.branches[0].pairs[0].chain_id()
    }

    /// Returns the stored fast mid price (first hop of the first branch).
    #[must_use]
    pub const fn mid_price(&self) -> &PricePoint {
        &self.mid_price
    }

    /// Computes the fully composed mid price: hop prices chain-multiplied
    /// within each branch, branches blended by weight.
    ///
    /// # Errors
    ///
    /// Propagates [`PricePoint::from_path_composed`] failures.
    pub fn mid_price_composed(&self) -> Result<PricePoint> {
        PricePoint::from_path_composed(self)
    }

    /// Returns the total number of hops across all branches.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.branches.iter().map(PathBranch::hops).sum()
    }
}
