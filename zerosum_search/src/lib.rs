#![cfg_attr(not(test), forbid(clippy::unwrap_used))]

//! Game-tree search over the `zerosum` game contract.
//!
//! The engine is single-threaded, synchronous and deterministic: identical
//! positions and configurations always produce the identical value and
//! chosen action. The transposition table is a pure optimization: enabling
//! it never changes a root result, only the number of expanded nodes.

use zerosum::errors::EngineError;
use zerosum::game::Game;

/// Implementation for minimax and alpha-beta search
pub mod minimax;

/// Orchestration of full games between controllers
pub mod play;

pub use minimax::{MinimaxConfig, MinimaxSearch, FULL_DEPTH};

/// Diagnostic totals for one search call.
#[derive(Debug, Default, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchCounter {
    /// Number of states created through game state expansions.
    pub nodes_expanded: u64,
    /// Number of leaf evaluations (terminal or depth cutoff).
    pub evals: u64,
    /// Number of transposition table hits.
    pub tt_hits: u64,
    /// Last finished depth for iterative deepening.
    pub last_depth: u8,
}

impl SearchCounter {
    #[inline]
    pub fn add_in_place(&mut self, c: &SearchCounter) {
        self.nodes_expanded += c.nodes_expanded;
        self.evals += c.evals;
        self.tt_hits += c.tt_hits;
    }

    pub fn summary(&self, dt_ns: u128) -> String {
        let dt_ms: f64 = 1e-6 * (dt_ns as f64);
        let rate: f64 = (1e-6_f64 * 1e9_f64) * (self.nodes_expanded as f64) / (dt_ns as f64);
        format!("dt={dt_ms:.2}ms rate={rate:.4} Mnodes/s")
    }
}

impl std::ops::Add for SearchCounter {
    type Output = SearchCounter;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        let mut a = self;
        a.add_in_place(&rhs);
        a
    }
}

/// Whether a search result is exact or bounded by the depth limit.
///
/// A result is `Exact` only if no depth cutoff influenced it anywhere in
/// the tree; such a run is indistinguishable from one without any depth
/// limit, so its value is the true game value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Resolution {
    Exact,
    Cutoff,
}

impl Resolution {
    #[inline]
    pub fn is_exact(self) -> bool {
        matches!(self, Resolution::Exact)
    }
}

/// Outcome of one root search.
#[derive(Debug, Clone)]
pub struct SearchResult<G: Game> {
    /// Best root action; ties broken by earliest enumeration order.
    /// `None` only for a terminal root or a depth-zero cutoff.
    pub best_action: Option<G::Action>,
    /// Value of the root on the game's shared axis.
    pub eval: G::Eval,
    pub resolution: Resolution,
    pub counter: SearchCounter,
}

pub trait GameTreeSearch<G: Game> {
    fn search(&mut self, game: &G, state: &G::State) -> Result<SearchResult<G>, EngineError>;
}

#[cfg(test)]
mod tests;
