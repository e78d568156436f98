#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![doc = include_str!("../README.md")]

#[macro_export]
#[doc(hidden)]
macro_rules! impl_display_from_debug {
    (@single $Type: ident) => {
        impl ::std::fmt::Display for $Type {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{:?}", self)
            }
        }
    };
    ($($Type: ident)+) => {
        $(impl_display_from_debug!(@single $Type);)+
    };
}

/// Module containing collection datatypes used by this crate.
pub mod data_structures;

/// Error taxonomy shared by the game contract and the search engine.
pub mod errors;

/// The shared evaluation axis: the `Evaluation` trait and the `Score` scale.
pub mod eval;

/// The game contract implemented by every concrete game.
pub mod game;

/// Reference games: tic-tac-toe and hexapawn.
pub mod games;

/// Pseudorandom number generation
pub mod rng;

/// Canonical state keys (Zobrist hashing)
pub mod state_hash;

pub(crate) mod types;

/// Re-exports the `smallvec` crate
pub use smallvec;

/// Re-exports the `rand` crate
pub use rand;

/// Re-exports the `thiserror` crate
pub use thiserror;

pub mod prelude {
    pub use crate::data_structures::ActionList;
    pub use crate::errors::EngineError;
    pub use crate::eval::{Evaluation, Score};
    pub use crate::game::Game;
    pub use crate::state_hash::{HashValue, StateHash, ZobristHasher};
    pub use crate::types::{ByPlayer, Objective, PlayerId};
}

pub use types::{ByPlayer, Objective, PlayerId};

#[cfg(test)]
mod tests;
