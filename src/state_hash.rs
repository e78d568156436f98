//! Zobrist hashing for canonical state keys.
//!
//! The canonical key of a state is the XOR over precomputed random hashes
//! of its distinguishing features: one hash per (player, occupied cell)
//! plus one per side to move. Transpositions therefore hash identically
//! regardless of the move order that produced them.
//!
//! Wikipedia: https://en.wikipedia.org/wiki/Zobrist_hashing
//! Chess Programming Wiki: https://www.chessprogramming.org/Zobrist_Hashing
//!
//! Keys are 64-bit and treated as collision-*resistant*, not collision-free:
//! the transposition table additionally verifies state equality on probe.

use std::hash::Hasher;

use lazy_static::lazy_static;
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use rustc_hash::FxHasher;

use crate::types::{ByPlayer, PlayerId};

pub type HashValue = u64;

/// Random seed used to compute the feature hash tables.
const SEED: u64 = 0x7A0B_5157_1E20_03C4;

/// Cells covered by the precomputed tables; boards up to 8x8. Larger
/// indices fall back to an `FxHash`-derived value.
pub const CELL_COUNT: usize = 64;

/// XOR-combining hasher over feature hashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ZobristHasher(pub HashValue);

impl ZobristHasher {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn combine(&mut self, Self(v): Self) {
        self.0 ^= v
    }

    #[inline]
    pub fn hash(&mut self, v: HashValue) {
        self.0 ^= v
    }

    #[inline]
    pub fn finish(self) -> HashValue {
        self.0
    }
}

/// A state with a canonical 64-bit key.
///
/// Implementations must agree with `Eq`: equal states produce equal keys.
pub trait StateHash {
    fn state_hash(&self) -> HashValue;
}

lazy_static! {
    /// The default instance for the `HashProvider`.
    pub static ref HASH_PROVIDER: HashProvider = HashProvider::new();
}

/// Precomputed Zobrist hashes for the features of grid-based game states.
/// The random seed used to compute these hashes is `SEED`.
pub struct HashProvider {
    pub cell_hashes: ByPlayer<[HashValue; CELL_COUNT]>,
    pub to_move_hashes: ByPlayer<HashValue>,
}

#[inline]
fn fx_hash(tag: u64, a: u64, b: u64) -> HashValue {
    let mut h = FxHasher::default();
    h.write_u64(tag);
    h.write_u64(a);
    h.write_u64(b);
    h.finish()
}

impl HashProvider {
    pub fn new() -> Self {
        let mut rng = SmallRng::seed_from_u64(SEED);
        let mut cells = ByPlayer::new([0; CELL_COUNT], [0; CELL_COUNT]);
        for player in [PlayerId::PlayerFirst, PlayerId::PlayerSecond] {
            let table = cells.get_mut(player);
            for v in table.iter_mut() {
                *v = rng.next_u64();
            }
        }
        let to_move = ByPlayer::new(rng.next_u64(), rng.next_u64());
        Self {
            cell_hashes: cells,
            to_move_hashes: to_move,
        }
    }

    /// Hash of `player_id` occupying `cell_index`.
    #[inline]
    pub fn cell(&self, player_id: PlayerId, cell_index: usize) -> HashValue {
        if cell_index < CELL_COUNT {
            self.cell_hashes[player_id][cell_index]
        } else {
            fx_hash(1, player_id as u64, cell_index as u64)
        }
    }

    /// Hash of `player_id` being the side to move.
    #[inline]
    pub fn to_move(&self, player_id: PlayerId) -> HashValue {
        self.to_move_hashes[player_id]
    }

    /// Hash of a board's dimensions, for states that carry them.
    #[inline]
    pub fn dimensions(&self, cols: u8, rows: u8) -> HashValue {
        fx_hash(2, cols as u64, rows as u64)
    }
}

impl Default for HashProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_is_deterministic() {
        let a = HashProvider::new();
        let b = HashProvider::new();
        assert_eq!(a.cell_hashes, b.cell_hashes);
        assert_eq!(a.to_move_hashes, b.to_move_hashes);
    }

    #[test]
    fn feature_hashes_are_distinct() {
        let p = HashProvider::new();
        let mut seen = std::collections::HashSet::new();
        for player in [PlayerId::PlayerFirst, PlayerId::PlayerSecond] {
            for cell in 0..CELL_COUNT {
                assert!(seen.insert(p.cell(player, cell)));
            }
            assert!(seen.insert(p.to_move(player)));
        }
    }

    #[test]
    fn overflow_cells_fall_back_to_fx() {
        let p = HashProvider::new();
        assert_ne!(
            p.cell(PlayerId::PlayerFirst, CELL_COUNT),
            p.cell(PlayerId::PlayerSecond, CELL_COUNT)
        );
        assert_ne!(
            p.cell(PlayerId::PlayerFirst, CELL_COUNT),
            p.cell(PlayerId::PlayerFirst, CELL_COUNT + 1)
        );
    }

    #[test]
    fn xor_combination_is_order_independent() {
        let p = HashProvider::new();
        let mut h1 = ZobristHasher::new();
        h1.hash(p.cell(PlayerId::PlayerFirst, 0));
        h1.hash(p.cell(PlayerId::PlayerSecond, 4));
        let mut h2 = ZobristHasher::new();
        h2.hash(p.cell(PlayerId::PlayerSecond, 4));
        h2.hash(p.cell(PlayerId::PlayerFirst, 0));
        assert_eq!(h1.finish(), h2.finish());
    }
}
