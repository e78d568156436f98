use std::collections::HashMap;

use super::reachable_states;
use crate::games::{Hexapawn, TicTacToe};
use crate::prelude::*;

fn assert_unique_keys<G: crate::game::Game>(game: &G) -> usize {
    let states = reachable_states(game);
    let mut by_key: HashMap<HashValue, G::State> = HashMap::with_capacity(states.len());
    for state in &states {
        if let Some(previous) = by_key.insert(state.state_hash(), state.clone()) {
            panic!("key collision between {previous:?} and {state:?}");
        }
    }
    states.len()
}

#[test]
fn every_reachable_tictactoe_state_has_a_unique_key() {
    let count = assert_unique_keys(&TicTacToe);
    // 5478 positions reachable from the empty board
    assert_eq!(count, 5478);
}

#[test]
fn every_reachable_hexapawn_3x3_state_has_a_unique_key() {
    let count = assert_unique_keys(&Hexapawn::standard());
    assert!(count > 100, "expected a non-trivial state space, got {count}");
}

#[test]
fn every_reachable_hexapawn_4x4_state_has_a_unique_key() {
    assert_unique_keys(&Hexapawn::new(4, 4));
}
