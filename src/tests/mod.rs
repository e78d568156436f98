use crate::game::Game;
use crate::prelude::*;

mod key_uniqueness;

/// Breadth-first enumeration of every state reachable from the initial
/// position of `game`.
pub(crate) fn reachable_states<G: Game>(game: &G) -> Vec<G::State> {
    let mut seen: std::collections::HashSet<G::State> = std::collections::HashSet::new();
    let mut frontier = vec![game.initial_state()];
    seen.insert(game.initial_state());
    while let Some(state) = frontier.pop() {
        if game.is_terminal(&state) {
            continue;
        }
        for action in game.legal_actions(&state).expect("non-terminal state") {
            let child = game.apply(&state, action).expect("legal action");
            if seen.insert(child.clone()) {
                frontier.push(child);
            }
        }
    }
    seen.into_iter().collect()
}

/// Walk `steps` legal moves from the initial position, stopping early at a
/// terminal state. Deterministic in (`game`, `choices`).
pub(crate) fn walk<G: Game>(game: &G, choices: &[usize]) -> G::State {
    let mut state = game.initial_state();
    for &choice in choices {
        if game.is_terminal(&state) {
            break;
        }
        let actions = game.legal_actions(&state).expect("non-terminal state");
        let action = actions[choice % actions.len()];
        state = game.apply(&state, action).expect("legal action");
    }
    state
}
