use std::collections::VecDeque;

use itertools::Itertools;
use rand::Rng;

use zerosum::errors::EngineError;
use zerosum::game::Game;
use zerosum::rng::RngState;
use zerosum::{ByPlayer, PlayerId};

use crate::GameTreeSearch;

/// A source of moves for one player.
pub trait PlayerController<G: Game> {
    fn choose_action(&mut self, game: &G, state: &G::State) -> Result<G::Action, EngineError>;
}

/// Engine-backed controller delegating to a [`GameTreeSearch`].
pub struct SearchController<S> {
    pub search: S,
}

impl<S> SearchController<S> {
    pub fn new(search: S) -> Self {
        Self { search }
    }
}

impl<G: Game, S: GameTreeSearch<G>> PlayerController<G> for SearchController<S> {
    fn choose_action(&mut self, game: &G, state: &G::State) -> Result<G::Action, EngineError> {
        let result = self.search.search(game, state)?;
        result.best_action.ok_or_else(|| {
            EngineError::InvalidState("search returned no action for a non-terminal state".to_string())
        })
    }
}

/// Replays a fixed move list; errors when it runs out.
pub struct ScriptedController<A> {
    actions: VecDeque<A>,
}

impl<A> ScriptedController<A> {
    pub fn new(actions: impl IntoIterator<Item = A>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
        }
    }
}

impl<G: Game> PlayerController<G> for ScriptedController<G::Action> {
    fn choose_action(&mut self, _game: &G, _state: &G::State) -> Result<G::Action, EngineError> {
        self.actions
            .pop_front()
            .ok_or_else(|| EngineError::Configuration("scripted controller ran out of moves".to_string()))
    }
}

/// Picks uniformly among the legal actions using a seeded [`RngState`].
pub struct RandomController {
    pub rng: RngState,
}

impl RandomController {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: RngState::from_seed(seed),
        }
    }
}

impl<G: Game> PlayerController<G> for RandomController {
    fn choose_action(&mut self, game: &G, state: &G::State) -> Result<G::Action, EngineError> {
        let actions = game.legal_actions(state)?;
        if actions.is_empty() {
            return Err(EngineError::InvalidState(
                "non-terminal state with no legal actions".to_string(),
            ));
        }
        let index = self.rng.0.gen_range(0..actions.len());
        Ok(actions[index])
    }
}

/// Record of one finished game.
#[derive(Debug, Clone)]
pub struct Playout<G: Game> {
    pub final_state: G::State,
    pub history: Vec<(PlayerId, G::Action)>,
    /// Exact terminal evaluation of the final state.
    pub outcome: G::Eval,
}

impl<G: Game> Playout<G> {
    pub fn transcript(&self) -> String {
        self.history
            .iter()
            .map(|(player, action)| format!("{player} {action:?}"))
            .join(", ")
    }
}

/// Drives one full game from the initial state: pure control flow over the
/// contract and the controllers, no search logic of its own.
#[derive(Debug, Clone, Copy)]
pub struct GameRunner {
    /// Guard against games that never terminate.
    pub max_plies: usize,
}

impl Default for GameRunner {
    fn default() -> Self {
        Self { max_plies: 512 }
    }
}

impl GameRunner {
    pub fn new(max_plies: usize) -> Self {
        Self { max_plies }
    }

    pub fn play<G: Game>(
        &self,
        game: &G,
        controllers: &mut ByPlayer<&mut dyn PlayerController<G>>,
    ) -> Result<Playout<G>, EngineError> {
        let mut state = game.initial_state();
        let mut history: Vec<(PlayerId, G::Action)> = Vec::new();
        while !game.is_terminal(&state) {
            if history.len() >= self.max_plies {
                return Err(EngineError::Configuration(format!(
                    "game did not terminate within {} plies",
                    self.max_plies
                )));
            }
            let player = game.to_move(&state);
            let action = controllers.get_mut(player).choose_action(game, &state)?;
            if !game.legal_actions(&state)?.contains(&action) {
                return Err(EngineError::IllegalAction(format!(
                    "controller for {player} returned {action:?}"
                )));
            }
            state = game.apply(&state, action)?;
            history.push((player, action));
        }
        let outcome = game.evaluate(&state, game.to_move(&state))?;
        Ok(Playout {
            final_state: state,
            history,
            outcome,
        })
    }
}
