use zerosum::data_structures::ActionList;
use zerosum::errors::EngineError;
use zerosum::eval::Score;
use zerosum::game::Game;
use zerosum::state_hash::{HashValue, StateHash};
use zerosum::{Objective, PlayerId};

use crate::minimax::{MinimaxConfig, MinimaxSearch};
use crate::SearchResult;

/// Plenty for the bundled games without paying for the production default.
const TEST_TABLE_CAPACITY: usize = 1 << 18;


/// Walk `choices` legal moves from the initial position, stopping early at
/// a terminal state. Deterministic in (`game`, `choices`).
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

pub(crate) fn fixed_depth_config(depth: u8, alpha_beta: bool, table: bool) -> MinimaxConfig {
    MinimaxConfig {
        depth_limit: Some(depth),
        alpha_beta,
        use_transposition_table: table,
        table_capacity: 1 << 16,
        iterative_deepening: false,
        debug: false,
    }
}

pub(crate) fn deepening_config(table: bool) -> MinimaxConfig {
    MinimaxConfig {
        depth_limit: None,
        alpha_beta: true,
        use_transposition_table: table,
        table_capacity: TEST_TABLE_CAPACITY,
        iterative_deepening: true,
        debug: false,
    }
}

pub(crate) fn exhaustive_config(alpha_beta: bool, table: bool) -> MinimaxConfig {
    MinimaxConfig {
        depth_limit: None,
        alpha_beta,
        use_transposition_table: table,
        table_capacity: TEST_TABLE_CAPACITY,
        iterative_deepening: false,
        debug: false,
    }
}

pub(crate) fn run<G: Game>(game: &G, state: &G::State, config: MinimaxConfig) -> SearchResult<G> {
    MinimaxSearch::new(config)
        .find_best_action(game, state, None)
        .expect("search failed")
}

/// Single-file race to a fixed terminal: the smallest possible game with a
/// deliberately missing heuristic.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CountdownGame {
    pub length: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct CountdownState(pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Tick;

impl StateHash for CountdownState {
    fn state_hash(&self) -> HashValue {
        (self.0 as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
    }
}

impl Game for CountdownGame {
    type State = CountdownState;
    type Action = Tick;
    type Eval = Score;

    fn initial_state(&self) -> CountdownState {
        CountdownState(0)
    }

    fn to_move(&self, state: &CountdownState) -> PlayerId {
        if state.0 % 2 == 0 {
            PlayerId::PlayerFirst
        } else {
            PlayerId::PlayerSecond
        }
    }

    fn legal_actions(&self, state: &CountdownState) -> Result<ActionList<Tick>, EngineError> {
        if self.is_terminal(state) {
            return Err(EngineError::InvalidState("terminal countdown".to_string()));
        }
        Ok(zerosum::action_list![Tick])
    }

    fn apply(&self, state: &CountdownState, _action: Tick) -> Result<CountdownState, EngineError> {
        if self.is_terminal(state) {
            return Err(EngineError::IllegalAction("terminal countdown".to_string()));
        }
        Ok(CountdownState(state.0 + 1))
    }

    fn is_terminal(&self, state: &CountdownState) -> bool {
        state.0 >= self.length
    }

    fn evaluate(&self, state: &CountdownState, _for_player: PlayerId) -> Result<Score, EngineError> {
        if self.is_terminal(state) {
            Ok(Score::WIN)
        } else {
            Err(EngineError::Configuration(
                "countdown has no heuristic evaluation".to_string(),
            ))
        }
    }

    fn objective(&self, player: PlayerId) -> Objective {
        player.select((Objective::Maximize, Objective::Minimize))
    }
}

/// A contract violation in game form: claims to be non-terminal but offers
/// no actions.
#[derive(Debug, Clone, Copy)]
pub(crate) struct BrokenGame;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct BrokenState;

impl StateHash for BrokenState {
    fn state_hash(&self) -> HashValue {
        0x5105_90A3
    }
}

impl Game for BrokenGame {
    type State = BrokenState;
    type Action = Tick;
    type Eval = Score;

    fn initial_state(&self) -> BrokenState {
        BrokenState
    }

    fn to_move(&self, _state: &BrokenState) -> PlayerId {
        PlayerId::PlayerFirst
    }

    fn legal_actions(&self, _state: &BrokenState) -> Result<ActionList<Tick>, EngineError> {
        Ok(ActionList::new())
    }

    fn apply(&self, _state: &BrokenState, _action: Tick) -> Result<BrokenState, EngineError> {
        Ok(BrokenState)
    }

    fn is_terminal(&self, _state: &BrokenState) -> bool {
        false
    }

    fn evaluate(&self, _state: &BrokenState, _for_player: PlayerId) -> Result<Score, EngineError> {
        Ok(Score::DRAW)
    }

    fn objective(&self, _player: PlayerId) -> Objective {
        Objective::Maximize
    }
}
