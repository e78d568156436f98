use std::fmt::Display;

use crate::data_structures::ActionList;
use crate::errors::EngineError;
use crate::eval::Score;
use crate::game::Game;
use crate::state_hash::{HashValue, StateHash, ZobristHasher, HASH_PROVIDER};
use crate::types::{Objective, PlayerId};

/// The eight winning lines, as cell indices of the row-major 3x3 grid.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Weight of one open line in the heuristic evaluation.
const OPEN_LINE_WEIGHT: i32 = 10;

#[derive(Debug, Clone, Copy, Default)]
pub struct TicTacToe;

/// Marking one empty cell, indexed row-major from the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TttAction(pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TttState {
    pub cells: [Option<PlayerId>; 9],
    pub to_move: PlayerId,
}

impl TttState {
    /// The winning player, if any line is completed.
    pub fn winner(&self) -> Option<PlayerId> {
        for line in &LINES {
            let mark = self.cells[line[0]];
            if mark.is_some() && self.cells[line[1]] == mark && self.cells[line[2]] == mark {
                return mark;
            }
        }
        None
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Lines not yet blocked by the opponent of `player`.
    fn open_lines(&self, player: PlayerId) -> i32 {
        let opponent = Some(player.opposite());
        LINES
            .iter()
            .filter(|line| line.iter().all(|&i| self.cells[i] != opponent))
            .count() as i32
    }
}

impl Display for TttState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let ch = match self.cells[3 * row + col] {
                    Some(PlayerId::PlayerFirst) => 'X',
                    Some(PlayerId::PlayerSecond) => 'O',
                    None => '.',
                };
                f.write_fmt(format_args!("{ch}"))?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl StateHash for TttState {
    fn state_hash(&self) -> HashValue {
        let mut h = ZobristHasher::new();
        for (i, cell) in self.cells.iter().enumerate() {
            if let Some(player) = cell {
                h.hash(HASH_PROVIDER.cell(*player, i));
            }
        }
        h.hash(HASH_PROVIDER.to_move(self.to_move));
        h.finish()
    }
}

impl Game for TicTacToe {
    type State = TttState;
    type Action = TttAction;
    type Eval = Score;

    fn initial_state(&self) -> TttState {
        TttState {
            cells: [None; 9],
            to_move: PlayerId::PlayerFirst,
        }
    }

    fn to_move(&self, state: &TttState) -> PlayerId {
        state.to_move
    }

    fn legal_actions(&self, state: &TttState) -> Result<ActionList<TttAction>, EngineError> {
        if self.is_terminal(state) {
            return Err(EngineError::InvalidState(format!(
                "legal_actions on terminal position\n{state}"
            )));
        }
        Ok(state
            .cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| TttAction(i as u8))
            .collect())
    }

    fn apply(&self, state: &TttState, action: TttAction) -> Result<TttState, EngineError> {
        let cell = action.0 as usize;
        if self.is_terminal(state) || cell >= 9 || state.cells[cell].is_some() {
            return Err(EngineError::IllegalAction(format!(
                "{action:?} is not playable in\n{state}"
            )));
        }
        let mut cells = state.cells;
        cells[cell] = Some(state.to_move);
        Ok(TttState {
            cells,
            to_move: state.to_move.opposite(),
        })
    }

    fn is_terminal(&self, state: &TttState) -> bool {
        state.winner().is_some() || state.is_full()
    }

    fn evaluate(&self, state: &TttState, _for_player: PlayerId) -> Result<Score, EngineError> {
        if let Some(winner) = state.winner() {
            return Ok(winner.select((Score::WIN, Score::LOSS)));
        }
        if state.is_full() {
            return Ok(Score::DRAW);
        }
        let open = state.open_lines(PlayerId::PlayerFirst) - state.open_lines(PlayerId::PlayerSecond);
        Ok(Score::heuristic(OPEN_LINE_WEIGHT * open))
    }

    fn objective(&self, player: PlayerId) -> Objective {
        player.select((Objective::Maximize, Objective::Minimize))
    }
}
