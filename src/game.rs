use std::fmt::Debug;
use std::hash::Hash;

use crate::data_structures::ActionList;
use crate::errors::EngineError;
use crate::eval::Evaluation;
use crate::state_hash::StateHash;
use crate::types::{Objective, PlayerId};

/// The contract a game implements to be searchable.
///
/// This is a pure value-in/value-out interface: states are immutable values
/// and every operation is a function of its arguments alone. Nothing behind
/// this trait may mutate shared state between calls; the transposition
/// table relies on a state meaning the same thing every time it is seen.
///
/// Two states representing the same position reached through different move
/// orders (a transposition) must compare equal and produce the same
/// canonical key.
pub trait Game: Debug {
    type State: Clone + Debug + PartialEq + Eq + Hash + StateHash + Send + Sync;
    type Action: Copy + Clone + Debug + PartialEq + Eq + Send + Sync;
    type Eval: Evaluation;

    /// The designated starting position, `PlayerFirst` to move.
    fn initial_state(&self) -> Self::State;

    /// The player whose turn it is.
    fn to_move(&self, state: &Self::State) -> PlayerId;

    /// Legal actions in a stable, deterministic order.
    ///
    /// Errors with [`EngineError::InvalidState`] when called on a terminal
    /// state. Must be non-empty for every non-terminal state.
    fn legal_actions(&self, state: &Self::State) -> Result<ActionList<Self::Action>, EngineError>;

    /// The successor state reached by playing `action`.
    ///
    /// Errors with [`EngineError::IllegalAction`] when `action` is not in
    /// `legal_actions(state)`.
    fn apply(&self, state: &Self::State, action: Self::Action) -> Result<Self::State, EngineError>;

    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Evaluate a state on the game's shared axis.
    ///
    /// Terminal states evaluate to their exact outcome, which is intrinsic
    /// to the state; `for_player` names the perspective a heuristic may be
    /// computed from but must not change the returned axis value. For a
    /// non-terminal state, a game without heuristic support errors with
    /// [`EngineError::Configuration`].
    fn evaluate(&self, state: &Self::State, for_player: PlayerId) -> Result<Self::Eval, EngineError>;

    /// The polarity of `player` on the shared axis.
    fn objective(&self, player: PlayerId) -> Objective;
}
