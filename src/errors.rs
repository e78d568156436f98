use thiserror::Error;

/// Fatal failures of the game contract or the engine configuration.
///
/// None of these are recoverable search conditions: an `IllegalAction` or
/// `InvalidState` indicates a bug in a game implementation or a caller, and
/// `Configuration` indicates a search that cannot produce a value at all.
/// The engine propagates them to the caller instead of defaulting to a
/// value; a silently wrong move is worse than a visible failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineError {
    /// An action outside `legal_actions(state)` was applied.
    #[error("illegal action: {0}")]
    IllegalAction(String),

    /// `legal_actions` was called on a terminal state, or a non-terminal
    /// state produced zero legal actions.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// A depth cutoff was reached but the game defines no heuristic
    /// evaluation for non-terminal states.
    #[error("configuration error: {0}")]
    Configuration(String),
}
