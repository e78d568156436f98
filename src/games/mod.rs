/// 3x3 tic-tac-toe. `PlayerFirst` plays X and maximizes.
pub mod tictactoe;

/// Hexapawn on a configurable board. `PlayerFirst` plays White and maximizes.
pub mod hexapawn;

pub use hexapawn::{Hexapawn, HexapawnAction, HexapawnState};
pub use tictactoe::{TicTacToe, TttAction, TttState};
