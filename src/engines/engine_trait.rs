//! Engine abstraction layer.
//!
//! Defines the common output payload so different move-selection strategies
//! can be swapped at runtime behind a single trait interface, by a match
//! harness or an interactive controller picking a difficulty.

use crate::game_state::chess_types::GameState;
use crate::moves::chess_move::ChessMove;
use crate::search::alpha_beta::SearchOutcome;

#[derive(Debug, Clone, Copy, Default)]
pub struct EngineOutput {
    /// `None` when the position has no legal move (game over).
    pub best_move: Option<ChessMove>,
    /// Nodes examined while choosing; 0 for non-searching strategies.
    pub nodes: u64,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Choose a move for the side to move. Implementations work on clones
    /// and never mutate the caller's state.
    fn choose_move(&mut self, game_state: &GameState) -> SearchOutcome<EngineOutput>;
}
