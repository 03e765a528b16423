//! Uniform-random move selection.
//!
//! Doubles as the lowest difficulty and as the fallback used whenever a
//! search reports no decisive move.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::chess_types::GameState;
use crate::moves::chess_move::ChessMove;
use crate::search::alpha_beta::SearchOutcome;

/// Uniform choice from `moves`; `None` when the set is empty.
pub fn find_random_move(moves: &[ChessMove]) -> Option<ChessMove> {
    let mut rng = rand::rng();
    moves.choose(&mut rng).copied()
}

#[derive(Debug, Default)]
pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Quince Random"
    }

    fn choose_move(&mut self, game_state: &GameState) -> SearchOutcome<EngineOutput> {
        let mut probe = game_state.clone();
        let legal_moves = probe.get_valid_moves();
        Ok(EngineOutput {
            best_move: find_random_move(&legal_moves),
            nodes: 0,
        })
    }
}
