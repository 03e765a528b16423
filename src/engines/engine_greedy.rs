//! One-ply capture-greedy engine.
//!
//! Picks the move capturing the most valuable piece, breaking ties uniformly
//! at random. A step up from random play and a useful sparring partner in
//! match harnesses and tests.

use rand::prelude::IndexedRandom;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::chess_types::GameState;
use crate::moves::chess_move::ChessMove;
use crate::search::alpha_beta::SearchOutcome;
use crate::search::board_scoring::MaterialScorer;

#[derive(Debug, Default)]
pub struct GreedyEngine;

impl GreedyEngine {
    pub fn new() -> Self {
        Self
    }

    #[inline]
    fn capture_value(mv: &ChessMove) -> i32 {
        mv.piece_captured
            .map_or(0, |piece| MaterialScorer::piece_value(piece.kind))
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "Quince Greedy"
    }

    fn choose_move(&mut self, game_state: &GameState) -> SearchOutcome<EngineOutput> {
        let mut probe = game_state.clone();
        let legal_moves = probe.get_valid_moves();

        if legal_moves.is_empty() {
            return Ok(EngineOutput::default());
        }

        let mut best_value = i32::MIN;
        let mut best_moves = Vec::new();
        for mv in &legal_moves {
            let value = Self::capture_value(mv);
            if value > best_value {
                best_value = value;
                best_moves.clear();
                best_moves.push(*mv);
            } else if value == best_value {
                best_moves.push(*mv);
            }
        }

        let mut rng = rand::rng();
        Ok(EngineOutput {
            best_move: best_moves.as_slice().choose(&mut rng).copied(),
            nodes: legal_moves.len() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};

    #[test]
    fn greedy_takes_the_most_valuable_piece() {
        let mut state = GameState::empty();
        state.place_piece((7, 7), Piece::new(Color::White, PieceKind::King));
        state.place_piece((0, 4), Piece::new(Color::Black, PieceKind::King));
        state.place_piece((4, 3), Piece::new(Color::White, PieceKind::Pawn));
        state.place_piece((3, 4), Piece::new(Color::Black, PieceKind::Queen));
        state.place_piece((3, 2), Piece::new(Color::Black, PieceKind::Pawn));

        let mut engine = GreedyEngine::new();
        let out = engine.choose_move(&state).expect("greedy engine is total");
        let best = out.best_move.expect("captures are available");
        assert_eq!(best.end, (3, 4), "the queen outweighs the pawn");
    }

    #[test]
    fn greedy_reports_no_move_when_the_game_is_over() {
        let mut state = GameState::empty();
        state.place_piece((0, 0), Piece::new(Color::Black, PieceKind::King));
        state.place_piece((2, 1), Piece::new(Color::White, PieceKind::Queen));
        state.place_piece((7, 4), Piece::new(Color::White, PieceKind::King));
        state.white_to_move = false;

        let mut engine = GreedyEngine::new();
        let out = engine.choose_move(&state).expect("greedy engine is total");
        assert_eq!(out.best_move, None);
    }
}
