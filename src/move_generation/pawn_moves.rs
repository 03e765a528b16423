use crate::game_state::chess_types::{GameState, Square};
use crate::move_generation::attacks::offset_square;
use crate::moves::chess_move::ChessMove;

/// Pseudo-legal pawn moves from `from`: single and double pushes, diagonal
/// captures, and the en-passant capture when the target square is open.
/// Promotion is derived by the move constructor when the pawn reaches the
/// last rank.
pub fn generate_pawn_moves(state: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    let Some(piece) = state.piece_at(from) else {
        return;
    };
    let color = piece.color;
    let forward = color.pawn_direction();

    if let Some(one) = offset_square(from, (forward, 0)) {
        if state.piece_at(one).is_none() {
            out.push(ChessMove::from_squares(from, one, &state.board));

            if from.0 == color.pawn_start_row() {
                if let Some(two) = offset_square(one, (forward, 0)) {
                    if state.piece_at(two).is_none() {
                        out.push(ChessMove::from_squares(from, two, &state.board));
                    }
                }
            }
        }
    }

    for col_delta in [-1, 1] {
        let Some(to) = offset_square(from, (forward, col_delta)) else {
            continue;
        };
        let captures_enemy = state.piece_at(to).is_some_and(|p| p.color != color);
        let captures_en_passant = state.en_passant_target == Some(to);
        if captures_enemy || captures_en_passant {
            out.push(ChessMove::from_squares(from, to, &state.board));
        }
    }
}
