use crate::game_state::chess_types::{GameState, Square};
use crate::move_generation::attacks::offset_square;
use crate::moves::chess_move::ChessMove;

pub const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Pseudo-legal knight moves from `from`.
pub fn generate_knight_moves(state: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    let Some(piece) = state.piece_at(from) else {
        return;
    };

    for delta in KNIGHT_OFFSETS {
        let Some(to) = offset_square(from, delta) else {
            continue;
        };
        if state.piece_at(to).map_or(true, |p| p.color != piece.color) {
            out.push(ChessMove::from_squares(from, to, &state.board));
        }
    }
}
