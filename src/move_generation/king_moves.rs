use crate::game_state::chess_types::{Color, GameState, Square};
use crate::move_generation::attacks::{offset_square, square_attacked};
use crate::moves::chess_move::ChessMove;

pub const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Pseudo-legal king moves from `from`, including castling candidates.
pub fn generate_king_moves(state: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    let Some(piece) = state.piece_at(from) else {
        return;
    };

    for delta in KING_OFFSETS {
        let Some(to) = offset_square(from, delta) else {
            continue;
        };
        if state.piece_at(to).map_or(true, |p| p.color != piece.color) {
            out.push(ChessMove::from_squares(from, to, &state.board));
        }
    }

    generate_castle_moves(state, from, piece.color, out);
}

/// Castling candidates: rights intact, intervening squares empty, and the
/// king's start, pass-through, and landing squares unattacked in the
/// pre-move position. Attacks on the rook's own squares do not matter.
fn generate_castle_moves(state: &GameState, from: Square, color: Color, out: &mut Vec<ChessMove>) {
    let row = color.back_rank();
    if from != (row, 4) {
        return;
    }

    let enemy = color.opposite();
    if square_attacked(&state.board, from, enemy) {
        // No castling out of check.
        return;
    }

    if state.castling_rights.kingside(color)
        && state.piece_at((row, 5)).is_none()
        && state.piece_at((row, 6)).is_none()
        && !square_attacked(&state.board, (row, 5), enemy)
        && !square_attacked(&state.board, (row, 6), enemy)
    {
        out.push(ChessMove::from_squares(from, (row, 6), &state.board));
    }

    if state.castling_rights.queenside(color)
        && state.piece_at((row, 1)).is_none()
        && state.piece_at((row, 2)).is_none()
        && state.piece_at((row, 3)).is_none()
        && !square_attacked(&state.board, (row, 3), enemy)
        && !square_attacked(&state.board, (row, 2), enemy)
    {
        out.push(ChessMove::from_squares(from, (row, 2), &state.board));
    }
}
