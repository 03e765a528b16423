use crate::game_state::chess_types::{GameState, Square};
use crate::move_generation::attacks::offset_square;
use crate::moves::chess_move::ChessMove;

pub const ROOK_DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Pseudo-legal bishop moves from `from`.
pub fn generate_bishop_moves(state: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    walk_rays(state, from, &BISHOP_DIRECTIONS, out);
}

/// Pseudo-legal rook moves from `from`.
pub fn generate_rook_moves(state: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    walk_rays(state, from, &ROOK_DIRECTIONS, out);
}

/// Pseudo-legal queen moves from `from`.
pub fn generate_queen_moves(state: &GameState, from: Square, out: &mut Vec<ChessMove>) {
    walk_rays(state, from, &ROOK_DIRECTIONS, out);
    walk_rays(state, from, &BISHOP_DIRECTIONS, out);
}

fn walk_rays(
    state: &GameState,
    from: Square,
    directions: &[(isize, isize)],
    out: &mut Vec<ChessMove>,
) {
    let Some(piece) = state.piece_at(from) else {
        return;
    };

    for &dir in directions {
        let mut current = from;
        while let Some(to) = offset_square(current, dir) {
            match state.piece_at(to) {
                None => {
                    out.push(ChessMove::from_squares(from, to, &state.board));
                    current = to;
                }
                Some(blocker) => {
                    if blocker.color != piece.color {
                        out.push(ChessMove::from_squares(from, to, &state.board));
                    }
                    break;
                }
            }
        }
    }
}
