//! Attack detection over the mailbox grid.
//!
//! `square_attacked` scans outward from the square of interest: fixed-offset
//! probes for knights and kings, the two diagonal origins for pawns, and
//! blocked ray walks for sliders. The scan is total and never recurses into
//! move generation, which keeps check tests safe to call from anywhere.

use crate::game_state::chess_types::{BoardGrid, Color, Piece, PieceKind, Square};
use crate::move_generation::king_moves::KING_OFFSETS;
use crate::move_generation::knight_moves::KNIGHT_OFFSETS;
use crate::move_generation::sliding_moves::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};

/// Step off a square by a `(row, col)` delta, `None` when it leaves the board.
#[inline]
pub fn offset_square(square: Square, delta: (isize, isize)) -> Option<Square> {
    let row = square.0 as isize + delta.0;
    let col = square.1 as isize + delta.1;
    if (0..8).contains(&row) && (0..8).contains(&col) {
        Some((row as usize, col as usize))
    } else {
        None
    }
}

/// Whether any piece of `attacker` color attacks `square`.
pub fn square_attacked(board: &BoardGrid, square: Square, attacker: Color) -> bool {
    for delta in KNIGHT_OFFSETS {
        if piece_on(board, offset_square(square, delta))
            .is_some_and(|p| p.color == attacker && p.kind == PieceKind::Knight)
        {
            return true;
        }
    }

    for delta in KING_OFFSETS {
        if piece_on(board, offset_square(square, delta))
            .is_some_and(|p| p.color == attacker && p.kind == PieceKind::King)
        {
            return true;
        }
    }

    // A pawn attacks diagonally forward, so the attacking pawn sits one row
    // behind the target relative to its own direction of travel.
    let pawn_row_delta = -attacker.pawn_direction();
    for col_delta in [-1, 1] {
        if piece_on(board, offset_square(square, (pawn_row_delta, col_delta)))
            .is_some_and(|p| p.color == attacker && p.kind == PieceKind::Pawn)
        {
            return true;
        }
    }

    ray_hits(board, square, attacker, &ROOK_DIRECTIONS, PieceKind::Rook)
        || ray_hits(board, square, attacker, &BISHOP_DIRECTIONS, PieceKind::Bishop)
}

fn ray_hits(
    board: &BoardGrid,
    square: Square,
    attacker: Color,
    directions: &[(isize, isize)],
    slider: PieceKind,
) -> bool {
    for &dir in directions {
        let mut current = square;
        while let Some(next) = offset_square(current, dir) {
            match board[next.0][next.1] {
                None => current = next,
                Some(piece) => {
                    if piece.color == attacker
                        && (piece.kind == slider || piece.kind == PieceKind::Queen)
                    {
                        return true;
                    }
                    break;
                }
            }
        }
    }
    false
}

#[inline]
fn piece_on(board: &BoardGrid, square: Option<Square>) -> Option<Piece> {
    square.and_then(|(row, col)| board[row][col])
}
