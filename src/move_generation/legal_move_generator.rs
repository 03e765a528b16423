//! Full legal move generation pipeline.
//!
//! Orchestrates piece-wise pseudo-legal generation, then filters out every
//! candidate that leaves the mover's own king attacked by applying it with
//! `make_move` and reversing it with `undo_move`. Also refreshes the derived
//! `checkmate`/`stalemate` flags on the state.

use crate::game_state::chess_types::{GameState, PieceKind, BOARD_SIZE};
use crate::move_generation::attacks::square_attacked;
use crate::move_generation::king_moves::generate_king_moves;
use crate::move_generation::knight_moves::generate_knight_moves;
use crate::move_generation::pawn_moves::generate_pawn_moves;
use crate::move_generation::sliding_moves::{
    generate_bishop_moves, generate_queen_moves, generate_rook_moves,
};
use crate::moves::chess_move::ChessMove;

/// All pseudo-legal moves for the side to move, in deterministic board-scan
/// order. Moves may still leave the mover's king in check.
pub fn generate_pseudo_legal_moves(state: &GameState) -> Vec<ChessMove> {
    let side = state.side_to_move();
    let mut out = Vec::with_capacity(64);

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let Some(piece) = state.piece_at((row, col)) else {
                continue;
            };
            if piece.color != side {
                continue;
            }
            match piece.kind {
                PieceKind::Pawn => generate_pawn_moves(state, (row, col), &mut out),
                PieceKind::Knight => generate_knight_moves(state, (row, col), &mut out),
                PieceKind::Bishop => generate_bishop_moves(state, (row, col), &mut out),
                PieceKind::Rook => generate_rook_moves(state, (row, col), &mut out),
                PieceKind::Queen => generate_queen_moves(state, (row, col), &mut out),
                PieceKind::King => generate_king_moves(state, (row, col), &mut out),
            }
        }
    }

    out
}

/// Legal moves for the side to move. Sets `checkmate` when the side is in
/// check with no legal move and `stalemate` when it is not in check with no
/// legal move; the two are mutually exclusive.
pub fn get_valid_moves(state: &mut GameState) -> Vec<ChessMove> {
    let side = state.side_to_move();
    let pseudo = generate_pseudo_legal_moves(state);
    let mut legal = Vec::with_capacity(pseudo.len());

    for mv in pseudo {
        state.make_move(mv);
        let king_safe = !square_attacked(
            &state.board,
            state.king_location(side),
            side.opposite(),
        );
        state.undo_move();
        if king_safe {
            legal.push(mv);
        }
    }

    let in_check = state.in_check();
    state.checkmate = legal.is_empty() && in_check;
    state.stalemate = legal.is_empty() && !in_check;
    legal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, Piece, Square};

    fn apply(state: &mut GameState, start: Square, end: Square) {
        let mv = state
            .get_valid_moves()
            .into_iter()
            .find(|m| m.start == start && m.end == end)
            .expect("expected move should be legal");
        state.make_move(mv);
    }

    #[test]
    fn initial_position_has_twenty_legal_moves() {
        let mut state = GameState::new_game();
        let moves = state.get_valid_moves();
        assert_eq!(moves.len(), 20);
        assert!(!state.checkmate);
        assert!(!state.stalemate);
    }

    #[test]
    fn no_legal_move_leaves_the_own_king_attacked() {
        let mut state = GameState::new_game();
        // 1. e4 e5 2. Bc4 Nc6 3. Qh5 puts f7 under fire; black still must not
        // be offered any self-check move.
        for (start, end) in [
            ((6, 4), (4, 4)),
            ((1, 4), (3, 4)),
            ((7, 5), (4, 2)),
            ((0, 1), (2, 2)),
            ((7, 3), (3, 7)),
        ] {
            apply(&mut state, start, end);
        }

        let side = state.side_to_move();
        for mv in state.get_valid_moves() {
            state.make_move(mv);
            assert!(
                !square_attacked(&state.board, state.king_location(side), side.opposite()),
                "move {mv} leaves the king in check"
            );
            state.undo_move();
        }
    }

    #[test]
    fn fools_mate_is_detected_as_checkmate() {
        let mut state = GameState::new_game();
        // 1. f3 e5 2. g4 Qh4#
        apply(&mut state, (6, 5), (5, 5));
        apply(&mut state, (1, 4), (3, 4));
        apply(&mut state, (6, 6), (4, 6));
        apply(&mut state, (0, 3), (4, 7));

        let moves = state.get_valid_moves();
        assert!(moves.is_empty());
        assert!(state.checkmate);
        assert!(!state.stalemate);
    }

    #[test]
    fn cornered_king_with_no_moves_is_stalemate() {
        // Black king a8, white queen b6: the king is not attacked but every
        // flight square is.
        let mut state = GameState::empty();
        state.place_piece((0, 0), Piece::new(Color::Black, PieceKind::King));
        state.place_piece((2, 1), Piece::new(Color::White, PieceKind::Queen));
        state.place_piece((7, 4), Piece::new(Color::White, PieceKind::King));
        state.white_to_move = false;

        let moves = state.get_valid_moves();
        assert!(moves.is_empty());
        assert!(state.stalemate);
        assert!(!state.checkmate);
    }

    #[test]
    fn pinned_piece_may_not_expose_its_king() {
        let mut state = GameState::empty();
        state.place_piece((7, 4), Piece::new(Color::White, PieceKind::King));
        state.place_piece((6, 4), Piece::new(Color::White, PieceKind::Bishop));
        state.place_piece((0, 4), Piece::new(Color::Black, PieceKind::Rook));
        state.place_piece((0, 7), Piece::new(Color::Black, PieceKind::King));

        let moves = state.get_valid_moves();
        assert!(
            moves.iter().all(|m| m.start != (6, 4)),
            "pinned bishop must have no legal moves"
        );
    }

    #[test]
    fn castling_is_rejected_out_of_through_and_into_check() {
        let base = {
            let mut state = GameState::empty();
            state.place_piece((7, 4), Piece::new(Color::White, PieceKind::King));
            state.place_piece((7, 7), Piece::new(Color::White, PieceKind::Rook));
            state.place_piece((0, 0), Piece::new(Color::Black, PieceKind::King));
            state.castling_rights.white_kingside = true;
            state
        };

        // Out of check: rook on e8.
        let mut out_of_check = base.clone();
        out_of_check.place_piece((0, 4), Piece::new(Color::Black, PieceKind::Rook));
        assert!(!has_castle(&mut out_of_check));

        // Through check: rook on f8 covers f1.
        let mut through_check = base.clone();
        through_check.place_piece((0, 5), Piece::new(Color::Black, PieceKind::Rook));
        assert!(!has_castle(&mut through_check));

        // Into check: rook on g8 covers g1.
        let mut into_check = base.clone();
        into_check.place_piece((0, 6), Piece::new(Color::Black, PieceKind::Rook));
        assert!(!has_castle(&mut into_check));

        // An attack on the rook's own path (h-file) does not block castling.
        let mut rook_file_attacked = base.clone();
        rook_file_attacked.place_piece((0, 7), Piece::new(Color::Black, PieceKind::Rook));
        assert!(has_castle(&mut rook_file_attacked));

        fn has_castle(state: &mut GameState) -> bool {
            state.get_valid_moves().iter().any(|m| m.is_castle)
        }
    }

    #[test]
    fn castling_requires_empty_intervening_squares() {
        let mut state = GameState::empty();
        state.place_piece((7, 4), Piece::new(Color::White, PieceKind::King));
        state.place_piece((7, 7), Piece::new(Color::White, PieceKind::Rook));
        state.place_piece((7, 6), Piece::new(Color::White, PieceKind::Knight));
        state.place_piece((0, 0), Piece::new(Color::Black, PieceKind::King));
        state.castling_rights.white_kingside = true;

        assert!(state.get_valid_moves().iter().all(|m| !m.is_castle));
    }

    #[test]
    fn en_passant_window_closes_after_one_ply() {
        let mut state = GameState::new_game();
        // 1. e4 a6 2. e5 d5 opens the window on d6.
        for (start, end) in [
            ((6, 4), (4, 4)),
            ((1, 0), (2, 0)),
            ((4, 4), (3, 4)),
            ((1, 3), (3, 3)),
        ] {
            apply(&mut state, start, end);
        }
        assert!(state
            .get_valid_moves()
            .iter()
            .any(|m| m.is_en_passant && m.end == (2, 3)));

        // Any other move pair lets the window lapse.
        apply(&mut state, (7, 6), (5, 5));
        apply(&mut state, (1, 7), (2, 7));
        assert!(state.get_valid_moves().iter().all(|m| !m.is_en_passant));
    }

    #[test]
    fn terminal_flags_clear_again_after_undo() {
        let mut state = GameState::new_game();
        apply(&mut state, (6, 5), (5, 5));
        apply(&mut state, (1, 4), (3, 4));
        apply(&mut state, (6, 6), (4, 6));
        apply(&mut state, (0, 3), (4, 7));
        state.get_valid_moves();
        assert!(state.checkmate);

        state.undo_move().expect("mating move should undo");
        let moves = state.get_valid_moves();
        assert!(!state.checkmate);
        assert!(!moves.is_empty());
    }
}
