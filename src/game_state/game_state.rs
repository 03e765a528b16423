//! Incremental board state with an exactly-reversible move log.
//!
//! `GameState` is the authoritative model a controller mutates in place via
//! `make_move`/`undo_move`. Every piece of state a move overwrites is
//! snapshotted in the log, so undo is an exact inverse including castling
//! rights, the en-passant window, and the clocks.

use crate::game_state::chess_rules::{
    starting_board, BLACK_KINGSIDE_ROOK_HOME, BLACK_KING_START, BLACK_QUEENSIDE_ROOK_HOME,
    WHITE_KINGSIDE_ROOK_HOME, WHITE_KING_START, WHITE_QUEENSIDE_ROOK_HOME,
};
use crate::game_state::chess_types::{
    BoardGrid, CastlingRights, Color, Piece, PieceKind, Square, BOARD_SIZE,
};
use crate::game_state::undo_state::PlyRecord;
use crate::move_generation::attacks::square_attacked;
use crate::move_generation::legal_move_generator;
use crate::moves::chess_move::ChessMove;
use crate::utils::fen_generator::generate_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Mailbox grid, row 0 = black's back rank, row 7 = white's.
    pub board: BoardGrid,
    pub white_to_move: bool,
    pub castling_rights: CastlingRights,
    /// Square a pawn may capture onto en passant, open for exactly one ply
    /// after a two-square pawn advance.
    pub en_passant_target: Option<Square>,
    /// Applied moves with their undo snapshots, in order.
    pub move_log: Vec<PlyRecord>,
    pub white_king_location: Square,
    pub black_king_location: Square,
    /// Derived terminal flags, refreshed by `get_valid_moves`.
    pub checkmate: bool,
    pub stalemate: bool,
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard initial position.
    pub fn new_game() -> Self {
        Self {
            board: starting_board(),
            white_to_move: true,
            castling_rights: CastlingRights::all(),
            en_passant_target: None,
            move_log: Vec::new(),
            white_king_location: WHITE_KING_START,
            black_king_location: BLACK_KING_START,
            checkmate: false,
            stalemate: false,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Empty board scaffold for constructing positions by hand. The state is
    /// valid once both kings have been placed via `place_piece`.
    pub fn empty() -> Self {
        Self {
            board: [[None; BOARD_SIZE]; BOARD_SIZE],
            white_to_move: true,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            move_log: Vec::new(),
            white_king_location: WHITE_KING_START,
            black_king_location: BLACK_KING_START,
            checkmate: false,
            stalemate: false,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Put a piece on a square, keeping the king-location cache in sync.
    pub fn place_piece(&mut self, square: Square, piece: Piece) {
        self.board[square.0][square.1] = Some(piece);
        if piece.kind == PieceKind::King {
            match piece.color {
                Color::White => self.white_king_location = square,
                Color::Black => self.black_king_location = square,
            }
        }
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    #[inline]
    pub fn king_location(&self, color: Color) -> Square {
        match color {
            Color::White => self.white_king_location,
            Color::Black => self.black_king_location,
        }
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.0][square.1]
    }

    /// Whether the side to move currently has its king attacked.
    pub fn in_check(&self) -> bool {
        let side = self.side_to_move();
        square_attacked(&self.board, self.king_location(side), side.opposite())
    }

    /// Legal moves for the side to move. Also refreshes the derived
    /// `checkmate`/`stalemate` flags.
    pub fn get_valid_moves(&mut self) -> Vec<ChessMove> {
        legal_move_generator::get_valid_moves(self)
    }

    /// Apply a move the caller has already validated against
    /// `get_valid_moves`. Handles en-passant removal, rook relocation on
    /// castling, and promotion replacement atomically, and appends the undo
    /// snapshot to the move log.
    pub fn make_move(&mut self, mv: ChessMove) {
        let Some(piece) = mv.piece_moved else {
            // A move drawn from an empty square matches nothing legal; applying
            // it is a total no-op so the log stays consistent.
            return;
        };

        let record = PlyRecord {
            mv,
            prior_castling_rights: self.castling_rights,
            prior_en_passant_target: self.en_passant_target,
            prior_halfmove_clock: self.halfmove_clock,
            prior_fullmove_number: self.fullmove_number,
        };

        self.board[mv.start.0][mv.start.1] = None;
        self.board[mv.end.0][mv.end.1] = Some(piece);

        if mv.is_en_passant {
            // The captured pawn sits on the passed-over file beside the start
            // row, not on the destination square.
            self.board[mv.start.0][mv.end.1] = None;
        }

        if let Some(kind) = mv.promotion {
            self.board[mv.end.0][mv.end.1] = Some(Piece::new(piece.color, kind));
        }

        if mv.is_castle {
            let row = mv.start.0;
            if mv.end.1 > mv.start.1 {
                let rook = self.board[row][7].take();
                self.board[row][5] = rook;
            } else {
                let rook = self.board[row][0].take();
                self.board[row][3] = rook;
            }
        }

        if piece.kind == PieceKind::King {
            match piece.color {
                Color::White => self.white_king_location = mv.end,
                Color::Black => self.black_king_location = mv.end,
            }
            self.castling_rights.revoke_both(piece.color);
        }
        if piece.kind == PieceKind::Rook {
            revoke_rook_right(&mut self.castling_rights, mv.start);
        }
        // A capture landing on a rook home square kills that right too.
        revoke_rook_right(&mut self.castling_rights, mv.end);

        self.en_passant_target = if piece.kind == PieceKind::Pawn
            && mv.start.0.abs_diff(mv.end.0) == 2
        {
            Some(((mv.start.0 + mv.end.0) / 2, mv.start.1))
        } else {
            None
        };

        if piece.kind == PieceKind::Pawn || mv.piece_captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if piece.color == Color::Black {
            self.fullmove_number += 1;
        }

        self.white_to_move = !self.white_to_move;
        self.move_log.push(record);
    }

    /// Exactly reverse the last applied move. Returns the undone move, or
    /// `None` when nothing has been played yet.
    pub fn undo_move(&mut self) -> Option<ChessMove> {
        let record = self.move_log.pop()?;
        let mv = record.mv;

        // The moved-piece snapshot restores the pawn for promotions.
        self.board[mv.start.0][mv.start.1] = mv.piece_moved;
        if mv.is_en_passant {
            self.board[mv.end.0][mv.end.1] = None;
            self.board[mv.start.0][mv.end.1] = mv.piece_captured;
        } else {
            self.board[mv.end.0][mv.end.1] = mv.piece_captured;
        }

        if mv.is_castle {
            let row = mv.start.0;
            if mv.end.1 > mv.start.1 {
                let rook = self.board[row][5].take();
                self.board[row][7] = rook;
            } else {
                let rook = self.board[row][3].take();
                self.board[row][0] = rook;
            }
        }

        if let Some(piece) = mv.piece_moved {
            if piece.kind == PieceKind::King {
                match piece.color {
                    Color::White => self.white_king_location = mv.start,
                    Color::Black => self.black_king_location = mv.start,
                }
            }
        }

        self.castling_rights = record.prior_castling_rights;
        self.en_passant_target = record.prior_en_passant_target;
        self.halfmove_clock = record.prior_halfmove_clock;
        self.fullmove_number = record.prior_fullmove_number;
        self.white_to_move = !self.white_to_move;
        // Terminal flags are derived; undoing a move reopens the game.
        self.checkmate = false;
        self.stalemate = false;

        Some(mv)
    }

    /// Standard FEN export for external analysis collaborators. The core
    /// emits FEN only; it never parses it.
    pub fn fen(&self) -> String {
        generate_fen(self)
    }
}

fn revoke_rook_right(rights: &mut CastlingRights, square: Square) {
    if square == WHITE_KINGSIDE_ROOK_HOME {
        rights.white_kingside = false;
    } else if square == WHITE_QUEENSIDE_ROOK_HOME {
        rights.white_queenside = false;
    } else if square == BLACK_KINGSIDE_ROOK_HOME {
        rights.black_kingside = false;
    } else if square == BLACK_QUEENSIDE_ROOK_HOME {
        rights.black_queenside = false;
    }
}
