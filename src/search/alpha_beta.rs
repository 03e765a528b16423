//! Fixed-depth negamax search with alpha-beta pruning.
//!
//! The search operates on an owned clone of the caller's state using the
//! make/undo workflow, so `find_best_move` is a pure function of its inputs.
//! Terminal positions dominate material (mates biased toward fewer plies),
//! and captures are examined first to tighten the alpha-beta window early.

use thiserror::Error;

use crate::game_state::chess_types::GameState;
use crate::moves::chess_move::ChessMove;
use crate::search::board_scoring::{BoardScorer, MaterialScorer, MATE_SCORE};
use crate::search::search_control::SearchControl;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("search aborted by stop request")]
    Aborted,
}

pub type SearchOutcome<T> = Result<T, SearchError>;

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub max_depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_depth: 3 }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchResult {
    pub best_move: Option<ChessMove>,
    pub best_score: i32,
    pub nodes: u64,
}

/// Pick the best move among `legal_moves` for the side to move in
/// `game_state`. Never mutates the caller's state; deterministic for a fixed
/// depth and scorer (ties keep the earliest move in ordered sequence).
///
/// Returns `best_move: None` when `legal_moves` is empty or `max_depth` is
/// zero; callers fall back to a random choice or treat the game as over.
pub fn find_best_move<S: BoardScorer>(
    game_state: &GameState,
    legal_moves: &[ChessMove],
    scorer: &S,
    config: SearchConfig,
    control: &SearchControl,
) -> SearchOutcome<SearchResult> {
    let mut scratch = game_state.clone();
    let mut nodes = 1u64;

    if legal_moves.is_empty() {
        let score = terminal_score(&scratch, 0);
        control.add_nodes(nodes);
        return Ok(SearchResult {
            best_move: None,
            best_score: score,
            nodes,
        });
    }

    if config.max_depth == 0 {
        control.add_nodes(nodes);
        return Ok(SearchResult {
            best_move: None,
            best_score: scorer.score(&scratch),
            nodes,
        });
    }

    let mut ordered = legal_moves.to_vec();
    order_moves(&mut ordered);

    let mut alpha = -MATE_SCORE;
    let beta = MATE_SCORE;
    let mut best_move = None;
    let mut best_score = -MATE_SCORE;

    for mv in ordered {
        if control.should_stop() {
            control.add_nodes(nodes);
            return Err(SearchError::Aborted);
        }

        scratch.make_move(mv);
        let result = negamax(
            &mut scratch,
            scorer,
            config.max_depth - 1,
            -beta,
            -alpha,
            1,
            &mut nodes,
            control,
        );
        scratch.undo_move();
        let score = -result?;

        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }
        if score > alpha {
            alpha = score;
        }
    }

    control.add_nodes(nodes);
    log::debug!(
        "search done: depth {} score {} nodes {}",
        config.max_depth,
        best_score,
        nodes
    );

    Ok(SearchResult {
        best_move,
        best_score,
        nodes,
    })
}

/// Examine captures first, highest captured value first. Stable, so quiet
/// moves keep their generation order and results stay deterministic.
pub fn order_moves(moves: &mut [ChessMove]) {
    moves.sort_by_key(|mv| std::cmp::Reverse(capture_value(mv)));
}

#[inline]
fn capture_value(mv: &ChessMove) -> i32 {
    mv.piece_captured
        .map_or(0, |piece| MaterialScorer::piece_value(piece.kind))
}

fn negamax<S: BoardScorer>(
    state: &mut GameState,
    scorer: &S,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    ply: u8,
    nodes: &mut u64,
    control: &SearchControl,
) -> SearchOutcome<i32> {
    *nodes += 1;

    if control.should_stop() {
        return Err(SearchError::Aborted);
    }

    let mut moves = state.get_valid_moves();
    if moves.is_empty() {
        return Ok(terminal_score(state, ply));
    }
    if depth == 0 {
        return Ok(scorer.score(state));
    }

    order_moves(&mut moves);
    let mut best = -MATE_SCORE;

    for mv in moves {
        state.make_move(mv);
        let result = negamax(
            state,
            scorer,
            depth - 1,
            -beta,
            -alpha,
            ply.saturating_add(1),
            nodes,
            control,
        );
        state.undo_move();
        let score = -result?;

        if score > best {
            best = score;
        }
        if score > alpha {
            alpha = score;
        }
        if alpha >= beta {
            break;
        }
    }

    Ok(best)
}

/// Score for a side with no legal moves: mated if in check (faster mates
/// score worse for the mated side), stalemate otherwise.
fn terminal_score(state: &GameState, ply: u8) -> i32 {
    if state.in_check() {
        -MATE_SCORE + i32::from(ply)
    } else {
        0
    }
}
