//! Perft move-path enumeration for validating the generator.
//!
//! Counts leaf nodes (and the special-move kinds reaching them) of the legal
//! move tree to a fixed depth, using the same make/undo workflow as search.

use crate::game_state::chess_types::GameState;
use crate::moves::chess_move::ChessMove;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
    }

    fn count_leaf(&mut self, mv: &ChessMove) {
        self.nodes += 1;
        if mv.is_capture() {
            self.captures += 1;
        }
        if mv.is_en_passant {
            self.en_passant += 1;
        }
        if mv.is_castle {
            self.castles += 1;
        }
        if mv.promotion.is_some() {
            self.promotions += 1;
        }
    }
}

pub fn perft(state: &mut GameState, depth: u8) -> PerftCounts {
    let mut total = PerftCounts::default();

    if depth == 0 {
        total.nodes = 1;
        return total;
    }

    for mv in state.get_valid_moves() {
        if depth == 1 {
            total.count_leaf(&mv);
        } else {
            state.make_move(mv);
            total.merge(perft(state, depth - 1));
            state.undo_move();
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startpos_perft_matches_known_node_counts() {
        let mut state = GameState::new_game();
        assert_eq!(perft(&mut state, 1).nodes, 20);
        assert_eq!(perft(&mut state, 2).nodes, 400);

        let depth3 = perft(&mut state, 3);
        assert_eq!(depth3.nodes, 8_902);
        assert_eq!(depth3.captures, 34);
        assert_eq!(depth3.en_passant, 0);
        assert_eq!(depth3.castles, 0);
        assert_eq!(depth3.promotions, 0);
    }

    #[test]
    fn perft_leaves_the_state_untouched() {
        let mut state = GameState::new_game();
        let snapshot = state.clone();
        perft(&mut state, 3);
        // The terminal flags are refreshed by generation; everything else
        // must round-trip exactly.
        assert_eq!(state.board, snapshot.board);
        assert_eq!(state.move_log.len(), 0);
        assert_eq!(state.castling_rights, snapshot.castling_rights);
        assert_eq!(state.en_passant_target, snapshot.en_passant_target);
    }

    #[test]
    #[ignore = "slow in debug builds; run with --ignored"]
    fn startpos_perft_depth_four() {
        let mut state = GameState::new_game();
        let depth4 = perft(&mut state, 4);
        assert_eq!(depth4.nodes, 197_281);
        assert_eq!(depth4.captures, 1_576);
    }
}
