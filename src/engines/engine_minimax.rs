//! Fixed-depth alpha-beta engine.
//!
//! Wraps the negamax search with a configured depth and the positional
//! scorer, falling back to a uniform random choice if the search yields no
//! decisive move.

use crate::engines::engine_random::find_random_move;
use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::chess_types::GameState;
use crate::search::alpha_beta::{find_best_move, SearchConfig, SearchOutcome};
use crate::search::board_scoring::PositionalScorer;
use crate::search::search_control::SearchControl;

pub struct MinimaxEngine {
    config: SearchConfig,
    scorer: PositionalScorer,
}

impl MinimaxEngine {
    pub fn new(max_depth: u8) -> Self {
        Self {
            config: SearchConfig { max_depth },
            scorer: PositionalScorer,
        }
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default().max_depth)
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Quince Minimax"
    }

    fn choose_move(&mut self, game_state: &GameState) -> SearchOutcome<EngineOutput> {
        let mut probe = game_state.clone();
        let legal_moves = probe.get_valid_moves();

        let control = SearchControl::new();
        let result = find_best_move(game_state, &legal_moves, &self.scorer, self.config, &control)?;

        Ok(EngineOutput {
            best_move: result.best_move.or_else(|| find_random_move(&legal_moves)),
            nodes: result.nodes,
        })
    }
}
