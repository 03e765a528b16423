//! Async search bridge between the interactive controller and the searcher.
//!
//! State machine: Idle -> Searching -> {Delivered, Cancelled} -> Idle. A
//! search runs in one worker thread over a private clone of the game state
//! and reports through a one-shot channel, so the controller never blocks
//! and never shares mutable state with the worker. Cancellation raises the
//! stop flag and abandons the channel; a result finishing in the same
//! instant is dropped, never applied.

use std::sync::mpsc::{sync_channel, Receiver, SyncSender, TryRecvError};
use std::sync::Arc;
use std::thread;

use thiserror::Error;

use crate::game_state::chess_types::GameState;
use crate::moves::chess_move::ChessMove;
use crate::search::alpha_beta::{find_best_move, SearchConfig, SearchError};
use crate::search::board_scoring::PositionalScorer;
use crate::search::search_control::SearchControl;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BridgeError {
    #[error("a search is already running")]
    SearchAlreadyRunning,
}

/// Worker entry point: search the cloned position and write the single
/// result (a move or none) to the one-shot channel exactly once. An aborted
/// search reports none; a send failing because the controller cancelled is
/// the discard path.
pub fn search_into_channel(
    game_state: GameState,
    legal_moves: Vec<ChessMove>,
    config: SearchConfig,
    control: Arc<SearchControl>,
    sender: SyncSender<Option<ChessMove>>,
) {
    let scorer = PositionalScorer;
    let best = match find_best_move(&game_state, &legal_moves, &scorer, config, &control) {
        Ok(result) => result.best_move,
        Err(SearchError::Aborted) => None,
    };
    let _ = sender.send(best);
}

struct ActiveSearch {
    receiver: Receiver<Option<ChessMove>>,
    control: Arc<SearchControl>,
}

/// One-at-a-time asynchronous search slot.
#[derive(Default)]
pub struct SearchBridge {
    active: Option<ActiveSearch>,
}

impl SearchBridge {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_searching(&self) -> bool {
        self.active.is_some()
    }

    /// Clone the position and hand it to a worker together with the current
    /// legal-move set. Rejected while another search is outstanding.
    pub fn begin_search(
        &mut self,
        game_state: &GameState,
        legal_moves: &[ChessMove],
        config: SearchConfig,
    ) -> Result<(), BridgeError> {
        if self.active.is_some() {
            return Err(BridgeError::SearchAlreadyRunning);
        }

        let control = SearchControl::new();
        let (sender, receiver) = sync_channel::<Option<ChessMove>>(1);
        let worker_state = game_state.clone();
        let worker_moves = legal_moves.to_vec();
        let worker_control = Arc::clone(&control);

        thread::spawn(move || {
            search_into_channel(worker_state, worker_moves, config, worker_control, sender);
        });

        log::debug!(
            "search started: depth {} over {} moves",
            config.max_depth,
            legal_moves.len()
        );
        self.active = Some(ActiveSearch { receiver, control });
        Ok(())
    }

    /// Non-blocking poll. `None` while idle or still searching;
    /// `Some(result)` delivers exactly once and returns the bridge to idle.
    pub fn try_take_result(&mut self) -> Option<Option<ChessMove>> {
        let delivered = match &self.active {
            None => return None,
            Some(active) => match active.receiver.try_recv() {
                Ok(best) => best,
                Err(TryRecvError::Empty) => return None,
                // A worker that died without reporting counts as "no move";
                // the caller falls back to a random choice.
                Err(TryRecvError::Disconnected) => None,
            },
        };

        self.active = None;
        log::debug!("search delivered: {:?}", delivered.map(|m| m.to_coordinate()));
        Some(delivered)
    }

    /// Block until the outstanding search reports. `None` when idle or when
    /// the worker produced no move.
    pub fn wait_for_result(&mut self) -> Option<ChessMove> {
        let active = self.active.take()?;
        let best = active.receiver.recv().unwrap_or(None);
        log::debug!("search delivered: {:?}", best.map(|m| m.to_coordinate()));
        best
    }

    /// Hard-cancel the outstanding search (undo/reset pressed). The stop
    /// flag ends the worker at its next node; dropping the receiver
    /// guarantees an already-computed result is ignored.
    pub fn cancel(&mut self) {
        if let Some(active) = self.active.take() {
            active.control.request_stop();
            log::debug!(
                "search cancelled after {} nodes",
                active.control.nodes_visited()
            );
        }
    }
}
