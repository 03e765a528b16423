//! Console self-play demo.
//!
//! Plays the one-ply greedy engine (white) against the alpha-beta searcher
//! (black) running through the async search bridge, polling the bridge the
//! way an interactive front end would between frames.
//!
//! Usage: `cargo run --release [search_depth]`

use std::thread;
use std::time::Duration;

use quince_chess::engines::engine_greedy::GreedyEngine;
use quince_chess::engines::engine_random::find_random_move;
use quince_chess::engines::engine_trait::Engine;
use quince_chess::game_state::chess_types::GameState;
use quince_chess::moves::chess_move::ChessMove;
use quince_chess::search::alpha_beta::SearchConfig;
use quince_chess::search::search_bridge::SearchBridge;
use quince_chess::utils::render_game_state::render_game_state;

const MAX_PLIES: usize = 200;
const POLL_INTERVAL: Duration = Duration::from_millis(10);

fn main() {
    env_logger::init();

    let max_depth = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u8>().ok())
        .unwrap_or(3);
    let config = SearchConfig { max_depth };

    let mut game = GameState::new_game();
    let mut bridge = SearchBridge::new();
    let mut white = GreedyEngine::new();

    println!("greedy (white) vs alpha-beta depth {max_depth} (black)\n");

    for ply in 0..MAX_PLIES {
        let valid_moves = game.get_valid_moves();
        if valid_moves.is_empty() {
            break;
        }

        let chosen = if game.white_to_move {
            match white.choose_move(&game) {
                Ok(out) => out.best_move,
                Err(err) => {
                    eprintln!("white engine failed: {err}");
                    break;
                }
            }
        } else {
            match bridge.begin_search(&game, &valid_moves, config) {
                Ok(()) => {}
                Err(err) => {
                    eprintln!("bridge rejected search: {err}");
                    break;
                }
            }
            poll_until_delivered(&mut bridge)
        };

        // A search that reports nothing falls back to a random legal move.
        let Some(mv) = chosen.or_else(|| find_random_move(&valid_moves)) else {
            break;
        };

        print_ply(ply, &mv);
        game.make_move(mv);
    }

    game.get_valid_moves();
    println!("\n{}\n", render_game_state(&game));
    if game.checkmate {
        let winner = if game.white_to_move { "black" } else { "white" };
        println!("checkmate — {winner} wins");
    } else if game.stalemate {
        println!("stalemate");
    } else {
        println!("stopped after {MAX_PLIES} plies");
    }
    println!("final position: {}", game.fen());
}

fn poll_until_delivered(bridge: &mut SearchBridge) -> Option<ChessMove> {
    loop {
        if let Some(result) = bridge.try_take_result() {
            return result;
        }
        thread::sleep(POLL_INTERVAL);
    }
}

fn print_ply(ply: usize, mv: &ChessMove) {
    if ply % 2 == 0 {
        print!("{}. {mv}", ply / 2 + 1);
    } else {
        println!(" {mv}");
    }
}
