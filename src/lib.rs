//! Halma-Rust: a sternhalma (Chinese checkers) move engine.
//!
//! Given a 17×17 star-board occupancy, the engine computes the best single
//! move, a walk step or a chained multi-jump, for a player, scored by
//! net advance toward the corner that player must fill. It is a greedy
//! per-piece search, not a game-tree opponent model.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions, search depth cap, default layout
//! - [`board`] - Grid state, adjacency geometry, jump chains, move legality
//! - [`player`] - The six colors, their corners and travel directions
//! - [`targets`] - Frontier and settled-piece computation per turn
//! - [`search`] - The move search engine and a random baseline mover
//! - [`protocol`] - Line-oriented peer messages and the client session loop
//! - [`error`] - Layout and protocol error types
//!
//! ## Example
//!
//! ```
//! use halma_rust::board::Board;
//! use halma_rust::constants::DEFAULT_LAYOUT;
//! use halma_rust::player::Player;
//! use halma_rust::search::best_move;
//!
//! let mut board = Board::from_layout(DEFAULT_LAYOUT).unwrap();
//!
//! // Ask the engine for Red's opening move and play it.
//! let mv = best_move(&board, Player::Red).expect("Red can move");
//! assert!(board.move_piece(mv.origin(), mv.destination()));
//! ```

pub mod board;
pub mod constants;
pub mod error;
pub mod player;
pub mod protocol;
pub mod search;
pub mod targets;
