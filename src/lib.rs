//! ttt-minimax: an unbeatable tic-tac-toe engine.
//!
//! The engine plays perfect tic-tac-toe by exhaustive minimax search over the
//! 3x3 board. It never loses: it wins when it can and draws otherwise.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, winning lines, and score values
//! - [`board`] - Board representation, parsing, and rendering
//! - [`rules`] - Win and draw detection
//! - [`search`] - Minimax search and move selection
//! - [`game`] - Turn alternation and move validation for a whole game
//! - [`playout`] - Simulated games against the engine or a random player
//! - [`console`] - Interactive human-vs-engine game over stdin/stdout
//!
//! ## Example
//!
//! ```
//! use ttt_minimax::board::{Board, Player};
//! use ttt_minimax::search::select_move;
//!
//! // O to move: X threatens the top row
//! let mut board: Board = "XX..O....".parse().unwrap();
//! let mv = select_move(&mut board, Player::O);
//! assert_eq!(mv, Some(2));
//! ```

pub mod board;
pub mod console;
pub mod constants;
pub mod game;
pub mod playout;
pub mod rules;
pub mod search;
