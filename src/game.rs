//! Authoritative game state and turn alternation.
//!
//! [`Game`] owns the board for a whole game. Moves are validated here, not in
//! the search: the engine trusts whatever board it is handed.

use thiserror::Error;
use tracing::{debug, info};

use crate::board::{Board, Cell, Move, Player};
use crate::constants::CELLS;
use crate::rules::{self, GameStatus};
use crate::search::select_move;

/// Reasons a move is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("cell {0} is out of range (expected 0-8)")]
    OutOfRange(usize),

    #[error("cell {0} is already taken")]
    Occupied(Move),

    #[error("game already over")]
    GameOver,

    #[error("it is {to_move}'s turn, not {requested}'s")]
    NotYourTurn { to_move: Player, requested: Player },
}

#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: GameStatus,
    history: Vec<Move>,
}

impl Game {
    /// Start a game on an empty board with `first` to move.
    pub fn new(first: Player) -> Self {
        Self::from_board(Board::new(), first)
    }

    /// Resume from an arbitrary board. The board is not checked for
    /// piece-count consistency.
    pub fn from_board(board: Board, to_move: Player) -> Self {
        Self {
            board,
            to_move,
            status: rules::status(&board),
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Moves played since the game was created, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Play `index` for the side to move and pass the turn.
    pub fn play(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if index >= CELLS {
            return Err(MoveError::OutOfRange(index));
        }
        if self.board.get(index) != Cell::Empty {
            return Err(MoveError::Occupied(index));
        }

        let player = self.to_move;
        self.board.place(index, player);
        self.history.push(index);
        self.status = rules::status(&self.board);
        self.to_move = player.opponent();

        debug!(%player, mv = index, board = %self.board.to_compact(), "move played");
        if self.status.is_over() {
            info!(status = ?self.status, moves = self.history.len(), "game over");
        }
        Ok(self.status)
    }

    /// Let the engine choose and play a move for `engine`.
    ///
    /// Returns the chosen index. The search runs on a scratch copy so the
    /// authoritative board only ever sees the final move.
    pub fn engine_move(&mut self, engine: Player) -> Result<Move, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        if engine != self.to_move {
            return Err(MoveError::NotYourTurn {
                to_move: self.to_move,
                requested: engine,
            });
        }

        let mut scratch = self.board;
        let mv = select_move(&mut scratch, engine).ok_or(MoveError::GameOver)?;
        self.play(mv)?;
        Ok(mv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new(Player::X);
        assert_eq!(game.to_move(), Player::X);
        game.play(4).unwrap();
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.board().get(4), Cell::Occupied(Player::X));
        game.play(0).unwrap();
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.history(), &[4, 0]);
    }

    #[test]
    fn test_rejects_bad_moves() {
        let mut game = Game::new(Player::X);
        assert_eq!(game.play(9), Err(MoveError::OutOfRange(9)));
        game.play(3).unwrap();
        assert_eq!(game.play(3), Err(MoveError::Occupied(3)));
        // Rejected moves do not pass the turn
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.history(), &[3]);
    }

    #[test]
    fn test_win_ends_game() {
        let mut game = Game::new(Player::X);
        for mv in [0, 3, 1, 4] {
            assert_eq!(game.play(mv), Ok(GameStatus::Ongoing));
        }
        assert_eq!(game.play(2), Ok(GameStatus::Won(Player::X)));
        assert_eq!(game.play(5), Err(MoveError::GameOver));
        assert_eq!(game.engine_move(Player::O), Err(MoveError::GameOver));
    }

    #[test]
    fn test_draw_ends_game() {
        let mut game = Game::new(Player::X);
        // X O X / X O O / O X X
        for mv in [0, 1, 2, 4, 3, 5, 7, 6] {
            assert_eq!(game.play(mv), Ok(GameStatus::Ongoing));
        }
        assert_eq!(game.play(8), Ok(GameStatus::Draw));
    }

    #[test]
    fn test_engine_move_wrong_turn() {
        let mut game = Game::new(Player::X);
        assert_eq!(
            game.engine_move(Player::O),
            Err(MoveError::NotYourTurn {
                to_move: Player::X,
                requested: Player::O
            })
        );
    }

    #[test]
    fn test_engine_takes_win() {
        let board: Board = "OO.XX.X..".parse().unwrap();
        let mut game = Game::from_board(board, Player::O);
        assert_eq!(game.engine_move(Player::O), Ok(2));
        assert_eq!(game.status(), GameStatus::Won(Player::O));
    }

    #[test]
    fn test_from_finished_board() {
        let board: Board = "XXXOO....".parse().unwrap();
        let mut game = Game::from_board(board, Player::O);
        assert_eq!(game.status(), GameStatus::Won(Player::X));
        assert_eq!(game.play(5), Err(MoveError::GameOver));
    }
}
