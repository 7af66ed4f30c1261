//! Terminal-state detection.
//!
//! Wins are always tested before fullness: the move that completes a line is
//! often the one that fills the last empty cell, and such a board is a win,
//! not a draw.

use crate::board::{Board, Cell, Player};
use crate::constants::LINES;

/// Outcome of a board, as seen by the turn loop.
///
/// `Ongoing` is the initial state; the other three are terminal and admit no
/// further moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Won(Player),
    Draw,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::Ongoing
    }
}

/// Check whether `player` owns all three cells of any line.
pub fn is_win(board: &Board, player: Player) -> bool {
    let mark = Cell::Occupied(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|&i| board.get(i) == mark))
}

/// A full board on which neither side has a line.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && !is_win(board, Player::X) && !is_win(board, Player::O)
}

/// The side owning a complete line, if any.
///
/// Boards from a legal game can have at most one winner. For malformed
/// boards with two, `X` is reported.
pub fn winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|&p| is_win(board, p))
}

pub fn status(board: &Board) -> GameStatus {
    match winner(board) {
        Some(p) => GameStatus::Won(p),
        None if board.is_full() => GameStatus::Draw,
        None => GameStatus::Ongoing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board_is_ongoing() {
        let b = Board::new();
        assert!(!is_win(&b, Player::X));
        assert!(!is_win(&b, Player::O));
        assert!(!is_draw(&b));
        assert_eq!(status(&b), GameStatus::Ongoing);
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let mut b = Board::new();
            for i in line {
                b.place(i, Player::O);
            }
            assert!(is_win(&b, Player::O), "line {line:?}");
            assert!(!is_win(&b, Player::X), "line {line:?}");
            assert_eq!(winner(&b), Some(Player::O));
        }
    }

    #[test]
    fn test_two_in_a_row_is_not_a_win() {
        let b = board("XX.OO....");
        assert!(!is_win(&b, Player::X));
        assert!(!is_win(&b, Player::O));
        assert_eq!(winner(&b), None);
    }

    #[test]
    fn test_full_board_with_win_is_not_a_draw() {
        // X completes the diagonal with the last empty cell
        let b = board("XOXOXOOXX");
        assert!(b.is_full());
        assert!(is_win(&b, Player::X));
        assert!(!is_draw(&b));
        assert_eq!(status(&b), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let b = board("XOXXOOOXX");
        assert!(is_draw(&b));
        assert_eq!(status(&b), GameStatus::Draw);
        assert!(status(&b).is_over());
    }
}
