//! Exhaustive minimax search.
//!
//! The search explores every continuation from a board by placing a mark,
//! recursing, and clearing the mark again on the same board. Depth is bounded
//! by the number of empty cells (at most 9), so plain recursion is enough and
//! there is no pruning or caching.
//!
//! Values are from the perspective of `me`, the side the engine plays:
//! - [`SCORE_WIN`] (`+1`) - `me` wins with best play
//! - [`SCORE_DRAW`] (`0`) - draw with best play
//! - [`SCORE_LOSS`] (`-1`) - the opponent wins with best play

use tracing::debug;

use crate::board::{Board, Move, Player};
use crate::constants::{SCORE_DRAW, SCORE_LOSS, SCORE_WIN};
use crate::rules::is_win;

/// Game-theoretic value of a board, always one of `-1`, `0`, `+1`.
pub type Score = i32;

/// A candidate move and its minimax value.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveScore {
    pub mv: Move,
    pub score: Score,
}

/// Compute the minimax value of `board` for `me`.
///
/// `maximizing` says whose turn it is: `true` when `me` moves next, `false`
/// when the opponent does. The board is mutated during the search but every
/// placement is undone before returning.
pub fn minimax(board: &mut Board, me: Player, maximizing: bool) -> Score {
    let opponent = me.opponent();

    // Base cases, in this precedence
    if is_win(board, me) {
        return SCORE_WIN;
    }
    if is_win(board, opponent) {
        return SCORE_LOSS;
    }
    if board.is_full() {
        return SCORE_DRAW;
    }

    let (side, mut best) = if maximizing {
        (me, Score::MIN)
    } else {
        (opponent, Score::MAX)
    };

    for mv in board.available_moves() {
        board.place(mv, side);
        let score = minimax(board, me, !maximizing);
        board.clear(mv);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// Value every legal move for `me`, in ascending index order.
///
/// Each entry is the minimax value after `me` plays that move and the
/// opponent replies optimally.
pub fn analyze(board: &mut Board, me: Player) -> Vec<MoveScore> {
    board
        .available_moves()
        .into_iter()
        .map(|mv| {
            board.place(mv, me);
            let score = minimax(board, me, false);
            board.clear(mv);
            MoveScore { mv, score }
        })
        .collect()
}

/// Pick the best move for `me`.
///
/// Moves are tried in ascending index order and a later move replaces the
/// current best only if it scores strictly higher, so ties go to the lowest
/// index. Returns `None` if the board has no empty cell.
///
/// The caller is expected to ask only on a board that is not yet decided and
/// where it is `me`'s turn; other boards are searched as given.
pub fn select_move(board: &mut Board, me: Player) -> Option<Move> {
    let mut best: Option<MoveScore> = None;

    for mv in board.available_moves() {
        board.place(mv, me);
        let score = minimax(board, me, false);
        board.clear(mv);

        if best.is_none_or(|b| score > b.score) {
            best = Some(MoveScore { mv, score });
        }
    }

    if let Some(b) = best {
        debug!(player = %me, board = %board.to_compact(), mv = b.mv, score = b.score, "selected move");
    }
    best.map(|b| b.mv)
}
