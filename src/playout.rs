//! Whole-game simulations.
//!
//! A playout runs a [`Game`] to the end with each side driven by a
//! [`Strategy`]. The random strategy takes a uniformly random empty cell from
//! a caller-supplied, seedable RNG so runs are reproducible.

use fastrand::Rng;

use crate::board::{Board, Move, Player};
use crate::game::{Game, MoveError};
use crate::rules::GameStatus;

/// How a side chooses its moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Perfect play via minimax.
    Engine,
    /// A uniformly random empty cell.
    Random,
}

/// The moves and result of a finished game.
#[derive(Clone, Debug)]
pub struct GameRecord {
    pub first: Player,
    pub moves: Vec<Move>,
    pub board: Board,
    pub status: GameStatus,
}

/// Pick a random empty cell.
pub fn random_move(board: &Board, rng: &mut Rng) -> Option<Move> {
    let moves = board.available_moves();
    if moves.is_empty() {
        return None;
    }
    Some(moves[rng.usize(..moves.len())])
}

/// Play a full game from an empty board.
pub fn play_out(
    first: Player,
    x: Strategy,
    o: Strategy,
    rng: &mut Rng,
) -> Result<GameRecord, MoveError> {
    let mut game = Game::new(first);

    while !game.status().is_over() {
        let side = game.to_move();
        let strategy = match side {
            Player::X => x,
            Player::O => o,
        };
        match strategy {
            Strategy::Engine => {
                game.engine_move(side)?;
            }
            Strategy::Random => {
                let mv = random_move(game.board(), rng).ok_or(MoveError::GameOver)?;
                game.play(mv)?;
            }
        }
    }

    Ok(GameRecord {
        first,
        moves: game.history().to_vec(),
        board: *game.board(),
        status: game.status(),
    })
}

/// Win/draw/loss counts from one side's point of view.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
}

impl Tally {
    pub fn record(&mut self, status: GameStatus, side: Player) {
        match status {
            GameStatus::Won(p) if p == side => self.wins += 1,
            GameStatus::Won(_) => self.losses += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::Ongoing => {}
        }
    }

    pub fn games(&self) -> usize {
        self.wins + self.draws + self.losses
    }
}

/// Play `games` games of the engine (as `engine`) against a random
/// opponent, alternating who moves first.
pub fn engine_vs_random(engine: Player, games: usize, seed: u64) -> Result<Tally, MoveError> {
    let mut rng = Rng::with_seed(seed);
    let mut tally = Tally::default();

    let (x, o) = match engine {
        Player::X => (Strategy::Engine, Strategy::Random),
        Player::O => (Strategy::Random, Strategy::Engine),
    };

    for i in 0..games {
        let first = if i % 2 == 0 { Player::X } else { Player::O };
        let record = play_out(first, x, o, &mut rng)?;
        tally.record(record.status, engine);
    }

    Ok(tally)
}
