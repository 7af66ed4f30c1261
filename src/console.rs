//! Interactive text front end.
//!
//! Plays one game between a human at the terminal and the engine. The loop
//! is generic over its input and output so it can be driven from a script,
//! the same way a protocol front end would be.
//!
//! Cells are numbered 1-9 for the human, starting from the top-left:
//!
//! ```text
//!  1 | 2 | 3
//! ---|---|---
//!  4 | 5 | 6
//! ---|---|---
//!  7 | 8 | 9
//! ```

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use thiserror::Error;
use tracing::debug;

use crate::board::{Board, Cell, Move, Player};
use crate::constants::CELLS;
use crate::game::Game;
use crate::rules::GameStatus;

/// Problems with a line typed by the human.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid input. Please enter a number.")]
    NotANumber,

    #[error("Invalid input. Please enter a number between 1 and 9.")]
    OutOfRange,

    #[error("That spot is already taken. Try again.")]
    Occupied,
}

/// Turn a 1-based cell number typed by the human into a board index.
pub fn parse_human_move(input: &str, board: &Board) -> Result<Move, InputError> {
    let n: i64 = input.trim().parse().map_err(|_| InputError::NotANumber)?;
    if !(1..=CELLS as i64).contains(&n) {
        return Err(InputError::OutOfRange);
    }
    let index = (n - 1) as Move;
    if board.get(index) != Cell::Empty {
        return Err(InputError::Occupied);
    }
    Ok(index)
}

/// Console game state.
pub struct Console<R, W> {
    input: R,
    output: W,
    human: Player,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// The human plays X and the engine plays O.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            human: Player::X,
        }
    }

    fn engine(&self) -> Player {
        self.human.opponent()
    }

    /// Run one game to completion.
    ///
    /// `human_first` skips the "go first?" prompt when already decided.
    pub fn run(&mut self, human_first: Option<bool>) -> Result<GameStatus> {
        self.banner()?;

        let human_first = match human_first {
            Some(b) => b,
            None => self.ask_first()?,
        };
        let first = if human_first { self.human } else { self.engine() };
        let mut game = Game::new(first);

        loop {
            self.print_board(game.board())?;

            match game.status() {
                GameStatus::Won(p) if p == self.engine() => {
                    writeln!(self.output, "AI wins! Better luck next time.")?;
                    break;
                }
                GameStatus::Won(_) => {
                    writeln!(self.output, "You win! (Wait, that's impossible...)")?;
                    break;
                }
                GameStatus::Draw => {
                    writeln!(self.output, "It's a draw! Good game.")?;
                    break;
                }
                GameStatus::Ongoing => {}
            }

            if game.to_move() == self.human {
                let mv = self.human_move(game.board())?;
                game.play(mv)?;
            } else {
                writeln!(self.output, "AI is thinking...")?;
                let mv = game.engine_move(self.engine())?;
                debug!(mv, "engine replied");
            }
        }

        self.output.flush()?;
        Ok(game.status())
    }

    fn banner(&mut self) -> Result<()> {
        writeln!(self.output, "=======================================")?;
        writeln!(self.output, "       UNBEATABLE TIC-TAC-TOE AI       ")?;
        writeln!(self.output, "=======================================")?;
        writeln!(
            self.output,
            "You are {}. The AI is {}.",
            self.human,
            self.engine()
        )?;
        writeln!(
            self.output,
            "Positions are numbered 1-9 starting from top-left."
        )?;
        Ok(())
    }

    fn print_board(&mut self, board: &Board) -> Result<()> {
        write!(self.output, "\n{board}\n")?;
        Ok(())
    }

    /// Read one line, failing on end of input.
    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        let n = self
            .input
            .read_line(&mut line)
            .context("failed to read from input")?;
        if n == 0 {
            bail!("input closed before the game finished");
        }
        Ok(line.trim().to_string())
    }

    fn ask_first(&mut self) -> Result<bool> {
        loop {
            let answer = self.prompt("Do you want to go first? (y/n): ")?;
            match answer.to_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => writeln!(self.output, "Please enter 'y' or 'n'.")?,
            }
        }
    }

    fn human_move(&mut self, board: &Board) -> Result<Move> {
        loop {
            let line = self.prompt("Enter your move (1-9): ")?;
            match parse_human_move(&line, board) {
                Ok(mv) => return Ok(mv),
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(script: &str, human_first: Option<bool>) -> (Result<GameStatus>, String) {
        let mut out = Vec::new();
        let result = Console::new(Cursor::new(script.as_bytes()), &mut out).run(human_first);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_human_move() {
        let board: Board = "X........".parse().unwrap();
        assert_eq!(parse_human_move("5", &board), Ok(4));
        assert_eq!(parse_human_move(" 9 \n", &board), Ok(8));
        assert_eq!(parse_human_move("abc", &board), Err(InputError::NotANumber));
        assert_eq!(parse_human_move("", &board), Err(InputError::NotANumber));
        assert_eq!(parse_human_move("0", &board), Err(InputError::OutOfRange));
        assert_eq!(parse_human_move("10", &board), Err(InputError::OutOfRange));
        assert_eq!(parse_human_move("-3", &board), Err(InputError::OutOfRange));
        assert_eq!(parse_human_move("1", &board), Err(InputError::Occupied));
    }

    #[test]
    fn test_engine_first_blocks_and_wins() {
        // Engine opens at 1 (index 0). The human wanders; the engine
        // should finish the game without losing.
        let (result, out) = run_script("2\n3\n4\n5\n6\n7\n8\n9\n", Some(false));
        let status = result.unwrap();
        assert_ne!(status, GameStatus::Won(Player::X));
        assert!(out.contains("AI is thinking..."));
        assert!(out.contains("UNBEATABLE TIC-TAC-TOE AI"));
    }

    #[test]
    fn test_prompt_retries_on_bad_input() {
        // "maybe" is rejected, then the human goes first and types
        // junk, an out-of-range number and an occupied cell before the
        // script runs out.
        let (result, out) = run_script("maybe\ny\nfoo\n12\n5\n5\n", None);
        assert!(result.is_err());
        assert!(out.contains("Please enter 'y' or 'n'."));
        assert!(out.contains("Invalid input. Please enter a number."));
        assert!(out.contains("Invalid input. Please enter a number between 1 and 9."));
        assert!(out.contains("That spot is already taken. Try again."));
    }

    #[test]
    fn test_closed_input_is_error() {
        let (result, _) = run_script("", None);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("input closed"));
    }

    #[test]
    fn test_human_cannot_win() {
        // Human takes the centre then corners; whatever happens the
        // engine must not lose. Extra lines cover any number of turns.
        let script = "5\n1\n3\n7\n9\n2\n4\n6\n8\n".repeat(2);
        let (result, out) = run_script(&script, Some(true));
        let status = result.unwrap();
        assert_ne!(status, GameStatus::Won(Player::X));
        assert!(out.contains("AI wins!") || out.contains("It's a draw!"));
    }
}
