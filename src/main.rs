//! ttt-minimax: play tic-tac-toe against a perfect opponent.
//!
//! ## Usage
//!
//! - `ttt-minimax` - Play an interactive game
//! - `ttt-minimax play --first human` - Play, skipping the "go first?" prompt
//! - `ttt-minimax demo` - Watch the engine play itself and a random player
//! - `ttt-minimax analyze XX.OO....` - Score every move on a board
//!
//! Set `RUST_LOG=debug` to trace the engine's decisions on stderr.

use std::io;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use ttt_minimax::board::{Board, Player};
use ttt_minimax::console::Console;
use ttt_minimax::constants::{DEFAULT_DEMO_GAMES, DEFAULT_SEED};
use ttt_minimax::playout::{Strategy, engine_vs_random, play_out};
use ttt_minimax::rules::{self, GameStatus};
use ttt_minimax::search::{analyze, select_move};

/// ttt-minimax: an unbeatable tic-tac-toe engine
#[derive(Parser)]
#[command(name = "ttt-minimax")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against the engine
    Play {
        /// Who moves first; asks interactively when omitted
        #[arg(long, value_enum)]
        first: Option<First>,
    },
    /// Run engine-vs-engine and engine-vs-random games
    Demo {
        /// Number of games against the random player
        #[arg(long, default_value_t = DEFAULT_DEMO_GAMES)]
        games: usize,
        /// Seed for the random player
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,
    },
    /// Show the minimax value of every move on a board
    Analyze {
        /// Board as 9 cells, row-major: X, O and . for empty (e.g. "XX.OO....")
        board: String,
        /// Side the engine plays
        #[arg(long, value_enum, default_value_t = Side::O)]
        engine: Side,
    },
}

#[derive(Copy, Clone, ValueEnum)]
enum First {
    Human,
    Engine,
}

#[derive(Copy, Clone, ValueEnum)]
enum Side {
    X,
    O,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Player::X,
            Side::O => Player::O,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play { first }) => run_play(first.map(|f| matches!(f, First::Human))),
        Some(Commands::Demo { games, seed }) => run_demo(games, seed),
        Some(Commands::Analyze { board, engine }) => run_analyze(&board, engine.into()),
        None => run_play(None),
    }
}

fn run_play(human_first: Option<bool>) -> Result<()> {
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    console.run(human_first)?;
    Ok(())
}

fn run_demo(games: usize, seed: u64) -> Result<()> {
    println!("ttt-minimax: Unbeatable Tic-Tac-Toe Engine\n");

    println!("=== Engine vs Engine ===");
    let mut rng = fastrand::Rng::with_seed(seed);
    let record = play_out(Player::X, Strategy::Engine, Strategy::Engine, &mut rng)?;
    let moves: Vec<String> = record.moves.iter().map(|m| (m + 1).to_string()).collect();
    println!("Moves: {}", moves.join(" "));
    println!("{}", record.board);
    println!("Result: {}\n", describe(record.status));

    println!("=== Engine vs Random ({games} games, seed {seed}) ===");
    for engine in [Player::X, Player::O] {
        let tally = engine_vs_random(engine, games, seed)?;
        println!(
            "Engine as {engine}: {} wins, {} draws, {} losses",
            tally.wins, tally.draws, tally.losses
        );
    }
    Ok(())
}

fn run_analyze(text: &str, engine: Player) -> Result<()> {
    let mut board: Board = text
        .parse()
        .with_context(|| format!("invalid board '{text}'"))?;

    println!("{board}");
    let status = rules::status(&board);
    if status.is_over() {
        println!("Game over: {}", describe(status));
        return Ok(());
    }

    for s in analyze(&mut board, engine) {
        println!("move {} score={:+}", s.mv + 1, s.score);
    }
    if let Some(mv) = select_move(&mut board, engine) {
        println!("Best move for {engine}: {}", mv + 1);
    }
    Ok(())
}

fn describe(status: GameStatus) -> String {
    match status {
        GameStatus::Ongoing => "ongoing".to_string(),
        GameStatus::Won(p) => format!("{p} wins"),
        GameStatus::Draw => "draw".to_string(),
    }
}
