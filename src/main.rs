//! Halma-Rust: a sternhalma move engine.
//!
//! ## Usage
//!
//! - `halma-rust` - Run a self-play demo on the default board
//! - `halma-rust demo` - Same, with flags for layout, turn cap, and movers
//! - `halma-rust session` - Speak the peer protocol on stdin/stdout

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use halma_rust::board::{Board, Cell};
use halma_rust::constants::DEFAULT_LAYOUT;
use halma_rust::player::Player;
use halma_rust::protocol::Session;
use halma_rust::search::{best_move, random_move};
use halma_rust::targets::target_complete;

/// Halma-Rust: a sternhalma move engine
#[derive(Parser)]
#[command(name = "halma-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Speak the peer protocol on stdin/stdout
    Session {
        /// Board layout file (defaults to the built-in star)
        #[arg(long)]
        layout: Option<PathBuf>,
    },
    /// Play all seats against each other and print the moves
    Demo {
        /// Board layout file (defaults to the built-in star)
        #[arg(long)]
        layout: Option<PathBuf>,
        /// Stop after this many rounds
        #[arg(long, default_value_t = 200)]
        max_turns: usize,
        /// Use the random baseline mover instead of the engine
        #[arg(long)]
        random: bool,
        /// Seed for the random mover
        #[arg(long, default_value_t = 1)]
        seed: u64,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Session { layout }) => {
            let layout = load_layout(layout.as_deref())?;
            let mut session = Session::new(&layout)?;
            session.run()?;
        }
        Some(Commands::Demo {
            layout,
            max_turns,
            random,
            seed,
        }) => {
            let layout = load_layout(layout.as_deref())?;
            run_demo(&layout, max_turns, random, seed)?;
        }
        None => run_demo(DEFAULT_LAYOUT, 200, false, 1)?,
    }
    Ok(())
}

fn load_layout(path: Option<&std::path::Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading layout file {}", path.display())),
        None => Ok(DEFAULT_LAYOUT.to_string()),
    }
}

/// The players that actually have pieces on this board, in id order.
fn seats(board: &Board) -> Vec<Player> {
    Player::ALL
        .into_iter()
        .filter(|&player| {
            (0..17).any(|row| (0..17).any(|col| board.cell((row, col)) == Cell::Occupied(player)))
        })
        .collect()
}

fn run_demo(layout: &str, max_turns: usize, random: bool, seed: u64) -> anyhow::Result<()> {
    let mut board = Board::from_layout(layout)?;
    let seats = seats(&board);
    anyhow::ensure!(!seats.is_empty(), "layout has no pieces to move");

    println!("{board}");
    let mut rng = fastrand::Rng::with_seed(seed);

    for turn in 1..=max_turns {
        for &seat in &seats {
            if target_complete(&board, seat) {
                println!("{}\n{} wins after {} rounds", board, seat.name(), turn - 1);
                return Ok(());
            }
            let mv = if random {
                random_move(&board, seat, &mut rng)
            } else {
                best_move(&board, seat)
            };
            match mv {
                Some(mv) => {
                    let (from, to) = (mv.origin(), mv.destination());
                    anyhow::ensure!(
                        board.move_piece(from, to),
                        "engine produced an illegal move {from:?} -> {to:?}"
                    );
                    let kind = if mv.is_jump() { " (jump)" } else { "" };
                    println!("round {turn}: {} {from:?} -> {to:?}{kind}", seat.name());
                }
                None => println!("round {turn}: {} has no move", seat.name()),
            }
        }
    }

    println!("{board}\nno winner within {max_turns} rounds");
    Ok(())
}
