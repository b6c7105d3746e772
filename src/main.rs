use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use connect_four_engine::{
    Board, COLS, EngineConfig, Game, GameError, GameState, Player, SearchEngine, Strategy, choose_move,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum First {
    Human,
    Computer,
    Random,
}

/// Play Connect Four against the computer.
#[derive(Debug, Parser)]
#[command(name = "connect-four", about = "Play Connect Four against the computer")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect-four.toml")]
    config: PathBuf,

    /// Override the search depth in plies
    #[arg(long)]
    depth: Option<u32>,

    /// Override how the computer picks its move
    #[arg(long, value_enum)]
    strategy: Option<Strategy>,

    /// Search the root columns in parallel
    #[arg(long)]
    parallel: bool,

    /// Who makes the first move
    #[arg(long, value_enum, default_value_t = First::Random)]
    first: First,

    /// Seed for the random number generator
    #[arg(long)]
    seed: Option<u64>,
}

fn print_board(board: &Board) {
    // Print rows reverted to that it appears naturally.
    for row in board.cells().iter().rev() {
        for cell in row {
            let symbol = cell.map_or(' ', Player::symbol);
            print!("{symbol},");
        }
        println!();
    }

    for _ in 0..COLS {
        print!("--");
    }
    println!();

    for col_id in (0..COLS).map(|i| i + 1) {
        print!("{col_id},");
    }
    println!();
}

/// Reads a 1-based column from stdin. Returns `None` on end of input.
fn read_column(input: &mut impl BufRead, game: &Game) -> Result<Option<usize>> {
    loop {
        print!("Choose your move (column): ");
        for col in game.board().valid_columns().map(|x| x + 1) {
            print!("{col},");
        }
        println!();
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).context("failed to read from stdin")? == 0 {
            return Ok(None);
        }

        match line.trim().parse::<usize>() {
            Ok(col) if col >= 1 => return Ok(Some(col - 1)),
            _ => println!("'{}' is not a column", line.trim()),
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

    let mut config = EngineConfig::load_or_default(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    if let Some(depth) = cli.depth {
        config.depth = depth;
    }
    if let Some(strategy) = cli.strategy {
        config.strategy = strategy;
    }
    config.parallel |= cli.parallel;
    config.validate()?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let first = match cli.first {
        First::Human => Player::HUMAN,
        First::Computer => Player::AI,
        First::Random if rand::Rng::gen_bool(&mut rng, 0.5) => Player::AI,
        First::Random => Player::HUMAN,
    };

    let engine = SearchEngine::new(config.weights);
    let mut game = Game::new(first);
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("Let's play Connect Four against the computer.");
    while !game.is_over() {
        println!("----------------");
        print_board(game.board());
        println!();

        if game.current_player() == Player::HUMAN {
            let Some(col) = read_column(&mut input, &game)? else {
                println!("Bye.");
                return Ok(());
            };
            match game.play(col) {
                Ok(_) => {}
                Err(err @ (GameError::InvalidColumn(_) | GameError::ColumnFull(_))) => {
                    println!("Invalid move: {err}");
                }
                Err(err) => bail!(err),
            }
        } else {
            let col = choose_move(
                game.board(),
                config.strategy,
                &engine,
                config.depth,
                config.parallel,
                &mut rng,
            )?;
            println!("Computer chose column {}", col + 1);
            game.play(col)?;
        }
    }

    println!("----------------");
    print_board(game.board());
    match game.state() {
        GameState::Won(Player::Player1) => println!("You won!"),
        GameState::Won(Player::Player2) => println!("Computer won!"),
        GameState::Draw => println!("Gameover: draw"),
        GameState::InProgress => {}
    }

    Ok(())
}
