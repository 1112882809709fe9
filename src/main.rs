//! Connect Four terminal front end
//!
//! `play` runs an interactive game against the engine; `analyze` replays a
//! move sequence and reports the engine's choice for the side to move.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};

use connect_four::rules::Outcome;
use connect_four::search::Trace;
use connect_four::{AIEngine, AppConfig, Disc, Game};

#[derive(Parser, Debug)]
#[command(name = "connect_four", author, version, about = "Play Connect Four against a search engine")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Algorithm: minimax, minimax_ab or expected_minimax (anything else plays randomly)
    #[arg(long, global = true)]
    algorithm: Option<String>,

    /// Search depth
    #[arg(long, global = true)]
    depth: Option<u8>,

    /// Write the JSON search trace of the last computer move to this file
    #[arg(long, global = true)]
    trace_out: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Disc played by the human (yellow moves first)
        #[arg(long)]
        human: Option<Disc>,
    },
    /// Pick a move for the side to move after a sequence of columns
    Analyze {
        /// Columns played from the empty board, e.g. "3342"
        #[arg(long, default_value = "")]
        moves: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AppConfig::default(),
    };

    // Apply CLI overrides
    if let Some(algorithm) = &cli.algorithm {
        config.engine.algorithm = algorithm.clone();
    }
    if let Some(depth) = cli.depth {
        config.engine.depth = depth;
    }
    if let Command::Play { human: Some(human) } = &cli.command {
        config.game.human = *human;
    }
    config.validate().context("invalid configuration")?;

    match &cli.command {
        Command::Play { .. } => play(&config, cli.trace_out.as_deref()),
        Command::Analyze { moves } => analyze(&config, moves, cli.trace_out.as_deref()),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, level),
    )
    .target(env_logger::Target::Stderr)
    .init();
}

fn play(config: &AppConfig, trace_out: Option<&Path>) -> Result<()> {
    let mut game = Game::from_config(config).context("setting up game")?;
    game.set_record_traces(trace_out.is_some());

    println!(
        "You are {} ({}). Engine: {} at depth {}. Enter a column, or q to quit.",
        game.human(),
        game.human().symbol(),
        game.search_type(),
        game.depth()
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !game.is_over() {
        println!("\n{}", game.board());
        print_scores(&game);

        if game.is_human_turn() {
            print!("{} > ", game.human());
            io::stdout().flush()?;
            let Some(line) = lines.next() else {
                println!();
                return Ok(());
            };
            let line = line.context("reading move")?;
            let input = line.trim();
            if input.eq_ignore_ascii_case("q") {
                return Ok(());
            }
            let col = match input.parse::<u8>() {
                Ok(col) => col,
                Err(_) => {
                    println!("'{input}' is not a column");
                    continue;
                }
            };
            if let Err(e) = game.play_human(col) {
                println!("{e}");
            }
        } else {
            let result = game.play_computer()?;
            if let Some(col) = result.column {
                println!(
                    "{} plays column {col} ({}ms)",
                    game.computer(),
                    result.time_ms
                );
            }
            if let (Some(path), Some(trace)) = (trace_out, game.last_trace()) {
                write_trace(path, trace)?;
            }
        }
    }

    println!("\n{}", game.board());
    print_scores(&game);
    match game.outcome() {
        Some(Outcome::Winner(disc)) if disc == game.human() => println!("You win!"),
        Some(Outcome::Winner(disc)) => println!("{disc} wins."),
        Some(Outcome::Draw) | None => println!("Tie."),
    }
    Ok(())
}

fn analyze(config: &AppConfig, moves: &str, trace_out: Option<&Path>) -> Result<()> {
    let mut board = config.new_board()?;
    for (i, ch) in moves.chars().enumerate() {
        let Some(col) = ch.to_digit(10).and_then(|d| u8::try_from(d).ok()) else {
            bail!("move {i}: '{ch}' is not a column digit");
        };
        if board.play(col).is_none() {
            bail!("move {i}: column {col} is not playable");
        }
    }
    println!("{board}");

    let mut engine = AIEngine::from_config(&config.engine);
    let search_type = engine.search_type();
    let color = board.current_player();
    let (result, trace) =
        engine.select_move_traced(&mut board, color, search_type, config.engine.depth);

    match result.column {
        Some(col) => println!(
            "{color} to move: column {col} (value {}, {} nodes, {}ms{})",
            result
                .score
                .map_or_else(|| "n/a".to_string(), |v| v.to_string()),
            result.nodes,
            result.time_ms,
            if result.random { ", random" } else { "" }
        ),
        None => println!("no legal moves"),
    }

    if let Some(path) = trace_out {
        write_trace(path, &trace)?;
    }
    Ok(())
}

fn print_scores(game: &Game) {
    let scores = game.scores();
    println!(
        "{}: {}  {}: {}",
        Disc::Yellow,
        scores.yellow,
        Disc::Red,
        scores.red
    );
}

fn write_trace(path: &Path, trace: &Trace) -> Result<()> {
    let json = trace.to_json().context("serializing trace")?;
    std::fs::write(path, json).with_context(|| format!("writing trace to {}", path.display()))?;
    log::info!("wrote {} trace nodes to {}", trace.len(), path.display());
    Ok(())
}

