use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use chess_moves::chess::config::GameConfig;
use chess_moves::chess::moves::Move;
use chess_moves::chess::status::GameStatus;
use chess_moves::core::square::Square;
use chess_moves::game::Game;
use clap::Parser;

/// Play moves typed as square-name pairs ("e2 e4") from the standard position.
#[derive(Parser, Debug)]
#[command(name = "play")]
struct Args {
    /// Promotion piece code: q, r, b or n.
    #[arg(long, default_value_t = 'q')]
    promotion: char,

    /// Moves to play before reading stdin, e.g. "e2 e4 e7 e5".
    #[arg(long)]
    moves: Option<String>,

    /// Log every applied move.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = match GameConfig::new().with_promotion_code(args.promotion) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("invalid --promotion: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut game = match Game::from_config(&config) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(line) = &args.moves {
        let names: Vec<&str> = line.split_whitespace().collect();
        if names.len() % 2 != 0 {
            eprintln!("--moves needs an even number of squares");
            return ExitCode::FAILURE;
        }
        for pair in names.chunks(2) {
            match game.play_names(pair[0], pair[1]) {
                Ok(mv) => report(&game, &mv),
                Err(e) => {
                    eprintln!("cannot play {} {}: {e}", pair[0], pair[1]);
                    return ExitCode::FAILURE;
                }
            }
        }
    }

    print_help();
    println!("{}", game.board());
    prompt(&game);

    for line in io::stdin().lock().lines() {
        let Ok(line) = line else {
            break;
        };
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => {}
            ["quit"] | ["exit"] => break,
            ["help"] => print_help(),
            ["board"] => println!("{}", game.board()),
            ["moves", name] => list_moves(&game, name),
            [from, to] => match game.play_names(from, to) {
                Ok(mv) => {
                    report(&game, &mv);
                    println!("{}", game.board());
                }
                Err(e) => println!("{e}"),
            },
            _ => println!("Unknown input '{}'. Type 'help' for commands.", line.trim()),
        }
        prompt(&game);
    }

    ExitCode::SUCCESS
}

fn print_help() {
    println!("Commands:");
    println!("  <from> <to>   play a move, e.g. 'e2 e4'");
    println!("  moves <sq>    list destinations of the piece on <sq> (x = capture)");
    println!("  board         print the board");
    println!("  quit          leave");
}

fn prompt(game: &Game) {
    print!("{} to move > ", game.turn());
    io::stdout().flush().ok();
}

fn list_moves(game: &Game, name: &str) {
    let sq: Square = match name.parse() {
        Ok(sq) => sq,
        Err(e) => {
            println!("{e}");
            return;
        }
    };
    let captures = game.potential_captures(sq);
    let list: Vec<String> = game
        .destinations(sq)
        .into_iter()
        .map(|to| {
            if captures.contains(&to) {
                format!("x{to}")
            } else {
                to.to_string()
            }
        })
        .collect();
    if list.is_empty() {
        println!("no moves from {sq}");
    } else {
        println!("{}", list.join(" "));
    }
}

fn report(game: &Game, mv: &Move) {
    let sound = if mv.is_capture() { "capture" } else { "move" };
    println!("{mv} ({sound})");
    match game.status() {
        GameStatus::Checkmate => println!("Checkmate! {} wins.", game.turn().other()),
        GameStatus::Stalemate => println!("Stalemate!"),
        GameStatus::Check => println!("Check!"),
        GameStatus::Ongoing => {}
    }
}
