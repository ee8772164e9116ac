//! Interactive console front end for the engine.
//!
//! Reads one command per line from stdin. `help` lists the commands; most of
//! them require a position loaded with `init` or `custom <fen>` first.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use rowan_chess::engines::random_mover::choose_random_move;
use rowan_chess::errors::EngineResult;
use rowan_chess::game_state::board::Board;
use rowan_chess::game_state::chess_types::GameOutcome;
use rowan_chess::move_generation::checks::game_outcome;
use rowan_chess::move_generation::legal_moves::play_move;
use rowan_chess::move_generation::perft::perft;
use rowan_chess::search::negamax::search_white_perspective;
use rowan_chess::utils::algebraic::move_text;
use rowan_chess::utils::render_board::render_board;

const HELP: &str = "\
commands:
  init              start a new game from the standard position
  custom <fen>      load a position from a FEN string
  clear             discard the current position
  board             print the board
  fen               print the current position as FEN
  move <m>          play a coordinate move such as e2e4 or e7e8q
  undo              take back the last move
  random            play a random legal move
  evaluate <depth>  alpha-beta search score at the given depth
  perft <depth>     count leaf nodes at the given depth
  over              report checkmate / stalemate / in progress
  help              show this message
  quit              exit";

fn main() {
    env_logger::init();

    let stdin = io::stdin();
    let mut board: Option<Board> = None;

    println!("rowan chess console; type `help` for commands");

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                eprintln!("stdin error: {err}");
                break;
            }
        };

        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        let argument = parts.next();

        match command {
            "quit" | "exit" => break,
            "help" => println!("{HELP}"),
            "init" => {
                board = Some(Board::new_game());
                println!("new game started");
            }
            "custom" => {
                // Take the full remainder: FEN contains spaces.
                let fen = line.trim_start().trim_start_matches("custom").trim();
                match Board::from_fen(fen) {
                    Ok(loaded) => {
                        board = Some(loaded);
                        println!("position loaded");
                    }
                    Err(err) => println!("{err}"),
                }
            }
            "clear" => {
                board = None;
                println!("position cleared");
            }
            _ => match board.as_mut() {
                None => println!("no position loaded; use `init` or `custom <fen>`"),
                Some(board) => {
                    if let Err(err) = run_position_command(board, command, argument) {
                        println!("{err}");
                    }
                }
            },
        }

        io::stdout().flush().ok();
    }
}

fn run_position_command(
    board: &mut Board,
    command: &str,
    argument: Option<&str>,
) -> EngineResult<()> {
    match command {
        "board" => print!("{}", render_board(board)),
        "fen" => println!("{}", board.get_fen()),
        "move" => match argument {
            None => println!("usage: move <m>, e.g. move e2e4"),
            Some(text) => {
                play_move(board, text)?;
                print!("{}", render_board(board));
            }
        },
        "undo" => {
            board.unmake_move();
            print!("{}", render_board(board));
        }
        "random" => match choose_random_move(board)? {
            None => println!("no legal moves; the game is over"),
            Some(mv) => {
                board.make_move(mv)?;
                println!("played {}", move_text(mv));
                print!("{}", render_board(board));
            }
        },
        "evaluate" => {
            let depth = parse_depth(argument, 4);
            let started = Instant::now();
            let score = search_white_perspective(board, depth)?;
            println!(
                "score {score} (white's perspective) at depth {depth} ({:.3}s)",
                started.elapsed().as_secs_f64()
            );
        }
        "perft" => {
            let depth = parse_depth(argument, 4);
            let started = Instant::now();
            let nodes = perft(board, depth)?;
            let elapsed = started.elapsed().as_secs_f64();
            println!("perft({depth}) = {nodes} in {elapsed:.3}s");
        }
        "over" => match game_outcome(board)? {
            GameOutcome::NotOver => println!("game in progress"),
            GameOutcome::Checkmate => println!("checkmate"),
            GameOutcome::Stalemate => println!("stalemate"),
        },
        other => println!("unknown command {other:?}; type `help`"),
    }

    Ok(())
}

fn parse_depth(argument: Option<&str>, default: u32) -> u32 {
    argument.and_then(|text| text.parse().ok()).unwrap_or(default)
}
