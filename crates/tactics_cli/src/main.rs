//! Interactive console for the tactical solver.
//!
//! The engine moves first, then the human, until the rules engine
//! reports the game decided. The board is printed after every move and
//! the legal moves are listed before the human's turn.

mod config;
mod display;
mod transcript;

use std::io::{self, BufRead};
use std::path::Path;

use anyhow::{Context, Result};
use cozy_chess::{Board, Color, GameStatus, Move};
use tactics_engine::board_stack::legal_moves;
use tactics_engine::solve;

use config::Config;
use transcript::Transcript;

const CONFIG_PATH: &str = "tactics.toml";

fn main() -> Result<()> {
    let config = Config::load(Path::new(CONFIG_PATH))?;

    let stdin = io::stdin();
    let mut input = stdin.lock().lines();

    println!("Tactical chess solver — the engine moves first.");
    println!("Black pieces are lowercase, white pieces are uppercase.");
    println!();

    let start = prompt_board(&mut input)?;
    println!("Initial state:");
    print!("{}", display::render(&start));

    let mut board = start.clone();
    let mut transcript = Transcript::new(&start);
    let mut engine_to_move = true;

    let result = loop {
        match board.status() {
            // The game result is reported for the side to move, who lost.
            GameStatus::Won => {
                break match board.side_to_move() {
                    Color::White => "0-1",
                    Color::Black => "1-0",
                }
            }
            GameStatus::Drawn => break "1/2-1/2",
            GameStatus::Ongoing => {}
        }

        if engine_to_move {
            println!("Thinking...");
            let chosen =
                solve(&board, config.depth).context("no legal move in an ongoing position")?;
            board.play(chosen.best_move);
            transcript.record(chosen.best_move);
            println!("Moving: {}", chosen.best_move);
            if chosen.forced_mate {
                println!("(forced mate line)");
            }
            if chosen.advisory {
                println!("Probably not the ideal move here, by the way...");
            }
        } else {
            let moves = legal_moves(&board);
            let listing: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
            println!("Legal moves: {}", listing.join(" "));

            let mv = prompt_move(&mut input, &moves)?;
            board.play(mv);
            transcript.record(mv);
        }

        print!("{}", display::render(&board));
        println!();
        engine_to_move = !engine_to_move;
    };

    println!("Game over: {result}");
    transcript.set_result(result);

    let path = Path::new(&config.transcript_path);
    match transcript.save(path) {
        Ok(()) => println!("Transcript saved to {}", path.display()),
        Err(e) => eprintln!("Warning: could not save transcript: {e}"),
    }

    Ok(())
}

fn read_line(input: &mut impl Iterator<Item = io::Result<String>>) -> Result<String> {
    let line = input.next().context("input closed")??;
    Ok(line.trim().to_string())
}

fn prompt_board(input: &mut impl Iterator<Item = io::Result<String>>) -> Result<Board> {
    loop {
        println!("Enter a FEN (empty for the standard start position):");
        let line = read_line(input)?;
        if line.is_empty() {
            return Ok(Board::default());
        }
        match line.parse::<Board>() {
            Ok(board) => return Ok(board),
            Err(e) => eprintln!("Invalid FEN: {e:?}"),
        }
    }
}

fn prompt_move(
    input: &mut impl Iterator<Item = io::Result<String>>,
    moves: &[Move],
) -> Result<Move> {
    loop {
        println!("Your move (castling is king-takes-rook, e.g. e1h1):");
        let line = read_line(input)?;
        match line.parse::<Move>() {
            Ok(mv) if moves.contains(&mv) => return Ok(mv),
            Ok(_) => eprintln!("Illegal move: {line}"),
            Err(e) => eprintln!("Unreadable move ({e:?})"),
        }
    }
}
