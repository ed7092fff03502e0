//! Solve benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo run --release --example solve_bench -p tactics_engine -- [depth] [fen]
//!
//! With no FEN, runs the whole suite at the given depth (default 2).

use std::env;
use std::time::Instant;

use cozy_chess::Board;
use tactics_engine::solve;

/// Positions with known tactics at shallow depth.
const TEST_POSITIONS: &[(&str, &str)] = &[
    ("Mate in one", "8/7p/5Bp1/P4p2/q1p1rNk1/6P1/5P1P/5RK1 w - - 1 35"),
    ("Mate for Black", "r7/5ppp/2k5/1p6/1Kp1b1P1/P1B4P/1P3P1R/4RB2 b - - 5 33"),
    ("Ladder mate in two", "8/3k4/R7/8/8/8/8/1R5K w - - 0 1"),
    ("Exchange tactic", "3r4/5pk1/p3p1p1/1p1bPq2/3R1P2/8/PP4P1/2QB2K1 w - - 1 30"),
    ("Queen activity", "1r1r2k1/p4p1p/3b2p1/1p1Q4/2p1B3/4P3/q1PP2PP/1N3RK1 w - - 2 21"),
    (
        "Starting position",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    ),
];

fn main() {
    let args: Vec<String> = env::args().collect();
    let depth: u32 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(2);

    if let Some(fen) = args.get(2) {
        run_position(fen, fen, depth);
    } else {
        println!("=== Solve Benchmark Suite ===");
        println!("Depth: {depth}");
        println!();
        for (name, fen) in TEST_POSITIONS {
            run_position(name, fen, depth);
        }
    }
}

fn run_position(name: &str, fen: &str, depth: u32) {
    let board: Board = match fen.parse() {
        Ok(b) => b,
        Err(e) => {
            eprintln!("{name}: bad FEN ({e})");
            return;
        }
    };

    let start = Instant::now();
    let result = solve(&board, depth);
    let elapsed = start.elapsed();

    match result {
        Some(r) => {
            let kind = if r.forced_mate { "mate" } else { "search" };
            println!(
                "{name:.<24} {} ({kind}, value {}, {} nodes) in {elapsed:.3?}",
                r.best_move, r.value, r.nodes
            );
        }
        None => println!("{name:.<24} no legal moves"),
    }
}
