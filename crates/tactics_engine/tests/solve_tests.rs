//! End-to-end tests for the move selector.
//!
//! Positions come from real game fragments; the mate FENs have a forced
//! win for the side to move, the tactic FENs just expect a sound legal
//! move.

use cozy_chess::{Board, GameStatus, Move};
use tactics_engine::board_stack::{legal_moves, BoardStack};
use tactics_engine::mate::mate_in_one;
use tactics_engine::solve;

fn board(fen: &str) -> Board {
    fen.parse().expect("valid test FEN")
}

/// Asserts that `mv` begins a forced mate: either it checkmates on the
/// spot, or every legal reply still loses to an immediate mate.
fn assert_forces_mate(pos: &Board, mv: Move) {
    let mut stack = BoardStack::new(pos.clone());
    stack.push(mv);

    if stack.board().status() == GameStatus::Won {
        return;
    }
    let replies = legal_moves(stack.board());
    assert!(!replies.is_empty(), "not mate, yet no reply exists");
    for reply in replies {
        stack.push(reply);
        assert!(
            mate_in_one(&mut stack).is_some(),
            "reply {reply} escapes the mate"
        );
        stack.pop();
    }
}

#[test]
fn test_solve_finds_the_mating_move() {
    let pos = board("8/7p/5Bp1/P4p2/q1p1rNk1/6P1/5P1P/5RK1 w - - 1 35");
    let before = pos.hash();

    let result = solve(&pos, 2).expect("position has legal moves");
    assert!(result.forced_mate);
    assert_forces_mate(&pos, result.best_move);

    let mut after = pos.clone();
    after.play(result.best_move);
    assert_eq!(after.status(), GameStatus::Won, "the move mates immediately");

    assert_eq!(pos.hash(), before, "solve must not mutate the caller's board");
}

#[test]
fn test_solve_finds_forced_mate_for_black() {
    let pos = board("r7/5ppp/2k5/1p6/1Kp1b1P1/P1B4P/1P3P1R/4RB2 b - - 5 33");

    let result = solve(&pos, 2).expect("position has legal moves");
    assert!(result.forced_mate);
    assert_forces_mate(&pos, result.best_move);
}

#[test]
fn test_solve_finds_a_genuine_mate_in_two() {
    let pos = board("8/3k4/R7/8/8/8/8/1R5K w - - 0 1");

    let result = solve(&pos, 2).expect("position has legal moves");
    assert!(result.forced_mate);
    assert_forces_mate(&pos, result.best_move);
}

#[test]
fn test_solve_shallow_quiet_position_raises_advisory() {
    // No captures, no checks, balanced material: the heuristic value
    // lands in {-1, 0, 1} and the move comes with the advisory set.
    let pos = Board::default();

    let result = solve(&pos, 1).expect("start position has legal moves");
    assert!(!result.forced_mate);
    assert!(result.advisory);
    assert!((-1..=1).contains(&result.value));
    assert!(legal_moves(&pos).contains(&result.best_move));
}

#[test]
fn test_solve_tactic_positions_return_legal_moves() {
    let fens = [
        "3r4/5pk1/p3p1p1/1p1bPq2/3R1P2/8/PP4P1/2QB2K1 w - - 1 30",
        "1r1r2k1/p4p1p/3b2p1/1p1Q4/2p1B3/4P3/q1PP2PP/1N3RK1 w - - 2 21",
    ];

    for fen in fens {
        let pos = board(fen);
        let result = solve(&pos, 2).expect("position has legal moves");
        assert!(
            legal_moves(&pos).contains(&result.best_move),
            "illegal move for {fen}"
        );
        if !result.forced_mate {
            assert!(result.nodes > 0);
        }
    }
}
