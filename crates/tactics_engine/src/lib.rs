//! Tactical Chess Search Engine
//!
//! Searches a position for a single best move under a fixed ply budget:
//! forced mates (mate in one / mate in two) take precedence, otherwise a
//! heuristic-pruned alpha-beta minimax with a material/tactics-aware
//! cutoff policy picks the move. Board state, legal moves, and game
//! results come from `cozy_chess`; this crate holds no board
//! representation of its own.

pub mod board_stack;
pub mod cutoff;
pub mod eval;
pub mod mate;
pub mod search;
pub mod table;

use cozy_chess::{Board, Color, Move};

use board_stack::BoardStack;
use table::PositionTable;

pub use eval::{evaluate, material, piece_value, WIN};
pub use search::pick_best_move;

/// Result of a completed move selection.
#[derive(Debug, Clone, Copy)]
pub struct SolveResult {
    /// The selected move.
    pub best_move: Move,
    /// Root value from White's perspective; ±9999 when a forced mate was
    /// found.
    pub value: i32,
    /// True when the move came from the forced-mate search.
    pub forced_mate: bool,
    /// True when the heuristic value is in {-1, 0, 1}: near-equal
    /// material, so the move is fairly uninformative. Advisory only.
    pub advisory: bool,
    /// Nodes expanded by the heuristic search (0 on the mate path).
    pub nodes: u64,
}

/// Selects a move for the side to move, searching `depth` move pairs.
///
/// Tries `mate_in_two` first — a forced mate always takes precedence
/// over the heuristic search regardless of material. Otherwise runs the
/// alpha-beta search over a fresh position table.
///
/// Returns `None` only when the position has no legal move; callers are
/// expected to have checked the game result first.
pub fn solve(board: &Board, depth: u32) -> Option<SolveResult> {
    let mut stack = BoardStack::new(board.clone());
    if let Some(mv) = mate::mate_in_two(&mut stack) {
        let value = if board.side_to_move() == Color::White {
            WIN
        } else {
            -WIN
        };
        return Some(SolveResult {
            best_move: mv,
            value,
            forced_mate: true,
            advisory: false,
            nodes: 0,
        });
    }

    let mut table = PositionTable::new();
    let mut nodes = 0;
    let (best_move, value) = search::pick_best_move(board, depth, &mut table, &mut nodes)?;

    // The chosen child is cached with exactly the root value, so the
    // near-equal check reads the value directly.
    Some(SolveResult {
        best_move,
        value,
        forced_mate: false,
        advisory: (-1..=1).contains(&value),
        nodes,
    })
}
