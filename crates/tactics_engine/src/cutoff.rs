//! Cutoff policy: decides where the heuristic search stops expanding.
//!
//! A cheap one-ply lookahead approximating quiescence. Positions with
//! large material swings pending (captures, checks) are searched deeper;
//! quiet or already-decided positions fall back to static evaluation.

use cozy_chess::{Board, Color, Piece};

use crate::board_stack::legal_moves;
use crate::eval::evaluate;
use crate::table::PositionTable;

/// Half-move counter from the search root.
///
/// Search depth is configured in move pairs (one own move plus one
/// opponent reply); the counter advances one half-move per recursion
/// level. Odd counts sit right after an opponent reply, where the
/// policy never cuts off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ply(u32);

impl Ply {
    pub const ROOT: Ply = Ply(0);

    pub fn next(self) -> Ply {
        Ply(self.0 + 1)
    }

    pub fn is_root(self) -> bool {
        self.0 == 0
    }

    /// True when the opponent of the node being evaluated just moved.
    pub fn is_reply(self) -> bool {
        self.0 % 2 == 1
    }

    /// True at the hard depth limit.
    pub fn at_horizon(self, depth: u32) -> bool {
        self.0 == 2 * depth
    }

    /// Remaining budget in move pairs. Only meaningful at even counts
    /// short of the horizon, where it is always at least 1.
    pub fn distance(self, depth: u32) -> i32 {
        depth as i32 - (self.0 / 2) as i32
    }
}

/// Whether to stop expanding this node and score it statically.
///
/// Rules in priority order:
/// 1. at the hard depth limit: cut off;
/// 2. right after an opponent reply: never cut off, so analysis never
///    ends on the opponent's move;
/// 3. at the root: never cut off;
/// 4. otherwise weigh the side to move's current advantage against the
///    remaining budget, and the pending tactics (capture values plus a
///    check bonus, probed one ply ahead) against the same budget.
pub fn should_cutoff(board: &Board, depth: u32, ply: Ply, table: &mut PositionTable) -> bool {
    if ply.at_horizon(depth) {
        return true;
    }
    if ply.is_reply() {
        return false;
    }
    if ply.is_root() {
        return false;
    }

    // Advantage of the side about to move.
    let value = evaluate(board, table);
    let current_eval = if board.side_to_move() == Color::White {
        value
    } else {
        -value
    };

    // Guaranteed >= 1: the horizon check above already fired otherwise.
    let distance = ply.distance(depth);

    // evaluation_weight = current_eval / distance; with distance > 0 the
    // >= 1 test reduces to an integer comparison.
    if current_eval >= distance {
        // Already decisively ahead; stop searching deeper.
        return true;
    }

    let net_potential = net_potential(board);
    if net_potential * distance >= 15 {
        // Tactical potential high enough to warrant deeper search.
        return false;
    }

    (net_potential + current_eval) * distance <= 10
}

/// Aggregate value of the tactics available to the side to move: the
/// material of every capture target plus 6 per move that gives check.
/// Each probe move is played on a scratch copy and discarded.
fn net_potential(board: &Board) -> i32 {
    let them = !board.side_to_move();
    let mut potential = 0;

    for mv in legal_moves(board) {
        if board.color_on(mv.to) == Some(them) {
            if let Some(victim) = board.piece_on(mv.to) {
                potential += capture_value(victim);
            }
        }
        let mut probe = board.clone();
        probe.play(mv);
        if !probe.checkers().is_empty() {
            potential += 6;
        }
    }

    potential
}

/// Capture-value estimate per target piece. The king is never a legal
/// capture target.
fn capture_value(victim: Piece) -> i32 {
    match victim {
        Piece::Pawn => 1,
        Piece::Knight | Piece::Bishop => 3,
        Piece::Rook => 5,
        Piece::Queen => 9,
        Piece::King => 0,
    }
}

#[cfg(test)]
#[path = "cutoff_tests.rs"]
mod cutoff_tests;
