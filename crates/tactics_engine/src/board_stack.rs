//! Board line management for the recursive search.
//!
//! The rules engine (`cozy_chess`) is copy-make: playing a move consumes
//! board state irreversibly, so the search keeps the whole line from the
//! root to the current node as a stack of boards. `push`/`pop` pairs are
//! strictly nested, which is the one invariant the recursion depends on.

use cozy_chess::{Board, Move};

/// The line of positions from the search root to the current node.
///
/// `push` clones the top board and plays a move on the clone; `pop`
/// discards it. The root board is never removed, so after any balanced
/// push/pop sequence the stack reads exactly as it did before.
pub struct BoardStack {
    boards: Vec<Board>,
}

impl BoardStack {
    pub fn new(root: Board) -> Self {
        Self { boards: vec![root] }
    }

    /// The position at the current node.
    pub fn board(&self) -> &Board {
        self.boards.last().expect("stack always holds the root")
    }

    /// Canonical key of the current node, used by the position table.
    pub fn key(&self) -> u64 {
        self.board().hash()
    }

    /// Plays `mv` on a copy of the current position and descends into it.
    pub fn push(&mut self, mv: Move) {
        let mut next = self.board().clone();
        next.play(mv);
        self.boards.push(next);
    }

    /// Returns to the parent node.
    pub fn pop(&mut self) {
        debug_assert!(self.boards.len() > 1, "pop without matching push");
        self.boards.pop();
    }
}

/// Collects the legal moves of `board` in generation order.
///
/// cozy-chess enumerates moves piece by piece in bitboard order, so
/// repeated calls on the same position yield the same sequence; the
/// tie-break in the search driver relies on that.
pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    board.generate_moves(|ml| {
        for m in ml {
            moves.push(m);
        }
        false
    });
    moves
}

#[cfg(test)]
#[path = "board_stack_tests.rs"]
mod board_stack_tests;
