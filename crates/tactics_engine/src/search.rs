//! Depth-bounded minimax search with alpha-beta pruning.

use cozy_chess::{Board, Color, Move};

use crate::board_stack::{legal_moves, BoardStack};
use crate::cutoff::{should_cutoff, Ply};
use crate::eval::evaluate;
use crate::table::PositionTable;

/// Searches the position and returns the best move with the root value.
///
/// Clears the table, runs the alpha-beta search from the root, then maps
/// the root value back to a move: the first root move (in generation
/// order) whose resulting position is cached with exactly that value.
/// This tie-break is deterministic and stable, nothing stronger.
///
/// Returns `None` when the position has no legal moves; the root value
/// otherwise always matches at least one child, because it was derived
/// from exactly the searched children.
pub fn pick_best_move(
    board: &Board,
    depth: u32,
    table: &mut PositionTable,
    nodes: &mut u64,
) -> Option<(Move, i32)> {
    table.clear();

    let mut stack = BoardStack::new(board.clone());
    let value = alpha_beta(
        &mut stack,
        depth,
        Ply::ROOT,
        i32::MIN,
        i32::MAX,
        table,
        nodes,
    );
    table.insert(stack.key(), value);

    for mv in legal_moves(board) {
        stack.push(mv);
        let matched = table.get(stack.key()) == Some(value);
        stack.pop();
        if matched {
            return Some((mv, value));
        }
    }

    None
}

/// Recursive alpha-beta over the legal moves of the current node.
///
/// White maximizes, Black minimizes; the role is derived from the side
/// to move so the two directions share one body. Every value computed
/// here — by cutoff, full expansion, or pruning — is written into the
/// table under the node's key before returning.
fn alpha_beta(
    stack: &mut BoardStack,
    depth: u32,
    ply: Ply,
    mut alpha: i32,
    mut beta: i32,
    table: &mut PositionTable,
    nodes: &mut u64,
) -> i32 {
    if should_cutoff(stack.board(), depth, ply, table) {
        let value = evaluate(stack.board(), table);
        table.insert(stack.key(), value);
        return value;
    }

    let maximizing = stack.board().side_to_move() == Color::White;
    let mut value = if maximizing { i32::MIN } else { i32::MAX };

    // A node with no legal moves right after an opponent reply keeps the
    // fold identity: a mate on the board propagates as an unbeatable
    // value for the parent.
    for mv in legal_moves(stack.board()) {
        stack.push(mv);
        *nodes += 1;
        let child = alpha_beta(stack, depth, ply.next(), alpha, beta, table, nodes);
        stack.pop();

        if maximizing {
            value = value.max(child);
            if value >= beta {
                table.insert(stack.key(), value);
                return value;
            }
            alpha = alpha.max(value);
        } else {
            value = value.min(child);
            if value <= alpha {
                table.insert(stack.key(), value);
                return value;
            }
            beta = beta.min(value);
        }
    }

    table.insert(stack.key(), value);
    value
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
