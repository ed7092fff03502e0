//! Brute-force forced-mate detection.

use cozy_chess::{GameStatus, Move};

use crate::board_stack::{legal_moves, BoardStack};

/// Finds a move that delivers checkmate immediately, if one exists.
///
/// Moves are tried in generation order and the first mate wins. The
/// stack is fully unwound before returning, so the current position is
/// unchanged either way.
pub fn mate_in_one(stack: &mut BoardStack) -> Option<Move> {
    for mv in legal_moves(stack.board()) {
        stack.push(mv);
        let mated = stack.board().status() == GameStatus::Won;
        stack.pop();
        if mated {
            return Some(mv);
        }
    }
    None
}

/// Finds a move after which every opponent reply still runs into an
/// immediate mate, if one exists.
///
/// For each candidate first move, every reply is answered with a fresh
/// `mate_in_one` probe; one escaping reply disqualifies the candidate.
/// A candidate that leaves the opponent no reply at all qualifies
/// vacuously, so an immediate checkmate is found here too. The probe is
/// deliberately recomputed from scratch per reply — forced-mate search
/// runs first and is expected to finish quickly when it succeeds.
pub fn mate_in_two(stack: &mut BoardStack) -> Option<Move> {
    for first in legal_moves(stack.board()) {
        stack.push(first);

        let mut escaped = false;
        for reply in legal_moves(stack.board()) {
            stack.push(reply);
            let still_mates = mate_in_one(stack).is_some();
            stack.pop();
            if !still_mates {
                escaped = true;
                break;
            }
        }

        stack.pop();
        if !escaped {
            return Some(first);
        }
    }
    None
}

#[cfg(test)]
#[path = "mate_tests.rs"]
mod mate_tests;
