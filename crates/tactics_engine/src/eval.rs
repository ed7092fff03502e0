//! Material-based position evaluation, memoized per search.

use cozy_chess::{Board, Color, GameStatus, Piece};

use crate::table::PositionTable;

/// Sentinel for a decided game: +9999 White has won, -9999 Black has won.
pub const WIN: i32 = 9999;

/// Evaluates the position from White's perspective.
///
/// Returns the cached value when the position was already scored in this
/// search (the rules engine is expensive to query repeatedly). Terminal
/// positions score ±9999 for a decided result and 0 for a draw —
/// a draw is 0 regardless of material, so stalemating from ahead never
/// looks attractive. Everything else is the signed material sum.
///
/// The computed value is written back into the table.
pub fn evaluate(board: &Board, table: &mut PositionTable) -> i32 {
    let key = board.hash();
    if let Some(v) = table.get(key) {
        return v;
    }

    let value = match board.status() {
        GameStatus::Won => {
            // The side to move has been checkmated; the other side won.
            if board.side_to_move() == Color::White {
                -WIN
            } else {
                WIN
            }
        }
        GameStatus::Drawn => 0,
        GameStatus::Ongoing => material(board),
    };

    table.insert(key, value);
    value
}

/// Signed material balance: positive favors White.
pub fn material(board: &Board) -> i32 {
    let mut total = 0;
    for piece in Piece::ALL {
        let value = piece_value(piece);
        let white = board.colored_pieces(Color::White, piece).len() as i32;
        let black = board.colored_pieces(Color::Black, piece).len() as i32;
        total += value * (white - black);
    }
    total
}

/// Material value of a piece in pawn units.
#[inline]
pub fn piece_value(piece: Piece) -> i32 {
    match piece {
        Piece::Pawn => 1,
        Piece::Knight | Piece::Bishop => 3,
        Piece::Rook => 5,
        Piece::Queen => 9,
        Piece::King => 100,
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
