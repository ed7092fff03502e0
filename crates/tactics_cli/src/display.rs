//! ASCII board rendering for the console.

use cozy_chess::{Board, Color, File, Piece, Rank, Square};

/// Renders the board from White's side: ranks 8 down to 1 with rank
/// numbers on the left and file letters underneath. Black pieces are
/// lowercase, white pieces uppercase, empty squares dots.
pub fn render(board: &Board) -> String {
    let mut out = String::new();

    for &rank in Rank::ALL.iter().rev() {
        out.push_str(&format!("{} ", rank as usize + 1));
        for &file in File::ALL.iter() {
            let square = Square::new(file, rank);
            let ch = match (board.piece_on(square), board.color_on(square)) {
                (Some(piece), Some(color)) => piece_char(piece, color),
                _ => '.',
            };
            out.push(ch);
            out.push(' ');
        }
        out.push('\n');
    }
    out.push_str("  a b c d e f g h\n");

    out
}

fn piece_char(piece: Piece, color: Color) -> char {
    let ch = match piece {
        Piece::Pawn => 'p',
        Piece::Knight => 'n',
        Piece::Bishop => 'b',
        Piece::Rook => 'r',
        Piece::Queen => 'q',
        Piece::King => 'k',
    };
    if color == Color::White {
        ch.to_ascii_uppercase()
    } else {
        ch
    }
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod display_tests;
