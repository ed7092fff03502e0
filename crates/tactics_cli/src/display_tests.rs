use super::*;

#[test]
fn test_render_start_position() {
    let out = render(&Board::default());
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "8 r n b q k b n r ");
    assert_eq!(lines[1], "7 p p p p p p p p ");
    assert_eq!(lines[4], "4 . . . . . . . . ");
    assert_eq!(lines[7], "1 R N B Q K B N R ");
    assert_eq!(lines[8], "  a b c d e f g h");
}

#[test]
fn test_render_sparse_position() {
    let board: Board = "k7/8/8/8/8/8/8/KQ6 w - - 0 1".parse().unwrap();
    let out = render(&board);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[0], "8 k . . . . . . . ");
    assert_eq!(lines[7], "1 K Q . . . . . . ");
}
