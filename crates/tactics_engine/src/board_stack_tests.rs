use super::*;

#[test]
fn test_push_pop_restores_key() {
    let mut stack = BoardStack::new(Board::default());
    let before = stack.key();

    let mv = legal_moves(stack.board())[0];
    stack.push(mv);
    assert_ne!(stack.key(), before, "a move must change the position key");

    stack.pop();
    assert_eq!(stack.key(), before, "pop must restore the parent position");
}

#[test]
fn test_nested_pushes_unwind_in_order() {
    let mut stack = BoardStack::new(Board::default());
    let root = stack.key();

    let first = legal_moves(stack.board())[0];
    stack.push(first);
    let after_first = stack.key();

    let reply = legal_moves(stack.board())[0];
    stack.push(reply);
    assert_ne!(stack.key(), after_first);

    stack.pop();
    assert_eq!(stack.key(), after_first);
    stack.pop();
    assert_eq!(stack.key(), root);
}

#[test]
fn test_startpos_has_twenty_moves() {
    let moves = legal_moves(&Board::default());
    assert_eq!(moves.len(), 20);
}

#[test]
fn test_move_order_is_reproducible() {
    let board = Board::default();
    assert_eq!(legal_moves(&board), legal_moves(&board));
}
