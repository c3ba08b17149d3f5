//! Scenario tests against the public API.

use freecell_rs::rules::{max_movable_count, validate_destination, validate_sequence_move};
use freecell_rs::{Board, Card, ContainerId, MoveError, NullObserver, Rank, Session, Suit};

fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, Rank::new(rank).unwrap())
}

fn session_on(board: Board) -> Session {
    Session::from_board(board, "Green", NullObserver)
}

#[test]
fn lone_ace_auto_moves_to_first_empty_foundation() {
    let mut board = Board::default();
    board.foundations[0].add_card(card(Suit::Hearts, 1));
    board.columns[0].add_card(card(Suit::Clubs, 9));
    board.columns[0].add_card(card(Suit::Diamonds, 1));
    let mut session = session_on(board);

    let to = session.auto_move(ContainerId::Tableau(0)).unwrap();

    assert_eq!(to, ContainerId::Foundation(1));
    let record = session.log().last().unwrap();
    assert_eq!(record.cards(), &[card(Suit::Diamonds, 1)]);
    assert_eq!(record.from(), ContainerId::Tableau(0));
    assert_eq!(record.to(), ContainerId::Foundation(1));
    assert_eq!(session.log().undo_len(), 1);
}

#[test]
fn three_card_drag_needs_more_room_than_one_cell() {
    let mut board = Board::default();
    // Fill all columns and three of the four cells.
    let fillers = [13, 13, 12, 12, 11, 11, 10];
    let suits = [Suit::Clubs, Suit::Spades, Suit::Hearts, Suit::Diamonds];
    for (i, &rank) in fillers.iter().enumerate() {
        board.columns[i + 1].add_card(card(suits[i % 4], rank));
    }
    for (i, cell) in board.free_cells.iter_mut().take(3).enumerate() {
        cell.add_card(card(suits[i], 2));
    }
    let run = [card(Suit::Spades, 9), card(Suit::Hearts, 8), card(Suit::Clubs, 7)];
    for c in run {
        board.columns[0].add_card(c);
    }

    assert_eq!(max_movable_count(1, 0, false), 2);
    let err = validate_sequence_move(&board, &run, ContainerId::Tableau(0)).unwrap_err();
    assert!(matches!(err, MoveError::IllegalMove(_)));

    let mut session = session_on(board.clone());
    assert!(session.play(ContainerId::Tableau(0), 0, ContainerId::Tableau(1)).is_err());
    assert_eq!(session.board(), &board);
    assert!(!session.can_undo());
}

#[test]
fn supermove_commits_as_one_record() {
    let mut board = Board::default();
    board.columns[0].add_card(card(Suit::Diamonds, 2));
    let run = [card(Suit::Spades, 9), card(Suit::Hearts, 8), card(Suit::Clubs, 7)];
    for c in run {
        board.columns[0].add_card(c);
    }
    board.columns[1].add_card(card(Suit::Diamonds, 10));
    let mut session = session_on(board.clone());

    assert!(validate_destination(session.board(), &run, ContainerId::Tableau(1)).is_ok());
    session.play(ContainerId::Tableau(0), 1, ContainerId::Tableau(1)).unwrap();
    let moved = session.board().clone();
    assert_eq!(&moved.columns[1].cards()[1..], &run[..]);
    assert_eq!(session.move_count(), 1);
    assert_eq!(session.log().undo_len(), 1);

    session.undo().unwrap();
    assert_eq!(session.board(), &board);
    assert_eq!(session.log().undo_len(), 0);
    assert_eq!(session.log().redo_len(), 1);

    session.redo().unwrap();
    assert_eq!(session.board(), &moved);
    assert_eq!(session.move_count(), 1);
}

#[test]
fn new_move_after_undo_clears_redo() {
    let mut session = Session::with_seed(77, "Green", NullObserver);
    let top = session.board().columns[0].top().unwrap();
    session
        .commit_move(&[top], ContainerId::Tableau(0), ContainerId::FreeCell(0))
        .unwrap();
    session.undo().unwrap();
    assert!(session.can_redo());

    let other = session.board().columns[1].top().unwrap();
    session
        .commit_move(&[other], ContainerId::Tableau(1), ContainerId::FreeCell(1))
        .unwrap();
    assert!(!session.can_redo());
    assert_eq!(session.redo(), Err(MoveError::EmptyHistory));
}

#[test]
fn restart_then_new_game() {
    let mut session = Session::with_seed(31, "Red", NullObserver);
    let dealt = session.board().clone();

    for col in 0..3 {
        let top = session.board().columns[col].top().unwrap();
        session
            .commit_move(&[top], ContainerId::Tableau(col), ContainerId::FreeCell(col))
            .unwrap();
    }
    assert_eq!(session.move_count(), 3);

    session.restart_round();
    assert_eq!(session.board(), &dealt);
    assert_eq!(session.move_count(), 0);

    session.new_game();
    assert_eq!(session.board().card_count(), 52);
    assert_eq!(session.move_count(), 0);
    assert!(!session.can_undo());
    assert_eq!(session.theme(), "Red");
}

#[test]
fn foundation_ace_can_be_auto_moved_out() {
    let mut board = Board::default();
    board.foundations[2].add_card(card(Suit::Spades, 1));
    board.columns[0].add_card(card(Suit::Hearts, 2));
    let mut session = session_on(board);

    // The ace hops to the first foundation that accepts it.
    let to = session.auto_move(ContainerId::Foundation(2)).unwrap();
    assert_eq!(to, ContainerId::Foundation(0));
    assert!(session.board().foundations[2].is_empty());
}
