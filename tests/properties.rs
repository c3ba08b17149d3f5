use std::collections::HashSet;

use freecell_rs::board::COLUMN_DEAL;
use freecell_rs::rules::max_movable_count;
use freecell_rs::{Board, Card, ContainerId, NullObserver, Session};
use proptest::prelude::*;

proptest! {
    #[test]
    fn every_deal_is_a_full_unique_deck(seed in any::<u64>()) {
        let board = Board::deal_seeded(seed);

        let lens: Vec<usize> = board.columns.iter().map(|c| c.len()).collect();
        prop_assert_eq!(lens, COLUMN_DEAL.to_vec());

        let cards: HashSet<Card> = board
            .columns
            .iter()
            .flat_map(|c| c.cards().iter().copied())
            .collect();
        prop_assert_eq!(cards.len(), 52);
        prop_assert_eq!(board.foundation_total(), 0);
        prop_assert_eq!(board.empty_free_cells(), 4);
    }

    #[test]
    fn commit_undo_redo_round_trip(seed in any::<u64>(), col in 0usize..8, cell in 0usize..4) {
        let mut session = Session::with_seed(seed, "Green", NullObserver);
        let before = session.board().clone();
        let top = session.board().columns[col].top().unwrap();

        session
            .commit_move(&[top], ContainerId::Tableau(col), ContainerId::FreeCell(cell))
            .unwrap();
        let after = session.board().clone();
        prop_assert_eq!(session.log().redo_len(), 0);

        session.undo().unwrap();
        prop_assert_eq!(session.board(), &before);
        prop_assert_eq!(session.log().redo_len(), 1);
        prop_assert_eq!(session.log().undo_len(), 0);

        session.redo().unwrap();
        prop_assert_eq!(session.board(), &after);
    }

    #[test]
    fn auto_moves_never_lose_cards(seed in any::<u64>(), picks in proptest::collection::vec(0usize..12, 1..40)) {
        let mut session = Session::with_seed(seed, "Green", NullObserver);
        for pick in picks {
            let from = if pick < 8 {
                ContainerId::Tableau(pick)
            } else {
                ContainerId::FreeCell(pick - 8)
            };
            let before = session.board().clone();
            if session.auto_move(from).is_err() {
                prop_assert_eq!(session.board(), &before);
            }
            prop_assert_eq!(session.board().card_count(), 52);
        }
        while session.can_undo() {
            session.undo().unwrap();
        }
        prop_assert_eq!(session.board(), &Board::deal_seeded(seed));
        prop_assert_eq!(session.move_count(), 0);
    }

    #[test]
    fn capacity_grows_with_room(cells in 0usize..=4, columns in 0usize..=8) {
        let free = max_movable_count(cells, columns, false);
        let reserved = max_movable_count(cells, columns, true);
        prop_assert!(free >= 1 + cells);
        prop_assert!(reserved <= free);
        if columns > 0 {
            prop_assert_eq!(reserved * 2, free);
        }
    }
}
