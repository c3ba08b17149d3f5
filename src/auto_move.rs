//! Double-click placement: find the first legal home for an exposed card.

use crate::board::{Board, NUM_COLUMNS, NUM_FOUNDATIONS, NUM_FREE_CELLS};
use crate::card::Card;
use crate::container::ContainerId;
use crate::error::{MoveError, Result};

/// Pick a destination for `card`, which must be the exposed card of
/// `from`.
///
/// Tries, in order: foundations, the other tableau columns, free cells.
/// Within each zone the lowest index wins.  A card already in a free cell
/// is never moved to another free cell.
pub fn find_destination(board: &Board, card: Card, from: ContainerId) -> Result<ContainerId> {
    if board.top(from)? != Some(card) {
        return Err(MoveError::IllegalMove("only the exposed card can be auto-moved"));
    }

    let foundations = (0..NUM_FOUNDATIONS).map(ContainerId::Foundation);
    let columns = (0..NUM_COLUMNS)
        .map(ContainerId::Tableau)
        .filter(|&id| id != from);
    let cells = (0..NUM_FREE_CELLS)
        .map(ContainerId::FreeCell)
        .filter(|_| !matches!(from, ContainerId::FreeCell(_)));

    for to in foundations.chain(columns).chain(cells) {
        if to != from && board.can_place_card(to, card)? {
            return Ok(to);
        }
    }
    Err(MoveError::IllegalMove("no legal destination"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    fn card(suit: Suit, rank: u8) -> Card {
        Card::new(suit, Rank::new(rank).unwrap())
    }

    /// Every column holds one card that nothing in these tests fits on.
    fn blocked_board() -> Board {
        let mut board = Board::default();
        for (i, column) in board.columns.iter_mut().enumerate() {
            column.add_card(card(Suit::Hearts, 2 + i as u8));
        }
        board
    }

    #[test]
    fn ace_goes_to_first_open_foundation() {
        let mut board = blocked_board();
        board.foundations[0].add_card(card(Suit::Clubs, 1));
        board.columns[3].add_card(card(Suit::Spades, 1));

        let to = find_destination(&board, card(Suit::Spades, 1), ContainerId::Tableau(3)).unwrap();
        assert_eq!(to, ContainerId::Foundation(1));
    }

    #[test]
    fn buried_card_is_refused() {
        let board = blocked_board();
        let err = find_destination(&board, card(Suit::Spades, 4), ContainerId::Tableau(0)).unwrap_err();
        assert!(matches!(err, MoveError::IllegalMove(_)));
    }

    #[test]
    fn tableau_before_free_cell() {
        let mut board = blocked_board();
        // Black 6 fits on the red 7 in column 5.
        board.columns[0].add_card(card(Suit::Clubs, 6));
        let to = find_destination(&board, card(Suit::Clubs, 6), ContainerId::Tableau(0)).unwrap();
        assert_eq!(to, ContainerId::Tableau(5));
    }

    #[test]
    fn falls_back_to_free_cell() {
        let mut board = blocked_board();
        board.free_cells[0].add_card(card(Suit::Diamonds, 13));
        board.columns[0].add_card(card(Suit::Clubs, 12));
        // Q♣ has no red king to sit on in the tableau.
        let to = find_destination(&board, card(Suit::Clubs, 12), ContainerId::Tableau(0)).unwrap();
        assert_eq!(to, ContainerId::FreeCell(1));
    }

    #[test]
    fn free_cell_card_never_hops_cells() {
        let mut board = blocked_board();
        board.free_cells[2].add_card(card(Suit::Clubs, 12));
        let err = find_destination(&board, card(Suit::Clubs, 12), ContainerId::FreeCell(2)).unwrap_err();
        assert_eq!(err, MoveError::IllegalMove("no legal destination"));
    }

    #[test]
    fn empty_column_accepts_when_nothing_better() {
        let mut board = blocked_board();
        board.columns[7].clear();
        board.free_cells[0].add_card(card(Suit::Clubs, 12));
        let to = find_destination(&board, card(Suit::Clubs, 12), ContainerId::FreeCell(0)).unwrap();
        assert_eq!(to, ContainerId::Tableau(7));
    }
}
