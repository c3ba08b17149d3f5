use rand::SeedableRng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, full_deck};
use crate::container::{ContainerId, Foundation, FreeCell, TableauColumn};
use crate::error::{MoveError, Result};

/// Number of tableau columns.
pub const NUM_COLUMNS: usize = 8;
/// Number of free-cell slots.
pub const NUM_FREE_CELLS: usize = 4;
/// Number of foundation piles (one per suit).
pub const NUM_FOUNDATIONS: usize = 4;
/// Cards dealt to each column, left to right.
pub const COLUMN_DEAL: [usize; NUM_COLUMNS] = [7, 7, 7, 7, 6, 6, 6, 6];

/// The game board – every container and the cards in them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    /// 8 tableau columns; index 0 is leftmost.
    pub columns: [TableauColumn; NUM_COLUMNS],
    /// 4 free-cell slots.
    pub free_cells: [FreeCell; NUM_FREE_CELLS],
    /// 4 foundation piles, in no fixed suit order.
    pub foundations: [Foundation; NUM_FOUNDATIONS],
}

/// The layout right after a deal, kept so a round can be replayed
/// without reshuffling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealSnapshot {
    tableau: [Vec<Card>; NUM_COLUMNS],
    free_cells: [Option<Card>; NUM_FREE_CELLS],
    foundations: [Vec<Card>; NUM_FOUNDATIONS],
}

impl Board {
    // -------------------------------------------------------------------------
    // Construction / Dealing
    // -------------------------------------------------------------------------

    /// Deal a fresh shuffled board from OS entropy.
    pub fn deal_random() -> Self {
        let mut rng = rand::rngs::SmallRng::from_os_rng();
        let mut deck = full_deck();
        deck.shuffle(&mut rng);
        Self::deal_from_deck(deck)
    }

    /// Deal a board from a specific seed (reproducible games).
    pub fn deal_seeded(seed: u64) -> Self {
        let mut rng = rand::rngs::SmallRng::seed_from_u64(seed);
        let mut deck = full_deck();
        deck.shuffle(&mut rng);
        Self::deal_from_deck(deck)
    }

    /// Deal an already-ordered deck: the first 7 cards form column 0
    /// (bottom to top), the next 7 column 1, and so on per `COLUMN_DEAL`.
    pub fn deal_from_deck(deck: Vec<Card>) -> Self {
        assert_eq!(deck.len(), DECK_SIZE, "Need exactly 52 cards to deal");

        let mut board = Board::default();
        let mut cards = deck.into_iter();
        for (column, &count) in board.columns.iter_mut().zip(COLUMN_DEAL.iter()) {
            for card in cards.by_ref().take(count) {
                column.add_card(card);
            }
        }
        board
    }

    // -------------------------------------------------------------------------
    // Container dispatch
    // -------------------------------------------------------------------------

    /// Errors if `id` indexes past the end of its zone.
    pub fn check(&self, id: ContainerId) -> Result<()> {
        let in_range = match id {
            ContainerId::Tableau(i) => i < NUM_COLUMNS,
            ContainerId::FreeCell(i) => i < NUM_FREE_CELLS,
            ContainerId::Foundation(i) => i < NUM_FOUNDATIONS,
        };
        if in_range {
            Ok(())
        } else {
            Err(MoveError::MalformedContainer(id))
        }
    }

    /// The cards in a container, bottom first.
    pub fn cards(&self, id: ContainerId) -> Result<&[Card]> {
        self.check(id)?;
        Ok(match id {
            ContainerId::Tableau(i) => self.columns[i].cards(),
            ContainerId::FreeCell(i) => self.free_cells[i].cards(),
            ContainerId::Foundation(i) => self.foundations[i].cards(),
        })
    }

    /// The exposed card of a container, if any.
    pub fn top(&self, id: ContainerId) -> Result<Option<Card>> {
        Ok(self.cards(id)?.last().copied())
    }

    pub fn can_place_card(&self, id: ContainerId, card: Card) -> Result<bool> {
        self.check(id)?;
        Ok(match id {
            ContainerId::Tableau(i) => self.columns[i].can_place_card(card),
            ContainerId::FreeCell(i) => self.free_cells[i].can_place_card(card),
            ContainerId::Foundation(i) => self.foundations[i].can_place_card(card),
        })
    }

    fn add_card(&mut self, id: ContainerId, card: Card) {
        match id {
            ContainerId::Tableau(i) => self.columns[i].add_card(card),
            ContainerId::FreeCell(i) => self.free_cells[i].add_card(card),
            ContainerId::Foundation(i) => self.foundations[i].add_card(card),
        }
    }

    fn remove_card(&mut self, id: ContainerId, card: Card) -> bool {
        match id {
            ContainerId::Tableau(i) => self.columns[i].remove_card(card),
            ContainerId::FreeCell(i) => self.free_cells[i].remove_card(card),
            ContainerId::Foundation(i) => self.foundations[i].remove_card(card),
        }
    }

    /// Move `cards` from the top of `from` onto `to`, keeping their order.
    ///
    /// Only structural checks happen here: both containers exist, the run
    /// is the top of `from`, and a free cell receives a single card while
    /// empty.  Placement legality is the caller's job.  On error nothing
    /// is touched.
    pub fn transfer(&mut self, cards: &[Card], from: ContainerId, to: ContainerId) -> Result<()> {
        self.check(from)?;
        self.check(to)?;

        if cards.is_empty() {
            return Err(MoveError::IllegalMove("no cards to move"));
        }
        if from == to {
            return Err(MoveError::IllegalMove("source and destination are the same"));
        }
        if !self.cards(from)?.ends_with(cards) {
            return Err(MoveError::IllegalMove("cards are not on top of the source"));
        }
        if let ContainerId::FreeCell(i) = to {
            if cards.len() > 1 || !self.free_cells[i].is_empty() {
                return Err(MoveError::IllegalMove("a free cell holds a single card"));
            }
        }

        for &card in cards {
            self.remove_card(from, card);
            self.add_card(to, card);
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn empty_free_cells(&self) -> usize {
        self.free_cells.iter().filter(|c| c.is_empty()).count()
    }

    pub fn empty_columns(&self) -> usize {
        self.columns.iter().filter(|c| c.is_empty()).count()
    }

    /// Cards across all four foundations.
    pub fn foundation_total(&self) -> usize {
        self.foundations.iter().map(Foundation::len).sum()
    }

    /// Every card is home.
    pub fn is_won(&self) -> bool {
        self.foundation_total() == DECK_SIZE
    }

    /// Cards anywhere on the board.
    pub fn card_count(&self) -> usize {
        self.columns.iter().map(TableauColumn::len).sum::<usize>()
            + (NUM_FREE_CELLS - self.empty_free_cells())
            + self.foundation_total()
    }

    // -------------------------------------------------------------------------
    // Snapshot / restore
    // -------------------------------------------------------------------------

    pub fn snapshot(&self) -> DealSnapshot {
        DealSnapshot {
            tableau: std::array::from_fn(|i| self.columns[i].cards().to_vec()),
            free_cells: std::array::from_fn(|i| self.free_cells[i].card()),
            foundations: std::array::from_fn(|i| self.foundations[i].cards().to_vec()),
        }
    }

    /// Empty every container and lay the snapshot back out.
    pub fn restore(&mut self, snapshot: &DealSnapshot) {
        for (column, cards) in self.columns.iter_mut().zip(&snapshot.tableau) {
            column.clear();
            for &card in cards {
                column.add_card(card);
            }
        }
        for (cell, card) in self.free_cells.iter_mut().zip(&snapshot.free_cells) {
            cell.clear();
            if let Some(card) = *card {
                cell.add_card(card);
            }
        }
        for (foundation, cards) in self.foundations.iter_mut().zip(&snapshot.foundations) {
            foundation.clear();
            for &card in cards {
                foundation.add_card(card);
            }
        }
    }
}
