//! The three placement zones.
//!
//! Containers are mechanism only: `add_card` never checks legality.
//! Callers ask `can_place_card` first (see `rules`).

use std::fmt;

use crate::card::{Card, Rank, Suit};

/// Names one container on the board.  This is what a move record stores,
/// so undo/redo replays touch only the containers involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerId {
    Tableau(usize),
    FreeCell(usize),
    Foundation(usize),
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerId::Tableau(i) => write!(f, "t{i}"),
            ContainerId::FreeCell(i) => write!(f, "c{i}"),
            ContainerId::Foundation(i) => write!(f, "f{i}"),
        }
    }
}

/// A tableau column, bottom card first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableauColumn {
    cards: Vec<Card>,
}

impl TableauColumn {
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// An empty column takes anything; otherwise alternate colour, one rank down.
    pub fn can_place_card(&self, card: Card) -> bool {
        match self.top() {
            None => true,
            Some(top) => card.can_stack_on(top),
        }
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes `card` wherever it sits.  Returns `false` if it is not here.
    pub fn remove_card(&mut self, card: Card) -> bool {
        match self.cards.iter().position(|&c| c == card) {
            Some(idx) => {
                self.cards.remove(idx);
                true
            }
            None => false,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.cards.clear();
    }
}

/// A single-card holding slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FreeCell {
    card: Option<Card>,
}

impl FreeCell {
    pub fn card(&self) -> Option<Card> {
        self.card
    }

    pub fn cards(&self) -> &[Card] {
        self.card.as_slice()
    }

    pub fn is_empty(&self) -> bool {
        self.card.is_none()
    }

    pub fn can_place_card(&self, _card: Card) -> bool {
        self.is_empty()
    }

    pub fn add_card(&mut self, card: Card) {
        self.card = Some(card);
    }

    /// No-op unless `card` is the occupant.
    pub fn remove_card(&mut self, card: Card) -> bool {
        if self.card == Some(card) {
            self.card = None;
            true
        } else {
            false
        }
    }

    pub(crate) fn clear(&mut self) {
        self.card = None;
    }
}

/// A same-suit pile built up from Ace to King.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Foundation {
    cards: Vec<Card>,
    target_suit: Option<Suit>,
}

impl Foundation {
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Suit fixed by the Ace that started this pile.
    pub fn target_suit(&self) -> Option<Suit> {
        self.target_suit
    }

    pub fn is_complete(&self) -> bool {
        self.top().is_some_and(|c| c.rank == Rank::KING)
    }

    pub fn can_place_card(&self, card: Card) -> bool {
        match (self.top(), self.target_suit) {
            (Some(top), Some(suit)) => {
                card.suit == suit && card.order_value() == top.order_value() + 1
            }
            _ => card.rank == Rank::ACE,
        }
    }

    pub fn add_card(&mut self, card: Card) {
        if self.cards.is_empty() {
            self.target_suit = Some(card.suit);
        }
        self.cards.push(card);
    }

    pub fn remove_card(&mut self, card: Card) -> bool {
        let Some(idx) = self.cards.iter().position(|&c| c == card) else {
            return false;
        };
        self.cards.remove(idx);
        if self.cards.is_empty() {
            self.target_suit = None;
        }
        true
    }

    pub(crate) fn clear(&mut self) {
        self.cards.clear();
        self.target_suit = None;
    }
}
