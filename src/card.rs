use std::fmt;

/// The four French suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All four suits, in canonical deck order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    pub fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

/// Card rank, Ace = 1 through King = 13.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const KING: Rank = Rank(13);

    /// Returns `None` outside `1..=13`.
    pub fn new(value: u8) -> Option<Rank> {
        (1..=13).contains(&value).then_some(Rank(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    fn label(self) -> String {
        match self.0 {
            1 => "A".to_string(),
            11 => "J".to_string(),
            12 => "Q".to_string(),
            13 => "K".to_string(),
            n => n.to_string(),
        }
    }
}

/// A playing card.
///
/// A deck holds exactly one card per (suit, rank) pair, so within a deal
/// value equality and card identity coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Card { suit, rank }
    }

    pub fn color(self) -> Color {
        self.suit.color()
    }

    pub fn is_red(self) -> bool {
        self.color() == Color::Red
    }

    pub fn order_value(self) -> u8 {
        self.rank.value()
    }

    /// `true` if `self` may sit directly on `other` in a tableau run:
    /// opposite colour and exactly one rank lower.
    pub fn can_stack_on(self, other: Card) -> bool {
        self.color() != other.color() && self.order_value() + 1 == other.order_value()
    }

    /// Short display label, e.g. `A♥`, `10♠`, `Q♦`.
    pub fn label(self) -> String {
        format!("{}{}", self.rank.label(), self.suit.symbol())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

pub const DECK_SIZE: usize = 52;

/// The 52-card deck, suits in `Suit::ALL` order, Ace to King within a suit.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);

    for &suit in &Suit::ALL {
        for v in 1..=13 {
            deck.push(Card { suit, rank: Rank(v) });
        }
    }

    debug_assert_eq!(deck.len(), DECK_SIZE, "Deck must have exactly 52 cards");
    deck
}
