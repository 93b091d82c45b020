use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// One of the four suits of a standard 52-card deck.
/// Serialized as its lowercase singular name (`"spade"`, `"heart"`, ...).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    /// Spades (♠)
    Spade,
    /// Hearts (♥)
    Heart,
    /// Diamonds (♦)
    Diamond,
    /// Clubs (♣)
    Club,
}

impl Suit {
    pub fn name(self) -> &'static str {
        match self {
            Suit::Spade => "spade",
            Suit::Heart => "heart",
            Suit::Diamond => "diamond",
            Suit::Club => "club",
        }
    }

    pub fn from_name(name: &str) -> Option<Suit> {
        all_suits().into_iter().find(|s| s.name() == name)
    }

    fn plural(self) -> &'static str {
        match self {
            Suit::Spade => "Spades",
            Suit::Heart => "Hearts",
            Suit::Diamond => "Diamonds",
            Suit::Club => "Clubs",
        }
    }
}

/// The face value of a card from Two through Ace.
/// The discriminant is the card's value used for hand evaluation (Ace high).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

impl Rank {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Rank::Two => "two",
            Rank::Three => "three",
            Rank::Four => "four",
            Rank::Five => "five",
            Rank::Six => "six",
            Rank::Seven => "seven",
            Rank::Eight => "eight",
            Rank::Nine => "nine",
            Rank::Ten => "ten",
            Rank::Jack => "jack",
            Rank::Queen => "queen",
            Rank::King => "king",
            Rank::Ace => "ace",
        }
    }

    pub fn from_name(name: &str) -> Option<Rank> {
        all_ranks().into_iter().find(|r| r.name() == name)
    }

    fn title(self) -> &'static str {
        match self {
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }
}

/// A single playing card. Identity is the (rank, suit) pair.
///
/// The card id (`"<suit>_<rank>"`, e.g. `spade_ace`) is what players send to
/// name the cards they want to exchange.
///
/// ```
/// use fivecard_engine::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Ace, Suit::Spade);
/// assert_eq!(card.id(), "spade_ace");
/// assert_eq!(card.value(), 14);
/// assert_eq!(Card::from_id("spade_ace"), Ok(card));
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
    /// The suit of the card
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn value(&self) -> u8 {
        self.rank.value()
    }

    pub fn id(&self) -> String {
        format!("{}_{}", self.suit.name(), self.rank.name())
    }

    pub fn from_id(id: &str) -> Result<Card, GameError> {
        let unknown = || GameError::UnknownCardId { id: id.to_string() };
        let (suit, rank) = id.split_once('_').ok_or_else(unknown)?;
        let suit = Suit::from_name(suit).ok_or_else(unknown)?;
        let rank = Rank::from_name(rank).ok_or_else(unknown)?;
        Ok(Card { rank, suit })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank.title(), self.suit.plural())
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Spade, Suit::Heart, Suit::Diamond, Suit::Club]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

/// The 52 standard cards in base order: each rank Two..Ace, suits inner.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &r in &all_ranks() {
        for &s in &all_suits() {
            v.push(Card { rank: r, suit: s });
        }
    }
    v
}
