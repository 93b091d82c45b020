use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// An ordered pile of unique cards. The top of the deck is the end of the
/// underlying vector; discards are returned to the bottom (index 0).
///
/// # Examples
///
/// ```
/// use fivecard_engine::deck::Deck;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
///
/// let mut rng = ChaCha20Rng::seed_from_u64(42);
/// let mut deck = Deck::standard();
/// deck.shuffle(&mut rng);
///
/// let hand = deck.draw(5).unwrap();
/// assert_eq!(hand.len(), 5);
/// assert_eq!(deck.remaining(), 47);
/// assert!(deck.draw(48).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The 52-card deck in base (unshuffled) order.
    pub fn standard() -> Self {
        Self { cards: full_deck() }
    }

    /// Builds a deck from an explicit ordering, rejecting repeated cards.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, GameError> {
        let mut seen = HashSet::with_capacity(cards.len());
        for c in &cards {
            if !seen.insert(*c) {
                return Err(GameError::DuplicateCard { id: c.id() });
            }
        }
        Ok(Self { cards })
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes `n` cards from the top. All or nothing: on error the deck is untouched.
    pub fn draw(&mut self, n: usize) -> Result<Vec<Card>, GameError> {
        let remaining = self.cards.len();
        if n > remaining {
            return Err(GameError::InsufficientCards {
                requested: n,
                remaining,
            });
        }
        let mut drawn = self.cards.split_off(remaining - n);
        // top card first
        drawn.reverse();
        Ok(drawn)
    }

    pub fn place_bottom(&mut self, cards: &[Card]) {
        self.cards.splice(0..0, cards.iter().copied());
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }
}

impl TryFrom<Vec<Card>> for Deck {
    type Error = GameError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Deck::from_cards(cards)
    }
}

impl From<Deck> for Vec<Card> {
    fn from(deck: Deck) -> Self {
        deck.cards
    }
}
