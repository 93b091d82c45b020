use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

pub const HAND_SIZE: usize = 5;

/// The ten standard hand rankings. The discriminant is the hand's score
/// (1 for high card through 10 for royal flush).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    pub fn score(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Category plus the (at most two) values that break ties within it.
///
/// The derived ordering compares category first, then `primary`, then
/// `secondary`; unused tie-break slots are zero, so equal strengths are ties.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandStrength {
    pub category: Category,
    // high card, grouped rank, or higher pair
    pub primary: u8,
    // lower pair, or best kicker beside a single pair
    pub secondary: u8,
}

/// Result of comparing two hands, from the first hand's point of view.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Tie,
    FirstWins,
    SecondWins,
}

impl Outcome {
    /// The outcome with the two hands swapped.
    pub fn mirror(self) -> Outcome {
        match self {
            Outcome::Tie => Outcome::Tie,
            Outcome::FirstWins => Outcome::SecondWins,
            Outcome::SecondWins => Outcome::FirstWins,
        }
    }
}

impl From<Ordering> for Outcome {
    fn from(ord: Ordering) -> Self {
        match ord {
            Ordering::Equal => Outcome::Tie,
            Ordering::Greater => Outcome::FirstWins,
            Ordering::Less => Outcome::SecondWins,
        }
    }
}

/// Exactly five distinct cards held by one player.
///
/// ```
/// use fivecard_engine::cards::Card;
/// use fivecard_engine::hand::{Category, Hand};
///
/// let ids = ["spade_ten", "spade_jack", "spade_queen", "spade_king", "spade_ace"];
/// let cards = ids.iter().map(|id| Card::from_id(id)).collect::<Result<Vec<_>, _>>().unwrap();
/// let hand = Hand::new(cards).unwrap();
/// assert_eq!(hand.strength().category, Category::RoyalFlush);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Card>", into = "Vec<Card>")]
pub struct Hand {
    cards: [Card; HAND_SIZE],
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Result<Self, GameError> {
        let size = cards.len();
        let cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|_| GameError::InvalidHandSize { size })?;
        let mut seen = HashSet::with_capacity(HAND_SIZE);
        for c in &cards {
            if !seen.insert(*c) {
                return Err(GameError::DuplicateCard { id: c.id() });
            }
        }
        Ok(Self { cards })
    }

    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    pub fn find_by_id(&self, id: &str) -> Option<Card> {
        self.cards.iter().copied().find(|c| c.id() == id)
    }

    pub fn ids(&self) -> Vec<String> {
        self.cards.iter().map(Card::id).collect()
    }

    pub fn strength(&self) -> HandStrength {
        evaluate_hand(&self.cards)
    }

    /// Returns a new hand holding the kept cards (original order) followed by
    /// `replacements`. `discards` must all be in this hand.
    pub fn exchange(&self, discards: &[Card], replacements: &[Card]) -> Result<Hand, GameError> {
        if let Some(missing) = discards.iter().find(|c| !self.contains(c)) {
            return Err(GameError::UnknownCardId { id: missing.id() });
        }
        let mut next: Vec<Card> = self
            .cards
            .iter()
            .copied()
            .filter(|c| !discards.contains(c))
            .collect();
        next.extend_from_slice(replacements);
        Hand::new(next)
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = GameError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Hand::new(cards)
    }
}

impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.cards.to_vec()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

pub fn evaluate_hand(cards: &[Card; HAND_SIZE]) -> HandStrength {
    let mut values: [u8; HAND_SIZE] = (*cards).map(|c| c.value());
    values.sort_unstable();

    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let straight_high = detect_straight_high(&values);

    if is_flush {
        match straight_high {
            Some(14) => return strength(Category::RoyalFlush, 0, 0),
            Some(high) => return strength(Category::StraightFlush, high, 0),
            None => {}
        }
    }

    // (count, value), most frequent first, higher value first within a count
    let groups = group_by_rank(&values);
    let (top_count, top_value) = groups[0];
    let (next_count, next_value) = groups.get(1).copied().unwrap_or((0, 0));

    if top_count == 4 {
        return strength(Category::FourOfAKind, top_value, 0);
    }
    if top_count == 3 && next_count == 2 {
        return strength(Category::FullHouse, top_value, 0);
    }
    if is_flush {
        return strength(Category::Flush, values[HAND_SIZE - 1], 0);
    }
    if let Some(high) = straight_high {
        return strength(Category::Straight, high, 0);
    }
    if top_count == 3 {
        return strength(Category::ThreeOfAKind, top_value, 0);
    }
    if top_count == 2 && next_count == 2 {
        return strength(Category::TwoPair, top_value, next_value);
    }
    if top_count == 2 {
        // groups[1] is the highest of the three singles
        return strength(Category::OnePair, top_value, next_value);
    }
    strength(Category::HighCard, values[HAND_SIZE - 1], 0)
}

pub fn compare_hands(a: &HandStrength, b: &HandStrength) -> Ordering {
    a.cmp(b)
}

/// Compares two hands; never mutates either.
pub fn evaluate(first: &Hand, second: &Hand) -> Outcome {
    compare_hands(&first.strength(), &second.strength()).into()
}

fn strength(category: Category, primary: u8, secondary: u8) -> HandStrength {
    HandStrength {
        category,
        primary,
        secondary,
    }
}

// Ace-low {2,3,4,5,A} counts as a five-high straight.
fn detect_straight_high(sorted: &[u8; HAND_SIZE]) -> Option<u8> {
    if *sorted == [2, 3, 4, 5, 14] {
        return Some(5);
    }
    if sorted.windows(2).all(|w| w[1] == w[0] + 1) {
        Some(sorted[HAND_SIZE - 1])
    } else {
        None
    }
}

fn group_by_rank(sorted: &[u8; HAND_SIZE]) -> Vec<(u8, u8)> {
    let mut rank_counts = [0u8; 15];
    for &v in sorted {
        rank_counts[v as usize] += 1;
    }
    let mut groups: Vec<(u8, u8)> = (2..=14u8)
        .filter(|&v| rank_counts[v as usize] > 0)
        .map(|v| (rank_counts[v as usize], v))
        .collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));
    groups
}
