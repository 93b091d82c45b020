//! Versioned JSON transport for decks, hands and game states.
//!
//! Cards travel as ordered `{"rank": .., "suit": ..}` records inside an
//! envelope carrying [`FORMAT_VERSION`]. Decoding is strict: unknown ranks or
//! suits, repeated cards, wrong hand sizes and unsupported versions are
//! errors, never silently defaulted.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::game::GameState;
use crate::hand::Hand;

pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct CardsEnvelope {
    version: u32,
    cards: Vec<Card>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GameEnvelope {
    version: u32,
    game: GameState,
}

pub fn encode_deck(deck: &Deck) -> Result<String, GameError> {
    encode_cards(deck.cards().to_vec())
}

pub fn decode_deck(s: &str) -> Result<Deck, GameError> {
    Deck::from_cards(decode_cards(s)?)
}

pub fn encode_hand(hand: &Hand) -> Result<String, GameError> {
    encode_cards(hand.cards().to_vec())
}

pub fn decode_hand(s: &str) -> Result<Hand, GameError> {
    Hand::new(decode_cards(s)?)
}

pub fn encode_game(game: &GameState) -> Result<String, GameError> {
    let envelope = GameEnvelope {
        version: FORMAT_VERSION,
        game: game.clone(),
    };
    serde_json::to_string(&envelope).map_err(encoding_error)
}

/// Decodes a stored game and re-checks its invariants.
pub fn decode_game(s: &str) -> Result<GameState, GameError> {
    let envelope: GameEnvelope = serde_json::from_str(s).map_err(encoding_error)?;
    check_version(envelope.version)?;
    envelope.game.validate()?;
    Ok(envelope.game)
}

fn encode_cards(cards: Vec<Card>) -> Result<String, GameError> {
    let envelope = CardsEnvelope {
        version: FORMAT_VERSION,
        cards,
    };
    serde_json::to_string(&envelope).map_err(encoding_error)
}

fn decode_cards(s: &str) -> Result<Vec<Card>, GameError> {
    let envelope: CardsEnvelope = serde_json::from_str(s).map_err(encoding_error)?;
    check_version(envelope.version)?;
    Ok(envelope.cards)
}

fn check_version(version: u32) -> Result<(), GameError> {
    if version != FORMAT_VERSION {
        return Err(GameError::InvalidEncoding {
            reason: format!("unsupported format version {}", version),
        });
    }
    Ok(())
}

fn encoding_error(e: serde_json::Error) -> GameError {
    GameError::InvalidEncoding {
        reason: e.to_string(),
    }
}
