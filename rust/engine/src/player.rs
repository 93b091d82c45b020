use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::hand::Hand;

/// Opaque player identity supplied by the caller. The engine never checks
/// that it exists anywhere; it only requires it to be non-blank.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Result<Self, GameError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(GameError::InvalidPlayers {
                reason: "player id must not be blank".into(),
            });
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PlayerId {
    type Error = GameError;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        PlayerId::new(id)
    }
}

impl From<PlayerId> for String {
    fn from(id: PlayerId) -> Self {
        id.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for PlayerId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PlayerId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Which of a player's two hands is current.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum HandState {
    /// Dealt hand, before the player's exchange
    Starting,
    /// Final hand, after the exchange
    Ending,
}

/// One player's place in a game: identity, dealt hand, and the final hand
/// once the player has made their single exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    /// Player identifier
    id: PlayerId,
    /// Hand dealt by `new_game`
    starting_hand: Hand,
    /// Hand after the exchange; set exactly once
    final_hand: Option<Hand>,
}

impl Seat {
    pub fn new(id: PlayerId, starting_hand: Hand) -> Self {
        Self {
            id,
            starting_hand,
            final_hand: None,
        }
    }

    pub fn id(&self) -> &PlayerId {
        &self.id
    }

    pub fn starting_hand(&self) -> &Hand {
        &self.starting_hand
    }

    pub fn final_hand(&self) -> Option<&Hand> {
        self.final_hand.as_ref()
    }

    /// The hand the player holds right now.
    pub fn hand(&self) -> &Hand {
        self.final_hand.as_ref().unwrap_or(&self.starting_hand)
    }

    pub fn hand_state(&self) -> HandState {
        if self.final_hand.is_some() {
            HandState::Ending
        } else {
            HandState::Starting
        }
    }

    pub(crate) fn finalize(&mut self, hand: Hand) -> Result<(), GameError> {
        if self.final_hand.is_some() {
            return Err(GameError::HandAlreadyFinalized {
                id: self.id.to_string(),
            });
        }
        self.final_hand = Some(hand);
        Ok(())
    }
}
