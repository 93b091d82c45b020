use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{evaluate, Category, Hand, Outcome};
use crate::player::{PlayerId, Seat};

pub const DECK_SIZE: usize = 52;

/// Where a game stands in the single-exchange protocol.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// Dealt; player one to move
    Starting,
    /// Player one has exchanged; player two to move
    PlayerOneMoved,
    /// Both players exchanged and the hands were compared
    Finished,
    /// A player conceded before the game completed
    Forfeited,
}

/// Aggregate state of one two-player game: both seats, the shared deck,
/// whose move is awaited, and the outcome once the game is over.
///
/// Values are never mutated by the engine's entry points; each transition
/// returns a new `GameState`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    player_one: Seat,
    player_two: Seat,
    deck: Deck,
    active_player_id: Option<PlayerId>,
    is_finished: bool,
    is_forfeited: bool,
    winner_id: Option<PlayerId>,
}

/// Both final hands and the comparison result, for composing a result
/// notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowdownInfo {
    /// Result from player one's point of view
    pub outcome: Outcome,
    /// Winner, unset on a tie
    pub winner_id: Option<PlayerId>,
    pub player_one_hand: Hand,
    pub player_two_hand: Hand,
    pub player_one_category: Category,
    pub player_two_category: Category,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Showdown(ShowdownInfo),
    Forfeit {
        winner_id: PlayerId,
        forfeited_by: PlayerId,
    },
}

impl GameState {
    pub(crate) fn dealt(player_one: Seat, player_two: Seat, deck: Deck) -> Self {
        let active = player_one.id().clone();
        Self {
            player_one,
            player_two,
            deck,
            active_player_id: Some(active),
            is_finished: false,
            is_forfeited: false,
            winner_id: None,
        }
    }

    pub fn player_one(&self) -> &Seat {
        &self.player_one
    }
    pub fn player_two(&self) -> &Seat {
        &self.player_two
    }
    pub fn player_one_id(&self) -> &PlayerId {
        self.player_one.id()
    }
    pub fn player_two_id(&self) -> &PlayerId {
        self.player_two.id()
    }
    pub fn player_one_hand(&self) -> &Hand {
        self.player_one.hand()
    }
    pub fn player_two_hand(&self) -> &Hand {
        self.player_two.hand()
    }
    pub fn deck(&self) -> &Deck {
        &self.deck
    }
    pub fn active_player_id(&self) -> Option<&PlayerId> {
        self.active_player_id.as_ref()
    }
    pub fn is_finished(&self) -> bool {
        self.is_finished
    }
    pub fn is_forfeited(&self) -> bool {
        self.is_forfeited
    }
    pub fn winner_id(&self) -> Option<&PlayerId> {
        self.winner_id.as_ref()
    }

    pub fn seat(&self, id: &str) -> Option<&Seat> {
        [&self.player_one, &self.player_two]
            .into_iter()
            .find(|s| s.id() == id)
    }

    pub fn phase(&self) -> Phase {
        if self.is_forfeited {
            Phase::Forfeited
        } else if self.is_finished {
            Phase::Finished
        } else if self.active_player_id.as_ref() == Some(self.player_two.id()) {
            Phase::PlayerOneMoved
        } else {
            Phase::Starting
        }
    }

    pub fn result(&self) -> Option<GameResult> {
        if self.is_forfeited {
            let winner_id = self.winner_id.clone()?;
            let forfeited_by = if winner_id == *self.player_one.id() {
                self.player_two.id().clone()
            } else {
                self.player_one.id().clone()
            };
            return Some(GameResult::Forfeit {
                winner_id,
                forfeited_by,
            });
        }
        if !self.is_finished {
            return None;
        }
        let one = self.player_one.final_hand()?;
        let two = self.player_two.final_hand()?;
        Some(GameResult::Showdown(ShowdownInfo {
            outcome: evaluate(one, two),
            winner_id: self.winner_id.clone(),
            player_one_hand: one.clone(),
            player_two_hand: two.clone(),
            player_one_category: one.strength().category,
            player_two_category: two.strength().category,
        }))
    }

    /// Concedes the game for `id`; the opponent wins. The evaluator is not run.
    pub fn forfeit(&mut self, id: &str) -> Result<(), GameError> {
        if self.is_finished {
            return Err(GameError::GameFinished);
        }
        let winner = if self.player_one.id() == id {
            self.player_two.id().clone()
        } else if self.player_two.id() == id {
            self.player_one.id().clone()
        } else {
            return Err(GameError::UnknownPlayer { id: id.to_string() });
        };
        self.is_forfeited = true;
        self.is_finished = true;
        self.active_player_id = None;
        self.winner_id = Some(winner);
        Ok(())
    }

    pub(crate) fn seat_mut(&mut self, id: &str) -> Option<&mut Seat> {
        if self.player_one.id() == id {
            Some(&mut self.player_one)
        } else if self.player_two.id() == id {
            Some(&mut self.player_two)
        } else {
            None
        }
    }

    pub(crate) fn deck_mut(&mut self) -> &mut Deck {
        &mut self.deck
    }

    pub(crate) fn pass_turn(&mut self) {
        self.active_player_id = Some(self.player_two.id().clone());
    }

    pub(crate) fn finish(&mut self, outcome: Outcome) {
        self.is_finished = true;
        self.active_player_id = None;
        self.winner_id = match outcome {
            Outcome::Tie => None,
            Outcome::FirstWins => Some(self.player_one.id().clone()),
            Outcome::SecondWins => Some(self.player_two.id().clone()),
        };
    }

    /// Re-checks every structural invariant. Intended for states that arrive
    /// from outside the engine, e.g. decoded from storage.
    pub fn validate(&self) -> Result<(), GameError> {
        let invalid = |reason: &str| {
            Err(GameError::InvalidState {
                reason: reason.to_string(),
            })
        };
        let one = self.player_one.id();
        let two = self.player_two.id();
        if one == two {
            return invalid("players must be distinct");
        }

        let mut seen: HashSet<Card> = HashSet::with_capacity(DECK_SIZE);
        let all = self
            .deck
            .cards()
            .iter()
            .chain(self.player_one_hand().cards())
            .chain(self.player_two_hand().cards());
        for c in all {
            if !seen.insert(*c) {
                return Err(GameError::DuplicateCard { id: c.id() });
            }
        }
        if seen.len() != DECK_SIZE {
            return invalid("deck and hands must account for all 52 cards");
        }

        let one_start = self.player_one.starting_hand();
        let two_start = self.player_two.starting_hand();
        if let Some(c) = one_start.cards().iter().find(|c| two_start.contains(c)) {
            return Err(GameError::DuplicateCard { id: c.id() });
        }
        // every dealt card is either still held or was discarded to the deck
        for seat in [&self.player_one, &self.player_two] {
            if let Some(held) = seat.final_hand() {
                let lost = seat
                    .starting_hand()
                    .cards()
                    .iter()
                    .any(|c| !held.contains(c) && !self.deck.contains(c));
                if lost {
                    return invalid("starting hand does not match final hand and deck");
                }
            }
        }

        if let Some(w) = &self.winner_id {
            if !self.is_finished {
                return invalid("winner set on an unfinished game");
            }
            if w != one && w != two {
                return invalid("winner is not a player of this game");
            }
        }
        if self.is_forfeited && (!self.is_finished || self.winner_id.is_none()) {
            return invalid("forfeited game must be finished with a winner");
        }

        let one_done = self.player_one.final_hand().is_some();
        let two_done = self.player_two.final_hand().is_some();
        if self.is_finished {
            if self.active_player_id.is_some() {
                return invalid("finished game has an active player");
            }
            if !self.is_forfeited {
                if !(one_done && two_done) {
                    return invalid("finished game is missing a final hand");
                }
                let expected = match self.result() {
                    Some(GameResult::Showdown(info)) => info.outcome,
                    _ => return invalid("finished game has no showdown"),
                };
                let winner_matches = match expected {
                    Outcome::Tie => self.winner_id.is_none(),
                    Outcome::FirstWins => self.winner_id.as_ref() == Some(one),
                    Outcome::SecondWins => self.winner_id.as_ref() == Some(two),
                };
                if !winner_matches {
                    return invalid("winner does not match the final hands");
                }
            }
            return Ok(());
        }

        match self.active_player_id.as_ref() {
            Some(a) if a == one && !one_done && !two_done => Ok(()),
            Some(a) if a == two && one_done && !two_done => Ok(()),
            Some(_) => invalid("active player does not match the hands played"),
            None => invalid("unfinished game has no active player"),
        }
    }
}
