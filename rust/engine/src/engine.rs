use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info};

use crate::deck::Deck;
use crate::errors::GameError;
use crate::game::GameState;
use crate::hand::{evaluate, Hand, HAND_SIZE};
use crate::player::{PlayerId, Seat};
use crate::rules::validate_exchange;

/// Shuffles a fresh deck with `rng`, deals five cards to each player and
/// makes player one active.
///
/// # Errors
///
/// [`GameError::InvalidPlayers`] if either id is blank or both ids are the same.
pub fn new_game<R: Rng + ?Sized>(
    player_one_id: &str,
    player_two_id: &str,
    rng: &mut R,
) -> Result<GameState, GameError> {
    let one = PlayerId::new(player_one_id)?;
    let two = PlayerId::new(player_two_id)?;
    if one == two {
        return Err(GameError::InvalidPlayers {
            reason: format!("{} cannot play against themselves", one),
        });
    }

    let mut deck = Deck::standard();
    deck.shuffle(rng);
    let one_hand = Hand::new(deck.draw(HAND_SIZE)?)?;
    let two_hand = Hand::new(deck.draw(HAND_SIZE)?)?;

    debug!(
        player_one = %one,
        player_two = %two,
        deck_remaining = deck.remaining(),
        "dealt new game"
    );
    Ok(GameState::dealt(
        Seat::new(one, one_hand),
        Seat::new(two, two_hand),
        deck,
    ))
}

/// Applies the acting player's single exchange and returns the next state
/// together with that player's final hand.
///
/// Player one's move passes the turn to player two. Player two's move ends
/// the game: both final hands are compared and the winner (if any) recorded.
/// On any error `game` is left as it was and nothing is drawn.
///
/// # Errors
///
/// - [`GameError::GameFinished`] - the game is finished or forfeited
/// - [`GameError::UnknownPlayer`] - `acting_player_id` is not seated in this game
/// - [`GameError::NotPlayersTurn`] - the other player's move is awaited
/// - [`GameError::HandAlreadyFinalized`] - this player already exchanged
/// - [`GameError::TooManyCardsExchanged`] - more than five distinct ids
/// - [`GameError::UnknownCardId`] - an id not in the player's hand
/// - [`GameError::InsufficientCards`] - the deck cannot cover the exchange
///
/// # Examples
///
/// ```
/// use fivecard_engine::engine::{make_move, new_game};
/// use fivecard_engine::game::Phase;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
///
/// let mut rng = ChaCha20Rng::seed_from_u64(7);
/// let game = new_game("alice", "bob", &mut rng).unwrap();
///
/// let keep_all: [&str; 0] = [];
/// let (game, _) = make_move(&game, "alice", keep_all).unwrap();
/// assert_eq!(game.phase(), Phase::PlayerOneMoved);
///
/// let ids = game.player_two_hand().ids();
/// let (game, final_hand) = make_move(&game, "bob", &ids[..2]).unwrap();
/// assert_eq!(game.phase(), Phase::Finished);
/// assert_eq!(game.player_two_hand(), &final_hand);
/// ```
pub fn make_move<I, S>(
    game: &GameState,
    acting_player_id: &str,
    discard_card_ids: I,
) -> Result<(GameState, Hand), GameError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    apply_move(game, acting_player_id, discard_card_ids).inspect_err(|e| {
        debug!(player = acting_player_id, error = %e, "move rejected");
    })
}

fn apply_move<I, S>(
    game: &GameState,
    acting: &str,
    discard_ids: I,
) -> Result<(GameState, Hand), GameError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if game.is_finished() {
        return Err(GameError::GameFinished);
    }
    let seat = game.seat(acting).ok_or_else(|| GameError::UnknownPlayer {
        id: acting.to_string(),
    })?;
    match game.active_player_id() {
        Some(active) if active == acting => {}
        Some(active) => {
            return Err(GameError::NotPlayersTurn {
                expected: active.to_string(),
                actual: acting.to_string(),
            })
        }
        None => return Err(GameError::GameFinished),
    }
    if seat.final_hand().is_some() {
        return Err(GameError::HandAlreadyFinalized {
            id: acting.to_string(),
        });
    }

    let discards = validate_exchange(seat.hand(), discard_ids)?;

    let mut next = game.clone();
    let replacements = next.deck_mut().draw(discards.len())?;
    let final_hand = seat.hand().exchange(&discards, &replacements)?;
    next.deck_mut().place_bottom(&discards);
    next.seat_mut(acting)
        .ok_or_else(|| GameError::UnknownPlayer {
            id: acting.to_string(),
        })?
        .finalize(final_hand.clone())?;

    debug!(
        player = acting,
        discarded = discards.len(),
        deck_remaining = next.deck().remaining(),
        "exchange applied"
    );

    if game.player_one_id() == acting {
        next.pass_turn();
    } else {
        let one = next
            .player_one()
            .final_hand()
            .ok_or_else(|| GameError::InvalidState {
                reason: "player one has no final hand".into(),
            })?;
        let outcome = evaluate(one, &final_hand);
        next.finish(outcome);
        info!(
            player_one = %next.player_one_id(),
            player_two = %next.player_two_id(),
            outcome = ?outcome,
            winner = next.winner_id().map(|w| w.as_str()).unwrap_or("none"),
            "game finished"
        );
    }
    Ok((next, final_hand))
}

/// Records `player_id` conceding. The opponent becomes the winner.
///
/// # Errors
///
/// [`GameError::GameFinished`] or [`GameError::UnknownPlayer`].
pub fn forfeit(game: &GameState, player_id: &str) -> Result<GameState, GameError> {
    let mut next = game.clone();
    next.forfeit(player_id)?;
    info!(
        forfeited_by = player_id,
        winner = next.winner_id().map(|w| w.as_str()).unwrap_or("none"),
        "game forfeited"
    );
    Ok(next)
}

/// Owns a seeded RNG so a sequence of games can be replayed from one seed.
///
/// # Examples
///
/// ```
/// use fivecard_engine::engine::Engine;
///
/// let mut a = Engine::new(Some(12345));
/// let mut b = Engine::new(Some(12345));
/// let ga = a.new_game("alice", "bob").unwrap();
/// let gb = b.new_game("alice", "bob").unwrap();
/// assert_eq!(ga, gb);
/// ```
#[derive(Debug)]
pub struct Engine {
    /// Seed the RNG was created from
    seed: u64,
    /// Shuffle source shared by every game this engine deals
    rng: ChaCha20Rng,
}

impl Engine {
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            seed,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn new_game(
        &mut self,
        player_one_id: &str,
        player_two_id: &str,
    ) -> Result<GameState, GameError> {
        new_game(player_one_id, player_two_id, &mut self.rng)
    }

    pub fn make_move<I, S>(
        &self,
        game: &GameState,
        acting_player_id: &str,
        discard_card_ids: I,
    ) -> Result<(GameState, Hand), GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        make_move(game, acting_player_id, discard_card_ids)
    }

    pub fn forfeit(&self, game: &GameState, player_id: &str) -> Result<GameState, GameError> {
        forfeit(game, player_id)
    }
}
