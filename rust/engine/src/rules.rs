use std::collections::BTreeSet;

use crate::cards::Card;
use crate::errors::GameError;
use crate::hand::{Hand, HAND_SIZE};

/// A player may exchange at most their whole hand.
pub const MAX_EXCHANGE: usize = HAND_SIZE;

/// Resolves the card ids a player wants to discard against their hand.
///
/// Ids are treated as a set, so repeats collapse. Returns the matching cards
/// in hand order; an empty request is valid and means the player stands pat.
///
/// # Errors
///
/// - [`GameError::TooManyCardsExchanged`] - more than [`MAX_EXCHANGE`] distinct ids
/// - [`GameError::UnknownCardId`] - an id that names no card in `hand`
///
/// # Examples
///
/// ```
/// use fivecard_engine::cards::Card;
/// use fivecard_engine::errors::GameError;
/// use fivecard_engine::hand::Hand;
/// use fivecard_engine::rules::validate_exchange;
///
/// let ids = ["heart_two", "heart_three", "heart_four", "diamond_five", "club_six"];
/// let cards = ids.iter().map(|id| Card::from_id(id)).collect::<Result<Vec<_>, _>>().unwrap();
/// let hand = Hand::new(cards).unwrap();
///
/// let discards = validate_exchange(&hand, ["club_six", "heart_two"]).unwrap();
/// assert_eq!(discards.len(), 2);
///
/// let err = validate_exchange(&hand, ["spade_ace"]).unwrap_err();
/// assert_eq!(err, GameError::UnknownCardId { id: "spade_ace".into() });
/// ```
pub fn validate_exchange<I, S>(hand: &Hand, discard_ids: I) -> Result<Vec<Card>, GameError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let requested: BTreeSet<String> = discard_ids
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect();
    if requested.len() > MAX_EXCHANGE {
        return Err(GameError::TooManyCardsExchanged {
            requested: requested.len(),
        });
    }
    if let Some(unknown) = requested.iter().find(|id| hand.find_by_id(id.as_str()).is_none()) {
        return Err(GameError::UnknownCardId {
            id: unknown.clone(),
        });
    }
    Ok(hand
        .cards()
        .iter()
        .copied()
        .filter(|c| requested.contains(&c.id()))
        .collect())
}
