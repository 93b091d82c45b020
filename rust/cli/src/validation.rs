//! Input parsing and validation for CLI arguments and interactive prompts.
//!
//! Card ids are the engine's `"<suit>_<rank>"` tokens (`spade_ace`,
//! `heart_ten`). Lists may be separated by commas, whitespace, or both.

use fivecard_engine::cards::Card;
use fivecard_engine::hand::Hand;

/// Outcome of parsing one line typed at the discard prompt.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Card ids to discard; empty keeps the whole hand
    Discard(Vec<String>),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Splits a comma- or whitespace-separated list into lowercase tokens.
pub fn split_card_ids(input: &str) -> Vec<String> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_lowercase())
        .collect()
}

/// Parse a line typed at the discard prompt.
///
/// Ids are only checked for shape here; whether the player holds them is
/// the engine's decision.
///
/// # Example
///
/// ```rust
/// # use fivecard_cli::validation::{parse_discard_input, ParseResult};
/// assert_eq!(parse_discard_input(""), ParseResult::Discard(vec![]));
/// assert_eq!(parse_discard_input("q"), ParseResult::Quit);
/// assert_eq!(
///     parse_discard_input("spade_ace, Heart_Two"),
///     ParseResult::Discard(vec!["spade_ace".into(), "heart_two".into()])
/// );
/// match parse_discard_input("ace of spades") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("ace")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_discard_input(input: &str) -> ParseResult {
    let ids = split_card_ids(input);
    if let [only] = ids.as_slice() {
        if only == "q" || only == "quit" {
            return ParseResult::Quit;
        }
    }
    for id in &ids {
        if let Err(e) = Card::from_id(id) {
            return ParseResult::Invalid(format!("{} (ids look like spade_ace)", e));
        }
    }
    ParseResult::Discard(ids)
}

/// Parse a five-card hand given as card ids.
pub fn parse_hand(input: &str) -> Result<Hand, String> {
    let cards = split_card_ids(input)
        .iter()
        .map(|id| Card::from_id(id))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| e.to_string())?;
    Hand::new(cards).map_err(|e| e.to_string())
}

/// Player names given on the command line must be non-blank and distinct.
pub fn validate_player_names(one: &str, two: &str) -> Result<(), String> {
    if one.trim().is_empty() || two.trim().is_empty() {
        return Err("player names must not be blank".to_string());
    }
    if one == two {
        return Err(format!("both players are named {}", one));
    }
    Ok(())
}
