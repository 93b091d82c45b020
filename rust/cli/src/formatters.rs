//! Card, hand, and result formatters for terminal display.
//!
//! Suits use Unicode symbols with an ASCII fallback for Windows consoles
//! that cannot render them:
//!
//! - **Unicode mode**: ♠ ♥ ♦ ♣
//! - **ASCII mode**: s h d c
//!
//! ## Example
//!
//! ```rust
//! use fivecard_engine::cards::{Card, Rank, Suit};
//! use fivecard_cli::formatters::format_card;
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spade);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! ```

use fivecard_engine::cards::{Card, Rank, Suit};
use fivecard_engine::game::{GameResult, GameState};
use fivecard_engine::hand::{Hand, Outcome};

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM) or VS Code (VSCODE_INJECTION). Elsewhere, assumes support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Spade => "♠",
            Suit::Heart => "♥",
            Suit::Diamond => "♦",
            Suit::Club => "♣",
        }
        .to_string()
    } else {
        match suit {
            Suit::Spade => "s",
            Suit::Heart => "h",
            Suit::Diamond => "d",
            Suit::Club => "c",
        }
        .to_string()
    }
}

/// Format a Rank as a single character (2-9, T, J, Q, K, A).
pub fn format_rank(rank: &Rank) -> String {
    match rank {
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "T",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
    }
    .to_string()
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Compact one-line view of a hand, e.g. `[A♠ K♠ Q♠ J♠ T♠]`.
pub fn format_hand(hand: &Hand) -> String {
    let cards: Vec<String> = hand.cards().iter().map(format_card).collect();
    format!("[{}]", cards.join(" "))
}

/// One line per card, numbered, with the id a player types to discard it.
///
/// ```text
///   1. A♠  spade_ace
///   2. T♥  heart_ten
/// ```
pub fn format_hand_with_ids(hand: &Hand) -> Vec<String> {
    hand.cards()
        .iter()
        .enumerate()
        .map(|(i, c)| format!("  {}. {:<3} {}", i + 1, format_card(c), c.id()))
        .collect()
}

/// Summary line for an [`Outcome`] between two named players.
pub fn format_outcome(outcome: Outcome, first: &str, second: &str) -> String {
    match outcome {
        Outcome::FirstWins => format!("Winner: {}", first),
        Outcome::SecondWins => format!("Winner: {}", second),
        Outcome::Tie => "Result: tie".to_string(),
    }
}

/// Human-readable result of a finished game; empty while it is in progress.
pub fn format_game_result(game: &GameState) -> Vec<String> {
    let one = game.player_one_id().as_str();
    let two = game.player_two_id().as_str();
    match game.result() {
        Some(GameResult::Showdown(info)) => vec![
            format!(
                "{}: {} {}",
                one,
                format_hand(&info.player_one_hand),
                info.player_one_category
            ),
            format!(
                "{}: {} {}",
                two,
                format_hand(&info.player_two_hand),
                info.player_two_category
            ),
            format_outcome(info.outcome, one, two),
        ],
        Some(GameResult::Forfeit {
            winner_id,
            forfeited_by,
        }) => vec![
            format!("{} forfeits", forfeited_by),
            format!("Winner: {}", winner_id),
        ],
        None => Vec::new(),
    }
}
