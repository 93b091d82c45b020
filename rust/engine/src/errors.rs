use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Not enough cards in deck to draw {requested}, deck has {remaining} left")]
    InsufficientCards { requested: usize, remaining: usize },
    #[error("Cannot exchange {requested} cards, a hand holds only 5")]
    TooManyCardsExchanged { requested: usize },
    #[error("Player does not have a card with id: {id}")]
    UnknownCardId { id: String },
    #[error("Invalid players: {reason}")]
    InvalidPlayers { reason: String },
    #[error("Player {id} is not part of this game")]
    UnknownPlayer { id: String },
    #[error("It's not player {actual}'s turn (expected player {expected})")]
    NotPlayersTurn { expected: String, actual: String },
    #[error("Game already finished")]
    GameFinished,
    #[error("Player {id} already has a final hand")]
    HandAlreadyFinalized { id: String },
    #[error("A hand must hold exactly 5 cards, got {size}")]
    InvalidHandSize { size: usize },
    #[error("Duplicate card: {id}")]
    DuplicateCard { id: String },
    #[error("Invalid encoding: {reason}")]
    InvalidEncoding { reason: String },
    #[error("Invalid game state: {reason}")]
    InvalidState { reason: String },
}
