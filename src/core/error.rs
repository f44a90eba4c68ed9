use thiserror::Error;

use super::Card;

/// This is the core error type for card handling and hand ranking.
/// It uses `thiserror` to provide readable error messages
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PokerError {
    #[error("Unable to parse value")]
    UnexpectedValueChar,
    #[error("Unable to parse suit")]
    UnexpectedSuitChar,
    #[error("Error reading characters while parsing")]
    TooFewChars,
    #[error("Extra un-used characters found after parsing")]
    UnparsedCharsRemaining,
    #[error("Card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("Card {0} is already in the deck")]
    CardAlreadyInDeck(Card),
    #[error("Ranking needs at least five cards, got {0}")]
    TooFewCards(usize),
    #[error("Deck only has {available} cards, {requested} were requested")]
    DeckExhausted { requested: usize, available: usize },
}
