use thiserror::Error;

use crate::core::PokerError;

use super::player::PlayerId;

/// The two ways a table operation can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The operation isn't legal right now: out of turn, wrong phase,
    /// nothing in progress.
    IllegalState,
    /// The request itself is malformed: bad amounts, unknown players,
    /// duplicate cards.
    IllegalArgument,
}

/// Every rejected table or turn controller operation. A rejected operation
/// leaves the table untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("A hand is already in progress")]
    HandInProgress,
    #[error("No hand is in progress")]
    NoHandInProgress,
    #[error("Need at least two players, have {0}")]
    NotEnoughPlayers(usize),
    #[error("The table is full")]
    TableFull,
    #[error("Player {0} is already seated")]
    DuplicatePlayer(PlayerId),
    #[error("Player {0} is not seated at this table")]
    UnknownPlayer(PlayerId),
    #[error("Player {0} is not active in this hand")]
    PlayerNotActive(PlayerId),
    #[error("Player {0} is the last active player and can't fold")]
    LastActivePlayer(PlayerId),
    #[error("It's not player {player}'s turn, waiting on {expected:?}")]
    NotPlayersTurn {
        player: PlayerId,
        expected: Option<PlayerId>,
    },
    #[error("The betting round is closed")]
    RoundClosed,
    #[error("The betting round is still open")]
    RoundStillOpen,
    #[error("Player {player} can't check facing a bet of {owed}")]
    CannotCheck { player: PlayerId, owed: u64 },
    #[error("Player {0} has nothing to call")]
    NothingToCall(PlayerId),
    #[error("Raise amount must be positive")]
    NonPositiveRaise,
    #[error("Player {0} has no chips to play a hand with")]
    NoChips(PlayerId),
    #[error("Player {player} needs {needed} chips but only has {bankroll}")]
    InsufficientBankroll {
        player: PlayerId,
        needed: u64,
        bankroll: u64,
    },
    #[error("Blinds must satisfy 0 < small ({small}) < big ({big})")]
    InvalidBlinds { small: u64, big: u64 },
    #[error("Cards per player must be 1 or 2, got {0}")]
    InvalidCardsPerPlayer(usize),
    #[error("Player {player} was seeded {count} hole cards")]
    TooManyHoleCards { player: PlayerId, count: usize },
    #[error("The board can hold five cards, asked for {0}")]
    BoardOverflow(usize),
    #[error("Showdown needs five cards per player, player {0} has fewer")]
    IncompleteShowdown(PlayerId),
    #[error("Player {0} already acted this turn")]
    AlreadyActed(PlayerId),
    #[error("Card error: {0}")]
    Card(#[from] PokerError),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl TableError {
    /// Classify the error as a state or an argument problem.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TableError::HandInProgress
            | TableError::NoHandInProgress
            | TableError::NotEnoughPlayers(_)
            | TableError::TableFull
            | TableError::PlayerNotActive(_)
            | TableError::LastActivePlayer(_)
            | TableError::NotPlayersTurn { .. }
            | TableError::RoundClosed
            | TableError::RoundStillOpen
            | TableError::CannotCheck { .. }
            | TableError::BoardOverflow(_)
            | TableError::IncompleteShowdown(_)
            | TableError::AlreadyActed(_) => ErrorKind::IllegalState,
            TableError::DuplicatePlayer(_)
            | TableError::UnknownPlayer(_)
            | TableError::NothingToCall(_)
            | TableError::NonPositiveRaise
            | TableError::NoChips(_)
            | TableError::InsufficientBankroll { .. }
            | TableError::InvalidBlinds { .. }
            | TableError::InvalidCardsPerPlayer(_)
            | TableError::TooManyHoleCards { .. }
            | TableError::InvalidConfig(_) => ErrorKind::IllegalArgument,
            TableError::Card(PokerError::DeckExhausted { .. }) => ErrorKind::IllegalState,
            TableError::Card(_) => ErrorKind::IllegalArgument,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Card, Suit, Value};

    #[test]
    fn test_kinds() {
        assert_eq!(ErrorKind::IllegalState, TableError::RoundClosed.kind());
        assert_eq!(
            ErrorKind::IllegalArgument,
            TableError::NonPositiveRaise.kind()
        );
        assert_eq!(
            ErrorKind::IllegalArgument,
            TableError::from(PokerError::DuplicateCard(Card::new(Value::Ace, Suit::Club))).kind()
        );
        assert_eq!(
            ErrorKind::IllegalState,
            TableError::from(PokerError::DeckExhausted {
                requested: 2,
                available: 1
            })
            .kind()
        );
    }

    #[test]
    fn test_display() {
        let err = TableError::InsufficientBankroll {
            player: PlayerId(3),
            needed: 50,
            bankroll: 10,
        };
        assert_eq!(
            "Player P3 needs 50 chips but only has 10",
            err.to_string()
        );
    }
}
