use thiserror::Error;

use crate::core::PokerError;
use crate::table::{ErrorKind, PlayerId, TableError};

/// Failures while simulating hands or estimating equity. Any failure
/// aborts the whole batch, nothing is retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    #[error("Table error: {0}")]
    Table(#[from] TableError),
    #[error("Card error: {0}")]
    Card(#[from] PokerError),
    #[error("No strategy for player {0}")]
    MissingStrategy(PlayerId),
    #[error("Strategy for player {0} returned without acting")]
    NoActionTaken(PlayerId),
    #[error("Need players to build a simulation")]
    NeedPlayers,
    #[error("Number of simulations must be positive")]
    NoSimulations,
    #[error("Expected two hero hole cards, got {0}")]
    InvalidHeroCards(usize),
    #[error("Can't simulate {0} players")]
    InvalidPlayerCount(usize),
    #[error("The board can hold five cards, got {0}")]
    InvalidBoard(usize),
}

impl SimulationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SimulationError::Table(e) => e.kind(),
            SimulationError::Card(e) => TableError::from(e.clone()).kind(),
            SimulationError::NoActionTaken(_) => ErrorKind::IllegalState,
            SimulationError::MissingStrategy(_)
            | SimulationError::NeedPlayers
            | SimulationError::NoSimulations
            | SimulationError::InvalidHeroCards(_)
            | SimulationError::InvalidPlayerCount(_)
            | SimulationError::InvalidBoard(_) => ErrorKind::IllegalArgument,
        }
    }
}
