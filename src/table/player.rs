use std::fmt;

use super::errors::TableError;

/// Stable identity of a player. Two players are the same player if and
/// only if their ids match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// A seated player and their chips.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    id: PlayerId,
    bankroll: u64,
}

impl Player {
    pub fn new(id: PlayerId, bankroll: u64) -> Self {
        Self { id, bankroll }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn bankroll(&self) -> u64 {
        self.bankroll
    }

    /// Out of chips. An all in player can't act again this hand.
    pub fn is_all_in(&self) -> bool {
        self.bankroll == 0
    }

    /// Take chips out of the bankroll. Never goes below zero; the debit is
    /// refused instead.
    pub fn debit(&mut self, amount: u64) -> Result<(), TableError> {
        match self.bankroll.checked_sub(amount) {
            Some(rest) => {
                self.bankroll = rest;
                Ok(())
            }
            None => Err(TableError::InsufficientBankroll {
                player: self.id,
                needed: amount,
                bankroll: self.bankroll,
            }),
        }
    }

    pub fn credit(&mut self, amount: u64) {
        self.bankroll += amount;
    }
}
