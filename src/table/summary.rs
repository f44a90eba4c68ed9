use std::collections::BTreeMap;

use crate::core::{Card, HandRank};

use super::player::PlayerId;

/// What happened in one concluded hand. Built once when the hand is
/// concluded and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundSummary {
    /// The board at the end of the hand. Not completed when the hand ended
    /// before showdown.
    pub community_cards: Vec<Card>,
    /// Every player's hole cards, folded players included.
    pub hole_cards: BTreeMap<PlayerId, Vec<Card>>,
    /// Players that folded during the hand.
    pub folded: Vec<PlayerId>,
    /// Chips each player put in the pot.
    pub contributions: BTreeMap<PlayerId, u64>,
    pub total_pot: u64,
    pub winners: Vec<PlayerId>,
    /// Chips each winner took from the pot.
    pub payouts: BTreeMap<PlayerId, u64>,
    /// The winning rank when the hand went to showdown. `None` when
    /// everyone else folded.
    pub winning_rank: Option<HandRank>,
}

impl RoundSummary {
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winners.contains(&player)
    }

    /// Chips won minus chips contributed for this hand.
    pub fn net(&self, player: PlayerId) -> i64 {
        let paid = self.payouts.get(&player).copied().unwrap_or(0) as i64;
        let put_in = self.contributions.get(&player).copied().unwrap_or(0) as i64;
        paid - put_in
    }

    pub fn went_to_showdown(&self) -> bool {
        self.winning_rank.is_some()
    }
}
