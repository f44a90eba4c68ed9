use crate::core::{Card, PlayerBitSet};

use super::config::TableConfig;
use super::errors::TableError;
use super::player::{Player, PlayerId};
use super::state::HandSeed;
use super::summary::RoundSummary;
use super::turn::Phase;

/// Read only access to everything observable about a table.
///
/// Strategies only ever see a table through this trait, it has no way to
/// change the table.
pub trait TableView {
    fn config(&self) -> &TableConfig;
    /// Players in seat order.
    fn players(&self) -> &[Player];
    fn dealer_index(&self) -> usize;
    fn hand_in_progress(&self) -> bool;
    /// Seats that haven't folded this hand.
    fn active_seats(&self) -> PlayerBitSet;
    /// Chips the seat has put in the pot this hand.
    fn seat_contribution(&self, seat: usize) -> u64;
    /// Chips the seat has put in on the current street.
    fn seat_round_bet(&self, seat: usize) -> u64;
    fn seat_hole_cards(&self, seat: usize) -> &[Card];
    /// The amount every active player has to match on this street.
    fn current_bet(&self) -> u64;
    fn community_cards(&self) -> &[Card];
    fn phase(&self) -> Option<Phase>;
    /// Cards left to deal.
    fn deck_len(&self) -> usize;

    fn num_players(&self) -> usize {
        self.players().len()
    }

    fn seat_of(&self, id: PlayerId) -> Option<usize> {
        self.players().iter().position(|p| p.id() == id)
    }

    fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players().iter().find(|p| p.id() == id)
    }

    fn bankroll(&self, id: PlayerId) -> Option<u64> {
        self.player(id).map(Player::bankroll)
    }

    fn is_active(&self, id: PlayerId) -> bool {
        self.seat_of(id)
            .is_some_and(|seat| self.active_seats().get(seat))
    }

    fn num_active_players(&self) -> usize {
        self.active_seats().count()
    }

    /// Ids of the players that haven't folded, in seat order.
    fn active_players(&self) -> Vec<PlayerId> {
        let players = self.players();
        self.active_seats()
            .ones()
            .filter_map(|seat| players.get(seat).map(Player::id))
            .collect()
    }

    fn contribution(&self, id: PlayerId) -> u64 {
        self.seat_of(id)
            .map_or(0, |seat| self.seat_contribution(seat))
    }

    fn round_bet(&self, id: PlayerId) -> u64 {
        self.seat_of(id).map_or(0, |seat| self.seat_round_bet(seat))
    }

    fn hole_cards(&self, id: PlayerId) -> &[Card] {
        match self.seat_of(id) {
            Some(seat) => self.seat_hole_cards(seat),
            None => &[],
        }
    }

    /// Everything in the pot this hand.
    fn pot_total(&self) -> u64 {
        (0..self.num_players())
            .map(|seat| self.seat_contribution(seat))
            .sum()
    }

    /// Chips the player needs to put in to call.
    fn to_call(&self, id: PlayerId) -> u64 {
        self.current_bet().saturating_sub(self.round_bet(id))
    }
}

/// The primitive actions of a betting table. Every operation validates
/// before it changes anything, so an `Err` means nothing happened.
pub trait PokerTable: TableView {
    fn add_player(&mut self, player: Player) -> Result<(), TableError>;
    fn remove_player(&mut self, id: PlayerId) -> Result<Player, TableError>;
    fn start_new_hand_with_seed(&mut self, seed: &HandSeed) -> Result<(), TableError>;
    fn deal_community_cards(&mut self, amount: usize) -> Result<Vec<Card>, TableError>;
    fn burn_cards(&mut self, amount: usize) -> Result<(), TableError>;
    fn fold(&mut self, id: PlayerId) -> Result<(), TableError>;
    /// Returns the chips the call cost.
    fn call(&mut self, id: PlayerId) -> Result<u64, TableError>;
    /// Raise the current bet by `amount`. Returns the chips it cost.
    fn raise(&mut self, id: PlayerId, amount: u64) -> Result<u64, TableError>;
    fn check(&mut self, id: PlayerId) -> Result<(), TableError>;
    fn conclude_round(&mut self) -> Result<RoundSummary, TableError>;
    /// Abandon any hand in progress. Chips in the pot go back to the
    /// players that put them in.
    fn reset(&mut self);

    fn start_new_hand(&mut self) -> Result<(), TableError> {
        self.start_new_hand_with_seed(&HandSeed::default())
    }
}
