use tracing::event;

use crate::core::{Card, PlayerBitSet, PokerError};

use super::config::TableConfig;
use super::errors::TableError;
use super::player::{Player, PlayerId};
use super::state::{HandSeed, Table};
use super::summary::RoundSummary;
use super::view::{PokerTable, TableView};

/// The streets of a hand, in the order they're played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Phase {
    pub fn advance(&self) -> Self {
        match *self {
            Phase::Preflop => Phase::Flop,
            Phase::Flop => Phase::Turn,
            Phase::Turn => Phase::River,
            Phase::River => Phase::Showdown,
            Phase::Showdown => Phase::Showdown,
        }
    }

    /// Community cards on the board once this street has been dealt.
    pub fn board_size(&self) -> usize {
        match *self {
            Phase::Preflop => 0,
            Phase::Flop => 3,
            Phase::Turn => 4,
            Phase::River | Phase::Showdown => 5,
        }
    }
}

/// What a player can do when it's their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Fold,
    Check,
    Call,
    /// Raise the current bet by this many chips.
    Raise(u64),
}

/// Enforces turn order on top of a table.
///
/// The controller posts the blinds, knows whose turn it is, notices when a
/// betting round is over and deals the next street. Everything that touches
/// chips or cards is delegated to the wrapped table.
///
/// ```
/// use holdem_engine::table::{Action, PlayerId, Table, TableConfig, TableView, TurnController};
///
/// let mut table = Table::with_seed(TableConfig::default(), 7).unwrap();
/// table.seat_players(3).unwrap();
/// let mut controller = TurnController::new(table);
/// controller.start_hand().unwrap();
///
/// // Dealer is seat 0, the blinds are seats 1 and 2.
/// assert_eq!(Some(PlayerId(0)), controller.current_player());
/// controller.player_action(PlayerId(0), Action::Fold).unwrap();
/// controller.player_action(PlayerId(1), Action::Fold).unwrap();
///
/// assert!(!controller.is_round_active());
/// let summary = controller.conclude_hand().unwrap();
/// assert_eq!(vec![PlayerId(2)], summary.winners);
/// ```
#[derive(Debug, Clone)]
pub struct TurnController<T = Table> {
    table: T,
    phase: Option<Phase>,
    /// Seat whose turn it is. `None` when no betting round is open.
    to_act: Option<usize>,
    /// Seats that have acted on the current street.
    acted: PlayerBitSet,
    big_blind_seat: usize,
    big_blind_acted: bool,
}

impl<T: PokerTable> TurnController<T> {
    pub fn new(table: T) -> Self {
        Self {
            table,
            phase: None,
            to_act: None,
            acted: PlayerBitSet::default(),
            big_blind_seat: 0,
            big_blind_acted: false,
        }
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    pub fn into_inner(self) -> T {
        self.table
    }

    pub fn start_hand(&mut self) -> Result<(), TableError> {
        self.start_hand_with_seed(&HandSeed::default())
    }

    /// Deal a new hand and post the blinds. Nothing changes unless the hand
    /// can be played through to the river.
    pub fn start_hand_with_seed(&mut self, seed: &HandSeed) -> Result<(), TableError> {
        if self.table.hand_in_progress() {
            return Err(TableError::HandInProgress);
        }
        let n = self.table.num_players();
        if n < 2 {
            return Err(TableError::NotEnoughPlayers(n));
        }

        let config = self.table.config().clone();
        let dealer = self.table.dealer_index();
        let sb_seat = (dealer + 1) % n;
        let bb_seat = (dealer + 2) % n;
        let players = self.table.players();
        // A seat with nothing behind would only freeroll at showdown.
        if let Some(broke) = players.iter().find(|p| p.bankroll() == 0) {
            return Err(TableError::NoChips(broke.id()));
        }
        let sb = Self::can_post(&players[sb_seat], config.small_blind)?;
        let bb = Self::can_post(&players[bb_seat], config.big_blind)?;

        let cards_per_player = seed.cards_per_player.unwrap_or(config.cards_per_player);
        let needed = Self::cards_needed(&config, n, cards_per_player);
        if needed > 52 {
            return Err(PokerError::DeckExhausted {
                requested: needed,
                available: 52,
            }
            .into());
        }

        self.table.start_new_hand_with_seed(seed)?;
        // The blinds are forced raises, the big blind tops up the small.
        self.table.raise(sb, config.small_blind)?;
        self.table
            .raise(bb, config.big_blind - config.small_blind)?;

        self.phase = Some(Phase::Preflop);
        self.acted.clear();
        self.big_blind_seat = bb_seat;
        // Posting everything closes the big blind's option.
        self.big_blind_acted = self.table.players()[bb_seat].is_all_in();
        self.to_act = self.next_to_act(dealer + 3);

        event!(
            tracing::Level::DEBUG,
            small_blind = %sb,
            big_blind = %bb,
            to_act = ?self.current_player(),
            "Posted blinds"
        );
        self.settle()
    }

    fn can_post(player: &Player, blind: u64) -> Result<PlayerId, TableError> {
        if player.bankroll() < blind {
            return Err(TableError::InsufficientBankroll {
                player: player.id(),
                needed: blind,
                bankroll: player.bankroll(),
            });
        }
        Ok(player.id())
    }

    /// Worst case cards a full hand uses: every hole card, the whole board
    /// and the burns.
    fn cards_needed(config: &TableConfig, num_players: usize, cards_per_player: usize) -> usize {
        let burns = if config.burn_before_street { 3 } else { 0 };
        num_players * cards_per_player + 5 + burns
    }

    /// Apply an action for the player whose turn it is.
    pub fn player_action(&mut self, player: PlayerId, action: Action) -> Result<(), TableError> {
        if !self.table.hand_in_progress() {
            return Err(TableError::NoHandInProgress);
        }
        let seat = self.to_act.ok_or(TableError::RoundClosed)?;
        let expected = self.table.players()[seat].id();
        if player != expected {
            return Err(TableError::NotPlayersTurn {
                player,
                expected: Some(expected),
            });
        }

        match action {
            Action::Fold => self.table.fold(player)?,
            Action::Check => self.table.check(player)?,
            Action::Call => {
                self.table.call(player)?;
            }
            Action::Raise(amount) => {
                self.table.raise(player, amount)?;
            }
        }

        self.acted.enable(seat);
        if seat == self.big_blind_seat {
            self.big_blind_acted = true;
        }
        self.to_act = self.next_to_act(seat + 1);
        self.settle()
    }

    /// Is some player being waited on?
    pub fn is_round_active(&self) -> bool {
        self.to_act.is_some()
    }

    pub fn current_player(&self) -> Option<PlayerId> {
        self.to_act
            .and_then(|seat| self.table.players().get(seat))
            .map(Player::id)
    }

    pub fn big_blind_acted(&self) -> bool {
        self.big_blind_acted
    }

    /// Whether the current betting round has finished.
    pub fn round_complete(&self) -> bool {
        let active = self.table.active_seats();
        if active.count() <= 1 {
            return true;
        }
        let current_bet = self.table.current_bet();
        // Nobody left to bet against.
        let mut can_act = active.ones().filter(|seat| !self.is_all_in(*seat));
        let lone = can_act.next();
        if can_act.next().is_none()
            && lone.is_none_or(|seat| self.table.seat_round_bet(seat) >= current_bet)
        {
            return true;
        }
        if self.phase == Some(Phase::Preflop) && !self.big_blind_acted {
            return false;
        }
        active.ones().all(|seat| {
            self.is_all_in(seat)
                || (self.acted.get(seat) && self.table.seat_round_bet(seat) == current_bet)
        })
    }

    /// Pay out the hand once betting is over.
    pub fn conclude_hand(&mut self) -> Result<RoundSummary, TableError> {
        if !self.table.hand_in_progress() {
            return Err(TableError::NoHandInProgress);
        }
        if self.is_round_active() {
            return Err(TableError::RoundStillOpen);
        }
        let summary = self.table.conclude_round()?;
        self.clear();
        Ok(summary)
    }

    /// Throw the hand away and give everyone their chips back.
    pub fn abort_hand(&mut self) {
        self.table.reset();
        self.clear();
    }

    pub fn add_player(&mut self, player: Player) -> Result<(), TableError> {
        self.table.add_player(player)
    }

    pub fn remove_player(&mut self, id: PlayerId) -> Result<Player, TableError> {
        self.table.remove_player(id)
    }

    fn clear(&mut self) {
        self.phase = None;
        self.to_act = None;
        self.acted.clear();
        self.big_blind_acted = false;
    }

    fn is_all_in(&self, seat: usize) -> bool {
        self.table.players()[seat].is_all_in()
    }

    /// First seat starting at `from` that can still act.
    fn next_to_act(&self, from: usize) -> Option<usize> {
        let n = self.table.num_players();
        let active = self.table.active_seats();
        (0..n)
            .map(|offset| (from + offset) % n)
            .find(|seat| active.get(*seat) && !self.is_all_in(*seat))
    }

    /// Deal streets until someone has to act or the hand is over.
    fn settle(&mut self) -> Result<(), TableError> {
        loop {
            if self.table.num_active_players() <= 1 {
                // Uncontested, the rest of the board isn't dealt.
                self.phase = Some(Phase::Showdown);
                self.to_act = None;
                return Ok(());
            }
            if self.phase == Some(Phase::Showdown) {
                self.to_act = None;
                return Ok(());
            }
            if !self.round_complete() {
                return Ok(());
            }
            self.advance_street()?;
        }
    }

    fn advance_street(&mut self) -> Result<(), TableError> {
        let next = self.phase.unwrap_or(Phase::Preflop).advance();
        self.acted.clear();
        self.phase = Some(next);
        if next == Phase::Showdown {
            self.to_act = None;
            event!(tracing::Level::TRACE, "Betting complete");
            return Ok(());
        }

        // Seeded boards may already hold some of the street.
        let needed = next
            .board_size()
            .saturating_sub(self.table.community_cards().len());
        if needed > 0 && self.table.config().burn_before_street {
            self.table.burn_cards(1)?;
        }
        // Dealing nothing still starts a fresh betting round.
        self.table.deal_community_cards(needed)?;

        self.to_act = self.next_to_act(self.table.dealer_index() + 1);
        event!(
            tracing::Level::TRACE,
            phase = ?next,
            board = ?self.table.community_cards(),
            "Advanced street"
        );
        Ok(())
    }
}

impl<T: PokerTable> TableView for TurnController<T> {
    fn config(&self) -> &TableConfig {
        self.table.config()
    }

    fn players(&self) -> &[Player] {
        self.table.players()
    }

    fn dealer_index(&self) -> usize {
        self.table.dealer_index()
    }

    fn hand_in_progress(&self) -> bool {
        self.table.hand_in_progress()
    }

    fn active_seats(&self) -> PlayerBitSet {
        self.table.active_seats()
    }

    fn seat_contribution(&self, seat: usize) -> u64 {
        self.table.seat_contribution(seat)
    }

    fn seat_round_bet(&self, seat: usize) -> u64 {
        self.table.seat_round_bet(seat)
    }

    fn seat_hole_cards(&self, seat: usize) -> &[Card] {
        self.table.seat_hole_cards(seat)
    }

    fn current_bet(&self) -> u64 {
        self.table.current_bet()
    }

    fn community_cards(&self) -> &[Card] {
        self.table.community_cards()
    }

    fn phase(&self) -> Option<Phase> {
        self.phase
    }

    fn deck_len(&self) -> usize {
        self.table.deck_len()
    }
}
