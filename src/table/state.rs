use std::collections::BTreeMap;
use std::fmt;

use rand::{SeedableRng, rngs::StdRng};
use tracing::event;

use crate::core::{Card, Deck, HandRank, MAX_SEATS, PlayerBitSet, PokerError, Rankable, best_hands};

use super::config::TableConfig;
use super::errors::TableError;
use super::player::{Player, PlayerId};
use super::summary::RoundSummary;
use super::turn::Phase;
use super::view::{PokerTable, TableView};

/// Cards fixed ahead of the deal: a known hero hand, a known board, or both.
/// Everything not fixed here is dealt from a freshly shuffled deck.
///
/// ```
/// use holdem_engine::core::Card;
/// use holdem_engine::table::{HandSeed, PlayerId};
///
/// let seed = HandSeed::default()
///     .with_hole_cards(PlayerId(0), Card::parse_many("AsAc").unwrap())
///     .with_community_cards(Card::parse_many("2d7hKs").unwrap());
/// assert_eq!(3, seed.community_cards.len());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandSeed {
    pub hole_cards: Vec<(PlayerId, Vec<Card>)>,
    pub community_cards: Vec<Card>,
    /// Overrides the table's configured cards per player for this hand.
    pub cards_per_player: Option<usize>,
}

impl HandSeed {
    pub fn with_hole_cards(mut self, id: PlayerId, cards: Vec<Card>) -> Self {
        self.hole_cards.push((id, cards));
        self
    }

    pub fn with_community_cards(mut self, cards: Vec<Card>) -> Self {
        self.community_cards = cards;
        self
    }

    pub fn with_cards_per_player(mut self, cards_per_player: usize) -> Self {
        self.cards_per_player = Some(cards_per_player);
        self
    }
}

/// The betting table state machine.
///
/// A table is created once and reused for many hands. Players and their
/// bankrolls live across hands; everything else (hole cards, pot, the
/// street's bets, the board and the deck) belongs to the hand in progress
/// and is cleared when the hand is concluded.
///
/// All the per seat state is indexed by seat. Seats can only change between
/// hands so an index stays valid for the whole hand.
#[derive(Clone)]
pub struct Table {
    config: TableConfig,
    players: Vec<Player>,
    /// Which players haven't folded.
    active: PlayerBitSet,
    /// Chips each seat has put in this hand.
    pot: Vec<u64>,
    /// Chips each seat has put in on this street.
    round_bets: Vec<u64>,
    dealer_idx: usize,
    hole_cards: Vec<Vec<Card>>,
    community_cards: Vec<Card>,
    /// What everyone has to match on this street.
    current_bet: u64,
    deck: Deck,
    burned: usize,
    in_hand: bool,
    rng: StdRng,
}

impl Table {
    /// A table seeded from the operating system's randomness.
    pub fn new(config: TableConfig) -> Result<Self, TableError> {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// A table whose shuffles are reproducible.
    pub fn with_seed(config: TableConfig, seed: u64) -> Result<Self, TableError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(config: TableConfig, rng: StdRng) -> Result<Self, TableError> {
        config.validate()?;
        Ok(Self {
            config,
            players: vec![],
            active: PlayerBitSet::default(),
            pot: vec![],
            round_bets: vec![],
            dealer_idx: 0,
            hole_cards: vec![],
            community_cards: Vec::with_capacity(5),
            current_bet: 0,
            deck: Deck::empty(),
            burned: 0,
            in_hand: false,
            rng,
        })
    }

    /// Seat `num_players` players with ids `0..num_players`, each with the
    /// configured starting bankroll.
    pub fn seat_players(&mut self, num_players: usize) -> Result<(), TableError> {
        let start = self.players.len() as u32;
        for i in 0..num_players as u32 {
            self.add_player(Player::new(
                PlayerId(start + i),
                self.config.starting_bankroll,
            ))?;
        }
        Ok(())
    }

    /// Move the dealer button. Only between hands.
    pub fn set_dealer_index(&mut self, idx: usize) -> Result<(), TableError> {
        if self.in_hand {
            return Err(TableError::HandInProgress);
        }
        if idx >= self.players.len() {
            return Err(TableError::NotEnoughPlayers(self.players.len()));
        }
        self.dealer_idx = idx;
        Ok(())
    }

    /// Cards burned this hand.
    pub fn burned(&self) -> usize {
        self.burned
    }

    /// Validates that the player can act and returns their seat.
    fn acting_seat(&self, id: PlayerId) -> Result<usize, TableError> {
        if !self.in_hand {
            return Err(TableError::NoHandInProgress);
        }
        let seat = self.seat_of(id).ok_or(TableError::UnknownPlayer(id))?;
        if !self.active.get(seat) {
            return Err(TableError::PlayerNotActive(id));
        }
        Ok(seat)
    }

    fn start_betting_round(&mut self) {
        self.round_bets.iter_mut().for_each(|b| *b = 0);
        self.current_bet = 0;
    }

    fn clear_hand(&mut self) {
        let n = self.players.len();
        self.hole_cards = vec![vec![]; n];
        self.pot = vec![0; n];
        self.round_bets = vec![0; n];
        self.community_cards.clear();
        self.current_bet = 0;
        self.active = PlayerBitSet::default();
        self.deck = Deck::empty();
        self.burned = 0;
        self.in_hand = false;
    }

    /// Build the deck for a seeded hand, checking the seed as we go. Nothing
    /// on the table is touched.
    fn seeded_deck(&mut self, seed: &HandSeed, cards_per_player: usize) -> Result<Deck, TableError> {
        let mut deck = Deck::shuffled(&mut self.rng);
        let mut seeded_players = PlayerBitSet::default();
        let mut seeded_hole = 0;

        if seed.community_cards.len() > 5 {
            return Err(TableError::BoardOverflow(seed.community_cards.len()));
        }

        for (id, cards) in &seed.hole_cards {
            let seat = self.seat_of(*id).ok_or(TableError::UnknownPlayer(*id))?;
            if seeded_players.get(seat) {
                return Err(TableError::DuplicatePlayer(*id));
            }
            seeded_players.enable(seat);
            if cards.len() > cards_per_player {
                return Err(TableError::TooManyHoleCards {
                    player: *id,
                    count: cards.len(),
                });
            }
            seeded_hole += cards.len();
        }

        let seeded = seed
            .hole_cards
            .iter()
            .flat_map(|(_, cards)| cards.iter())
            .chain(seed.community_cards.iter());
        for card in seeded {
            // A fresh deck has every card so a failed removal is a card
            // that was seeded twice.
            if !deck.remove(card) {
                return Err(PokerError::DuplicateCard(*card).into());
            }
        }

        let needed = self.players.len() * cards_per_player - seeded_hole;
        if needed > deck.len() {
            return Err(PokerError::DeckExhausted {
                requested: needed,
                available: deck.len(),
            }
            .into());
        }
        Ok(deck)
    }

    /// Split the pot between the winners. Odd chips go one at a time to the
    /// winners closest to the left of the dealer.
    fn payouts(&self, winners: &[usize], total: u64) -> BTreeMap<usize, u64> {
        let n = self.players.len();
        let mut ordered: Vec<usize> = winners.to_vec();
        ordered.sort_by_key(|seat| (seat + n - self.dealer_idx - 1) % n);

        let share = total / winners.len() as u64;
        let remainder = (total % winners.len() as u64) as usize;
        ordered
            .into_iter()
            .enumerate()
            .map(|(i, seat)| (seat, share + u64::from(i < remainder)))
            .collect()
    }

    fn showdown_winners(&self) -> Result<(Vec<usize>, Option<HandRank>), TableError> {
        let mut ranked = Vec::with_capacity(self.active.count());
        for seat in self.active.ones() {
            let mut cards = self.hole_cards[seat].clone();
            cards.extend_from_slice(&self.community_cards);
            if cards.len() < 5 {
                return Err(TableError::IncompleteShowdown(self.players[seat].id()));
            }
            ranked.push((seat, cards.rank()?));
        }
        Ok(best_hands(ranked))
    }
}

impl TableView for Table {
    fn config(&self) -> &TableConfig {
        &self.config
    }

    fn players(&self) -> &[Player] {
        &self.players
    }

    fn dealer_index(&self) -> usize {
        self.dealer_idx
    }

    fn hand_in_progress(&self) -> bool {
        self.in_hand
    }

    fn active_seats(&self) -> PlayerBitSet {
        self.active
    }

    fn seat_contribution(&self, seat: usize) -> u64 {
        self.pot.get(seat).copied().unwrap_or(0)
    }

    fn seat_round_bet(&self, seat: usize) -> u64 {
        self.round_bets.get(seat).copied().unwrap_or(0)
    }

    fn seat_hole_cards(&self, seat: usize) -> &[Card] {
        self.hole_cards.get(seat).map_or(&[], |cards| cards.as_slice())
    }

    fn current_bet(&self) -> u64 {
        self.current_bet
    }

    fn community_cards(&self) -> &[Card] {
        &self.community_cards
    }

    /// Without a turn controller the phase is read off the board size, so
    /// a hand seeded with a three card board reads as `Flop` before any
    /// betting. `TurnController` tracks the street itself.
    fn phase(&self) -> Option<Phase> {
        if !self.in_hand {
            return None;
        }
        Some(match self.community_cards.len() {
            0..=2 => Phase::Preflop,
            3 => Phase::Flop,
            4 => Phase::Turn,
            _ => Phase::River,
        })
    }

    fn deck_len(&self) -> usize {
        self.deck.len()
    }
}

impl PokerTable for Table {
    fn add_player(&mut self, player: Player) -> Result<(), TableError> {
        if self.in_hand {
            return Err(TableError::HandInProgress);
        }
        if self.players.len() >= MAX_SEATS {
            return Err(TableError::TableFull);
        }
        if self.seat_of(player.id()).is_some() {
            return Err(TableError::DuplicatePlayer(player.id()));
        }
        self.players.push(player);
        self.clear_hand();
        Ok(())
    }

    fn remove_player(&mut self, id: PlayerId) -> Result<Player, TableError> {
        if self.in_hand {
            return Err(TableError::HandInProgress);
        }
        let seat = self.seat_of(id).ok_or(TableError::UnknownPlayer(id))?;
        let player = self.players.remove(seat);
        if seat < self.dealer_idx {
            self.dealer_idx -= 1;
        }
        if self.dealer_idx >= self.players.len() {
            self.dealer_idx = 0;
        }
        self.clear_hand();
        Ok(player)
    }

    fn start_new_hand_with_seed(&mut self, seed: &HandSeed) -> Result<(), TableError> {
        if self.in_hand {
            return Err(TableError::HandInProgress);
        }
        let n = self.players.len();
        if n < 2 {
            return Err(TableError::NotEnoughPlayers(n));
        }
        let cards_per_player = seed.cards_per_player.unwrap_or(self.config.cards_per_player);
        if !(1..=2).contains(&cards_per_player) {
            return Err(TableError::InvalidCardsPerPlayer(cards_per_player));
        }

        let deck = self.seeded_deck(seed, cards_per_player)?;

        // Everything is validated, start changing things.
        self.clear_hand();
        self.deck = deck;
        self.active = PlayerBitSet::new(n);
        self.in_hand = true;
        for (id, cards) in &seed.hole_cards {
            if let Some(seat) = self.seat_of(*id) {
                self.hole_cards[seat] = cards.clone();
            }
        }
        self.community_cards = seed.community_cards.clone();

        // Deal one card at a time starting left of the dealer.
        for _ in 0..cards_per_player {
            for offset in 1..=n {
                let seat = (self.dealer_idx + offset) % n;
                if self.hole_cards[seat].len() < cards_per_player {
                    let card = self.deck.deal().ok_or(PokerError::DeckExhausted {
                        requested: 1,
                        available: 0,
                    })?;
                    self.hole_cards[seat].push(card);
                }
            }
        }

        event!(
            tracing::Level::DEBUG,
            dealer = self.dealer_idx,
            players = n,
            seeded_board = self.community_cards.len(),
            "Started new hand"
        );
        Ok(())
    }

    fn deal_community_cards(&mut self, amount: usize) -> Result<Vec<Card>, TableError> {
        if !self.in_hand {
            return Err(TableError::NoHandInProgress);
        }
        let board_size = self.community_cards.len() + amount;
        if board_size > 5 {
            return Err(TableError::BoardOverflow(board_size));
        }
        let cards = self.deck.deal_n(amount)?;
        self.community_cards.extend_from_slice(&cards);
        self.start_betting_round();
        event!(tracing::Level::TRACE, ?cards, "Dealt community cards");
        Ok(cards)
    }

    fn burn_cards(&mut self, amount: usize) -> Result<(), TableError> {
        if !self.in_hand {
            return Err(TableError::NoHandInProgress);
        }
        self.deck.burn(amount)?;
        self.burned += amount;
        Ok(())
    }

    fn fold(&mut self, id: PlayerId) -> Result<(), TableError> {
        let seat = self.acting_seat(id)?;
        if self.active.count() == 1 {
            return Err(TableError::LastActivePlayer(id));
        }
        self.active.disable(seat);
        event!(tracing::Level::TRACE, player = %id, "Fold");
        Ok(())
    }

    fn call(&mut self, id: PlayerId) -> Result<u64, TableError> {
        let seat = self.acting_seat(id)?;
        let owed = self.current_bet.saturating_sub(self.round_bets[seat]);
        if owed == 0 {
            return Err(TableError::NothingToCall(id));
        }
        self.players[seat].debit(owed)?;
        self.round_bets[seat] += owed;
        self.pot[seat] += owed;
        event!(tracing::Level::TRACE, player = %id, owed, "Call");
        Ok(owed)
    }

    fn raise(&mut self, id: PlayerId, amount: u64) -> Result<u64, TableError> {
        let seat = self.acting_seat(id)?;
        if amount == 0 {
            return Err(TableError::NonPositiveRaise);
        }
        let target = self.current_bet.saturating_add(amount);
        let delta = target - self.round_bets[seat];
        self.players[seat].debit(delta)?;
        self.round_bets[seat] = target;
        self.pot[seat] += delta;
        self.current_bet = target;
        event!(tracing::Level::TRACE, player = %id, amount, target, "Raise");
        Ok(delta)
    }

    fn check(&mut self, id: PlayerId) -> Result<(), TableError> {
        let seat = self.acting_seat(id)?;
        let owed = self.current_bet.saturating_sub(self.round_bets[seat]);
        if owed > 0 {
            return Err(TableError::CannotCheck { player: id, owed });
        }
        event!(tracing::Level::TRACE, player = %id, "Check");
        Ok(())
    }

    fn conclude_round(&mut self) -> Result<RoundSummary, TableError> {
        if !self.in_hand {
            return Err(TableError::NoHandInProgress);
        }

        let (winner_seats, winning_rank) = if self.active.count() == 1 {
            (self.active.ones().collect(), None)
        } else {
            self.showdown_winners()?
        };

        let total_pot: u64 = self.pot.iter().sum();
        let payouts = self.payouts(&winner_seats, total_pot);
        for (seat, amount) in &payouts {
            self.players[*seat].credit(*amount);
        }

        let id_at = |seat: usize| self.players[seat].id();
        let summary = RoundSummary {
            community_cards: self.community_cards.clone(),
            hole_cards: self
                .hole_cards
                .iter()
                .enumerate()
                .map(|(seat, cards)| (id_at(seat), cards.clone()))
                .collect(),
            folded: (0..self.players.len())
                .filter(|seat| !self.active.get(*seat))
                .map(id_at)
                .collect(),
            contributions: self
                .pot
                .iter()
                .enumerate()
                .map(|(seat, chips)| (id_at(seat), *chips))
                .collect(),
            total_pot,
            winners: winner_seats.iter().map(|seat| id_at(*seat)).collect(),
            payouts: payouts
                .iter()
                .map(|(seat, amount)| (id_at(*seat), *amount))
                .collect(),
            winning_rank,
        };

        event!(
            tracing::Level::DEBUG,
            total_pot,
            winners = ?summary.winners,
            "Concluded hand"
        );

        self.dealer_idx = (self.dealer_idx + 1) % self.players.len();
        self.clear_hand();
        Ok(summary)
    }

    fn reset(&mut self) {
        if self.in_hand {
            for (player, chips) in self.players.iter_mut().zip(self.pot.iter()) {
                player.credit(*chips);
            }
        }
        self.clear_hand();
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("config", &self.config)
            .field("players", &self.players)
            .field("active", &self.active)
            .field("pot", &self.pot)
            .field("round_bets", &self.round_bets)
            .field("dealer_idx", &self.dealer_idx)
            .field("hole_cards", &self.hole_cards)
            .field("community_cards", &self.community_cards)
            .field("current_bet", &self.current_bet)
            .field("deck_len", &self.deck.len())
            .field("in_hand", &self.in_hand)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::core::Category;
    use crate::table::ErrorKind;

    fn table(num_players: usize) -> Table {
        let mut table = Table::with_seed(TableConfig::default(), 420).unwrap();
        table.seat_players(num_players).unwrap();
        table
    }

    fn cards(s: &str) -> Vec<Card> {
        Card::parse_many(s).unwrap()
    }

    #[test_log::test]
    fn test_start_deals_everyone() {
        let mut t = table(4);
        t.start_new_hand().unwrap();
        assert!(t.hand_in_progress());
        assert_eq!(4, t.num_active_players());
        for seat in 0..4 {
            assert_eq!(2, t.seat_hole_cards(seat).len());
        }
        assert_eq!(52 - 8, t.deck_len());
        assert_eq!(0, t.pot_total());
        assert_eq!(Some(Phase::Preflop), t.phase());
    }

    #[test_log::test]
    fn test_no_card_dealt_twice() {
        let mut t = table(6);
        t.start_new_hand().unwrap();
        t.burn_cards(1).unwrap();
        t.deal_community_cards(3).unwrap();
        t.burn_cards(1).unwrap();
        t.deal_community_cards(1).unwrap();
        t.burn_cards(1).unwrap();
        t.deal_community_cards(1).unwrap();

        let mut seen = HashSet::new();
        for seat in 0..6 {
            for c in t.seat_hole_cards(seat) {
                assert!(seen.insert(*c));
            }
        }
        for c in t.community_cards() {
            assert!(seen.insert(*c));
        }
        assert_eq!(52 - (12 + 5 + 3), t.deck_len());
        assert_eq!(3, t.burned());
    }

    #[test_log::test]
    fn test_seeded_cards_are_removed_from_deck() {
        let mut t = table(3);
        let hero = cards("AsAc");
        let board = cards("AhAd2c");
        let seed = HandSeed::default()
            .with_hole_cards(PlayerId(1), hero.clone())
            .with_community_cards(board.clone());
        t.start_new_hand_with_seed(&seed).unwrap();

        assert_eq!(hero.as_slice(), t.hole_cards(PlayerId(1)));
        assert_eq!(board.as_slice(), t.community_cards());
        // The bare table only knows the street by the board.
        assert_eq!(Some(Phase::Flop), t.phase());
        // 52 - 5 seeded - 4 dealt to the other two players
        assert_eq!(43, t.deck_len());
        for seat in [0, 2] {
            for c in t.seat_hole_cards(seat) {
                assert!(!hero.contains(c));
                assert!(!board.contains(c));
            }
        }
    }

    #[test_log::test]
    fn test_bad_seeds_change_nothing() {
        let mut t = table(2);
        let dup = HandSeed::default()
            .with_hole_cards(PlayerId(0), cards("AsAc"))
            .with_community_cards(cards("As2d3d"));
        let err = t.start_new_hand_with_seed(&dup).unwrap_err();
        assert_eq!(ErrorKind::IllegalArgument, err.kind());
        assert!(!t.hand_in_progress());

        let unknown = HandSeed::default().with_hole_cards(PlayerId(9), cards("AsAc"));
        assert_eq!(
            Err(TableError::UnknownPlayer(PlayerId(9))),
            t.start_new_hand_with_seed(&unknown)
        );

        let too_many = HandSeed::default().with_hole_cards(PlayerId(0), cards("AsAcAd"));
        assert_eq!(
            Err(TableError::TooManyHoleCards {
                player: PlayerId(0),
                count: 3
            }),
            t.start_new_hand_with_seed(&too_many)
        );
    }

    #[test_log::test]
    fn test_seat_changes_only_between_hands() {
        let mut t = table(3);
        t.start_new_hand().unwrap();
        assert_eq!(
            Err(TableError::HandInProgress),
            t.add_player(Player::new(PlayerId(7), 100))
        );
        assert_eq!(Err(TableError::HandInProgress), t.remove_player(PlayerId(0)).map(|_| ()));
        t.reset();

        t.add_player(Player::new(PlayerId(7), 100)).unwrap();
        assert_eq!(
            Err(TableError::DuplicatePlayer(PlayerId(7))),
            t.add_player(Player::new(PlayerId(7), 100))
        );
        let removed = t.remove_player(PlayerId(0)).unwrap();
        assert_eq!(PlayerId(0), removed.id());
        assert_eq!(3, t.num_players());
    }

    #[test_log::test]
    fn test_need_two_players() {
        let mut t = table(1);
        assert_eq!(Err(TableError::NotEnoughPlayers(1)), t.start_new_hand());
    }

    #[test_log::test]
    fn test_call_matches_current_bet() {
        let mut t = table(3);
        t.start_new_hand().unwrap();
        t.raise(PlayerId(0), 50).unwrap();
        assert_eq!(50, t.current_bet());

        let prior = t.current_bet();
        let owed = t.call(PlayerId(1)).unwrap();
        assert_eq!(50, owed);
        assert_eq!(prior, t.round_bet(PlayerId(1)));
        assert_eq!(Some(950), t.bankroll(PlayerId(1)));
        assert_eq!(100, t.pot_total());
    }

    #[test_log::test]
    fn test_raise_adds_to_current_bet() {
        let mut t = table(3);
        t.start_new_hand().unwrap();
        t.raise(PlayerId(0), 20).unwrap();
        let old = t.current_bet();
        // Player one owes 20 and raises 30 more.
        let delta = t.raise(PlayerId(1), 30).unwrap();
        assert_eq!(old + 30, t.current_bet());
        assert_eq!(50, delta);
        assert_eq!(30, t.to_call(PlayerId(0)));
    }

    #[test_log::test]
    fn test_illegal_actions_change_nothing() {
        let mut t = table(3);
        assert_eq!(Err(TableError::NoHandInProgress), t.check(PlayerId(0)));
        t.start_new_hand().unwrap();

        assert_eq!(Err(TableError::NothingToCall(PlayerId(0))), t.call(PlayerId(0)));
        assert_eq!(Err(TableError::NonPositiveRaise), t.raise(PlayerId(0), 0).map(|_| ()));
        assert_eq!(
            Err(TableError::InsufficientBankroll {
                player: PlayerId(0),
                needed: 1_001,
                bankroll: 1_000
            }),
            t.raise(PlayerId(0), 1_001).map(|_| ())
        );
        assert_eq!(0, t.pot_total());
        assert_eq!(0, t.current_bet());

        t.raise(PlayerId(0), 10).unwrap();
        assert_eq!(
            Err(TableError::CannotCheck {
                player: PlayerId(1),
                owed: 10
            }),
            t.check(PlayerId(1))
        );
        assert_eq!(
            ErrorKind::IllegalState,
            t.check(PlayerId(1)).unwrap_err().kind()
        );

        t.fold(PlayerId(2)).unwrap();
        assert_eq!(Err(TableError::PlayerNotActive(PlayerId(2))), t.fold(PlayerId(2)));
        assert_eq!(Err(TableError::PlayerNotActive(PlayerId(2))), t.call(PlayerId(2)).map(|_| ()));
        assert_eq!(Err(TableError::UnknownPlayer(PlayerId(42))), t.check(PlayerId(42)));
        assert!(!t.active_players().contains(&PlayerId(2)));
    }

    #[test_log::test]
    fn test_call_short_is_rejected() {
        let mut t = table(2);
        t.remove_player(PlayerId(1)).unwrap();
        t.add_player(Player::new(PlayerId(1), 30)).unwrap();
        t.start_new_hand().unwrap();
        t.raise(PlayerId(0), 100).unwrap();
        assert_eq!(
            Err(TableError::InsufficientBankroll {
                player: PlayerId(1),
                needed: 100,
                bankroll: 30
            }),
            t.call(PlayerId(1)).map(|_| ())
        );
        assert_eq!(Some(30), t.bankroll(PlayerId(1)));
    }

    #[test_log::test]
    fn test_dealing_starts_a_new_round() {
        let mut t = table(2);
        t.start_new_hand().unwrap();
        t.raise(PlayerId(0), 40).unwrap();
        t.call(PlayerId(1)).unwrap();
        t.deal_community_cards(3).unwrap();
        assert_eq!(0, t.current_bet());
        assert_eq!(0, t.round_bet(PlayerId(0)));
        assert_eq!(80, t.pot_total());
        t.check(PlayerId(0)).unwrap();

        t.deal_community_cards(2).unwrap();
        assert_eq!(Err(TableError::BoardOverflow(6)), t.deal_community_cards(1).map(|_| ()));
    }

    #[test_log::test]
    fn test_last_player_wins_uncontested() {
        let mut t = table(3);
        t.start_new_hand().unwrap();
        t.raise(PlayerId(0), 30).unwrap();
        t.fold(PlayerId(1)).unwrap();
        t.fold(PlayerId(2)).unwrap();
        assert_eq!(
            Err(TableError::LastActivePlayer(PlayerId(0))),
            t.fold(PlayerId(0))
        );

        let summary = t.conclude_round().unwrap();
        assert_eq!(vec![PlayerId(0)], summary.winners);
        assert_eq!(None, summary.winning_rank);
        assert_eq!(30, summary.total_pot);
        assert_eq!(vec![PlayerId(1), PlayerId(2)], summary.folded);
        assert_eq!(Some(1_000), t.bankroll(PlayerId(0)));
        assert!(!t.hand_in_progress());
        assert_eq!(1, t.dealer_index());
    }

    #[test_log::test]
    fn test_showdown_pays_best_hand() {
        let mut t = table(3);
        let seed = HandSeed::default()
            .with_hole_cards(PlayerId(0), cards("AsAc"))
            .with_hole_cards(PlayerId(1), cards("KsKc"))
            .with_hole_cards(PlayerId(2), cards("2h7d"))
            .with_community_cards(cards("Ad9h5c3sJd"));
        t.start_new_hand_with_seed(&seed).unwrap();
        t.raise(PlayerId(0), 100).unwrap();
        t.call(PlayerId(1)).unwrap();
        t.fold(PlayerId(2)).unwrap();

        let summary = t.conclude_round().unwrap();
        assert_eq!(vec![PlayerId(0)], summary.winners);
        assert_eq!(Category::ThreeOfAKind, summary.winning_rank.as_ref().unwrap().category);
        assert_eq!(200, summary.total_pot);
        assert_eq!(Some(&200), summary.payouts.get(&PlayerId(0)));
        assert_eq!(Some(1_100), t.bankroll(PlayerId(0)));
        assert_eq!(Some(900), t.bankroll(PlayerId(1)));
        assert_eq!(Some(1_000), t.bankroll(PlayerId(2)));
        assert_eq!(100, summary.net(PlayerId(0)));
        assert_eq!(-100, summary.net(PlayerId(1)));
    }

    #[test_log::test]
    fn test_split_pot_with_odd_chip() {
        let mut t = table(3);
        // Board plays, everyone still in ties.
        let seed = HandSeed::default()
            .with_hole_cards(PlayerId(0), cards("2c3d"))
            .with_hole_cards(PlayerId(1), cards("2d3c"))
            .with_hole_cards(PlayerId(2), cards("4c4d"))
            .with_community_cards(cards("AsKsQdJcTh"));
        t.start_new_hand_with_seed(&seed).unwrap();
        t.raise(PlayerId(0), 21).unwrap();
        t.call(PlayerId(1)).unwrap();
        t.raise(PlayerId(2), 1).unwrap();
        t.fold(PlayerId(0)).unwrap();
        t.call(PlayerId(1)).unwrap();

        let summary = t.conclude_round().unwrap();
        assert_eq!(vec![PlayerId(1), PlayerId(2)], summary.winners);
        assert_eq!(65, summary.total_pot);
        let paid: u64 = summary.payouts.values().sum();
        assert_eq!(summary.total_pot, paid);
        // Dealer is seat zero so seat one gets the odd chip.
        assert_eq!(Some(&33), summary.payouts.get(&PlayerId(1)));
        assert_eq!(Some(&32), summary.payouts.get(&PlayerId(2)));
        assert_eq!(Some(979), t.bankroll(PlayerId(0)));
    }

    #[test_log::test]
    fn test_showdown_needs_five_cards() {
        let mut t = table(2);
        t.start_new_hand().unwrap();
        assert_eq!(
            Err(TableError::IncompleteShowdown(PlayerId(0))),
            t.conclude_round().map(|_| ())
        );
        assert!(t.hand_in_progress());
    }

    #[test_log::test]
    fn test_reset_refunds() {
        let mut t = table(2);
        t.start_new_hand().unwrap();
        t.raise(PlayerId(0), 100).unwrap();
        t.reset();
        assert!(!t.hand_in_progress());
        assert_eq!(Some(1_000), t.bankroll(PlayerId(0)));
        assert_eq!(0, t.pot_total());
        assert!(t.community_cards().is_empty());
        assert!(t.hole_cards(PlayerId(0)).is_empty());
    }

    #[test_log::test]
    fn test_deal_starts_left_of_dealer() {
        let mut t = table(3);
        t.set_dealer_index(1).unwrap();
        let mut deck_order = t.clone();
        t.start_new_hand().unwrap();

        // Same rng, same shuffle. The first card off the deck goes to seat 2.
        let first = Deck::shuffled(&mut deck_order.rng).deal().unwrap();
        assert_eq!(first, t.seat_hole_cards(2)[0]);
    }
}
