use std::collections::HashSet;
use std::fmt;

use rand::{SeedableRng, rngs::StdRng};
use tracing::{event, trace_span};

use crate::arena::SimulationError;
use crate::core::{Card, PokerError};
use crate::table::{HandSeed, PlayerId, PokerTable, Table, TableConfig};

/// The most players a single deck can deal two hole cards to and still
/// complete the board.
pub const MAX_EQUITY_PLAYERS: usize = (52 - 5) / 2;

const HERO: PlayerId = PlayerId(0);

/// Tally of simulated showdowns from the hero's point of view.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquityResult {
    pub wins: usize,
    pub ties: usize,
    pub losses: usize,
    /// Sum of `1 / k` over every `k` way tie the hero was part of.
    pub tie_share: f64,
    pub simulations: usize,
}

impl EquityResult {
    /// Expected share of the pot.
    pub fn equity(&self) -> f64 {
        if self.simulations == 0 {
            return 0.0;
        }
        (self.wins as f64 + self.tie_share) / self.simulations as f64
    }

    pub fn merge(&mut self, other: &EquityResult) {
        self.wins += other.wins;
        self.ties += other.ties;
        self.losses += other.losses;
        self.tie_share += other.tie_share;
        self.simulations += other.simulations;
    }

    fn record(&mut self, winners: &[PlayerId]) {
        self.simulations += 1;
        if !winners.contains(&HERO) {
            self.losses += 1;
        } else if winners.len() == 1 {
            self.wins += 1;
        } else {
            self.ties += 1;
            self.tie_share += 1.0 / winners.len() as f64;
        }
    }
}

type ProgressFn = Box<dyn FnMut(usize, usize) + Send>;

/// Monte Carlo estimate of how often a hand wins against random opponents.
///
/// Every simulation plays a hand out on a fresh [`Table`] with no betting:
/// the hero's hole cards and the known board are seeded, everything else is
/// dealt from that table's shuffled deck, and the best hand wins. Each table
/// gets its own rng seeded from the evaluator's, so a seeded evaluator is
/// reproducible.
///
/// ```
/// use holdem_engine::core::Card;
/// use holdem_engine::holdem::EquityEvaluator;
///
/// let hero = Card::parse_many("AsAc").unwrap();
/// let mut evaluator = EquityEvaluator::with_seed(42);
/// let equity = evaluator.evaluate(2, &hero, &[], 500).unwrap();
/// assert!(equity > 0.75);
/// ```
pub struct EquityEvaluator {
    rng: StdRng,
    config: TableConfig,
    progress: ProgressFn,
}

impl EquityEvaluator {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            config: TableConfig {
                cards_per_player: 2,
                ..TableConfig::default()
            },
            progress: Box::new(|_, _| {}),
        }
    }

    /// Called with `(index, total)` after every simulation.
    pub fn on_progress(mut self, progress: impl FnMut(usize, usize) + Send + 'static) -> Self {
        self.progress = Box::new(progress);
        self
    }

    /// Equity of `hero` against `num_players - 1` random hands. A lone
    /// player is certain to win, no simulations needed.
    pub fn evaluate(
        &mut self,
        num_players: usize,
        hero: &[Card],
        board: &[Card],
        num_simulations: usize,
    ) -> Result<f64, SimulationError> {
        if num_players == 1 {
            validate_hand(num_players, hero, board)?;
            return Ok(1.0);
        }
        Ok(self
            .estimate(num_players, hero, board, num_simulations)?
            .equity())
    }

    /// Like [`EquityEvaluator::evaluate`] but returns the whole tally.
    pub fn estimate(
        &mut self,
        num_players: usize,
        hero: &[Card],
        board: &[Card],
        num_simulations: usize,
    ) -> Result<EquityResult, SimulationError> {
        validate(num_players, hero, board, num_simulations)?;
        if num_players == 1 {
            return Ok(uncontested(num_simulations));
        }

        let span = trace_span!("equity", num_players, num_simulations);
        let _enter = span.enter();

        let seed = hand_seed(hero, board);
        let mut result = EquityResult::default();
        for idx in 0..num_simulations {
            let mut table = Table::with_rng(self.config.clone(), StdRng::from_rng(&mut self.rng))?;
            table.seat_players(num_players)?;
            let winners = play_out(&mut table, &seed)?;
            result.record(&winners);
            (self.progress)(idx, num_simulations);
        }

        event!(
            tracing::Level::DEBUG,
            equity = result.equity(),
            wins = result.wins,
            ties = result.ties,
            losses = result.losses,
            "Estimated equity"
        );
        Ok(result)
    }

    /// Split the simulations into chunks run on rayon's pool. Each chunk
    /// gets one table and one rng seeded from the evaluator's rng.
    /// `on_progress` gets `(index, total)` after every simulation, from
    /// whichever worker ran it. Indexes count completions so they arrive
    /// roughly but not strictly in order.
    #[cfg(feature = "rayon")]
    pub fn evaluate_parallel(
        &mut self,
        num_players: usize,
        hero: &[Card],
        board: &[Card],
        num_simulations: usize,
        on_progress: impl Fn(usize, usize) + Sync + Send,
    ) -> Result<EquityResult, SimulationError> {
        use std::sync::atomic::{AtomicUsize, Ordering};

        use rand::Rng;
        use rayon::prelude::*;

        validate(num_players, hero, board, num_simulations)?;
        if num_players == 1 {
            return Ok(uncontested(num_simulations));
        }

        let num_chunks = rayon::current_num_threads().clamp(1, num_simulations);
        let chunk_size = num_simulations / num_chunks;
        let remainder = num_simulations % num_chunks;
        let chunks: Vec<(u64, usize)> = (0..num_chunks)
            .map(|i| (self.rng.random(), chunk_size + usize::from(i < remainder)))
            .collect();

        let seed = hand_seed(hero, board);
        let done = AtomicUsize::new(0);
        let config = &self.config;

        let results: Vec<EquityResult> = chunks
            .par_iter()
            .map(|&(rng_seed, count)| -> Result<EquityResult, SimulationError> {
                let mut table = Table::with_seed(config.clone(), rng_seed)?;
                table.seat_players(num_players)?;
                let mut result = EquityResult::default();
                for _ in 0..count {
                    let winners = play_out(&mut table, &seed)?;
                    result.record(&winners);
                    let idx = done.fetch_add(1, Ordering::Relaxed);
                    on_progress(idx, num_simulations);
                }
                Ok(result)
            })
            .collect::<Result<_, SimulationError>>()?;

        let mut total = EquityResult::default();
        for result in &results {
            total.merge(result);
        }
        Ok(total)
    }
}

impl Default for EquityEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EquityEvaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EquityEvaluator")
            .field("config", &self.config)
            .finish()
    }
}

fn validate(
    num_players: usize,
    hero: &[Card],
    board: &[Card],
    num_simulations: usize,
) -> Result<(), SimulationError> {
    validate_hand(num_players, hero, board)?;
    if num_simulations == 0 {
        return Err(SimulationError::NoSimulations);
    }
    Ok(())
}

/// Everything but the simulation count.
fn validate_hand(num_players: usize, hero: &[Card], board: &[Card]) -> Result<(), SimulationError> {
    if num_players == 0 || num_players > MAX_EQUITY_PLAYERS {
        return Err(SimulationError::InvalidPlayerCount(num_players));
    }
    if hero.len() != 2 {
        return Err(SimulationError::InvalidHeroCards(hero.len()));
    }
    if board.len() > 5 {
        return Err(SimulationError::InvalidBoard(board.len()));
    }
    let mut seen = HashSet::with_capacity(7);
    for card in hero.iter().chain(board.iter()) {
        if !seen.insert(*card) {
            return Err(PokerError::DuplicateCard(*card).into());
        }
    }
    Ok(())
}

fn uncontested(num_simulations: usize) -> EquityResult {
    EquityResult {
        wins: num_simulations,
        simulations: num_simulations,
        ..EquityResult::default()
    }
}

fn hand_seed(hero: &[Card], board: &[Card]) -> HandSeed {
    HandSeed::default()
        .with_hole_cards(HERO, hero.to_vec())
        .with_community_cards(board.to_vec())
}

/// Deal one hand to the river and return who won. Leaves the table ready for
/// another hand.
fn play_out(table: &mut Table, seed: &HandSeed) -> Result<Vec<PlayerId>, SimulationError> {
    table.start_new_hand_with_seed(seed)?;
    table.deal_community_cards(5 - seed.community_cards.len())?;
    Ok(table.conclude_round()?.winners)
}
