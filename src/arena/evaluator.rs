use std::collections::{BTreeMap, VecDeque};
use std::fmt::Debug;

use tracing::{event, trace_span};

use crate::table::{PlayerId, RoundSummary, TableView};

use super::HandSimulation;
use super::errors::SimulationError;

/// Running totals for one player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerRecord {
    /// Hands won outright.
    pub wins: usize,
    /// Hands where the pot was split with this player in it.
    pub draws: usize,
    /// Hands this player didn't win any of.
    pub losses: usize,
    /// Chips won minus chips put in, over every hand.
    pub bankroll_delta: i64,
}

/// A struct to help seeing which strategy is likely to do well.
///
/// Every hand is played at the same table with the same strategies, so
/// bankrolls carry over and compound. Evaluation stops early once some
/// seat can't post a big blind.
pub struct StrategyEvaluator {
    simulation: HandSimulation,
    /// The number of hands that have been played.
    pub num_hands: usize,
    pub records: BTreeMap<PlayerId, PlayerRecord>,
    /// Maximum number of summaries to keep from a long call to `run`
    max_history: usize,
}

impl StrategyEvaluator {
    pub fn new(simulation: HandSimulation) -> Self {
        let records = simulation
            .table()
            .players()
            .iter()
            .map(|p| (p.id(), PlayerRecord::default()))
            .collect();
        Self {
            simulation,
            num_hands: 0,
            records,
            max_history: 100,
        }
    }

    pub fn with_max_history(mut self, max_history: usize) -> Self {
        self.max_history = max_history;
        self
    }

    pub fn simulation(&self) -> &HandSimulation {
        &self.simulation
    }

    pub fn record(&self, player: PlayerId) -> Option<&PlayerRecord> {
        self.records.get(&player)
    }

    /// Play up to `num_hands` hands and return the most recent summaries.
    pub fn run(&mut self, num_hands: usize) -> Result<Vec<RoundSummary>, SimulationError> {
        let span = trace_span!("evaluate_strategies", num_hands);
        let _enter = span.enter();

        let mut summaries = VecDeque::with_capacity(self.max_history.min(num_hands));
        for _ in 0..num_hands {
            if let Some(broke) = self.short_stacked() {
                event!(
                    tracing::Level::WARN,
                    player = %broke,
                    hands = self.num_hands,
                    "Player can't cover the big blind, stopping"
                );
                break;
            }

            let summary = self.simulation.run_hand()?;
            self.update_records(&summary);
            self.num_hands += 1;

            if summaries.len() >= self.max_history {
                summaries.pop_front();
            }
            if self.max_history > 0 {
                summaries.push_back(summary);
            }
        }
        Ok(summaries.into_iter().collect())
    }

    fn short_stacked(&self) -> Option<PlayerId> {
        let table = self.simulation.table();
        let big_blind = table.config().big_blind;
        table
            .players()
            .iter()
            .find(|p| p.bankroll() < big_blind)
            .map(|p| p.id())
    }

    fn update_records(&mut self, summary: &RoundSummary) {
        let split = summary.winners.len() > 1;
        for (id, record) in self.records.iter_mut() {
            if !summary.is_winner(*id) {
                record.losses += 1;
            } else if split {
                record.draws += 1;
            } else {
                record.wins += 1;
            }
            record.bankroll_delta += summary.net(*id);
        }
    }
}

impl Debug for StrategyEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyEvaluator")
            .field("num_hands", &self.num_hands)
            .field("records", &self.records)
            .finish()
    }
}
