use std::collections::BTreeMap;

use crate::table::{Player, PlayerId, PokerTable, Table, TableConfig, TableView};

use super::{HandSimulation, errors::SimulationError, strategy::FoldingStrategy, strategy::Strategy};

/// # HandSimulationBuilder
///
/// A builder for a table of strategies. Players are required, everything
/// else is optional.
///
/// ## Setters
///
/// Each setter sets the optional value and returns the builder.
///
/// Strategies aren't required either: any seat without one gets a
/// `FoldingStrategy`. So likely not that interesting a simulation.
///
/// ## Examples
///
/// ```
/// use holdem_engine::arena::HandSimulationBuilder;
///
/// let mut sim = HandSimulationBuilder::default()
///     .num_players(4)
///     .build()
///     .unwrap();
/// let summary = sim.run_hand().unwrap();
/// assert_eq!(1, summary.winners.len());
/// ```
///
/// A seed makes every shuffle reproducible:
///
/// ```
/// use holdem_engine::arena::{CallingStrategy, HandSimulationBuilder, Strategy};
/// use holdem_engine::table::TableConfig;
///
/// let strategies: Vec<Box<dyn Strategy>> = vec![
///     Box::new(CallingStrategy),
///     Box::new(CallingStrategy),
/// ];
/// let mut sim = HandSimulationBuilder::default()
///     .config(TableConfig {
///         small_blind: 1,
///         big_blind: 2,
///         ..TableConfig::default()
///     })
///     .num_players(2)
///     .strategies(strategies)
///     .seed(420)
///     .build()
///     .unwrap();
/// let summary = sim.run_hand().unwrap();
/// assert_eq!(4, summary.total_pot);
/// ```
#[derive(Default)]
pub struct HandSimulationBuilder {
    config: Option<TableConfig>,
    players: Option<Vec<Player>>,
    num_players: Option<usize>,
    strategies: Vec<Box<dyn Strategy>>,
    strategy_for: BTreeMap<PlayerId, Box<dyn Strategy>>,
    seed: Option<u64>,
    dealer_idx: usize,
}

impl HandSimulationBuilder {
    pub fn config(mut self, config: TableConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Seat these players, bankrolls and all.
    pub fn players(mut self, players: Vec<Player>) -> Self {
        self.players = Some(players);
        self
    }

    /// Seat players `0..num_players` with the configured starting bankroll.
    /// Ignored when players are given explicitly.
    pub fn num_players(mut self, num_players: usize) -> Self {
        self.num_players = Some(num_players);
        self
    }

    /// Strategies for the seats in order.
    pub fn strategies(mut self, strategies: Vec<Box<dyn Strategy>>) -> Self {
        self.strategies = strategies;
        self
    }

    /// The strategy for one player. Wins over `strategies`.
    pub fn strategy(mut self, player: PlayerId, strategy: Box<dyn Strategy>) -> Self {
        self.strategy_for.insert(player, strategy);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn dealer(mut self, dealer_idx: usize) -> Self {
        self.dealer_idx = dealer_idx;
        self
    }

    /// Given the fields already specified build any that are not specified
    /// and create a new HandSimulation.
    ///
    /// @returns SimulationError if no players were given or the table
    /// refused them.
    pub fn build(self) -> Result<HandSimulation, SimulationError> {
        let config = self.config.unwrap_or_default();
        let mut table = match self.seed {
            Some(seed) => Table::with_seed(config, seed)?,
            None => Table::new(config)?,
        };

        match (self.players, self.num_players) {
            (Some(players), _) => {
                for player in players {
                    table.add_player(player)?;
                }
            }
            (None, Some(n)) => table.seat_players(n)?,
            (None, None) => return Err(SimulationError::NeedPlayers),
        }
        if table.num_players() == 0 {
            return Err(SimulationError::NeedPlayers);
        }
        table.set_dealer_index(self.dealer_idx)?;

        let mut in_order = self.strategies.into_iter();
        let mut strategy_for = self.strategy_for;
        let strategies = table
            .players()
            .iter()
            .map(|p| {
                let by_seat = in_order.next();
                let strategy = strategy_for
                    .remove(&p.id())
                    .or(by_seat)
                    .unwrap_or_else(|| Box::new(FoldingStrategy) as Box<dyn Strategy>);
                (p.id(), strategy)
            })
            .collect();

        Ok(HandSimulation::new(table, strategies))
    }
}
