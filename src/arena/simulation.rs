use std::collections::BTreeMap;
use std::fmt;

use tracing::{event, trace_span};

use crate::table::{HandSeed, PlayerId, RoundSummary, Table, TableView, TurnController};

use super::action_env::ActionEnvironment;
use super::errors::SimulationError;
use super::strategy::Strategy;

/// Plays hands at one table, asking each seat's strategy what to do.
///
/// The table and the strategies live as long as the simulation, so
/// bankrolls carry over from one hand to the next.
pub struct HandSimulation {
    controller: TurnController,
    strategies: BTreeMap<PlayerId, Box<dyn Strategy>>,
    hands_played: usize,
}

impl HandSimulation {
    pub fn new(table: Table, strategies: BTreeMap<PlayerId, Box<dyn Strategy>>) -> Self {
        Self {
            controller: TurnController::new(table),
            strategies,
            hands_played: 0,
        }
    }

    /// The table as the strategies see it.
    pub fn table(&self) -> &TurnController {
        &self.controller
    }

    pub fn hands_played(&self) -> usize {
        self.hands_played
    }

    pub fn run_hand(&mut self) -> Result<RoundSummary, SimulationError> {
        self.run_hand_with_seed(&HandSeed::default())
    }

    /// Play one hand to the end, then tell every strategy how it went.
    ///
    /// If a strategy fails, or returns without acting, the hand is thrown
    /// away with every chip returned and the error is passed on.
    pub fn run_hand_with_seed(&mut self, seed: &HandSeed) -> Result<RoundSummary, SimulationError> {
        let span = trace_span!("run_hand", hand = self.hands_played);
        let _enter = span.enter();

        if let Some(missing) = self
            .controller
            .players()
            .iter()
            .find(|p| !self.strategies.contains_key(&p.id()))
        {
            return Err(SimulationError::MissingStrategy(missing.id()));
        }

        self.controller.start_hand_with_seed(seed)?;
        while let Some(player) = self.controller.current_player() {
            if let Err(e) = self.take_turn(player) {
                event!(tracing::Level::DEBUG, player = %player, error = %e, "Aborting hand");
                self.controller.abort_hand();
                return Err(e);
            }
        }

        let summary = self.controller.conclude_hand()?;
        for (id, strategy) in self.strategies.iter_mut() {
            strategy.on_hand_completed(*id, &self.controller, &summary);
        }
        self.hands_played += 1;
        Ok(summary)
    }

    fn take_turn(&mut self, player: PlayerId) -> Result<(), SimulationError> {
        let strategy = self
            .strategies
            .get_mut(&player)
            .ok_or(SimulationError::MissingStrategy(player))?;
        let mut env = ActionEnvironment::new(&mut self.controller, player);
        strategy.execute_turn(&mut env)?;
        if !env.has_acted() {
            return Err(SimulationError::NoActionTaken(player));
        }
        Ok(())
    }
}

impl fmt::Debug for HandSimulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandSimulation")
            .field("controller", &self.controller)
            .field("strategies", &self.strategies.keys().collect::<Vec<_>>())
            .field("hands_played", &self.hands_played)
            .finish()
    }
}
