use tracing::event;

use crate::arena::action_env::ActionEnvironment;
use crate::arena::errors::SimulationError;
use crate::holdem::EquityEvaluator;

use super::Strategy;

/// Plays its Monte Carlo equity against random hands.
///
/// Each turn the strategy estimates its equity against everyone still in
/// the hand. It raises when the equity clears `raise_equity`, calls when
/// the equity beats the pot odds, and otherwise checks or folds.
#[derive(Debug)]
pub struct PotOddsStrategy {
    evaluator: EquityEvaluator,
    simulations: usize,
    raise_equity: f64,
}

impl PotOddsStrategy {
    pub fn new(evaluator: EquityEvaluator, simulations: usize) -> Self {
        Self {
            evaluator,
            simulations,
            raise_equity: 0.6,
        }
    }

    pub fn with_raise_equity(mut self, raise_equity: f64) -> Self {
        self.raise_equity = raise_equity;
        self
    }
}

impl Default for PotOddsStrategy {
    fn default() -> Self {
        Self::new(EquityEvaluator::new(), 200)
    }
}

impl Strategy for PotOddsStrategy {
    fn execute_turn(&mut self, env: &mut ActionEnvironment<'_>) -> Result<(), SimulationError> {
        let table = env.table();
        let player = env.player();
        let hole = table.hole_cards(player).to_vec();
        if hole.len() != 2 {
            // Equity needs a full hold'em hand.
            env.call()?;
            return Ok(());
        }

        let board = table.community_cards().to_vec();
        let num_players = table.num_active_players();
        let owed = table.to_call(player);
        let pot = table.pot_total();
        let big_blind = table.config().big_blind;
        let bankroll = table.bankroll(player).unwrap_or(0);

        let equity = self
            .evaluator
            .evaluate(num_players, &hole, &board, self.simulations)?;
        let pot_odds = owed as f64 / (pot + owed) as f64;
        let raise = (pot / 2).max(big_blind);

        event!(
            tracing::Level::TRACE,
            player = %player,
            equity,
            pot_odds,
            "Pot odds decision"
        );

        if equity >= self.raise_equity && bankroll >= owed + raise {
            env.raise(raise)?;
        } else if owed == 0 || equity >= pot_odds {
            env.call()?;
        } else {
            env.fold()?;
        }
        Ok(())
    }
}
