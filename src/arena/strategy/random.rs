use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::arena::action_env::ActionEnvironment;
use crate::arena::errors::SimulationError;

use super::Strategy;

/// Picks a random action every turn.
///
/// `percent_fold` is only consulted when there's a bet to fold to. The
/// deeper into the street the betting goes (measured in big blinds of
/// current bet), the later entries of the percentages are used.
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    percent_fold: Vec<f64>,
    percent_call: Vec<f64>,
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new(percent_fold: Vec<f64>, percent_call: Vec<f64>, rng: StdRng) -> Self {
        Self {
            percent_fold,
            percent_call,
            rng,
        }
    }

    /// Default percentages with a reproducible rng.
    pub fn with_seed(seed: u64) -> Self {
        let default = Self::default();
        Self::new(
            default.percent_fold,
            default.percent_call,
            StdRng::seed_from_u64(seed),
        )
    }

    fn percent(percents: &[f64], idx: usize) -> f64 {
        percents
            .get(idx.min(percents.len().saturating_sub(1)))
            .map_or(1.0, |v| *v)
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self {
            percent_fold: vec![0.25, 0.30, 0.50],
            percent_call: vec![0.5, 0.6, 0.45],
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Strategy for RandomStrategy {
    fn execute_turn(&mut self, env: &mut ActionEnvironment<'_>) -> Result<(), SimulationError> {
        let table = env.table();
        let player = env.player();
        let big_blind = table.config().big_blind;
        let owed = table.to_call(player);
        let bankroll = table.bankroll(player).unwrap_or(0);
        let pot = table.pot_total();
        let depth = (table.current_bet() / big_blind) as usize;

        // We shouldn't fold when checking is an option.
        let can_fold = owed > 0;
        let percent_fold = Self::percent(&self.percent_fold, depth);
        let percent_call = Self::percent(&self.percent_call, depth);

        // Raises are sized between a big blind and the pot, capped by what's
        // left after calling.
        let max_raise = bankroll.saturating_sub(owed).min(pot.max(big_blind));

        if can_fold && self.rng.random_bool(percent_fold) {
            env.fold()?;
        } else if max_raise < big_blind || self.rng.random_bool(percent_call) {
            env.call()?;
        } else {
            let amount = self.rng.random_range(big_blind..=max_raise);
            env.raise(amount)?;
        }
        Ok(())
    }
}
