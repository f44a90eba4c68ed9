use crate::arena::action_env::ActionEnvironment;
use crate::arena::errors::SimulationError;

use super::Strategy;

/// Folds unless checking is free.
#[derive(Default, Debug, Clone, Copy)]
pub struct FoldingStrategy;

impl Strategy for FoldingStrategy {
    fn execute_turn(&mut self, env: &mut ActionEnvironment<'_>) -> Result<(), SimulationError> {
        env.check_or_fold()?;
        Ok(())
    }
}
