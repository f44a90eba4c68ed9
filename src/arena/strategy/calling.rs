use crate::arena::action_env::ActionEnvironment;
use crate::arena::errors::SimulationError;

use super::Strategy;

/// Calls every bet and checks when there's nothing to call.
#[derive(Default, Debug, Clone, Copy)]
pub struct CallingStrategy;

impl Strategy for CallingStrategy {
    fn execute_turn(&mut self, env: &mut ActionEnvironment<'_>) -> Result<(), SimulationError> {
        env.call()?;
        Ok(())
    }
}
