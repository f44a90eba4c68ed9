//! `Strategy`s are the automatic players in the simulations. They decide
//! what to do each turn and can learn from every finished hand.
//!
//! Some basic strategies are provided as baselines.
mod calling;
mod folding;
mod pot_odds;
mod random;

use crate::table::{PlayerId, RoundSummary, TableView};

use super::action_env::ActionEnvironment;
use super::errors::SimulationError;

/// This is the trait that you need to implement in order to implement
/// different strategies. It's up to you to implement the logic and state.
pub trait Strategy {
    /// Called once per turn. Exactly one action has to be taken through the
    /// environment before returning. An error aborts the hand.
    fn execute_turn(&mut self, env: &mut ActionEnvironment<'_>) -> Result<(), SimulationError>;

    /// Called for every seated strategy once a hand has been concluded.
    fn on_hand_completed(
        &mut self,
        _player: PlayerId,
        _table: &dyn TableView,
        _summary: &RoundSummary,
    ) {
    }
}

pub use calling::CallingStrategy;
pub use folding::FoldingStrategy;
pub use pot_odds::PotOddsStrategy;
pub use random::RandomStrategy;
