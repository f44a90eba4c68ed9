/// Monte Carlo equity estimation on top of the table.
mod equity;
/// Export `EquityEvaluator`
pub use self::equity::{EquityEvaluator, EquityResult, MAX_EQUITY_PLAYERS};
