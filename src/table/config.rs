use super::errors::TableError;

/// Settings shared by a table and its turn controller.
///
/// ```
/// use holdem_engine::table::TableConfig;
///
/// let config = TableConfig {
///     small_blind: 5,
///     big_blind: 10,
///     ..TableConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TableConfig {
    pub small_blind: u64,
    pub big_blind: u64,
    /// Chips each player sits down with when the table seats them.
    pub starting_bankroll: u64,
    /// Hole cards dealt to each player.
    pub cards_per_player: usize,
    /// Burn one card before the flop, turn and river.
    pub burn_before_street: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            small_blind: 10,
            big_blind: 20,
            starting_bankroll: 1_000,
            cards_per_player: 2,
            burn_before_street: true,
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), TableError> {
        if self.small_blind == 0 || self.small_blind >= self.big_blind {
            return Err(TableError::InvalidBlinds {
                small: self.small_blind,
                big: self.big_blind,
            });
        }
        if !(1..=2).contains(&self.cards_per_player) {
            return Err(TableError::InvalidCardsPerPlayer(self.cards_per_player));
        }
        Ok(())
    }

    /// Load and validate a config from json. Missing fields use the
    /// defaults.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let config: TableConfig =
            serde_json::from_str(json).map_err(|e| TableError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
