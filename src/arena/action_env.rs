use tracing::event;

use crate::table::{Action, PlayerId, PokerTable, TableError, TableView, TurnController};

/// The pieces of a turn controller a strategy is allowed to touch.
pub trait TurnActions {
    fn view(&self) -> &dyn TableView;
    fn act(&mut self, player: PlayerId, action: Action) -> Result<(), TableError>;
}

impl<T: PokerTable> TurnActions for TurnController<T> {
    fn view(&self) -> &dyn TableView {
        self
    }

    fn act(&mut self, player: PlayerId, action: Action) -> Result<(), TableError> {
        self.player_action(player, action)
    }
}

/// Handed to a strategy for exactly one turn.
///
/// Every action is applied on behalf of the player whose turn it is. Only
/// one action can be taken; anything after the first is rejected with
/// `TableError::AlreadyActed`.
pub struct ActionEnvironment<'a> {
    controller: &'a mut dyn TurnActions,
    player: PlayerId,
    taken: Option<Action>,
}

impl<'a> ActionEnvironment<'a> {
    pub fn new(controller: &'a mut dyn TurnActions, player: PlayerId) -> Self {
        Self {
            controller,
            player,
            taken: None,
        }
    }

    /// The player acting this turn.
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Read only view of the table.
    pub fn table(&self) -> &dyn TableView {
        self.controller.view()
    }

    pub fn has_acted(&self) -> bool {
        self.taken.is_some()
    }

    /// The action that was applied this turn, if any.
    pub fn taken(&self) -> Option<Action> {
        self.taken
    }

    fn act(&mut self, action: Action) -> Result<(), TableError> {
        if self.taken.is_some() {
            return Err(TableError::AlreadyActed(self.player));
        }
        self.controller.act(self.player, action)?;
        self.taken = Some(action);
        Ok(())
    }

    pub fn fold(&mut self) -> Result<(), TableError> {
        self.act(Action::Fold)
    }

    pub fn check(&mut self) -> Result<(), TableError> {
        self.act(Action::Check)
    }

    pub fn raise(&mut self, amount: u64) -> Result<(), TableError> {
        self.act(Action::Raise(amount))
    }

    /// Check if that's legal, otherwise fold. Returns what was done.
    pub fn check_or_fold(&mut self) -> Result<Action, TableError> {
        match self.act(Action::Check) {
            Ok(()) => Ok(Action::Check),
            Err(TableError::AlreadyActed(p)) => Err(TableError::AlreadyActed(p)),
            Err(e) => {
                event!(tracing::Level::DEBUG, player = %self.player, error = %e, "Check refused, folding");
                self.fold()?;
                Ok(Action::Fold)
            }
        }
    }

    /// Call if that's legal, otherwise check or fold. Returns what was done.
    pub fn call(&mut self) -> Result<Action, TableError> {
        match self.act(Action::Call) {
            Ok(()) => Ok(Action::Call),
            Err(TableError::AlreadyActed(p)) => Err(TableError::AlreadyActed(p)),
            Err(e) => {
                event!(tracing::Level::DEBUG, player = %self.player, error = %e, "Call refused, falling back");
                self.check_or_fold()
            }
        }
    }
}
