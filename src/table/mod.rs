//! The betting table and the turn order controller layered on top of it.
//!
//! [`Table`] owns the authoritative state of a hand: the deck, the hole
//! cards, the pot and every player's bets. It only knows about legal and
//! illegal actions, not whose turn it is. [`TurnController`] wraps any
//! [`PokerTable`] to post the blinds, enforce turn order and deal each
//! street once the betting on the previous one is over.

mod config;
mod errors;
mod player;
mod state;
mod summary;
mod turn;
mod view;

pub use config::TableConfig;
pub use errors::{ErrorKind, TableError};
pub use player::{Player, PlayerId};
pub use state::{HandSeed, Table};
pub use summary::RoundSummary;
pub use turn::{Action, Phase, TurnController};
pub use view::{PokerTable, TableView};
