//! A no-limit Texas Hold'em simulation engine.
//!
//! The engine owns the authoritative state of a hand: the deck, the pot,
//! every bet, the phase and whose turn it is. On top of that it ranks
//! hands, estimates equity by Monte Carlo simulation and plays automated
//! strategies against each other.
//!
//! - [`core`] cards, decks and 5 to 7 card hand ranking.
//! - [`table`] the betting table state machine and the turn controller.
//! - [`holdem`] Monte Carlo equity estimation.
//! - [`arena`] strategies, hand simulation and strategy evaluation.
//!
//! ```
//! use holdem_engine::core::{Card, Category, Rankable};
//!
//! let cards = Card::parse_many("AsKsQsJsTs2c3d").unwrap();
//! assert_eq!(Category::RoyalFlush, cards.rank().unwrap().category);
//! ```

/// Allow all the core poker functionality to be used
/// externally. Everything in core should be agnostic
/// to poker style.
pub mod core;

/// The betting table and turn order.
pub mod table;

/// Allow all the holdem specific code to be used externally.
pub mod holdem;

/// Strategies and the simulations that pit them against each other.
pub mod arena;
