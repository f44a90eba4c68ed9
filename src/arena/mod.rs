//! This is the arena module for simulation via strategies.
//!
//! # Single Simulation
//!
//! A `HandSimulation` plays hands at one table. Each turn the acting seat's
//! `Strategy` gets an `ActionEnvironment` to act through; once the hand is
//! over every strategy is shown the `RoundSummary`.
//!
//! ```
//! use holdem_engine::arena::{CallingStrategy, HandSimulationBuilder, RandomStrategy, Strategy};
//!
//! let strategies: Vec<Box<dyn Strategy>> = vec![
//!     Box::new(CallingStrategy),
//!     Box::new(RandomStrategy::with_seed(1)),
//! ];
//! let mut sim = HandSimulationBuilder::default()
//!     .num_players(2)
//!     .strategies(strategies)
//!     .seed(420)
//!     .build()
//!     .unwrap();
//!
//! let summary = sim.run_hand().unwrap();
//! assert!(!summary.winners.is_empty());
//! ```
//!
//! # Strategy Evaluation
//!
//! It's also possible to play the same strategies against each other for
//! many hands with tabulated results.
//!
//! ```
//! use holdem_engine::arena::{
//!     CallingStrategy, FoldingStrategy, HandSimulationBuilder, Strategy, StrategyEvaluator,
//! };
//! use holdem_engine::table::PlayerId;
//!
//! let strategies: Vec<Box<dyn Strategy>> = vec![
//!     Box::new(CallingStrategy),
//!     Box::new(FoldingStrategy),
//!     Box::new(CallingStrategy),
//! ];
//! let sim = HandSimulationBuilder::default()
//!     .num_players(3)
//!     .strategies(strategies)
//!     .build()
//!     .unwrap();
//!
//! let mut evaluator = StrategyEvaluator::new(sim);
//! evaluator.run(50).unwrap();
//!
//! // The evaluator tabulates the results across every run.
//! println!("{:?}", evaluator.record(PlayerId(1)));
//! ```
pub mod action_env;
pub mod errors;
pub mod evaluator;
pub mod sim_builder;
pub mod simulation;
pub mod strategy;

pub use action_env::{ActionEnvironment, TurnActions};
pub use errors::SimulationError;
pub use evaluator::{PlayerRecord, StrategyEvaluator};
pub use sim_builder::HandSimulationBuilder;
pub use simulation::HandSimulation;
pub use strategy::{CallingStrategy, FoldingStrategy, PotOddsStrategy, RandomStrategy, Strategy};
