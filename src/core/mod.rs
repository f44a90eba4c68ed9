//! This is the core module. It exports the cards, the deck and the hand
//! ranking code that everything else is built on.

/// card.rs has value and suit.
mod card;
/// Re-export Card, Value, and Suit
pub use self::card::{Card, Suit, Value};

/// Deck is the ordered 52 card deck.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// Errors for parsing cards and ranking hands.
mod error;
pub use self::error::PokerError;

/// Seat bitsets.
mod player_bit_set;
pub use self::player_bit_set::{ActivePlayerBitSetIter, MAX_SEATS, PlayerBitSet};

/// 5 to 7 card hand ranking code.
mod rank;
/// Export the trait and the results.
pub use self::rank::{Category, HandRank, Rankable, best_hands, compare, compare_cards, rank_cards};
