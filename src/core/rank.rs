use std::cmp::Ordering;

use super::card::{Card, Suit, Value};
use super::error::PokerError;

/// All the different possible hand categories, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// The lowest rank.
    /// No matches
    HighCard,
    /// One Card matches another.
    Pair,
    /// Two different pair of matching cards.
    TwoPair,
    /// Three of the same value.
    ThreeOfAKind,
    /// Five cards in a sequence
    Straight,
    /// Five cards of the same suit
    Flush,
    /// Three of one value and two of another value
    FullHouse,
    /// Four of the same value.
    FourOfAKind,
    /// Five cards in a sequence all of the same suit.
    StraightFlush,
    /// Ten to ace all of the same suit.
    RoyalFlush,
}

/// The strength of the best five cards in a hand.
///
/// The derived ordering compares the category first and then the
/// tie-break values pairwise, so `HandRank` is a total order and two
/// hands that compare equal split the pot.
///
/// The tie-break holds the values that matter for the category:
///
/// - `FourOfAKind`: quad value, kicker
/// - `FullHouse`: trips value, pair value
/// - `ThreeOfAKind`: trips value, two kickers descending
/// - `TwoPair`: high pair, low pair, kicker
/// - `Pair`: pair value, three kickers descending
/// - everything else: the five cards descending
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandRank {
    pub category: Category,
    pub tie_break: Vec<Value>,
}

impl HandRank {
    pub fn new(category: Category, tie_break: Vec<Value>) -> Self {
        Self {
            category,
            tie_break,
        }
    }
}

/// Can this turn into a hand rank?
pub trait Rankable {
    /// Rank the best five cards. Needs at least five distinct cards.
    fn rank(&self) -> Result<HandRank, PokerError>;
}

impl Rankable for [Card] {
    fn rank(&self) -> Result<HandRank, PokerError> {
        rank_cards(self)
    }
}

/// Total order between two ranked hands. `Equal` means a tie.
pub fn compare(a: &HandRank, b: &HandRank) -> Ordering {
    a.category
        .cmp(&b.category)
        .then_with(|| a.tie_break.cmp(&b.tie_break))
}

/// Rank both card sets and compare them.
pub fn compare_cards(a: &[Card], b: &[Card]) -> Result<Ordering, PokerError> {
    Ok(compare(&a.rank()?, &b.rank()?))
}

/// Given ranked entries return every key holding the best rank along with
/// that rank. Keys keep their input order.
pub fn best_hands<K>(ranked: impl IntoIterator<Item = (K, HandRank)>) -> (Vec<K>, Option<HandRank>) {
    ranked
        .into_iter()
        .fold((vec![], None), |(mut found, best), (key, rank)| match best {
            None => (vec![key], Some(rank)),
            Some(max_rank) => match compare(&rank, &max_rank) {
                Ordering::Equal => {
                    found.push(key);
                    (found, Some(max_rank))
                }
                Ordering::Greater => (vec![key], Some(rank)),
                Ordering::Less => (found, Some(max_rank)),
            },
        })
}

fn card_bit(c: &Card) -> u64 {
    1 << (c.value as u64 * 4 + c.suit as u64)
}

/// Find the highest run of five consecutive values in a descending list of
/// distinct values. Aces only count high.
fn straight_run(distinct_desc: &[Value]) -> Option<Vec<Value>> {
    distinct_desc
        .windows(5)
        .find(|w| {
            w.iter()
                .enumerate()
                .all(|(i, v)| v.ordinal() + i as u8 == w[0].ordinal())
        })
        .map(|w| w.to_vec())
}

fn distinct_desc(values: impl Iterator<Item = Value>) -> Vec<Value> {
    let mut out: Vec<Value> = values.collect();
    out.sort_unstable_by(|a, b| b.cmp(a));
    out.dedup();
    out
}

/// Highest `n` values from a descending list skipping the excluded ones.
fn kickers(sorted_desc: &[Value], exclude: &[Value], n: usize) -> Vec<Value> {
    sorted_desc
        .iter()
        .filter(|v| !exclude.contains(v))
        .take(n)
        .copied()
        .collect()
}

/// Rank five to seven (or more) cards.
pub fn rank_cards(cards: &[Card]) -> Result<HandRank, PokerError> {
    if cards.len() < 5 {
        return Err(PokerError::TooFewCards(cards.len()));
    }

    let mut seen: u64 = 0;
    for c in cards {
        let bit = card_bit(c);
        if seen & bit != 0 {
            return Err(PokerError::DuplicateCard(*c));
        }
        seen |= bit;
    }

    let mut values: Vec<Value> = cards.iter().map(|c| c.value).collect();
    values.sort_unstable_by(|a, b| b.cmp(a));

    let mut value_counts = [0u8; 13];
    for v in &values {
        value_counts[v.ordinal() as usize] += 1;
    }
    // Values that appear at least `n` times, highest first.
    let with_count = |n: u8| -> Vec<Value> {
        Value::values()
            .into_iter()
            .rev()
            .filter(|v| value_counts[v.ordinal() as usize] >= n)
            .collect()
    };

    // The suit holding the most cards. Only matters once it reaches five.
    let flush_suit: Option<Suit> = Suit::suits()
        .into_iter()
        .map(|s| (s, cards.iter().filter(|c| c.suit == s).count()))
        .filter(|(_, count)| *count >= 5)
        .max_by_key(|(_, count)| *count)
        .map(|(s, _)| s);

    let flush_values: Option<Vec<Value>> = flush_suit.map(|s| {
        let mut fv: Vec<Value> = cards
            .iter()
            .filter(|c| c.suit == s)
            .map(|c| c.value)
            .collect();
        fv.sort_unstable_by(|a, b| b.cmp(a));
        fv
    });

    if let Some(run) = flush_values.as_ref().and_then(|fv| straight_run(fv)) {
        let category = if run[0] == Value::Ace {
            Category::RoyalFlush
        } else {
            Category::StraightFlush
        };
        return Ok(HandRank::new(category, run));
    }

    if let Some(quad) = with_count(4).first().copied() {
        let mut tie_break = vec![quad];
        tie_break.extend(kickers(&values, &[quad], 1));
        return Ok(HandRank::new(Category::FourOfAKind, tie_break));
    }

    let trips = with_count(3);
    if let Some(top_trips) = trips.first().copied() {
        let pair = with_count(2).into_iter().find(|v| *v != top_trips);
        if let Some(pair) = pair {
            return Ok(HandRank::new(Category::FullHouse, vec![top_trips, pair]));
        }
    }

    if let Some(fv) = flush_values {
        return Ok(HandRank::new(
            Category::Flush,
            fv.into_iter().take(5).collect(),
        ));
    }

    if let Some(run) = straight_run(&distinct_desc(values.iter().copied())) {
        return Ok(HandRank::new(Category::Straight, run));
    }

    if let Some(top_trips) = trips.first().copied() {
        let mut tie_break = vec![top_trips];
        tie_break.extend(kickers(&values, &[top_trips], 2));
        return Ok(HandRank::new(Category::ThreeOfAKind, tie_break));
    }

    let pairs = with_count(2);
    match pairs.as_slice() {
        [high, low, ..] => {
            let mut tie_break = vec![*high, *low];
            tie_break.extend(kickers(&values, &[*high, *low], 1));
            Ok(HandRank::new(Category::TwoPair, tie_break))
        }
        [pair] => {
            let mut tie_break = vec![*pair];
            tie_break.extend(kickers(&values, &[*pair], 3));
            Ok(HandRank::new(Category::Pair, tie_break))
        }
        [] => Ok(HandRank::new(
            Category::HighCard,
            values.into_iter().take(5).collect(),
        )),
    }
}
