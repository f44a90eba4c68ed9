use std::ops::{Index, RangeFull};

use rand::Rng;
use rand::seq::SliceRandom;

use super::card::{Card, Suit, Value};
use super::error::PokerError;

/// `Deck` is an ordered stack of unique cards.
///
/// The top of the deck is the next card to be dealt. Cards leave the deck
/// by being dealt, burned or removed; the only way back to 52 cards is to
/// build a new deck.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    /// Card storage. The last element is the top of the deck.
    cards: Vec<Card>,
}

impl Deck {
    /// Create the full 52 card deck in sorted order.
    ///
    /// ```
    /// use holdem_engine::core::Deck;
    ///
    /// assert_eq!(52, Deck::new().len());
    /// ```
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(52);
        for v in Value::values() {
            for s in Suit::suits() {
                cards.push(Card::new(v, s));
            }
        }
        Self { cards }
    }

    /// A full deck shuffled with the given rng.
    pub fn shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.shuffle(rng);
        deck
    }

    /// An empty deck. Cards can be added with `insert_top` or
    /// `insert_bottom`.
    pub fn empty() -> Self {
        Self { cards: vec![] }
    }

    /// How many cards are there in the deck?
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Have all cards been dealt?
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Given a card, is it in the current deck?
    pub fn contains(&self, c: &Card) -> bool {
        self.cards.contains(c)
    }

    /// Randomly shuffle the deck.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng)
    }

    /// Deal the top card if there is one there to deal.
    /// None if the deck is empty
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deal `n` cards off the top. Fails without dealing anything if the
    /// deck doesn't hold enough cards.
    pub fn deal_n(&mut self, n: usize) -> Result<Vec<Card>, PokerError> {
        if n > self.cards.len() {
            return Err(PokerError::DeckExhausted {
                requested: n,
                available: self.cards.len(),
            });
        }
        let start = self.cards.len() - n;
        let mut dealt = self.cards.split_off(start);
        // split_off keeps deck order, the top card should come out first.
        dealt.reverse();
        Ok(dealt)
    }

    /// Discard `n` cards from the top of the deck.
    pub fn burn(&mut self, n: usize) -> Result<(), PokerError> {
        self.deal_n(n).map(|_| ())
    }

    /// Given a card remove it from the deck if it is present.
    pub fn remove(&mut self, c: &Card) -> bool {
        match self.cards.iter().position(|x| x == c) {
            Some(idx) => {
                self.cards.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Put a card on top of the deck so that it is the next one dealt.
    pub fn insert_top(&mut self, c: Card) -> Result<(), PokerError> {
        if self.contains(&c) {
            return Err(PokerError::CardAlreadyInDeck(c));
        }
        self.cards.push(c);
        Ok(())
    }

    /// Put a card at the bottom of the deck.
    pub fn insert_bottom(&mut self, c: Card) -> Result<(), PokerError> {
        if self.contains(&c) {
            return Err(PokerError::CardAlreadyInDeck(c));
        }
        self.cards.insert(0, c);
        Ok(())
    }

    /// Peek at the card that will be dealt next.
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<RangeFull> for Deck {
    type Output = [Card];
    fn index(&self, index: RangeFull) -> &[Card] {
        &self.cards[index]
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
