//! Player hand representation.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Card, Rank, Suit};

/// The cards a player holds, kept sorted by rank for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a sorted hand from the given cards.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut hand = Self {
            cards: cards.into_iter().collect(),
        };
        hand.sort();
        hand
    }

    /// Adds cards to the hand. Call [`Hand::sort`] afterwards to restore order.
    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Sorts the hand ascending by rank.
    pub fn sort(&mut self) {
        self.cards.sort_unstable();
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether the hand holds the card.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns whether every given card is in the hand.
    ///
    /// ```
    /// use kingorkoos::{Card, Hand, Rank, Suit};
    ///
    /// let hand = Hand::from_cards([Card::new(Rank::Five, Suit::Hearts)]);
    /// assert!(hand.contains_all(&[Card::new(Rank::Five, Suit::Hearts)]));
    /// assert!(!hand.contains_all(&[Card::new(Rank::Five, Suit::Diamonds)]));
    /// ```
    #[must_use]
    pub fn contains_all(&self, cards: &[Card]) -> bool {
        cards.iter().all(|card| self.contains(card))
    }

    /// Looks up a card by rank and suit.
    #[must_use]
    pub fn find(&self, rank: Rank, suit: Suit) -> Option<&Card> {
        self.cards
            .iter()
            .find(|card| card.rank == rank && card.suit == suit)
    }

    /// Removes every given card that is in the hand.
    pub fn remove_all(&mut self, cards: &[Card]) {
        self.cards.retain(|held| !cards.contains(held));
    }

    /// Returns the size of the largest group of cards sharing a rank.
    ///
    /// An empty hand returns 0.
    #[must_use]
    pub fn max_same_rank(&self) -> usize {
        let mut counts: HashMap<Rank, usize> = HashMap::new();
        for card in &self.cards {
            *counts.entry(card.rank).or_insert(0) += 1;
        }
        counts.into_values().max().unwrap_or(0)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
