//! Deck construction, shuffling, and dealing.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::player::Player;

/// A full deck with exactly one card per rank and suit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates an unshuffled deck in rank-major order.
    ///
    /// ```
    /// use kingorkoos::{DECK_SIZE, Deck};
    ///
    /// assert_eq!(Deck::new().len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }

        Self { cards }
    }

    /// Creates a deck from prepared cards, dealt from the end of the list.
    ///
    /// The cards are taken as given; nothing checks for a full deck.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffles the deck in place.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deals the deck evenly to the players and consumes it.
    ///
    /// Each player receives `len / players.len()` cards taken from the top
    /// of the deck and has their hand sorted. The undealt remainder is
    /// returned. Dealing to no players returns the whole deck.
    pub fn deal(mut self, players: &mut [Player]) -> Vec<Card> {
        if players.is_empty() {
            return self.cards;
        }

        let per_player = self.cards.len() / players.len();
        for player in players.iter_mut() {
            let split_at = self.cards.len() - per_player;
            let dealt = self.cards.split_off(split_at);
            player.hand_mut().extend(dealt);
            player.hand_mut().sort();
        }

        self.cards
    }

    /// Returns the cards in deck order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn new_deck_has_every_card_once() {
        let deck = Deck::new();
        assert_eq!(deck.len(), DECK_SIZE);

        for rank in Rank::ALL {
            for suit in Suit::ALL {
                let count = deck
                    .cards()
                    .iter()
                    .filter(|c| **c == Card::new(rank, suit))
                    .count();
                assert_eq!(count, 1, "{rank}{} should appear once", suit.letter());
            }
        }
    }

    #[test]
    fn shuffle_is_reproducible_for_a_seed() {
        let mut first = Deck::new();
        let mut second = Deck::new();
        first.shuffle(&mut ChaCha8Rng::seed_from_u64(9));
        second.shuffle(&mut ChaCha8Rng::seed_from_u64(9));
        assert_eq!(first, second);
        assert_ne!(first, Deck::new());
    }

    #[test]
    fn deal_leaves_remainder_and_sorts_hands() {
        let mut players = alloc::vec![
            Player::new(0, "Audrey"),
            Player::new(1, "Jesse"),
            Player::new(2, "Kirsten"),
            Player::new(3, "Jason"),
            Player::new(4, "Asher"),
        ];
        let mut deck = Deck::new();
        deck.shuffle(&mut ChaCha8Rng::seed_from_u64(3));

        let rest = deck.deal(&mut players);

        assert_eq!(rest.len(), DECK_SIZE % 5);
        for player in &players {
            assert_eq!(player.hand().len(), DECK_SIZE / 5);
            assert!(player.hand().cards().windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn deal_to_nobody_returns_deck() {
        let rest = Deck::new().deal(&mut []);
        assert_eq!(rest.len(), DECK_SIZE);
    }
}
