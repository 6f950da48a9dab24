//! Game configuration options.

use crate::card::{Card, Rank, STARTING_CARD, TOP_RANK};

/// Configuration options for a King or Koos game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use kingorkoos::{Card, GameOptions, Rank, Suit};
///
/// let options = GameOptions::default()
///     .with_starting_card(Card::new(Rank::Four, Suit::Spades))
///     .with_top_rank(Rank::Two);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// The holder of this card leads the first round.
    pub starting_card: Card,
    /// Playing this rank ends the round immediately.
    pub top_rank: Rank,
    /// Whether to rotate the seating so the starting card's holder goes
    /// first. When disabled, the first player to join leads.
    pub reorder_by_starting_card: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_card: STARTING_CARD,
            top_rank: TOP_RANK,
            reorder_by_starting_card: true,
        }
    }
}

impl GameOptions {
    /// Sets the starting card.
    ///
    /// # Example
    ///
    /// ```
    /// use kingorkoos::{Card, GameOptions, Rank, Suit};
    ///
    /// let card = Card::new(Rank::Five, Suit::Hearts);
    /// let options = GameOptions::default().with_starting_card(card);
    /// assert_eq!(options.starting_card, card);
    /// ```
    #[must_use]
    pub const fn with_starting_card(mut self, card: Card) -> Self {
        self.starting_card = card;
        self
    }

    /// Sets the rank that ends a round.
    ///
    /// # Example
    ///
    /// ```
    /// use kingorkoos::{GameOptions, Rank};
    ///
    /// let options = GameOptions::default().with_top_rank(Rank::Ace);
    /// assert_eq!(options.top_rank, Rank::Ace);
    /// ```
    #[must_use]
    pub const fn with_top_rank(mut self, rank: Rank) -> Self {
        self.top_rank = rank;
        self
    }

    /// Sets whether seating is rotated to the starting card's holder.
    ///
    /// # Example
    ///
    /// ```
    /// use kingorkoos::GameOptions;
    ///
    /// let options = GameOptions::default().with_reorder_by_starting_card(false);
    /// assert!(!options.reorder_by_starting_card);
    /// ```
    #[must_use]
    pub const fn with_reorder_by_starting_card(mut self, reorder: bool) -> Self {
        self.reorder_by_starting_card = reorder;
        self
    }
}
