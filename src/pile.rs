//! The round pile: every play that topped the previous one this round.

use alloc::vec::Vec;

use crate::card::{Card, Rank};
use crate::player::PlayerId;

/// One turn's worth of cards and who played them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PileEntry {
    /// Cards played together, all of the same rank.
    pub cards: Vec<Card>,
    /// The player who played them.
    pub played_by: PlayerId,
}

impl PileEntry {
    /// Creates a pile entry.
    #[must_use]
    pub const fn new(cards: Vec<Card>, played_by: PlayerId) -> Self {
        Self { cards, played_by }
    }

    /// Returns the rank of the entry (the rank of its first card).
    #[must_use]
    pub fn rank(&self) -> Option<Rank> {
        self.cards.first().map(|card| card.rank)
    }
}

/// Append-only pile for a single round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundPile {
    entries: Vec<PileEntry>,
}

impl RoundPile {
    /// Creates an empty pile.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: PileEntry) {
        self.entries.push(entry);
    }

    /// Returns the most recent entry.
    #[must_use]
    pub fn top(&self) -> Option<&PileEntry> {
        self.entries.last()
    }

    /// Returns the cards of the most recent entry, or an empty slice.
    #[must_use]
    pub fn top_cards(&self) -> &[Card] {
        match self.top() {
            Some(entry) => &entry.cards,
            None => &[],
        }
    }

    /// Returns who played the most recent entry.
    #[must_use]
    pub fn last_player(&self) -> Option<PlayerId> {
        self.top().map(|entry| entry.played_by)
    }

    /// Returns whether the most recent entry is of the top rank.
    #[must_use]
    pub fn is_top_rank_reached(&self, top_rank: Rank) -> bool {
        self.top().and_then(PileEntry::rank) == Some(top_rank)
    }

    /// Returns all entries in play order.
    #[must_use]
    pub fn entries(&self) -> &[PileEntry] {
        &self.entries
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Empties the pile for a new round.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
