//! Final standings.

use alloc::vec::Vec;

use crate::player::PlayerId;

/// Players in the order they emptied their hands.
///
/// The first entry is the king and the last is the koos, the one player
/// left holding cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking {
    /// Every player, best first.
    pub order: Vec<PlayerId>,
    /// The first player to empty their hand.
    pub king: PlayerId,
    /// The last player still holding cards.
    pub koos: PlayerId,
}

impl Ranking {
    /// Builds a ranking from the finishing order. Returns `None` for no
    /// players.
    #[must_use]
    pub fn from_order(order: Vec<PlayerId>) -> Option<Self> {
        let king = *order.first()?;
        let koos = *order.last()?;
        Some(Self { order, king, koos })
    }

    /// Returns the 1-based place of a player.
    #[must_use]
    pub fn place_of(&self, player_id: PlayerId) -> Option<usize> {
        self.order
            .iter()
            .position(|&id| id == player_id)
            .map(|index| index + 1)
    }
}
