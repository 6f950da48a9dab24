//! Error types for game operations.

use alloc::string::String;

use thiserror::Error;

use crate::card::Card;
use crate::player::PlayerId;

/// Errors that can occur when joining a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum JoinError {
    /// Invalid game state for joining.
    #[error("invalid game state for joining")]
    InvalidState,
    /// Player name is empty.
    #[error("player name is empty")]
    EmptyName,
    /// Another player already uses this name.
    #[error("another player already uses this name")]
    DuplicateName,
    /// Every player must be dealt at least one card.
    #[error("too many players for one deck")]
    TableFull,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// No players have joined.
    #[error("no players were found, cannot play the game without any players")]
    NoPlayers,
}

/// Orchestration invariant violations.
///
/// These indicate a defect in turn bookkeeping rather than a bad play and
/// are never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RosterError {
    /// A player expected in the active roster was not there.
    #[error("player {0} is not in the list of active players")]
    PlayerNotActive(PlayerId),
}

/// Errors that can occur when a player takes a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Invalid game state for playing.
    #[error("invalid game state for playing")]
    InvalidState,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// A play must contain at least one card; use pass instead.
    #[error("no cards selected")]
    EmptyPlay,
    /// The round fixes how many cards each play holds.
    #[error("this round needs exactly {expected} card(s), got {actual}")]
    WrongCardCount {
        /// Cards required by the top of the pile.
        expected: usize,
        /// Cards selected.
        actual: usize,
    },
    /// More cards selected than the hand holds of any one rank.
    #[error("at most {max} card(s) can be played, got {actual}")]
    TooManyCards {
        /// Largest same-rank group in the hand.
        max: usize,
        /// Cards selected.
        actual: usize,
    },
    /// Cards played together must share a rank.
    #[error("cards played together must share a rank")]
    MixedRanks,
    /// The same card was selected twice.
    #[error("card {0} was selected more than once")]
    DuplicateCard(Card),
    /// A selected card is not in the player's hand.
    #[error("card {0} is not in your hand")]
    CardNotInHand(Card),
    /// The play does not beat the top of the pile.
    #[error("every card played must outrank the top of the pile")]
    RankTooLow,
    /// Turn bookkeeping failed.
    #[error(transparent)]
    Roster(#[from] RosterError),
}

impl PlayError {
    /// Returns whether the player may simply try another play.
    ///
    /// Only [`PlayError::Roster`] is fatal.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Roster(_))
    }
}

/// Errors that can occur when parsing a card selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The selection names a rank but no suit.
    #[error("no suit given")]
    MissingSuit,
    /// The rank token is not one of 4-10, J, Q, K, A, 2, 3.
    #[error("unknown card value `{0}`")]
    UnknownRank(String),
    /// The suit token is not one of S, C, H, D.
    #[error("unknown suit `{0}`")]
    UnknownSuit(String),
}

/// Errors that end a driven game early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RunError {
    /// The game could not be dealt.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// Turn bookkeeping failed.
    #[error(transparent)]
    Roster(#[from] RosterError),
    /// A turn failed in a way that asking again cannot fix.
    #[error("turn could not be completed: {0}")]
    Turn(PlayError),
    /// The game is neither in progress nor over.
    #[error("game is not in progress")]
    InvalidState,
    /// The input source stopped supplying plays.
    #[error("input closed before the game finished")]
    InputClosed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    #[test]
    fn only_roster_errors_end_a_turn() {
        assert!(PlayError::NotYourTurn.is_recoverable());
        assert!(PlayError::RankTooLow.is_recoverable());
        assert!(PlayError::CardNotInHand(Card::new(Rank::Ace, Suit::Spades)).is_recoverable());
        assert!(PlayError::WrongCardCount { expected: 2, actual: 1 }.is_recoverable());
        assert!(!PlayError::Roster(RosterError::PlayerNotActive(3)).is_recoverable());
    }

    #[test]
    fn roster_error_reads_through_play_error() {
        let err = PlayError::from(RosterError::PlayerNotActive(3));
        assert_eq!(err.to_string(), "player 3 is not in the list of active players");
        assert_eq!(
            RunError::Turn(err).to_string(),
            "turn could not be completed: player 3 is not in the list of active players"
        );
    }
}
