//! Collaborator traits for driving a game from outside the engine.
//!
//! [`Game::run`](crate::Game::run) asks a [`TurnInput`] for each play and
//! reports progress to a [`TableView`]. Console, scripted, or network
//! front-ends plug in here.

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::PlayError;
use crate::pile::PileEntry;
use crate::player::Player;
use crate::result::Ranking;

/// A snapshot of what the current player needs to choose a play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnPrompt {
    /// The player to act, with their hand.
    pub player: Player,
    /// Exact number of cards the play must hold, if the round fixed it.
    pub required_count: Option<usize>,
    /// Most cards the player could lead with.
    pub max_count: usize,
    /// The entry to beat, if any.
    pub pile_top: Option<PileEntry>,
}

impl TurnPrompt {
    /// Returns how many cards may be played: the fixed count, or the
    /// leader's maximum.
    #[must_use]
    pub fn playable_count(&self) -> usize {
        self.required_count.unwrap_or(self.max_count)
    }
}

/// Supplies each player's chosen play.
pub trait TurnInput {
    /// Returns the cards to play. An empty selection passes the turn and
    /// `None` means no more input is coming.
    fn select(&mut self, prompt: &TurnPrompt) -> Option<Vec<Card>>;

    /// Called when a selection was rejected, before asking again.
    fn rejected(&mut self, prompt: &TurnPrompt, error: &PlayError) {
        let _ = (prompt, error);
    }
}

impl<F> TurnInput for F
where
    F: FnMut(&TurnPrompt) -> Option<Vec<Card>>,
{
    fn select(&mut self, prompt: &TurnPrompt) -> Option<Vec<Card>> {
        self(prompt)
    }
}

/// Receives progress updates for display. Every method defaults to a no-op.
pub trait TableView {
    /// A player is about to act.
    fn show_turn(&mut self, prompt: &TurnPrompt) {
        let _ = prompt;
    }

    /// A round ended.
    fn round_over(&mut self, finished: Option<&Player>, leader: &Player) {
        let _ = (finished, leader);
    }

    /// The game ended.
    fn game_over(&mut self, ranking: &Ranking, players: &[Player]) {
        let _ = (ranking, players);
    }
}

impl TableView for () {}
