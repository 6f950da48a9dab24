use core::fmt;

use crate::card::Card;
use crate::error::PlayError;
use crate::player::PlayerId;
use crate::rules;

use super::{Game, GameState, TurnOutcome};

struct ShowCards<'a>(&'a [Card]);

impl fmt::Display for ShowCards<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl Game {
    fn ensure_player_turn(&self, player_id: PlayerId) -> Result<(), PlayError> {
        if *self.state.lock() != GameState::PlayerTurn {
            return Err(PlayError::InvalidState);
        }

        if !self.players.lock().iter().any(|p| p.id() == player_id) {
            return Err(PlayError::PlayerNotFound);
        }

        if *self.current.lock() != Some(player_id) {
            return Err(PlayError::NotYourTurn);
        }

        Ok(())
    }

    /// Player action: play cards onto the pile.
    ///
    /// The play is checked completely before the hand or pile changes, so a
    /// rejected play leaves the game untouched and the same player may try
    /// again.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state, it is not
    /// the player's turn, or the cards break a rule (see
    /// [`rules::check_play`]). [`PlayError::Roster`] signals broken turn
    /// bookkeeping and is not recoverable.
    pub fn play(&self, player_id: PlayerId, cards: &[Card]) -> Result<TurnOutcome, PlayError> {
        self.ensure_player_turn(player_id)?;

        let mut players = self.players.lock();
        let player = players
            .iter_mut()
            .find(|p| p.id() == player_id)
            .ok_or(PlayError::PlayerNotFound)?;

        let mut pile = self.pile.lock();
        rules::check_play(player.hand(), cards, &pile)?;
        let topped = rules::apply_play(player, cards, &mut pile);
        log::debug!(
            "player {player_id} played {} ({} left){}",
            ShowCards(cards),
            player.hand().len(),
            if topped { "" } else { ", pile unchanged" }
        );
        drop(pile);
        drop(players);

        self.finish_turn(player_id).map_err(PlayError::from)
    }

    /// Player action: pass without playing.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in player turn state or it is not
    /// the player's turn. A leader who passes hands the lead to the next seat.
    pub fn pass(&self, player_id: PlayerId) -> Result<TurnOutcome, PlayError> {
        self.ensure_player_turn(player_id)?;
        log::debug!("player {player_id} passed");

        self.finish_turn(player_id).map_err(PlayError::from)
    }

    /// Plays the cards, or passes when `cards` is empty.
    ///
    /// # Errors
    ///
    /// See [`Game::play`] and [`Game::pass`].
    pub fn take_turn(&self, player_id: PlayerId, cards: &[Card]) -> Result<TurnOutcome, PlayError> {
        if cards.is_empty() {
            self.pass(player_id)
        } else {
            self.play(player_id, cards)
        }
    }
}
