//! Seating, turn order, and round bookkeeping.

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::RosterError;
use crate::player::{Player, PlayerId};
use crate::result::Ranking;
use crate::rules;

use super::{Game, GameState, TurnOutcome};

/// Returns the seating order rotated so the holder of `starting_card` sits
/// first, keeping everyone else in circular order.
///
/// If nobody holds the card (it was left undealt), the order is unchanged.
#[must_use]
pub fn reorder_players(players: &[Player], starting_card: Card) -> Vec<PlayerId> {
    let mut seating: Vec<PlayerId> = players.iter().map(Player::id).collect();
    if let Some(index) = players
        .iter()
        .position(|player| player.hand().contains(&starting_card))
    {
        seating.rotate_left(index);
    }
    seating
}

/// Returns the player seated after `player_id`, wrapping around.
///
/// # Errors
///
/// Returns an error if `player_id` is not in `active`.
pub fn next_player(active: &[PlayerId], player_id: PlayerId) -> Result<PlayerId, RosterError> {
    let index = position(active, player_id)?;
    Ok(active[(index + 1) % active.len()])
}

/// Returns the player seated before `player_id`, wrapping around.
///
/// # Errors
///
/// Returns an error if `player_id` is not in `active`.
pub fn previous_player(active: &[PlayerId], player_id: PlayerId) -> Result<PlayerId, RosterError> {
    let index = position(active, player_id)?;
    Ok(active[(index + active.len() - 1) % active.len()])
}

fn position(active: &[PlayerId], player_id: PlayerId) -> Result<usize, RosterError> {
    active
        .iter()
        .position(|&id| id == player_id)
        .ok_or(RosterError::PlayerNotActive(player_id))
}

/// Moves a player from the active roster to the end of the finishing order.
fn set_finished(
    active: &mut Vec<PlayerId>,
    finished: &mut Vec<PlayerId>,
    player_id: PlayerId,
) -> Result<(), RosterError> {
    let index = position(active, player_id)?;
    finished.push(active.remove(index));
    Ok(())
}

/// Finishing order followed by whoever is still holding cards.
pub(super) fn standings(finished: &[PlayerId], active: &[PlayerId]) -> Option<Ranking> {
    Ranking::from_order(finished.iter().chain(active).copied().collect())
}

impl Game {
    /// Settles the turn `player_id` just took: moves play to the next
    /// player, or ends the round when a stop condition is met.
    pub(super) fn finish_turn(&self, player_id: PlayerId) -> Result<TurnOutcome, RosterError> {
        let players = self.players.lock();
        let active = self.active.lock();
        let pile = self.pile.lock();

        let player = players
            .iter()
            .find(|p| p.id() == player_id)
            .ok_or(RosterError::PlayerNotActive(player_id))?;

        if player.hand().is_empty() || pile.is_top_rank_reached(self.options.top_rank) {
            drop(pile);
            drop(active);
            drop(players);
            return self.end_round(player_id);
        }

        let next_id = next_player(&active, player_id)?;
        let next = players
            .iter()
            .find(|p| p.id() == next_id)
            .ok_or(RosterError::PlayerNotActive(next_id))?;

        if rules::round_should_continue(&pile, next, self.options.top_rank) {
            drop(pile);
            drop(active);
            drop(players);
            *self.current.lock() = Some(next_id);
            return Ok(TurnOutcome::NextTurn(next_id));
        }

        drop(pile);
        drop(active);
        drop(players);
        self.end_round(next_id)
    }

    /// Clears the pile and decides who leads next.
    ///
    /// If `player_id` has emptied their hand they leave the active roster
    /// and the player after them leads; otherwise `player_id` leads.
    fn end_round(&self, player_id: PlayerId) -> Result<TurnOutcome, RosterError> {
        self.pile.lock().clear();
        let round = self.rounds.fetch_add(1, core::sync::atomic::Ordering::SeqCst) + 1;

        let emptied = self
            .players
            .lock()
            .iter()
            .find(|p| p.id() == player_id)
            .ok_or(RosterError::PlayerNotActive(player_id))?
            .hand()
            .is_empty();

        if !emptied {
            log::info!("round {round} over, player {player_id} leads next");
            *self.current.lock() = Some(player_id);
            return Ok(TurnOutcome::RoundOver {
                finished: None,
                leader: player_id,
            });
        }

        let mut active = self.active.lock();
        let mut finished = self.finished.lock();

        // Captured before removal, the seat index shifts afterwards.
        let leader = next_player(&active, player_id)?;
        set_finished(&mut active, &mut finished, player_id)?;
        log::info!(
            "round {round} over, player {player_id} finished in place {}",
            finished.len()
        );

        if active.len() <= 1 {
            let ranking = standings(&finished, &active);
            drop(finished);
            drop(active);
            *self.current.lock() = None;
            *self.state.lock() = GameState::GameOver;

            let ranking = ranking.ok_or(RosterError::PlayerNotActive(player_id))?;
            log::info!("game over: king {}, koos {}", ranking.king, ranking.koos);
            return Ok(TurnOutcome::GameOver(ranking));
        }

        drop(finished);
        drop(active);
        *self.current.lock() = Some(leader);
        Ok(TurnOutcome::RoundOver {
            finished: Some(player_id),
            leader,
        })
    }
}
