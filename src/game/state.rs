//! Game state types.

use crate::player::PlayerId;
use crate::result::Ranking;

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting for players to join.
    WaitingForPlayers,
    /// Cards are dealt and players take turns.
    PlayerTurn,
    /// At most one player still holds cards.
    GameOver,
}

/// What happened after an accepted play or pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The round goes on with this player.
    NextTurn(PlayerId),
    /// The round ended and the pile was cleared.
    RoundOver {
        /// The player who emptied their hand and left the table, if any.
        finished: Option<PlayerId>,
        /// The player who leads the next round.
        leader: PlayerId,
    },
    /// The game ended.
    GameOver(Ranking),
}
