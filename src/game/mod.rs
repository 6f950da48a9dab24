//! Game engine and state management.

use core::sync::atomic::{AtomicU8, AtomicU32, Ordering};

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::sync::Mutex;

use crate::card::{Card, DECK_SIZE};
use crate::deck::Deck;
use crate::error::{DealError, JoinError, RosterError, RunError};
use crate::hand::Hand;
use crate::input::{TableView, TurnInput, TurnPrompt};
use crate::options::GameOptions;
use crate::pile::{PileEntry, RoundPile};
use crate::player::{Player, PlayerId};
use crate::result::Ranking;
use crate::rules;

mod round;
pub mod state;
mod turn;

pub use round::{next_player, previous_player, reorder_players};
pub use state::{GameState, TurnOutcome};

/// A King or Koos game that manages seating, rounds, and the finishing order.
///
/// Players [`join`](Game::join), the deck is [`deal`](Game::deal)t, and then
/// the current player either [`play`](Game::play)s cards that beat the top
/// of the pile or [`pass`](Game::pass)es. The game ends when one player is
/// left holding cards.
pub struct Game {
    /// Deck to deal from, shuffled when the game is created.
    pub deck: Mutex<Deck>,
    /// Game options.
    pub options: GameOptions,
    /// Current game state.
    pub state: Mutex<GameState>,
    /// Next player ID to assign.
    next_id: AtomicU8,
    /// Every player who joined, in join order.
    pub players: Mutex<Vec<Player>>,
    /// Players still holding cards, in seating order.
    active: Mutex<Vec<PlayerId>>,
    /// Players who emptied their hand, in the order they did.
    finished: Mutex<Vec<PlayerId>>,
    /// Pile for the current round.
    pile: Mutex<RoundPile>,
    /// Player whose turn it is.
    current: Mutex<Option<PlayerId>>,
    /// Cards left over after dealing.
    undealt: Mutex<Vec<Card>>,
    /// Rounds completed so far.
    rounds: AtomicU32,
}

impl Game {
    /// Creates a new game with the given seed for the shuffle.
    ///
    /// # Example
    ///
    /// ```
    /// use kingorkoos::{Game, GameOptions};
    ///
    /// let game = Game::new(GameOptions::default(), 42);
    /// game.join("Audrey").unwrap();
    /// game.join("Jesse").unwrap();
    /// game.deal().unwrap();
    /// assert!(game.current_player().is_some());
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);

        Self {
            deck: Mutex::new(deck),
            options,
            state: Mutex::new(GameState::WaitingForPlayers),
            next_id: AtomicU8::new(0),
            players: Mutex::new(Vec::new()),
            active: Mutex::new(Vec::new()),
            finished: Mutex::new(Vec::new()),
            pile: Mutex::new(RoundPile::new()),
            current: Mutex::new(None),
            undealt: Mutex::new(Vec::new()),
            rounds: AtomicU32::new(0),
        }
    }

    /// Joins the game under a unique name.
    ///
    /// Returns the assigned player ID.
    ///
    /// # Errors
    ///
    /// Returns an error if cards were already dealt, the name is blank or
    /// taken, or every card of the deck already has a player.
    pub fn join(&self, name: &str) -> Result<PlayerId, JoinError> {
        if *self.state.lock() != GameState::WaitingForPlayers {
            return Err(JoinError::InvalidState);
        }

        let name = name.trim();
        if name.is_empty() {
            return Err(JoinError::EmptyName);
        }

        let mut players = self.players.lock();
        if players.iter().any(|p| p.name() == name) {
            return Err(JoinError::DuplicateName);
        }
        if players.len() >= DECK_SIZE {
            return Err(JoinError::TableFull);
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        players.push(Player::new(id, name));
        drop(players);

        log::debug!("player {id} joined as {name}");
        Ok(id)
    }

    /// Deals the deck and seats the holder of the starting card first.
    ///
    /// Each player gets an equal share; leftover cards stay out of play. A
    /// single player is dealt in and the game is immediately over.
    ///
    /// # Errors
    ///
    /// Returns an error if the game was already dealt or nobody joined.
    pub fn deal(&self) -> Result<(), DealError> {
        let mut state = self.state.lock();
        if *state != GameState::WaitingForPlayers {
            return Err(DealError::InvalidState);
        }

        let mut players = self.players.lock();
        if players.is_empty() {
            return Err(DealError::NoPlayers);
        }

        let deck = core::mem::replace(&mut *self.deck.lock(), Deck::from_cards(Vec::new()));
        let undealt = deck.deal(&mut players);

        let seating = if self.options.reorder_by_starting_card {
            reorder_players(&players, self.options.starting_card)
        } else {
            players.iter().map(Player::id).collect()
        };
        log::info!(
            "dealt {} cards to {} players, {} left out, player {} leads",
            players.iter().map(|p| p.hand().len()).sum::<usize>(),
            players.len(),
            undealt.len(),
            seating[0]
        );
        drop(players);

        *self.undealt.lock() = undealt;
        self.finished.lock().clear();
        self.pile.lock().clear();

        if seating.len() > 1 {
            *self.current.lock() = Some(seating[0]);
            *state = GameState::PlayerTurn;
        } else {
            *self.current.lock() = None;
            *state = GameState::GameOver;
        }
        *self.active.lock() = seating;

        Ok(())
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        *self.state.lock()
    }

    /// Returns the player ID whose turn it is.
    ///
    /// Returns `None` before dealing and after the game is over.
    pub fn current_player(&self) -> Option<PlayerId> {
        *self.current.lock()
    }

    /// Returns the number of players who joined.
    pub fn player_count(&self) -> usize {
        self.players.lock().len()
    }

    /// Returns a copy of the specified player.
    pub fn get_player(&self, player_id: PlayerId) -> Option<Player> {
        self.players
            .lock()
            .iter()
            .find(|p| p.id() == player_id)
            .cloned()
    }

    /// Returns the name of the specified player.
    pub fn player_name(&self, player_id: PlayerId) -> Option<String> {
        self.players
            .lock()
            .iter()
            .find(|p| p.id() == player_id)
            .map(|p| p.name().to_string())
    }

    /// Returns a copy of the specified player's hand.
    pub fn get_hand(&self, player_id: PlayerId) -> Option<Hand> {
        self.players
            .lock()
            .iter()
            .find(|p| p.id() == player_id)
            .map(|p| p.hand().clone())
    }

    /// Returns players still holding cards, in seating order.
    pub fn active_players(&self) -> Vec<PlayerId> {
        self.active.lock().clone()
    }

    /// Returns players who emptied their hand, in finishing order.
    pub fn finished_players(&self) -> Vec<PlayerId> {
        self.finished.lock().clone()
    }

    /// Returns the cards left out of the deal.
    pub fn undealt(&self) -> Vec<Card> {
        self.undealt.lock().clone()
    }

    /// Returns a copy of the current round's pile.
    pub fn pile(&self) -> RoundPile {
        self.pile.lock().clone()
    }

    /// Returns the entry to beat, if any.
    pub fn pile_top(&self) -> Option<PileEntry> {
        self.pile.lock().top().cloned()
    }

    /// Returns how many cards the next play must hold, or `None` when the
    /// current player leads.
    pub fn required_count(&self) -> Option<usize> {
        rules::required_play_count(self.pile.lock().top_cards())
    }

    /// Returns the most cards the player could lead with.
    pub fn max_playable(&self, player_id: PlayerId) -> Option<usize> {
        self.players
            .lock()
            .iter()
            .find(|p| p.id() == player_id)
            .map(|p| rules::max_playable_count(p.hand()))
    }

    /// Returns the number of completed rounds.
    pub fn rounds_played(&self) -> u32 {
        self.rounds.load(Ordering::SeqCst)
    }

    /// Returns whether the current player may still act this round.
    ///
    /// This is a pure check; it never changes the pile or any hand.
    pub fn round_should_continue(&self) -> bool {
        let Some(player_id) = self.current_player() else {
            return false;
        };
        let players = self.players.lock();
        let pile = self.pile.lock();
        players
            .iter()
            .find(|p| p.id() == player_id)
            .is_some_and(|p| rules::round_should_continue(&pile, p, self.options.top_rank))
    }

    /// Returns the seat after `player_id` among active players.
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not active.
    pub fn next_player(&self, player_id: PlayerId) -> Result<PlayerId, RosterError> {
        next_player(&self.active.lock(), player_id)
    }

    /// Returns the seat before `player_id` among active players.
    ///
    /// # Errors
    ///
    /// Returns an error if the player is not active.
    pub fn previous_player(&self, player_id: PlayerId) -> Result<PlayerId, RosterError> {
        previous_player(&self.active.lock(), player_id)
    }

    /// Returns the final standings once the game is over.
    pub fn ranking(&self) -> Option<Ranking> {
        if *self.state.lock() != GameState::GameOver {
            return None;
        }
        // Same order as round end: active, then finished.
        let active = self.active.lock();
        let finished = self.finished.lock();
        round::standings(&finished, &active)
    }

    /// Returns what the current player needs to choose a play.
    pub fn prompt(&self) -> Option<TurnPrompt> {
        if *self.state.lock() != GameState::PlayerTurn {
            return None;
        }
        let player_id = self.current_player()?;
        let player = self.get_player(player_id)?;
        let pile = self.pile.lock();

        Some(TurnPrompt {
            required_count: rules::required_play_count(pile.top_cards()),
            max_count: rules::max_playable_count(player.hand()),
            pile_top: pile.top().cloned(),
            player,
        })
    }

    /// Plays a whole game, asking `input` for every turn.
    ///
    /// Deals first if nobody has yet. A rejected selection is reported back
    /// to `input` and the same player is asked again.
    ///
    /// # Errors
    ///
    /// Returns an error if the game cannot be dealt, `input` runs dry, or
    /// turn bookkeeping breaks.
    pub fn run<I, V>(&self, input: &mut I, view: &mut V) -> Result<Ranking, RunError>
    where
        I: TurnInput + ?Sized,
        V: TableView + ?Sized,
    {
        if self.state() == GameState::WaitingForPlayers {
            self.deal()?;
        }

        loop {
            let Some(prompt) = self.prompt() else {
                let ranking = self.ranking().ok_or(RunError::InvalidState)?;
                view.game_over(&ranking, &self.players.lock());
                return Ok(ranking);
            };
            view.show_turn(&prompt);

            let player_id = prompt.player.id();
            let outcome = loop {
                let cards = input.select(&prompt).ok_or(RunError::InputClosed)?;
                match self.take_turn(player_id, &cards) {
                    Ok(outcome) => break outcome,
                    Err(err) if err.is_recoverable() => {
                        log::debug!("player {player_id} rejected: {err}");
                        input.rejected(&prompt, &err);
                    }
                    Err(err) => return Err(RunError::Turn(err)),
                }
            };

            match outcome {
                TurnOutcome::NextTurn(_) => {}
                TurnOutcome::RoundOver { finished, leader } => {
                    let finished = match finished {
                        Some(id) => Some(
                            self.get_player(id)
                                .ok_or(RosterError::PlayerNotActive(id))?,
                        ),
                        None => None,
                    };
                    let leader = self
                        .get_player(leader)
                        .ok_or(RosterError::PlayerNotActive(leader))?;
                    view.round_over(finished.as_ref(), &leader);
                }
                TurnOutcome::GameOver(ranking) => {
                    view.game_over(&ranking, &self.players.lock());
                    return Ok(ranking);
                }
            }
        }
    }
}
