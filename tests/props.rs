//! Property tests for the deck and the play rules.

use std::collections::HashSet;

use kingorkoos::rules::{required_play_count, validate_play};
use kingorkoos::{Card, DECK_SIZE, Deck, Game, GameOptions, Rank, Suit};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn any_card() -> impl Strategy<Value = Card> {
    (0..Rank::ALL.len(), 0..Suit::ALL.len())
        .prop_map(|(rank, suit)| Card::new(Rank::ALL[rank], Suit::ALL[suit]))
}

proptest! {
    /// Property: a shuffled deck still holds every card exactly once.
    #[test]
    fn prop_shuffled_deck_is_complete(seed in any::<u64>()) {
        let mut deck = Deck::new();
        deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));

        let cards: HashSet<Card> = deck.cards().iter().copied().collect();
        prop_assert_eq!(deck.len(), DECK_SIZE);
        prop_assert_eq!(cards.len(), DECK_SIZE);
    }

    /// Property: dealing gives every player floor(N/P) cards, leaves N mod P
    /// undealt, and never gives out a card twice.
    #[test]
    fn prop_deal_is_even_and_disjoint(players in 1usize..=12, seed in any::<u64>()) {
        let game = Game::new(GameOptions::default(), seed);
        for seat in 0..players {
            game.join(&format!("player {seat}")).unwrap();
        }
        game.deal().unwrap();

        let mut seen = HashSet::new();
        for player in game.players.lock().iter() {
            prop_assert_eq!(player.hand().len(), DECK_SIZE / players);
            for card in player.hand().cards() {
                prop_assert!(seen.insert(*card));
            }
        }
        prop_assert_eq!(game.undealt().len(), DECK_SIZE % players);
        prop_assert_eq!(seen.len() + game.undealt().len(), DECK_SIZE);
    }

    /// Property: a play is valid exactly when no card on the pile ties or
    /// outranks any selected card.
    #[test]
    fn prop_validate_play_is_strict(
        selected in prop::collection::vec(any_card(), 1..4),
        previous in prop::collection::vec(any_card(), 0..4),
    ) {
        let expected = selected
            .iter()
            .all(|s| previous.iter().all(|p| s.rank > p.rank));
        prop_assert_eq!(validate_play(&selected, &previous), expected);

        if let (Some(low), Some(high)) = (
            selected.iter().map(|c| c.rank).min(),
            previous.iter().map(|c| c.rank).max(),
        ) {
            prop_assert_eq!(validate_play(&selected, &previous), low > high);
        }
    }

    /// Property: the required count always matches the top entry's size.
    #[test]
    fn prop_required_count_matches_top(top in prop::collection::vec(any_card(), 0..5)) {
        let required = required_play_count(&top);
        if top.is_empty() {
            prop_assert_eq!(required, None);
        } else {
            prop_assert_eq!(required, Some(top.len()));
        }
    }
}
