//! Round rules: play legality, pile updates, and round termination.
//!
//! Everything here is a pure function over a hand and a [`RoundPile`], so
//! the game can validate a play completely before it mutates anything.

use crate::card::{Card, Rank};
use crate::error::PlayError;
use crate::hand::Hand;
use crate::pile::{PileEntry, RoundPile};
use crate::player::Player;

/// Returns whether every selected card outranks every card on top of the pile.
///
/// An empty top (start of a round) accepts any selection.
///
/// ```
/// use kingorkoos::rules::validate_play;
/// use kingorkoos::{Card, Rank, Suit};
///
/// let top = [Card::new(Rank::Nine, Suit::Clubs)];
/// assert!(validate_play(&[Card::new(Rank::Jack, Suit::Hearts)], &top));
/// assert!(!validate_play(&[Card::new(Rank::Nine, Suit::Hearts)], &top));
/// ```
#[must_use]
pub fn validate_play(selected: &[Card], previous: &[Card]) -> bool {
    selected
        .iter()
        .all(|card| previous.iter().all(|prev| card.rank > prev.rank))
}

/// Returns how many cards a round leader may play at most: the largest
/// group of same-rank cards in the hand.
#[must_use]
pub fn max_playable_count(hand: &Hand) -> usize {
    hand.max_same_rank()
}

/// Returns how many cards the next play must contain, or `None` when the
/// pile is empty and the leader picks the count.
#[must_use]
pub const fn required_play_count(top: &[Card]) -> Option<usize> {
    if top.is_empty() {
        None
    } else {
        Some(top.len())
    }
}

/// Checks a non-empty play against the hand and the pile.
///
/// # Errors
///
/// Returns the first rule the selection breaks: an empty selection, a wrong
/// card count, mixed ranks, a duplicated card, a card missing from the
/// hand, or a rank that does not beat the top of the pile.
pub fn check_play(hand: &Hand, selected: &[Card], pile: &RoundPile) -> Result<(), PlayError> {
    let Some(first) = selected.first() else {
        return Err(PlayError::EmptyPlay);
    };

    let top = pile.top_cards();
    match required_play_count(top) {
        Some(expected) if selected.len() != expected => {
            return Err(PlayError::WrongCardCount {
                expected,
                actual: selected.len(),
            });
        }
        Some(_) => {}
        None => {
            let max = max_playable_count(hand);
            if selected.len() > max {
                return Err(PlayError::TooManyCards {
                    max,
                    actual: selected.len(),
                });
            }
        }
    }

    if selected.iter().any(|card| card.rank != first.rank) {
        return Err(PlayError::MixedRanks);
    }

    for (index, card) in selected.iter().enumerate() {
        if selected[..index].contains(card) {
            return Err(PlayError::DuplicateCard(*card));
        }
    }

    if let Some(missing) = selected.iter().find(|card| !hand.contains(card)) {
        return Err(PlayError::CardNotInHand(*missing));
    }

    if !validate_play(selected, top) {
        return Err(PlayError::RankTooLow);
    }

    Ok(())
}

/// Moves the selected cards from the player's hand to the pile.
///
/// The cards always leave the hand. A new entry is appended only when the
/// pile is empty or the play outranks the current top; returns whether it
/// was appended. Callers are expected to run [`check_play`] first.
pub fn apply_play(player: &mut Player, selected: &[Card], pile: &mut RoundPile) -> bool {
    player.hand_mut().remove_all(selected);

    let beats_top = match (pile.top().and_then(PileEntry::rank), selected.first()) {
        (None, _) => true,
        (Some(top), Some(card)) => card.rank > top,
        (Some(_), None) => false,
    };

    if pile.is_empty() || beats_top {
        pile.push(PileEntry::new(selected.to_vec(), player.id()));
        true
    } else {
        false
    }
}

/// Returns whether `player` may take another turn in the current round.
///
/// A fresh round always continues. Otherwise the round is over once the top
/// rank is on the pile, once play has come back around to whoever played
/// the top entry, or once the player has no cards left.
#[must_use]
pub fn round_should_continue(pile: &RoundPile, player: &Player, top_rank: Rank) -> bool {
    if pile.is_empty() {
        return true;
    }

    !(pile.is_top_rank_reached(top_rank)
        || pile.last_player() == Some(player.id())
        || player.hand().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Suit, TOP_RANK};

    const fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    fn player_with(id: u8, cards: &[Card]) -> Player {
        let mut player = Player::new(id, "p");
        player.hand_mut().extend(cards.iter().copied());
        player.hand_mut().sort();
        player
    }

    fn pile_with(cards: &[Card], played_by: u8) -> RoundPile {
        let mut pile = RoundPile::new();
        pile.push(PileEntry::new(cards.to_vec(), played_by));
        pile
    }

    #[test]
    fn validate_play_compares_every_card() {
        let top = [card(Rank::Six, Suit::Spades), card(Rank::Six, Suit::Hearts)];
        assert!(validate_play(
            &[card(Rank::Seven, Suit::Clubs), card(Rank::Seven, Suit::Hearts)],
            &top
        ));
        assert!(!validate_play(
            &[card(Rank::Six, Suit::Clubs), card(Rank::Six, Suit::Diamonds)],
            &top
        ));
        assert!(validate_play(&[card(Rank::Four, Suit::Clubs)], &[]));
    }

    #[test]
    fn required_count_follows_top_of_pile() {
        assert_eq!(required_play_count(&[]), None);
        assert_eq!(
            required_play_count(&[card(Rank::Ten, Suit::Spades), card(Rank::Ten, Suit::Clubs)]),
            Some(2)
        );
    }

    #[test]
    fn check_play_reports_each_rule() {
        let hand = Hand::from_cards([
            card(Rank::Four, Suit::Hearts),
            card(Rank::Four, Suit::Diamonds),
            card(Rank::Eight, Suit::Spades),
            card(Rank::Ace, Suit::Hearts),
        ]);
        let empty = RoundPile::new();

        assert_eq!(check_play(&hand, &[], &empty), Err(PlayError::EmptyPlay));
        assert_eq!(
            check_play(
                &hand,
                &[
                    card(Rank::Four, Suit::Hearts),
                    card(Rank::Four, Suit::Diamonds),
                    card(Rank::Four, Suit::Clubs)
                ],
                &empty
            ),
            Err(PlayError::TooManyCards { max: 2, actual: 3 })
        );
        assert_eq!(
            check_play(
                &hand,
                &[card(Rank::Four, Suit::Hearts), card(Rank::Eight, Suit::Spades)],
                &empty
            ),
            Err(PlayError::MixedRanks)
        );
        assert_eq!(
            check_play(
                &hand,
                &[card(Rank::Four, Suit::Hearts), card(Rank::Four, Suit::Hearts)],
                &empty
            ),
            Err(PlayError::DuplicateCard(card(Rank::Four, Suit::Hearts)))
        );
        assert_eq!(
            check_play(&hand, &[card(Rank::King, Suit::Clubs)], &empty),
            Err(PlayError::CardNotInHand(card(Rank::King, Suit::Clubs)))
        );
        assert_eq!(
            check_play(
                &hand,
                &[card(Rank::Four, Suit::Hearts), card(Rank::Four, Suit::Diamonds)],
                &empty
            ),
            Ok(())
        );

        let pile = pile_with(&[card(Rank::Nine, Suit::Clubs)], 1);
        assert_eq!(
            check_play(
                &hand,
                &[card(Rank::Four, Suit::Hearts), card(Rank::Four, Suit::Diamonds)],
                &pile
            ),
            Err(PlayError::WrongCardCount {
                expected: 1,
                actual: 2
            })
        );
        assert_eq!(
            check_play(&hand, &[card(Rank::Eight, Suit::Spades)], &pile),
            Err(PlayError::RankTooLow)
        );
        assert_eq!(check_play(&hand, &[card(Rank::Ace, Suit::Hearts)], &pile), Ok(()));
    }

    #[test]
    fn apply_play_moves_cards_to_pile() {
        let mut player = player_with(
            3,
            &[card(Rank::Five, Suit::Hearts), card(Rank::Queen, Suit::Clubs)],
        );
        let mut pile = RoundPile::new();

        assert!(apply_play(&mut player, &[card(Rank::Five, Suit::Hearts)], &mut pile));
        assert_eq!(player.hand().len(), 1);
        assert_eq!(pile.last_player(), Some(3));
        assert_eq!(pile.top_cards(), &[card(Rank::Five, Suit::Hearts)]);
    }

    #[test]
    fn apply_play_keeps_top_when_not_beaten() {
        let mut player = player_with(2, &[card(Rank::Five, Suit::Hearts)]);
        let mut pile = pile_with(&[card(Rank::Nine, Suit::Clubs)], 1);

        assert!(!apply_play(&mut player, &[card(Rank::Five, Suit::Hearts)], &mut pile));
        assert!(player.hand().is_empty());
        assert_eq!(pile.len(), 1);
        assert_eq!(pile.last_player(), Some(1));
    }

    #[test]
    fn round_continues_until_a_stop_condition() {
        let player = player_with(0, &[card(Rank::Five, Suit::Hearts)]);
        let fresh = RoundPile::new();
        assert!(round_should_continue(&fresh, &player, TOP_RANK));

        let other = pile_with(&[card(Rank::Nine, Suit::Clubs)], 1);
        assert!(round_should_continue(&other, &player, TOP_RANK));

        let own = pile_with(&[card(Rank::Nine, Suit::Clubs)], 0);
        assert!(!round_should_continue(&own, &player, TOP_RANK));

        let top = pile_with(&[card(Rank::Three, Suit::Clubs)], 1);
        assert!(!round_should_continue(&top, &player, TOP_RANK));

        let emptied = player_with(0, &[]);
        assert!(!round_should_continue(&other, &emptied, TOP_RANK));
    }

    #[test]
    fn round_check_is_idempotent() {
        let player = player_with(0, &[card(Rank::Five, Suit::Hearts)]);
        let pile = pile_with(&[card(Rank::Nine, Suit::Clubs)], 1);
        let (before_pile, before_player) = (pile.clone(), player.clone());

        let first = round_should_continue(&pile, &player, TOP_RANK);
        let second = round_should_continue(&pile, &player, TOP_RANK);

        assert_eq!(first, second);
        assert_eq!(pile, before_pile);
        assert_eq!(player, before_player);
    }
}
