//! Parsing of typed card selections.
//!
//! A selection is one rank followed by one or more comma-separated suit
//! letters: `10H` is the ten of hearts, `2H,S` the twos of hearts and
//! spades. Blank input selects nothing, which passes the turn.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::card::{Card, Rank, Suit};
use crate::error::ParseError;

const RANK_CHARS: &str = "0123456789JQKA";

/// Parses a selection into cards.
///
/// # Errors
///
/// Returns an error if the rank is unknown, no suit follows it, or a suit
/// is not one of `S`, `C`, `H`, `D`.
///
/// ```
/// use kingorkoos::selection::parse_selection;
/// use kingorkoos::{Card, Rank, Suit};
///
/// let cards = parse_selection("2h, s").unwrap();
/// assert_eq!(
///     cards,
///     [Card::new(Rank::Two, Suit::Hearts), Card::new(Rank::Two, Suit::Spades)]
/// );
/// assert!(parse_selection("   ").unwrap().is_empty());
/// ```
pub fn parse_selection(input: &str) -> Result<Vec<Card>, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let split = input
        .find(|c: char| !RANK_CHARS.contains(c.to_ascii_uppercase()))
        .unwrap_or(input.len());
    let (rank_token, suits) = input.split_at(split);

    let rank = Rank::from_label(rank_token.trim()).ok_or_else(|| {
        let token = if rank_token.is_empty() {
            input
        } else {
            rank_token
        };
        ParseError::UnknownRank(token.to_string())
    })?;

    if suits.trim().is_empty() {
        return Err(ParseError::MissingSuit);
    }

    suits
        .split(',')
        .map(|token| parse_suit(token.trim()).map(|suit| Card::new(rank, suit)))
        .collect()
}

fn parse_suit(token: &str) -> Result<Suit, ParseError> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Err(ParseError::MissingSuit),
        (Some(letter), None) => {
            Suit::from_letter(letter).ok_or_else(|| ParseError::UnknownSuit(String::from(token)))
        }
        (Some(_), Some(_)) => Err(ParseError::UnknownSuit(String::from(token))),
    }
}

/// Returns whether the input names exactly one valid card, such as `10H`.
#[must_use]
pub fn is_card_token(input: &str) -> bool {
    parse_selection(input).is_ok_and(|cards| cards.len() == 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_of_hearts_is_a_card() {
        assert!(is_card_token("10H"));
        assert!(is_card_token("qd"));
        assert!(!is_card_token("1H"));
        assert!(!is_card_token("10"));
        assert!(!is_card_token("10H,S"));
        assert!(!is_card_token(""));
    }

    #[test]
    fn parses_multiple_suits_for_one_rank() {
        let cards = parse_selection("10H,S, d").unwrap();
        assert_eq!(
            cards,
            [
                Card::new(Rank::Ten, Suit::Hearts),
                Card::new(Rank::Ten, Suit::Spades),
                Card::new(Rank::Ten, Suit::Diamonds),
            ]
        );
    }

    #[test]
    fn reports_bad_tokens() {
        assert_eq!(
            parse_selection("11H"),
            Err(ParseError::UnknownRank("11".to_string()))
        );
        assert_eq!(
            parse_selection("XH"),
            Err(ParseError::UnknownRank("XH".to_string()))
        );
        assert_eq!(parse_selection("K"), Err(ParseError::MissingSuit));
        assert_eq!(parse_selection("KH,"), Err(ParseError::MissingSuit));
        assert_eq!(
            parse_selection("KH,X"),
            Err(ParseError::UnknownSuit("X".to_string()))
        );
        assert_eq!(
            parse_selection("KHS"),
            Err(ParseError::UnknownSuit("HS".to_string()))
        );
    }
}
