//! The textual deal encoding handed to the double-dummy solver.
//!
//! Format: dealer letter, a colon, then each seat's 13 cards starting with
//! the dealer and continuing in calling order. A hand lists its suits as
//! spades.hearts.diamonds.clubs, ranks only, ten written as `T`; hands are
//! separated by single spaces. Example:
//!
//! `N:AKQJ.T98.765.432 ... ... ...`

use crate::board::{Board, Vulnerability};
use crate::card::Card;
use crate::hand::Hand;
use crate::rank::Rank;
use crate::seat::Seat;
use crate::suit::Suit;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DealError {
    #[error("deal string is missing the dealer prefix")]
    MissingDealer,
    #[error("unknown seat letter '{0}'")]
    UnknownSeat(char),
    #[error("expected 4 hands, found {0}")]
    WrongHandCount(usize),
    #[error("expected 4 suit groups in hand, found {0}")]
    WrongSuitCount(usize),
    #[error("unknown rank letter '{0}'")]
    UnknownRank(char),
}

/// Render a board in the solver's deal encoding.
pub fn export_deal(board: &Board) -> String {
    let mut out = String::new();
    out.push(board.dealer.to_char());
    out.push(':');
    for (i, seat) in Seat::order_from(board.dealer).into_iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        match board.get_hand(seat) {
            Some(hand) => out.push_str(&export_hand(hand)),
            None => out.push('-'),
        }
    }
    out
}

pub fn export_hand(hand: &Hand) -> String {
    let mut out = String::new();
    for (i, suit) in Suit::DISPLAY_ORDER.into_iter().enumerate() {
        if i > 0 {
            out.push('.');
        }
        out.push_str(&hand.holding(suit));
    }
    out
}

/// Parse a deal string back into a board. Vulnerability is not part of the
/// encoding and comes back as `None`.
pub fn parse_deal(s: &str) -> Result<Board, DealError> {
    let (dealer_str, hands_str) = s.split_once(':').ok_or(DealError::MissingDealer)?;
    let dealer_char = dealer_str.chars().next().ok_or(DealError::MissingDealer)?;
    let dealer = Seat::from_char(dealer_char).ok_or(DealError::UnknownSeat(dealer_char))?;

    let hand_strs: Vec<&str> = hands_str.split_whitespace().collect();
    if hand_strs.len() != 4 {
        return Err(DealError::WrongHandCount(hand_strs.len()));
    }

    let mut hands = HashMap::new();
    for (seat, hand_str) in Seat::order_from(dealer).into_iter().zip(hand_strs) {
        if hand_str != "-" {
            hands.insert(seat, parse_hand(hand_str)?);
        }
    }

    Ok(Board::new(dealer, Vulnerability::None, hands))
}

pub fn parse_hand(s: &str) -> Result<Hand, DealError> {
    let suits: Vec<&str> = s.split('.').collect();
    if suits.len() != 4 {
        return Err(DealError::WrongSuitCount(suits.len()));
    }

    let mut cards = Vec::new();
    for (suit, ranks) in Suit::DISPLAY_ORDER.into_iter().zip(suits) {
        for c in ranks.chars() {
            let rank = Rank::from_char(c).ok_or(DealError::UnknownRank(c))?;
            cards.push(Card::new(suit, rank));
        }
    }
    Ok(Hand::new(cards))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_board(dealer: Seat) -> Board {
        // Suit-complete hands: each seat holds one full suit.
        let mut hands = HashMap::new();
        for (seat, suit) in Seat::ALL.into_iter().zip(Suit::DISPLAY_ORDER) {
            let cards = Rank::ALL.into_iter().map(|r| Card::new(suit, r)).collect();
            hands.insert(seat, Hand::new(cards));
        }
        Board::new(dealer, Vulnerability::None, hands)
    }

    #[test]
    fn test_export_starts_with_dealer_hand() {
        let board = fixed_board(Seat::East);
        let deal = export_deal(&board);
        // East holds all the hearts, so its hand leads the string.
        assert!(
            deal.starts_with("E:.AKQJT98765432.."),
            "unexpected deal: {deal}"
        );
        assert_eq!(deal.split_whitespace().count(), 4);
    }

    #[test]
    fn test_ten_is_rendered_as_t() {
        let board = fixed_board(Seat::North);
        let deal = export_deal(&board);
        assert!(deal.contains('T'));
        assert!(!deal.contains("10"));
    }

    #[test]
    fn test_roundtrip() {
        let board = fixed_board(Seat::South);
        let parsed = parse_deal(&export_deal(&board)).unwrap();
        assert_eq!(parsed.dealer, Seat::South);
        for seat in Seat::ALL {
            let mut expected = board.get_hand(seat).unwrap().clone();
            let mut actual = parsed.get_hand(seat).unwrap().clone();
            expected.sort();
            actual.sort();
            assert_eq!(expected, actual);
        }
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_deal("AKQ.J.T.9"), Err(DealError::MissingDealer));
        assert_eq!(parse_deal("Q:a b c d"), Err(DealError::UnknownSeat('Q')));
        assert_eq!(
            parse_deal("N:AKQ.J.T.9 AKQ.J.T.9"),
            Err(DealError::WrongHandCount(2))
        );
        assert_eq!(
            parse_deal("N:AKQ.J.T 2.3.4.5 6.7.8.9 T.J.Q.K"),
            Err(DealError::WrongSuitCount(3))
        );
        assert_eq!(
            parse_deal("N:AKZ.J.T.9 2.3.4.5 6.7.8.9 T.J.Q.K"),
            Err(DealError::UnknownRank('Z'))
        );
    }
}
