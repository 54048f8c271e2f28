use crate::hand::Hand;
use crate::seat::Seat;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Vulnerability {
    #[default]
    None,
    NS,
    EW,
    Both,
}

impl fmt::Display for Vulnerability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Vulnerability::None => "None",
            Vulnerability::NS => "NS",
            Vulnerability::EW => "EW",
            Vulnerability::Both => "All",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub dealer: Seat,
    pub vulnerability: Vulnerability,
    pub hands: HashMap<Seat, Hand>,
}

impl Board {
    pub fn new(dealer: Seat, vulnerability: Vulnerability, hands: HashMap<Seat, Hand>) -> Self {
        Self {
            dealer,
            vulnerability,
            hands,
        }
    }

    pub fn get_hand(&self, seat: Seat) -> Option<&Hand> {
        self.hands.get(&seat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Card;
    use crate::rank::Rank;
    use crate::suit::Suit;

    #[test]
    fn test_get_hand() {
        let mut hands = HashMap::new();
        hands.insert(
            Seat::North,
            Hand::new(vec![Card::new(Suit::Spades, Rank::Ace)]),
        );
        let board = Board::new(Seat::North, Vulnerability::None, hands);
        assert!(board.get_hand(Seat::North).is_some());
        assert!(board.get_hand(Seat::East).is_none());
    }
}
