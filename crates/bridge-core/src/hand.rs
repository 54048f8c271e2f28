use crate::card::Card;
use crate::suit::Suit;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Hand {
    pub cards: Vec<Card>,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Sort into display order: spades down to clubs, high ranks first.
    pub fn sort(&mut self) {
        self.cards.sort_by(|a, b| {
            if a.suit != b.suit {
                let suit_val = |s: Suit| match s {
                    Suit::Spades => 3,
                    Suit::Hearts => 2,
                    Suit::Diamonds => 1,
                    Suit::Clubs => 0,
                };
                suit_val(b.suit).cmp(&suit_val(a.suit))
            } else {
                b.rank.cmp(&a.rank)
            }
        });
    }

    /// The ranks held in one suit as a string like "AQT4", highest first.
    pub fn holding(&self, suit: Suit) -> String {
        let mut ranks: Vec<_> = self
            .cards
            .iter()
            .filter(|c| c.suit == suit)
            .map(|c| c.rank)
            .collect();
        ranks.sort_by(|a, b| b.cmp(a));
        ranks.iter().map(|r| r.to_char()).collect()
    }
}
