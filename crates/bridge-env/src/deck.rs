//! Deck construction and dealing.

use bridge_core::{Board, Card, Hand, Rank, Seat, Suit, Vulnerability};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

/// Shuffle a full deck and split it into four 13-card hands.
pub fn deal_hands<R: Rng>(rng: &mut R) -> HashMap<Seat, Hand> {
    let mut deck = Vec::with_capacity(52);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::new(suit, rank));
        }
    }
    deck.shuffle(rng);

    let mut hands = HashMap::new();
    for (seat, chunk) in Seat::ALL.into_iter().zip(deck.chunks(13)) {
        let mut hand = Hand::new(chunk.to_vec());
        hand.sort();
        hands.insert(seat, hand);
    }
    hands
}

/// Deal a fresh board with a uniformly random dealer. Scoring does not branch
/// on vulnerability, so boards are dealt with none.
pub fn random_board<R: Rng>(rng: &mut R) -> Board {
    let dealer = Seat::ALL[rng.gen_range(0..4)];
    Board::new(dealer, Vulnerability::None, deal_hands(rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_deal_covers_the_deck() {
        let mut rng = StdRng::seed_from_u64(7);
        let hands = deal_hands(&mut rng);
        let mut seen = HashSet::new();
        for seat in Seat::ALL {
            let hand = &hands[&seat];
            assert_eq!(hand.len(), 13);
            for card in &hand.cards {
                assert!(seen.insert(*card), "duplicate card {card}");
            }
        }
        assert_eq!(seen.len(), 52);
    }

    #[test]
    fn test_same_seed_same_board() {
        let board_a = random_board(&mut StdRng::seed_from_u64(42));
        let board_b = random_board(&mut StdRng::seed_from_u64(42));
        assert_eq!(board_a.dealer, board_b.dealer);
        for seat in Seat::ALL {
            assert_eq!(board_a.get_hand(seat), board_b.get_hand(seat));
        }
    }
}
