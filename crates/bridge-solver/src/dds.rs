use crate::SolveError;
use bridge_core::{Board, Rank, Seat, Strain, Suit};
use dds_bridge::contract::Strain as DdsStrain;
use dds_bridge::deal::{Deal, Seat as DdsSeat, SmallSet, Suit as DdsSuit};
use dds_bridge::solver::{self, StrainFlags};

const SEATS: [(Seat, DdsSeat); 4] = [
    (Seat::North, DdsSeat::North),
    (Seat::East, DdsSeat::East),
    (Seat::South, DdsSeat::South),
    (Seat::West, DdsSeat::West),
];

/// Run the DDS backend over a full board and collect the per-seat per-strain
/// maximum trick counts.
pub(crate) fn solve_board(board: &Board) -> Result<[[u8; 5]; 4], SolveError> {
    let mut deal = Deal::default();

    for (seat, dds_seat) in SEATS {
        let hand = board
            .get_hand(seat)
            .ok_or_else(|| SolveError::Backend(format!("board has no hand for seat {seat}")))?;
        for card in &hand.cards {
            let suit = match card.suit {
                Suit::Clubs => DdsSuit::Clubs,
                Suit::Diamonds => DdsSuit::Diamonds,
                Suit::Hearts => DdsSuit::Hearts,
                Suit::Spades => DdsSuit::Spades,
            };
            // Untyped literals so the value takes whatever width the set wants.
            let rank_val = match card.rank {
                Rank::Two => 2,
                Rank::Three => 3,
                Rank::Four => 4,
                Rank::Five => 5,
                Rank::Six => 6,
                Rank::Seven => 7,
                Rank::Eight => 8,
                Rank::Nine => 9,
                Rank::Ten => 10,
                Rank::Jack => 11,
                Rank::Queen => 12,
                Rank::King => 13,
                Rank::Ace => 14,
            };
            deal[dds_seat][suit].insert(rank_val);
        }
    }

    let tables = solver::solve_deals(&[deal], StrainFlags::all())
        .map_err(|e| SolveError::Backend(format!("{e:?}")))?;
    let table = tables
        .first()
        .copied()
        .ok_or_else(|| SolveError::Backend("solver returned no table".to_string()))?;

    let mut tricks = [[0u8; 5]; 4];
    for (seat, dds_seat) in SEATS {
        for strain in Strain::ALL {
            let dds_strain = match strain {
                Strain::Clubs => DdsStrain::Clubs,
                Strain::Diamonds => DdsStrain::Diamonds,
                Strain::Hearts => DdsStrain::Hearts,
                Strain::Spades => DdsStrain::Spades,
                Strain::NoTrump => DdsStrain::Notrump,
            };
            tricks[seat.idx()][strain.idx()] = u32::from(table[dds_strain].get(dds_seat)) as u8;
        }
    }
    Ok(tricks)
}
