//! The flat action catalog: every call an agent can submit, as one ordered
//! table of 38 slots.
//!
//! Slot 0 is Pass, slots 1..=35 are the bids from 1C up to 7NT in strict
//! ranking order, and slots 36/37 are Double/Redouble. `encode` and `decode`
//! are mutual inverses over the whole range.

use crate::call::Call;
use crate::strain::Strain;
use once_cell::sync::Lazy;

/// Total number of catalog slots.
pub const ACTION_COUNT: usize = 38;

pub const PASS: u8 = 0;
pub const DOUBLE: u8 = 36;
pub const REDOUBLE: u8 = 37;

/// Number of distinct bids (7 levels x 5 strains).
pub const BID_COUNT: u8 = 35;

/// All 38 calls in catalog order.
pub static CALLS: Lazy<[Call; ACTION_COUNT]> = Lazy::new(|| {
    let mut table = [Call::Pass; ACTION_COUNT];
    for level in 1..=7u8 {
        for strain in Strain::ALL {
            let call = Call::Bid { level, strain };
            table[encode(call) as usize] = call;
        }
    }
    table[DOUBLE as usize] = Call::Double;
    table[REDOUBLE as usize] = Call::Redouble;
    table
});

/// The catalog index of a call.
pub fn encode(call: Call) -> u8 {
    match call {
        Call::Pass => PASS,
        Call::Bid { level, strain } => 1 + bid_order_key(level, strain),
        Call::Double => DOUBLE,
        Call::Redouble => REDOUBLE,
    }
}

/// The call at a catalog index, or `None` if the index is out of range.
pub fn decode(index: u8) -> Option<Call> {
    CALLS.get(index as usize).copied()
}

/// Ranking key for bids: 0 for 1C through 34 for 7NT. Pass, Double, and
/// Redouble have no rank.
pub fn order_key(call: Call) -> Option<u8> {
    match call {
        Call::Bid { level, strain } => Some(bid_order_key(level, strain)),
        _ => None,
    }
}

pub fn bid_order_key(level: u8, strain: Strain) -> u8 {
    (level - 1) * 5 + strain.idx() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_roundtrip() {
        for index in 0..ACTION_COUNT as u8 {
            let call = decode(index).unwrap();
            assert_eq!(encode(call), index);
        }
        assert_eq!(decode(ACTION_COUNT as u8), None);
        assert_eq!(decode(u8::MAX), None);
    }

    #[test]
    fn test_known_slots() {
        assert_eq!(decode(PASS), Some(Call::Pass));
        assert_eq!(
            decode(1),
            Some(Call::Bid {
                level: 1,
                strain: Strain::Clubs
            })
        );
        assert_eq!(
            decode(35),
            Some(Call::Bid {
                level: 7,
                strain: Strain::NoTrump
            })
        );
        assert_eq!(decode(DOUBLE), Some(Call::Double));
        assert_eq!(decode(REDOUBLE), Some(Call::Redouble));
    }

    #[test]
    fn test_order_key_monotonic_over_catalog() {
        let mut previous = None;
        for index in 1..=BID_COUNT {
            let key = order_key(decode(index).unwrap()).unwrap();
            if let Some(p) = previous {
                assert!(key > p, "slot {index} does not outrank its predecessor");
            }
            previous = Some(key);
        }
    }

    #[test]
    fn test_order_key_only_for_bids() {
        assert_eq!(order_key(Call::Pass), None);
        assert_eq!(order_key(Call::Double), None);
        assert_eq!(order_key(Call::Redouble), None);
    }

    #[test]
    fn test_level_outranks_strain() {
        let one_nt = bid_order_key(1, Strain::NoTrump);
        let two_clubs = bid_order_key(2, Strain::Clubs);
        assert!(two_clubs > one_nt);
    }
}
