//! Duplicate-scoring point tables and the pure functions over them.
//!
//! All values are for the fixed non-vulnerable schedule. The tables are data,
//! keyed by strain and double status, so the whole rule set is auditable in
//! one place; the functions below only combine them.

use crate::contract::DoubleStatus;
use crate::strain::Strain;

/// Per-trick value of a strain: the first odd trick and each subsequent one.
/// Only no-trump distinguishes the two.
#[derive(Debug, Clone, Copy)]
pub struct TrickValue {
    pub first: i32,
    pub rest: i32,
}

/// Indexed by `Strain::idx()`: clubs, diamonds, hearts, spades, no-trump.
pub const TRICK_VALUES: [TrickValue; 5] = [
    TrickValue { first: 20, rest: 20 },
    TrickValue { first: 20, rest: 20 },
    TrickValue { first: 30, rest: 30 },
    TrickValue { first: 30, rest: 30 },
    TrickValue { first: 40, rest: 30 },
];

pub const DOUBLE_BONUS: i32 = 50;
pub const REDOUBLE_BONUS: i32 = 100;

/// Trick-score threshold separating part-scores from games.
pub const GAME_THRESHOLD: i32 = 100;
pub const PART_SCORE_BONUS: i32 = 50;
pub const GAME_BONUS: i32 = 300;

pub const SLAM_BONUS: i32 = 500;
pub const GRAND_SLAM_BONUS: i32 = 1000;

/// Flat overtrick values once the contract is doubled or redoubled;
/// undoubled overtricks are worth the strain's subsequent-trick value.
pub const DOUBLED_OVERTRICK: i32 = 100;
pub const REDOUBLED_OVERTRICK: i32 = 200;

/// Undoubled undertricks cost a flat rate each.
pub const UNDOUBLED_UNDERTRICK: i32 = 50;

/// Stepped undertrick schedule for doubled and redoubled contracts: the first
/// undertrick costs `first`, each further one `first * escalation`, and every
/// undertrick past the third adds `first` again.
#[derive(Debug, Clone, Copy)]
pub struct PenaltySchedule {
    pub first: i32,
    pub escalation: i32,
}

pub const DOUBLED_PENALTY: PenaltySchedule = PenaltySchedule {
    first: 100,
    escalation: 2,
};

pub const REDOUBLED_PENALTY: PenaltySchedule = PenaltySchedule {
    first: 200,
    escalation: 2,
};

impl PenaltySchedule {
    pub fn total(&self, undertricks: u8) -> i32 {
        debug_assert!(undertricks >= 1);
        let down = undertricks as i32;
        let mut penalty = self.first + self.first * self.escalation * (down - 1);
        if down >= 4 {
            penalty += self.first * (down - 3);
        }
        penalty
    }
}

/// Undoubled trick score for a contract of `level` in `strain`.
pub fn trick_score(level: u8, strain: Strain) -> i32 {
    let value = TRICK_VALUES[strain.idx()];
    value.first + value.rest * (i32::from(level) - 1)
}

/// Score awarded to the declaring pair for a made contract.
///
/// `max_level` is the highest level the declarer could have made in this
/// strain; the gap above `level` is paid out as overtricks. The game bonus is
/// judged on the running score after the double/redouble multiplier and bonus
/// have been applied.
pub fn made_score(level: u8, strain: Strain, status: DoubleStatus, max_level: u8) -> i32 {
    let mut score = trick_score(level, strain);
    match status {
        DoubleStatus::Undoubled => {}
        DoubleStatus::Doubled => {
            score *= 2;
            score += DOUBLE_BONUS;
        }
        DoubleStatus::Redoubled => {
            score *= 4;
            score += REDOUBLE_BONUS;
        }
    }

    score += if score >= GAME_THRESHOLD {
        GAME_BONUS
    } else {
        PART_SCORE_BONUS
    };

    score += match level {
        6 => SLAM_BONUS,
        7 => GRAND_SLAM_BONUS,
        _ => 0,
    };

    if max_level > level {
        let spare = i32::from(max_level - level);
        score += spare
            * match status {
                DoubleStatus::Undoubled => TRICK_VALUES[strain.idx()].rest,
                DoubleStatus::Doubled => DOUBLED_OVERTRICK,
                DoubleStatus::Redoubled => REDOUBLED_OVERTRICK,
            };
    }

    score
}

/// Penalty collected by the defending pair when the contract fails by
/// `undertricks` tricks.
pub fn undertrick_penalty(status: DoubleStatus, undertricks: u8) -> i32 {
    match status {
        DoubleStatus::Undoubled => UNDOUBLED_UNDERTRICK * i32::from(undertricks),
        DoubleStatus::Doubled => DOUBLED_PENALTY.total(undertricks),
        DoubleStatus::Redoubled => REDOUBLED_PENALTY.total(undertricks),
    }
}
