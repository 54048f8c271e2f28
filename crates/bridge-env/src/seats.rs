//! Per-deal bookkeeping for the four seats and two pairs.

use bridge_core::{Call, Strain};
use serde::{Deserialize, Serialize};

/// What one seat knows for the current deal: its double-dummy trick counts,
/// the contract levels those tricks support, and its most recent call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeatRecord {
    pub max_tricks: [u8; 5],
    pub max_level: [u8; 5],
    pub last_call: Option<Call>,
}

impl SeatRecord {
    /// Install the solver's trick counts. A strain is makeable at level L
    /// when the seat can take L + 6 tricks.
    pub fn load_solver_result(&mut self, tricks: [u8; 5]) {
        self.max_tricks = tricks;
        for (level, count) in self.max_level.iter_mut().zip(tricks) {
            *level = count.saturating_sub(6);
        }
        self.last_call = None;
    }

    pub fn max_tricks(&self, strain: Strain) -> u8 {
        self.max_tricks[strain.idx()]
    }

    pub fn max_level(&self, strain: Strain) -> u8 {
        self.max_level[strain.idx()]
    }
}

/// A pair's running score for the deal and its par-score baseline.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PairRecord {
    pub score: i32,
    pub par_score: i32,
}
