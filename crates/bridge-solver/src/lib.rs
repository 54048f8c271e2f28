//! Double-dummy analysis for a dealt board.
//!
//! Consumes the textual deal encoding produced by `bridge_core::io::deal`,
//! runs the DDS backend for the per-seat per-strain trick table, and derives
//! the par-score baseline both pairs are measured against.

mod dds;
mod par;

use bridge_core::io::deal::{self, DealError};
use bridge_core::{Pair, Seat, Strain};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolveError {
    #[error("malformed deal: {0}")]
    Deal(#[from] DealError),
    #[error("double-dummy backend failed: {0}")]
    Backend(String),
}

/// Everything the environment needs from the solver for one deal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealAnalysis {
    /// Maximum tricks takeable, indexed by `Seat::idx()` then `Strain::idx()`.
    pub tricks: [[u8; 5]; 4],
    /// Par score per pair, indexed by `Pair::idx()`. Zero-sum by construction.
    pub par: [i32; 2],
}

impl DealAnalysis {
    /// Build an analysis from a raw trick table, deriving the par baseline.
    pub fn from_tricks(tricks: [[u8; 5]; 4]) -> Self {
        let par = par::par_score(&tricks);
        Self {
            tricks,
            par: [par, -par],
        }
    }

    pub fn tricks(&self, seat: Seat, strain: Strain) -> u8 {
        self.tricks[seat.idx()][strain.idx()]
    }

    pub fn seat_tricks(&self, seat: Seat) -> [u8; 5] {
        self.tricks[seat.idx()]
    }

    pub fn par(&self, pair: Pair) -> i32 {
        self.par[pair.idx()]
    }
}

/// Solve a deal given in the textual encoding (dealer letter, colon, four
/// space-separated hands).
pub fn solve(deal: &str) -> Result<DealAnalysis, SolveError> {
    let board = deal::parse_deal(deal)?;
    let tricks = dds::solve_board(&board)?;
    Ok(DealAnalysis::from_tricks(tricks))
}
