//! The seam to the double-dummy collaborator.

use bridge_solver::{DealAnalysis, SolveError};

/// Supplies, for a deal in the textual encoding, the per-seat per-strain
/// maximum trick counts and the par baseline. Invoked once per deal, before
/// the first call.
pub trait DealSolver {
    fn solve(&self, deal: &str) -> Result<DealAnalysis, SolveError>;
}

/// The real DDS-backed solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct DdsSolver;

impl DealSolver for DdsSolver {
    fn solve(&self, deal: &str) -> Result<DealAnalysis, SolveError> {
        bridge_solver::solve(deal)
    }
}

/// A solver that answers every deal with a preset analysis. Used for replays
/// of known deals and throughout the tests.
#[derive(Debug, Clone)]
pub struct TableSolver(pub DealAnalysis);

impl DealSolver for TableSolver {
    fn solve(&self, _deal: &str) -> Result<DealAnalysis, SolveError> {
        Ok(self.0.clone())
    }
}
