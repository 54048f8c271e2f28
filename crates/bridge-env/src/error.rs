use bridge_core::{Call, Seat};
use bridge_solver::SolveError;
use thiserror::Error;

/// A rejected call. The auction state is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalCall {
    #[error("action index {0} is outside the 38-slot catalog")]
    UnknownAction(u8),
    #[error("bid level {0} is outside 1..=7")]
    BidOutOfRange(u8),
    #[error("{seat} called out of turn; {expected} is to call")]
    OutOfTurn { seat: Seat, expected: Seat },
    #[error("the auction has already ended")]
    Finished,
    #[error("{call} does not outrank the standing contract")]
    InsufficientBid { call: Call },
    #[error("double is not available")]
    CannotDouble,
    #[error("redouble is not available")]
    CannotRedouble,
}

#[derive(Debug, Error)]
pub enum EnvError {
    #[error("illegal call: {0}")]
    Illegal(#[from] IllegalCall),
    #[error("double-dummy solver unavailable: {0}")]
    SolverUnavailable(#[from] SolveError),
    #[error("invariant violation: {0}")]
    InvariantViolation(&'static str),
}
