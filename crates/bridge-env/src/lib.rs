//! Turn-based bridge bidding environment.
//!
//! Four seated agents call in rotation; every accepted call produces an
//! updated public state, a zero-sum reward pair measured against the
//! double-dummy par score, and a termination flag.

pub mod auction;
pub mod deck;
pub mod env;
pub mod error;
pub mod seats;
pub mod solver;

pub use auction::{AuctionState, Phase};
pub use env::{AuctionEnv, Observation, Step};
pub use error::{EnvError, IllegalCall};
pub use seats::{PairRecord, SeatRecord};
pub use solver::{DealSolver, DdsSolver, TableSolver};
