//! The control loop around the auction: reset a deal, step one call at a
//! time, and hand back (observation, reward, done).

use crate::auction::{AuctionState, Phase};
use crate::deck;
use crate::error::{EnvError, IllegalCall};
use crate::seats::{PairRecord, SeatRecord};
use crate::solver::DealSolver;
use bridge_core::io::deal;
use bridge_core::{catalog, scoring, Board, Call, Pair, Seat};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Fixed-shape public state, emitted after reset and after every step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Seat whose call produced this observation; unset right after reset.
    pub turn: Option<Seat>,
    /// Seat to call next.
    pub next_turn: Seat,
    /// Catalog index of the standing contract's bid.
    pub last_contract: Option<u8>,
    /// Catalog index of each seat's most recent call, by `Seat::idx()`.
    pub seat_calls: [Option<u8>; 4],
    /// Pair holding the standing contract.
    pub winning_pair: Option<Pair>,
    /// 0 = undoubled, 1 = doubled, 2 = redoubled.
    pub double_status: u8,
    /// Running deal score per pair, by `Pair::idx()`.
    pub scores: [i32; 2],
    /// Par baseline per pair, by `Pair::idx()`.
    pub par_scores: [i32; 2],
}

/// Result of one accepted call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub observation: Observation,
    /// Zero-sum reward per pair: running score relative to par.
    pub reward: [i32; 2],
    pub done: bool,
}

/// The bidding environment for one deal at a time.
///
/// `reset` deals (or accepts) a board, queries the solver once, and caches
/// its analysis for the rest of the auction. `step` submits one flat action
/// index for the seat on turn.
#[derive(Debug)]
pub struct AuctionEnv<S> {
    solver: S,
    board: Option<Board>,
    auction: Option<AuctionState>,
    seats: [SeatRecord; 4],
    pairs: [PairRecord; 2],
    last_reward: [i32; 2],
}

impl<S: DealSolver> AuctionEnv<S> {
    pub fn new(solver: S) -> Self {
        Self {
            solver,
            board: None,
            auction: None,
            seats: Default::default(),
            pairs: Default::default(),
            last_reward: [0; 2],
        }
    }

    /// Deal a fresh random board and start its auction.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) -> Result<Observation, EnvError> {
        self.reset_with_board(deck::random_board(rng))
    }

    /// Start an auction on a caller-supplied board.
    pub fn reset_with_board(&mut self, board: Board) -> Result<Observation, EnvError> {
        let deal_string = deal::export_deal(&board);
        let analysis = self.solver.solve(&deal_string)?;

        for seat in Seat::ALL {
            self.seats[seat.idx()].load_solver_result(analysis.seat_tricks(seat));
        }
        for pair in Pair::ALL {
            self.pairs[pair.idx()] = PairRecord {
                score: 0,
                par_score: analysis.par(pair),
            };
        }
        self.auction = Some(AuctionState::new(board.dealer));
        self.last_reward = [0; 2];
        log::debug!(
            "new deal: dealer {}, par {:?}",
            board.dealer,
            [self.pairs[0].par_score, self.pairs[1].par_score]
        );
        self.board = Some(board);
        Ok(self.observation(None))
    }

    /// Apply one call for the seat on turn.
    pub fn step(&mut self, action: u8) -> Result<Step, EnvError> {
        let auction = self
            .auction
            .as_mut()
            .ok_or(EnvError::InvariantViolation("step called before reset"))?;
        if auction.is_terminal() {
            return Err(EnvError::InvariantViolation(
                "step called after the auction ended",
            ));
        }

        let call = catalog::decode(action).ok_or(IllegalCall::UnknownAction(action))?;
        let seat = auction.turn();
        let phase = auction.apply(seat, call)?;

        self.seats[seat.idx()].last_call = Some(call);
        let reward = self.update_scores(call);
        Ok(Step {
            observation: self.observation(Some(seat)),
            reward,
            done: phase.is_terminal(),
        })
    }

    /// Catalog indices of every call the seat on turn could legally make.
    pub fn legal_actions(&self) -> Vec<u8> {
        self.auction
            .as_ref()
            .map(|a| a.legal_calls().into_iter().map(catalog::encode).collect())
            .unwrap_or_default()
    }

    pub fn phase(&self) -> Phase {
        self.auction
            .as_ref()
            .map(AuctionState::phase)
            .unwrap_or(Phase::NotStarted)
    }

    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn auction(&self) -> Option<&AuctionState> {
        self.auction.as_ref()
    }

    pub fn seat_record(&self, seat: Seat) -> &SeatRecord {
        &self.seats[seat.idx()]
    }

    pub fn pair_record(&self, pair: Pair) -> &PairRecord {
        &self.pairs[pair.idx()]
    }

    /// Re-score the deal after an accepted call and return the reward pair.
    ///
    /// With no contract on the table both pairs sit at zero and are measured
    /// straight against par. Once a contract stands, every non-pass call
    /// re-prices it against the declarer's double-dummy tricks; a pass
    /// carries the previous reward forward.
    fn update_scores(&mut self, call: Call) -> [i32; 2] {
        let contract = self
            .auction
            .as_ref()
            .and_then(|a| a.contract().copied());

        let reward = match contract {
            None => {
                self.pairs[0].score = 0;
                self.pairs[1].score = 0;
                [-self.pairs[0].par_score, -self.pairs[1].par_score]
            }
            Some(_) if call == Call::Pass => self.last_reward,
            Some(contract) => {
                let declaring = contract.pair();
                let opposing = declaring.opponent();
                let record = &self.seats[contract.declarer.idx()];
                let max_level = record.max_level(contract.strain);

                let declarer_score = if contract.level <= max_level {
                    scoring::made_score(
                        contract.level,
                        contract.strain,
                        contract.double_status,
                        max_level,
                    )
                } else {
                    let available = record.max_tricks(contract.strain);
                    let undertricks = contract.level + 6 - available;
                    -scoring::undertrick_penalty(contract.double_status, undertricks)
                };

                self.pairs[declaring.idx()].score = declarer_score;
                self.pairs[opposing.idx()].score = -declarer_score;

                let mut reward = [0; 2];
                reward[declaring.idx()] =
                    declarer_score - self.pairs[declaring.idx()].par_score;
                reward[opposing.idx()] = -reward[declaring.idx()];
                reward
            }
        };
        self.last_reward = reward;
        reward
    }

    fn observation(&self, turn: Option<Seat>) -> Observation {
        let auction = self.auction.as_ref();
        let contract = auction.and_then(|a| a.contract());

        let mut seat_calls = [None; 4];
        for seat in Seat::ALL {
            seat_calls[seat.idx()] = self.seats[seat.idx()].last_call.map(catalog::encode);
        }

        Observation {
            turn,
            next_turn: auction.map(|a| a.turn()).unwrap_or_default(),
            last_contract: contract.map(|c| catalog::encode(c.bid())),
            seat_calls,
            winning_pair: auction.and_then(|a| a.winning_pair()),
            double_status: contract.map(|c| c.double_status.flag()).unwrap_or(0),
            scores: [self.pairs[0].score, self.pairs[1].score],
            par_scores: [self.pairs[0].par_score, self.pairs[1].par_score],
        }
    }
}
