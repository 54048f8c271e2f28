//! The auction state machine.
//!
//! One value per deal, mutated exactly once per accepted call. Rejected calls
//! leave the state untouched so the caller can retry or abort.

use crate::error::IllegalCall;
use bridge_core::{catalog, Call, Contract, DoubleStatus, Pair, Seat, Strain};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No deal loaded yet.
    NotStarted,
    /// Deal loaded, nobody has called.
    AwaitingFirstCall,
    InProgress,
    /// A contract stands and three passes (or the 7NT-redoubled
    /// short-circuit) closed the auction.
    Settled,
    /// All four seats passed before any bid.
    PassedOut,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Settled | Phase::PassedOut)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionState {
    dealer: Seat,
    turn: Seat,
    phase: Phase,
    contract: Option<Contract>,
    consecutive_passes: u8,
    opened_with_all_passes: bool,
    calls: Vec<Call>,
}

impl AuctionState {
    pub fn new(dealer: Seat) -> Self {
        Self {
            dealer,
            turn: dealer,
            phase: Phase::AwaitingFirstCall,
            contract: None,
            consecutive_passes: 0,
            opened_with_all_passes: false,
            calls: Vec::new(),
        }
    }

    pub fn dealer(&self) -> Seat {
        self.dealer
    }

    /// The four seats in calling order for this deal, dealer first.
    pub fn turn_order(&self) -> [Seat; 4] {
        Seat::order_from(self.dealer)
    }

    /// The seat expected to call next.
    pub fn turn(&self) -> Seat {
        self.turn
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn contract(&self) -> Option<&Contract> {
        self.contract.as_ref()
    }

    pub fn consecutive_passes(&self) -> u8 {
        self.consecutive_passes
    }

    pub fn opened_with_all_passes(&self) -> bool {
        self.opened_with_all_passes
    }

    /// Every accepted call so far, dealer first.
    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// The pair holding the standing contract, unknown while no bid stands.
    pub fn winning_pair(&self) -> Option<Pair> {
        self.contract.as_ref().map(Contract::pair)
    }

    /// Accept one call from `seat`, advancing the machine, or reject it with
    /// the state unchanged.
    pub fn apply(&mut self, seat: Seat, call: Call) -> Result<Phase, IllegalCall> {
        self.check(seat, call)?;

        if self.phase == Phase::AwaitingFirstCall {
            self.phase = Phase::InProgress;
            if matches!(call, Call::Pass) {
                self.opened_with_all_passes = true;
            }
        }

        match call {
            Call::Pass => {
                self.consecutive_passes += 1;
                if self.contract.is_none() && self.consecutive_passes == 4 {
                    self.phase = Phase::PassedOut;
                } else if self.contract.is_some() && self.consecutive_passes == 3 {
                    self.phase = Phase::Settled;
                }
            }
            Call::Bid { level, strain } => {
                self.contract = Some(Contract {
                    level,
                    strain,
                    double_status: DoubleStatus::Undoubled,
                    declarer: seat,
                });
                self.consecutive_passes = 0;
                self.opened_with_all_passes = false;
            }
            Call::Double => {
                if let Some(contract) = self.contract.as_mut() {
                    contract.double_status = DoubleStatus::Doubled;
                }
                self.consecutive_passes = 0;
            }
            Call::Redouble => {
                if let Some(contract) = self.contract.as_mut() {
                    contract.double_status = DoubleStatus::Redoubled;
                }
                self.consecutive_passes = 0;
            }
        }

        // Once 7NT is redoubled no higher call exists; the auction ends on
        // the spot rather than waiting for three passes.
        if let Some(contract) = &self.contract {
            if contract.is_maximal() && contract.double_status == DoubleStatus::Redoubled {
                self.phase = Phase::Settled;
            }
        }

        self.turn = self.turn.next();
        self.calls.push(call);
        log::debug!(
            "{seat} calls {call}; phase {:?}, contract {:?}",
            self.phase,
            self.contract
        );
        Ok(self.phase)
    }

    /// Validate without mutating.
    fn check(&self, seat: Seat, call: Call) -> Result<(), IllegalCall> {
        if self.phase.is_terminal() {
            return Err(IllegalCall::Finished);
        }
        if seat != self.turn {
            return Err(IllegalCall::OutOfTurn {
                seat,
                expected: self.turn,
            });
        }
        match call {
            Call::Pass => Ok(()),
            Call::Bid { level, .. } => {
                if !(1..=7).contains(&level) {
                    return Err(IllegalCall::BidOutOfRange(level));
                }
                match &self.contract {
                    Some(contract)
                        if catalog::order_key(call) <= Some(contract.order_key()) =>
                    {
                        Err(IllegalCall::InsufficientBid { call })
                    }
                    _ => Ok(()),
                }
            }
            Call::Double => match &self.contract {
                Some(contract)
                    if contract.double_status == DoubleStatus::Undoubled
                        && contract.pair() != seat.pair() =>
                {
                    Ok(())
                }
                _ => Err(IllegalCall::CannotDouble),
            },
            Call::Redouble => match &self.contract {
                Some(contract)
                    if contract.double_status == DoubleStatus::Doubled
                        && contract.pair() == seat.pair() =>
                {
                    Ok(())
                }
                _ => Err(IllegalCall::CannotRedouble),
            },
        }
    }

    /// All calls the seat on turn could legally make right now.
    pub fn legal_calls(&self) -> Vec<Call> {
        if self.phase.is_terminal() {
            return Vec::new();
        }

        let mut result = vec![Call::Pass];
        let min_key = self
            .contract
            .as_ref()
            .map(|c| c.order_key() + 1)
            .unwrap_or(0);
        for level in 1..=7u8 {
            for strain in Strain::ALL {
                if catalog::bid_order_key(level, strain) >= min_key {
                    result.push(Call::Bid { level, strain });
                }
            }
        }
        for call in [Call::Double, Call::Redouble] {
            if self.check(self.turn, call).is_ok() {
                result.push(call);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bid(level: u8, strain: Strain) -> Call {
        Call::Bid { level, strain }
    }

    /// Drive calls in turn order, panicking on rejection.
    fn run(state: &mut AuctionState, calls: &[Call]) {
        for &call in calls {
            let seat = state.turn();
            state.apply(seat, call).expect("call rejected");
        }
    }

    #[test]
    fn test_passed_out_after_four_passes() {
        let mut state = AuctionState::new(Seat::North);
        run(&mut state, &[Call::Pass, Call::Pass, Call::Pass]);
        assert_eq!(state.phase(), Phase::InProgress);
        run(&mut state, &[Call::Pass]);
        assert_eq!(state.phase(), Phase::PassedOut);
        assert!(state.opened_with_all_passes());
        assert_eq!(state.winning_pair(), None);
    }

    #[test]
    fn test_settles_after_three_passes_on_contract() {
        let mut state = AuctionState::new(Seat::North);
        run(
            &mut state,
            &[bid(1, Strain::Spades), Call::Pass, Call::Pass],
        );
        assert!(!state.is_terminal());
        run(&mut state, &[Call::Pass]);
        assert_eq!(state.phase(), Phase::Settled);
        assert_eq!(state.winning_pair(), Some(Pair::NorthSouth));
    }

    #[test]
    fn test_three_opening_passes_do_not_settle() {
        let mut state = AuctionState::new(Seat::West);
        run(&mut state, &[Call::Pass, Call::Pass, Call::Pass]);
        assert!(!state.is_terminal());
        run(
            &mut state,
            &[bid(1, Strain::Clubs), Call::Pass, Call::Pass, Call::Pass],
        );
        assert_eq!(state.phase(), Phase::Settled);
        let contract = state.contract().unwrap();
        assert_eq!(contract.declarer, Seat::South);
    }

    #[test]
    fn test_insufficient_bid_leaves_state_untouched() {
        let mut state = AuctionState::new(Seat::North);
        run(&mut state, &[bid(2, Strain::Hearts)]);
        let before = state.clone();
        let result = state.apply(Seat::East, bid(2, Strain::Diamonds));
        assert_eq!(
            result,
            Err(IllegalCall::InsufficientBid {
                call: bid(2, Strain::Diamonds)
            })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_equal_bid_is_insufficient() {
        let mut state = AuctionState::new(Seat::North);
        run(&mut state, &[bid(3, Strain::Clubs)]);
        assert!(state.apply(Seat::East, bid(3, Strain::Clubs)).is_err());
        assert!(state.apply(Seat::East, bid(3, Strain::Diamonds)).is_ok());
    }

    #[test]
    fn test_out_of_turn_rejected() {
        let mut state = AuctionState::new(Seat::North);
        let result = state.apply(Seat::South, Call::Pass);
        assert_eq!(
            result,
            Err(IllegalCall::OutOfTurn {
                seat: Seat::South,
                expected: Seat::North
            })
        );
    }

    #[test]
    fn test_turn_rotates_once_per_call() {
        let mut state = AuctionState::new(Seat::East);
        assert_eq!(
            state.turn_order(),
            [Seat::East, Seat::South, Seat::West, Seat::North]
        );
        assert_eq!(state.turn(), Seat::East);
        run(&mut state, &[Call::Pass]);
        assert_eq!(state.turn(), Seat::South);
        run(&mut state, &[bid(1, Strain::Clubs)]);
        assert_eq!(state.turn(), Seat::West);
        run(&mut state, &[Call::Double]);
        assert_eq!(state.turn(), Seat::North);
    }

    #[test]
    fn test_double_rules() {
        let mut state = AuctionState::new(Seat::North);
        // No contract yet: double illegal.
        assert_eq!(
            state.apply(Seat::North, Call::Double),
            Err(IllegalCall::CannotDouble)
        );
        run(&mut state, &[bid(1, Strain::Hearts)]);
        // East (opponents) may double.
        run(&mut state, &[Call::Double]);
        let contract = state.contract().unwrap();
        assert_eq!(contract.double_status, DoubleStatus::Doubled);
        // South may not double an already-doubled contract.
        assert_eq!(
            state.apply(Seat::South, Call::Double),
            Err(IllegalCall::CannotDouble)
        );
    }

    #[test]
    fn test_own_side_cannot_double() {
        let mut state = AuctionState::new(Seat::North);
        run(&mut state, &[bid(1, Strain::Hearts), Call::Pass]);
        // South is declarer's partner.
        assert_eq!(
            state.apply(Seat::South, Call::Double),
            Err(IllegalCall::CannotDouble)
        );
    }

    #[test]
    fn test_redouble_rules() {
        let mut state = AuctionState::new(Seat::North);
        run(&mut state, &[bid(1, Strain::Hearts)]);
        // Redouble before any double is illegal.
        assert_eq!(
            state.apply(Seat::East, Call::Redouble),
            Err(IllegalCall::CannotRedouble)
        );
        run(&mut state, &[Call::Double, Call::Pass]);
        // West is on the doubling side and cannot redouble its own double.
        assert_eq!(
            state.apply(Seat::West, Call::Redouble),
            Err(IllegalCall::CannotRedouble)
        );
        run(&mut state, &[Call::Pass, Call::Redouble]);
        assert_eq!(
            state.contract().unwrap().double_status,
            DoubleStatus::Redoubled
        );
        // No further double once redoubled.
        assert_eq!(
            state.apply(Seat::East, Call::Double),
            Err(IllegalCall::CannotDouble)
        );
    }

    #[test]
    fn test_new_bid_clears_double() {
        let mut state = AuctionState::new(Seat::North);
        run(&mut state, &[bid(1, Strain::Hearts), Call::Double]);
        run(&mut state, &[bid(1, Strain::Spades)]);
        let contract = state.contract().unwrap();
        assert_eq!(contract.double_status, DoubleStatus::Undoubled);
        assert_eq!(contract.declarer, Seat::South);
        assert_eq!(state.consecutive_passes(), 0);
    }

    #[test]
    fn test_top_contract_redoubled_settles_immediately() {
        let mut state = AuctionState::new(Seat::North);
        run(
            &mut state,
            &[bid(7, Strain::NoTrump), Call::Double, Call::Pass, Call::Pass],
        );
        assert!(!state.is_terminal());
        // North redoubles for the declaring side: over on the spot.
        run(&mut state, &[Call::Redouble]);
        assert_eq!(state.phase(), Phase::Settled);
        assert_eq!(
            state.contract().unwrap().double_status,
            DoubleStatus::Redoubled
        );
    }

    #[test]
    fn test_lower_redoubled_contract_still_needs_passes() {
        let mut state = AuctionState::new(Seat::North);
        run(
            &mut state,
            &[
                bid(7, Strain::Spades),
                Call::Double,
                Call::Pass,
                Call::Pass,
                Call::Redouble,
            ],
        );
        assert!(!state.is_terminal());
    }

    #[test]
    fn test_no_calls_accepted_after_terminal() {
        let mut state = AuctionState::new(Seat::North);
        run(&mut state, &[Call::Pass; 4]);
        assert_eq!(
            state.apply(state.turn(), Call::Pass),
            Err(IllegalCall::Finished)
        );
        assert_eq!(
            state.apply(state.turn(), bid(1, Strain::Clubs)),
            Err(IllegalCall::Finished)
        );
    }

    #[test]
    fn test_legal_calls_open_auction() {
        let state = AuctionState::new(Seat::North);
        let calls = state.legal_calls();
        // Pass plus all 35 bids; no double or redouble yet.
        assert_eq!(calls.len(), 36);
        assert_eq!(calls[0], Call::Pass);
        assert!(!calls.contains(&Call::Double));
    }

    #[test]
    fn test_legal_calls_after_bid() {
        let mut state = AuctionState::new(Seat::North);
        run(&mut state, &[bid(1, Strain::Hearts)]);
        let calls = state.legal_calls();
        assert!(calls.contains(&Call::Pass));
        assert!(calls.contains(&Call::Double));
        assert!(!calls.contains(&Call::Redouble));
        assert!(!calls.contains(&bid(1, Strain::Clubs)));
        assert!(!calls.contains(&bid(1, Strain::Hearts)));
        assert!(calls.contains(&bid(1, Strain::Spades)));
        assert!(calls.contains(&bid(2, Strain::Clubs)));
    }

    #[test]
    fn test_legal_calls_for_declaring_side_after_double() {
        let mut state = AuctionState::new(Seat::North);
        run(&mut state, &[bid(1, Strain::Hearts), Call::Double]);
        // South, declarer's partner, is on turn.
        let calls = state.legal_calls();
        assert!(calls.contains(&Call::Redouble));
        assert!(!calls.contains(&Call::Double));
    }

    #[test]
    fn test_legal_calls_empty_after_terminal() {
        let mut state = AuctionState::new(Seat::North);
        run(&mut state, &[Call::Pass; 4]);
        assert!(state.legal_calls().is_empty());
    }
}
