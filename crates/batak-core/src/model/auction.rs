use crate::model::bid::{BidAction, BidState, MAX_BID, is_valid_bid};
use crate::model::player::{PlayerCount, Seat};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Turn-based auction. Seats act in seat order; a seat that passed or holds
/// the standing high bid is skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auction {
    players: PlayerCount,
    bids: Vec<BidState>,
    turn: Seat,
    high: Option<(Seat, u8)>,
    outcome: Option<AuctionOutcome>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuctionOutcome {
    Won { seat: Seat, bid: u8 },
    AllPassed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuctionStatus {
    Open { next: Seat },
    Closed(AuctionOutcome),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BidError {
    #[error("round is not in the bidding phase")]
    NotBidding,
    #[error("auction is already closed")]
    Closed,
    #[error("expected {expected} to bid but got {actual}")]
    OutOfTurn { expected: Seat, actual: Seat },
    #[error("bid of {amount} does not beat the standing bid of {high}")]
    TooLow { amount: u8, high: u8 },
    #[error("bid of {amount} is outside 1..=13")]
    OutOfRange { amount: u8 },
}

impl Auction {
    pub fn new(players: PlayerCount, opener: Seat) -> Self {
        Self {
            players,
            bids: vec![BidState::Unset; players.get()],
            turn: Seat(opener.index() % players.get()),
            high: None,
            outcome: None,
        }
    }

    pub fn bids(&self) -> &[BidState] {
        &self.bids
    }

    pub fn bid_of(&self, seat: Seat) -> BidState {
        self.bids
            .get(seat.index())
            .copied()
            .unwrap_or(BidState::Unset)
    }

    pub fn high_bid(&self) -> Option<u8> {
        self.high.map(|(_, amount)| amount)
    }

    pub fn high_bidder(&self) -> Option<Seat> {
        self.high.map(|(seat, _)| seat)
    }

    pub fn outcome(&self) -> Option<AuctionOutcome> {
        self.outcome
    }

    pub fn is_closed(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn next_to_act(&self) -> Option<Seat> {
        if self.is_closed() {
            None
        } else {
            Some(self.turn)
        }
    }

    /// Smallest raise still available, or `None` when only passing remains.
    pub fn min_raise(&self) -> Option<u8> {
        let floor = self.high_bid().unwrap_or(0) + 1;
        (floor <= MAX_BID).then_some(floor)
    }

    pub fn place(&mut self, seat: Seat, action: BidAction) -> Result<AuctionStatus, BidError> {
        if self.is_closed() {
            return Err(BidError::Closed);
        }
        if seat != self.turn {
            return Err(BidError::OutOfTurn {
                expected: self.turn,
                actual: seat,
            });
        }

        match action {
            BidAction::Pass => self.bids[seat.index()] = BidState::Passed,
            BidAction::Bid(amount) => {
                if amount == 0 || amount > MAX_BID {
                    return Err(BidError::OutOfRange { amount });
                }
                if !is_valid_bid(amount, self.high_bid()) {
                    return Err(BidError::TooLow {
                        amount,
                        high: self.high_bid().unwrap_or(0),
                    });
                }
                self.bids[seat.index()] = BidState::Bid(amount);
                self.high = Some((seat, amount));
            }
        }

        if let Some(outcome) = self.termination() {
            self.outcome = Some(outcome);
            return Ok(AuctionStatus::Closed(outcome));
        }

        self.turn = self.following_active(seat);
        Ok(AuctionStatus::Open { next: self.turn })
    }

    fn termination(&self) -> Option<AuctionOutcome> {
        let passed = self.bids.iter().filter(|bid| bid.is_passed()).count();
        if passed == self.bids.len() {
            return Some(AuctionOutcome::AllPassed);
        }
        if passed + 1 == self.bids.len()
            && let Some((seat, bid)) = self.high
            && !self.bids[seat.index()].is_passed()
        {
            return Some(AuctionOutcome::Won { seat, bid });
        }
        None
    }

    fn following_active(&self, from: Seat) -> Seat {
        let mut seat = from.next(self.players);
        for _ in 0..self.players.get() {
            let waiting = !self.bids[seat.index()].is_passed() && Some(seat) != self.high_bidder();
            if waiting {
                return seat;
            }
            seat = seat.next(self.players);
        }
        from
    }
}
