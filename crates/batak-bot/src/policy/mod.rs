mod heuristic;

pub use heuristic::HeuristicPolicy;

use crate::bot::ContractProgress;
use batak_core::game::round::RoundState;
use batak_core::model::bid::BidAction;
use batak_core::model::card::Card;
use batak_core::model::hand::Hand;
use batak_core::model::player::Seat;
use batak_core::model::suit::Suit;

/// Read-only view of the round from one seat.
#[derive(Debug, Clone, Copy)]
pub struct PolicyContext<'a> {
    pub seat: Seat,
    pub round: &'a RoundState,
}

impl<'a> PolicyContext<'a> {
    pub fn new(seat: Seat, round: &'a RoundState) -> Self {
        Self { seat, round }
    }

    pub fn hand(&self) -> &'a Hand {
        self.round.hand(self.seat)
    }

    pub fn high_bid(&self) -> Option<u8> {
        self.round.auction().and_then(|auction| auction.high_bid())
    }

    pub fn progress(&self) -> ContractProgress {
        ContractProgress {
            bid: self.round.bid_of(self.seat),
            tricks_won: self.round.tricks_won(self.seat),
            max_tricks: self.round.mode().max_tricks(),
        }
    }
}

/// Decision interface for every non-human seat.
pub trait Policy: Send {
    fn choose_bid(&mut self, ctx: &PolicyContext) -> BidAction;

    /// Called when this seat won the auction or the first trick.
    fn choose_trump(&mut self, ctx: &PolicyContext) -> Suit;

    /// `None` only when the seat has nothing left to play.
    fn choose_play(&mut self, ctx: &PolicyContext) -> Option<Card>;
}
