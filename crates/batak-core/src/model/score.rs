use crate::model::bid::BidState;
use crate::model::player::Seat;
use serde::{Deserialize, Serialize};

/// What a seat brings to the scoring table at the end of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeatTally {
    pub bid: BidState,
    pub tricks_won: u8,
}

impl SeatTally {
    pub const fn new(bid: BidState, tricks_won: u8) -> Self {
        Self { bid, tricks_won }
    }
}

/// Per-seat point deltas for one finished round.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoundScore {
    pub scores: Vec<i32>,
    pub batak_seats: Vec<Seat>,
    pub winner: Option<Seat>,
}

impl RoundScore {
    pub fn score(&self, seat: Seat) -> i32 {
        self.scores.get(seat.index()).copied().unwrap_or(0)
    }

    pub fn is_batak(&self, seat: Seat) -> bool {
        self.batak_seats.contains(&seat)
    }
}

/// Running totals across rounds.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreBoard {
    totals: Vec<i64>,
}

impl ScoreBoard {
    pub fn new(seats: usize) -> Self {
        Self {
            totals: vec![0; seats],
        }
    }

    pub fn apply_round(&mut self, round: &RoundScore) {
        if self.totals.len() < round.scores.len() {
            self.totals.resize(round.scores.len(), 0);
        }
        for (total, delta) in self.totals.iter_mut().zip(&round.scores) {
            *total += i64::from(*delta);
        }
    }

    pub fn total(&self, seat: Seat) -> i64 {
        self.totals.get(seat.index()).copied().unwrap_or(0)
    }

    pub fn standings(&self) -> &[i64] {
        &self.totals
    }

    /// Highest total; ties go to the lower seat.
    pub fn leading_player(&self) -> Option<Seat> {
        self.totals
            .iter()
            .enumerate()
            .fold(None::<(usize, i64)>, |best, (idx, &total)| match best {
                Some((_, best_total)) if best_total >= total => best,
                _ => Some((idx, total)),
            })
            .map(|(idx, _)| Seat(idx))
    }
}
