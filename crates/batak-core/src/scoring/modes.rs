use super::first_max_by_key;
use crate::model::house_rules::HouseRules;
use crate::model::player::Seat;
use crate::model::score::{RoundScore, SeatTally};

pub const CAPOT_MAX: i32 = 130;
pub const KUMANDA_NO_CONTRACT_PENALTY: i32 = -50;
pub const TWELVE_BREAKS_SCORE: i32 = -120;

fn tricks(seat: &SeatTally) -> i32 {
    i32::from(seat.tricks_won)
}

fn bonus_for(idx: usize, rules: HouseRules, last_trick_winner: Option<Seat>) -> i32 {
    if last_trick_winner == Some(Seat(idx)) {
        rules.last_trick_bonus()
    } else {
        0
    }
}

pub(super) fn capot(seats: &[SeatTally]) -> RoundScore {
    let scores = seats
        .iter()
        .map(|seat| (CAPOT_MAX - tricks(seat) * 10).max(0))
        .collect();
    let winner = first_max_by_key(0..seats.len(), |idx| -tricks(&seats[idx]));
    RoundScore {
        scores,
        batak_seats: Vec::new(),
        winner,
    }
}

pub(super) fn trick_count(
    seats: &[SeatTally],
    rules: HouseRules,
    last_trick_winner: Option<Seat>,
) -> RoundScore {
    let scores = seats
        .iter()
        .enumerate()
        .map(|(idx, seat)| tricks(seat) * 10 + bonus_for(idx, rules, last_trick_winner))
        .collect();
    let winner = first_max_by_key(0..seats.len(), |idx| tricks(&seats[idx]));
    RoundScore {
        scores,
        batak_seats: Vec::new(),
        winner,
    }
}

pub(super) fn kumanda(
    seats: &[SeatTally],
    rules: HouseRules,
    last_trick_winner: Option<Seat>,
) -> RoundScore {
    let mut batak_seats = Vec::new();
    let scores: Vec<i32> = seats
        .iter()
        .enumerate()
        .map(|(idx, seat)| {
            let Some(contract) = seat.bid.contract() else {
                return KUMANDA_NO_CONTRACT_PENALTY;
            };
            let bid = i32::from(contract);
            let taken = tricks(seat);
            if taken < bid {
                batak_seats.push(Seat(idx));
                -bid * 20
            } else {
                bid * 10 + (taken - bid) * 5 + bonus_for(idx, rules, last_trick_winner)
            }
        })
        .collect();
    let winner = first_max_by_key(0..seats.len(), |idx| scores[idx]);
    RoundScore {
        scores,
        batak_seats,
        winner,
    }
}

/// Each seat pools its contract and tricks with the partner across the table.
pub(super) fn partnership(seats: &[SeatTally]) -> RoundScore {
    let tally = |seat: Seat| seats.get(seat.index()).copied().unwrap_or_default();
    let pair = |seat: Seat| {
        let (own, partner) = (tally(seat), tally(seat.partner()));
        let bid = [own, partner]
            .iter()
            .filter_map(|side| side.bid.contract())
            .map(i32::from)
            .sum::<i32>();
        let made = tricks(&own) + tricks(&partner) >= bid;
        (bid, made)
    };
    let team_score = |seat: Seat| match pair(seat) {
        (bid, true) => bid * 10,
        (bid, false) => -bid * 10,
    };

    let scores = (0..seats.len()).map(|idx| team_score(Seat(idx))).collect();
    let batak_seats = (0..seats.len())
        .map(Seat)
        .filter(|&seat| !pair(seat).1)
        .collect();
    let winner = if seats.len() < 2 {
        None
    } else {
        match team_score(Seat(0)).cmp(&team_score(Seat(1))) {
            std::cmp::Ordering::Greater => Some(Seat(0)),
            std::cmp::Ordering::Less => Some(Seat(1)),
            std::cmp::Ordering::Equal => None,
        }
    };
    RoundScore {
        scores,
        batak_seats,
        winner,
    }
}

/// Falls back to most-tricks-wins when either side holds no contract.
///
/// A two-seat auction always closes with the loser passed, so rounds played
/// through the auction take the fallback. The per-seat contract branch is
/// reached only when both tallies carry a contract, as when scoring
/// externally supplied bids.
pub(super) fn heads_up(seats: &[SeatTally], rules: HouseRules) -> RoundScore {
    if seats.iter().all(|seat| seat.bid.contract().is_some()) {
        return per_seat_contract(seats, rules);
    }

    let mut scores = vec![0; seats.len()];
    let most = seats.iter().map(tricks).max().unwrap_or(0);
    let leaders: Vec<usize> = (0..seats.len())
        .filter(|&idx| tricks(&seats[idx]) == most)
        .collect();
    let winner = match leaders.as_slice() {
        [only] => {
            scores[*only] = most * 10;
            Seat(*only)
        }
        _ => Seat(0),
    };
    RoundScore {
        scores,
        batak_seats: Vec::new(),
        winner: (!seats.is_empty()).then_some(winner),
    }
}

/// Standard contract scoring shared by the three-handed, auction and
/// spades-trump games.
pub(super) fn per_seat_contract(seats: &[SeatTally], rules: HouseRules) -> RoundScore {
    let mut batak_seats = Vec::new();
    let scores: Vec<i32> = seats
        .iter()
        .enumerate()
        .map(|(idx, seat)| {
            let Some(contract) = seat.bid.contract() else {
                return 0;
            };
            let bid = i32::from(contract);
            let taken = tricks(seat);
            if taken >= bid {
                return bid * 10;
            }
            if !rules.batak_mandatory {
                return taken * 5;
            }
            batak_seats.push(Seat(idx));
            failed_contract_penalty(bid, taken, rules)
        })
        .collect();

    let contracted = (0..seats.len()).filter(|&idx| seats[idx].bid.contract().is_some());
    let winner = first_max_by_key(contracted, |idx| scores[idx]);
    RoundScore {
        scores,
        batak_seats,
        winner,
    }
}

fn failed_contract_penalty(bid: i32, taken: i32, rules: HouseRules) -> i32 {
    if rules.twelve_breaks && bid == 12 && taken == 0 {
        return TWELVE_BREAKS_SCORE;
    }
    let mut penalty = -bid * 10;
    if rules.miscount_penalty {
        penalty -= (bid - taken) * 5;
    }
    if rules.trump_penalty && taken == 0 {
        // Truncates toward zero on odd halves.
        penalty = penalty * 3 / 2;
    }
    penalty
}
