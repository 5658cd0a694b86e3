//! Round scoring. Each game mode has its own formula; [`calculate_round_score`]
//! dispatches to it through one exhaustive match.

mod modes;

use crate::model::house_rules::HouseRules;
use crate::model::mode::GameMode;
use crate::model::player::Seat;
use crate::model::score::{RoundScore, SeatTally};

pub use modes::{CAPOT_MAX, KUMANDA_NO_CONTRACT_PENALTY, TWELVE_BREAKS_SCORE};

pub fn calculate_round_score(
    seats: &[SeatTally],
    mode: GameMode,
    rules: HouseRules,
    last_trick_winner: Option<Seat>,
) -> RoundScore {
    match mode {
        GameMode::Capot => modes::capot(seats),
        GameMode::YereBatak => modes::trick_count(seats, rules, last_trick_winner),
        GameMode::AcikKoz => modes::trick_count(seats, rules, last_trick_winner),
        GameMode::Ihalesiz => modes::trick_count(seats, rules, last_trick_winner),
        GameMode::Hizli => modes::trick_count(seats, rules, last_trick_winner),
        GameMode::Kumanda => modes::kumanda(seats, rules, last_trick_winner),
        GameMode::Esli => modes::partnership(seats),
        GameMode::Tekli => modes::heads_up(seats, rules),
        GameMode::Uclu => modes::per_seat_contract(seats, rules),
        GameMode::Ihaleli => modes::per_seat_contract(seats, rules),
        GameMode::KozMaca => modes::per_seat_contract(seats, rules),
    }
}

/// Lowest-indexed seat whose key is maximal among `candidates`.
pub(crate) fn first_max_by_key<K: Ord>(
    candidates: impl Iterator<Item = usize>,
    key: impl Fn(usize) -> K,
) -> Option<Seat> {
    let mut best: Option<(usize, K)> = None;
    for idx in candidates {
        let value = key(idx);
        match &best {
            Some((_, best_value)) if *best_value >= value => {}
            _ => best = Some((idx, value)),
        }
    }
    best.map(|(idx, _)| Seat(idx))
}
