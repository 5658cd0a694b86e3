use batak_core::model::mode::GameMode;
use batak_core::model::player::Seat;
use batak_core::model::score::{RoundScore, ScoreBoard};
use serde::Serialize;

/// Per-seat aggregate over a whole run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeatStanding {
    pub seat: usize,
    pub name: String,
    pub difficulty: String,
    pub wins: u32,
    pub batak_count: u32,
    pub total_score: i64,
    pub mean_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TournamentSummary {
    pub run_id: String,
    pub mode: GameMode,
    pub rounds: usize,
    /// Rounds where scoring named no winner.
    pub drawn_rounds: u32,
    /// Seat with the highest cumulative score.
    pub leader: Option<usize>,
    pub seats: Vec<SeatStanding>,
}

pub struct Standings {
    run_id: String,
    mode: GameMode,
    rounds: usize,
    drawn_rounds: u32,
    board: ScoreBoard,
    seats: Vec<SeatStanding>,
}

impl Standings {
    pub fn new<'a>(
        run_id: &str,
        mode: GameMode,
        seats: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let seats = seats
            .into_iter()
            .enumerate()
            .map(|(seat, (name, difficulty))| SeatStanding {
                seat,
                name: name.to_string(),
                difficulty: difficulty.to_string(),
                wins: 0,
                batak_count: 0,
                total_score: 0,
                mean_score: 0.0,
            })
            .collect::<Vec<_>>();
        Self {
            run_id: run_id.to_string(),
            mode,
            rounds: 0,
            drawn_rounds: 0,
            board: ScoreBoard::new(seats.len()),
            seats,
        }
    }

    pub fn record(&mut self, result: &RoundScore) {
        self.rounds += 1;
        match result.winner {
            Some(winner) => {
                if let Some(standing) = self.seats.get_mut(winner.index()) {
                    standing.wins += 1;
                }
            }
            None => self.drawn_rounds += 1,
        }
        self.board.apply_round(result);
        for standing in &mut self.seats {
            if result.is_batak(Seat(standing.seat)) {
                standing.batak_count += 1;
            }
        }
    }

    pub fn finish(mut self) -> TournamentSummary {
        for standing in &mut self.seats {
            standing.total_score = self.board.total(Seat(standing.seat));
            standing.mean_score = if self.rounds == 0 {
                0.0
            } else {
                standing.total_score as f64 / self.rounds as f64
            };
        }
        TournamentSummary {
            run_id: self.run_id,
            mode: self.mode,
            rounds: self.rounds,
            drawn_rounds: self.drawn_rounds,
            leader: self.board.leading_player().map(Seat::index),
            seats: self.seats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Standings;
    use batak_core::model::mode::GameMode;
    use batak_core::model::player::Seat;
    use batak_core::model::score::RoundScore;

    #[test]
    fn aggregates_wins_bataks_and_means() {
        let mut standings = Standings::new(
            "t",
            GameMode::Tekli,
            [("alice", "hard"), ("bob", "easy")],
        );
        standings.record(&RoundScore {
            scores: vec![90, -40],
            batak_seats: vec![Seat(1)],
            winner: Some(Seat(0)),
        });
        standings.record(&RoundScore {
            scores: vec![0, 0],
            batak_seats: vec![],
            winner: None,
        });
        standings.record(&RoundScore {
            scores: vec![-30, 120],
            batak_seats: vec![Seat(0)],
            winner: Some(Seat(1)),
        });

        let summary = standings.finish();
        assert_eq!(summary.rounds, 3);
        assert_eq!(summary.drawn_rounds, 1);
        assert_eq!(summary.seats[0].wins, 1);
        assert_eq!(summary.seats[0].batak_count, 1);
        assert_eq!(summary.seats[0].total_score, 60);
        assert!((summary.seats[0].mean_score - 20.0).abs() < f64::EPSILON);
        assert_eq!(summary.seats[1].total_score, 80);
        assert_eq!(summary.seats[1].difficulty, "easy");
        assert_eq!(summary.leader, Some(1));
    }

    #[test]
    fn empty_run_leads_with_first_seat_and_zero_means() {
        let seats = [("a", "easy"), ("b", "hard"), ("c", "legend")];
        let summary = Standings::new("t", GameMode::Uclu, seats).finish();
        assert_eq!(summary.rounds, 0);
        assert_eq!(summary.leader, Some(0));
        assert!(summary.seats.iter().all(|seat| seat.total_score == 0 && seat.mean_score == 0.0));
    }
}
