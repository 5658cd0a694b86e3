mod standings;

pub use standings::{SeatStanding, Standings, TournamentSummary};

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use batak_bot::{Difficulty, HeuristicPolicy, Policy, PolicyContext};
use batak_core::game::round::{RoundPhase, RoundState};
use batak_core::model::bid::BidState;
use batak_core::model::deck::Deck;
use batak_core::model::mode::GameMode;
use batak_core::model::player::Seat;
use batak_core::model::score::RoundScore;
use batak_core::model::suit::Suit;
use rand::{RngCore, SeedableRng, rngs::StdRng};
use serde::Serialize;
use thiserror::Error;
use tracing::{Level, event};

use crate::config::{BenchmarkConfig, ResolvedOutputs, ValidationError};

/// Plays configured bot seats against each other for a fixed number of rounds.
pub struct TournamentRunner {
    config: BenchmarkConfig,
    outputs: ResolvedOutputs,
    seats: Vec<SeatBlueprint>,
}

/// Summary details returned after a run.
#[derive(Debug)]
pub struct RunSummary {
    pub rounds_played: usize,
    pub rows_written: usize,
    pub jsonl_path: PathBuf,
    pub summary_path: PathBuf,
    pub standings: TournamentSummary,
}

#[derive(Debug, Clone)]
struct SeatBlueprint {
    name: String,
    difficulty: Difficulty,
}

impl TournamentRunner {
    /// Build a runner from a validated configuration.
    pub fn new(config: BenchmarkConfig, outputs: ResolvedOutputs) -> Result<Self, RunnerError> {
        let expected = config.mode.player_count().get();
        if config.seats.len() != expected {
            return Err(RunnerError::SeatCount {
                mode: config.mode,
                expected,
                found: config.seats.len(),
            });
        }

        let seats = config
            .seats
            .iter()
            .map(|seat| {
                Ok(SeatBlueprint {
                    name: seat.name.clone(),
                    difficulty: seat.difficulty()?,
                })
            })
            .collect::<Result<Vec<_>, ValidationError>>()?;

        Ok(Self {
            config,
            outputs,
            seats,
        })
    }

    /// Play every round, streaming one JSONL row per seat per round.
    pub fn run(&self) -> Result<RunSummary, RunnerError> {
        ensure_parent(self.outputs.jsonl.parent())?;
        ensure_parent(self.outputs.summary_json.parent())?;

        let mut writer = BufWriter::new(File::create(&self.outputs.jsonl)?);
        let mut rng = StdRng::seed_from_u64(self.config.rounds.seed.unwrap_or(0));
        let mut standings = Standings::new(
            &self.config.run_id,
            self.config.mode,
            self.seats
                .iter()
                .map(|seat| (seat.name.as_str(), seat.difficulty.as_str())),
        );
        let mut rows_written = 0usize;

        for round_index in 0..self.config.rounds.count {
            let round_seed = rng.next_u64();
            let outcome = self.play_round(round_index, round_seed)?;
            standings.record(&outcome.result);
            rows_written += self.write_round_rows(&mut writer, round_index, round_seed, &outcome)?;
        }
        writer.flush()?;

        let summary = standings.finish();
        let summary_file = BufWriter::new(File::create(&self.outputs.summary_json)?);
        serde_json::to_writer_pretty(summary_file, &summary)?;

        Ok(RunSummary {
            rounds_played: self.config.rounds.count,
            rows_written,
            jsonl_path: self.outputs.jsonl.clone(),
            summary_path: self.outputs.summary_json.clone(),
            standings: summary,
        })
    }

    fn play_round(&self, round_index: usize, round_seed: u64) -> Result<RoundOutcome, RunnerError> {
        let deck = Deck::shuffled_with_seed(round_seed);
        let mut round = RoundState::deal(self.config.mode, self.config.rules, &deck);
        let mut policies: Vec<HeuristicPolicy> = self
            .seats
            .iter()
            .enumerate()
            .map(|(idx, seat)| HeuristicPolicy::new(seat.difficulty, policy_seed(round_seed, idx)))
            .collect();
        let mut decisions = vec![0u32; self.seats.len()];
        let game_error = |message: String| RunnerError::Game {
            round_index,
            message,
        };

        while let Some(seat) = round.next_to_act() {
            let ctx = PolicyContext::new(seat, &round);
            let policy = policies
                .get_mut(seat.index())
                .ok_or_else(|| game_error(format!("no policy for {seat}")))?;
            match round.phase() {
                RoundPhase::Bidding => {
                    let action = policy.choose_bid(&ctx);
                    round
                        .place_bid(seat, action)
                        .map_err(|err| game_error(format!("{seat} bid rejected: {err}")))?;
                }
                RoundPhase::ChoosingTrump { .. } => {
                    let suit = policy.choose_trump(&ctx);
                    round
                        .declare_trump(seat, suit)
                        .map_err(|err| game_error(format!("{seat} trump rejected: {err}")))?;
                }
                RoundPhase::Playing => {
                    let card = policy
                        .choose_play(&ctx)
                        .ok_or_else(|| game_error(format!("{seat} has no card to play")))?;
                    round
                        .play_card(seat, card)
                        .map_err(|err| game_error(format!("{seat} play rejected: {err}")))?;
                }
                RoundPhase::Complete => break,
            }
            decisions[seat.index()] += 1;
        }

        let result = round
            .score()
            .ok_or_else(|| game_error("round ended without a score".to_string()))?;

        if tracing::enabled!(target: "batak_bench::round", Level::INFO) {
            let scores = result
                .scores
                .iter()
                .map(i32::to_string)
                .collect::<Vec<_>>()
                .join(",");
            event!(
                target: "batak_bench::round",
                Level::INFO,
                run_id = %self.config.run_id,
                round_index = round_index as u64,
                round_seed,
                mode = self.config.mode.as_str(),
                trump = round.trump().map(Suit::name).unwrap_or("none"),
                scores = %scores,
                winner = result.winner.map(|seat| seat.index() as i64).unwrap_or(-1),
            );
        }

        Ok(RoundOutcome {
            trump: round.trump(),
            bids: round.bids(),
            tricks_won: round
                .players()
                .seats()
                .map(|seat| round.tricks_won(seat))
                .collect(),
            decisions,
            result,
        })
    }

    fn write_round_rows<W: Write>(
        &self,
        writer: &mut W,
        round_index: usize,
        round_seed: u64,
        outcome: &RoundOutcome,
    ) -> Result<usize, RunnerError> {
        let round_id = format!("R{round_index:05}");
        let mut rows_written = 0usize;
        for (idx, blueprint) in self.seats.iter().enumerate() {
            let seat = Seat(idx);
            let row = RoundLogRow {
                run_id: &self.config.run_id,
                round_id: &round_id,
                round_index,
                round_seed,
                mode: self.config.mode,
                trump: outcome.trump,
                seat: idx,
                bot: &blueprint.name,
                difficulty: blueprint.difficulty.as_str(),
                bid: outcome.bids.get(idx).copied().unwrap_or_default(),
                tricks_won: outcome.tricks_won.get(idx).copied().unwrap_or(0),
                score: outcome.result.score(seat),
                batak: outcome.result.is_batak(seat),
                winner: outcome.result.winner == Some(seat),
                decisions: outcome.decisions.get(idx).copied().unwrap_or(0),
            };
            serde_json::to_writer(&mut *writer, &row)?;
            writer.write_all(b"\n")?;
            rows_written += 1;
        }
        Ok(rows_written)
    }
}

/// Each seat gets its own stream so adding a seat never shifts the others.
fn policy_seed(round_seed: u64, seat: usize) -> u64 {
    round_seed ^ (seat as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

fn ensure_parent(path: Option<&Path>) -> Result<(), RunnerError> {
    if let Some(dir) = path.filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

struct RoundOutcome {
    trump: Option<Suit>,
    bids: Vec<BidState>,
    tricks_won: Vec<u8>,
    decisions: Vec<u32>,
    result: RoundScore,
}

#[derive(Debug, Serialize)]
struct RoundLogRow<'a> {
    run_id: &'a str,
    round_id: &'a str,
    round_index: usize,
    round_seed: u64,
    mode: GameMode,
    trump: Option<Suit>,
    seat: usize,
    bot: &'a str,
    difficulty: &'static str,
    bid: BidState,
    tricks_won: u8,
    score: i32,
    batak: bool,
    winner: bool,
    decisions: u32,
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("failed to serialize output: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },
    #[error("round {round_index} failed: {message}")]
    Game { round_index: usize, message: String },
    #[error("{mode} needs {expected} seats but the configuration lists {found}")]
    SeatCount {
        mode: GameMode,
        expected: usize,
        found: usize,
    },
    #[error(transparent)]
    Config(#[from] ValidationError),
}
