use super::{Policy, PolicyContext};
use crate::bot::{BidPlan, BidPlanner, Difficulty, PlayChoice, PlayPlanner, TrumpPlanner};
use batak_core::model::bid::{BidAction, MAX_BID};
use batak_core::model::card::Card;
use batak_core::model::suit::Suit;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{Level, event};

/// Rule-of-thumb bot. Owns its random source so a seed replays every decision.
pub struct HeuristicPolicy {
    difficulty: Difficulty,
    rng: StdRng,
}

impl HeuristicPolicy {
    pub fn new(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            difficulty,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl Policy for HeuristicPolicy {
    fn choose_bid(&mut self, ctx: &PolicyContext) -> BidAction {
        let plan = BidPlanner::plan(
            ctx.hand().cards(),
            ctx.round.trump(),
            ctx.high_bid(),
            self.difficulty,
            &mut self.rng,
        );
        log_bid_decision(ctx, self.difficulty, &plan);
        plan.choice.into()
    }

    fn choose_trump(&mut self, ctx: &PolicyContext) -> Suit {
        let suit = TrumpPlanner::choose(&mut self.rng);
        log_trump_decision(ctx, self.difficulty, suit);
        suit
    }

    fn choose_play(&mut self, ctx: &PolicyContext) -> Option<Card> {
        let play_ctx = ctx.round.play_context(ctx.seat)?;
        let choice =
            PlayPlanner::choose(&play_ctx, ctx.progress(), self.difficulty, &mut self.rng)?;
        log_play_decision(ctx, self.difficulty, &choice);
        Some(choice.card)
    }
}

fn log_bid_decision(ctx: &PolicyContext, difficulty: Difficulty, plan: &BidPlan) {
    if !tracing::enabled!(target: "batak_bot::bid", Level::INFO) {
        return;
    }

    let reason = match plan.choice {
        Some(_) => "raise_minimum",
        None if plan.minimum > MAX_BID => "pass_ceiling",
        None => "pass_tolerance",
    };
    let choice = plan
        .choice
        .map(|amount| amount.to_string())
        .unwrap_or_else(|| "pass".to_string());

    event!(
        target: "batak_bot::bid",
        Level::INFO,
        seat = %ctx.seat,
        difficulty = %difficulty,
        strength = plan.strength,
        base = plan.base,
        minimum = plan.minimum,
        choice = %choice,
        reason,
    );
}

fn log_trump_decision(ctx: &PolicyContext, difficulty: Difficulty, suit: Suit) {
    event!(
        target: "batak_bot::trump",
        Level::INFO,
        seat = %ctx.seat,
        difficulty = %difficulty,
        trump = suit.name(),
        reason = "uniform_random",
    );
}

fn log_play_decision(ctx: &PolicyContext, difficulty: Difficulty, choice: &PlayChoice) {
    if !tracing::enabled!(target: "batak_bot::play", Level::INFO) {
        return;
    }

    let legal = ctx.round.legal_moves(ctx.seat);
    let legal_preview = if legal.len() <= 6 {
        legal
            .iter()
            .map(|card| card.to_string())
            .collect::<Vec<_>>()
            .join(",")
    } else {
        format!("{} moves", legal.len())
    };

    event!(
        target: "batak_bot::play",
        Level::INFO,
        seat = %ctx.seat,
        difficulty = %difficulty,
        legal_count = legal.len(),
        legal_moves = %legal_preview,
        chosen = %choice.card,
        trump_broken = ctx.round.trump_broken(),
        trick_cards = ctx.round.current_trick().plays().len(),
        reason = choice.reason.as_str(),
    );
}
