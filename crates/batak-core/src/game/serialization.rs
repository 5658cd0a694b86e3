use super::round::RoundState;
use crate::model::bid::BidState;
use crate::model::house_rules::HouseRules;
use crate::model::mode::GameMode;
use crate::model::player::Seat;
use crate::model::score::RoundScore;
use crate::model::suit::Suit;
use serde::{Deserialize, Serialize};

/// Plain summary of a finished round, shaped for whatever store keeps history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoundRecord {
    pub mode: GameMode,
    #[serde(default)]
    pub rules: HouseRules,
    pub trump: Option<Suit>,
    pub bids: Vec<BidState>,
    pub tricks_won: Vec<u8>,
    pub last_trick_winner: Option<Seat>,
    pub result: RoundScore,
}

impl RoundRecord {
    /// `None` until the round has been played out.
    pub fn capture(round: &RoundState) -> Option<Self> {
        let result = round.score()?;
        Some(RoundRecord {
            mode: round.mode(),
            rules: round.rules(),
            trump: round.trump(),
            bids: round.bids(),
            tricks_won: round
                .players()
                .seats()
                .map(|seat| round.tricks_won(seat))
                .collect(),
            last_trick_winner: round.last_trick_winner(),
            result,
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
