use crate::model::player::PlayerCount;
use crate::model::suit::Suit;
use core::fmt;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Reverse game: avoid taking tricks.
    Capot,
    YereBatak,
    AcikKoz,
    Ihalesiz,
    Hizli,
    Kumanda,
    /// Partnership game, seats 0/2 against 1/3.
    Esli,
    /// Heads-up, 26 cards each.
    Tekli,
    /// Three-handed, 17 cards each.
    Uclu,
    Ihaleli,
    KozMaca,
}

/// How the trump suit of a round is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrumpPolicy {
    Fixed(Suit),
    /// The last card of the shuffled deck is shown and names trump.
    Revealed,
    /// The auction winner names trump; `fallback` applies if everyone passes.
    AuctionWinner { fallback: Suit },
    /// No trump until the first trick is won; its winner names the suit.
    FirstTrickWinner,
}

impl GameMode {
    pub const ALL: [GameMode; 11] = [
        GameMode::Capot,
        GameMode::YereBatak,
        GameMode::AcikKoz,
        GameMode::Ihalesiz,
        GameMode::Hizli,
        GameMode::Kumanda,
        GameMode::Esli,
        GameMode::Tekli,
        GameMode::Uclu,
        GameMode::Ihaleli,
        GameMode::KozMaca,
    ];

    pub const fn player_count(self) -> PlayerCount {
        match self {
            GameMode::Tekli => PlayerCount::Two,
            GameMode::Uclu => PlayerCount::Three,
            _ => PlayerCount::Four,
        }
    }

    pub const fn trump_policy(self) -> TrumpPolicy {
        match self {
            GameMode::Capot | GameMode::Ihalesiz | GameMode::KozMaca => {
                TrumpPolicy::Fixed(Suit::Spades)
            }
            GameMode::AcikKoz => TrumpPolicy::Revealed,
            GameMode::YereBatak | GameMode::Hizli => TrumpPolicy::FirstTrickWinner,
            GameMode::Kumanda
            | GameMode::Esli
            | GameMode::Tekli
            | GameMode::Uclu
            | GameMode::Ihaleli => TrumpPolicy::AuctionWinner {
                fallback: Suit::Spades,
            },
        }
    }

    pub const fn has_auction(self) -> bool {
        matches!(
            self,
            GameMode::Kumanda
                | GameMode::Esli
                | GameMode::Tekli
                | GameMode::Uclu
                | GameMode::Ihaleli
                | GameMode::KozMaca
        )
    }

    pub const fn max_tricks(self) -> usize {
        self.player_count().hand_size()
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            GameMode::Capot => "capot",
            GameMode::YereBatak => "yere_batak",
            GameMode::AcikKoz => "acik_koz",
            GameMode::Ihalesiz => "ihalesiz",
            GameMode::Hizli => "hizli",
            GameMode::Kumanda => "kumanda",
            GameMode::Esli => "esli",
            GameMode::Tekli => "tekli",
            GameMode::Uclu => "uclu",
            GameMode::Ihaleli => "ihaleli",
            GameMode::KozMaca => "koz_maca",
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown game mode '{0}'")]
pub struct UnknownMode(pub String);

impl FromStr for GameMode {
    type Err = UnknownMode;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        GameMode::ALL
            .iter()
            .copied()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| UnknownMode(value.to_string()))
    }
}
