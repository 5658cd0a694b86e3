mod bid;
mod play;
mod trump;

pub use bid::{BidPlan, BidPlanner};
pub use play::{ContractProgress, PlayChoice, PlayPlanner, PlayReason};
pub use trump::TrumpPlanner;

use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;

pub const DIFFICULTY_ENV: &str = "BATAK_BOT_DIFFICULTY";

/// Bot strength ladder. Ordering follows playing strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Legend,
    Invincible,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown bot difficulty `{0}`")]
pub struct UnknownDifficulty(pub String);

impl Difficulty {
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Legend,
        Difficulty::Invincible,
    ];

    /// How far above its own estimate a bot will chase the auction.
    pub const fn bid_tolerance(self) -> u8 {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
            Difficulty::Legend => 3,
            Difficulty::Invincible => 4,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Legend => "legend",
            Difficulty::Invincible => "invincible",
        }
    }

    /// Plans ahead against the seat's own contract when leading and
    /// keeps trump and lead-suit cards back when discarding.
    pub const fn tracks_contract(self) -> bool {
        matches!(self, Difficulty::Legend | Difficulty::Invincible)
    }

    pub fn from_env() -> Self {
        static CACHED: OnceLock<Difficulty> = OnceLock::new();
        *CACHED.get_or_init(|| Self::from_reader(|key| std::env::var(key).ok()))
    }

    fn from_reader<F>(mut read: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        read(DIFFICULTY_ENV)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }
}

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" | "normal" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "legend" | "expert" => Ok(Difficulty::Legend),
            "invincible" => Ok(Difficulty::Invincible),
            _ => Err(UnknownDifficulty(raw.to_string())),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{DIFFICULTY_ENV, Difficulty, UnknownDifficulty};

    #[test]
    fn tolerance_grows_with_difficulty() {
        let tolerances: Vec<u8> = Difficulty::ALL
            .iter()
            .map(|difficulty| difficulty.bid_tolerance())
            .collect();
        assert_eq!(tolerances, vec![0, 1, 2, 3, 4]);
        assert!(Difficulty::Easy < Difficulty::Invincible);
    }

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!(" Legend ".parse::<Difficulty>(), Ok(Difficulty::Legend));
        assert_eq!("normal".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert_eq!(
            "grandmaster".parse::<Difficulty>(),
            Err(UnknownDifficulty("grandmaster".into()))
        );
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.to_string().parse::<Difficulty>(), Ok(difficulty));
        }
    }

    #[test]
    fn reader_falls_back_to_medium() {
        let read = |value: Option<&'static str>| {
            Difficulty::from_reader(move |key| {
                assert_eq!(key, DIFFICULTY_ENV);
                value.map(str::to_string)
            })
        };
        assert_eq!(read(Some("invincible")), Difficulty::Invincible);
        assert_eq!(read(Some("???")), Difficulty::Medium);
        assert_eq!(read(None), Difficulty::Medium);
    }
}
