use core::fmt;
use serde::{Deserialize, Serialize};

/// Number of seats at the table. Batak is never played with fewer than two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerCount {
    Two,
    Three,
    Four,
}

impl PlayerCount {
    pub const fn get(self) -> usize {
        match self {
            PlayerCount::Two => 2,
            PlayerCount::Three => 3,
            PlayerCount::Four => 4,
        }
    }

    pub const fn from_count(count: usize) -> Option<Self> {
        match count {
            2 => Some(PlayerCount::Two),
            3 => Some(PlayerCount::Three),
            4 => Some(PlayerCount::Four),
            _ => None,
        }
    }

    /// Cards actually dealt; the three-handed game drops one card.
    pub const fn cards_dealt(self) -> usize {
        match self {
            PlayerCount::Three => 51,
            PlayerCount::Two | PlayerCount::Four => 52,
        }
    }

    pub const fn hand_size(self) -> usize {
        self.cards_dealt() / self.get()
    }

    pub fn seats(self) -> impl Iterator<Item = Seat> {
        (0..self.get()).map(Seat)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Seat(pub usize);

impl Seat {
    pub const fn index(self) -> usize {
        self.0
    }

    pub const fn next(self, players: PlayerCount) -> Seat {
        Seat((self.0 + 1) % players.get())
    }

    /// Seat across the table in the four-handed game.
    pub const fn partner(self) -> Seat {
        Seat((self.0 + 2) % 4)
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seat{}", self.0)
    }
}
