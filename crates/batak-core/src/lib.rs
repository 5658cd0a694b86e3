//! Rule engine for the Batak family of trick-taking games: dealing, move
//! legality, trick resolution, auctions and per-mode round scoring.

pub mod game;
pub mod model;
pub mod rules;
pub mod scoring;

pub use game::round::{PlayError, PlayOutcome, RoundPhase, RoundState, TrumpError};
pub use game::serialization::RoundRecord;
pub use model::auction::{Auction, AuctionOutcome, AuctionStatus, BidError};
pub use model::bid::{BidAction, BidState, MAX_BID};
pub use model::card::Card;
pub use model::deck::Deck;
pub use model::hand::Hand;
pub use model::house_rules::HouseRules;
pub use model::mode::{GameMode, TrumpPolicy};
pub use model::player::{PlayerCount, Seat};
pub use model::rank::Rank;
pub use model::score::{RoundScore, ScoreBoard, SeatTally};
pub use model::suit::Suit;
pub use model::trick::{PlayedCard, Trick};
pub use scoring::calculate_round_score;
