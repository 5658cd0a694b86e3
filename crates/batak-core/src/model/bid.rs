use core::fmt;
use serde::{Deserialize, Serialize};

/// Highest contract a seat may declare.
pub const MAX_BID: u8 = 13;

/// Where a seat stands in the auction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BidState {
    #[default]
    Unset,
    Bid(u8),
    Passed,
}

impl BidState {
    /// Number of tricks the seat is committed to, if it holds a contract.
    pub const fn contract(self) -> Option<u8> {
        match self {
            BidState::Bid(amount) => Some(amount),
            BidState::Unset | BidState::Passed => None,
        }
    }

    pub const fn is_passed(self) -> bool {
        matches!(self, BidState::Passed)
    }
}

impl fmt::Display for BidState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BidState::Unset => f.write_str("-"),
            BidState::Bid(amount) => write!(f, "{amount}"),
            BidState::Passed => f.write_str("pass"),
        }
    }
}

/// A single auction action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BidAction {
    Bid(u8),
    Pass,
}

impl From<Option<u8>> for BidAction {
    fn from(value: Option<u8>) -> Self {
        match value {
            Some(amount) => BidAction::Bid(amount),
            None => BidAction::Pass,
        }
    }
}

/// A raise is legal when it strictly beats the standing high bid and does
/// not exceed [`MAX_BID`].
pub fn is_valid_bid(amount: u8, current_high: Option<u8>) -> bool {
    amount > current_high.unwrap_or(0) && amount <= MAX_BID
}
