use super::Difficulty;
use batak_core::model::bid::MAX_BID;
use batak_core::model::card::Card;
use batak_core::model::suit::Suit;
use rand::Rng;

/// Lowest contract a bot opens an auction with.
pub const MIN_OPENING_BID: u8 = 4;

/// Working numbers behind one bid decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BidPlan {
    pub strength: u8,
    pub base: u8,
    pub minimum: u8,
    pub choice: Option<u8>,
}

pub struct BidPlanner;

impl BidPlanner {
    /// One point per Jack-or-better, half a point per trump, rounded down.
    pub fn evaluate_hand(hand: &[Card], trump: Option<Suit>) -> u8 {
        let honours = hand.iter().filter(|card| card.rank.is_honour()).count();
        let trumps = hand.iter().filter(|card| card.is_trump(trump)).count();
        let points = (honours * 2 + trumps) / 2;
        u8::try_from(points).unwrap_or(u8::MAX)
    }

    pub fn plan<R: Rng + ?Sized>(
        hand: &[Card],
        trump: Option<Suit>,
        current_high: Option<u8>,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> BidPlan {
        let strength = Self::evaluate_hand(hand, trump);
        let noise: i16 = rng.gen_range(-1..2);
        let base = (i16::from(strength) + noise)
            .clamp(i16::from(MIN_OPENING_BID), i16::from(MAX_BID));
        let base = u8::try_from(base).unwrap_or(MAX_BID);

        let minimum = current_high.map_or(MIN_OPENING_BID, |high| high.saturating_add(1));
        let ceiling = base.saturating_add(difficulty.bid_tolerance());
        let choice = (minimum <= MAX_BID && minimum <= ceiling).then_some(minimum);

        BidPlan {
            strength,
            base,
            minimum,
            choice,
        }
    }

    /// `None` means pass. A bot never bids above the smallest legal raise.
    pub fn choose<R: Rng + ?Sized>(
        hand: &[Card],
        trump: Option<Suit>,
        current_high: Option<u8>,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Option<u8> {
        Self::plan(hand, trump, current_high, difficulty, rng).choice
    }
}
