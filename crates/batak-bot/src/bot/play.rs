use super::Difficulty;
use batak_core::model::bid::BidState;
use batak_core::model::card::Card;
use batak_core::model::trick::{beats, current_winning_card};
use batak_core::rules::legality::{PlayContext, legal_moves};
use rand::Rng;

/// Where the acting seat stands against its own contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractProgress {
    pub bid: BidState,
    pub tricks_won: u8,
    pub max_tricks: usize,
}

impl ContractProgress {
    /// Tricks still missing for the contract; zero or less without one.
    pub fn needed(self) -> i32 {
        let bid = self.bid.contract().map(i32::from).unwrap_or(0);
        bid - i32::from(self.tricks_won)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayReason {
    RandomLegal,
    HighestLegal,
    LeadHighest,
    LeadConserve,
    CheapestWinner,
    DiscardSideSuit,
    DiscardLowest,
}

impl PlayReason {
    pub const fn as_str(self) -> &'static str {
        match self {
            PlayReason::RandomLegal => "random_legal",
            PlayReason::HighestLegal => "highest_legal",
            PlayReason::LeadHighest => "lead_highest",
            PlayReason::LeadConserve => "lead_conserve",
            PlayReason::CheapestWinner => "cheapest_winner",
            PlayReason::DiscardSideSuit => "discard_side_suit",
            PlayReason::DiscardLowest => "discard_lowest",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayChoice {
    pub card: Card,
    pub reason: PlayReason,
}

pub struct PlayPlanner;

impl PlayPlanner {
    /// Picks a card from the legal set. `None` only for an empty hand.
    pub fn choose<R: Rng + ?Sized>(
        ctx: &PlayContext<'_>,
        progress: ContractProgress,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Option<PlayChoice> {
        let legal = legal_moves(ctx);
        if legal.is_empty() {
            return None;
        }

        let choice = match difficulty {
            Difficulty::Easy => PlayChoice {
                card: legal[rng.gen_range(0..legal.len())],
                reason: PlayReason::RandomLegal,
            },
            Difficulty::Medium => PlayChoice {
                card: highest(&legal)?,
                reason: PlayReason::HighestLegal,
            },
            Difficulty::Hard | Difficulty::Legend | Difficulty::Invincible => {
                if ctx.is_leading() {
                    lead(&legal, ctx, progress, difficulty)?
                } else {
                    let winning = current_winning_card(ctx.trick, ctx.trump)?;
                    follow(&legal, winning.card, ctx, difficulty)?
                }
            }
        };
        Some(choice)
    }
}

fn lead(
    legal: &[Card],
    ctx: &PlayContext<'_>,
    progress: ContractProgress,
    difficulty: Difficulty,
) -> Option<PlayChoice> {
    if difficulty.tracks_contract() {
        let remaining = progress.max_tricks.saturating_sub(ctx.trick_count);
        let needed = progress.needed();
        if needed > 0 && needed as usize <= remaining {
            return Some(PlayChoice {
                card: lowest(legal)?,
                reason: PlayReason::LeadConserve,
            });
        }
    }
    Some(PlayChoice {
        card: highest(legal)?,
        reason: PlayReason::LeadHighest,
    })
}

fn follow(
    legal: &[Card],
    winning: Card,
    ctx: &PlayContext<'_>,
    difficulty: Difficulty,
) -> Option<PlayChoice> {
    let cheapest_winner = legal
        .iter()
        .copied()
        .filter(|card| beats(*card, winning, ctx.trump))
        .min_by_key(|card| (card.is_trump(ctx.trump), card.rank));
    if let Some(card) = cheapest_winner {
        return Some(PlayChoice {
            card,
            reason: PlayReason::CheapestWinner,
        });
    }

    if difficulty.tracks_contract() {
        let lead = ctx.lead_suit();
        let side: Vec<Card> = legal
            .iter()
            .copied()
            .filter(|card| Some(card.suit) != lead && !card.is_trump(ctx.trump))
            .collect();
        if let Some(card) = lowest(&side) {
            return Some(PlayChoice {
                card,
                reason: PlayReason::DiscardSideSuit,
            });
        }
    }

    Some(PlayChoice {
        card: lowest(legal)?,
        reason: PlayReason::DiscardLowest,
    })
}

/// First card holding the top rank.
fn highest(cards: &[Card]) -> Option<Card> {
    cards
        .iter()
        .copied()
        .reduce(|best, card| if card.rank > best.rank { card } else { best })
}

/// First card holding the bottom rank.
fn lowest(cards: &[Card]) -> Option<Card> {
    cards.iter().copied().min_by_key(|card| card.rank)
}

#[cfg(test)]
mod tests {
    use super::{ContractProgress, PlayPlanner, PlayReason};
    use crate::bot::Difficulty;
    use batak_core::model::bid::BidState;
    use batak_core::model::card::Card;
    use batak_core::model::house_rules::HouseRules;
    use batak_core::model::player::Seat;
    use batak_core::model::rank::Rank;
    use batak_core::model::suit::Suit;
    use batak_core::model::trick::PlayedCard;
    use batak_core::rules::legality::{PlayContext, is_valid_move};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn c(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    fn progress(bid: BidState, tricks_won: u8) -> ContractProgress {
        ContractProgress {
            bid,
            tricks_won,
            max_tricks: 13,
        }
    }

    fn ctx<'a>(hand: &'a [Card], trick: &'a [PlayedCard]) -> PlayContext<'a> {
        PlayContext {
            hand,
            trick,
            trump: Some(Suit::Spades),
            trump_broken: true,
            trick_count: 4,
            rules: HouseRules::default(),
        }
    }

    fn hand() -> Vec<Card> {
        vec![
            c(Rank::Ace, Suit::Hearts),
            c(Rank::Nine, Suit::Hearts),
            c(Rank::Three, Suit::Hearts),
            c(Rank::King, Suit::Spades),
            c(Rank::Four, Suit::Spades),
            c(Rank::Seven, Suit::Clubs),
            c(Rank::Two, Suit::Diamonds),
        ]
    }

    fn played(seat: usize, card: Card) -> PlayedCard {
        PlayedCard {
            seat: Seat(seat),
            card,
        }
    }

    #[test]
    fn easy_plays_something_legal() {
        let cards = hand();
        let trick = [played(0, c(Rank::Ten, Suit::Hearts))];
        let context = ctx(&cards, &trick);
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..30 {
            let choice = PlayPlanner::choose(
                &context,
                progress(BidState::Unset, 0),
                Difficulty::Easy,
                &mut rng,
            )
            .unwrap();
            assert!(is_valid_move(choice.card, &context));
            assert_eq!(choice.reason, PlayReason::RandomLegal);
        }
    }

    #[test]
    fn medium_plays_highest_legal() {
        let cards = hand();
        let trick = [played(0, c(Rank::Ten, Suit::Clubs))];
        let mut rng = StdRng::seed_from_u64(5);
        let choice = PlayPlanner::choose(
            &ctx(&cards, &trick),
            progress(BidState::Unset, 0),
            Difficulty::Medium,
            &mut rng,
        )
        .unwrap();
        assert_eq!(choice.card, c(Rank::Seven, Suit::Clubs));

        let choice = PlayPlanner::choose(
            &ctx(&cards, &[]),
            progress(BidState::Unset, 0),
            Difficulty::Medium,
            &mut rng,
        )
        .unwrap();
        assert_eq!(choice.card, c(Rank::Ace, Suit::Hearts));
    }

    #[test]
    fn hard_leads_high_but_legend_conserves_for_contract() {
        let cards = hand();
        let mut rng = StdRng::seed_from_u64(6);
        let contract = progress(BidState::Bid(5), 2);

        let hard = PlayPlanner::choose(&ctx(&cards, &[]), contract, Difficulty::Hard, &mut rng)
            .unwrap();
        assert_eq!(hard.card, c(Rank::Ace, Suit::Hearts));
        assert_eq!(hard.reason, PlayReason::LeadHighest);

        let legend = PlayPlanner::choose(&ctx(&cards, &[]), contract, Difficulty::Legend, &mut rng)
            .unwrap();
        assert_eq!(legend.card, c(Rank::Two, Suit::Diamonds));
        assert_eq!(legend.reason, PlayReason::LeadConserve);

        let made = progress(BidState::Bid(5), 5);
        let legend = PlayPlanner::choose(&ctx(&cards, &[]), made, Difficulty::Invincible, &mut rng)
            .unwrap();
        assert_eq!(legend.reason, PlayReason::LeadHighest);

        let out_of_reach = ContractProgress {
            bid: BidState::Bid(12),
            tricks_won: 0,
            max_tricks: 13,
        };
        let legend =
            PlayPlanner::choose(&ctx(&cards, &[]), out_of_reach, Difficulty::Legend, &mut rng)
                .unwrap();
        assert_eq!(legend.reason, PlayReason::LeadHighest);
    }

    #[test]
    fn followers_win_as_cheaply_as_possible() {
        let cards = hand();
        let trick = [played(0, c(Rank::Eight, Suit::Hearts))];
        let mut rng = StdRng::seed_from_u64(7);
        let choice = PlayPlanner::choose(
            &ctx(&cards, &trick),
            progress(BidState::Unset, 0),
            Difficulty::Hard,
            &mut rng,
        )
        .unwrap();
        assert_eq!(choice.card, c(Rank::Nine, Suit::Hearts));
        assert_eq!(choice.reason, PlayReason::CheapestWinner);

        // Void in the lead suit: the small trump is enough.
        let trumping = vec![
            c(Rank::King, Suit::Spades),
            c(Rank::Four, Suit::Spades),
            c(Rank::Seven, Suit::Clubs),
        ];
        let trick = [played(0, c(Rank::Ace, Suit::Diamonds))];
        let choice = PlayPlanner::choose(
            &ctx(&trumping, &trick),
            progress(BidState::Unset, 0),
            Difficulty::Legend,
            &mut rng,
        )
        .unwrap();
        assert_eq!(choice.card, c(Rank::Four, Suit::Spades));
    }

    #[test]
    fn losing_followers_discard_by_tier() {
        let cards = vec![
            c(Rank::Two, Suit::Spades),
            c(Rank::Five, Suit::Clubs),
            c(Rank::Three, Suit::Diamonds),
        ];
        // Lead clubs, already over-trumped by the ace of spades.
        let trick = [
            played(0, c(Rank::Ten, Suit::Clubs)),
            played(1, c(Rank::Ace, Suit::Spades)),
        ];
        let mut context = ctx(&cards, &trick);
        context.trump = Some(Suit::Spades);
        let mut rng = StdRng::seed_from_u64(8);

        let hard = PlayPlanner::choose(
            &context,
            progress(BidState::Unset, 0),
            Difficulty::Hard,
            &mut rng,
        )
        .unwrap();
        assert_eq!(hard.card, c(Rank::Five, Suit::Clubs));
        assert_eq!(hard.reason, PlayReason::DiscardLowest);

        let void_hand = vec![
            c(Rank::Two, Suit::Hearts),
            c(Rank::Nine, Suit::Diamonds),
        ];
        let trick = [played(0, c(Rank::Ace, Suit::Clubs))];
        let mut void_ctx = ctx(&void_hand, &trick);
        void_ctx.trump = Some(Suit::Spades);
        let legend = PlayPlanner::choose(
            &void_ctx,
            progress(BidState::Unset, 0),
            Difficulty::Legend,
            &mut rng,
        )
        .unwrap();
        assert_eq!(legend.card, c(Rank::Two, Suit::Hearts));
        assert_eq!(legend.reason, PlayReason::DiscardSideSuit);
    }

    #[test]
    fn legend_without_side_suits_discards_lowest() {
        // Holding only lead-suit and trump cards that cannot beat the trick.
        let cards = vec![
            c(Rank::Six, Suit::Clubs),
            c(Rank::Three, Suit::Clubs),
            c(Rank::Two, Suit::Spades),
        ];
        let trick = [
            played(0, c(Rank::Ten, Suit::Clubs)),
            played(1, c(Rank::Ace, Suit::Spades)),
        ];
        let context = ctx(&cards, &trick);
        let mut rng = StdRng::seed_from_u64(10);
        for difficulty in [Difficulty::Legend, Difficulty::Invincible] {
            let choice = PlayPlanner::choose(
                &context,
                progress(BidState::Bid(6), 1),
                difficulty,
                &mut rng,
            )
            .unwrap();
            assert_eq!(choice.card, c(Rank::Three, Suit::Clubs), "{difficulty}");
            assert_eq!(choice.reason, PlayReason::DiscardLowest, "{difficulty}");
        }
    }

    #[test]
    fn legend_conserves_up_to_an_exact_fit() {
        let cards = hand();
        let mut rng = StdRng::seed_from_u64(11);
        // Four tricks done, nine remain.
        let exact = ContractProgress {
            bid: BidState::Bid(9),
            tricks_won: 0,
            max_tricks: 13,
        };
        let choice =
            PlayPlanner::choose(&ctx(&cards, &[]), exact, Difficulty::Legend, &mut rng).unwrap();
        assert_eq!(choice.reason, PlayReason::LeadConserve);
        assert_eq!(choice.card, c(Rank::Two, Suit::Diamonds));

        let one_short = ContractProgress {
            bid: BidState::Bid(10),
            tricks_won: 0,
            max_tricks: 13,
        };
        let choice =
            PlayPlanner::choose(&ctx(&cards, &[]), one_short, Difficulty::Legend, &mut rng)
                .unwrap();
        assert_eq!(choice.reason, PlayReason::LeadHighest);
        assert_eq!(choice.card, c(Rank::Ace, Suit::Hearts));
    }

    #[test]
    fn empty_hand_has_no_choice() {
        let mut rng = StdRng::seed_from_u64(9);
        let choice = PlayPlanner::choose(
            &ctx(&[], &[]),
            progress(BidState::Unset, 0),
            Difficulty::Hard,
            &mut rng,
        );
        assert!(choice.is_none());
    }
}
