use crate::model::auction::{Auction, AuctionOutcome, AuctionStatus, BidError};
use crate::model::bid::{BidAction, BidState};
use crate::model::card::Card;
use crate::model::deck::Deck;
use crate::model::hand::Hand;
use crate::model::house_rules::HouseRules;
use crate::model::mode::{GameMode, TrumpPolicy};
use crate::model::player::{PlayerCount, Seat};
use crate::model::score::{RoundScore, SeatTally};
use crate::model::suit::Suit;
use crate::model::trick::{Trick, TrickError};
use crate::rules::legality::{PlayContext, is_valid_move, legal_moves};
use crate::scoring::calculate_round_score;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Drives one deal from the auction to the last trick. Every rule decision is
/// delegated to the pure functions in `rules` and `scoring`.
#[derive(Debug, Clone)]
pub struct RoundState {
    mode: GameMode,
    rules: HouseRules,
    players: PlayerCount,
    hands: Vec<Hand>,
    auction: Option<Auction>,
    trump: Option<Suit>,
    trump_broken: bool,
    current_trick: Trick,
    trick_history: Vec<Trick>,
    tricks_won: Vec<u8>,
    last_trick_winner: Option<Seat>,
    phase: RoundPhase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    Bidding,
    ChoosingTrump { seat: Seat },
    Playing,
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Played,
    TrickCompleted { winner: Seat },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error("round is not in the playing phase")]
    NotInPlayPhase,
    #[error("{0} is not in the hand")]
    CardNotInHand(Card),
    #[error("expected {expected} to play but got {actual}")]
    OutOfTurn { expected: Seat, actual: Seat },
    #[error("{0} is not a legal play")]
    IllegalMove(Card),
    #[error(transparent)]
    Trick(#[from] TrickError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TrumpError {
    #[error("no trump declaration is pending")]
    NotChoosingTrump,
    #[error("{expected} names trump, not {actual}")]
    WrongSeat { expected: Seat, actual: Seat },
}

impl RoundState {
    pub fn deal(mode: GameMode, rules: HouseRules, deck: &Deck) -> Self {
        let players = mode.player_count();
        let trump = match mode.trump_policy() {
            TrumpPolicy::Fixed(suit) => Some(suit),
            TrumpPolicy::Revealed => deck.bottom_card().map(|card| card.suit),
            TrumpPolicy::AuctionWinner { .. } | TrumpPolicy::FirstTrickWinner => None,
        };

        let mut hands = deck.deal(players);
        if trump.is_some() {
            for hand in &mut hands {
                hand.sort_canonical(trump);
            }
        }

        let (auction, phase) = if mode.has_auction() {
            (Some(Auction::new(players, Seat(0))), RoundPhase::Bidding)
        } else {
            (None, RoundPhase::Playing)
        };

        Self {
            mode,
            rules,
            players,
            hands,
            auction,
            trump,
            trump_broken: false,
            current_trick: Trick::new(Seat(0), players),
            trick_history: Vec::new(),
            tricks_won: vec![0; players.get()],
            last_trick_winner: None,
            phase,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn rules(&self) -> HouseRules {
        self.rules
    }

    pub fn players(&self) -> PlayerCount {
        self.players
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn hand(&self, seat: Seat) -> &Hand {
        &self.hands[seat.index()]
    }

    pub fn auction(&self) -> Option<&Auction> {
        self.auction.as_ref()
    }

    pub fn trump(&self) -> Option<Suit> {
        self.trump
    }

    pub fn trump_broken(&self) -> bool {
        self.trump_broken
    }

    pub fn current_trick(&self) -> &Trick {
        &self.current_trick
    }

    pub fn trick_history(&self) -> &[Trick] {
        &self.trick_history
    }

    pub fn tricks_completed(&self) -> usize {
        self.trick_history.len()
    }

    pub fn tricks_won(&self, seat: Seat) -> u8 {
        self.tricks_won.get(seat.index()).copied().unwrap_or(0)
    }

    pub fn last_trick_winner(&self) -> Option<Seat> {
        self.last_trick_winner
    }

    pub fn is_complete(&self) -> bool {
        self.phase == RoundPhase::Complete
    }

    /// Seat whose action the round is waiting on.
    pub fn next_to_act(&self) -> Option<Seat> {
        match self.phase {
            RoundPhase::Bidding => self.auction.as_ref().and_then(Auction::next_to_act),
            RoundPhase::ChoosingTrump { seat } => Some(seat),
            RoundPhase::Playing => Some(self.current_trick.expected_seat()),
            RoundPhase::Complete => None,
        }
    }

    /// Contract state per seat. Modes without an auction report `Unset` for everyone.
    pub fn bids(&self) -> Vec<BidState> {
        match &self.auction {
            Some(auction) => auction.bids().to_vec(),
            None => vec![BidState::Unset; self.players.get()],
        }
    }

    pub fn bid_of(&self, seat: Seat) -> BidState {
        self.auction
            .as_ref()
            .map(|auction| auction.bid_of(seat))
            .unwrap_or(BidState::Unset)
    }

    pub fn place_bid(&mut self, seat: Seat, action: BidAction) -> Result<AuctionStatus, BidError> {
        if self.phase != RoundPhase::Bidding {
            return Err(BidError::NotBidding);
        }
        let auction = self.auction.as_mut().ok_or(BidError::NotBidding)?;
        let status = auction.place(seat, action)?;
        if let AuctionStatus::Closed(outcome) = status {
            self.close_auction(outcome);
        }
        Ok(status)
    }

    fn close_auction(&mut self, outcome: AuctionOutcome) {
        let policy = self.mode.trump_policy();
        match outcome {
            AuctionOutcome::Won { seat, .. } => {
                self.current_trick = Trick::new(seat, self.players);
                self.phase = match policy {
                    TrumpPolicy::AuctionWinner { .. } => RoundPhase::ChoosingTrump { seat },
                    _ => RoundPhase::Playing,
                };
            }
            AuctionOutcome::AllPassed => {
                if let TrumpPolicy::AuctionWinner { fallback } = policy {
                    self.set_trump(fallback);
                }
                self.current_trick = Trick::new(Seat(0), self.players);
                self.phase = RoundPhase::Playing;
            }
        }
    }

    pub fn declare_trump(&mut self, seat: Seat, suit: Suit) -> Result<(), TrumpError> {
        let RoundPhase::ChoosingTrump { seat: chooser } = self.phase else {
            return Err(TrumpError::NotChoosingTrump);
        };
        if chooser != seat {
            return Err(TrumpError::WrongSeat {
                expected: chooser,
                actual: seat,
            });
        }
        self.set_trump(suit);
        self.phase = RoundPhase::Playing;
        Ok(())
    }

    fn set_trump(&mut self, suit: Suit) {
        self.trump = Some(suit);
        for hand in &mut self.hands {
            hand.sort_canonical(self.trump);
        }
    }

    /// Legality inputs for `seat` against the trick in progress.
    pub fn play_context(&self, seat: Seat) -> Option<PlayContext<'_>> {
        let hand = self.hands.get(seat.index())?;
        Some(PlayContext {
            hand: hand.cards(),
            trick: self.current_trick.plays(),
            trump: self.trump,
            trump_broken: self.trump_broken,
            trick_count: self.trick_history.len(),
            rules: self.rules,
        })
    }

    pub fn legal_moves(&self, seat: Seat) -> Vec<Card> {
        self.play_context(seat)
            .map(|ctx| legal_moves(&ctx))
            .unwrap_or_default()
    }

    pub fn play_card(&mut self, seat: Seat, card: Card) -> Result<PlayOutcome, PlayError> {
        if self.phase != RoundPhase::Playing {
            return Err(PlayError::NotInPlayPhase);
        }

        let expected = self.current_trick.expected_seat();
        if expected != seat {
            return Err(PlayError::OutOfTurn {
                expected,
                actual: seat,
            });
        }

        let Some(ctx) = self.play_context(seat) else {
            return Err(PlayError::OutOfTurn {
                expected,
                actual: seat,
            });
        };
        if !ctx.hand.contains(&card) {
            return Err(PlayError::CardNotInHand(card));
        }
        if !is_valid_move(card, &ctx) {
            return Err(PlayError::IllegalMove(card));
        }

        self.current_trick.play(seat, card)?;
        self.hands[seat.index()].remove(card);
        if card.is_trump(self.trump) {
            self.trump_broken = true;
        }

        let Some(winner) = self.current_trick.winner(self.trump) else {
            return Ok(PlayOutcome::Played);
        };
        self.finish_trick(winner);
        Ok(PlayOutcome::TrickCompleted { winner })
    }

    fn finish_trick(&mut self, winner: Seat) {
        self.tricks_won[winner.index()] += 1;
        self.last_trick_winner = Some(winner);
        let finished = std::mem::replace(&mut self.current_trick, Trick::new(winner, self.players));
        self.trick_history.push(finished);

        if self.hands.iter().all(Hand::is_empty) {
            self.phase = RoundPhase::Complete;
        } else if self.trump.is_none()
            && self.mode.trump_policy() == TrumpPolicy::FirstTrickWinner
        {
            self.phase = RoundPhase::ChoosingTrump { seat: winner };
        }
    }

    pub fn tallies(&self) -> Vec<SeatTally> {
        self.bids()
            .into_iter()
            .zip(&self.tricks_won)
            .map(|(bid, &tricks_won)| SeatTally::new(bid, tricks_won))
            .collect()
    }

    /// Round result, available once the last trick has been taken.
    pub fn score(&self) -> Option<RoundScore> {
        self.is_complete().then(|| {
            calculate_round_score(
                &self.tallies(),
                self.mode,
                self.rules,
                self.last_trick_winner,
            )
        })
    }
}
