use crate::model::card::Card;
use crate::model::player::{PlayerCount, Seat};
use crate::model::suit::Suit;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trick {
    leader: Seat,
    players: PlayerCount,
    plays: Vec<PlayedCard>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedCard {
    pub seat: Seat,
    pub card: Card,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrickError {
    #[error("trick already complete")]
    TrickComplete,
    #[error("expected {expected} to play next but got {actual}")]
    OutOfTurn { expected: Seat, actual: Seat },
}

impl Trick {
    pub fn new(leader: Seat, players: PlayerCount) -> Self {
        Self {
            leader,
            players,
            plays: Vec::with_capacity(players.get()),
        }
    }

    pub fn leader(&self) -> Seat {
        self.leader
    }

    pub fn plays(&self) -> &[PlayedCard] {
        &self.plays
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == self.players.get()
    }

    pub fn lead_suit(&self) -> Option<Suit> {
        lead_suit(&self.plays)
    }

    pub fn expected_seat(&self) -> Seat {
        self.plays
            .last()
            .map(|play| play.seat.next(self.players))
            .unwrap_or(self.leader)
    }

    pub fn play(&mut self, seat: Seat, card: Card) -> Result<(), TrickError> {
        if self.is_complete() {
            return Err(TrickError::TrickComplete);
        }

        let expected = self.expected_seat();
        if expected != seat {
            return Err(TrickError::OutOfTurn {
                expected,
                actual: seat,
            });
        }

        self.plays.push(PlayedCard { seat, card });
        Ok(())
    }

    pub fn winner(&self, trump: Option<Suit>) -> Option<Seat> {
        if !self.is_complete() {
            return None;
        }
        determine_trick_winner(&self.plays, trump)
    }
}

pub fn lead_suit(plays: &[PlayedCard]) -> Option<Suit> {
    plays.first().map(|play| play.card.suit)
}

/// True when `challenger` takes the trick away from `best`, the card
/// currently winning it.
pub fn beats(challenger: Card, best: Card, trump: Option<Suit>) -> bool {
    let challenger_trump = challenger.is_trump(trump);
    let best_trump = best.is_trump(trump);
    match (challenger_trump, best_trump) {
        (true, false) => true,
        (false, true) => false,
        _ => challenger.suit == best.suit && challenger.rank > best.rank,
    }
}

/// Card currently winning the trick. Trump outranks the lead suit no matter
/// when it entered; off-suit discards never win.
pub fn current_winning_card(plays: &[PlayedCard], trump: Option<Suit>) -> Option<PlayedCard> {
    let (first, rest) = plays.split_first()?;
    let mut best = *first;
    for play in rest {
        if beats(play.card, best.card, trump) {
            best = *play;
        }
    }
    Some(best)
}

pub fn determine_trick_winner(plays: &[PlayedCard], trump: Option<Suit>) -> Option<Seat> {
    current_winning_card(plays, trump).map(|play| play.seat)
}
