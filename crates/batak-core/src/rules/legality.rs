use crate::model::card::Card;
use crate::model::house_rules::HouseRules;
use crate::model::suit::Suit;
use crate::model::trick::{PlayedCard, current_winning_card, lead_suit};

/// Everything the legality check needs to know about the seat to act.
#[derive(Debug, Clone, Copy)]
pub struct PlayContext<'a> {
    pub hand: &'a [Card],
    pub trick: &'a [PlayedCard],
    pub trump: Option<Suit>,
    pub trump_broken: bool,
    /// Tricks already completed this round.
    pub trick_count: usize,
    pub rules: HouseRules,
}

impl<'a> PlayContext<'a> {
    pub fn is_leading(&self) -> bool {
        self.trick.is_empty()
    }

    pub fn lead_suit(&self) -> Option<Suit> {
        lead_suit(self.trick)
    }

    fn holds_only_trump(&self) -> bool {
        match self.trump {
            Some(trump) => self.hand.iter().all(|card| card.suit == trump),
            None => false,
        }
    }

    fn holds(&self, suit: Suit) -> bool {
        self.hand.iter().any(|card| card.suit == suit)
    }

    /// First-trick ban in force for this seat. Following a trump lead is exempt.
    fn trump_banned(&self) -> bool {
        let trump_led = self.trump.is_some() && self.lead_suit() == self.trump;
        self.rules.first_trick_trump_ban
            && self.trick_count == 0
            && !self.holds_only_trump()
            && !trump_led
    }

    /// When overplay is forced and the seat can beat `best` within its suit,
    /// only beating cards qualify.
    fn satisfies_overplay(&self, card: Card, best: Card) -> bool {
        if !self.rules.forced_overplay {
            return true;
        }
        let can_beat = self
            .hand
            .iter()
            .any(|held| held.suit == best.suit && held.rank > best.rank);
        !can_beat || (card.suit == best.suit && card.rank > best.rank)
    }
}

pub fn is_valid_move(card: Card, ctx: &PlayContext<'_>) -> bool {
    let is_trump = card.is_trump(ctx.trump);

    if is_trump && ctx.trump_banned() {
        return false;
    }

    let (Some(lead), Some(winning)) = (ctx.lead_suit(), current_winning_card(ctx.trick, ctx.trump))
    else {
        return !(is_trump && !ctx.trump_broken && !ctx.holds_only_trump());
    };

    if ctx.holds(lead) {
        if card.suit != lead {
            return false;
        }
        if winning.card.suit == lead {
            return ctx.satisfies_overplay(card, winning.card);
        }
        return true;
    }

    if let Some(trump) = ctx.trump
        && ctx.holds(trump)
        && !ctx.trump_banned()
    {
        if card.suit != trump {
            return false;
        }
        // Nothing to overplay until a trump is already winning the trick.
        if winning.card.suit == trump {
            return ctx.satisfies_overplay(card, winning.card);
        }
        return true;
    }

    true
}

/// Legal subset of the hand, in hand order.
pub fn legal_moves(ctx: &PlayContext<'_>) -> Vec<Card> {
    ctx.hand
        .iter()
        .copied()
        .filter(|card| is_valid_move(*card, ctx))
        .collect()
}
