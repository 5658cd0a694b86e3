use crate::model::card::Card;
use crate::model::hand::Hand;
use crate::model::player::PlayerCount;
use crate::model::rank::Rank;
use crate::model::suit::Suit;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL.iter().copied() {
            for rank in Rank::ORDERED.iter().copied() {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    pub fn shuffled<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            cards: shuffle(Self::standard().cards(), rng),
        }
    }

    pub fn shuffled_with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The face-up card in open-trump games.
    pub fn bottom_card(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    pub fn deal(&self, players: PlayerCount) -> Vec<Hand> {
        deal(&self.cards, players)
    }
}

/// Returns a fresh Fisher-Yates permutation; `cards` is left untouched.
pub fn shuffle<R: rand::Rng + ?Sized>(cards: &[Card], rng: &mut R) -> Vec<Card> {
    let mut shuffled = cards.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Round-robin deal of the first `players.cards_dealt()` cards. Three-handed
/// games leave the 52nd card out so every seat receives 17.
pub fn deal(cards: &[Card], players: PlayerCount) -> Vec<Hand> {
    let count = players.get();
    let mut hands = vec![Hand::new(); count];
    for (index, card) in cards.iter().take(players.cards_dealt()).enumerate() {
        hands[index % count].add(*card);
    }
    for hand in &mut hands {
        hand.sort_canonical(None);
    }
    hands
}
