use batak_core::model::suit::Suit;
use rand::Rng;

pub struct TrumpPlanner;

impl TrumpPlanner {
    /// Bot auction winners name a uniformly random suit.
    pub fn choose<R: Rng + ?Sized>(rng: &mut R) -> Suit {
        Suit::ALL[rng.gen_range(0..Suit::ALL.len())]
    }
}
