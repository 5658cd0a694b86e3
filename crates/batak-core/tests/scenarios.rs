use batak_core::model::trick::determine_trick_winner;
use batak_core::rules::{PlayContext, is_valid_move, legal_moves};
use batak_core::{
    AuctionOutcome, BidAction, BidState, Card, Deck, GameMode, HouseRules, PlayedCard, Rank,
    RoundRecord, RoundState, Seat, SeatTally, Suit, calculate_round_score,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

#[test]
fn outbid_opener_passing_hands_auction_to_seat_one() {
    let deck = Deck::shuffled_with_seed(2024);
    let mut round = RoundState::deal(GameMode::Ihaleli, HouseRules::default(), &deck);
    round.place_bid(Seat(0), BidAction::Bid(5)).unwrap();
    round.place_bid(Seat(1), BidAction::Bid(7)).unwrap();
    round.place_bid(Seat(2), BidAction::Pass).unwrap();
    round.place_bid(Seat(3), BidAction::Pass).unwrap();
    round.place_bid(Seat(0), BidAction::Pass).unwrap();

    let auction = round.auction().unwrap();
    assert_eq!(
        auction.outcome(),
        Some(AuctionOutcome::Won {
            seat: Seat(1),
            bid: 7
        })
    );
}

#[test]
fn twelve_bid_with_no_tricks_scores_minus_one_twenty() {
    let rules = HouseRules {
        twelve_breaks: true,
        batak_mandatory: true,
        ..HouseRules::default()
    };
    let seats = [
        SeatTally::new(BidState::Bid(12), 0),
        SeatTally::new(BidState::Passed, 5),
        SeatTally::new(BidState::Passed, 4),
        SeatTally::new(BidState::Passed, 4),
    ];
    let result = calculate_round_score(&seats, GameMode::KozMaca, rules, None);
    assert_eq!(result.scores[0], -120);
    assert_eq!(result.batak_seats, vec![Seat(0)]);
}

#[test]
fn capot_zero_tricks_wins() {
    let seats = [
        SeatTally::new(BidState::Unset, 0),
        SeatTally::new(BidState::Unset, 5),
        SeatTally::new(BidState::Unset, 4),
        SeatTally::new(BidState::Unset, 4),
    ];
    let result = calculate_round_score(&seats, GameMode::Capot, HouseRules::default(), None);
    assert_eq!(result.scores[0], 130);
    assert_eq!(result.winner, Some(Seat(0)));
}

#[test]
fn partnership_one_trick_short_fails_both_partners() {
    let seats = [
        SeatTally::new(BidState::Bid(5), 5),
        SeatTally::new(BidState::Passed, 3),
        SeatTally::new(BidState::Bid(4), 3),
        SeatTally::new(BidState::Bid(2), 2),
    ];
    let result = calculate_round_score(&seats, GameMode::Esli, HouseRules::default(), None);
    assert_eq!(result.scores[0], -90);
    assert_eq!(result.scores[2], -90);
    assert!(result.is_batak(Seat(0)) && result.is_batak(Seat(2)));
    assert_eq!(result.scores[1], 20);
    assert_eq!(result.scores[3], 20);
    assert!(!result.is_batak(Seat(1)));
}

#[test]
fn following_seats_must_follow_suit() {
    let mut rng = SmallRng::seed_from_u64(77);
    let mut cards = Deck::standard().cards().to_vec();
    let rules = HouseRules::default();

    for _ in 0..200 {
        cards.shuffle(&mut rng);
        let hand = &cards[..13];
        let trick = [PlayedCard {
            seat: Seat(0),
            card: cards[13],
        }];
        let lead = cards[13].suit;
        let trump = Some(Suit::ALL[usize::from(cards[14].rank.value()) % 4]);
        let ctx = PlayContext {
            hand,
            trick: &trick,
            trump,
            trump_broken: false,
            trick_count: 3,
            rules,
        };
        let legal = legal_moves(&ctx);
        assert!(!legal.is_empty());
        if hand.iter().any(|c| c.suit == lead) {
            assert!(legal.iter().all(|c| c.suit == lead));
            for held in hand.iter().filter(|c| c.suit == lead) {
                assert!(is_valid_move(*held, &ctx));
            }
        }
    }
}

#[test]
fn trump_beats_lead_regardless_of_order() {
    let plays = [
        (Seat(0), card(Rank::Ace, Suit::Hearts)),
        (Seat(1), card(Rank::King, Suit::Hearts)),
        (Seat(2), card(Rank::Two, Suit::Spades)),
        (Seat(3), card(Rank::Queen, Suit::Hearts)),
    ];
    for rotation in 0..4 {
        let trick: Vec<PlayedCard> = (0..4)
            .map(|offset| {
                let (seat, card) = plays[(rotation + offset) % 4];
                PlayedCard { seat, card }
            })
            .collect();
        assert_eq!(
            determine_trick_winner(&trick, Some(Suit::Spades)),
            Some(Seat(2))
        );
    }
}

#[test]
fn full_round_produces_a_record() {
    let deck = Deck::shuffled_with_seed(31337);
    let rules = HouseRules {
        batak_mandatory: true,
        bonus_trick: true,
        ..HouseRules::default()
    };
    let mut round = RoundState::deal(GameMode::Uclu, rules, &deck);

    round.place_bid(Seat(0), BidAction::Pass).unwrap();
    round.place_bid(Seat(1), BidAction::Bid(6)).unwrap();
    round.place_bid(Seat(2), BidAction::Pass).unwrap();
    round.declare_trump(Seat(1), Suit::Diamonds).unwrap();

    while let Some(seat) = round.next_to_act() {
        let moves = round.legal_moves(seat);
        let choice = *moves.iter().max_by_key(|c| c.rank).unwrap();
        round.play_card(seat, choice).unwrap();
    }

    let record = RoundRecord::capture(&round).unwrap();
    assert_eq!(record.mode, GameMode::Uclu);
    assert_eq!(record.trump, Some(Suit::Diamonds));
    assert_eq!(record.tricks_won.iter().map(|&t| u32::from(t)).sum::<u32>(), 17);
    let restored = RoundRecord::from_json(&record.to_json().unwrap()).unwrap();
    assert_eq!(restored, record);
}

#[test]
fn heads_up_auction_round_scores_by_most_tricks() {
    let deck = Deck::shuffled_with_seed(2024);
    let rules = HouseRules {
        batak_mandatory: true,
        ..HouseRules::default()
    };
    let mut round = RoundState::deal(GameMode::Tekli, rules, &deck);

    round.place_bid(Seat(0), BidAction::Bid(13)).unwrap();
    round.place_bid(Seat(1), BidAction::Pass).unwrap();
    round.declare_trump(Seat(0), Suit::Hearts).unwrap();
    assert_eq!(round.bids(), vec![BidState::Bid(13), BidState::Passed]);

    while let Some(seat) = round.next_to_act() {
        let moves = round.legal_moves(seat);
        let choice = *moves.iter().min_by_key(|c| c.rank).unwrap();
        round.play_card(seat, choice).unwrap();
    }

    // The loser of a two-seat auction always passes, so the contract never scores.
    let result = round.score().unwrap();
    let (first, second) = (round.tricks_won(Seat(0)), round.tricks_won(Seat(1)));
    assert_eq!(u32::from(first) + u32::from(second), 26);
    assert!(result.batak_seats.is_empty());
    let expected = match first.cmp(&second) {
        std::cmp::Ordering::Greater => vec![i32::from(first) * 10, 0],
        std::cmp::Ordering::Less => vec![0, i32::from(second) * 10],
        std::cmp::Ordering::Equal => vec![0, 0],
    };
    assert_eq!(result.scores, expected);
}
