use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::board::Board;
use super::card::{Card, Suit};
use super::pile::PileId;

impl Board {
    /// Deals a fresh game: a seeded shuffle of the full deck, dealt
    /// round-robin across the eight columns, every card face up.
    pub fn new_with_seed(seed: u64) -> Self {
        let mut deck = full_deck();
        let mut rng = StdRng::seed_from_u64(seed);
        deck.shuffle(&mut rng);

        let mut board = Board::empty();
        for (idx, mut card) in deck.into_iter().enumerate() {
            card.flip();
            board.place_card(PileId::Column(idx % 8), card);
        }
        board
    }
}

pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(52);
    for suit in Suit::ALL {
        for rank in 1..=13 {
            deck.push(Card {
                suit,
                rank,
                face_up: false,
            });
        }
    }
    deck
}
