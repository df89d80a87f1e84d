//! Pure game state and rules: cards, piles, the board and its counters,
//! lifted blocks and the deal. Nothing here knows about sessions, history
//! or statistics; that orchestration lives in [`crate::engine`].

use std::fmt;

pub mod block;
pub mod board;
pub mod card;
pub mod deal;
pub mod pile;


pub use block::Block;
pub use board::Board;
pub use card::{Card, Suit};
pub use deal::full_deck;
pub use pile::{Pile, PileId, PileKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    IllegalMove,
    EmptyPileAccess,
    CorruptHistory,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            EngineError::IllegalMove => "move violates placement or pick-up rules",
            EngineError::EmptyPileAccess => "pile access out of range",
            EngineError::CorruptHistory => "history log cannot be unwound",
        };
        f.write_str(text)
    }
}

impl std::error::Error for EngineError {}

pub fn rank_label(rank: u8) -> &'static str {
    match rank {
        1 => "A",
        2 => "2",
        3 => "3",
        4 => "4",
        5 => "5",
        6 => "6",
        7 => "7",
        8 => "8",
        9 => "9",
        10 => "10",
        11 => "J",
        12 => "Q",
        13 => "K",
        _ => "?",
    }
}
