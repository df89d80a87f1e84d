//! Rules engine for a FreeCell-family patience game.
//!
//! The crate decides which card transfers are legal (including the
//! supermove capacity rule for multi-card blocks), performs them, keeps a
//! LIFO history log so they can be undone, promotes safe cards to the
//! foundations automatically and tracks win/loss statistics. Rendering,
//! input handling and persistence are external collaborators that drive
//! the engine through [`Session`].

pub mod engine;
pub mod game;

pub use engine::{DropOutcome, MoveRecord, MovedUnit, Session, Statistics};
pub use game::{rank_label, Block, Board, Card, EngineError, Pile, PileId, PileKind, Suit};
