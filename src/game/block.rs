use super::board::Board;
use super::card::Card;
use super::pile::PileId;

/// A selection lifted off the table: a single card from a holding cell or
/// column, or a contiguous top-of-column run. The cards live inside the
/// block until it is dropped or returned to its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    source: PileId,
    cards: Vec<Card>,
}

impl Block {
    pub(crate) fn new(source: PileId, cards: Vec<Card>) -> Self {
        debug_assert!(!cards.is_empty());
        debug_assert!(cards.len() == 1 || is_descending_alternating_run(&cards));
        Self { source, cards }
    }

    pub fn source(&self) -> PileId {
        self.source
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The card that would touch the destination pile.
    pub fn bottom(&self) -> &Card {
        &self.cards[0]
    }

    pub(crate) fn into_cards(self) -> Vec<Card> {
        self.cards
    }

    /// Drop legality at `dst`, evaluated against the board as it stands at
    /// the moment of the drop. Multi-card blocks only ever land on columns,
    /// and only within the supermove capacity; capacity is never cached
    /// because emptiness can change between pick-up and drop.
    pub fn can_place_on(&self, board: &Board, dst: PileId) -> bool {
        if self.cards.len() == 1 {
            return board.can_accept_top(dst, &self.cards[0]);
        }
        let (PileId::Column(src), PileId::Column(dst_col)) = (self.source, dst) else {
            return false;
        };
        if self.cards.len() > board.block_capacity(src, dst_col) {
            return false;
        }
        board.can_accept_top(dst, &self.cards[0])
    }
}

pub(crate) fn is_descending_alternating_run(cards: &[Card]) -> bool {
    cards
        .windows(2)
        .all(|pair| pair[1].cascade_adjacent(&pair[0]))
}
